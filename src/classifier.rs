use std::borrow::Cow;

use tracing::trace;

use crate::registry::BadBotRegistry;
use crate::site::get_from_site;
use crate::types::{BotMatch, IdentityRecord, Section};

/// Decides whether a tokenized User-Agent comes from a bot.
///
/// Holds no state of its own besides the bad bot list, so one classifier can
/// be shared across threads and applied to any number of records.
#[derive(Debug, Clone, Copy)]
pub struct Classifier<'r> {
    registry: &'r BadBotRegistry,
}

impl Classifier<'static> {
    /// Classifier bound to [`BadBotRegistry::global`].
    pub fn global() -> Self {
        Self::new(BadBotRegistry::global())
    }
}

impl<'r> Classifier<'r> {
    pub fn new(registry: &'r BadBotRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &'r BadBotRegistry {
        self.registry
    }

    /// Check whether `sections` describe a bot. On a match the browser
    /// identity of `record` is replaced by the bot's and true is returned;
    /// otherwise `record` is left untouched.
    pub fn check_bot(&self, sections: &[Section], record: &mut IdentityRecord) -> bool {
        match self.detect(sections) {
            Some(bot) => {
                record.set_simple(&bot.name, &bot.version, true);
                true
            }
            None => false,
        }
    }

    /// Run the bot heuristics over `sections` without touching any record.
    ///
    /// A lone section not named `Mozilla` is a bare product token such as
    /// `curl/8.0`; everything else goes through the per-section rules.
    pub fn detect<'s>(&self, sections: &'s [Section]) -> Option<BotMatch<'s>> {
        match sections {
            [only] if !only.is_mozilla() => self.detect_single(only),
            _ => sections.iter().find_map(|s| self.detect_in_section(s)),
        }
    }

    fn detect_single<'s>(&self, section: &'s Section) -> Option<BotMatch<'s>> {
        if self.registry.is_known_bad_bot(&section.name) {
            trace!(name = %section.name, "bad bot product name");
            return Some(BotMatch::new(section.name.as_str(), ""));
        }

        if let Some(site) = get_from_site(&section.comment) {
            trace!(name = %section.name, site, "product with site reference");
            return Some(BotMatch::new(section.name.as_str(), section.version.as_str()));
        }

        None
    }

    fn detect_in_section<'s>(&self, section: &'s Section) -> Option<BotMatch<'s>> {
        let from_comment = section
            .comment
            .iter()
            .find_map(|c| self.registry.match_with_version(c));
        if let Some(bot) = from_comment {
            trace!(name = %bot.name, version = %bot.version, "bad bot in comment");
            return Some(bot);
        }

        if let Some(candidate) = get_from_site(&section.comment) {
            trace!(candidate, "bot named next to site reference");
            return Some(BotMatch::from_candidate(candidate));
        }

        if self.registry.is_known_bad_bot(&section.name) {
            trace!(name = %section.name, "bad bot section name");
            return Some(BotMatch {
                name: Cow::Borrowed(&section.name),
                version: Cow::Borrowed(&section.version),
            });
        }

        None
    }
}
