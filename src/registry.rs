use std::borrow::Cow;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use aho_corasick::{AhoCorasick, MatchKind};
use tracing::{debug, warn};

use crate::db;
use crate::error::Result;
use crate::types::BotMatch;

/// Environment variable overriding the location of the global bad bot list.
pub const BAD_BOTS_PATH_ENV: &str = "UA_BAD_BOTS_PATH";

/// Location of the global bad bot list when the environment doesn't say
/// otherwise, relative to the working directory.
pub const DEFAULT_BAD_BOTS_PATH: &str = "bad_bots.yaml";

static GLOBAL: OnceLock<BadBotRegistry> = OnceLock::new();

/// Ordered list of bad bot identifiers, matched ASCII case-insensitively.
///
/// The list is immutable once built. Matching goes through a single
/// Aho-Corasick automaton compiled over every identifier.
#[derive(Debug, Clone, Default)]
pub struct BadBotRegistry {
    identifiers: Vec<String>,
    /// `None` when there are no identifiers.
    automaton: Option<AhoCorasick>,
}

impl BadBotRegistry {
    /// Build a registry from identifiers in priority order. Blank identifiers
    /// are skipped since they would match any input.
    pub fn from_identifiers<I, S>(identifiers: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let identifiers: Vec<String> = identifiers
            .into_iter()
            .map(Into::into)
            .filter(|id| !id.trim().is_empty())
            .collect();

        if identifiers.is_empty() {
            return Ok(Self::default());
        }

        // Standard semantics are required for overlapping search.
        let automaton = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .match_kind(MatchKind::Standard)
            .build(&identifiers)?;

        Ok(Self {
            identifiers,
            automaton: Some(automaton),
        })
    }

    /// Build a registry from the YAML bad bot list format.
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        Self::from_identifiers(db::parse_bad_bots(content)?)
    }

    /// Load a registry from a YAML bad bot list on disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let registry = Self::from_identifiers(db::load_bad_bots(path)?)?;
        debug!(
            path = %path.display(),
            identifiers = registry.len(),
            "loaded bad bot list"
        );
        Ok(registry)
    }

    /// Process-wide registry, loaded on first use from [`BAD_BOTS_PATH_ENV`]
    /// or [`DEFAULT_BAD_BOTS_PATH`].
    ///
    /// Concurrent first callers wait for a single load. A list that can't be
    /// loaded yields an empty registry: bots go undetected but classification
    /// keeps working.
    pub fn global() -> &'static BadBotRegistry {
        GLOBAL.get_or_init(|| Self::load_or_empty(&default_path()))
    }

    /// Install `registry` as the process-wide registry. Fails, handing the
    /// registry back, once [`global`](Self::global) has been initialized.
    pub fn install_global(registry: BadBotRegistry) -> std::result::Result<(), BadBotRegistry> {
        GLOBAL.set(registry)
    }

    fn load_or_empty(path: &Path) -> Self {
        match Self::from_path(path) {
            Ok(registry) => registry,
            Err(err) => {
                warn!(
                    path = %path.display(),
                    error = %err,
                    "failed to load bad bot list, bot detection by name is disabled"
                );
                Self::default()
            }
        }
    }

    pub fn identifiers(&self) -> &[String] {
        &self.identifiers
    }

    pub fn len(&self) -> usize {
        self.identifiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.identifiers.is_empty()
    }

    /// Whether `s` contains any identifier, ignoring ASCII case.
    pub fn is_known_bad_bot(&self, s: &str) -> bool {
        self.automaton.as_ref().is_some_and(|ac| ac.is_match(s))
    }

    /// Find the first identifier, in list order, occurring anywhere in the
    /// comment field `c`, and extract the bot name and version from it.
    ///
    /// Priority goes to list order, not to the position in `c`. The name keeps
    /// the casing found in `c`. The version is whatever follows the first `/`
    /// after the match, cut at the first space or `;`.
    pub fn match_with_version<'a>(&self, c: &'a str) -> Option<BotMatch<'a>> {
        let ac = self.automaton.as_ref()?;

        // (identifier index, start, end) of the leftmost occurrence of the
        // highest priority identifier. Matches of one identifier are reported
        // left to right since they all share its length.
        let mut best: Option<(usize, usize, usize)> = None;
        for m in ac.find_overlapping_iter(c) {
            let id = m.pattern().as_usize();
            if best.map_or(true, |(best_id, _, _)| id < best_id) {
                best = Some((id, m.start(), m.end()));
                if id == 0 {
                    break;
                }
            }
        }

        let (_, start, end) = best?;
        let name = &c[start..end];
        let version = c[end..]
            .split_once('/')
            .map(|(_, rest)| rest.split([' ', ';']).next().unwrap_or(""))
            .unwrap_or("");

        Some(BotMatch {
            name: Cow::Borrowed(name),
            version: Cow::Borrowed(version),
        })
    }
}

fn default_path() -> PathBuf {
    std::env::var_os(BAD_BOTS_PATH_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_BAD_BOTS_PATH))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry(ids: &[&str]) -> BadBotRegistry {
        BadBotRegistry::from_identifiers(ids.iter().copied()).unwrap()
    }

    #[test]
    fn containment_ignores_case() {
        let r = registry(&["gptbot", "AhrefsBot"]);
        assert!(r.is_known_bad_bot("GPTBot"));
        assert!(r.is_known_bad_bot("Mozilla/5.0 AHREFSBOT/7.0"));
        assert!(r.is_known_bad_bot("xgptbotx"));
        assert!(!r.is_known_bad_bot("Googlebot"));
    }

    #[test]
    fn empty_registry_matches_nothing() {
        let r = BadBotRegistry::default();
        assert!(r.is_empty());
        assert!(!r.is_known_bad_bot("GPTBot"));
        assert_eq!(r.match_with_version("GPTBot/1.0"), None);
    }

    #[test]
    fn blank_identifiers_are_dropped() {
        let r = registry(&["", "  ", "mj12bot"]);
        assert_eq!(r.identifiers(), &["mj12bot".to_string()]);
        assert!(!r.is_known_bad_bot("Firefox"));
    }

    #[test]
    fn version_cut_at_semicolon() {
        let r = registry(&["xbot"]);
        let m = r.match_with_version("xbot/1.2.3;foo").unwrap();
        assert_eq!(m.name, "xbot");
        assert_eq!(m.version, "1.2.3");
    }

    #[test]
    fn version_cut_at_space() {
        let r = registry(&["xbot"]);
        let m = r.match_with_version("xbot/2.0 extra").unwrap();
        assert_eq!(m.version, "2.0");
    }

    #[test]
    fn no_slash_means_empty_version() {
        let r = registry(&["xbot"]);
        let m = r.match_with_version("xbot").unwrap();
        assert_eq!(m.name, "xbot");
        assert_eq!(m.version, "");
    }

    #[test]
    fn name_keeps_original_case() {
        let r = registry(&["gptbot"]);
        let m = r.match_with_version("GPTBot/1.1").unwrap();
        assert_eq!(m.name, "GPTBot");
        assert_eq!(m.version, "1.1");
    }

    #[test]
    fn match_in_middle_of_field() {
        let r = registry(&["semrushbot"]);
        let m = r
            .match_with_version("compatible SemrushBot/7~bl; +http://www.semrush.com/bot.html")
            .unwrap();
        assert_eq!(m.name, "SemrushBot");
        assert_eq!(m.version, "7~bl");
    }

    #[test]
    fn list_order_wins_over_position() {
        let r = registry(&["zbot", "abot"]);
        let m = r.match_with_version("abot/1 zbot/2").unwrap();
        assert_eq!(m.name, "zbot");
        assert_eq!(m.version, "2");
    }

    #[test]
    fn leftmost_occurrence_of_identifier() {
        let r = registry(&["other", "crawl"]);
        let m = r.match_with_version("Crawl/1 crawl/2").unwrap();
        assert_eq!(m.name, "Crawl");
        assert_eq!(m.version, "1");
    }

    #[test]
    fn overlapping_identifiers_follow_list_order() {
        let r = registry(&["bot", "mj12bot"]);
        let m = r.match_with_version("MJ12bot/v1.4.8").unwrap();
        assert_eq!(m.name, "bot");
        assert_eq!(m.version, "v1.4.8");

        let r = registry(&["mj12bot", "bot"]);
        let m = r.match_with_version("MJ12bot/v1.4.8").unwrap();
        assert_eq!(m.name, "MJ12bot");
    }

    #[test]
    fn no_match_is_none() {
        let r = registry(&["gptbot"]);
        assert_eq!(r.match_with_version("compatible"), None);
    }

    #[test]
    fn from_yaml() {
        let r = BadBotRegistry::from_yaml_str(
            "nginx_bad_agents_default:\n  - GPTBot\n  - Bytespider\n",
        )
        .unwrap();
        assert_eq!(r.len(), 2);
        assert!(r.is_known_bad_bot("bytespider"));
    }

    #[test]
    fn unreadable_list_fails_open() {
        let r = BadBotRegistry::load_or_empty(Path::new("does/not/exist/bad_bots.yaml"));
        assert!(r.is_empty());
    }
}
