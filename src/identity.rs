use super::types::{IdentityRecord, Section};

impl IdentityRecord {
    /// Overwrite the browser identity with `name`/`version` and clear the
    /// engine, OS and localization fields.
    ///
    /// The `mozilla` marker is only cleared when `bot` is false: bots keep
    /// the compatibility token they are impersonating.
    pub fn set_simple(&mut self, name: &str, version: &str, bot: bool) {
        self.bot = bot;
        if !bot {
            self.mozilla.clear();
        }
        self.browser.name = name.to_owned();
        self.browser.version = version.to_owned();
        self.browser.engine.clear();
        self.browser.engine_version.clear();
        self.os.clear();
        self.localization.clear();
    }

    /// Use the first section as the browser identity. Does nothing on an
    /// empty section list.
    ///
    /// Never called by the classifier itself; callers decide whether to apply
    /// it after [`Classifier::check_bot`](crate::Classifier::check_bot)
    /// returns false.
    pub fn fix_other(&mut self, sections: &[Section]) {
        if let Some(first) = sections.first() {
            self.browser.name = first.name.clone();
            self.browser.version = first.version.clone();
            self.mozilla.clear();
        }
    }

    /// Google and Bing mobile crawlers look like regular mobile browsers, so
    /// the platform is dropped and the OS decision deferred.
    ///
    /// Returns the `undecided` flag, which may already have been set.
    pub fn google_or_bing_bot(&mut self) -> bool {
        if self.raw_header.contains("Google") || self.raw_header.contains("bingbot") {
            self.platform.clear();
            self.undecided = true;
        }
        self.undecided
    }

    /// iMessage link previews don't advertise themselves but impersonate both
    /// the Facebook and the Twitter crawler at once.
    ///
    /// Mobile/desktop is left alone: the client runs on iOS and macOS.
    pub fn imessage_preview(&mut self) -> bool {
        if !self.raw_header.contains("facebookexternalhit") {
            return false;
        }
        if !self.raw_header.contains("Twitterbot") {
            return false;
        }
        self.bot = true;
        self.browser.name = "iMessage-Preview".to_owned();
        self.browser.engine.clear();
        self.browser.engine_version.clear();
        true
    }
}
