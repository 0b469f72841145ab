/// Browser identity attached to an [`IdentityRecord`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BrowserInfo {
    pub name: String,
    pub version: String,
    pub engine: String,
    pub engine_version: String,
}

/// Classification result for one User-Agent header.
///
/// Built by the caller per incoming header and mutated in place by the
/// classifier and the special-case detectors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdentityRecord {
    /// The raw header value.
    pub raw_header: String,
    /// Leading compatibility token, usually `Mozilla/5.0`.
    pub mozilla: String,
    pub platform: String,
    pub os: String,
    pub localization: String,
    pub bot: bool,
    /// Platform/OS resolution is deferred to an outer resolver.
    pub undecided: bool,
    pub browser: BrowserInfo,
}

impl IdentityRecord {
    pub fn new(raw_header: impl Into<String>) -> Self {
        Self {
            raw_header: raw_header.into(),
            ..Default::default()
        }
    }

    pub fn is_bot(&self) -> bool {
        self.bot
    }

    pub fn is_undecided(&self) -> bool {
        self.undecided
    }
}
