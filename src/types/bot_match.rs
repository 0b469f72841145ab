use std::borrow::Cow;

/// Outcome of a single bot heuristic that fired.
///
/// Heuristics return `Option<BotMatch>`: `None` means the rule did not apply,
/// while a match with an empty `version` is still a match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BotMatch<'a> {
    pub name: Cow<'a, str>,
    pub version: Cow<'a, str>,
}

impl<'a> BotMatch<'a> {
    pub fn new(name: impl Into<Cow<'a, str>>, version: impl Into<Cow<'a, str>>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }

    /// Split a `name/version` candidate on its first `/`. Without a `/` the
    /// whole candidate is the name and the version is empty.
    pub fn from_candidate(candidate: &'a str) -> Self {
        match candidate.split_once('/') {
            Some((name, version)) => Self::new(name, version),
            None => Self::new(candidate, ""),
        }
    }
}
