use serde::Deserialize;

/// One `product[/version] [(comment; comment; ...)]` unit of a User-Agent
/// header, as produced by the tokenizer.
///
/// Comment fields keep their original order and case.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Section {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub comment: Vec<String>,
}

impl Section {
    pub fn new<I, S>(name: impl Into<String>, version: impl Into<String>, comment: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            version: version.into(),
            comment: comment.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether this section carries the `Mozilla` compatibility token.
    pub fn is_mozilla(&self) -> bool {
        self.name == "Mozilla"
    }
}
