use serde::{Deserialize, Serialize};

/// A named decoration applied around an item's name in formatted output.
///
/// Serialized as the tuple `[name, prefix, suffix]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(String, String, String)", into = "(String, String, String)")]
pub struct Attribute {
    pub name: String,
    pub prefix: String,
    pub suffix: String,
}

impl Attribute {
    pub fn new(
        name: impl Into<String>,
        prefix: impl Into<String>,
        suffix: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            prefix: prefix.into(),
            suffix: suffix.into(),
        }
    }

    /// Wrap `name` in this attribute's prefix and suffix.
    pub fn apply(&self, name: &str) -> String {
        format!("{}{}{}", self.prefix, name, self.suffix)
    }
}

impl Default for Attribute {
    fn default() -> Self {
        Self::new("none", "", "")
    }
}

impl From<(String, String, String)> for Attribute {
    fn from((name, prefix, suffix): (String, String, String)) -> Self {
        Self {
            name,
            prefix,
            suffix,
        }
    }
}

impl From<Attribute> for (String, String, String) {
    fn from(attribute: Attribute) -> Self {
        (attribute.name, attribute.prefix, attribute.suffix)
    }
}
