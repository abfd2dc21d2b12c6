use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use super::attribute::Attribute;

/// One candidate entry offered to the operator.
///
/// Catalog files may spell an item as a bare value (`"Sword"`, `3`), a
/// sequence whose first element is its name (`["Sword", 12]`), or a table
/// carrying per-item overrides. Every table is read as a record, so a
/// malformed override is reported instead of being kept as a plain value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Item {
    Sequence(Vec<Value>),
    Record(ItemRecord),
    Value(Value),
}

impl<'de> Deserialize<'de> for Item {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::Array(values) => Ok(Item::Sequence(values)),
            Value::Object(map) => ItemRecord::deserialize(Value::Object(map))
                .map(Item::Record)
                .map_err(|err| D::Error::custom(format!("invalid item record: {err}"))),
            value => Ok(Item::Value(value)),
        }
    }
}

/// Per-item overrides; any field left unset falls back to the global options.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(
        default,
        alias = "keepWhenSelected",
        skip_serializing_if = "Option::is_none"
    )]
    pub keep_when_selected: Option<bool>,
    #[serde(default, alias = "askForCount", skip_serializing_if = "Option::is_none")]
    pub ask_for_count: Option<bool>,
    #[serde(
        default,
        alias = "askForAttributes",
        skip_serializing_if = "Option::is_none"
    )]
    pub ask_for_attributes: Option<bool>,
    #[serde(
        default,
        alias = "attributeList",
        skip_serializing_if = "Option::is_none"
    )]
    pub attribute_list: Option<Vec<Attribute>>,
    #[serde(
        default,
        alias = "defaultAttribute",
        skip_serializing_if = "Option::is_none"
    )]
    pub default_attribute: Option<Attribute>,
    /// Caller payload carried through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ItemRecord {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    pub fn keep_when_selected(mut self, keep: bool) -> Self {
        self.keep_when_selected = Some(keep);
        self
    }

    pub fn ask_for_count(mut self, ask: bool) -> Self {
        self.ask_for_count = Some(ask);
        self
    }

    pub fn ask_for_attributes(mut self, ask: bool) -> Self {
        self.ask_for_attributes = Some(ask);
        self
    }

    pub fn attribute_list(mut self, attributes: Vec<Attribute>) -> Self {
        self.attribute_list = Some(attributes);
        self
    }

    pub fn default_attribute(mut self, attribute: Attribute) -> Self {
        self.default_attribute = Some(attribute);
        self
    }
}

impl Item {
    pub fn text(value: impl Into<String>) -> Self {
        Item::Value(Value::String(value.into()))
    }

    pub fn record(&self) -> Option<&ItemRecord> {
        match self {
            Item::Record(record) => Some(record),
            _ => None,
        }
    }

    /// Name used in formatted output: the record's `name`, else the first
    /// element of a sequence, else the value itself as text.
    pub fn name(&self) -> String {
        match self {
            Item::Record(ItemRecord {
                name: Some(name), ..
            }) => name.clone(),
            Item::Record(record) => serde_json::to_string(record).unwrap_or_default(),
            Item::Sequence(values) => values.first().map(value_text).unwrap_or_default(),
            Item::Value(value) => value_text(value),
        }
    }
}

impl From<&str> for Item {
    fn from(value: &str) -> Self {
        Item::text(value)
    }
}

impl From<String> for Item {
    fn from(value: String) -> Self {
        Item::text(value)
    }
}

impl From<ItemRecord> for Item {
    fn from(record: ItemRecord) -> Self {
        Item::Record(record)
    }
}

fn value_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
