use serde::{Deserialize, Serialize};

use super::attribute::Attribute;
use super::item::Item;

/// Global selector options. Every field has a documented default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectorOptions {
    pub show_finished: bool,
    pub finished_name: String,
    pub show_other: bool,
    pub other_name: String,
    pub item_type: String,
    pub item_type_article: String,
    pub keep_selected_items: bool,
    pub ask_for_count: bool,
    pub count_offset: i64,
    pub count_name: String,
    pub count_shown: bool,
    pub ask_for_attributes: bool,
    pub attribute_list: Vec<Attribute>,
    pub default_attribute: Attribute,
    pub attribute_name: String,
    pub attribute_article: String,
}

impl Default for SelectorOptions {
    fn default() -> Self {
        Self {
            show_finished: true,
            finished_name: "== Done ==".to_string(),
            show_other: false,
            other_name: "== Other ==".to_string(),
            item_type: "item".to_string(),
            item_type_article: "the".to_string(),
            keep_selected_items: false,
            ask_for_count: false,
            count_offset: 0,
            count_name: "copies".to_string(),
            count_shown: true,
            ask_for_attributes: false,
            attribute_list: Vec::new(),
            default_attribute: Attribute::default(),
            attribute_name: "attribute".to_string(),
            attribute_article: "an".to_string(),
        }
    }
}

/// Settings for one chosen item after per-item overrides are applied.
#[derive(Debug, Clone, Copy)]
pub struct ItemSettings<'a> {
    pub keep_when_selected: bool,
    pub ask_for_count: bool,
    pub ask_for_attributes: bool,
    pub attribute_list: &'a [Attribute],
    pub default_attribute: &'a Attribute,
}

impl SelectorOptions {
    /// Resolve the per-item toggles for `item`; fields set on an item record
    /// win over the global options. Absent data uses the globals.
    pub fn resolve<'a>(&'a self, item: Option<&'a Item>) -> ItemSettings<'a> {
        let record = item.and_then(Item::record);
        ItemSettings {
            keep_when_selected: *pick(
                record.and_then(|r| r.keep_when_selected.as_ref()),
                &self.keep_selected_items,
            ),
            ask_for_count: *pick(
                record.and_then(|r| r.ask_for_count.as_ref()),
                &self.ask_for_count,
            ),
            ask_for_attributes: *pick(
                record.and_then(|r| r.ask_for_attributes.as_ref()),
                &self.ask_for_attributes,
            ),
            attribute_list: pick(
                record.and_then(|r| r.attribute_list.as_deref()),
                self.attribute_list.as_slice(),
            ),
            default_attribute: pick(
                record.and_then(|r| r.default_attribute.as_ref()),
                &self.default_attribute,
            ),
        }
    }
}

fn pick<'a, T: ?Sized>(item_value: Option<&'a T>, global: &'a T) -> &'a T {
    item_value.unwrap_or(global)
}

/// Partial options used to layer configuration sources over the defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionOverrides {
    #[serde(default, alias = "showFinished", skip_serializing_if = "Option::is_none")]
    pub show_finished: Option<bool>,
    #[serde(default, alias = "finishedName", skip_serializing_if = "Option::is_none")]
    pub finished_name: Option<String>,
    #[serde(default, alias = "showOther", skip_serializing_if = "Option::is_none")]
    pub show_other: Option<bool>,
    #[serde(default, alias = "otherName", skip_serializing_if = "Option::is_none")]
    pub other_name: Option<String>,
    #[serde(default, alias = "itemType", skip_serializing_if = "Option::is_none")]
    pub item_type: Option<String>,
    #[serde(
        default,
        alias = "itemTypeArticle",
        skip_serializing_if = "Option::is_none"
    )]
    pub item_type_article: Option<String>,
    #[serde(
        default,
        alias = "keepSelectedItems",
        skip_serializing_if = "Option::is_none"
    )]
    pub keep_selected_items: Option<bool>,
    #[serde(default, alias = "askForCount", skip_serializing_if = "Option::is_none")]
    pub ask_for_count: Option<bool>,
    #[serde(default, alias = "countOffset", skip_serializing_if = "Option::is_none")]
    pub count_offset: Option<i64>,
    #[serde(default, alias = "countName", skip_serializing_if = "Option::is_none")]
    pub count_name: Option<String>,
    #[serde(default, alias = "countShown", skip_serializing_if = "Option::is_none")]
    pub count_shown: Option<bool>,
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
    #[serde(default, alias = "attributeName", skip_serializing_if = "Option::is_none")]
    pub attribute_name: Option<String>,
    #[serde(
        default,
        alias = "attributeArticle",
        skip_serializing_if = "Option::is_none"
    )]
    pub attribute_article: Option<String>,
}

macro_rules! apply_fields {
    ($src:expr, $dst:expr, $($field:ident),+ $(,)?) => {
        $(
            if let Some(value) = $src.$field.clone() {
                $dst.$field = value;
            }
        )+
    };
}

impl OptionOverrides {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Copy every set field onto `options`.
    pub fn apply_to(&self, options: &mut SelectorOptions) {
        apply_fields!(
            self,
            options,
            show_finished,
            finished_name,
            show_other,
            other_name,
            item_type,
            item_type_article,
            keep_selected_items,
            ask_for_count,
            count_offset,
            count_name,
            count_shown,
            ask_for_attributes,
            attribute_list,
            default_attribute,
            attribute_name,
            attribute_article,
        );
    }
}
