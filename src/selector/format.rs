use super::Selector;
use super::attribute::Attribute;

pub const DEFAULT_SEPARATOR: &str = ", ";

impl Selector {
    /// Join the selection as `"{count}x {name}"` entries.
    pub fn join_with_count(&self, separator: &str) -> String {
        self.join_with_count_by(separator, |count, name| format!("{count}x {name}"))
    }

    /// Join the selection, rendering each entry with `format(count, name)`.
    pub fn join_with_count_by<F>(&self, separator: &str, mut format: F) -> String
    where
        F: FnMut(i64, &str) -> String,
    {
        self.selections()
            .map(|selection| format(selection.count, &selection.name()))
            .collect::<Vec<_>>()
            .join(separator)
    }

    /// Join the selection with each name wrapped in its attribute's prefix
    /// and suffix.
    pub fn join_with_attribute(&self, separator: &str) -> String {
        self.join_with_attribute_by(separator, |_, name, attribute| attribute.apply(name))
    }

    /// Join the selection, rendering each entry with
    /// `format(count, name, attribute)`.
    pub fn join_with_attribute_by<F>(&self, separator: &str, mut format: F) -> String
    where
        F: FnMut(i64, &str, &Attribute) -> String,
    {
        self.selections()
            .map(|selection| format(selection.count, &selection.name(), selection.attribute))
            .collect::<Vec<_>>()
            .join(separator)
    }
}
