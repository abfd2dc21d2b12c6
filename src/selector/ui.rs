use std::fmt;

use crate::error::Result;

/// Stable identifier of a candidate item within one selection session.
///
/// Ids run from 1 to N in input order and survive removals, so two items with
/// the same display text can still be told apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(pub usize);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One entry of the per-round selection menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    /// Stop selecting.
    Finished,
    /// Enter a free-text item instead of picking one from the list.
    Other,
    Item(ItemId),
}

/// Operator-facing prompts consumed by the selector.
///
/// A `None` result means the operator cancelled that prompt. The returned
/// futures carry no `Send` bound; the selector awaits them on the caller's task.
#[allow(async_fn_in_trait)]
pub trait SelectorUi {
    /// Show `labels` and return the value paired with the chosen label.
    ///
    /// `labels` and `values` always have the same length.
    async fn choose_one<T: Clone>(
        &mut self,
        labels: &[String],
        values: &[T],
        prompt: &str,
    ) -> Result<Option<T>>;

    /// Ask for free text, optionally pre-filled with `default`.
    async fn prompt_text(&mut self, prompt: &str, default: Option<&str>)
    -> Result<Option<String>>;

    /// Show a message without waiting for a response.
    fn notify(&mut self, message: &str);
}
