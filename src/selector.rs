//! Interactive multi-round item selection.
//!
//! [`Selector::select`] drives a prompt loop against a [`SelectorUi`]: each
//! round the operator picks one remaining item (or a sentinel), optionally
//! enters a count and an attribute for it, and the choice is appended to the
//! output lists. The finished selector is read-only.

pub mod attribute;
mod format;
pub mod item;
pub mod options;
pub mod ui;


pub use self::attribute::Attribute;
pub use self::format::DEFAULT_SEPARATOR;
pub use self::item::{Item, ItemRecord};
pub use self::options::{ItemSettings, OptionOverrides, SelectorOptions};
pub use self::ui::{Choice, ItemId, SelectorUi};

use crate::error::{Error, Result};
use crate::utils::{excise, format_ordinal};
use log::debug;

/// Accumulated result of one selection session.
#[derive(Debug, Clone)]
pub struct Selector {
    options: SelectorOptions,
    limit: Option<usize>,

    original_display: Vec<String>,
    original_data: Vec<Item>,

    // Kept in lock-step: index i of each list describes the same item.
    remaining_display: Vec<String>,
    remaining_data: Vec<Item>,
    remaining_ids: Vec<ItemId>,

    selected_display: Vec<Option<String>>,
    selected_data: Vec<Option<Item>>,
    item_counts: Vec<i64>,
    item_attributes: Vec<Attribute>,
    formatted_display: Vec<String>,
    total_item_count: i64,
}

/// One confirmed selection, borrowed from a finished [`Selector`].
#[derive(Debug, Clone, Copy)]
pub struct Selection<'a> {
    /// `None` when the free-text prompt for an "other" entry was cancelled.
    pub display: Option<&'a str>,
    pub data: Option<&'a Item>,
    pub count: i64,
    pub attribute: &'a Attribute,
    pub formatted: &'a str,
}

impl Selection<'_> {
    pub fn name(&self) -> String {
        self.data.map(Item::name).unwrap_or_default()
    }
}

impl Selector {
    fn new(
        display: Vec<String>,
        data: Vec<Item>,
        limit: Option<usize>,
        options: SelectorOptions,
    ) -> Self {
        let remaining_ids = (1..=data.len()).map(ItemId).collect();
        Self {
            options,
            limit,
            original_display: display.clone(),
            original_data: data.clone(),
            remaining_display: display,
            remaining_data: data,
            remaining_ids,
            selected_display: Vec::new(),
            selected_data: Vec::new(),
            item_counts: Vec::new(),
            item_attributes: Vec::new(),
            formatted_display: Vec::new(),
            total_item_count: 0,
        }
    }

    /// Run a selection session and return the finished selector.
    ///
    /// `data` defaults to the display strings. A `limit` of `None` or `0`
    /// allows any number of selections.
    ///
    /// # Errors
    /// * [`Error::MismatchedLengths`] if `display` and `data` differ in length
    /// * [`Error::InvalidLimit`] if `limit` is negative
    /// * any error returned by `ui`
    pub async fn select<U: SelectorUi>(
        ui: &mut U,
        display: Vec<String>,
        data: Option<Vec<Item>>,
        limit: Option<i64>,
        options: SelectorOptions,
    ) -> Result<Self> {
        let data = data.unwrap_or_else(|| display.iter().cloned().map(Item::text).collect());
        if display.len() != data.len() {
            return Err(Error::MismatchedLengths {
                display_len: display.len(),
                data_len: data.len(),
            });
        }

        let limit = match limit {
            None | Some(0) => None,
            Some(limit) if limit < 0 => return Err(Error::InvalidLimit { limit }),
            Some(limit) => Some(usize::try_from(limit).unwrap_or(usize::MAX)),
        };

        let mut selector = Self::new(display, data, limit, options);
        selector.run(ui).await?;
        Ok(selector)
    }

    async fn run<U: SelectorUi>(&mut self, ui: &mut U) -> Result<()> {
        while !self.limit_reached() {
            let Some((labels, choices)) = self.menu() else {
                debug!("nothing left to offer, ending selection");
                break;
            };

            let ordinal = self.ordinal_label();
            let prompt = format!(
                "Select {}{} {}",
                self.options.item_type_article, ordinal, self.options.item_type
            );

            let Some(choice) = ui.choose_one(&labels, &choices, &prompt).await? else {
                debug!("selection prompt cancelled after {} item(s)", self.selected_data.len());
                break;
            };

            let (display, data) = match choice {
                Choice::Finished => {
                    debug!("finished after {} item(s)", self.selected_data.len());
                    break;
                }
                Choice::Other => {
                    let prompt = format!(
                        "Enter the name of {}{} {}",
                        self.options.item_type_article, ordinal, self.options.item_type
                    );
                    let text = ui.prompt_text(&prompt, None).await?;
                    let data = text.clone().map(Item::text);
                    (text, data)
                }
                Choice::Item(id) => {
                    let (display, data) = self.take(id)?;
                    (Some(display), Some(data))
                }
            };

            let label = display.clone().unwrap_or_default();
            let settings = self.options.resolve(data.as_ref());

            let count = if settings.ask_for_count {
                prompt_count(ui, &self.options.count_name, &label).await?
            } else {
                1
            };

            let attribute = if settings.ask_for_attributes {
                prompt_attribute(ui, &self.options, &settings, &label).await?
            } else {
                settings.default_attribute.clone()
            };

            let name = data.as_ref().map(Item::name).unwrap_or_default();
            debug!("selected '{label}' (count {count}, attribute '{}')", attribute.name);

            self.formatted_display.push(attribute.apply(&name));
            self.selected_display.push(display);
            self.selected_data.push(data);
            self.item_counts.push(count);
            self.item_attributes.push(attribute);
        }

        self.total_item_count = self
            .item_counts
            .iter()
            .fold(0i64, |total, count| total.saturating_add(*count));
        Ok(())
    }

    fn limit_reached(&self) -> bool {
        self.limit
            .is_some_and(|limit| self.selected_data.len() >= limit)
    }

    /// Labels and choices for the next round, or `None` when nothing is left.
    fn menu(&self) -> Option<(Vec<String>, Vec<Choice>)> {
        let mut labels = Vec::with_capacity(self.remaining_display.len() + 2);
        let mut choices = Vec::with_capacity(self.remaining_ids.len() + 2);

        if self.options.show_finished {
            labels.push(self.options.finished_name.clone());
            choices.push(Choice::Finished);
        }
        labels.extend(self.remaining_display.iter().cloned());
        choices.extend(self.remaining_ids.iter().copied().map(Choice::Item));
        if self.options.show_other {
            labels.push(self.options.other_name.clone());
            choices.push(Choice::Other);
        }

        (!choices.is_empty()).then_some((labels, choices))
    }

    fn ordinal_label(&self) -> String {
        if !self.options.count_shown {
            return String::new();
        }
        let position = i64::try_from(self.selected_data.len())
            .unwrap_or(i64::MAX)
            .saturating_add(1)
            .saturating_add(self.options.count_offset);
        format!(" {}", format_ordinal(position))
    }

    /// Look up a remaining item and drop it from the pool unless it is kept.
    fn take(&mut self, id: ItemId) -> Result<(String, Item)> {
        let index = self
            .remaining_ids
            .iter()
            .position(|candidate| *candidate == id)
            .ok_or_else(|| Error::Prompt {
                message: format!("item {id} is not in the remaining list"),
            })?;

        let display = self.remaining_display[index].clone();
        let data = self.remaining_data[index].clone();

        if !self.options.resolve(Some(&data)).keep_when_selected {
            self.remaining_display = excise(&self.remaining_display, index, index + 1);
            self.remaining_data = excise(&self.remaining_data, index, index + 1);
            self.remaining_ids = excise(&self.remaining_ids, index, index + 1);
        }

        Ok((display, data))
    }

    pub fn options(&self) -> &SelectorOptions {
        &self.options
    }

    pub fn selected_display(&self) -> &[Option<String>] {
        &self.selected_display
    }

    pub fn selected_data(&self) -> &[Option<Item>] {
        &self.selected_data
    }

    pub fn item_counts(&self) -> &[i64] {
        &self.item_counts
    }

    pub fn item_attributes(&self) -> &[Attribute] {
        &self.item_attributes
    }

    pub fn formatted_display(&self) -> &[String] {
        &self.formatted_display
    }

    pub fn total_item_count(&self) -> i64 {
        self.total_item_count
    }

    pub fn remaining_display(&self) -> &[String] {
        &self.remaining_display
    }

    pub fn remaining_data(&self) -> &[Item] {
        &self.remaining_data
    }

    pub fn remaining_ids(&self) -> &[ItemId] {
        &self.remaining_ids
    }

    pub fn original_display(&self) -> &[String] {
        &self.original_display
    }

    pub fn original_data(&self) -> &[Item] {
        &self.original_data
    }

    pub fn len(&self) -> usize {
        self.selected_data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected_data.is_empty()
    }

    /// Confirmed selections in the order they were made.
    pub fn selections(&self) -> impl Iterator<Item = Selection<'_>> {
        (0..self.selected_data.len()).map(move |i| Selection {
            display: self.selected_display[i].as_deref(),
            data: self.selected_data[i].as_ref(),
            count: self.item_counts[i],
            attribute: &self.item_attributes[i],
            formatted: &self.formatted_display[i],
        })
    }
}

async fn prompt_count<U: SelectorUi>(ui: &mut U, count_name: &str, label: &str) -> Result<i64> {
    let base = format!("Enter the number of {count_name} of '{label}'");
    let mut message = base.clone();

    loop {
        let Some(answer) = ui.prompt_text(&message, Some("1")).await? else {
            return Ok(1);
        };
        if let Some(count) = parse_leading_int(&answer) {
            return Ok(count);
        }
        debug!("rejected count '{answer}' for '{label}'");
        message = format!("{base} | Please enter a valid value");
    }
}

async fn prompt_attribute<U: SelectorUi>(
    ui: &mut U,
    options: &SelectorOptions,
    settings: &ItemSettings<'_>,
    label: &str,
) -> Result<Attribute> {
    if settings.attribute_list.is_empty() {
        ui.notify(&format!(
            "There are no attributes available for '{label}'\nPlease check your options"
        ));
        return Ok(settings.default_attribute.clone());
    }

    let names: Vec<String> = settings
        .attribute_list
        .iter()
        .map(|attribute| attribute.name.clone())
        .collect();
    let prompt = format!(
        "Select {} {} for '{label}'",
        options.attribute_article, options.attribute_name
    );

    match ui.choose_one(&names, settings.attribute_list, &prompt).await? {
        Some(attribute) => Ok(attribute),
        None => {
            ui.notify(&format!("Default attribute selected for '{label}'"));
            Ok(settings.default_attribute.clone())
        }
    }
}

/// Parse an optionally signed integer prefix, ignoring leading whitespace and
/// anything after the digits ("12 cards" is 12, "x12" is rejected).
fn parse_leading_int(input: &str) -> Option<i64> {
    let trimmed = input.trim_start();
    let digits_start = usize::from(trimmed.starts_with(['+', '-']));
    let digits_len = trimmed[digits_start..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digits_len == 0 {
        return None;
    }
    trimmed[..digits_start + digits_len].parse().ok()
}
