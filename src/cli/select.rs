use std::path::PathBuf;

use clap::{Args as ClapArgs, ValueEnum};
use log::debug;
use serde::Serialize;

use crate::config::Catalog;
use crate::error::Result;
use crate::selector::{
    Attribute, DEFAULT_SEPARATOR, Item, OptionOverrides, Selector, SelectorOptions,
};
use crate::utils::{TemplateFields, render_template};

use super::context::CliContext;

#[derive(ClapArgs, Debug, Clone)]
pub struct SelectArgs {
    /// Items to choose from (their text is also the item data)
    #[arg(value_name = "ITEM", conflicts_with = "catalog")]
    pub items: Vec<String>,

    /// Load items and options from a TOML or JSON catalog
    #[arg(short = 'c', long, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Maximum number of selections (0 for unlimited)
    #[arg(short = 'n', long, allow_negative_numbers = true)]
    pub limit: Option<i64>,

    #[command(flatten)]
    pub options: OptionFlags,

    /// How to print the selection
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Display)]
    pub format: OutputFormat,

    /// Separator between entries (\n and \t are expanded)
    #[arg(
        short = 's',
        long,
        default_value = DEFAULT_SEPARATOR,
        allow_hyphen_values = true
    )]
    pub separator: String,

    /// Per-entry template using {count}, {name}, {display}, {attribute}, {prefix}, {suffix}
    #[arg(short = 't', long, conflicts_with = "format", allow_hyphen_values = true)]
    pub template: Option<String>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Chosen display strings
    Display,
    /// "{count}x {name}" entries
    Count,
    /// Names wrapped in their attribute's prefix and suffix
    Attribute,
    /// Formatted names recorded during the session
    Formatted,
    /// Full selection report as JSON
    Json,
}

/// Command-line overrides for the selector options.
#[derive(ClapArgs, Debug, Clone, Default)]
pub struct OptionFlags {
    /// Do not offer the "finished" entry
    #[arg(long)]
    pub hide_finished: bool,
    /// Label of the "finished" entry
    #[arg(long, value_name = "LABEL")]
    pub finished_name: Option<String>,
    /// Offer an "other" entry for free-text items
    #[arg(long)]
    pub show_other: bool,
    /// Label of the "other" entry
    #[arg(long, value_name = "LABEL")]
    pub other_name: Option<String>,
    /// Noun used in selection prompts
    #[arg(long, value_name = "NOUN")]
    pub item_type: Option<String>,
    /// Article used in selection prompts
    #[arg(long, value_name = "ARTICLE")]
    pub article: Option<String>,
    /// Keep chosen items available for further rounds
    #[arg(long)]
    pub keep_selected: bool,
    /// Ask for a count after each selection
    #[arg(long)]
    pub ask_count: bool,
    /// Noun used in count prompts
    #[arg(long, value_name = "NOUN")]
    pub count_name: Option<String>,
    /// Offset added to the ordinal shown in prompts
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub count_offset: Option<i64>,
    /// Hide the ordinal in selection prompts
    #[arg(long)]
    pub hide_count: bool,
    /// Ask for an attribute after each selection
    #[arg(long)]
    pub ask_attributes: bool,
    /// Attribute choice as NAME,PREFIX,SUFFIX (repeatable)
    #[arg(long = "attribute", value_name = "NAME,PREFIX,SUFFIX", value_parser = parse_attribute)]
    pub attributes: Vec<Attribute>,
    /// Fallback attribute as NAME,PREFIX,SUFFIX
    #[arg(long, value_name = "NAME,PREFIX,SUFFIX", value_parser = parse_attribute)]
    pub default_attribute: Option<Attribute>,
    /// Noun used in attribute prompts
    #[arg(long, value_name = "NOUN")]
    pub attribute_name: Option<String>,
    /// Article used in attribute prompts
    #[arg(long, value_name = "ARTICLE")]
    pub attribute_article: Option<String>,
}

impl OptionFlags {
    pub fn to_overrides(&self) -> OptionOverrides {
        OptionOverrides {
            show_finished: self.hide_finished.then_some(false),
            finished_name: self.finished_name.clone(),
            show_other: self.show_other.then_some(true),
            other_name: self.other_name.clone(),
            item_type: self.item_type.clone(),
            item_type_article: self.article.clone(),
            keep_selected_items: self.keep_selected.then_some(true),
            ask_for_count: self.ask_count.then_some(true),
            count_offset: self.count_offset,
            count_name: self.count_name.clone(),
            count_shown: self.hide_count.then_some(false),
            ask_for_attributes: self.ask_attributes.then_some(true),
            attribute_list: (!self.attributes.is_empty()).then(|| self.attributes.clone()),
            default_attribute: self.default_attribute.clone(),
            attribute_name: self.attribute_name.clone(),
            attribute_article: self.attribute_article.clone(),
        }
    }
}

fn parse_attribute(value: &str) -> std::result::Result<Attribute, String> {
    let mut parts = value.splitn(3, ',');
    let name = parts.next().unwrap_or_default().trim();
    if name.is_empty() {
        return Err("attribute name cannot be empty".to_string());
    }
    Ok(Attribute::new(
        name,
        parts.next().unwrap_or_default(),
        parts.next().unwrap_or_default(),
    ))
}

pub async fn execute(args: &SelectArgs, ctx: &mut CliContext) -> Result<()> {
    let (display, data, catalog_limit, catalog_layer) = match args.catalog.as_deref() {
        Some(path) => {
            let catalog = Catalog::load(path)?;
            debug!("loaded {} item(s) from {}", catalog.items.len(), path.display());
            let layer = catalog.option_layer(path);
            (
                catalog.display_list(),
                Some(catalog.items),
                catalog.limit,
                Some(layer),
            )
        }
        None => (args.items.clone(), None, None, None),
    };

    let resolved = ctx.resolve_options(catalog_layer, args.options.to_overrides())?;
    let limit = args.limit.or(catalog_limit);

    let selector = Selector::select(ctx.prompt_mut(), display, data, limit, resolved.options).await?;
    println!("{}", render(&selector, args)?);
    Ok(())
}

/// Render a finished selection according to the output flags.
pub fn render(selector: &Selector, args: &SelectArgs) -> Result<String> {
    let separator = unescape(&args.separator);

    if let Some(template) = args.template.as_deref() {
        let entries: Vec<String> = selector
            .selections()
            .map(|selection| {
                let name = selection.name();
                render_template(
                    template,
                    &TemplateFields {
                        count: selection.count,
                        name: &name,
                        display: selection.display.unwrap_or_default(),
                        attribute: &selection.attribute.name,
                        prefix: &selection.attribute.prefix,
                        suffix: &selection.attribute.suffix,
                    },
                )
            })
            .collect();
        return Ok(entries.join(&separator));
    }

    let output = match args.format {
        OutputFormat::Display => selector
            .selected_display()
            .iter()
            .map(|display| display.as_deref().unwrap_or_default())
            .collect::<Vec<_>>()
            .join(&separator),
        OutputFormat::Count => selector.join_with_count(&separator),
        OutputFormat::Attribute => selector.join_with_attribute(&separator),
        OutputFormat::Formatted => selector.formatted_display().join(&separator),
        OutputFormat::Json => serde_json::to_string_pretty(&SelectionReport::from(selector))?,
    };
    Ok(output)
}

fn unescape(separator: &str) -> String {
    separator.replace("\\n", "\n").replace("\\t", "\t")
}

/// Machine-readable view of a finished selection.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionReport<'a> {
    pub selected_display: &'a [Option<String>],
    pub selected_data: &'a [Option<Item>],
    pub item_count_list: &'a [i64],
    pub item_attribute_list: &'a [Attribute],
    pub formatted_display: &'a [String],
    pub total_item_count: i64,
    pub remaining_display: &'a [String],
    pub remaining_data: &'a [Item],
    pub original_display: &'a [String],
    pub original_data: &'a [Item],
    pub options: &'a SelectorOptions,
}

impl<'a> From<&'a Selector> for SelectionReport<'a> {
    fn from(selector: &'a Selector) -> Self {
        Self {
            selected_display: selector.selected_display(),
            selected_data: selector.selected_data(),
            item_count_list: selector.item_counts(),
            item_attribute_list: selector.item_attributes(),
            formatted_display: selector.formatted_display(),
            total_item_count: selector.total_item_count(),
            remaining_display: selector.remaining_display(),
            remaining_data: selector.remaining_data(),
            original_display: selector.original_display(),
            original_data: selector.original_data(),
            options: selector.options(),
        }
    }
}
