//! Small formatting and sequence helpers shared by the selector and the CLI.

/// Format `n` as an English ordinal ("1st", "12th", "23rd").
pub fn format_ordinal(n: i64) -> String {
    // 11 through 13 (and every hundred's teens) always take "th"
    let tens = n % 100;
    if tens > 3 && tens < 21 {
        return format!("{n}th");
    }

    match n % 10 {
        1 => format!("{n}st"),
        2 => format!("{n}nd"),
        3 => format!("{n}rd"),
        _ => format!("{n}th"),
    }
}

/// Return a copy of `items` with the half-open range `[start, end)` removed.
///
/// Indices past the end are clamped; a range with `end < start` removes nothing.
pub fn excise<T: Clone>(items: &[T], start: usize, end: usize) -> Vec<T> {
    let start = start.min(items.len());
    let end = end.clamp(start, items.len());

    let mut out = Vec::with_capacity(items.len() - (end - start));
    out.extend_from_slice(&items[..start]);
    out.extend_from_slice(&items[end..]);
    out
}

/// Values substituted into a user supplied output template.
pub struct TemplateFields<'a> {
    pub count: i64,
    pub name: &'a str,
    pub display: &'a str,
    pub attribute: &'a str,
    pub prefix: &'a str,
    pub suffix: &'a str,
}

/// Expand `{count}`, `{name}`, `{display}`, `{attribute}`, `{prefix}` and
/// `{suffix}` placeholders. Unknown placeholders are left untouched.
pub fn render_template(template: &str, fields: &TemplateFields<'_>) -> String {
    let mut out = String::with_capacity(template.len() + fields.name.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open..];
        let Some(close) = after.find('}') else {
            out.push_str(after);
            return out;
        };

        let key = &after[1..close];
        match key {
            "count" => out.push_str(&fields.count.to_string()),
            "name" => out.push_str(fields.name),
            "display" => out.push_str(fields.display),
            "attribute" => out.push_str(fields.attribute),
            "prefix" => out.push_str(fields.prefix),
            "suffix" => out.push_str(fields.suffix),
            _ => out.push_str(&after[..=close]),
        }
        rest = &after[close + 1..];
    }

    out.push_str(rest);
    out
}
