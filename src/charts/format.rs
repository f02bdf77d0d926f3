//! Record formatters used for legend entries and tooltips.

use crate::core::ChartRecord;

/// Shortest decimal form of a value: `97` rather than `97.0`, `5.85` as is.
#[must_use]
pub fn format_value(value: f64) -> String {
    format!("{value}")
}

/// `"<label>: <value>"`, the generic tooltip text.
#[must_use]
pub fn record_value_label(record: &ChartRecord) -> String {
    format!("{}: {}", record.label, format_value(record.value))
}

/// `"Yomiuri (5.85M)"`
#[must_use]
pub fn millions_legend_label(record: &ChartRecord) -> String {
    format!("{} ({}M)", record.label, format_value(record.value))
}

/// `"Yomiuri: 5.85M readers (Conservative)"`
#[must_use]
pub fn readers_tooltip_label(record: &ChartRecord) -> String {
    format!(
        "{}: {}M readers ({})",
        record.label,
        format_value(record.value),
        record.category
    )
}

/// `"LINE: 97M users (Messaging)"`
#[must_use]
pub fn users_tooltip_label(record: &ChartRecord) -> String {
    format!(
        "{}: {}M users ({})",
        record.label,
        format_value(record.value),
        record.category
    )
}
