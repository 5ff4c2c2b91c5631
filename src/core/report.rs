//! Text formatting for command replies.
//!
//! These helpers are framework-agnostic; the bot layer decides whether the result goes
//! into a plain message or an embed.

use crate::{
    core::models::{CollectionStats, HolderRecord},
    errors::Result,
};
use std::fmt::Write;

/// Rendered in place of a value the marketplace did not report.
pub const MISSING: &str = "N/A";

/// Renders a raw statistic the way the marketplace reports it.
#[must_use]
pub fn format_stat_value(value: Option<f64>) -> String {
    value.map_or_else(|| MISSING.to_string(), |v| v.to_string())
}

/// Renders an amount with thousands separators and at most two decimals.
///
/// # Examples
/// `1234567.891` renders as `1,234,567.89`; `12.0` renders as `12`.
#[must_use]
pub fn format_amount(value: Option<f64>) -> String {
    let Some(value) = value else {
        return MISSING.to_string();
    };

    let fixed = format!("{:.2}", value.abs());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if value < 0.0 { "-" } else { "" };
    let fraction = fraction.trim_end_matches('0');
    if fraction.is_empty() {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped}.{fraction}")
    }
}

/// Renders an optional count.
#[must_use]
#[allow(clippy::cast_precision_loss)] // Counts shown to users stay far below 2^53
pub fn format_count(value: Option<u64>) -> String {
    value.map_or_else(|| MISSING.to_string(), |v| format_amount(Some(v as f64)))
}

/// The `/stats` reply.
pub fn format_stats_message(slug: &str, stats: &CollectionStats) -> Result<String> {
    let mut message = String::new();
    writeln!(&mut message, "**Collection Stats for {slug}:**")?;
    writeln!(
        &mut message,
        "- **Total Supply:** {}",
        format_stat_value(stats.total_supply)
    )?;
    writeln!(
        &mut message,
        "- **Floor Price:** {}",
        format_stat_value(stats.floor_price)
    )?;
    writeln!(&mut message, "- **Listed:** {}", format_stat_value(stats.listed))?;
    writeln!(&mut message, "- **Sales:** {}", format_stat_value(stats.sales))?;
    writeln!(
        &mut message,
        "- **Volume (Day):** {}",
        format_stat_value(stats.volume_day)
    )?;
    writeln!(
        &mut message,
        "- **Volume (Total):** {}",
        format_stat_value(stats.volume_total)
    )?;
    write!(&mut message, "- **Owners:** {}", format_stat_value(stats.owners))?;
    Ok(message)
}

/// One-line summary sent with a holder snapshot.
#[must_use]
pub fn format_holder_summary(holders: &[HolderRecord]) -> String {
    let items: usize = holders.iter().map(|h| h.item_count).sum();
    format!(
        "{} unique holder{} holding {} item{}:",
        holders.len(),
        if holders.len() == 1 { "" } else { "s" },
        items,
        if items == 1 { "" } else { "s" }
    )
}

/// Cuts `text` to at most `max_chars` characters, marking the cut with an ellipsis.
#[must_use]
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    cut.push('…');
    cut
}
