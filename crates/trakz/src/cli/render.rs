//! # Rendering
//!
//! Layout math (widths, truncation, padding) happens on plain strings
//! because it needs Unicode-aware processing; styles are applied per
//! segment afterwards so escape codes never skew the columns.

use chrono::Utc;
use unicode_width::UnicodeWidthStr;

use trakzapp::commands::{CmdMessage, CmdResult, DisplayItem, MessageLevel};
use trakzapp::tags::TagCount;

use super::styles;

/// Total line width budget for list rows.
const LINE_WIDTH: usize = 92;
/// Right column reserved for the relative timestamp.
const TIME_WIDTH: usize = 14;
/// Titles longer than this are cut with an ellipsis.
const TITLE_MAX: usize = 48;

pub fn print_result(result: &CmdResult) {
    if !result.tag_cloud.is_empty() {
        print_tag_cloud(&result.tag_cloud);
    }
    if !result.listed_items.is_empty() {
        for display in &result.listed_items {
            println!("{}", item_line(display));
        }
    }
    for message in &result.messages {
        print_message(message);
    }
}

fn print_tag_cloud(cloud: &[TagCount]) {
    let rendered: Vec<String> = cloud
        .iter()
        .map(|entry| {
            format!(
                "{}{}",
                styles::TAG.apply_to(format!("#{}", entry.tag)),
                styles::INDEX.apply_to(format!("({})", entry.count))
            )
        })
        .collect();
    println!("{}", rendered.join("  "));
}

fn item_line(display: &DisplayItem) -> String {
    let item = &display.item;

    let index = format!("{:>3}", display.index);
    let title = truncate(&item.title, TITLE_MAX);

    let mut middle = String::new();
    if let Some(rating) = item.effective_rating() {
        middle.push_str(&format!("  {}", stars(rating)));
    }
    if let Some(status) = item.status {
        middle.push_str(&format!("  [{}]", status.label()));
    }
    for tag in item.tags.iter().take(3) {
        middle.push_str(&format!("  #{}", tag));
    }

    let time_ago = relative_time(item);

    // Pad between the left block and the time column using display
    // widths, not byte lengths.
    let left_width = 2 + index.width() + 2 + title.width() + middle.width();
    let padding = LINE_WIDTH
        .saturating_sub(left_width)
        .saturating_sub(TIME_WIDTH)
        .max(2);

    format!(
        "  {}  {}{}{}{}",
        styles::INDEX.apply_to(&index),
        styles::TITLE.apply_to(&title),
        styled_middle(item),
        " ".repeat(padding),
        styles::TIME.apply_to(format!("{:>width$}", time_ago, width = TIME_WIDTH))
    )
}

// Same content as the width calculation above, with colors.
fn styled_middle(item: &trakzapp::model::HobbyItem) -> String {
    let mut out = String::new();
    if let Some(rating) = item.effective_rating() {
        out.push_str(&format!("  {}", styles::STARS.apply_to(stars(rating))));
    }
    if let Some(status) = item.status {
        out.push_str(&format!(
            "  {}",
            styles::STATUS.apply_to(format!("[{}]", status.label()))
        ));
    }
    for tag in item.tags.iter().take(3) {
        out.push_str(&format!("  {}", styles::TAG.apply_to(format!("#{}", tag))));
    }
    out
}

fn print_message(message: &CmdMessage) {
    let styled = match message.level {
        MessageLevel::Info => styles::INFO.apply_to(&message.content),
        MessageLevel::Success => styles::SUCCESS.apply_to(&message.content),
        MessageLevel::Warning => styles::WARNING.apply_to(&message.content),
        MessageLevel::Error => styles::ERROR.apply_to(&message.content),
    };
    println!("{}", styled);
}

fn stars(rating: f32) -> String {
    let full = rating.floor() as usize;
    let mut out = "★".repeat(full);
    if rating - rating.floor() >= 0.5 {
        out.push('½');
    }
    out
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max_chars.saturating_sub(1)).collect();
        format!("{}…", cut)
    }
}

fn relative_time(item: &trakzapp::model::HobbyItem) -> String {
    let elapsed = (Utc::now() - item.created_at).to_std().unwrap_or_default();
    timeago::Formatter::new().convert(elapsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stars_rendering() {
        assert_eq!(stars(4.0), "★★★★");
        assert_eq!(stars(3.5), "★★★½");
        assert_eq!(stars(0.5), "½");
    }

    #[test]
    fn test_truncate_keeps_short_titles() {
        assert_eq!(truncate("Heat", 48), "Heat");
    }

    #[test]
    fn test_truncate_cuts_with_ellipsis() {
        let long = "a".repeat(60);
        let cut = truncate(&long, 48);
        assert_eq!(cut.chars().count(), 48);
        assert!(cut.ends_with('…'));
    }
}
