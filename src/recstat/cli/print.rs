use colored::Colorize;
use recstat::commands::stats::Statistics;
use recstat::commands::table::{table_rows, TableRow};
use recstat::commands::{CmdMessage, MessageLevel};
use recstat::config::RecstatConfig;
use recstat::model::Record;
use unicode_width::UnicodeWidthStr;

const HEADERS: [&str; 3] = ["Name", "Value", "Tags"];

pub(super) fn print_messages(messages: &[CmdMessage], level: MessageLevel) {
    for message in messages.iter().filter(|m| m.level == level) {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.bold().blue()),
            MessageLevel::Success => println!("{}", message.content.green()),
        }
    }
}

pub(super) fn print_records(records: &[Record], config: &RecstatConfig) {
    print!("{}", render_table(&table_rows(records), config));
}

pub(super) fn print_statistics(heading: &str, stats: &Statistics) {
    println!();
    println!("{}", heading);
    print!("{}", render_statistics(stats));
}

pub(super) fn render_statistics(stats: &Statistics) -> String {
    stats
        .entries()
        .iter()
        .map(|(key, value)| format!("  {}: {}\n", key, value))
        .collect()
}

/// Draws rows as a box table. Cells are padded before they are colored so
/// escape codes never count toward column width.
pub(super) fn render_table(rows: &[TableRow], config: &RecstatConfig) -> String {
    if rows.is_empty() {
        return format!("{}\n", "No data to display".yellow());
    }

    let cells: Vec<[&str; 3]> = rows
        .iter()
        .map(|row| {
            [
                row.name.as_str(),
                row.value.as_str(),
                row.tags.as_deref().unwrap_or(&config.tags_placeholder),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(UnicodeWidthStr::width);
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.width());
        }
    }

    let rule = |left: &str, mid: &str, right: &str| {
        let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
        format!("{}{}{}\n", left, segments.join(mid), right)
    };

    let mut out = String::new();
    let total_width = widths.iter().sum::<usize>() + widths.len() * 3 + 1;
    let title_pad = total_width.saturating_sub(config.table_title.width()) / 2;
    out.push_str(&format!(
        "{}{}\n",
        " ".repeat(title_pad),
        config.table_title.italic()
    ));

    out.push_str(&rule("┌", "┬", "┐"));
    let header: Vec<String> = HEADERS
        .iter()
        .zip(widths)
        .map(|(h, w)| pad_right(h, w).bold().to_string())
        .collect();
    out.push_str(&format!("│ {} │\n", header.join(" │ ")));
    out.push_str(&rule("├", "┼", "┤"));

    for (row, cell) in rows.iter().zip(&cells) {
        let name = pad_right(cell[0], widths[0]).cyan();
        let value = pad_left(cell[1], widths[1]).magenta();
        let tags = pad_right(cell[2], widths[2]);
        let tags = if row.tags.is_some() {
            tags.green()
        } else {
            tags.dimmed()
        };
        out.push_str(&format!("│ {} │ {} │ {} │\n", name, value, tags));
    }

    out.push_str(&rule("└", "┴", "┘"));
    out
}

fn pad_right(s: &str, width: usize) -> String {
    format!("{}{}", s, " ".repeat(width.saturating_sub(s.width())))
}

fn pad_left(s: &str, width: usize) -> String {
    format!("{}{}", " ".repeat(width.saturating_sub(s.width())), s)
}
