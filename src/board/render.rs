//! Plain-text rendering of the board and lead tables.

use colored::{ColoredString, Colorize};

use crate::models::{Lead, Priority, Section};
use crate::view::Projection;

/// Thousands-separated amount, e.g. `15,000`
pub fn format_value(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

fn priority_badge(priority: Priority) -> ColoredString {
    let label = priority.as_str().to_uppercase();
    match priority {
        Priority::High => label.red().bold(),
        Priority::Medium => label.yellow().bold(),
        Priority::Low => label.blue().bold(),
    }
}

/// Kanban board: one block per stage, in board order.
pub fn render_board(projection: &Projection<'_>) -> String {
    let mut out = format!(
        "{} {}\n",
        "Sort by:".dimmed(),
        projection.sort_key.label()
    );

    for column in projection.columns() {
        out.push_str(&format!(
            "\n{} ({})  ${}\n",
            column.status.as_str().bold(),
            column.count(),
            format_value(column.total_value())
        ));
        out.push_str(&format!("{}\n", "─".repeat(40).dimmed()));

        if column.is_empty() {
            out.push_str(&format!("  {}\n", "Drop here".dimmed().italic()));
            continue;
        }

        for lead in &column.leads {
            out.push_str(&format!(
                "  [{}] {} {}\n",
                lead.id.cyan(),
                priority_badge(lead.priority),
                lead.company.bold()
            ));
            let tags = if lead.tags.is_empty() {
                String::new()
            } else {
                format!("  {}", lead.tags.join(", ").dimmed())
            };
            out.push_str(&format!(
                "      {} · ${}{}\n",
                lead.name,
                format_value(lead.value),
                tags
            ));
        }
    }
    out
}

/// One row per lead, in the order given.
pub fn render_lead_table(leads: &[&Lead]) -> String {
    let mut out = format!(
        "{:10} {:22} {:20} {:12} {:8} {:>10}\n",
        "ID".bold(),
        "COMPANY".bold(),
        "NAME".bold(),
        "STAGE".bold(),
        "PRIORITY".bold(),
        "VALUE".bold()
    );
    out.push_str(&format!("{}\n", "─".repeat(87)));
    for lead in leads {
        out.push_str(&format!(
            "{:10} {:22} {:20} {:12} {:8} {:>10}\n",
            lead.id,
            lead.company,
            lead.name,
            lead.status.as_str(),
            lead.priority.as_str(),
            format_value(lead.value)
        ));
    }
    out
}

/// Tabs without a view of their own
pub fn render_placeholder(section: Section) -> String {
    format!(
        "{} Module\nThis feature is coming soon.\n",
        section.title().bold()
    )
}
