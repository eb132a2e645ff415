//! Paints view models as colored terminal text.

use colored::{ColoredString, Colorize};
use console::{measure_text_width, pad_str, Alignment};
use hr_client::StatusTone;

use super::attendance::{AttendanceView, CAPTION};
use super::history::{HistoryView, HEADERS};
use super::personal::{Field, PersonalCard, PersonalView, Summary, TabContent, NO_DATA_MESSAGE, NO_IMAGE};
use super::profile::{ProfileView, SIGNED_OUT_MESSAGE};

const COLUMN_GAP: &str = "  ";

pub fn paint_history(view: &HistoryView) -> String {
    let mut out = String::new();
    out.push_str(&heading("Employee History"));

    let rows = match view {
        HistoryView::Loading | HistoryView::Empty => {
            out.push_str(&format!("{}\n", view.message().unwrap_or_default().dimmed()));
            return out;
        }
        HistoryView::Error(message) => {
            out.push_str(&format!("{}\n", message.red()));
            return out;
        }
        HistoryView::Table(rows) => rows,
    };

    // every record takes two lines: old value struck through, new value below
    let mut lines: Vec<[String; 5]> = Vec::with_capacity(rows.len() * 2 + 1);
    lines.push(HEADERS.map(|h| h.to_uppercase().bold().to_string()));
    for row in rows {
        lines.push([
            row.date.clone(),
            row.changed_by.clone(),
            row.field.clone(),
            row.old_value.dimmed().strikethrough().to_string(),
            row.change_type.bold().to_string(),
        ]);
        lines.push([
            String::new(),
            String::new(),
            String::new(),
            row.new_value.clone(),
            String::new(),
        ]);
    }

    let mut widths = [0usize; 5];
    for line in &lines {
        for (width, cell) in widths.iter_mut().zip(line.iter()) {
            *width = (*width).max(measure_text_width(cell));
        }
    }

    for line in &lines {
        let cells: Vec<String> = line
            .iter()
            .zip(widths.iter())
            .map(|(cell, width)| pad_str(cell, *width, Alignment::Left, None).into_owned())
            .collect();
        out.push_str(cells.join(COLUMN_GAP).trim_end());
        out.push('\n');
    }
    out
}

pub fn paint_attendance(view: &AttendanceView) -> String {
    let mut out = heading("Attendance Today");
    match view {
        AttendanceView::Loading | AttendanceView::Empty => {
            out.push_str(&format!("{}\n", view.headline().dimmed()));
        }
        AttendanceView::Error(message) => out.push_str(&format!("{}\n", message.red())),
        AttendanceView::Ready { .. } => {
            out.push_str(&format!("{}\n", view.headline().bold().bright_blue()));
            out.push_str(&format!("{}\n", CAPTION.dimmed()));
        }
    }
    out
}

pub fn paint_profile(view: &ProfileView) -> String {
    let mut out = heading("My Profile");
    match view {
        ProfileView::SignedOut => out.push_str(&format!("{}\n", SIGNED_OUT_MESSAGE.dimmed())),
        ProfileView::Ready {
            full_name,
            email,
            role,
        } => {
            out.push_str(&field_line("Full Name", full_name));
            out.push_str(&field_line("Email", email));
            out.push_str(&field_line("Role", &role.blue().to_string()));
        }
    }
    out
}

pub fn paint_personal(view: &PersonalView) -> String {
    let card = match view {
        PersonalView::Loading => return format!("{}\n", "Loading...".dimmed()),
        PersonalView::Error(message) => return format!("{}\n", message.red()),
        PersonalView::NoData => return format!("{}\n", NO_DATA_MESSAGE.dimmed()),
        PersonalView::Ready(card) => card,
    };

    let mut out = heading("Personal");
    if let Some(notice) = &card.notice {
        out.push_str(&format!("{}\n\n", notice.yellow()));
    }

    out.push_str(&paint_tabs(card));
    out.push('\n');

    match &card.content {
        TabContent::Personal { company, personal } => {
            out.push_str(&section("Company Information", company));
            out.push('\n');
            out.push_str(&section("Personal Detail", personal));
        }
        TabContent::History(history) => out.push_str(&paint_history(history)),
        TabContent::Placeholder(text) => out.push_str(&format!("{}\n", text.dimmed())),
    }

    out.push('\n');
    out.push_str(&paint_summary(&card.summary));
    if card.can_delete {
        out.push_str(&format!("\n{}\n", "You may delete this employee.".dimmed()));
    }
    out
}

fn paint_tabs(card: &PersonalCard) -> String {
    let tabs: Vec<String> = card
        .tabs
        .iter()
        .map(|(tab, active)| {
            if *active {
                format!("[{}]", tab.label()).bold().bright_blue().to_string()
            } else {
                format!(" {} ", tab.label()).dimmed().to_string()
            }
        })
        .collect();
    format!("{}\n", tabs.join(" "))
}

fn paint_summary(summary: &Summary) -> String {
    let mut out = heading("Profile Summary");
    match &summary.avatar {
        Some(url) => out.push_str(&field_line("Avatar", &truncate(url, 48))),
        None => out.push_str(&field_line("Avatar", &NO_IMAGE.dimmed().to_string())),
    }
    out.push_str(&format!("{}\n", summary.name.bold()));
    out.push_str(&format!("{}\n", summary.job_title.dimmed()));
    out.push_str(&field_line("Team", &summary.team));
    out.push_str(&field_line(
        "Status",
        &tone(&summary.status, summary.tone).to_string(),
    ));
    out.push_str(&field_line("Email", &summary.email));
    out.push_str(&field_line("Phone", &summary.phone));
    out
}

fn tone(text: &str, tone: StatusTone) -> ColoredString {
    match tone {
        StatusTone::Primary => text.bright_blue().bold(),
        StatusTone::Warning => text.yellow().bold(),
        StatusTone::Neutral => text.normal(),
    }
}

fn section(title: &str, fields: &[Field]) -> String {
    let mut out = format!("{}\n", title.bold());
    let width = fields.iter().map(|f| f.label.len()).max().unwrap_or(0);
    for field in fields {
        out.push_str(&format!(
            "  {}  {}\n",
            pad_str(&field.label.dimmed().to_string(), width, Alignment::Left, None),
            field.value
        ));
    }
    out
}

fn heading(title: &str) -> String {
    format!("{}\n", title.bold().bright_cyan())
}

fn field_line(label: &str, value: &str) -> String {
    format!("{} {}\n", format!("{}:", label).bold(), value)
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let head: String = text.chars().take(max).collect();
    format!("{}…", head)
}
