use super::status_color;
use colored::*;
use comfy_table::{
    modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, Cell, Color, ContentArrangement, Table,
};
use partnerdesk_core::{truncate, Partnership, PartnershipStatus};
use partnerdesk_formatter::{format_date, type_caption};

const COMPANY_WIDTH: usize = 30;

/// Table cell color for a status, taken from the shared badge palette
fn table_color(status: PartnershipStatus) -> Color {
    match status_color(status) {
        colored::Color::Black => Color::Black,
        colored::Color::Red => Color::Red,
        colored::Color::Green => Color::Green,
        colored::Color::Yellow => Color::Yellow,
        colored::Color::Blue => Color::Blue,
        colored::Color::Magenta => Color::Magenta,
        colored::Color::Cyan => Color::Cyan,
        colored::Color::White => Color::White,
        colored::Color::TrueColor { r, g, b } => Color::Rgb { r, g, b },
        _ => Color::Reset,
    }
}

/// Summary table of all partnerships; the selected row is marked with `▶`
pub fn render_list(partnerships: &[Partnership], selected_id: Option<&str>) -> String {
    if partnerships.is_empty() {
        return format!(
            "{}\n{}",
            "No partnerships yet".yellow(),
            "Use 'partnerdesk create' to add your first partnership".dimmed()
        );
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec!["", "ID", "Company", "Type", "Status", "Created"]);

    for partnership in partnerships {
        let marker = if selected_id == Some(partnership.id.as_str()) {
            "▶"
        } else {
            ""
        };

        table.add_row(vec![
            Cell::new(marker),
            Cell::new(&partnership.id),
            Cell::new(truncate(&partnership.company_name, COMPANY_WIDTH)),
            Cell::new(type_caption(partnership.partnership_type)),
            Cell::new(partnership.status.to_string()).fg(table_color(partnership.status)),
            Cell::new(format_date(&partnership.created_at)),
        ]);
    }

    format!(
        "{}\n\n{}\nTotal: {} partnerships",
        format!("🤝 Partnerships ({})", partnerships.len()).blue().bold(),
        table,
        partnerships.len().to_string().cyan()
    )
}
