//! Text and JSON output for a table view.

use serde::Serialize;
use tabula_lib::Header;
use tabula_lib::Table;
use tabula_lib::model::Row;
use tabula_lib::pagination::Pagination;
use tabula_lib::sort::SortBy;
use tabula_lib::state::TableEvent;
use unicode_width::UnicodeWidthStr;

const GAP: &str = "  ";

fn checkbox(checked: bool) -> String {
    let mark = if checked { "[x]" } else { "[ ]" };
    mark.to_string()
}

fn indicator(header: &Header) -> &'static str {
    match header.is_sorted_desc {
        Some(true) => " ▼",
        Some(false) => " ▲",
        None => "",
    }
}

fn pad(cell: &str, width: usize) -> String {
    let fill = width.saturating_sub(cell.width());
    format!("{}{}", cell, " ".repeat(fill))
}

/// "Showing 11 to 20 of 25 results"
pub fn summary(pagination: &Pagination) -> String {
    match pagination.item_range() {
        Some((first, last)) => format!(
            "Showing {} to {} of {} results",
            first, last, pagination.total_items
        ),
        None => "No results".to_string(),
    }
}

fn describe(event: &TableEvent) -> String {
    match event {
        TableEvent::SortChanged(sort) => {
            format!("sort changed: {} {}", sort.id, sort.direction_param())
        }
        TableEvent::PageChanged { page, per_page } => {
            format!("page changed: {} ({} per page)", page.saturating_add(1), per_page)
        }
    }
}

/// Render the visible page as an aligned plain-text grid.
pub fn text(table: &Table, events: &[TableEvent]) -> String {
    let headers = table.headers();

    let mut grid: Vec<Vec<String>> = Vec::with_capacity(table.rows().len() + 1);
    let mut head = vec![checkbox(table.toggle_all_state())];
    head.extend(headers.iter().map(|h| format!("{}{}", h.render(), indicator(h))));
    grid.push(head);
    for row in table.rows() {
        let mut line = vec![checkbox(row.selected)];
        line.extend(headers.iter().map(|h| {
            row.cell(&h.name)
                .map(|c| c.render().to_string())
                .unwrap_or_default()
        }));
        grid.push(line);
    }

    let mut widths = vec![0; headers.len() + 1];
    for line in &grid {
        for (width, cell) in widths.iter_mut().zip(line) {
            *width = (*width).max(cell.width());
        }
    }

    let mut out = String::new();
    for (i, line) in grid.iter().enumerate() {
        let padded: Vec<String> = line
            .iter()
            .zip(&widths)
            .map(|(cell, &width)| pad(cell, width))
            .collect();
        out.push_str(padded.join(GAP).trim_end());
        out.push('\n');
        if i == 0 {
            let total = widths.iter().sum::<usize>() + GAP.len() * widths.len().saturating_sub(1);
            out.push_str(&"-".repeat(total));
            out.push('\n');
        }
    }

    let pagination = table.pagination();
    out.push('\n');
    out.push_str(&summary(&pagination));
    out.push('\n');
    out.push_str(&format!(
        "{}  page {}  {}",
        if table.can_prev() { "< Prev" } else { "      " },
        pagination.page.saturating_add(1),
        if table.can_next() { "Next >" } else { "" },
    ));
    out = out.trim_end().to_string();
    out.push('\n');

    let selected = table.selected_rows();
    if !selected.is_empty() {
        out.push_str(&format!("{} selected\n", selected.len()));
    }
    for event in events {
        out.push_str(&describe(event));
        out.push('\n');
    }
    out
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct HeaderView<'a> {
    name: &'a str,
    label: String,
    can_sort: bool,
    is_sorted: bool,
    is_sorted_desc: Option<bool>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Snapshot<'a> {
    headers: Vec<HeaderView<'a>>,
    rows: &'a [Row],
    selected: Vec<usize>,
    sort_by: Option<&'a SortBy>,
    pagination: Pagination,
    toggle_all_state: bool,
    can_prev: bool,
    can_next: bool,
    events: &'a [TableEvent],
}

/// Render the whole derived view as pretty JSON.
pub fn json(table: &Table, events: &[TableEvent]) -> Result<String, serde_json::Error> {
    let headers = table.headers();
    let snapshot = Snapshot {
        headers: headers
            .iter()
            .map(|h| HeaderView {
                name: &h.name,
                label: h.render(),
                can_sort: h.can_sort,
                is_sorted: h.is_sorted,
                is_sorted_desc: h.is_sorted_desc,
            })
            .collect(),
        rows: table.rows(),
        selected: table.selected_rows().iter().map(|r| r.id).collect(),
        sort_by: table.sort_by(),
        pagination: table.pagination(),
        toggle_all_state: table.toggle_all_state(),
        can_prev: table.can_prev(),
        can_next: table.can_next(),
        events,
    };
    serde_json::to_string_pretty(&snapshot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabula_lib::column::Column;
    use tabula_lib::model::Record;
    use tabula_lib::options::TableOptions;

    fn table() -> Table {
        let columns = vec![
            Column::new("id").hidden(),
            Column::new("customer").label("Customer"),
            Column::new("status").label("Status"),
        ];
        let data = vec![
            Record::new().set("id", 1i64).set("customer", "Jaxbean").set("status", "Unsent"),
            Record::new().set("id", 2i64).set("customer", "Feedmix").set("status", "Due"),
            Record::new().set("id", 3i64).set("customer", "Kwideo").set("status", "Overdue"),
        ];
        Table::new(columns, data, TableOptions::new().with_per_page(2)).unwrap()
    }

    #[test]
    fn test_text_layout() {
        let mut table = table();
        table.toggle_sort("customer", None).unwrap();
        table.select_row(1);
        let events = table.drain_events();

        let out = text(&table, &events);
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines[0], "[ ]  Customer ▲  Status");
        assert_eq!(lines[2], "[x]  Feedmix     Due");
        assert_eq!(lines[3], "[ ]  Jaxbean     Unsent");
        assert!(out.contains("Showing 1 to 2 of 3 results"));
        assert!(out.contains("Next >"));
        assert!(!out.contains("< Prev"));
        assert!(out.contains("1 selected"));
        assert!(out.contains("sort changed: customer ASC"));
    }

    #[test]
    fn test_summary_on_empty_page() {
        let pagination = Pagination::self_managed(0, 10, Default::default());
        assert_eq!(summary(&pagination), "No results");
    }

    #[test]
    fn test_json_snapshot() {
        let mut table = table();
        table.next_page();
        let events = table.drain_events();

        let value: serde_json::Value = serde_json::from_str(&json(&table, &events).unwrap()).unwrap();

        assert_eq!(value["headers"].as_array().unwrap().len(), 2);
        assert_eq!(value["rows"][0]["id"], 2);
        assert_eq!(value["rows"][0]["original"]["customer"], "Kwideo");
        assert_eq!(value["pagination"]["page"], 1);
        assert_eq!(value["pagination"]["totalItems"], 3);
        assert_eq!(value["events"][0]["type"], "page_changed");
        assert_eq!(value["canPrev"], true);
        assert_eq!(value["toggleAllState"], false);
        assert_eq!(value["events"][0]["perPage"], 2);
        assert_eq!(value["headers"][0]["canSort"], true);
    }
}
