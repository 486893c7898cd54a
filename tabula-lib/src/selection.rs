//! Selection tracker: id-keyed row selection.
//!
//! Selection lives on the rows themselves (`Row::selected`) in the full row
//! set. The visible slice is always derived from that set, so a flag written
//! here shows up whether or not the row is on the current page.

use std::collections::HashSet;

use crate::model::Row;

/// Flip the selection of the row with `id`. Returns `false` if no row has it.
pub fn toggle_row(rows: &mut [Row], id: usize) -> bool {
    match rows.iter_mut().find(|r| r.id == id) {
        Some(row) => {
            row.selected = !row.selected;
            true
        }
        None => false,
    }
}

/// Whether the visible set is non-empty and fully selected.
pub fn all_selected(visible: &[Row]) -> bool {
    !visible.is_empty() && visible.iter().all(|r| r.selected)
}

/// Select every visible row, or deselect them all if they already are.
///
/// The flag is written into `rows` (the full set) by id. Rows outside the
/// visible set keep their selection. Returns the flag that was written.
pub fn toggle_visible(rows: &mut [Row], visible: &[Row]) -> bool {
    let selected = !all_selected(visible);
    let ids: HashSet<usize> = visible.iter().map(|r| r.id).collect();
    for row in rows.iter_mut().filter(|r| ids.contains(&r.id)) {
        row.selected = selected;
    }
    selected
}

/// The selected rows of `rows`, in their order.
pub fn selected_rows(rows: &[Row]) -> Vec<Row> {
    rows.iter().filter(|r| r.selected).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Record;

    fn rows(count: usize) -> Vec<Row> {
        (0..count)
            .map(|id| Row {
                id,
                original: Record::new().set("n", id as i64),
                cells: Vec::new(),
                selected: false,
                hidden: false,
            })
            .collect()
    }

    #[test]
    fn test_toggle_row() {
        let mut rows = rows(3);
        assert!(toggle_row(&mut rows, 1));
        assert!(rows[1].selected);
        assert!(toggle_row(&mut rows, 1));
        assert!(!rows[1].selected);
        assert!(!toggle_row(&mut rows, 7));
    }

    #[test]
    fn test_toggle_visible_only_touches_visible() {
        let mut all = rows(4);
        let visible = all[0..2].to_vec();

        assert!(toggle_visible(&mut all, &visible));
        assert_eq!(selected_rows(&all).len(), 2);
        assert!(!all[2].selected);

        let visible = all[0..2].to_vec();
        assert!(!toggle_visible(&mut all, &visible));
        assert!(selected_rows(&all).is_empty());
    }

    #[test]
    fn test_partial_visible_selection_selects_rest() {
        let mut all = rows(3);
        all[0].selected = true;
        let visible = all.clone();

        assert!(toggle_visible(&mut all, &visible));
        assert!(all_selected(&all));
    }

    #[test]
    fn test_empty_visible_set_is_not_all_selected() {
        assert!(!all_selected(&[]));
    }
}
