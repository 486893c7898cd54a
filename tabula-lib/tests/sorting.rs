mod common;

use common::{customers, ids, invoice_columns, invoices, numbered};
use tabula_lib::Table;
use tabula_lib::column::Column;
use tabula_lib::error::TableError;
use tabula_lib::model::Record;
use tabula_lib::options::TableOptions;
use tabula_lib::sort::SortBy;
use tabula_lib::sort::compare;
use tabula_lib::state::TableEvent;

fn invoice_table() -> Table {
    Table::new(invoice_columns(), invoices(), TableOptions::default()).unwrap()
}

#[test]
fn test_text_sort_ascending_then_descending() {
    let mut table = invoice_table();

    table.toggle_sort("customer", None).unwrap();
    assert_eq!(customers(table.rows())[0], "Feedmix");
    assert_eq!(table.sort_by(), Some(&SortBy::new("customer", false)));

    table.toggle_sort("customer", None).unwrap();
    assert_eq!(customers(table.rows())[0], "Trilia");
    assert_eq!(table.sort_by(), Some(&SortBy::new("customer", true)));
}

#[test]
fn test_direction_keeps_flipping() {
    let mut table = invoice_table();
    for expected_desc in [false, true, false, true] {
        table.toggle_sort("status", None).unwrap();
        assert_eq!(table.sort_by().unwrap().desc, expected_desc);
    }
}

#[test]
fn test_date_sort() {
    let mut table = invoice_table();

    table.toggle_sort("due", None).unwrap();
    assert_eq!(ids(table.rows()), vec![5, 3, 7, 0, 2, 4, 8, 6, 9, 1]);

    table.toggle_sort("due", None).unwrap();
    assert_eq!(ids(table.rows()), vec![1, 9, 6, 8, 4, 2, 0, 7, 3, 5]);
}

#[test]
fn test_custom_comparator_scenario() {
    let columns = vec![
        Column::new("customer"),
        Column::new("due").sort_by(compare::date("due", "%Y-%m-%d")),
    ];
    let data = vec![
        Record::new().set("customer", "a").set("due", "2021-02-01"),
        Record::new().set("customer", "b").set("due", "2021-01-01"),
        Record::new().set("customer", "c").set("due", "2021-03-01"),
    ];
    let mut table = Table::new(columns, data, TableOptions::default()).unwrap();

    table.toggle_sort("due", None).unwrap();
    assert_eq!(ids(table.rows()), vec![1, 0, 2]);

    table.toggle_sort("due", None).unwrap();
    assert_eq!(ids(table.rows()), vec![2, 0, 1]);
    assert_eq!(table.sort_by(), Some(&SortBy::new("due", true)));
}

#[test]
fn test_forced_direction() {
    let mut table = invoice_table();

    table.toggle_sort("customer", Some(true)).unwrap();
    assert_eq!(customers(table.rows())[0], "Trilia");

    // Forcing the same direction again does not flip it.
    table.toggle_sort("customer", Some(true)).unwrap();
    assert_eq!(customers(table.rows())[0], "Trilia");

    table.toggle_sort("customer", Some(false)).unwrap();
    assert_eq!(customers(table.rows())[0], "Feedmix");
}

#[test]
fn test_only_one_sorted_column() {
    let mut table = invoice_table();
    table.toggle_sort("customer", None).unwrap();
    table.toggle_sort("customer", None).unwrap();
    table.toggle_sort("status", None).unwrap();

    let sorted: Vec<_> = table
        .state()
        .columns()
        .iter()
        .filter(|c| c.is_sorted)
        .map(|c| c.name.as_str())
        .collect();
    assert_eq!(sorted, vec!["status"]);

    let customer = table.state().columns().iter().find(|c| c.name == "customer").unwrap();
    assert_eq!(customer.is_sorted_desc, None);
    // A fresh column starts ascending again.
    assert!(!table.sort_by().unwrap().desc);
}

#[test]
fn test_unknown_column_fails_and_keeps_rows() {
    let mut table = invoice_table();
    table.toggle_sort("customer", None).unwrap();
    table.drain_events();
    let before = ids(table.rows());

    let err = table.toggle_sort("missingColumn", None).unwrap_err();

    assert_eq!(err, TableError::invalid_column("missingColumn"));
    assert_eq!(err.to_string(), "Invalid column, missingColumn not found");
    assert_eq!(ids(table.rows()), before);
    assert_eq!(table.sort_by(), Some(&SortBy::new("customer", false)));
    assert!(table.drain_events().is_empty());
}

#[test]
fn test_unsortable_column_is_noop() {
    let columns = vec![Column::new("customer"), Column::new("status").sortable(false)];
    let mut table = Table::new(columns, invoices(), TableOptions::default()).unwrap();
    let before = ids(table.rows());

    table.toggle_sort("status", None).unwrap();

    assert_eq!(ids(table.rows()), before);
    assert!(table.sort_by().is_none());
    assert!(table.state().sort_column().is_none());
    assert!(table.drain_events().is_empty());
}

#[test]
fn test_sort_is_stable_for_equal_keys() {
    let mut table = invoice_table();

    table.toggle_sort("status", None).unwrap();
    let unsent: Vec<usize> = table
        .rows()
        .iter()
        .filter(|r| r.value("status").as_str() == Some("Unsent"))
        .map(|r| r.id)
        .collect();
    assert_eq!(unsent, vec![0, 1, 2, 7]);

    table.toggle_sort("status", None).unwrap();
    let unsent_desc: Vec<usize> = table
        .rows()
        .iter()
        .filter(|r| r.value("status").as_str() == Some("Unsent"))
        .map(|r| r.id)
        .collect();
    assert_eq!(unsent_desc, vec![0, 1, 2, 7]);
}

#[test]
fn test_set_rows_reapplies_active_sort() {
    let mut table = invoice_table();
    table.toggle_sort("customer", None).unwrap();

    let mut data = invoices();
    data.push(Record::new().set("id", 11i64).set("customer", "Abata"));
    table.set_data(data);

    assert_eq!(customers(table.rows())[0], "Abata");
    assert_eq!(table.rows()[0].id, 10);
}

#[test]
fn test_sort_before_pagination() {
    let options = TableOptions::new().with_per_page(5);
    let columns = vec![Column::new("n").sort_by(compare::numeric("n"))];
    let mut table = Table::new(columns, numbered(10), options).unwrap();

    table.toggle_sort("n", Some(true)).unwrap();
    assert_eq!(ids(table.rows()), vec![9, 8, 7, 6, 5]);

    table.next_page();
    assert_eq!(ids(table.rows()), vec![4, 3, 2, 1, 0]);

    table.set_data(numbered(10));
    assert_eq!(ids(table.rows()), vec![4, 3, 2, 1, 0]);
}

#[test]
fn test_manual_sort_only_records_request() {
    let options = TableOptions::new().with_manual_sort_by(true);
    let mut table = Table::new(invoice_columns(), invoices(), options).unwrap();
    let before = ids(table.rows());

    table.toggle_sort("customer", None).unwrap();
    table.toggle_sort("customer", None).unwrap();

    assert_eq!(ids(table.rows()), before);
    assert_eq!(table.sort_by(), Some(&SortBy::new("customer", true)));
    let customer = table.headers().into_iter().find(|h| h.name == "customer").unwrap();
    assert!(customer.is_sorted);
    assert_eq!(customer.is_sorted_desc, Some(true));
    assert_eq!(
        table.drain_events(),
        vec![
            TableEvent::SortChanged(SortBy::new("customer", false)),
            TableEvent::SortChanged(SortBy::new("customer", true)),
        ]
    );
}
