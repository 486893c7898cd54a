//! Shared invoice fixtures.

#![allow(dead_code)]

use tabula_lib::column::Column;
use tabula_lib::model::Record;
use tabula_lib::model::Row;
use tabula_lib::sort::compare;

/// (id, customer, status, due, amount, currency)
const INVOICES: [(i64, &str, &str, &str, &str, &str); 10] = [
    (1, "Jaxbean", "Unsent", "2021-05-09", "$3107.34", "CNY"),
    (2, "Feedmix", "Unsent", "2021-10-12", "$2720.85", "COP"),
    (3, "Kwideo", "Unsent", "2021-06-01", "$4880.58", "PEN"),
    (4, "Jatri", "Due", "2021-02-23", "$5970.24", "CLP"),
    (5, "Gabtype", "Due", "2021-06-18", "$5517.17", "THB"),
    (6, "Gabtune", "Overdue", "2021-01-05", "$4977.29", "PLN"),
    (7, "Tazz", "Voided", "2021-08-07", "$617.31", "CAD"),
    (8, "Roodel", "Unsent", "2021-05-06", "$4096.74", "PLN"),
    (9, "Kimia", "Voided", "2021-07-21", "$9044.68", "NOK"),
    (10, "Trilia", "Due", "2021-09-01", "$8400.89", "PHP"),
];

pub fn invoices() -> Vec<Record> {
    INVOICES
        .iter()
        .map(|(id, customer, status, due, amount, currency)| {
            Record::new()
                .set("id", *id)
                .set("customer", *customer)
                .set("status", *status)
                .set("due", *due)
                .set("amount", *amount)
                .set("currency", *currency)
        })
        .collect()
}

pub fn invoice_columns() -> Vec<Column> {
    vec![
        Column::new("id").hidden(),
        Column::new("customer").label("Customer"),
        Column::new("status").label("Status"),
        Column::new("due")
            .label("Due")
            .sort_by(compare::date("due", "%Y-%m-%d")),
        Column::new("amount").label("Outstanding amount"),
        Column::new("currency").label("Currency"),
    ]
}

/// `count` generated records with a numeric `n` field and a `name` field.
pub fn numbered(count: usize) -> Vec<Record> {
    (0..count)
        .map(|n| {
            Record::new()
                .set("n", n as i64)
                .set("name", format!("item-{:02}", n))
        })
        .collect()
}

pub fn ids(rows: &[Row]) -> Vec<usize> {
    rows.iter().map(|r| r.id).collect()
}

pub fn customers(rows: &[Row]) -> Vec<String> {
    rows.iter()
        .map(|r| r.value("customer").to_string())
        .collect()
}
