//! Comparator builders for column sorting.

use std::cmp::Ordering;

use chrono::NaiveDate;
use chrono::NaiveDateTime;

use crate::model::Row;
use crate::model::Value;

fn upper(value: &Value) -> String {
    value.to_string().to_uppercase()
}

/// Case-insensitive text comparison of a field's string form, A to Z.
///
/// This is the comparator every sortable column falls back to.
pub fn text_ascending(field: &str) -> impl Fn(&Row, &Row) -> Ordering + Send + Sync + use<> {
    let field = field.to_string();
    move |a: &Row, b: &Row| upper(a.value(&field)).cmp(&upper(b.value(&field)))
}

/// Case-insensitive text comparison of a field's string form, Z to A.
pub fn text_descending(field: &str) -> impl Fn(&Row, &Row) -> Ordering + Send + Sync + use<> {
    let field = field.to_string();
    move |a: &Row, b: &Row| upper(b.value(&field)).cmp(&upper(a.value(&field)))
}

/// Numeric comparison. Values without a numeric reading order first.
pub fn numeric(field: &str) -> impl Fn(&Row, &Row) -> Ordering + Send + Sync + use<> {
    let field = field.to_string();
    move |a: &Row, b: &Row| {
        let lhs = a.value(&field).as_f64();
        let rhs = b.value(&field).as_f64();
        match (lhs, rhs) {
            (Some(l), Some(r)) => l.total_cmp(&r),
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }
}

/// Date comparison of string values parsed with a chrono `format`.
///
/// Both plain dates (`"%Y-%m-%d"`) and date-times (`"%Y-%m-%d %H:%M"`) are
/// accepted. Values that do not parse order first.
pub fn date(field: &str, format: &str) -> impl Fn(&Row, &Row) -> Ordering + Send + Sync + use<> {
    let field = field.to_string();
    let format = format.to_string();
    move |a: &Row, b: &Row| {
        let lhs = parse_date(a.value(&field), &format);
        let rhs = parse_date(b.value(&field), &format);
        lhs.cmp(&rhs)
    }
}

fn parse_date(value: &Value, format: &str) -> Option<NaiveDateTime> {
    let text = value.as_str()?.trim();
    NaiveDateTime::parse_from_str(text, format)
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(text, format)
                .ok()
                .map(|d| d.and_time(chrono::NaiveTime::MIN))
        })
}
