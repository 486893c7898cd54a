//! Actions accepted by the transition engine and the notifications it emits.

use std::str::FromStr;

use serde::Serialize;

use crate::error::TableError;
use crate::model::Record;
use crate::sort::SortBy;

/// The closed set of actions a table state accepts.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Replace the data set.
    SetRows(Vec<Record>),
    /// Sort by a column, optionally forcing the direction.
    ToggleSort {
        column: String,
        descending: Option<bool>,
    },
    /// Flip the selection of one row.
    SelectRow(usize),
    /// Select or deselect every visible row.
    ToggleAll,
    NextPage,
    PrevPage,
}

impl Action {
    /// Sort action without a forced direction.
    pub fn toggle_sort(column: impl Into<String>) -> Self {
        Action::ToggleSort {
            column: column.into(),
            descending: None,
        }
    }

    /// The action's name, as used in logs and in text form.
    pub fn kind(&self) -> &'static str {
        match self {
            Action::SetRows(_) => "SET_ROWS",
            Action::ToggleSort { .. } => "TOGGLE_SORT",
            Action::SelectRow(_) => "SELECT_ROW",
            Action::ToggleAll => "TOGGLE_ALL",
            Action::NextPage => "NEXT_PAGE",
            Action::PrevPage => "PREV_PAGE",
        }
    }
}

/// Parses the text form `NAME[:ARG[:ARG]]`.
///
/// Names are case-insensitive and accept `-` for `_`:
///
/// - `TOGGLE_SORT:<column>` or `TOGGLE_SORT:<column>:asc|desc`
/// - `SELECT_ROW:<id>`
/// - `TOGGLE_ALL`, `NEXT_PAGE`, `PREV_PAGE`
///
/// `SET_ROWS` carries a data set and has no text form.
impl FromStr for Action {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.trim().split(':');
        let name = parts
            .next()
            .unwrap_or_default()
            .to_ascii_uppercase()
            .replace('-', "_");
        let args: Vec<&str> = parts.collect();

        let action = match name.as_str() {
            "TOGGLE_SORT" => {
                let column = args
                    .first()
                    .filter(|c| !c.is_empty())
                    .ok_or_else(|| TableError::invalid_argument("TOGGLE_SORT", "missing column"))?;
                let descending = match args.get(1).map(|d| d.to_ascii_lowercase()) {
                    None => None,
                    Some(d) if d == "desc" => Some(true),
                    Some(d) if d == "asc" => Some(false),
                    Some(d) => {
                        return Err(TableError::invalid_argument(
                            "TOGGLE_SORT",
                            format!("unknown direction '{}'", d),
                        ));
                    }
                };
                Action::ToggleSort {
                    column: column.to_string(),
                    descending,
                }
            }
            "SELECT_ROW" => {
                let id = args
                    .first()
                    .and_then(|id| id.parse().ok())
                    .ok_or_else(|| TableError::invalid_argument("SELECT_ROW", "expected a row id"))?;
                Action::SelectRow(id)
            }
            "TOGGLE_ALL" => Action::ToggleAll,
            "NEXT_PAGE" => Action::NextPage,
            "PREV_PAGE" => Action::PrevPage,
            "SET_ROWS" => {
                return Err(TableError::invalid_argument("SET_ROWS", "data has no text form"));
            }
            _ => return Err(TableError::unknown_action(s.trim())),
        };
        Ok(action)
    }
}

/// A notification produced as a consequence of a transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum TableEvent {
    /// A sortable column was toggled.
    SortChanged(SortBy),
    /// The page index moved.
    PageChanged { page: usize, per_page: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_actions() {
        assert_eq!("TOGGLE_SORT:due".parse::<Action>().unwrap(), Action::toggle_sort("due"));
        assert_eq!(
            "toggle-sort:due:desc".parse::<Action>().unwrap(),
            Action::ToggleSort {
                column: "due".to_string(),
                descending: Some(true),
            }
        );
        assert_eq!("select_row:3".parse::<Action>().unwrap(), Action::SelectRow(3));
        assert_eq!("TOGGLE_ALL".parse::<Action>().unwrap(), Action::ToggleAll);
        assert_eq!("next-page".parse::<Action>().unwrap(), Action::NextPage);
        assert_eq!("PREV_PAGE".parse::<Action>().unwrap(), Action::PrevPage);
    }

    #[test]
    fn test_unknown_action_rejected() {
        let err = "RESET".parse::<Action>().unwrap_err();
        assert_eq!(err, TableError::UnknownAction("RESET".to_string()));
    }

    #[test]
    fn test_bad_arguments_rejected() {
        assert!(matches!(
            "SELECT_ROW:abc".parse::<Action>(),
            Err(TableError::InvalidArgument { action: "SELECT_ROW", .. })
        ));
        assert!("TOGGLE_SORT".parse::<Action>().is_err());
        assert!("TOGGLE_SORT:due:sideways".parse::<Action>().is_err());
        assert!("SET_ROWS".parse::<Action>().is_err());
    }

    #[test]
    fn test_event_serializes_tagged() {
        let event = TableEvent::SortChanged(SortBy::new("due", true));
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(json, r#"{"type":"sort_changed","id":"due","desc":true}"#);
    }
}
