//! View projection: raw records to presentable rows.

use crate::column::CellContext;
use crate::column::ColumnRegistry;
use crate::model::Cell;
use crate::model::Record;
use crate::model::Row;

/// Build one [`Row`] per record.
///
/// Row ids are the record positions in `data`. Only declared fields survive
/// into `original`; cells follow column order and skip hidden columns.
pub fn project_rows(data: &[Record], registry: &ColumnRegistry) -> Vec<Row> {
    data.iter()
        .enumerate()
        .map(|(id, record)| project_row(id, record, registry))
        .collect()
}

fn project_row(id: usize, record: &Record, registry: &ColumnRegistry) -> Row {
    let original = record.project(registry.names());

    let cells = registry
        .names()
        .filter_map(|name| {
            let entry = registry.get(name)?;
            if entry.hidden {
                return None;
            }
            let value = original.value(name).clone();
            let rendered = match &entry.render {
                Some(render) => render(&CellContext {
                    value: &value,
                    row: &original,
                    column: name,
                }),
                None => value.to_string(),
            };
            Some(Cell {
                field: name.to_string(),
                value,
                rendered,
            })
        })
        .collect();

    Row {
        id,
        original,
        cells,
        selected: false,
        hidden: false,
    }
}
