//! Data model: dynamic values, raw records and projected rows.

mod record;
mod row;
mod value;

pub use record::*;
pub use row::*;
pub use value::*;
