//! Tabular data view engine
//!
//! Turns a raw row set plus column declarations into a derived view that is
//! sorted, paginated and selection-annotated, and keeps that view consistent
//! as actions are dispatched against it.

pub mod column;
pub mod config;
pub mod error;
pub mod model;
pub mod options;
pub mod pagination;
pub mod projection;
pub mod selection;
pub mod sort;
pub mod state;

mod table;

pub use table::*;
