//! Core data types for tabclean.
//!
//! - **cell**: tagged cell values (`Missing`, `Text`, `Numeric`)
//! - **table**: the in-memory table and its structural invariants
//! - **column**: column type inference by majority vote
//! - **options**: immutable run configuration
//! - **report**: what a cleaning run changed

pub mod cell;
pub mod column;
pub mod error;
pub mod options;
pub mod report;
pub mod table;

pub use cell::{CellKey, CellValue};
pub use column::{ColumnType, infer_column_type};
pub use error::{ModelError, Result};
pub use options::CleanOptions;
pub use report::{CleanReport, ColumnFill, DedupeMode, HeaderRename};
pub use table::{Row, Table};
