//! Missing-value filling.

use tracing::debug;

use tabclean_model::{CellValue, ColumnFill, Table, infer_column_type};

#[derive(Debug, Clone)]
pub struct FillOutcome {
    pub table: Table,
    /// One entry per column, in column order, including columns with no fills.
    pub fills: Vec<ColumnFill>,
}

/// Replaces every missing cell according to its column's type.
///
/// The type is inferred before any cell is filled: numeric columns get `0`,
/// everything else (including columns with no values at all) gets `""`.
/// After this stage no cell is missing.
pub fn fill_missing(mut table: Table) -> FillOutcome {
    let mut fills = Vec::with_capacity(table.width());
    for idx in 0..table.width() {
        let column = table.columns()[idx].clone();
        let column_type = infer_column_type(table.column_values(idx));
        let fill = column_type.fill_value();
        let mut filled = 0usize;
        table = table.map_column(idx, |cell| {
            if cell.is_missing() {
                filled += 1;
                fill.clone()
            } else {
                cell
            }
        });
        if filled > 0 {
            debug!(column = %column, %column_type, filled, "filled missing cells");
        }
        fills.push(ColumnFill {
            column,
            column_type,
            filled,
        });
    }
    FillOutcome { table, fills }
}
