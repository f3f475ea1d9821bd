use std::path::Path;

use calamine::{DataType, Range, Reader, Xlsx, open_workbook};
use tracing::{debug, instrument};

use crate::error::{MenuError, Result};
use crate::model::SheetRows;

const MIN_ROW_CELLS: usize = 2;

/// Reads every sheet of the workbook at `path` as rows of cell strings.
///
/// Sheets are returned in workbook order. The rows of a sheet cover its used
/// range, so gaps inside the range show up as rows of empty strings. Every row
/// carries at least the meal and item cells, blank when the sheet has no
/// second column.
#[instrument(level = "debug", skip_all, fields(path = %path.display()))]
pub fn read_sheets(path: &Path) -> Result<Vec<SheetRows>> {
    if !path.exists() {
        return Err(MenuError::MissingInput(path.to_path_buf()));
    }

    let mut workbook: Xlsx<_> = open_workbook(path).map_err(|source| MenuError::InputOpen {
        path: path.to_path_buf(),
        source,
    })?;

    let sheet_names = workbook.sheet_names().to_owned();
    let mut sheets = Vec::with_capacity(sheet_names.len());

    for name in sheet_names {
        let range = match workbook.worksheet_range(&name) {
            Some(range) => range?,
            None => Range::empty(),
        };
        let rows: Vec<Vec<String>> = range
            .rows()
            .map(|row| {
                let mut cells: Vec<String> = row.iter().map(cell_to_string).collect();
                if cells.len() < MIN_ROW_CELLS {
                    cells.resize(MIN_ROW_CELLS, String::new());
                }
                cells
            })
            .collect();
        debug!(sheet = %name, row_count = rows.len(), "sheet read");
        sheets.push(SheetRows { name, rows });
    }

    Ok(sheets)
}

fn cell_to_string(cell: &DataType) -> String {
    match cell {
        DataType::String(value) => value.clone(),
        DataType::Float(value) => value.to_string(),
        DataType::Int(value) => value.to_string(),
        DataType::Bool(value) => value.to_string(),
        DataType::Empty => String::new(),
        other => other.to_string(),
    }
}
