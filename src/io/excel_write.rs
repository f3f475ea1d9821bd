use std::path::Path;

use rust_xlsxwriter::{Format, Workbook};
use tracing::{debug, instrument};

use crate::error::{MenuError, Result};
use crate::model::MenuTable;

/// Writes the menu as a workbook that [`read_sheets`](super::excel_read::read_sheets)
/// accepts: one sheet per day and one `[meal, "item, item"]` row per meal.
///
/// Items are joined with commas, so the whole menu is checked first: an item
/// containing a comma or surrounding whitespace (including a blank item) would
/// read back differently and is rejected, as is a menu without days.
#[instrument(level = "debug", skip_all, fields(path = %path.display()))]
pub fn write_menu_workbook(path: &Path, table: &MenuTable) -> Result<()> {
    if table.is_empty() {
        return Err(MenuError::EmptyMenu);
    }
    check_exportable(table)?;

    let mut workbook = Workbook::new();
    let bold = Format::new().set_bold();

    for day in table.days() {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(day)?;

        let Some(meals) = table.meals(day) else {
            continue;
        };

        for (row_idx, (meal, items)) in meals.iter().enumerate() {
            let row = row_idx as u32;
            worksheet.write_string_with_format(row, 0, meal, &bold)?;
            worksheet.write_string(row, 1, items.join(", "))?;
        }
        worksheet.set_column_width(1, 60)?;
        debug!(day, meal_count = meals.len(), "sheet written");
    }

    workbook.save(path)?;
    Ok(())
}

fn check_exportable(table: &MenuTable) -> Result<()> {
    for day in table.days() {
        let Some(meals) = table.meals(day) else {
            continue;
        };
        for (meal, items) in meals {
            for item in items {
                let reason = if item.contains(',') {
                    "items cannot contain commas"
                } else if item.trim().is_empty() {
                    "items cannot be blank"
                } else if item.trim() != item {
                    "items cannot start or end with whitespace"
                } else {
                    continue;
                };
                return Err(MenuError::UnexportableItem {
                    day: day.to_string(),
                    meal: meal.clone(),
                    item: item.clone(),
                    reason: reason.to_string(),
                });
            }
        }
    }
    Ok(())
}
