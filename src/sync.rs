use std::io::{BufRead, Write};
use std::path::Path;

use tracing::{debug, info, instrument};

use crate::error::Result;
use crate::io::{excel_read, excel_write, json};
use crate::model::{MealInstance, MenuTable};
use crate::shell::{QueryOutcome, QueryShell};

/// Loads the workbook at `input` and builds the menu table from all sheets.
#[instrument(level = "info", skip_all, fields(input = %input.display()))]
pub fn load_menu(input: &Path) -> Result<MenuTable> {
    let sheets = excel_read::read_sheets(input)?;
    info!(sheet_count = sheets.len(), "read sheets from workbook");
    let table = MenuTable::build(&sheets)?;
    debug!(
        day_count = table.len(),
        meal_count = table.meal_count(),
        "menu table built"
    );
    Ok(table)
}

/// Runs the interactive session: dump the menu, answer one query, save the
/// menu as JSON and print the sample meal.
#[instrument(
    level = "info",
    skip_all,
    fields(input = %input.display(), output = %output.display())
)]
pub fn run_session<R: BufRead, W: Write>(
    input: &Path,
    output: &Path,
    reader: R,
    mut writer: W,
) -> Result<QueryOutcome> {
    let table = load_menu(input)?;
    write!(writer, "{table}")?;

    let mut shell = QueryShell::new(reader, writer);
    let outcome = shell.run(&table)?;
    let (_, mut writer) = shell.into_inner();

    let bytes = json::serialize(&table)?;
    json::persist(&bytes, output)?;
    info!(bytes = bytes.len(), "menu saved as JSON");

    write!(writer, "{}", sample_meal())?;
    writer.flush()?;
    Ok(outcome)
}

/// Converts a menu workbook straight into its JSON form.
#[instrument(
    level = "info",
    skip_all,
    fields(input = %input.display(), output = %output.display())
)]
pub fn excel_to_json(input: &Path, output: &Path) -> Result<()> {
    let table = load_menu(input)?;
    let bytes = json::serialize(&table)?;
    json::persist(&bytes, output)
}

/// Converts a JSON menu back into a workbook.
#[instrument(
    level = "info",
    skip_all,
    fields(input = %input.display(), output = %output.display())
)]
pub fn json_to_excel(input: &Path, output: &Path) -> Result<()> {
    let table = json::read_menu(input)?;
    info!(day_count = table.len(), "read menu from JSON");
    excel_write::write_menu_workbook(output, &table)
}

/// The fixed record printed at the end of every session.
pub fn sample_meal() -> MealInstance {
    MealInstance::new(
        "Monday",
        "2024-02-10",
        "Breakfast",
        vec!["Eggs".to_string(), "Toast".to_string()],
    )
}
