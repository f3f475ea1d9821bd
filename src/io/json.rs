use std::fs;
use std::path::Path;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tracing::{debug, instrument};

use crate::error::{MenuError, Result};
use crate::model::MenuTable;

const INDENT: &[u8] = b"    ";

/// Serializes the menu as a `{ day: { meal: [item, ...] } }` object indented
/// with four spaces.
pub fn serialize(table: &MenuTable) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(INDENT);
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    table.serialize(&mut serializer)?;
    Ok(buffer)
}

/// Parses a menu previously produced by [`serialize`].
pub fn deserialize(bytes: &[u8]) -> Result<MenuTable> {
    Ok(serde_json::from_slice(bytes)?)
}

/// Writes `bytes` to `path`, replacing any existing file.
#[instrument(level = "debug", skip_all, fields(path = %path.display(), len = bytes.len()))]
pub fn persist(bytes: &[u8], path: &Path) -> Result<()> {
    fs::write(path, bytes).map_err(|source| MenuError::OutputWrite {
        path: path.to_path_buf(),
        source,
    })
}

/// Reads a JSON menu from disk.
#[instrument(level = "debug", skip_all, fields(path = %path.display()))]
pub fn read_menu(path: &Path) -> Result<MenuTable> {
    if !path.exists() {
        return Err(MenuError::MissingInput(path.to_path_buf()));
    }
    let bytes = fs::read(path)?;
    let table = deserialize(&bytes)?;
    debug!(day_count = table.len(), "menu parsed from JSON");
    Ok(table)
}
