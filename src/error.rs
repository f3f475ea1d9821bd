use std::path::PathBuf;

use thiserror::Error;

/// Convenient alias for fallible results returned throughout the crate.
pub type Result<T> = std::result::Result<T, MenuError>;

/// Error type covering the different failure cases that can occur when the
/// tool reads the weekly menu, answers a query, or writes the menu back out.
#[derive(Debug, Error)]
pub enum MenuError {
    /// Wrapper for IO failures such as console reads and writes.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Raised when JSON parsing or serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Raised when the workbook cannot be opened at all.
    #[error("failed to open workbook {}: {source}", .path.display())]
    InputOpen {
        path: PathBuf,
        #[source]
        source: calamine::XlsxError,
    },

    /// Errors bubbled up from the Excel reader implementation.
    #[error("Excel read error: {0}")]
    ExcelRead(#[from] calamine::XlsxError),

    /// Errors bubbled up from the Excel writer implementation.
    #[error("Excel write error: {0}")]
    ExcelWrite(#[from] rust_xlsxwriter::XlsxError),

    /// Raised when a sheet row does not have the `[meal, items]` shape.
    #[error("malformed row {row} in sheet '{sheet}': {reason}")]
    MalformedRow {
        sheet: String,
        row: usize,
        reason: String,
    },

    /// Raised when the serialized menu cannot be written to disk.
    #[error("failed to write {}: {source}", .path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Raised when an item cannot be written to a workbook cell without
    /// changing how it reads back.
    #[error("cannot export item {item:?} of {meal} on {day}: {reason}")]
    UnexportableItem {
        day: String,
        meal: String,
        item: String,
        reason: String,
    },

    /// Raised when asked to export a menu with no days.
    #[error("menu has no days to export")]
    EmptyMenu,

    /// Raised when the CLI receives an unsupported conversion request.
    #[error("unsupported conversion from {from:?} to {to:?}")]
    UnsupportedConversion { from: String, to: String },

    /// Raised when the user provides a path that does not exist.
    #[error("input file not found: {0}")]
    MissingInput(PathBuf),

    /// Raised when the tracing subscriber fails to initialise.
    #[error("failed to initialise logging: {0}")]
    Logging(String),
}
