//! Core library for the weekly-menu command line application.
//!
//! The spreadsheet and JSON adapters live under [`io`], the menu table and
//! its queries inside [`model`], the one-shot console lookup in [`shell`],
//! and the end-to-end flows that the binary drives under [`sync`].

pub mod error;
pub mod io;
pub mod model;
pub mod shell;
pub mod sync;

pub use error::{MenuError, Result};
pub use model::{MealInstance, MenuTable, SheetRows};
