//! # Dataset Crate
//!
//! Loads the sales transaction table from a CSV file into an immutable
//! [`core_types::Table`]. This runs exactly once, at process start; nothing
//! is ever written back to the source.
//!
//! ## Public API
//!
//! - `load`: reads and type-checks the whole file.
//! - `LoadError`: fatal load failures (unreadable file, malformed CSV, bad date,
//!   bad amount or quantity).

pub mod error;
pub mod loader;
mod record;

pub use error::LoadError;
pub use loader::{load, load_from_reader};
