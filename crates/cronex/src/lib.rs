//! # cronex
//!
//! A cron expression expander: parses the five time fields of a standard
//! cron expression (plus the trailing command) and renders a table showing
//! every concrete value each field matches.
//!
//! This crate provides:
//! - **Parser**: [`parse`] a cron string into a structured [`CronExpression`]
//! - **Renderer**: [`render`] that record as a fixed-format table
//! - **Expander**: the per-field [`expand`] routine the parser is built on
//!
//! ## Usage
//!
//! ```rust
//! use cronex::{parse, render};
//!
//! let cron = parse("*/15 0 1,15 * 1-5 /usr/bin/find").unwrap();
//! let table = render(&cron);
//!
//! assert!(table.contains("minute        0 15 30 45"));
//! assert!(table.contains("day of month  1 15"));
//! assert!(table.contains("command       /usr/bin/find"));
//! ```
//!
//! ## Field syntax quick reference
//!
//! | Term | Meaning | Example (minute field) |
//! |------|---------|------------------------|
//! | `*` | Every value | `*` -> 0..59 |
//! | `N` | One value | `30` -> 30 |
//! | `A-B` | Inclusive range | `5-10` -> 5 6 7 8 9 10 |
//! | `A/N` | Every Nth from A | `5/15` -> 5 20 35 50 |
//! | `*/N` | Every Nth from 0 | `*/15` -> 0 15 30 45 |
//! | `A,B` | List of terms | `1,15` -> 1 15 |
//!
//! Day-of-month and month are entered 1-based and displayed 1-based; the
//! other fields are 0-based throughout. Malformed numeric input is parsed
//! best-effort by truncating to the field's digit width (`111` in the minute
//! field means `11`); see [`expand`] for the details.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
mod expand;
mod field;
mod parser;
mod table;

pub use error::{CronError, CronResult};
pub use expand::{expand, FieldValue};
pub use field::Field;
pub use parser::{parse, CronExpression};
pub use table::render;
