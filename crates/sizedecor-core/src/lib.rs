//! # sizedecor-core
//!
//! Renders byte counts as short human-readable strings with a binary
//! magnitude suffix (`b`, `Kb`, `Mb`, ... `Yb`).
//!
//! This crate provides:
//! - **Scaling**: [`scale`] divides a magnitude by 1024 until it drops below
//!   the next unit, capped at yottabytes.
//! - **Decoration**: [`SizeDecor`] wraps an optional size and renders it
//!   under width, justification, case and precision directives.
//! - **Formattable**: the [`Formattable`] seam for callers that hand
//!   directives over explicitly instead of through `format!`.
//!
//! # Example
//!
//! ```rust
//! use sizedecor_core::{FormatOptions, SizeDecor};
//!
//! let size = SizeDecor::from(1536);
//! assert_eq!(size.format(&FormatOptions::default().precision(1)), "1.5Kb");
//! assert_eq!(format!("{size:>7.1}"), "  1.5Kb");
//! assert_eq!(format!("{:#}", SizeDecor::from(1024)), "1KB");
//! assert_eq!(SizeDecor::null().to_string(), "NULL");
//! ```

pub mod decor;
pub mod formattable;
pub mod scale;

pub use decor::SizeDecor;
pub use formattable::Formattable;
pub use scale::{Scaled, scale};
pub use sizedecor_common::types::{FormatFlags, FormatOptions};
