//! # sizedecor-common
//!
//! Shared types, error definitions, configuration models, and constants
//! used across the sizedecor workspace.
//!
//! This crate is the leaf of the dependency graph. It depends on no other
//! internal crate and holds the unit table that every formatter reads.

pub mod config;
pub mod constants;
pub mod error;
pub mod types;
