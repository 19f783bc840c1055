//! crocad crate
//!
//! Generates crochet patterns (row-by-row stitch instructions) for simple solids of
//! revolution: a torus, a sphere, and a cone.
//!
//! # Module Organization
//!
//! - [`commands`]: Command-line dispatch, global options, and logging setup
//! - [`i18n`]: Locale detection and translation catalogs
//! - [`pattern`]: Stitch-count shaping and pattern rendering
//! - [`shapes`]: The shape generators behind each command
//!
//! This crate is an implementation detail of the `crocad` tool. Its API is fluid and may change
//! without warning and in a semver-incompatible way.

/// Result type alias using `ohno::AppError` as the default error type.
pub type Result<T, E = ohno::AppError> = core::result::Result<T, E>;

#[doc(hidden)]
pub mod commands;

#[doc(hidden)]
pub mod i18n;

#[doc(hidden)]
pub mod pattern;

#[doc(hidden)]
pub mod shapes;

pub use crate::commands::{DispatchError, Host, report_error, run};
