//! A tool to generate crochet patterns for simple 3D shapes.
//!
//! # Usage
//!
//! ```bash
//! crocad [-v|--verbose]... [-a|--accurate] [-i|--inhuman] COMMAND [COMMAND-OPTIONS]
//! crocad --help
//! crocad COMMAND --help
//! ```
//!
//! Supported commands are `ball` (alias `sphere`), `donut` (alias `torus`), and `cone`.
//!
//! # Examples
//!
//! A ball five stitches in radius:
//! ```bash
//! crocad ball --radius 5
//! ```
//!
//! Just the stitch count of each round of a donut, with exact rather than even shaping:
//! ```bash
//! crocad --accurate --inhuman donut --ring-radius 8 --tube-radius 3
//! ```
//!
//! # Global Options
//!
//! Global options must come before the command name:
//!
//! - `-v`, `--verbose`: more diagnostics on stderr (repeat for debug output)
//! - `-a`, `--accurate`: geometrically exact stitch counts instead of even shaping
//! - `-i`, `--inhuman`: print only the stitch count of each row, one per line
//!
//! # Translations
//!
//! Messages are translated when a catalog named `res/messages_<lang>.mo` exists for the
//! two-letter language of the current locale. Without one, messages are printed in English.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use crocad::Host;
use std::io::Write;
use std::io::{stderr, stdout};
use std::process::ExitCode;

/// Host that writes to the real standard streams.
#[derive(Debug, Clone, Default)]
struct RealHost;

#[cfg_attr(coverage_nightly, coverage(off))]
impl Host for RealHost {
    fn output(&mut self) -> impl Write {
        stdout()
    }

    fn error(&mut self) -> impl Write {
        stderr()
    }
}

#[cfg_attr(coverage_nightly, coverage(off))]
fn main() -> ExitCode {
    let mut host = RealHost;
    let translator = crocad::i18n::initialize_localization();

    match crocad::run(&mut host, &translator, std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => ExitCode::from(crocad::report_error(&mut host, &translator, &e)),
    }
}
