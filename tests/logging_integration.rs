//! Integration test for the verbosity flag.
//!
//! Logging state is process-wide, so this file holds a single test.

use crocad::Host;
use crocad::i18n::Translator;
use log::LevelFilter;

struct SinkHost {
    output_buf: Vec<u8>,
    error_buf: Vec<u8>,
}

impl Host for SinkHost {
    fn output(&mut self) -> impl std::io::Write {
        &mut self.output_buf
    }

    fn error(&mut self) -> impl std::io::Write {
        &mut self.error_buf
    }
}

#[test]
fn test_verbosity_sets_log_level() {
    let translator = Translator::identity();
    let mut host = SinkHost {
        output_buf: Vec::new(),
        error_buf: Vec::new(),
    };

    for (flags, expected) in [
        (&[][..], LevelFilter::Warn),
        (&["-v"][..], LevelFilter::Info),
        (&["-vv"][..], LevelFilter::Debug),
        (&["-v", "-v", "-v"][..], LevelFilter::Debug),
        (&["--verbose"][..], LevelFilter::Info),
    ] {
        let args: Vec<&str> = core::iter::once("crocad")
            .chain(flags.iter().copied())
            .chain(["-i", "ball", "-r", "2"])
            .collect();

        crocad::run(&mut host, &translator, args).unwrap();
        assert_eq!(log::max_level(), expected, "flags {flags:?}");
    }

    assert!(!host.output_buf.is_empty());
}
