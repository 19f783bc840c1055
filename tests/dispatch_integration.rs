//! Integration tests for command dispatch.
//!
//! Drives `crocad::run` end to end with an in-memory host: global options, alias resolution,
//! pattern output, and error reporting.

use crocad::i18n::Translator;
use crocad::{DispatchError, Host};

/// Test host that captures output to in-memory buffers.
struct TestHost {
    output_buf: Vec<u8>,
    error_buf: Vec<u8>,
}

impl TestHost {
    const fn new() -> Self {
        Self {
            output_buf: Vec::new(),
            error_buf: Vec::new(),
        }
    }

    fn output_str(&self) -> String {
        String::from_utf8_lossy(&self.output_buf).into_owned()
    }

    fn error_str(&self) -> String {
        String::from_utf8_lossy(&self.error_buf).into_owned()
    }
}

impl Host for TestHost {
    fn output(&mut self) -> impl std::io::Write {
        &mut self.output_buf
    }

    fn error(&mut self) -> impl std::io::Write {
        &mut self.error_buf
    }
}

fn run_crocad(host: &mut TestHost, args: &[&str]) -> Result<(), DispatchError> {
    let translator = Translator::identity();
    crocad::run(host, &translator, core::iter::once("crocad").chain(args.iter().copied()))
}

fn counts(output: &str) -> Vec<u32> {
    output
        .lines()
        .map(|line| line.parse().unwrap_or_else(|e| panic!("'{line}' is not a stitch count: {e}")))
        .collect()
}

#[test]
fn test_inhuman_ball_is_symmetric() {
    let mut host = TestHost::new();
    run_crocad(&mut host, &["-i", "ball", "-r", "3"]).unwrap();

    let rows = counts(&host.output_str());
    assert!(!rows.is_empty());

    let reversed: Vec<u32> = rows.iter().rev().copied().collect();
    assert_eq!(rows, reversed);
    assert!(host.error_str().is_empty());
}

#[test]
fn test_aliases_match_their_targets() {
    for (alias, target, args) in [
        ("sphere", "ball", &["--radius", "5"][..]),
        ("torus", "donut", &["-R", "8", "-r", "3"][..]),
    ] {
        let mut via_alias = TestHost::new();
        run_crocad(&mut via_alias, &[&["-a", alias][..], args].concat()).unwrap();

        let mut via_target = TestHost::new();
        run_crocad(&mut via_target, &[&["-a", target][..], args].concat()).unwrap();

        assert!(!via_alias.output_str().is_empty());
        assert_eq!(via_alias.output_str(), via_target.output_str(), "{alias} vs {target}");
    }
}

#[test]
fn test_rows_are_workable() {
    for args in [
        &["-i", "-a", "ball", "-r", "7"][..],
        &["-i", "-a", "cone", "-H", "9", "-r", "6", "--closed"][..],
        &["-i", "donut", "-R", "10", "-r", "4"][..],
    ] {
        let mut host = TestHost::new();
        run_crocad(&mut host, args).unwrap();

        let rows = counts(&host.output_str());
        for pair in rows.windows(2) {
            assert!(pair[1] <= pair[0] * 2, "{args:?}: {rows:?}");
            assert!(pair[0] <= pair[1] * 2, "{args:?}: {rows:?}");
        }
    }
}

#[test]
fn test_even_shaping_uses_multiples_of_six() {
    let mut host = TestHost::new();
    run_crocad(&mut host, &["--inhuman", "cone", "--height", "8", "--radius", "4"]).unwrap();

    let rows = counts(&host.output_str());
    assert!(rows.iter().all(|count| count % 6 == 0), "{rows:?}");
}

#[test]
fn test_narrative_output() {
    let mut host = TestHost::new();
    run_crocad(&mut host, &["ball", "--radius", "3"]).unwrap();

    let output = host.output_str();
    assert!(output.contains("Row 1 (6 stitches): 6 sc into a magic ring"), "output was: {output}");
    assert!(output.contains("(inc) x 6"), "output was: {output}");
    assert!(output.contains("(sc 1, inc) x 6"), "output was: {output}");
}

#[test]
fn test_command_help() {
    let mut host = TestHost::new();
    run_crocad(&mut host, &["donut", "--help"]).unwrap();

    let output = host.output_str();
    assert!(output.contains("--ring-radius"), "help was: {output}");
    assert!(output.contains("--tube-radius"), "help was: {output}");
}

#[test]
fn test_options_after_the_command_belong_to_it() {
    let mut host = TestHost::new();
    let result = run_crocad(&mut host, &["ball", "-r", "3", "-i"]);

    assert!(matches!(result, Err(DispatchError::Command(_))), "got {result:?}");
}

#[test]
fn test_help_is_not_a_command() {
    let mut host = TestHost::new();
    let error = run_crocad(&mut host, &["help"]).unwrap_err();

    let code = crocad::report_error(&mut host, &Translator::identity(), &error);

    assert_eq!(code, 2);
    assert!(host.error_str().contains("Unknown command: help"), "error was: {}", host.error_str());
}

#[test]
fn test_unknown_global_option() {
    let mut host = TestHost::new();
    let error = run_crocad(&mut host, &["--bogus", "ball", "-r", "3"]).unwrap_err();

    let code = crocad::report_error(&mut host, &Translator::identity(), &error);

    assert_eq!(code, 2);
    assert!(host.output_str().is_empty());
    assert!(host.error_str().contains("--bogus"), "error was: {}", host.error_str());
}

#[test]
fn test_command_failure_exit_code() {
    let mut host = TestHost::new();
    let error = run_crocad(&mut host, &["donut", "-R", "2", "-r", "3"]).unwrap_err();

    let code = crocad::report_error(&mut host, &Translator::identity(), &error);

    assert_eq!(code, 1);
    let text = host.error_str();
    assert!(text.starts_with("error: "), "error was: {text}");
    assert!(text.contains("must be larger than the tube radius"), "error was: {text}");
}

#[test]
fn test_huge_dimensions_are_rejected() {
    for args in [
        &["-i", "ball", "-r", "1e9"][..],
        &["-i", "donut", "-R", "1e9", "-r", "1"][..],
        &["-i", "-a", "donut", "-R", "1e10", "-r", "1"][..],
        &["-i", "cone", "-H", "1", "-r", "1e9", "-t", "999999999"][..],
        &["-i", "cone", "-H", "1e9", "-r", "2"][..],
    ] {
        let mut host = TestHost::new();
        let result = run_crocad(&mut host, args);

        match result {
            Err(DispatchError::Command(e)) => assert!(e.to_string().contains("maximum"), "{args:?}: {e}"),
            other => panic!("expected a command error for {args:?}, got {other:?}"),
        }
        assert!(host.output_str().is_empty());
    }
}

#[test]
fn test_largest_dimensions_are_workable() {
    for args in [
        &["-i", "ball", "-r", "1000"][..],
        &["-i", "-a", "donut", "-R", "1000", "-r", "999"][..],
        &["-i", "-a", "cone", "-H", "1000", "-r", "1000", "--closed"][..],
    ] {
        let mut host = TestHost::new();
        run_crocad(&mut host, args).unwrap();

        let rows = counts(&host.output_str());
        assert!(!rows.is_empty(), "{args:?}");
        for pair in rows.windows(2) {
            assert!(pair[1] <= pair[0] * 2 && pair[0] <= pair[1] * 2, "{args:?}");
        }
    }
}
