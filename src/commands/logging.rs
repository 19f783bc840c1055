use log::LevelFilter;
use std::sync::Once;

const LOG_TARGET: &str = " logging";

static INIT: Once = Once::new();

/// Map the number of `--verbose` flags to a log level
#[must_use]
pub const fn log_level_for(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    }
}

/// Install the stderr logger and set the process-wide maximum level.
///
/// The logger is installed once per process; later calls only change the level.
pub fn configure_logging(level: LevelFilter) {
    let mut installed = Ok(());
    INIT.call_once(|| {
        installed = env_logger::Builder::new()
            .filter_level(LevelFilter::Trace)
            .format_timestamp(None)
            .format_module_path(false)
            .format_target(level >= LevelFilter::Debug)
            .try_init();
    });

    log::set_max_level(level);

    // records then go to whatever logger was installed first
    if let Err(e) = installed {
        log::debug!(target: LOG_TARGET, "Keeping the existing logger: {e}");
    }
}
