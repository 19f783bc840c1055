use crate::i18n::Translator;
use log::LevelFilter;

/// Per-invocation state handed from the dispatcher to a shape command
#[derive(Debug, Clone, Copy)]
pub struct RuntimeContext<'a> {
    translator: &'a Translator,
    log_level: LevelFilter,
}

impl<'a> RuntimeContext<'a> {
    #[must_use]
    pub const fn new(translator: &'a Translator, log_level: LevelFilter) -> Self {
        Self { translator, log_level }
    }

    #[must_use]
    pub const fn translator(&self) -> &'a Translator {
        self.translator
    }

    #[must_use]
    pub const fn log_level(&self) -> LevelFilter {
        self.log_level
    }
}
