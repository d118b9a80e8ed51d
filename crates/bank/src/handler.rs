use eyre::EyreHandler;
use std::{error::Error, fmt};

/// Reports errors as a single line with their causes, unless `BANK_DEBUG` is set.
struct Handler {
    debug_handler: Option<Box<dyn EyreHandler>>,
}

impl EyreHandler for Handler {
    fn debug(&self, error: &(dyn Error + 'static), f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(debug_handler) = &self.debug_handler {
            return debug_handler.debug(error, f);
        }

        write!(f, "{error}")?;
        let mut source = error.source();
        while let Some(cause) = source {
            write!(f, ": {cause}")?;
            source = cause.source();
        }
        Ok(())
    }

    fn track_caller(&mut self, location: &'static std::panic::Location<'static>) {
        if let Some(debug_handler) = &mut self.debug_handler {
            debug_handler.track_caller(location);
        }
    }
}

/// Installs the [`eyre`] and panic hooks.
///
/// Panics always go through the `color-eyre` hook. Errors do too when `BANK_DEBUG` is set.
pub fn install() {
    let (panic_hook, debug_hook) = color_eyre::config::HookBuilder::default().into_hooks();
    panic_hook.install();
    let debug_hook = debug_hook.into_eyre_hook();
    let debug = std::env::var_os("BANK_DEBUG").is_some();
    if let Err(err) = eyre::set_hook(Box::new(move |e| {
        Box::new(Handler { debug_handler: debug.then(|| debug_hook(e)) })
    })) {
        debug!("failed to install eyre error hook: {err}");
    }
}
