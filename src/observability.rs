// In: src/observability.rs

//! Logging setup. The library itself only talks to the `log` facade; this
//! module wires up an `env_logger` backend for binaries and tests that want to
//! see the codec's diagnostics.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Once;

use log::LevelFilter;

use crate::error::DeckCodeError;

static INIT_LOGGER: Once = Once::new();

/// Installs an `Info`-level logger printing `[LEVEL] message` lines.
///
/// With `log_file`, output is appended to that file instead of stderr. Only the
/// first call in a process has any effect.
pub fn enable_verbose_logging(log_file: Option<&Path>) -> Result<(), DeckCodeError> {
    let file = match log_file {
        Some(path) => Some(OpenOptions::new().append(true).create(true).open(path)?),
        None => None,
    };

    INIT_LOGGER.call_once(|| {
        let mut builder = env_logger::Builder::new();

        builder.is_test(false);
        builder.filter_level(LevelFilter::Info);

        builder.format(|buf, record| {
            use std::io::Write;
            writeln!(buf, "[{}] {}", record.level(), record.args())?;
            buf.flush()?;
            Ok(())
        });

        if let Some(file) = file {
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }

        let _ = builder.try_init();
    });
    Ok(())
}
