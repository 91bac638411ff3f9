//! Diagnostic logging setup.
//!
//! Chat transcripts are written by [`crate::utils::logging::LoggingState`];
//! this module only installs the `tracing` subscriber.

use std::error::Error;
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_FILTER: &str = "warn";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraceTarget {
    /// Drop diagnostics; stderr would corrupt the full-screen UI.
    Off,
    Stderr,
    File(PathBuf),
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

pub fn init_tracing(target: TraceTarget) -> Result<(), Box<dyn Error>> {
    match target {
        TraceTarget::Off => Ok(()),
        TraceTarget::Stderr => {
            fmt()
                .with_env_filter(env_filter())
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact()
                .try_init()
                .map_err(|err| -> Box<dyn Error> { err })?;
            Ok(())
        }
        TraceTarget::File(path) => {
            let file = OpenOptions::new().create(true).append(true).open(&path)?;
            fmt()
                .with_env_filter(env_filter())
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .try_init()
                .map_err(|err| -> Box<dyn Error> { err })?;
            tracing::debug!(path = %path.display(), "tracing to file");
            Ok(())
        }
    }
}
