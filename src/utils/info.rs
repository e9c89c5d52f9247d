use color_eyre::eyre::Result;
use std::fmt;
use std::sync::{Mutex, PoisonError};
use tracing::{Level, debug, error, info, trace, warn};
use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, prelude::*};

/// Installs the global subscriber. `RUST_LOG` takes precedence over `verbose`.
pub fn init_tracing(verbose: bool) -> Result<()> {
    let default_level = if verbose { "debug" } else { "info" };
    let fmt_layer = tracing_subscriber::fmt::layer().compact();
    let filter_layer =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(default_level))?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .with(ErrorLayer::default())
        .init();

    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    Started(String),
    Passed(String),
    Info(String),
    Debug(String),
    Failed { step: String, cause: String },
}

impl Diagnostic {
    pub fn level(&self) -> Level {
        match self {
            Diagnostic::Debug(_) => Level::DEBUG,
            Diagnostic::Failed { .. } => Level::ERROR,
            _ => Level::INFO,
        }
    }
}

/// Sink for the checker's progress and failure diagnostics.
pub trait Reporter: Send + Sync {
    fn report(&self, diagnostic: Diagnostic);
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::Started(step) => write!(f, "Starting {}", step),
            Diagnostic::Passed(step) => write!(f, "{} passed", step),
            Diagnostic::Info(message) | Diagnostic::Debug(message) => write!(f, "{}", message),
            Diagnostic::Failed { step, cause } => write!(f, "{} failed: {}", step, cause),
        }
    }
}

/// Prints progress markers on stdout and mirrors every event into `tracing` at its level.
#[derive(Debug, Default)]
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn report(&self, diagnostic: Diagnostic) {
        match &diagnostic {
            Diagnostic::Started(step) => println!("❓ Starting {}", step),
            Diagnostic::Passed(step) => println!("✅ {}: success", step),
            Diagnostic::Info(message) => println!("✅ {}", message),
            Diagnostic::Debug(_) => {}
            Diagnostic::Failed { step, cause } => println!("❌ {}: failed ({})", step, cause),
        }

        let level = diagnostic.level();
        if level == Level::ERROR {
            error!("{}", diagnostic);
        } else if level == Level::WARN {
            warn!("{}", diagnostic);
        } else if level == Level::INFO {
            info!("{}", diagnostic);
        } else if level == Level::DEBUG {
            debug!("{}", diagnostic);
        } else {
            trace!("{}", diagnostic);
        }
    }
}

/// Keeps every diagnostic in arrival order.
#[derive(Debug, Default)]
pub struct MemoryReporter {
    events: Mutex<Vec<Diagnostic>>,
}

impl MemoryReporter {
    pub fn events(&self) -> Vec<Diagnostic> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Reporter for MemoryReporter {
    fn report(&self, diagnostic: Diagnostic) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(diagnostic);
    }
}
