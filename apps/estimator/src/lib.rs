//! # Spray Estimator Application
//!
//! Interactive front end for `spray-core`: prompts on stdin/stdout, prints
//! the estimate, and saves it to a text file on request.
//!
//! ## Module Organization
//! ```text
//! spray_estimator/
//! ├── lib.rs      ◄─── You are here (logging setup & run)
//! ├── config.rs   ◄─── Environment configuration
//! ├── error.rs    ◄─── CliError / SaveError
//! ├── prompt.rs   ◄─── Ask-until-valid over BufRead + Write
//! ├── screen.rs   ◄─── Terminal clearing
//! ├── store.rs    ◄─── estimate_YYYYMMDD_HHMMSS.txt writer
//! └── session.rs  ◄─── The end-to-end estimate flow
//! ```

pub mod config;
pub mod error;
pub mod prompt;
pub mod screen;
pub mod session;
pub mod store;

use std::io;

use tracing::info;
use tracing_subscriber::EnvFilter;

use config::EstimatorConfig;
use error::CliError;
use session::Session;

/// Runs one interactive estimate on the process's terminal.
///
/// ## Startup Sequence
/// 1. Initialize logging (stderr)
/// 2. Load configuration from the environment
/// 3. Lock stdin/stdout and run the session
pub fn run() -> Result<(), CliError> {
    init_tracing();

    let config = EstimatorConfig::load()?;
    info!(
        output_dir = %config.output_dir.display(),
        clear_screen = config.clear_screen,
        "Configuration loaded"
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(config, stdin.lock(), stdout.lock());
    let outcome = session.run()?;

    info!(
        saved = outcome.saved_to.is_some(),
        total_cost = outcome.result.total_cost,
        "Session complete"
    );
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show rejected answers and config
/// - `RUST_LOG=spray_estimator=info` - Calculation and save events only
/// - Default: WARN, so the prompts on stdout stay uncluttered
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
