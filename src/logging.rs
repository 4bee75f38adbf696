use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Environment variable naming a log file; takes precedence over the
/// `log-file` configuration setting
pub(crate) const LOG_FILE_VAR: &str = "TORSNAKE_LOG";

/// Filter applied when `RUST_LOG` is not set
const DEFAULT_FILTER: &str = "torsnake=info";

/// Pick the file to log to, if any
pub(crate) fn log_path(env_value: Option<OsString>, configured: Option<&Path>) -> Option<PathBuf> {
    env_value
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(|| configured.map(Path::to_path_buf))
}

/// Send `tracing` output to the log file named by the environment or the
/// configuration.  Logging is left disabled if neither names one, since the
/// terminal itself is occupied by the game.
pub(crate) fn init(configured: Option<&Path>) -> anyhow::Result<()> {
    let Some(path) = log_path(std::env::var_os(LOG_FILE_VAR), configured) else {
        return Ok(());
    };
    let file = fs_err::File::create(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))?;
    Ok(())
}
