//! Diagnostics logging bootstrap.
//!
//! Failures surfaced to the user are a single styled line; the underlying
//! errors go through the `log` facade for diagnostics only. `flexi_logger`
//! writes them to stderr, `RUST_LOG` overrides the level.

use flexi_logger::{Logger, LoggerHandle};

/// Initializes stderr logging. `--verbose` raises the default level from
/// `warn` to `debug`.
///
/// Never panics; a failed init returns `None` and the tracker runs without
/// diagnostics.
pub fn init(verbose: bool) -> Option<LoggerHandle> {
    let default_spec = if verbose { "debug" } else { "warn" };
    Logger::try_with_env_or_str(default_spec)
        .ok()?
        .log_to_stderr()
        .start()
        .ok()
}
