//! Logging bootstrap for the binary. The library only talks to the `log`
//! facade; this wires it to stderr.

use flexi_logger::{Logger, LoggerHandle};

/// Level used when nothing else is configured.
pub const DEFAULT_LEVEL: &str = "info";

/// Start logging to stderr. Keep the returned handle alive until exit.
pub fn init_logging(level: &str) -> Result<LoggerHandle, String> {
    Logger::try_with_str(level)
        .map_err(|err| format!("invalid log level `{level}`: {err}"))?
        .log_to_stderr()
        .format(flexi_logger::default_format)
        .start()
        .map_err(|err| format!("failed to start logger: {err}"))
}
