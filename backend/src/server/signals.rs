//! Process termination signals.
//!
//! Unix listens for SIGINT and SIGTERM; other platforms for Ctrl-C.

use std::io;

/// Resolve with the name of the first termination signal received.
///
/// # Errors
/// Returns the I/O error raised while installing the handlers.
pub async fn wait_for_termination() -> io::Result<&'static str> {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};

        let mut sigint = signal(SignalKind::interrupt())?;
        let mut sigterm = signal(SignalKind::terminate())?;
        tokio::select! {
            _ = sigint.recv() => Ok("interrupt"),
            _ = sigterm.recv() => Ok("terminated"),
        }
    }

    #[cfg(not(unix))]
    {
        tokio::signal::ctrl_c().await?;
        Ok("interrupt")
    }
}
