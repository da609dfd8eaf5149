//! Installation of the global log subscriber.

use tracing::subscriber::{self, SetGlobalDefaultError};

/// Install a compact `fmt` subscriber as the global default. Fails if a subscriber was already
/// installed.
pub fn install_logger() -> Result<(), SetGlobalDefaultError> {
    let subscriber = tracing_subscriber::fmt().compact().finish();
    subscriber::set_global_default(subscriber)
}
