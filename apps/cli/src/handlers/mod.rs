pub mod adapters;
pub mod pipeline;
pub mod reports;
pub mod simulate;

use std::fmt::Display;
use tracing::error;

/// Logs a failed unit of work as one line; the command itself still succeeds.
pub(crate) fn handled<T, E: Display>(result: Result<T, E>) -> Option<T> {
    result.map_err(|err| error!("{err}")).ok()
}
