//! Region catalog slice.
//!
//! Every other tool starts from the same flat JSON object mapping a region
//! code to its language, currency and activation status.
mod error;

pub use crate::error::{CatalogError, CatalogErrorExt};
pub use vgen_kernel::domain::region::{RegionCatalog, RegionRecord};

use std::path::Path;
use tracing::{debug, error};
use vgen_kernel::fs::{self, FsError};

/// Loads the region catalog at `path`.
///
/// Missing record fields take their defaults and unknown fields are ignored.
///
/// # Errors
/// [`CatalogError::NotFound`] when the file is absent, [`CatalogError::Decode`]
/// when it is not a JSON object of region records.
pub fn load_catalog(path: impl AsRef<Path>) -> Result<RegionCatalog, CatalogError> {
    let path = path.as_ref();
    let catalog: RegionCatalog = fs::read_json(path).map_err(|err| match err {
        FsError::NotFound { message, .. } => CatalogError::NotFound { message, context: None },
        FsError::Decode { source, context } => CatalogError::Decode { source, context },
        err => CatalogError::from(err),
    })?;

    debug!(path = %path.display(), regions = catalog.len(), "Region catalog loaded");
    Ok(catalog)
}

/// Loads the catalog and logs the failure once, the way every tool reports it.
///
/// Returns `None` when the catalog is unusable so callers can stop early.
pub fn load_or_log(path: impl AsRef<Path>) -> Option<RegionCatalog> {
    let path = path.as_ref();
    match load_catalog(path) {
        Ok(catalog) => Some(catalog),
        Err(err @ CatalogError::NotFound { .. }) => {
            error!("Error: Region data file not found at {} ({err})", path.display());
            None
        },
        Err(err @ CatalogError::Decode { .. }) => {
            error!("Error: Could not decode JSON from {} ({err})", path.display());
            None
        },
        Err(err) => {
            error!("Error: Could not read {} ({err})", path.display());
            None
        },
    }
}
