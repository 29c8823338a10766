//! JSON job files.

use crate::types::*;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::path::Path;

pub(crate) async fn load<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    let bytes = tokio::fs::read(path).await?;
    let job = serde_json::from_slice(&bytes).map_err(|e| {
        PricingError::Config(format!("Failed to parse {}: {}", path.display(), e))
    })?;
    log::debug!("Loaded job file {}", path.display());
    Ok(job)
}

pub(crate) async fn save<T: Serialize>(job: &T, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(job)?;
    tokio::fs::write(path, json).await?;
    log::debug!("Saved job file {}", path.display());
    Ok(())
}
