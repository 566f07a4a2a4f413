use std::{path::PathBuf, thread, time::Duration};

use tracing::{info, warn};

use crate::{
    common::error::{AppError, CatalogError},
    domain::catalog::Catalog,
};

/// Anything that can hand over the raw catalog document.
pub trait CatalogSource {
    fn fetch(&mut self) -> Result<String, CatalogError>;

    /// Human-readable origin, for logs.
    fn describe(&self) -> String;
}

#[derive(Debug, Clone)]
pub struct FileCatalogSource {
    path: PathBuf,
}

impl FileCatalogSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CatalogSource for FileCatalogSource {
    fn fetch(&mut self) -> Result<String, CatalogError> {
        Ok(std::fs::read_to_string(&self.path)?)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Bounded exponential backoff for catalog loading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub attempts: u32,
    pub initial_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            attempts: 3,
            initial_delay: Duration::from_millis(200),
        }
    }
}

impl RetryPolicy {
    /// Delay before retry number `retry` (1-based): the initial delay doubled
    /// for each earlier retry.
    pub fn delay_before(&self, retry: u32) -> Duration {
        let factor = 2u32.saturating_pow(retry.saturating_sub(1));
        self.initial_delay.saturating_mul(factor)
    }
}

/// Fetches and indexes the catalog, sleeping with `thread::sleep` between
/// attempts.
pub fn load_catalog<S: CatalogSource>(
    source: &mut S,
    policy: &RetryPolicy,
) -> Result<Catalog, AppError> {
    load_catalog_with(source, policy, thread::sleep)
}

/// Same as [`load_catalog`] with an injectable sleeper.
///
/// Every failure, whether unreadable, malformed or invalid, is retried up to
/// `policy.attempts` times. The last error is returned inside
/// [`AppError::CatalogUnavailable`].
pub fn load_catalog_with<S, F>(
    source: &mut S,
    policy: &RetryPolicy,
    mut sleep: F,
) -> Result<Catalog, AppError>
where
    S: CatalogSource,
    F: FnMut(Duration),
{
    let attempts = policy.attempts.max(1);
    let mut attempt = 1;

    loop {
        match source.fetch().and_then(|text| Catalog::from_json(&text)) {
            Ok(catalog) => {
                info!(
                    source = %source.describe(),
                    attempt,
                    categories = catalog.categories().len(),
                    "catalog loaded"
                );
                return Ok(catalog);
            }
            Err(err) if attempt < attempts => {
                let delay = policy.delay_before(attempt);
                warn!(
                    source = %source.describe(),
                    attempt,
                    error = %err,
                    delay_ms = delay.as_millis() as u64,
                    "catalog load failed, retrying"
                );
                sleep(delay);
                attempt += 1;
            }
            Err(err) => {
                return Err(AppError::CatalogUnavailable {
                    attempts,
                    last: err,
                });
            }
        }
    }
}
