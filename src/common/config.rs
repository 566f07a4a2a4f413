use std::{path::PathBuf, time::Duration};

use crate::{common::error::AppError, io::catalog_source::RetryPolicy};

/// How the order summary is exported after the intents have run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Text,
    Csv,
}

impl std::str::FromStr for ExportFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(ExportFormat::Text),
            "csv" => Ok(ExportFormat::Csv),
            other => Err(AppError::InvalidArg(format!(
                "unknown export format `{other}` (expected text or csv)"
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub catalog_path: PathBuf,
    /// Where the ledger is restored from and saved to between sessions.
    pub state_path: Option<PathBuf>,
    pub intents_path: Option<PathBuf>,
    pub export: ExportFormat,
    pub retry: RetryPolicy,
}

impl Config {
    /// Builds the configuration from process arguments. The first argument is
    /// the program name and is skipped.
    pub fn from_args<I, S>(args: I) -> Result<Self, AppError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut catalog_path = None;
        let mut state_path = None;
        let mut intents_path = None;
        let mut export = ExportFormat::default();
        let mut retry = RetryPolicy::default();

        let args: Vec<String> = args.into_iter().map(|s| s.into()).collect();
        let mut it = args.into_iter().skip(1);
        while let Some(arg) = it.next() {
            match arg.as_str() {
                "--state" => state_path = Some(PathBuf::from(value_for(&arg, it.next())?)),
                "--intents" => intents_path = Some(PathBuf::from(value_for(&arg, it.next())?)),
                "--export" => export = value_for(&arg, it.next())?.parse()?,
                "--retries" => {
                    let attempts: u32 = parse_number(&arg, value_for(&arg, it.next())?)?;
                    if attempts == 0 {
                        return Err(AppError::InvalidArg("--retries must be at least 1".into()));
                    }
                    retry.attempts = attempts;
                }
                "--backoff-ms" => {
                    let ms: u64 = parse_number(&arg, value_for(&arg, it.next())?)?;
                    retry.initial_delay = Duration::from_millis(ms);
                }
                flag if flag.starts_with("--") => {
                    return Err(AppError::InvalidArg(format!("unknown flag `{flag}`")));
                }
                path if catalog_path.is_none() => catalog_path = Some(PathBuf::from(path)),
                extra => {
                    return Err(AppError::InvalidArg(format!("unexpected argument `{extra}`")));
                }
            }
        }

        Ok(Config {
            catalog_path: catalog_path.ok_or(AppError::MissingArg)?,
            state_path,
            intents_path,
            export,
            retry,
        })
    }
}

fn value_for(flag: &str, value: Option<String>) -> Result<String, AppError> {
    value.ok_or_else(|| AppError::InvalidArg(format!("{flag} requires a value")))
}

fn parse_number<T: std::str::FromStr>(flag: &str, value: String) -> Result<T, AppError> {
    value
        .trim()
        .parse()
        .map_err(|_| AppError::InvalidArg(format!("{flag} expects a number, got `{value}`")))
}
