#[derive(thiserror::Error, Debug)]
pub enum CatalogError {
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed catalog document: {0}")]
    Json(#[from] serde_json::Error),
    #[error("item id `{0}` appears more than once in the catalog")]
    DuplicateItemId(String),
    #[error("category id `{0}` is derived from more than one category name")]
    DuplicateCategory(String),
    #[error("invalid scrip info: {0}")]
    InvalidScripInfo(String),
    #[error("invalid sheet cost `{0}`")]
    InvalidSheetCost(String),
}

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error(
        "missing catalog path. usage: scrip_calculator <catalog.json> [--state <path>] [--intents <path>] [--export text|csv]"
    )]
    MissingArg,
    #[error("invalid argument: {0}")]
    InvalidArg(String),
    #[error("catalog unavailable after {attempts} attempt(s): {last}")]
    CatalogUnavailable {
        attempts: u32,
        #[source]
        last: CatalogError,
    },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("parse error: {0}")]
    Parse(String),
}

impl AppError {
    /// Text shown to the person running the calculator when the session cannot continue.
    pub fn user_message(&self) -> String {
        match self {
            AppError::CatalogUnavailable { last, .. } => {
                format!("Failed to load menu data. Please try again. ({last})")
            }
            other => other.to_string(),
        }
    }
}
