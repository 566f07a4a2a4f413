use crate::common::{event::Intent, quantity::RawQuantity};
use std::io::Read;

#[derive(serde::Deserialize)]
/// Internal CSV row for an intent script. `target` and `value` stay empty
/// for actions that do not need them.
struct CsvRow {
    action: String,
    #[serde(default)]
    target: Option<String>,
    #[serde(default)]
    value: Option<String>,
}

/// Reads user intents from a CSV script.
///
/// Supported headers: `action,target,value`. Actions are matched
/// case-insensitively: `set`, `adjust`, `clear`, `toggle_category`,
/// `toggle_summary`, `copy_summary`. `set` passes its value through
/// untouched so the ledger can normalize it; `adjust` needs an integer.
/// Errors carry the 1-based data row number.
///
/// # Examples
///
/// ```
/// use scrip_calculator::io::reader::read_intents;
/// use scrip_calculator::common::event::Intent;
/// use csv::ReaderBuilder;
///
/// let data = "action,target,value\n\
/// set,burger,3\n\
/// adjust,soda,-1\n\
/// clear,,\n";
/// let mut rdr = ReaderBuilder::new().from_reader(data.as_bytes());
/// let intents: Vec<_> = read_intents(&mut rdr).collect();
///
/// assert!(matches!(intents[0], Ok(Intent::SetQuantity { .. })));
/// assert!(matches!(intents[1], Ok(Intent::Adjust { delta: -1, .. })));
/// assert!(matches!(intents[2], Ok(Intent::Clear)));
/// ```
pub fn read_intents<R: Read>(
    rdr: &mut csv::Reader<R>,
) -> impl Iterator<Item = Result<Intent, String>> + '_ {
    rdr.deserialize::<CsvRow>().enumerate().map(|(i, res)| {
        let row_no = i + 1;
        let row = res.map_err(|e| format!("row {row_no}: {e}"))?;
        let action = row.action.trim().to_ascii_lowercase();
        let target = row
            .target
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty());

        let require_target = || {
            target
                .clone()
                .ok_or_else(|| format!("row {row_no}: {action} missing target"))
        };

        match action.as_str() {
            "set" => Ok(Intent::SetQuantity {
                item: require_target()?,
                raw: RawQuantity::Text(row.value.clone().unwrap_or_default()),
            }),
            "adjust" => {
                let item = require_target()?;
                let value = row
                    .value
                    .as_deref()
                    .map(str::trim)
                    .filter(|v| !v.is_empty())
                    .ok_or_else(|| format!("row {row_no}: adjust missing value for {item}"))?;
                let delta = value
                    .parse::<i64>()
                    .map_err(|_| format!("row {row_no}: adjust value `{value}` is not an integer"))?;
                Ok(Intent::Adjust { item, delta })
            }
            "clear" => Ok(Intent::Clear),
            "toggle_category" => Ok(Intent::ToggleCategory {
                category: require_target()?,
            }),
            "toggle_summary" => Ok(Intent::ToggleSummary),
            "copy_summary" => Ok(Intent::CopySummary),
            other => Err(format!("row {row_no}: unknown action: {other}")),
        }
    })
}
