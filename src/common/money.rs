use bigdecimal::{BigDecimal, ParseBigDecimalError, RoundingMode, ToPrimitive};
use serde::{Deserialize, Deserializer};
use std::cmp::Ordering;
use std::fmt;

const SCALE: i64 = 100;

#[derive(Debug, Clone, Copy, Default)]
/// A currency amount held as whole cents.
///
/// Sheet prices come in as decimal text or JSON numbers and are rounded
/// half-up to two decimals once, at parse time. Everything after that is
/// integer arithmetic, so `sheets * cost` never picks up float noise.
///
/// # Examples
/// ```
/// use scrip_calculator::common::money::Money;
///
/// let cost: Money = "5".parse().unwrap();
/// assert_eq!(cost.times(2).to_string_2dp(), "10.00");
/// ```
pub struct Money(i64);

impl Money {
    pub fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    pub fn zero() -> Self {
        Money(0)
    }

    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Cost of `count` units priced at `self`, saturating on overflow.
    pub fn times(self, count: u64) -> Money {
        let count = i64::try_from(count).unwrap_or(i64::MAX);
        Money(self.0.saturating_mul(count))
    }

    /// Always exactly two decimals, zero included (`0.00`).
    pub fn to_string_2dp(&self) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        let cents = self.0.unsigned_abs();
        let scale = SCALE.unsigned_abs();
        format!("{sign}{}.{:02}", cents / scale, cents % scale)
    }
}

impl std::str::FromStr for Money {
    type Err = ParseBigDecimalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        if t.is_empty() {
            return Err(ParseBigDecimalError::Other("empty amount".into()));
        }

        let bd: BigDecimal = t.parse()?;

        let scaled = (bd * BigDecimal::from(SCALE)).with_scale_round(0, RoundingMode::HalfUp);
        let value: i64 = scaled
            .to_i64()
            .ok_or_else(|| ParseBigDecimalError::Other("amount overflow".into()))?;

        Ok(Money(value))
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Catalog authors write prices both as `5.00` and `"5.00"`.
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawAmount {
            Number(serde_json::Number),
            Text(String),
        }

        let text = match RawAmount::deserialize(deserializer)? {
            RawAmount::Number(n) => n.to_string(),
            RawAmount::Text(s) => s,
        };
        text.parse()
            .map_err(|e| serde::de::Error::custom(format!("invalid amount `{text}`: {e}")))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_2dp())
    }
}

impl PartialEq for Money {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}
impl Eq for Money {}

impl PartialOrd for Money {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Money {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}
