/// A quantity exactly as it arrived from an input control: free text from a
/// field, a number from a script, or a float from a spinner.
#[derive(Debug, Clone, PartialEq)]
pub enum RawQuantity {
    Text(String),
    Integer(i64),
    Float(f64),
}

impl RawQuantity {
    /// Coerces the raw value into a storable quantity.
    ///
    /// Text takes its leading integer (`"12abc"` is 12, `"3.7"` is 3) and
    /// anything without leading digits is 0. Negative results clamp to 0 and
    /// values past `u32::MAX` saturate. Never fails.
    ///
    /// # Examples
    /// ```
    /// use scrip_calculator::common::quantity::RawQuantity;
    ///
    /// assert_eq!(RawQuantity::from("7").normalize(), 7);
    /// assert_eq!(RawQuantity::from("abc").normalize(), 0);
    /// assert_eq!(RawQuantity::from(-3).normalize(), 0);
    /// assert_eq!(RawQuantity::from(2.9).normalize(), 2);
    /// ```
    pub fn normalize(&self) -> u32 {
        match self {
            RawQuantity::Text(s) => clamp(parse_leading_int(s)),
            RawQuantity::Integer(n) => clamp(*n),
            RawQuantity::Float(f) => {
                if f.is_finite() {
                    // `as` saturates and truncates toward zero.
                    clamp(f.trunc() as i64)
                } else {
                    0
                }
            }
        }
    }
}

fn clamp(value: i64) -> u32 {
    if value <= 0 {
        0
    } else {
        u32::try_from(value).unwrap_or(u32::MAX)
    }
}

fn parse_leading_int(s: &str) -> i64 {
    let t = s.trim_start();
    let (negative, digits) = match t.as_bytes().first() {
        Some(b'-') => (true, &t[1..]),
        Some(b'+') => (false, &t[1..]),
        _ => (false, t),
    };

    let mut value: i64 = 0;
    for b in digits.bytes().take_while(u8::is_ascii_digit) {
        value = value
            .saturating_mul(10)
            .saturating_add(i64::from(b - b'0'));
    }

    if negative { -value } else { value }
}

impl From<&str> for RawQuantity {
    fn from(value: &str) -> Self {
        RawQuantity::Text(value.to_string())
    }
}

impl From<String> for RawQuantity {
    fn from(value: String) -> Self {
        RawQuantity::Text(value)
    }
}

impl From<i64> for RawQuantity {
    fn from(value: i64) -> Self {
        RawQuantity::Integer(value)
    }
}

impl From<i32> for RawQuantity {
    fn from(value: i32) -> Self {
        RawQuantity::Integer(i64::from(value))
    }
}

impl From<u32> for RawQuantity {
    fn from(value: u32) -> Self {
        RawQuantity::Integer(i64::from(value))
    }
}

impl From<f64> for RawQuantity {
    fn from(value: f64) -> Self {
        RawQuantity::Float(value)
    }
}
