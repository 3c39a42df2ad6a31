use std::fmt;

/// Money is stored as integer cents to avoid floating-point precision
/// issues. 1 unit = 100 cents, so $50.00 = 5000 cents.
pub type Cents = i64;

/// Format cents as a plain decimal string with two digits of precision.
/// Example: 30000 -> "300.00", -1234 -> "-12.34". Currency symbols are a
/// presentation concern and are added by the caller.
pub fn format_cents(cents: Cents) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.abs();
    format!("{}{}.{:02}", sign, abs / 100, abs % 100)
}

/// Parse a decimal amount into cents.
///
/// Accepts "50", "50.00", "12.5", ".50", an optional leading "$", and a
/// leading "-". Digits past the second decimal place are truncated, and
/// magnitude is not capped. Negative results are representable here;
/// whether they are acceptable is the caller's validation rule.
pub fn parse_cents(input: &str) -> Result<Cents, AmountParseError> {
    let input = input.trim();
    let (negative, input) = match input.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, input),
    };
    let input = input.strip_prefix('$').unwrap_or(input);
    if input.is_empty() {
        return Err(AmountParseError::Invalid);
    }

    let cents = match input.split_once('.') {
        None => {
            let units: i64 = input.parse().map_err(|_| AmountParseError::Invalid)?;
            units * 100
        }
        Some((units_str, decimal_str)) => {
            if !decimal_str.bytes().all(|b| b.is_ascii_digit()) {
                return Err(AmountParseError::Invalid);
            }
            let units: i64 = if units_str.is_empty() {
                0
            } else {
                units_str.parse().map_err(|_| AmountParseError::Invalid)?
            };
            let decimal: i64 = match decimal_str.len() {
                0 => 0,
                // "12.5" means 50 cents
                1 => decimal_str.parse::<i64>().map_err(|_| AmountParseError::Invalid)? * 10,
                2 => decimal_str.parse().map_err(|_| AmountParseError::Invalid)?,
                // Truncate anything past two decimal places
                _ => decimal_str[..2].parse().map_err(|_| AmountParseError::Invalid)?,
            };
            units * 100 + decimal
        }
    };

    Ok(if negative { -cents } else { cents })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AmountParseError {
    Invalid,
}

impl fmt::Display for AmountParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AmountParseError::Invalid => write!(f, "invalid amount format"),
        }
    }
}

impl std::error::Error for AmountParseError {}
