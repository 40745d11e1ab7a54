use log::{debug, warn};

use crate::value::Value;
use crate::value::errors::ValueError;

/// Parse a single value.
///
/// Accepts integers (`-3`), fractions (`3/4`) and finite decimals (`1.25`,
/// converted exactly to `5/4`).
///
/// # Errors
///
/// Returns an error if the text is not a number, names a non-finite float
/// (`inf`, `NaN`), has a zero denominator, or does not fit in an `i64` ratio.
pub fn parse_value(text: &str) -> Result<Value, ValueError> {
    let trimmed = text.trim();
    debug!("Parsing value: '{}'", trimmed);

    if trimmed.is_empty() {
        return Err(ValueError::Invalid(text.to_string()));
    }

    if let Some((numer, denom)) = trimmed.split_once('/') {
        let numer = parse_integer(trimmed, numer)?;
        let denom = parse_integer(trimmed, denom)?;
        if denom == 0 {
            warn!("Zero denominator in '{}'", trimmed);
            return Err(ValueError::ZeroDenominator(trimmed.to_string()));
        }
        return normalized_ratio(trimmed, numer, denom);
    }

    if let Some((whole, fraction)) = trimmed.split_once('.') {
        return parse_decimal(trimmed, whole, fraction);
    }

    parse_integer(trimmed, trimmed).map(Value::from_integer)
}

/// Parse a comma separated list such as `3,3,3`.
///
/// # Errors
///
/// Returns an error if the list is empty or any item fails [`parse_value`].
pub fn parse_values(list: &str) -> Result<Vec<Value>, ValueError> {
    if list.trim().is_empty() {
        warn!("Value list is empty");
        return Err(ValueError::Empty);
    }

    list.split(',').map(parse_value).collect()
}

fn parse_integer(text: &str, digits: &str) -> Result<i64, ValueError> {
    let digits = digits.trim();
    match digits.parse::<i64>() {
        Ok(n) => Ok(n),
        Err(_) => Err(classify_failure(text, digits)),
    }
}

/// Move the sign to the numerator before building the ratio, so that
/// `i64::MIN` is rejected instead of overflowing during reduction
fn normalized_ratio(text: &str, numer: i64, denom: i64) -> Result<Value, ValueError> {
    let (numer, denom) = if denom < 0 {
        match (numer.checked_neg(), denom.checked_neg()) {
            (Some(numer), Some(denom)) => (numer, denom),
            _ => {
                warn!("Value out of range: '{}'", text);
                return Err(ValueError::Unrepresentable(text.to_string()));
            }
        }
    } else {
        (numer, denom)
    };
    Ok(Value::new(numer, denom))
}

fn parse_decimal(text: &str, whole: &str, fraction: &str) -> Result<Value, ValueError> {
    let (negative, digits) = match whole.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, whole.strip_prefix('+').unwrap_or(whole)),
    };

    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if fraction.is_empty() || !all_digits(fraction) || !all_digits(digits) {
        return Err(classify_failure(text, text));
    }

    let unrepresentable = || ValueError::Unrepresentable(text.to_string());

    let whole_part: i64 = if digits.is_empty() {
        0
    } else {
        digits.parse().map_err(|_| unrepresentable())?
    };
    let scale = u32::try_from(fraction.len())
        .ok()
        .and_then(|len| 10_i64.checked_pow(len))
        .ok_or_else(unrepresentable)?;
    let fraction_part: i64 = fraction.parse().map_err(|_| unrepresentable())?;

    let magnitude = whole_part
        .checked_mul(scale)
        .and_then(|w| w.checked_add(fraction_part))
        .ok_or_else(unrepresentable)?;

    let numer = if negative { -magnitude } else { magnitude };
    Ok(Value::new(numer, scale))
}

/// Work out why `digits` did not parse, so `inf` and `1e400` get a precise error
fn classify_failure(text: &str, digits: &str) -> ValueError {
    match digits.parse::<f64>() {
        Ok(float) if !float.is_finite() => {
            warn!("Rejecting non-finite value '{}'", text);
            ValueError::NonFinite(text.to_string())
        }
        Ok(_) => ValueError::Unrepresentable(text.to_string()),
        Err(_) => ValueError::Invalid(text.to_string()),
    }
}
