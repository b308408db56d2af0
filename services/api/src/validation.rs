//! Input validation utilities

/// Validate username
pub fn validate_username(username: &str) -> Result<(), String> {
    if username.trim().is_empty() {
        return Err("Username is required".to_string());
    }

    Ok(())
}

/// Require a non-blank field, returning its value
pub fn require<'a>(field: &str, value: Option<&'a str>) -> Result<&'a str, String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(format!("{} is required", field)),
    }
}

/// Parse an exercise duration in minutes.
///
/// The leading integer is taken, so `"30.5"` and `"30 min"` both yield 30.
/// Input without a leading integer and negative values are rejected.
pub fn parse_duration(raw: &str) -> Result<i64, String> {
    let minutes =
        leading_integer(raw).ok_or_else(|| format!("Duration must be a number: {}", raw))?;

    if minutes < 0 {
        return Err("Duration must not be negative".to_string());
    }

    Ok(minutes)
}

/// Parse the `limit` query parameter.
///
/// Missing, unparseable, zero and negative values all mean "no limit".
pub fn parse_limit(raw: Option<&str>) -> Option<usize> {
    raw.and_then(leading_integer)
        .filter(|n| *n > 0)
        .and_then(|n| usize::try_from(n).ok())
}

/// Read an optionally signed run of digits at the start of `raw`, ignoring
/// leading whitespace and anything after the digits.
fn leading_integer(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let digits_start = usize::from(trimmed.starts_with(['+', '-']));
    let digits_len = trimmed[digits_start..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();

    if digits_len == 0 {
        return None;
    }

    trimmed[..digits_start + digits_len].parse().ok()
}
