use crate::error::{CanteenError, Result};
use crate::models::Category;

/// Parse a money amount typed by a person.
///
/// Accepts an optional `Rp` prefix and `.`, `,`, `_` or space as thousands
/// separators ("50.000", "Rp 50,000", "50 000"). When separators are used
/// every group after the first must have exactly three digits, so "1.5" is
/// rejected instead of silently becoming 15.
pub fn parse_amount(raw: &str) -> Result<i64> {
    let invalid = || CanteenError::InvalidInput(format!("'{}' is not a valid amount", raw.trim()));

    let mut s = raw.trim();
    if s.get(..2).is_some_and(|prefix| prefix.eq_ignore_ascii_case("rp")) {
        s = s[2..].trim_start_matches('.').trim_start();
    }
    if s.is_empty() {
        return Err(CanteenError::InvalidInput("amount must not be empty".to_string()));
    }

    let groups: Vec<&str> = s.split(['.', ',', '_', ' ']).collect();
    if groups.iter().any(|g| g.is_empty() || !g.chars().all(|c| c.is_ascii_digit())) {
        return Err(invalid());
    }
    if groups.len() > 1 && (groups[0].len() > 3 || groups[1..].iter().any(|g| g.len() != 3)) {
        return Err(invalid());
    }

    groups.concat().parse::<i64>().map_err(|_| invalid())
}

/// Parse a `category=cap` quota flag, e.g. `food=2` or `minuman=1`.
pub fn parse_quota(raw: &str) -> Result<(Category, i64)> {
    let (name, cap) = raw.split_once('=').ok_or_else(|| {
        CanteenError::InvalidInput(format!("quota '{}' must look like category=count", raw))
    })?;

    let category: Category = name.parse()?;
    let cap: i64 = cap
        .trim()
        .parse()
        .map_err(|_| CanteenError::InvalidInput(format!("quota count '{}' is not a number", cap.trim())))?;

    Ok((category, cap))
}
