//! Salary estimation for a matched role: a formatted domestic + remote
//! compensation range, with a fresher discount on the domestic band.

use crate::analysis::reference::salary_band;

/// Sentinel returned when the role has no salary band. Never an error:
/// an unknown role name is a data gap, not a failure.
pub const SALARY_UNKNOWN_ROLE: &str = "Salary data not available for this role";

// Freshers see a narrowed band: the floor drops harder than the ceiling.
const FRESHER_MIN_FACTOR: f64 = 0.8;
const FRESHER_MAX_FACTOR: f64 = 0.9;

/// Formats the compensation range for a role.
///
/// The remote USD range is never adjusted, fresher or not.
pub fn estimate_salary(role_name: &str, is_fresher: bool) -> String {
    let Some(band) = salary_band(role_name) else {
        return SALARY_UNKNOWN_ROLE.to_string();
    };

    let mut min_salary = band.domestic_min;
    let mut max_salary = band.domestic_max;
    if is_fresher {
        min_salary = (min_salary as f64 * FRESHER_MIN_FACTOR) as i64;
        max_salary = (max_salary as f64 * FRESHER_MAX_FACTOR) as i64;
    }

    format!(
        "₹{} - ₹{} INR (India) | ${} - ${} USD (Remote)",
        format_thousands(min_salary),
        format_thousands(max_salary),
        format_thousands(band.remote_usd_min),
        format_thousands(band.remote_usd_max),
    )
}

/// Groups digits in threes. Band values are always non-negative.
fn format_thousands(value: i64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
