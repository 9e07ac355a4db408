//! Argument parsing shared by the binary and its tests.

use super::error::CountError;

/// Parse a symbol count: ASCII digits only, no sign, must fit `usize`.
pub fn parse_count(arg: &str) -> Result<usize, CountError> {
    if arg.is_empty() {
        return Err(CountError::Empty);
    }

    let mut n: usize = 0;
    for &b in arg.as_bytes() {
        let d = b.wrapping_sub(b'0');
        if d > 9 {
            return Err(CountError::InvalidDigit(arg.to_string()));
        }
        n = n
            .checked_mul(10)
            .and_then(|v| v.checked_add(d as usize))
            .ok_or_else(|| CountError::Overflow(arg.to_string()))?;
    }
    Ok(n)
}
