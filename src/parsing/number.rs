//! Integer literals with automatic base detection.

/// Parse an integer literal, detecting the base from its prefix.
///
/// Accepts an optional sign followed by decimal digits, or `0x`/`0X`
/// (hexadecimal), `0o`/`0O` (octal) or `0b`/`0B` (binary) prefixed digits.
/// Surrounding whitespace is ignored.
pub fn parse_int(literal: &str) -> Option<i64> {
    let s = literal.trim();
    let (negative, unsigned) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };
    let (radix, digits) = match unsigned.get(..2) {
        Some("0x" | "0X") => (16, &unsigned[2..]),
        Some("0o" | "0O") => (8, &unsigned[2..]),
        Some("0b" | "0B") => (2, &unsigned[2..]),
        _ => (10, unsigned),
    };
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return None;
    }
    let value = i64::from_str_radix(digits, radix).ok()?;
    Some(if negative { -value } else { value })
}

/// Parse a non-negative integer literal that fits in `u32`.
pub fn parse_u32(literal: &str) -> Option<u32> {
    parse_int(literal).and_then(|v| u32::try_from(v).ok())
}

/// Parse a millisecond value such as `5 ms` or `0.1ms`.
pub fn parse_ms(literal: &str) -> Option<f64> {
    let s = literal.trim();
    s.strip_suffix("ms").unwrap_or(s).trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decimal() {
        assert_eq!(parse_int("42"), Some(42));
        assert_eq!(parse_int(" -7 "), Some(-7));
        assert_eq!(parse_int("+3"), Some(3));
        assert_eq!(parse_int("007"), Some(7));
    }

    #[test]
    fn test_prefixed() {
        assert_eq!(parse_int("0x10"), Some(16));
        assert_eq!(parse_int("0XfF"), Some(255));
        assert_eq!(parse_int("0o17"), Some(15));
        assert_eq!(parse_int("0b101"), Some(5));
        assert_eq!(parse_int("-0x1"), Some(-1));
    }

    #[test]
    fn test_invalid() {
        assert_eq!(parse_int(""), None);
        assert_eq!(parse_int("0x"), None);
        assert_eq!(parse_int("0x-1"), None);
        assert_eq!(parse_int("12a"), None);
        assert_eq!(parse_int("--1"), None);
        assert_eq!(parse_int("ECU"), None);
    }

    #[test]
    fn test_u32() {
        assert_eq!(parse_u32("0x3C"), Some(60));
        assert_eq!(parse_u32("-1"), None);
    }

    #[test]
    fn test_ms() {
        assert_eq!(parse_ms("5 ms"), Some(5.0));
        assert_eq!(parse_ms(" 0.1ms"), Some(0.1));
        assert_eq!(parse_ms("10"), Some(10.0));
        assert_eq!(parse_ms("fast"), None);
    }
}
