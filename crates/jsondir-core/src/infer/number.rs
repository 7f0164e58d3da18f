//! Numeric literal parsing.
//!
//! Integers accept the same syntax as Go's `strconv.ParseInt(s, 0, 64)`:
//! a sign, `0x`/`0o`/`0b` prefixes, a bare leading `0` meaning octal, and
//! `_` digit separators. Floats follow `strconv.ParseFloat(s, 64)`: decimal
//! literals with optional fraction and exponent, hexadecimal literals with a
//! mandatory `p` exponent (`0x1.8p1`), `_` separators, and
//! `inf`/`infinity`/`nan`.

/// Parse a signed 64-bit integer, inferring the base from its prefix.
pub fn parse_int(s: &str) -> Option<i64> {
    let (negative, unsigned) = match s.as_bytes().first()? {
        b'+' => (false, &s[1..]),
        b'-' => (true, &s[1..]),
        _ => (false, s),
    };

    let magnitude = parse_uint(unsigned)?;
    if negative {
        if magnitude > i64::MIN.unsigned_abs() {
            return None;
        }
        Some(0i64.wrapping_sub_unsigned(magnitude))
    } else {
        i64::try_from(magnitude).ok()
    }
}

fn parse_uint(s: &str) -> Option<u64> {
    let bytes = s.as_bytes();
    if bytes.is_empty() {
        return None;
    }

    let (radix, digits) = if bytes[0] == b'0' {
        match bytes.get(1).map(u8::to_ascii_lowercase) {
            Some(b'b') if bytes.len() >= 3 => (2, &bytes[2..]),
            Some(b'o') if bytes.len() >= 3 => (8, &bytes[2..]),
            Some(b'x') if bytes.len() >= 3 => (16, &bytes[2..]),
            _ => (8, &bytes[1..]),
        }
    } else {
        (10, bytes)
    };

    let mut underscores = false;
    let mut n: u64 = 0;
    for &c in digits {
        if c == b'_' {
            underscores = true;
            continue;
        }
        let d = (c as char).to_digit(36)?;
        if d >= radix {
            return None;
        }
        n = n.checked_mul(u64::from(radix))?.checked_add(u64::from(d))?;
    }

    if underscores && !underscores_ok(s) {
        return None;
    }
    Some(n)
}

/// Parse a 64-bit float.
///
/// Finite literals that overflow to infinity are rejected.
pub fn parse_float(s: &str) -> Option<f64> {
    if let Some(special) = parse_special(s) {
        return Some(special);
    }

    let f = if is_hex(s) {
        parse_hex_float(s)?
    } else {
        parse_decimal_float(s)?
    };
    if f.is_infinite() {
        return None;
    }
    Some(f)
}

fn is_hex(s: &str) -> bool {
    let (_, unsigned) = split_sign(s);
    unsigned.starts_with("0x") || unsigned.starts_with("0X")
}

fn parse_decimal_float(s: &str) -> Option<f64> {
    let allowed = |c: char| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-' | '_');
    if s.is_empty() || !s.chars().all(allowed) {
        return None;
    }

    let cleaned;
    let text = if s.contains('_') {
        if !underscores_ok(s) {
            return None;
        }
        cleaned = s.replace('_', "");
        cleaned.as_str()
    } else {
        s
    };

    text.parse().ok()
}

/// `[sign]0x<hex>[.<hex>]p[sign]<decimal>`; the binary exponent is required.
fn parse_hex_float(s: &str) -> Option<f64> {
    if s.contains('_') && !underscores_ok(s) {
        return None;
    }

    let (negative, unsigned) = split_sign(s);
    let body = unsigned.get(2..)?;
    let (mantissa_text, exp_text) = body.split_once(|c: char| c == 'p' || c == 'P')?;

    // Keep the top 60 bits of the mantissa; lower non-zero digits only
    // contribute a sticky bit for rounding.
    let mut mantissa: u64 = 0;
    let mut exp: i64 = 0;
    let mut digits = 0;
    let mut seen_dot = false;
    let mut sticky = false;
    for c in mantissa_text.chars() {
        match c {
            '_' => continue,
            '.' if !seen_dot => {
                seen_dot = true;
                continue;
            }
            _ => {}
        }
        let d = c.to_digit(16)?;
        digits += 1;
        if mantissa >> 56 == 0 {
            mantissa = (mantissa << 4) | u64::from(d);
            if seen_dot {
                exp -= 4;
            }
        } else {
            sticky |= d != 0;
            if !seen_dot {
                exp += 4;
            }
        }
    }
    if digits == 0 {
        return None;
    }
    if sticky {
        mantissa |= 1;
    }

    let (exp_negative, exp_digits) = split_sign(exp_text);
    let mut written: i64 = 0;
    let mut exp_seen = false;
    for c in exp_digits.chars() {
        if c == '_' {
            continue;
        }
        let d = c.to_digit(10)?;
        exp_seen = true;
        written = (written * 10 + i64::from(d)).min(100_000);
    }
    if !exp_seen {
        return None;
    }
    exp += if exp_negative { -written } else { written };

    let magnitude = scale_by_pow2(mantissa as f64, exp);
    Some(if negative { -magnitude } else { magnitude })
}

fn split_sign(s: &str) -> (bool, &str) {
    match s.as_bytes().first() {
        Some(b'+') => (false, &s[1..]),
        Some(b'-') => (true, &s[1..]),
        _ => (false, s),
    }
}

/// `x * 2^exp` without overflowing the intermediate power.
fn scale_by_pow2(mut x: f64, mut exp: i64) -> f64 {
    while exp > 1000 {
        x *= 2f64.powi(1000);
        exp -= 1000;
    }
    while exp < -1000 {
        x *= 2f64.powi(-1000);
        exp += 1000;
    }
    x * 2f64.powi(exp as i32)
}

/// `inf`, `infinity` (optionally signed) and unsigned `nan`, any case.
fn parse_special(s: &str) -> Option<f64> {
    let (sign, rest) = match s.as_bytes().first()? {
        b'+' => (1.0, &s[1..]),
        b'-' => (-1.0, &s[1..]),
        _ => {
            if s.eq_ignore_ascii_case("nan") {
                return Some(f64::NAN);
            }
            (1.0, s)
        }
    };

    if rest.eq_ignore_ascii_case("inf") || rest.eq_ignore_ascii_case("infinity") {
        Some(sign * f64::INFINITY)
    } else {
        None
    }
}

/// Underscores may only separate digits (a base prefix counts as a digit).
fn underscores_ok(s: &str) -> bool {
    #[derive(PartialEq)]
    enum Saw {
        Start,
        Digit,
        Underscore,
        Other,
    }

    let mut bytes = s.as_bytes();
    if let Some(b'+' | b'-') = bytes.first() {
        bytes = &bytes[1..];
    }

    let mut saw = Saw::Start;
    let mut hex = false;
    let mut i = 0;
    if bytes.len() >= 2
        && bytes[0] == b'0'
        && matches!(bytes[1].to_ascii_lowercase(), b'b' | b'o' | b'x')
    {
        i = 2;
        saw = Saw::Digit;
        hex = bytes[1].to_ascii_lowercase() == b'x';
    }

    for &c in &bytes[i..] {
        if c.is_ascii_digit() || (hex && c.is_ascii_hexdigit()) {
            saw = Saw::Digit;
            continue;
        }
        if c == b'_' {
            if saw != Saw::Digit {
                return false;
            }
            saw = Saw::Underscore;
            continue;
        }
        if saw == Saw::Underscore {
            return false;
        }
        saw = Saw::Other;
    }
    saw != Saw::Underscore
}
