//! Scalar type inference for file contents.

mod number;

pub use number::{parse_float, parse_int};

use crate::value::Value;

/// Infer a scalar value from raw file contents.
///
/// The cascade runs against the contents with trailing whitespace removed:
///
/// 1. `null` / `NULL` → null
/// 2. `true` / `TRUE` / `false` / `FALSE` → bool
/// 3. `0` → integer zero
/// 4. integer literal (sign, `0x`/`0o`/`0b`, leading-zero octal) → int
/// 5. float literal → float
/// 6. anything else → string
///
/// The string in step 6 is the trimmed text unless
/// `keep_trailing_whitespace` is set, in which case it is the contents
/// verbatim. Invalid UTF-8 is replaced, never rejected.
pub fn infer(raw: &[u8], keep_trailing_whitespace: bool) -> Value {
    let text = String::from_utf8_lossy(raw);
    let trimmed = text.trim_end();

    match trimmed {
        "null" | "NULL" => return Value::Null,
        "true" | "TRUE" => return Value::Bool(true),
        "false" | "FALSE" => return Value::Bool(false),
        // Skips the prefix handling below.
        "0" => return Value::Int(0),
        _ => {}
    }

    if let Some(i) = parse_int(trimmed) {
        return Value::Int(i);
    }

    if let Some(f) = parse_float(trimmed) {
        return Value::Float(f);
    }

    if keep_trailing_whitespace {
        Value::String(text.into_owned())
    } else {
        Value::String(trimmed.to_string())
    }
}
