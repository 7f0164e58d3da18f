//! Rendering resolved values.

use std::io::Write;

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

/// Serialize `value` as JSON, compact or tab-indented, with a trailing
/// newline.
pub fn render<T: Serialize + ?Sized>(value: &T, compact: bool) -> serde_json::Result<Vec<u8>> {
    let mut buf = Vec::new();
    if compact {
        serde_json::to_writer(&mut buf, value)?;
    } else {
        let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"\t"));
        value.serialize(&mut ser)?;
    }
    buf.push(b'\n');
    Ok(buf)
}

/// Write one rendered document and flush it, so output for earlier paths
/// is visible even if a later path fails.
pub fn emit<W: Write>(out: &mut W, rendered: &[u8]) -> std::io::Result<()> {
    out.write_all(rendered)?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsondir_core::{Map, Value};

    fn sample() -> Value {
        let mut map = Map::new();
        map.insert("name".into(), Value::from("hi"));
        map.insert("tags".into(), Value::Array(vec![Value::from("x"), Value::Int(2)]));
        Value::Object(map)
    }

    #[test]
    fn test_compact() {
        let out = render(&sample(), true).unwrap();
        assert_eq!(out, b"{\"name\":\"hi\",\"tags\":[\"x\",2]}\n");
    }

    #[test]
    fn test_pretty_uses_tabs() {
        let out = String::from_utf8(render(&sample(), false).unwrap()).unwrap();
        assert_eq!(
            out,
            "{\n\t\"name\": \"hi\",\n\t\"tags\": [\n\t\t\"x\",\n\t\t2\n\t]\n}\n"
        );
    }

    #[test]
    fn test_scalars() {
        assert_eq!(render(&Value::Null, false).unwrap(), b"null\n");
        assert_eq!(render(&Value::Float(1000.0), true).unwrap(), b"1000.0\n");
    }

    #[test]
    fn test_non_finite_float_fails() {
        assert!(render(&Value::Float(f64::INFINITY), true).is_err());
    }

    #[test]
    fn test_emit_writes_everything() {
        let mut out = Vec::new();
        emit(&mut out, b"1\n").unwrap();
        emit(&mut out, b"2\n").unwrap();
        assert_eq!(out, b"1\n2\n");
    }
}
