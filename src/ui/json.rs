use std::io::{self, Write};

/// Write a single NDJSON event (one JSON object per line).
pub fn write_event(out: &mut impl Write, event: &serde_json::Value) -> io::Result<()> {
    serde_json::to_writer(&mut *out, event)?;
    out.write_all(b"\n")?;
    out.flush()
}

/// Convenience helper that writes to stdout.
pub fn emit(event: serde_json::Value) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write_event(&mut out, &event)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_one_line() {
        let mut buf = Vec::new();
        write_event(&mut buf, &serde_json::json!({"event": "error"})).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "{\"event\":\"error\"}\n");
    }
}
