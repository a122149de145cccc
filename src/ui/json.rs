use std::io::Write;

use serde::Serialize;

/// Write one JSON document per line.
pub fn write_event<W: Write, T: Serialize>(out: &mut W, event: &T) -> std::io::Result<()> {
    serde_json::to_writer(&mut *out, event)?;
    writeln!(out)
}
