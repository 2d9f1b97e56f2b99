//! JSON rendering for stdout.

use anyhow::Result;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Serializer, Value};

/// Pretty-print with 4-space indentation, keys in wire order.
///
/// serde_json's default pretty printer indents by 2; the output contract
/// is 4, so we plug in our own formatter.
pub fn render(value: &Value) -> Result<String> {
    let mut out = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = Serializer::with_formatter(&mut out, formatter);
    value.serialize(&mut serializer)?;
    Ok(String::from_utf8(out)?)
}
