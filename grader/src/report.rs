use std::io::Write;

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::checker::Report;

const INDENT: &[u8] = b"    ";

/// Pretty-print the report as JSON with four-space indentation.
pub fn to_json(report: &Report) -> serde_json::Result<String> {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    report.serialize(&mut ser)?;
    // serde_json only emits valid UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

pub fn write_report<W: Write>(report: &Report, mut sink: W) -> std::io::Result<()> {
    let json = to_json(report)?;
    writeln!(sink, "{}", json)?;
    sink.flush()
}
