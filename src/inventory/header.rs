//! Inventory header: the plain-text lines before the payload.

const VERSION_PREFIX: &str = "# Sphinx inventory version ";
const PROJECT_PREFIX: &str = "# Project: ";
const VERSION_LINE_PREFIX: &str = "# Version: ";

/// Inventory format revision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatVersion {
    /// Uncompressed `name type location` lines, Python domain only.
    V1,
    /// zlib-compressed `name domain:role priority location dispname` lines.
    V2,
}

/// Project metadata declared in the header. Ignored by the conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryHeader {
    pub format: FormatVersion,
    pub project: String,
    pub version: String,
}

/// Split the header off the raw file.
///
/// Returns the header and the remaining payload bytes, or a message
/// describing what was wrong.
pub fn split_header(bytes: &[u8]) -> Result<(InventoryHeader, &[u8]), String> {
    let mut rest = bytes;

    let first = next_line(&mut rest).ok_or("missing or unreadable header")?;
    let format = match first.strip_prefix(VERSION_PREFIX).map(str::trim) {
        Some("1") => FormatVersion::V1,
        Some("2") => FormatVersion::V2,
        Some(other) => return Err(format!("unsupported inventory version {other}")),
        None => return Err(format!("not an inventory header: {first:?}")),
    };

    let project = header_field(&mut rest, PROJECT_PREFIX)?;
    let version = header_field(&mut rest, VERSION_LINE_PREFIX)?;

    if format == FormatVersion::V2 {
        let marker = next_line(&mut rest).ok_or("missing compression marker line")?;
        if !marker.contains("zlib") {
            return Err(format!("invalid compression marker: {marker:?}"));
        }
    }

    Ok((
        InventoryHeader {
            format,
            project,
            version,
        },
        rest,
    ))
}

fn header_field(rest: &mut &[u8], prefix: &str) -> Result<String, String> {
    let line = next_line(rest).ok_or_else(|| format!("missing {:?} header line", prefix.trim()))?;
    line.strip_prefix(prefix)
        .map(|v| v.trim_end().to_string())
        .ok_or_else(|| format!("expected {:?}, found {line:?}", prefix.trim()))
}

/// Take one `\n`-terminated header line. Header lines must be UTF-8.
fn next_line<'a>(rest: &mut &'a [u8]) -> Option<&'a str> {
    let bytes: &'a [u8] = *rest;
    if bytes.is_empty() {
        return None;
    }
    let (line, tail) = match bytes.iter().position(|&b| b == b'\n') {
        Some(idx) => (&bytes[..idx], &bytes[idx + 1..]),
        None => (bytes, &bytes[bytes.len()..]),
    };
    *rest = tail;
    let line = std::str::from_utf8(line).ok()?;
    Some(line.strip_suffix('\r').unwrap_or(line))
}
