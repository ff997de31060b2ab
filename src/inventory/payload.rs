//! Inventory record lines, after the header.

use flate2::{Decompress, FlushDecompress, Status};
use regex::Regex;

use crate::models::InventoryEntry;

/// `name domain:role priority location dispname`; names may contain spaces.
const V2_RECORD: &str = r"^(.+?)\s+(\S+)\s+(-?\d+)\s+?(\S*)\s+(.*)$";

/// Trailing marker in a location that stands for the entry name.
const NAME_PLACEHOLDER: char = '$';

/// Display name meaning "same as the entry name".
const SAME_AS_NAME: &str = "-";

const INFLATE_CHUNK: usize = 64 * 1024;

/// Inflate a version 2 payload into text.
///
/// The zlib stream must reach its end marker; a truncated stream is an error.
pub fn decompress(payload: &[u8]) -> Result<String, String> {
    let mut inflater = Decompress::new(true);
    let mut out = Vec::with_capacity(payload.len().saturating_mul(4).max(INFLATE_CHUNK));
    loop {
        if out.len() == out.capacity() {
            out.reserve(INFLATE_CHUNK);
        }
        let before = (inflater.total_in(), inflater.total_out());
        let input = &payload[inflater.total_in() as usize..];
        let status = inflater
            .decompress_vec(input, &mut out, FlushDecompress::None)
            .map_err(|e| format!("corrupt compressed payload: {e}"))?;
        if status == Status::StreamEnd {
            break;
        }
        if (inflater.total_in(), inflater.total_out()) == before {
            return Err("truncated compressed payload".to_string());
        }
    }
    String::from_utf8(out).map_err(|e| format!("payload is not UTF-8: {e}"))
}

/// Parser for version 2 record lines.
pub struct V2Parser {
    record: Regex,
}

impl V2Parser {
    pub fn new() -> Result<Self, String> {
        let record = Regex::new(V2_RECORD).map_err(|e| format!("invalid record pattern: {e}"))?;
        Ok(Self { record })
    }

    /// Parse one non-empty line. `lineno` is only used in messages.
    pub fn parse_line(&self, line: &str, lineno: usize) -> Result<InventoryEntry, String> {
        let caps = self
            .record
            .captures(line.trim_end())
            .ok_or_else(|| format!("record {lineno} is malformed: {line:?}"))?;

        let name = &caps[1];
        let tag = &caps[2];
        if !tag.contains(':') {
            return Err(format!(
                "record {lineno} has type {tag:?}, expected domain:role"
            ));
        }
        Ok(InventoryEntry {
            name: name.to_string(),
            tag: tag.to_string(),
            location: expand_location(&caps[4], name),
            priority: caps[3].to_string(),
            display_name: match &caps[5] {
                SAME_AS_NAME => None,
                other => Some(other.to_string()),
            },
        })
    }
}

/// Parse one version 1 line: `name type location`.
///
/// Version 1 only described the Python domain and left anchors implicit.
pub fn parse_v1_line(line: &str, lineno: usize) -> Result<InventoryEntry, String> {
    let fields = next_field(line.trim())
        .and_then(|(name, rest)| next_field(rest).map(|(kind, location)| (name, kind, location)));
    let Some((name, kind, location)) = fields else {
        return Err(format!("record {lineno} is malformed: {line:?}"));
    };

    let (tag, location) = if kind == "mod" {
        ("py:module".to_string(), format!("{location}#module-{name}"))
    } else {
        (format!("py:{kind}"), format!("{location}#{name}"))
    };
    Ok(InventoryEntry::new(name, tag, location))
}

/// Split off the first whitespace-delimited field, skipping the whole run
/// of whitespace after it.
fn next_field(s: &str) -> Option<(&str, &str)> {
    s.split_once(char::is_whitespace)
        .map(|(head, tail)| (head, tail.trim_start()))
}

/// Substitute the name placeholder. The base URI is always empty, so the
/// location is otherwise kept verbatim.
fn expand_location(location: &str, name: &str) -> String {
    match location.strip_suffix(NAME_PLACEHOLDER) {
        Some(prefix) => format!("{prefix}{name}"),
        None => location.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::ZlibEncoder;
    use flate2::Compression;
    use std::io::Write;

    #[test]
    fn parses_function_record() {
        let p = V2Parser::new().unwrap();
        let e = p.parse_line("foo py:function 1 foo.html#foo -", 1).unwrap();
        assert_eq!(e.name, "foo");
        assert_eq!(e.tag, "py:function");
        assert_eq!(e.location, "foo.html#foo");
        assert_eq!(e.priority, "1");
        assert_eq!(e.display_name, None);
    }

    #[test]
    fn expands_placeholder() {
        let p = V2Parser::new().unwrap();
        let e = p
            .parse_line("os.path.join py:function 1 library/os.path.html#$ -", 1)
            .unwrap();
        assert_eq!(e.location, "library/os.path.html#os.path.join");
    }

    #[test]
    fn name_with_spaces_and_display_name() {
        let p = V2Parser::new().unwrap();
        let e = p
            .parse_line("bytes-like object std:term -1 glossary.html#term-bytes-like-object bytes-like object", 7)
            .unwrap();
        assert_eq!(e.name, "bytes-like object");
        assert_eq!(e.tag, "std:term");
        assert_eq!(e.priority, "-1");
        assert_eq!(e.location, "glossary.html#term-bytes-like-object");
        assert_eq!(e.display_name.as_deref(), Some("bytes-like object"));
    }

    #[test]
    fn priority_beyond_i32_is_kept_verbatim() {
        let p = V2Parser::new().unwrap();
        let e = p
            .parse_line("foo py:function 99999999999 foo.html#foo -", 1)
            .unwrap();
        assert_eq!(e.priority, "99999999999");
        assert_eq!(e.location, "foo.html#foo");
    }

    #[test]
    fn rejects_malformed_line() {
        let p = V2Parser::new().unwrap();
        let err = p.parse_line("just-a-name", 3).unwrap_err();
        assert!(err.contains("record 3"));
    }

    #[test]
    fn rejects_tag_without_domain() {
        let p = V2Parser::new().unwrap();
        assert!(p.parse_line("foo function 1 foo.html -", 1).is_err());
    }

    #[test]
    fn v1_module_and_function() {
        let m = parse_v1_line("os mod library/os.html", 1).unwrap();
        assert_eq!(m.tag, "py:module");
        assert_eq!(m.location, "library/os.html#module-os");

        let f = parse_v1_line("os.getcwd function library/os.html", 2).unwrap();
        assert_eq!(f.tag, "py:function");
        assert_eq!(f.location, "library/os.html#os.getcwd");
        assert!(parse_v1_line("os mod", 3).is_err());
    }

    #[test]
    fn v1_collapses_whitespace_runs() {
        let m = parse_v1_line("os  mod\tlibrary/os.html  ", 1).unwrap();
        assert_eq!(m.name, "os");
        assert_eq!(m.tag, "py:module");
        assert_eq!(m.location, "library/os.html#module-os");

        let f = parse_v1_line("os.sep   data   library/os.html", 2).unwrap();
        assert_eq!(f.tag, "py:data");
        assert_eq!(f.location, "library/os.html#os.sep");
    }

    #[test]
    fn decompress_roundtrip_and_truncation() {
        let mut enc = ZlibEncoder::new(Vec::new(), Compression::default());
        enc.write_all(b"foo py:function 1 foo.html#foo -\n").unwrap();
        let compressed = enc.finish().unwrap();

        assert_eq!(
            decompress(&compressed).unwrap(),
            "foo py:function 1 foo.html#foo -\n"
        );
        assert!(decompress(&compressed[..compressed.len() / 2]).is_err());
    }
}
