//! Sphinx `objects.inv` reader.
//!
//! An inventory is a short plain-text header followed by one record per
//! line. Version 2 inventories zlib-compress the records; version 1 left
//! them as plain text.

pub mod header;
pub mod payload;

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use crate::error::{InvdashError, Result};
use crate::models::InventoryEntry;

pub use header::{FormatVersion, InventoryHeader};

/// Parsed inventory: entries grouped by type tag.
///
/// Tags iterate in sorted order. Within a tag, entries keep the order in
/// which they first appeared in the file.
#[derive(Debug, Clone)]
pub struct Inventory {
    pub header: InventoryHeader,
    groups: BTreeMap<String, Vec<InventoryEntry>>,
}

impl Inventory {
    /// Iterate `(tag, entries)` groups. Empty groups are skipped.
    pub fn groups(&self) -> impl Iterator<Item = (&str, &[InventoryEntry])> {
        self.groups
            .iter()
            .filter(|(_, entries)| !entries.is_empty())
            .map(|(tag, entries)| (tag.as_str(), entries.as_slice()))
    }

    /// Distinct type tags present, sorted.
    #[must_use]
    pub fn tags(&self) -> Vec<&str> {
        self.groups().map(|(tag, _)| tag).collect()
    }

    /// Entries for one tag, if any.
    #[must_use]
    pub fn entries(&self, tag: &str) -> Option<&[InventoryEntry]> {
        self.groups
            .get(tag)
            .filter(|entries| !entries.is_empty())
            .map(Vec::as_slice)
    }

    /// Total entries across all tags.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Accumulates entries per tag, resolving duplicate `(tag, name)` pairs.
struct InventoryBuilder {
    groups: BTreeMap<String, Vec<InventoryEntry>>,
    positions: HashMap<(String, String), usize>,
}

impl InventoryBuilder {
    fn new() -> Self {
        Self {
            groups: BTreeMap::new(),
            positions: HashMap::new(),
        }
    }

    /// Add an entry. A repeated `(tag, name)` replaces the earlier entry in
    /// place, except for `py:module`, where old generators emitted each
    /// module twice and the first record is the right one.
    fn push(&mut self, entry: InventoryEntry) {
        let key = (entry.tag.clone(), entry.name.clone());
        let group = self.groups.entry(entry.tag.clone()).or_default();
        match self.positions.get(&key).copied() {
            Some(_) if entry.tag == "py:module" => {}
            Some(idx) => group[idx] = entry,
            None => {
                self.positions.insert(key, group.len());
                group.push(entry);
            }
        }
    }

    fn finish(self, header: InventoryHeader) -> Inventory {
        Inventory {
            header,
            groups: self.groups,
        }
    }
}

/// Parse raw inventory bytes. `path` is only used in error messages.
pub fn parse_inventory(bytes: &[u8], path: &str) -> Result<Inventory> {
    let (header, body) =
        header::split_header(bytes).map_err(|detail| InvdashError::parse(path, detail))?;

    let text = match header.format {
        FormatVersion::V2 => {
            payload::decompress(body).map_err(|detail| InvdashError::parse(path, detail))?
        }
        FormatVersion::V1 => String::from_utf8(body.to_vec())
            .map_err(|e| InvdashError::parse(path, format!("payload is not UTF-8: {e}")))?,
    };

    let v2 = payload::V2Parser::new().map_err(|detail| InvdashError::parse(path, detail))?;
    let mut builder = InventoryBuilder::new();
    for (idx, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let entry = match header.format {
            FormatVersion::V2 => v2.parse_line(line, idx + 1),
            FormatVersion::V1 => payload::parse_v1_line(line, idx + 1),
        }
        .map_err(|detail| InvdashError::parse(path, detail))?;
        builder.push(entry);
    }

    let inventory = builder.finish(header);
    tracing::debug!(
        path,
        project = %inventory.header.project,
        version = %inventory.header.version,
        entries = inventory.len(),
        "parsed inventory"
    );
    Ok(inventory)
}

/// Read and parse an inventory file.
pub fn read_inventory(path: &Path) -> Result<Inventory> {
    let display = path.display().to_string();
    let bytes = std::fs::read(path).map_err(|e| InvdashError::parse(&display, e.to_string()))?;
    parse_inventory(&bytes, &display)
}

/// Build a version 2 inventory file image from record lines.
#[cfg(test)]
pub(crate) fn encode_v2(project: &str, records: &[&str]) -> Vec<u8> {
    use flate2::write::ZlibEncoder;
    use flate2::Compression;
    use std::io::Write;

    let mut out = format!(
        "# Sphinx inventory version 2\n# Project: {project}\n# Version: 1.0\n\
         # The remainder of this file is compressed using zlib.\n"
    )
    .into_bytes();
    let mut enc = ZlibEncoder::new(Vec::new(), Compression::default());
    for record in records {
        enc.write_all(record.as_bytes()).unwrap();
        enc.write_all(b"\n").unwrap();
    }
    out.extend(enc.finish().unwrap());
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn groups_by_tag_in_file_order() {
        let raw = encode_v2(
            "Demo",
            &[
                "zeta py:function 1 api.html#zeta -",
                "Widget py:class 1 api.html#Widget -",
                "alpha py:function 1 api.html#alpha -",
            ],
        );
        let inv = parse_inventory(&raw, "objects.inv").unwrap();
        assert_eq!(inv.header.project, "Demo");
        assert_eq!(inv.tags(), vec!["py:class", "py:function"]);
        let names: Vec<_> = inv
            .entries("py:function")
            .unwrap()
            .iter()
            .map(|e| e.name.as_str())
            .collect();
        assert_eq!(names, vec!["zeta", "alpha"]);
        assert_eq!(inv.len(), 3);
    }

    #[test]
    fn duplicate_name_replaces_in_place() {
        let raw = encode_v2(
            "Demo",
            &[
                "a py:function 1 one.html#a -",
                "b py:function 1 b.html#b -",
                "a py:function 1 two.html#a -",
            ],
        );
        let inv = parse_inventory(&raw, "objects.inv").unwrap();
        let entries = inv.entries("py:function").unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name, "a");
        assert_eq!(entries[0].location, "two.html#a");
    }

    #[test]
    fn duplicate_module_keeps_first() {
        let raw = encode_v2(
            "Demo",
            &[
                "pkg py:module 0 pkg.html#module-pkg -",
                "pkg py:module 0 other.html#module-pkg -",
            ],
        );
        let inv = parse_inventory(&raw, "objects.inv").unwrap();
        let entries = inv.entries("py:module").unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].location, "pkg.html#module-pkg");
    }

    #[test]
    fn same_name_different_tags_are_distinct() {
        let raw = encode_v2(
            "Demo",
            &[
                "open py:function 1 f.html#open -",
                "open std:label -1 g.html#open Open files",
            ],
        );
        let inv = parse_inventory(&raw, "objects.inv").unwrap();
        assert_eq!(inv.len(), 2);
    }

    #[test]
    fn blank_lines_are_skipped() {
        let raw = encode_v2("Demo", &["", "foo py:function 1 foo.html#foo -", "   "]);
        let inv = parse_inventory(&raw, "objects.inv").unwrap();
        assert_eq!(inv.len(), 1);
    }

    #[test]
    fn malformed_record_is_parse_error() {
        let raw = encode_v2("Demo", &["foo py:function 1 foo.html#foo -", "garbage"]);
        match parse_inventory(&raw, "objects.inv") {
            Err(InvdashError::Parse { path, detail }) => {
                assert_eq!(path, "objects.inv");
                assert!(detail.contains("record 2"));
            }
            other => panic!("expected Parse error, got {other:?}"),
        }
    }

    #[test]
    fn truncated_payload_is_parse_error() {
        let raw = encode_v2("Demo", &["foo py:function 1 foo.html#foo -"]);
        let truncated = &raw[..raw.len() - 10];
        assert!(matches!(
            parse_inventory(truncated, "objects.inv"),
            Err(InvdashError::Parse { .. })
        ));
    }

    #[test]
    fn parses_version_1() {
        let raw = b"# Sphinx inventory version 1\n# Project: Old\n# Version: 0.1\n\
                    os mod library/os.html\nos.getcwd function library/os.html\n";
        let inv = parse_inventory(raw, "objects.inv").unwrap();
        assert_eq!(inv.header.format, FormatVersion::V1);
        assert_eq!(inv.tags(), vec!["py:function", "py:module"]);
    }

    #[test]
    fn missing_file_is_parse_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("nope.inv");
        match read_inventory(&path) {
            Err(InvdashError::Parse { path: p, .. }) => assert!(p.ends_with("nope.inv")),
            other => panic!("expected Parse error, got {other:?}"),
        }
    }

    #[test]
    fn reads_from_disk() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("objects.inv");
        std::fs::write(&path, encode_v2("Demo", &["foo py:function 1 foo.html#foo -"])).unwrap();
        let inv = read_inventory(&path).unwrap();
        assert_eq!(inv.entries("py:function").unwrap()[0].location, "foo.html#foo");
    }
}
