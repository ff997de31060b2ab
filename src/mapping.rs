//! Inventory type tag to docset category mapping.
//!
//! The table is closed: a tag missing here is an error, never a silent skip.

use crate::error::{InvdashError, Result};

/// Every recognized `domain:role` tag and its docset category, sorted by tag.
pub const TYPE_MAPPING: &[(&str, &str)] = &[
    ("c:function", "Function"),
    ("c:macro", "Macro"),
    ("c:member", "Member"),
    ("c:type", "Type"),
    ("c:var", "Variable"),
    ("py:attribute", "Attribute"),
    ("py:class", "Class"),
    ("py:classmethod", "Method"),
    ("py:data", "Constant"),
    ("py:exception", "Exception"),
    ("py:function", "Function"),
    ("py:method", "Method"),
    ("py:module", "Module"),
    ("py:parameter", "Parameter"),
    ("py:staticmethod", "Method"),
    // Dash has no category for source transforms; "Modifier" means something else.
    ("std:2to3fixer", "XXX"),
    ("std:cmdoption", "Option"),
    ("std:doc", "Guide"),
    ("std:envvar", "Variable"),
    ("std:label", "Section"),
    ("std:opcode", "Instruction"),
    ("std:option", "Option"),
    ("std:pdbcommand", "Command"),
    ("std:term", "Word"),
    ("std:token", "Syntax"),
];

/// Map an inventory type tag to its docset category.
pub fn map_type(tag: &str) -> Result<&'static str> {
    TYPE_MAPPING
        .binary_search_by_key(&tag, |&(t, _)| t)
        .map(|idx| TYPE_MAPPING[idx].1)
        .map_err(|_| InvdashError::Lookup {
            tag: tag.to_string(),
        })
}

/// Whether a tag has a category.
#[must_use]
pub fn is_mapped(tag: &str) -> bool {
    map_type(tag).is_ok()
}
