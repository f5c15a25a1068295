//! Schema attribute lists
//!
//! Recognizes `` * `name` - (Optional) Description. `` style bullet lists and
//! answers the two questions validators ask of them: which items are
//! Required/Optional, and whether the names are sorted.

use std::sync::LazyLock;

use regex::Regex;

use crate::parser::{List, ListItem};

static ITEM_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)^`([^`]+)`\s+[-–]\s+(.*)$").expect("Invalid regex"));

static REQUIREDNESS_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\((Required|Optional)\b[^)]*\)").expect("Invalid regex"));

/// Requiredness declared by an item's leading parenthetical
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Requiredness {
    Required,
    Optional,
    #[default]
    Unspecified,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaAttributeListItem {
    pub name: String,
    pub requiredness: Requiredness,
    pub description: String,
}

impl SchemaAttributeListItem {
    /// Parse a list item's text, `None` if it does not document an attribute
    pub fn parse(item: &ListItem) -> Option<Self> {
        let captures = ITEM_PATTERN.captures(&item.text)?;

        let name = captures.get(1)?.as_str().trim().to_string();
        let description = captures.get(2)?.as_str().trim().to_string();

        let requiredness = REQUIREDNESS_PATTERN
            .captures(&description)
            .and_then(|c| c.get(1))
            .map(|m| match m.as_str() {
                "Required" => Requiredness::Required,
                _ => Requiredness::Optional,
            })
            .unwrap_or_default();

        Some(Self {
            name,
            requiredness,
            description,
        })
    }

    pub fn is_required(&self) -> bool {
        self.requiredness == Requiredness::Required
    }

    pub fn is_optional(&self) -> bool {
        self.requiredness == Requiredness::Optional
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaAttributeList {
    pub items: Vec<SchemaAttributeListItem>,
}

impl SchemaAttributeList {
    /// Interpret a markdown list as a schema attribute list
    ///
    /// Every item must document an attribute; a single prose item means the
    /// list is something else (a list of notes, for example).
    pub fn from_list(list: &List) -> Option<Self> {
        if list.items.is_empty() {
            return None;
        }

        let items = list
            .items
            .iter()
            .map(SchemaAttributeListItem::parse)
            .collect::<Option<Vec<_>>>()?;

        Some(Self { items })
    }

    /// Names are non-decreasing under byte-wise comparison
    pub fn is_sorted(&self) -> bool {
        self.first_unsorted().is_none()
    }

    /// First adjacent pair of names that is out of order
    pub fn first_unsorted(&self) -> Option<(&str, &str)> {
        self.items
            .windows(2)
            .find(|pair| pair[0].name.as_bytes() > pair[1].name.as_bytes())
            .map(|pair| (pair[0].name.as_str(), pair[1].name.as_str()))
    }
}
