//! Documentation kinds and directory layouts

use std::fmt;

/// Which directory convention a documentation file follows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layout {
    /// `website/docs/...`
    Legacy,
    /// `docs/...`
    Registry,
}

impl Layout {
    pub fn index_directory(self) -> &'static str {
        match self {
            Layout::Legacy => "website/docs",
            Layout::Registry => "docs",
        }
    }
}

/// What a documentation file documents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocKind {
    Action,
    DataSource,
    Ephemeral,
    Function,
    Guide,
    Index,
    ListResource,
    Resource,
}

impl DocKind {
    /// Kinds that live in their own subdirectory
    pub const SUBDIRECTORY_KINDS: [DocKind; 7] = [
        DocKind::Action,
        DocKind::DataSource,
        DocKind::Ephemeral,
        DocKind::Function,
        DocKind::Guide,
        DocKind::ListResource,
        DocKind::Resource,
    ];

    /// Subdirectory name under the layout's index directory
    pub fn directory(self, layout: Layout) -> Option<&'static str> {
        let name = match (self, layout) {
            (DocKind::Index, _) => return None,
            (DocKind::Action, _) => "actions",
            (DocKind::Ephemeral, _) => "ephemeral-resources",
            (DocKind::Function, _) => "functions",
            (DocKind::Guide, _) => "guides",
            (DocKind::ListResource, _) => "list-resources",
            (DocKind::DataSource, Layout::Legacy) => "d",
            (DocKind::DataSource, Layout::Registry) => "data-sources",
            (DocKind::Resource, Layout::Legacy) => "r",
            (DocKind::Resource, Layout::Registry) => "resources",
        };
        Some(name)
    }

    pub fn from_directory(layout: Layout, name: &str) -> Option<Self> {
        Self::SUBDIRECTORY_KINDS
            .into_iter()
            .find(|kind| kind.directory(layout) == Some(name))
    }

    /// Name used in mismatch messages
    pub fn resource_type(self) -> &'static str {
        match self {
            DocKind::Action => "action",
            DocKind::DataSource => "data source",
            DocKind::Ephemeral => "ephemeral",
            DocKind::Function => "function",
            DocKind::Guide => "guide",
            DocKind::Index => "index",
            DocKind::ListResource => "list resource",
            DocKind::Resource => "resource",
        }
    }

    /// Kinds that correspond to provider schema entries
    pub fn has_schema(self) -> bool {
        !matches!(self, DocKind::Guide | DocKind::Index)
    }
}

impl fmt::Display for DocKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.resource_type())
    }
}

/// One value per schema-backed documentation kind
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PerKind<T> {
    pub action: T,
    pub data_source: T,
    pub ephemeral: T,
    pub function: T,
    pub list_resource: T,
    pub resource: T,
}

impl<T> PerKind<T> {
    /// Value for `kind`, `None` for guides and index pages
    pub fn get(&self, kind: DocKind) -> Option<&T> {
        match kind {
            DocKind::Action => Some(&self.action),
            DocKind::DataSource => Some(&self.data_source),
            DocKind::Ephemeral => Some(&self.ephemeral),
            DocKind::Function => Some(&self.function),
            DocKind::ListResource => Some(&self.list_resource),
            DocKind::Resource => Some(&self.resource),
            DocKind::Guide | DocKind::Index => None,
        }
    }
}
