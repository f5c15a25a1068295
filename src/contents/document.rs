//! Parsed documentation page

use std::path::Path;

use crate::contents::error::ContentsError;
use crate::contents::sections::{Sections, locate};
use crate::parser::read_blocks;

/// Documentation file extensions, longest first so stems trim correctly
pub const DOC_EXTENSIONS: &[&str] = &[".html.markdown", ".html.md", ".markdown", ".md"];

/// A documentation page split into its logical sections
///
/// Built once per file and never modified afterwards; checking borrows it.
#[derive(Debug, Clone)]
pub struct Document {
    pub source: String,
    pub resource_name: String,
    pub provider_name: String,
    pub sections: Sections,
}

impl Document {
    pub fn parse(
        source: &[u8],
        resource_name: impl Into<String>,
        provider_name: impl Into<String>,
    ) -> Result<Self, ContentsError> {
        let source = std::str::from_utf8(source)?.to_string();
        let sections = locate(&read_blocks(&source));

        Ok(Self {
            source,
            resource_name: resource_name.into(),
            provider_name: provider_name.into(),
            sections,
        })
    }
}

/// File name with its documentation extension removed
pub fn trim_doc_extension(file_name: &str) -> &str {
    DOC_EXTENSIONS
        .iter()
        .find_map(|ext| file_name.strip_suffix(ext))
        .unwrap_or(file_name)
}

/// Resource name a page documents: `<provider>_<stem>`, or the stem alone
pub fn resource_name_from_path(path: &Path, provider_name: &str) -> String {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy())
        .unwrap_or_default();
    let stem = trim_doc_extension(&file_name);

    if provider_name.is_empty() {
        stem.to_string()
    } else {
        format!("{provider_name}_{stem}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_doc_extension() {
        assert_eq!(trim_doc_extension("widget.html.markdown"), "widget");
        assert_eq!(trim_doc_extension("widget.html.md"), "widget");
        assert_eq!(trim_doc_extension("widget.markdown"), "widget");
        assert_eq!(trim_doc_extension("widget.md"), "widget");
        assert_eq!(trim_doc_extension("widget.txt"), "widget.txt");
    }

    #[test]
    fn test_resource_name_from_path() {
        let path = Path::new("docs/resources/widget.md");
        assert_eq!(resource_name_from_path(path, "test"), "test_widget");
        assert_eq!(resource_name_from_path(path, ""), "widget");
    }

    #[test]
    fn test_parse_rejects_invalid_utf8() {
        let err = Document::parse(&[0x23, 0x20, 0xff, 0xfe], "test_widget", "test").unwrap_err();
        assert!(matches!(err, ContentsError::Encoding(_)));
    }

    #[test]
    fn test_parse_locates_sections() {
        let doc = Document::parse(
            b"# Resource: test_widget\n\n## Argument Reference\n",
            "test_widget",
            "test",
        )
        .unwrap();

        assert!(doc.sections.title.is_some());
        assert!(doc.sections.arguments.is_some());
        assert_eq!(doc.resource_name, "test_widget");
    }
}
