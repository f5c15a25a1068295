//! Documentation Contents Checks
//!
//! Structural validation of a single provider documentation page: the page
//! is split into its logical sections and each section is checked against
//! heading, byline, code block and schema list rules.

pub mod arguments;
pub mod attributes;
pub mod check;
pub mod document;
pub mod error;
pub mod example;
pub mod import;
pub mod options;
pub mod schema;
pub mod sections;
pub mod signature;
pub mod timeouts;
pub mod title;

pub use document::{Document, resource_name_from_path, trim_doc_extension};
pub use error::{ContentsError, SectionKind};
pub use options::{
    ArgumentsSectionOptions, AttributesSectionOptions, CheckOptions, ExampleSectionOptions,
    ImportSectionOptions, SectionRequirement, SignatureSectionOptions, TimeoutsSectionOptions,
    TitleSectionOptions,
};
pub use schema::{Requiredness, SchemaAttributeList, SchemaAttributeListItem};
pub use sections::{Section, Sections};
