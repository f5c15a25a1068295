//! Contents check options
//!
//! Every list option is "empty means default": validators resolve the
//! documented default constant at call time instead of storing it here.

use crate::contents::error::{ContentsError, SectionKind};
use crate::contents::sections::Section;

pub const DEFAULT_TITLE_PREFIXES: &[&str] =
    &["Action", "Data Source", "Ephemeral", "List Resource", "Resource"];

pub const DEFAULT_EXAMPLE_HEADING_TEXTS: &[&str] = &["Example Usage"];
pub const DEFAULT_EXAMPLE_CODE_BLOCK_LANGUAGE: &str = "terraform";

pub const DEFAULT_ARGUMENTS_HEADING_TEXTS: &[&str] = &["Argument Reference"];
pub const REQUIRED_ARGUMENTS_BYLINE: &str = "The following arguments are required:";
pub const OPTIONAL_ARGUMENTS_BYLINE: &str = "The following arguments are optional:";
pub const DEFAULT_ARGUMENTS_BYLINE_TEXTS: &[&str] = &[
    "This resource supports the following arguments:",
    "This ephemeral resource supports the following arguments:",
    "This list resource supports the following arguments:",
    "This action supports the following arguments:",
    REQUIRED_ARGUMENTS_BYLINE,
    OPTIONAL_ARGUMENTS_BYLINE,
    "This resource does not support any arguments.",
    "This ephemeral resource does not support any arguments.",
    "This list resource does not support any arguments.",
    "This action does not support any arguments.",
    "This data source does not support any arguments.",
    "This data source supports the following arguments:",
];

pub const DEFAULT_ATTRIBUTES_HEADING_TEXTS: &[&str] =
    &["Attribute Reference", "Attributes Reference"];
pub const DEFAULT_ATTRIBUTES_BYLINE_TEXTS: &[&str] = &[
    "This resource exports the following attributes in addition to the arguments above:",
    "This data source exports the following attributes in addition to the arguments above:",
    "This resource exports no additional attributes.",
    "This data source exports no additional attributes.",
    "In addition to all arguments above, the following attributes are exported:",
    "No additional attributes are exported.",
];
pub const DEFAULT_ATTRIBUTES_DISALLOWED_MESSAGE: &str = "attribute section is not allowed";

pub const IMPORT_HEADING_TEXT: &str = "Import";
pub const DEFAULT_IMPORT_DISALLOWED_MESSAGE: &str = "import section is not allowed";

pub const DEFAULT_SIGNATURE_HEADING_TEXTS: &[&str] = &["Signature"];

/// Whether a section must, may, or must not appear
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SectionRequirement {
    Required,
    #[default]
    Optional,
    Forbidden,
}

impl SectionRequirement {
    /// Check presence of `section` against this requirement
    ///
    /// Returns the section when its contents should be checked further.
    pub fn check<'a>(
        self,
        kind: SectionKind,
        section: Option<&'a Section>,
        expected: &str,
    ) -> Result<Option<&'a Section>, ContentsError> {
        match (section, self) {
            (None, SectionRequirement::Required) => Err(ContentsError::MissingSection {
                section: kind,
                expected: expected.to_string(),
            }),
            (None, _) => Ok(None),
            (Some(_), SectionRequirement::Forbidden) => {
                Err(ContentsError::UnexpectedSection { section: kind })
            }
            (Some(section), _) => Ok(Some(section)),
        }
    }
}

/// Configured values, or the defaults when nothing is configured
pub(crate) fn or_defaults<'a>(configured: &'a [String], defaults: &[&'a str]) -> Vec<&'a str> {
    if configured.is_empty() {
        defaults.to_vec()
    } else {
        configured.iter().map(String::as_str).collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TitleSectionOptions {
    /// Allowed heading prefixes, without the `": "` separator
    pub allowed_prefixes: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExampleSectionOptions {
    pub require_section: SectionRequirement,
    pub allowed_heading_texts: Vec<String>,
    /// Language tag every example code block must carry
    pub expected_code_block_language: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArgumentsSectionOptions {
    pub enhanced_region_checks: bool,
    /// The resource accepts a top-level `region` argument
    pub region_aware: bool,
    pub require_schema_ordering: bool,
    pub expected_byline_texts: Vec<String>,
    pub allowed_heading_texts: Vec<String>,
    pub allow_missing_byline: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AttributesSectionOptions {
    pub require_section: SectionRequirement,
    pub require_schema_ordering: bool,
    pub allowed_heading_texts: Vec<String>,
    pub expected_byline_texts: Vec<String>,
    pub disallowed: bool,
    pub disallowed_message: Option<String>,
}

impl Default for AttributesSectionOptions {
    fn default() -> Self {
        Self {
            require_section: SectionRequirement::Required,
            require_schema_ordering: false,
            allowed_heading_texts: Vec::new(),
            expected_byline_texts: Vec::new(),
            disallowed: false,
            disallowed_message: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimeoutsSectionOptions {
    pub require_section: SectionRequirement,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImportSectionOptions {
    pub require_section: SectionRequirement,
    pub disallowed: bool,
    pub disallowed_message: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignatureSectionOptions {
    pub require_section: SectionRequirement,
    pub allowed_heading_texts: Vec<String>,
    pub require_code_block: bool,
}

/// Options for checking one document
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CheckOptions {
    pub title: TitleSectionOptions,
    pub example: ExampleSectionOptions,
    pub arguments: ArgumentsSectionOptions,
    pub attributes: AttributesSectionOptions,
    pub timeouts: TimeoutsSectionOptions,
    pub import: ImportSectionOptions,
    /// Only function documentation has a signature section
    pub signature: Option<SignatureSectionOptions>,

    /// Resource names whose contents are not checked at all
    pub ignore_contents_check: Vec<String>,
    /// Resource names exempt from the enhanced region check
    pub ignore_region_check: Vec<String>,
    /// Frontmatter subcategories exempt from the enhanced region check
    pub ignore_region_check_subcategories: Vec<String>,
}
