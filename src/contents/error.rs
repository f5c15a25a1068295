//! Contents check errors

use std::fmt;

use thiserror::Error;

/// Logical section of a documentation page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    Title,
    Example,
    Arguments,
    Attributes,
    Timeouts,
    Import,
    Signature,
}

impl SectionKind {
    pub fn name(self) -> &'static str {
        match self {
            SectionKind::Title => "title",
            SectionKind::Example => "example",
            SectionKind::Arguments => "arguments",
            SectionKind::Attributes => "attributes",
            SectionKind::Timeouts => "timeouts",
            SectionKind::Import => "import",
            SectionKind::Signature => "signature",
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Render a list of allowed values as `"a", "b", "c"`
pub(crate) fn quoted<S: AsRef<str>>(values: &[S]) -> String {
    values
        .iter()
        .map(|v| format!("{:?}", v.as_ref()))
        .collect::<Vec<_>>()
        .join(", ")
}

/// The first structural problem found in a document
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContentsError {
    #[error("error parsing document: {0}")]
    Encoding(#[from] std::str::Utf8Error),

    #[error("missing {section} section: {expected}")]
    MissingSection {
        section: SectionKind,
        expected: String,
    },

    #[error("{section} section should not be present")]
    UnexpectedSection { section: SectionKind },

    /// A section forbidden outright by a disallow flag
    #[error("{message}")]
    DisallowedSection {
        section: SectionKind,
        message: String,
    },

    #[error("{section} section heading level ({actual}) should be: {expected}")]
    HeadingLevel {
        section: SectionKind,
        actual: u8,
        expected: u8,
    },

    #[error("{section} section heading ({actual}) should be one of: {}", quoted(.expected))]
    HeadingText {
        section: SectionKind,
        actual: String,
        expected: Vec<String>,
    },

    #[error("title section heading ({actual}) should have one of these prefixes: {}", quoted(.prefixes))]
    TitlePrefix {
        actual: String,
        prefixes: Vec<String>,
    },

    #[error("title section code examples should be in Example Usage section")]
    TitleCodeBlock,

    #[error("example section code block language ({actual}) should be: ```{expected}")]
    ExampleLanguage { actual: String, expected: String },

    #[error("{section} section byline should be one of: {}", quoted(.expected))]
    MissingByline {
        section: SectionKind,
        expected: Vec<String>,
    },

    #[error("{section} section byline ({actual}) should be one of: {}", quoted(.expected))]
    Byline {
        section: SectionKind,
        actual: String,
        expected: Vec<String>,
    },

    #[error("arguments section byline ({actual}) should be followed by: {expected:?}")]
    MissingOptionalByline { actual: String, expected: String },

    #[error("required arguments section contains an Optional argument: {name}")]
    OptionalInRequiredList { name: String },

    #[error("optional arguments section contains a Required argument: {name}")]
    RequiredInOptionalList { name: String },

    #[error("arguments section does not contain an Optional region argument")]
    MissingRegionArgument,

    #[error("{section} section is not sorted by name ({before} should come after {after})")]
    Unsorted {
        section: SectionKind,
        before: String,
        after: String,
    },

    #[error("import section should not include {problem:?}, {fix}")]
    ImportWording {
        problem: &'static str,
        fix: &'static str,
    },

    #[error("import section should conclude with {suffix:?} (or state \"You cannot import ...\")")]
    ImportSuffix { suffix: &'static str },

    #[error("import section should have a code block (or state \"You cannot import ...\")")]
    ImportMissingCodeBlock,

    #[error("import section code block text should contain resource name: {resource_name}")]
    ImportResourceName { resource_name: String },

    #[error(
        "the first import section code block should have an import block using type 'terraform' (i.e., ```terraform\\nimport {{)"
    )]
    ImportFirstCodeBlock,

    #[error("import section code block type 'console' should begin with '% '")]
    ImportConsolePrefix,

    #[error(
        "import section code block type ({actual}) should be 'console' or 'terraform' (i.e., ```console or ```terraform)"
    )]
    ImportCodeBlockLanguage { actual: String },

    #[error(
        "import section: all code blocks of type 'terraform' should be before code blocks of type 'console'"
    )]
    ImportCodeBlockOrder,

    #[error("signature section must include a code block")]
    SignatureCodeBlock,
}

impl ContentsError {
    /// Section the error was raised for, when it is tied to one
    pub fn section(&self) -> Option<SectionKind> {
        match self {
            ContentsError::Encoding(_) => None,
            ContentsError::MissingSection { section, .. }
            | ContentsError::UnexpectedSection { section }
            | ContentsError::DisallowedSection { section, .. }
            | ContentsError::HeadingLevel { section, .. }
            | ContentsError::HeadingText { section, .. }
            | ContentsError::MissingByline { section, .. }
            | ContentsError::Byline { section, .. }
            | ContentsError::Unsorted { section, .. } => Some(*section),
            ContentsError::TitlePrefix { .. } | ContentsError::TitleCodeBlock => {
                Some(SectionKind::Title)
            }
            ContentsError::ExampleLanguage { .. } => Some(SectionKind::Example),
            ContentsError::MissingOptionalByline { .. }
            | ContentsError::OptionalInRequiredList { .. }
            | ContentsError::RequiredInOptionalList { .. }
            | ContentsError::MissingRegionArgument => Some(SectionKind::Arguments),
            ContentsError::ImportWording { .. }
            | ContentsError::ImportSuffix { .. }
            | ContentsError::ImportMissingCodeBlock
            | ContentsError::ImportResourceName { .. }
            | ContentsError::ImportFirstCodeBlock
            | ContentsError::ImportConsolePrefix
            | ContentsError::ImportCodeBlockLanguage { .. }
            | ContentsError::ImportCodeBlockOrder => Some(SectionKind::Import),
            ContentsError::SignatureCodeBlock => Some(SectionKind::Signature),
        }
    }
}
