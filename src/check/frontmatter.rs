//! YAML frontmatter checks

use serde::Deserialize;
use thiserror::Error;

use crate::check::kind::{DocKind, Layout};
use crate::parser::extract_frontmatter;

/// Frontmatter keys the checks know about; anything else is ignored
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct FrontMatter {
    pub description: Option<String>,
    pub layout: Option<String>,
    pub page_title: Option<String>,
    pub sidebar_current: Option<String>,
    pub subcategory: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrontMatterOptions {
    pub allowed_subcategories: Vec<String>,
    pub no_layout: bool,
    pub no_page_title: bool,
    pub no_sidebar_current: bool,
    pub no_subcategory: bool,
    pub require_description: bool,
    pub require_layout: bool,
    pub require_page_title: bool,
    pub require_subcategory: bool,
}

#[derive(Debug, Error)]
pub enum FrontMatterError {
    #[error("YAML frontmatter not found")]
    Missing,

    #[error("error parsing YAML frontmatter: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("YAML frontmatter should not contain {0}")]
    Forbidden(&'static str),

    #[error("YAML frontmatter missing required {0}")]
    MissingKey(&'static str),

    #[error("YAML frontmatter subcategory ({actual}) does not match allowed subcategories: {allowed:?}")]
    Subcategory {
        actual: String,
        allowed: Vec<String>,
    },
}

impl FrontMatterOptions {
    /// Options for a documentation kind in a layout
    ///
    /// `allowed_subcategories` and `require_subcategory` come from the
    /// guide or resource settings, depending on the kind.
    pub fn for_kind(
        layout: Layout,
        kind: DocKind,
        allowed_subcategories: &[String],
        require_subcategory: bool,
    ) -> Self {
        let mut opts = match kind {
            DocKind::Index => Self::default(),
            _ => Self {
                allowed_subcategories: allowed_subcategories.to_vec(),
                require_subcategory,
                ..Default::default()
            },
        };

        opts.no_sidebar_current = true;

        match layout {
            Layout::Legacy => {
                opts.require_description = true;
                opts.require_layout = true;
                opts.require_page_title = true;
            }
            Layout::Registry => {
                opts.no_layout = true;
                match kind {
                    DocKind::Action => {
                        opts.require_description = true;
                        opts.require_page_title = true;
                        opts.require_subcategory = true;
                    }
                    DocKind::Index => opts.no_subcategory = true,
                    _ => {}
                }
            }
        }

        opts
    }
}

/// Check the frontmatter of a page, returning its subcategory
pub fn check_frontmatter(
    content: &str,
    opts: &FrontMatterOptions,
) -> Result<Option<String>, FrontMatterError> {
    let yaml = extract_frontmatter(content).ok_or(FrontMatterError::Missing)?;

    let frontmatter: FrontMatter = if yaml.trim().is_empty() {
        FrontMatter::default()
    } else {
        serde_yaml::from_str(yaml)?
    };

    let forbidden = [
        (opts.no_layout, frontmatter.layout.is_some(), "layout"),
        (opts.no_page_title, frontmatter.page_title.is_some(), "page_title"),
        (
            opts.no_sidebar_current,
            frontmatter.sidebar_current.is_some(),
            "sidebar_current",
        ),
        (opts.no_subcategory, frontmatter.subcategory.is_some(), "subcategory"),
    ];
    if let Some((_, _, key)) = forbidden.iter().find(|(flag, present, _)| *flag && *present) {
        return Err(FrontMatterError::Forbidden(*key));
    }

    let required = [
        (opts.require_description, frontmatter.description.is_none(), "description"),
        (opts.require_layout, frontmatter.layout.is_none(), "layout"),
        (opts.require_page_title, frontmatter.page_title.is_none(), "page_title"),
        (opts.require_subcategory, frontmatter.subcategory.is_none(), "subcategory"),
    ];
    if let Some((_, _, key)) = required.iter().find(|(flag, missing, _)| *flag && *missing) {
        return Err(FrontMatterError::MissingKey(*key));
    }

    if let Some(subcategory) = &frontmatter.subcategory {
        if !opts.allowed_subcategories.is_empty()
            && !opts.allowed_subcategories.contains(subcategory)
        {
            return Err(FrontMatterError::Subcategory {
                actual: subcategory.clone(),
                allowed: opts.allowed_subcategories.clone(),
            });
        }
    }

    Ok(frontmatter.subcategory)
}
