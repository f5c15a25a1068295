//! Provider documentation checks
//!
//! Runs the layout checks over the discovered directories, then the schema
//! mismatch and per-file checks of every directory. Layout errors abort the
//! run; everything else is collected into one [`ErrorReport`].

pub mod contents;
pub mod directory;
pub mod file;
pub mod frontmatter;
pub mod kind;
pub mod mismatch;
pub mod schema;

use std::path::PathBuf;

use anyhow::Result;
use thiserror::Error;

use crate::check::contents::contents_options;
use crate::check::directory::{
    DocDirectory, Directories, invalid_directories_check, mixed_directories_check,
};
use crate::check::file::FileCheck;
use crate::check::frontmatter::FrontMatterOptions;
use crate::check::kind::{DocKind, PerKind};
use crate::check::mismatch::MismatchCheck;

pub use directory::discover;

/// Code block language expected in examples outside of `cdktf` directories
pub const DEFAULT_EXAMPLE_LANGUAGE: &str = "terraform";

#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    pub base_path: PathBuf,
    pub provider_name: String,
    pub provider_source: Option<String>,

    pub enable_contents_check: bool,
    pub enable_enhanced_region_check: bool,
    pub require_schema_ordering: bool,
    pub ignore_cdktf_missing_files: bool,

    pub allowed_guide_subcategories: Vec<String>,
    pub allowed_resource_subcategories: Vec<String>,
    pub require_guide_subcategory: bool,
    pub require_resource_subcategory: bool,

    pub ignore_contents_check: PerKind<Vec<String>>,
    pub ignore_enhanced_region_check: PerKind<Vec<String>>,
    pub ignore_enhanced_region_check_subcategories: Vec<String>,
    pub ignore_file_mismatch: PerKind<Vec<String>>,
    pub ignore_file_missing: PerKind<Vec<String>>,

    /// Names from the providers schema, `None` skips the mismatch checks
    pub schema_names: Option<PerKind<Vec<String>>>,
}

/// Every error of a run, sorted
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", render(.errors))]
pub struct ErrorReport {
    pub errors: Vec<String>,
}

fn render(errors: &[String]) -> String {
    let mut out = match errors.len() {
        1 => "1 error occurred:".to_string(),
        n => format!("{n} errors occurred:"),
    };
    for error in errors {
        out.push_str("\n\t* ");
        out.push_str(error);
    }
    out
}

impl ErrorReport {
    pub fn new(mut errors: Vec<String>) -> Self {
        errors.sort();
        Self { errors }
    }
}

pub struct Check {
    options: RunOptions,
}

impl Check {
    pub fn new(options: RunOptions) -> Self {
        Self { options }
    }

    pub fn run(&self, directories: &Directories) -> Result<()> {
        invalid_directories_check(directories)?;
        mixed_directories_check(directories)?;

        let mut errors = Vec::new();

        for (directory, files) in directories {
            let Some(doc_directory) = DocDirectory::classify(directory) else {
                continue;
            };
            let Some(kind) = doc_directory.kind else {
                log::debug!("Skipping directory without documentation kind: {}", directory);
                continue;
            };

            log::info!("Checking {} directory: {}", kind, directory);

            errors.extend(self.mismatch_errors(&doc_directory, kind, files));
            errors.extend(
                self.file_check(&doc_directory, kind)
                    .run_all(files)
                    .into_iter()
                    .map(|e| format!("{e:#}")),
            );
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ErrorReport::new(errors).into())
        }
    }

    fn mismatch_errors(
        &self,
        directory: &DocDirectory,
        kind: DocKind,
        files: &[String],
    ) -> Vec<String> {
        let opts = &self.options;

        if directory.cdktf_language.is_some() && opts.ignore_cdktf_missing_files {
            return Vec::new();
        }

        let Some(schema_names) = opts.schema_names.as_ref().and_then(|names| names.get(kind))
        else {
            return Vec::new();
        };

        let empty = Vec::new();
        let check = MismatchCheck {
            kind,
            provider_name: &opts.provider_name,
            schema_names,
            ignore_mismatch: opts.ignore_file_mismatch.get(kind).unwrap_or(&empty),
            ignore_missing: opts.ignore_file_missing.get(kind).unwrap_or(&empty),
        };

        check.run(files).iter().map(ToString::to_string).collect()
    }

    fn file_check(&self, directory: &DocDirectory, kind: DocKind) -> FileCheck {
        let opts = &self.options;

        let frontmatter = match kind {
            DocKind::Guide => FrontMatterOptions::for_kind(
                directory.layout,
                kind,
                &opts.allowed_guide_subcategories,
                opts.require_guide_subcategory,
            ),
            _ => FrontMatterOptions::for_kind(
                directory.layout,
                kind,
                &opts.allowed_resource_subcategories,
                opts.require_resource_subcategory,
            ),
        };

        let language = directory.cdktf_language.unwrap_or(DEFAULT_EXAMPLE_LANGUAGE);

        FileCheck {
            base_path: opts.base_path.clone(),
            layout: directory.layout,
            provider_name: opts.provider_name.clone(),
            frontmatter,
            contents: contents_options(kind, opts, language),
        }
    }
}
