//! Per-file documentation checks
//!
//! Extension, size and frontmatter are checked for every page; the contents
//! pipeline runs when the page kind has contents options.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use thiserror::Error;

use crate::check::frontmatter::{FrontMatterOptions, check_frontmatter};
use crate::check::kind::Layout;
use crate::contents::document::DOC_EXTENSIONS;
use crate::contents::{CheckOptions, Document, resource_name_from_path};

/// Terraform Registry storage limit for a single documentation file
pub const REGISTRY_MAXIMUM_SIZE_OF_FILE: u64 = 500_000;

pub const LEGACY_FILE_EXTENSIONS: &[&str] = DOC_EXTENSIONS;
pub const REGISTRY_FILE_EXTENSIONS: &[&str] = &[".md"];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FileError {
    #[error("file does not end with a valid extension, valid extensions: {valid:?}")]
    Extension { valid: &'static [&'static str] },

    #[error("exceeded maximum ({max}) size of documentation file for Terraform Registry: {size}")]
    Size { size: u64, max: u64 },
}

pub fn file_extension_check(path: &str, layout: Layout) -> Result<(), FileError> {
    let valid = match layout {
        Layout::Legacy => LEGACY_FILE_EXTENSIONS,
        Layout::Registry => REGISTRY_FILE_EXTENSIONS,
    };

    if valid.iter().any(|ext| path.ends_with(ext)) {
        Ok(())
    } else {
        Err(FileError::Extension { valid })
    }
}

pub fn file_size_check(full_path: &Path) -> Result<()> {
    let size = fs::metadata(full_path)
        .with_context(|| format!("error reading file metadata: {}", full_path.display()))?
        .len();

    if size >= REGISTRY_MAXIMUM_SIZE_OF_FILE {
        return Err(FileError::Size {
            size,
            max: REGISTRY_MAXIMUM_SIZE_OF_FILE,
        }
        .into());
    }

    Ok(())
}

/// Legacy layouts may carry `.erb` templates, which are not documentation
pub fn file_ignore_check(path: &str) -> bool {
    path.ends_with(".erb")
}

/// Checks for the files of one documentation directory
#[derive(Debug, Clone)]
pub struct FileCheck {
    pub base_path: PathBuf,
    pub layout: Layout,
    pub provider_name: String,
    pub frontmatter: FrontMatterOptions,
    /// `None` when contents are not checked
    pub contents: Option<CheckOptions>,
}

impl FileCheck {
    pub fn full_path(&self, path: &str) -> PathBuf {
        self.base_path.join(path)
    }

    /// Check one file, `path` being relative to the base path
    pub fn run(&self, path: &str) -> Result<()> {
        let full_path = self.full_path(path);

        log::debug!("Checking file: {}", full_path.display());

        if self.layout == Layout::Legacy && file_ignore_check(path) {
            log::debug!("Skipping: {}", path);
            return Ok(());
        }

        file_extension_check(path, self.layout)
            .with_context(|| format!("{path}: error checking file extension"))?;

        file_size_check(&full_path).with_context(|| format!("{path}: error checking file size"))?;

        let bytes = fs::read(&full_path).with_context(|| format!("{path}: error reading file"))?;
        let content = String::from_utf8_lossy(&bytes);

        let subcategory = check_frontmatter(&content, &self.frontmatter)
            .with_context(|| format!("{path}: error checking file frontmatter"))?;

        if let Some(opts) = &self.contents {
            let resource_name = resource_name_from_path(&full_path, &self.provider_name);
            let document = Document::parse(&bytes, resource_name, self.provider_name.as_str())
                .with_context(|| format!("{path}: error checking file contents"))?;

            document
                .check(opts, subcategory.as_deref())
                .inspect_err(|err| {
                    if let Some(section) = err.section() {
                        log::debug!("{}: {} section check failed", path, section);
                    }
                })
                .with_context(|| format!("{path}: error checking file contents"))?;
        }

        Ok(())
    }

    /// Check every file, collecting one error per failing file
    pub fn run_all(&self, files: &[String]) -> Vec<anyhow::Error> {
        files
            .iter()
            .filter_map(|file| self.run(file).err())
            .collect()
    }
}
