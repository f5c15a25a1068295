//! Documentation directory discovery and layout checks

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use thiserror::Error;
use walkdir::WalkDir;

use crate::check::kind::{DocKind, Layout};

pub const CDKTF_INDEX_DIRECTORY: &str = "cdktf";

pub const VALID_CDKTF_LANGUAGES: &[&str] = &["csharp", "go", "java", "python", "typescript"];

/// Documentation files grouped by their directory, both relative to the base path
pub type Directories = BTreeMap<String, Vec<String>>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("invalid Terraform Provider documentation directory found: {0}")]
    InvalidDirectory(String),

    #[error(
        "mixed Terraform Provider documentation directory layouts found, must use only legacy or registry layout"
    )]
    MixedLayouts,
}

/// A recognized documentation directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocDirectory {
    pub layout: Layout,
    /// `None` for intermediate `cdktf` directories that hold no pages
    pub kind: Option<DocKind>,
    pub cdktf_language: Option<&'static str>,
}

impl DocDirectory {
    /// Classify a directory path relative to the base path
    pub fn classify(directory: &str) -> Option<Self> {
        for layout in [Layout::Legacy, Layout::Registry] {
            let Some(rest) = strip_directory(directory, layout.index_directory()) else {
                continue;
            };

            let parts: Vec<&str> = if rest.is_empty() {
                Vec::new()
            } else {
                rest.split('/').collect()
            };

            return match parts.as_slice() {
                [] => Some(Self::new(layout, Some(DocKind::Index), None)),
                [CDKTF_INDEX_DIRECTORY] => Some(Self::new(layout, None, None)),
                [CDKTF_INDEX_DIRECTORY, language] => {
                    cdktf_language(language).map(|lang| Self::new(layout, None, Some(lang)))
                }
                [CDKTF_INDEX_DIRECTORY, language, subdirectory] => {
                    let lang = cdktf_language(language)?;
                    let kind = DocKind::from_directory(layout, subdirectory)?;
                    Some(Self::new(layout, Some(kind), Some(lang)))
                }
                [subdirectory] => DocKind::from_directory(layout, subdirectory)
                    .map(|kind| Self::new(layout, Some(kind), None)),
                _ => None,
            };
        }

        None
    }

    fn new(layout: Layout, kind: Option<DocKind>, cdktf_language: Option<&'static str>) -> Self {
        Self {
            layout,
            kind,
            cdktf_language,
        }
    }
}

fn strip_directory<'a>(directory: &'a str, prefix: &str) -> Option<&'a str> {
    let rest = directory.strip_prefix(prefix)?;
    if rest.is_empty() {
        Some(rest)
    } else {
        rest.strip_prefix('/')
    }
}

fn cdktf_language(language: &str) -> Option<&'static str> {
    VALID_CDKTF_LANGUAGES
        .iter()
        .copied()
        .find(|valid| *valid == language)
}

/// Relative path with `/` separators
fn relative_path(base: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(base).ok()?;
    let parts: Vec<String> = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    Some(parts.join("/"))
}

/// Whether a file under `docs/` is registry documentation
fn is_registry_file(relative: &str) -> bool {
    if relative == "docs/index.md" {
        return true;
    }

    let mut parts = relative.split('/').skip(1);
    match (parts.next(), parts.next()) {
        (Some(CDKTF_INDEX_DIRECTORY), Some(_)) => true,
        (Some(subdirectory), Some(_)) => {
            DocKind::from_directory(Layout::Registry, subdirectory).is_some()
        }
        _ => false,
    }
}

/// Find documentation files under `base` and group them by directory
pub fn discover(base: &Path) -> Result<Directories> {
    let mut directories = Directories::new();

    for layout in [Layout::Registry, Layout::Legacy] {
        let root = base.join(layout.index_directory());
        if !root.is_dir() {
            continue;
        }

        for entry in WalkDir::new(&root).sort_by_file_name() {
            let entry = entry.with_context(|| {
                format!(
                    "error walking Terraform Provider documentation directory: {}",
                    root.display()
                )
            })?;

            if !entry.file_type().is_file() || entry.file_name() == ".keep" {
                continue;
            }

            let Some(relative) = relative_path(base, entry.path()) else {
                continue;
            };

            if layout == Layout::Registry && !is_registry_file(&relative) {
                log::debug!("Skipping file outside registry directories: {}", relative);
                continue;
            }

            let directory = relative
                .rsplit_once('/')
                .map(|(dir, _)| dir.to_string())
                .unwrap_or_default();

            directories.entry(directory).or_default().push(relative);
        }
    }

    Ok(directories)
}

/// Every directory must be a known documentation directory
pub fn invalid_directories_check(directories: &Directories) -> Result<(), LayoutError> {
    match directories
        .keys()
        .find(|dir| DocDirectory::classify(dir).is_none())
    {
        Some(dir) => Err(LayoutError::InvalidDirectory(dir.clone())),
        None => Ok(()),
    }
}

/// Legacy directories and registry kind subdirectories must not be mixed
///
/// The registry `docs/` index on its own does not count, providers often
/// keep unrelated files there.
pub fn mixed_directories_check(directories: &Directories) -> Result<(), LayoutError> {
    let mut legacy = false;
    let mut registry = false;

    for directory in directories.keys().filter_map(|d| DocDirectory::classify(d)) {
        if directory.cdktf_language.is_some() || directory.kind.is_none() {
            continue;
        }
        match directory.layout {
            Layout::Legacy => legacy = true,
            Layout::Registry if directory.kind != Some(DocKind::Index) => registry = true,
            Layout::Registry => {}
        }
    }

    if legacy && registry {
        Err(LayoutError::MixedLayouts)
    } else {
        Ok(())
    }
}
