//! Documentation files against provider schema names

use std::collections::BTreeSet;

use thiserror::Error;

use crate::check::kind::DocKind;
use crate::contents::trim_doc_extension;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MismatchError {
    #[error(
        "matching {kind} for documentation file ({file}) not found, file is extraneous or incorrectly named"
    )]
    Extraneous { kind: DocKind, file: String },

    #[error("missing documentation file for {kind}: {name}")]
    Missing { kind: DocKind, name: String },
}

#[derive(Debug, Clone, Copy)]
pub struct MismatchCheck<'a> {
    pub kind: DocKind,
    pub provider_name: &'a str,
    pub schema_names: &'a [String],
    pub ignore_mismatch: &'a [String],
    pub ignore_missing: &'a [String],
}

impl MismatchCheck<'_> {
    /// Schema name a documentation file stands for
    pub fn name_for_file(&self, file: &str) -> String {
        let file_name = file.rsplit('/').next().unwrap_or(file);
        let stem = trim_doc_extension(file_name);

        if self.kind == DocKind::Function || self.provider_name.is_empty() {
            stem.to_string()
        } else {
            format!("{}_{}", self.provider_name, stem)
        }
    }

    /// Report extraneous files first, then missing ones, each in name order
    pub fn run(&self, files: &[String]) -> Vec<MismatchError> {
        if self.schema_names.is_empty() {
            log::debug!("Skipping {} mismatch check, no schema names", self.kind);
            return Vec::new();
        }

        let schema: BTreeSet<&str> = self.schema_names.iter().map(String::as_str).collect();
        let mut documented = BTreeSet::new();
        let mut errors = Vec::new();

        for file in files {
            let name = self.name_for_file(file);

            if !schema.contains(name.as_str()) && !self.ignore_mismatch.contains(&name) {
                errors.push(MismatchError::Extraneous {
                    kind: self.kind,
                    file: file.clone(),
                });
            }

            documented.insert(name);
        }

        for name in schema {
            if documented.contains(name) || self.ignore_missing.iter().any(|i| i == name) {
                continue;
            }
            errors.push(MismatchError::Missing {
                kind: self.kind,
                name: name.to_string(),
            });
        }

        errors
    }
}
