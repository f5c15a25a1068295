//! Provider schema names
//!
//! Reads the output of `terraform providers schema -json`. Only the names of
//! each schema kind matter here, the schema bodies are skipped.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use serde::de::IgnoredAny;

use crate::check::kind::PerKind;

type Names = BTreeMap<String, IgnoredAny>;

#[derive(Debug, Deserialize)]
pub struct ProvidersSchema {
    pub format_version: String,
    #[serde(default)]
    pub provider_schemas: HashMap<String, ProviderSchema>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ProviderSchema {
    action_schemas: Names,
    data_source_schemas: Names,
    ephemeral_resource_schemas: Names,
    functions: Names,
    list_resource_schemas: Names,
    resource_schemas: Names,
}

impl ProviderSchema {
    /// Sorted schema names per documentation kind
    pub fn names(&self) -> PerKind<Vec<String>> {
        fn keys(names: &Names) -> Vec<String> {
            names.keys().cloned().collect()
        }

        PerKind {
            action: keys(&self.action_schemas),
            data_source: keys(&self.data_source_schemas),
            ephemeral: keys(&self.ephemeral_resource_schemas),
            function: keys(&self.functions),
            list_resource: keys(&self.list_resource_schemas),
            resource: keys(&self.resource_schemas),
        }
    }
}

impl ProvidersSchema {
    pub fn parse(content: &str) -> Result<Self> {
        let schema: Self =
            serde_json::from_str(content).context("error parsing providers schema JSON")?;

        if !schema.format_version.starts_with("1.") {
            bail!(
                "unsupported providers schema JSON format version: {}",
                schema.format_version
            );
        }

        Ok(schema)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("error reading providers schema JSON: {}", path.display()))?;
        Self::parse(&content)
    }

    /// Schema of a provider, by source address first then by name
    ///
    /// Names match the last segment of a source address, so `test` finds
    /// `registry.terraform.io/example/test`.
    pub fn provider(&self, provider_source: Option<&str>, provider_name: &str) -> Option<&ProviderSchema> {
        if let Some(schema) = provider_source.and_then(|source| self.provider_schemas.get(source)) {
            return Some(schema);
        }

        if let Some(schema) = self.provider_schemas.get(provider_name) {
            return Some(schema);
        }

        let suffix = format!("/{provider_name}");
        let mut matches: Vec<_> = self
            .provider_schemas
            .iter()
            .filter(|(address, _)| address.ends_with(&suffix))
            .collect();
        matches.sort_by(|a, b| a.0.cmp(b.0));
        matches.first().map(|(_, schema)| *schema)
    }

    /// Schema names for the provider, empty when the provider is not found
    pub fn names(&self, provider_source: Option<&str>, provider_name: &str) -> PerKind<Vec<String>> {
        match self.provider(provider_source, provider_name) {
            Some(schema) => schema.names(),
            None => {
                log::warn!(
                    "Provider {} not found in providers schema JSON, skipping file mismatch checks",
                    provider_source.unwrap_or(provider_name)
                );
                PerKind::default()
            }
        }
    }
}
