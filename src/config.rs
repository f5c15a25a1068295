//! Configuration management for the documentation checker.
//!
//! Handles:
//! - Command-line argument parsing
//! - TOML configuration files (user-global, project, explicit)
//! - Provider name detection

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use serde::Deserialize;

use crate::check::RunOptions;
use crate::check::kind::PerKind;

/// Project configuration file, looked up in the checked path
pub const PROJECT_CONFIG_FILE: &str = ".tfdocs-lint.toml";

const PROVIDER_DIRECTORY_PREFIX: &str = "terraform-provider-";

/// Command-line arguments for the documentation checker
#[derive(Debug, Parser)]
#[command(name = "tfdocs-lint")]
#[command(about = "Check Terraform Provider documentation")]
#[command(version)]
pub struct Args {
    /// Provider checkout to check, defaults to the current directory
    #[arg(help = "Path to the Terraform Provider checkout")]
    pub path: Option<PathBuf>,

    #[arg(long, help = "Additional TOML configuration file")]
    pub config: Option<PathBuf>,

    #[arg(
        long,
        default_value = "warn",
        help = "Log level (trace, debug, info, warn, error)"
    )]
    pub log_level: String,

    #[arg(long, value_delimiter = ',', help = "Comma separated list of allowed guide frontmatter subcategories")]
    pub allowed_guide_subcategories: Vec<String>,

    #[arg(long, help = "Path to newline separated file of allowed guide frontmatter subcategories")]
    pub allowed_guide_subcategories_file: Option<PathBuf>,

    #[arg(long, value_delimiter = ',', help = "Comma separated list of allowed data source and resource frontmatter subcategories")]
    pub allowed_resource_subcategories: Vec<String>,

    #[arg(long, help = "Path to newline separated file of allowed data source and resource frontmatter subcategories")]
    pub allowed_resource_subcategories_file: Option<PathBuf>,

    #[arg(long, help = "Enable contents checking")]
    pub enable_contents_check: bool,

    #[arg(long, help = "Enable enhanced Region functionality checks")]
    pub enable_enhanced_region_check: bool,

    #[arg(long, help = "Ignore checks for missing CDK for Terraform documentation files")]
    pub ignore_cdktf_missing_files: bool,

    #[arg(long, value_delimiter = ',', help = "Comma separated list of data sources to ignore contents checking")]
    pub ignore_contents_check_data_sources: Vec<String>,

    #[arg(long, value_delimiter = ',', help = "Comma separated list of actions to ignore contents checking")]
    pub ignore_contents_check_actions: Vec<String>,

    #[arg(long, value_delimiter = ',', help = "Comma separated list of ephemerals to ignore contents checking")]
    pub ignore_contents_check_ephemerals: Vec<String>,

    #[arg(long, value_delimiter = ',', help = "Comma separated list of functions to ignore contents checking")]
    pub ignore_contents_check_functions: Vec<String>,

    #[arg(long, value_delimiter = ',', help = "Comma separated list of resources to ignore contents checking")]
    pub ignore_contents_check_resources: Vec<String>,

    #[arg(long, value_delimiter = ',', help = "Comma separated list of data sources to ignore enhanced Region functionality checks")]
    pub ignore_enhanced_region_check_data_sources: Vec<String>,

    #[arg(long, help = "Path to newline separated file of data sources to ignore enhanced Region functionality checks")]
    pub ignore_enhanced_region_check_data_sources_file: Option<PathBuf>,

    #[arg(long, value_delimiter = ',', help = "Comma separated list of ephemerals to ignore enhanced Region functionality checks")]
    pub ignore_enhanced_region_check_ephemerals: Vec<String>,

    #[arg(long, help = "Path to newline separated file of ephemerals to ignore enhanced Region functionality checks")]
    pub ignore_enhanced_region_check_ephemerals_file: Option<PathBuf>,

    #[arg(long, value_delimiter = ',', help = "Comma separated list of resources to ignore enhanced Region functionality checks")]
    pub ignore_enhanced_region_check_resources: Vec<String>,

    #[arg(long, help = "Path to newline separated file of resources to ignore enhanced Region functionality checks")]
    pub ignore_enhanced_region_check_resources_file: Option<PathBuf>,

    #[arg(long, value_delimiter = ',', help = "Comma separated list of frontmatter subcategories to ignore enhanced Region functionality checks")]
    pub ignore_enhanced_region_check_subcategories: Vec<String>,

    #[arg(long, help = "Path to newline separated file of frontmatter subcategories to ignore enhanced Region functionality checks")]
    pub ignore_enhanced_region_check_subcategories_file: Option<PathBuf>,

    #[arg(long, value_delimiter = ',', help = "Comma separated list of data sources to ignore mismatched/extra files")]
    pub ignore_file_mismatch_data_sources: Vec<String>,

    #[arg(long, value_delimiter = ',', help = "Comma separated list of actions to ignore mismatched/extra files")]
    pub ignore_file_mismatch_actions: Vec<String>,

    #[arg(long, value_delimiter = ',', help = "Comma separated list of ephemerals to ignore mismatched/extra files")]
    pub ignore_file_mismatch_ephemerals: Vec<String>,

    #[arg(long, value_delimiter = ',', help = "Comma separated list of functions to ignore mismatched/extra files")]
    pub ignore_file_mismatch_functions: Vec<String>,

    #[arg(long, value_delimiter = ',', help = "Comma separated list of list resources to ignore mismatched/extra files")]
    pub ignore_file_mismatch_list_resources: Vec<String>,

    #[arg(long, value_delimiter = ',', help = "Comma separated list of resources to ignore mismatched/extra files")]
    pub ignore_file_mismatch_resources: Vec<String>,

    #[arg(long, value_delimiter = ',', help = "Comma separated list of data sources to ignore missing files")]
    pub ignore_file_missing_data_sources: Vec<String>,

    #[arg(long, value_delimiter = ',', help = "Comma separated list of actions to ignore missing files")]
    pub ignore_file_missing_actions: Vec<String>,

    #[arg(long, value_delimiter = ',', help = "Comma separated list of ephemerals to ignore missing files")]
    pub ignore_file_missing_ephemerals: Vec<String>,

    #[arg(long, value_delimiter = ',', help = "Comma separated list of functions to ignore missing files")]
    pub ignore_file_missing_functions: Vec<String>,

    #[arg(long, value_delimiter = ',', help = "Comma separated list of list resources to ignore missing files")]
    pub ignore_file_missing_list_resources: Vec<String>,

    #[arg(long, value_delimiter = ',', help = "Comma separated list of resources to ignore missing files")]
    pub ignore_file_missing_resources: Vec<String>,

    #[arg(long, help = "Terraform Provider short name (e.g. aws)")]
    pub provider_name: Option<String>,

    #[arg(long, help = "Terraform Provider source address (e.g. registry.terraform.io/hashicorp/aws)")]
    pub provider_source: Option<String>,

    #[arg(long, help = "Path to terraform providers schema -json file")]
    pub providers_schema_json: Option<PathBuf>,

    #[arg(long, help = "Require guide frontmatter subcategory")]
    pub require_guide_subcategory: bool,

    #[arg(long, help = "Require data source and resource frontmatter subcategory")]
    pub require_resource_subcategory: bool,

    #[arg(long, help = "Require argument and attribute lists to be sorted by name")]
    pub require_schema_ordering: bool,
}

/// Per-kind name lists in a configuration file
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub struct KindLists {
    pub actions: Vec<String>,
    pub data_sources: Vec<String>,
    pub ephemerals: Vec<String>,
    pub functions: Vec<String>,
    pub list_resources: Vec<String>,
    pub resources: Vec<String>,
}

impl KindLists {
    fn merge(self, other: Self) -> Self {
        Self {
            actions: prefer(other.actions, self.actions),
            data_sources: prefer(other.data_sources, self.data_sources),
            ephemerals: prefer(other.ephemerals, self.ephemerals),
            functions: prefer(other.functions, self.functions),
            list_resources: prefer(other.list_resources, self.list_resources),
            resources: prefer(other.resources, self.resources),
        }
    }
}

/// TOML configuration file contents
///
/// ```toml
/// provider-name = "test"
/// enable-contents-check = true
///
/// [ignore-contents-check]
/// resources = ["test_widget"]
/// ```
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub struct FileConfig {
    pub provider_name: Option<String>,
    pub provider_source: Option<String>,
    pub providers_schema_json: Option<PathBuf>,

    pub enable_contents_check: bool,
    pub enable_enhanced_region_check: bool,
    pub ignore_cdktf_missing_files: bool,
    pub require_guide_subcategory: bool,
    pub require_resource_subcategory: bool,
    pub require_schema_ordering: bool,

    pub allowed_guide_subcategories: Vec<String>,
    pub allowed_resource_subcategories: Vec<String>,
    pub ignore_enhanced_region_check_subcategories: Vec<String>,

    pub ignore_contents_check: KindLists,
    pub ignore_enhanced_region_check: KindLists,
    pub ignore_file_mismatch: KindLists,
    pub ignore_file_missing: KindLists,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(&content, Some(path))
    }

    pub fn parse(content: &str, source_path: Option<&Path>) -> Result<Self> {
        toml::from_str(content).with_context(|| match source_path {
            Some(path) => format!("Failed to parse config TOML: {}", path.display()),
            None => "Failed to parse config TOML".to_string(),
        })
    }

    /// Layer `other` on top of `self`
    pub fn merge(self, other: Self) -> Self {
        Self {
            provider_name: other.provider_name.or(self.provider_name),
            provider_source: other.provider_source.or(self.provider_source),
            providers_schema_json: other.providers_schema_json.or(self.providers_schema_json),
            enable_contents_check: self.enable_contents_check || other.enable_contents_check,
            enable_enhanced_region_check: self.enable_enhanced_region_check
                || other.enable_enhanced_region_check,
            ignore_cdktf_missing_files: self.ignore_cdktf_missing_files
                || other.ignore_cdktf_missing_files,
            require_guide_subcategory: self.require_guide_subcategory
                || other.require_guide_subcategory,
            require_resource_subcategory: self.require_resource_subcategory
                || other.require_resource_subcategory,
            require_schema_ordering: self.require_schema_ordering || other.require_schema_ordering,
            allowed_guide_subcategories: prefer(
                other.allowed_guide_subcategories,
                self.allowed_guide_subcategories,
            ),
            allowed_resource_subcategories: prefer(
                other.allowed_resource_subcategories,
                self.allowed_resource_subcategories,
            ),
            ignore_enhanced_region_check_subcategories: prefer(
                other.ignore_enhanced_region_check_subcategories,
                self.ignore_enhanced_region_check_subcategories,
            ),
            ignore_contents_check: self.ignore_contents_check.merge(other.ignore_contents_check),
            ignore_enhanced_region_check: self
                .ignore_enhanced_region_check
                .merge(other.ignore_enhanced_region_check),
            ignore_file_mismatch: self.ignore_file_mismatch.merge(other.ignore_file_mismatch),
            ignore_file_missing: self.ignore_file_missing.merge(other.ignore_file_missing),
        }
    }
}

fn prefer(first: Vec<String>, fallback: Vec<String>) -> Vec<String> {
    if first.is_empty() { fallback } else { first }
}

/// Newline separated list, blank lines skipped
fn read_list_file(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read list file: {}", path.display()))?;
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect())
}

/// Inline values plus the values of an optional list file
fn cli_list(mut values: Vec<String>, file: Option<&Path>) -> Result<Vec<String>> {
    values.retain(|v| !v.is_empty());
    if let Some(path) = file {
        values.extend(read_list_file(path)?);
    }
    Ok(values)
}

/// Short provider name from a `terraform-provider-<name>` directory
pub fn provider_name_from_path(path: &Path) -> Option<String> {
    let base = path.file_name()?.to_str()?;
    if base.contains(['.', '/']) {
        return None;
    }
    base.strip_prefix(PROVIDER_DIRECTORY_PREFIX)
        .filter(|name| !name.is_empty())
        .map(String::from)
}

/// Short provider name from a source address, its last segment
pub fn provider_name_from_source(source: &str) -> Option<String> {
    source
        .rsplit('/')
        .next()
        .filter(|name| !name.is_empty())
        .map(String::from)
}

/// Combined configuration from all sources
#[derive(Debug, Clone)]
pub struct Config {
    /// Provider checkout being checked
    pub path: PathBuf,
    /// Log level
    pub log_level: String,
    /// Providers schema JSON enabling the mismatch checks
    pub providers_schema_json: Option<PathBuf>,
    /// Check options, without schema names
    pub options: RunOptions,
}

impl Config {
    /// Create configuration from parsed arguments and config files
    pub fn from_args(args: Args) -> Result<Self> {
        let path = args.path.clone().unwrap_or_else(|| PathBuf::from("."));

        let mut config_files = Vec::new();
        if let Some(config_dir) = dirs::config_dir() {
            config_files.push(config_dir.join("tfdocs-lint").join("config.toml"));
        }
        config_files.push(path.join(PROJECT_CONFIG_FILE));

        let mut file = FileConfig::default();
        for config_file in config_files.iter().filter(|f| f.is_file()) {
            log::debug!("Loading config file: {}", config_file.display());
            file = file.merge(FileConfig::load(config_file)?);
        }
        if let Some(explicit) = &args.config {
            file = file.merge(FileConfig::load(explicit)?);
        }

        Self::from_sources(args, file, path)
    }

    /// Merge arguments over an already loaded file configuration
    pub fn from_sources(args: Args, file: FileConfig, path: PathBuf) -> Result<Self> {
        let provider_source = args.provider_source.or(file.provider_source);
        let provider_name = args
            .provider_name
            .or(file.provider_name)
            .or_else(|| provider_source.as_deref().and_then(provider_name_from_source))
            .or_else(|| detect_provider_name(&path))
            .unwrap_or_default();

        if provider_name.is_empty() {
            log::warn!(
                "Unable to determine provider name. Contents and enhanced validations may fail."
            );
        } else {
            log::debug!("Found provider name: {}", provider_name);
        }

        let list = |values: Vec<String>, list_file: Option<&Path>, fallback: &[String]| {
            cli_list(values, list_file).map(|values| prefer(values, fallback.to_vec()))
        };

        let contents = &file.ignore_contents_check;
        let ignore_contents_check = {
            let resources = list(args.ignore_contents_check_resources, None, &contents.resources)?;
            PerKind {
                action: list(args.ignore_contents_check_actions, None, &contents.actions)?,
                data_source: list(
                    args.ignore_contents_check_data_sources,
                    None,
                    &contents.data_sources,
                )?,
                ephemeral: list(args.ignore_contents_check_ephemerals, None, &contents.ephemerals)?,
                function: list(args.ignore_contents_check_functions, None, &contents.functions)?,
                list_resource: prefer(contents.list_resources.clone(), resources.clone()),
                resource: resources,
            }
        };

        let region = &file.ignore_enhanced_region_check;
        let ignore_enhanced_region_check = {
            let resources = list(
                args.ignore_enhanced_region_check_resources,
                args.ignore_enhanced_region_check_resources_file.as_deref(),
                &region.resources,
            )?;
            PerKind {
                action: region.actions.clone(),
                data_source: list(
                    args.ignore_enhanced_region_check_data_sources,
                    args.ignore_enhanced_region_check_data_sources_file.as_deref(),
                    &region.data_sources,
                )?,
                ephemeral: list(
                    args.ignore_enhanced_region_check_ephemerals,
                    args.ignore_enhanced_region_check_ephemerals_file.as_deref(),
                    &region.ephemerals,
                )?,
                function: region.functions.clone(),
                list_resource: prefer(region.list_resources.clone(), resources.clone()),
                resource: resources,
            }
        };

        let mismatch = &file.ignore_file_mismatch;
        let ignore_file_mismatch = PerKind {
            action: list(args.ignore_file_mismatch_actions, None, &mismatch.actions)?,
            data_source: list(args.ignore_file_mismatch_data_sources, None, &mismatch.data_sources)?,
            ephemeral: list(args.ignore_file_mismatch_ephemerals, None, &mismatch.ephemerals)?,
            function: list(args.ignore_file_mismatch_functions, None, &mismatch.functions)?,
            list_resource: list(
                args.ignore_file_mismatch_list_resources,
                None,
                &mismatch.list_resources,
            )?,
            resource: list(args.ignore_file_mismatch_resources, None, &mismatch.resources)?,
        };

        let missing = &file.ignore_file_missing;
        let ignore_file_missing = PerKind {
            action: list(args.ignore_file_missing_actions, None, &missing.actions)?,
            data_source: list(args.ignore_file_missing_data_sources, None, &missing.data_sources)?,
            ephemeral: list(args.ignore_file_missing_ephemerals, None, &missing.ephemerals)?,
            function: list(args.ignore_file_missing_functions, None, &missing.functions)?,
            list_resource: list(
                args.ignore_file_missing_list_resources,
                None,
                &missing.list_resources,
            )?,
            resource: list(args.ignore_file_missing_resources, None, &missing.resources)?,
        };

        let options = RunOptions {
            base_path: path.clone(),
            provider_name,
            provider_source,
            enable_contents_check: args.enable_contents_check || file.enable_contents_check,
            enable_enhanced_region_check: args.enable_enhanced_region_check
                || file.enable_enhanced_region_check,
            require_schema_ordering: args.require_schema_ordering || file.require_schema_ordering,
            ignore_cdktf_missing_files: args.ignore_cdktf_missing_files
                || file.ignore_cdktf_missing_files,
            allowed_guide_subcategories: list(
                args.allowed_guide_subcategories,
                args.allowed_guide_subcategories_file.as_deref(),
                &file.allowed_guide_subcategories,
            )?,
            allowed_resource_subcategories: list(
                args.allowed_resource_subcategories,
                args.allowed_resource_subcategories_file.as_deref(),
                &file.allowed_resource_subcategories,
            )?,
            require_guide_subcategory: args.require_guide_subcategory
                || file.require_guide_subcategory,
            require_resource_subcategory: args.require_resource_subcategory
                || file.require_resource_subcategory,
            ignore_contents_check,
            ignore_enhanced_region_check,
            ignore_enhanced_region_check_subcategories: list(
                args.ignore_enhanced_region_check_subcategories,
                args.ignore_enhanced_region_check_subcategories_file.as_deref(),
                &file.ignore_enhanced_region_check_subcategories,
            )?,
            ignore_file_mismatch,
            ignore_file_missing,
            schema_names: None,
        };

        Ok(Config {
            path,
            log_level: args.log_level,
            providers_schema_json: args.providers_schema_json.or(file.providers_schema_json),
            options,
        })
    }
}

/// Provider name from the checked path, or the current directory for `.`
fn detect_provider_name(path: &Path) -> Option<String> {
    if path == Path::new(".") || path.as_os_str().is_empty() {
        let cwd = std::env::current_dir().ok()?;
        return provider_name_from_path(&cwd);
    }
    provider_name_from_path(path)
}
