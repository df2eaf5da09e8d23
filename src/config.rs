//! Configuration file support for spdx-license-report.
//!
//! Provides YAML-based configuration through `spdx-report.config.yml` files,
//! including data structures, file loading, and validation.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use crate::license_report::domain::{LicenseInfo, LicenseOverride, UserLicense};
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "spdx-report.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub format: Option<String>,
    pub scopes: Option<String>,
    pub excludes: Option<Vec<String>>,
    pub licenses: Option<Vec<LicenseDeclaration>>,
    pub license_mappings: Option<Vec<LicenseMapping>>,
    pub originator: Option<String>,
    pub download_location: Option<String>,
    pub copyright_text: Option<String>,
    pub output_directory: Option<PathBuf>,
    pub repository: Option<RepositoryConfig>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// A user license that mappings refer to by `id`.
#[derive(Debug, Deserialize)]
pub struct LicenseDeclaration {
    pub id: String,
    pub name: String,
    pub url: Option<String>,
}

/// Assigns licenses to an artifact, a whole group, or an external component.
///
/// `license_id` is a comma separated list of declared license ids.
#[derive(Debug, Deserialize)]
pub struct LicenseMapping {
    pub artifact_id: Option<String>,
    pub group_id: Option<String>,
    pub license_id: String,
    #[serde(default)]
    pub external: bool,
}

/// Where license metadata comes from: a local index directory or a registry URL.
#[derive(Debug, Deserialize, Default)]
pub struct RepositoryConfig {
    pub index: Option<PathBuf>,
    pub url: Option<String>,
}

impl ConfigFile {
    /// Declared licenses as domain values, in declaration order.
    pub fn user_licenses(&self) -> Vec<UserLicense> {
        self.licenses
            .iter()
            .flatten()
            .map(|l| {
                UserLicense::new(
                    l.id.trim(),
                    LicenseInfo::new(l.name.trim(), l.url.clone()),
                )
            })
            .collect()
    }

    /// License mappings as domain overrides, in declaration order.
    pub fn license_overrides(&self) -> Result<Vec<LicenseOverride>> {
        self.license_mappings
            .iter()
            .flatten()
            .enumerate()
            .map(|(index, m)| {
                LicenseOverride::from_parts(
                    index,
                    m.artifact_id.as_deref(),
                    m.group_id.as_deref(),
                    &m.license_id,
                    m.external,
                )
            })
            .collect()
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)
        .with_context(|| format!("Invalid config file: {}", path.display()))?;
    warn_unknown_fields(&config);
    warn_undeclared_license_ids(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    for (i, license) in config.licenses.iter().flatten().enumerate() {
        if license.id.trim().is_empty() {
            bail!(
                "licenses[{}].id must not be empty.\n\n\
                 💡 Hint: Each license needs a non-empty 'id' that mappings can refer to.",
                i
            );
        }
        if license.name.trim().is_empty() {
            bail!("licenses[{}].name must not be empty.", i);
        }
    }

    config.license_overrides()?;

    if let Some(repository) = &config.repository {
        if repository.index.is_some() && repository.url.is_some() {
            bail!(
                "repository must set either 'index' or 'url', not both.\n\n\
                 💡 Hint: Use 'index' for a local directory or 'url' for a remote registry."
            );
        }
    }

    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        tracing::warn!(field = %key, "unknown config field will be ignored");
    }
}

/// Mappings may name ids nobody declared; those ids contribute no license.
fn warn_undeclared_license_ids(config: &ConfigFile) {
    let declared: HashSet<&str> = config
        .licenses
        .iter()
        .flatten()
        .map(|l| l.id.trim())
        .collect();

    for mapping in config.license_mappings.iter().flatten() {
        for id in mapping.license_id.split(',').map(str::trim) {
            if !id.is_empty() && !declared.contains(id) {
                tracing::warn!(license_id = %id, "license mapping refers to an undeclared license id");
            }
        }
    }
}
