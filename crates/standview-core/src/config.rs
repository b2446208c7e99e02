use crate::error::StandviewError;
use crate::model::Field;
use crate::page::DEFAULT_PAGE_SIZE;
use crate::search::SearchSpec;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectConfig {
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub listing: ListingConfig,
    #[serde(default)]
    pub quick_search: QuickSearchConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DataConfig {
    /// Data file, relative to the project root unless absolute.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingConfig {
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    /// Field names; aliases such as `city` or `start` are accepted.
    #[serde(default = "default_listing_fields")]
    pub fields: Vec<String>,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            fields: default_listing_fields(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuickSearchConfig {
    #[serde(default = "default_quick_search_fields")]
    pub fields: Vec<String>,
}

impl Default for QuickSearchConfig {
    fn default() -> Self {
        Self {
            fields: default_quick_search_fields(),
        }
    }
}

impl ProjectConfig {
    /// Listing preset with configured fields.
    ///
    /// # Errors
    ///
    /// Returns [`StandviewError::InvalidField`] for an unknown field name.
    pub fn listing_spec(&self) -> Result<SearchSpec, StandviewError> {
        Ok(SearchSpec::listing().with_fields(parse_fields(&self.listing.fields)?))
    }

    /// Quick-search preset with configured fields.
    ///
    /// # Errors
    ///
    /// Returns [`StandviewError::InvalidField`] for an unknown field name.
    pub fn quick_search_spec(&self) -> Result<SearchSpec, StandviewError> {
        Ok(SearchSpec::quick_search().with_fields(parse_fields(&self.quick_search.fields)?))
    }
}

fn parse_fields(names: &[String]) -> Result<Vec<Field>, StandviewError> {
    names
        .iter()
        .map(|name| name.parse::<Field>().map_err(StandviewError::from))
        .collect()
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UserConfig {
    #[serde(default)]
    pub output: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EffectiveConfig {
    pub project: ProjectConfig,
    pub user: UserConfig,
    pub resolved_output: String,
}

/// Load `<root>/.standview/config.toml`, or defaults when it does not exist.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_project_config(project_root: &Path) -> Result<ProjectConfig> {
    let path = project_root.join(".standview/config.toml");
    if !path.exists() {
        return Ok(ProjectConfig::default());
    }

    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    toml::from_str::<ProjectConfig>(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))
}

/// Load `<config_dir>/standview/config.toml`, or defaults.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_user_config() -> Result<UserConfig> {
    let Some(config_dir) = dirs::config_dir() else {
        return Ok(UserConfig::default());
    };

    let path = config_dir.join("standview/config.toml");
    if !path.exists() {
        return Ok(UserConfig::default());
    }

    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    toml::from_str::<UserConfig>(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))
}

/// Load both config layers and resolve the output mode.
///
/// # Errors
///
/// Returns an error if either config file is unreadable or invalid.
pub fn resolve_config(project_root: &Path, cli_json: bool) -> Result<EffectiveConfig> {
    let project = load_project_config(project_root)?;
    let user = load_user_config()?;

    let env_format = env::var("FORMAT").ok();
    let resolved_output = resolve_output(
        cli_json,
        user.output.clone(),
        env_format,
        std::io::stdout().is_terminal(),
    );

    Ok(EffectiveConfig {
        project,
        user,
        resolved_output,
    })
}

fn resolve_output(
    cli_json: bool,
    user_output: Option<String>,
    env_format: Option<String>,
    is_tty: bool,
) -> String {
    fn normalize_output_mode(raw: &str) -> Option<&'static str> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "pretty" | "human" => Some("pretty"),
            "text" | "table" => Some("text"),
            "json" => Some("json"),
            _ => None,
        }
    }

    if cli_json {
        return "json".to_string();
    }

    if let Some(mode) = env_format.as_deref().and_then(normalize_output_mode) {
        return mode.to_string();
    }

    if let Some(mode) = user_output.as_deref().and_then(normalize_output_mode) {
        return mode.to_string();
    }

    if is_tty { "pretty" } else { "text" }.to_string()
}

const fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_listing_fields() -> Vec<String> {
    Field::LISTING.iter().map(ToString::to_string).collect()
}

fn default_quick_search_fields() -> Vec<String> {
    Field::QUICK_SEARCH.iter().map(ToString::to_string).collect()
}
