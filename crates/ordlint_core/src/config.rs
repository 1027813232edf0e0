//! Linter configuration.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use jsonc_parser::ParseOptions;
use jsonschema::Validator;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{LintOptions, LinterError, ListStyle};

// Embed the schema
const SCHEMA_JSON: &str = include_str!("../../../schemas/v1/config.json");
static CONFIG_SCHEMA: OnceLock<Validator> = OnceLock::new();

/// Configuration for the linter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinterConfig {
    /// Numbering convention for ordered lists.
    #[serde(default)]
    pub list_style: ListStyle,

    /// Whether to check code block indentation inside list items.
    #[serde(default = "default_code_block_indent")]
    pub code_block_indent: bool,

    /// File patterns to include.
    #[serde(default)]
    pub include: Vec<String>,

    /// File patterns to exclude.
    #[serde(default)]
    pub exclude: Vec<String>,

    /// Directory containing the configuration file, if loaded from one.
    #[serde(skip)]
    pub base_dir: Option<PathBuf>,
}

fn default_code_block_indent() -> bool {
    true
}

impl LinterConfig {
    /// Configuration file names, in lookup order.
    pub const CONFIG_FILES: [&'static str; 2] = [".ordlint.jsonc", ".ordlint.json"];

    /// Creates the default configuration.
    pub fn new() -> Self {
        Self {
            list_style: ListStyle::default(),
            code_block_indent: default_code_block_indent(),
            include: Vec::new(),
            exclude: Vec::new(),
            base_dir: None,
        }
    }

    /// Loads configuration from a file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, LinterError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| LinterError::config(format!("Failed to read config: {}", e)))?;

        let mut config = Self::from_json(&content)?;
        config.base_dir = path.parent().map(Path::to_path_buf);

        Ok(config)
    }

    /// Parses configuration from JSON (comments and trailing commas allowed).
    pub fn from_json(json: &str) -> Result<Self, LinterError> {
        let value: serde_json::Value =
            jsonc_parser::parse_to_serde_value(json, &ParseOptions::default())
                .map_err(|e| LinterError::config(format!("Invalid JSON: {}", e)))?
                .unwrap_or(serde_json::Value::Object(serde_json::Map::new()));

        let schema = CONFIG_SCHEMA.get_or_init(|| {
            let schema_json: serde_json::Value =
                serde_json::from_str(SCHEMA_JSON).expect("Invalid embedded config schema");
            Validator::new(&schema_json).expect("Invalid config schema compilation")
        });

        if let Err(e) = schema.validate(&value) {
            return Err(LinterError::config(format!(
                "Config validation failed: {} at {}",
                e,
                e.instance_path()
            )));
        }

        serde_json::from_value(value)
            .map_err(|e| LinterError::config(format!("Invalid config: {}", e)))
    }

    /// Finds the first configuration file in `dir`.
    pub fn discover(dir: impl AsRef<Path>) -> Option<PathBuf> {
        let dir = dir.as_ref();
        let found = Self::CONFIG_FILES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.is_file());
        debug!("Config lookup in {}: {:?}", dir.display(), found);
        found
    }

    /// Options for the numbering check.
    pub fn lint_options(&self) -> LintOptions {
        LintOptions::new(self.list_style)
    }
}

impl Default for LinterConfig {
    fn default() -> Self {
        Self::new()
    }
}
