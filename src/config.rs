use crate::{
    domain::ids::IdStrategy,
    error::{KanbanError, Result},
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tracing::debug;

/// Board configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub name: String,
    /// Prefix of auto-generated column titles ("Column" gives "Column 3")
    pub column_title_prefix: String,
    /// Prefix of auto-generated task content ("Task" gives "Task 3")
    pub task_content_prefix: String,
    pub id_strategy: IdStrategy,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            name: "Board".to_string(),
            column_title_prefix: "Column".to_string(),
            task_content_prefix: "Task".to_string(),
            id_strategy: IdStrategy::default(),
        }
    }
}

impl BoardConfig {
    /// Parses a JSON configuration; absent fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| KanbanError::ConfigError(format!("Invalid board config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a JSON file, falling back to defaults when
    /// the file does not exist
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            debug!(path = %path.display(), "No board config found, using defaults");
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path).await?;
        let config = Self::from_json(&contents)?;
        debug!(path = %path.display(), name = %config.name, "Loaded board config");
        Ok(config)
    }

    /// Writes the configuration as pretty JSON
    pub async fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).await?;
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.column_title_prefix.trim().is_empty() {
            return Err(KanbanError::ConfigError(
                "column_title_prefix must not be empty".to_string(),
            ));
        }
        if self.task_content_prefix.trim().is_empty() {
            return Err(KanbanError::ConfigError(
                "task_content_prefix must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
