use std::{env, path::PathBuf};

use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::error::AppError;
use crate::goal::Goal;

pub const LOG_FILE_VAR: &str = "RECIPES_LOG_FILE";
pub const LOG_FILTER_VAR: &str = "RECIPES_LOG";
pub const MAX_CALORIES_VAR: &str = "RECIPES_MAX_CALORIES";
pub const GOAL_VAR: &str = "RECIPES_GOAL";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub log_file: PathBuf,
    pub log_filter: String,
    /// Initial text of the calorie field. Coerced like user input.
    pub max_calories: String,
    pub goal: Goal,
}

impl Config {
    pub fn load() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_file = lookup(LOG_FILE_VAR)
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| env::temp_dir().join("healthy-recipes.log"));

        let log_filter = lookup(LOG_FILTER_VAR).unwrap_or_else(|| "info".to_string());
        EnvFilter::try_new(&log_filter).map_err(|e| AppError::Config {
            key: LOG_FILTER_VAR,
            value: log_filter.clone(),
            reason: e.to_string(),
        })?;

        let max_calories = lookup(MAX_CALORIES_VAR).unwrap_or_else(|| "600".to_string());

        let goal = match lookup(GOAL_VAR) {
            Some(key) => Goal::from_key(key.trim()).ok_or_else(|| AppError::Config {
                key: GOAL_VAR,
                value: key.clone(),
                reason: "expected \"mass\" or \"pp\"".to_string(),
            })?,
            None => Goal::default(),
        };

        Ok(Self { log_file, log_filter, max_calories, goal })
    }

    /// Called once the subscriber exists, so the resolved values land in the log.
    pub fn log_summary(&self) {
        info!(
            log_file = %self.log_file.display(),
            log_filter = %self.log_filter,
            max_calories = %self.max_calories,
            goal = self.goal.key(),
            "configuration loaded"
        );
    }
}
