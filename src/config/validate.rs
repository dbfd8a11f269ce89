// src/config/validate.rs

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::{Result, SprintgraphError};

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = crate::errors::SprintgraphError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_config(&raw)?;
        Ok(ConfigFile::new_unchecked(raw.inputs, raw.render))
    }
}

fn validate_raw_config(cfg: &RawConfigFile) -> Result<()> {
    validate_inputs(cfg)?;
    validate_render(cfg)?;
    Ok(())
}

fn validate_inputs(cfg: &RawConfigFile) -> Result<()> {
    // The format string is strongly typed and validated during
    // deserialization, so we don't need to check it here.

    if cfg.inputs.sprints.trim().is_empty() {
        return Err(SprintgraphError::ConfigError(
            "[inputs].sprints must not be empty".to_string(),
        ));
    }

    if cfg.inputs.dependencies.trim().is_empty() {
        return Err(SprintgraphError::ConfigError(
            "[inputs].dependencies must not be empty".to_string(),
        ));
    }

    if cfg.inputs.sprint_prefix.is_empty() {
        return Err(SprintgraphError::ConfigError(
            "[inputs].sprint_prefix must not be empty".to_string(),
        ));
    }

    Ok(())
}

fn validate_render(cfg: &RawConfigFile) -> Result<()> {
    if cfg.render.output.trim().is_empty() {
        return Err(SprintgraphError::ConfigError(
            "[render].output must not be empty".to_string(),
        ));
    }

    if cfg.render.width == 0 || cfg.render.height == 0 {
        return Err(SprintgraphError::ConfigError(format!(
            "[render].width and [render].height must be >= 1 (got {}x{})",
            cfg.render.width, cfg.render.height
        )));
    }

    Ok(())
}
