// src/config/validate.rs

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::config::settings::Settings;
use crate::errors::{CmdTimerError, Result};

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = crate::errors::CmdTimerError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_config(&raw)?;
        Ok(ConfigFile::new_unchecked(raw))
    }
}

fn validate_raw_config(cfg: &RawConfigFile) -> Result<()> {
    if let Some(delay) = cfg.timer.delay {
        validate_delay("[timer].delay", delay)?;
    }
    if let Some(interval) = cfg.timer.interval {
        validate_interval("[timer].interval", interval)?;
    }
    Ok(())
}

/// Checks applied to the merged settings, whatever their source.
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_delay("delay", settings.delay)?;
    validate_interval("interval", settings.interval)?;
    if settings.command.is_empty() {
        return Err(CmdTimerError::ConfigError(
            "a command to run is required".to_string(),
        ));
    }
    Ok(())
}

fn validate_delay(what: &str, delay: f64) -> Result<()> {
    if !delay.is_finite() || delay < 0.0 {
        return Err(CmdTimerError::ConfigError(format!(
            "{what} must be a finite number >= 0 (got {delay})"
        )));
    }
    Ok(())
}

fn validate_interval(what: &str, interval: f64) -> Result<()> {
    if !interval.is_finite() || interval <= 0.0 {
        return Err(CmdTimerError::ConfigError(format!(
            "{what} must be a finite number > 0 (got {interval})"
        )));
    }
    Ok(())
}
