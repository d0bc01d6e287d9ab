#![allow(dead_code)]

use cmdtimer::config::Settings;
use cmdtimer::types::LeaveMode;

/// Builder for `Settings` to simplify test setup.
pub struct SettingsBuilder {
    settings: Settings,
}

impl SettingsBuilder {
    /// Run `command` with `args`, everything else at its default.
    pub fn new(command: &str, args: &[&str]) -> Self {
        let mut words = vec![command.to_string()];
        words.extend(args.iter().map(|a| a.to_string()));
        Self {
            settings: Settings::new(words),
        }
    }

    /// Run `script` through `sh -c`.
    pub fn sh(script: &str) -> Self {
        Self::new("sh", &["-c", script])
    }

    pub fn message(mut self, message: &str) -> Self {
        self.settings.message = message.to_string();
        self
    }

    pub fn interval(mut self, seconds: f64) -> Self {
        self.settings.interval = seconds;
        self
    }

    pub fn delay(mut self, seconds: f64) -> Self {
        self.settings.delay = seconds;
        self
    }

    pub fn leave(mut self, leave: LeaveMode) -> Self {
        self.settings.leave = leave;
        self
    }

    pub fn redirect(mut self, expr: &str) -> Self {
        self.settings.redirects.push(expr.to_string());
        self
    }

    pub fn var(mut self, expr: &str) -> Self {
        self.settings.env_vars.push(expr.to_string());
        self
    }

    pub fn build(self) -> Settings {
        self.settings
    }
}
