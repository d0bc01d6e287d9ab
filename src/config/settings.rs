// src/config/settings.rs

use std::time::Duration;

use crate::cli::CliArgs;
use crate::config::model::ConfigFile;
use crate::config::validate::validate_settings;
use crate::errors::Result;
use crate::format::Templates;
use crate::types::LeaveMode;

pub const DEFAULT_INTERVAL: f64 = 0.25;
pub const DEFAULT_SHELL: &str = "bash";

/// Fully resolved run configuration.
///
/// Built once from the command line and an optional config file; read-only
/// afterwards.
#[derive(Debug, Clone)]
pub struct Settings {
    pub message: String,
    pub leave: LeaveMode,
    pub delay: f64,
    pub interval: f64,
    pub indent: usize,
    pub templates: Templates,
    pub plain: bool,
    pub hide_cursor: bool,
    pub shell: String,
    /// Redirect expressions, in application order.
    pub redirects: Vec<String>,
    /// `[attrs:]name[=value]` expressions, in declaration order.
    pub env_vars: Vec<String>,
    /// Command followed by its arguments.
    pub command: Vec<String>,
}

impl Settings {
    /// Settings with every option at its built-in default.
    pub fn new<I, S>(command: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            message: String::new(),
            leave: LeaveMode::Never,
            delay: 0.0,
            interval: DEFAULT_INTERVAL,
            indent: 0,
            templates: Templates::default(),
            plain: false,
            hide_cursor: false,
            shell: DEFAULT_SHELL.to_string(),
            redirects: Vec::new(),
            env_vars: Vec::new(),
            command: command.into_iter().map(Into::into).collect(),
        }
    }

    /// Merge CLI arguments over an optional config file over defaults.
    pub fn resolve(args: &CliArgs, file: Option<&ConfigFile>) -> Result<Self> {
        let mut settings = Settings::new(args.command.iter().cloned());

        if let Some(file) = file {
            settings.apply_file(file);
        }
        settings.apply_cli(args);

        validate_settings(&settings)?;
        Ok(settings)
    }

    pub fn delay(&self) -> Duration {
        Duration::from_secs_f64(self.delay)
    }

    pub fn interval(&self) -> Duration {
        Duration::from_secs_f64(self.interval)
    }

    fn apply_file(&mut self, file: &ConfigFile) {
        let timer = &file.timer;
        set_if_some(&mut self.delay, timer.delay);
        set_if_some(&mut self.interval, timer.interval);

        let display = &file.display;
        set_if_some(&mut self.message, display.message.clone());
        set_if_some(&mut self.indent, display.indent);
        set_if_some(&mut self.leave, display.leave);
        set_if_some(&mut self.plain, display.plain);
        set_if_some(&mut self.hide_cursor, display.hide_cursor);
        set_if_some(&mut self.shell, display.shell.clone());

        let t = &mut self.templates;
        let format = &file.format;
        set_if_some(&mut t.standard, format.standard.clone());
        set_if_some(&mut t.initial, format.initial.clone());
        set_if_some(&mut t.message, format.message.clone());
        set_if_some(&mut t.final_, format.final_.clone());
        set_if_some(&mut t.timer, format.timer.clone());
        set_if_some(&mut t.zero_timer, format.zero_timer.clone());

        let status = &file.status;
        set_if_some(&mut t.running, status.running.clone());
        set_if_some(&mut t.success, status.success.clone());
        set_if_some(&mut t.failure, status.failure.clone());
    }

    fn apply_cli(&mut self, args: &CliArgs) {
        set_if_some(&mut self.message, args.message.clone());
        set_if_some(&mut self.delay, args.delay);
        set_if_some(&mut self.interval, args.interval);
        set_if_some(&mut self.indent, args.indent);
        set_if_some(&mut self.shell, args.shell.clone());

        // `-l` wins over `-L` when both are given.
        if args.leave {
            self.leave = LeaveMode::Always;
        } else if args.leave_on_failure {
            self.leave = LeaveMode::OnFailure;
        }
        self.plain |= args.plain;
        self.hide_cursor |= args.hide_cursor;

        let t = &mut self.templates;
        set_if_some(&mut t.standard, args.format_standard.clone());
        set_if_some(&mut t.initial, args.format_initial.clone());
        set_if_some(&mut t.message, args.format_message.clone());
        set_if_some(&mut t.final_, args.format_final.clone());
        set_if_some(&mut t.timer, args.format_timer.clone());
        set_if_some(&mut t.zero_timer, args.format_zero_timer.clone());
        set_if_some(&mut t.running, args.status_running.clone());
        set_if_some(&mut t.success, args.status_success.clone());
        set_if_some(&mut t.failure, args.status_failure.clone());

        self.redirects = args.redirect_exprs();
        self.env_vars = args.env_vars.clone();
    }
}

fn set_if_some<T>(slot: &mut T, value: Option<T>) {
    if let Some(v) = value {
        *slot = v;
    }
}
