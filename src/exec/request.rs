// src/exec/request.rs

//! The immutable description of what to run: command, arguments, variable
//! declarations and file-handle redirections.

use std::path::PathBuf;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::config::Settings;
use crate::config::settings::DEFAULT_SHELL;
use crate::errors::{CmdTimerError, Result};
use crate::exec::script;

static REDIRECT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:(?P<input>0?<)|(?P<output>[12])?>(?P<append>>)?)(?:&(?P<dup>\d+)|(?P<path>.+))$")
        .expect("redirect regex is valid")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenMode {
    Read,
    Write,
    Append,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RedirectTarget {
    /// Duplicate a descriptor (`&M`).
    Descriptor(u32),
    /// Open a file.
    Path(PathBuf),
}

/// One `[N]<src`, `[N]>dst` or `[N]>>dst` expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirection {
    /// Child descriptor being redirected: 0, 1 or 2.
    pub fd: u8,
    pub mode: OpenMode,
    pub target: RedirectTarget,
}

impl FromStr for Redirection {
    type Err = CmdTimerError;

    fn from_str(s: &str) -> Result<Self> {
        let caps = REDIRECT
            .captures(s)
            .ok_or_else(|| CmdTimerError::InvalidRedirect(s.to_string()))?;

        let (fd, mode) = if caps.name("input").is_some() {
            (0, OpenMode::Read)
        } else {
            let fd = match caps.name("output").map(|m| m.as_str()) {
                Some("2") => 2,
                _ => 1,
            };
            let mode = if caps.name("append").is_some() {
                OpenMode::Append
            } else {
                OpenMode::Write
            };
            (fd, mode)
        };

        let target = match (caps.name("dup"), caps.name("path")) {
            (Some(dup), _) => RedirectTarget::Descriptor(
                dup.as_str()
                    .parse()
                    .map_err(|_| CmdTimerError::InvalidRedirect(s.to_string()))?,
            ),
            (None, Some(path)) => RedirectTarget::Path(PathBuf::from(path.as_str())),
            (None, None) => return Err(CmdTimerError::InvalidRedirect(s.to_string())),
        };

        Ok(Self { fd, mode, target })
    }
}

/// A `[attrs:]name[=value]` declaration for the child shell.
///
/// Not validated here: a bad name or attribute makes `declare` fail inside
/// the shell, which shows up as the child's exit status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvAssignment {
    pub attrs: Option<String>,
    pub name: String,
    pub value: Option<String>,
}

impl EnvAssignment {
    pub fn parse(expr: &str) -> Self {
        let (lhs, value) = match expr.split_once('=') {
            Some((lhs, value)) => (lhs, Some(value.to_string())),
            None => (expr, None),
        };
        let (attrs, name) = match lhs.split_once(':') {
            Some((attrs, name)) => (Some(attrs).filter(|a| !a.is_empty()), name),
            None => (None, lhs),
        };
        Self {
            attrs: attrs.map(str::to_string),
            name: name.to_string(),
            value,
        }
    }

    /// The quoted `declare` statement for this assignment.
    pub fn declaration(&self) -> String {
        let mut words = vec!["declare".to_string()];
        if let Some(ref attrs) = self.attrs {
            words.push(format!("-{attrs}"));
        }
        words.push(match self.value {
            Some(ref value) => format!("{}={value}", self.name),
            None => self.name.clone(),
        });
        script::join(&words)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionRequest {
    pub command: String,
    pub args: Vec<String>,
    pub env: Vec<EnvAssignment>,
    pub redirects: Vec<Redirection>,
    /// Shell used as the wrapper, looked up on `PATH`.
    pub shell: String,
}

impl ExecutionRequest {
    pub fn new<I, S>(command: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            command: command.into(),
            args: args.into_iter().map(Into::into).collect(),
            env: Vec::new(),
            redirects: Vec::new(),
            shell: DEFAULT_SHELL.to_string(),
        }
    }

    /// Build the request from settings. A malformed redirect is fatal here,
    /// before anything is launched.
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let (command, args) = settings.command.split_first().ok_or_else(|| {
            CmdTimerError::ConfigError("a command to run is required".to_string())
        })?;

        let redirects = settings
            .redirects
            .iter()
            .map(|expr| expr.parse())
            .collect::<Result<Vec<Redirection>>>()?;

        Ok(Self {
            command: command.clone(),
            args: args.to_vec(),
            env: settings.env_vars.iter().map(|e| EnvAssignment::parse(e)).collect(),
            redirects,
            shell: settings.shell.clone(),
        })
    }

    pub fn with_env(mut self, expr: &str) -> Self {
        self.env.push(EnvAssignment::parse(expr));
        self
    }

    pub fn with_redirect(mut self, expr: &str) -> Result<Self> {
        self.redirects.push(expr.parse()?);
        Ok(self)
    }

    pub fn with_shell(mut self, shell: impl Into<String>) -> Self {
        self.shell = shell.into();
        self
    }

    /// The script handed to `shell -c`.
    pub fn script(&self) -> String {
        script::build_script(&self.env, &self.command, &self.args)
    }
}
