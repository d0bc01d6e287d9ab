// src/cli.rs

//! CLI argument parsing using `clap`.
//!
//! Every display option is optional here so that values from a `--config`
//! file can fill the gaps; see [`crate::config::Settings::resolve`].

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

const AFTER_HELP: &str = "\
File handle redirects use the bash syntax: 0<path, [1|2]>path, [1|2]>>path,
and &N instead of a path to duplicate an existing handle.

Variables are declared in the child shell as:
    [<bash-attrs>:]<varname>[=<value>]

Formatting variables:
    {i}             indent, as specified by -i
    {raw_msg}       raw input message, as specified by -m
    {msg}           formatted message, per --format-message
    {min}           minutes elapsed
    {sec}           seconds elapsed since last minute
    {timer}         formatted timer, per --format[-zero]-timer
    {status}        status, per --status-*
    {F.*}           ANSI escape formatting (see below)

ANSI escape formatting:
    {F.*}:          X/reset; B/bold, XB/Xbold; D/dim, XD/Xdim;
                    I/italic, XI/Xitalic; U/uline, XU/Xuline;
                    reverse, Xreverse; strike, Xstrike; fg.*; bg.*
    {F.(fg|bg).*}:  X/default, K/black, R/red, G/green, Y/yellow,
                    B/blue, M/magenta, C/cyan, W/white, index, rgb";

/// Command-line arguments for `cmdtimer`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "cmdtimer",
    version,
    about = "Run a command while showing a live elapsed-time status line.",
    long_about = None,
    after_help = AFTER_HELP
)]
pub struct CliArgs {
    /// Message to prefix to the timer.
    #[arg(short = 'm', long, value_name = "STRING", help_heading = "Basic options")]
    pub message: Option<String>,

    /// Leave the final line on screen at exit.
    #[arg(short = 'l', long, help_heading = "Basic options")]
    pub leave: bool,

    /// Leave the final line on screen only if the child failed.
    #[arg(short = 'L', long, help_heading = "Basic options")]
    pub leave_on_failure: bool,

    /// Delay after child start until the standard format is shown.
    #[arg(short = 'd', long, value_name = "SECONDS", help_heading = "Basic options")]
    pub delay: Option<f64>,

    /// Interval between updates.
    #[arg(short = 'I', long, value_name = "SECONDS", help_heading = "Basic options")]
    pub interval: Option<f64>,

    /// Spaces to indent by.
    #[arg(short = 'i', long, value_name = "COUNT", help_heading = "Formatting options")]
    pub indent: Option<usize>,

    /// Custom line format.
    #[arg(long, value_name = "FORMAT", help_heading = "Formatting options")]
    pub format_standard: Option<String>,

    /// Custom initial line format (shown during --delay).
    #[arg(long, value_name = "FORMAT", help_heading = "Formatting options")]
    pub format_initial: Option<String>,

    /// Custom message format.
    #[arg(long, value_name = "FORMAT", help_heading = "Formatting options")]
    pub format_message: Option<String>,

    /// Custom final line format.
    #[arg(long, value_name = "FORMAT", help_heading = "Formatting options")]
    pub format_final: Option<String>,

    /// Custom timer format.
    #[arg(long, value_name = "FORMAT", help_heading = "Formatting options")]
    pub format_timer: Option<String>,

    /// Custom zeroed initial/final timer format.
    #[arg(long, value_name = "FORMAT", help_heading = "Formatting options")]
    pub format_zero_timer: Option<String>,

    /// Custom running status format.
    #[arg(long, value_name = "FORMAT", help_heading = "Formatting options")]
    pub status_running: Option<String>,

    /// Custom success status format.
    #[arg(long, value_name = "FORMAT", help_heading = "Formatting options")]
    pub status_success: Option<String>,

    /// Custom failure status format.
    #[arg(long, value_name = "FORMAT", help_heading = "Formatting options")]
    pub status_failure: Option<String>,

    /// Don't write fancy output.
    #[arg(short = 'p', long, help_heading = "Less-common options")]
    pub plain: bool,

    /// Hide the cursor while showing the timer.
    #[arg(long, help_heading = "Less-common options")]
    pub hide_cursor: bool,

    /// Shell used to run the command (looked up on PATH).
    #[arg(long, value_name = "NAME", help_heading = "Less-common options")]
    pub shell: Option<String>,

    /// Optional TOML file with defaults for the options above.
    #[arg(
        long,
        value_name = "PATH",
        env = "CMDTIMER_CONFIG",
        help_heading = "Less-common options"
    )]
    pub config: Option<PathBuf>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `CMDTIMER_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL", help_heading = "Less-common options")]
    pub log_level: Option<LogLevel>,

    /// Redirect a file handle for the child.
    #[arg(
        short = 'f',
        long = "fh",
        value_name = "&-EXPR",
        help_heading = "Command options"
    )]
    pub handles: Vec<String>,

    /// Append child stdout to a file (same as `-f '>>PATH'`).
    #[arg(short = 'O', long, value_name = "PATH", help_heading = "Command options")]
    pub stdout: Option<String>,

    /// Append child stderr to a file (same as `-f '2>>PATH'`).
    #[arg(short = 'E', long, value_name = "PATH", help_heading = "Command options")]
    pub stderr: Option<String>,

    /// Define a variable in the child environment.
    #[arg(
        short = 'e',
        long = "var",
        value_name = "ENVVAR",
        help_heading = "Command options"
    )]
    pub env_vars: Vec<String>,

    /// Command to run as child, followed by its arguments.
    #[arg(
        value_name = "CMD",
        required = true,
        num_args = 1..,
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub command: Vec<String>,
}

impl CliArgs {
    /// All redirect expressions in the order they apply: explicit `-f`
    /// expressions first, then the `-O`/`-E` shortcuts.
    pub fn redirect_exprs(&self) -> Vec<String> {
        let mut exprs = self.handles.clone();
        if let Some(ref path) = self.stdout {
            exprs.push(format!(">>{path}"));
        }
        if let Some(ref path) = self.stderr {
            exprs.push(format!("2>>{path}"));
        }
        exprs
    }
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
