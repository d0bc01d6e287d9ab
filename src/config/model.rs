// src/config/model.rs

use serde::Deserialize;

use crate::types::LeaveMode;

/// Top-level configuration as read from a TOML file.
///
/// Every section and key is optional; anything left out falls back to the
/// command line or the built-in defaults:
///
/// ```toml
/// [timer]
/// delay = 0.5
/// interval = 0.25
///
/// [display]
/// message = "building"
/// leave = "on-failure"
///
/// [format]
/// timer = "{min}m{sec:02d}s"
///
/// [status]
/// success = "{F.fg.G}ok{F.X}"
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawConfigFile {
    #[serde(default)]
    pub timer: TimerSection,

    #[serde(default)]
    pub display: DisplaySection,

    #[serde(default)]
    pub format: FormatSection,

    #[serde(default)]
    pub status: StatusSection,
}

/// `[timer]` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TimerSection {
    /// Seconds to wait after launch before the standard format is shown.
    pub delay: Option<f64>,

    /// Seconds between redraws.
    pub interval: Option<f64>,
}

/// `[display]` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DisplaySection {
    pub message: Option<String>,
    pub indent: Option<usize>,
    pub leave: Option<LeaveMode>,
    pub plain: Option<bool>,
    pub hide_cursor: Option<bool>,
    pub shell: Option<String>,
}

/// `[format]` section. Keys mirror the `--format-*` flags.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FormatSection {
    pub standard: Option<String>,
    pub initial: Option<String>,
    pub message: Option<String>,
    #[serde(rename = "final")]
    pub final_: Option<String>,
    pub timer: Option<String>,
    pub zero_timer: Option<String>,
}

/// `[status]` section. Keys mirror the `--status-*` flags.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StatusSection {
    pub running: Option<String>,
    pub success: Option<String>,
    pub failure: Option<String>,
}

/// Validated configuration file.
///
/// Only obtainable through `TryFrom<RawConfigFile>` (see `validate.rs`), so
/// holding one means the timing values are sane.
#[derive(Debug, Clone, Default)]
pub struct ConfigFile {
    pub timer: TimerSection,
    pub display: DisplaySection,
    pub format: FormatSection,
    pub status: StatusSection,
}

impl ConfigFile {
    pub(crate) fn new_unchecked(raw: RawConfigFile) -> Self {
        Self {
            timer: raw.timer,
            display: raw.display,
            format: raw.format,
            status: raw.status,
        }
    }
}
