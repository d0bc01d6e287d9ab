// src/format/template.rs

//! Placeholder interpolation for line templates.
//!
//! Templates use `{name}` / `{name:spec}` placeholders with `{{` and `}}` as
//! literal braces. `spec` is a small subset of the familiar
//! `[[fill]align][0][width][type]` mini-language, enough for things like
//! `{min:02d}` or `{msg:<20}`. Names starting with `F.` are looked up in the
//! ANSI namespace (see [`super::ansi`]).

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::errors::{CmdTimerError, Result};
use crate::format::ansi;

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{|\}\}|\{([^{}]*)\}|[{}]").expect("placeholder regex is valid")
});

static SPEC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:(?P<fill>.)?(?P<align>[<>^]))?(?P<zero>0)?(?P<width>\d+)?(?P<ty>[ds])?$")
        .expect("format spec regex is valid")
});

/// A value that can be substituted into a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Int(i64),
    Str(String),
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

/// Named values visible to a template.
///
/// The `F` namespace is always visible.
#[derive(Debug, Clone, Default)]
pub struct Vars {
    values: BTreeMap<String, Value>,
}

impl Vars {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.values.insert(name.into(), value.into());
        self
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    fn lookup(&self, name: &str) -> Result<Value> {
        if let Some(path) = name.strip_prefix("F.") {
            return ansi::lookup(path)
                .map(Value::from)
                .ok_or_else(|| CmdTimerError::Template(format!("unknown ANSI attribute F.{path}")));
        }
        if name == "F" {
            return Err(CmdTimerError::Template(
                "F must be followed by an attribute, e.g. {F.B}".to_string(),
            ));
        }
        self.values
            .get(name)
            .cloned()
            .ok_or_else(|| CmdTimerError::Template(format!("unknown field {{{name}}}")))
    }
}

/// Substitute every placeholder in `template` from `vars`.
pub fn interpolate(template: &str, vars: &Vars) -> Result<String> {
    let mut out = String::with_capacity(template.len());
    let mut last = 0;

    for caps in PLACEHOLDER.captures_iter(template) {
        let Some(whole) = caps.get(0) else { continue };
        out.push_str(&template[last..whole.start()]);
        last = whole.end();

        match whole.as_str() {
            "{{" => out.push('{'),
            "}}" => out.push('}'),
            brace @ ("{" | "}") => {
                return Err(CmdTimerError::Template(format!(
                    "single '{brace}' in template {template:?}"
                )));
            }
            _ => {
                let field = caps.get(1).map_or("", |m| m.as_str());
                out.push_str(&render_field(field, vars)?);
            }
        }
    }

    out.push_str(&template[last..]);
    Ok(out)
}

fn render_field(field: &str, vars: &Vars) -> Result<String> {
    let (name, spec) = match field.split_once(':') {
        Some((name, spec)) => (name, Some(spec)),
        None => (field, None),
    };
    if name.is_empty() {
        return Err(CmdTimerError::Template(
            "empty field name in placeholder".to_string(),
        ));
    }

    let value = vars.lookup(name)?;
    match spec {
        Some(spec) => FormatSpec::parse(spec)?.apply(&value),
        None => Ok(match value {
            Value::Int(n) => n.to_string(),
            Value::Str(s) => s,
        }),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Align {
    Left,
    Right,
    Center,
}

#[derive(Debug, Clone, Default)]
struct FormatSpec {
    fill: Option<char>,
    align: Option<Align>,
    zero: bool,
    width: usize,
    ty: Option<char>,
}

impl FormatSpec {
    fn parse(spec: &str) -> Result<Self> {
        let caps = SPEC
            .captures(spec)
            .ok_or_else(|| CmdTimerError::Template(format!("invalid format spec {spec:?}")))?;

        let align = caps.name("align").map(|m| match m.as_str() {
            "<" => Align::Left,
            ">" => Align::Right,
            _ => Align::Center,
        });
        let width = match caps.name("width") {
            Some(m) => m
                .as_str()
                .parse()
                .map_err(|_| CmdTimerError::Template(format!("width too large in {spec:?}")))?,
            None => 0,
        };

        Ok(Self {
            fill: caps.name("fill").and_then(|m| m.as_str().chars().next()),
            align,
            zero: caps.name("zero").is_some(),
            width,
            ty: caps.name("ty").and_then(|m| m.as_str().chars().next()),
        })
    }

    fn apply(&self, value: &Value) -> Result<String> {
        let (text, numeric) = match (value, self.ty) {
            (Value::Int(n), None | Some('d')) => (n.to_string(), true),
            (Value::Str(s), None | Some('s')) => (s.clone(), false),
            (Value::Int(_), Some(ty)) => {
                return Err(CmdTimerError::Template(format!(
                    "format code '{ty}' is not valid for an integer"
                )));
            }
            (Value::Str(_), Some(ty)) => {
                return Err(CmdTimerError::Template(format!(
                    "format code '{ty}' is not valid for a string"
                )));
            }
        };

        let len = text.chars().count();
        if len >= self.width {
            return Ok(text);
        }
        let pad = self.width - len;

        // Zero padding on a number keeps the sign in front.
        if self.align.is_none() && self.zero && numeric {
            let (sign, digits) = match text.strip_prefix('-') {
                Some(rest) => ("-", rest),
                None => ("", text.as_str()),
            };
            return Ok(format!("{sign}{}{digits}", "0".repeat(pad)));
        }

        let fill = match (self.fill, self.zero) {
            (Some(c), _) => c,
            (None, true) => '0',
            (None, false) => ' ',
        };
        let align = self
            .align
            .unwrap_or(if numeric { Align::Right } else { Align::Left });
        let filler = |n: usize| fill.to_string().repeat(n);

        Ok(match align {
            Align::Left => format!("{text}{}", filler(pad)),
            Align::Right => format!("{}{text}", filler(pad)),
            Align::Center => {
                let left = pad / 2;
                format!("{}{text}{}", filler(left), filler(pad - left))
            }
        })
    }
}
