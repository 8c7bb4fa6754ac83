pub mod command;
pub mod initializer;

pub use initializer::SshPluginInitializer;

use crate::error::{PluginError, Result};
use serde_yaml::{Mapping, Value};

const JOBSSH_KEY: &str = "jobssh";
const USERSSH_KEY: &str = "userssh";

/// SSH parameters of the runtime plugin.
///
/// Each field is `Some` only when the key was present in the job's plugin
/// parameters; values are kept in their string form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SshParameters {
    pub jobssh: Option<String>,
    pub userssh: Option<UserSsh>,
}

/// User supplied SSH credential (`userssh` block).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UserSsh {
    /// `type` key
    pub kind: Option<String>,
    pub value: Option<String>,
}

impl UserSsh {
    /// Both `type` and `value`, or nothing.
    pub fn credential(&self) -> Option<(&str, &str)> {
        match (&self.kind, &self.value) {
            (Some(kind), Some(value)) => Some((kind.as_str(), value.as_str())),
            _ => None,
        }
    }
}

impl SshParameters {
    /// Build typed parameters from the raw `parameters` node of a plugin config.
    pub fn from_yaml(parameters: &Value) -> Result<Self> {
        let map = parameters
            .as_mapping()
            .ok_or_else(|| PluginError::invalid_parameter("parameters", "expected a mapping"))?;

        let jobssh = map.get(JOBSSH_KEY).map(flag_string);
        let userssh = match map.get(USERSSH_KEY) {
            Some(Value::Mapping(block)) => Some(UserSsh::from_mapping(block)),
            Some(other) => {
                return Err(PluginError::invalid_parameter(
                    USERSSH_KEY,
                    format!("expected a mapping, got {}", value_string(other)),
                ))
            }
            None => None,
        };

        Ok(Self { jobssh, userssh })
    }
}

impl UserSsh {
    fn from_mapping(block: &Mapping) -> Self {
        Self {
            kind: block.get("type").map(value_string),
            value: block.get("value").map(value_string),
        }
    }
}

/// YAML 1.1 boolean words the job submitters still write (`jobssh: yes`).
const TRUE_WORDS: &[&str] = &["yes", "Yes", "YES", "on", "On", "ON"];
const FALSE_WORDS: &[&str] = &["no", "No", "NO", "off", "Off", "OFF"];

/// String form of the `jobssh` flag; YAML 1.1 boolean words count as booleans.
fn flag_string(value: &Value) -> String {
    match value {
        Value::String(s) if TRUE_WORDS.contains(&s.as_str()) => "True".to_string(),
        Value::String(s) if FALSE_WORDS.contains(&s.as_str()) => "False".to_string(),
        other => value_string(other),
    }
}

/// String form of an arbitrary YAML value.
///
/// Strings render bare. Everything else renders the way the job runtime has
/// always printed parameters: `None`, `True`/`False`, `[1, 'a']`, `{'k': 1}`.
pub fn value_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Tagged(tagged) => value_string(&tagged.value),
        other => repr(other),
    }
}

fn repr(value: &Value) -> String {
    match value {
        Value::Null => "None".to_string(),
        Value::Bool(true) => "True".to_string(),
        Value::Bool(false) => "False".to_string(),
        Value::Number(n) => number_repr(n),
        Value::String(s) => quote(s),
        Value::Tagged(tagged) => repr(&tagged.value),
        Value::Sequence(items) => {
            let items: Vec<String> = items.iter().map(repr).collect();
            format!("[{}]", items.join(", "))
        }
        Value::Mapping(map) => {
            let entries: Vec<String> = map
                .iter()
                .map(|(k, v)| format!("{}: {}", repr(k), repr(v)))
                .collect();
            format!("{{{}}}", entries.join(", "))
        }
    }
}

fn number_repr(n: &serde_yaml::Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f.is_nan() => "nan".to_string(),
        Some(f) if n.is_f64() && f.is_infinite() => {
            let sign = if f > 0.0 { "" } else { "-" };
            format!("{sign}inf")
        }
        _ => n.to_string(),
    }
}

/// Single quotes unless the text holds a single quote and no double quote.
fn quote(s: &str) -> String {
    let delim = if s.contains('\'') && !s.contains('"') { '"' } else { '\'' };
    let mut out = String::with_capacity(s.len() + 2);
    out.push(delim);
    for ch in s.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            c if c == delim => {
                out.push('\\');
                out.push(c);
            }
            c => out.push(c),
        }
    }
    out.push(delim);
    out
}
