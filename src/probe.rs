//! Best-effort lookup of boolean switches in external namespaces.
//!
//! A probe answers `Some(value)` only when the namespace exists, defines the
//! key, and the value reads as a boolean. Everything else is `None`.

use rustc_hash::FxHashMap;

/// Read a boolean switch from a named namespace.
pub trait NamespaceProbe {
    fn try_read(&self, namespace: &str, key: &str) -> Option<bool>;
}

impl<P: NamespaceProbe + ?Sized> NamespaceProbe for &P {
    fn try_read(&self, namespace: &str, key: &str) -> Option<bool> {
        (**self).try_read(namespace, key)
    }
}

/// A value stored in [`StaticNamespaces`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeValue {
    Bool(bool),
    Int(i64),
    Str(String),
    None,
}

impl ProbeValue {
    /// Booleans read as themselves and integers as `!= 0`; anything else is
    /// a type mismatch.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ProbeValue::Bool(b) => Some(*b),
            ProbeValue::Int(i) => Some(*i != 0),
            ProbeValue::Str(_) | ProbeValue::None => None,
        }
    }
}

impl From<bool> for ProbeValue {
    fn from(value: bool) -> Self {
        ProbeValue::Bool(value)
    }
}

impl From<i64> for ProbeValue {
    fn from(value: i64) -> Self {
        ProbeValue::Int(value)
    }
}

impl From<&str> for ProbeValue {
    fn from(value: &str) -> Self {
        ProbeValue::Str(value.to_string())
    }
}

/// In-memory namespaces.
#[derive(Debug, Clone, Default)]
pub struct StaticNamespaces {
    namespaces: FxHashMap<String, FxHashMap<String, ProbeValue>>,
}

impl StaticNamespaces {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty namespace.
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespaces.entry(namespace.into()).or_default();
        self
    }

    /// Define `key` in `namespace`, creating the namespace if needed.
    pub fn with_value(
        mut self,
        namespace: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<ProbeValue>,
    ) -> Self {
        self.set(namespace, key, value);
        self
    }

    pub fn set(
        &mut self,
        namespace: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<ProbeValue>,
    ) {
        self.namespaces
            .entry(namespace.into())
            .or_default()
            .insert(key.into(), value.into());
    }
}

impl NamespaceProbe for StaticNamespaces {
    fn try_read(&self, namespace: &str, key: &str) -> Option<bool> {
        self.namespaces.get(namespace)?.get(key)?.as_bool()
    }
}

/// Reads switches from environment variables.
///
/// Only the namespace [`EnvironmentProbe::NAMESPACE`] exists. Accepted
/// values are `1/0`, `true/false`, `on/off` and `yes/no`, in any case.
#[derive(Debug, Clone, Default)]
pub struct EnvironmentProbe {
    source: EnvSource,
}

#[derive(Debug, Clone, Default)]
enum EnvSource {
    #[default]
    Process,
    Fixed(FxHashMap<String, String>),
}

impl EnvironmentProbe {
    pub const NAMESPACE: &'static str = "env";

    /// Read the live process environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read from a fixed set of variables instead of the process environment.
    pub fn from_vars<K, V>(vars: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let vars = vars
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();
        Self {
            source: EnvSource::Fixed(vars),
        }
    }

    fn var(&self, key: &str) -> Option<String> {
        match &self.source {
            EnvSource::Process => std::env::var(key).ok(),
            EnvSource::Fixed(vars) => vars.get(key).cloned(),
        }
    }
}

impl NamespaceProbe for EnvironmentProbe {
    fn try_read(&self, namespace: &str, key: &str) -> Option<bool> {
        if namespace != Self::NAMESPACE {
            return None;
        }
        parse_switch(&self.var(key)?)
    }
}

fn parse_switch(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}
