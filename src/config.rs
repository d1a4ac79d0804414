//! Configuration for module construction.

/// Attribute name probed for the signal-handler switch.
pub const SIGNAL_HANDLER_KEY: &str = "DEPTHAI_INSTALL_SIGNAL_HANDLER";

/// Namespaces probed for [`SIGNAL_HANDLER_KEY`], in probe order.
pub const DEFAULT_PROBE_NAMESPACES: [&str; 2] = ["sys", "builtins"];

/// Settings that shape module construction.
///
/// # Example
///
/// ```
/// use depthai::BindingsConfig;
///
/// let config = BindingsConfig::default()
///     .with_probe_namespaces(["env"])
///     .with_install_signal_handler(false);
/// assert_eq!(config.module_name, "depthai");
/// assert!(!config.install_signal_handler);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindingsConfig {
    /// Name of the constructed module.
    pub module_name: String,
    /// Namespaces probed for the signal-handler switch.
    pub probe_namespaces: Vec<String>,
    /// Attribute name of the signal-handler switch.
    pub signal_handler_key: String,
    /// Value of the switch before any namespace is probed. Probed values
    /// can only turn it off.
    pub install_signal_handler: bool,
}

impl Default for BindingsConfig {
    fn default() -> Self {
        Self {
            module_name: "depthai".to_string(),
            probe_namespaces: DEFAULT_PROBE_NAMESPACES.map(String::from).to_vec(),
            signal_handler_key: SIGNAL_HANDLER_KEY.to_string(),
            install_signal_handler: true,
        }
    }
}

impl BindingsConfig {
    pub fn with_module_name(mut self, name: impl Into<String>) -> Self {
        self.module_name = name.into();
        self
    }

    pub fn with_probe_namespaces<I, S>(mut self, namespaces: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.probe_namespaces = namespaces.into_iter().map(Into::into).collect();
        self
    }

    /// Read `namespace` after the ones already configured.
    pub fn with_extra_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.probe_namespaces.push(namespace.into());
        self
    }

    pub fn with_signal_handler_key(mut self, key: impl Into<String>) -> Self {
        self.signal_handler_key = key.into();
        self
    }

    pub fn with_install_signal_handler(mut self, install: bool) -> Self {
        self.install_signal_handler = install;
        self
    }
}
