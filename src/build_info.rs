//! Version and build metadata exposed on the module.

/// Build metadata attached to the module as string attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildInfo {
    pub version: String,
    pub commit: String,
    pub commit_datetime: String,
    pub build_datetime: String,
    pub device_version: String,
    pub bootloader_version: String,
    pub device_rvc3_version: String,
}

const UNKNOWN: &str = "unknown";

impl Default for BuildInfo {
    fn default() -> Self {
        Self::from_build_env()
    }
}

impl BuildInfo {
    /// Metadata recorded by the build environment.
    ///
    /// Reads `DEPTHAI_PYTHON_VERSION`, `DEPTHAI_PYTHON_COMMIT_HASH`,
    /// `DEPTHAI_PYTHON_COMMIT_DATETIME`, `DEPTHAI_PYTHON_BUILD_DATETIME`,
    /// `DEPTHAI_DEVICE_VERSION`, `DEPTHAI_BOOTLOADER_VERSION` and
    /// `DEPTHAI_DEVICE_RVC3_VERSION` at compile time. The version falls back
    /// to the crate version, everything else to `"unknown"`.
    pub fn from_build_env() -> Self {
        Self {
            version: option_env!("DEPTHAI_PYTHON_VERSION")
                .unwrap_or(env!("CARGO_PKG_VERSION"))
                .to_string(),
            commit: option_env!("DEPTHAI_PYTHON_COMMIT_HASH")
                .unwrap_or(UNKNOWN)
                .to_string(),
            commit_datetime: option_env!("DEPTHAI_PYTHON_COMMIT_DATETIME")
                .unwrap_or(UNKNOWN)
                .to_string(),
            build_datetime: option_env!("DEPTHAI_PYTHON_BUILD_DATETIME")
                .unwrap_or(UNKNOWN)
                .to_string(),
            device_version: option_env!("DEPTHAI_DEVICE_VERSION")
                .unwrap_or(UNKNOWN)
                .to_string(),
            bootloader_version: option_env!("DEPTHAI_BOOTLOADER_VERSION")
                .unwrap_or(UNKNOWN)
                .to_string(),
            device_rvc3_version: option_env!("DEPTHAI_DEVICE_RVC3_VERSION")
                .unwrap_or(UNKNOWN)
                .to_string(),
        }
    }

    /// Version string of the form `core.revision[+hash]`.
    ///
    /// ```
    /// use depthai::BuildInfo;
    ///
    /// assert_eq!(BuildInfo::bindings_version("2.24.0", "0", None), "2.24.0.0");
    /// assert_eq!(
    ///     BuildInfo::bindings_version("2.24.0", "1", Some("ab12cd")),
    ///     "2.24.0.1+ab12cd"
    /// );
    /// ```
    pub fn bindings_version(core: &str, revision: &str, hash: Option<&str>) -> String {
        match hash.filter(|h| !h.is_empty()) {
            Some(hash) => format!("{core}.{revision}+{hash}"),
            None => format!("{core}.{revision}"),
        }
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    pub fn with_commit(mut self, commit: impl Into<String>, datetime: impl Into<String>) -> Self {
        self.commit = commit.into();
        self.commit_datetime = datetime.into();
        self
    }

    pub fn with_build_datetime(mut self, datetime: impl Into<String>) -> Self {
        self.build_datetime = datetime.into();
        self
    }

    /// Identification string passed to the native library.
    pub fn banner(&self) -> String {
        format!(
            "Python bindings - version: {} from {} build: {}",
            self.version, self.commit_datetime, self.build_datetime
        )
    }

    /// Module attributes in the order they are attached.
    pub fn attributes(&self) -> [(&'static str, &str); 7] {
        [
            ("__version__", &self.version),
            ("__commit__", &self.commit),
            ("__commit_datetime__", &self.commit_datetime),
            ("__build_datetime__", &self.build_datetime),
            ("__device_version__", &self.device_version),
            ("__bootloader_version__", &self.bootloader_version),
            ("__device_rvc3_version__", &self.device_rvc3_version),
        ]
    }
}
