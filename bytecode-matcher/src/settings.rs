use semver::Version;
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr};
use std::path::PathBuf;

/// Environment variable with the path to an optional configuration file.
pub const CONFIG_PATH_ENV: &str = "BYTECODE_MATCHER_CONFIG";
/// Prefix of environment variables overriding configuration values.
pub const ENV_PREFIX: &str = "BYTECODE_MATCHER";

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub vyper_auxdata: VyperAuxdataSettings,
}

/// Vyper compiler versions at which the auxdata layout changed.
#[serde_as]
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct VyperAuxdataSettings {
    /// Starting from this version auxdata ends with its 2-byte length.
    #[serde_as(as = "DisplayFromStr")]
    pub length_suffix_since: Version,
    /// Starting from this version the length suffix counts itself.
    #[serde_as(as = "DisplayFromStr")]
    pub self_inclusive_length_since: Version,
}

impl Default for VyperAuxdataSettings {
    fn default() -> Self {
        Self {
            length_suffix_since: Version::new(0, 3, 5),
            self_inclusive_length_since: Version::new(0, 3, 10),
        }
    }
}

impl Settings {
    pub fn new() -> anyhow::Result<Self> {
        let config_path = std::env::var(CONFIG_PATH_ENV).ok().map(PathBuf::from);
        Self::build(config_path)
    }

    pub fn build(config_path: Option<PathBuf>) -> anyhow::Result<Self> {
        let mut builder = config::Config::builder();
        if let Some(path) = config_path {
            builder = builder.add_source(config::File::from(path));
        };
        // Environment variables override the file values
        builder = builder.add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"));

        let settings: Settings = builder.build()?.try_deserialize()?;
        settings.validate()?;

        Ok(settings)
    }

    fn validate(&self) -> anyhow::Result<()> {
        let vyper_auxdata = &self.vyper_auxdata;
        if vyper_auxdata.length_suffix_since > vyper_auxdata.self_inclusive_length_since {
            anyhow::bail!(
                "vyper auxdata length suffix version ({}) must not exceed self inclusive length version ({})",
                vyper_auxdata.length_suffix_since,
                vyper_auxdata.self_inclusive_length_since
            );
        }
        Ok(())
    }
}
