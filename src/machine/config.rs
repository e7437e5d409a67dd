use super::paytable::PayTable;
use crate::CONFIG_PATH_DEFAULT;
use crate::CONFIG_PATH_VAR;
use crate::Chips;
use crate::DEFAULT_MINIMUM_PLAY;
use crate::DEFAULT_REELS;
use crate::MAXIMUM_REELS;
use crate::SlotError;
use crate::Weights;
use serde::Deserialize;
use serde::Serialize;
use std::ffi::OsString;
use std::path::Path;
use std::path::PathBuf;
use std::str::FromStr;

/// Everything that distinguishes one machine from another.
///
/// Any field missing from a configuration document keeps its default; a
/// field that is present replaces the default wholesale. Fields the machine
/// does not know are ignored with a warning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Configuration {
    pub reels: usize,
    pub minimum_play: Chips,
    pub weights: Weights,
    pub pay_table: PayTable,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            reels: DEFAULT_REELS,
            minimum_play: DEFAULT_MINIMUM_PLAY,
            weights: Weights::default(),
            pay_table: PayTable::default(),
        }
    }
}

impl Configuration {
    const FIELDS: [&str; 4] = ["reels", "minimum_play", "weights", "pay_table"];

    /// checks what the component types cannot enforce on their own
    pub fn validate(&self) -> Result<(), SlotError> {
        match self.reels {
            0 => Err(SlotError::ConfigurationInvalid(
                "reels must be at least 1".into(),
            )),
            n if n > MAXIMUM_REELS => Err(SlotError::ConfigurationInvalid(format!(
                "reels must be at most {}, not {}",
                MAXIMUM_REELS, n
            ))),
            _ => Ok(()),
        }
    }

    /// read a configuration file, falling back to defaults
    /// when there is no file at all
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SlotError> {
        let path = path.as_ref();
        if !path.exists() {
            log::info!("no configuration at {:?}, using defaults", path);
            return Ok(Self::default());
        }
        std::fs::read_to_string(path)
            .map_err(|e| SlotError::ConfigurationInvalid(format!("{}: {}", path.display(), e)))?
            .parse::<Self>()
            .inspect(|_| log::info!("loaded configuration from {}", path.display()))
    }

    /// load from wherever the environment points
    pub fn locate() -> Result<Self, SlotError> {
        Self::load(Self::path(std::env::var_os(CONFIG_PATH_VAR)))
    }

    /// configuration file path given the value of the environment variable
    pub fn path(var: Option<OsString>) -> PathBuf {
        var.map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(CONFIG_PATH_DEFAULT))
    }
}

impl FromStr for Configuration {
    type Err = SlotError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let document = serde_json::from_str::<serde_json::Value>(s)
            .map_err(|e| SlotError::ConfigurationInvalid(e.to_string()))?;
        document
            .as_object()
            .ok_or_else(|| SlotError::ConfigurationInvalid("expected a JSON object".into()))?
            .keys()
            .filter(|key| !Self::FIELDS.contains(&key.as_str()))
            .for_each(|key| log::warn!("ignoring unknown configuration field {:?}", key));
        let config = serde_json::from_value::<Self>(document)
            .map_err(|e| SlotError::ConfigurationInvalid(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}

impl TryFrom<&str> for Configuration {
    type Error = SlotError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl std::fmt::Display for Configuration {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "reels        {}", self.reels)?;
        writeln!(f, "minimum play {}", self.minimum_play)?;
        write!(f, "weights     ")?;
        for (symbol, weight) in self.weights.iter() {
            write!(f, " {}:{}", symbol, weight)?;
        }
        writeln!(f)?;
        write!(f, "{}", self.pay_table)
    }
}
