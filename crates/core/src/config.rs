//! Search configuration: the fuzziness threshold and the indexed fields.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};
use crate::value_object::ValueObject;

/// Environment variable overriding the fuzziness threshold.
pub const THRESHOLD_ENV: &str = "PARTSCOPE_THRESHOLD";

/// Environment variable overriding the indexed fields (comma separated).
pub const KEYS_ENV: &str = "PARTSCOPE_SEARCH_KEYS";

/// Maximum dissimilarity at which a candidate still counts as a match.
///
/// `0.0` demands an exact (case-insensitive) substring; `1.0` accepts nearly
/// anything.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Threshold(f64);

impl Threshold {
    /// Moderately tolerant: a few character-level typos pass, unrelated strings do not.
    pub const DEFAULT: Threshold = Threshold(0.4);

    pub fn new(value: f64) -> ConfigResult<Self> {
        if value.is_finite() && (0.0..=1.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ConfigError::ThresholdOutOfRange(value))
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// Whether a dissimilarity score is within the threshold.
    pub fn accepts(self, score: f64) -> bool {
        score <= self.0
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl ValueObject for Threshold {}

impl TryFrom<f64> for Threshold {
    type Error = ConfigError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Threshold> for f64 {
    fn from(value: Threshold) -> Self {
        value.0
    }
}

impl FromStr for Threshold {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: f64 = s
            .trim()
            .parse()
            .map_err(|e: core::num::ParseFloatError| ConfigError::invalid("threshold", e.to_string()))?;
        Self::new(value)
    }
}

impl fmt::Display for Threshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// A searchable product field.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SearchKey {
    PartNumber,
    Type,
    #[serde(rename = "OEM")]
    Oem,
    CompatibleWith,
}

impl SearchKey {
    /// The four identifying fields, in index order.
    pub const ALL: [SearchKey; 4] = [
        SearchKey::PartNumber,
        SearchKey::Type,
        SearchKey::Oem,
        SearchKey::CompatibleWith,
    ];

    /// Field name as it appears in catalog records.
    pub fn as_str(self) -> &'static str {
        match self {
            SearchKey::PartNumber => "partNumber",
            SearchKey::Type => "type",
            SearchKey::Oem => "OEM",
            SearchKey::CompatibleWith => "compatibleWith",
        }
    }
}

impl fmt::Display for SearchKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchKey {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        SearchKey::ALL
            .into_iter()
            .find(|k| k.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ConfigError::unknown_key(wanted))
    }
}

/// Settings for building and querying the fuzzy index.
///
/// The key list is never empty; every constructor (including deserialization)
/// goes through [`SearchConfig::with_keys`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SearchConfigRepr")]
pub struct SearchConfig {
    pub threshold: Threshold,
    keys: Vec<SearchKey>,
}

/// Unvalidated wire form of [`SearchConfig`].
#[derive(Deserialize)]
struct SearchConfigRepr {
    #[serde(default)]
    threshold: Threshold,
    #[serde(default = "default_keys")]
    keys: Vec<SearchKey>,
}

fn default_keys() -> Vec<SearchKey> {
    SearchKey::ALL.to_vec()
}

impl TryFrom<SearchConfigRepr> for SearchConfig {
    type Error = ConfigError;

    fn try_from(repr: SearchConfigRepr) -> Result<Self, Self::Error> {
        SearchConfig::default()
            .with_threshold(repr.threshold)
            .with_keys(repr.keys)
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            threshold: Threshold::DEFAULT,
            keys: default_keys(),
        }
    }
}

impl ValueObject for SearchConfig {}

impl SearchConfig {
    /// Indexed fields, in index order (never empty).
    pub fn keys(&self) -> &[SearchKey] {
        &self.keys
    }

    pub fn with_threshold(mut self, threshold: Threshold) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_keys(mut self, keys: impl IntoIterator<Item = SearchKey>) -> ConfigResult<Self> {
        let mut deduped: Vec<SearchKey> = Vec::new();
        for key in keys {
            if !deduped.contains(&key) {
                deduped.push(key);
            }
        }
        if deduped.is_empty() {
            return Err(ConfigError::NoSearchKeys);
        }
        self.keys = deduped;
        Ok(self)
    }

    /// Read overrides from the process environment.
    ///
    /// Unset variables keep their defaults; set-but-invalid variables are errors.
    pub fn from_env() -> ConfigResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`SearchConfig::from_env`], reading variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(THRESHOLD_ENV) {
            config.threshold = raw.parse()?;
            tracing::debug!(threshold = %config.threshold, "threshold overridden from environment");
        }

        if let Some(raw) = lookup(KEYS_ENV) {
            let keys = raw
                .split(',')
                .filter(|part| !part.trim().is_empty())
                .map(SearchKey::from_str)
                .collect::<ConfigResult<Vec<_>>>()?;
            config = config.with_keys(keys)?;
        }

        Ok(config)
    }
}
