use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// Rejected style entries.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleError {
    EmptyKey,
    NullValue { key: String },
}

impl fmt::Display for StyleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyKey => write!(f, "style keys must be non-empty"),
            Self::NullValue { key } => write!(f, "style option `{key}` is null"),
        }
    }
}

impl std::error::Error for StyleError {}

/// Renderer options attached to one collection (e.g. `color`).
///
/// The map is validated on insertion and passed through untouched; nothing in
/// the scene or browser layers reads individual keys.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Style(BTreeMap<String, Value>);

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insertion.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Result<Self, StyleError> {
        self.insert(key, value)?;
        Ok(self)
    }

    pub fn from_map(map: BTreeMap<String, Value>) -> Result<Self, StyleError> {
        let mut style = Self::new();
        for (k, v) in map {
            style.insert(k, v)?;
        }
        Ok(style)
    }

    fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Result<(), StyleError> {
        let key = key.into();
        if key.trim().is_empty() {
            return Err(StyleError::EmptyKey);
        }
        let value = value.into();
        if value.is_null() {
            return Err(StyleError::NullValue { key });
        }
        self.0.insert(key, value);
        Ok(())
    }

    #[inline]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}
