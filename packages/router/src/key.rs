//! Route keys and parameterized route patterns.

use std::{borrow::Borrow, collections::BTreeMap, fmt};

use folio_history::strip_hash;
use serde::{Deserialize, Serialize};
use tracing::error;

/// The identifier a handler is registered under, e.g. `"/"` or `"/about"`.
///
/// A leading `#` is dropped, so `"#/about"` and `"/about"` are the same key.
///
/// ```rust
/// # use folio_router::prelude::*;
/// assert_eq!(RouteKey::new("#/about"), RouteKey::new("/about"));
/// assert_eq!(RouteKey::new("#/about").as_str(), "/about");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct RouteKey(String);

impl RouteKey {
    /// Create a key from a fragment or path.
    pub fn new(key: impl AsRef<str>) -> Self {
        Self(strip_hash(key.as_ref()).to_string())
    }

    /// The key without any leading `#`.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this key names no location at all.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Convert the key into the fragment a [`Location`](folio_history::Location) expects.
    pub fn into_fragment(self) -> String {
        self.0
    }

    fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.trim_start_matches('/').split('/')
    }
}

impl fmt::Display for RouteKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RouteKey {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for RouteKey {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&RouteKey> for RouteKey {
    fn from(value: &RouteKey) -> Self {
        value.clone()
    }
}

impl From<RouteKey> for String {
    fn from(value: RouteKey) -> Self {
        value.0
    }
}

impl AsRef<str> for RouteKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for RouteKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Values captured from the `:name` segments of a pattern route.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Parameters(BTreeMap<String, String>);

impl Parameters {
    /// Get a captured value by name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Whether nothing was captured.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over `(name, value)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum PatternSegment {
    Fixed(String),
    Parameter(String),
}

/// A key with at least one `:name` segment, such as `"/obra/:artwork"`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct RoutePattern {
    segments: Vec<PatternSegment>,
}

impl RoutePattern {
    /// Parse `key` as a pattern. Returns [`None`] for plain keys.
    pub(crate) fn parse(key: &RouteKey) -> Option<Self> {
        let segments: Vec<_> = key
            .segments()
            .map(|segment| match segment.strip_prefix(':') {
                Some(name) => PatternSegment::Parameter(name.to_string()),
                None => PatternSegment::Fixed(segment.to_string()),
            })
            .collect();

        segments
            .iter()
            .any(|s| matches!(s, PatternSegment::Parameter(_)))
            .then_some(Self { segments })
    }

    /// Match `key` against the pattern, capturing parameters.
    ///
    /// Parameter segments only match non-empty path segments.
    pub(crate) fn matches(&self, key: &RouteKey) -> Option<Parameters> {
        let path: Vec<_> = key.segments().collect();
        if path.len() != self.segments.len() {
            return None;
        }

        let mut parameters = BTreeMap::new();
        for (segment, value) in self.segments.iter().zip(path) {
            match segment {
                PatternSegment::Fixed(fixed) if fixed == value => {}
                PatternSegment::Fixed(_) => return None,
                PatternSegment::Parameter(_) if value.is_empty() => return None,
                PatternSegment::Parameter(name) => {
                    let value = match urlencoding::decode(value) {
                        Ok(decoded) => decoded.into_owned(),
                        Err(err) => {
                            error!(r#"failed to decode parameter value "{value}": {err}"#);
                            value.to_string()
                        }
                    };
                    parameters.insert(name.clone(), value);
                }
            }
        }

        Some(Parameters(parameters))
    }
}
