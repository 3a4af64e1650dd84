//! Parameter bags supplied to dynamic path segments.
//!
//! A [`Params`] bag is a flat mapping from parameter name to [`ParamValue`].
//! Every dynamic segment along a key path receives the whole bag and reads
//! only the names it declared.

use std::collections::BTreeMap;
use std::fmt;

use crate::error::{Error, Result};

/// A single parameter value.
///
/// Values render through [`fmt::Display`] when substituted into a path.
///
/// # Examples
///
/// ```
/// use treepath::ParamValue;
///
/// assert_eq!(ParamValue::from(7).to_string(), "7");
/// assert_eq!(ParamValue::from("hd").to_string(), "hd");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    /// Free-form text.
    Text(String),
    /// A signed integer.
    Integer(i64),
    /// A floating point number.
    Float(f64),
    /// A boolean.
    Bool(bool),
}

impl ParamValue {
    /// Returns the value as an integer, if it is one.
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the value as text, if it is text.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(v) => Some(v),
            _ => None,
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(v) => f.write_str(v),
            Self::Integer(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Bool(v) => write!(f, "{v}"),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

macro_rules! impl_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for ParamValue {
                fn from(value: $ty) -> Self {
                    Self::Integer(i64::from(value))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

/// A bag of named parameters.
///
/// # Examples
///
/// ```
/// use treepath::Params;
///
/// let params = Params::new().with("videoId", 1).with("quality", "hd");
/// assert_eq!(params.len(), 2);
/// assert_eq!(params.get("quality").unwrap().to_string(), "hd");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params {
    values: BTreeMap<String, ParamValue>,
}

impl Params {
    /// Creates an empty bag.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a parameter, consuming and returning the bag.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Inserts a parameter, returning the previous value under that name.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        value: impl Into<ParamValue>,
    ) -> Option<ParamValue> {
        self.values.insert(name.into(), value.into())
    }

    /// Looks up a parameter.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.values.get(name)
    }

    /// Looks up a parameter that must be present.
    ///
    /// Dynamic path functions use this so an absent name surfaces as
    /// [`Error::MissingDependency`] instead of a default.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingDependency`] if `name` is absent. The key path
    /// is left empty; the resolver fills it in.
    pub fn require(&self, name: &str) -> Result<&ParamValue> {
        self.get(name).ok_or_else(|| Error::MissingDependency {
            keypath: String::new(),
            name: name.to_string(),
        })
    }

    /// Whether a parameter is present.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Merges another bag into this one. Later values win.
    pub fn merge(&mut self, other: &Self) {
        for (name, value) in &other.values {
            self.values.insert(name.clone(), value.clone());
        }
    }

    /// Number of parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the bag is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over parameters in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Parses a `name=value` assignment.
    ///
    /// Values are kept as text; they render identically either way.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if there is no `=` or the name is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use treepath::Params;
    ///
    /// let (name, value) = Params::parse_assignment("videoId=42").unwrap();
    /// assert_eq!(name, "videoId");
    /// assert_eq!(value.to_string(), "42");
    /// assert!(Params::parse_assignment("videoId").is_err());
    /// ```
    pub fn parse_assignment(assignment: &str) -> Result<(String, ParamValue)> {
        let (name, value) = assignment.split_once('=').ok_or_else(|| Error::Validation {
            field: "param".into(),
            message: format!("expected NAME=VALUE, got {assignment:?}"),
        })?;

        let name = name.trim();
        if name.is_empty() {
            return Err(Error::Validation {
                field: "param".into(),
                message: format!("parameter name is empty in {assignment:?}"),
            });
        }

        Ok((name.to_string(), ParamValue::from(value)))
    }
}

impl<K, V> FromIterator<(K, V)> for Params
where
    K: Into<String>,
    V: Into<ParamValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        params.extend(iter);
        params
    }
}

impl<K, V> Extend<(K, V)> for Params
where
    K: Into<String>,
    V: Into<ParamValue>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (name, value) in iter {
            self.insert(name, value);
        }
    }
}
