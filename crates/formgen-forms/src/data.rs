//! Submitted form data.
//!
//! [`FormData`] holds the decoded key/value pairs of an
//! `application/x-www-form-urlencoded` body. A key may repeat; [`get`] returns
//! the last value, as a browser's last-wins control semantics would.
//!
//! [`get`]: FormData::get

use std::collections::HashMap;

/// Decoded form data with multiple values per key.
///
/// # Examples
///
/// ```
/// use formgen_forms::data::FormData;
///
/// let data = FormData::parse("name=Ada+Lovelace&tag=a&tag=b");
/// assert_eq!(data.get("name"), Some("Ada Lovelace"));
/// assert_eq!(data.get("tag"), Some("b"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct FormData {
    inner: HashMap<String, Vec<String>>,
}

impl FormData {
    /// Creates an empty `FormData`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses an urlencoded body, decoding `+` and percent escapes.
    pub fn parse(body: &str) -> Self {
        let mut data = Self::new();
        for (key, value) in url::form_urlencoded::parse(body.as_bytes()) {
            data.append(key.into_owned(), value.into_owned());
        }
        data
    }

    /// Appends a value for the given key.
    pub fn append(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.inner.entry(key.into()).or_default().push(value.into());
    }

    /// Returns the last value for the given key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.inner
            .get(key)
            .and_then(|values| values.last())
            .map(String::as_str)
    }

    /// Returns the number of distinct keys.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if nothing was submitted.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for FormData
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut data = Self::new();
        for (key, value) in iter {
            data.append(key, value);
        }
        data
    }
}
