//! Query string multimap.
//!
//! The query is tokenized on `&`, each token being `key=value` or a bare `key`. Keys and values
//! are decoded as `application/x-www-form-urlencoded`, so `+` is a space.
use std::borrow::Cow;

use crate::ByteStr;

mod iter;

pub use iter::{GetAll, Iter};

/// Ordered query multimap.
///
/// Pairs keep their insertion order, a key may appear more than once.
///
/// # Examples
///
/// ```
/// use parse_uri::QueryMap;
///
/// let map = QueryMap::parse("foo=bar&baz=qux&foo=another");
/// assert_eq!(map.get("foo"), Some("bar"));
/// assert_eq!(map.get_last("foo"), Some("another"));
/// assert_eq!(map.get_all("foo").collect::<Vec<_>>(), ["bar", "another"]);
/// assert_eq!(map.to_string(), "foo=bar&baz=qux&foo=another");
/// ```
#[derive(Clone, Default, PartialEq, Eq)]
pub struct QueryMap {
    pairs: Vec<(ByteStr, ByteStr)>,
}

impl QueryMap {
    /// Create new empty [`QueryMap`].
    ///
    /// This function does not allocate.
    #[inline]
    pub const fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Create new empty [`QueryMap`] with at least the specified capacity.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self { pairs: Vec::with_capacity(capacity) }
    }

    /// Parse query by copying from slice.
    ///
    /// A leading `?` is ignored. Tokens with an empty key are discarded.
    #[inline]
    pub fn parse(query: &str) -> Self {
        Self::parse_from(&ByteStr::copy_from_str(query))
    }

    /// Parse query from a shared buffer.
    ///
    /// Keys and values that need no decoding share the buffer of `query`.
    pub fn parse_from(query: &ByteStr) -> Self {
        let rest = query.as_str();
        let rest = rest.strip_prefix('?').unwrap_or(rest);

        let pairs = form_urlencoded::parse(rest.as_bytes())
            .filter(|(key, _)| !key.is_empty())
            .map(|(key, value)| (shared(query, key), shared(query, value)))
            .collect();

        Self { pairs }
    }

    /// Returns the number of pairs.
    #[inline]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns `true` if there is no pair.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

// borrowed results point into the input of `form_urlencoded::parse`
fn shared(buffer: &ByteStr, value: Cow<'_, str>) -> ByteStr {
    match value {
        Cow::Borrowed(ok) => buffer.slice_ref(ok),
        Cow::Owned(ok) => ByteStr::from(ok),
    }
}

// ===== Lookup =====

impl QueryMap {
    /// Returns `true` if the map contains a value for given key.
    #[inline]
    pub fn contains_key(&self, key: &str) -> bool {
        self.pairs.iter().any(|(k, _)| k == key)
    }

    /// Returns the first inserted value for given key.
    #[inline]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }

    /// Returns the last inserted value for given key.
    #[inline]
    pub fn get_last(&self, key: &str) -> Option<&str> {
        self.pairs.iter().rev().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }

    /// Returns an iterator over all values for given key, in insertion order.
    #[inline]
    pub fn get_all<'a>(&'a self, key: &'a str) -> GetAll<'a> {
        GetAll::new(key, self.pairs.iter())
    }

    /// Returns an iterator over key and value pairs, in insertion order.
    #[inline]
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self.pairs.iter())
    }

    /// Returns an iterator over keys, in insertion order.
    ///
    /// Repeated keys are yielded for every pair.
    #[inline]
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.iter().map(|(k, _)| k)
    }

    /// Returns an iterator over values, in insertion order.
    #[inline]
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.iter().map(|(_, v)| v)
    }
}

// ===== Mutation =====

impl QueryMap {
    /// Append a pair at the end.
    #[inline]
    pub fn append<K: Into<ByteStr>, V: Into<ByteStr>>(&mut self, key: K, value: V) {
        self.pairs.push((key.into(), value.into()));
    }

    /// Set the value of the first pair with given key, and remove the rest of the pairs with
    /// that key.
    ///
    /// Append the pair if the key is not present.
    pub fn set<K: Into<ByteStr>, V: Into<ByteStr>>(&mut self, key: K, value: V) {
        let key = key.into();
        let value = value.into();

        match self.pairs.iter().position(|(k, _)| *k == key) {
            Some(first) => {
                self.pairs[first].1 = value;
                let mut index = 0;
                self.pairs.retain(|(k, _)| {
                    let keep = index <= first || *k != key;
                    index += 1;
                    keep
                });
            }
            None => self.pairs.push((key, value)),
        }
    }

    /// Remove all pairs with given key.
    ///
    /// Returns the first removed value.
    pub fn remove(&mut self, key: &str) -> Option<ByteStr> {
        let first = self.pairs.iter().position(|(k, _)| k == key)?;
        let (_, value) = self.pairs.remove(first);
        self.pairs.retain(|(k, _)| k != key);
        Some(value)
    }

    /// Sort pairs by key.
    ///
    /// The sort is stable, values of the same key keep their relative order.
    #[inline]
    pub fn sort(&mut self) {
        self.pairs.sort_by(|(a, _), (b, _)| a.as_str().cmp(b.as_str()));
    }

    /// Remove all pairs.
    #[inline]
    pub fn clear(&mut self) {
        self.pairs.clear();
    }
}

// ===== Traits =====

impl std::str::FromStr for QueryMap {
    type Err = std::convert::Infallible;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl<K: Into<ByteStr>, V: Into<ByteStr>> FromIterator<(K, V)> for QueryMap {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<K: Into<ByteStr>, V: Into<ByteStr>> Extend<(K, V)> for QueryMap {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        self.pairs.extend(iter.into_iter().map(|(k, v)| (k.into(), v.into())));
    }
}

// ===== Formatting =====

/// Serialize as `application/x-www-form-urlencoded`, pairs joined with `&`.
impl std::fmt::Display for QueryMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, (key, value)) in self.iter().enumerate() {
            if i != 0 {
                f.write_str("&")?;
            }
            for chunk in form_urlencoded::byte_serialize(key.as_bytes()) {
                f.write_str(chunk)?;
            }
            f.write_str("=")?;
            for chunk in form_urlencoded::byte_serialize(value.as_bytes()) {
                f.write_str(chunk)?;
            }
        }
        Ok(())
    }
}

impl std::fmt::Debug for QueryMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
