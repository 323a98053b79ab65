//! Ordered query-string codec.
//!
//! Parses a URL query component into an ordered key/value mapping and
//! serializes it back, preserving key order so that unrelated parameters
//! survive a sort change untouched.

mod encode;
mod parse;

pub use encode::serialize_query;
pub use parse::parse_query;

/// Value(s) stored under one query key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryValue {
    Single(String),
    /// Repeated key (`tags=a&tags=b`), kept in occurrence order.
    Many(Vec<String>),
}

/// Ordered mapping of query keys to decoded values.
///
/// Keys keep their first-occurrence position; a repeated key is grouped into
/// [`QueryValue::Many`] at that position and serialized back as repeated
/// pairs. Parsing is total: garbage fragments degrade to an empty or partial
/// mapping, never an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, QueryValue)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a raw query component (without the leading `?`).
    pub fn parse(query: &str) -> Self {
        parse_query(query)
    }

    /// Serializes back to `key=value&key2=value2` form.
    pub fn serialize(&self) -> String {
        serialize_query(self)
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Number of distinct keys (a repeated key counts once).
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.pairs.iter().any(|(k, _)| k == key)
    }

    /// First value under `key`, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs.iter().find(|(k, _)| k == key).map(|(_, v)| match v {
            QueryValue::Single(s) => s.as_str(),
            QueryValue::Many(vs) => vs[0].as_str(),
        })
    }

    /// All values under `key`, in occurrence order.
    pub fn get_all(&self, key: &str) -> Vec<&str> {
        match self.pairs.iter().find(|(k, _)| k == key) {
            Some((_, QueryValue::Single(s))) => vec![s.as_str()],
            Some((_, QueryValue::Many(vs))) => vs.iter().map(String::as_str).collect(),
            None => Vec::new(),
        }
    }

    /// Appends one parsed pair, grouping under an existing key if present.
    pub fn append(&mut self, key: String, value: String) {
        match self.pairs.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => match existing {
                QueryValue::Single(first) => {
                    let first = std::mem::take(first);
                    *existing = QueryValue::Many(vec![first, value]);
                }
                QueryValue::Many(vs) => vs.push(value),
            },
            None => self.pairs.push((key, QueryValue::Single(value))),
        }
    }

    /// Sets `key` to a single value: replaced in place if present (collapsing
    /// any repeats), appended at the end if new.
    pub fn set(&mut self, key: &str, value: &str) {
        match self.pairs.iter_mut().find(|(k, _)| k == key) {
            Some((_, existing)) => *existing = QueryValue::Single(value.to_string()),
            None => self
                .pairs
                .push((key.to_string(), QueryValue::Single(value.to_string()))),
        }
    }

    /// Removes `key` entirely. Returns whether it was present.
    pub fn remove(&mut self, key: &str) -> bool {
        let before = self.pairs.len();
        self.pairs.retain(|(k, _)| k != key);
        self.pairs.len() != before
    }

    /// Iterates decoded `(key, value)` pairs with repeated keys flattened.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().flat_map(|(k, v)| {
            let values: Box<dyn Iterator<Item = &str> + '_> = match v {
                QueryValue::Single(s) => Box::new(std::iter::once(s.as_str())),
                QueryValue::Many(vs) => Box::new(vs.iter().map(String::as_str)),
            };
            values.map(move |value| (k.as_str(), value))
        })
    }
}
