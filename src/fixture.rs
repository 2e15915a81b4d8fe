//! Input fixtures: flat JSON objects mapping `"<group>:<binding>"` to the
//! captured bytes of that binding.
//!
//! Fixtures are merged as typed maps and written back in one pass. The
//! encoder spaces output as `{"0:0": [1, 2], "0:1": [3, 4]}` so files match
//! those produced by earlier textual splicing.

use std::fmt;
use std::io;

use serde::de::Error as _;
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::ser::Formatter;
use serde_json::{Map, Number, Value};

use crate::error::{CaptureError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BindingKey {
    pub group: u32,
    pub binding: u32,
}

impl BindingKey {
    pub fn new(group: u32, binding: u32) -> Self {
        Self { group, binding }
    }

    pub fn parse(key: &str) -> Option<Self> {
        let (group, binding) = key.split_once(':')?;
        Some(Self {
            group: group.parse().ok()?,
            binding: binding.parse().ok()?,
        })
    }
}

impl fmt::Display for BindingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.group, self.binding)
    }
}

/// Ordered binding map. Keys keep the position of their first insertion.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Fixture {
    entries: Vec<(BindingKey, Vec<Number>)>,
}

impl Fixture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_bytes(key: BindingKey, bytes: &[u8]) -> Self {
        let mut fixture = Self::new();
        fixture.insert(key, bytes.iter().map(|&b| Number::from(b)).collect());
        fixture
    }

    /// Replaces the values of an existing key in place, or appends a new key.
    pub fn insert(&mut self, key: BindingKey, values: Vec<Number>) {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = values,
            None => self.entries.push((key, values)),
        }
    }

    pub fn merge(&mut self, other: Fixture) {
        for (key, values) in other.entries {
            self.insert(key, values);
        }
    }

    pub fn get(&self, key: BindingKey) -> Option<&[Number]> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_slice())
    }

    pub fn keys(&self) -> impl Iterator<Item = BindingKey> + '_ {
        self.entries.iter().map(|(k, _)| *k)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn parse(text: &str) -> Result<Self> {
        let object: Map<String, Value> = serde_json::from_str(text)
            .map_err(|source| CaptureError::MalformedFixture { source })?;

        let mut fixture = Self::new();
        for (raw_key, value) in object {
            let key = BindingKey::parse(&raw_key)
                .ok_or_else(|| malformed(format!("`{raw_key}` is not a <group>:<binding> key")))?;
            let Value::Array(items) = value else {
                return Err(malformed(format!("`{raw_key}` does not hold an array")));
            };
            let values = items
                .into_iter()
                .map(|item| match item {
                    Value::Number(n) => Ok(n),
                    other => Err(malformed(format!("`{raw_key}` holds non-number {other}"))),
                })
                .collect::<Result<Vec<_>>>()?;
            fixture.insert(key, values);
        }
        Ok(fixture)
    }

    pub fn to_json(&self) -> Result<String> {
        let mut buf = Vec::new();
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, FixtureFormatter);
        self.serialize(&mut ser)?;
        String::from_utf8(buf)
            .map_err(|e| CaptureError::EncodeFixture(serde::ser::Error::custom(e)))
    }
}

impl Serialize for Fixture {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, values) in &self.entries {
            map.serialize_entry(&key.to_string(), values)?;
        }
        map.end()
    }
}

/// Merge function for fixture artifacts: `existing` then `incoming`, in order.
pub fn merge_text(existing: &str, incoming: &str) -> Result<String> {
    let mut merged = Fixture::parse(existing)?;
    merged.merge(Fixture::parse(incoming)?);
    merged.to_json()
}

fn malformed(msg: String) -> CaptureError {
    CaptureError::MalformedFixture {
        source: serde_json::Error::custom(msg),
    }
}

struct FixtureFormatter;

impl Formatter for FixtureFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }
}
