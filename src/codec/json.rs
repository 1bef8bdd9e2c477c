use core::fmt;

use log::{debug, trace};
use serde::de::{self, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::codec::CodecError;
use crate::math::Vec2;

pub fn to_string(v: Vec2) -> Result<String, CodecError> {
    serde_json::to_string(&v).map_err(CodecError::Encode)
}

pub fn to_vec(v: Vec2) -> Result<Vec<u8>, CodecError> {
    serde_json::to_vec(&v).map_err(CodecError::Encode)
}

pub fn from_str(text: &str) -> Result<Vec2, CodecError> {
    from_slice(text.as_bytes())
}

/// Decodes a vector, trying the `[x, y]` array form first and the keyed
/// `{"X": x, "Y": y}` form second. When both fail, the keyed attempt's error
/// is returned.
pub fn from_slice(bytes: &[u8]) -> Result<Vec2, CodecError> {
    let mut de = serde_json::Deserializer::from_slice(bytes);
    let array_err = match deserialize_array(&mut de).and_then(|v| de.end().map(|()| v)) {
        Ok(v) => return Ok(v),
        Err(err) => err,
    };
    trace!("not an [x, y] array ({array_err}), trying keyed form");

    let mut de = serde_json::Deserializer::from_slice(bytes);
    deserialize_keyed(&mut de)
        .and_then(|v| de.end().map(|()| v))
        .map_err(|err| {
            debug!("vector matched neither encoding: {err}");
            CodecError::Parse(err)
        })
}

/// Reads the array form. Like the historic decoder, it takes whatever it
/// finds: missing or `null` elements read as zero, elements past the second
/// are skipped, and a bare `null` is the origin.
fn deserialize_array<'de, D>(deserializer: D) -> Result<Vec2, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(ArrayVisitor)
}

/// Reads the keyed form. Keys match `X`/`Y` ignoring case, the last
/// duplicate wins, `null` values leave the component at zero and other keys
/// are skipped. Sequences are refused so they stay the array form's job.
fn deserialize_keyed<'de, D>(deserializer: D) -> Result<Vec2, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_map(KeyedVisitor)
}

struct ArrayVisitor;

impl<'de> Visitor<'de> for ArrayVisitor {
    type Value = Vec2;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an [x, y] array")
    }

    fn visit_unit<E: de::Error>(self) -> Result<Vec2, E> {
        Ok(Vec2::ORIGIN)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Vec2, A::Error> {
        let x = seq.next_element::<Option<f64>>()?.flatten().unwrap_or_default();
        let y = seq.next_element::<Option<f64>>()?.flatten().unwrap_or_default();
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        Ok(Vec2::new(x, y))
    }
}

struct KeyedVisitor;

impl<'de> Visitor<'de> for KeyedVisitor {
    type Value = Vec2;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an object with X and Y fields")
    }

    fn visit_unit<E: de::Error>(self) -> Result<Vec2, E> {
        Ok(Vec2::ORIGIN)
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Vec2, A::Error> {
        let mut v = Vec2::ORIGIN;
        while let Some(key) = map.next_key::<String>()? {
            let slot = if key.eq_ignore_ascii_case("x") {
                &mut v.x
            } else if key.eq_ignore_ascii_case("y") {
                &mut v.y
            } else {
                map.next_value::<IgnoredAny>()?;
                continue;
            };
            if let Some(value) = map.next_value::<Option<f64>>()? {
                *slot = value;
            }
        }
        Ok(v)
    }
}

impl Serialize for Vec2 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        [self.x, self.y].serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Vec2 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(Vec2Visitor)
    }
}

/// Structural dispatch for vectors embedded in other documents: sequences
/// take the array rules, maps the keyed rules.
struct Vec2Visitor;

impl<'de> Visitor<'de> for Vec2Visitor {
    type Value = Vec2;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an [x, y] array or an object with X and Y fields")
    }

    fn visit_unit<E: de::Error>(self) -> Result<Vec2, E> {
        Ok(Vec2::ORIGIN)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, seq: A) -> Result<Vec2, A::Error> {
        ArrayVisitor.visit_seq(seq)
    }

    fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<Vec2, A::Error> {
        KeyedVisitor.visit_map(map)
    }
}
