use crate::Sprite;
use crate::keys;

use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt;
use std::sync::Arc;

/// A fully resolved Pokémon.
///
/// Built once from a [`Metadata`] and its artwork; there is no way to
/// change it afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pokemon {
    id: Id,
    name: String,
    height: Option<i32>,
    weight: Option<i32>,
    base_experience: Option<i32>,
    types: Vec<String>,
    abilities: Vec<String>,
    #[serde(skip)]
    sprite: Sprite,
}

impl Pokemon {
    pub fn new(metadata: Metadata, sprite: Sprite) -> Self {
        Self {
            id: metadata.id,
            name: metadata.name,
            height: metadata.height,
            weight: metadata.weight,
            base_experience: metadata.base_experience,
            types: metadata.types,
            abilities: metadata.abilities,
            sprite,
        }
    }

    pub fn id(&self) -> Id {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn height(&self) -> Option<i32> {
        self.height
    }

    pub fn weight(&self) -> Option<i32> {
        self.weight
    }

    pub fn base_experience(&self) -> Option<i32> {
        self.base_experience
    }

    pub fn types(&self) -> &[String] {
        &self.types
    }

    pub fn abilities(&self) -> &[String] {
        &self.abilities
    }

    pub fn sprite(&self) -> &Sprite {
        &self.sprite
    }
}

/// A national dex number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Id(u32);

impl Id {
    pub const MIN: u32 = 1;
    pub const MAX: u32 = 1025;

    /// Returns `None` if `value` falls outside of `MIN..=MAX`.
    pub fn new(value: i64) -> Option<Self> {
        u32::try_from(value)
            .ok()
            .filter(|value| (Self::MIN..=Self::MAX).contains(value))
            .map(Self)
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The fields of a `pokemon` resource, before its artwork is fetched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metadata {
    pub id: Id,
    pub name: String,
    pub height: Option<i32>,
    pub weight: Option<i32>,
    pub base_experience: Option<i32>,
    pub types: Vec<String>,
    pub abilities: Vec<String>,
    pub artwork: Option<String>,
}

impl Metadata {
    /// Parses a response body.
    ///
    /// Numeric fields that are missing or not an integer become `None`.
    /// Entries of `types` and `abilities` without a nested name are skipped.
    pub fn parse(body: &[u8]) -> Result<Self, Malformed> {
        let value: Value =
            serde_json::from_slice(body).map_err(|error| Malformed::Syntax(Arc::new(error)))?;

        match value {
            Value::Object(object) => Self::from_object(&object),
            other => Err(Malformed::NotAnObject(kind(&other))),
        }
    }

    pub fn from_object(object: &Map<String, Value>) -> Result<Self, Malformed> {
        use keys::pokemon as key;

        // By-name lookups may legitimately yield ids beyond `Id::MAX` (alternate forms)
        let id = object
            .get(key::ID)
            .and_then(Value::as_u64)
            .and_then(|id| u32::try_from(id).ok())
            .map(Id)
            .ok_or(Malformed::MissingField(key::ID))?;

        let name = object
            .get(key::NAME)
            .and_then(Value::as_str)
            .filter(|name| !name.is_empty())
            .ok_or(Malformed::MissingField(key::NAME))?
            .to_owned();

        Ok(Self {
            id,
            name,
            height: integer(object, key::HEIGHT),
            weight: integer(object, key::WEIGHT),
            base_experience: integer(object, key::BASE_EXPERIENCE),
            types: names(object, key::TYPES, key::TYPE),
            abilities: names(object, key::ABILITIES, key::ABILITY),
            artwork: artwork(object),
        })
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum Malformed {
    #[error("invalid JSON: {0}")]
    Syntax(Arc<serde_json::Error>),
    #[error("expected a JSON object, found {0}")]
    NotAnObject(&'static str),
    #[error("missing or invalid field: {0}")]
    MissingField(&'static str),
}

fn integer(object: &Map<String, Value>, key: &str) -> Option<i32> {
    let value = object.get(key)?;

    if let Some(integer) = value.as_i64() {
        return i32::try_from(integer).ok();
    }

    // Integral floats such as `60.0` still count
    value
        .as_f64()
        .filter(|float| float.fract() == 0.0)
        .filter(|float| (f64::from(i32::MIN)..=f64::from(i32::MAX)).contains(float))
        .map(|float| float as i32)
}

fn names(object: &Map<String, Value>, list: &str, entry: &str) -> Vec<String> {
    let Some(items) = object.get(list).and_then(Value::as_array) else {
        return Vec::new();
    };

    items
        .iter()
        .enumerate()
        .filter_map(|(index, item)| {
            let name = item
                .get(entry)
                .and_then(|node| node.get(keys::common::NAME))
                .and_then(Value::as_str)
                .filter(|name| !name.is_empty());

            if name.is_none() {
                log::debug!("Skipping {list}[{index}]: no {entry}.{}", keys::common::NAME);
            }

            name
        })
        .map(str::to_owned)
        .collect()
}

fn artwork(object: &Map<String, Value>) -> Option<String> {
    let (root, path) = keys::pokemon::ARTWORK_PATH.split_first()?;

    path.iter()
        .try_fold(object.get(*root)?, |node, key| node.get(*key))?
        .as_str()
        .filter(|url| !url.is_empty())
        .map(str::to_owned)
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
