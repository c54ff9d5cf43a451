//! Naming conventions for the generated type-union literals.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use svgts_core::{to_camel_case, to_kebab_case, to_snake_case};

/// Casing rule applied to an icon's base name to build its type literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Delimiter {
    /// `iconName`
    Camel,
    /// `icon-name`
    Kebab,
    /// `icon_name`
    #[default]
    Snake,
}

impl Delimiter {
    /// All conventions, in the order they are listed to users.
    pub const ALL: [Delimiter; 3] = [Delimiter::Camel, Delimiter::Kebab, Delimiter::Snake];

    /// Apply this convention to a name.
    pub fn apply(&self, name: &str) -> String {
        let transform: fn(&str) -> String = match self {
            Delimiter::Camel => to_camel_case,
            Delimiter::Kebab => to_kebab_case,
            Delimiter::Snake => to_snake_case,
        };
        transform(name)
    }

    /// Returns the delimiter identifier as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Delimiter::Camel => "camel",
            Delimiter::Kebab => "kebab",
            Delimiter::Snake => "snake",
        }
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Delimiter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "camel" => Ok(Delimiter::Camel),
            "kebab" => Ok(Delimiter::Kebab),
            "snake" => Ok(Delimiter::Snake),
            _ => Err(format!(
                "unknown delimiter '{}', expected one of: {}",
                s,
                Delimiter::ALL.map(|d| d.as_str()).join(", ")
            )),
        }
    }
}

impl Serialize for Delimiter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Delimiter {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
