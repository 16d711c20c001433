//! Closed vocabularies describing where a student sits in the school.

#[cfg(feature = "sea-orm")]
use sea_orm::prelude::StringLen;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ParseValueError;

/// School grade of a registrant. Serialized as the bare number in a string (`"8"` .. `"12"`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, utoipa::ToSchema)]
#[cfg_attr(
    feature = "sea-orm",
    derive(sea_orm::DeriveActiveEnum, sea_orm::EnumIter),
    sea_orm(rs_type = "String", db_type = "String(StringLen::None)")
)]
pub enum Grade {
    #[serde(rename = "8")]
    #[cfg_attr(feature = "sea-orm", sea_orm(string_value = "8"))]
    Eighth,
    #[serde(rename = "9")]
    #[cfg_attr(feature = "sea-orm", sea_orm(string_value = "9"))]
    Ninth,
    #[serde(rename = "10")]
    #[cfg_attr(feature = "sea-orm", sea_orm(string_value = "10"))]
    Tenth,
    #[serde(rename = "11")]
    #[cfg_attr(feature = "sea-orm", sea_orm(string_value = "11"))]
    Eleventh,
    #[serde(rename = "12")]
    #[cfg_attr(feature = "sea-orm", sea_orm(string_value = "12"))]
    Twelfth,
}

impl Grade {
    pub const ALL: &'static [Grade] = &[
        Self::Eighth,
        Self::Ninth,
        Self::Tenth,
        Self::Eleventh,
        Self::Twelfth,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Eighth => "8",
            Self::Ninth => "9",
            Self::Tenth => "10",
            Self::Eleventh => "11",
            Self::Twelfth => "12",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Grade {
    type Err = ParseValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|g| g.as_str() == s)
            .ok_or_else(|| ParseValueError::new("grade", s, Self::ALL.iter().map(|g| g.as_str())))
    }
}

/// Class division within a grade (`"A"` .. `"K"`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, utoipa::ToSchema)]
#[cfg_attr(
    feature = "sea-orm",
    derive(sea_orm::DeriveActiveEnum, sea_orm::EnumIter),
    sea_orm(rs_type = "String", db_type = "String(StringLen::None)")
)]
pub enum Division {
    #[cfg_attr(feature = "sea-orm", sea_orm(string_value = "A"))]
    A,
    #[cfg_attr(feature = "sea-orm", sea_orm(string_value = "B"))]
    B,
    #[cfg_attr(feature = "sea-orm", sea_orm(string_value = "C"))]
    C,
    #[cfg_attr(feature = "sea-orm", sea_orm(string_value = "D"))]
    D,
    #[cfg_attr(feature = "sea-orm", sea_orm(string_value = "E"))]
    E,
    #[cfg_attr(feature = "sea-orm", sea_orm(string_value = "F"))]
    F,
    #[cfg_attr(feature = "sea-orm", sea_orm(string_value = "G"))]
    G,
    #[cfg_attr(feature = "sea-orm", sea_orm(string_value = "H"))]
    H,
    #[cfg_attr(feature = "sea-orm", sea_orm(string_value = "I"))]
    I,
    #[cfg_attr(feature = "sea-orm", sea_orm(string_value = "J"))]
    J,
    #[cfg_attr(feature = "sea-orm", sea_orm(string_value = "K"))]
    K,
}

impl Division {
    pub const ALL: &'static [Division] = &[
        Self::A,
        Self::B,
        Self::C,
        Self::D,
        Self::E,
        Self::F,
        Self::G,
        Self::H,
        Self::I,
        Self::J,
        Self::K,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::E => "E",
            Self::F => "F",
            Self::G => "G",
            Self::H => "H",
            Self::I => "I",
            Self::J => "J",
            Self::K => "K",
        }
    }
}

impl fmt::Display for Division {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Division {
    type Err = ParseValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| {
                ParseValueError::new("division", s, Self::ALL.iter().map(|d| d.as_str()))
            })
    }
}
