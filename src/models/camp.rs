use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

/// Training track a message belongs to.
///
/// Canonical form is the four letter code. Early submissions stored a
/// numeric alias instead, so parsing accepts both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum Camp {
    Back,
    Frnt,
    Bizd,
    Full,
    Desn,
}

impl Camp {
    pub const ALL: [Camp; 5] = [Camp::Back, Camp::Frnt, Camp::Bizd, Camp::Full, Camp::Desn];

    pub fn code(self) -> &'static str {
        match self {
            Camp::Back => "BACK",
            Camp::Frnt => "FRNT",
            Camp::Bizd => "BIZD",
            Camp::Full => "FULL",
            Camp::Desn => "DESN",
        }
    }

    pub fn numeric_alias(self) -> &'static str {
        match self {
            Camp::Back => "1",
            Camp::Frnt => "2",
            Camp::Bizd => "3",
            Camp::Full => "4",
            Camp::Desn => "5",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Camp::Back => "초격차 BE",
            Camp::Frnt => "초격차 FE",
            Camp::Bizd => "사업개발 BD",
            Camp::Full => "풀스택 FSO",
            Camp::Desn => "디자이너 PD",
        }
    }

    /// Accepts the canonical code or the legacy numeric alias.
    pub fn parse(raw: &str) -> Option<Camp> {
        Camp::ALL
            .into_iter()
            .find(|camp| camp.code() == raw || camp.numeric_alias() == raw)
    }
}

impl fmt::Display for Camp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown camp: {0}")]
pub struct UnknownCamp(pub String);

impl FromStr for Camp {
    type Err = UnknownCamp;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Camp::parse(s.trim()).ok_or_else(|| UnknownCamp(s.to_string()))
    }
}

impl<'de> Deserialize<'de> for Camp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
