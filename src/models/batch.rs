use serde::{de, Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

pub const MIN_BATCH: u8 = 1;
pub const MAX_BATCH: u8 = 99;

/// Cohort number within a camp, always in `1..=99`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(into = "u8")]
pub struct Batch(u8);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("batch must be a number between 1 and 99")]
pub struct InvalidBatch;

impl Batch {
    pub fn new(value: i64) -> Result<Self, InvalidBatch> {
        if (MIN_BATCH as i64..=MAX_BATCH as i64).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(InvalidBatch)
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn as_i16(self) -> i16 {
        self.0 as i16
    }
}

impl From<Batch> for u8 {
    fn from(batch: Batch) -> Self {
        batch.0
    }
}

impl fmt::Display for Batch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Batch {
    type Err = InvalidBatch;

    /// Digits only; leading zeros are fine, signs and trailing text are not.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InvalidBatch);
        }
        let value: i64 = s.parse().map_err(|_| InvalidBatch)?;
        Batch::new(value)
    }
}

impl<'de> Deserialize<'de> for Batch {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Older clients sent the batch as text.
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(i64),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Number(n) => Batch::new(n).map_err(de::Error::custom),
            Raw::Text(s) => s.parse().map_err(de::Error::custom),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_bounds() {
        assert_eq!(Batch::new(1).unwrap().get(), 1);
        assert_eq!(Batch::new(99).unwrap().get(), 99);
        assert!(Batch::new(0).is_err());
        assert!(Batch::new(100).is_err());
        assert!(Batch::new(-3).is_err());
    }

    #[test]
    fn parses_text() {
        assert_eq!("3".parse::<Batch>().unwrap().get(), 3);
        assert_eq!("07".parse::<Batch>().unwrap().get(), 7);
        assert!("3a".parse::<Batch>().is_err());
        assert!("+3".parse::<Batch>().is_err());
        assert!("".parse::<Batch>().is_err());
        assert!("100".parse::<Batch>().is_err());
        assert!("99999999999999999999999".parse::<Batch>().is_err());
    }

    #[test]
    fn deserializes_number_or_string() {
        let from_number: Batch = serde_json::from_str("12").unwrap();
        let from_text: Batch = serde_json::from_str("\"12\"").unwrap();
        assert_eq!(from_number, from_text);
        assert!(serde_json::from_str::<Batch>("0").is_err());
        assert_eq!(serde_json::to_string(&from_number).unwrap(), "12");
    }
}
