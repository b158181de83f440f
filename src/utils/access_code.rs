//! Access codes for the secret passage.
//!
//! A code is the Base64 form of `"{CAMP}-{batch}"`. Holding one is enough to
//! read a cohort's messages; it is a convenience, not a credential.

use base64::{
    alphabet,
    engine::{general_purpose::GeneralPurpose, DecodePaddingMode, GeneralPurposeConfig},
    Engine as _,
};

use crate::error::{Error, Result};
use crate::models::{batch::Batch, camp::Camp};

const CODE_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessTarget {
    pub camp: Camp,
    pub batch: Batch,
}

impl AccessTarget {
    pub fn route(&self) -> String {
        format!("/secret-messages/{}/{}", self.camp.code(), self.batch)
    }
}

pub fn encode(camp: Camp, batch: Batch) -> String {
    CODE_ENGINE.encode(format!("{}-{}", camp.code(), batch))
}

/// Decodes a user-typed code. Whitespace anywhere in the input is ignored.
///
/// An empty input is a `BadRequest`; every other failure collapses into
/// `Error::InvalidAccessCode` so callers cannot tell which check failed.
pub fn decode(input: &str) -> Result<AccessTarget> {
    let compact: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    if compact.is_empty() {
        return Err(Error::BadRequest("code is required".to_string()));
    }
    parse_compact(&compact).ok_or(Error::InvalidAccessCode)
}

fn parse_compact(compact: &str) -> Option<AccessTarget> {
    let bytes = CODE_ENGINE.decode(compact).ok()?;
    let decoded = String::from_utf8(bytes).ok()?;

    let mut segments = decoded.split('-');
    let camp_raw = segments.next().filter(|s| !s.is_empty())?;
    let batch_raw = segments.next().filter(|s| !s.is_empty())?;
    if segments.next().is_some() {
        return None;
    }

    let camp = Camp::parse(camp_raw)?;
    let batch = batch_raw.parse::<Batch>().ok()?;
    Some(AccessTarget { camp, batch })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_invalid(code: &str) {
        match decode(code) {
            Err(Error::InvalidAccessCode) => {}
            other => panic!("expected invalid code for {:?}, got {:?}", code, other),
        }
    }

    #[test]
    fn decodes_known_example() {
        let target = decode("QkFDSy0z").unwrap();
        assert_eq!(target.camp, Camp::Back);
        assert_eq!(target.batch.get(), 3);
        assert_eq!(target.route(), "/secret-messages/BACK/3");
    }

    #[test]
    fn every_valid_pair_round_trips() {
        for camp in Camp::ALL {
            for n in [1, 2, 10, 42, 99] {
                let batch = Batch::new(n).unwrap();
                let target = decode(&encode(camp, batch)).unwrap();
                assert_eq!(target, AccessTarget { camp, batch });
            }
        }
    }

    #[test]
    fn ignores_whitespace_and_missing_padding() {
        // "FRNT-12" -> "RlJOVC0xMg==".
        assert_eq!(decode(" RlJO VC0x\nMg== ").unwrap().camp, Camp::Frnt);
        assert_eq!(decode("RlJOVC0xMg").unwrap().batch.get(), 12);
    }

    #[test]
    fn accepts_numeric_camp_alias() {
        // "1-7"
        let target = decode("MS03").unwrap();
        assert_eq!(target.camp, Camp::Back);
        assert_eq!(target.batch.get(), 7);
    }

    #[test]
    fn rejects_malformed_codes_generically() {
        assert_invalid("not-base64-!!");
        // "BACK"
        assert_invalid("QkFDSw==");
        // "BACK-3-1"
        assert_invalid("QkFDSy0zLTE=");
        // "NOPE-3"
        assert_invalid("Tk9QRS0z");
        // "BACK-0"
        assert_invalid("QkFDSy0w");
        // "BACK-100"
        assert_invalid("QkFDSy0xMDA=");
        // "BACK-"
        assert_invalid("QkFDSy0=");
        // "-3"
        assert_invalid("LTM=");
        // invalid UTF-8
        assert_invalid("/w==");
    }

    #[test]
    fn empty_code_is_reported_separately() {
        assert!(matches!(decode("  \t"), Err(Error::BadRequest(_))));
    }
}
