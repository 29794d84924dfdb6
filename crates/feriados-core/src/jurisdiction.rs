//! Hierarchical administrative jurisdiction codes.
//!
//! A code's shape determines its administrative level: the sentinel `"-1"`
//! is the national scope, exactly two ASCII digits name a state, and exactly
//! seven ASCII digits name a town (IBGE municipality code: the two-digit
//! state prefix followed by a five-digit municipal suffix). Classification
//! happens once, at parse time; every other layer of the workspace consumes
//! the already-classified [`JurisdictionCode`], so a malformed code can never
//! reach the repository.

use crate::errors::{Error, Result};

/// A validated, classified jurisdiction code.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum JurisdictionCode {
    /// The national scope, written `"-1"`.
    National,
    /// A state, identified by exactly two digits (e.g. `"35"`, São Paulo).
    State(String),
    /// A town, identified by exactly seven digits (e.g. `"3550308"`, the
    /// municipality of São Paulo).
    Town(String),
}

impl JurisdictionCode {
    /// The sentinel spelling of the national scope.
    pub const NATIONAL: &'static str = "-1";

    /// Parse and classify a raw code.
    ///
    /// Any shape other than the three recognized ones (wrong length,
    /// non-digit characters, empty) is rejected with
    /// [`Error::InvalidInput`].
    pub fn parse(code: &str) -> Result<Self> {
        if code == Self::NATIONAL {
            return Ok(JurisdictionCode::National);
        }
        let all_digits = code.bytes().all(|b| b.is_ascii_digit());
        match code.len() {
            2 if all_digits => Ok(JurisdictionCode::State(code.to_owned())),
            7 if all_digits => Ok(JurisdictionCode::Town(code.to_owned())),
            _ => Err(Error::InvalidInput(format!(
                "malformed jurisdiction code {code:?}"
            ))),
        }
    }

    /// Return the code as it is written (`"-1"`, `"35"`, `"3550308"`).
    pub fn as_str(&self) -> &str {
        match self {
            JurisdictionCode::National => Self::NATIONAL,
            JurisdictionCode::State(code) | JurisdictionCode::Town(code) => code,
        }
    }

    /// For a town code, the state it belongs to (its two-digit prefix).
    ///
    /// Returns `None` for national and state codes.
    pub fn state(&self) -> Option<JurisdictionCode> {
        match self {
            JurisdictionCode::Town(code) => {
                Some(JurisdictionCode::State(code[..2].to_owned()))
            }
            _ => None,
        }
    }
}

impl std::fmt::Display for JurisdictionCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn national_sentinel() {
        assert_eq!(
            JurisdictionCode::parse("-1").unwrap(),
            JurisdictionCode::National
        );
        assert_eq!(JurisdictionCode::National.as_str(), "-1");
    }

    #[test]
    fn two_digits_is_state() {
        let code = JurisdictionCode::parse("35").unwrap();
        assert_eq!(code, JurisdictionCode::State("35".into()));
        assert_eq!(code.as_str(), "35");
    }

    #[test]
    fn seven_digits_is_town() {
        let code = JurisdictionCode::parse("3550308").unwrap();
        assert_eq!(code, JurisdictionCode::Town("3550308".into()));
        assert_eq!(
            code.state(),
            Some(JurisdictionCode::State("35".into()))
        );
    }

    #[test]
    fn malformed_codes_rejected() {
        for bad in ["", "3", "355", "35503080", "3a", "35５０308", "-2", " 35", "35 "] {
            assert!(
                JurisdictionCode::parse(bad).is_err(),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn state_of_non_town_is_none() {
        assert_eq!(JurisdictionCode::National.state(), None);
        assert_eq!(JurisdictionCode::parse("35").unwrap().state(), None);
    }

    proptest! {
        /// Only the three recognized shapes ever parse.
        #[test]
        fn parse_accepts_exactly_the_recognized_shapes(code in "\\PC*") {
            let accepted = code == "-1"
                || ((code.len() == 2 || code.len() == 7)
                    && code.bytes().all(|b| b.is_ascii_digit()));
            prop_assert_eq!(JurisdictionCode::parse(&code).is_ok(), accepted);
        }

        /// Parsing round-trips through `as_str`.
        #[test]
        fn as_str_round_trips(code in "[0-9]{2}|[0-9]{7}") {
            let parsed = JurisdictionCode::parse(&code).unwrap();
            prop_assert_eq!(parsed.as_str(), code.as_str());
        }
    }
}
