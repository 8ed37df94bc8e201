//! The 16-variant MBTI typology used as a categorical key.
//!
//! The original tables were keyed by free-form strings; here the code is a
//! closed enum so every table lookup is a total `match` and an invalid code
//! cannot reach the scoring stages.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Four-letter personality type code.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mbti {
    INTJ,
    INTP,
    ENTJ,
    ENTP,
    INFJ,
    INFP,
    ENFJ,
    ENFP,
    ISTJ,
    ISFJ,
    ESTJ,
    ESFJ,
    ISTP,
    ISFP,
    ESTP,
    ESFP,
}

#[derive(Error, Debug)]
#[error("not a valid MBTI code: {0}")]
pub struct ParseMbtiError(String);

impl Mbti {
    /// All sixteen codes, in the conventional grid order.
    pub const ALL: [Mbti; 16] = [
        Mbti::INTJ,
        Mbti::INTP,
        Mbti::ENTJ,
        Mbti::ENTP,
        Mbti::INFJ,
        Mbti::INFP,
        Mbti::ENFJ,
        Mbti::ENFP,
        Mbti::ISTJ,
        Mbti::ISFJ,
        Mbti::ESTJ,
        Mbti::ESFJ,
        Mbti::ISTP,
        Mbti::ISFP,
        Mbti::ESTP,
        Mbti::ESFP,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Mbti::INTJ => "INTJ",
            Mbti::INTP => "INTP",
            Mbti::ENTJ => "ENTJ",
            Mbti::ENTP => "ENTP",
            Mbti::INFJ => "INFJ",
            Mbti::INFP => "INFP",
            Mbti::ENFJ => "ENFJ",
            Mbti::ENFP => "ENFP",
            Mbti::ISTJ => "ISTJ",
            Mbti::ISFJ => "ISFJ",
            Mbti::ESTJ => "ESTJ",
            Mbti::ESFJ => "ESFJ",
            Mbti::ISTP => "ISTP",
            Mbti::ISFP => "ISFP",
            Mbti::ESTP => "ESTP",
            Mbti::ESFP => "ESFP",
        }
    }

    /// First letter is `E`.
    pub fn is_extravert(self) -> bool {
        self.as_str().starts_with('E')
    }

    /// Second letter is `N`.
    pub fn is_intuitive(self) -> bool {
        self.as_str().as_bytes()[1] == b'N'
    }

    /// Build a code from the four axis decisions.
    pub fn from_axes(extravert: bool, intuitive: bool, thinking: bool, judging: bool) -> Mbti {
        match (extravert, intuitive, thinking, judging) {
            (false, true, true, true) => Mbti::INTJ,
            (false, true, true, false) => Mbti::INTP,
            (true, true, true, true) => Mbti::ENTJ,
            (true, true, true, false) => Mbti::ENTP,
            (false, true, false, true) => Mbti::INFJ,
            (false, true, false, false) => Mbti::INFP,
            (true, true, false, true) => Mbti::ENFJ,
            (true, true, false, false) => Mbti::ENFP,
            (false, false, true, true) => Mbti::ISTJ,
            (false, false, false, true) => Mbti::ISFJ,
            (true, false, true, true) => Mbti::ESTJ,
            (true, false, false, true) => Mbti::ESFJ,
            (false, false, true, false) => Mbti::ISTP,
            (false, false, false, false) => Mbti::ISFP,
            (true, false, true, false) => Mbti::ESTP,
            (true, false, false, false) => Mbti::ESFP,
        }
    }
}

impl fmt::Display for Mbti {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mbti {
    type Err = ParseMbtiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mbti::ALL
            .iter()
            .copied()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| ParseMbtiError(s.to_string()))
    }
}
