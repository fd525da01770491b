use serde::{Deserialize, Serialize};

/// Byte order applied when a sequence is read as an integer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Endianness {
    /// Most-significant byte first.
    Big,
    /// Least-significant byte first.
    #[default]
    Little,
}

impl std::fmt::Display for Endianness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Endianness::Big => write!(f, "big"),
            Endianness::Little => write!(f, "little"),
        }
    }
}

/// Integer representation used to interpret or produce bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Representation {
    #[default]
    Unsigned,
    TwosComplement,
    OnesComplement,
    SignMagnitude,
}

impl std::fmt::Display for Representation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Representation::Unsigned => write!(f, "unsigned"),
            Representation::TwosComplement => write!(f, "2's complement"),
            Representation::OnesComplement => write!(f, "1's complement"),
            Representation::SignMagnitude => write!(f, "sign-magnitude"),
        }
    }
}
