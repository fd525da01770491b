//! Hex text parsing and rendering.
//!
//! The parser accepts the separator styles users actually paste: spaces,
//! commas, underscores, `0x` prefixes, continuous digit runs, and single
//! nibbles when separated (`"F A"` reads as `0F 0A`). A continuous run
//! must contain an even number of digits, every token must be one or two
//! hex digits, and the sequence is capped at `MAX_BYTES`.
//!
//! Rendering produces the canonical form: uppercase pairs separated by
//! single spaces. Parsing then rendering normalizes any accepted input.
//!
//! Version française (résumé):
//! Analyse des chaînes hexadécimales avec séparateurs usuels (espaces,
//! virgules, préfixes `0x`, quartets isolés) et rendu canonique en paires
//! majuscules espacées. L'aller-retour analyse -> rendu normalise l'entrée.

pub mod display;
pub mod error;
pub mod parser;

pub use display::{bytes_to_binary, bytes_to_hex};
pub use error::HexError;
pub use parser::parse_hex_bytes;
