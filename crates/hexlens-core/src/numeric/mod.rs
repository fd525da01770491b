//! Integer representation conversions.
//!
//! Byte sequences are interpreted as, or produced from, fixed-width
//! integers in one of four representations: unsigned, two's complement,
//! one's complement and sign-magnitude. Widths run from 1 to 8 bytes;
//! decoding may also infer the width from the sequence length. Range
//! checks happen before any encoding, so every produced sequence decodes
//! back to the original value.
//!
//! Invariants:
//! - `bytes_to_int_exact(int_to_bytes(v, w, r, e), w, r, e) == v` for any
//!   value representable in (w, r).
//! - Negative zero (all ones in one's complement, bare sign bit in
//!   sign-magnitude) decodes to 0.
//!
//! Version française (résumé):
//! Conversions entre séquences d'octets et entiers à largeur fixe dans
//! quatre représentations (non signé, complément à deux, complément à un,
//! signe-magnitude). Les bornes sont vérifiées avant tout encodage; le
//! zéro négatif se normalise en 0.

pub mod convert;
pub mod error;
pub mod repr;

pub use convert::{bytes_to_int, bytes_to_int_exact, int_range, int_to_bytes, parse_int_literal};
pub use error::NumericError;
pub use repr::{Endianness, Representation};
