use super::error::NumericError;
use super::repr::{Endianness, Representation};
use crate::MAX_BYTES;

/// Inclusive (lo, hi) value range for a byte width and representation.
pub fn int_range(width: usize, repr: Representation) -> Result<(i128, i128), NumericError> {
    check_width(width)?;
    let bits = 8 * width as u32;
    let range = match repr {
        Representation::Unsigned => (0, (1i128 << bits) - 1),
        Representation::TwosComplement => (-(1i128 << (bits - 1)), (1i128 << (bits - 1)) - 1),
        // No representable -(2^(n-1)); negative zero exists instead.
        Representation::OnesComplement | Representation::SignMagnitude => {
            let max = (1i128 << (bits - 1)) - 1;
            (-max, max)
        }
    };
    Ok(range)
}

/// Encode a value into exactly `width` bytes.
pub fn int_to_bytes(
    value: i128,
    width: usize,
    repr: Representation,
    endian: Endianness,
) -> Result<Vec<u8>, NumericError> {
    let (lo, hi) = int_range(width, repr)?;
    if value < lo || value > hi {
        return Err(NumericError::Overflow { value, width, repr });
    }

    let raw = match repr {
        Representation::Unsigned => value as u64,
        Representation::TwosComplement => (value as i64 as u64) & width_mask(width),
        Representation::OnesComplement => {
            if value >= 0 {
                value as u64
            } else {
                !(value.unsigned_abs() as u64) & width_mask(width)
            }
        }
        Representation::SignMagnitude => {
            let magnitude = value.unsigned_abs() as u64;
            if value < 0 {
                magnitude | sign_bit(width)
            } else {
                magnitude
            }
        }
    };
    Ok(emit(raw, width, endian))
}

/// Decode a sequence with the width inferred from its length.
///
/// The empty sequence decodes to 0 in every representation.
pub fn bytes_to_int(
    data: &[u8],
    repr: Representation,
    endian: Endianness,
) -> Result<i128, NumericError> {
    if data.len() > MAX_BYTES {
        return Err(NumericError::BadWidth { width: data.len() });
    }
    if data.is_empty() {
        return Ok(0);
    }

    let width = data.len();
    let raw = absorb(data, endian);
    let mask = width_mask(width);
    let sign = sign_bit(width);
    let value = match repr {
        Representation::Unsigned => raw as i128,
        Representation::TwosComplement => {
            if raw & sign != 0 {
                raw as i128 - (1i128 << (8 * width as u32))
            } else {
                raw as i128
            }
        }
        Representation::OnesComplement => {
            if raw & sign != 0 {
                let magnitude = !raw & mask;
                if magnitude == 0 { 0 } else { -(magnitude as i128) }
            } else {
                raw as i128
            }
        }
        Representation::SignMagnitude => {
            let magnitude = raw & (mask >> 1);
            if raw & sign != 0 {
                -(magnitude as i128)
            } else {
                magnitude as i128
            }
        }
    };
    Ok(value)
}

/// Decode a sequence that must be exactly `width` bytes long.
pub fn bytes_to_int_exact(
    data: &[u8],
    width: usize,
    repr: Representation,
    endian: Endianness,
) -> Result<i128, NumericError> {
    check_width(width)?;
    if data.len() != width {
        return Err(NumericError::WidthMismatch {
            expected: width,
            actual: data.len(),
        });
    }
    bytes_to_int(data, repr, endian)
}

/// Parse an integer literal with an optional sign, `0x`/`0o`/`0b` prefix
/// and `_` separators.
pub fn parse_int_literal(literal: &str) -> Result<i128, NumericError> {
    let bad = || NumericError::InvalidLiteral {
        literal: literal.trim().to_string(),
    };

    let cleaned = literal.trim().replace('_', "");
    if cleaned.is_empty() {
        return Err(bad());
    }
    let (negative, body) = match cleaned.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, cleaned.strip_prefix('+').unwrap_or(&cleaned)),
    };
    let (radix, digits) = strip_radix_prefix(body);
    // from_str_radix accepts its own leading sign; only one sign is allowed here.
    if digits.starts_with(['+', '-']) {
        return Err(bad());
    }
    let magnitude = i128::from_str_radix(digits, radix).map_err(|_| bad())?;
    Ok(if negative { -magnitude } else { magnitude })
}

fn strip_radix_prefix(body: &str) -> (u32, &str) {
    for (prefix, radix) in [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)] {
        if let Some(rest) = body.strip_prefix(prefix) {
            return (radix, rest);
        }
    }
    (10, body)
}

fn check_width(width: usize) -> Result<(), NumericError> {
    if width < 1 || width > MAX_BYTES {
        return Err(NumericError::BadWidth { width });
    }
    Ok(())
}

fn width_mask(width: usize) -> u64 {
    if width == MAX_BYTES {
        u64::MAX
    } else {
        (1u64 << (8 * width as u32)) - 1
    }
}

fn sign_bit(width: usize) -> u64 {
    1u64 << (8 * width as u32 - 1)
}

fn emit(raw: u64, width: usize, endian: Endianness) -> Vec<u8> {
    match endian {
        Endianness::Big => raw.to_be_bytes()[MAX_BYTES - width..].to_vec(),
        Endianness::Little => raw.to_le_bytes()[..width].to_vec(),
    }
}

fn absorb(data: &[u8], endian: Endianness) -> u64 {
    let mut buf = [0u8; MAX_BYTES];
    match endian {
        Endianness::Big => {
            buf[MAX_BYTES - data.len()..].copy_from_slice(data);
            u64::from_be_bytes(buf)
        }
        Endianness::Little => {
            buf[..data.len()].copy_from_slice(data);
            u64::from_le_bytes(buf)
        }
    }
}
