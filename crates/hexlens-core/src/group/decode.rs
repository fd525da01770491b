use super::chunk::{GroupSpec, apply_endianness, chunk_with_spec};
use super::error::GroupError;
use crate::MAX_BYTES;
use crate::hex::bytes_to_hex;
use crate::numeric::Endianness;

/// Per-group unsigned and two's-complement values, in group order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupedInts {
    pub unsigned: Vec<u64>,
    pub signed: Vec<i64>,
}

/// Render each group as spaced uppercase hex after applying endianness.
pub fn grouped_hex(
    data: &[u8],
    spec: &GroupSpec,
    endian: Endianness,
) -> Result<Vec<String>, GroupError> {
    let chunks = chunk_with_spec(data, spec)?;
    Ok(apply_endianness(&chunks, endian)
        .iter()
        .map(|chunk| bytes_to_hex(chunk))
        .collect())
}

/// Decode each group into its unsigned and two's-complement values.
pub fn grouped_ints(
    data: &[u8],
    spec: &GroupSpec,
    endian: Endianness,
) -> Result<GroupedInts, GroupError> {
    let chunks = chunk_with_spec(data, spec)?;
    let mut out = GroupedInts::default();
    for chunk in apply_endianness(&chunks, endian) {
        if chunk.is_empty() {
            continue;
        }
        if chunk.len() > MAX_BYTES {
            return Err(GroupError::GroupTooWide {
                len: chunk.len(),
                max: MAX_BYTES,
            });
        }
        out.unsigned.push(read_unsigned(&chunk));
        out.signed.push(read_signed(&chunk));
    }
    Ok(out)
}

fn read_unsigned(chunk: &[u8]) -> u64 {
    let mut buf = [0u8; MAX_BYTES];
    buf[MAX_BYTES - chunk.len()..].copy_from_slice(chunk);
    u64::from_be_bytes(buf)
}

fn read_signed(chunk: &[u8]) -> i64 {
    let raw = read_unsigned(chunk);
    let bits = 8 * chunk.len() as u32;
    if bits == 64 {
        return raw as i64;
    }
    if raw & (1u64 << (bits - 1)) != 0 {
        raw as i64 - (1i64 << bits)
    } else {
        raw as i64
    }
}
