use super::error::GroupError;
use crate::numeric::Endianness;

/// Uniform group sizes accepted by `chunk_uniform`.
pub const UNIFORM_SIZES: [usize; 4] = [1, 2, 4, 8];

/// How a byte sequence is split into groups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupSpec {
    /// Fixed-size groups; the last group may be short.
    Uniform(usize),
    /// Explicit sizes; trailing bytes collect into a final group.
    Custom(Vec<usize>),
}

impl Default for GroupSpec {
    fn default() -> Self {
        GroupSpec::Uniform(1)
    }
}

/// Parse a size pattern like `"1,1,6"` or `"4 2"`. Zero sizes are dropped.
pub fn parse_sizes_pattern(pattern: &str) -> Result<Vec<usize>, GroupError> {
    let mut sizes = Vec::new();
    for token in pattern.replace(',', " ").split_whitespace() {
        let size: usize = token.parse().map_err(|_| GroupError::BadPattern {
            token: token.to_string(),
        })?;
        if size > 0 {
            sizes.push(size);
        }
    }
    Ok(sizes)
}

pub fn chunk_uniform(data: &[u8], group_size: usize) -> Result<Vec<&[u8]>, GroupError> {
    if !UNIFORM_SIZES.contains(&group_size) {
        return Err(GroupError::BadGroupSize { size: group_size });
    }
    Ok(data.chunks(group_size).collect())
}

pub fn chunk_custom<'a>(data: &'a [u8], sizes: &[usize]) -> Vec<&'a [u8]> {
    if sizes.is_empty() {
        return if data.is_empty() { Vec::new() } else { vec![data] };
    }

    let mut chunks = Vec::new();
    let mut offset = 0;
    for &size in sizes {
        if size == 0 {
            continue;
        }
        if offset >= data.len() {
            break;
        }
        let end = (offset + size).min(data.len());
        chunks.push(&data[offset..end]);
        offset = end;
    }
    if offset < data.len() {
        chunks.push(&data[offset..]);
    }
    chunks
}

pub fn chunk_with_spec<'a>(
    data: &'a [u8],
    spec: &GroupSpec,
) -> Result<Vec<&'a [u8]>, GroupError> {
    match spec {
        GroupSpec::Uniform(size) => chunk_uniform(data, *size),
        GroupSpec::Custom(sizes) => Ok(chunk_custom(data, sizes)),
    }
}

/// Reorder bytes within each group for the requested endianness.
pub fn apply_endianness(chunks: &[&[u8]], endian: Endianness) -> Vec<Vec<u8>> {
    chunks
        .iter()
        .map(|chunk| match endian {
            Endianness::Big => chunk.to_vec(),
            Endianness::Little => chunk.iter().rev().copied().collect(),
        })
        .collect()
}
