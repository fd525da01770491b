//! Byte grouping and per-group decoding.
//!
//! Groups are formed left to right from the byte sequence, either with a
//! uniform size (1/2/4/8, last group possibly short) or with an explicit
//! size pattern such as `1,1,6` (any trailing bytes collect into a final
//! group). Endianness is applied within each group after chunking, never
//! across the whole stream; per-group integer values then read the
//! endian-applied bytes most-significant-first.

pub mod chunk;
pub mod decode;
pub mod error;

pub use chunk::{
    GroupSpec, apply_endianness, chunk_custom, chunk_uniform, chunk_with_spec,
    parse_sizes_pattern,
};
pub use decode::{GroupedInts, grouped_hex, grouped_ints};
pub use error::GroupError;
