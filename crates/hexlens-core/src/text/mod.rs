//! ASCII rendering of byte sequences.
//!
//! Bytes in the printable ASCII range (0x20..=0x7E) render as themselves;
//! everything else renders as the `.` placeholder. Rendering never fails.

pub mod ascii;

pub use ascii::{ascii_runs, bytes_to_ascii, encode_latin1};
