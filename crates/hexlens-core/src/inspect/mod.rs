//! Inspection report assembly.
//!
//! One entry point per input kind (hex string, integer literal, text).
//! Each parses the input, drives the converters and aggregates the views
//! into an `Inspection`. Whole-buffer alternative readings always use
//! most-significant-byte-first order; the endianness option only affects
//! grouped views.

use thiserror::Error;

use crate::group::{
    GroupError, GroupSpec, apply_endianness, chunk_with_spec, grouped_hex, grouped_ints,
};
use crate::hex::{HexError, bytes_to_binary, bytes_to_hex, parse_hex_bytes};
use crate::numeric::{
    Endianness, NumericError, Representation, bytes_to_int, int_to_bytes, parse_int_literal,
};
use crate::text::{ascii_runs, encode_latin1};
use crate::{
    DEFAULT_GENERATED_AT, GroupView, INSPECTION_VERSION, InputInfo, InputKind, Inspection,
    ScalarView, ToolInfo, WholeIntView,
};

#[derive(Debug, Error)]
pub enum InspectError {
    #[error("hex error: {0}")]
    Hex(#[from] HexError),
    #[error("numeric error: {0}")]
    Numeric(#[from] NumericError),
    #[error("group error: {0}")]
    Group(#[from] GroupError),
}

/// Options shared by the hex and text inspections.
#[derive(Debug, Clone, Default)]
pub struct InspectOptions {
    /// Byte order applied within each group.
    pub endian: Endianness,
    /// How the sequence is split into groups.
    pub group: GroupSpec,
}

/// Inspect a hex byte string.
///
/// # Examples
/// ```
/// use hexlens_core::{InspectOptions, inspect_hex};
///
/// let report = inspect_hex("48 65 6C 6C 6F", &InspectOptions::default())?;
/// assert_eq!(report.ascii.as_deref(), Some("Hello"));
/// assert_eq!(report.groups.unwrap().unsigned.len(), 5);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn inspect_hex(input: &str, options: &InspectOptions) -> Result<Inspection, InspectError> {
    let data = parse_hex_bytes(input)?;
    let mut report = base_inspection(InputKind::Hex, input, &data);

    let hex_groups = grouped_hex(&data, &options.group, options.endian)?;
    if !hex_groups.is_empty() {
        let ints = grouped_ints(&data, &options.group, options.endian)?;
        report.groups = Some(GroupView {
            hex: hex_groups,
            binary: Vec::new(),
            text: Vec::new(),
            unsigned: ints.unsigned,
            signed: ints.signed,
        });
    }

    if !data.is_empty() {
        report.whole = Some(WholeIntView {
            ones_complement: bytes_to_int(
                &data,
                Representation::OnesComplement,
                Endianness::Big,
            )? as i64,
            sign_magnitude: bytes_to_int(&data, Representation::SignMagnitude, Endianness::Big)?
                as i64,
        });
    }

    let runs = ascii_runs(&data);
    if !runs.is_empty() {
        report.ascii = Some(runs.concat());
    }
    Ok(report)
}

/// Convert an integer literal to bytes and inspect the result.
///
/// # Examples
/// ```
/// use hexlens_core::{Endianness, Representation, inspect_number};
///
/// let report = inspect_number("0x4D2", 2, Representation::Unsigned, Endianness::Big)?;
/// assert_eq!(report.bytes_hex, "04 D2");
/// assert_eq!(report.scalar.unwrap().dec, 1234);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn inspect_number(
    literal: &str,
    width: usize,
    repr: Representation,
    endian: Endianness,
) -> Result<Inspection, InspectError> {
    let value = parse_int_literal(literal)?;
    let data = int_to_bytes(value, width, repr, endian)?;
    let mut report = base_inspection(InputKind::Number, literal, &data);

    let runs = ascii_runs(&data);
    if !runs.is_empty() {
        report.ascii = Some(runs.concat());
    }

    let mask = if width == crate::MAX_BYTES {
        u128::from(u64::MAX)
    } else {
        (1u128 << (8 * width as u32)) - 1
    };
    let masked = (value as u128) & mask;
    report.scalar = Some(ScalarView {
        hex: format!("{masked:#x}"),
        dec: value,
    });
    Ok(report)
}

/// Inspect a text string through its Latin-1 byte encoding.
///
/// # Examples
/// ```
/// use hexlens_core::{InspectOptions, inspect_text};
///
/// let report = inspect_text("Hi", &InspectOptions::default())?;
/// assert_eq!(report.bytes_hex, "48 69");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn inspect_text(text: &str, options: &InspectOptions) -> Result<Inspection, InspectError> {
    let data = encode_latin1(text);
    let mut report = base_inspection(InputKind::Text, text, &data);
    report.ascii = Some(text.to_string());

    let chunks = chunk_with_spec(&data, &options.group)?;
    let endian_chunks = apply_endianness(&chunks, options.endian);
    if !endian_chunks.is_empty() {
        let ints = grouped_ints(&data, &options.group, options.endian)?;
        report.groups = Some(GroupView {
            hex: endian_chunks.iter().map(|chunk| bytes_to_hex(chunk)).collect(),
            binary: endian_chunks
                .iter()
                .map(|chunk| bytes_to_binary(chunk).join(" "))
                .collect(),
            text: endian_chunks
                .iter()
                .map(|chunk| ascii_runs(chunk).concat())
                .collect(),
            unsigned: ints.unsigned,
            signed: ints.signed,
        });
    }
    Ok(report)
}

fn base_inspection(kind: InputKind, raw: &str, data: &[u8]) -> Inspection {
    Inspection {
        inspection_version: INSPECTION_VERSION,
        tool: ToolInfo {
            name: "hexlens".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        generated_at: DEFAULT_GENERATED_AT.to_string(),
        input: InputInfo {
            kind,
            raw: raw.to_string(),
            bytes: data.len() as u64,
        },
        bytes_hex: bytes_to_hex(data),
        binary: bytes_to_binary(data),
        groups: None,
        whole: None,
        ascii: None,
        scalar: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_inspection_fills_grouped_and_whole_views() {
        let options = InspectOptions {
            endian: Endianness::Little,
            group: GroupSpec::Uniform(2),
        };
        let report = inspect_hex("E8 08 B0 04 00 00 2C 01", &options).unwrap();

        assert_eq!(report.input.kind, InputKind::Hex);
        assert_eq!(report.input.bytes, 8);
        assert_eq!(report.bytes_hex, "E8 08 B0 04 00 00 2C 01");
        assert_eq!(report.binary[0], "11101000");

        let groups = report.groups.expect("groups");
        assert_eq!(groups.hex, vec!["08 E8", "04 B0", "00 00", "01 2C"]);
        assert_eq!(groups.unsigned, vec![2280, 1200, 0, 300]);
        assert_eq!(groups.signed, vec![2280, 1200, 0, 300]);
        assert!(groups.binary.is_empty());

        let whole = report.whole.expect("whole");
        assert_eq!(
            whole.ones_complement,
            -(0x17F74FFBFFFFD3FEi64)
        );
        assert_eq!(whole.sign_magnitude, -(0x6808B00400002C01i64));

        assert_eq!(report.ascii.as_deref(), Some(".,."));
        assert!(report.scalar.is_none());
    }

    #[test]
    fn empty_hex_input_has_no_optional_sections() {
        let report = inspect_hex("", &InspectOptions::default()).unwrap();
        assert_eq!(report.input.bytes, 0);
        assert_eq!(report.bytes_hex, "");
        assert!(report.groups.is_none());
        assert!(report.whole.is_none());
        assert!(report.ascii.is_none());
    }

    #[test]
    fn number_inspection_masks_the_scalar_hex() {
        let report = inspect_number(
            "-1",
            2,
            Representation::TwosComplement,
            Endianness::Big,
        )
        .unwrap();
        assert_eq!(report.bytes_hex, "FF FF");
        let scalar = report.scalar.expect("scalar");
        assert_eq!(scalar.hex, "0xffff");
        assert_eq!(scalar.dec, -1);
    }

    #[test]
    fn number_inspection_rejects_overflow() {
        let err =
            inspect_number("256", 1, Representation::Unsigned, Endianness::Big).unwrap_err();
        assert!(matches!(err, InspectError::Numeric(NumericError::Overflow { .. })));
    }

    #[test]
    fn text_inspection_renders_grouped_views() {
        let options = InspectOptions {
            endian: Endianness::Big,
            group: GroupSpec::Custom(vec![1, 1, 6]),
        };
        let report = inspect_text("Hello CAN", &options).unwrap();

        assert_eq!(report.input.kind, InputKind::Text);
        assert_eq!(report.ascii.as_deref(), Some("Hello CAN"));

        let groups = report.groups.expect("groups");
        assert_eq!(groups.hex, vec!["48", "65", "6C 6C 6F 20 43 41", "4E"]);
        assert_eq!(groups.text, vec!["H", "e", "llo CA", "N"]);
        assert_eq!(groups.binary.len(), 4);
        assert_eq!(groups.unsigned[0], 0x48);
    }

    #[test]
    fn reports_are_deterministic() {
        let options = InspectOptions::default();
        let a = inspect_hex("0xDE 0xAD", &options).unwrap();
        let b = inspect_hex("0xDE 0xAD", &options).unwrap();
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }
}
