//! hexlens core library for byte-level value inspection.
//!
//! This crate implements the pure conversion pipeline used by the CLI:
//! input parsers feed the inspection layer, which drives the converters
//! (hex/numeric/text/group) and aggregates results into a deterministic
//! report. All conversions are byte-oriented and side-effect free; the
//! crate performs no I/O and never reads a clock. Integer representation
//! conventions (two's/one's complement, sign-magnitude) are captured in
//! `numeric` so the inspection layer stays minimal.
//!
//! Invariants:
//! - Reports are deterministic: identical input and options produce an
//!   identical report (`generated_at` is stamped by the caller).
//! - Hex round-trips are lossless: parsing then rendering yields the
//!   canonical spaced uppercase form.
//! - Integer round-trips are lossless for a matching width,
//!   representation and endianness.
//! - Endianness is applied within each group, never across the stream.
//!
//! Version française (résumé):
//! Cette crate fournit le cœur de conversion pur : analyse de l'entrée ->
//! convertisseurs (hex/numérique/texte/groupes) -> rapport déterministe.
//! Aucune E/S, aucune horloge. Garanties : allers-retours hex et entiers
//! sans perte, boutisme appliqué à l'intérieur de chaque groupe.
//!
//! # Examples
//! ```
//! use hexlens_core::{InspectOptions, inspect_hex};
//!
//! let report = inspect_hex("0x00FF", &InspectOptions::default())?;
//! assert_eq!(report.bytes_hex, "00 FF");
//! assert_eq!(report.input.bytes, 2);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use serde::{Deserialize, Serialize};

pub mod group;
pub mod hex;
mod inspect;
pub mod numeric;
pub mod text;

pub use inspect::{InspectError, InspectOptions, inspect_hex, inspect_number, inspect_text};
pub use numeric::{Endianness, Representation};

/// Current inspection report schema version.
pub const INSPECTION_VERSION: u32 = 1;
/// Default timestamp used until the caller stamps the report.
pub const DEFAULT_GENERATED_AT: &str = "1970-01-01T00:00:00Z";
/// Maximum byte sequence length handled by the converters.
pub const MAX_BYTES: usize = 8;

/// Aggregated inspection report for one user input.
///
/// Optional sections are omitted from serialized output when absent.
///
/// # Examples
/// ```
/// use hexlens_core::{InspectOptions, inspect_hex};
///
/// let report = inspect_hex("48 65 6C 6C 6F", &InspectOptions::default())?;
/// assert_eq!(report.inspection_version, hexlens_core::INSPECTION_VERSION);
/// assert_eq!(report.ascii.as_deref(), Some("Hello"));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Inspection {
    /// Report schema version (not the binary version).
    pub inspection_version: u32,
    /// Tool identification metadata.
    pub tool: ToolInfo,
    /// RFC3339 timestamp representing the report generation time.
    pub generated_at: String,

    /// Input metadata.
    pub input: InputInfo,

    /// Canonical hex rendering of the byte sequence (uppercase, spaced).
    pub bytes_hex: String,
    /// Per-byte binary rendering, one `08b` string per byte.
    pub binary: Vec<String>,
    /// Grouped views (present when the input yields at least one group).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub groups: Option<GroupView>,
    /// Whole-buffer alternative signed readings (hex input only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub whole: Option<WholeIntView>,
    /// ASCII rendering with `.` placeholders, when non-empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ascii: Option<String>,
    /// Scalar view of the converted value (number input only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scalar: Option<ScalarView>,
}

/// Tool metadata embedded in reports.
///
/// # Examples
/// ```
/// use hexlens_core::ToolInfo;
///
/// let tool = ToolInfo {
///     name: "hexlens".to_string(),
///     version: "0.1.0".to_string(),
/// };
/// assert_eq!(tool.name, "hexlens");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolInfo {
    /// Tool name (e.g., "hexlens").
    pub name: String,
    /// Tool version (semver).
    pub version: String,
}

/// Input metadata embedded in reports.
///
/// # Examples
/// ```
/// use hexlens_core::{InputInfo, InputKind};
///
/// let input = InputInfo {
///     kind: InputKind::Hex,
///     raw: "E8 08".to_string(),
///     bytes: 2,
/// };
/// assert_eq!(input.bytes, 2);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputInfo {
    /// Kind of input the report was built from.
    pub kind: InputKind,
    /// Raw input as provided by the user.
    pub raw: String,
    /// Length of the decoded byte sequence.
    pub bytes: u64,
}

/// Kind of user input an inspection was built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputKind {
    Hex,
    Number,
    Text,
}

/// Grouped renderings of the byte sequence.
///
/// Groups are formed left to right; endianness is applied within each
/// group. The unsigned and two's-complement values read the endian-applied
/// group bytes most-significant-first.
///
/// # Examples
/// ```
/// use hexlens_core::GroupView;
///
/// let view = GroupView {
///     hex: vec!["00 FF".to_string()],
///     binary: Vec::new(),
///     text: Vec::new(),
///     unsigned: vec![255],
///     signed: vec![255],
/// };
/// assert_eq!(view.unsigned, vec![255]);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupView {
    /// Spaced uppercase hex per group.
    pub hex: Vec<String>,
    /// Per-group binary rendering (text input only).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub binary: Vec<String>,
    /// Per-group ASCII rendering (text input only).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub text: Vec<String>,
    /// Unsigned value per group.
    pub unsigned: Vec<u64>,
    /// Two's-complement value per group.
    pub signed: Vec<i64>,
}

/// Whole-buffer readings in the alternative signed representations.
///
/// Both values read the full sequence most-significant-byte-first.
///
/// # Examples
/// ```
/// use hexlens_core::WholeIntView;
///
/// let whole = WholeIntView {
///     ones_complement: -1,
///     sign_magnitude: -126,
/// };
/// assert_eq!(whole.ones_complement, -1);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WholeIntView {
    /// One's-complement reading of the whole sequence.
    pub ones_complement: i64,
    /// Sign-magnitude reading of the whole sequence.
    pub sign_magnitude: i64,
}

/// Scalar view of a converted number.
///
/// # Examples
/// ```
/// use hexlens_core::ScalarView;
///
/// let scalar = ScalarView {
///     hex: "0x4d2".to_string(),
///     dec: 1234,
/// };
/// assert_eq!(scalar.dec, 1234);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScalarView {
    /// Value masked to the requested width, rendered as `0x…`.
    pub hex: String,
    /// Value as entered, in decimal.
    pub dec: i128,
}
