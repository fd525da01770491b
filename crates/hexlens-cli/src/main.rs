use std::fs;
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Args, Parser, Subcommand, ValueEnum};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use hexlens_core::group::{GroupSpec, parse_sizes_pattern};
use hexlens_core::numeric::NumericError;
use hexlens_core::{
    Endianness, InputKind, InspectError, InspectOptions, Inspection, Representation, inspect_hex,
    inspect_number, inspect_text,
};

#[derive(Parser, Debug)]
#[command(name = "hexlens")]
#[command(version)]
#[command(long_version = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("HEXLENS_BUILD_COMMIT"),
    " ",
    env!("HEXLENS_BUILD_DATE"),
    ")"
))]
#[command(
    about = "Hex bytes <-> integer/text converter and inspector.",
    long_about = None,
    after_help = "Examples:\n  hexlens hex \"E8 08 B0 04\" --group 2 --endian little\n  hexlens number 0x4D2 --width 2 --repr twos --endian big\n  hexlens text \"CAN bus\" --group custom --groups \"1,1,6\""
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Inspect a sequence of hex bytes.
    Hex {
        /// Hex like "E8 08 B0 04" or "E808B004"; read from stdin when omitted
        hex: Option<String>,

        #[command(flatten)]
        grouping: GroupingArgs,

        #[command(flatten)]
        output: OutputArgs,
    },
    /// Convert a number to bytes and views.
    #[command(alias = "num")]
    Number {
        /// Number (decimal or 0x… / 0o… / 0b…)
        #[arg(allow_hyphen_values = true)]
        value: String,

        /// Byte width of the encoding
        #[arg(long, default_value_t = 4, value_parser = clap::value_parser!(u8).range(1..=8))]
        width: u8,

        /// Numeric representation
        #[arg(long, value_enum, default_value = "unsigned")]
        repr: ReprArg,

        /// Byte order of the encoding
        #[arg(long, value_enum, default_value = "little")]
        endian: EndianArg,

        #[command(flatten)]
        output: OutputArgs,
    },
    /// Inspect a text string as bytes.
    Text {
        /// Text to inspect (encoded as Latin-1)
        text: String,

        #[command(flatten)]
        grouping: GroupingArgs,

        #[command(flatten)]
        output: OutputArgs,
    },
}

#[derive(Args, Debug)]
struct GroupingArgs {
    /// Apply endianness within each group
    #[arg(long, value_enum, default_value = "little")]
    endian: EndianArg,

    /// Group size for grouped views
    #[arg(long, value_enum, default_value = "1")]
    group: GroupArg,

    /// Custom pattern for --group=custom, e.g. "1,1,6"
    #[arg(long, default_value = "")]
    groups: String,
}

#[derive(Args, Debug)]
struct OutputArgs {
    /// Emit the report as compact JSON
    #[arg(long)]
    json: bool,

    /// Emit the report as pretty-printed JSON
    #[arg(long, conflicts_with = "json")]
    pretty: bool,

    /// Write the rendering to a file instead of stdout
    #[arg(short = 'o', long = "out")]
    out: Option<PathBuf>,

    /// Suppress non-error output
    #[arg(long)]
    quiet: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum EndianArg {
    Little,
    Big,
}

impl From<EndianArg> for Endianness {
    fn from(arg: EndianArg) -> Self {
        match arg {
            EndianArg::Little => Endianness::Little,
            EndianArg::Big => Endianness::Big,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ReprArg {
    Unsigned,
    Twos,
    Ones,
    Signmag,
}

impl From<ReprArg> for Representation {
    fn from(arg: ReprArg) -> Self {
        match arg {
            ReprArg::Unsigned => Representation::Unsigned,
            ReprArg::Twos => Representation::TwosComplement,
            ReprArg::Ones => Representation::OnesComplement,
            ReprArg::Signmag => Representation::SignMagnitude,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum GroupArg {
    #[value(name = "1")]
    One,
    #[value(name = "2")]
    Two,
    #[value(name = "4")]
    Four,
    #[value(name = "8")]
    Eight,
    Custom,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Hex {
            hex,
            grouping,
            output,
        } => cmd_hex(hex, &grouping, &output),
        Commands::Number {
            value,
            width,
            repr,
            endian,
            output,
        } => cmd_number(&value, width, repr, endian, &output),
        Commands::Text {
            text,
            grouping,
            output,
        } => cmd_text(&text, &grouping, &output),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err.message);
            if let Some(hint) = err.hint {
                eprintln!("hint: {}", hint);
            }
            ExitCode::from(2)
        }
    }
}

#[derive(Debug)]
struct CliError {
    message: String,
    hint: Option<String>,
}

impl CliError {
    fn new(message: impl Into<String>, hint: Option<String>) -> Self {
        Self {
            message: message.into(),
            hint,
        }
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        CliError::new(err.to_string(), None)
    }
}

fn cmd_hex(
    hex: Option<String>,
    grouping: &GroupingArgs,
    output: &OutputArgs,
) -> Result<(), CliError> {
    let raw = match hex {
        Some(hex) => hex,
        None => read_stdin()?,
    };
    let options = inspect_options(grouping)?;
    let mut report = inspect_hex(&raw, &options).map_err(describe)?;
    stamp(&mut report);
    render(&report, output)
}

fn cmd_number(
    value: &str,
    width: u8,
    repr: ReprArg,
    endian: EndianArg,
    output: &OutputArgs,
) -> Result<(), CliError> {
    let mut report =
        inspect_number(value, width as usize, repr.into(), endian.into()).map_err(describe)?;
    stamp(&mut report);
    render(&report, output)
}

fn cmd_text(text: &str, grouping: &GroupingArgs, output: &OutputArgs) -> Result<(), CliError> {
    let options = inspect_options(grouping)?;
    let mut report = inspect_text(text, &options).map_err(describe)?;
    stamp(&mut report);
    render(&report, output)
}

fn inspect_options(grouping: &GroupingArgs) -> Result<InspectOptions, CliError> {
    let group = match grouping.group {
        GroupArg::One => GroupSpec::Uniform(1),
        GroupArg::Two => GroupSpec::Uniform(2),
        GroupArg::Four => GroupSpec::Uniform(4),
        GroupArg::Eight => GroupSpec::Uniform(8),
        GroupArg::Custom => {
            let sizes = parse_sizes_pattern(&grouping.groups).map_err(|err| {
                CliError::new(
                    err.to_string(),
                    Some("pass sizes like --groups \"1,1,6\"".to_string()),
                )
            })?;
            GroupSpec::Custom(sizes)
        }
    };
    Ok(InspectOptions {
        endian: grouping.endian.into(),
        group,
    })
}

fn describe(err: InspectError) -> CliError {
    let hint = match &err {
        InspectError::Hex(_) => {
            Some("expected hex like \"E8 08 B0 04\" or \"E808B004\"".to_string())
        }
        InspectError::Numeric(NumericError::Overflow { .. }) => {
            Some("reduce the value or increase --width".to_string())
        }
        InspectError::Numeric(NumericError::InvalidLiteral { .. }) => {
            Some("enter a number like 1234 or 0x4D2".to_string())
        }
        InspectError::Numeric(_) => None,
        InspectError::Group(_) => {
            Some("use --group 1|2|4|8, or --group custom with --groups \"1,1,6\"".to_string())
        }
    };
    CliError::new(err.to_string(), hint)
}

fn stamp(report: &mut Inspection) {
    report.generated_at = OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_else(|_| hexlens_core::DEFAULT_GENERATED_AT.to_string());
}

fn render(report: &Inspection, output: &OutputArgs) -> Result<(), CliError> {
    let rendering = if output.json || output.pretty {
        serialize_report(report, output.pretty)?
    } else {
        render_text(report)
    };

    match &output.out {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent).with_context(|| {
                        format!("Failed to create output directory: {}", parent.display())
                    })?;
                }
            }
            fs::write(path, rendering)
                .with_context(|| format!("Failed to write report: {}", path.display()))?;
            if !output.quiet {
                eprintln!("OK: report written -> {}", path.display());
            }
        }
        None => print!("{}", rendering),
    }
    Ok(())
}

fn serialize_report(report: &Inspection, pretty: bool) -> Result<String, CliError> {
    if pretty {
        serde_json::to_string_pretty(report)
            .context("JSON serialization failed")
            .map_err(Into::into)
    } else {
        serde_json::to_string(report)
            .context("JSON serialization failed")
            .map_err(Into::into)
    }
}

fn render_text(report: &Inspection) -> String {
    let mut lines = Vec::new();
    lines.push(format!("Bytes: {}", report.bytes_hex));
    lines.push(format!("Binary: {}", report.binary.join(" ")));

    if let Some(groups) = &report.groups {
        lines.push(format!("Hex groups: {}", groups.hex.join(" ")));
        if !groups.binary.is_empty() {
            lines.push(format!("Bin groups: {}", groups.binary.join(" ")));
        }
        if !groups.text.is_empty() {
            lines.push(format!("Text groups: {}", groups.text.join(" ")));
        }
        lines.push(format!("Unsigned: {}", join(&groups.unsigned)));
        lines.push(format!("Signed 2's: {}", join(&groups.signed)));
    }

    if let Some(whole) = &report.whole {
        lines.push(format!("Signed 1's (whole): {}", whole.ones_complement));
        lines.push(format!("Sign-magnitude (whole): {}", whole.sign_magnitude));
    }

    if let Some(ascii) = &report.ascii {
        lines.push(format!("ASCII: {}", ascii));
    }

    if let Some(scalar) = &report.scalar {
        lines.push(format!("Scalar hex: {}", scalar.hex));
        lines.push(format!("Scalar dec: {}", scalar.dec));
    }

    if report.input.kind == InputKind::Hex {
        lines.push(format!("Length: {}", report.input.bytes));
    }

    let mut text = lines.join("\n");
    text.push('\n');
    text
}

fn join<T: ToString>(values: &[T]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

fn read_stdin() -> Result<String, CliError> {
    let mut buf = String::new();
    std::io::stdin()
        .read_to_string(&mut buf)
        .context("failed to read hex input from stdin")?;
    Ok(buf)
}
