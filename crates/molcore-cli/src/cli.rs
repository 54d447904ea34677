use clap::{Args, Parser, Subcommand, ValueEnum};
use molcore::{AngleUnit, AtomicIdentity, LengthUnit, Scalar};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "molcore CLI - Inspect the numeric constants, unit conversions and atomic-number encoding shared by the molecular-modeling toolkit.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the unit-conversion constant table.
    Constants(ConstantsArgs),
    /// Convert a length between ångström and bohr.
    Convert(ConvertArgs),
    /// Convert an angle between degrees and radians.
    Angle(AngleArgs),
    /// Classify atomic numbers as real elements, custom particles or invalid.
    Element(ElementArgs),
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precision {
    /// 64-bit values (the source of truth).
    Double,
    /// 32-bit values rounded from the double values.
    Single,
    /// Values in the configured scalar precision.
    Scalar,
    /// All three precisions side by side.
    All,
}

/// Arguments for the `constants` subcommand.
#[derive(Args, Debug)]
pub struct ConstantsArgs {
    /// Which precision variant(s) to print.
    #[arg(short, long, value_enum, default_value_t = Precision::All)]
    pub precision: Precision,
}

/// Arguments for the `convert` subcommand.
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// The length to convert.
    #[arg(allow_negative_numbers = true)]
    pub value: Scalar,

    /// Unit of the input value (e.g., 'angstrom', 'bohr', 'au').
    #[arg(short, long, value_name = "UNIT", default_value = "angstrom")]
    pub from: LengthUnit,

    /// Unit to convert to.
    #[arg(short, long, value_name = "UNIT", default_value = "bohr")]
    pub to: LengthUnit,
}

/// Arguments for the `angle` subcommand.
#[derive(Args, Debug)]
pub struct AngleArgs {
    /// The angle to convert.
    #[arg(allow_negative_numbers = true)]
    pub value: Scalar,

    /// Unit of the input value (e.g., 'deg', 'rad').
    #[arg(short, long, value_name = "UNIT", default_value = "degree")]
    pub from: AngleUnit,

    /// Unit to convert to.
    #[arg(short, long, value_name = "UNIT", default_value = "radian")]
    pub to: AngleUnit,
}

/// Arguments for the `element` subcommand.
#[derive(Args, Debug)]
pub struct ElementArgs {
    /// One or more atomic numbers (0-255), or 'custom:<offset>' / 'invalid'.
    #[arg(required = true, num_args = 1.., value_name = "N")]
    pub identities: Vec<AtomicIdentity>,
}
