use clap::Parser;
use julian_day::REFERENCE_RUN_LENGTH;

/// Converts consecutive Julian Day Numbers to Gregorian dates and back,
/// printing `<day> - <year>-<month>-<day> - <roundtrip>` for each.
#[derive(Parser)]
#[command(name = "jdn-roundtrip", version, about = "Round-trip check for Julian Day Number conversion")]
pub struct Cli {
    /// First day number of the run.
    #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
    pub start: i64,

    /// Number of consecutive day numbers to check.
    #[arg(short = 'n', long, default_value_t = REFERENCE_RUN_LENGTH)]
    pub count: u64,

    /// Only verify; do not print one line per day number.
    #[arg(short, long)]
    pub quiet: bool,

    /// Evaluate conversions on all cores (output order is unchanged).
    #[arg(short, long)]
    pub parallel: bool,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
