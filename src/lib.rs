mod date;
mod date_range;
mod format;

use anyhow::Result;
use chrono::NaiveTime;
use clap::{error::ErrorKind, Parser};
use std::{ffi::OsString, io};

use crate::{date_range::DateRange, format::convert_format};

const DEFAULT_START: &str = "2016-01-01";
const DEFAULT_END: &str = "2016-01-31";
const DEFAULT_FORMAT: &str = "%Y-%m-%d";

const EXAMPLES: &str = "\
Examples:
  makedatelist
  makedatelist 2024-01-01 2024-01-03
  makedatelist -f \"%Y/%m/%d\" 2024-01-01 2024-01-03
  makedatelist 2024-01-01 2024-01-03 -f \"%B %d, %Y\"";

#[derive(Parser, Debug)]
#[command(
    name = "makedatelist",
    version,
    about = "Make a list of all dates between two dates, one date per line.",
    override_usage = "makedatelist [start_date] [end_date] [-f|--format FMT]\n       makedatelist [-f|--format FMT] [start_date] [end_date]",
    after_help = EXAMPLES
)]
struct Cli {
    /// Start date, in any supported format (YYYY-MM-DD, YYYYMMDD, MM/DD/YYYY, ...)
    #[arg(default_value = DEFAULT_START)]
    start_date: String,

    /// End date, excluded from the list, same formats as start_date
    #[arg(default_value = DEFAULT_END)]
    end_date: String,

    /// Output format, strftime-style
    #[arg(short, long, default_value = DEFAULT_FORMAT)]
    format: String,

    // Extra positional arguments are accepted and ignored.
    #[arg(hide = true)]
    #[allow(dead_code)]
    rest: Vec<String>,
}

pub fn run<I, T, WStd, WErr>(args: I, mut std: WStd, mut err: WErr) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    WStd: io::Write,
    WErr: io::Write,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        // Help and version go to stderr so the date list stays the only thing
        // ever written to stdout.
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            write!(err, "{e}")?;
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    let range = DateRange::new(&cli.start_date, &cli.end_date)?;
    let pattern = convert_format(&cli.format);
    let midnight = NaiveTime::from_hms_opt(0, 0, 0).unwrap();
    for day in range.days() {
        writeln!(std, "{}", day.and_time(midnight).format(&pattern))?;
    }
    Ok(())
}
