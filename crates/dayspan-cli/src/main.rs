//! Command-line front end for the dayspan library.

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use dayspan::Direction;

#[derive(Parser)]
#[command(name = "dayspan", version, about = "Timezone-aware calendar-day arithmetic")]
struct Cli {
    /// IANA timezone identifier (defaults to the detected system timezone)
    #[arg(long, global = true)]
    timezone: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print today's date as observed in the timezone
    Today,
    /// Print the calendar date immediately before or after DATE
    Navigate {
        /// Date in YYYY-MM-DD form
        date: String,
        /// "prev" or "next"
        direction: String,
    },
    /// Print the ISO week (Monday through Sunday) containing DATE
    Week {
        /// Date in YYYY-MM-DD form
        date: String,
    },
    /// Print the first and last day of a month
    Month {
        year: i32,
        /// 1-indexed month
        month: u32,
    },
    /// Print the 42-cell month grid as JSON
    Grid {
        year: i32,
        /// 1-indexed month
        month: u32,
    },
    /// Print a formatted date
    Format {
        /// Date in YYYY-MM-DD form
        date: String,
        #[arg(long, value_enum, default_value_t = Style::Long)]
        style: Style,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Style {
    Long,
    Short,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // An explicit flag is used verbatim; only the flagless case goes
    // through stored-preference/ambient resolution.
    let tz = match cli.timezone {
        Some(tz) => tz,
        None => dayspan::resolve_timezone(None),
    };

    match cli.command {
        Command::Today => {
            println!("{}", dayspan::today(&tz)?);
        }
        Command::Navigate { date, direction } => {
            let direction: Direction = direction.parse()?;
            println!("{}", dayspan::navigate_date(&date, direction, &tz)?);
        }
        Command::Week { date } => {
            let range = dayspan::week_range(&date, &tz)?;
            println!("{} - {}", range.start, range.end);
            println!(
                "{}",
                dayspan::format_week_range(&range.start.to_string(), &tz)?
            );
        }
        Command::Month { year, month } => {
            let start = dayspan::month_start(year, month, &tz)?;
            let end = dayspan::month_end(year, month, &tz)?;
            println!("{start} - {end}");
        }
        Command::Grid { year, month } => {
            let grid = dayspan::calendar_grid(year, month, &tz)?;
            println!("{}", serde_json::to_string_pretty(&grid)?);
        }
        Command::Format { date, style } => {
            let text = match style {
                Style::Long => dayspan::format_long(&date, &tz)?,
                Style::Short => dayspan::format_short(&date, &tz)?,
            };
            println!("{text}");
        }
    }

    Ok(())
}
