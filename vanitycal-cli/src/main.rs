mod logging;

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use jiff::civil::Date;
use tracing::info;
use vanitycal::config::CalendarConfig;
use vanitycal::{AnchorDate, Clock};

#[derive(Parser)]
#[command(
    name = "vanitycal",
    about = "Anniversaries, countdowns and yearly reminders as an iCalendar feed",
    version
)]
struct Cli {
    /// Path to the TOML config file ('-' for stdin)
    #[arg(short, long, default_value = "-")]
    config: PathBuf,

    /// Path to the output file ('-' for stdout)
    #[arg(short, long, default_value = "-")]
    output: PathBuf,

    /// Pretend today is this date (YYYY-MM-DD) instead of reading the clock
    #[arg(long, value_parser = parse_today)]
    today: Option<Date>,

    /// Output the occurrence list as JSON instead of iCalendar
    #[arg(long)]
    json: bool,

    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn parse_today(s: &str) -> Result<Date, String> {
    match AnchorDate::parse_date(s) {
        Ok(AnchorDate::Full(date)) => Ok(date),
        Ok(AnchorDate::MonthDay { .. }) => Err(format!("'{s}' is not a full date")),
        Err(e) => Err(e.to_string()),
    }
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let input = read_input(&cli.config).context("loading config")?;
    let config = CalendarConfig::from_toml_str(&input).context("loading config")?;
    let calendar = config.validate().context("invalid config")?;

    // Sampled once: every past/future decision in this run uses it.
    let clock = match cli.today {
        Some(date) => Clock::on_date(date)?,
        None => Clock::system(),
    };
    info!(
        events = calendar.events().len(),
        today = %clock.today(),
        "generating calendar"
    );

    let rendered = if cli.json {
        let occurrences = calendar
            .occurrences(&clock)
            .context("generating calendar")?;
        let mut json =
            serde_json::to_string_pretty(&occurrences).context("serializing occurrences")?;
        json.push('\n');
        json
    } else {
        calendar.to_ics(&clock).context("generating calendar")?
    };

    write_output(&cli.output, rendered.as_bytes()).context("writing output")?;
    info!(bytes = rendered.len(), "calendar written");
    Ok(())
}

fn is_stdio(path: &Path) -> bool {
    path.as_os_str() == "-"
}

fn read_input(path: &Path) -> Result<String> {
    if is_stdio(path) {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
    }
}

fn write_output(path: &Path, bytes: &[u8]) -> Result<()> {
    if is_stdio(path) {
        let mut stdout = io::stdout().lock();
        stdout.write_all(bytes)?;
        stdout.flush()?;
    } else {
        fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))?;
    }
    Ok(())
}
