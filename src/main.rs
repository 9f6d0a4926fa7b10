use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use gengou::{EraTable, jst, jst_zone, widen};
use jiff::Zoned;
use jiff::fmt::strtime;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "gengou",
    version,
    about = "Convert dates to the Japanese era calendar (元号)",
    args_conflicts_with_subcommands = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    #[command(flatten)]
    convert: ConvertArgs,
}

#[derive(Args)]
struct ConvertArgs {
    /// Dates to convert; defaults to today in Japan
    dates: Vec<String>,

    /// strftime format the dates are written in
    #[arg(short, long, env = "GENGOU_FORMAT", default_value = "%Y.%m.%d")]
    format: String,

    /// Show the full date, not just the era year
    #[arg(short, long)]
    date: bool,

    /// Zero-pad month and day (with --date)
    #[arg(short, long, requires = "date")]
    zeros: bool,

    /// Print full-width characters
    #[arg(short, long)]
    wide: bool,
}

#[derive(Subcommand)]
enum Command {
    /// List every era with the day it began
    Eras {
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Convert era years such as "令和2年" to Gregorian years
    Year {
        #[arg(required = true)]
        labels: Vec<String>,
    },
}

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Some(Command::Eras { json }) => run_eras(json),
        Some(Command::Year { labels }) => run_year(&labels),
        None => run_convert(&cli.convert),
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// True when there was input and none of it could be used.
fn all_failed(ok: usize, total: usize) -> bool {
    total > 0 && ok == 0
}

fn exit_status(ok: usize, total: usize) -> ExitCode {
    if all_failed(ok, total) {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

// ═══════════════════════════════════════════════════════════════════════
//  CONVERT MODE: dates → era notation
// ═══════════════════════════════════════════════════════════════════════

/// Parse `raw` with `format`. Without an offset or zone in the input, the
/// date is taken as midnight JST.
fn parse_date(format: &str, raw: &str) -> gengou::Result<Zoned> {
    let tm = strtime::parse(format, raw)?;
    if tm.offset().is_some() || tm.iana_time_zone().is_some() {
        return Ok(tm.to_zoned()?);
    }
    jst(tm.to_date()?)
}

fn render(table: &EraTable, zdt: &Zoned, args: &ConvertArgs) -> String {
    let text = match (args.date, args.zeros) {
        (false, _) => table.era_year(zdt),
        (true, false) => table.era_date(zdt),
        (true, true) => table.era_date_with_zeros(zdt),
    };
    if args.wide { widen(&text) } else { text }
}

fn run_convert(args: &ConvertArgs) -> ExitCode {
    let table = EraTable::global();

    if args.dates.is_empty() {
        let today = Zoned::now().with_time_zone(jst_zone());
        println!("{}", render(table, &today, args));
        return ExitCode::SUCCESS;
    }

    let mut ok = 0;
    for raw in &args.dates {
        match parse_date(&args.format, raw) {
            Ok(zdt) => {
                let out = render(table, &zdt, args);
                tracing::debug!(input = %raw, %zdt, output = %out, "converted");
                println!("{out}");
                ok += 1;
            }
            Err(e) => tracing::warn!(input = %raw, error = %e, "failed to parse date"),
        }
    }
    exit_status(ok, args.dates.len())
}

// ═══════════════════════════════════════════════════════════════════════
//  ERAS MODE: print the table
// ═══════════════════════════════════════════════════════════════════════

fn run_eras(json: bool) -> ExitCode {
    let table = EraTable::global();

    if json {
        let eras: Vec<_> = table.iter().collect();
        return match serde_json::to_string_pretty(&eras) {
            Ok(out) => {
                println!("{out}");
                ExitCode::SUCCESS
            }
            Err(e) => {
                tracing::error!(error = %e, "cannot serialize era table");
                ExitCode::FAILURE
            }
        };
    }

    for era in table {
        println!("{}  {}  {}", era.start_date(), era.name, era.kana);
    }
    eprintln!("\nTotal: {} eras", table.len());
    ExitCode::SUCCESS
}

// ═══════════════════════════════════════════════════════════════════════
//  YEAR MODE: era year → Gregorian year
// ═══════════════════════════════════════════════════════════════════════

fn run_year(labels: &[String]) -> ExitCode {
    let table = EraTable::global();

    let mut ok = 0;
    for label in labels {
        match table.gregorian_year(label) {
            Ok(year) => {
                println!("{year}");
                ok += 1;
            }
            Err(e) => tracing::warn!(input = %label, error = %e, "failed to convert era year"),
        }
    }
    exit_status(ok, labels.len())
}
