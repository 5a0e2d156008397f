use std::process::ExitCode;
use std::time::Duration;

use clap::{CommandFactory, FromArgMatches, Parser, ValueEnum};

use uk_bin_collection::council_registry::CouncilRegistry;
use uk_bin_collection::{config, format, model, Error, FetchConfig};

#[derive(Parser, Debug)]
#[command(
    name = "uk-bin-collection",
    version,
    about = "Get UK bin collection data",
    long_about = "Fetch a council's bin collection page for an address and print the \
        collection schedule it lists.\n\n\
        Examples:\n  \
        uk-bin-collection StockportBoroughCouncil \"https://myaccount.stockport.gov.uk/bin-collections/show/100011460157\"\n  \
        uk-bin-collection --format markdown StockportBoroughCouncil <URL>\n  \
        uk-bin-collection --list"
)]
struct Cli {
    /// The name of the council
    #[arg(required_unless_present = "list")]
    council: Option<String>,

    /// The data URL
    #[arg(required_unless_present = "list")]
    url: Option<String>,

    #[arg(long, help = "List the available councils and exit", conflicts_with_all = ["council", "url"])]
    list: bool,

    #[arg(
        long,
        default_value = "json",
        help = "Output format",
        long_help = "Output format.\n  json     — JSON object in page order (default)\n  markdown — Human-readable markdown"
    )]
    format: OutputFormat,

    #[arg(
        long,
        value_name = "SECS",
        value_parser = parse_timeout,
        help = "Request timeout in seconds (default 30, or UKBC_TIMEOUT_SECS)"
    )]
    timeout: Option<Duration>,

    #[arg(
        long,
        default_value = "warn",
        help = "Log level when RUST_LOG is not set (error, warn, info, debug, trace)"
    )]
    log_level: String,
}

#[derive(ValueEnum, Clone, Debug)]
enum OutputFormat {
    Json,
    Markdown,
}

fn parse_timeout(raw: &str) -> Result<Duration, String> {
    config::parse_timeout_secs(raw).ok_or_else(|| "expected a whole number of seconds > 0".to_string())
}

/// Help footer naming every council, so users don't have to guess
fn councils_help() -> String {
    match CouncilRegistry::builtin() {
        Ok(registry) => format!("Councils: {}", registry.list().join(", ")),
        Err(e) => format!("Councils unavailable: {e}"),
    }
}

fn init_tracing(level: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    let matches = Cli::command().after_help(councils_help()).get_matches();
    let cli = match Cli::from_arg_matches(&matches) {
        Ok(cli) => cli,
        Err(e) => e.exit(),
    };

    init_tracing(&cli.log_level);

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            match e.downcast_ref::<Error>() {
                Some(err) => eprintln!("Error [{}]: {}", err.kind(), err.chain_message()),
                None => eprintln!("Error: {e:#}"),
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    if cli.list {
        let registry = CouncilRegistry::builtin()?;
        let listing = model::CouncilListing {
            councils: registry.descriptors(),
        };
        print_output(&cli.format, &listing, |l| format::councils(&l.councils))?;
        return Ok(ExitCode::SUCCESS);
    }

    let (Some(council), Some(url)) = (cli.council, cli.url) else {
        anyhow::bail!("Both COUNCIL and URL are required");
    };

    let mut fetch_config = FetchConfig::from_env();
    if let Some(timeout) = cli.timeout {
        fetch_config = fetch_config.with_timeout(timeout);
    }

    let report = uk_bin_collection::collect(&council, &url, &fetch_config).await?;
    print_output(&cli.format, &report, |r| format::report(&council, r))?;
    Ok(ExitCode::SUCCESS)
}

/// Print output in the requested format
fn print_output<T: serde::Serialize>(
    fmt: &OutputFormat,
    value: &T,
    markdown_fn: impl FnOnce(&T) -> String,
) -> anyhow::Result<()> {
    match fmt {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(value)?);
        }
        OutputFormat::Markdown => {
            print!("{}", markdown_fn(value));
        }
    }
    Ok(())
}
