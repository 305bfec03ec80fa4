use clap::Parser;
use ferrous_lookup_application::use_cases::LookupUseCase;
use ferrous_lookup_domain::{CliOverrides, Config, DecodeMode, LookupOutcome};
use ferrous_lookup_infrastructure::dns::{create_transport, WireCodec};
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{debug, info};

mod bootstrap;
mod output;

#[derive(Parser, Debug)]
#[command(name = "ferrous-lookup")]
#[command(version)]
#[command(about = "Ferrous Lookup - single DNS query over UDP (A for names, PTR for IPv4 addresses)")]
struct Cli {
    /// Domain name or IPv4 address to look up
    #[arg(value_name = "DOMAIN | IP")]
    target: String,

    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Nameserver address (IP or IP:PORT)
    #[arg(short = 's', long, value_name = "ADDR")]
    server: Option<String>,

    /// Receive timeout in milliseconds
    #[arg(short = 't', long, value_name = "MS")]
    timeout_ms: Option<u64>,

    /// Response decoder (structured, heuristic)
    #[arg(long)]
    mode: Option<DecodeMode>,

    /// Do not print hex dumps of the query and response
    #[arg(long)]
    no_dump: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        nameserver: cli.server.clone(),
        timeout_ms: cli.timeout_ms,
        decode_mode: cli.mode,
        hex_dump: cli.no_dump.then_some(false),
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    debug!(
        resolver = %config.resolver.address,
        port = config.resolver.port,
        timeout_ms = config.resolver.timeout_ms,
        mode = %config.decoder.mode,
        "Configuration loaded"
    );

    let outcome = run(&cli.target, &config).await?;

    Ok(if outcome.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

async fn run(target: &str, config: &Config) -> anyhow::Result<LookupOutcome> {
    let transport = create_transport(config)?;
    let use_case = LookupUseCase::new(
        Arc::new(WireCodec::new(config.decoder.mode)),
        Arc::new(transport),
    );

    let query = use_case.prepare(target)?;
    if config.output.hex_dump {
        print!("\n{}", output::report::render_dump("DNS Query", query.wire_bytes()));
    }

    let exchange = use_case.exchange(&query).await?;
    if config.output.hex_dump {
        print!("{}", output::report::render_dump("DNS Response", &exchange.response));
    }

    let outcome = use_case.decode(&query, &exchange)?;

    print!(
        "{}",
        output::report::render_outcome(
            query.original_input(),
            query.record_type(),
            exchange.server,
            &outcome
        )
    );
    print!(
        "{}",
        output::report::render_timing(exchange.server, exchange.elapsed, &outcome)
    );

    info!(
        input = %query.original_input(),
        status = outcome.status(),
        records = outcome.records().len(),
        elapsed_ms = exchange.elapsed.as_millis() as u64,
        "Lookup finished"
    );

    Ok(outcome)
}
