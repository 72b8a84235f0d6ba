use clap::Parser;
use ferrous_stub_application::use_cases::CacheReport;
use ferrous_stub_domain::{CliOverrides, Config};
use tracing::{info, warn};

mod bootstrap;
mod di;

const DEFAULT_HOSTNAME: &str = "www.google.com";

#[derive(Parser)]
#[command(name = "ferrous-stub")]
#[command(version = "0.1.0")]
#[command(about = "Ferrous Stub - Caching IPv4 stub resolver over raw UDP")]
struct Cli {
    /// Hostnames to resolve
    #[arg(value_name = "HOSTNAME")]
    hostnames: Vec<String>,

    /// Skip the cache lookup (results are still cached)
    #[arg(long)]
    no_cache: bool,

    /// Run without a cache at all
    #[arg(long)]
    disable_cache: bool,

    /// Resolve every hostname this many times
    #[arg(short = 'r', long, default_value_t = 1)]
    repeat: u32,

    /// Upstream DNS server IP
    #[arg(short = 's', long)]
    server: Option<String>,

    /// Upstream DNS server port
    #[arg(short = 'p', long)]
    port: Option<u16>,

    /// Per-query timeout in milliseconds
    #[arg(short = 't', long)]
    timeout_ms: Option<u64>,

    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Print the cache contents and counters when done
    #[arg(long)]
    show_cache: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        server: cli.server.clone(),
        port: cli.port,
        query_timeout_ms: cli.timeout_ms,
        disable_cache: cli.disable_cache,
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    info!("Starting Ferrous Stub v{}", env!("CARGO_PKG_VERSION"));
    match cli.config.clone().or_else(Config::get_config_path) {
        Some(path) => info!(path = %path, "Configuration loaded"),
        None => info!("Using default configuration"),
    }

    let dns_services = di::DnsServices::new(&config)?;
    let use_cases = di::UseCases::new(&dns_services);

    let hostnames = if cli.hostnames.is_empty() {
        vec![DEFAULT_HOSTNAME.to_string()]
    } else {
        cli.hostnames
    };

    for round in 1..=cli.repeat.max(1) {
        for hostname in &hostnames {
            let result = use_cases
                .resolve_hostname
                .execute(hostname, !cli.no_cache)
                .await;

            let label = if cli.repeat > 1 {
                format!("[{}] {}", round, hostname)
            } else {
                hostname.clone()
            };

            match result {
                Some(addresses) => println!("{}: {}", label, addresses.join(", ")),
                None => println!("{}: <unresolved>", label),
            }
        }
    }

    if cli.show_cache {
        match &use_cases.get_cache_entries {
            Some(get_entries) => print_cache(&get_entries.execute()),
            None => warn!("--show-cache given but the cache is disabled"),
        }
    }

    Ok(())
}

fn print_cache(report: &CacheReport) {
    println!();
    println!("cache: {} entries", report.metrics.total_entries);
    for entry in &report.entries {
        let addresses: Vec<String> = entry.addresses.iter().map(|ip| ip.to_string()).collect();
        match entry.remaining_ttl {
            Some(ttl) => println!(
                "  {} -> {} (expires in {}s)",
                entry.hostname,
                addresses.join(", "),
                ttl.as_secs()
            ),
            None => println!("  {} -> {} (expired)", entry.hostname, addresses.join(", ")),
        }
    }
    println!(
        "hits={} misses={} insertions={} expirations={} evictions={} hit_rate={:.1}%",
        report.metrics.hits,
        report.metrics.misses,
        report.metrics.insertions,
        report.metrics.expirations,
        report.metrics.evictions,
        report.metrics.hit_rate() * 100.0
    );
}
