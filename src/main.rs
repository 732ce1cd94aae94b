use clap::Parser;
use log::LevelFilter;
use net_autoconfig::config::{parse_base_space, parse_seed};
use net_autoconfig::discovery::{discover, read_discovery_snapshot, write_discovery_snapshot};
use net_autoconfig::output::{print_fragments, print_pair_json};
use net_autoconfig::{choose_prefixes, init_logging, render_fragments, Config, Result};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "net-autoconfig")]
#[command(about = "Choose uplink/downlink IPv6 prefixes for a router node", long_about = None)]
struct Cli {
    /// Interface to probe for routers (uplink side)
    interface: Option<String>,

    /// Interface facing the sensor/control segment
    #[arg(short, long)]
    downlink: Option<String>,

    /// Private base space to choose the downlink prefix from
    #[arg(short, long)]
    base: Option<String>,

    /// RNG seed for a reproducible choice
    #[arg(short, long)]
    seed: Option<String>,

    /// Read discovery results from a JSON snapshot instead of running rdisc6
    #[arg(long, value_name = "PATH")]
    discovery_file: Option<PathBuf>,

    /// Save the discovery results as a JSON snapshot
    #[arg(long, value_name = "PATH", conflicts_with = "discovery_file")]
    save_discovery: Option<PathBuf>,

    /// Print the selected prefixes as JSON instead of configuration fragments
    #[arg(long)]
    json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    // Do as little as possible in main.rs as it can't contain any tests
    let cli = Cli::parse();
    init_logging(if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    });
    dotenv::dotenv().ok();
    log::info!("#Start main()");

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::from(e.exit_code())
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = Config::from_env()?;
    if let Some(iface) = cli.interface {
        config.uplink_interface = iface;
    }
    if let Some(iface) = cli.downlink {
        config.downlink_interface = iface;
    }
    if let Some(base) = cli.base {
        config.base_space = parse_base_space(&base)?;
    }
    if let Some(seed) = cli.seed {
        config.seed = Some(parse_seed(&seed)?);
    }

    let discovery = match &cli.discovery_file {
        Some(path) => read_discovery_snapshot(path)?,
        None => discover(&config.discovery_command, &config.uplink_interface)?,
    };
    if let Some(path) = &cli.save_discovery {
        write_discovery_snapshot(path, &discovery)?;
    }

    let mut rng = match config.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };
    let pair = choose_prefixes(&discovery, config.base_space, &mut rng)?;

    if cli.json {
        print_pair_json(&pair)?;
    } else {
        print_fragments(&render_fragments(&pair, &discovery, &config));
    }
    Ok(())
}
