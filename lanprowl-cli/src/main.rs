//! lanprowl binary entry point

use std::process;

use tracing::error;
use tracing_subscriber::EnvFilter;

use lanprowl_cli::{commands, Cli, Commands};

fn init_tracing(verbose: u8) {
    let default_directive = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse_args();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Interfaces => commands::interfaces(),
        Commands::Watch {
            interface,
            filter,
            timeout_ms,
            snaplen,
        } => commands::watch(&interface, filter, timeout_ms, snaplen),
        Commands::Scan {
            interface,
            cidr,
            repeats,
        } => commands::scan(&interface, &cidr, repeats),
        Commands::Probe {
            interface,
            ip,
            repeats,
        } => commands::probe(&interface, ip, repeats),
        Commands::Poison {
            interface,
            target_ip,
            target_mac,
            interval_ms,
            count,
        } => commands::poison(&interface, target_ip, target_mac, interval_ms, count),
        Commands::Rearp {
            interface,
            target_ip,
            target_mac,
            interval_ms,
            count,
        } => commands::rearp(&interface, target_ip, target_mac, interval_ms, count),
        Commands::Gateway { interface } => commands::gateway(&interface),
    };

    if let Err(e) = result {
        error!("{}", e);
        process::exit(1);
    }
}
