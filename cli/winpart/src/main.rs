//! winpart: prints the Windows-compatible partitioner report.

mod logging;

use std::process;

use clap::Parser;
use tracing::{debug, warn};

use winpart_registry::{print_report, validate, windows_compatible, Registry};

#[derive(Parser)]
#[command(
    name = "winpart",
    version,
    about = "List the partitioners known to work on Windows"
)]
struct Cli {}

fn main() {
    let _cli = Cli::parse();
    logging::init();

    if let Err(e) = run(&windows_compatible()) {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

fn run(registry: &Registry) -> anyhow::Result<()> {
    debug!(
        categories = registry.category_count(),
        "registry initialized"
    );
    for issue in validate(registry) {
        warn!(?issue, "registry data issue");
    }
    print_report(registry)?;
    Ok(())
}
