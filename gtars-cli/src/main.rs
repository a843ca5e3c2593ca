mod entropy;
mod logging;

use anyhow::Result;
use clap::Command;
use clap::error::ErrorKind;

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const BIN_NAME: &str = "gtars-entropy";
    pub const USAGE_EXIT_CODE: i32 = 1;
}

fn build_parser() -> Command {
    entropy::cli::create_entropy_cli()
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
}

fn main() -> Result<()> {
    let matches = match build_parser().try_get_matches() {
        Ok(matches) => matches,
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
            _ => {
                // usage errors go to stderr with exit status 1
                let _ = err.print();
                std::process::exit(consts::USAGE_EXIT_CODE);
            }
        },
    };

    logging::init_logging(matches.get_count(entropy::cli::VERBOSE));

    entropy::handlers::run_entropy(&matches)?;

    Ok(())
}
