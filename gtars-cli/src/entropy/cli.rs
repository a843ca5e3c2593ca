use clap::{Arg, ArgAction, Command};

pub const ENTROPY_INPUT: &str = "input";
pub const STRICT_LABELS: &str = "strict-labels";
pub const VERBOSE: &str = "verbose";

pub fn create_entropy_cli() -> Command {
    Command::new(crate::consts::BIN_NAME)
        .author("Databio")
        .about("Compute the Shannon entropy of 5' and 3' read-start position counts for each locus.")
        .arg(
            Arg::new(ENTROPY_INPUT)
                .value_name("ENTROPY_INPUT")
                .required(true)
                .help("Tab-delimited <locus> <5p|3p> <count> file (.gz is decompressed, - reads stdin)"),
        )
        .arg(
            Arg::new(STRICT_LABELS)
                .long(STRICT_LABELS)
                .action(ArgAction::SetTrue)
                .help("Fail on end labels other than 5p/3p instead of counting them as 3p"),
        )
        .arg(
            Arg::new(VERBOSE)
                .short('v')
                .long(VERBOSE)
                .action(ArgAction::Count)
                .help("Log progress to stderr (-v info, -vv debug, -vvv trace)"),
        )
}
