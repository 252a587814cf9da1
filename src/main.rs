use clap::Parser;
use std::io::BufWriter;
use std::path::PathBuf;
use template_transformer::app::{handle_fatal_error, init_logging, run, AppConfig};
use template_transformer::env::AppEnv;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "\nhomepage: ",
    env!("CARGO_PKG_REPOSITORY"),
    "\nauthor:   ",
    env!("CARGO_PKG_AUTHORS"),
    "\nlicense:  ",
    env!("CARGO_PKG_LICENSE"),
);

/// Template YAML resources with properties resolved from the environment
#[derive(Parser)]
#[command(name = "template-transformer", version, long_version = LONG_VERSION)]
#[command(
    about = "Template YAML resources with properties resolved from the environment",
    long_about = "Kustomize transformer plugin. Reads a YAML document stream on stdin, \
                  replaces ${{.NAME}} references with resolved properties, and writes \
                  the result to stdout."
)]
struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Path to the plugin configuration file
    config: PathBuf,
}

fn main() {
    let cli = Cli::parse();

    let config = AppConfig::new(cli.verbose, cli.config);
    init_logging(&config);

    let env = AppEnv::real();
    let stdin = std::io::stdin().lock();
    let mut stdout = BufWriter::new(std::io::stdout().lock());

    if let Err(e) = run(&config, &env, stdin, &mut stdout) {
        handle_fatal_error(e.into(), config.verbose);
    }
}
