mod cli;

use clap::Parser;
use env_logger::Env;
use plum_checkers::persistence::config::Config;

const LOG_LEVEL_ENV: &str = "CHECKERS_LOG_LEVEL";

fn main() {
    let env = Env::default().filter_or(LOG_LEVEL_ENV, "warn");
    env_logger::Builder::from_env(env).init();

    let cli = cli::Cli::parse();

    let result = Config::from_env()
        .map_err(anyhow::Error::from)
        .and_then(|config| cli::run(cli, &config));

    if let Err(e) = result {
        println!("{e}");
        std::process::exit(1);
    }
}
