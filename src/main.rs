mod cli;
mod commands;
mod config;
mod inventory;
mod output;
mod vbox;

use clap::Parser;
use cli::Cli;
use commands::handle_inventory_command;
use config::Config;
use output::print_error;

fn main() {
    // Ansible reads stdout only; stay quiet on stderr unless RUST_LOG asks.
    env_logger::init_from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, "off"),
    );

    let cli = Cli::parse();

    let result = match Config::load() {
        Ok(config) => handle_inventory_command(&cli, config),
        Err(e) => Err(e.into()),
    };

    if let Err(e) = result {
        print_error(&e.to_string());
        std::process::exit(1);
    }
}
