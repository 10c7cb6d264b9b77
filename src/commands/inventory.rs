use log::debug;

use crate::cli::Cli;
use crate::config::Config;
use crate::inventory::types::InventoryResponse;
use crate::inventory::{InventoryClassifier, InventoryService, Mode};
use crate::output::output_json;
use crate::vbox::{CommandRunner, SystemRunner};

pub fn handle_inventory_command(cli: &Cli, config: Config) -> Result<(), Box<dyn std::error::Error>> {
    let inventory = collect_inventory(&SystemRunner, cli, config);
    output_json(&inventory)?;
    Ok(())
}

fn collect_inventory<R: CommandRunner>(runner: &R, cli: &Cli, config: Config) -> InventoryResponse {
    let mode = Mode::from_flags(cli.list, cli.host.as_deref());
    debug!("Running in {:?} mode against {}", mode, config.vboxmanage);

    let classifier = InventoryClassifier::new(config.rules);
    let service = InventoryService::new(runner, &config.vboxmanage, classifier);
    service.run(&mode)
}
