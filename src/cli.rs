use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, long_about = None)]
#[command(name = "vbox-inventory")]
#[command(about = "Ansible dynamic inventory for VirtualBox VMs")]
pub struct Cli {
    /// List all VMs with an address, grouped by role
    #[arg(long)]
    pub list: bool,

    /// Get connection variables for a single VM
    #[arg(long, value_name = "NAME")]
    pub host: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn accepts_both_flags() {
        let cli = Cli::try_parse_from(["vbox-inventory", "--list", "--host", "node-1"]).unwrap();
        assert!(cli.list);
        assert_eq!(cli.host.as_deref(), Some("node-1"));
    }

    #[test]
    fn no_flags() {
        let cli = Cli::try_parse_from(["vbox-inventory"]).unwrap();
        assert!(!cli.list);
        assert!(cli.host.is_none());
    }
}
