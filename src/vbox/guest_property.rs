use log::debug;

use crate::inventory::types::{IpAddress, VmIdentity};
use crate::vbox::{CommandRunner, Discovery};

/// Guest property key suffix under which the guest additions publish the
/// IPv4 address of the second adapter (`/VirtualBox/GuestInfo/Net/1/V4/IP`).
const IPV4_PROPERTY_MARKER: &str = "1/V4/IP";

pub struct GuestPropertyResolver<'a, R: CommandRunner> {
    runner: &'a R,
    program: &'a str,
}

impl<'a, R: CommandRunner> GuestPropertyResolver<'a, R> {
    pub fn new(runner: &'a R, program: &'a str) -> Self {
        Self { runner, program }
    }

    /// Look up the VM's published IPv4 address.
    ///
    /// `Found(None)` means the VM answered but has no address yet (powered
    /// off, or guest additions not running).
    pub fn resolve_ip(&self, vm: &VmIdentity) -> Discovery<Option<IpAddress>> {
        let args = ["guestproperty", "enumerate", vm.as_str()];
        match self.runner.run(self.program, &args) {
            Ok(stdout) => {
                let ip = parse_ipv4_property(&stdout);
                match &ip {
                    Some(ip) => debug!("VM {} has address {}", vm, ip),
                    None => debug!("VM {} has no IPv4 guest property", vm),
                }
                Discovery::Found(ip)
            }
            Err(e) => Discovery::Unavailable(e),
        }
    }
}

/// Pick the value of the first `1/V4/IP` property line.
///
/// Only the first match is looked at, so a VM with several adapters
/// publishing addresses is reported by whichever comes first.
fn parse_ipv4_property(output: &str) -> Option<IpAddress> {
    let line = output.lines().find(|line| line.contains(IPV4_PROPERTY_MARKER))?;

    // /VirtualBox/GuestInfo/Net/1/V4/IP = '192.168.56.10' @ 2024-01-01T00:00:00.000000000Z
    let value = line.trim().split('\'').nth(1)?.trim();
    if value.is_empty() {
        return None;
    }

    Some(IpAddress::new(value))
}
