use log::debug;

use crate::inventory::types::VmIdentity;
use crate::vbox::{CommandRunner, Discovery};

pub struct VmLister<'a, R: CommandRunner> {
    runner: &'a R,
    program: &'a str,
}

impl<'a, R: CommandRunner> VmLister<'a, R> {
    pub fn new(runner: &'a R, program: &'a str) -> Self {
        Self { runner, program }
    }

    /// Names of every registered VM, in the order VirtualBox reports them.
    pub fn list_vms(&self) -> Discovery<Vec<VmIdentity>> {
        match self.runner.run(self.program, &["list", "vms"]) {
            Ok(stdout) => {
                let vms = parse_vm_list(&stdout);
                debug!("Found {} VMs: {:?}", vms.len(), vms);
                Discovery::Found(vms)
            }
            Err(e) => Discovery::Unavailable(e),
        }
    }
}

/// Parse `VBoxManage list vms` output.
///
/// VirtualBox format: "name" {uuid}
fn parse_vm_list(output: &str) -> Vec<VmIdentity> {
    let mut vms: Vec<VmIdentity> = Vec::new();

    for line in output.lines() {
        let Some(name) = quoted_name(line) else {
            debug!("Skipping line without a VM name: {:?}", line);
            continue;
        };

        if vms.iter().any(|vm| vm.as_str() == name) {
            debug!("Ignoring duplicate VM name {:?}", name);
            continue;
        }
        vms.push(VmIdentity::new(name));
    }

    vms
}

fn quoted_name(line: &str) -> Option<&str> {
    let start = line.find('"')?;
    let end = line[start + 1..].find('"')?;
    let name = &line[start + 1..start + 1 + end];
    (!name.is_empty()).then_some(name)
}
