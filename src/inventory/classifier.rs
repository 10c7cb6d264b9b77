use log::debug;
use serde::Deserialize;

use crate::inventory::types::{InventoryDocument, IpAddress, RoleGroup, RoleSlot, VmIdentity};

/// Sends VMs whose name contains `pattern` to `group`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ClassificationRule {
    pub pattern: String,
    pub group: RoleGroup,
}

impl ClassificationRule {
    pub fn new(pattern: &str, group: RoleGroup) -> Self {
        Self {
            pattern: pattern.to_string(),
            group,
        }
    }

    pub fn matches(&self, vm: &VmIdentity) -> bool {
        vm.as_str().contains(&self.pattern)
    }
}

pub fn default_rules() -> Vec<ClassificationRule> {
    vec![
        ClassificationRule::new("controlplane", RoleGroup::Master),
        ClassificationRule::new("node", RoleGroup::Worker),
    ]
}

/// Builds the grouped inventory from resolved VMs.
///
/// Rules are checked top-down and the first match decides the role. Each
/// role holds a single host: a later match replaces an earlier one.
/// VMs without an address are left out of every group, `all` included.
pub struct InventoryClassifier {
    rules: Vec<ClassificationRule>,
}

impl Default for InventoryClassifier {
    fn default() -> Self {
        Self::new(default_rules())
    }
}

impl InventoryClassifier {
    pub fn new(rules: Vec<ClassificationRule>) -> Self {
        Self { rules }
    }

    pub fn role_of(&self, vm: &VmIdentity) -> Option<RoleGroup> {
        self.rules.iter().find(|rule| rule.matches(vm)).map(|rule| rule.group)
    }

    pub fn classify<I>(&self, resolved: I) -> InventoryDocument
    where
        I: IntoIterator<Item = (VmIdentity, Option<IpAddress>)>,
    {
        let mut document = InventoryDocument::default();
        let mut master = RoleSlot::Unassigned;
        let mut worker = RoleSlot::Unassigned;

        for (vm, ip) in resolved {
            let Some(ip) = ip else {
                debug!("Leaving {} out of the inventory: no address", vm);
                continue;
            };

            document.all.hosts.push(vm.clone());

            match self.role_of(&vm) {
                Some(RoleGroup::Master) => {
                    if let RoleSlot::Assigned { vm: previous, .. } = &master {
                        debug!("{} replaces {} as master", vm, previous);
                    }
                    master.assign(vm, ip);
                }
                Some(RoleGroup::Worker) => {
                    if let RoleSlot::Assigned { vm: previous, .. } = &worker {
                        debug!("{} replaces {} as worker", vm, previous);
                    }
                    worker.assign(vm, ip);
                }
                None => debug!("{} matches no role", vm),
            }
        }

        document.master = master.to_group();
        document.worker = worker.to_group();
        document
    }
}
