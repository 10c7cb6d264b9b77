use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Variable Ansible uses to reach a host.
pub const ANSIBLE_HOST_VAR: &str = "ansible_host";

/// VM name as reported by `VBoxManage list vms`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct VmIdentity(String);

impl VmIdentity {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VmIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// IPv4 address string published by the guest. Not validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct IpAddress(String);

impl IpAddress {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IpAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoleGroup {
    Master,
    Worker,
}

impl RoleGroup {
    pub const ALL: [RoleGroup; 2] = [RoleGroup::Master, RoleGroup::Worker];
}

pub type HostVars = BTreeMap<String, String>;

fn host_vars(ip: &IpAddress) -> HostVars {
    HostVars::from([(ANSIBLE_HOST_VAR.to_string(), ip.as_str().to_string())])
}

/// Single-host slot backing a role group. Assigning replaces whatever
/// was there, so the last matching VM wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RoleSlot {
    #[default]
    Unassigned,
    Assigned { vm: VmIdentity, ip: IpAddress },
}

impl RoleSlot {
    pub fn assign(&mut self, vm: VmIdentity, ip: IpAddress) {
        *self = RoleSlot::Assigned { vm, ip };
    }

    pub fn to_group(&self) -> GroupRecord {
        match self {
            RoleSlot::Unassigned => GroupRecord::default(),
            RoleSlot::Assigned { vm, ip } => GroupRecord {
                hosts: vec![vm.clone()],
                vars: host_vars(ip),
            },
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GroupRecord {
    pub hosts: Vec<VmIdentity>,
    pub vars: HostVars,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AllGroup {
    pub hosts: Vec<VmIdentity>,
    pub vars: HostVars,
    pub children: Vec<RoleGroup>,
}

impl Default for AllGroup {
    fn default() -> Self {
        Self {
            hosts: Vec::new(),
            vars: HostVars::new(),
            children: RoleGroup::ALL.to_vec(),
        }
    }
}

/// Grouped inventory returned for `--list`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InventoryDocument {
    pub all: AllGroup,
    pub master: GroupRecord,
    pub worker: GroupRecord,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Meta {
    pub hostvars: BTreeMap<String, HostVars>,
}

/// `{"_meta": {"hostvars": {}}}`, the "nothing known" answer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EmptyInventory {
    #[serde(rename = "_meta")]
    pub meta: Meta,
}

/// Whatever a single invocation prints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum InventoryResponse {
    Groups(InventoryDocument),
    Host(BTreeMap<String, HostVars>),
    Empty(EmptyInventory),
}

impl InventoryResponse {
    pub fn empty() -> Self {
        InventoryResponse::Empty(EmptyInventory::default())
    }

    pub fn host(vm: &VmIdentity, ip: &IpAddress) -> Self {
        InventoryResponse::Host(BTreeMap::from([(vm.as_str().to_string(), host_vars(ip))]))
    }
}
