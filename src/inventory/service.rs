use log::{debug, info, warn};

use crate::inventory::classifier::InventoryClassifier;
use crate::inventory::types::{InventoryResponse, IpAddress, VmIdentity};
use crate::vbox::{CommandRunner, GuestPropertyResolver, VmLister};

/// What a single invocation was asked to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Host(VmIdentity),
    List,
    Empty,
}

impl Mode {
    /// A host lookup takes precedence over `--list`.
    pub fn from_flags(list: bool, host: Option<&str>) -> Self {
        match (host, list) {
            (Some(name), _) => Mode::Host(VmIdentity::new(name)),
            (None, true) => Mode::List,
            (None, false) => Mode::Empty,
        }
    }
}

pub struct InventoryService<'a, R: CommandRunner> {
    lister: VmLister<'a, R>,
    resolver: GuestPropertyResolver<'a, R>,
    classifier: InventoryClassifier,
}

impl<'a, R: CommandRunner> InventoryService<'a, R> {
    pub fn new(runner: &'a R, program: &'a str, classifier: InventoryClassifier) -> Self {
        Self {
            lister: VmLister::new(runner, program),
            resolver: GuestPropertyResolver::new(runner, program),
            classifier,
        }
    }

    /// Never fails: hypervisor errors read as "nothing found".
    pub fn run(&self, mode: &Mode) -> InventoryResponse {
        match mode {
            Mode::Host(vm) => self.host_info(vm),
            Mode::List => self.list(),
            Mode::Empty => InventoryResponse::empty(),
        }
    }

    fn resolve(&self, vm: &VmIdentity) -> Option<IpAddress> {
        let lookup = self.resolver.resolve_ip(vm);
        if let Some(e) = lookup.error() {
            warn!("Could not read guest properties of {}: {}", vm, e);
        }
        lookup.unwrap_or_empty()
    }

    fn host_info(&self, vm: &VmIdentity) -> InventoryResponse {
        match self.resolve(vm) {
            Some(ip) => InventoryResponse::host(vm, &ip),
            None => {
                debug!("No address for {}, answering with an empty inventory", vm);
                InventoryResponse::empty()
            }
        }
    }

    fn list(&self) -> InventoryResponse {
        let listing = self.lister.list_vms();
        if let Some(e) = listing.error() {
            warn!("VM listing unavailable ({}), answering with empty groups", e);
        }
        let vms = listing.unwrap_or_empty();

        let resolved: Vec<_> = vms
            .into_iter()
            .map(|vm| {
                let ip = self.resolve(&vm);
                (vm, ip)
            })
            .collect();

        let document = self.classifier.classify(resolved);
        info!(
            "Inventory built: {} hosts, master={}, worker={}",
            document.all.hosts.len(),
            document.master.hosts.len(),
            document.worker.hosts.len()
        );
        InventoryResponse::Groups(document)
    }
}
