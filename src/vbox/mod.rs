// VirtualBox queries through the VBoxManage CLI
pub mod process;
pub mod list_vms;
pub mod guest_property;

pub use process::{CommandRunner, InvokeError, SystemRunner};
pub use list_vms::VmLister;
pub use guest_property::GuestPropertyResolver;

/// Outcome of a best-effort hypervisor query.
///
/// `Unavailable` keeps the reason a query produced nothing, so an empty
/// result caused by a failing `VBoxManage` is never confused with a host
/// that simply has no VMs.
#[derive(Debug)]
pub enum Discovery<T> {
    Found(T),
    Unavailable(InvokeError),
}

impl<T: Default> Discovery<T> {
    /// Fail-open view: a failed query reads as the empty value.
    pub fn unwrap_or_empty(self) -> T {
        match self {
            Discovery::Found(value) => value,
            Discovery::Unavailable(_) => T::default(),
        }
    }
}

impl<T> Discovery<T> {
    /// Why the query produced nothing, if it failed.
    pub fn error(&self) -> Option<&InvokeError> {
        match self {
            Discovery::Found(_) => None,
            Discovery::Unavailable(e) => Some(e),
        }
    }
}
