#![cfg(unix)]

use serde_json::{json, Value};
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;
use std::process::Command;

const BIN: &str = env!("CARGO_BIN_EXE_vbox-inventory");

const FAKE_VBOXMANAGE: &str = r#"#!/bin/sh
case "$1" in
  list)
    printf '"k8s-controlplane-1" {1}\n"k8s-node-1" {2}\n"bastion" {3}\n'
    ;;
  guestproperty)
    case "$3" in
      k8s-controlplane-1) echo "/VirtualBox/GuestInfo/Net/1/V4/IP = '10.0.0.2' @ 0, flags=" ;;
      k8s-node-1) echo "/VirtualBox/GuestInfo/Net/1/V4/IP = '10.0.0.3' @ 0, flags=" ;;
      *) echo "/VirtualBox/GuestInfo/Net/Count = '0' @ 0, flags=" ;;
    esac
    ;;
  *)
    exit 1
    ;;
esac
"#;

fn install_fake(dir: &Path) -> String {
    let script = dir.join("VBoxManage");
    fs::write(&script, FAKE_VBOXMANAGE).unwrap();
    fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();

    let config = dir.join("config.yaml");
    fs::write(&config, format!("vboxmanage: {}\n", script.display())).unwrap();
    config.display().to_string()
}

fn run(config: &str, args: &[&str]) -> Value {
    let output = Command::new(BIN)
        .args(args)
        .env("VBOX_INVENTORY_CONFIG", config)
        .env_remove("RUST_LOG")
        .output()
        .unwrap();
    assert!(output.status.success());
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn configured_vboxmanage_is_queried() {
    let dir = tempfile::tempdir().unwrap();
    let config = install_fake(dir.path());

    assert_eq!(
        run(&config, &["--list"]),
        json!({
            "all": {
                "hosts": ["k8s-controlplane-1", "k8s-node-1"],
                "vars": {},
                "children": ["master", "worker"],
            },
            "master": {"hosts": ["k8s-controlplane-1"], "vars": {"ansible_host": "10.0.0.2"}},
            "worker": {"hosts": ["k8s-node-1"], "vars": {"ansible_host": "10.0.0.3"}},
        })
    );
    assert_eq!(
        run(&config, &["--host", "k8s-node-1"]),
        json!({"k8s-node-1": {"ansible_host": "10.0.0.3"}})
    );
    assert_eq!(
        run(&config, &["--host", "bastion"]),
        json!({"_meta": {"hostvars": {}}})
    );
}
