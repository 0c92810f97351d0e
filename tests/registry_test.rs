mod common;

use clap::Parser;
use common::FakeDashboard;
use meraki_mcp::core::ToolModule;
use meraki_mcp::{ServerConfig, ToolRegistry};
use serde_json::json;
use std::io::Write;
use std::sync::Arc;
use tempfile::NamedTempFile;

fn config(args: &[&str]) -> ServerConfig {
    let mut argv = vec!["meraki-mcp", "--api-key", "test-key"];
    argv.extend_from_slice(args);
    ServerConfig::parse_from(argv)
}

fn build(args: &[&str]) -> ToolRegistry {
    ToolRegistry::build(&config(args), Arc::new(FakeDashboard::new())).unwrap()
}

fn names(registry: &ToolRegistry) -> Vec<String> {
    registry.definitions().iter().map(|d| d.name.clone()).collect()
}

#[test]
fn test_full_profile_loads_every_module() {
    let registry = build(&["--profile", "FULL"]);
    let counts = registry.module_counts();
    for module in ToolModule::ALL {
        assert!(counts.get(&module).copied().unwrap_or(0) > 0, "{:?} empty", module);
    }
    assert!(registry.get("list_tool_categories").is_some());
    assert!(registry.get("create_dhcp_reservation_from_ip").is_some());
    assert!(registry.resources_enabled());
}

#[test]
fn test_read_only_drops_write_tools() {
    let registry = build(&["--read-only"]);
    assert!(registry.definitions().iter().all(|d| d.read_only));
    assert!(registry.get("update_device").is_none());
    assert!(registry.get("create_dhcp_reservation_from_ip").is_none());
    assert!(registry.get("get_device").is_some());
}

#[test]
fn test_profile_limits_modules() {
    let registry = build(&["--profile", "WIRELESS"]);
    let counts = registry.module_counts();
    assert!(counts.contains_key(&ToolModule::Wireless));
    assert!(!counts.contains_key(&ToolModule::Camera));
    // IP lookup is loaded regardless of the profile.
    assert!(registry.get("find_device_by_ip").is_some());
}

#[test]
fn test_custom_modules_and_exclusions() {
    let registry = build(&["--modules", "SDK_organizations", "--exclude", "search"]);
    let loaded = names(&registry);
    assert!(loaded.iter().all(|n| n.contains("organization")), "{:?}", loaded);
    assert!(registry.get("find_device_by_ip").is_none());
    assert!(!registry.resources_enabled());
}

#[tokio::test]
async fn test_categories_tool_counts_loaded_tools() {
    let registry = build(&["--modules", "SDK_sensor,helpers", "--exclude", "search"]);
    let outcome = registry
        .call("list_tool_categories", &json!({}))
        .await
        .unwrap();
    assert!(outcome
        .text
        .contains(&format!("**Total Tools**: {}", registry.len())));
    assert!(outcome.text.contains("- **SDK_sensor**:"));
    assert!(outcome.text.contains("- **helpers**: 5 tools"));
}

#[test]
fn test_config_file_fills_defaults() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(
        b"[meraki]\ntimeout_seconds = 15\n\n[tools]\nprofile = \"NETWORK\"\nread_only = true\n",
    )
    .unwrap();
    let path = file.path().to_str().unwrap().to_string();

    let loaded = config(&["--config", &path]).load_file().unwrap();
    assert_eq!(loaded.timeout_seconds, 15);
    assert_eq!(loaded.profile, "NETWORK");
    assert!(loaded.read_only);

    let missing = config(&["--config", "/nonexistent/meraki-mcp.toml"]).load_file();
    assert!(missing.is_err());
}
