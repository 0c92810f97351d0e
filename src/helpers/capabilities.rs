use super::{items, network_path, product_types, security_audit::model_family};
use crate::core::args::ToolArgs;
use crate::core::endpoint_tool::composite_definition;
use crate::core::format::{field_or, str_field};
use crate::core::registry::Tool;
use crate::domain::model::{ParamKind, ParamSpec, ToolDefinition, ToolModule};
use crate::domain::ports::DashboardApi;
use crate::utils::error::Result;
use async_trait::async_trait;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt::Write;

const PARAMS: &[ParamSpec] = &[ParamSpec::argument(
    "network_id",
    ParamKind::String,
    true,
    "Network ID to check",
)];

/// Product type, heading, features, suggested tools.
const CAPABILITIES: &[(&str, &str, &[&str], &[&str])] = &[
    (
        "appliance",
        "🔐 Security Appliance (MX)",
        &[
            "Firewall management",
            "VPN configuration",
            "Traffic shaping",
            "DHCP services",
            "Uplink monitoring",
            "Content filtering",
        ],
        &[
            "get_network_appliance_firewall_l3_firewall_rules",
            "get_network_appliance_vpn_site_to_site_vpn",
            "get_network_appliance_traffic_shaping_rules",
            "get_network_appliance_vlans",
        ],
    ),
    (
        "switch",
        "🔌 Switches (MS)",
        &[
            "Port configuration",
            "VLAN management",
            "STP settings",
            "Cable testing",
            "PoE control",
        ],
        &[
            "get_device_switch_ports",
            "update_device_switch_port",
            "create_device_live_tools_cable_test",
        ],
    ),
    (
        "wireless",
        "📡 Wireless (MR)",
        &[
            "SSID configuration",
            "RF optimization",
            "Client analytics",
            "Mesh networking",
            "Bluetooth settings",
        ],
        &[
            "get_network_wireless_ssids",
            "update_network_wireless_ssid",
            "get_network_wireless_rf_profiles",
        ],
    ),
    (
        "camera",
        "📹 Cameras (MV)",
        &[
            "Video settings",
            "Motion detection",
            "Analytics zones",
            "Snapshot capture",
        ],
        &[
            "get_device_camera_video_settings",
            "generate_device_camera_snapshot",
        ],
    ),
    (
        "cellularGateway",
        "📶 Cellular Gateways (MG)",
        &["LAN settings", "Uplink status", "Port forwarding"],
        &[
            "get_device_cellular_gateway_lan",
            "get_organization_cellular_gateway_uplink_statuses",
        ],
    ),
    (
        "sensor",
        "🌡️ Sensors (MT)",
        &["Environmental readings", "Alert profiles"],
        &[
            "get_organization_sensor_readings_latest",
            "get_network_sensor_alerts_profiles",
        ],
    ),
];

/// `check_network_capabilities`: which product families a network has and
/// which tools apply to it.
pub struct CapabilitiesTool {
    definition: ToolDefinition,
}

impl CapabilitiesTool {
    pub fn new() -> Self {
        Self {
            definition: composite_definition(
                "check_network_capabilities",
                ToolModule::Helpers,
                "🔍 Check network capabilities to determine available tool categories",
                PARAMS,
                true,
            ),
        }
    }
}

impl Default for CapabilitiesTool {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Tool for CapabilitiesTool {
    fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    async fn call(&self, api: &dyn DashboardApi, args: &ToolArgs) -> Result<String> {
        let network_id = args.required_str("network_id")?;
        let network = api.get(&network_path(&network_id, "")).await?;
        let devices = api.get(&network_path(&network_id, "/devices")).await?;
        Ok(render_capabilities(&network, &devices))
    }
}

pub(crate) fn render_capabilities(network: &Value, devices: &Value) -> String {
    let products = product_types(network);
    let devices = items(devices, "devices");
    let mut out = String::new();

    let _ = writeln!(out, "🔍 Network Capabilities Check");
    let _ = writeln!(out, "{}\n", "=".repeat(50));
    let _ = writeln!(out, "Network: {}", field_or(network, "name", "Unknown"));
    let _ = writeln!(out, "Product Types: {}\n", products.join(", "));

    let present: Vec<_> = CAPABILITIES
        .iter()
        .filter(|(product, ..)| products.contains(product))
        .collect();

    if present.is_empty() {
        let _ = writeln!(out, "⚠️ No supported product types found");
    } else {
        let _ = writeln!(out, "✅ Available Capabilities:");
        for (_, heading, features, _) in &present {
            let _ = writeln!(out, "\n{}:", heading);
            for feature in features.iter() {
                let _ = writeln!(out, "   • {}", feature);
            }
        }
    }

    let _ = writeln!(out, "\n📊 Device Inventory ({} devices):", devices.len());
    let mut families: BTreeMap<&str, Vec<&Value>> = BTreeMap::new();
    for device in devices {
        families
            .entry(model_family(field_or(device, "model", "")))
            .or_default()
            .push(device);
    }
    for (family, members) in &families {
        let _ = writeln!(out, "\n{} Devices ({}):", family, members.len());
        for device in members.iter().take(3) {
            let status = if str_field(device, "status") == Some("online") {
                "🟢"
            } else {
                "🔴"
            };
            let _ = writeln!(
                out,
                "   {} {} ({})",
                status,
                super::device_label(device),
                field_or(device, "model", "Unknown")
            );
        }
        if members.len() > 3 {
            let _ = writeln!(out, "   ... and {} more", members.len() - 3);
        }
    }

    if !present.is_empty() {
        let _ = writeln!(out, "\n💡 Recommended Tools:");
        for (_, heading, _, tools) in &present {
            let _ = writeln!(out, "\n   For {}:", heading);
            for tool in tools.iter() {
                let _ = writeln!(out, "   • {}", tool);
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use serde_json::json;

    #[test]
    fn test_recommended_tools_exist_in_catalog() {
        for (_, _, _, tools) in CAPABILITIES {
            for tool in tools.iter() {
                assert!(catalog::find(tool).is_some(), "{} is not a catalog tool", tool);
            }
        }
    }

    #[test]
    fn test_render_groups_devices_by_family() {
        let network = json!({"name": "Branch", "productTypes": ["appliance", "switch"]});
        let devices = json!([
            {"model": "MS120-8", "name": "sw-1", "serial": "Q2SW-0001", "status": "online"},
            {"model": "MS120-8", "serial": "Q2SW-0002", "status": "offline"},
            {"model": "MX68", "name": "fw", "serial": "Q2MX-0001", "status": "online"},
        ]);
        let text = render_capabilities(&network, &devices);
        assert!(text.contains("Network: Branch"));
        assert!(text.contains("🔐 Security Appliance (MX)"));
        assert!(text.contains("🔌 Switches (MS)"));
        assert!(!text.contains("📡 Wireless (MR)"));
        assert!(text.contains("MS Devices (2):"));
        assert!(text.contains("🔴 Q2SW-0002 (MS120-8)"));
        assert!(text.contains("• get_device_switch_ports"));
    }
}
