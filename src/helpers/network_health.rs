use super::{
    connection_success, device_label, items, network_path, organization_path, product_types,
    WirelessInventory,
};
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

const PARAMS: &[ParamSpec] = &[ParamSpec::argument(
    "network_id",
    ParamKind::String,
    true,
    "ID of the network to check",
)];

const LOW_SUCCESS_RATE: f64 = 90.0;

/// `check_network_health`: wireless performance, uplinks, device status and
/// recent events of one network.
pub struct NetworkHealthTool {
    definition: ToolDefinition,
}

impl NetworkHealthTool {
    pub fn new() -> Self {
        Self {
            definition: composite_definition(
                "check_network_health",
                ToolModule::Helpers,
                "🏥 Check network health - device status, recent events, wireless performance metrics",
                PARAMS,
                true,
            ),
        }
    }
}

impl Default for NetworkHealthTool {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Tool for NetworkHealthTool {
    fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    async fn call(&self, api: &dyn DashboardApi, args: &ToolArgs) -> Result<String> {
        let network_id = args.required_str("network_id")?;
        let network = api.get(&network_path(&network_id, "")).await?;
        let products = product_types(&network);
        let devices = api.get(&network_path(&network_id, "/devices")).await;

        let mut out = vec![
            format!(
                "# 🏥 Network Health Report: {}",
                field_or(&network, "name", "Unknown")
            ),
            format!("**Check Time**: {}", chrono::Utc::now().to_rfc3339()),
            format!("**Product Types**: {}\n", products.join(", ")),
        ];

        let no_devices = Value::Null;
        let inventory = WirelessInventory::classify(devices.as_ref().unwrap_or(&no_devices));
        if products.contains(&"wireless") {
            if !inventory.access_points.is_empty() {
                wireless_performance(api, &network_id, &mut out).await;
            } else if !inventory.mx_with_wifi.is_empty() {
                let model = inventory
                    .mx_with_wifi
                    .first()
                    .map(|d| field_or(d, "model", "MX*W"))
                    .unwrap_or("MX*W");
                out.push("## 📡 Wireless Infrastructure".to_string());
                out.push(format!("**WiFi Source**: {} integrated wireless", model));
                out.push(
                    "*Note: Dedicated AP metrics not applicable - WiFi provided by security appliance*\n"
                        .to_string(),
                );
            }
        }

        if products.contains(&"appliance") {
            if let Some(org_id) = str_field(&network, "organizationId") {
                uplink_status(api, org_id, &network_id, &mut out).await;
            }
        }

        match &devices {
            Ok(devices) => device_status(devices, &mut out),
            Err(_) => out.push("## ⚠️ Device Status: Unable to check\n".to_string()),
        }

        recent_events(api, &network_id, &mut out).await;

        out.push("## 📊 Health Summary".to_string());
        out.push("Review any ❌ or ⚠️ items above for potential issues.".to_string());
        out.push("\n**Recommended Actions:**".to_string());
        out.push("1. Investigate any offline or alerting devices".to_string());
        out.push("2. Address high packet loss or latency if present".to_string());
        out.push("3. Review recent network events for patterns".to_string());
        Ok(out.join("\n"))
    }
}

async fn wireless_performance(api: &dyn DashboardApi, network_id: &str, out: &mut Vec<String>) {
    let Ok(stats) = api
        .get_with(
            &network_path(network_id, "/wireless/connectionStats"),
            &[("timespan", "3600".to_string())],
        )
        .await
    else {
        return;
    };
    out.push("## 📡 Wireless Performance (Last Hour)".to_string());
    if let Some((success, total)) = connection_success(&stats) {
        let rate = success as f64 / total as f64 * 100.0;
        if rate < LOW_SUCCESS_RATE {
            out.push(format!("- ⚠️ Success Rate: {:.1}% (LOW)", rate));
        } else {
            out.push(format!("- ✅ Success Rate: {:.1}%", rate));
        }
        let auth_failures = stats.get("auth").and_then(Value::as_u64).unwrap_or(0);
        if auth_failures > 0 {
            out.push(format!(
                "- ❌ Auth Failures: {:.1}% ({} failures)",
                auth_failures as f64 / total as f64 * 100.0,
                auth_failures
            ));
        }
    }
    out.push(String::new());
}

async fn uplink_status(api: &dyn DashboardApi, org_id: &str, network_id: &str, out: &mut Vec<String>) {
    let statuses = api
        .get_with(
            &organization_path(org_id, "/appliance/uplink/statuses"),
            &[("networkIds[]", network_id.to_string())],
        )
        .await;
    let Ok(statuses) = statuses else {
        return;
    };
    let appliances: Vec<&Value> = items(&statuses, "items")
        .iter()
        .filter(|u| str_field(u, "networkId") == Some(network_id))
        .collect();
    if appliances.is_empty() {
        return;
    }
    out.push("## 🌐 Uplink Status".to_string());
    for appliance in appliances {
        for uplink in items(appliance, "uplinks") {
            let name = field_or(uplink, "interface", "Unknown");
            match field_or(uplink, "status", "unknown") {
                "active" => out.push(format!("- ✅ {}: Active", name)),
                other => out.push(format!("- ❌ {}: {}", name, other)),
            }
        }
    }
    out.push(String::new());
}

fn device_status(devices: &Value, out: &mut Vec<String>) {
    let devices = items(devices, "devices");
    let describe = |d: &Value| format!("{} ({})", device_label(d), field_or(d, "model", "Unknown"));
    let with_status = |status: &str| -> Vec<String> {
        devices
            .iter()
            .filter(|d| field_or(d, "status", "unknown") == status)
            .map(&describe)
            .collect()
    };
    let offline = with_status("offline");
    let alerting = with_status("alerting");

    out.push("## 🖥️ Device Status".to_string());
    out.push(format!("- Total Devices: {}", devices.len()));
    out.push(format!("- ✅ Online: {}", with_status("online").len()));
    if !offline.is_empty() {
        out.push(format!("- ❌ Offline: {}", offline.len()));
        out.extend(offline.iter().take(3).map(|d| format!("  - {}", d)));
    }
    if !alerting.is_empty() {
        out.push(format!("- ⚠️ Alerting: {}", alerting.len()));
        out.extend(alerting.iter().take(3).map(|d| format!("  - {}", d)));
    }
    out.push(String::new());
}

async fn recent_events(api: &dyn DashboardApi, network_id: &str, out: &mut Vec<String>) {
    // Multi-product networks require a product type filter.
    let events = api
        .get_with(
            &network_path(network_id, "/events"),
            &[
                ("productType", "appliance".to_string()),
                ("perPage", "1000".to_string()),
            ],
        )
        .await;
    let Ok(events) = events else {
        out.push("## ⚠️ Network Events: Unable to check\n".to_string());
        return;
    };
    let events = items(&events, "events");
    if events.is_empty() {
        out.push("## ✅ No concerning network events in last 24h\n".to_string());
        return;
    }

    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for event in events {
        *counts.entry(field_or(event, "type", "unknown")).or_insert(0) += 1;
    }
    out.push("## 📋 Recent Network Events (24h)".to_string());
    for (event_type, count) in counts {
        let icon = if event_type.to_lowercase().contains("down") {
            "❌"
        } else {
            "⚠️"
        };
        out.push(format!("- {} {}: {} occurrences", icon, event_type, count));
    }
    out.push(String::new());
}
