use super::SEARCH_TIMESPAN_SECONDS;
use crate::core::args::ToolArgs;
use crate::core::endpoint_tool::composite_definition;
use crate::core::format::{field_or, scalar, str_field};
use crate::core::registry::Tool;
use crate::domain::model::{ParamKind, ParamSpec, ToolDefinition, ToolModule};
use crate::domain::ports::DashboardApi;
use crate::helpers::{items, network_path};
use crate::utils::error::{MerakiError, Result};
use async_trait::async_trait;
use serde_json::Value;
use std::net::IpAddr;

const PARAMS: &[ParamSpec] = &[
    ParamSpec::argument(
        "ip_address",
        ParamKind::String,
        true,
        "The IP address to find (e.g. 10.0.5.146)",
    ),
    ParamSpec::argument("network_id", ParamKind::String, true, "Network ID to search"),
];

/// Outcome of a lookup: the matching client, if any, and how many clients
/// were searched.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientMatch {
    pub client: Option<Value>,
    pub searched: usize,
}

pub(crate) fn parse_ip(name: &str, raw: &str) -> Result<IpAddr> {
    raw.parse()
        .map_err(|_| MerakiError::invalid_argument(name, format!("'{}' is not an IP address", raw)))
}

/// Pages through every client seen in the last seven days.
pub async fn find_client_by_ip(
    api: &dyn DashboardApi,
    network_id: &str,
    ip: &IpAddr,
) -> Result<ClientMatch> {
    let clients = api
        .get_all(
            &network_path(network_id, "/clients"),
            &[
                ("perPage", "1000".to_string()),
                ("timespan", SEARCH_TIMESPAN_SECONDS.to_string()),
            ],
        )
        .await?;
    let clients = items(&clients, "clients");
    let wanted = ip.to_string();
    tracing::debug!("🔍 Searching {} clients for {}", clients.len(), wanted);

    let client = clients
        .iter()
        .find(|c| str_field(c, "ip") == Some(wanted.as_str()))
        .cloned();
    Ok(ClientMatch {
        client,
        searched: clients.len(),
    })
}

fn megabytes(client: &Value, key: &str) -> f64 {
    let raw = client
        .get("usage")
        .and_then(|u| u.get(key))
        .and_then(Value::as_f64)
        .unwrap_or(0.0);
    (raw / 1_000_000.0 * 100.0).round() / 100.0
}

fn optional(client: &Value, key: &str) -> String {
    match client.get(key) {
        None | Some(Value::Null) => "None".to_string(),
        Some(value) => scalar(value),
    }
}

pub(crate) fn render_found(ip: &str, network_id: &str, client: &Value, searched: usize) -> String {
    [
        format!("# 🎯 Device Found: {}", ip),
        String::new(),
        format!("- **MAC Address**: {}", optional(client, "mac")),
        format!("- **Description**: {}", field_or(client, "description", "No description")),
        format!("- **Manufacturer**: {}", field_or(client, "manufacturer", "Unknown")),
        format!("- **OS**: {}", field_or(client, "os", "Unknown")),
        format!("- **VLAN**: {}", optional(client, "vlan")),
        format!("- **Status**: {}", optional(client, "status")),
        format!("- **Last Seen**: {}", optional(client, "lastSeen")),
        format!("- **Usage Sent**: {} MB", megabytes(client, "sent")),
        format!("- **Usage Received**: {} MB", megabytes(client, "recv")),
        format!("- **User**: {}", optional(client, "user")),
        format!("- **Notes**: {}", optional(client, "notes")),
        String::new(),
        "## 📊 Search Stats".to_string(),
        format!("- Clients searched: {}", searched),
        "- Search timespan: 7 days".to_string(),
        format!("- Network: {}", network_id),
    ]
    .join("\n")
}

pub(crate) fn render_not_found(ip: &str, network_id: &str, searched: usize) -> String {
    [
        format!("# ❌ No client found with IP {}", ip),
        String::new(),
        format!("- Network: {}", network_id),
        format!("- Clients searched: {}", searched),
        String::new(),
        "💡 Suggestions:".to_string(),
        format!("- Device with IP {} not found in last 7 days", ip),
        "- Device might be offline or IP changed recently".to_string(),
        "- Try checking other VLANs or networks".to_string(),
    ]
    .join("\n")
}

/// `find_device_by_ip`
pub struct FindDeviceByIpTool {
    definition: ToolDefinition,
}

impl FindDeviceByIpTool {
    pub fn new() -> Self {
        Self {
            definition: composite_definition(
                "find_device_by_ip",
                ToolModule::Search,
                "🎯 Find any client by IP address, searching every client of the last 7 days",
                PARAMS,
                true,
            ),
        }
    }
}

impl Default for FindDeviceByIpTool {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Tool for FindDeviceByIpTool {
    fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    async fn call(&self, api: &dyn DashboardApi, args: &ToolArgs) -> Result<String> {
        let raw_ip = args.required_str("ip_address")?;
        let ip = parse_ip("ip_address", &raw_ip)?;
        let network_id = args.required_str("network_id")?;

        let found = find_client_by_ip(api, &network_id, &ip).await?;
        Ok(match &found.client {
            Some(client) => render_found(&raw_ip, &network_id, client, found.searched),
            None => render_not_found(&raw_ip, &network_id, found.searched),
        })
    }
}
