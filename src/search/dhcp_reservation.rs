use super::ip_lookup::{find_client_by_ip, parse_ip, render_not_found};
use crate::core::args::ToolArgs;
use crate::core::endpoint_tool::{composite_definition, encode_segment};
use crate::core::format::{field_or, scalar, str_field};
use crate::core::registry::Tool;
use crate::domain::model::{ApiRequest, HttpMethod, ParamKind, ParamSpec, ToolDefinition, ToolModule};
use crate::domain::ports::DashboardApi;
use crate::helpers::network_path;
use crate::utils::error::Result;
use async_trait::async_trait;
use serde_json::{json, Map, Value};

const PARAMS: &[ParamSpec] = &[
    ParamSpec::argument(
        "current_ip",
        ParamKind::String,
        true,
        "Current IP address of the device (e.g. 10.0.5.146)",
    ),
    ParamSpec::argument(
        "new_ip",
        ParamKind::String,
        true,
        "IP address to reserve for the device (e.g. 10.0.5.5)",
    ),
    ParamSpec::argument("network_id", ParamKind::String, true, "Network ID of the device"),
];

/// Adds `mac -> {ip, name}` to the `fixedIpAssignments` of a VLAN, keeping
/// every existing reservation.
pub(crate) fn with_reservation(vlan: &Value, mac: &str, ip: &str, name: &str) -> Value {
    let mut assignments = vlan
        .get("fixedIpAssignments")
        .and_then(Value::as_object)
        .cloned()
        .unwrap_or_else(Map::new);
    assignments.insert(mac.to_string(), json!({"ip": ip, "name": name}));
    Value::Object(assignments)
}

/// `create_dhcp_reservation_from_ip`
pub struct CreateDhcpReservationTool {
    definition: ToolDefinition,
}

impl CreateDhcpReservationTool {
    pub fn new() -> Self {
        Self {
            definition: composite_definition(
                "create_dhcp_reservation_from_ip",
                ToolModule::Search,
                "🔧 Create a DHCP reservation for the device currently using an IP address",
                PARAMS,
                false,
            ),
        }
    }
}

impl Default for CreateDhcpReservationTool {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Tool for CreateDhcpReservationTool {
    fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    async fn call(&self, api: &dyn DashboardApi, args: &ToolArgs) -> Result<String> {
        let current_raw = args.required_str("current_ip")?;
        let current_ip = parse_ip("current_ip", &current_raw)?;
        let new_ip = parse_ip("new_ip", &args.required_str("new_ip")?)?.to_string();
        let network_id = args.required_str("network_id")?;

        let found = find_client_by_ip(api, &network_id, &current_ip).await?;
        let Some(client) = found.client else {
            return Ok(format!(
                "❌ Device not found, no reservation created\n\n{}",
                render_not_found(&current_raw, &network_id, found.searched)
            ));
        };
        let Some(mac) = str_field(&client, "mac") else {
            return Ok(format!("❌ No MAC address found for the client at {}", current_raw));
        };
        let vlan_id = match client.get("vlan") {
            None | Some(Value::Null) => {
                return Ok(format!(
                    "❌ Client {} has no VLAN; reservations are made on appliance VLANs",
                    mac
                ))
            }
            Some(vlan) => scalar(vlan),
        };
        let name = field_or(&client, "description", "Unknown Device");

        let vlan_path = network_path(
            &network_id,
            &format!("/appliance/vlans/{}", encode_segment(&vlan_id)),
        );
        let vlan = api.get(&vlan_path).await?;
        let assignments = with_reservation(&vlan, mac, &new_ip, name);
        tracing::info!("🔧 Reserving {} for {} on VLAN {}", new_ip, mac, vlan_id);
        api.send(
            ApiRequest::new(HttpMethod::Put, vlan_path)
                .body(json!({ "fixedIpAssignments": assignments })),
        )
        .await?;

        Ok([
            "✅ DHCP reservation created".to_string(),
            String::new(),
            "## Device".to_string(),
            format!("- Current IP: {}", current_raw),
            format!("- MAC Address: {}", mac),
            format!("- Description: {}", name),
            format!("- VLAN: {}", vlan_id),
            String::new(),
            "## Reservation".to_string(),
            format!("- Reserved IP: {}", new_ip),
            format!("- Name: {}", name),
        ]
        .join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_reservation_keeps_existing_entries() {
        let vlan = json!({
            "id": "5",
            "fixedIpAssignments": {"11:22:33:44:55:66": {"ip": "10.0.5.2", "name": "NAS"}}
        });
        let assignments = with_reservation(&vlan, "aa:bb:cc:dd:ee:ff", "10.0.5.5", "Printer");
        assert_eq!(assignments["11:22:33:44:55:66"]["ip"], "10.0.5.2");
        assert_eq!(
            assignments["aa:bb:cc:dd:ee:ff"],
            json!({"ip": "10.0.5.5", "name": "Printer"})
        );
    }

    #[test]
    fn test_with_reservation_on_empty_vlan() {
        let assignments = with_reservation(&json!({"id": "1"}), "aa:bb", "10.0.0.9", "Cam");
        assert_eq!(assignments.as_object().map(Map::len), Some(1));
    }
}
