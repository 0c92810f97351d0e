//! Composite tools that combine several Dashboard calls into one report.

mod capabilities;
mod categories;
mod network_health;
mod security_audit;
mod security_posture;

pub use capabilities::CapabilitiesTool;
pub use categories::CategoriesTool;
pub use network_health::NetworkHealthTool;
pub use security_audit::{score_audit, AuditFindings, IdsMode, SecurityAuditTool, SecurityScore};
pub use security_posture::{posture_score, PostureCounts, SecurityPostureTool};

use crate::core::endpoint_tool::encode_segment;
use crate::core::format::{field_or, str_field};
use crate::core::registry::Tool;
use serde_json::Value;
use std::sync::Arc;

/// Helper tools, excluding `list_tool_categories` which needs the final
/// module counts.
pub fn tools() -> Vec<Arc<dyn Tool>> {
    vec![
        Arc::new(SecurityAuditTool::new()),
        Arc::new(NetworkHealthTool::new()),
        Arc::new(SecurityPostureTool::new()),
        Arc::new(CapabilitiesTool::new()),
    ]
}

/// Devices of a network split by where Wi-Fi comes from.
#[derive(Debug, Default)]
pub struct WirelessInventory<'a> {
    pub mx_with_wifi: Vec<&'a Value>,
    pub access_points: Vec<&'a Value>,
    pub other: Vec<&'a Value>,
}

impl<'a> WirelessInventory<'a> {
    pub fn classify(devices: &'a Value) -> Self {
        let mut inventory = Self::default();
        for device in devices.as_array().into_iter().flatten() {
            let model = field_or(device, "model", "");
            if is_mx_with_wifi(model) {
                inventory.mx_with_wifi.push(device);
            } else if model.starts_with("MR") {
                inventory.access_points.push(device);
            } else {
                inventory.other.push(device);
            }
        }
        inventory
    }

    /// Wi-Fi is served only by the appliance, so SSIDs live under the
    /// appliance API.
    pub fn integrated_only(&self) -> bool {
        !self.mx_with_wifi.is_empty() && self.access_points.is_empty()
    }
}

pub(crate) fn is_mx_with_wifi(model: &str) -> bool {
    model.starts_with("MX") && model.contains(['W', 'w'])
}

pub(crate) fn network_path(network_id: &str, suffix: &str) -> String {
    format!("/networks/{}{}", encode_segment(network_id), suffix)
}

pub(crate) fn organization_path(organization_id: &str, suffix: &str) -> String {
    format!("/organizations/{}{}", encode_segment(organization_id), suffix)
}

/// Successful and total connection attempts from a wireless
/// `connectionStats` object.
pub(crate) fn connection_success(stats: &Value) -> Option<(u64, u64)> {
    let count = |key: &str| stats.get(key).and_then(Value::as_u64).unwrap_or(0);
    let success = count("success");
    let total = success + count("auth") + count("assoc") + count("dhcp") + count("dns");
    (total > 0).then_some((success, total))
}

/// Array payload, or the named array inside an object payload.
pub(crate) fn items<'a>(value: &'a Value, key: &str) -> &'a [Value] {
    match value {
        Value::Array(items) => items,
        Value::Object(obj) => obj.get(key).and_then(Value::as_array).map(Vec::as_slice).unwrap_or(&[]),
        _ => &[],
    }
}

pub(crate) fn device_label(device: &Value) -> &str {
    str_field(device, "name")
        .or_else(|| str_field(device, "serial"))
        .unwrap_or("Unnamed")
}

pub(crate) fn status_icon(device: &Value) -> &'static str {
    if field_or(device, "status", "unknown") == "online" {
        "✅"
    } else {
        "❌"
    }
}

pub(crate) fn product_types(network: &Value) -> Vec<&str> {
    network
        .get("productTypes")
        .and_then(Value::as_array)
        .map(|items| items.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default()
}

pub(crate) fn plural(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

/// Security assessment of the enabled SSIDs of a network.
#[derive(Debug, Default, PartialEq)]
pub struct SsidAssessment {
    pub total: usize,
    pub disabled: usize,
    /// Report lines for every weak SSID.
    pub weak: Vec<String>,
    pub secure: Vec<String>,
    pub open_found: bool,
    /// Open, WEP, or an appliance PSK SSID without a passphrase.
    pub critical_found: bool,
}

impl SsidAssessment {
    pub fn enabled(&self) -> usize {
        self.total - self.disabled
    }

    pub fn has_weak(&self) -> bool {
        !self.weak.is_empty()
    }
}

/// `integrated` selects the appliance SSID rules, where WPA mode is not
/// reported and a PSK SSID must carry a passphrase.
pub fn assess_ssids(ssids: &Value, integrated: bool) -> SsidAssessment {
    let mut assessment = SsidAssessment::default();
    for ssid in ssids.as_array().into_iter().flatten() {
        assessment.total += 1;
        if !ssid.get("enabled").and_then(Value::as_bool).unwrap_or(false) {
            assessment.disabled += 1;
            continue;
        }
        let number = ssid
            .get("number")
            .map(crate::core::format::scalar)
            .unwrap_or_else(|| "?".to_string());
        let name = str_field(ssid, "name")
            .map(str::to_string)
            .unwrap_or_else(|| format!("SSID {}", number));
        let auth = field_or(ssid, "authMode", "");
        let heading = format!("**{}** (SSID {})", name, number);

        match auth {
            "open" => {
                assessment.open_found = true;
                assessment.critical_found = true;
                assessment.weak.push(heading);
                assessment.weak.push("  - ❌ Security: Open (No password!)".to_string());
                let visible = ssid
                    .get("visible")
                    .map(crate::core::format::scalar)
                    .unwrap_or_else(|| "Unknown".to_string());
                assessment.weak.push(format!("  - Visible: {}", visible));
                if !integrated {
                    assessment.weak.push(format!(
                        "  - Splash Page: {}",
                        field_or(ssid, "splashPage", "None")
                    ));
                }
            }
            "psk" if field_or(ssid, "encryptionMode", "") == "wep" => {
                assessment.critical_found = true;
                assessment.weak.push(heading);
                assessment
                    .weak
                    .push("  - ❌ Security: WEP (Weak encryption!)".to_string());
            }
            "psk" if integrated => {
                if str_field(ssid, "psk").is_some() {
                    assessment.secure.push(format!("{} (WPA/WPA2 PSK)", name));
                } else {
                    assessment.critical_found = true;
                    assessment.weak.push(heading);
                    assessment
                        .weak
                        .push("  - ⚠️ Security: PSK configured but no password set".to_string());
                }
            }
            "psk" => {
                let wpa_mode = field_or(ssid, "wpaEncryptionMode", "Unknown");
                if matches!(wpa_mode, "WPA2 only" | "WPA3 only" | "WPA3 Transition Mode") {
                    assessment.secure.push(format!("{} ({})", name, wpa_mode));
                } else {
                    assessment.weak.push(heading);
                    assessment.weak.push(format!(
                        "  - ⚠️ Security: {} (Consider WPA2/WPA3)",
                        wpa_mode
                    ));
                }
            }
            "8021x-radius" => assessment.secure.push(format!("{} (Enterprise 802.1X)", name)),
            other => assessment.secure.push(format!("{} ({})", name, other)),
        }
    }
    assessment
}

/// Counts of `key` values sorted by descending count, then name.
pub(crate) fn top_counts<'a, I>(values: I, limit: usize) -> Vec<(String, usize)>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut counts: std::collections::HashMap<String, usize> = std::collections::HashMap::new();
    for value in values {
        *counts.entry(value.to_string()).or_insert(0) += 1;
    }
    let mut sorted: Vec<(String, usize)> = counts.into_iter().collect();
    sorted.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    sorted.truncate(limit);
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_classify_devices() {
        let devices = json!([
            {"model": "MX68W", "serial": "Q2MX"},
            {"model": "MR46", "serial": "Q2MR-1"},
            {"model": "MS120-8", "serial": "Q2MS"},
            {"model": "MX85", "serial": "Q2MX-2"},
        ]);
        let inventory = WirelessInventory::classify(&devices);
        assert_eq!(inventory.mx_with_wifi.len(), 1);
        assert_eq!(inventory.access_points.len(), 1);
        assert_eq!(inventory.other.len(), 2);
        assert!(!inventory.integrated_only());
    }

    #[test]
    fn test_assess_wireless_ssids() {
        let ssids = json!([
            {"number": 0, "name": "Corp", "enabled": true, "authMode": "psk", "wpaEncryptionMode": "WPA2 only"},
            {"number": 1, "name": "Guest", "enabled": true, "authMode": "open", "visible": true},
            {"number": 2, "name": "Legacy", "enabled": true, "authMode": "psk", "wpaEncryptionMode": "WPA1 and WPA2"},
            {"number": 3, "name": "Radius", "enabled": true, "authMode": "8021x-radius"},
            {"number": 4, "name": "Unused", "enabled": false},
        ]);
        let assessment = assess_ssids(&ssids, false);
        assert_eq!(assessment.total, 5);
        assert_eq!(assessment.disabled, 1);
        assert_eq!(assessment.enabled(), 4);
        assert!(assessment.open_found);
        assert!(assessment.critical_found);
        assert_eq!(
            assessment.secure,
            vec!["Corp (WPA2 only)", "Radius (Enterprise 802.1X)"]
        );
        assert!(assessment.weak.contains(&"**Guest** (SSID 1)".to_string()));
        assert!(assessment
            .weak
            .iter()
            .any(|l| l.contains("WPA1 and WPA2 (Consider WPA2/WPA3)")));
    }

    #[test]
    fn test_assess_appliance_ssids_requires_passphrase() {
        let ssids = json!([
            {"number": 1, "name": "Office", "enabled": true, "authMode": "psk", "psk": "secret"},
            {"number": 2, "name": "Empty", "enabled": true, "authMode": "psk"},
        ]);
        let assessment = assess_ssids(&ssids, true);
        assert_eq!(assessment.secure, vec!["Office (WPA/WPA2 PSK)"]);
        assert!(assessment.has_weak());
        assert!(assessment.critical_found);
        assert!(!assessment.open_found);
    }

    #[test]
    fn test_top_counts_orders_by_count_then_name() {
        let top = top_counts(["b", "a", "b", "c", "a", "b"], 2);
        assert_eq!(top, vec![("b".to_string(), 3), ("a".to_string(), 2)]);
    }
}
