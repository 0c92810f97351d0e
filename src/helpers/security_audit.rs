use super::{
    assess_ssids, connection_success, device_label, items, network_path, plural, product_types,
    status_icon, top_counts, WirelessInventory,
};
use crate::core::args::ToolArgs;
use crate::core::endpoint_tool::composite_definition;
use crate::core::format::{field_or, scalar, str_field};
use crate::core::registry::Tool;
use crate::domain::model::{ParamKind, ParamSpec, ToolDefinition, ToolModule};
use crate::domain::ports::DashboardApi;
use crate::utils::error::Result;
use async_trait::async_trait;
use serde_json::Value;
use std::collections::BTreeSet;

const PARAMS: &[ParamSpec] = &[ParamSpec::argument(
    "network_id",
    ParamKind::String,
    true,
    "ID of the network to audit",
)];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdsMode {
    Prevention,
    Detection,
    Disabled,
}

impl IdsMode {
    pub fn from_mode(mode: &str) -> Self {
        match mode {
            "prevention" => IdsMode::Prevention,
            "detection" => IdsMode::Detection,
            _ => IdsMode::Disabled,
        }
    }
}

/// What the audit learned. `None` means the check could not be run.
#[derive(Debug, Default, Clone)]
pub struct AuditFindings {
    pub ids: Option<IdsMode>,
    pub malware_enabled: Option<bool>,
    pub blocked_categories: Option<usize>,
    pub custom_firewall_rules: Option<usize>,
    pub open_wifi: bool,
    pub secured_ssids: bool,
    pub vlans: Option<usize>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SecurityScore {
    pub score: u32,
    pub issues: Vec<&'static str>,
}

const ISSUE_IDS: &str = "IDS/IPS disabled";
const ISSUE_MALWARE: &str = "Malware protection disabled";
const ISSUE_CONTENT: &str = "No content filtering";
const ISSUE_FIREWALL: &str = "Only default firewall rules";
const ISSUE_OPEN_WIFI: &str = "Open WiFi network detected";
const ISSUE_SEGMENTATION: &str = "No network segmentation";

/// Scores the findings out of 100.
pub fn score_audit(findings: &AuditFindings) -> SecurityScore {
    let mut score = 0;
    let mut issues = Vec::new();

    match findings.ids {
        Some(IdsMode::Prevention) => score += 20,
        Some(IdsMode::Detection) => score += 10,
        _ => issues.push(ISSUE_IDS),
    }

    if findings.malware_enabled == Some(true) {
        score += 20;
    } else {
        issues.push(ISSUE_MALWARE);
    }

    if findings.blocked_categories.unwrap_or(0) > 0 {
        score += 15;
    } else {
        issues.push(ISSUE_CONTENT);
    }

    if findings.custom_firewall_rules.unwrap_or(0) > 0 {
        score += 15;
    } else {
        score += 5;
        issues.push(ISSUE_FIREWALL);
    }

    if findings.open_wifi {
        issues.push(ISSUE_OPEN_WIFI);
    } else if findings.secured_ssids {
        score += 20;
    } else {
        score += 10;
    }

    if findings.vlans.unwrap_or(0) > 0 {
        score += 10;
    } else {
        issues.push(ISSUE_SEGMENTATION);
    }

    SecurityScore { score, issues }
}

pub(crate) fn rating(score: u32) -> &'static str {
    match score {
        80.. => "✅ **Rating: Excellent** - Strong security posture",
        60..=79 => "⚠️ **Rating: Good** - Some improvements recommended",
        40..=59 => "⚠️ **Rating: Fair** - Significant improvements needed",
        _ => "❌ **Rating: Poor** - Critical security gaps",
    }
}

fn recommendations(issues: &[&str]) -> Vec<String> {
    let ordered = [
        (ISSUE_IDS, "**Enable IDS/IPS in prevention mode** - Critical for threat protection"),
        (ISSUE_MALWARE, "**Enable Advanced Malware Protection** - Essential for ransomware defense"),
        (ISSUE_OPEN_WIFI, "**Secure WiFi with WPA2/WPA3** - Prevent unauthorized access"),
        (ISSUE_CONTENT, "**Configure content filtering** - Block malicious websites"),
        (ISSUE_SEGMENTATION, "**Implement VLANs** - Isolate critical systems"),
    ];
    ordered
        .iter()
        .filter(|(issue, _)| issues.contains(issue))
        .enumerate()
        .map(|(i, (_, text))| format!("{}. {}", i + 1, text))
        .collect()
}

/// `perform_security_audit`: one report over every security feature of a
/// network. Individual checks that fail are noted in the report.
pub struct SecurityAuditTool {
    definition: ToolDefinition,
}

impl SecurityAuditTool {
    pub fn new() -> Self {
        Self {
            definition: composite_definition(
                "perform_security_audit",
                ToolModule::Helpers,
                "🔍 Run comprehensive security audit - checks IDS/IPS, AMP, firewall, content filtering, threats, WiFi security",
                PARAMS,
                true,
            ),
        }
    }
}

impl Default for SecurityAuditTool {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Tool for SecurityAuditTool {
    fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    async fn call(&self, api: &dyn DashboardApi, args: &ToolArgs) -> Result<String> {
        let network_id = args.required_str("network_id")?;
        let network = api.get(&network_path(&network_id, "")).await?;
        let mut out = Vec::new();
        let mut findings = AuditFindings::default();

        out.push(format!(
            "# 🔍 Comprehensive Security Audit Report: {}",
            field_or(&network, "name", "Unknown")
        ));
        out.push(format!("**Network ID**: {}", network_id));
        out.push(format!(
            "**Organization**: {}",
            field_or(&network, "organizationId", "Unknown")
        ));
        out.push(format!("**Product Types**: {}", product_types(&network).join(", ")));
        out.push(format!("**Time Zone**: {}", field_or(&network, "timeZone", "Unknown")));
        out.push(format!("**Audit Time**: {}\n", chrono::Utc::now().to_rfc3339()));

        let devices = match api.get(&network_path(&network_id, "/devices")).await {
            Ok(devices) => Some(devices),
            Err(e) => {
                out.push("## 📡 Wireless Infrastructure".to_string());
                out.push(format!("⚠️ Unable to analyze devices: {}\n", e));
                None
            }
        };
        let no_devices = Value::Null;
        let inventory = WirelessInventory::classify(devices.as_ref().unwrap_or(&no_devices));
        if devices.is_some() {
            write_infrastructure(&mut out, &inventory);
        }

        findings.ids = check_ids(api, &network_id, &mut out).await;
        findings.malware_enabled = check_malware(api, &network_id, &mut out).await;
        findings.blocked_categories = check_content_filtering(api, &network_id, &mut out).await;
        findings.custom_firewall_rules = check_l3_firewall(api, &network_id, &mut out).await;
        check_security_events(api, &network_id, &mut out).await;

        let (open_wifi, secured) = check_wifi(api, &network_id, &network, &inventory, &mut out).await;
        findings.open_wifi = open_wifi;
        findings.secured_ssids = secured;

        check_vpn(api, &network_id, &mut out).await;
        findings.vlans = check_vlans(api, &network_id, &mut out).await;
        check_l7_firewall(api, &network_id, &mut out).await;
        check_clients(api, &network_id, &mut out).await;

        let result = score_audit(&findings);
        tracing::debug!("🔒 Security audit of {} scored {}", network_id, result.score);
        out.push("## 🎯 Security Score".to_string());
        out.push(format!("**Overall Score: {}/100**", result.score));
        out.push(rating(result.score).to_string());
        if !result.issues.is_empty() {
            out.push("\n### Key Issues to Address:".to_string());
            for issue in &result.issues {
                out.push(format!("- {}", issue));
            }
        }

        out.push("\n## 📋 Detailed Recommendations".to_string());
        let recommended = recommendations(&result.issues);
        if recommended.is_empty() {
            out.push("✅ Security configuration looks good - maintain current settings".to_string());
        }
        out.extend(recommended);
        out.push("\n**Regular Maintenance:**".to_string());
        out.push("- Review security events weekly".to_string());
        out.push("- Update firmware quarterly".to_string());
        out.push("- Audit firewall rules monthly".to_string());
        out.push("- Test backup connectivity regularly".to_string());

        Ok(out.join("\n"))
    }
}

fn write_infrastructure(out: &mut Vec<String>, inventory: &WirelessInventory<'_>) {
    out.push("## 📡 Wireless Infrastructure Analysis".to_string());
    let mx = &inventory.mx_with_wifi;
    let aps = &inventory.access_points;

    match (mx.is_empty(), aps.is_empty()) {
        (false, true) => {
            out.push("**WiFi Source**: MX Integrated Wireless Only".to_string());
            out.push(
                "*Note: No dedicated wireless access points - WiFi provided by MX appliance*"
                    .to_string(),
            );
            for device in mx {
                out.push(format!(
                    "- {} **{}**: {} ({})",
                    status_icon(device),
                    field_or(device, "model", ""),
                    device_label(device),
                    field_or(device, "serial", "")
                ));
            }
        }
        (true, false) => {
            out.push("**WiFi Source**: Dedicated MR Access Points Only".to_string());
            out.push(format!("**Total APs**: {}", aps.len()));
            for device in aps.iter().take(3) {
                out.push(format!(
                    "- {} **{}**: {} ({})",
                    status_icon(device),
                    field_or(device, "model", ""),
                    device_label(device),
                    field_or(device, "serial", "")
                ));
            }
            if aps.len() > 3 {
                out.push(format!("  ... and {} more APs", aps.len() - 3));
            }
        }
        (false, false) => {
            out.push("**WiFi Source**: Mixed Infrastructure (MX + MR)".to_string());
            out.push(
                "*Network has both MX integrated wireless and dedicated access points*".to_string(),
            );
            out.push("### MX Appliances with WiFi:".to_string());
            for device in mx {
                out.push(format!(
                    "- {} **{}**: {}",
                    status_icon(device),
                    field_or(device, "model", ""),
                    device_label(device)
                ));
            }
            out.push("### Dedicated Access Points:".to_string());
            for device in aps.iter().take(3) {
                out.push(format!(
                    "- {} **{}**: {}",
                    status_icon(device),
                    field_or(device, "model", ""),
                    device_label(device)
                ));
            }
            if aps.len() > 3 {
                out.push(format!("  ... and {} more APs", aps.len() - 3));
            }
        }
        (true, true) => {
            out.push("**WiFi Source**: ⚠️ No wireless infrastructure detected".to_string());
            out.push("*Network may not have WiFi capability*".to_string());
        }
    }

    if !inventory.other.is_empty() {
        out.push(format!("\n**Other Network Devices**: {}", inventory.other.len()));
        let families = top_counts(
            inventory.other.iter().map(|d| model_family(field_or(d, "model", ""))),
            usize::MAX,
        );
        for (family, count) in families {
            out.push(format!("- {}*: {} device{}", family, count, plural(count)));
        }
    }
    out.push(String::new());
}

pub(crate) fn model_family(model: &str) -> &str {
    match model.char_indices().nth(2) {
        Some((end, _)) => &model[..end],
        None if model.is_empty() => "Unknown",
        None => model,
    }
}

async fn check_ids(api: &dyn DashboardApi, network_id: &str, out: &mut Vec<String>) -> Option<IdsMode> {
    match api.get(&network_path(network_id, "/appliance/security/intrusion")).await {
        Ok(ids) => {
            let mode = field_or(&ids, "mode", "disabled");
            let parsed = IdsMode::from_mode(mode);
            if parsed == IdsMode::Disabled {
                out.push("## ❌ IDS/IPS Status: DISABLED".to_string());
                out.push("**Risk**: Network vulnerable to known attacks".to_string());
                out.push("**Action**: Enable IDS/IPS in prevention mode\n".to_string());
            } else {
                out.push(format!("## ✅ IDS/IPS Status: {}", mode.to_uppercase()));
                out.push(format!(
                    "**Ruleset**: {}\n",
                    field_or(&ids, "idsRulesets", "Unknown")
                ));
            }
            Some(parsed)
        }
        Err(e) => {
            tracing::debug!("⚠️ IDS check failed for {}: {}", network_id, e);
            out.push("## ⚠️ IDS/IPS Status: Unable to check\n".to_string());
            None
        }
    }
}

async fn check_malware(api: &dyn DashboardApi, network_id: &str, out: &mut Vec<String>) -> Option<bool> {
    match api.get(&network_path(network_id, "/appliance/security/malware")).await {
        Ok(amp) => {
            let mode = field_or(&amp, "mode", "disabled");
            if mode == "disabled" {
                out.push("## ❌ Malware Protection: DISABLED".to_string());
                out.push("**Risk**: No protection against malware".to_string());
                out.push("**Action**: Enable AMP protection\n".to_string());
                Some(false)
            } else {
                out.push(format!("## ✅ Malware Protection: {}\n", mode.to_uppercase()));
                Some(true)
            }
        }
        Err(_) => {
            out.push("## ⚠️ Malware Protection: Unable to check\n".to_string());
            None
        }
    }
}

async fn check_content_filtering(
    api: &dyn DashboardApi,
    network_id: &str,
    out: &mut Vec<String>,
) -> Option<usize> {
    match api.get(&network_path(network_id, "/appliance/contentFiltering")).await {
        Ok(filtering) => {
            let blocked = items(&filtering, "blockedUrlCategories").len();
            if blocked == 0 {
                out.push("## ❌ Content Filtering: NO CATEGORIES BLOCKED".to_string());
                out.push("**Risk**: Users can access malicious websites".to_string());
                out.push(
                    "**Action**: Block malware, phishing, and other dangerous categories\n"
                        .to_string(),
                );
            } else {
                out.push(format!(
                    "## ✅ Content Filtering: {} categories blocked\n",
                    blocked
                ));
            }
            Some(blocked)
        }
        Err(_) => {
            out.push("## ⚠️ Content Filtering: Unable to check\n".to_string());
            None
        }
    }
}

async fn check_l3_firewall(api: &dyn DashboardApi, network_id: &str, out: &mut Vec<String>) -> Option<usize> {
    match api
        .get(&network_path(network_id, "/appliance/firewall/l3FirewallRules"))
        .await
    {
        Ok(rules) => {
            let custom = items(&rules, "rules")
                .iter()
                .filter(|r| str_field(r, "comment") != Some("Default rule"))
                .count();
            if custom == 0 {
                out.push("## ⚠️ Firewall Rules: Only default allow-all rule".to_string());
                out.push("**Risk**: No custom security policies".to_string());
                out.push("**Action**: Consider adding specific firewall rules\n".to_string());
            } else {
                out.push(format!(
                    "## ✅ Firewall Rules: {} custom rules configured\n",
                    custom
                ));
            }
            Some(custom)
        }
        Err(_) => {
            out.push("## ⚠️ Firewall Rules: Unable to check\n".to_string());
            None
        }
    }
}

async fn check_security_events(api: &dyn DashboardApi, network_id: &str, out: &mut Vec<String>) {
    let events = api
        .get_with(
            &network_path(network_id, "/appliance/security/events"),
            &[("timespan", "86400".to_string())],
        )
        .await;
    match events {
        Ok(events) => {
            let events = items(&events, "events");
            if events.is_empty() {
                out.push("## ✅ No security events in last 24 hours\n".to_string());
            } else {
                out.push(format!(
                    "## 🚨 Recent Security Events: {} in last 24h",
                    events.len()
                ));
                for event in events.iter().take(3) {
                    out.push(format!("- {}", field_or(event, "message", "Unknown event")));
                }
                out.push(String::new());
            }
        }
        Err(_) => out.push("## ⚠️ Security Events: Unable to check\n".to_string()),
    }
}

/// Returns (open SSID found, properly secured SSIDs found).
async fn check_wifi(
    api: &dyn DashboardApi,
    network_id: &str,
    network: &Value,
    inventory: &WirelessInventory<'_>,
    out: &mut Vec<String>,
) -> (bool, bool) {
    out.push("## 📶 WiFi Security Analysis".to_string());
    if !product_types(network).contains(&"wireless") {
        out.push("⚠️ **No wireless capability** detected in this network\n".to_string());
        return (false, false);
    }

    let integrated = inventory.integrated_only();
    let aps = inventory.access_points.len();
    let path = if integrated {
        let model = inventory
            .mx_with_wifi
            .first()
            .map(|d| field_or(d, "model", "MX*W"))
            .unwrap_or("MX*W");
        out.push(format!("**Infrastructure**: {} integrated wireless", model));
        out.push("*WiFi provided by security appliance - no separate access points*\n".to_string());
        network_path(network_id, "/appliance/ssids")
    } else {
        if aps > 0 && inventory.mx_with_wifi.is_empty() {
            out.push(format!(
                "**Infrastructure**: {} dedicated access point{}",
                aps,
                plural(aps)
            ));
        } else if aps > 0 {
            out.push(format!(
                "**Infrastructure**: Mixed wireless (MX integrated + {} dedicated AP{})",
                aps,
                plural(aps)
            ));
        } else {
            out.push("**Infrastructure**: Wireless enabled (checking configuration...)".to_string());
        }
        out.push(
            "*Full wireless infrastructure analysis and connection monitoring available*\n"
                .to_string(),
        );
        network_path(network_id, "/wireless/ssids")
    };

    let ssids = match api.get(&path).await {
        Ok(ssids) => ssids,
        Err(e) => {
            out.push(format!("⚠️ **WiFi Security**: Unable to check - {}\n", e));
            return (false, false);
        }
    };

    let assessment = assess_ssids(&ssids, integrated);
    let label = if integrated { "MX SSIDs" } else { "SSIDs" };
    out.push(format!("**Total {}**: {}", label, assessment.total));
    out.push(format!("**Enabled SSIDs**: {}", assessment.enabled()));
    out.push(format!("**Disabled SSIDs**: {}", assessment.disabled));
    out.push(String::new());

    if assessment.has_weak() {
        out.push("### ❌ Security Issues Found:".to_string());
        out.extend(assessment.weak.iter().cloned());
        out.push(String::new());
    }
    if !assessment.secure.is_empty() {
        out.push("### ✅ Properly Secured SSIDs:".to_string());
        for ssid in &assessment.secure {
            out.push(format!("- {}", ssid));
        }
        out.push(String::new());
    }
    if !assessment.has_weak() && assessment.secure.is_empty() {
        out.push("### ℹ️ No active SSIDs configured\n".to_string());
    }

    if !integrated && aps > 0 {
        let stats = api
            .get_with(
                &network_path(network_id, "/wireless/connectionStats"),
                &[("timespan", "3600".to_string())],
            )
            .await;
        if let Some((success, total)) = stats.ok().as_ref().and_then(connection_success) {
            out.push(format!(
                "**WiFi Connection Success Rate**: {:.1}% ({}/{} attempts)",
                success as f64 / total as f64 * 100.0,
                success,
                total
            ));
            out.push(String::new());
        }
    }

    (assessment.open_found, !assessment.secure.is_empty())
}

async fn check_vpn(api: &dyn DashboardApi, network_id: &str, out: &mut Vec<String>) {
    let Ok(vpn) = api
        .get(&network_path(network_id, "/appliance/vpn/siteToSiteVpn"))
        .await
    else {
        return;
    };
    let mode = field_or(&vpn, "mode", "none");
    out.push("## 🔐 VPN Configuration".to_string());
    out.push(format!("**Mode**: {}", mode));
    if mode == "none" {
        out.push("VPN not configured".to_string());
    } else {
        let subnets = items(&vpn, "subnets");
        out.push(format!("**Subnets in VPN**: {}", subnets.len()));
        out.push(format!("**Hub connections**: {}", items(&vpn, "hubs").len()));
        let local: Vec<&Value> = subnets
            .iter()
            .filter(|s| s.get("useVpn").and_then(Value::as_bool).unwrap_or(false))
            .collect();
        if !local.is_empty() {
            out.push("### Local subnets in VPN:".to_string());
            for subnet in local.iter().take(3) {
                out.push(format!(
                    "- {} ({})",
                    field_or(subnet, "localSubnet", "Unknown"),
                    field_or(subnet, "name", "Unnamed")
                ));
            }
        }
    }
    out.push(String::new());
}

async fn check_vlans(api: &dyn DashboardApi, network_id: &str, out: &mut Vec<String>) -> Option<usize> {
    let vlans = api.get(&network_path(network_id, "/appliance/vlans")).await.ok()?;
    let vlans = items(&vlans, "vlans");
    if vlans.is_empty() {
        out.push("## 🏗️ Network Segmentation".to_string());
        out.push(
            "⚠️ **No VLANs configured** - Consider network segmentation for security\n".to_string(),
        );
        return Some(0);
    }
    out.push("## 🏗️ Network Segmentation (VLANs)".to_string());
    out.push(format!("**Total VLANs**: {}", vlans.len()));
    for vlan in vlans.iter().take(5) {
        out.push(format!(
            "- VLAN {}: {} ({})",
            vlan.get("id").map(scalar).unwrap_or_else(|| "Unknown".to_string()),
            field_or(vlan, "name", "Unnamed"),
            field_or(vlan, "subnet", "Unknown")
        ));
    }
    if vlans.len() > 5 {
        out.push(format!("  ... and {} more VLANs", vlans.len() - 5));
    }
    out.push(String::new());
    Some(vlans.len())
}

async fn check_l7_firewall(api: &dyn DashboardApi, network_id: &str, out: &mut Vec<String>) {
    let Ok(l7) = api
        .get(&network_path(network_id, "/appliance/firewall/l7FirewallRules"))
        .await
    else {
        return;
    };
    let rules = items(&l7, "rules");
    out.push("## 🌐 Layer 7 Application Control".to_string());
    if rules.is_empty() {
        out.push("⚠️ No L7 rules configured\n".to_string());
        return;
    }
    out.push(format!("**Total L7 Rules**: {}", rules.len()));

    let mut countries = BTreeSet::new();
    let mut apps = Vec::new();
    for rule in rules.iter().filter(|r| str_field(r, "policy") == Some("deny")) {
        let value = rule.get("value").unwrap_or(&Value::Null);
        match field_or(rule, "type", "") {
            "blockedCountries" | "blacklistedCountries" => {
                countries.extend(items(value, "countries").iter().filter_map(Value::as_str));
            }
            "application" => apps.push(field_or(value, "name", "Unknown app")),
            _ => {}
        }
    }
    if !countries.is_empty() {
        out.push("### 🌍 Geo-blocking Active:".to_string());
        let count = countries.len();
        let listed: Vec<&str> = countries.into_iter().collect();
        out.push(format!("Blocking {} countries: {}", count, listed.join(", ")));
    }
    if !apps.is_empty() {
        out.push("### 📱 Application Blocking:".to_string());
        for app in apps.iter().take(5) {
            out.push(format!("- {}", app));
        }
    }
    out.push(String::new());
}

async fn check_clients(api: &dyn DashboardApi, network_id: &str, out: &mut Vec<String>) {
    let Ok(clients) = api
        .get_with(
            &network_path(network_id, "/clients"),
            &[("timespan", "86400".to_string())],
        )
        .await
    else {
        return;
    };
    let clients = items(&clients, "clients");
    if clients.is_empty() {
        return;
    }
    out.push("## 👥 Client Analysis (Last 24h)".to_string());
    out.push(format!("**Total unique clients**: {}", clients.len()));

    let os = top_counts(clients.iter().map(|c| field_or(c, "os", "Unknown")), 5);
    if !os.is_empty() {
        out.push("### Operating Systems:".to_string());
        for (name, count) in os {
            out.push(format!("- {}: {} devices", name, count));
        }
    }
    let makers = top_counts(clients.iter().map(|c| field_or(c, "manufacturer", "Unknown")), 5);
    if !makers.is_empty() {
        out.push("### Device Manufacturers:".to_string());
        for (name, count) in makers {
            out.push(format!("- {}: {} devices", name, count));
        }
    }
    out.push(String::new());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fully_secured_network_scores_100() {
        let findings = AuditFindings {
            ids: Some(IdsMode::Prevention),
            malware_enabled: Some(true),
            blocked_categories: Some(4),
            custom_firewall_rules: Some(2),
            open_wifi: false,
            secured_ssids: true,
            vlans: Some(3),
        };
        let result = score_audit(&findings);
        assert_eq!(result.score, 100);
        assert!(result.issues.is_empty());
        assert!(rating(result.score).contains("Excellent"));
        assert!(recommendations(&result.issues).is_empty());
    }

    #[test]
    fn test_unchecked_network_scores_minimum() {
        let result = score_audit(&AuditFindings::default());
        // Default firewall 5 plus Wi-Fi without findings 10.
        assert_eq!(result.score, 15);
        assert_eq!(
            result.issues,
            vec![
                ISSUE_IDS,
                ISSUE_MALWARE,
                ISSUE_CONTENT,
                ISSUE_FIREWALL,
                ISSUE_SEGMENTATION
            ]
        );
        assert!(rating(result.score).contains("Poor"));
    }

    #[test]
    fn test_open_wifi_and_detection_mode() {
        let findings = AuditFindings {
            ids: Some(IdsMode::Detection),
            malware_enabled: Some(true),
            blocked_categories: Some(1),
            custom_firewall_rules: Some(0),
            open_wifi: true,
            secured_ssids: true,
            vlans: Some(1),
        };
        let result = score_audit(&findings);
        assert_eq!(result.score, 10 + 20 + 15 + 5 + 10);
        assert!(rating(result.score).contains("Good"));
        let recs = recommendations(&result.issues);
        assert_eq!(
            recs,
            vec!["1. **Secure WiFi with WPA2/WPA3** - Prevent unauthorized access"]
        );
    }

    #[test]
    fn test_ids_mode_parsing_and_model_family() {
        assert_eq!(IdsMode::from_mode("prevention"), IdsMode::Prevention);
        assert_eq!(IdsMode::from_mode("detection"), IdsMode::Detection);
        assert_eq!(IdsMode::from_mode("anything"), IdsMode::Disabled);
        assert_eq!(model_family("MS120-8"), "MS");
        assert_eq!(model_family(""), "Unknown");
    }
}
