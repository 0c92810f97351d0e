use super::{banner, fetch_events, rule, EventQuery, NetworkEvent};
use crate::core::args::ToolArgs;
use crate::core::endpoint_tool::composite_definition;
use crate::core::registry::Tool;
use crate::domain::model::{ParamKind, ParamSpec, ToolDefinition, ToolModule};
use crate::domain::ports::DashboardApi;
use crate::helpers::top_counts;
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::{DateTime, Timelike, Utc};
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

const PARAMS: &[ParamSpec] = &[
    ParamSpec::argument("network_id", ParamKind::String, true, "Network ID to analyze"),
    ParamSpec::argument(
        "issue_description",
        ParamKind::String,
        true,
        "Description of the issue (e.g. \"users can't connect\", \"slow network\")",
    ),
    ParamSpec::argument(
        "timespan",
        ParamKind::Integer,
        false,
        "Time period to analyze in seconds (default 7200 = 2 hours)",
    ),
];

/// Issue keyword and the event types worth pulling for it.
const ISSUE_EVENT_TYPES: &[(&str, &[&str])] = &[
    (
        "connect",
        &["auth_fail", "association_reject", "dhcp_no_lease", "client_connectivity_issue"],
    ),
    (
        "auth",
        &["auth_fail", "wireless_auth_fail", "wired_8021x_auth_fail", "radius_auth_fail"],
    ),
    (
        "slow",
        &["port_cycle", "high_collision_rate", "high_channel_utilization", "vpn_connectivity_issue"],
    ),
    (
        "dhcp",
        &["dhcp_no_lease", "dhcp_release", "dhcp_conflict", "dhcp_server_unreachable"],
    ),
    (
        "internet",
        &["dns_lookup_fail", "gateway_down", "uplink_down", "wan_link_down"],
    ),
    (
        "vpn",
        &["vpn_connectivity_issue", "vpn_tunnel_down", "vpn_peer_unreachable"],
    ),
    (
        "wireless",
        &["association_reject", "deauth", "disassociation", "high_channel_utilization"],
    ),
];

const DEFAULT_EVENT_TYPES: &[&str] = &[
    "auth_fail",
    "association_reject",
    "dhcp_no_lease",
    "device_down",
    "port_cycle",
    "client_connectivity_issue",
];

const FAILURE_CHAINS: &[(&str, &[&str])] = &[
    (
        "Authentication Cascade",
        &["radius_auth_fail", "auth_fail", "association_reject"],
    ),
    (
        "DHCP Failure Chain",
        &["dhcp_server_unreachable", "dhcp_no_lease", "client_connectivity_issue"],
    ),
    (
        "Network Outage",
        &["device_down", "gateway_down", "client_connectivity_issue"],
    ),
    (
        "Wireless Issues",
        &["high_channel_utilization", "association_reject", "deauth"],
    ),
];

/// Event types matching the keywords of an issue description, sorted.
pub fn relevant_event_types(issue: &str) -> Vec<&'static str> {
    let issue = issue.to_lowercase();
    let mut types: BTreeSet<&'static str> = ISSUE_EVENT_TYPES
        .iter()
        .filter(|(keyword, _)| issue.contains(keyword))
        .flat_map(|(_, types)| types.iter().copied())
        .collect();
    if types.is_empty() {
        types.extend(DEFAULT_EVENT_TYPES);
    }
    types.into_iter().collect()
}

/// Failure chains whose every event type was seen.
pub fn detect_chains(seen: &HashSet<&str>) -> Vec<&'static str> {
    FAILURE_CHAINS
        .iter()
        .filter(|(_, chain)| chain.iter().all(|kind| seen.contains(kind)))
        .map(|(name, _)| *name)
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct RootCause {
    pub cause: &'static str,
    pub confidence: u32,
    pub evidence: String,
    pub fix: &'static str,
}

/// Probable causes from event type counts, highest confidence first.
pub fn score_root_causes(
    counts: &HashMap<&str, usize>,
    total: usize,
    clients_affected: usize,
) -> Vec<RootCause> {
    let mut causes = Vec::new();
    if total == 0 {
        return causes;
    }
    let percent = |kinds: &[&str]| {
        let count: usize = kinds.iter().map(|k| counts.get(k).copied().unwrap_or(0)).sum();
        count as f64 / total as f64 * 100.0
    };

    let auth = percent(&["auth_fail", "wireless_auth_fail"]);
    if auth > 30.0 {
        causes.push(RootCause {
            cause: "Authentication System Failure",
            confidence: 90.min((auth * 1.5) as u32),
            evidence: format!("{}% of events are auth failures", auth as u32),
            fix: "Check RADIUS server, verify credentials, review certificates",
        });
    }

    let dhcp = percent(&["dhcp_no_lease"]);
    if dhcp > 20.0 {
        causes.push(RootCause {
            cause: "DHCP Service Issue",
            confidence: 85.min((dhcp * 2.0) as u32),
            evidence: format!("{}% of events are DHCP failures", dhcp as u32),
            fix: "Check DHCP pool, verify server status, review VLAN config",
        });
    }

    let infra = percent(&["device_down", "port_cycle"]);
    if infra > 15.0 {
        causes.push(RootCause {
            cause: "Infrastructure/Hardware Issue",
            confidence: 80.min((infra * 2.5) as u32),
            evidence: format!("{}% of events indicate hardware problems", infra as u32),
            fix: "Check device status, verify cabling, review power supply",
        });
    }

    if (1..5).contains(&clients_affected) {
        causes.push(RootCause {
            cause: "Client-Specific Issue",
            confidence: 70,
            evidence: format!("Only {} clients affected", clients_affected),
            fix: "Check client configuration, update drivers, verify credentials",
        });
    }

    causes.sort_by(|a, b| b.confidence.cmp(&a.confidence));
    causes
}

/// Start of the five-minute bucket holding `at`.
fn bucket(at: DateTime<Utc>) -> DateTime<Utc> {
    let minute = at.minute() / 5 * 5;
    at.with_minute(minute)
        .and_then(|t| t.with_second(0))
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(at)
}

/// The earliest five-minute bucket with the most events.
fn peak_bucket<'a>(events: &'a [Value]) -> Option<(DateTime<Utc>, Vec<NetworkEvent<'a>>)> {
    let mut buckets: BTreeMap<DateTime<Utc>, Vec<NetworkEvent<'a>>> = BTreeMap::new();
    for event in events {
        let view = NetworkEvent(event);
        if let Some(at) = view.occurred_at() {
            buckets.entry(bucket(at)).or_default().push(view);
        }
    }
    let mut peak: Option<(DateTime<Utc>, Vec<NetworkEvent<'a>>)> = None;
    for (start, members) in buckets {
        if peak.as_ref().map_or(true, |(_, best)| members.len() > best.len()) {
            peak = Some((start, members));
        }
    }
    peak
}

/// `identify_root_causes`
pub struct IdentifyRootCausesTool {
    definition: ToolDefinition,
}

impl IdentifyRootCausesTool {
    pub fn new() -> Self {
        Self {
            definition: composite_definition(
                "identify_root_causes",
                ToolModule::Analytics,
                "🔬 Identify potential root causes for an issue from the events around it",
                PARAMS,
                true,
            ),
        }
    }
}

impl Default for IdentifyRootCausesTool {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Tool for IdentifyRootCausesTool {
    fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    async fn call(&self, api: &dyn DashboardApi, args: &ToolArgs) -> Result<String> {
        let network_id = args.required_str("network_id")?;
        let issue = args.required_str("issue_description")?;
        let timespan = args.i64_or("timespan", 7200)?;

        let mut out = banner("🔬 Root Cause Analysis");
        out.push(format!("Issue: {}", issue));
        out.push(format!("Analyzing last {} hours of events", timespan / 3600));
        out.push(String::new());

        let query = EventQuery::since(timespan)?.types(relevant_event_types(&issue));
        let events = fetch_events(api, &network_id, &query).await?;
        if events.is_empty() {
            out.extend(
                [
                    "ℹ️ No relevant events found in the specified time period",
                    "",
                    "This could mean:",
                    "• The issue occurred outside the analysis window",
                    "• The issue is not generating logged events",
                    "• Different event types need to be analyzed",
                ]
                .map(String::from),
            );
            return Ok(out.join("\n"));
        }
        out.push(format!("Found {} relevant events", events.len()));
        out.push(String::new());

        out.push("📅 Event Timeline Analysis:".to_string());
        out.push(rule());
        let mut clients_affected = 0;
        if let Some((start, peak)) = peak_bucket(&events) {
            out.push(format!(
                "🔴 Peak activity at {} ({} events)",
                start.format("%H:%M"),
                peak.len()
            ));
            out.push(String::new());
            out.push("Events during peak period:".to_string());
            for (kind, count) in top_counts(peak.iter().map(|e| e.kind()), usize::MAX) {
                out.push(format!("   • {}: {}", kind, count));
            }
            let devices: HashSet<&str> = peak.iter().filter_map(|e| e.device_name()).collect();
            let clients: HashSet<&str> = peak
                .iter()
                .filter(|e| e.client_mac().is_some())
                .filter_map(|e| e.client())
                .collect();
            clients_affected = clients.len();
            out.push(format!("\nDevices affected: {}", devices.len()));
            out.push(format!("Clients affected: {}", clients_affected));
        }

        out.push("\n🔗 Event Chain Analysis:".to_string());
        out.push(rule());
        let seen: HashSet<&str> = events.iter().map(|e| NetworkEvent(e).kind()).collect();
        let chains = detect_chains(&seen);
        if chains.is_empty() {
            out.push("No specific failure chains detected".to_string());
        } else {
            out.push("Detected failure patterns:".to_string());
            for chain in chains {
                out.push(format!("   ⚠️ {}", chain));
            }
        }

        out.push("\n🎯 Probable Root Causes:".to_string());
        out.push(rule());
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for event in &events {
            *counts.entry(NetworkEvent(event).kind()).or_insert(0) += 1;
        }
        let causes = score_root_causes(&counts, events.len(), clients_affected);
        if causes.is_empty() {
            out.extend(
                [
                    "\n❓ Unable to determine specific root cause",
                    "   Consider:",
                    "   • Expanding the analysis timeframe",
                    "   • Checking additional event types",
                    "   • Reviewing configuration changes",
                ]
                .map(String::from),
            );
        } else {
            for (i, cause) in causes.iter().enumerate() {
                out.push(format!(
                    "\n{}. {} (Confidence: {}%)",
                    i + 1,
                    cause.cause,
                    cause.confidence
                ));
                out.push(format!("   Evidence: {}", cause.evidence));
                out.push(format!("   Recommended Fix: {}", cause.fix));
            }
        }

        out.extend(
            [
                "",
                "📋 Next Steps:",
                "1. Address highest confidence root cause first",
                "2. Check devices/clients with most errors",
                "3. Review events immediately before issue",
                "4. Verify recent configuration changes",
                "5. Run diagnostics on affected components",
            ]
            .map(String::from),
        );
        Ok(out.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_relevant_event_types_from_keywords() {
        let types = relevant_event_types("Users can't CONNECT to the DHCP server");
        assert!(types.contains(&"client_connectivity_issue"));
        assert!(types.contains(&"dhcp_conflict"));
        // dhcp_no_lease appears under both keywords but only once
        assert_eq!(types.iter().filter(|t| **t == "dhcp_no_lease").count(), 1);

        let fallback = relevant_event_types("something odd");
        assert_eq!(fallback.len(), DEFAULT_EVENT_TYPES.len());
        assert!(fallback.contains(&"device_down"));
    }

    #[test]
    fn test_detect_chains_requires_every_step() {
        let seen: HashSet<&str> = ["radius_auth_fail", "auth_fail", "association_reject", "deauth"]
            .into_iter()
            .collect();
        assert_eq!(detect_chains(&seen), vec!["Authentication Cascade"]);
        let partial: HashSet<&str> = ["device_down", "gateway_down"].into_iter().collect();
        assert!(detect_chains(&partial).is_empty());
    }

    #[test]
    fn test_root_causes_sorted_by_confidence() {
        let counts: HashMap<&str, usize> =
            [("auth_fail", 4), ("dhcp_no_lease", 3), ("port_cycle", 3)].into_iter().collect();
        let causes = score_root_causes(&counts, 10, 2);
        let names: Vec<&str> = causes.iter().map(|c| c.cause).collect();
        // auth 40% -> 60, dhcp 30% -> 60, infra 30% -> 75, two clients -> 70
        assert_eq!(
            names,
            vec![
                "Infrastructure/Hardware Issue",
                "Client-Specific Issue",
                "Authentication System Failure",
                "DHCP Service Issue",
            ]
        );
        assert_eq!(causes[0].confidence, 75);
        assert_eq!(causes[2].evidence, "40% of events are auth failures");
    }

    #[test]
    fn test_confidence_caps() {
        let counts: HashMap<&str, usize> = [("wireless_auth_fail", 10)].into_iter().collect();
        let causes = score_root_causes(&counts, 10, 0);
        assert_eq!(causes.len(), 1);
        assert_eq!(causes[0].confidence, 90);
        assert!(score_root_causes(&counts, 0, 3).is_empty());
    }

    #[test]
    fn test_peak_bucket_prefers_earliest_tie() {
        let events = vec![
            json!({"type": "auth_fail", "occurredAt": "2024-01-20T10:01:00Z"}),
            json!({"type": "auth_fail", "occurredAt": "2024-01-20T10:04:59Z"}),
            json!({"type": "deauth", "occurredAt": "2024-01-20T10:31:00Z"}),
            json!({"type": "deauth", "occurredAt": "2024-01-20T10:33:00Z"}),
            json!({"type": "deauth"}),
        ];
        let (start, members) = peak_bucket(&events).unwrap();
        assert_eq!(start.format("%H:%M").to_string(), "10:00");
        assert_eq!(members.len(), 2);
        assert!(peak_bucket(&[]).is_none());
    }
}
