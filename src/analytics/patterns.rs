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
use std::collections::{BTreeMap, HashMap};

const CLUSTER_GAP_SECONDS: i64 = 300;
const MIN_CLUSTER_SIZE: usize = 3;

const ERROR_EVENT_TYPES: &[&str] = &[
    "auth_fail",
    "association_reject",
    "dhcp_no_lease",
    "dns_lookup_fail",
    "arp_poisoning",
    "port_cycle",
    "device_down",
    "vpn_connectivity_issue",
    "client_connectivity_issue",
    "wired_8021x_auth_fail",
    "wireless_auth_fail",
];

const SEARCH_PARAMS: &[ParamSpec] = &[
    ParamSpec::argument("network_id", ParamKind::String, true, "Network ID to search"),
    ParamSpec::argument(
        "search_term",
        ParamKind::String,
        false,
        "Text to search for in event descriptions, types and categories",
    ),
    ParamSpec::argument(
        "event_types",
        ParamKind::StringArray,
        false,
        "Event types to include (e.g. auth_fail, dhcp_no_lease)",
    ),
    ParamSpec::argument(
        "timespan",
        ParamKind::Integer,
        false,
        "Time period in seconds (default 86400 = 24 hours)",
    ),
    ParamSpec::argument("device_serial", ParamKind::String, false, "Filter by device serial"),
    ParamSpec::argument("client_mac", ParamKind::String, false, "Filter by client MAC"),
    ParamSpec::argument(
        "product_type",
        ParamKind::String,
        false,
        "Product type (required by the API on multi-product networks)",
    ),
];

const PATTERN_PARAMS: &[ParamSpec] = &[
    ParamSpec::argument("network_id", ParamKind::String, true, "Network ID to analyze"),
    ParamSpec::argument(
        "timespan",
        ParamKind::Integer,
        false,
        "Time period in seconds (default 86400 = 24 hours)",
    ),
    ParamSpec::argument(
        "min_occurrences",
        ParamKind::Integer,
        false,
        "Minimum occurrences to report (default 5)",
    ),
];

/// Groups sorted timestamps into runs whose neighbours are less than five
/// minutes apart, keeping runs of at least three events.
pub fn find_clusters(times: &[DateTime<Utc>]) -> Vec<Vec<DateTime<Utc>>> {
    let mut sorted = times.to_vec();
    sorted.sort();

    let mut clusters = Vec::new();
    let mut current: Vec<DateTime<Utc>> = Vec::new();
    for time in sorted {
        if let Some(last) = current.last() {
            if (time - *last).num_seconds() >= CLUSTER_GAP_SECONDS {
                if current.len() >= MIN_CLUSTER_SIZE {
                    clusters.push(std::mem::take(&mut current));
                } else {
                    current.clear();
                }
            }
        }
        current.push(time);
    }
    if current.len() >= MIN_CLUSTER_SIZE {
        clusters.push(current);
    }
    clusters
}

fn hours(timespan: i64) -> i64 {
    timespan / 3600
}

/// `search_event_logs`
pub struct SearchEventLogsTool {
    definition: ToolDefinition,
}

impl SearchEventLogsTool {
    pub fn new() -> Self {
        Self {
            definition: composite_definition(
                "search_event_logs",
                ToolModule::Analytics,
                "🔍 Search event logs for specific patterns or errors by text, type, device or client",
                SEARCH_PARAMS,
                true,
            ),
        }
    }
}

impl Default for SearchEventLogsTool {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Tool for SearchEventLogsTool {
    fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    async fn call(&self, api: &dyn DashboardApi, args: &ToolArgs) -> Result<String> {
        let network_id = args.required_str("network_id")?;
        let search_term = args.optional_str("search_term")?;
        let event_types = args.optional_string_list("event_types")?.unwrap_or_default();
        let timespan = args.i64_or("timespan", 86400)?;

        let mut query = EventQuery::since(timespan)?.types(event_types.clone());
        query.device_serial = args.optional_str("device_serial")?;
        query.client_mac = args.optional_str("client_mac")?;
        query.product_type = args.optional_str("product_type")?;

        let mut events = fetch_events(api, &network_id, &query).await?;
        if let Some(term) = &search_term {
            let needle = term.to_lowercase();
            events.retain(|event| {
                let view = NetworkEvent(event);
                [view.description(), view.kind(), view.category()]
                    .iter()
                    .any(|field| field.to_lowercase().contains(&needle))
            });
        }

        let mut out = banner("🔍 Event Log Search Results");
        out.push(format!("Found {} matching events", events.len()));
        if let Some(term) = &search_term {
            out.push(format!("Search term: '{}'", term));
        }
        if !event_types.is_empty() {
            out.push(format!("Event types: {}", event_types.join(", ")));
        }
        if let Some(serial) = &query.device_serial {
            out.push(format!("Device: {}", serial));
        }
        if let Some(mac) = &query.client_mac {
            out.push(format!("Client: {}", mac));
        }
        out.push(format!("Time range: Last {} hours", hours(timespan)));
        out.push(String::new());

        if events.is_empty() {
            out.push("No events found matching your criteria".to_string());
            out.extend(
                [
                    "",
                    "💡 Try:",
                    "• Expanding the timespan",
                    "• Using broader search terms",
                    "• Removing specific filters",
                    "• Checking different event types",
                ]
                .map(String::from),
            );
            return Ok(out.join("\n"));
        }

        let mut by_type: BTreeMap<&str, Vec<NetworkEvent<'_>>> = BTreeMap::new();
        for event in &events {
            let view = NetworkEvent(event);
            by_type.entry(view.kind()).or_default().push(view);
        }
        for (kind, group) in &by_type {
            out.push(format!("\n📌 {} ({} events)", kind, group.len()));
            out.push(rule());
            for view in group.iter().take(5) {
                out.push(format!(
                    "⏰ {}",
                    crate::core::format::field_or(view.0, "occurredAt", "Unknown time")
                ));
                out.push(format!("   Category: {}", view.category()));
                if let Some(device) = view.device_name() {
                    out.push(format!("   Device: {}", device));
                }
                if let Some(client) = view.client() {
                    out.push(format!("   Client: {}", client));
                }
                out.push(format!("   {}", view.description()));
                out.push(String::new());
            }
            if group.len() > 5 {
                out.push(format!("   ... and {} more {} events", group.len() - 5, kind));
                out.push(String::new());
            }
        }

        out.push("\n📊 Event Summary:".to_string());
        out.push(rule());
        for (kind, count) in top_counts(events.iter().map(|e| NetworkEvent(e).kind()), 10) {
            out.push(format!("   {}: {}", kind, count));
        }
        Ok(out.join("\n"))
    }
}

/// `analyze_error_patterns`
pub struct AnalyzeErrorPatternsTool {
    definition: ToolDefinition,
}

impl AnalyzeErrorPatternsTool {
    pub fn new() -> Self {
        Self {
            definition: composite_definition(
                "analyze_error_patterns",
                ToolModule::Analytics,
                "📊 Analyze error event patterns to identify recurring issues",
                PATTERN_PARAMS,
                true,
            ),
        }
    }
}

impl Default for AnalyzeErrorPatternsTool {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Default)]
struct ErrorPatterns<'a> {
    by_type: HashMap<&'a str, usize>,
    by_device: HashMap<&'a str, Vec<&'a str>>,
    by_client: HashMap<&'a str, Vec<&'a str>>,
    by_hour: BTreeMap<u32, usize>,
    times: BTreeMap<&'a str, Vec<DateTime<Utc>>>,
}

impl<'a> ErrorPatterns<'a> {
    fn collect(events: &'a [serde_json::Value]) -> Self {
        let mut patterns = Self::default();
        for event in events {
            let view = NetworkEvent(event);
            let kind = view.kind();
            *patterns.by_type.entry(kind).or_insert(0) += 1;
            if let Some(device) = view.device() {
                patterns.by_device.entry(device).or_default().push(kind);
            }
            if let Some(client) = view.client() {
                patterns.by_client.entry(client).or_default().push(kind);
            }
            if let Some(at) = view.occurred_at() {
                *patterns.by_hour.entry(at.hour()).or_insert(0) += 1;
                patterns.times.entry(kind).or_default().push(at);
            }
        }
        patterns
    }

    fn count(&self, kinds: &[&str]) -> usize {
        kinds.iter().map(|k| self.by_type.get(k).copied().unwrap_or(0)).sum()
    }
}

/// Members with at least `min` errors, most errors first, with their top
/// error types.
fn recurring<'a>(
    groups: &HashMap<&'a str, Vec<&'a str>>,
    min: usize,
    detail: usize,
) -> Vec<(&'a str, usize, Vec<(String, usize)>)> {
    let mut rows: Vec<_> = groups
        .iter()
        .filter(|(_, kinds)| kinds.len() >= min)
        .map(|(name, kinds)| (*name, kinds.len(), top_counts(kinds.iter().copied(), detail)))
        .collect();
    rows.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    rows.truncate(5);
    rows
}

#[async_trait]
impl Tool for AnalyzeErrorPatternsTool {
    fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    async fn call(&self, api: &dyn DashboardApi, args: &ToolArgs) -> Result<String> {
        let network_id = args.required_str("network_id")?;
        let timespan = args.i64_or("timespan", 86400)?;
        let min_occurrences = usize::try_from(args.i64_or("min_occurrences", 5)?).unwrap_or(0);

        let query = EventQuery::since(timespan)?.types(ERROR_EVENT_TYPES.iter().copied());
        let events = fetch_events(api, &network_id, &query).await?;

        let mut out = banner("📊 Error Pattern Analysis");
        if events.is_empty() {
            out.push("✅ No error events found in the specified time period".to_string());
            out.push(format!("   Analyzed: Last {} hours", hours(timespan)));
            return Ok(out.join("\n"));
        }
        out.push(format!(
            "Analyzing {} error events from the last {} hours",
            events.len(),
            hours(timespan)
        ));
        out.push(String::new());

        let patterns = ErrorPatterns::collect(&events);

        out.push("🔴 Most Common Error Types:".to_string());
        out.push(rule());
        let mut type_counts: Vec<(&str, usize)> =
            patterns.by_type.iter().map(|(k, c)| (*k, *c)).collect();
        type_counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        type_counts.truncate(10);
        for (kind, count) in type_counts.iter().filter(|(_, c)| *c >= min_occurrences) {
            let percent = *count as f64 / events.len() as f64 * 100.0;
            out.push(format!("   {}: {} ({:.1}%)", kind, count, percent));
        }
        out.push(String::new());

        let devices = recurring(&patterns.by_device, min_occurrences, 3);
        if !devices.is_empty() {
            out.push("🖥️ Devices with Recurring Errors:".to_string());
            out.push(rule());
            for (device, total, kinds) in devices {
                out.push(format!("   {}: {} errors", device, total));
                for (kind, count) in kinds {
                    out.push(format!("      - {}: {}", kind, count));
                }
            }
            out.push(String::new());
        }

        let clients = recurring(&patterns.by_client, min_occurrences, 2);
        if !clients.is_empty() {
            out.push("👤 Clients with Recurring Errors:".to_string());
            out.push(rule());
            for (client, total, kinds) in clients {
                out.push(format!("   {}: {} errors", client, total));
                for (kind, count) in kinds {
                    out.push(format!("      - {}: {}", kind, count));
                }
            }
            out.push(String::new());
        }

        if !patterns.by_hour.is_empty() {
            out.push("🕐 Temporal Patterns (Errors by Hour):".to_string());
            out.push(rule());
            let mut peaks: Vec<(u32, usize)> =
                patterns.by_hour.iter().map(|(h, c)| (*h, *c)).collect();
            peaks.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
            for (hour, count) in peaks.into_iter().take(5) {
                out.push(format!("   {:02}:00 - {} errors", hour, count));
            }
            out.push(String::new());
        }

        out.push("🔍 Error Clustering Analysis:".to_string());
        out.push(rule());
        for (kind, times) in &patterns.times {
            if times.len() < min_occurrences {
                continue;
            }
            let clusters = find_clusters(times);
            if clusters.is_empty() {
                continue;
            }
            out.push(format!("   {}:", kind));
            out.push(format!("      Found {} error clusters", clusters.len()));
            for cluster in clusters.iter().take(3) {
                if let (Some(first), Some(last)) = (cluster.first(), cluster.last()) {
                    out.push(format!(
                        "      - {} errors between {} - {}",
                        cluster.len(),
                        first.format("%H:%M"),
                        last.format("%H:%M")
                    ));
                }
            }
        }

        out.push("\n🎯 Potential Root Causes:".to_string());
        out.push(rule());
        let auth = patterns.count(&["auth_fail", "wireless_auth_fail"]);
        if auth > min_occurrences {
            out.push(format!("   🔐 Authentication Issues ({} failures):", auth));
            out.push("      • Check RADIUS server connectivity".to_string());
            out.push("      • Verify credentials and certificates".to_string());
            out.push("      • Review authentication policies".to_string());
        }
        let dhcp = patterns.count(&["dhcp_no_lease"]);
        if dhcp > min_occurrences {
            out.push(format!("   📡 DHCP Issues ({} failures):", dhcp));
            out.push("      • Check DHCP pool exhaustion".to_string());
            out.push("      • Verify VLAN configuration".to_string());
            out.push("      • Review DHCP server settings".to_string());
        }
        let connectivity = patterns.count(&["device_down", "port_cycle"]);
        if connectivity > min_occurrences {
            out.push(format!("   🌐 Connectivity Issues ({} events):", connectivity));
            out.push("      • Check physical connections".to_string());
            out.push("      • Review spanning tree".to_string());
            out.push("      • Verify power and cabling".to_string());
        }

        out.extend(
            [
                "",
                "💡 Recommendations:",
                "1. Focus on devices/clients with highest error rates",
                "2. Investigate temporal patterns for scheduled issues",
                "3. Check error clusters for systemic problems",
                "4. Review configuration for top error types",
                "5. Set up alerts for recurring patterns",
            ]
            .map(String::from),
        );
        Ok(out.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::parse_timestamp;

    fn at(time: &str) -> DateTime<Utc> {
        parse_timestamp(&format!("2024-01-20T{}Z", time)).unwrap()
    }

    #[test]
    fn test_clusters_need_three_close_events() {
        let times = vec![
            at("10:00:00"),
            at("10:02:00"),
            at("10:04:59"),
            // gap of exactly five minutes breaks the run
            at("10:09:59"),
            at("10:10:30"),
            at("11:00:00"),
        ];
        let clusters = find_clusters(&times);
        assert_eq!(clusters.len(), 1);
        assert_eq!(clusters[0].len(), 3);
        assert_eq!(clusters[0][0], at("10:00:00"));
    }

    #[test]
    fn test_clusters_sort_input_and_keep_trailing_run() {
        let times = vec![at("12:04:00"), at("08:00:00"), at("12:00:00"), at("12:02:00")];
        let clusters = find_clusters(&times);
        assert_eq!(clusters, vec![vec![at("12:00:00"), at("12:02:00"), at("12:04:00")]]);
        assert!(find_clusters(&[]).is_empty());
    }

    #[test]
    fn test_recurring_filters_and_orders() {
        let mut groups: HashMap<&str, Vec<&str>> = HashMap::new();
        groups.insert("ap-1", vec!["auth_fail"; 6]);
        groups.insert("ap-2", vec!["dhcp_no_lease", "auth_fail", "auth_fail", "port_cycle", "auth_fail", "auth_fail", "auth_fail"]);
        groups.insert("ap-3", vec!["auth_fail"; 2]);
        let rows = recurring(&groups, 5, 2);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].0, "ap-2");
        assert_eq!(rows[0].1, 7);
        assert_eq!(rows[0].2[0], ("auth_fail".to_string(), 5));
        assert_eq!(rows[1].0, "ap-1");
    }
}
