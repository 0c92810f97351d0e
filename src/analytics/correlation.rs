use super::{banner, fetch_events, parse_timestamp, rule, seconds, EventQuery, NetworkEvent};
use crate::core::args::ToolArgs;
use crate::core::endpoint_tool::composite_definition;
use crate::core::registry::Tool;
use crate::domain::model::{ParamKind, ParamSpec, ToolDefinition, ToolModule};
use crate::domain::ports::DashboardApi;
use crate::helpers::top_counts;
use crate::utils::error::{MerakiError, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::{BTreeMap, HashSet};

const PARAMS: &[ParamSpec] = &[
    ParamSpec::argument("network_id", ParamKind::String, true, "Network ID to analyze"),
    ParamSpec::argument(
        "reference_time",
        ParamKind::String,
        true,
        "ISO time to correlate around (e.g. 2024-01-20T15:30:00Z)",
    ),
    ParamSpec::argument(
        "correlation_window",
        ParamKind::Integer,
        false,
        "Seconds before and after the reference time (default 300)",
    ),
    ParamSpec::argument(
        "event_types",
        ParamKind::StringArray,
        false,
        "Event types to include",
    ),
];

/// Known pairs of event types and what their co-occurrence suggests.
const CORRELATION_PATTERNS: &[(&str, &str, &str)] = &[
    ("auth_fail", "dhcp_no_lease", "Authentication → DHCP failure chain detected"),
    (
        "device_down",
        "client_connectivity_issue",
        "Device failure → Client impact correlation",
    ),
    (
        "high_channel_utilization",
        "association_reject",
        "Wireless congestion → Connection failures",
    ),
];

/// Offset of an event from the reference time: `+12s`, `-1m 30s`, or
/// `REF →` within a second of it.
pub fn format_offset(seconds: f64) -> String {
    if seconds.abs() < 1.0 {
        "REF →".to_string()
    } else if seconds.abs() < 60.0 {
        format!("{:+}s", seconds as i64)
    } else {
        format!("{:+}m {}s", (seconds / 60.0) as i64, seconds.abs() as i64 % 60)
    }
}

struct Placed<'a> {
    event: NetworkEvent<'a>,
    at: DateTime<Utc>,
    offset: f64,
}

impl Placed<'_> {
    fn before_reference(&self) -> bool {
        self.offset < 0.0
    }
}

/// `correlate_events`
pub struct CorrelateEventsTool {
    definition: ToolDefinition,
}

impl CorrelateEventsTool {
    pub fn new() -> Self {
        Self {
            definition: composite_definition(
                "correlate_events",
                ToolModule::Analytics,
                "🔗 Correlate related events around a specific time to find triggers and cascades",
                PARAMS,
                true,
            ),
        }
    }
}

impl Default for CorrelateEventsTool {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Tool for CorrelateEventsTool {
    fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    async fn call(&self, api: &dyn DashboardApi, args: &ToolArgs) -> Result<String> {
        let network_id = args.required_str("network_id")?;
        let reference = args.required_str("reference_time")?;
        let window = args.i64_or("correlation_window", 300)?;
        let event_types = args.optional_string_list("event_types")?.unwrap_or_default();

        let Some(reference) = parse_timestamp(&reference) else {
            return Ok("❌ Invalid reference time. Use ISO format: YYYY-MM-DDTHH:MM:SSZ".to_string());
        };

        let mut out = banner("🔗 Event Correlation Analysis");
        out.push(format!("Reference time: {} UTC", reference.format("%Y-%m-%d %H:%M:%S")));
        out.push(format!("Correlation window: ±{} seconds", window));
        out.push(String::new());

        let span = seconds("correlation_window", window)?;
        let (Some(from), Some(to)) = (
            reference.checked_sub_signed(span),
            reference.checked_add_signed(span),
        ) else {
            return Err(MerakiError::invalid_argument(
                "correlation_window",
                format!("±{} seconds around the reference time is out of range", window),
            ));
        };
        let query = EventQuery::between(from, to).types(event_types);
        let events = fetch_events(api, &network_id, &query).await?;
        if events.is_empty() {
            out.push("No events found in the correlation window".to_string());
            return Ok(out.join("\n"));
        }
        out.push(format!("Found {} events in correlation window", events.len()));
        out.push(String::new());

        let mut placed: Vec<Placed<'_>> = events
            .iter()
            .filter_map(|event| {
                let event = NetworkEvent(event);
                let at = event.occurred_at()?;
                let offset = (at - reference).num_milliseconds() as f64 / 1000.0;
                Some(Placed { event, at, offset })
            })
            .collect();
        placed.sort_by_key(|p| p.at);

        out.push("📅 Event Timeline:".to_string());
        out.push(rule());
        for p in &placed {
            let description: String = p.event.description().chars().take(80).collect();
            out.push(format!(
                "{:>8} | {:<25} | {}",
                format_offset(p.offset),
                p.event.kind(),
                description
            ));
            if let Some(device) = p.event.device_name() {
                out.push(format!("{:>8} | Device: {}", "", device));
            }
            if let Some(client) = p.event.client() {
                out.push(format!("{:>8} | Client: {}", "", client));
            }
            out.push(String::new());
        }

        out.push("🔍 Correlation Analysis:".to_string());
        out.push(rule());
        let (before, after): (Vec<&Placed<'_>>, Vec<&Placed<'_>>) =
            placed.iter().partition(|p| p.before_reference());

        if !before.is_empty() {
            out.push("\n📌 Potential Triggers (events before reference):".to_string());
            let mut by_device: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
            let mut by_client: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
            for p in before.iter().skip(before.len().saturating_sub(10)) {
                if let Some(device) = p.event.device_name() {
                    by_device.entry(device).or_default().push(p.event.kind());
                }
                if p.event.client_mac().is_some() {
                    if let Some(client) = p.event.client() {
                        by_client.entry(client).or_default().push(p.event.kind());
                    }
                }
            }
            for (name, kinds) in by_device.iter().chain(by_client.iter()) {
                if kinds.len() > 1 {
                    out.push(format!("   • {}: {} events", name, kinds.len()));
                    for kind in kinds.iter().skip(kinds.len().saturating_sub(3)) {
                        out.push(format!("     - {}", kind));
                    }
                }
            }
        }

        if !after.is_empty() {
            out.push("\n📌 Cascade Effects (events after reference):".to_string());
            for (kind, count) in top_counts(after.iter().take(20).map(|p| p.event.kind()), 5) {
                out.push(format!("   • {}: {} occurrences", kind, count));
            }
        }

        out.push("\n🎯 Correlation Patterns:".to_string());
        out.push(rule());
        let kinds: HashSet<&str> = placed.iter().map(|p| p.event.kind()).collect();
        let found: Vec<&str> = CORRELATION_PATTERNS
            .iter()
            .filter(|(a, b, _)| kinds.contains(a) && kinds.contains(b))
            .map(|(_, _, label)| *label)
            .collect();
        if found.is_empty() {
            out.push("   No specific correlation patterns detected".to_string());
        } else {
            for label in found {
                out.push(format!("   ⚠️ {}", label));
            }
        }

        let devices: HashSet<&str> = placed.iter().filter_map(|p| p.event.device_name()).collect();
        let clients: HashSet<&str> = placed.iter().filter_map(|p| p.event.client_mac()).collect();
        out.extend([
            String::new(),
            "📊 Summary:".to_string(),
            format!("• Total events in window: {}", events.len()),
            format!("• Events before reference: {}", before.len()),
            format!("• Events after reference: {}", after.len()),
            format!("• Unique event types: {}", kinds.len()),
            format!("• Devices involved: {}", devices.len()),
            format!("• Clients involved: {}", clients.len()),
        ]);
        Ok(out.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_offset() {
        assert_eq!(format_offset(0.4), "REF →");
        assert_eq!(format_offset(-0.9), "REF →");
        assert_eq!(format_offset(12.0), "+12s");
        assert_eq!(format_offset(-45.5), "-45s");
        assert_eq!(format_offset(90.0), "+1m 30s");
        assert_eq!(format_offset(-150.0), "-2m 30s");
        assert_eq!(format_offset(300.0), "+5m 0s");
    }
}
