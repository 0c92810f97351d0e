use super::{banner, fetch_events, parse_timestamp, rule, EventQuery, NetworkEvent};
use crate::core::args::ToolArgs;
use crate::core::endpoint_tool::composite_definition;
use crate::core::registry::Tool;
use crate::domain::model::{ParamKind, ParamSpec, ToolDefinition, ToolModule};
use crate::domain::ports::DashboardApi;
use crate::helpers::top_counts;
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::{DateTime, TimeDelta, Utc};
use std::collections::{BTreeMap, BTreeSet};

const PARAMS: &[ParamSpec] = &[
    ParamSpec::argument(
        "network_id",
        ParamKind::String,
        true,
        "Network ID where the incident occurred",
    ),
    ParamSpec::argument("start_time", ParamKind::String, true, "Incident start time (ISO format)"),
    ParamSpec::argument("end_time", ParamKind::String, true, "Incident end time (ISO format)"),
    ParamSpec::argument(
        "affected_device",
        ParamKind::String,
        false,
        "Serial of the affected device, if any",
    ),
    ParamSpec::argument(
        "affected_client",
        ParamKind::String,
        false,
        "MAC of the affected client, if any",
    ),
];

const CRITICAL_TYPES: &[&str] = &["device_down", "auth_fail", "dhcp_no_lease", "vpn_connectivity_issue"];
const MAX_KEY_EVENTS: usize = 10;
const MAX_LISTED: usize = 10;

/// `1:05:00`, or `2 days, 3:00:00` past a day.
pub fn format_duration(duration: TimeDelta) -> String {
    let total = duration.num_seconds().max(0);
    let days = total / 86_400;
    let rest = total % 86_400;
    let clock = format!("{}:{:02}:{:02}", rest / 3600, rest % 3600 / 60, rest % 60);
    match days {
        0 => clock,
        1 => format!("1 day, {}", clock),
        n => format!("{} days, {}", n, clock),
    }
}

/// One timestamped event of the incident.
#[derive(Debug, Clone)]
pub struct TimedEvent<'a> {
    pub at: DateTime<Utc>,
    pub event: NetworkEvent<'a>,
}

/// The incident window cut in three equal phases.
#[derive(Debug)]
pub struct Phases<'a> {
    pub bounds: [(DateTime<Utc>, DateTime<Utc>); 3],
    pub events: [Vec<TimedEvent<'a>>; 3],
}

impl<'a> Phases<'a> {
    /// `events` must be sorted by time. Events past the second cut all land
    /// in the last phase.
    pub fn split(start: DateTime<Utc>, end: DateTime<Utc>, events: &[TimedEvent<'a>]) -> Self {
        let third = (end - start) / 3;
        let first_cut = start + third;
        let second_cut = start + third * 2;
        let mut phases: [Vec<TimedEvent<'a>>; 3] = Default::default();
        for event in events {
            let index = if event.at <= first_cut {
                0
            } else if event.at <= second_cut {
                1
            } else {
                2
            };
            phases[index].push(event.clone());
        }
        Self {
            bounds: [(start, first_cut), (first_cut, second_cut), (second_cut, end)],
            events: phases,
        }
    }
}

/// `generate_incident_timeline`
pub struct IncidentTimelineTool {
    definition: ToolDefinition,
}

impl IncidentTimelineTool {
    pub fn new() -> Self {
        Self {
            definition: composite_definition(
                "generate_incident_timeline",
                ToolModule::Analytics,
                "📝 Generate a detailed incident timeline for documentation",
                PARAMS,
                true,
            ),
        }
    }
}

impl Default for IncidentTimelineTool {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Tool for IncidentTimelineTool {
    fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    async fn call(&self, api: &dyn DashboardApi, args: &ToolArgs) -> Result<String> {
        let network_id = args.required_str("network_id")?;
        let start = parse_timestamp(&args.required_str("start_time")?);
        let end = parse_timestamp(&args.required_str("end_time")?);
        let (Some(start), Some(end)) = (start, end) else {
            return Ok("❌ Invalid time format. Use ISO format: YYYY-MM-DDTHH:MM:SSZ".to_string());
        };
        if end <= start {
            return Ok("❌ End time must be after start time".to_string());
        }
        let affected_device = args.optional_str("affected_device")?;
        let affected_client = args.optional_str("affected_client")?;

        let mut out = banner("📝 Incident Timeline Report");
        out.extend([
            "📋 Incident Details:".to_string(),
            format!("   Start: {} UTC", start.format("%Y-%m-%d %H:%M:%S")),
            format!("   End: {} UTC", end.format("%Y-%m-%d %H:%M:%S")),
            format!("   Duration: {}", format_duration(end - start)),
            format!("   Network ID: {}", network_id),
        ]);
        if let Some(device) = &affected_device {
            out.push(format!("   Affected Device: {}", device));
        }
        if let Some(client) = &affected_client {
            out.push(format!("   Affected Client: {}", client));
        }
        out.push(String::new());

        let mut query = EventQuery::between(start, end);
        query.device_serial = affected_device;
        query.client_mac = affected_client;
        let events = fetch_events(api, &network_id, &query).await?;
        if events.is_empty() {
            out.push("No events found during the incident timeframe".to_string());
            return Ok(out.join("\n"));
        }

        let mut timed: Vec<TimedEvent<'_>> = events
            .iter()
            .filter_map(|e| {
                let event = NetworkEvent(e);
                event.occurred_at().map(|at| TimedEvent { at, event })
            })
            .collect();
        timed.sort_by_key(|t| t.at);

        let mut categories: BTreeMap<&str, usize> = BTreeMap::new();
        let mut devices: BTreeSet<&str> = BTreeSet::new();
        let mut clients: BTreeSet<&str> = BTreeSet::new();
        for t in &timed {
            *categories
                .entry(crate::core::format::field_or(t.event.0, "category", "unknown"))
                .or_insert(0) += 1;
            if let Some(device) = t.event.device_name() {
                devices.insert(device);
            }
            if t.event.client_mac().is_some() {
                if let Some(client) = t.event.client() {
                    clients.insert(client);
                }
            }
        }

        let category_summary: Vec<String> = categories
            .iter()
            .map(|(name, count)| format!("{} ({})", name, count))
            .collect();
        out.extend([
            "📊 Executive Summary:".to_string(),
            rule(),
            format!("Total Events: {}", events.len()),
            format!("Event Categories: {}", category_summary.join(", ")),
            format!("Devices Affected: {}", devices.len()),
            format!("Clients Affected: {}", clients.len()),
            String::new(),
        ]);

        out.push("🕐 Incident Phases:".to_string());
        out.push(rule());
        let phases = Phases::split(start, end, &timed);
        let labels = ["🔴 Initial Phase", "🟡 Development Phase", "🟢 Resolution Phase"];
        for ((label, (from, to)), members) in labels.iter().zip(&phases.bounds).zip(&phases.events) {
            if members.is_empty() {
                continue;
            }
            out.push(format!("\n{} ({} - {})", label, from.format("%H:%M"), to.format("%H:%M")));
            out.push(format!("   {} events", members.len()));
            for (kind, count) in top_counts(members.iter().map(|t| t.event.kind()), 3) {
                out.push(format!("   • {}: {}", kind, count));
            }
        }

        out.extend(["".to_string(), "📜 Detailed Event Timeline:".to_string(), rule()]);
        for (label, t) in key_events(&timed) {
            out.push(format!("\n[{}] {}", label, t.at.format("%H:%M:%S")));
            out.push(format!("Type: {}", t.event.kind()));
            out.push(format!("Description: {}", t.event.description()));
            if let Some(device) = t.event.device() {
                out.push(format!("Device: {}", device));
            }
            if let Some(client) = t.event.client() {
                out.push(format!("Client: {}", client));
            }
        }

        out.extend(["".to_string(), "💥 Impact Analysis:".to_string(), rule()]);
        for (heading, names) in [("Affected Devices", &devices), ("Affected Clients", &clients)] {
            if names.is_empty() {
                continue;
            }
            out.push(format!("\n{} ({}):", heading, names.len()));
            for name in names.iter().take(MAX_LISTED) {
                out.push(format!("   • {}", name));
            }
            if names.len() > MAX_LISTED {
                out.push(format!("   ... and {} more", names.len() - MAX_LISTED));
            }
        }

        out.extend(["".to_string(), "🎯 Root Cause Indicators:".to_string(), rule()]);
        if let Some((kind, count)) =
            top_counts(phases.events[0].iter().map(|t| t.event.kind()), 1).into_iter().next()
        {
            out.push(format!(
                "Most frequent initial event: {} ({} occurrences)",
                kind, count
            ));
        }
        let early: Vec<&str> = timed.iter().take(20).map(|t| t.event.kind()).collect();
        for (kind, message) in [
            ("device_down", "⚠️ Infrastructure failure detected"),
            ("auth_fail", "⚠️ Authentication system issues detected"),
            ("dhcp_no_lease", "⚠️ DHCP service issues detected"),
        ] {
            if early.contains(&kind) {
                out.push(message.to_string());
            }
        }

        out.extend(["".to_string(), "📋 Post-Incident Recommendations:".to_string(), rule()]);
        out.extend(
            [
                "1. Review events in the initial phase for root cause",
                "2. Check configuration changes before incident",
                "3. Analyze affected devices for common factors",
                "4. Implement monitoring for detected patterns",
                "5. Create runbook for similar incidents",
                "",
                "📎 Report generated for incident documentation",
                "   Save this timeline for post-mortem analysis",
            ]
            .map(String::from),
        );
        Ok(out.join("\n"))
    }
}

/// First event, critical events while fewer than ten are picked, last event.
fn key_events<'t, 'a>(timed: &'t [TimedEvent<'a>]) -> Vec<(&'static str, &'t TimedEvent<'a>)> {
    let (Some(first), Some(last)) = (timed.first(), timed.last()) else {
        return Vec::new();
    };
    let mut picked = vec![("FIRST", first)];
    for t in timed {
        if picked.len() >= MAX_KEY_EVENTS {
            break;
        }
        if CRITICAL_TYPES.contains(&t.event.kind()) {
            picked.push(("CRITICAL", t));
        }
    }
    picked.push(("LAST", last));
    picked
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn at(time: &str) -> DateTime<Utc> {
        parse_timestamp(&format!("2024-01-20T{}Z", time)).unwrap()
    }

    fn timed(events: &[Value]) -> Vec<TimedEvent<'_>> {
        events
            .iter()
            .map(|e| {
                let event = NetworkEvent(e);
                TimedEvent { at: event.occurred_at().unwrap(), event }
            })
            .collect()
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(TimeDelta::minutes(65)), "1:05:00");
        assert_eq!(format_duration(TimeDelta::seconds(59)), "0:00:59");
        assert_eq!(format_duration(TimeDelta::hours(27)), "1 day, 3:00:00");
        assert_eq!(format_duration(TimeDelta::hours(50)), "2 days, 2:00:00");
    }

    #[test]
    fn test_phases_split_in_thirds() {
        let events = vec![
            json!({"type": "device_down", "occurredAt": "2024-01-20T10:00:00Z"}),
            json!({"type": "auth_fail", "occurredAt": "2024-01-20T10:20:00Z"}),
            json!({"type": "auth_fail", "occurredAt": "2024-01-20T10:25:00Z"}),
            json!({"type": "dhcp_no_lease", "occurredAt": "2024-01-20T10:59:00Z"}),
            json!({"type": "port_cycle", "occurredAt": "2024-01-20T11:30:00Z"}),
        ];
        let timed = timed(&events);
        let phases = Phases::split(at("10:00:00"), at("11:00:00"), &timed);
        assert_eq!(phases.bounds[0].1, at("10:20:00"));
        assert_eq!(phases.bounds[1].1, at("10:40:00"));
        // the boundary event belongs to the earlier phase
        assert_eq!(phases.events[0].len(), 2);
        assert_eq!(phases.events[1].len(), 1);
        // late events land in the last phase
        assert_eq!(phases.events[2].len(), 2);
    }

    #[test]
    fn test_key_events_first_critical_last() {
        let events = vec![
            json!({"type": "association", "occurredAt": "2024-01-20T10:00:00Z"}),
            json!({"type": "auth_fail", "occurredAt": "2024-01-20T10:01:00Z"}),
            json!({"type": "deauth", "occurredAt": "2024-01-20T10:02:00Z"}),
            json!({"type": "device_down", "occurredAt": "2024-01-20T10:03:00Z"}),
            json!({"type": "association", "occurredAt": "2024-01-20T10:04:00Z"}),
        ];
        let timed = timed(&events);
        let labels: Vec<(&str, &str)> = key_events(&timed)
            .into_iter()
            .map(|(label, t)| (label, t.event.kind()))
            .collect();
        assert_eq!(
            labels,
            vec![
                ("FIRST", "association"),
                ("CRITICAL", "auth_fail"),
                ("CRITICAL", "device_down"),
                ("LAST", "association"),
            ]
        );
        assert!(key_events(&[]).is_empty());
    }

    #[test]
    fn test_key_events_are_capped() {
        let events: Vec<Value> = (0..15)
            .map(|i| json!({"type": "auth_fail", "occurredAt": format!("2024-01-20T10:{:02}:00Z", i)}))
            .collect();
        let timed = timed(&events);
        let picked = key_events(&timed);
        assert_eq!(picked.len(), MAX_KEY_EVENTS + 1);
        assert_eq!(picked.last().map(|(label, _)| *label), Some("LAST"));
    }
}
