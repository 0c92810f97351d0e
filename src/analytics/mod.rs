//! Event log analysis: search, error patterns, root causes, correlation and
//! incident timelines built on the network events endpoint.

mod correlation;
mod help;
mod patterns;
mod root_cause;
mod timeline;

pub use correlation::{format_offset, CorrelateEventsTool};
pub use help::EventAnalysisHelpTool;
pub use patterns::{find_clusters, AnalyzeErrorPatternsTool, SearchEventLogsTool};
pub use root_cause::{
    detect_chains, relevant_event_types, score_root_causes, IdentifyRootCausesTool, RootCause,
};
pub use timeline::{format_duration, IncidentTimelineTool, Phases};

use crate::core::format::str_field;
use crate::core::registry::Tool;
use crate::domain::model::{ApiRequest, PageDirection};
use crate::domain::ports::DashboardApi;
use crate::helpers::{items, network_path};
use crate::utils::error::{MerakiError, Result};
use chrono::{DateTime, NaiveDateTime, SecondsFormat, TimeDelta, Utc};
use serde_json::Value;
use std::sync::Arc;

const EVENTS_PER_PAGE: u32 = 1000;

pub fn tools() -> Vec<Arc<dyn Tool>> {
    vec![
        Arc::new(SearchEventLogsTool::new()),
        Arc::new(AnalyzeErrorPatternsTool::new()),
        Arc::new(IdentifyRootCausesTool::new()),
        Arc::new(CorrelateEventsTool::new()),
        Arc::new(IncidentTimelineTool::new()),
        Arc::new(EventAnalysisHelpTool::new()),
    ]
}

/// ISO 8601 timestamp; a `Z` suffix or offset is honoured, a bare local time
/// is read as UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc())
}

pub(crate) fn iso(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Secs, true)
}

pub(crate) fn rule() -> String {
    "-".repeat(40)
}

pub(crate) fn banner(title: &str) -> Vec<String> {
    vec![title.to_string(), "=".repeat(50), String::new()]
}

/// Read-only view of one entry of the events endpoint.
#[derive(Debug, Clone, Copy)]
pub struct NetworkEvent<'a>(pub &'a Value);

impl<'a> NetworkEvent<'a> {
    pub fn kind(&self) -> &'a str {
        str_field(self.0, "type").unwrap_or("unknown")
    }

    pub fn description(&self) -> &'a str {
        str_field(self.0, "description").unwrap_or("No description")
    }

    pub fn category(&self) -> &'a str {
        str_field(self.0, "category").unwrap_or("Unknown")
    }

    pub fn device_name(&self) -> Option<&'a str> {
        str_field(self.0, "deviceName")
    }

    pub fn device(&self) -> Option<&'a str> {
        self.device_name().or_else(|| str_field(self.0, "deviceSerial"))
    }

    pub fn client_mac(&self) -> Option<&'a str> {
        str_field(self.0, "clientMac")
    }

    pub fn client(&self) -> Option<&'a str> {
        str_field(self.0, "clientName").or_else(|| self.client_mac())
    }

    pub fn occurred_at(&self) -> Option<DateTime<Utc>> {
        str_field(self.0, "occurredAt").and_then(parse_timestamp)
    }
}

/// A non-negative number of seconds as a duration.
pub(crate) fn seconds(name: &str, value: i64) -> Result<TimeDelta> {
    if value < 0 {
        return Err(MerakiError::invalid_argument(name, "must not be negative"));
    }
    TimeDelta::try_seconds(value)
        .ok_or_else(|| MerakiError::invalid_argument(name, format!("{} seconds is out of range", value)))
}

/// Filters of one events request.
#[derive(Debug, Default, Clone)]
pub struct EventQuery {
    pub included_types: Vec<String>,
    pub starting_after: Option<DateTime<Utc>>,
    pub ending_before: Option<DateTime<Utc>>,
    pub device_serial: Option<String>,
    pub client_mac: Option<String>,
    pub product_type: Option<String>,
}

impl EventQuery {
    /// Events of the last `timespan` seconds.
    pub fn since(timespan: i64) -> Result<Self> {
        let starting_after = Utc::now()
            .checked_sub_signed(seconds("timespan", timespan)?)
            .ok_or_else(|| MerakiError::invalid_argument("timespan", "reaches too far back"))?;
        Ok(Self {
            starting_after: Some(starting_after),
            ..Self::default()
        })
    }

    pub fn between(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self {
            starting_after: Some(start),
            ending_before: Some(end),
            ..Self::default()
        }
    }

    pub fn types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.included_types = types.into_iter().map(Into::into).collect();
        self
    }

    pub fn request(&self, network_id: &str) -> ApiRequest {
        let mut request = ApiRequest::get(network_path(network_id, "/events"))
            .query("perPage", EVENTS_PER_PAGE)
            .direction(PageDirection::Prev);
        if let Some(product_type) = &self.product_type {
            request = request.query("productType", product_type);
        }
        if !self.included_types.is_empty() {
            request = request.query_list("includedEventTypes", &self.included_types);
        }
        if let Some(start) = &self.starting_after {
            request = request.query("startingAfter", iso(start));
        }
        if let Some(end) = &self.ending_before {
            request = request.query("endingBefore", iso(end));
        }
        if let Some(serial) = &self.device_serial {
            request = request.query("deviceSerial", serial);
        }
        if let Some(mac) = &self.client_mac {
            request = request.query("clientMac", mac);
        }
        request
    }
}

/// Fetches one page of events. The endpoint wraps them in `{"events": [...]}`.
pub(crate) async fn fetch_events(
    api: &dyn DashboardApi,
    network_id: &str,
    query: &EventQuery,
) -> Result<Vec<Value>> {
    let response = api.send(query.request(network_id)).await?;
    let events = items(&response, "events").to_vec();
    tracing::debug!("📄 Fetched {} events for {}", events.len(), network_id);
    Ok(events)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_timestamp_forms() {
        let zulu = parse_timestamp("2024-01-20T15:30:00Z").unwrap();
        assert_eq!(iso(&zulu), "2024-01-20T15:30:00Z");
        let offset = parse_timestamp("2024-01-20T17:30:00+02:00").unwrap();
        assert_eq!(offset, zulu);
        let naive = parse_timestamp("2024-01-20T15:30:00").unwrap();
        assert_eq!(naive, zulu);
        let fractional = parse_timestamp("2024-01-20T15:30:00.123456Z").unwrap();
        assert_eq!(fractional.timestamp(), zulu.timestamp());
        assert!(parse_timestamp("yesterday").is_none());
    }

    #[test]
    fn test_event_view_fallbacks() {
        let event = json!({
            "type": "auth_fail",
            "deviceSerial": "Q2MR-0001",
            "clientMac": "aa:bb:cc:dd:ee:ff",
            "occurredAt": "2024-01-20T15:30:00.000000Z"
        });
        let view = NetworkEvent(&event);
        assert_eq!(view.kind(), "auth_fail");
        assert_eq!(view.description(), "No description");
        assert_eq!(view.device(), Some("Q2MR-0001"));
        assert!(view.device_name().is_none());
        assert_eq!(view.client(), Some("aa:bb:cc:dd:ee:ff"));
        assert!(view.occurred_at().is_some());
    }

    #[test]
    fn test_since_rejects_out_of_range_timespans() {
        assert!(EventQuery::since(3600).unwrap().starting_after.is_some());
        for timespan in [-1, 100_000_000_000_000, 10_000_000_000_000_000, i64::MAX] {
            let err = EventQuery::since(timespan).unwrap_err();
            assert!(
                matches!(err, MerakiError::InvalidArgument { ref name, .. } if name == "timespan"),
                "{} gave {:?}",
                timespan,
                err
            );
        }
    }

    #[test]
    fn test_event_query_request() {
        let start = parse_timestamp("2024-01-20T15:25:00Z").unwrap();
        let end = parse_timestamp("2024-01-20T15:35:00Z").unwrap();
        let mut query = EventQuery::between(start, end).types(["auth_fail", "dhcp_no_lease"]);
        query.client_mac = Some("aa:bb".to_string());
        let request = query.request("N_1");

        assert_eq!(request.path, "/networks/N_1/events");
        assert_eq!(request.direction, PageDirection::Prev);
        for pair in [
            ("perPage", "1000"),
            ("includedEventTypes[]", "auth_fail"),
            ("includedEventTypes[]", "dhcp_no_lease"),
            ("startingAfter", "2024-01-20T15:25:00Z"),
            ("endingBefore", "2024-01-20T15:35:00Z"),
            ("clientMac", "aa:bb"),
        ] {
            assert!(
                request.query.contains(&(pair.0.to_string(), pair.1.to_string())),
                "missing {:?}",
                pair
            );
        }
    }
}
