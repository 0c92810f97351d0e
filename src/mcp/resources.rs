//! Read-only `scheme://` resources backed by Dashboard GET calls.

use crate::core::endpoint_tool::encode_segment;
use crate::domain::ports::DashboardApi;
use crate::mcp::types::{McpResourceDefinition, McpResourceTemplate, ResourceContents};
use crate::utils::error::{MerakiError, Result};
use serde_json::{json, Value};
use std::collections::HashMap;

pub const JSON_MIME: &str = "application/json";

/// Where a resource's data comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Api(&'static str),
    Help(&'static str),
}

#[derive(Debug, Clone, Copy)]
pub struct ResourceRoute {
    pub template: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub source: Source,
}

const fn route(
    template: &'static str,
    name: &'static str,
    description: &'static str,
    source: Source,
) -> ResourceRoute {
    ResourceRoute {
        template,
        name,
        description,
        source,
    }
}

pub const ROUTES: &[ResourceRoute] = &[
    route(
        "organizations://",
        "Organizations",
        "List all Meraki organizations",
        Source::Api("/organizations"),
    ),
    route(
        "organizations://{org_id}",
        "Organization",
        "Details for a specific organization",
        Source::Api("/organizations/{org_id}"),
    ),
    route(
        "organizations://{org_id}/networks",
        "Organization networks",
        "Networks of a specific organization",
        Source::Api("/organizations/{org_id}/networks"),
    ),
    route(
        "organizations://{org_id}/alerts",
        "Organization alerts",
        "Health alerts of a specific organization",
        Source::Api("/organizations/{org_id}/assurance/alerts"),
    ),
    route(
        "organizations://{org_id}/firmware",
        "Organization firmware",
        "Firmware upgrades of a specific organization",
        Source::Api("/organizations/{org_id}/firmware/upgrades"),
    ),
    route(
        "networks://",
        "Networks",
        "Networks need an organization context",
        Source::Help(
            "Please use organizations://{org_id}/networks to list networks for a specific organization",
        ),
    ),
    route(
        "networks://{network_id}",
        "Network",
        "Details for a specific network",
        Source::Api("/networks/{network_id}"),
    ),
    route(
        "networks://{network_id}/devices",
        "Network devices",
        "Devices in a specific network",
        Source::Api("/networks/{network_id}/devices"),
    ),
    route(
        "networks://{network_id}/clients",
        "Network clients",
        "Clients of a specific network",
        Source::Api("/networks/{network_id}/clients"),
    ),
    route(
        "networks://{network_id}/wireless/ssids",
        "Network SSIDs",
        "Wireless SSIDs of a specific network",
        Source::Api("/networks/{network_id}/wireless/ssids"),
    ),
    route(
        "networks://{network_id}/vlans",
        "Network VLANs",
        "Appliance VLANs of a specific network",
        Source::Api("/networks/{network_id}/appliance/vlans"),
    ),
    route(
        "devices://",
        "Devices",
        "Devices need a network context",
        Source::Help(
            "Please use networks://{network_id}/devices to list devices for a specific network",
        ),
    ),
    route(
        "devices://{serial}",
        "Device",
        "Details for a specific device",
        Source::Api("/devices/{serial}"),
    ),
    route(
        "devices://{serial}/switch/ports",
        "Switch ports",
        "Switch ports of a specific device",
        Source::Api("/devices/{serial}/switch/ports"),
    ),
];

fn split_uri(uri: &str) -> Option<(&str, Vec<&str>)> {
    let (scheme, rest) = uri.split_once("://")?;
    Some((scheme, rest.split('/').filter(|s| !s.is_empty()).collect()))
}

fn placeholder(segment: &str) -> Option<&str> {
    segment.strip_prefix('{')?.strip_suffix('}')
}

impl ResourceRoute {
    pub fn is_template(&self) -> bool {
        self.template.contains('{')
    }

    /// Matches `uri` against the template, returning the captured
    /// placeholder values.
    pub fn captures(&self, uri: &str) -> Option<HashMap<&'static str, String>> {
        let (scheme, pattern) = split_uri(self.template)?;
        let (uri_scheme, segments) = split_uri(uri)?;
        if scheme != uri_scheme || pattern.len() != segments.len() {
            return None;
        }
        let mut values = HashMap::new();
        for (expected, actual) in pattern.into_iter().zip(segments) {
            match placeholder(expected) {
                Some(name) => {
                    values.insert(name, actual.to_string());
                }
                None if expected == actual => {}
                None => return None,
            }
        }
        Some(values)
    }
}

/// Fills `{name}` placeholders of an API path with encoded values.
pub(crate) fn api_path(template: &str, values: &HashMap<&'static str, String>) -> String {
    template
        .split('/')
        .map(|segment| match placeholder(segment).and_then(|name| values.get(name)) {
            Some(value) => encode_segment(value),
            None => segment.to_string(),
        })
        .collect::<Vec<_>>()
        .join("/")
}

pub fn find_route(uri: &str) -> Option<(&'static ResourceRoute, HashMap<&'static str, String>)> {
    ROUTES
        .iter()
        .find_map(|route| route.captures(uri).map(|values| (route, values)))
}

pub fn list() -> Vec<McpResourceDefinition> {
    ROUTES
        .iter()
        .filter(|r| !r.is_template())
        .map(|r| McpResourceDefinition {
            uri: r.template.to_string(),
            name: r.name.to_string(),
            description: Some(r.description.to_string()),
            mime_type: Some(JSON_MIME.to_string()),
        })
        .collect()
}

pub fn templates() -> Vec<McpResourceTemplate> {
    ROUTES
        .iter()
        .filter(|r| r.is_template())
        .map(|r| McpResourceTemplate {
            uri_template: r.template.to_string(),
            name: r.name.to_string(),
            description: Some(r.description.to_string()),
            mime_type: Some(JSON_MIME.to_string()),
        })
        .collect()
}

pub async fn read(api: &dyn DashboardApi, uri: &str) -> Result<ResourceContents> {
    let (route, values) =
        find_route(uri).ok_or_else(|| MerakiError::ResourceNotFound(uri.to_string()))?;
    let data: Value = match route.source {
        Source::Help(message) => json!({ "help": message }),
        Source::Api(template) => {
            let path = api_path(template, &values);
            tracing::debug!("📄 Reading {} from {}", uri, path);
            api.get(&path).await?
        }
    };
    Ok(ResourceContents {
        uri: uri.to_string(),
        mime_type: JSON_MIME.to_string(),
        text: serde_json::to_string_pretty(&data)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::ApiRequest;
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingApi {
        paths: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl DashboardApi for RecordingApi {
        async fn send(&self, request: ApiRequest) -> Result<Value> {
            self.paths.lock().unwrap().push(request.path.clone());
            Ok(json!({"id": "x"}))
        }
    }

    #[test]
    fn test_templates_and_static_resources_partition_routes() {
        assert_eq!(list().len(), 3);
        assert_eq!(templates().len(), ROUTES.len() - 3);
        assert!(list().iter().all(|r| !r.uri.contains('{')));
    }

    #[test]
    fn test_route_matching() {
        let (route, values) = find_route("networks://N_1/wireless/ssids").unwrap();
        assert_eq!(route.template, "networks://{network_id}/wireless/ssids");
        assert_eq!(values["network_id"], "N_1");

        let (route, _) = find_route("organizations://").unwrap();
        assert_eq!(route.source, Source::Api("/organizations"));

        assert!(find_route("networks://N_1/unknown").is_none());
        assert!(find_route("ftp://N_1").is_none());
        assert!(find_route("not a uri").is_none());
    }

    #[test]
    fn test_api_path_encodes_values() {
        let mut values = HashMap::new();
        values.insert("serial", "Q2XX 1".to_string());
        assert_eq!(
            api_path("/devices/{serial}/switch/ports", &values),
            "/devices/Q2XX%201/switch/ports"
        );
    }

    #[tokio::test]
    async fn test_read_calls_mapped_path() {
        let api = RecordingApi::default();
        let contents = read(&api, "networks://N_1/vlans").await.unwrap();
        assert_eq!(contents.mime_type, "application/json");
        assert!(contents.text.contains("\"id\": \"x\""));
        assert_eq!(
            api.paths.lock().unwrap().as_slice(),
            ["/networks/N_1/appliance/vlans"]
        );
    }

    #[tokio::test]
    async fn test_help_resources_skip_the_api() {
        let api = RecordingApi::default();
        let contents = read(&api, "devices://").await.unwrap();
        assert!(contents.text.contains("networks://{network_id}/devices"));
        assert!(api.paths.lock().unwrap().is_empty());

        assert!(matches!(
            read(&api, "sensors://x").await,
            Err(MerakiError::ResourceNotFound(_))
        ));
    }
}
