use httpmock::prelude::*;
use meraki_mcp::catalog;
use meraki_mcp::core::EndpointTool;
use meraki_mcp::{MerakiClient, ToolRegistry};
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;

fn registry(server: &MockServer, tools: &[&str]) -> ToolRegistry {
    let client = MerakiClient::new("test-key", &server.base_url(), Duration::from_secs(5), 0)
        .unwrap()
        .with_retry_wait(Duration::from_millis(10));
    let mut registry = ToolRegistry::new(Arc::new(client));
    for name in tools {
        let spec = catalog::find(name).unwrap();
        registry.register(Arc::new(EndpointTool::new(spec))).unwrap();
    }
    registry
}

#[tokio::test]
async fn test_get_organizations_renders_markdown() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/organizations")
            .header("Authorization", "Bearer test-key");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(json!([
                {"id": "549236", "name": "Acme Corp", "url": "https://n1.meraki.com/o/x"}
            ]));
    });

    let outcome = registry(&server, &["get_organizations"])
        .call("get_organizations", &json!({}))
        .await
        .unwrap();

    mock.assert();
    assert!(!outcome.is_error);
    assert!(outcome.text.starts_with("# Organizations"));
    assert!(outcome.text.contains("**Total**: 1"));
    assert!(outcome.text.contains("- **Acme Corp**"));
    assert!(outcome.text.contains("id: 549236"));
}

#[tokio::test]
async fn test_path_and_query_parameters_are_mapped() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/organizations/549236/networks")
            .query_param("perPage", "5")
            .query_param("isBoundToConfigTemplate", "false");
        then.status(200).json_body(json!([{"id": "N_1", "name": "HQ"}]));
    });

    let outcome = registry(&server, &["get_organization_networks"])
        .call(
            "get_organization_networks",
            &json!({
                "organization_id": "549236",
                "per_page": 5,
                "is_bound_to_config_template": false
            }),
        )
        .await
        .unwrap();

    mock.assert();
    assert!(!outcome.is_error, "{}", outcome.text);
    assert!(outcome.text.contains("- **HQ**"));
}

#[tokio::test]
async fn test_write_tool_sends_json_body() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(PUT)
            .path("/devices/Q2XX-AAAA-0001")
            .json_body(json!({"name": "Core Switch"}));
        then.status(200)
            .json_body(json!({"serial": "Q2XX-AAAA-0001", "name": "Core Switch"}));
    });

    let outcome = registry(&server, &["update_device"])
        .call(
            "update_device",
            &json!({"serial": "Q2XX-AAAA-0001", "name": "Core Switch"}),
        )
        .await
        .unwrap();

    mock.assert();
    assert!(!outcome.is_error, "{}", outcome.text);
    assert!(outcome.text.starts_with("✅ "));
    assert!(outcome.text.contains("updated successfully"));
}

#[tokio::test]
async fn test_api_error_becomes_error_text() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/devices/Q2XX-MISSING");
        then.status(404).json_body(json!({"errors": ["Device not found"]}));
    });

    let outcome = registry(&server, &["get_device"])
        .call("get_device", &json!({"serial": "Q2XX-MISSING"}))
        .await
        .unwrap();

    assert!(outcome.is_error);
    assert_eq!(
        outcome.text,
        "❌ Failed to get device: Meraki API returned 404: Device not found"
    );
}

#[tokio::test]
async fn test_missing_path_argument_is_reported_without_a_request() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.any_request();
        then.status(200).json_body(json!({}));
    });

    let outcome = registry(&server, &["get_device"])
        .call("get_device", &json!({}))
        .await
        .unwrap();

    assert!(outcome.is_error);
    assert!(outcome.text.contains("serial"));
    mock.assert_hits(0);
}
