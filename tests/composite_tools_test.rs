mod common;

use common::FakeDashboard;
use meraki_mcp::{analytics, helpers, search, ToolRegistry};
use serde_json::json;
use std::sync::Arc;

fn registry(api: Arc<FakeDashboard>) -> ToolRegistry {
    let mut registry = ToolRegistry::new(api);
    for tool in helpers::tools()
        .into_iter()
        .chain(analytics::tools())
        .chain(search::tools(false))
    {
        registry.register(tool).unwrap();
    }
    registry
}

#[tokio::test]
async fn test_network_health_report() {
    let api = Arc::new(
        FakeDashboard::new()
            .route(
                "/networks/N_1",
                json!({"id": "N_1", "name": "HQ", "organizationId": "O_1",
                       "productTypes": ["appliance", "wireless"]}),
            )
            .route(
                "/networks/N_1/devices",
                json!([
                    {"name": "Lobby AP", "model": "MR46", "status": "online"},
                    {"name": "Edge", "model": "MX68", "status": "offline"}
                ]),
            )
            .route(
                "/networks/N_1/wireless/connectionStats",
                json!({"success": 95, "auth": 5, "assoc": 0, "dhcp": 0, "dns": 0}),
            )
            .route(
                "/organizations/O_1/appliance/uplink/statuses",
                json!([{"networkId": "N_1", "uplinks": [{"interface": "wan1", "status": "active"}]}]),
            )
            .route(
                "/networks/N_1/events",
                json!({"events": [{"type": "vpn_down"}, {"type": "vpn_down"}]}),
            ),
    );

    let outcome = registry(api)
        .call("check_network_health", &json!({"network_id": "N_1"}))
        .await
        .unwrap();

    assert!(!outcome.is_error, "{}", outcome.text);
    let text = outcome.text;
    assert!(text.starts_with("# 🏥 Network Health Report: HQ"));
    assert!(text.contains("- ✅ Success Rate: 95.0%"));
    assert!(text.contains("- ❌ Auth Failures: 5.0% (5 failures)"));
    assert!(text.contains("- ✅ wan1: Active"));
    assert!(text.contains("- Total Devices: 2"));
    assert!(text.contains("- ❌ Offline: 1"));
    assert!(text.contains("- ❌ vpn_down: 2 occurrences"));
}

#[tokio::test]
async fn test_security_posture_tolerates_missing_features() {
    let api = Arc::new(
        FakeDashboard::new()
            .route("/organizations/O_1", json!({"id": "O_1", "name": "Acme"}))
            .route(
                "/organizations/O_1/networks",
                json!([{"id": "N_1"}, {"id": "N_2"}]),
            )
            .route(
                "/networks/N_1/appliance/security/intrusion",
                json!({"mode": "prevention"}),
            )
            .route(
                "/networks/N_1/appliance/security/malware",
                json!({"mode": "enabled"}),
            )
            .route(
                "/networks/N_1/appliance/contentFiltering",
                json!({"blockedUrlCategories": ["meraki:contentFiltering/category/C1"]}),
            ),
    );

    let outcome = registry(api)
        .call("analyze_security_posture", &json!({"organization_id": "O_1"}))
        .await
        .unwrap();

    assert!(!outcome.is_error, "{}", outcome.text);
    assert!(outcome.text.contains("# 🛡️ Security Posture Analysis: Acme"));
    assert!(outcome.text.contains("- IDS/IPS Enabled: 1/2 (50%)"));
    assert!(outcome.text.contains("**Overall Score: 70/100**"));
}

#[tokio::test]
async fn test_find_device_by_ip_and_reserve_it() {
    let api = Arc::new(
        FakeDashboard::new()
            .route(
                "/networks/N_1/clients",
                json!([
                    {"ip": "10.0.5.20", "mac": "11:22:33:44:55:66", "vlan": 5},
                    {"ip": "10.0.5.146", "mac": "aa:bb:cc:dd:ee:ff", "description": "Printer", "vlan": 5}
                ]),
            )
            .route(
                "/networks/N_1/appliance/vlans/5",
                json!({"id": 5, "fixedIpAssignments": {}}),
            ),
    );
    let registry = registry(api.clone());

    let found = registry
        .call(
            "find_device_by_ip",
            &json!({"ip_address": "10.0.5.146", "network_id": "N_1"}),
        )
        .await
        .unwrap();
    assert!(found.text.starts_with("# 🎯 Device Found: 10.0.5.146"));
    assert!(found.text.contains("- **MAC Address**: aa:bb:cc:dd:ee:ff"));
    assert!(found.text.contains("- Clients searched: 2"));

    let reserved = registry
        .call(
            "create_dhcp_reservation_from_ip",
            &json!({"current_ip": "10.0.5.146", "new_ip": "10.0.5.5", "network_id": "N_1"}),
        )
        .await
        .unwrap();
    assert!(!reserved.is_error, "{}", reserved.text);
    assert!(reserved.text.starts_with("✅ DHCP reservation created"));
    assert_eq!(
        api.writes(),
        vec![(
            "/networks/N_1/appliance/vlans/5".to_string(),
            json!({"fixedIpAssignments": {"aa:bb:cc:dd:ee:ff": {"ip": "10.0.5.5", "name": "Printer"}}})
        )]
    );
}

#[tokio::test]
async fn test_unknown_ip_is_not_an_error() {
    let api = Arc::new(FakeDashboard::new().route("/networks/N_1/clients", json!([])));
    let outcome = registry(api.clone())
        .call(
            "create_dhcp_reservation_from_ip",
            &json!({"current_ip": "10.9.9.9", "new_ip": "10.9.9.10", "network_id": "N_1"}),
        )
        .await
        .unwrap();
    assert!(outcome.text.starts_with("❌ Device not found"));
    assert!(api.writes().is_empty());
}

#[tokio::test]
async fn test_invalid_ip_is_an_error_outcome() {
    let api = Arc::new(FakeDashboard::new());
    let outcome = registry(api.clone())
        .call(
            "find_device_by_ip",
            &json!({"ip_address": "10.0.5", "network_id": "N_1"}),
        )
        .await
        .unwrap();
    assert!(outcome.is_error);
    assert!(outcome.text.starts_with("❌ Failed to find device by ip"));
    assert!(api.paths().is_empty());
}

#[tokio::test]
async fn test_search_event_logs_filters_by_term() {
    let api = Arc::new(FakeDashboard::new().route(
        "/networks/N_1/events",
        json!({
            "pageStartAt": "2024-01-20T15:00:00Z",
            "pageEndAt": "2024-01-20T16:00:00Z",
            "events": [
                {"type": "wpa_auth_fail", "description": "WPA authentication failed",
                 "category": "802.11", "occurredAt": "2024-01-20T15:30:00Z", "clientMac": "aa:bb"},
                {"type": "dhcp_no_lease", "description": "No DHCP lease",
                 "category": "DHCP", "occurredAt": "2024-01-20T15:31:00Z"}
            ]
        }),
    ));

    let outcome = registry(api)
        .call(
            "search_event_logs",
            &json!({"network_id": "N_1", "search_term": "WPA", "timespan": 3600}),
        )
        .await
        .unwrap();

    assert!(!outcome.is_error, "{}", outcome.text);
    assert!(outcome.text.contains("Found 1 matching events"));
    assert!(outcome.text.contains("📌 wpa_auth_fail (1 events)"));
    assert!(outcome.text.contains("   Client: aa:bb"));
    assert!(outcome.text.contains("Time range: Last 1 hours"));
    assert!(!outcome.text.contains("dhcp_no_lease"));
}

#[tokio::test]
async fn test_event_analysis_help_needs_no_api() {
    let api = Arc::new(FakeDashboard::new());
    let outcome = registry(api.clone())
        .call("event_analysis_help", &json!({}))
        .await
        .unwrap();
    assert!(outcome.text.contains("search_event_logs"));
    assert!(api.paths().is_empty());
}

fn network(product_types: serde_json::Value) -> serde_json::Value {
    json!({"id": "N_1", "name": "Branch", "organizationId": "O_1", "productTypes": product_types})
}

#[tokio::test]
async fn test_security_audit_uses_appliance_ssids_for_integrated_wifi() {
    let api = Arc::new(
        FakeDashboard::new()
            .route("/networks/N_1", network(json!(["appliance", "wireless"])))
            .route(
                "/networks/N_1/devices",
                json!([{"name": "Edge", "model": "MX68W", "serial": "Q2MX-0001", "status": "online"}]),
            )
            .route(
                "/networks/N_1/appliance/ssids",
                json!([
                    {"number": 0, "name": "Guest", "enabled": true, "authMode": "open", "visible": true},
                    {"number": 1, "name": "Unused", "enabled": false, "authMode": "psk"}
                ]),
            ),
    );

    let outcome = registry(api.clone())
        .call("perform_security_audit", &json!({"network_id": "N_1"}))
        .await
        .unwrap();

    assert!(!outcome.is_error, "{}", outcome.text);
    let text = outcome.text;
    assert!(text.starts_with("# 🔍 Comprehensive Security Audit Report: Branch"));
    assert!(text.contains("**WiFi Source**: MX Integrated Wireless Only"));
    assert!(text.contains("**Total MX SSIDs**: 2"));
    assert!(text.contains("**Guest** (SSID 0)"));
    assert!(text.contains("  - ❌ Security: Open (No password!)"));
    // every security setting answered 404 and is reported in place
    assert!(text.contains("## ⚠️ IDS/IPS Status: Unable to check"));
    assert!(text.contains("## ⚠️ Malware Protection: Unable to check"));
    assert!(text.contains("## ⚠️ Content Filtering: Unable to check"));
    assert!(text.contains("## ⚠️ Firewall Rules: Unable to check"));
    assert!(text.contains("## ⚠️ Security Events: Unable to check"));
    assert!(text.contains("**Overall Score: 5/100**"));
    assert!(text.contains("- Open WiFi network detected"));

    let paths = api.paths();
    assert!(paths.contains(&"/networks/N_1/appliance/ssids".to_string()));
    assert!(!paths.contains(&"/networks/N_1/wireless/ssids".to_string()));
}

#[tokio::test]
async fn test_security_audit_uses_wireless_ssids_for_access_points() {
    let api = Arc::new(
        FakeDashboard::new()
            .route("/networks/N_1", network(json!(["appliance", "wireless"])))
            .route(
                "/networks/N_1/devices",
                json!([
                    {"name": "Lobby AP", "model": "MR46", "serial": "Q2MR-0001", "status": "online"},
                    {"name": "Edge", "model": "MX68", "serial": "Q2MX-0002", "status": "online"}
                ]),
            )
            .route(
                "/networks/N_1/appliance/security/intrusion",
                json!({"mode": "prevention", "idsRulesets": "balanced"}),
            )
            .route(
                "/networks/N_1/wireless/ssids",
                json!([{"number": 1, "name": "Corp", "enabled": true,
                        "authMode": "psk", "wpaEncryptionMode": "WPA2 only"}]),
            ),
    );

    let outcome = registry(api.clone())
        .call("perform_security_audit", &json!({"network_id": "N_1"}))
        .await
        .unwrap();

    assert!(!outcome.is_error, "{}", outcome.text);
    let text = outcome.text;
    assert!(text.contains("**WiFi Source**: Dedicated MR Access Points Only"));
    assert!(text.contains("**Infrastructure**: 1 dedicated access point"));
    assert!(text.contains("## ✅ IDS/IPS Status: PREVENTION"));
    assert!(text.contains("### ✅ Properly Secured SSIDs:"));
    assert!(text.contains("- Corp (WPA2 only)"));
    assert!(!text.contains("Open WiFi network detected"));

    let paths = api.paths();
    assert!(paths.contains(&"/networks/N_1/wireless/ssids".to_string()));
    assert!(!paths.contains(&"/networks/N_1/appliance/ssids".to_string()));
}

#[tokio::test]
async fn test_analyze_error_patterns_report() {
    let api = Arc::new(FakeDashboard::new().route(
        "/networks/N_1/events",
        json!({"events": [
            {"type": "auth_fail", "deviceSerial": "Q2MR-0001", "clientMac": "aa:bb",
             "occurredAt": "2024-01-20T15:30:00Z"},
            {"type": "auth_fail", "deviceSerial": "Q2MR-0001", "clientMac": "aa:bb",
             "occurredAt": "2024-01-20T15:31:00Z"},
            {"type": "auth_fail", "deviceSerial": "Q2MR-0001", "clientMac": "aa:bb",
             "occurredAt": "2024-01-20T15:32:00Z"},
            {"type": "dhcp_no_lease", "deviceSerial": "Q2MX-0002",
             "occurredAt": "2024-01-20T18:00:00Z"}
        ]}),
    ));

    let outcome = registry(api)
        .call(
            "analyze_error_patterns",
            &json!({"network_id": "N_1", "timespan": 7200, "min_occurrences": 2}),
        )
        .await
        .unwrap();

    assert!(!outcome.is_error, "{}", outcome.text);
    let text = outcome.text;
    assert!(text.contains("Analyzing 4 error events from the last 2 hours"));
    assert!(text.contains("   auth_fail: 3 (75.0%)"));
    assert!(!text.contains("   dhcp_no_lease: 1"));
    assert!(text.contains("   Q2MR-0001: 3 errors"));
    assert!(text.contains("   aa:bb: 3 errors"));
    assert!(text.contains("   15:00 - 3 errors"));
    assert!(text.contains("      Found 1 error clusters"));
    assert!(text.contains("      - 3 errors between 15:30 - 15:32"));
    assert!(text.contains("   🔐 Authentication Issues (3 failures):"));
}

#[tokio::test]
async fn test_identify_root_causes_report() {
    let api = Arc::new(FakeDashboard::new().route(
        "/networks/N_1/events",
        json!({"events": [
            {"type": "radius_auth_fail", "deviceName": "Lobby AP",
             "occurredAt": "2024-01-20T15:31:00Z"},
            {"type": "auth_fail", "deviceName": "Lobby AP", "clientMac": "aa:bb",
             "occurredAt": "2024-01-20T15:32:00Z"},
            {"type": "auth_fail", "deviceName": "Lobby AP", "clientMac": "aa:bb",
             "occurredAt": "2024-01-20T15:33:00Z"},
            {"type": "association_reject", "deviceName": "Lobby AP", "clientMac": "aa:bb",
             "occurredAt": "2024-01-20T15:34:00Z"}
        ]}),
    ));

    let outcome = registry(api.clone())
        .call(
            "identify_root_causes",
            &json!({"network_id": "N_1", "issue_description": "Users can't connect"}),
        )
        .await
        .unwrap();

    assert!(!outcome.is_error, "{}", outcome.text);
    let text = outcome.text;
    assert!(text.contains("Issue: Users can't connect"));
    assert!(text.contains("Analyzing last 2 hours of events"));
    assert!(text.contains("Found 4 relevant events"));
    assert!(text.contains("🔴 Peak activity at 15:30 (4 events)"));
    assert!(text.contains("   • auth_fail: 2"));
    assert!(text.contains("Devices affected: 1"));
    assert!(text.contains("Clients affected: 1"));
    assert!(text.contains("   ⚠️ Authentication Cascade"));
    assert!(text.contains("1. Authentication System Failure (Confidence: 75%)"));
    assert!(text.contains("   Evidence: 50% of events are auth failures"));
    assert!(text.contains("2. Client-Specific Issue (Confidence: 70%)"));
    assert_eq!(api.paths(), vec!["/networks/N_1/events".to_string()]);
}

#[tokio::test]
async fn test_correlate_events_finds_triggers_and_cascades() {
    let api = Arc::new(FakeDashboard::new().route(
        "/networks/N_1/events",
        json!({"events": [
            {"type": "dhcp_no_lease", "description": "No DHCP lease", "clientMac": "aa:bb",
             "occurredAt": "2024-01-20T15:31:00Z"},
            {"type": "auth_fail", "description": "802.1X failed", "deviceName": "Lobby AP",
             "occurredAt": "2024-01-20T15:29:00Z"},
            {"type": "auth_fail", "description": "802.1X failed", "deviceName": "Lobby AP",
             "occurredAt": "2024-01-20T15:29:30Z"},
            {"type": "dhcp_no_lease", "description": "No DHCP lease", "clientMac": "aa:bb",
             "occurredAt": "2024-01-20T15:30:30Z"}
        ]}),
    ));

    let outcome = registry(api)
        .call(
            "correlate_events",
            &json!({"network_id": "N_1", "reference_time": "2024-01-20T15:30:00Z"}),
        )
        .await
        .unwrap();

    assert!(!outcome.is_error, "{}", outcome.text);
    let text = outcome.text;
    assert!(text.contains("Reference time: 2024-01-20 15:30:00 UTC"));
    assert!(text.contains("Correlation window: ±300 seconds"));
    assert!(text.contains("Found 4 events in correlation window"));
    assert!(text.contains("-1m 0s | auth_fail"));
    assert!(text.contains("📌 Potential Triggers (events before reference):"));
    assert!(text.contains("   • Lobby AP: 2 events"));
    assert!(text.contains("📌 Cascade Effects (events after reference):"));
    assert!(text.contains("   • dhcp_no_lease: 2 occurrences"));
    assert!(text.contains("   ⚠️ Authentication → DHCP failure chain detected"));
    assert!(text.contains("• Events before reference: 2"));
    assert!(text.contains("• Events after reference: 2"));
    assert!(text.contains("• Clients involved: 1"));
}

#[tokio::test]
async fn test_correlate_events_rejects_bad_reference_time() {
    let api = Arc::new(FakeDashboard::new());
    let outcome = registry(api.clone())
        .call(
            "correlate_events",
            &json!({"network_id": "N_1", "reference_time": "half past three"}),
        )
        .await
        .unwrap();
    assert_eq!(
        outcome.text,
        "❌ Invalid reference time. Use ISO format: YYYY-MM-DDTHH:MM:SSZ"
    );
    assert!(api.paths().is_empty());
}

#[tokio::test]
async fn test_incident_timeline_validates_times() {
    let api = Arc::new(FakeDashboard::new());
    let registry = registry(api.clone());

    let reversed = registry
        .call(
            "generate_incident_timeline",
            &json!({"network_id": "N_1",
                    "start_time": "2024-01-20T16:00:00Z",
                    "end_time": "2024-01-20T15:00:00Z"}),
        )
        .await
        .unwrap();
    assert_eq!(reversed.text, "❌ End time must be after start time");

    let empty_window = registry
        .call(
            "generate_incident_timeline",
            &json!({"network_id": "N_1",
                    "start_time": "2024-01-20T15:00:00Z",
                    "end_time": "2024-01-20T15:00:00Z"}),
        )
        .await
        .unwrap();
    assert_eq!(empty_window.text, "❌ End time must be after start time");

    let garbled = registry
        .call(
            "generate_incident_timeline",
            &json!({"network_id": "N_1", "start_time": "yesterday",
                    "end_time": "2024-01-20T15:00:00Z"}),
        )
        .await
        .unwrap();
    assert_eq!(
        garbled.text,
        "❌ Invalid time format. Use ISO format: YYYY-MM-DDTHH:MM:SSZ"
    );
    assert!(api.paths().is_empty());
}

#[tokio::test]
async fn test_out_of_range_timespans_are_error_outcomes() {
    let calls = [
        ("search_event_logs", json!({"network_id": "N_1", "timespan": 10_000_000_000_000_000i64})),
        ("search_event_logs", json!({"network_id": "N_1", "timespan": -60})),
        ("analyze_error_patterns", json!({"network_id": "N_1", "timespan": 100_000_000_000_000i64})),
        (
            "identify_root_causes",
            json!({"network_id": "N_1", "issue_description": "slow", "timespan": i64::MAX}),
        ),
        (
            "correlate_events",
            json!({"network_id": "N_1", "reference_time": "2024-01-20T15:30:00Z",
                   "correlation_window": 100_000_000_000_000i64}),
        ),
        (
            "correlate_events",
            json!({"network_id": "N_1", "reference_time": "2024-01-20T15:30:00Z",
                   "correlation_window": 10_000_000_000_000_000i64}),
        ),
        (
            "correlate_events",
            json!({"network_id": "N_1", "reference_time": "2024-01-20T15:30:00Z",
                   "correlation_window": -5}),
        ),
    ];

    let api = Arc::new(FakeDashboard::new());
    let registry = registry(api.clone());
    for (tool, args) in calls {
        let outcome = registry.call(tool, &args).await.unwrap();
        assert!(outcome.is_error, "{} {} gave {}", tool, args, outcome.text);
        assert!(
            outcome.text.contains("Invalid argument 'timespan'")
                || outcome.text.contains("Invalid argument 'correlation_window'"),
            "{}",
            outcome.text
        );
    }
    assert!(api.paths().is_empty());
}
