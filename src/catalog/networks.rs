use super::{
    body, body_required, delete, get, list, path, post, put, query, query_required, NAME,
    NETWORK_ID, RESOLUTION, T0, T1, TIMESPAN,
};
use crate::domain::model::{EndpointSpec, ParamKind, ParamSpec, ToolModule};

const M: ToolModule = ToolModule::Networks;

const CLIENT_ID: ParamSpec = path(
    "client_id",
    "clientId",
    "Client ID, MAC address or IP address",
);
const GROUP_POLICY_ID: ParamSpec = path("group_policy_id", "groupPolicyId", "Group policy ID");

pub(crate) static ENDPOINTS: &[EndpointSpec] = &[
    get(
        "get_network",
        M,
        "/networks/{networkId}",
        "Return a network",
        &[NETWORK_ID],
    ),
    put(
        "update_network",
        M,
        "/networks/{networkId}",
        "Update a network: name, tags, timezone or notes",
        &[
            NETWORK_ID,
            NAME,
            body("time_zone", "timeZone", ParamKind::String, "Timezone, e.g. Australia/Perth"),
            body("tags", "tags", ParamKind::StringArray, "Network tags"),
            body("notes", "notes", ParamKind::String, "Notes"),
        ],
    ),
    delete(
        "delete_network",
        M,
        "/networks/{networkId}",
        "Delete a network",
        &[NETWORK_ID],
    ),
    get(
        "get_network_devices",
        M,
        "/networks/{networkId}/devices",
        "List the devices in a network",
        &[NETWORK_ID],
    ),
    post(
        "claim_network_devices",
        M,
        "/networks/{networkId}/devices/claim",
        "Claim devices into a network",
        &[
            NETWORK_ID,
            body_required("serials", "serials", ParamKind::StringArray, "Device serials"),
        ],
    ),
    post(
        "remove_network_devices",
        M,
        "/networks/{networkId}/devices/remove",
        "Remove a single device from a network",
        &[
            NETWORK_ID,
            body_required("serial", "serial", ParamKind::String, "Device serial"),
        ],
    ),
    list(
        "get_network_clients",
        M,
        "/networks/{networkId}/clients",
        "List the clients that have used this network in the timespan",
        &[
            NETWORK_ID,
            T0,
            TIMESPAN,
            query("statuses", "statuses", ParamKind::StringArray, "Online or Offline"),
            query("ip", "ip", ParamKind::String, "Filter by IP address"),
            query("mac", "mac", ParamKind::String, "Filter by MAC address"),
            query("os", "os", ParamKind::String, "Filter by operating system"),
            query("description", "description", ParamKind::String, "Filter by description"),
            query("vlan", "vlan", ParamKind::String, "Filter by VLAN"),
            query("recent_device_connections", "recentDeviceConnections", ParamKind::StringArray, "Wired or Wireless"),
        ],
    ),
    get(
        "get_network_client",
        M,
        "/networks/{networkId}/clients/{clientId}",
        "Return the client associated with the given identifier",
        &[NETWORK_ID, CLIENT_ID],
    ),
    get(
        "get_network_client_policy",
        M,
        "/networks/{networkId}/clients/{clientId}/policy",
        "Return the policy assigned to a client on the network",
        &[NETWORK_ID, CLIENT_ID],
    ),
    put(
        "update_network_client_policy",
        M,
        "/networks/{networkId}/clients/{clientId}/policy",
        "Update the policy assigned to a client on the network",
        &[
            NETWORK_ID,
            CLIENT_ID,
            body_required("device_policy", "devicePolicy", ParamKind::String, "Whitelisted, Blocked, Normal or Group policy"),
            body("group_policy_id", "groupPolicyId", ParamKind::String, "Group policy when devicePolicy is Group policy"),
        ],
    ),
    get(
        "get_network_client_usage_history",
        M,
        "/networks/{networkId}/clients/{clientId}/usageHistory",
        "Return the client's daily usage history",
        &[NETWORK_ID, CLIENT_ID],
    ),
    list(
        "get_network_client_traffic_history",
        M,
        "/networks/{networkId}/clients/{clientId}/trafficHistory",
        "Return the client's network traffic data over time",
        &[NETWORK_ID, CLIENT_ID],
    ),
    get(
        "get_network_clients_overview",
        M,
        "/networks/{networkId}/clients/overview",
        "Return overview statistics for network clients",
        &[NETWORK_ID, T0, T1, TIMESPAN, RESOLUTION],
    ),
    list(
        "get_network_clients_application_usage",
        M,
        "/networks/{networkId}/clients/applicationUsage",
        "Return the application usage data for clients",
        &[
            NETWORK_ID,
            query_required("clients", "clients", ParamKind::String, "Comma separated client IDs, MACs or IPs"),
            query("ssid_number", "ssidNumber", ParamKind::Integer, "Filter by SSID number"),
            T0,
            T1,
            TIMESPAN,
        ],
    ),
    list(
        "get_network_events",
        M,
        "/networks/{networkId}/events",
        "List the events for the network",
        &[
            NETWORK_ID,
            query("product_type", "productType", ParamKind::String, "appliance, switch, wireless, camera, cellularGateway..."),
            query("included_event_types", "includedEventTypes", ParamKind::StringArray, "Event types to include"),
            query("excluded_event_types", "excludedEventTypes", ParamKind::StringArray, "Event types to exclude"),
            query("device_mac", "deviceMac", ParamKind::String, "Filter by device MAC"),
            query("device_serial", "deviceSerial", ParamKind::String, "Filter by device serial"),
            query("device_name", "deviceName", ParamKind::String, "Filter by device name"),
            query("client_ip", "clientIp", ParamKind::String, "Filter by client IP"),
            query("client_mac", "clientMac", ParamKind::String, "Filter by client MAC"),
            query("client_name", "clientName", ParamKind::String, "Filter by client name"),
            query("sm_device_mac", "smDeviceMac", ParamKind::String, "Filter by Systems Manager device MAC"),
            query("sm_device_name", "smDeviceName", ParamKind::String, "Filter by Systems Manager device name"),
        ],
    ),
    get(
        "get_network_events_event_types",
        M,
        "/networks/{networkId}/events/eventTypes",
        "List the event type to human-readable description",
        &[NETWORK_ID],
    ),
    list(
        "get_network_alerts_history",
        M,
        "/networks/{networkId}/alerts/history",
        "Return the alert history for this network",
        &[NETWORK_ID],
    ),
    get(
        "get_network_alerts_settings",
        M,
        "/networks/{networkId}/alerts/settings",
        "Return the alert configuration for this network",
        &[NETWORK_ID],
    ),
    put(
        "update_network_alerts_settings",
        M,
        "/networks/{networkId}/alerts/settings",
        "Update the alert configuration for this network",
        &[
            NETWORK_ID,
            body("default_destinations", "defaultDestinations", ParamKind::Json, "Default destinations as JSON"),
            body("alerts", "alerts", ParamKind::Json, "Alert settings as JSON array"),
        ],
    ),
    get(
        "get_network_health_alerts",
        M,
        "/networks/{networkId}/health/alerts",
        "Return all global alerts on this network",
        &[NETWORK_ID],
    ),
    get(
        "get_network_firmware_upgrades",
        M,
        "/networks/{networkId}/firmwareUpgrades",
        "Get firmware upgrade information for a network",
        &[NETWORK_ID],
    ),
    put(
        "update_network_firmware_upgrades",
        M,
        "/networks/{networkId}/firmwareUpgrades",
        "Update firmware upgrade information for a network",
        &[
            NETWORK_ID,
            body("upgrade_window", "upgradeWindow", ParamKind::Json, "Upgrade window as JSON {dayOfWeek, hourOfDay}"),
            body("timezone", "timezone", ParamKind::String, "Timezone for the upgrade window"),
            body("products", "products", ParamKind::Json, "Per-product upgrade settings as JSON"),
        ],
    ),
    get(
        "get_network_group_policies",
        M,
        "/networks/{networkId}/groupPolicies",
        "List the group policies in a network",
        &[NETWORK_ID],
    ),
    get(
        "get_network_group_policy",
        M,
        "/networks/{networkId}/groupPolicies/{groupPolicyId}",
        "Display a group policy",
        &[NETWORK_ID, GROUP_POLICY_ID],
    ),
    post(
        "create_network_group_policy",
        M,
        "/networks/{networkId}/groupPolicies",
        "Create a group policy",
        &[
            NETWORK_ID,
            body_required("name", "name", ParamKind::String, "Group policy name"),
            body("scheduling", "scheduling", ParamKind::Json, "Schedule as JSON"),
            body("bandwidth", "bandwidth", ParamKind::Json, "Bandwidth settings as JSON"),
            body("firewall_and_traffic_shaping", "firewallAndTrafficShaping", ParamKind::Json, "Firewall and traffic shaping as JSON"),
            body("vlan_tagging", "vlanTagging", ParamKind::Json, "VLAN tagging as JSON"),
            body("splash_auth_settings", "splashAuthSettings", ParamKind::String, "network default or bypass"),
        ],
    ),
    delete(
        "delete_network_group_policy",
        M,
        "/networks/{networkId}/groupPolicies/{groupPolicyId}",
        "Delete a group policy",
        &[NETWORK_ID, GROUP_POLICY_ID],
    ),
    get(
        "get_network_settings",
        M,
        "/networks/{networkId}/settings",
        "Return the settings for a network",
        &[NETWORK_ID],
    ),
    put(
        "update_network_settings",
        M,
        "/networks/{networkId}/settings",
        "Update the settings for a network",
        &[
            NETWORK_ID,
            body("local_status_page_enabled", "localStatusPageEnabled", ParamKind::Boolean, "Enable the local device status pages"),
            body("remote_status_page_enabled", "remoteStatusPageEnabled", ParamKind::Boolean, "Enable access to the status page from the LAN IP"),
            body("named_vlans", "namedVlans", ParamKind::Json, "Named VLAN settings as JSON"),
        ],
    ),
    get(
        "get_network_snmp",
        M,
        "/networks/{networkId}/snmp",
        "Return the SNMP settings for a network",
        &[NETWORK_ID],
    ),
    get(
        "get_network_syslog_servers",
        M,
        "/networks/{networkId}/syslogServers",
        "List the syslog servers for a network",
        &[NETWORK_ID],
    ),
    put(
        "update_network_syslog_servers",
        M,
        "/networks/{networkId}/syslogServers",
        "Update the syslog servers for a network",
        &[
            NETWORK_ID,
            body_required("servers", "servers", ParamKind::Json, "Servers as JSON array of {host, port, roles}"),
        ],
    ),
    get(
        "get_network_traffic",
        M,
        "/networks/{networkId}/traffic",
        "Return the traffic analysis data for this network",
        &[
            NETWORK_ID,
            T0,
            TIMESPAN,
            query("device_type", "deviceType", ParamKind::String, "combined, wireless, switch or appliance"),
        ],
    ),
    get(
        "get_network_traffic_analysis",
        M,
        "/networks/{networkId}/trafficAnalysis",
        "Return the traffic analysis settings for a network",
        &[NETWORK_ID],
    ),
    get(
        "get_network_traffic_shaping_application_categories",
        M,
        "/networks/{networkId}/trafficShaping/applicationCategories",
        "Return the application categories for traffic shaping rules",
        &[NETWORK_ID],
    ),
    get(
        "get_network_topology_link_layer",
        M,
        "/networks/{networkId}/topology/linkLayer",
        "List the LLDP and CDP information for all discovered devices and connections",
        &[NETWORK_ID],
    ),
    get(
        "get_network_webhooks_http_servers",
        M,
        "/networks/{networkId}/webhooks/httpServers",
        "List the HTTP servers for a network",
        &[NETWORK_ID],
    ),
    post(
        "create_network_webhooks_http_server",
        M,
        "/networks/{networkId}/webhooks/httpServers",
        "Add an HTTP server to a network",
        &[
            NETWORK_ID,
            body_required("name", "name", ParamKind::String, "Server name"),
            body_required("url", "url", ParamKind::String, "Server URL"),
            body("shared_secret", "sharedSecret", ParamKind::String, "Shared secret"),
        ],
    ),
    get(
        "get_network_meraki_auth_users",
        M,
        "/networks/{networkId}/merakiAuthUsers",
        "List the authorized users configured under Meraki Authentication",
        &[NETWORK_ID],
    ),
    get(
        "get_network_floor_plans",
        M,
        "/networks/{networkId}/floorPlans",
        "List the floor plans that belong to your network",
        &[NETWORK_ID],
    ),
    post(
        "bind_network",
        M,
        "/networks/{networkId}/bind",
        "Bind a network to a template",
        &[
            NETWORK_ID,
            body_required("config_template_id", "configTemplateId", ParamKind::String, "Template ID"),
            body("auto_bind", "autoBind", ParamKind::Boolean, "Automatically bind switches to profiles"),
        ],
    ),
    post(
        "unbind_network",
        M,
        "/networks/{networkId}/unbind",
        "Unbind a network from a template",
        &[
            NETWORK_ID,
            body("retain_configs", "retainConfigs", ParamKind::Boolean, "Keep the template configuration"),
        ],
    ),
    list(
        "get_network_policies_by_client",
        M,
        "/networks/{networkId}/policies/byClient",
        "Get policies for all clients with policies",
        &[NETWORK_ID, T0, TIMESPAN],
    ),
    list(
        "get_network_bluetooth_clients",
        M,
        "/networks/{networkId}/bluetoothClients",
        "List the Bluetooth clients seen by APs in this network",
        &[NETWORK_ID, T0, TIMESPAN],
    ),
    get(
        "get_network_netflow",
        M,
        "/networks/{networkId}/netflow",
        "Return the NetFlow traffic reporting settings for a network",
        &[NETWORK_ID],
    ),
];
