use super::{
    body, get, list, path, put, query, ENABLED, NAME, NETWORK_ID, NETWORK_IDS, ORGANIZATION_ID,
    RESOLUTION, RULES, SERIAL, SERIALS, T0, T1, TIMESPAN,
};
use crate::domain::model::{EndpointSpec, ParamKind, ParamSpec, ToolModule};

const M: ToolModule = ToolModule::Wireless;

const NUMBER: ParamSpec = path("number", "number", "SSID number (0-14)");
const CLIENT_ID: ParamSpec = path("client_id", "clientId", "Client ID, MAC or IP");
const BAND: ParamSpec = query("band", "band", ParamKind::String, "2.4, 5 or 6");
const SSID: ParamSpec = query("ssid", "ssid", ParamKind::Integer, "Filter by SSID number");
const VLAN: ParamSpec = query("vlan", "vlan", ParamKind::Integer, "Filter by VLAN");
const AP_TAG: ParamSpec = query("ap_tag", "apTag", ParamKind::String, "Filter by AP tag");
const DEVICE_SERIAL: ParamSpec = query("device_serial", "deviceSerial", ParamKind::String, "Filter by AP serial");
const CLIENT_FILTER: ParamSpec = query("client_id", "clientId", ParamKind::String, "Filter by client ID");
const SERIAL_FILTER: ParamSpec = query("serial", "serial", ParamKind::String, "Filter by AP serial");
const AUTO_RESOLUTION: ParamSpec = query(
    "auto_resolution",
    "autoResolution",
    ParamKind::Boolean,
    "Pick the resolution automatically from the timespan",
);

pub(crate) static ENDPOINTS: &[EndpointSpec] = &[
    // SSIDs
    get(
        "get_network_wireless_ssids",
        M,
        "/networks/{networkId}/wireless/ssids",
        "List the MR SSIDs in a network",
        &[NETWORK_ID],
    ),
    get(
        "get_network_wireless_ssid",
        M,
        "/networks/{networkId}/wireless/ssids/{number}",
        "Return a single MR SSID",
        &[NETWORK_ID, NUMBER],
    ),
    put(
        "update_network_wireless_ssid",
        M,
        "/networks/{networkId}/wireless/ssids/{number}",
        "Update the attributes of an MR SSID",
        &[
            NETWORK_ID,
            NUMBER,
            NAME,
            ENABLED,
            body("auth_mode", "authMode", ParamKind::String, "open, psk, 8021x-meraki, 8021x-radius and others"),
            body("encryption_mode", "encryptionMode", ParamKind::String, "wep or wpa"),
            body("psk", "psk", ParamKind::String, "Passkey for psk auth mode"),
            body("wpa_encryption_mode", "wpaEncryptionMode", ParamKind::String, "WPA1 and WPA2, WPA2 only, WPA3 Transition Mode or WPA3 only"),
            body("ip_assignment_mode", "ipAssignmentMode", ParamKind::String, "NAT mode, Bridge mode or Layer 3 roaming"),
            body("use_vlan_tagging", "useVlanTagging", ParamKind::Boolean, "Tag client traffic with a VLAN"),
            body("default_vlan_id", "defaultVlanId", ParamKind::Integer, "Default VLAN for client traffic"),
            body("splash_page", "splashPage", ParamKind::String, "Splash page type"),
            body("visible", "visible", ParamKind::Boolean, "Advertise the SSID"),
            body("band_selection", "bandSelection", ParamKind::String, "Band selection for the SSID"),
            body("min_bitrate", "minBitrate", ParamKind::Number, "Minimum bitrate in Mbps"),
            body("per_client_bandwidth_limit_up", "perClientBandwidthLimitUp", ParamKind::Integer, "Upload limit in Kbps"),
            body("per_client_bandwidth_limit_down", "perClientBandwidthLimitDown", ParamKind::Integer, "Download limit in Kbps"),
        ],
    ),
    get(
        "get_network_wireless_ssid_firewall_l3_firewall_rules",
        M,
        "/networks/{networkId}/wireless/ssids/{number}/firewall/l3FirewallRules",
        "Return the L3 firewall rules for an SSID on an MR network",
        &[NETWORK_ID, NUMBER],
    ),
    put(
        "update_network_wireless_ssid_firewall_l3_firewall_rules",
        M,
        "/networks/{networkId}/wireless/ssids/{number}/firewall/l3FirewallRules",
        "Update the L3 firewall rules of an SSID on an MR network",
        &[
            NETWORK_ID,
            NUMBER,
            RULES,
            body("allow_lan_access", "allowLanAccess", ParamKind::Boolean, "Allow wireless clients to access the LAN"),
        ],
    ),
    get(
        "get_network_wireless_ssid_firewall_l7_firewall_rules",
        M,
        "/networks/{networkId}/wireless/ssids/{number}/firewall/l7FirewallRules",
        "Return the L7 firewall rules for an SSID on an MR network",
        &[NETWORK_ID, NUMBER],
    ),
    get(
        "get_network_wireless_ssid_splash_settings",
        M,
        "/networks/{networkId}/wireless/ssids/{number}/splash/settings",
        "Display the splash page settings for the given SSID",
        &[NETWORK_ID, NUMBER],
    ),
    get(
        "get_network_wireless_ssid_traffic_shaping_rules",
        M,
        "/networks/{networkId}/wireless/ssids/{number}/trafficShaping/rules",
        "Display the traffic shaping settings for an SSID on an MR network",
        &[NETWORK_ID, NUMBER],
    ),
    get(
        "get_network_wireless_ssid_identity_psks",
        M,
        "/networks/{networkId}/wireless/ssids/{number}/identityPsks",
        "List all Identity PSKs in a wireless network",
        &[NETWORK_ID, NUMBER],
    ),
    // RF
    get(
        "get_network_wireless_rf_profiles",
        M,
        "/networks/{networkId}/wireless/rfProfiles",
        "List RF profiles for this network",
        &[NETWORK_ID],
    ),
    get(
        "get_network_wireless_rf_profile",
        M,
        "/networks/{networkId}/wireless/rfProfiles/{rfProfileId}",
        "Return a RF profile",
        &[NETWORK_ID, path("rf_profile_id", "rfProfileId", "RF profile ID")],
    ),
    get(
        "get_network_wireless_settings",
        M,
        "/networks/{networkId}/wireless/settings",
        "Return the wireless settings for a network",
        &[NETWORK_ID],
    ),
    put(
        "update_network_wireless_settings",
        M,
        "/networks/{networkId}/wireless/settings",
        "Update the wireless settings for a network",
        &[
            NETWORK_ID,
            body("meshing_enabled", "meshingEnabled", ParamKind::Boolean, "Toggle for enabling or disabling meshing"),
            body("ipv6_bridge_enabled", "ipv6BridgeEnabled", ParamKind::Boolean, "Toggle for enabling or disabling IPv6 bridging"),
            body("location_analytics_enabled", "locationAnalyticsEnabled", ParamKind::Boolean, "Toggle for enabling or disabling location analytics"),
            body("led_lights_on", "ledLightsOn", ParamKind::Boolean, "Toggle for enabling or disabling LED lights"),
        ],
    ),
    // Client and connection health
    get(
        "get_network_wireless_connection_stats",
        M,
        "/networks/{networkId}/wireless/connectionStats",
        "Aggregated connectivity info for this network",
        &[NETWORK_ID, T0, T1, TIMESPAN, BAND, SSID, VLAN, AP_TAG],
    ),
    get(
        "get_network_wireless_clients_connection_stats",
        M,
        "/networks/{networkId}/wireless/clients/connectionStats",
        "Aggregated connectivity info for this network, grouped by clients",
        &[NETWORK_ID, T0, T1, TIMESPAN, BAND, SSID, VLAN, AP_TAG],
    ),
    get(
        "get_network_wireless_client_connection_stats",
        M,
        "/networks/{networkId}/wireless/clients/{clientId}/connectionStats",
        "Aggregated connectivity info for a given client on this network",
        &[NETWORK_ID, CLIENT_ID, T0, T1, TIMESPAN, BAND, SSID, VLAN, AP_TAG],
    ),
    list(
        "get_network_wireless_client_connectivity_events",
        M,
        "/networks/{networkId}/wireless/clients/{clientId}/connectivityEvents",
        "List the wireless connectivity events for a client within a network",
        &[
            NETWORK_ID,
            CLIENT_ID,
            T0,
            T1,
            TIMESPAN,
            BAND,
            SSID,
            query("types", "types", ParamKind::StringArray, "Filter by event types"),
            query("included_severities", "includedSeverities", ParamKind::StringArray, "Severities to include: good, info, warn or bad"),
        ],
    ),
    get(
        "get_network_wireless_failed_connections",
        M,
        "/networks/{networkId}/wireless/failedConnections",
        "List of all failed client connection events on this network",
        &[NETWORK_ID, T0, T1, TIMESPAN, BAND, SSID, VLAN, AP_TAG, SERIAL_FILTER, CLIENT_FILTER],
    ),
    get(
        "get_network_wireless_latency_stats",
        M,
        "/networks/{networkId}/wireless/latencyStats",
        "Aggregated latency info for this network",
        &[NETWORK_ID, T0, T1, TIMESPAN, BAND, SSID, VLAN, AP_TAG],
    ),
    // History
    get(
        "get_network_wireless_channel_utilization_history",
        M,
        "/networks/{networkId}/wireless/channelUtilizationHistory",
        "Return AP channel utilization over time for a device or network client",
        &[NETWORK_ID, T0, T1, TIMESPAN, RESOLUTION, AUTO_RESOLUTION, DEVICE_SERIAL, BAND],
    ),
    get(
        "get_network_wireless_signal_quality_history",
        M,
        "/networks/{networkId}/wireless/signalQualityHistory",
        "Return signal quality (SNR/RSSI) over time for a device or network client",
        &[NETWORK_ID, T0, T1, TIMESPAN, RESOLUTION, AUTO_RESOLUTION, DEVICE_SERIAL, BAND, CLIENT_FILTER],
    ),
    get(
        "get_network_wireless_usage_history",
        M,
        "/networks/{networkId}/wireless/usageHistory",
        "Return AP usage over time for a device or network client",
        &[NETWORK_ID, T0, T1, TIMESPAN, RESOLUTION, AUTO_RESOLUTION, DEVICE_SERIAL, BAND, CLIENT_FILTER, SSID],
    ),
    get(
        "get_network_wireless_client_count_history",
        M,
        "/networks/{networkId}/wireless/clientCountHistory",
        "Return wireless client counts over time for a network, device, or network client",
        &[NETWORK_ID, T0, T1, TIMESPAN, RESOLUTION, AUTO_RESOLUTION, DEVICE_SERIAL, BAND, SSID],
    ),
    get(
        "get_network_wireless_data_rate_history",
        M,
        "/networks/{networkId}/wireless/dataRateHistory",
        "Return PHY data rates over time for a network, device, or network client",
        &[NETWORK_ID, T0, T1, TIMESPAN, RESOLUTION, AUTO_RESOLUTION, DEVICE_SERIAL, BAND, SSID],
    ),
    get(
        "get_network_wireless_air_marshal",
        M,
        "/networks/{networkId}/wireless/airMarshal",
        "List Air Marshal scan results from a network",
        &[NETWORK_ID, T0, TIMESPAN],
    ),
    get(
        "get_network_wireless_bluetooth_settings",
        M,
        "/networks/{networkId}/wireless/bluetooth/settings",
        "Return the Bluetooth settings for a network",
        &[NETWORK_ID],
    ),
    list(
        "get_network_wireless_mesh_statuses",
        M,
        "/networks/{networkId}/wireless/meshStatuses",
        "List wireless mesh statuses for repeaters",
        &[NETWORK_ID],
    ),
    // Access points
    get(
        "get_device_wireless_status",
        M,
        "/devices/{serial}/wireless/status",
        "Return the SSID statuses of an access point",
        &[SERIAL],
    ),
    get(
        "get_device_wireless_radio_settings",
        M,
        "/devices/{serial}/wireless/radio/settings",
        "Return the radio settings of a device",
        &[SERIAL],
    ),
    put(
        "update_device_wireless_radio_settings",
        M,
        "/devices/{serial}/wireless/radio/settings",
        "Update the radio settings of a device",
        &[
            SERIAL,
            body("rf_profile_id", "rfProfileId", ParamKind::String, "RF profile to assign"),
            body("two_four_ghz_settings", "twoFourGhzSettings", ParamKind::Json, "2.4 GHz channel and power as JSON"),
            body("five_ghz_settings", "fiveGhzSettings", ParamKind::Json, "5 GHz channel, width and power as JSON"),
        ],
    ),
    get(
        "get_device_wireless_connection_stats",
        M,
        "/devices/{serial}/wireless/connectionStats",
        "Aggregated connectivity info for a given AP on this network",
        &[SERIAL, T0, T1, TIMESPAN, BAND, SSID, VLAN],
    ),
    get(
        "get_device_wireless_latency_stats",
        M,
        "/devices/{serial}/wireless/latencyStats",
        "Aggregated latency info for a given AP on this network",
        &[SERIAL, T0, T1, TIMESPAN, BAND, SSID, VLAN],
    ),
    get(
        "get_device_wireless_bluetooth_settings",
        M,
        "/devices/{serial}/wireless/bluetooth/settings",
        "Return the bluetooth settings for a wireless device",
        &[SERIAL],
    ),
    // Organization-wide
    list(
        "get_organization_wireless_devices_ethernet_statuses",
        M,
        "/organizations/{organizationId}/wireless/devices/ethernet/statuses",
        "List the most recent Ethernet link speed, duplex, aggregation and power mode for access points",
        &[ORGANIZATION_ID, NETWORK_IDS],
    ),
    list(
        "get_organization_wireless_ssids_statuses_by_device",
        M,
        "/organizations/{organizationId}/wireless/ssids/statuses/byDevice",
        "List status information of all BSSIDs in your organization",
        &[ORGANIZATION_ID, NETWORK_IDS, SERIALS],
    ),
    list(
        "get_organization_wireless_devices_channel_utilization_by_device",
        M,
        "/organizations/{organizationId}/wireless/devices/channelUtilization/byDevice",
        "Get average channel utilization for all bands in a network, split by AP",
        &[ORGANIZATION_ID, NETWORK_IDS, SERIALS, T0, T1, TIMESPAN],
    ),
    list(
        "get_organization_wireless_rf_profiles_assignments_by_device",
        M,
        "/organizations/{organizationId}/wireless/rfProfiles/assignments/byDevice",
        "List the RF profiles of an organization by device",
        &[ORGANIZATION_ID, NETWORK_IDS, SERIALS],
    ),
];
