use super::{
    body, body_required, delete, get, list, path, post, put, query, ENABLED, NAME, NETWORK_ID,
    NETWORK_IDS, ORGANIZATION_ID, RESOLUTION, RULES, SERIAL, SERIALS, T0, T1, TIMESPAN,
};
use crate::domain::model::{EndpointSpec, ParamKind, ParamSpec, ToolModule};

const M: ToolModule = ToolModule::Appliance;

const VLAN_ID: ParamSpec = path("vlan_id", "vlanId", "VLAN ID");
const PORT_ID: ParamSpec = path("port_id", "portId", "Appliance port number");
const NUMBER: ParamSpec = path("number", "number", "SSID number (0-4)");
const SYSLOG_DEFAULT_RULE: ParamSpec = body(
    "syslog_default_rule",
    "syslogDefaultRule",
    ParamKind::Boolean,
    "Log the special default rule",
);

pub(crate) static ENDPOINTS: &[EndpointSpec] = &[
    // Firewall
    get(
        "get_network_appliance_firewall_l3_firewall_rules",
        M,
        "/networks/{networkId}/appliance/firewall/l3FirewallRules",
        "Return the L3 firewall rules for an MX network",
        &[NETWORK_ID],
    ),
    put(
        "update_network_appliance_firewall_l3_firewall_rules",
        M,
        "/networks/{networkId}/appliance/firewall/l3FirewallRules",
        "Update the L3 firewall rules of an MX network",
        &[NETWORK_ID, RULES, SYSLOG_DEFAULT_RULE],
    ),
    get(
        "get_network_appliance_firewall_l7_firewall_rules",
        M,
        "/networks/{networkId}/appliance/firewall/l7FirewallRules",
        "List the MX L7 firewall rules for an MX network",
        &[NETWORK_ID],
    ),
    put(
        "update_network_appliance_firewall_l7_firewall_rules",
        M,
        "/networks/{networkId}/appliance/firewall/l7FirewallRules",
        "Update the MX L7 firewall rules for an MX network",
        &[NETWORK_ID, RULES],
    ),
    get(
        "get_network_appliance_firewall_l7_firewall_rules_application_categories",
        M,
        "/networks/{networkId}/appliance/firewall/l7FirewallRules/applicationCategories",
        "Return the L7 firewall application categories and their associated applications",
        &[NETWORK_ID],
    ),
    get(
        "get_network_appliance_firewall_inbound_firewall_rules",
        M,
        "/networks/{networkId}/appliance/firewall/inboundFirewallRules",
        "Return the inbound firewall rules for an MX network",
        &[NETWORK_ID],
    ),
    put(
        "update_network_appliance_firewall_inbound_firewall_rules",
        M,
        "/networks/{networkId}/appliance/firewall/inboundFirewallRules",
        "Update the inbound firewall rules of an MX network",
        &[NETWORK_ID, RULES, SYSLOG_DEFAULT_RULE],
    ),
    get(
        "get_network_appliance_firewall_port_forwarding_rules",
        M,
        "/networks/{networkId}/appliance/firewall/portForwardingRules",
        "Return the port forwarding rules for an MX network",
        &[NETWORK_ID],
    ),
    put(
        "update_network_appliance_firewall_port_forwarding_rules",
        M,
        "/networks/{networkId}/appliance/firewall/portForwardingRules",
        "Update the port forwarding rules for an MX network",
        &[NETWORK_ID, RULES],
    ),
    get(
        "get_network_appliance_firewall_one_to_one_nat_rules",
        M,
        "/networks/{networkId}/appliance/firewall/oneToOneNatRules",
        "Return the 1:1 NAT mapping rules for an MX network",
        &[NETWORK_ID],
    ),
    get(
        "get_network_appliance_firewall_one_to_many_nat_rules",
        M,
        "/networks/{networkId}/appliance/firewall/oneToManyNatRules",
        "Return the 1:Many NAT mapping rules for an MX network",
        &[NETWORK_ID],
    ),
    get(
        "get_network_appliance_firewall_settings",
        M,
        "/networks/{networkId}/appliance/firewall/settings",
        "Return the firewall settings for this network",
        &[NETWORK_ID],
    ),
    get(
        "get_network_appliance_firewall_firewalled_services",
        M,
        "/networks/{networkId}/appliance/firewall/firewalledServices",
        "List the appliance services and their accessibility rules",
        &[NETWORK_ID],
    ),
    // Content filtering and threat protection
    get(
        "get_network_appliance_content_filtering",
        M,
        "/networks/{networkId}/appliance/contentFiltering",
        "Return the content filtering settings for an MX network",
        &[NETWORK_ID],
    ),
    put(
        "update_network_appliance_content_filtering",
        M,
        "/networks/{networkId}/appliance/contentFiltering",
        "Update the content filtering settings for an MX network",
        &[
            NETWORK_ID,
            body("allowed_url_patterns", "allowedUrlPatterns", ParamKind::StringArray, "URL patterns to allow"),
            body("blocked_url_patterns", "blockedUrlPatterns", ParamKind::StringArray, "URL patterns to block"),
            body("blocked_url_categories", "blockedUrlCategories", ParamKind::StringArray, "URL category IDs to block"),
            body("url_category_list_size", "urlCategoryListSize", ParamKind::String, "topSites or fullList"),
        ],
    ),
    get(
        "get_network_appliance_content_filtering_categories",
        M,
        "/networks/{networkId}/appliance/contentFiltering/categories",
        "List all available content filtering categories for an MX network",
        &[NETWORK_ID],
    ),
    get(
        "get_network_appliance_security_intrusion",
        M,
        "/networks/{networkId}/appliance/security/intrusion",
        "Return all supported intrusion settings for an MX network",
        &[NETWORK_ID],
    ),
    put(
        "update_network_appliance_security_intrusion",
        M,
        "/networks/{networkId}/appliance/security/intrusion",
        "Set the supported intrusion settings for an MX network",
        &[
            NETWORK_ID,
            body("mode", "mode", ParamKind::String, "prevention, detection or disabled"),
            body("ids_rulesets", "idsRulesets", ParamKind::String, "connectivity, balanced or security"),
            body("protected_networks", "protectedNetworks", ParamKind::Json, "Protected networks as JSON"),
        ],
    ),
    get(
        "get_network_appliance_security_malware",
        M,
        "/networks/{networkId}/appliance/security/malware",
        "Return all supported malware settings for an MX network",
        &[NETWORK_ID],
    ),
    put(
        "update_network_appliance_security_malware",
        M,
        "/networks/{networkId}/appliance/security/malware",
        "Set the supported malware settings for an MX network",
        &[
            NETWORK_ID,
            body_required("mode", "mode", ParamKind::String, "enabled or disabled"),
            body("allowed_urls", "allowedUrls", ParamKind::Json, "Allowed URLs as JSON"),
            body("allowed_files", "allowedFiles", ParamKind::Json, "Allowed files as JSON"),
        ],
    ),
    list(
        "get_network_appliance_security_events",
        M,
        "/networks/{networkId}/appliance/security/events",
        "List the security events for a network",
        &[
            NETWORK_ID,
            T0,
            T1,
            TIMESPAN,
            query("sort_order", "sortOrder", ParamKind::String, "ascending or descending"),
        ],
    ),
    list(
        "get_organization_appliance_security_events",
        M,
        "/organizations/{organizationId}/appliance/security/events",
        "List the security events for an organization",
        &[
            ORGANIZATION_ID,
            T0,
            T1,
            TIMESPAN,
            query("sort_order", "sortOrder", ParamKind::String, "ascending or descending"),
        ],
    ),
    get(
        "get_organization_appliance_security_intrusion",
        M,
        "/organizations/{organizationId}/appliance/security/intrusion",
        "Return all supported intrusion settings for an organization",
        &[ORGANIZATION_ID],
    ),
    list(
        "get_network_appliance_client_security_events",
        M,
        "/networks/{networkId}/appliance/clients/{clientId}/security/events",
        "List the security events for a client",
        &[
            NETWORK_ID,
            path("client_id", "clientId", "Client ID"),
            T0,
            T1,
            TIMESPAN,
        ],
    ),
    // VLANs and addressing
    get(
        "get_network_appliance_vlans",
        M,
        "/networks/{networkId}/appliance/vlans",
        "List the VLANs for an MX network",
        &[NETWORK_ID],
    ),
    get(
        "get_network_appliance_vlan",
        M,
        "/networks/{networkId}/appliance/vlans/{vlanId}",
        "Return a VLAN",
        &[NETWORK_ID, VLAN_ID],
    ),
    post(
        "create_network_appliance_vlan",
        M,
        "/networks/{networkId}/appliance/vlans",
        "Add a VLAN",
        &[
            NETWORK_ID,
            body_required("vlan_id", "id", ParamKind::String, "The VLAN ID of the new VLAN (1-4094)"),
            body_required("name", "name", ParamKind::String, "The name of the new VLAN"),
            body("subnet", "subnet", ParamKind::String, "The subnet of the VLAN"),
            body("appliance_ip", "applianceIp", ParamKind::String, "The local IP of the appliance on the VLAN"),
            body("group_policy_id", "groupPolicyId", ParamKind::String, "Group policy to apply"),
        ],
    ),
    put(
        "update_network_appliance_vlan",
        M,
        "/networks/{networkId}/appliance/vlans/{vlanId}",
        "Update a VLAN",
        &[
            NETWORK_ID,
            VLAN_ID,
            NAME,
            body("subnet", "subnet", ParamKind::String, "The subnet of the VLAN"),
            body("appliance_ip", "applianceIp", ParamKind::String, "The local IP of the appliance on the VLAN"),
            body("fixed_ip_assignments", "fixedIpAssignments", ParamKind::Json, "MAC keyed DHCP fixed IP assignments as JSON"),
            body("reserved_ip_ranges", "reservedIpRanges", ParamKind::Json, "DHCP reserved IP ranges as JSON"),
            body("dns_nameservers", "dnsNameservers", ParamKind::String, "upstream_dns, google_dns, opendns or a list of IPs"),
            body("dhcp_handling", "dhcpHandling", ParamKind::String, "Run a DHCP server, relay DHCP or do not respond"),
            body("dhcp_lease_time", "dhcpLeaseTime", ParamKind::String, "DHCP lease time, e.g. 1 day"),
        ],
    ),
    delete(
        "delete_network_appliance_vlan",
        M,
        "/networks/{networkId}/appliance/vlans/{vlanId}",
        "Delete a VLAN from a network",
        &[NETWORK_ID, VLAN_ID],
    ),
    get(
        "get_network_appliance_vlans_settings",
        M,
        "/networks/{networkId}/appliance/vlans/settings",
        "Return the enabled status of VLANs for the network",
        &[NETWORK_ID],
    ),
    put(
        "update_network_appliance_vlans_settings",
        M,
        "/networks/{networkId}/appliance/vlans/settings",
        "Enable or disable VLANs for the network",
        &[
            NETWORK_ID,
            body("vlans_enabled", "vlansEnabled", ParamKind::Boolean, "Whether VLANs are enabled"),
        ],
    ),
    get(
        "get_network_appliance_single_lan",
        M,
        "/networks/{networkId}/appliance/singleLan",
        "Return single LAN configuration",
        &[NETWORK_ID],
    ),
    get(
        "get_network_appliance_ports",
        M,
        "/networks/{networkId}/appliance/ports",
        "List per-port VLAN settings for all ports of an MX",
        &[NETWORK_ID],
    ),
    get(
        "get_network_appliance_port",
        M,
        "/networks/{networkId}/appliance/ports/{portId}",
        "Return per-port VLAN settings for a single MX port",
        &[NETWORK_ID, PORT_ID],
    ),
    put(
        "update_network_appliance_port",
        M,
        "/networks/{networkId}/appliance/ports/{portId}",
        "Update the per-port VLAN settings for a single MX port",
        &[
            NETWORK_ID,
            PORT_ID,
            ENABLED,
            body("drop_untagged_traffic", "dropUntaggedTraffic", ParamKind::Boolean, "Drop untagged traffic"),
            body("type", "type", ParamKind::String, "access or trunk"),
            body("vlan", "vlan", ParamKind::Integer, "Native VLAN for trunk ports, VLAN for access ports"),
            body("allowed_vlans", "allowedVlans", ParamKind::String, "Comma-delimited VLANs or all"),
        ],
    ),
    get(
        "get_network_appliance_static_routes",
        M,
        "/networks/{networkId}/appliance/staticRoutes",
        "List the static routes for an MX or teleworker network",
        &[NETWORK_ID],
    ),
    post(
        "create_network_appliance_static_route",
        M,
        "/networks/{networkId}/appliance/staticRoutes",
        "Add a static route for an MX or teleworker network",
        &[
            NETWORK_ID,
            body_required("name", "name", ParamKind::String, "The name of the new static route"),
            body_required("subnet", "subnet", ParamKind::String, "The subnet of the static route"),
            body_required("gateway_ip", "gatewayIp", ParamKind::String, "The gateway IP (next hop)"),
        ],
    ),
    delete(
        "delete_network_appliance_static_route",
        M,
        "/networks/{networkId}/appliance/staticRoutes/{staticRouteId}",
        "Delete a static route from an MX or teleworker network",
        &[NETWORK_ID, path("static_route_id", "staticRouteId", "Static route ID")],
    ),
    // VPN
    get(
        "get_network_appliance_vpn_site_to_site_vpn",
        M,
        "/networks/{networkId}/appliance/vpn/siteToSiteVpn",
        "Return the site-to-site VPN settings of a network",
        &[NETWORK_ID],
    ),
    put(
        "update_network_appliance_vpn_site_to_site_vpn",
        M,
        "/networks/{networkId}/appliance/vpn/siteToSiteVpn",
        "Update the site-to-site VPN settings of a network",
        &[
            NETWORK_ID,
            body_required("mode", "mode", ParamKind::String, "none, spoke or hub"),
            body("hubs", "hubs", ParamKind::Json, "Hubs as JSON"),
            body("subnets", "subnets", ParamKind::Json, "Subnets as JSON"),
        ],
    ),
    get(
        "get_network_appliance_vpn_bgp",
        M,
        "/networks/{networkId}/appliance/vpn/bgp",
        "Return a BGP configuration",
        &[NETWORK_ID],
    ),
    list(
        "get_organization_appliance_vpn_statuses",
        M,
        "/organizations/{organizationId}/appliance/vpn/statuses",
        "Show VPN status for networks in an organization",
        &[ORGANIZATION_ID, NETWORK_IDS],
    ),
    list(
        "get_organization_appliance_vpn_stats",
        M,
        "/organizations/{organizationId}/appliance/vpn/stats",
        "Show VPN history stat for networks in an organization",
        &[ORGANIZATION_ID, NETWORK_IDS, T0, T1, TIMESPAN],
    ),
    get(
        "get_organization_appliance_vpn_third_party_vpn_peers",
        M,
        "/organizations/{organizationId}/appliance/vpn/thirdPartyVPNPeers",
        "Return the third party VPN peers for an organization",
        &[ORGANIZATION_ID],
    ),
    // Uplinks
    list(
        "get_organization_appliance_uplink_statuses",
        M,
        "/organizations/{organizationId}/appliance/uplink/statuses",
        "List the uplink status of every Meraki MX and Z series appliance in the organization",
        &[ORGANIZATION_ID, NETWORK_IDS, SERIALS],
    ),
    get(
        "get_organization_appliance_uplinks_usage_by_network",
        M,
        "/organizations/{organizationId}/appliance/uplinks/usage/byNetwork",
        "Get the sent and received bytes for each uplink of all MX and Z networks",
        &[ORGANIZATION_ID, T0, T1, TIMESPAN],
    ),
    get(
        "get_network_appliance_uplinks_usage_history",
        M,
        "/networks/{networkId}/appliance/uplinks/usageHistory",
        "Get the sent and received bytes for each uplink of a network",
        &[NETWORK_ID, T0, T1, TIMESPAN, RESOLUTION],
    ),
    get(
        "get_device_appliance_uplinks_settings",
        M,
        "/devices/{serial}/appliance/uplinks/settings",
        "Return the uplink settings for an MX appliance",
        &[SERIAL],
    ),
    get(
        "get_device_appliance_dhcp_subnets",
        M,
        "/devices/{serial}/appliance/dhcp/subnets",
        "Return the DHCP subnet information for an appliance",
        &[SERIAL],
    ),
    get(
        "get_device_appliance_performance",
        M,
        "/devices/{serial}/appliance/performance",
        "Return the performance score for a single MX",
        &[SERIAL, T0, T1, TIMESPAN],
    ),
    // Traffic shaping
    get(
        "get_network_appliance_traffic_shaping",
        M,
        "/networks/{networkId}/appliance/trafficShaping",
        "Display the traffic shaping settings for an MX network",
        &[NETWORK_ID],
    ),
    get(
        "get_network_appliance_traffic_shaping_rules",
        M,
        "/networks/{networkId}/appliance/trafficShaping/rules",
        "Display the traffic shaping settings rules for an MX network",
        &[NETWORK_ID],
    ),
    put(
        "update_network_appliance_traffic_shaping_rules",
        M,
        "/networks/{networkId}/appliance/trafficShaping/rules",
        "Update the traffic shaping settings rules for an MX network",
        &[
            NETWORK_ID,
            body("default_rules_enabled", "defaultRulesEnabled", ParamKind::Boolean, "Use the default traffic shaping rules"),
            RULES,
        ],
    ),
    get(
        "get_network_appliance_traffic_shaping_uplink_bandwidth",
        M,
        "/networks/{networkId}/appliance/trafficShaping/uplinkBandwidth",
        "Return the uplink bandwidth limits for your MX network",
        &[NETWORK_ID],
    ),
    get(
        "get_network_appliance_traffic_shaping_uplink_selection",
        M,
        "/networks/{networkId}/appliance/trafficShaping/uplinkSelection",
        "Show uplink selection settings for an MX network",
        &[NETWORK_ID],
    ),
    // High availability and misc
    get(
        "get_network_appliance_warm_spare",
        M,
        "/networks/{networkId}/appliance/warmSpare",
        "Return MX warm spare settings",
        &[NETWORK_ID],
    ),
    post(
        "swap_network_appliance_warm_spare",
        M,
        "/networks/{networkId}/appliance/warmSpare/swap",
        "Swap MX primary and warm spare appliances",
        &[NETWORK_ID],
    ),
    get(
        "get_network_appliance_ssids",
        M,
        "/networks/{networkId}/appliance/ssids",
        "List the MX SSIDs in a network",
        &[NETWORK_ID],
    ),
    get(
        "get_network_appliance_ssid",
        M,
        "/networks/{networkId}/appliance/ssids/{number}",
        "Return a single MX SSID",
        &[NETWORK_ID, NUMBER],
    ),
    put(
        "update_network_appliance_ssid",
        M,
        "/networks/{networkId}/appliance/ssids/{number}",
        "Update a single MX SSID",
        &[
            NETWORK_ID,
            NUMBER,
            NAME,
            ENABLED,
            body("auth_mode", "authMode", ParamKind::String, "open, psk or 8021x-meraki"),
            body("psk", "psk", ParamKind::String, "Passkey"),
            body("encryption_mode", "encryptionMode", ParamKind::String, "wpa or wpa-eap"),
        ],
    ),
    get(
        "get_network_appliance_settings",
        M,
        "/networks/{networkId}/appliance/settings",
        "Return the appliance settings for a network",
        &[NETWORK_ID],
    ),
    get(
        "get_network_appliance_connectivity_monitoring_destinations",
        M,
        "/networks/{networkId}/appliance/connectivityMonitoringDestinations",
        "Return the connectivity testing destinations for an MX network",
        &[NETWORK_ID],
    ),
];
