use super::{
    body, body_required, get, list, path, post, put, query, ENABLED, NAME, NETWORK_ID,
    NETWORK_IDS, ORGANIZATION_ID, SERIAL, SERIALS, T0, T1, TIMESPAN,
};
use crate::domain::model::{EndpointSpec, ParamKind, ParamSpec, ToolModule};

const M: ToolModule = ToolModule::Switch;

const PORT_ID: ParamSpec = path("port_id", "portId", "Switch port ID, e.g. 1 or 1_MA-MOD-8X10G_1");
const SWITCH_STACK_ID: ParamSpec = path("switch_stack_id", "switchStackId", "Switch stack ID");

pub(crate) static ENDPOINTS: &[EndpointSpec] = &[
    // Device ports
    get(
        "get_device_switch_ports",
        M,
        "/devices/{serial}/switch/ports",
        "List the switch ports for a switch",
        &[SERIAL],
    ),
    get(
        "get_device_switch_port",
        M,
        "/devices/{serial}/switch/ports/{portId}",
        "Return a switch port",
        &[SERIAL, PORT_ID],
    ),
    put(
        "update_device_switch_port",
        M,
        "/devices/{serial}/switch/ports/{portId}",
        "Update a switch port",
        &[
            SERIAL,
            PORT_ID,
            NAME,
            ENABLED,
            body("tags", "tags", ParamKind::StringArray, "Port tags"),
            body("type", "type", ParamKind::String, "access, trunk or stack"),
            body("vlan", "vlan", ParamKind::Integer, "VLAN of the port"),
            body("voice_vlan", "voiceVlan", ParamKind::Integer, "Voice VLAN of the port"),
            body("allowed_vlans", "allowedVlans", ParamKind::String, "Allowed VLANs on trunk ports"),
            body("poe_enabled", "poeEnabled", ParamKind::Boolean, "PoE status of the port"),
            body("isolation_enabled", "isolationEnabled", ParamKind::Boolean, "Isolation status of the port"),
            body("rstp_enabled", "rstpEnabled", ParamKind::Boolean, "RSTP status of the port"),
            body("stp_guard", "stpGuard", ParamKind::String, "disabled, root guard, bpdu guard or loop guard"),
            body("link_negotiation", "linkNegotiation", ParamKind::String, "Link speed for the port"),
            body("access_policy_type", "accessPolicyType", ParamKind::String, "Open, Custom access policy, MAC allow list or Sticky MAC allow list"),
        ],
    ),
    get(
        "get_device_switch_ports_statuses",
        M,
        "/devices/{serial}/switch/ports/statuses",
        "Return the status for all the ports of a switch",
        &[SERIAL, T0, TIMESPAN],
    ),
    get(
        "get_device_switch_ports_statuses_packets",
        M,
        "/devices/{serial}/switch/ports/statuses/packets",
        "Return the packet counters for all the ports of a switch",
        &[SERIAL, T0, TIMESPAN],
    ),
    post(
        "cycle_device_switch_ports",
        M,
        "/devices/{serial}/switch/ports/cycle",
        "Cycle a set of switch ports",
        &[
            SERIAL,
            body_required("ports", "ports", ParamKind::StringArray, "Ports to power cycle"),
        ],
    ),
    // Device routing
    get(
        "get_device_switch_routing_interfaces",
        M,
        "/devices/{serial}/switch/routing/interfaces",
        "List layer 3 interfaces for a switch",
        &[SERIAL],
    ),
    get(
        "get_device_switch_routing_static_routes",
        M,
        "/devices/{serial}/switch/routing/staticRoutes",
        "List layer 3 static routes for a switch",
        &[SERIAL],
    ),
    get(
        "get_device_switch_warm_spare",
        M,
        "/devices/{serial}/switch/warmSpare",
        "Return warm spare configuration for a switch",
        &[SERIAL],
    ),
    // Network settings
    get(
        "get_network_switch_access_control_lists",
        M,
        "/networks/{networkId}/switch/accessControlLists",
        "Return the access control lists for a MS network",
        &[NETWORK_ID],
    ),
    put(
        "update_network_switch_access_control_lists",
        M,
        "/networks/{networkId}/switch/accessControlLists",
        "Update the access control lists for a MS network",
        &[
            NETWORK_ID,
            body_required("rules", "rules", ParamKind::Json, "Access control list rules as JSON"),
        ],
    ),
    get(
        "get_network_switch_access_policies",
        M,
        "/networks/{networkId}/switch/accessPolicies",
        "List the access policies for a switch network",
        &[NETWORK_ID],
    ),
    get(
        "get_network_switch_dhcp_server_policy",
        M,
        "/networks/{networkId}/switch/dhcpServerPolicy",
        "Return the DHCP server settings",
        &[NETWORK_ID],
    ),
    list(
        "get_network_switch_dhcp_v4_servers_seen",
        M,
        "/networks/{networkId}/switch/dhcp/v4/servers/seen",
        "Return the network's DHCPv4 servers seen within the selected timeframe",
        &[NETWORK_ID, T0, TIMESPAN],
    ),
    get(
        "get_network_switch_dscp_to_cos_mappings",
        M,
        "/networks/{networkId}/switch/dscpToCosMappings",
        "Return the DSCP to CoS mappings",
        &[NETWORK_ID],
    ),
    get(
        "get_network_switch_mtu",
        M,
        "/networks/{networkId}/switch/mtu",
        "Return the MTU configuration",
        &[NETWORK_ID],
    ),
    get(
        "get_network_switch_port_schedules",
        M,
        "/networks/{networkId}/switch/portSchedules",
        "List switch port schedules",
        &[NETWORK_ID],
    ),
    get(
        "get_network_switch_qos_rules",
        M,
        "/networks/{networkId}/switch/qosRules",
        "List quality of service rules",
        &[NETWORK_ID],
    ),
    get(
        "get_network_switch_routing_ospf",
        M,
        "/networks/{networkId}/switch/routing/ospf",
        "Return layer 3 OSPF routing configuration",
        &[NETWORK_ID],
    ),
    get(
        "get_network_switch_settings",
        M,
        "/networks/{networkId}/switch/settings",
        "Return switch network settings",
        &[NETWORK_ID],
    ),
    put(
        "update_network_switch_settings",
        M,
        "/networks/{networkId}/switch/settings",
        "Update switch network settings",
        &[
            NETWORK_ID,
            body("vlan", "vlan", ParamKind::Integer, "Management VLAN"),
            body("use_combined_power", "useCombinedPower", ParamKind::Boolean, "Use combined power for MS390 stacks"),
            body("power_exceptions", "powerExceptions", ParamKind::Json, "Per-switch power exceptions as JSON"),
        ],
    ),
    get(
        "get_network_switch_stacks",
        M,
        "/networks/{networkId}/switch/stacks",
        "List the switch stacks in a network",
        &[NETWORK_ID],
    ),
    get(
        "get_network_switch_stack",
        M,
        "/networks/{networkId}/switch/stacks/{switchStackId}",
        "Show a switch stack",
        &[NETWORK_ID, SWITCH_STACK_ID],
    ),
    post(
        "create_network_switch_stack",
        M,
        "/networks/{networkId}/switch/stacks",
        "Create a switch stack",
        &[
            NETWORK_ID,
            body_required("name", "name", ParamKind::String, "The name of the new stack"),
            body_required("serials", "serials", ParamKind::StringArray, "Serials of the switches to stack"),
        ],
    ),
    get(
        "get_network_switch_storm_control",
        M,
        "/networks/{networkId}/switch/stormControl",
        "Return the storm control configuration for a switch network",
        &[NETWORK_ID],
    ),
    get(
        "get_network_switch_stp",
        M,
        "/networks/{networkId}/switch/stp",
        "Return spanning tree settings",
        &[NETWORK_ID],
    ),
    put(
        "update_network_switch_stp",
        M,
        "/networks/{networkId}/switch/stp",
        "Update spanning tree settings",
        &[
            NETWORK_ID,
            body("rstp_enabled", "rstpEnabled", ParamKind::Boolean, "Enable RSTP"),
            body("stp_bridge_priority", "stpBridgePriority", ParamKind::Json, "STP bridge priority per switch as JSON"),
        ],
    ),
    // Organization-wide
    list(
        "get_organization_switch_ports_by_switch",
        M,
        "/organizations/{organizationId}/switch/ports/bySwitch",
        "List the switchports in an organization by switch",
        &[
            ORGANIZATION_ID,
            NETWORK_IDS,
            SERIALS,
            query("name", "name", ParamKind::String, "Filter by switch name"),
            query("mac", "mac", ParamKind::String, "Filter by switch MAC"),
        ],
    ),
    list(
        "get_organization_switch_ports_statuses_by_switch",
        M,
        "/organizations/{organizationId}/switch/ports/statuses/bySwitch",
        "List the switchports in an organization with their statuses",
        &[ORGANIZATION_ID, NETWORK_IDS, SERIALS, T0, T1, TIMESPAN],
    ),
    post(
        "clone_organization_switch_devices",
        M,
        "/organizations/{organizationId}/switch/devices/clone",
        "Clone port-level and some switch-level configuration settings from a source switch",
        &[
            ORGANIZATION_ID,
            body_required("source_serial", "sourceSerial", ParamKind::String, "Serial of the source switch"),
            body_required("target_serials", "targetSerials", ParamKind::StringArray, "Serials of the target switches"),
        ],
    ),
    // Network writes
    post(
        "create_network_switch_qos_rule",
        M,
        "/networks/{networkId}/switch/qosRules",
        "Add a quality of service rule",
        &[
            NETWORK_ID,
            body_required("vlan", "vlan", ParamKind::Integer, "VLAN of the incoming packet"),
            body("protocol", "protocol", ParamKind::String, "ANY, TCP or UDP"),
            body("src_port", "srcPort", ParamKind::Integer, "Source port"),
            body("dst_port", "dstPort", ParamKind::Integer, "Destination port"),
            body("dscp", "dscp", ParamKind::Integer, "DSCP tag to set"),
        ],
    ),
    put(
        "update_network_switch_port_schedule",
        M,
        "/networks/{networkId}/switch/portSchedules/{portScheduleId}",
        "Update a switch port schedule",
        &[
            NETWORK_ID,
            path("port_schedule_id", "portScheduleId", "Port schedule ID"),
            NAME,
            body("port_schedule", "portSchedule", ParamKind::Json, "Weekly schedule as JSON"),
        ],
    ),
    put(
        "update_network_switch_dhcp_server_policy",
        M,
        "/networks/{networkId}/switch/dhcpServerPolicy",
        "Update the DHCP server settings",
        &[
            NETWORK_ID,
            body("default_policy", "defaultPolicy", ParamKind::String, "allow or block"),
            body("allowed_servers", "allowedServers", ParamKind::StringArray, "MACs of allowed DHCP servers"),
            body("blocked_servers", "blockedServers", ParamKind::StringArray, "MACs of blocked DHCP servers"),
            body("alerts", "alerts", ParamKind::Json, "Alert settings as JSON"),
        ],
    ),
    put(
        "update_network_switch_storm_control",
        M,
        "/networks/{networkId}/switch/stormControl",
        "Update the storm control configuration for a switch network",
        &[
            NETWORK_ID,
            body("broadcast_threshold", "broadcastThreshold", ParamKind::Integer, "Percentage of total bandwidth for broadcast traffic"),
            body("multicast_threshold", "multicastThreshold", ParamKind::Integer, "Percentage of total bandwidth for multicast traffic"),
            body("unknown_unicast_threshold", "unknownUnicastThreshold", ParamKind::Integer, "Percentage of total bandwidth for unknown unicast traffic"),
        ],
    ),
    put(
        "update_network_switch_mtu",
        M,
        "/networks/{networkId}/switch/mtu",
        "Update the MTU configuration",
        &[
            NETWORK_ID,
            body("default_mtu_size", "defaultMtuSize", ParamKind::Integer, "MTU size for the network"),
            body("overrides", "overrides", ParamKind::Json, "Per-switch MTU overrides as JSON"),
        ],
    ),
    put(
        "update_network_switch_qos_rules_order",
        M,
        "/networks/{networkId}/switch/qosRules/order",
        "Update the order in which the rules should be processed by the switch",
        &[
            NETWORK_ID,
            body_required("rule_ids", "ruleIds", ParamKind::StringArray, "Rule IDs in processing order"),
        ],
    ),
    put(
        "update_network_switch_access_policy",
        M,
        "/networks/{networkId}/switch/accessPolicies/{accessPolicyNumber}",
        "Update an access policy for a switch network",
        &[
            NETWORK_ID,
            path("access_policy_number", "accessPolicyNumber", "Access policy number"),
            NAME,
            body("radius_servers", "radiusServers", ParamKind::Json, "RADIUS servers as JSON"),
            body("host_mode", "hostMode", ParamKind::String, "Single-Host, Multi-Domain, Multi-Host or Multi-Auth"),
        ],
    ),
    put(
        "update_device_switch_routing_static_route",
        M,
        "/devices/{serial}/switch/routing/staticRoutes/{staticRouteId}",
        "Update a layer 3 static route for a switch",
        &[
            SERIAL,
            path("static_route_id", "staticRouteId", "Static route ID"),
            NAME,
            body("subnet", "subnet", ParamKind::String, "Subnet of the static route"),
            body("next_hop_ip", "nextHopIp", ParamKind::String, "Next hop IP"),
        ],
    ),
    put(
        "update_network_switch_dscp_to_cos_mappings",
        M,
        "/networks/{networkId}/switch/dscpToCosMappings",
        "Update the DSCP to CoS mappings",
        &[NETWORK_ID, body_required("mappings", "mappings", ParamKind::Json, "Mappings as JSON")],
    ),
    put(
        "update_network_switch_routing_ospf",
        M,
        "/networks/{networkId}/switch/routing/ospf",
        "Update layer 3 OSPF routing configuration",
        &[NETWORK_ID, ENABLED, body("areas", "areas", ParamKind::Json, "OSPF areas as JSON")],
    ),
];
