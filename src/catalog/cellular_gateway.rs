use super::{body, get, list, put, NETWORK_ID, NETWORK_IDS, ORGANIZATION_ID, SERIAL, SERIALS};
use crate::domain::model::{EndpointSpec, ParamKind, ToolModule};

const M: ToolModule = ToolModule::CellularGateway;

pub(crate) static ENDPOINTS: &[EndpointSpec] = &[
    get(
        "get_device_cellular_gateway_lan",
        M,
        "/devices/{serial}/cellularGateway/lan",
        "Show the LAN settings of an MG",
        &[SERIAL],
    ),
    put(
        "update_device_cellular_gateway_lan",
        M,
        "/devices/{serial}/cellularGateway/lan",
        "Update the LAN settings for a single MG",
        &[
            SERIAL,
            body("reserved_ip_ranges", "reservedIpRanges", ParamKind::Json, "Reserved IP ranges as JSON"),
            body("fixed_ip_assignments", "fixedIpAssignments", ParamKind::Json, "Fixed IP assignments as JSON"),
        ],
    ),
    get(
        "get_device_cellular_gateway_port_forwarding_rules",
        M,
        "/devices/{serial}/cellularGateway/portForwardingRules",
        "Return the port forwarding rules for a single MG",
        &[SERIAL],
    ),
    get(
        "get_network_cellular_gateway_connectivity_monitoring_destinations",
        M,
        "/networks/{networkId}/cellularGateway/connectivityMonitoringDestinations",
        "Return the connectivity testing destinations for an MG network",
        &[NETWORK_ID],
    ),
    get(
        "get_network_cellular_gateway_dhcp",
        M,
        "/networks/{networkId}/cellularGateway/dhcp",
        "List common DHCP settings of MGs",
        &[NETWORK_ID],
    ),
    get(
        "get_network_cellular_gateway_subnet_pool",
        M,
        "/networks/{networkId}/cellularGateway/subnetPool",
        "Return the subnet pool and mask configured for MGs in the network",
        &[NETWORK_ID],
    ),
    get(
        "get_network_cellular_gateway_uplink",
        M,
        "/networks/{networkId}/cellularGateway/uplink",
        "Return the uplink settings for your MG network",
        &[NETWORK_ID],
    ),
    list(
        "get_organization_cellular_gateway_uplink_statuses",
        M,
        "/organizations/{organizationId}/cellularGateway/uplink/statuses",
        "List the uplink status of every Meraki MG cellular gateway in the organization",
        &[ORGANIZATION_ID, NETWORK_IDS, SERIALS],
    ),
];
