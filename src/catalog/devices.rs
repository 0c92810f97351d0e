use super::{
    body, body_required, get, path, post, put, query, query_required, RESOLUTION, SERIAL, T0, T1,
    TIMESPAN,
};
use crate::domain::model::{EndpointSpec, ParamKind, ToolModule};

const M: ToolModule = ToolModule::Devices;

pub(crate) static ENDPOINTS: &[EndpointSpec] = &[
    get(
        "get_device",
        M,
        "/devices/{serial}",
        "Return a single device",
        &[SERIAL],
    ),
    put(
        "update_device",
        M,
        "/devices/{serial}",
        "Update the attributes of a device",
        &[
            SERIAL,
            body("name", "name", ParamKind::String, "Device name"),
            body("tags", "tags", ParamKind::StringArray, "Device tags"),
            body("lat", "lat", ParamKind::Number, "Latitude"),
            body("lng", "lng", ParamKind::Number, "Longitude"),
            body("address", "address", ParamKind::String, "Physical address"),
            body("notes", "notes", ParamKind::String, "Notes"),
            body("move_map_marker", "moveMapMarker", ParamKind::Boolean, "Move the map marker to the address"),
            body("floor_plan_id", "floorPlanId", ParamKind::String, "Floor plan to place the device on"),
        ],
    ),
    post(
        "reboot_device",
        M,
        "/devices/{serial}/reboot",
        "Reboot a device",
        &[SERIAL],
    ),
    post(
        "blink_device_leds",
        M,
        "/devices/{serial}/blinkLeds",
        "Blink the LEDs on a device",
        &[
            SERIAL,
            body("duration", "duration", ParamKind::Integer, "Duration in seconds (5-120)"),
            body("period", "period", ParamKind::Integer, "Period in milliseconds"),
            body("duty", "duty", ParamKind::Integer, "Duty cycle in percent"),
        ],
    ),
    get(
        "get_device_clients",
        M,
        "/devices/{serial}/clients",
        "List the clients of a device, up to a maximum of a month ago",
        &[SERIAL, T0, TIMESPAN],
    ),
    get(
        "get_device_lldp_cdp",
        M,
        "/devices/{serial}/lldpCdp",
        "List LLDP and CDP information for a device",
        &[SERIAL],
    ),
    get(
        "get_device_management_interface",
        M,
        "/devices/{serial}/managementInterface",
        "Return the management interface settings for a device",
        &[SERIAL],
    ),
    put(
        "update_device_management_interface",
        M,
        "/devices/{serial}/managementInterface",
        "Update the management interface settings for a device",
        &[
            SERIAL,
            body("wan1", "wan1", ParamKind::Json, "WAN 1 settings as JSON"),
            body("wan2", "wan2", ParamKind::Json, "WAN 2 settings as JSON"),
        ],
    ),
    get(
        "get_device_loss_and_latency_history",
        M,
        "/devices/{serial}/lossAndLatencyHistory",
        "Get the uplink loss percentage and latency for an MX, MG or Z series device",
        &[
            SERIAL,
            query_required("ip", "ip", ParamKind::String, "Destination IP used to obtain the metrics"),
            T0,
            T1,
            TIMESPAN,
            RESOLUTION,
            query("uplink", "uplink", ParamKind::String, "wan1, wan2, wan3 or cellular"),
        ],
    ),
    get(
        "get_device_cellular_sims",
        M,
        "/devices/{serial}/cellular/sims",
        "Return the SIM and APN configurations for a cellular device",
        &[SERIAL],
    ),
    post(
        "create_device_live_tools_ping",
        M,
        "/devices/{serial}/liveTools/ping",
        "Enqueue a job to ping a target host from the device",
        &[
            SERIAL,
            body_required("target", "target", ParamKind::String, "FQDN, IPv4 or IPv6 address"),
            body("count", "count", ParamKind::Integer, "Number of pings (1-5)"),
        ],
    ),
    get(
        "get_device_live_tools_ping",
        M,
        "/devices/{serial}/liveTools/ping/{id}",
        "Return a ping job",
        &[SERIAL, path("ping_id", "id", "Ping job ID")],
    ),
    post(
        "create_device_live_tools_cable_test",
        M,
        "/devices/{serial}/liveTools/cableTest",
        "Enqueue a job to perform a cable test on switch ports",
        &[
            SERIAL,
            body_required("ports", "ports", ParamKind::StringArray, "Ports to test"),
        ],
    ),
    get(
        "get_device_live_tools_cable_test",
        M,
        "/devices/{serial}/liveTools/cableTest/{id}",
        "Return a cable test job",
        &[SERIAL, path("cable_test_id", "id", "Cable test job ID")],
    ),
    post(
        "create_device_live_tools_arp_table",
        M,
        "/devices/{serial}/liveTools/arpTable",
        "Enqueue a job to perform an ARP table request for the device",
        &[SERIAL],
    ),
    get(
        "get_device_live_tools_arp_table",
        M,
        "/devices/{serial}/liveTools/arpTable/{arpTableId}",
        "Return an ARP table live tool job",
        &[SERIAL, path("arp_table_id", "arpTableId", "ARP table job ID")],
    ),
    post(
        "create_device_live_tools_mac_table",
        M,
        "/devices/{serial}/liveTools/macTable",
        "Enqueue a job to request the MAC table of a switch",
        &[SERIAL],
    ),
    get(
        "get_device_live_tools_mac_table",
        M,
        "/devices/{serial}/liveTools/macTable/{macTableId}",
        "Return a MAC table live tool job",
        &[SERIAL, path("mac_table_id", "macTableId", "MAC table job ID")],
    ),
    post(
        "create_device_live_tools_throughput_test",
        M,
        "/devices/{serial}/liveTools/throughputTest",
        "Enqueue a job to test a device throughput",
        &[SERIAL],
    ),
    get(
        "get_device_live_tools_throughput_test",
        M,
        "/devices/{serial}/liveTools/throughputTest/{throughputTestId}",
        "Return a throughput test job",
        &[SERIAL, path("throughput_test_id", "throughputTestId", "Throughput test job ID")],
    ),
    post(
        "create_device_live_tools_wake_on_lan",
        M,
        "/devices/{serial}/liveTools/wakeOnLan",
        "Enqueue a job to send a Wake-on-LAN packet from the device",
        &[
            SERIAL,
            body_required("vlan_id", "vlanId", ParamKind::Integer, "VLAN to send the packet on"),
            body_required("mac", "mac", ParamKind::String, "MAC address of the target"),
        ],
    ),
];
