use super::{body, get, list, path, post, query, NETWORK_ID, ORGANIZATION_ID};
use crate::domain::model::{EndpointSpec, ParamKind, ParamSpec, ToolModule};

const M: ToolModule = ToolModule::Sm;

const DEVICE_ID: ParamSpec = path("device_id", "deviceId", "Systems Manager device ID");

pub(crate) static ENDPOINTS: &[EndpointSpec] = &[
    list(
        "get_network_sm_devices",
        M,
        "/networks/{networkId}/sm/devices",
        "List the devices enrolled in an SM network with various specified fields and filters",
        &[
            NETWORK_ID,
            query("fields", "fields", ParamKind::StringArray, "Additional fields to return"),
            query("wifi_macs", "wifiMacs", ParamKind::StringArray, "Filter by Wi-Fi MACs"),
            query("serials", "serials", ParamKind::StringArray, "Filter by serials"),
            query("ids", "ids", ParamKind::StringArray, "Filter by IDs"),
            query("scope", "scope", ParamKind::StringArray, "Scope filter, e.g. withAny, tag1"),
        ],
    ),
    get(
        "get_network_sm_device_apps",
        M,
        "/networks/{networkId}/sm/devices/{deviceId}/softwares",
        "Return a list of software installed on a device",
        &[NETWORK_ID, DEVICE_ID],
    ),
    get(
        "get_network_sm_device_network_adapters",
        M,
        "/networks/{networkId}/sm/devices/{deviceId}/networkAdapters",
        "List the network adapters of a device",
        &[NETWORK_ID, DEVICE_ID],
    ),
    get(
        "get_network_sm_device_security_centers",
        M,
        "/networks/{networkId}/sm/devices/{deviceId}/securityCenters",
        "List the security centers on a device",
        &[NETWORK_ID, DEVICE_ID],
    ),
    get(
        "get_network_sm_device_restrictions",
        M,
        "/networks/{networkId}/sm/devices/{deviceId}/restrictions",
        "List the restrictions on a device",
        &[NETWORK_ID, DEVICE_ID],
    ),
    post(
        "lock_network_sm_devices",
        M,
        "/networks/{networkId}/sm/devices/lock",
        "Lock a set of devices",
        &[
            NETWORK_ID,
            body("ids", "ids", ParamKind::StringArray, "Device IDs to lock"),
            body("serials", "serials", ParamKind::StringArray, "Device serials to lock"),
            body("pin", "pin", ParamKind::Integer, "Six digit pin code for locking macOS devices"),
        ],
    ),
    post(
        "wipe_network_sm_devices",
        M,
        "/networks/{networkId}/sm/devices/wipe",
        "Wipe a device",
        &[
            NETWORK_ID,
            body("id", "id", ParamKind::String, "Device ID to wipe"),
            body("serial", "serial", ParamKind::String, "Device serial to wipe"),
            body("pin", "pin", ParamKind::Integer, "Six digit pin code for wiping macOS devices"),
        ],
    ),
    get(
        "get_network_sm_profiles",
        M,
        "/networks/{networkId}/sm/profiles",
        "List all profiles in a network",
        &[NETWORK_ID],
    ),
    list(
        "get_network_sm_users",
        M,
        "/networks/{networkId}/sm/users",
        "List the owners in an SM network with various specified fields and filters",
        &[
            NETWORK_ID,
            query("emails", "emails", ParamKind::StringArray, "Filter by emails"),
            query("usernames", "usernames", ParamKind::StringArray, "Filter by usernames"),
        ],
    ),
    get(
        "get_network_sm_target_groups",
        M,
        "/networks/{networkId}/sm/targetGroups",
        "List the target groups in this network",
        &[NETWORK_ID],
    ),
    get(
        "get_organization_sm_apns_cert",
        M,
        "/organizations/{organizationId}/sm/apnsCert",
        "Get the organization's APNS certificate",
        &[ORGANIZATION_ID],
    ),
    get(
        "get_organization_sm_vpp_accounts",
        M,
        "/organizations/{organizationId}/sm/vppAccounts",
        "List the VPP accounts in the organization",
        &[ORGANIZATION_ID],
    ),
];
