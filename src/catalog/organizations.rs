use super::{
    body, body_required, delete, get, list, path, post, put, query, query_required, NAME,
    NETWORK_IDS, ORGANIZATION_ID, SERIAL, SERIALS, T0, T1, TIMESPAN,
};
use crate::domain::model::{EndpointSpec, ParamKind, ToolModule};

const M: ToolModule = ToolModule::Organizations;

pub(crate) static ENDPOINTS: &[EndpointSpec] = &[
    list(
        "get_organizations",
        M,
        "/organizations",
        "List the organizations that the API key has privileges on",
        &[],
    ),
    get(
        "get_organization",
        M,
        "/organizations/{organizationId}",
        "Return an organization",
        &[ORGANIZATION_ID],
    ),
    post(
        "create_organization",
        M,
        "/organizations",
        "Create a new organization",
        &[body_required("name", "name", ParamKind::String, "Organization name")],
    ),
    put(
        "update_organization",
        M,
        "/organizations/{organizationId}",
        "Update an organization",
        &[
            ORGANIZATION_ID,
            NAME,
            body("management", "management", ParamKind::Json, "Management details as JSON"),
            body("api", "api", ParamKind::Json, "API settings as JSON, e.g. {\"enabled\": true}"),
        ],
    ),
    delete(
        "delete_organization",
        M,
        "/organizations/{organizationId}",
        "Delete an organization",
        &[ORGANIZATION_ID],
    ),
    post(
        "clone_organization",
        M,
        "/organizations/{organizationId}/clone",
        "Create a new organization by cloning an existing one",
        &[
            ORGANIZATION_ID,
            body_required("name", "name", ParamKind::String, "Name of the new organization"),
        ],
    ),
    list(
        "get_organization_networks",
        M,
        "/organizations/{organizationId}/networks",
        "List the networks that the user has privileges on in an organization",
        &[
            ORGANIZATION_ID,
            query("config_template_id", "configTemplateId", ParamKind::String, "Only networks bound to this template"),
            query("is_bound_to_config_template", "isBoundToConfigTemplate", ParamKind::Boolean, "Filter on template binding"),
            query("tags", "tags", ParamKind::StringArray, "Filter by tags"),
            query("tags_filter_type", "tagsFilterType", ParamKind::String, "withAnyTags or withAllTags"),
        ],
    ),
    post(
        "create_organization_network",
        M,
        "/organizations/{organizationId}/networks",
        "Create a network",
        &[
            ORGANIZATION_ID,
            body_required("name", "name", ParamKind::String, "Network name"),
            body_required("product_types", "productTypes", ParamKind::StringArray, "Product types, e.g. appliance,switch,wireless"),
            body("tags", "tags", ParamKind::StringArray, "Network tags"),
            body("time_zone", "timeZone", ParamKind::String, "Timezone, e.g. America/Los_Angeles"),
            body("notes", "notes", ParamKind::String, "Notes"),
            body("copy_from_network_id", "copyFromNetworkId", ParamKind::String, "Network to copy settings from"),
        ],
    ),
    post(
        "combine_organization_networks",
        M,
        "/organizations/{organizationId}/networks/combine",
        "Combine multiple networks into a single network",
        &[
            ORGANIZATION_ID,
            body_required("name", "name", ParamKind::String, "Name of the combined network"),
            body_required("network_ids", "networkIds", ParamKind::StringArray, "Networks to combine"),
        ],
    ),
    list(
        "get_organization_devices",
        M,
        "/organizations/{organizationId}/devices",
        "List the devices in an organization",
        &[
            ORGANIZATION_ID,
            NETWORK_IDS,
            SERIALS,
            query("product_types", "productTypes", ParamKind::StringArray, "Filter by product types"),
            query("model", "model", ParamKind::String, "Filter by model"),
            query("tags", "tags", ParamKind::StringArray, "Filter by tags"),
            query("name", "name", ParamKind::String, "Filter by name"),
            query("mac", "mac", ParamKind::String, "Filter by MAC address"),
        ],
    ),
    list(
        "get_organization_devices_statuses",
        M,
        "/organizations/{organizationId}/devices/statuses",
        "List the status of every device in an organization",
        &[
            ORGANIZATION_ID,
            NETWORK_IDS,
            SERIALS,
            query("statuses", "statuses", ParamKind::StringArray, "online, offline, alerting or dormant"),
            query("product_types", "productTypes", ParamKind::StringArray, "Filter by product types"),
        ],
    ),
    get(
        "get_organization_devices_statuses_overview",
        M,
        "/organizations/{organizationId}/devices/statuses/overview",
        "Return an overview of current device statuses",
        &[ORGANIZATION_ID, NETWORK_IDS],
    ),
    list(
        "get_organization_devices_availabilities",
        M,
        "/organizations/{organizationId}/devices/availabilities",
        "List the availability information for devices in an organization",
        &[ORGANIZATION_ID, NETWORK_IDS, SERIALS],
    ),
    list(
        "get_organization_devices_uplinks_addresses_by_device",
        M,
        "/organizations/{organizationId}/devices/uplinks/addresses/byDevice",
        "List the current uplink addresses for devices in an organization",
        &[ORGANIZATION_ID, NETWORK_IDS, SERIALS],
    ),
    list(
        "get_organization_inventory_devices",
        M,
        "/organizations/{organizationId}/inventory/devices",
        "Return the device inventory for an organization",
        &[
            ORGANIZATION_ID,
            query("used_state", "usedState", ParamKind::String, "used or unused"),
            query("search", "search", ParamKind::String, "Search for serial, MAC or model"),
            NETWORK_IDS,
            SERIALS,
        ],
    ),
    get(
        "get_organization_inventory_device",
        M,
        "/organizations/{organizationId}/inventory/devices/{serial}",
        "Return a single device from the inventory of an organization",
        &[ORGANIZATION_ID, SERIAL],
    ),
    post(
        "claim_into_organization_inventory",
        M,
        "/organizations/{organizationId}/inventory/claim",
        "Claim devices, licenses and orders into an organization inventory",
        &[
            ORGANIZATION_ID,
            body("serials", "serials", ParamKind::StringArray, "Device serials"),
            body("orders", "orders", ParamKind::StringArray, "Order numbers"),
            body("licenses", "licenses", ParamKind::Json, "Licenses as JSON array of {key, mode}"),
        ],
    ),
    post(
        "release_from_organization_inventory",
        M,
        "/organizations/{organizationId}/inventory/release",
        "Release devices from an organization inventory",
        &[
            ORGANIZATION_ID,
            body_required("serials", "serials", ParamKind::StringArray, "Device serials"),
        ],
    ),
    get(
        "get_organization_admins",
        M,
        "/organizations/{organizationId}/admins",
        "List the dashboard administrators in this organization",
        &[ORGANIZATION_ID],
    ),
    post(
        "create_organization_admin",
        M,
        "/organizations/{organizationId}/admins",
        "Create a new dashboard administrator",
        &[
            ORGANIZATION_ID,
            body_required("email", "email", ParamKind::String, "Administrator email"),
            body_required("name", "name", ParamKind::String, "Administrator name"),
            body_required("org_access", "orgAccess", ParamKind::String, "full, read-only, enterprise or none"),
            body("tags", "tags", ParamKind::Json, "Tag privileges as JSON array"),
            body("networks", "networks", ParamKind::Json, "Network privileges as JSON array"),
        ],
    ),
    put(
        "update_organization_admin",
        M,
        "/organizations/{organizationId}/admins/{adminId}",
        "Update an administrator",
        &[
            ORGANIZATION_ID,
            path("admin_id", "adminId", "Administrator ID"),
            NAME,
            body("org_access", "orgAccess", ParamKind::String, "full, read-only, enterprise or none"),
            body("tags", "tags", ParamKind::Json, "Tag privileges as JSON array"),
            body("networks", "networks", ParamKind::Json, "Network privileges as JSON array"),
        ],
    ),
    delete(
        "delete_organization_admin",
        M,
        "/organizations/{organizationId}/admins/{adminId}",
        "Revoke all access for a dashboard administrator within this organization",
        &[ORGANIZATION_ID, path("admin_id", "adminId", "Administrator ID")],
    ),
    get(
        "get_organization_alerts_profiles",
        M,
        "/organizations/{organizationId}/alerts/profiles",
        "List all organization-wide alert configurations",
        &[ORGANIZATION_ID],
    ),
    list(
        "get_organization_assurance_alerts",
        M,
        "/organizations/{organizationId}/assurance/alerts",
        "Return all health alerts for an organization",
        &[
            ORGANIZATION_ID,
            query("network_id", "networkId", ParamKind::String, "Filter by network"),
            query("severity", "severity", ParamKind::String, "critical, warning or informational"),
            query("types", "types", ParamKind::StringArray, "Filter by alert types"),
            query("active", "active", ParamKind::Boolean, "Only active alerts"),
            SERIALS,
        ],
    ),
    list(
        "get_organization_api_requests",
        M,
        "/organizations/{organizationId}/apiRequests",
        "List the API requests made by an organization",
        &[
            ORGANIZATION_ID,
            T0,
            T1,
            TIMESPAN,
            query("admin_id", "adminId", ParamKind::String, "Filter by admin"),
            query("path", "path", ParamKind::String, "Filter by request path"),
            query("method", "method", ParamKind::String, "Filter by HTTP method"),
            query("response_code", "responseCode", ParamKind::Integer, "Filter by response code"),
        ],
    ),
    get(
        "get_organization_api_requests_overview",
        M,
        "/organizations/{organizationId}/apiRequests/overview",
        "Return an aggregated overview of API requests data",
        &[ORGANIZATION_ID, T0, T1, TIMESPAN],
    ),
    list(
        "get_organization_configuration_changes",
        M,
        "/organizations/{organizationId}/configurationChanges",
        "View the change log for your organization",
        &[
            ORGANIZATION_ID,
            T0,
            T1,
            TIMESPAN,
            query("network_id", "networkId", ParamKind::String, "Filter by network"),
            query("admin_id", "adminId", ParamKind::String, "Filter by admin"),
        ],
    ),
    list(
        "get_organization_firmware_upgrades",
        M,
        "/organizations/{organizationId}/firmware/upgrades",
        "Get firmware upgrade information for an organization",
        &[
            ORGANIZATION_ID,
            query("status", "status", ParamKind::StringArray, "Filter by upgrade status"),
            query("product_types", "productTypes", ParamKind::StringArray, "Filter by product types"),
        ],
    ),
    list(
        "get_organization_licenses",
        M,
        "/organizations/{organizationId}/licenses",
        "List the licenses for an organization (per-device licensing only)",
        &[
            ORGANIZATION_ID,
            query("device_serial", "deviceSerial", ParamKind::String, "Filter by device"),
            query("network_id", "networkId", ParamKind::String, "Filter by network"),
            query("state", "state", ParamKind::String, "active, expired, expiring, recentlyQueued, unused or unusedActive"),
        ],
    ),
    get(
        "get_organization_licenses_overview",
        M,
        "/organizations/{organizationId}/licenses/overview",
        "Return an overview of the license state for an organization",
        &[ORGANIZATION_ID],
    ),
    get(
        "get_organization_login_security",
        M,
        "/organizations/{organizationId}/loginSecurity",
        "Return the login security settings for an organization",
        &[ORGANIZATION_ID],
    ),
    put(
        "update_organization_login_security",
        M,
        "/organizations/{organizationId}/loginSecurity",
        "Update the login security settings for an organization",
        &[
            ORGANIZATION_ID,
            body("enforce_password_expiration", "enforcePasswordExpiration", ParamKind::Boolean, "Require password changes"),
            body("password_expiration_days", "passwordExpirationDays", ParamKind::Integer, "Days before a password expires"),
            body("enforce_two_factor_auth", "enforceTwoFactorAuth", ParamKind::Boolean, "Require two-factor authentication"),
            body("enforce_idle_timeout", "enforceIdleTimeout", ParamKind::Boolean, "Log out idle users"),
            body("idle_timeout_minutes", "idleTimeoutMinutes", ParamKind::Integer, "Idle timeout in minutes"),
            body("enforce_strong_passwords", "enforceStrongPasswords", ParamKind::Boolean, "Require strong passwords"),
        ],
    ),
    get(
        "get_organization_saml",
        M,
        "/organizations/{organizationId}/saml",
        "Return the SAML SSO enabled settings for an organization",
        &[ORGANIZATION_ID],
    ),
    get(
        "get_organization_saml_roles",
        M,
        "/organizations/{organizationId}/samlRoles",
        "List the SAML roles for this organization",
        &[ORGANIZATION_ID],
    ),
    get(
        "get_organization_snmp",
        M,
        "/organizations/{organizationId}/snmp",
        "Return the SNMP settings for an organization",
        &[ORGANIZATION_ID],
    ),
    list(
        "get_organization_uplinks_statuses",
        M,
        "/organizations/{organizationId}/uplinks/statuses",
        "List the uplink status of every Meraki MX, MG and Z series device in the organization",
        &[ORGANIZATION_ID, NETWORK_IDS, SERIALS],
    ),
    list(
        "get_organization_webhooks_logs",
        M,
        "/organizations/{organizationId}/webhooks/logs",
        "Return the log of webhook POSTs sent",
        &[
            ORGANIZATION_ID,
            T0,
            T1,
            TIMESPAN,
            query("url", "url", ParamKind::String, "Filter by webhook URL"),
        ],
    ),
    get(
        "get_organization_config_templates",
        M,
        "/organizations/{organizationId}/configTemplates",
        "List the configuration templates for this organization",
        &[ORGANIZATION_ID],
    ),
    list(
        "get_organization_policy_objects",
        M,
        "/organizations/{organizationId}/policyObjects",
        "List policy objects belonging to the organization",
        &[ORGANIZATION_ID],
    ),
    get(
        "get_organization_adaptive_policy_acls",
        M,
        "/organizations/{organizationId}/adaptivePolicy/acls",
        "List adaptive policy ACLs in an organization",
        &[ORGANIZATION_ID],
    ),
    get(
        "get_organization_action_batches",
        M,
        "/organizations/{organizationId}/actionBatches",
        "Return the list of action batches in the organization",
        &[
            ORGANIZATION_ID,
            query("status", "status", ParamKind::String, "completed or failed"),
        ],
    ),
    post(
        "create_organization_action_batch",
        M,
        "/organizations/{organizationId}/actionBatches",
        "Create an action batch",
        &[
            ORGANIZATION_ID,
            body_required("actions", "actions", ParamKind::Json, "Actions as JSON array of {resource, operation, body}"),
            body("confirmed", "confirmed", ParamKind::Boolean, "Run the batch immediately"),
            body("synchronous", "synchronous", ParamKind::Boolean, "Run synchronously (max 20 actions)"),
        ],
    ),
    list(
        "get_organization_summary_top_devices_by_usage",
        M,
        "/organizations/{organizationId}/summary/top/devices/byUsage",
        "Return metrics for the organization's top 10 devices sorted by data usage",
        &[ORGANIZATION_ID, T0, T1, TIMESPAN],
    ),
    list(
        "get_organization_summary_top_clients_by_usage",
        M,
        "/organizations/{organizationId}/summary/top/clients/byUsage",
        "Return metrics for the organization's top 10 clients by data usage",
        &[ORGANIZATION_ID, T0, T1, TIMESPAN],
    ),
    list(
        "get_organization_clients_search",
        M,
        "/organizations/{organizationId}/clients/search",
        "Return the client details in an organization",
        &[
            ORGANIZATION_ID,
            query_required("mac", "mac", ParamKind::String, "Client MAC address"),
        ],
    ),
    get(
        "get_organization_openapi_spec",
        M,
        "/organizations/{organizationId}/openapiSpec",
        "Return the OpenAPI specification of the Dashboard API",
        &[ORGANIZATION_ID],
    ),
];
