use super::{
    body_required, get, list, path, post, query, NETWORK_ID, NETWORK_IDS, ORGANIZATION_ID, SERIAL,
    SERIALS, T0, T1, TIMESPAN,
};
use crate::domain::model::{EndpointSpec, ParamKind, ToolModule};

const M: ToolModule = ToolModule::Sensor;

pub(crate) static ENDPOINTS: &[EndpointSpec] = &[
    get(
        "get_device_sensor_relationships",
        M,
        "/devices/{serial}/sensor/relationships",
        "List the sensor roles for a given sensor or camera device",
        &[SERIAL],
    ),
    post(
        "create_device_sensor_command",
        M,
        "/devices/{serial}/sensor/commands",
        "Send a command to a sensor",
        &[
            SERIAL,
            body_required("operation", "operation", ParamKind::String, "Operation to run, e.g. enableDownstreamPower"),
        ],
    ),
    get(
        "get_network_sensor_alerts_profiles",
        M,
        "/networks/{networkId}/sensor/alerts/profiles",
        "List all sensor alert profiles for a network",
        &[NETWORK_ID],
    ),
    get(
        "get_network_sensor_alerts_profile",
        M,
        "/networks/{networkId}/sensor/alerts/profiles/{id}",
        "Show details of a sensor alert profile for a network",
        &[NETWORK_ID, path("profile_id", "id", "Alert profile ID")],
    ),
    get(
        "get_network_sensor_alerts_current_overview_by_metric",
        M,
        "/networks/{networkId}/sensor/alerts/current/overview/byMetric",
        "Return an overview of currently alerting sensors by metric",
        &[NETWORK_ID],
    ),
    get(
        "get_network_sensor_mqtt_brokers",
        M,
        "/networks/{networkId}/sensor/mqttBrokers",
        "List the sensor settings of all MQTT brokers for this network",
        &[NETWORK_ID],
    ),
    list(
        "get_organization_sensor_readings_latest",
        M,
        "/organizations/{organizationId}/sensor/readings/latest",
        "Return the latest available reading for each metric from each sensor",
        &[
            ORGANIZATION_ID,
            NETWORK_IDS,
            SERIALS,
            query("metrics", "metrics", ParamKind::StringArray, "Metrics to return, e.g. temperature, humidity"),
        ],
    ),
    list(
        "get_organization_sensor_readings_history",
        M,
        "/organizations/{organizationId}/sensor/readings/history",
        "Return all reported readings from sensors in a given timespan",
        &[
            ORGANIZATION_ID,
            T0,
            T1,
            TIMESPAN,
            NETWORK_IDS,
            SERIALS,
            query("metrics", "metrics", ParamKind::StringArray, "Metrics to return, e.g. temperature, humidity"),
        ],
    ),
];
