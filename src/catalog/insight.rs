use super::{get, path, query, NETWORK_ID, ORGANIZATION_ID, RESOLUTION, T0, T1, TIMESPAN};
use crate::domain::model::{EndpointSpec, ParamKind, ToolModule};

const M: ToolModule = ToolModule::Insight;

pub(crate) static ENDPOINTS: &[EndpointSpec] = &[
    get(
        "get_organization_insight_applications",
        M,
        "/organizations/{organizationId}/insight/applications",
        "List all Insight tracked applications",
        &[ORGANIZATION_ID],
    ),
    get(
        "get_organization_insight_monitored_media_servers",
        M,
        "/organizations/{organizationId}/insight/monitoredMediaServers",
        "List the monitored media servers for this organization",
        &[ORGANIZATION_ID],
    ),
    get(
        "get_network_insight_application_health_by_time",
        M,
        "/networks/{networkId}/insight/applications/{applicationId}/healthByTime",
        "Get application health by time",
        &[
            NETWORK_ID,
            path("application_id", "applicationId", "Insight application ID"),
            T0,
            T1,
            TIMESPAN,
            RESOLUTION,
        ],
    ),
    get(
        "get_organization_insight_web_apps",
        M,
        "/organizations/{organizationId}/insight/webApps",
        "List all Insight web apps for an organization",
        &[
            ORGANIZATION_ID,
            query("category", "category", ParamKind::String, "Filter by web app category"),
        ],
    ),
];
