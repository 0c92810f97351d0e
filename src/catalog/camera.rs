use super::{body, get, post, put, query, NETWORK_ID, ORGANIZATION_ID, SERIAL, T0, T1, TIMESPAN};
use crate::domain::model::{EndpointSpec, ParamKind, ToolModule};

const M: ToolModule = ToolModule::Camera;

pub(crate) static ENDPOINTS: &[EndpointSpec] = &[
    get(
        "get_device_camera_analytics_live",
        M,
        "/devices/{serial}/camera/analytics/live",
        "Return live state from camera analytics zones",
        &[SERIAL],
    ),
    get(
        "get_device_camera_analytics_zones",
        M,
        "/devices/{serial}/camera/analytics/zones",
        "Return all configured analytic zones for this camera",
        &[SERIAL],
    ),
    get(
        "get_device_camera_quality_and_retention",
        M,
        "/devices/{serial}/camera/qualityAndRetention",
        "Return quality and retention settings for the given camera",
        &[SERIAL],
    ),
    put(
        "update_device_camera_quality_and_retention",
        M,
        "/devices/{serial}/camera/qualityAndRetention",
        "Update quality and retention settings for the given camera",
        &[
            SERIAL,
            body("profile_id", "profileId", ParamKind::String, "Quality and retention profile to apply"),
            body("motion_based_retention_enabled", "motionBasedRetentionEnabled", ParamKind::Boolean, "Only retain footage with motion"),
            body("quality", "quality", ParamKind::String, "Standard, High or Enhanced"),
            body("resolution", "resolution", ParamKind::String, "Resolution of the camera"),
            body("motion_detector_version", "motionDetectorVersion", ParamKind::Integer, "Motion detector version (1 or 2)"),
        ],
    ),
    get(
        "get_device_camera_sense",
        M,
        "/devices/{serial}/camera/sense",
        "Return sense settings for a given camera",
        &[SERIAL],
    ),
    get(
        "get_device_camera_video_settings",
        M,
        "/devices/{serial}/camera/video/settings",
        "Return video settings for the given camera",
        &[SERIAL],
    ),
    get(
        "get_device_camera_video_link",
        M,
        "/devices/{serial}/camera/videoLink",
        "Return a link to the Dashboard video for a camera",
        &[
            SERIAL,
            query("timestamp", "timestamp", ParamKind::String, "Point in time (ISO 8601) to jump to in the footage"),
        ],
    ),
    post(
        "generate_device_camera_snapshot",
        M,
        "/devices/{serial}/camera/generateSnapshot",
        "Generate a snapshot of what the camera sees at the specified time",
        &[
            SERIAL,
            body("timestamp", "timestamp", ParamKind::String, "Snapshot time (ISO 8601); defaults to now"),
            body("fullframe", "fullframe", ParamKind::Boolean, "Return a full-resolution image"),
        ],
    ),
    get(
        "get_network_camera_quality_retention_profiles",
        M,
        "/networks/{networkId}/camera/qualityRetentionProfiles",
        "List the quality retention profiles for this network",
        &[NETWORK_ID],
    ),
    get(
        "get_network_camera_schedules",
        M,
        "/networks/{networkId}/camera/schedules",
        "Return a list of all camera recording schedules",
        &[NETWORK_ID],
    ),
    get(
        "get_organization_camera_onboarding_statuses",
        M,
        "/organizations/{organizationId}/camera/onboarding/statuses",
        "Fetch onboarding status of cameras",
        &[ORGANIZATION_ID],
    ),
    get(
        "get_device_camera_analytics_overview",
        M,
        "/devices/{serial}/camera/analytics/overview",
        "Return an overview of aggregate analytics data for a timespan",
        &[
            SERIAL,
            T0,
            T1,
            TIMESPAN,
            query("object_type", "objectType", ParamKind::String, "person or vehicle"),
        ],
    ),
];
