use super::{body, body_required, get, list, path, post, query, query_required, ORGANIZATION_ID};
use crate::domain::model::{EndpointSpec, ParamKind, ParamSpec, ToolModule};

const M: ToolModule = ToolModule::Licensing;

const ORGANIZATION_IDS: ParamSpec = query_required(
    "organization_ids",
    "organizationIds",
    ParamKind::StringArray,
    "Organizations to get subscriptions for",
);

pub(crate) static ENDPOINTS: &[EndpointSpec] = &[
    list(
        "get_administered_licensing_subscription_subscriptions",
        M,
        "/administered/licensing/subscription/subscriptions",
        "List available subscriptions",
        &[
            ORGANIZATION_IDS,
            query("statuses", "statuses", ParamKind::StringArray, "Filter by status: active, canceled, expired and others"),
            query("product_types", "productTypes", ParamKind::StringArray, "Filter by product type"),
        ],
    ),
    get(
        "get_administered_licensing_subscription_entitlements",
        M,
        "/administered/licensing/subscription/entitlements",
        "Retrieve the list of purchasable entitlements",
        &[query("skus", "skus", ParamKind::StringArray, "Filter by SKU")],
    ),
    get(
        "get_administered_licensing_subscription_subscriptions_compliance_statuses",
        M,
        "/administered/licensing/subscription/subscriptions/compliance/statuses",
        "Get compliance status for requested subscriptions",
        &[
            ORGANIZATION_IDS,
            query("subscription_ids", "subscriptionIds", ParamKind::StringArray, "Filter by subscription IDs"),
        ],
    ),
    post(
        "claim_administered_licensing_subscription_subscriptions",
        M,
        "/administered/licensing/subscription/subscriptions/claim",
        "Claim a subscription into an organization",
        &[
            body_required("claim_key", "claimKey", ParamKind::String, "The subscription's claim key"),
            body_required("organization_id", "organizationId", ParamKind::String, "The organization to claim into"),
            body("name", "name", ParamKind::String, "Friendly name to identify the subscription"),
        ],
    ),
    list(
        "get_organization_licensing_coterm_licenses",
        M,
        "/organizations/{organizationId}/licensing/coterm/licenses",
        "List the licenses in a co-termination organization",
        &[
            ORGANIZATION_ID,
            query("invalidated", "invalidated", ParamKind::Boolean, "Filter for invalidated licenses"),
            query("expired", "expired", ParamKind::Boolean, "Filter for expired licenses"),
        ],
    ),
    get(
        "get_organization_license",
        M,
        "/organizations/{organizationId}/licenses/{licenseId}",
        "Display a license",
        &[ORGANIZATION_ID, path("license_id", "licenseId", "License ID")],
    ),
];
