use super::{get, path, post};
use crate::domain::model::{EndpointSpec, ToolModule};

const M: ToolModule = ToolModule::Administered;

pub(crate) static ENDPOINTS: &[EndpointSpec] = &[
    get(
        "get_administered_identities_me",
        M,
        "/administered/identities/me",
        "Return the identity of the current user",
        &[],
    ),
    get(
        "get_administered_identities_me_api_keys",
        M,
        "/administered/identities/me/api/keys",
        "List the non-sensitive metadata associated with the API keys that belong to the user",
        &[],
    ),
    post(
        "generate_administered_identities_me_api_keys",
        M,
        "/administered/identities/me/api/keys/generate",
        "Generate an API key for an identity",
        &[],
    ),
    post(
        "revoke_administered_identities_me_api_keys",
        M,
        "/administered/identities/me/api/keys/{suffix}/revoke",
        "Revoke an API key for an identity",
        &[path("suffix", "suffix", "Last four characters of the API key")],
    ),
];
