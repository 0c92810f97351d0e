//! Declarative Dashboard API endpoint tables, one file per API category.
//!
//! Each entry is turned into a tool by `core::EndpointTool`. Adding an
//! endpoint means adding a row; no code is written per endpoint.

mod administered;
mod appliance;
mod camera;
mod cellular_gateway;
mod devices;
mod insight;
mod licensing;
mod networks;
mod organizations;
mod sensor;
mod sm;
mod switch;
mod wireless;

use crate::domain::model::{
    EndpointSpec, HttpMethod, ParamKind, ParamLocation, ParamSpec, ToolModule,
};

pub fn endpoints_for(module: ToolModule) -> &'static [EndpointSpec] {
    match module {
        ToolModule::Administered => administered::ENDPOINTS,
        ToolModule::Appliance => appliance::ENDPOINTS,
        ToolModule::Camera => camera::ENDPOINTS,
        ToolModule::CellularGateway => cellular_gateway::ENDPOINTS,
        ToolModule::Devices => devices::ENDPOINTS,
        ToolModule::Insight => insight::ENDPOINTS,
        ToolModule::Licensing => licensing::ENDPOINTS,
        ToolModule::Networks => networks::ENDPOINTS,
        ToolModule::Organizations => organizations::ENDPOINTS,
        ToolModule::Sensor => sensor::ENDPOINTS,
        ToolModule::Sm => sm::ENDPOINTS,
        ToolModule::Switch => switch::ENDPOINTS,
        ToolModule::Wireless => wireless::ENDPOINTS,
        ToolModule::Helpers | ToolModule::Search | ToolModule::Analytics => &[],
    }
}

pub fn all_endpoints() -> impl Iterator<Item = &'static EndpointSpec> {
    ToolModule::ALL
        .into_iter()
        .flat_map(|module| endpoints_for(module).iter())
}

pub fn find(name: &str) -> Option<&'static EndpointSpec> {
    all_endpoints().find(|spec| spec.name == name)
}

// Row builders.

const fn param(
    name: &'static str,
    api_name: &'static str,
    kind: ParamKind,
    location: ParamLocation,
    required: bool,
    description: &'static str,
) -> ParamSpec {
    ParamSpec {
        name,
        api_name,
        kind,
        location,
        required,
        description,
    }
}

pub(crate) const fn path(
    name: &'static str,
    api_name: &'static str,
    description: &'static str,
) -> ParamSpec {
    param(name, api_name, ParamKind::String, ParamLocation::Path, true, description)
}

pub(crate) const fn query(
    name: &'static str,
    api_name: &'static str,
    kind: ParamKind,
    description: &'static str,
) -> ParamSpec {
    param(name, api_name, kind, ParamLocation::Query, false, description)
}

pub(crate) const fn query_required(
    name: &'static str,
    api_name: &'static str,
    kind: ParamKind,
    description: &'static str,
) -> ParamSpec {
    param(name, api_name, kind, ParamLocation::Query, true, description)
}

pub(crate) const fn body(
    name: &'static str,
    api_name: &'static str,
    kind: ParamKind,
    description: &'static str,
) -> ParamSpec {
    param(name, api_name, kind, ParamLocation::Body, false, description)
}

pub(crate) const fn body_required(
    name: &'static str,
    api_name: &'static str,
    kind: ParamKind,
    description: &'static str,
) -> ParamSpec {
    param(name, api_name, kind, ParamLocation::Body, true, description)
}

const fn endpoint(
    name: &'static str,
    module: ToolModule,
    method: HttpMethod,
    path: &'static str,
    description: &'static str,
    params: &'static [ParamSpec],
    paginated: bool,
) -> EndpointSpec {
    EndpointSpec {
        name,
        module,
        method,
        path,
        description,
        params,
        paginated,
    }
}

pub(crate) const fn get(
    name: &'static str,
    module: ToolModule,
    path: &'static str,
    description: &'static str,
    params: &'static [ParamSpec],
) -> EndpointSpec {
    endpoint(name, module, HttpMethod::Get, path, description, params, false)
}

/// Paginated GET: gains `per_page`, `starting_after`, `ending_before` and
/// `total_pages`.
pub(crate) const fn list(
    name: &'static str,
    module: ToolModule,
    path: &'static str,
    description: &'static str,
    params: &'static [ParamSpec],
) -> EndpointSpec {
    endpoint(name, module, HttpMethod::Get, path, description, params, true)
}

pub(crate) const fn post(
    name: &'static str,
    module: ToolModule,
    path: &'static str,
    description: &'static str,
    params: &'static [ParamSpec],
) -> EndpointSpec {
    endpoint(name, module, HttpMethod::Post, path, description, params, false)
}

pub(crate) const fn put(
    name: &'static str,
    module: ToolModule,
    path: &'static str,
    description: &'static str,
    params: &'static [ParamSpec],
) -> EndpointSpec {
    endpoint(name, module, HttpMethod::Put, path, description, params, false)
}

pub(crate) const fn delete(
    name: &'static str,
    module: ToolModule,
    path: &'static str,
    description: &'static str,
    params: &'static [ParamSpec],
) -> EndpointSpec {
    endpoint(name, module, HttpMethod::Delete, path, description, params, false)
}

// Shared parameters.

pub(crate) const ORGANIZATION_ID: ParamSpec =
    path("organization_id", "organizationId", "Organization ID");
pub(crate) const NETWORK_ID: ParamSpec = path("network_id", "networkId", "Network ID");
pub(crate) const SERIAL: ParamSpec = path("serial", "serial", "Device serial number");
pub(crate) const TIMESPAN: ParamSpec = query(
    "timespan",
    "timespan",
    ParamKind::Integer,
    "Timespan in seconds for which the information will be fetched",
);
pub(crate) const T0: ParamSpec = query("t0", "t0", ParamKind::String, "Beginning of the timespan (ISO 8601)");
pub(crate) const T1: ParamSpec = query("t1", "t1", ParamKind::String, "End of the timespan (ISO 8601)");
pub(crate) const RESOLUTION: ParamSpec = query(
    "resolution",
    "resolution",
    ParamKind::Integer,
    "Time resolution in seconds",
);
pub(crate) const NETWORK_IDS: ParamSpec = query(
    "network_ids",
    "networkIds",
    ParamKind::StringArray,
    "Filter by network IDs",
);
pub(crate) const SERIALS: ParamSpec = query(
    "serials",
    "serials",
    ParamKind::StringArray,
    "Filter by device serials",
);
pub(crate) const NAME: ParamSpec = body("name", "name", ParamKind::String, "Name");
pub(crate) const ENABLED: ParamSpec = body("enabled", "enabled", ParamKind::Boolean, "Enabled");
pub(crate) const RULES: ParamSpec = body(
    "rules",
    "rules",
    ParamKind::Json,
    "Rules as a JSON array",
);

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_tool_names_are_unique() {
        let mut seen = HashSet::new();
        for spec in all_endpoints() {
            assert!(seen.insert(spec.name), "duplicate tool name {}", spec.name);
        }
        assert!(seen.len() > 150);
    }

    #[test]
    fn test_every_placeholder_has_one_path_param() {
        for spec in all_endpoints() {
            let placeholders = spec.path_placeholders();
            for placeholder in &placeholders {
                let matching = spec
                    .params
                    .iter()
                    .filter(|p| p.location == ParamLocation::Path && p.api_name == *placeholder)
                    .count();
                assert_eq!(matching, 1, "{} has {} params for {{{}}}", spec.name, matching, placeholder);
            }
            for p in spec.params.iter().filter(|p| p.location == ParamLocation::Path) {
                assert!(
                    placeholders.contains(&p.api_name),
                    "{} declares path param {} not in {}",
                    spec.name,
                    p.api_name,
                    spec.path
                );
            }
        }
    }

    #[test]
    fn test_param_names_unique_per_endpoint() {
        for spec in all_endpoints() {
            let mut names = HashSet::new();
            for p in spec.params {
                assert!(names.insert(p.name), "{} repeats argument {}", spec.name, p.name);
            }
        }
    }

    #[test]
    fn test_rows_are_filed_under_their_module() {
        for module in ToolModule::ALL {
            for spec in endpoints_for(module) {
                assert_eq!(spec.module, module, "{} filed under {}", spec.name, module);
                assert!(spec.path.starts_with('/'));
                assert!(!spec.description.is_empty());
            }
        }
    }

    #[test]
    fn test_every_sdk_module_has_endpoints() {
        for module in ToolModule::ALL.into_iter().filter(ToolModule::is_sdk) {
            assert!(!endpoints_for(module).is_empty(), "{} is empty", module);
        }
        assert!(endpoints_for(ToolModule::Helpers).is_empty());
    }

    #[test]
    fn test_only_gets_are_paginated() {
        for spec in all_endpoints().filter(|s| s.paginated) {
            assert_eq!(spec.method, HttpMethod::Get, "{}", spec.name);
        }
        assert!(find("get_organizations").is_some());
        assert!(find("get_network_events").is_some());
    }
}
