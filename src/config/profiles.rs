//! Tool profiles. MCP hosts choke on very large tool lists, so a profile
//! loads a focused subset of modules.

use serde::Serialize;

pub const DEFAULT_PROFILE: &str = "FULL";

/// Pseudo-module controlling the `resources/*` methods.
pub const RESOURCES_MODULE: &str = "resources";

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Profile {
    pub key: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    /// `None` loads every module.
    pub modules: Option<&'static [&'static str]>,
}

pub const PROFILES: &[Profile] = &[
    Profile {
        key: "FULL",
        name: "Full Server (All Tools)",
        description: "Complete Meraki API coverage: all SDK categories and custom tools",
        modules: None,
    },
    Profile {
        key: "WIRELESS",
        name: "Wireless Specialist",
        description: "Wireless network management and optimization",
        modules: Some(&["resources", "SDK_wireless", "helpers", "search"]),
    },
    Profile {
        key: "NETWORK",
        name: "Network Infrastructure",
        description: "Switch, appliance and network infrastructure",
        modules: Some(&[
            "resources",
            "SDK_networks",
            "SDK_switch",
            "SDK_appliance",
            "SDK_cellularGateway",
            "helpers",
            "search",
        ]),
    },
    Profile {
        key: "ORGANIZATIONS",
        name: "Organization Management",
        description: "Organization-level administration and policies",
        modules: Some(&[
            "resources",
            "SDK_organizations",
            "SDK_administered",
            "SDK_licensing",
            "helpers",
            "search",
        ]),
    },
    Profile {
        key: "MONITORING",
        name: "Device Monitoring",
        description: "Device management, cameras, sensors and event analysis",
        modules: Some(&[
            "resources",
            "SDK_devices",
            "SDK_camera",
            "SDK_sensor",
            "SDK_sm",
            "SDK_insight",
            "analytics",
            "helpers",
            "search",
        ]),
    },
    Profile {
        key: "SDK_CORE",
        name: "Pure SDK Categories",
        description: "The 13 official Dashboard API categories only",
        modules: Some(&[
            "resources",
            "SDK_administered",
            "SDK_appliance",
            "SDK_camera",
            "SDK_cellularGateway",
            "SDK_devices",
            "SDK_insight",
            "SDK_licensing",
            "SDK_networks",
            "SDK_organizations",
            "SDK_sensor",
            "SDK_sm",
            "SDK_switch",
            "SDK_wireless",
        ]),
    },
    Profile {
        key: "MINIMAL",
        name: "Essential Only",
        description: "Organizations, networks and devices",
        modules: Some(&[
            "resources",
            "SDK_organizations",
            "SDK_networks",
            "SDK_devices",
            "helpers",
        ]),
    },
];

/// Groups accepted in `MCP_MODULES`.
pub const MODULE_GROUPS: &[(&str, &[&str])] = &[
    (
        "sdk_core",
        &[
            "resources",
            "SDK_administered",
            "SDK_appliance",
            "SDK_camera",
            "SDK_cellularGateway",
            "SDK_devices",
            "SDK_insight",
            "SDK_licensing",
            "SDK_networks",
            "SDK_organizations",
            "SDK_sensor",
            "SDK_sm",
            "SDK_switch",
            "SDK_wireless",
        ],
    ),
    ("custom_tools", &["helpers", "search", "analytics"]),
    (
        "network_stack",
        &["SDK_networks", "SDK_switch", "SDK_appliance", "SDK_cellularGateway"],
    ),
    (
        "device_management",
        &["SDK_devices", "SDK_camera", "SDK_sensor", "SDK_sm", "SDK_insight"],
    ),
    (
        "admin_tools",
        &["SDK_organizations", "SDK_administered", "SDK_licensing"],
    ),
];

/// Looks a profile up case-insensitively, falling back to FULL.
pub fn profile(key: &str) -> &'static Profile {
    PROFILES
        .iter()
        .find(|p| p.key.eq_ignore_ascii_case(key.trim()))
        .unwrap_or(&PROFILES[0])
}

/// Expands a comma separated module list, resolving groups and dropping
/// duplicates while keeping the first occurrence.
pub fn modules_from_list(list: &str) -> Vec<String> {
    let mut modules: Vec<String> = Vec::new();
    for item in list.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        let expanded: Vec<&str> = match MODULE_GROUPS.iter().find(|(name, _)| *name == item) {
            Some((_, members)) => members.to_vec(),
            None => vec![item],
        };
        for module in expanded {
            if !modules.iter().any(|m| m == module) {
                modules.push(module.to_string());
            }
        }
    }
    modules
}

/// Exclusions win, then an explicit module list, then the profile.
pub fn should_load_module(
    module: &str,
    profile_key: &str,
    custom_modules: &[String],
    excluded_modules: &[String],
) -> bool {
    if contains(excluded_modules, module) {
        return false;
    }
    if !custom_modules.is_empty() {
        return contains(custom_modules, module);
    }
    match profile(profile_key).modules {
        None => true,
        Some(modules) => modules.iter().any(|m| m.eq_ignore_ascii_case(module)),
    }
}

fn contains(list: &[String], module: &str) -> bool {
    list.iter().any(|m| m.eq_ignore_ascii_case(module))
}

/// Effective module selection for one server run.
#[derive(Debug, Clone)]
pub struct ModuleSelection {
    profile: &'static Profile,
    custom: Vec<String>,
    excluded: Vec<String>,
}

impl ModuleSelection {
    pub fn new(profile_key: &str, custom: &[String], excluded: &[String]) -> Self {
        Self {
            profile: profile(profile_key),
            custom: modules_from_list(&custom.join(",")),
            excluded: modules_from_list(&excluded.join(",")),
        }
    }

    pub fn loads(&self, module: &str) -> bool {
        should_load_module(module, self.profile.key, &self.custom, &self.excluded)
    }

    pub fn excludes(&self, module: &str) -> bool {
        contains(&self.excluded, module)
    }

    pub fn profile_name(&self) -> &'static str {
        self.profile.name
    }

    pub fn profile(&self) -> &'static Profile {
        self.profile
    }
}
