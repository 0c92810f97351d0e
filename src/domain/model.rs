use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }

    pub fn is_read_only(&self) -> bool {
        matches!(self, HttpMethod::Get)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tool module. The SDK categories mirror the Dashboard API's own grouping;
/// the rest are the composite tool families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ToolModule {
    Administered,
    Appliance,
    Camera,
    CellularGateway,
    Devices,
    Insight,
    Licensing,
    Networks,
    Organizations,
    Sensor,
    Sm,
    Switch,
    Wireless,
    Helpers,
    Search,
    Analytics,
}

impl ToolModule {
    pub const ALL: [ToolModule; 16] = [
        ToolModule::Administered,
        ToolModule::Appliance,
        ToolModule::Camera,
        ToolModule::CellularGateway,
        ToolModule::Devices,
        ToolModule::Insight,
        ToolModule::Licensing,
        ToolModule::Networks,
        ToolModule::Organizations,
        ToolModule::Sensor,
        ToolModule::Sm,
        ToolModule::Switch,
        ToolModule::Wireless,
        ToolModule::Helpers,
        ToolModule::Search,
        ToolModule::Analytics,
    ];

    /// Key used by profiles and `MCP_MODULES`.
    pub fn key(&self) -> &'static str {
        match self {
            ToolModule::Administered => "SDK_administered",
            ToolModule::Appliance => "SDK_appliance",
            ToolModule::Camera => "SDK_camera",
            ToolModule::CellularGateway => "SDK_cellularGateway",
            ToolModule::Devices => "SDK_devices",
            ToolModule::Insight => "SDK_insight",
            ToolModule::Licensing => "SDK_licensing",
            ToolModule::Networks => "SDK_networks",
            ToolModule::Organizations => "SDK_organizations",
            ToolModule::Sensor => "SDK_sensor",
            ToolModule::Sm => "SDK_sm",
            ToolModule::Switch => "SDK_switch",
            ToolModule::Wireless => "SDK_wireless",
            ToolModule::Helpers => "helpers",
            ToolModule::Search => "search",
            ToolModule::Analytics => "analytics",
        }
    }

    pub fn from_key(key: &str) -> Option<ToolModule> {
        ToolModule::ALL.into_iter().find(|m| m.key().eq_ignore_ascii_case(key))
    }

    pub fn is_sdk(&self) -> bool {
        self.key().starts_with("SDK_")
    }
}

impl fmt::Display for ToolModule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    String,
    Integer,
    Number,
    Boolean,
    /// JSON array of strings, or a comma separated string.
    StringArray,
    /// Nested object or array, accepted as JSON or as a JSON-encoded string.
    Json,
}

impl ParamKind {
    pub fn json_schema(&self) -> Value {
        match self {
            ParamKind::String => serde_json::json!({"type": "string"}),
            ParamKind::Integer => serde_json::json!({"type": "integer"}),
            ParamKind::Number => serde_json::json!({"type": "number"}),
            ParamKind::Boolean => serde_json::json!({"type": "boolean"}),
            ParamKind::StringArray => {
                serde_json::json!({"type": "array", "items": {"type": "string"}})
            }
            ParamKind::Json => serde_json::json!({
                "type": ["object", "array", "string"],
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamLocation {
    Path,
    Query,
    Body,
}

/// One parameter of a catalog endpoint. `name` is the snake_case tool
/// argument, `api_name` the camelCase Dashboard field.
#[derive(Debug, Clone, Copy)]
pub struct ParamSpec {
    pub name: &'static str,
    pub api_name: &'static str,
    pub kind: ParamKind,
    pub location: ParamLocation,
    pub required: bool,
    pub description: &'static str,
}

impl ParamSpec {
    /// Argument of a composite tool; it has no Dashboard field of its own.
    pub const fn argument(
        name: &'static str,
        kind: ParamKind,
        required: bool,
        description: &'static str,
    ) -> ParamSpec {
        ParamSpec {
            name,
            api_name: name,
            kind,
            location: ParamLocation::Query,
            required,
            description,
        }
    }
}

/// Declarative description of one Dashboard API operation.
#[derive(Debug, Clone, Copy)]
pub struct EndpointSpec {
    pub name: &'static str,
    pub module: ToolModule,
    pub method: HttpMethod,
    pub path: &'static str,
    pub description: &'static str,
    pub params: &'static [ParamSpec],
    pub paginated: bool,
}

impl EndpointSpec {
    pub fn path_placeholders(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        let mut rest = self.path;
        while let Some(start) = rest.find('{') {
            let after = &rest[start + 1..];
            match after.find('}') {
                Some(end) => {
                    names.push(&after[..end]);
                    rest = &after[end + 1..];
                }
                None => break,
            }
        }
        names
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    pub module: ToolModule,
    pub input_schema: Value,
    pub read_only: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLimit {
    One,
    Pages(u32),
    All,
}

impl PageLimit {
    /// SDK convention: -1 means every page.
    pub fn from_total_pages(total_pages: Option<i64>) -> PageLimit {
        match total_pages {
            None | Some(1) => PageLimit::One,
            Some(n) if n < 0 => PageLimit::All,
            Some(0) => PageLimit::One,
            Some(n) => PageLimit::Pages(u32::try_from(n).unwrap_or(u32::MAX)),
        }
    }

    pub fn allows(&self, pages_fetched: u32) -> bool {
        match self {
            PageLimit::One => pages_fetched < 1,
            PageLimit::Pages(n) => pages_fetched < *n,
            PageLimit::All => true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageDirection {
    Next,
    /// Network event logs page backwards in time.
    Prev,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: HttpMethod,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
    pub pages: PageLimit,
    pub direction: PageDirection,
}

impl ApiRequest {
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
            pages: PageLimit::One,
            direction: PageDirection::Next,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Get, path)
    }

    pub fn query(mut self, key: &str, value: impl ToString) -> Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }

    /// Array parameters use the Dashboard's `key[]=a&key[]=b` form.
    pub fn query_list(mut self, key: &str, values: &[String]) -> Self {
        for value in values {
            self.query.push((format!("{}[]", key), value.clone()));
        }
        self
    }

    pub fn body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn pages(mut self, pages: PageLimit) -> Self {
        self.pages = pages;
        self
    }

    pub fn direction(mut self, direction: PageDirection) -> Self {
        self.direction = direction;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_placeholders() {
        let spec = EndpointSpec {
            name: "get_device_switch_port",
            module: ToolModule::Switch,
            method: HttpMethod::Get,
            path: "/devices/{serial}/switch/ports/{portId}",
            description: "",
            params: &[],
            paginated: false,
        };
        assert_eq!(spec.path_placeholders(), vec!["serial", "portId"]);
    }

    #[test]
    fn test_page_limit_from_total_pages() {
        assert_eq!(PageLimit::from_total_pages(None), PageLimit::One);
        assert_eq!(PageLimit::from_total_pages(Some(-1)), PageLimit::All);
        assert_eq!(PageLimit::from_total_pages(Some(3)), PageLimit::Pages(3));
        assert!(PageLimit::Pages(3).allows(2));
        assert!(!PageLimit::Pages(3).allows(3));
        assert!(!PageLimit::One.allows(1));
    }

    #[test]
    fn test_module_keys_round_trip() {
        for module in ToolModule::ALL {
            assert_eq!(ToolModule::from_key(module.key()), Some(module));
        }
        assert_eq!(
            ToolModule::from_key("sdk_wireless"),
            Some(ToolModule::Wireless)
        );
        assert!(ToolModule::Switch.is_sdk());
        assert!(!ToolModule::Analytics.is_sdk());
    }
}
