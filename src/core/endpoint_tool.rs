use crate::core::args::ToolArgs;
use crate::core::format;
use crate::core::registry::Tool;
use crate::domain::model::{
    ApiRequest, EndpointSpec, PageDirection, PageLimit, ParamKind, ParamLocation, ParamSpec,
    ToolDefinition, ToolModule,
};
use crate::domain::ports::DashboardApi;
use crate::utils::error::{MerakiError, Result};
use async_trait::async_trait;
use serde_json::{json, Map, Value};
use url::Url;

const PAGING_PARAMS: &[ParamSpec] = &[
    ParamSpec {
        name: "per_page",
        api_name: "perPage",
        kind: ParamKind::Integer,
        location: ParamLocation::Query,
        required: false,
        description: "Number of entries per page",
    },
    ParamSpec {
        name: "starting_after",
        api_name: "startingAfter",
        kind: ParamKind::String,
        location: ParamLocation::Query,
        required: false,
        description: "Token indicating the start of the page",
    },
    ParamSpec {
        name: "ending_before",
        api_name: "endingBefore",
        kind: ParamKind::String,
        location: ParamLocation::Query,
        required: false,
        description: "Token indicating the end of the page",
    },
];

/// Generic tool backed by one catalog entry.
pub struct EndpointTool {
    spec: &'static EndpointSpec,
    definition: ToolDefinition,
    title: String,
}

impl EndpointTool {
    pub fn new(spec: &'static EndpointSpec) -> Self {
        let mut schema = object_schema(spec.params);
        if spec.paginated {
            add_paging_schema(&mut schema, spec);
        }
        Self {
            spec,
            definition: ToolDefinition {
                name: spec.name.to_string(),
                description: spec.description.to_string(),
                module: spec.module,
                input_schema: schema,
                read_only: spec.method.is_read_only(),
            },
            title: format::title_from_name(spec.name),
        }
    }

    pub fn spec(&self) -> &'static EndpointSpec {
        self.spec
    }

    /// Maps tool arguments onto the Dashboard request for this endpoint.
    pub fn build_request(&self, args: &ToolArgs) -> Result<ApiRequest> {
        let spec = self.spec;
        let mut path = spec.path.to_string();
        for placeholder in spec.path_placeholders() {
            let param = spec
                .params
                .iter()
                .find(|p| p.location == ParamLocation::Path && p.api_name == placeholder)
                .ok_or_else(|| MerakiError::Config {
                    message: format!("{} has no parameter for {{{}}}", spec.name, placeholder),
                })?;
            let value = args
                .value_for(param)?
                .ok_or_else(|| MerakiError::invalid_argument(param.name, "is required"))?;
            let raw = match value {
                Value::String(s) => s,
                other => other.to_string(),
            };
            path = path.replace(&format!("{{{}}}", placeholder), &encode_segment(&raw));
        }

        let mut request = ApiRequest::new(spec.method, path);
        let mut body = Map::new();

        let paging: &[ParamSpec] = if spec.paginated { PAGING_PARAMS } else { &[] };
        let declared = spec.params.iter();
        let extra = paging
            .iter()
            .filter(|p| !spec.params.iter().any(|d| d.name == p.name));

        for param in declared.chain(extra) {
            let Some(value) = args.value_for(param)? else {
                continue;
            };
            match param.location {
                ParamLocation::Path => {}
                ParamLocation::Query => {
                    request = match value {
                        Value::Array(items) => {
                            let items: Vec<String> = items.iter().map(query_value).collect();
                            request.query_list(param.api_name, &items)
                        }
                        other => request.query(param.api_name, query_value(&other)),
                    };
                }
                ParamLocation::Body => {
                    body.insert(param.api_name.to_string(), value);
                }
            }
        }

        if !body.is_empty() {
            request = request.body(Value::Object(body));
        }

        if spec.paginated {
            request = request.pages(PageLimit::from_total_pages(args.optional_i64("total_pages")?));
        }
        if spec.path.ends_with("/events") {
            request = request.direction(PageDirection::Prev);
        }
        Ok(request)
    }
}

#[async_trait]
impl Tool for EndpointTool {
    fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    async fn call(&self, api: &dyn DashboardApi, args: &ToolArgs) -> Result<String> {
        let request = self.build_request(args)?;
        let method = request.method;
        let value = api.send(request).await?;

        if method.is_read_only() {
            Ok(format::render(&self.title, &value))
        } else {
            Ok(format::render_write(&self.title, method, &value))
        }
    }
}

/// JSON Schema of an object whose properties are `params`.
pub fn object_schema(params: &[ParamSpec]) -> Value {
    let mut properties = Map::new();
    let mut required = Vec::new();
    for param in params {
        let mut schema = param.kind.json_schema();
        if !param.description.is_empty() {
            schema["description"] = Value::String(param.description.to_string());
        }
        properties.insert(param.name.to_string(), schema);
        if param.required {
            required.push(Value::String(param.name.to_string()));
        }
    }
    json!({
        "type": "object",
        "properties": properties,
        "required": required,
    })
}

/// Definition of a hand-written tool.
pub fn composite_definition(
    name: &str,
    module: ToolModule,
    description: &str,
    params: &[ParamSpec],
    read_only: bool,
) -> ToolDefinition {
    ToolDefinition {
        name: name.to_string(),
        description: description.to_string(),
        module,
        input_schema: object_schema(params),
        read_only,
    }
}

fn add_paging_schema(schema: &mut Value, spec: &EndpointSpec) {
    let Some(properties) = schema.get_mut("properties").and_then(Value::as_object_mut) else {
        return;
    };
    for param in PAGING_PARAMS {
        if !properties.contains_key(param.name) {
            let mut property = param.kind.json_schema();
            property["description"] = Value::String(param.description.to_string());
            properties.insert(param.name.to_string(), property);
        }
    }
    properties.insert(
        "total_pages".to_string(),
        json!({
            "type": "integer",
            "description": format!(
                "Pages to fetch from {} (-1 for all pages, default 1)",
                spec.path
            ),
        }),
    );
}

fn query_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Percent-encodes one path segment.
pub fn encode_segment(raw: &str) -> String {
    let Ok(mut url) = Url::parse("http://localhost/") else {
        return raw.to_string();
    };
    if let Ok(mut segments) = url.path_segments_mut() {
        segments.push(raw);
    }
    url.path().trim_start_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{HttpMethod, ToolModule};
    use std::sync::Mutex;

    static UPDATE_PORT: EndpointSpec = EndpointSpec {
        name: "update_device_switch_port",
        module: ToolModule::Switch,
        method: HttpMethod::Put,
        path: "/devices/{serial}/switch/ports/{portId}",
        description: "Update a switch port",
        params: &[
            ParamSpec {
                name: "serial",
                api_name: "serial",
                kind: ParamKind::String,
                location: ParamLocation::Path,
                required: true,
                description: "Device serial",
            },
            ParamSpec {
                name: "port_id",
                api_name: "portId",
                kind: ParamKind::String,
                location: ParamLocation::Path,
                required: true,
                description: "Port ID",
            },
            ParamSpec {
                name: "vlan",
                api_name: "vlan",
                kind: ParamKind::Integer,
                location: ParamLocation::Body,
                required: false,
                description: "Native VLAN",
            },
            ParamSpec {
                name: "enabled",
                api_name: "enabled",
                kind: ParamKind::Boolean,
                location: ParamLocation::Body,
                required: false,
                description: "",
            },
        ],
        paginated: false,
    };

    static LIST_CLIENTS: EndpointSpec = EndpointSpec {
        name: "get_network_clients",
        module: ToolModule::Networks,
        method: HttpMethod::Get,
        path: "/networks/{networkId}/clients",
        description: "List network clients",
        params: &[
            ParamSpec {
                name: "network_id",
                api_name: "networkId",
                kind: ParamKind::String,
                location: ParamLocation::Path,
                required: true,
                description: "Network ID",
            },
            ParamSpec {
                name: "timespan",
                api_name: "timespan",
                kind: ParamKind::Integer,
                location: ParamLocation::Query,
                required: false,
                description: "",
            },
            ParamSpec {
                name: "statuses",
                api_name: "statuses",
                kind: ParamKind::StringArray,
                location: ParamLocation::Query,
                required: false,
                description: "",
            },
        ],
        paginated: true,
    };

    struct RecordingApi {
        requests: Mutex<Vec<ApiRequest>>,
        response: Value,
    }

    #[async_trait]
    impl DashboardApi for RecordingApi {
        async fn send(&self, request: ApiRequest) -> Result<Value> {
            self.requests.lock().unwrap().push(request);
            Ok(self.response.clone())
        }
    }

    fn args(value: Value) -> ToolArgs {
        ToolArgs::from_value(&value).unwrap()
    }

    #[test]
    fn test_schema_lists_required_params() {
        let tool = EndpointTool::new(&UPDATE_PORT);
        let schema = &tool.definition().input_schema;
        assert_eq!(schema["required"], json!(["serial", "port_id"]));
        assert_eq!(schema["properties"]["vlan"]["type"], "integer");
        assert!(!tool.definition().read_only);
    }

    #[test]
    fn test_paginated_schema_has_paging_args() {
        let tool = EndpointTool::new(&LIST_CLIENTS);
        let props = &tool.definition().input_schema["properties"];
        assert!(props.get("per_page").is_some());
        assert!(props.get("total_pages").is_some());
    }

    #[test]
    fn test_build_request_maps_path_and_body() {
        let tool = EndpointTool::new(&UPDATE_PORT);
        let request = tool
            .build_request(&args(json!({
                "serial": "Q2XX-AAAA",
                "port_id": "1/1",
                "vlan": "20",
                "enabled": true
            })))
            .unwrap();
        assert_eq!(request.method, HttpMethod::Put);
        assert_eq!(request.path, "/devices/Q2XX-AAAA/switch/ports/1%2F1");
        assert_eq!(request.body, Some(json!({"vlan": 20, "enabled": true})));
    }

    #[test]
    fn test_build_request_maps_query_and_paging() {
        let tool = EndpointTool::new(&LIST_CLIENTS);
        let request = tool
            .build_request(&args(json!({
                "network_id": "N_1",
                "timespan": 3600,
                "statuses": "Online,Offline",
                "per_page": 500,
                "total_pages": -1
            })))
            .unwrap();
        assert_eq!(request.path, "/networks/N_1/clients");
        assert!(request.query.contains(&("timespan".to_string(), "3600".to_string())));
        assert!(request.query.contains(&("statuses[]".to_string(), "Online".to_string())));
        assert!(request.query.contains(&("perPage".to_string(), "500".to_string())));
        assert_eq!(request.pages, PageLimit::All);
        assert!(request.body.is_none());
    }

    #[test]
    fn test_missing_path_param_is_an_error() {
        let tool = EndpointTool::new(&LIST_CLIENTS);
        let err = tool.build_request(&args(json!({}))).unwrap_err();
        assert!(err.to_string().contains("network_id"));
    }

    #[tokio::test]
    async fn test_call_renders_markdown() {
        let api = RecordingApi {
            requests: Mutex::new(Vec::new()),
            response: json!([{"description": "iPhone", "mac": "aa:bb", "ip": "10.0.0.9"}]),
        };
        let tool = EndpointTool::new(&LIST_CLIENTS);
        let text = tool
            .call(&api, &args(json!({"network_id": "N_1"})))
            .await
            .unwrap();
        assert!(text.starts_with("# Network Clients"));
        assert!(text.contains("- **iPhone**"));
        assert_eq!(api.requests.lock().unwrap().len(), 1);
    }
}
