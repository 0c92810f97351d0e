pub mod args;
pub mod endpoint_tool;
pub mod format;
pub mod registry;

pub use crate::domain::model::{
    ApiRequest, EndpointSpec, HttpMethod, PageDirection, PageLimit, ParamKind, ParamLocation,
    ParamSpec, ToolDefinition, ToolModule,
};
pub use crate::domain::ports::{ConfigProvider, DashboardApi};
pub use crate::utils::error::Result;
pub use args::ToolArgs;
pub use endpoint_tool::{composite_definition, encode_segment, object_schema, EndpointTool};
pub use registry::{Tool, ToolOutcome, ToolRegistry};
