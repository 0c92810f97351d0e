use crate::catalog;
use crate::config::profiles::{ModuleSelection, RESOURCES_MODULE};
use crate::core::args::ToolArgs;
use crate::core::endpoint_tool::EndpointTool;
use crate::domain::model::{ToolDefinition, ToolModule};
use crate::domain::ports::{ConfigProvider, DashboardApi};
use crate::utils::error::{MerakiError, Result};
use crate::{analytics, helpers, search};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Arc;

/// A callable MCP tool.
#[async_trait]
pub trait Tool: Send + Sync {
    fn definition(&self) -> &ToolDefinition;

    /// Returns the Markdown text shown to the client.
    async fn call(&self, api: &dyn DashboardApi, args: &ToolArgs) -> Result<String>;
}

/// Result of a `tools/call`. Tool failures are reported in-band.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolOutcome {
    pub text: String,
    pub is_error: bool,
}

pub struct ToolRegistry {
    api: Arc<dyn DashboardApi>,
    tools: BTreeMap<String, Arc<dyn Tool>>,
    resources_enabled: bool,
}

impl ToolRegistry {
    pub fn new(api: Arc<dyn DashboardApi>) -> Self {
        Self {
            api,
            tools: BTreeMap::new(),
            resources_enabled: true,
        }
    }

    /// Registers the tools selected by the profile, module list and
    /// exclusions of `config`.
    pub fn build(config: &dyn ConfigProvider, api: Arc<dyn DashboardApi>) -> Result<Self> {
        let selection = ModuleSelection::new(
            config.profile(),
            config.custom_modules(),
            config.excluded_modules(),
        );
        let read_only = config.read_only();
        let mut registry = Self::new(api);
        // Resources are a module like any other: every profile loads them, a
        // custom module list has to name `resources` to keep them.
        registry.resources_enabled = selection.loads(RESOURCES_MODULE);
        let mut skipped_writes = 0usize;

        for module in ToolModule::ALL.into_iter().filter(ToolModule::is_sdk) {
            if !selection.loads(module.key()) {
                continue;
            }
            for spec in catalog::endpoints_for(module) {
                if read_only && !spec.method.is_read_only() {
                    skipped_writes += 1;
                    continue;
                }
                registry.register(Arc::new(EndpointTool::new(spec)))?;
            }
        }

        let helpers_loaded = selection.loads(ToolModule::Helpers.key());
        if helpers_loaded {
            for tool in helpers::tools() {
                registry.register(tool)?;
            }
        }
        if selection.loads(ToolModule::Analytics.key()) {
            for tool in analytics::tools() {
                registry.register(tool)?;
            }
        }
        // IP lookup is always available unless explicitly excluded.
        if !selection.excludes(ToolModule::Search.key()) {
            for tool in search::tools(read_only) {
                registry.register(tool)?;
            }
        }

        if helpers_loaded {
            let mut counts = registry.module_counts();
            *counts.entry(ToolModule::Helpers).or_insert(0) += 1;
            registry.register(Arc::new(helpers::CategoriesTool::new(counts)))?;
        }

        if skipped_writes > 0 {
            tracing::info!("🔒 Read-only mode: skipped {} write tools", skipped_writes);
        }
        tracing::info!(
            "📦 Loaded {} tools (profile {})",
            registry.len(),
            selection.profile_name()
        );
        Ok(registry)
    }

    pub fn register(&mut self, tool: Arc<dyn Tool>) -> Result<()> {
        let name = tool.definition().name.clone();
        if self.tools.contains_key(&name) {
            return Err(MerakiError::Config {
                message: format!("tool '{}' registered twice", name),
            });
        }
        self.tools.insert(name, tool);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Arc<dyn Tool>> {
        self.tools.get(name)
    }

    /// Definitions sorted by name.
    pub fn definitions(&self) -> Vec<&ToolDefinition> {
        self.tools.values().map(|t| t.definition()).collect()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    pub fn module_counts(&self) -> BTreeMap<ToolModule, usize> {
        let mut counts = BTreeMap::new();
        for tool in self.tools.values() {
            *counts.entry(tool.definition().module).or_insert(0) += 1;
        }
        counts
    }

    /// Whether `resources/*` is served for this selection.
    pub fn resources_enabled(&self) -> bool {
        self.resources_enabled
    }

    pub fn api(&self) -> &Arc<dyn DashboardApi> {
        &self.api
    }

    /// Runs a tool. Only an unknown tool name is an `Err`; everything that
    /// goes wrong inside the tool comes back as an error outcome.
    pub async fn call(&self, name: &str, arguments: &Value) -> Result<ToolOutcome> {
        let tool = self
            .get(name)
            .ok_or_else(|| MerakiError::ToolNotFound(name.to_string()))?;

        tracing::info!("🔧 Calling tool {}", name);
        let result = match ToolArgs::from_value(arguments) {
            Ok(args) => tool.call(self.api.as_ref(), &args).await,
            Err(e) => Err(e),
        };

        match result {
            Ok(text) => {
                tracing::debug!("✅ {} returned {} bytes", name, text.len());
                Ok(ToolOutcome {
                    text,
                    is_error: false,
                })
            }
            Err(e) => {
                tracing::warn!("❌ {} failed: {}", name, e);
                Ok(ToolOutcome {
                    text: failure_text(name, &e),
                    is_error: true,
                })
            }
        }
    }
}

fn failure_text(name: &str, error: &MerakiError) -> String {
    format!("❌ Failed to {}: {}", name.replace('_', " "), error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::ApiRequest;
    use serde_json::json;

    struct FailingApi;

    #[async_trait]
    impl DashboardApi for FailingApi {
        async fn send(&self, _request: ApiRequest) -> Result<Value> {
            Err(MerakiError::Api {
                status: 404,
                message: "Not found".to_string(),
            })
        }
    }

    struct EchoTool {
        definition: ToolDefinition,
    }

    impl EchoTool {
        fn named(name: &str) -> Self {
            Self {
                definition: ToolDefinition {
                    name: name.to_string(),
                    description: "echo".to_string(),
                    module: ToolModule::Helpers,
                    input_schema: json!({"type": "object"}),
                    read_only: true,
                },
            }
        }
    }

    #[async_trait]
    impl Tool for EchoTool {
        fn definition(&self) -> &ToolDefinition {
            &self.definition
        }

        async fn call(&self, api: &dyn DashboardApi, args: &ToolArgs) -> Result<String> {
            if args.contains("fail") {
                api.get("/organizations").await?;
            }
            Ok(format!("echo {}", args.optional_str("text")?.unwrap_or_default()))
        }
    }

    fn registry() -> ToolRegistry {
        let mut registry = ToolRegistry::new(Arc::new(FailingApi));
        registry.register(Arc::new(EchoTool::named("zeta"))).unwrap();
        registry.register(Arc::new(EchoTool::named("alpha"))).unwrap();
        registry
    }

    #[test]
    fn test_duplicate_registration_rejected() {
        let mut registry = registry();
        assert!(registry.register(Arc::new(EchoTool::named("alpha"))).is_err());
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_definitions_sorted() {
        let registry = registry();
        let names: Vec<&str> = registry.definitions().iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["alpha", "zeta"]);
    }

    #[tokio::test]
    async fn test_call_success_and_failure() {
        let registry = registry();
        let ok = registry.call("alpha", &json!({"text": "hi"})).await.unwrap();
        assert_eq!(ok, ToolOutcome { text: "echo hi".to_string(), is_error: false });

        let failed = registry.call("alpha", &json!({"fail": true})).await.unwrap();
        assert!(failed.is_error);
        assert!(failed.text.starts_with("❌ Failed to alpha: Meraki API returned 404"));

        let bad_args = registry.call("alpha", &json!("nope")).await.unwrap();
        assert!(bad_args.is_error);
    }

    #[tokio::test]
    async fn test_unknown_tool() {
        let registry = registry();
        assert!(matches!(
            registry.call("missing", &Value::Null).await,
            Err(MerakiError::ToolNotFound(_))
        ));
    }
}
