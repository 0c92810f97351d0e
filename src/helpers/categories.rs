use crate::core::args::ToolArgs;
use crate::core::endpoint_tool::composite_definition;
use crate::core::registry::Tool;
use crate::domain::model::{ToolDefinition, ToolModule};
use crate::domain::ports::DashboardApi;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::collections::BTreeMap;

/// `list_tool_categories`: tool counts of every loaded module. The counts are
/// taken once the rest of the registry is built.
pub struct CategoriesTool {
    definition: ToolDefinition,
    counts: BTreeMap<ToolModule, usize>,
}

impl CategoriesTool {
    pub fn new(counts: BTreeMap<ToolModule, usize>) -> Self {
        Self {
            definition: composite_definition(
                "list_tool_categories",
                ToolModule::Helpers,
                "📚 List loaded tool categories and how many tools each provides",
                &[],
                true,
            ),
            counts,
        }
    }

    pub fn render(&self) -> String {
        let total: usize = self.counts.values().sum();
        let mut out = vec![
            "# 📚 Tool Categories".to_string(),
            String::new(),
            format!("**Total Tools**: {}", total),
            String::new(),
        ];

        let (sdk, custom): (Vec<_>, Vec<_>) = self.counts.iter().partition(|(m, _)| m.is_sdk());
        if !sdk.is_empty() {
            out.push("## Dashboard API Modules".to_string());
            for (module, count) in sdk {
                out.push(format!("- **{}**: {} tools", module.key(), count));
            }
            out.push(String::new());
        }
        if !custom.is_empty() {
            out.push("## Custom Tools".to_string());
            for (module, count) in custom {
                out.push(format!("- **{}**: {} tools", module.key(), count));
            }
            out.push(String::new());
        }
        out.push("💡 Use tools/list to see every tool with its input schema.".to_string());
        out.join("\n")
    }
}

#[async_trait]
impl Tool for CategoriesTool {
    fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    async fn call(&self, _api: &dyn DashboardApi, _args: &ToolArgs) -> Result<String> {
        Ok(self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_splits_sdk_and_custom_modules() {
        let counts = BTreeMap::from([
            (ToolModule::Wireless, 12),
            (ToolModule::Helpers, 5),
            (ToolModule::Search, 2),
        ]);
        let text = CategoriesTool::new(counts).render();
        assert!(text.contains("**Total Tools**: 19"));
        assert!(text.contains("- **SDK_wireless**: 12 tools"));
        assert!(text.contains("- **helpers**: 5 tools"));
        let sdk = text.find("## Dashboard API Modules").unwrap();
        let custom = text.find("## Custom Tools").unwrap();
        assert!(sdk < custom);
    }
}
