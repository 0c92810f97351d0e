use super::{assess_ssids, items, network_path, organization_path, WirelessInventory};
use crate::core::args::ToolArgs;
use crate::core::endpoint_tool::composite_definition;
use crate::core::format::{field_or, str_field};
use crate::core::registry::Tool;
use crate::domain::model::{ParamKind, ParamSpec, ToolDefinition, ToolModule};
use crate::domain::ports::DashboardApi;
use crate::utils::error::Result;
use async_trait::async_trait;
use serde_json::Value;

const PARAMS: &[ParamSpec] = &[ParamSpec::argument(
    "organization_id",
    ParamKind::String,
    true,
    "ID of the organization to analyze",
)];

/// Feature adoption across the networks of an organization.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct PostureCounts {
    pub networks: usize,
    pub ids_enabled: usize,
    pub amp_enabled: usize,
    pub content_filtering: usize,
    pub weak_wifi: usize,
    pub threats: usize,
}

impl PostureCounts {
    fn percent(&self, count: usize) -> f64 {
        if self.networks == 0 {
            0.0
        } else {
            count as f64 / self.networks as f64 * 100.0
        }
    }

    pub fn ids_percent(&self) -> f64 {
        self.percent(self.ids_enabled)
    }

    pub fn amp_percent(&self) -> f64 {
        self.percent(self.amp_enabled)
    }

    pub fn content_filtering_percent(&self) -> f64 {
        self.percent(self.content_filtering)
    }
}

fn adoption_points(percent: f64) -> u32 {
    if percent >= 80.0 {
        25
    } else if percent >= 50.0 {
        15
    } else if percent > 0.0 {
        5
    } else {
        0
    }
}

/// Organization score out of 100: 25 points each for IDS, AMP and content
/// filtering adoption, and 25 for Wi-Fi hygiene.
pub fn posture_score(counts: &PostureCounts) -> u32 {
    let wifi = match counts.weak_wifi {
        0 => 25,
        1..=2 => 10,
        _ => 0,
    };
    adoption_points(counts.ids_percent())
        + adoption_points(counts.amp_percent())
        + adoption_points(counts.content_filtering_percent())
        + wifi
}

fn posture_rating(score: u32) -> &'static str {
    match score {
        80.. => "Rating: Excellent - Strong security posture",
        60..=79 => "Rating: Good - Some improvements needed",
        40..=59 => "Rating: Fair - Significant improvements required",
        _ => "Rating: Poor - Critical security gaps",
    }
}

/// `analyze_security_posture`: security feature adoption over every network
/// of an organization.
pub struct SecurityPostureTool {
    definition: ToolDefinition,
}

impl SecurityPostureTool {
    pub fn new() -> Self {
        Self {
            definition: composite_definition(
                "analyze_security_posture",
                ToolModule::Helpers,
                "🛡️ Analyze security posture - comprehensive check of all security settings and recent threats",
                PARAMS,
                true,
            ),
        }
    }
}

impl Default for SecurityPostureTool {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Tool for SecurityPostureTool {
    fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    async fn call(&self, api: &dyn DashboardApi, args: &ToolArgs) -> Result<String> {
        let organization_id = args.required_str("organization_id")?;
        let organization = api.get(&organization_path(&organization_id, "")).await?;
        let networks = api
            .get_all(&organization_path(&organization_id, "/networks"), &[])
            .await?;
        let networks = items(&networks, "networks");

        let mut counts = PostureCounts::default();
        for network in networks {
            let Some(network_id) = str_field(network, "id") else {
                continue;
            };
            counts.networks += 1;
            tracing::debug!("🔒 Checking security posture of {}", network_id);
            check_network(api, network_id, &mut counts).await;
        }

        let score = posture_score(&counts);
        let mut out = vec![
            format!(
                "# 🛡️ Security Posture Analysis: {}",
                field_or(&organization, "name", "Unknown")
            ),
            format!("**Analysis Time**: {}\n", chrono::Utc::now().to_rfc3339()),
            "## 📊 Organization Overview".to_string(),
            format!("- Total Networks: {}", networks.len()),
            String::new(),
            "## 🔒 Security Feature Adoption".to_string(),
            format!(
                "- IDS/IPS Enabled: {}/{} ({:.0}%)",
                counts.ids_enabled,
                counts.networks,
                counts.ids_percent()
            ),
            format!(
                "- Malware Protection: {}/{} ({:.0}%)",
                counts.amp_enabled,
                counts.networks,
                counts.amp_percent()
            ),
            format!(
                "- Content Filtering: {}/{} ({:.0}%)",
                counts.content_filtering,
                counts.networks,
                counts.content_filtering_percent()
            ),
            String::new(),
            "## ⚠️ Risk Indicators".to_string(),
        ];

        if counts.weak_wifi > 0 {
            out.push(format!(
                "- ❌ Weak WiFi Security: {} networks with open/WEP",
                counts.weak_wifi
            ));
        } else {
            out.push("- ✅ WiFi Security: All networks using strong encryption".to_string());
        }
        if counts.threats > 0 {
            out.push(format!(
                "- 🚨 Security Events (24h): {} threats detected",
                counts.threats
            ));
        } else {
            out.push("- ✅ Security Events: No threats in last 24 hours".to_string());
        }
        out.push(String::new());

        out.push("## 🎯 Security Score".to_string());
        out.push(format!("**Overall Score: {}/100**", score));
        out.push(posture_rating(score).to_string());

        out.push("\n## 📋 Recommendations".to_string());
        let mut recommendations = Vec::new();
        if counts.ids_percent() < 100.0 {
            recommendations.push("Enable IDS/IPS on all networks");
        }
        if counts.amp_percent() < 100.0 {
            recommendations.push("Enable malware protection on all networks");
        }
        if counts.content_filtering_percent() < 100.0 {
            recommendations.push("Configure content filtering on all networks");
        }
        if counts.weak_wifi > 0 {
            recommendations.push("Upgrade WiFi security to WPA2/WPA3");
        }
        for (i, text) in recommendations.iter().enumerate() {
            out.push(format!("{}. {}", i + 1, text));
        }

        Ok(out.join("\n"))
    }
}

async fn check_network(api: &dyn DashboardApi, network_id: &str, counts: &mut PostureCounts) {
    if let Ok(ids) = api
        .get(&network_path(network_id, "/appliance/security/intrusion"))
        .await
    {
        if str_field(&ids, "mode") != Some("disabled") {
            counts.ids_enabled += 1;
        }
    }

    if let Ok(amp) = api
        .get(&network_path(network_id, "/appliance/security/malware"))
        .await
    {
        if str_field(&amp, "mode") != Some("disabled") {
            counts.amp_enabled += 1;
        }
    }

    if let Ok(filtering) = api
        .get(&network_path(network_id, "/appliance/contentFiltering"))
        .await
    {
        if !items(&filtering, "blockedUrlCategories").is_empty() {
            counts.content_filtering += 1;
        }
    }

    if let Ok(devices) = api.get(&network_path(network_id, "/devices")).await {
        let integrated = WirelessInventory::classify(&devices).integrated_only();
        let suffix = if integrated {
            "/appliance/ssids"
        } else {
            "/wireless/ssids"
        };
        if let Ok(ssids) = api.get(&network_path(network_id, suffix)).await {
            if assess_ssids(&ssids, integrated).critical_found {
                counts.weak_wifi += 1;
            }
        }
    }

    if let Ok(events) = api
        .get_with(
            &network_path(network_id, "/appliance/security/events"),
            &[("timespan", "86400".to_string())],
        )
        .await
    {
        counts.threats += items(&events, "events").len();
    }
}
