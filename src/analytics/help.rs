use crate::core::args::ToolArgs;
use crate::core::endpoint_tool::composite_definition;
use crate::core::registry::Tool;
use crate::domain::model::{ToolDefinition, ToolModule};
use crate::domain::ports::DashboardApi;
use crate::utils::error::Result;
use async_trait::async_trait;

const GUIDE: &str = "\
❓ Event Log Analysis Help Guide
==================================================

🔧 Available Event Analysis Tools:

1. **search_event_logs**
   Use when: Looking for specific events or errors
   Features: Search by text, filter by type, device or client
   Example: search_event_logs(network_id, search_term='auth fail', timespan=3600)

2. **analyze_error_patterns**
   Use when: Need to find recurring issues
   Features: Pattern detection, frequency analysis, clustering
   Example: analyze_error_patterns(network_id, timespan=86400, min_occurrences=5)

3. **identify_root_causes**
   Use when: Investigating why something happened
   Features: Analyzes events around an issue, suggests causes
   Example: identify_root_causes(network_id, 'users cannot connect to wifi')

4. **correlate_events**
   Use when: Understanding what happened at a specific time
   Features: Shows related events in a time window
   Example: correlate_events(network_id, '2024-01-20T15:30:00Z', correlation_window=300)

5. **generate_incident_timeline**
   Use when: Documenting an incident
   Features: Creates a detailed timeline for reports
   Example: generate_incident_timeline(network_id, start_time, end_time)

🔍 Common Event Types:

**Authentication Events:**
• auth_fail - General authentication failure
• wireless_auth_fail - WiFi authentication failure
• wired_8021x_auth_fail - Wired 802.1X failure
• radius_auth_fail - RADIUS server failure

**Connectivity Events:**
• association_reject - Client association rejected
• dhcp_no_lease - DHCP lease not obtained
• client_connectivity_issue - General connectivity problem
• dns_lookup_fail - DNS resolution failure

**Infrastructure Events:**
• device_down - Device went offline
• port_cycle - Switch port flapped
• vpn_connectivity_issue - VPN tunnel problem
• gateway_down - Gateway unreachable

**Wireless Events:**
• deauth - Client deauthenticated
• disassociation - Client disassociated
• high_channel_utilization - Channel congestion

💡 Analysis Tips:

**For Authentication Issues:**
1. search_event_logs(network_id, event_types=['auth_fail', 'radius_auth_fail'])
2. Look for patterns by client or time
3. Check RADIUS server connectivity

**For Connectivity Problems:**
1. identify_root_causes(network_id, 'connectivity issues')
2. Check DHCP and DNS events
3. Look for infrastructure problems

**For Performance Issues:**
1. analyze_error_patterns(network_id, timespan=7200)
2. Look for port cycles or high utilization
3. Check for correlated device events

**For Incident Investigation:**
1. Note the approximate time of the issue
2. Use correlate_events around that time
3. Generate a timeline for documentation

📊 Time Ranges:
• 300 = 5 minutes (correlation)
• 3600 = 1 hour (recent issues)
• 7200 = 2 hours (root cause)
• 86400 = 24 hours (patterns)
• 604800 = 7 days (trends)";

/// `event_analysis_help`
pub struct EventAnalysisHelpTool {
    definition: ToolDefinition,
}

impl EventAnalysisHelpTool {
    pub fn new() -> Self {
        Self {
            definition: composite_definition(
                "event_analysis_help",
                ToolModule::Analytics,
                "❓ Get help on using the event log analysis tools",
                &[],
                true,
            ),
        }
    }
}

impl Default for EventAnalysisHelpTool {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Tool for EventAnalysisHelpTool {
    fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    async fn call(&self, _api: &dyn DashboardApi, _args: &ToolArgs) -> Result<String> {
        Ok(GUIDE.to_string())
    }
}
