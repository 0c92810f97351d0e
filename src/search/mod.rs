//! IP address lookup over the clients of a network.

mod dhcp_reservation;
mod ip_lookup;

pub use dhcp_reservation::CreateDhcpReservationTool;
pub use ip_lookup::{find_client_by_ip, ClientMatch, FindDeviceByIpTool};

use crate::core::registry::Tool;
use std::sync::Arc;

/// Client history searched by the lookup: seven days.
pub const SEARCH_TIMESPAN_SECONDS: u64 = 604_800;

/// The reservation tool writes to the Dashboard and is left out in read-only
/// mode.
pub fn tools(read_only: bool) -> Vec<Arc<dyn Tool>> {
    let mut tools: Vec<Arc<dyn Tool>> = vec![Arc::new(FindDeviceByIpTool::new())];
    if !read_only {
        tools.push(Arc::new(CreateDhcpReservationTool::new()));
    }
    tools
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_only_skips_reservation() {
        let names = |read_only| -> Vec<String> {
            tools(read_only)
                .iter()
                .map(|t| t.definition().name.clone())
                .collect()
        };
        assert_eq!(names(true), vec!["find_device_by_ip"]);
        assert_eq!(
            names(false),
            vec!["find_device_by_ip", "create_dhcp_reservation_from_ip"]
        );
    }
}
