//! Markdown rendering of Dashboard API responses.

use crate::domain::model::HttpMethod;
use serde_json::{Map, Value};

const MAX_LIST_ITEMS: usize = 100;
const MAX_INLINE_ITEMS: usize = 10;
const MAX_INLINE_JSON: usize = 120;

const LABEL_KEYS: &[&str] = &[
    "name",
    "description",
    "serial",
    "mac",
    "email",
    "portId",
    "number",
    "id",
    "networkId",
    "type",
];

const PRIORITY_KEYS: &[&str] = &[
    "id",
    "serial",
    "model",
    "mac",
    "status",
    "productType",
    "productTypes",
    "networkId",
    "organizationId",
    "ip",
    "lanIp",
    "publicIp",
    "vlan",
    "enabled",
    "type",
    "tags",
];

const ACRONYMS: &[(&str, &str)] = &[
    ("acl", "ACL"),
    ("acls", "ACLs"),
    ("amp", "AMP"),
    ("api", "API"),
    ("bgp", "BGP"),
    ("dhcp", "DHCP"),
    ("dns", "DNS"),
    ("hipaa", "HIPAA"),
    ("ids", "IDS"),
    ("ip", "IP"),
    ("ipv6", "IPv6"),
    ("l3", "L3"),
    ("l7", "L7"),
    ("mac", "MAC"),
    ("mqtt", "MQTT"),
    ("mtu", "MTU"),
    ("ospf", "OSPF"),
    ("poe", "PoE"),
    ("qos", "QoS"),
    ("rf", "RF"),
    ("saml", "SAML"),
    ("sm", "SM"),
    ("snmp", "SNMP"),
    ("ssid", "SSID"),
    ("ssids", "SSIDs"),
    ("stp", "STP"),
    ("uplink", "Uplink"),
    ("vlan", "VLAN"),
    ("vlans", "VLANs"),
    ("vpn", "VPN"),
    ("wan", "WAN"),
];

/// "get_network_wireless_ssids" -> "Network Wireless SSIDs".
pub fn title_from_name(name: &str) -> String {
    let trimmed = name.strip_prefix("get_").unwrap_or(name);
    trimmed
        .split('_')
        .filter(|w| !w.is_empty())
        .map(|word| {
            if let Some((_, acronym)) = ACRONYMS.iter().find(|(w, _)| *w == word) {
                return acronym.to_string();
            }
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn scalar(value: &Value) -> String {
    match value {
        Value::Null => "None".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Array(items) => inline_array(items),
        Value::Object(_) => compact(value),
    }
}

pub fn str_field<'a>(obj: &'a Value, key: &str) -> Option<&'a str> {
    obj.get(key).and_then(Value::as_str).filter(|s| !s.is_empty())
}

pub fn field_or<'a>(obj: &'a Value, key: &str, default: &'a str) -> &'a str {
    str_field(obj, key).unwrap_or(default)
}

/// Renders a read response.
pub fn render(title: &str, value: &Value) -> String {
    let mut out = format!("# {}\n\n", title);
    match value {
        Value::Null => out.push_str("No data returned.\n"),
        Value::Array(items) if items.is_empty() => {
            out = format!("No {} found.\n", title.to_lowercase());
        }
        Value::Array(items) => render_list(&mut out, items),
        Value::Object(obj) if obj.is_empty() => out.push_str("No data returned.\n"),
        Value::Object(obj) => render_object(&mut out, obj),
        other => {
            out.push_str(&scalar(other));
            out.push('\n');
        }
    }
    out
}

/// Renders the outcome of a POST/PUT/DELETE.
pub fn render_write(title: &str, method: HttpMethod, value: &Value) -> String {
    let verb = match method {
        HttpMethod::Delete => "deleted",
        HttpMethod::Post => "completed",
        HttpMethod::Put => "updated",
        HttpMethod::Get => "retrieved",
    };
    let mut out = format!("✅ {} {} successfully\n", title, verb);
    match value {
        Value::Null => {}
        Value::Object(obj) if obj.is_empty() => {}
        _ => {
            out.push('\n');
            out.push_str(&render("Response", value));
        }
    }
    out
}

fn render_list(out: &mut String, items: &[Value]) {
    out.push_str(&format!("**Total**: {}\n\n", items.len()));

    for (index, item) in items.iter().take(MAX_LIST_ITEMS).enumerate() {
        match item {
            Value::Object(obj) => {
                let label_key = LABEL_KEYS.iter().copied().find(|k| {
                    obj.get(*k)
                        .map(|v| !v.is_null() && v.as_str() != Some(""))
                        .unwrap_or(false)
                });
                match label_key {
                    Some(key) => out.push_str(&format!("- **{}**\n", scalar(&obj[key]))),
                    None => out.push_str(&format!("- **Item {}**\n", index + 1)),
                }
                for (key, value) in ordered_fields(obj) {
                    if Some(key) == label_key {
                        continue;
                    }
                    out.push_str(&format!("  - {}: {}\n", key, summary(value)));
                }
            }
            other => out.push_str(&format!("- {}\n", scalar(other))),
        }
    }

    if items.len() > MAX_LIST_ITEMS {
        out.push_str(&format!(
            "\n... and {} more\n",
            items.len() - MAX_LIST_ITEMS
        ));
    }
}

fn render_object(out: &mut String, obj: &Map<String, Value>) {
    for (key, value) in ordered_fields(obj) {
        match value {
            Value::Object(nested) if !nested.is_empty() => {
                out.push_str(&format!("- **{}**:\n", key));
                for (nested_key, nested_value) in ordered_fields(nested) {
                    out.push_str(&format!("  - {}: {}\n", nested_key, summary(nested_value)));
                }
            }
            Value::Array(items) if items.iter().any(Value::is_object) => {
                out.push_str(&format!("- **{}**: {} items\n", key, items.len()));
                for item in items.iter().take(MAX_INLINE_ITEMS) {
                    out.push_str(&format!("  - {}\n", compact(item)));
                }
                if items.len() > MAX_INLINE_ITEMS {
                    out.push_str(&format!(
                        "  - ... and {} more\n",
                        items.len() - MAX_INLINE_ITEMS
                    ));
                }
            }
            other => out.push_str(&format!("- **{}**: {}\n", key, summary(other))),
        }
    }
}

fn ordered_fields(obj: &Map<String, Value>) -> Vec<(&str, &Value)> {
    // Priority keys first, the rest in the map's (sorted) order.
    let mut fields = Vec::with_capacity(obj.len());
    for key in PRIORITY_KEYS {
        if let Some(value) = obj.get(*key) {
            fields.push((*key, value));
        }
    }
    for (key, value) in obj {
        if !PRIORITY_KEYS.contains(&key.as_str()) {
            fields.push((key.as_str(), value));
        }
    }
    fields
}

fn summary(value: &Value) -> String {
    match value {
        Value::Object(obj) if obj.is_empty() => "{}".to_string(),
        Value::Object(obj) => {
            let text = compact(value);
            if text.len() <= MAX_INLINE_JSON {
                text
            } else {
                format!("({} fields)", obj.len())
            }
        }
        Value::Array(items) if items.iter().any(Value::is_object) => {
            format!("({} items)", items.len())
        }
        other => scalar(other),
    }
}

fn inline_array(items: &[Value]) -> String {
    if items.is_empty() {
        return "[]".to_string();
    }
    let mut parts: Vec<String> = items
        .iter()
        .take(MAX_INLINE_ITEMS)
        .map(|v| match v {
            Value::String(s) => s.clone(),
            other => compact(other),
        })
        .collect();
    if items.len() > MAX_INLINE_ITEMS {
        parts.push(format!("... and {} more", items.len() - MAX_INLINE_ITEMS));
    }
    parts.join(", ")
}

fn compact(value: &Value) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| value.to_string())
}
