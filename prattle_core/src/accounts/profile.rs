use serde::{Deserialize, Serialize};

/// A persisted login identity.
///
/// JSON on disk looks like:
/// `{ "name":"jabber_org", "jid":"me@jabber.org", "resource":"laptop", "enabled":true }`
/// Optional fields are omitted when unset; `port` of 0 means "use the
/// protocol default".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountProfile {
    pub name: String,
    pub jid: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server: Option<String>,
    #[serde(default)]
    pub port: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource: Option<String>,
    #[serde(default = "enabled_default")]
    pub enabled: bool,
}

fn enabled_default() -> bool {
    true
}

impl AccountProfile {
    /// A fresh, enabled profile with no overrides.
    pub fn new(name: impl Into<String>, jid: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            jid: jid.into(),
            password: None,
            server: None,
            port: 0,
            resource: None,
            enabled: true,
        }
    }

    /// "user@host/resource" when a resource is configured, the bare JID
    /// otherwise.
    pub fn full_jid(&self) -> String {
        match &self.resource {
            Some(resource) => format!("{}/{}", self.jid, resource),
            None => self.jid.clone(),
        }
    }
}
