use serde::Deserialize;

pub const JRD_CONTENT_TYPE: &str = "application/jrd+json";
pub const ACTIVITY_JSON: &str = "application/activity+json";
pub const SELF_REL: &str = "self";

/// Webfinger JRD body. Missing fields deserialize to empty values so that
/// validation, not parsing, reports what is wrong with them.
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct WebfingerDocument {
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub aliases: Vec<String>,
    #[serde(default)]
    pub links: Vec<WebfingerLink>,
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct WebfingerLink {
    #[serde(default)]
    pub rel: String,
    #[serde(default, rename = "type")]
    pub media_type: String,
    #[serde(default)]
    pub href: String,
}

impl WebfingerDocument {
    pub fn from_slice(body: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(body)
    }

    /// First link announcing the ActivityPub actor.
    pub fn self_link(&self) -> Option<&WebfingerLink> {
        self.links
            .iter()
            .find(|link| link.rel == SELF_REL && link.media_type == ACTIVITY_JSON)
    }
}
