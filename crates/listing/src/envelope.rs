//! Decoding of the listing envelope returned by feed sources.
//!
//! Every node of a listing response is a `{ "kind": ..., "data": ... }`
//! object. Decoding goes through [`RawThing`] so an unknown kind, a missing
//! payload or a payload of the wrong shape becomes [`Thing::Other`] instead
//! of failing the whole response.

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::trace;

/// Kind tag of a listing node
const LISTING_KIND: &str = "listing";
/// Kind tag of a link post
const LINK_KIND: &str = "t3";

/// One node of the listing tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Thing {
    Listing(ListingData),
    Link(LinkData),
    /// Comments, accounts, malformed nodes: anything we don't select from
    Other,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ListingData {
    #[serde(default)]
    pub children: Vec<Thing>,
}

/// Fields of a link post used to build a candidate.
///
/// Missing vote counts decode as -1 ("unknown").
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LinkData {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub subreddit: String,
    #[serde(default)]
    pub permalink: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub domain: String,
    #[serde(default)]
    pub score: i64,
    #[serde(default = "unknown_votes")]
    pub ups: i64,
    #[serde(default = "unknown_votes")]
    pub downs: i64,
    #[serde(default)]
    pub created_utc: f64,
}

fn unknown_votes() -> i64 {
    -1
}

/// Undecoded node as it appears on the wire.
#[derive(Debug, Deserialize)]
struct RawThing {
    #[serde(default)]
    kind: Option<String>,
    #[serde(default)]
    data: Option<Value>,
}

impl From<RawThing> for Thing {
    fn from(raw: RawThing) -> Self {
        let (Some(kind), Some(data)) = (raw.kind, raw.data) else {
            return Thing::Other;
        };

        match kind.to_ascii_lowercase().as_str() {
            LISTING_KIND => serde_json::from_value(data)
                .map(Thing::Listing)
                .unwrap_or_else(|e| {
                    trace!("Dropping malformed listing node: {}", e);
                    Thing::Other
                }),
            LINK_KIND => serde_json::from_value(data)
                .map(Thing::Link)
                .unwrap_or_else(|e| {
                    trace!("Dropping malformed link node: {}", e);
                    Thing::Other
                }),
            _ => Thing::Other,
        }
    }
}

impl<'de> Deserialize<'de> for Thing {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Non-object nodes (null, numbers, ...) are tolerated as well
        let value = Value::deserialize(deserializer)?;
        Ok(serde_json::from_value::<RawThing>(value)
            .map(Thing::from)
            .unwrap_or(Thing::Other))
    }
}

impl Thing {
    /// Decode a whole response body.
    pub fn from_json(body: &str) -> serde_json::Result<Self> {
        serde_json::from_str(body)
    }

    /// Link payloads reachable from this node, in document order.
    ///
    /// A listing yields its link children; a bare link yields itself.
    pub fn into_links(self) -> Vec<LinkData> {
        match self {
            Thing::Listing(listing) => listing
                .children
                .into_iter()
                .filter_map(|child| match child {
                    Thing::Link(link) => Some(link),
                    _ => None,
                })
                .collect(),
            Thing::Link(link) => vec![link],
            Thing::Other => Vec::new(),
        }
    }
}
