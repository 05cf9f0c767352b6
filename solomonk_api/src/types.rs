//! Response types for the bestiary search endpoint.

use serde::{Deserialize, Deserializer};

/// The JSON envelope returned by the search endpoint.
///
/// `html` carries the markup for one page of monster blocks and `offset` the
/// server's idea of where the next page starts. Both may be missing once the
/// listing runs out.
#[derive(Debug, Default, Deserialize)]
pub struct PageEnvelope {
    #[serde(default)]
    pub html: Option<String>,
    #[serde(default, deserialize_with = "lenient_offset")]
    pub offset: Option<u64>,
}

/// A page that actually carries markup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Page {
    pub html: String,
    pub next_offset: Option<u64>,
}

impl PageEnvelope {
    /// Converts the envelope into a [`Page`], or `None` when `html` is
    /// missing, null or empty.
    pub fn into_page(self) -> Option<Page> {
        let html = self.html.filter(|html| !html.is_empty())?;
        Some(Page {
            html,
            next_offset: self.offset,
        })
    }
}

/// Accepts the offset as a JSON integer or a numeric string. Anything else
/// (null, negative, fractional, garbage) reads as missing, which makes the
/// driver fall back to `offset + batch size` instead of jumping backwards.
fn lenient_offset<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Number(n) => n.as_u64(),
        serde_json::Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}
