use serde::{Deserialize, Deserializer};
use utoipa::ToSchema;

fn deserialize_optional_u64<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(s) if s.is_empty() => Ok(None),
        Some(s) => s.parse::<u64>().map(Some).map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

/// `?page=&size=` query parameters for windowed listings.
///
/// Values arrive as strings; empty strings count as absent and anything
/// non-numeric (including negatives) is rejected before a handler runs.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct PageParams {
    #[serde(default, deserialize_with = "deserialize_optional_u64")]
    pub page: Option<u64>,
    #[serde(default, deserialize_with = "deserialize_optional_u64")]
    pub size: Option<u64>,
}

/// Skip/limit window derived from [`PageParams`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub skip: u64,
    pub limit: i64,
}

impl PageParams {
    pub fn page(&self) -> u64 {
        self.page.unwrap_or(1).max(1)
    }

    pub fn size(&self) -> u64 {
        self.size.unwrap_or(10).max(1)
    }

    /// Window for the requested page: skip `(page - 1) * size`, take `size`.
    pub fn window(&self) -> PageWindow {
        PageWindow {
            skip: (self.page() - 1) * self.size(),
            limit: self.size() as i64,
        }
    }
}
