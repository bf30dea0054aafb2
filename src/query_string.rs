use serde::Deserialize;

/// Query parameters accepted by the post listing.
#[derive(Deserialize, Default, PartialEq, Debug)]
pub struct ListQuery {
    page: Option<String>,
}

impl ListQuery {
    pub fn parse(query: Option<&str>) -> Self {
        query.and_then(|buf| serde_urlencoded::from_str(buf).ok())
            .unwrap_or_default()
    }

    /// Requested page, 1 when absent or not a positive number.
    pub fn page(&self) -> u32 {
        self.page.as_deref()
            .and_then(|p| p.parse::<u32>().ok())
            .filter(|p| *p > 0)
            .unwrap_or(1)
    }
}
