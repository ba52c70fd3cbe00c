use serde::{Deserialize, Serialize};

/// NuGet v3 JSON service index.
pub const NUGET_V3_URL: &str = "https://api.nuget.org/v3/index.json";

/// NuGet v2 OData feed.
pub const NUGET_V2_URL: &str = "https://www.nuget.org/api/v2";

/// Legacy NuGet v1 feed service.
pub const NUGET_V1_URL: &str = "https://packages.nuget.org/v1/FeedService.svc";

/// A named remote source from which package descriptors are resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feed {
    pub url: String,
}

impl Feed {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn nuget_v3() -> Self {
        Self::new(NUGET_V3_URL)
    }

    pub fn nuget_v2() -> Self {
        Self::new(NUGET_V2_URL)
    }

    pub fn nuget_v1() -> Self {
        Self::new(NUGET_V1_URL)
    }

    /// The three well-known feeds every solution starts with, in the order
    /// they are consulted.
    pub fn defaults() -> Vec<Feed> {
        vec![Self::nuget_v3(), Self::nuget_v2(), Self::nuget_v1()]
    }
}

impl std::fmt::Display for Feed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_three_in_fixed_order() {
        let feeds = Feed::defaults();
        assert_eq!(feeds.len(), 3);
        assert_eq!(feeds[0].url, NUGET_V3_URL);
        assert_eq!(feeds[1].url, NUGET_V2_URL);
        assert_eq!(feeds[2].url, NUGET_V1_URL);
    }

    #[test]
    fn trailing_slash_is_normalized() {
        assert_eq!(Feed::new("https://example.org/feed/"), Feed::new("https://example.org/feed"));
    }
}
