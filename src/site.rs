//! Compatibility contract with mdpr.jp.
//!
//! Every value in here mirrors what the official Android app sends or
//! expects. The remote service may reject (or silently alter) responses when
//! they drift, so they are kept together, away from the scraping logic.

/// Prefix every supported article URL starts with.
pub const DOMAIN_MARKER: &str = "https://mdpr.jp/";
/// Photo-detail pages are already direct image pages: not supported.
pub const DISALLOWED_MARKER: &str = "photo/detail";
/// Host serving the mobile rendering of the articles.
pub const MOBILE_HOST: &str = "https://app2-mdpr.freetls.fastly.net";
/// Path prefix of the mobile article page, the article ID is appended.
pub const MOBILE_ARTICLE_PATH: &str = "/articles/detail/";
/// Host serving the gallery API.
pub const API_HOST: &str = "https://app2-mdpr.freetls.fastly.net";
/// Attribute holding the URL-encoded gallery descriptor.
pub const APP_OPTION_ATTRIBUTE: &str = "data-mdprapp-option";

/// Headers of the in-app browser, used to get the app's HTML rendering.
pub const WEB_PROFILE: HeaderProfile = HeaderProfile::new(
    "web",
    &[
        (
            "User-Agent",
            "mdpr-user-agent: Mozilla/5.0 (Linux; Android 7.1.1; E6533 Build/32.4.A.1.54; wv) AppleWebKit/537.36 (KHTML, like Gecko) Version/4.0 Chrome/94.0.4606.85 Mobile Safari/537.36",
        ),
        ("X-Requested-With", "jp.mdpr.mdprviewer"),
    ],
);

/// Headers of the native app API client.
pub const API_PROFILE: HeaderProfile = HeaderProfile::new(
    "api",
    &[
        ("mdpr-user-agent", "sony; E653325; android; 7.1.1; 3.10.4838(66);"),
        ("User-Agent", "okhttp/4.9.1"),
    ],
);

/// A named set of HTTP headers.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct HeaderProfile {
    /// Profile name, for logging.
    name: &'static str,
    /// Header name/value pairs, sent in order.
    headers: &'static [(&'static str, &'static str)],
}

impl HeaderProfile {
    /// Initializes a new header profile.
    pub const fn new(
        name: &'static str,
        headers: &'static [(&'static str, &'static str)],
    ) -> Self {
        Self { name, headers }
    }

    /// Returns the profile name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the header name/value pairs.
    pub fn headers(
        &self,
    ) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.headers.iter().copied()
    }
}

/// Everything the scraper needs to know about the target site.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Site {
    /// Substring an article URL must contain.
    pub domain_marker: &'static str,
    /// Substring that disqualifies an URL, even with the domain marker.
    pub disallowed_marker: &'static str,
    /// Host of the mobile article pages.
    pub mobile_host: &'static str,
    /// Path prefix of the mobile article pages.
    pub mobile_article_path: &'static str,
    /// Host of the gallery API.
    pub api_host: &'static str,
    /// Anchor attribute holding the gallery descriptor.
    pub app_option_attribute: &'static str,
    /// Headers used to fetch the HTML.
    pub web_profile: HeaderProfile,
    /// Headers used to call the API.
    pub api_profile: HeaderProfile,
}

impl Site {
    /// mdpr.jp, as seen by its Android app.
    pub const MDPR: Self = Self {
        domain_marker: DOMAIN_MARKER,
        disallowed_marker: DISALLOWED_MARKER,
        mobile_host: MOBILE_HOST,
        mobile_article_path: MOBILE_ARTICLE_PATH,
        api_host: API_HOST,
        app_option_attribute: APP_OPTION_ATTRIBUTE,
        web_profile: WEB_PROFILE,
        api_profile: API_PROFILE,
    };
}

impl Default for Site {
    fn default() -> Self {
        Self::MDPR
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profiles_are_distinct() {
        let web = WEB_PROFILE.headers().collect::<Vec<_>>();
        let api = API_PROFILE.headers().collect::<Vec<_>>();

        assert!(web.contains(&("X-Requested-With", "jp.mdpr.mdprviewer")));
        assert!(api.contains(&("User-Agent", "okhttp/4.9.1")));
        assert_ne!(WEB_PROFILE, API_PROFILE);
    }
}
