//! Gallery image listing, from the app API.

use crate::{client::Fetch, models, site::Site, Error, Result};

/// Calls the gallery API at `api_url` and returns the image URLs, in the
/// order given by the API.
///
/// An empty gallery is not an error.
///
/// # Errors
///
/// Fails if the API can't be reached or if its response (or any of its
/// images) doesn't have the expected shape: no partial list is returned.
pub fn list_images<F>(fetcher: &F, site: &Site, api_url: &str) -> Result<Vec<String>>
where
    F: Fetch + ?Sized,
{
    let body = fetcher.fetch(api_url, &site.api_profile)?;
    let images = parse_images(&body)?;
    log::debug!("{} image(s) listed by {api_url}", images.len());

    Ok(images)
}

/// Extracts the image URLs from an API response.
fn parse_images(body: &[u8]) -> Result<Vec<String>> {
    let response = serde_json::from_slice::<models::gallery::ApiResponse>(body)
        .map_err(|err| Error::malformed("parse gallery API response", err))?;

    Ok(response.list.into_iter().map(|image| image.url).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::FakeFetcher;

    const API_URL: &str = "https://app2-mdpr.freetls.fastly.net/img/list/12345";

    #[test]
    fn ordered_list() {
        let fetcher = FakeFetcher::new().with(
            API_URL,
            r#"{"list":[{"url":"https://img/a.jpg"},{"url":"https://img/b.jpg"}]}"#,
        );

        let res = list_images(&fetcher, &Site::MDPR, API_URL).expect("images");

        assert_eq!(res, vec!["https://img/a.jpg", "https://img/b.jpg"]);
        assert_eq!(fetcher.profiles(), vec!["api"]);
    }

    #[test]
    fn keep_api_order_and_duplicates() {
        let body = br#"{"total": 3, "list": [
            {"url": "https://img/z.jpg", "caption": "last?"},
            {"url": "https://img/a.jpg"},
            {"url": "https://img/z.jpg"}
        ]}"#;

        let res = parse_images(body).expect("images");

        assert_eq!(
            res,
            vec!["https://img/z.jpg", "https://img/a.jpg", "https://img/z.jpg"]
        );
    }

    #[test]
    fn empty_list() {
        let res = parse_images(br#"{"list": []}"#).expect("images");

        assert!(res.is_empty());
    }

    #[test]
    fn malformed_response() {
        for body in [
            r#"{"list":[{"caption":"x"}]}"#,
            r#"{"list":[{"url":"https://img/a.jpg"},{"caption":"x"}]}"#,
            r#"{"list":[{"url":42}]}"#,
            r#"{"list":["https://img/a.jpg"]}"#,
            r#"{"list":{"url":"https://img/a.jpg"}}"#,
            r#"{"images":[]}"#,
            r#"<html>Service Unavailable</html>"#,
            "",
        ] {
            let res = parse_images(body.as_bytes());

            assert!(
                matches!(res, Err(Error::MalformedPayload { .. })),
                "{body}"
            );
        }
    }

    #[test]
    fn transport_error() {
        let fetcher = FakeFetcher::new();

        let res = list_images(&fetcher, &Site::MDPR, API_URL);

        assert!(matches!(res, Err(Error::Transport { .. })));
    }
}
