//! Request orchestration for the details page.
//!
//! One URL is built per call, one request is issued, and the body is
//! handed to [`crate::extractors::extract_app`]. Transport failures of
//! any shape surface as [`Error::Transport`]; there are no retries.
//!
//! Both an async ([`fetch_app_details`]) and a blocking
//! ([`fetch_app_details_blocking`]) entry point are provided, sharing
//! the same URL construction and extraction path.

use std::time::Duration;

use scraper::Html;
use url::Url;

use crate::error::Error;
use crate::extractors;
use crate::model::AppRecord;

const BASE_URL: &str = "https://play.google.com/store/apps/details";
const DEFAULT_LANG: &str = "en";
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Resolve the details-page URL for an app id, with an optional
/// language override (`hl` parameter, default `"en"`).
pub fn build_details_url(app_id: &str, lang: Option<&str>) -> Result<Url, Error> {
    let lang = lang.unwrap_or(DEFAULT_LANG);
    Url::parse_with_params(BASE_URL, &[("id", app_id), ("hl", lang)])
        .map_err(|e| Error::Transport {
            url: BASE_URL.to_string(),
            message: e.to_string(),
        })
}

/// Fetch and extract one app's details page.
pub async fn fetch_app_details(app_id: &str, lang: Option<&str>) -> Result<AppRecord, Error> {
    let url = build_details_url(app_id, lang)?;
    tracing::debug!(%url, "fetching details page");

    let client = reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(REQUEST_TIMEOUT)
        .build()
        .map_err(|e| transport(&url, e))?;
    let response = client
        .get(url.clone())
        .send()
        .await
        .map_err(|e| transport(&url, e))?;
    let status = response.status();
    if !status.is_success() {
        return Err(transport(&url, format!("HTTP {status}")));
    }
    let body = response.text().await.map_err(|e| transport(&url, e))?;

    tracing::debug!(%url, bytes = body.len(), "fetched details page");
    extract_record(&body, app_id, &url)
}

/// Blocking variant of [`fetch_app_details`] for callers without an
/// async runtime.
pub fn fetch_app_details_blocking(
    app_id: &str,
    lang: Option<&str>,
) -> Result<AppRecord, Error> {
    let url = build_details_url(app_id, lang)?;
    tracing::debug!(%url, "fetching details page");

    let agent = ureq::Agent::new_with_config(
        ureq::Agent::config_builder()
            .timeout_global(Some(REQUEST_TIMEOUT))
            .user_agent(USER_AGENT)
            .http_status_as_error(false)
            .build(),
    );
    let body = match agent.get(url.as_str()).call() {
        Ok(response) if response.status().is_success() => response
            .into_body()
            .read_to_string()
            .map_err(|e| transport(&url, e))?,
        Ok(response) => {
            return Err(transport(&url, format!("HTTP {}", response.status())));
        }
        Err(e) => return Err(transport(&url, e)),
    };

    tracing::debug!(%url, bytes = body.len(), "fetched details page");
    extract_record(&body, app_id, &url)
}

fn extract_record(body: &str, app_id: &str, url: &Url) -> Result<AppRecord, Error> {
    let doc = Html::parse_document(body);
    extractors::extract_app(&doc, app_id, url.as_str())
}

fn transport(url: &Url, err: impl std::fmt::Display) -> Error {
    Error::Transport {
        url: url.to_string(),
        message: err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_canonical_details_url() {
        let url = build_details_url("com.foo", None).unwrap();
        assert_eq!(
            url.as_str(),
            "https://play.google.com/store/apps/details?id=com.foo&hl=en"
        );
    }

    #[test]
    fn lang_overrides_the_default() {
        let url = build_details_url("com.foo", Some("de")).unwrap();
        assert_eq!(
            url.as_str(),
            "https://play.google.com/store/apps/details?id=com.foo&hl=de"
        );
    }

    // Network tests are ignored by default; run with --ignored.

    #[test]
    #[ignore]
    fn fetches_a_live_page_blocking() {
        let app = fetch_app_details_blocking("com.google.android.apps.translate", None).unwrap();
        assert_eq!(app.app_id, "com.google.android.apps.translate");
        assert!(app.url.contains("id=com.google.android.apps.translate"));
    }

    #[tokio::test]
    #[ignore]
    async fn fetches_a_live_page() {
        let app = fetch_app_details("com.google.android.apps.translate", None)
            .await
            .unwrap();
        assert_eq!(app.app_id, "com.google.android.apps.translate");
    }
}
