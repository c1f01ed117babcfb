use crate::model::SalesSummary;
use anyhow::{Context, Result, anyhow};
use reqwest::header::COOKIE;
use reqwest::{Client, StatusCode, Url};

pub const SUMMARY_PATH: &str = "/api/sales-summary";

pub fn summary_endpoint(base_url: &Url) -> Result<Url> {
    base_url
        .join(SUMMARY_PATH)
        .with_context(|| format!("failed to build summary URL from {base_url}"))
}

/// Issues a single GET against the summary endpoint and decodes the body.
pub async fn fetch_summary(
    client: &Client,
    endpoint: &Url,
    session_cookie: Option<&str>,
) -> Result<SalesSummary> {
    let mut request = client.get(endpoint.clone());
    if let Some(cookie) = session_cookie {
        request = request.header(COOKIE, cookie);
    }

    let response = request
        .send()
        .await
        .map_err(|err| anyhow!("failed to fetch {endpoint}: {}", describe_error(&err.into())))?;

    let status = response.status();
    if status == StatusCode::UNAUTHORIZED {
        return Err(anyhow!(
            "{endpoint} rejected the request as unauthorized; pass a logged-in session with --session-cookie"
        ));
    }
    if !status.is_success() {
        return Err(anyhow!("{endpoint} answered with HTTP {status}"));
    }

    let body = response
        .bytes()
        .await
        .with_context(|| format!("failed to read response body from {endpoint}"))?;
    serde_json::from_slice(&body)
        .with_context(|| format!("failed to decode sales summary from {endpoint}"))
}

fn describe_error(error: &anyhow::Error) -> String {
    let mut pieces: Vec<String> = Vec::new();
    for (idx, cause) in error.chain().enumerate() {
        let text = cause.to_string();
        if text.is_empty() {
            continue;
        }
        if idx == 0 {
            pieces.push(text);
        } else {
            pieces.push(format!("caused by {text}"));
        }
    }

    if pieces.is_empty() {
        format!("{error:?}")
    } else {
        pieces.join(" | ")
    }
}
