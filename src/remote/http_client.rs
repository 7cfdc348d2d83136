use reqwest::blocking::Response;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};

use super::*;

impl AscClient {
    /// Sends an authenticated JSON request and hands back the raw response.
    ///
    /// No retries and no status checks; callers decide what a failure means.
    pub fn api_request<T: serde::Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&T>,
        query: &[(&str, &str)],
    ) -> Result<Response> {
        let url = self.url(path);
        tracing::debug!(%method, %url, "api request");

        let mut req = self
            .client
            .request(method.clone(), &url)
            .header(AUTHORIZATION, self.auth())
            .header(CONTENT_TYPE, "application/json");
        if !query.is_empty() {
            req = req.query(query);
        }
        if let Some(body) = body {
            req = req.json(body);
        }

        let resp = req.send().with_context(|| format!("{} {}", method, url))?;
        tracing::debug!(status = %resp.status(), %url, "api response");
        Ok(resp)
    }

    pub(super) fn get(&self, path: &str) -> Result<Response> {
        self.api_request::<()>(Method::GET, path, None, &[])
    }

    pub(super) fn auth(&self) -> String {
        format!("Bearer {}", self.token)
    }

    pub(super) fn url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

/// Pretty-printed JSON error body, or the raw text when it is not JSON.
pub(super) fn error_body(resp: Response) -> String {
    let text = resp.text().unwrap_or_default();
    match serde_json::from_str::<serde_json::Value>(&text) {
        Ok(v) => serde_json::to_string_pretty(&v).unwrap_or(text),
        Err(_) => text,
    }
}
