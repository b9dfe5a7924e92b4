//! Simple API (`/v1/simple`): the result pods rendered as a single image.

use crate::{Params, WolframClient, error::WolframError, http::content_type};

const PATH: &str = "/v1/simple";

/// An image returned by the simple API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleImage {
    /// The request URL, including the app id.
    pub url: String,
    /// `Content-Type` of the body, usually `image/gif`.
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl WolframClient {
    /// Fetch the rendered image for `input`.
    ///
    /// Useful `params` include `background=F5F5F5`, `foreground=white`,
    /// `layout=labelbar`, `width=500` and `units=metric`.
    ///
    /// # Errors
    ///
    /// Returns [`WolframError`] if the request fails or the API returns a
    /// non-success status.
    pub async fn simple(&self, input: &str, params: &Params) -> Result<SimpleImage, WolframError> {
        let url = self.api_url(PATH, &[("appid", self.app_id.as_str()), ("i", input)], params);
        tracing::debug!(endpoint = PATH, input, extra = params.len(), "requesting simple image");

        let resp = self.get(&url).await?;
        let content_type = content_type(&resp);
        let bytes = resp.bytes().await?.to_vec();
        Ok(SimpleImage {
            url,
            content_type,
            bytes,
        })
    }
}
