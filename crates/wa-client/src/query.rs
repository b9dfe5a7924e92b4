//! Full results API (`/v2/query`).

use crate::{Params, QueryResult, ResponseFormat, WolframClient, error::WolframError};

const PATH: &str = "/v2/query";

impl WolframClient {
    /// Run a full-results query and decode the JSON response.
    ///
    /// `params` are appended after `input`, `appid` and `output`, e.g.
    /// `format=image`, `includepodid=Result`, `assumption=...`.
    ///
    /// # Errors
    ///
    /// Returns [`WolframError`] if the request fails, the API returns a
    /// non-success status, or the body cannot be decoded.
    pub async fn query(&self, input: &str, params: &Params) -> Result<QueryResult, WolframError> {
        self.query_as(input, ResponseFormat::Json, params).await
    }

    /// Run a full-results query in the given response format.
    ///
    /// # Errors
    ///
    /// Returns [`WolframError`] if the request fails, the API returns a
    /// non-success status, or the body cannot be decoded.
    pub async fn query_as(
        &self,
        input: &str,
        format: ResponseFormat,
        params: &Params,
    ) -> Result<QueryResult, WolframError> {
        let url = self.api_url(
            PATH,
            &[
                ("input", input),
                ("appid", self.app_id.as_str()),
                ("output", format.as_param()),
            ],
            params,
        );
        tracing::debug!(endpoint = PATH, input, %format, extra = params.len(), "sending query");

        let body = self.get(&url).await?.bytes().await?;
        let mut result = format.decode(&body)?;
        result.query = input.to_owned();

        tracing::debug!(
            pods = result.pods.len(),
            success = %result.success,
            timing = result.timing,
            "decoded query result"
        );
        Ok(result)
    }
}
