//! Contact form transport over the Fetch API.

use brochure_core::{FormPayload, SiteError, Transport, TransportResponse};
use gloo_net::http::Request;
use web_sys::FormData;

use crate::dom::dom_error;

/// POSTs form fields as multipart data and reports the HTTP status.
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchTransport;

impl Transport for FetchTransport {
    async fn post(
        &self,
        endpoint: &str,
        payload: &FormPayload,
    ) -> brochure_core::Result<TransportResponse> {
        let body = FormData::new().map_err(dom_error)?;
        for (name, value) in payload.iter() {
            body.append_with_str(name, value).map_err(dom_error)?;
        }

        let response = Request::post(endpoint)
            .header("Accept", "application/json")
            .body(body)
            .map_err(|e| SiteError::transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| SiteError::transport(e.to_string()))?;

        Ok(TransportResponse::new(response.status()))
    }
}
