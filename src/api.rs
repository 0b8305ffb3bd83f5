//! Blocking HTTP wrapper shared by the card-database and deck-service queries.
//!
//! Owns the single `reqwest` client and the service base URLs, and turns
//! non-success statuses into [`DeckError::Upstream`].

use reqwest::blocking::{Client, RequestBuilder};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, warn};

use crate::config::{self, Endpoints};
use crate::error::{DeckError, Result};

pub struct ApiClient {
    http: Client,
    endpoints: Endpoints,
}

impl ApiClient {
    /// Build the HTTP client. No request is made here.
    pub fn new(endpoints: Endpoints, timeout: Duration) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = Client::builder()
            .timeout(timeout)
            .user_agent(config::USER_AGENT)
            .default_headers(headers)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()?;

        Ok(Self { http, endpoints })
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// GET a JSON document.
    pub(crate) fn get_json<T: DeserializeOwned>(&self, service: &'static str, url: &str) -> Result<T> {
        self.get_json_opt(service, self.get(url))?
            .ok_or_else(|| DeckError::NotFound(format!("{} has no resource at {}", service, url)))
    }

    /// Send a GET request, mapping `404 Not Found` to `None`.
    pub(crate) fn get_json_opt<T: DeserializeOwned>(
        &self,
        service: &'static str,
        request: RequestBuilder,
    ) -> Result<Option<T>> {
        let resp = request.send()?;
        if resp.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let resp = check_status(service, resp)?;
        Ok(Some(resp.json()?))
    }

    /// POST a JSON body and decode the JSON response.
    pub(crate) fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        service: &'static str,
        url: &str,
        body: &B,
    ) -> Result<T> {
        debug!(service, url, "POST");
        let resp = self.http.post(url).json(body).send()?;
        let resp = check_status(service, resp)?;
        Ok(resp.json()?)
    }

    pub(crate) fn get(&self, url: &str) -> RequestBuilder {
        debug!(url, "GET");
        self.http.get(url)
    }
}

fn check_status(
    service: &'static str,
    resp: reqwest::blocking::Response,
) -> Result<reqwest::blocking::Response> {
    let status = resp.status();
    if status.is_success() {
        Ok(resp)
    } else {
        warn!(service, status = status.as_u16(), url = %resp.url(), "upstream request failed");
        Err(DeckError::Upstream {
            service,
            status: status.as_u16(),
        })
    }
}
