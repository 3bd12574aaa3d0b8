use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_RANGE};
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use tracing::debug;

use crate::app_config::SupabaseConfig;
use crate::error::StoreError;

/// Handle to the hosted database's PostgREST endpoint.
///
/// Cloning is cheap; clones share the underlying connection pool.
#[derive(Clone)]
pub struct SupabaseClient {
    http: reqwest::Client,
    rest_url: String,
    auth_url: String,
}

impl SupabaseClient {
    pub fn new(config: &SupabaseConfig) -> Result<Self, StoreError> {
        let key = config.key.expose();
        let mut api_key = HeaderValue::from_str(key)
            .map_err(|_| StoreError::Config("SUPABASE_KEY is not a valid header value".to_string()))?;
        let mut bearer = HeaderValue::from_str(&format!("Bearer {}", key))
            .map_err(|_| StoreError::Config("SUPABASE_KEY is not a valid header value".to_string()))?;
        api_key.set_sensitive(true);
        bearer.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert("apikey", api_key);
        headers.insert(AUTHORIZATION, bearer);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        let base = config.url.trim_end_matches('/');
        Ok(Self {
            http,
            rest_url: format!("{}/rest/v1", base),
            auth_url: format!("{}/auth/v1", base),
        })
    }

    /// Look up the user owning an end-user access token.
    ///
    /// Returns `None` when the auth service rejects the token.
    pub async fn get_user<T: DeserializeOwned>(&self, token: &str) -> Result<Option<T>, StoreError> {
        let Ok(mut bearer) = HeaderValue::from_str(&format!("Bearer {}", token)) else {
            return Ok(None);
        };
        bearer.set_sensitive(true);

        // Replaces the service key bearer for this request only
        let response = self
            .http
            .get(format!("{}/user", self.auth_url))
            .header(AUTHORIZATION, bearer)
            .send()
            .await?;
        if matches!(response.status(), StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN) {
            debug!(status = %response.status(), "token rejected by auth service");
            return Ok(None);
        }

        let bytes = check(response).await?.bytes().await?;
        Ok(Some(serde_json::from_slice(&bytes)?))
    }

    /// Start a query against `table`.
    pub fn from(&self, table: &str) -> Query<'_> {
        Query {
            client: self,
            table: table.to_string(),
            params: Vec::new(),
        }
    }
}

/// A single PostgREST request under construction.
pub struct Query<'a> {
    client: &'a SupabaseClient,
    table: String,
    params: Vec<(String, String)>,
}

impl<'a> Query<'a> {
    pub fn select(mut self, columns: &str) -> Self {
        // PostgREST rejects whitespace inside embedded selects
        let columns: String = columns.chars().filter(|c| !c.is_whitespace()).collect();
        self.params.push(("select".to_string(), columns));
        self
    }

    pub fn eq(self, column: &str, value: impl AsRef<str>) -> Self {
        self.filter(column, "eq", value.as_ref())
    }

    pub fn gte(self, column: &str, value: impl AsRef<str>) -> Self {
        self.filter(column, "gte", value.as_ref())
    }

    pub fn lte(self, column: &str, value: impl AsRef<str>) -> Self {
        self.filter(column, "lte", value.as_ref())
    }

    pub fn order(mut self, column: &str, descending: bool) -> Self {
        let direction = if descending { "desc" } else { "asc" };
        self.params.push(("order".to_string(), format!("{}.{}", column, direction)));
        self
    }

    pub fn limit(mut self, rows: usize) -> Self {
        self.params.push(("limit".to_string(), rows.to_string()));
        self
    }

    fn filter(mut self, column: &str, op: &str, value: &str) -> Self {
        self.params.push((column.to_string(), format!("{}.{}", op, value)));
        self
    }

    fn request(&self, method: Method) -> RequestBuilder {
        debug!(table = %self.table, %method, params = ?self.params, "backend query");
        self.client
            .http
            .request(method, format!("{}/{}", self.client.rest_url, self.table))
            .query(&self.params)
    }

    pub async fn fetch<T: DeserializeOwned>(self) -> Result<Vec<T>, StoreError> {
        let response = send(self.request(Method::GET)).await?;
        decode(response).await
    }

    /// Exact row count for the current filters.
    pub async fn count(self) -> Result<u64, StoreError> {
        let request = self
            .limit(1)
            .request(Method::GET)
            .header("Prefer", "count=exact");
        let response = send(request).await?;

        response
            .headers()
            .get(CONTENT_RANGE)
            .and_then(|v| v.to_str().ok())
            .and_then(parse_content_range)
            .ok_or(StoreError::MissingCount)
    }

    pub async fn insert<B, T>(self, body: &B) -> Result<Vec<T>, StoreError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self
            .request(Method::POST)
            .header("Prefer", "return=representation")
            .json(body);
        decode(send(request).await?).await
    }

    pub async fn update<B, T>(self, body: &B) -> Result<Vec<T>, StoreError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self
            .request(Method::PATCH)
            .header("Prefer", "return=representation")
            .json(body);
        decode(send(request).await?).await
    }

    pub async fn delete<T: DeserializeOwned>(self) -> Result<Vec<T>, StoreError> {
        let request = self
            .request(Method::DELETE)
            .header("Prefer", "return=representation");
        decode(send(request).await?).await
    }
}

async fn send(request: RequestBuilder) -> Result<Response, StoreError> {
    check(request.send().await?).await
}

async fn check(response: Response) -> Result<Response, StoreError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(StoreError::Api {
        status: status.as_u16(),
        message: error_message(&body),
    })
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<Vec<T>, StoreError> {
    let bytes = response.bytes().await?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// PostgREST errors are `{"message": ..., "code": ...}`; anything else is passed through.
fn error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(str::to_string))
        .unwrap_or_else(|| body.to_string())
}

/// Total from a `Content-Range` header such as `0-0/42` or `*/0`.
fn parse_content_range(value: &str) -> Option<u64> {
    value.rsplit_once('/')?.1.trim().parse().ok()
}
