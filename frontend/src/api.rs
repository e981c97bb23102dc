//! Thin fetch wrapper over the budget planner REST API.

use gloo_net::http::{Method, RequestBuilder};
use log::{debug, error};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::{status_error_message, ApiError};
use crate::models::{
    CategoryPayload, Contribution, Credentials, GoalCreate, GoalUpdate, TransactionPayload,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }

    fn to_fetch(self) -> Method {
        match self {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            HttpMethod::Put => Method::PUT,
            HttpMethod::Delete => Method::DELETE,
        }
    }
}

/// Every call the dashboard makes, with its typed body.
#[derive(Clone, Debug, PartialEq)]
pub enum ApiCall {
    Login(Credentials),
    Register(Credentials),
    ListCategories,
    CreateCategory(CategoryPayload),
    UpdateCategory(i64, CategoryPayload),
    DeleteCategory(i64),
    ListTransactions,
    CreateTransaction(TransactionPayload),
    UpdateTransaction(i64, TransactionPayload),
    DeleteTransaction(i64),
    ListGoals,
    CreateGoal(GoalCreate),
    UpdateGoal(i64, GoalUpdate),
    DeleteGoal(i64),
    Contribute(i64, Contribution),
}

impl ApiCall {
    pub fn method(&self) -> HttpMethod {
        match self {
            ApiCall::ListCategories | ApiCall::ListTransactions | ApiCall::ListGoals => {
                HttpMethod::Get
            }
            ApiCall::Login(_)
            | ApiCall::Register(_)
            | ApiCall::CreateCategory(_)
            | ApiCall::CreateTransaction(_)
            | ApiCall::CreateGoal(_)
            | ApiCall::Contribute(..) => HttpMethod::Post,
            ApiCall::UpdateCategory(..) | ApiCall::UpdateTransaction(..) | ApiCall::UpdateGoal(..) => {
                HttpMethod::Put
            }
            ApiCall::DeleteCategory(_) | ApiCall::DeleteTransaction(_) | ApiCall::DeleteGoal(_) => {
                HttpMethod::Delete
            }
        }
    }

    pub fn path(&self) -> String {
        match self {
            ApiCall::Login(_) => "/auth/login".to_string(),
            ApiCall::Register(_) => "/auth/register".to_string(),
            ApiCall::ListCategories | ApiCall::CreateCategory(_) => "/categories/".to_string(),
            ApiCall::UpdateCategory(id, _) | ApiCall::DeleteCategory(id) => {
                format!("/categories/{id}")
            }
            ApiCall::ListTransactions | ApiCall::CreateTransaction(_) => {
                "/transactions/".to_string()
            }
            ApiCall::UpdateTransaction(id, _) | ApiCall::DeleteTransaction(id) => {
                format!("/transactions/{id}")
            }
            ApiCall::ListGoals | ApiCall::CreateGoal(_) => "/goals/".to_string(),
            ApiCall::UpdateGoal(id, _) | ApiCall::DeleteGoal(id) => format!("/goals/{id}"),
            ApiCall::Contribute(id, _) => format!("/goals/{id}/contribute"),
        }
    }

    pub fn body(&self) -> Result<Option<Value>, ApiError> {
        fn encode<T: Serialize>(body: &T) -> Result<Option<Value>, ApiError> {
            Ok(Some(serde_json::to_value(body)?))
        }

        match self {
            ApiCall::Login(credentials) | ApiCall::Register(credentials) => encode(credentials),
            ApiCall::CreateCategory(body) | ApiCall::UpdateCategory(_, body) => encode(body),
            ApiCall::CreateTransaction(body) | ApiCall::UpdateTransaction(_, body) => encode(body),
            ApiCall::CreateGoal(body) => encode(body),
            ApiCall::UpdateGoal(_, body) => encode(body),
            ApiCall::Contribute(_, body) => encode(body),
            ApiCall::ListCategories
            | ApiCall::ListTransactions
            | ApiCall::ListGoals
            | ApiCall::DeleteCategory(_)
            | ApiCall::DeleteTransaction(_)
            | ApiCall::DeleteGoal(_) => Ok(None),
        }
    }

    /// Auth calls are the only ones that make sense without a session.
    pub fn requires_session(&self) -> bool {
        !matches!(self, ApiCall::Login(_) | ApiCall::Register(_))
    }
}

/// A call plus the bearer token it should carry.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub call: ApiCall,
    pub token: Option<String>,
}

impl ApiRequest {
    pub fn new(call: ApiCall, token: Option<String>) -> Self {
        Self { call, token }
    }
}

/// Decodes a successful response body. A 204 (no body) is a failure here,
/// since callers of this expect content.
pub fn decode<T: DeserializeOwned>(body: Option<Value>) -> Result<T, ApiError> {
    let body = body.ok_or_else(|| ApiError::Serialization("empty response body".to_string()))?;
    Ok(serde_json::from_value(body)?)
}

#[derive(Clone, Debug, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    pub async fn send(&self, request: &ApiRequest) -> Result<Option<Value>, ApiError> {
        let call = &request.call;
        self.request(
            &call.path(),
            call.method(),
            call.body()?,
            request.token.as_deref(),
        )
        .await
    }

    /// Performs one request against the base URL.
    ///
    /// Resolves to `None` on 204 and to the parsed JSON body otherwise. Any
    /// failure (network, non-2xx, bad JSON) comes back as an [`ApiError`].
    pub async fn request(
        &self,
        endpoint: &str,
        method: HttpMethod,
        body: Option<Value>,
        token: Option<&str>,
    ) -> Result<Option<Value>, ApiError> {
        let url = self.url(endpoint);
        debug!("{} {}", method.as_str(), url);

        let mut builder = RequestBuilder::new(&url).method(method.to_fetch());
        for (name, value) in request_headers(token) {
            builder = builder.header(name, &value);
        }

        let request = match body {
            Some(body) => builder.json(&body)?,
            None => builder.build()?,
        };

        let response = request.send().await.map_err(|err| {
            error!("API request failed: {} {}: {}", method.as_str(), url, err);
            ApiError::from(err)
        })?;

        let status = response.status();
        let text = if status == 204 {
            String::new()
        } else if response.ok() {
            response.text().await?
        } else {
            response.text().await.unwrap_or_default()
        };

        let result = parse_response(status, &response.status_text(), &text);
        if let Err(ApiError::Status { status, message }) = &result {
            error!("API error: {} {}", status, message);
        }
        result
    }
}

/// Headers sent with every request. `Authorization` only goes out with a
/// token.
pub fn request_headers(token: Option<&str>) -> Vec<(&'static str, String)> {
    let mut headers = vec![("Content-Type", "application/json".to_string())];
    if let Some(token) = token {
        headers.push(("Authorization", format!("Bearer {token}")));
    }
    headers
}

/// Classifies a finished response: non-2xx is a [`ApiError::Status`], 204 is
/// `None`, anything else must be a JSON body.
pub fn parse_response(status: u16, status_text: &str, body: &str) -> Result<Option<Value>, ApiError> {
    if !(200..300).contains(&status) {
        return Err(ApiError::Status {
            status,
            message: status_error_message(status, status_text, body),
        });
    }
    if status == 204 {
        return Ok(None);
    }
    Ok(Some(serde_json::from_str(body)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransactionType;
    use serde_json::json;

    #[test]
    fn test_create_and_update_share_a_form_but_not_a_route() {
        let body = CategoryPayload {
            name: "Rent".to_string(),
        };
        let create = ApiCall::CreateCategory(body.clone());
        let update = ApiCall::UpdateCategory(3, body);

        assert_eq!(create.method(), HttpMethod::Post);
        assert_eq!(create.path(), "/categories/");
        assert_eq!(update.method(), HttpMethod::Put);
        assert_eq!(update.path(), "/categories/3");
    }

    #[test]
    fn test_contribute_route_and_body() {
        let call = ApiCall::Contribute(9, Contribution { amount: 25.0 });
        assert_eq!(call.method(), HttpMethod::Post);
        assert_eq!(call.path(), "/goals/9/contribute");
        assert_eq!(call.body().unwrap(), Some(json!({"amount": 25.0})));
    }

    #[test]
    fn test_list_and_delete_have_no_body() {
        assert_eq!(ApiCall::ListGoals.body().unwrap(), None);
        assert_eq!(ApiCall::DeleteTransaction(4).body().unwrap(), None);
        assert_eq!(ApiCall::DeleteTransaction(4).method(), HttpMethod::Delete);
    }

    #[test]
    fn test_transaction_body_uses_wire_names() {
        let call = ApiCall::CreateTransaction(TransactionPayload {
            amount: Some(12.5),
            kind: TransactionType::Income,
            date: "2024-03-05T14:30:00.000Z".to_string(),
            category_id: None,
            description: None,
        });
        assert_eq!(
            call.body().unwrap(),
            Some(json!({
                "amount": 12.5,
                "type": "income",
                "date": "2024-03-05T14:30:00.000Z",
                "category_id": null,
                "description": null
            }))
        );
    }

    #[test]
    fn test_auth_calls_do_not_require_session() {
        let credentials = Credentials {
            username: "sam".to_string(),
            password: "secret1".to_string(),
        };
        assert!(!ApiCall::Login(credentials.clone()).requires_session());
        assert!(!ApiCall::Register(credentials).requires_session());
        assert!(ApiCall::ListCategories.requires_session());
    }

    #[test]
    fn test_client_url_normalization() {
        let client = ApiClient::new("http://localhost:8000/");
        assert_eq!(client.url("/goals/"), "http://localhost:8000/goals/");
    }

    #[test]
    fn test_decode_rejects_empty_body() {
        let result: Result<Vec<i64>, ApiError> = decode(None);
        assert!(matches!(result, Err(ApiError::Serialization(_))));
    }

    #[test]
    fn test_parse_response_no_content() {
        assert_eq!(parse_response(204, "No Content", "").unwrap(), None);
    }

    #[test]
    fn test_parse_response_json_body() {
        let body = r#"[{"id": 1, "name": "Rent"}]"#;
        assert_eq!(
            parse_response(200, "OK", body).unwrap(),
            Some(json!([{"id": 1, "name": "Rent"}]))
        );
    }

    #[test]
    fn test_parse_response_empty_or_bad_body_is_serialization_error() {
        assert!(matches!(
            parse_response(200, "OK", ""),
            Err(ApiError::Serialization(_))
        ));
        assert!(matches!(
            parse_response(201, "Created", "<html>"),
            Err(ApiError::Serialization(_))
        ));
    }

    #[test]
    fn test_parse_response_error_status() {
        let err = parse_response(400, "Bad Request", r#"{"detail": "Username already registered"}"#)
            .unwrap_err();
        assert_eq!(
            err,
            ApiError::Status {
                status: 400,
                message: "Username already registered".to_string()
            }
        );

        let err = parse_response(500, "", "").unwrap_err();
        assert_eq!(err.to_string(), "HTTP error! status: 500");
    }

    #[test]
    fn test_request_headers_with_and_without_token() {
        assert_eq!(
            request_headers(None),
            vec![("Content-Type", "application/json".to_string())]
        );
        assert_eq!(
            request_headers(Some("abc")),
            vec![
                ("Content-Type", "application/json".to_string()),
                ("Authorization", "Bearer abc".to_string())
            ]
        );
    }
}
