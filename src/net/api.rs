//! REST helpers for the auth and summary backends.
//!
//! Client-side (`csr`): real HTTP calls via `gloo-net`.
//! Other builds: stubs returning an error, since the endpoints only make
//! sense in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, String>` with a message ready to show next to the
//! form, so a failed request degrades to a visible notice instead of a panic.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::{Deserialize, Serialize};

use crate::config::AppConfig;
use crate::routes::location::encode_query_value;

pub const LOGIN_ENDPOINT: &str = "/api/auth/login";
pub const SEND_CODE_ENDPOINT: &str = "/api/auth/send-code";
pub const REGISTER_ENDPOINT: &str = "/api/auth/register";
pub const RESET_PASSWORD_ENDPOINT: &str = "/api/auth/reset-password";
pub const SUMMARY_START_ENDPOINT: &str = "/api/summary/start";
pub const SUMMARY_STATUS_ENDPOINT: &str = "/api/summary/status";
pub const SUMMARY_CANCEL_ENDPOINT: &str = "/api/summary/cancel";

/// Header the backend reads the credential from.
pub const TOKEN_HEADER: &str = "token";

#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

#[derive(Debug, Serialize)]
pub struct SendCodeRequest<'a> {
    pub email: &'a str,
}

#[derive(Debug, Serialize)]
pub struct RegisterRequest<'a> {
    pub username: &'a str,
    pub email: &'a str,
    pub password: &'a str,
    pub code: &'a str,
}

#[derive(Debug, Serialize)]
pub struct ResetPasswordRequest<'a> {
    pub email: &'a str,
    pub code: &'a str,
    pub new_password: &'a str,
}

/// `{ "msg": ... }` acknowledgement.
#[derive(Debug, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub msg: String,
}

#[derive(Debug, Deserialize)]
pub struct StartResponse {
    pub task_id: String,
}

/// Snapshot of a summary task from `GET /api/summary/status`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct TaskStatus {
    pub task_id: String,
    /// `queued`, `running`, `done`, `error` or `cancelled`.
    #[serde(default)]
    pub status: String,
    pub progress: Option<u8>,
    pub stage: Option<String>,
    pub error: Option<String>,
    pub transcript: Option<String>,
    pub summary: Option<String>,
    #[serde(default)]
    pub cancelled: bool,
}

impl TaskStatus {
    /// State right after `start` returned, before the first poll.
    pub fn queued(task_id: impl Into<String>) -> Self {
        Self { task_id: task_id.into(), status: "queued".to_owned(), progress: Some(0), ..Self::default() }
    }

    /// No further status changes will come.
    pub fn is_finished(&self) -> bool {
        matches!(self.status.as_str(), "done" | "error" | "cancelled")
    }

    /// One-line description for the page.
    pub fn describe(&self) -> String {
        match self.status.as_str() {
            "queued" if self.cancelled => "Cancelling...".to_owned(),
            "queued" => "Queued.".to_owned(),
            "running" if self.cancelled => "Cancelling after the current step...".to_owned(),
            "running" => {
                let stage = self.stage.as_deref().unwrap_or("working");
                format!("Running: {stage} ({}%)", self.progress.unwrap_or(0))
            }
            "done" => "Done.".to_owned(),
            "error" => format!("Failed: {}", self.error.as_deref().unwrap_or("unknown error")),
            "cancelled" => "Cancelled.".to_owned(),
            other => other.to_owned(),
        }
    }
}

/// `endpoint?task_id=<id>`.
pub fn task_url(endpoint: &str, task_id: &str) -> String {
    format!("{endpoint}?task_id={}", encode_query_value(task_id))
}

#[cfg(any(test, feature = "csr"))]
fn failed_message(action: &str, status: u16, body: &str) -> String {
    match error_detail(body) {
        Some(detail) => format!("{action} failed ({status}): {detail}"),
        None => format!("{action} failed: {status}"),
    }
}

/// `detail` field of a backend error body, when it is a plain string.
#[cfg(any(test, feature = "csr"))]
fn error_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value.get("detail")?.as_str().map(str::to_owned)
}

#[cfg(feature = "csr")]
fn with_token(builder: gloo_net::http::RequestBuilder, token: Option<&str>) -> gloo_net::http::RequestBuilder {
    match token {
        Some(token) => builder.header(TOKEN_HEADER, token),
        None => builder,
    }
}

#[cfg(feature = "csr")]
async fn read_json<T: serde::de::DeserializeOwned>(resp: gloo_net::http::Response, action: &str) -> Result<T, String> {
    if !resp.ok() {
        let status = resp.status();
        let text = resp.text().await.unwrap_or_default();
        return Err(failed_message(action, status, &text));
    }
    resp.json::<T>().await.map_err(|e| e.to_string())
}

#[cfg(feature = "csr")]
async fn post_json<B, T>(config: &AppConfig, endpoint: &str, body: &B, action: &str) -> Result<T, String>
where
    B: Serialize,
    T: serde::de::DeserializeOwned,
{
    let resp = gloo_net::http::Request::post(&config.api_url(endpoint))
        .json(body)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    read_json(resp, action).await
}

/// Exchange email + password for a token at `POST /api/auth/login`.
pub async fn login(config: &AppConfig, email: &str, password: &str) -> Result<String, String> {
    #[cfg(feature = "csr")]
    {
        let body = LoginRequest { email, password };
        let parsed: LoginResponse = post_json(config, LOGIN_ENDPOINT, &body, "login").await?;
        Ok(parsed.token)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (config, email, password);
        Err("login is only available in the browser".to_owned())
    }
}

/// Mail a verification code, used by both registration and password reset.
pub async fn send_code(config: &AppConfig, email: &str) -> Result<String, String> {
    #[cfg(feature = "csr")]
    {
        let parsed: MessageResponse = post_json(config, SEND_CODE_ENDPOINT, &SendCodeRequest { email }, "send code").await?;
        Ok(parsed.msg)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (config, email);
        Err("sending codes is only available in the browser".to_owned())
    }
}

pub async fn register(config: &AppConfig, request: &RegisterRequest<'_>) -> Result<String, String> {
    #[cfg(feature = "csr")]
    {
        let parsed: MessageResponse = post_json(config, REGISTER_ENDPOINT, request, "register").await?;
        Ok(parsed.msg)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (config, request);
        Err("registration is only available in the browser".to_owned())
    }
}

pub async fn reset_password(config: &AppConfig, request: &ResetPasswordRequest<'_>) -> Result<String, String> {
    #[cfg(feature = "csr")]
    {
        let parsed: MessageResponse = post_json(config, RESET_PASSWORD_ENDPOINT, request, "password reset").await?;
        Ok(parsed.msg)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (config, request);
        Err("password reset is only available in the browser".to_owned())
    }
}

/// Upload a media file as multipart field `file` and return the new task id.
#[cfg(feature = "csr")]
pub async fn start_summary(config: &AppConfig, token: Option<&str>, file: &web_sys::File) -> Result<String, String> {
    let form = web_sys::FormData::new().map_err(|e| format!("{e:?}"))?;
    form.append_with_blob_and_filename("file", file, &file.name()).map_err(|e| format!("{e:?}"))?;
    let resp = with_token(gloo_net::http::Request::post(&config.api_url(SUMMARY_START_ENDPOINT)), token)
        .body(form)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    let started: StartResponse = read_json(resp, "upload").await?;
    Ok(started.task_id)
}

pub async fn fetch_summary_status(config: &AppConfig, token: Option<&str>, task_id: &str) -> Result<TaskStatus, String> {
    #[cfg(feature = "csr")]
    {
        let url = config.api_url(&task_url(SUMMARY_STATUS_ENDPOINT, task_id));
        let resp = with_token(gloo_net::http::Request::get(&url), token).send().await.map_err(|e| e.to_string())?;
        read_json(resp, "status").await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (config, token, task_id);
        Err("summaries are only available in the browser".to_owned())
    }
}

/// Ask the backend to stop a task. Cancellation takes effect between steps,
/// so keep polling until the status reports it.
pub async fn cancel_summary(config: &AppConfig, token: Option<&str>, task_id: &str) -> Result<String, String> {
    #[cfg(feature = "csr")]
    {
        let url = config.api_url(&task_url(SUMMARY_CANCEL_ENDPOINT, task_id));
        let resp = with_token(gloo_net::http::Request::post(&url), token).send().await.map_err(|e| e.to_string())?;
        let parsed: MessageResponse = read_json(resp, "cancel").await?;
        Ok(parsed.msg)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (config, token, task_id);
        Err("summaries are only available in the browser".to_owned())
    }
}
