//! Wox / Flow Launcher JSON-RPC plugin protocol.
//!
//! The host starts the plugin once per request with the request JSON as the
//! first argument. `query` requests are answered on stdout with a
//! `{"result": [...]}` object; callbacks such as `open_url` print nothing.

use crate::actions::{Action, ActionKind};
use crate::plugin::PluginManager;
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

#[derive(Debug, Clone, Deserialize)]
pub struct Request {
    pub method: String,
    #[serde(default)]
    pub parameters: Vec<Value>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Query(String),
    Invoke(ActionKind),
}

#[derive(Debug, Clone, Serialize)]
pub struct Response {
    pub result: Vec<RpcResult>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RpcResult {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "SubTitle")]
    pub sub_title: String,
    #[serde(rename = "IcoPath")]
    pub ico_path: String,
    #[serde(rename = "JsonRPCAction")]
    pub json_rpc_action: RpcAction,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RpcAction {
    pub method: String,
    pub parameters: Vec<String>,
    pub dont_hide_after_action: bool,
}

impl From<&Action> for RpcResult {
    fn from(action: &Action) -> Self {
        Self {
            title: action.label.clone(),
            sub_title: action.desc.clone(),
            ico_path: action.icon.clone(),
            json_rpc_action: RpcAction {
                method: action.action.method().to_string(),
                parameters: action.action.parameters(),
                dont_hide_after_action: action.keep_open,
            },
        }
    }
}

fn string_param<'a>(params: &'a [Value], method: &str) -> Result<Option<&'a str>> {
    match params.first() {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.as_str())),
        Some(other) => bail!("`{method}` expects a string parameter, got {other}"),
    }
}

impl Request {
    pub fn parse(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).context("invalid JSON-RPC request")
    }

    /// Map the method name onto a typed call.
    pub fn into_call(self) -> Result<Call> {
        match self.method.as_str() {
            "query" => {
                let query = string_param(&self.parameters, "query")?.unwrap_or_default();
                Ok(Call::Query(query.to_string()))
            }
            "open_url" => match string_param(&self.parameters, "open_url")? {
                Some(url) => Ok(Call::Invoke(ActionKind::OpenUrl(url.to_string()))),
                None => bail!("`open_url` requires a url parameter"),
            },
            "do_nothing" => Ok(Call::Invoke(ActionKind::Notice)),
            other => bail!("unknown method `{other}`"),
        }
    }
}

/// Answer a single request. Returns `None` for callbacks, which produce no
/// output.
pub fn handle(plugins: &PluginManager, request: Request) -> Result<Option<Response>> {
    debug!(method = %request.method, "handling request");
    match request.into_call()? {
        Call::Query(query) => {
            let result = plugins.search(&query).iter().map(RpcResult::from).collect();
            Ok(Some(Response { result }))
        }
        Call::Invoke(kind) => {
            if let Err(e) = crate::launcher::launch_kind(&kind) {
                warn!("failed to run `{}`: {e:#}", kind.method());
            }
            Ok(None)
        }
    }
}
