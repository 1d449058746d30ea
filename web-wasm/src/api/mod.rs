//! バックエンドREST APIクライアント
//!
//! ブラウザfetchに対する薄いラッパー。全エンドポイントは同一オリジンの
//! /api 配下にある前提。タイムアウト・リトライはfetch側の既定に委ねる。

pub mod appointments;
pub mod care_tasks;
pub mod equipment;
pub mod prescriptions;
pub mod reports;
pub mod users;

use serde::Serialize;
use serde_json::Value;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use mediboard_common::{Error, Result};

const API_BASE: &str = "/api";

fn js_error_text(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

/// fetchを1回発行してJSONボディを返す
///
/// - fetch自体の失敗（オフライン等）→ Network
/// - 非2xx → ボディの {message} を添えて Request
/// - 2xxだがJSONでない → Decode
async fn request_json(method: &str, path: &str, body: Option<Value>) -> Result<Value> {
    let url = format!("{}{}", API_BASE, path);

    let opts = RequestInit::new();
    opts.set_method(method);
    opts.set_mode(RequestMode::SameOrigin);
    if let Some(payload) = &body {
        let text = serde_json::to_string(payload)?;
        opts.set_body(&JsValue::from_str(&text));
    }

    let request = Request::new_with_str_and_init(&url, &opts)
        .map_err(|e| Error::Network(js_error_text(&e)))?;
    if body.is_some() {
        request
            .headers()
            .set("Content-Type", "application/json")
            .map_err(|e| Error::Network(js_error_text(&e)))?;
    }

    let window =
        web_sys::window().ok_or_else(|| Error::Network("windowがありません".to_string()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| Error::Network(js_error_text(&e)))?;
    let resp: Response = resp_value
        .dyn_into()
        .map_err(|_| Error::Network("Responseに変換できません".to_string()))?;

    if !resp.ok() {
        let status = resp.status();
        let message = error_message_from_body(&resp).await;
        return Err(Error::Request { status, message });
    }

    if resp.status() == 204 {
        return Ok(Value::Null);
    }

    let promise = resp.json().map_err(|e| Error::Decode(js_error_text(&e)))?;
    let json = JsFuture::from(promise)
        .await
        .map_err(|e| Error::Decode(js_error_text(&e)))?;
    serde_wasm_bindgen::from_value(json).map_err(|e| Error::Decode(e.to_string()))
}

/// エラーレスポンスのボディから {message} を拾う（なければ空文字）
async fn error_message_from_body(resp: &Response) -> String {
    let Ok(promise) = resp.json() else {
        return String::new();
    };
    let Ok(json) = JsFuture::from(promise).await else {
        return String::new();
    };
    let Ok(value) = serde_wasm_bindgen::from_value::<Value>(json) else {
        return String::new();
    };
    value
        .get("message")
        .or_else(|| value.get("error"))
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

pub(crate) async fn get_json(path: &str) -> Result<Value> {
    request_json("GET", path, None).await
}

pub(crate) async fn post_json<B: Serialize>(path: &str, body: &B) -> Result<Value> {
    request_json("POST", path, Some(serde_json::to_value(body)?)).await
}

pub(crate) async fn put_json<B: Serialize>(path: &str, body: &B) -> Result<Value> {
    request_json("PUT", path, Some(serde_json::to_value(body)?)).await
}

pub(crate) async fn patch_json<B: Serialize>(path: &str, body: &B) -> Result<Value> {
    request_json("PATCH", path, Some(serde_json::to_value(body)?)).await
}

pub(crate) async fn delete_json(path: &str) -> Result<Value> {
    request_json("DELETE", path, None).await
}
