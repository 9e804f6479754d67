//! API Client

use concierge_core::{PendingTurn, Reply};
use serde::Deserialize;

/// Body of a successful `/api/chat` response
#[derive(Clone, Debug, Deserialize)]
struct ChatReply {
    message: String,
    #[serde(default)]
    fallback: bool,
}

fn origin() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_else(|| "http://localhost:3000".into())
}

/// Send one chat turn (prior transcript + new input) to the backend
pub async fn send_chat(turn: &PendingTurn) -> Result<Reply, String> {
    let client = reqwest::Client::new();

    let body = serde_json::json!({
        "history": turn.history(),
        "message": turn.input(),
    });

    let response = client
        .post(format!("{}/api/chat", origin()))
        .json(&body)
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if response.status().is_success() {
        let data: ChatReply = response.json().await.map_err(|e| e.to_string())?;
        if data.fallback {
            Ok(Reply::Fallback)
        } else {
            Ok(Reply::from_text(data.message))
        }
    } else {
        let data: serde_json::Value = response.json().await.unwrap_or_default();
        Err(data["error"].as_str().unwrap_or("Request failed").to_string())
    }
}
