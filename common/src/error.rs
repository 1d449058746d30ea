//! エラー型定義

use thiserror::Error;

/// 共通エラー型
///
/// - Network: fetch自体が失敗（オフライン等）
/// - Request: サーバーが非2xxを返した
/// - Validation: 送信前の必須項目チェックに失敗
/// - Decode: レスポンスの形が解釈できない
#[derive(Error, Debug)]
pub enum Error {
    #[error("network error: {0}")]
    Network(String),

    #[error("request failed ({status}): {message}")]
    Request { status: u16, message: String },

    #[error("validation error: {0}")]
    Validation(String),

    #[error("decode error: {0}")]
    Decode(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// トースト表示用メッセージ
    ///
    /// サーバーがメッセージを返していればそれを優先し、
    /// なければ汎用メッセージにフォールバックする
    pub fn user_message(&self) -> String {
        match self {
            Error::Network(_) => "通信に失敗しました。接続を確認してください".to_string(),
            Error::Request { message, .. } if !message.is_empty() => message.clone(),
            Error::Request { .. } => "サーバーエラーが発生しました".to_string(),
            Error::Validation(msg) => msg.clone(),
            Error::Decode(_) => "サーバー応答を解釈できませんでした".to_string(),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Decode(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_network() {
        let error = Error::Network("Failed to fetch".to_string());
        let display = format!("{}", error);
        assert!(display.contains("network error"));
        assert!(display.contains("Failed to fetch"));
    }

    #[test]
    fn test_error_display_request() {
        let error = Error::Request {
            status: 404,
            message: "Appointment not found".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("404"));
        assert!(display.contains("Appointment not found"));
    }

    #[test]
    fn test_error_from_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: Error = json_error.into();
        assert!(matches!(error, Error::Decode(_)));
    }

    #[test]
    fn test_user_message_request_with_server_message() {
        let error = Error::Request {
            status: 400,
            message: "この時間帯は予約済みです".to_string(),
        };
        assert_eq!(error.user_message(), "この時間帯は予約済みです");
    }

    #[test]
    fn test_user_message_request_fallback() {
        // サーバーメッセージなしの場合は汎用メッセージ
        let error = Error::Request {
            status: 500,
            message: String::new(),
        };
        assert_eq!(error.user_message(), "サーバーエラーが発生しました");
    }

    #[test]
    fn test_user_message_network() {
        let error = Error::Network("timeout".to_string());
        assert!(error.user_message().contains("通信に失敗"));
    }

    #[test]
    fn test_user_message_validation() {
        let error = Error::Validation("必須項目が未入力です: 患者".to_string());
        assert_eq!(error.user_message(), "必須項目が未入力です: 患者");
    }
}
