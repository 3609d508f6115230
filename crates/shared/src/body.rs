//! # レスポンスボディ共通型
//!
//! 全エンドポイントで使用される JSON ボディの共通形式を提供する。
//!
//! - 成功の確認応答とデバッグ応答: `{ "message": "..." }`（[`MessageBody`]）
//! - 全ての 4xx / 5xx: `{ "error": "..." }`（[`ErrorBody`]）

use serde::{Deserialize, Serialize};

/// 確認メッセージのボディ
///
/// ## 使用例
///
/// ```
/// use daicho_shared::MessageBody;
///
/// let body = MessageBody::new("Debug endpoint OK");
/// assert_eq!(body.message, "Debug endpoint OK");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageBody {
    pub message: String,
}

impl MessageBody {
    /// 新しい `MessageBody` を作成する
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// エラーレスポンスのボディ
///
/// クライアントに返す人間可読なエラーメッセージを 1 つだけ持つ。
/// 5xx の場合、内部エラーの詳細はログにのみ出力し、このボディには含めない。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    /// 新しい `ErrorBody` を作成する
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_message_bodyのserializeで正しいjson形状にする() {
        let body = MessageBody::new("Record created");
        let json = serde_json::to_value(&body).unwrap();

        assert_eq!(json, serde_json::json!({ "message": "Record created" }));
    }

    #[test]
    fn test_error_bodyのserializeで正しいjson形状にする() {
        let body = ErrorBody::new("Record not found");
        let json = serde_json::to_value(&body).unwrap();

        assert_eq!(json, serde_json::json!({ "error": "Record not found" }));
    }

    #[test]
    fn test_error_bodyのdeserializeでjsonからオブジェクトに変換する() {
        let body: ErrorBody = serde_json::from_str(r#"{"error": "boom"}"#).unwrap();

        assert_eq!(body, ErrorBody::new("boom"));
    }
}
