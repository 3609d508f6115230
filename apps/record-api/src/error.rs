//! # Record API エラー定義
//!
//! Record API 固有のエラーと、HTTP レスポンスへの変換を定義する。
//!
//! ## ステータスコード対応表
//!
//! | エラー種別 | HTTP ステータス | 備考 |
//! |-----------|----------------|------|
//! | `MethodNotAllowed` | 405 | 拒否したメソッド名をメッセージに含める |
//! | `MissingFields` | 400 | 作成時の必須フィールド欠落（汎用メッセージ） |
//! | `MissingPathId` | 400 | パスパラメータ `id` の欠落 |
//! | `NotFound` | 404 | 読み取り時にレコードが存在しない |
//! | `Storage` / `Internal` | 500 | 内部詳細はログのみ、ボディには出さない |
//!
//! `Display`（thiserror の `#[error]`）がそのままワイヤ上のエラーメッセージに
//! なるため、メッセージは英語の固定文言とする。

use daicho_infra::InfraError;
use daicho_shared::ErrorBody;
use lambda_http::{
    Body,
    Response,
    http::{StatusCode, header},
};
use thiserror::Error;

/// Record API で発生するエラー
#[derive(Debug, Error)]
pub enum RecordApiError {
    /// サポート外の HTTP メソッド
    #[error("Method {0} not allowed")]
    MethodNotAllowed(String),

    /// 作成リクエストの必須フィールド欠落
    ///
    /// どちらが欠けたかは区別せず、汎用の複合メッセージを返す。
    #[error("Missing 'id' or 'name' in request body")]
    MissingFields,

    /// パスパラメータ `id` の欠落
    #[error("Missing record 'id' in path")]
    MissingPathId,

    /// レコードが存在しない
    #[error("Record not found")]
    NotFound,

    /// ストレージ障害
    #[error("Internal server error")]
    Storage(#[from] InfraError),

    /// レスポンス構築の失敗（到達しない想定）
    #[error("Internal server error")]
    Internal(String),
}

impl RecordApiError {
    /// 対応する HTTP ステータスコードを返す
    pub fn status(&self) -> StatusCode {
        match self {
            RecordApiError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            RecordApiError::MissingFields | RecordApiError::MissingPathId => {
                StatusCode::BAD_REQUEST
            }
            RecordApiError::NotFound => StatusCode::NOT_FOUND,
            RecordApiError::Storage(_) | RecordApiError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// エラーレスポンスに変換する
    ///
    /// 5xx は内部詳細をログに出力し、ボディには汎用メッセージのみ含める。
    /// レスポンス構築は固定値のみを使うため失敗しない。
    pub fn into_response(self) -> Response<Body> {
        match &self {
            RecordApiError::Storage(e) => {
                tracing::error!(
                    error = %e,
                    span_trace = %e.span_trace(),
                    "ストレージ操作に失敗しました"
                );
            }
            RecordApiError::Internal(msg) => {
                tracing::error!("レスポンス構築に失敗しました: {msg}");
            }
            _ => {}
        }

        let status = self.status();
        let body = serde_json::to_string(&ErrorBody::new(self.to_string()))
            .unwrap_or_else(|_| r#"{"error":"Internal server error"}"#.to_string());

        let mut response = Response::new(Body::Text(body));
        *response.status_mut() = status;
        response.headers_mut().insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );
        response
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_method_not_allowedは405で拒否メソッド名を含む() {
        let err = RecordApiError::MethodNotAllowed("PATCH".to_string());

        assert_eq!(err.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(err.to_string(), "Method PATCH not allowed");
    }

    #[test]
    fn test_missing_fieldsは400で複合メッセージを返す() {
        let err = RecordApiError::MissingFields;

        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "Missing 'id' or 'name' in request body");
    }

    #[test]
    fn test_storageは500で内部詳細を漏らさない() {
        let err = RecordApiError::Storage(InfraError::dynamo_db("secret detail"));

        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "Internal server error");
    }

    #[test]
    fn test_into_responseはjsonのerror_bodyとcontent_typeを設定する() {
        let response = RecordApiError::NotFound.into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/json"
        );
        let Body::Text(body) = response.body() else {
            panic!("テキストボディであること");
        };
        let json: serde_json::Value = serde_json::from_str(body).unwrap();
        assert_eq!(json, serde_json::json!({ "error": "Record not found" }));
    }
}
