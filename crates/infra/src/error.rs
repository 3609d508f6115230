//! # インフラ層エラー定義
//!
//! DynamoDB との通信で発生するエラーを表現する。
//!
//! ## 設計方針
//!
//! - **ログ可能性**: Debug によりログ出力時に詳細情報を表示
//! - **SpanTrace 自動捕捉**: `From` 実装や convenience constructor で
//!   エラー生成時の呼び出し経路を自動記録する
//! - **情報漏洩防止**: API 層はこのエラーを 500 の汎用メッセージに変換し、
//!   内部詳細を呼び出し元に返さない
//!
//! ## 構造
//!
//! `std::io::Error` と同じ struct + enum パターンを採用:
//! - [`InfraError`]: エラー種別（[`InfraErrorKind`]）と [`SpanTrace`] を保持するラッパー
//! - [`InfraErrorKind`]: エラーの具体的な種別（DynamoDb, Serialization 等）

use std::fmt;

use thiserror::Error;
use tracing_error::SpanTrace;

/// インフラ層で発生するエラー
///
/// エラー種別（[`InfraErrorKind`]）と [`SpanTrace`]（呼び出し経路）を保持する。
/// `From<serde_json::Error>` の変換や convenience constructor でエラーを
/// 生成すると、その時点のスパン情報が自動的にキャプチャされる。
pub struct InfraError {
    kind:       InfraErrorKind,
    span_trace: SpanTrace,
}

/// インフラ層エラーの種別
///
/// API 層はこのエラー種別によらず、汎用の 500 レスポンスに変換する。
#[derive(Debug, Error)]
pub enum InfraErrorKind {
    /// DynamoDB エラー
    ///
    /// DynamoDB への操作で発生するエラー。
    /// AWS SDK のエラー型はジェネリクスが深く `#[from]` が困難なため、
    /// 手動で String にマップする。
    #[error("DynamoDB エラー: {0}")]
    DynamoDb(String),

    /// シリアライズ/デシリアライズエラー
    ///
    /// JSON の変換に失敗した場合に使用する。
    #[error("シリアライズエラー: {0}")]
    Serialization(#[source] serde_json::Error),

    /// 格納データ不整合
    ///
    /// DynamoDB から取得したアイテムが期待する属性を欠く場合に使用する。
    /// このシステムのライターは完全なレコードのみ書き込むため、
    /// 発生するのは外部からの直接書き込み等の異常系のみ。
    #[error("格納データが不正です: {0}")]
    CorruptItem(String),
}

// ===== InfraError のメソッド =====

impl InfraError {
    /// エラー種別を取得する
    pub fn kind(&self) -> &InfraErrorKind {
        &self.kind
    }

    /// SpanTrace を取得する
    pub fn span_trace(&self) -> &SpanTrace {
        &self.span_trace
    }

    // ===== Convenience constructors =====

    /// DynamoDB エラーを生成する
    pub fn dynamo_db(msg: impl Into<String>) -> Self {
        Self {
            kind:       InfraErrorKind::DynamoDb(msg.into()),
            span_trace: SpanTrace::capture(),
        }
    }

    /// 格納データ不整合エラーを生成する
    pub fn corrupt_item(msg: impl Into<String>) -> Self {
        Self {
            kind:       InfraErrorKind::CorruptItem(msg.into()),
            span_trace: SpanTrace::capture(),
        }
    }
}

// ===== トレイト実装 =====

impl fmt::Display for InfraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)
    }
}

impl fmt::Debug for InfraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InfraError")
            .field("kind", &self.kind)
            .field("span_trace", &self.span_trace)
            .finish()
    }
}

impl std::error::Error for InfraError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.kind.source()
    }
}

// ===== From 実装（SpanTrace 自動キャプチャ） =====

impl From<serde_json::Error> for InfraError {
    fn from(source: serde_json::Error) -> Self {
        Self {
            kind:       InfraErrorKind::Serialization(source),
            span_trace: SpanTrace::capture(),
        }
    }
}

#[cfg(test)]
mod tests {
    use tracing_subscriber::layer::SubscriberExt as _;

    use super::*;

    /// テスト用に ErrorLayer 付き subscriber を設定する
    fn with_error_layer(f: impl FnOnce()) {
        let subscriber = tracing_subscriber::registry().with(tracing_error::ErrorLayer::default());
        let _guard = tracing::subscriber::set_default(subscriber);
        f();
    }

    #[test]
    fn test_dynamo_dbでspan_traceがキャプチャされる() {
        with_error_layer(|| {
            let span = tracing::info_span!("test_store", record_id = "u1");
            let _enter = span.enter();

            let err = InfraError::dynamo_db("接続失敗");

            assert!(matches!(err.kind(), InfraErrorKind::DynamoDb(msg) if msg == "接続失敗"));
            let trace_str = format!("{}", err.span_trace());
            assert!(
                trace_str.contains("test_store"),
                "SpanTrace がスパン名を含むこと: {trace_str}",
            );
        });
    }

    #[test]
    fn test_from_serde_json_errorでserialization種別になる() {
        with_error_layer(|| {
            let json_err = serde_json::from_str::<String>("invalid").unwrap_err();
            let err: InfraError = json_err.into();

            assert!(matches!(err.kind(), InfraErrorKind::Serialization(_)));
        });
    }

    #[test]
    fn test_corrupt_itemでメッセージを保持する() {
        let err = InfraError::corrupt_item("name 属性がありません");
        assert!(matches!(
            err.kind(),
            InfraErrorKind::CorruptItem(msg) if msg == "name 属性がありません"
        ));
    }

    #[test]
    fn test_displayがkindのメッセージを出力する() {
        let err = InfraError::dynamo_db("put_item に失敗");
        assert_eq!(format!("{err}"), "DynamoDB エラー: put_item に失敗");
    }

    #[test]
    fn test_sourceがkindに委譲する() {
        use std::error::Error;

        let json_err = serde_json::from_str::<String>("invalid").unwrap_err();
        let err: InfraError = json_err.into();

        // Serialization variant は serde_json::Error を source として持つ
        assert!(err.source().is_some());
    }
}
