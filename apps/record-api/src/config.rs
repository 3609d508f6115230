//! # Record API 設定
//!
//! 環境変数から Record API Lambda の設定を読み込む。
//! クライアントやテーブルはプロセス起動時に一度だけ構築し、
//! 以降の呼び出しで共有する（Lambda コンテナ再利用の前提）。

use std::env;

/// Record API の設定
#[derive(Debug, Clone)]
pub struct RecordApiConfig {
    /// レコードを格納する DynamoDB テーブル名
    pub table_name: String,
    /// DynamoDB エンドポイント URL
    /// （LocalStack / DynamoDB Local 使用時に設定、未設定で AWS デフォルト）
    pub endpoint_url: Option<String>,
}

impl RecordApiConfig {
    /// 環境変数から設定を読み込む
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            table_name: env::var("DYNAMODB_TABLE")
                .map_err(|_| anyhow::anyhow!("DYNAMODB_TABLE が設定されていません"))?,
            endpoint_url: env::var("DYNAMODB_ENDPOINT_URL").ok(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 環境変数を触るテストは並行実行で干渉するため、1 テストにまとめる
    #[test]
    fn test_from_envは必須変数の欠落をエラーにし揃っていれば読み込む() {
        // SAFETY: このテスト内でのみ環境変数を変更する
        unsafe {
            env::remove_var("DYNAMODB_TABLE");
            env::remove_var("DYNAMODB_ENDPOINT_URL");
        }
        assert!(RecordApiConfig::from_env().is_err());

        unsafe {
            env::set_var("DYNAMODB_TABLE", "records");
            env::set_var("DYNAMODB_ENDPOINT_URL", "http://localhost:4566");
        }
        let config = RecordApiConfig::from_env().unwrap();
        assert_eq!(config.table_name, "records");
        assert_eq!(
            config.endpoint_url.as_deref(),
            Some("http://localhost:4566")
        );

        unsafe {
            env::remove_var("DYNAMODB_TABLE");
            env::remove_var("DYNAMODB_ENDPOINT_URL");
        }
    }
}
