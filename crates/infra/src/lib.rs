//! # Daicho インフラ層
//!
//! 外部システムとの接続・通信を担当するインフラストラクチャ層。
//!
//! ## 責務
//!
//! - **DynamoDB 接続**: クライアント生成とテーブルの冪等作成
//! - **ストア実装**: [`record_store::RecordStore`] トレイトの DynamoDB 実装
//! - **テスト用モック**: インメモリ実装（`test-utils` feature）
//!
//! ## 依存関係
//!
//! ```text
//! apps → infra → domain
//! ```
//!
//! ドメイン層はインフラ層に依存しない（依存性逆転の原則）。
//!
//! ## モジュール構成
//!
//! - [`dynamodb`] - DynamoDB クライアント生成・テーブル管理
//! - [`error`] - インフラ層エラー定義
//! - [`record_store`] - レコードストアのポートと DynamoDB 実装
//!
//! ## 使用例
//!
//! ```rust,ignore
//! use daicho_infra::{dynamodb, record_store::DynamoDbRecordStore};
//!
//! async fn setup() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = dynamodb::create_client(Some("http://localhost:4566")).await;
//!     dynamodb::ensure_records_table(&client, "records").await?;
//!     let store = DynamoDbRecordStore::new(client, "records".to_string());
//!     Ok(())
//! }
//! ```

pub mod dynamodb;
pub mod error;
pub mod record_store;

#[cfg(any(test, feature = "test-utils"))]
pub mod mock;

pub use error::InfraError;
pub use record_store::{DynamoDbRecordStore, RecordStore};
