//! # Record API Lambda
//!
//! レコード台帳の CRUD を提供する Lambda 関数。
//!
//! ## 役割
//!
//! API Gateway のプロキシ統合イベントを受け取り、HTTP メソッドで
//! ディスパッチして DynamoDB のレコードテーブルを操作する:
//!
//! - `POST /records` — ボディの `id` / `name` からレコードを作成（upsert）
//! - `GET /records/{id}` — レコードを取得
//! - `DELETE /records/{id}` — レコードを削除（冪等）
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `DYNAMODB_TABLE` | **Yes** | レコードテーブル名 |
//! | `DYNAMODB_ENDPOINT_URL` | No | ローカル開発用エンドポイント（LocalStack 等） |
//!
//! ## 起動方法（ローカル）
//!
//! ```bash
//! DYNAMODB_TABLE=records DYNAMODB_ENDPOINT_URL=http://localhost:4566 \
//!     cargo lambda watch -p daicho-record-api
//! ```

mod config;
mod error;
mod handler;
mod usecase;

use std::sync::Arc;

use config::RecordApiConfig;
use daicho_domain::clock::SystemClock;
use daicho_infra::{DynamoDbRecordStore, dynamodb};
use handler::function_handler;
use lambda_http::{Error, run, service_fn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use usecase::RecordUseCase;

/// Record API Lambda のエントリーポイント
///
/// クライアント・ストア・ユースケースはコールドスタート時に一度だけ構築し、
/// 以降の呼び出しで共有する。
#[tokio::main]
async fn main() -> Result<(), Error> {
    // .env ファイルを読み込む（存在する場合）
    dotenvy::dotenv().ok();

    // トレーシング初期化（CloudWatch Logs 向けに ANSI 無効・ターゲット省略）
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,daicho=debug".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_target(false),
        )
        .init();

    // 設定読み込み
    let config = RecordApiConfig::from_env()?;
    tracing::info!(table = %config.table_name, "Record API を起動します");

    // DynamoDB クライアントとストアを構築
    let client = dynamodb::create_client(config.endpoint_url.as_deref()).await;

    // ローカル開発時のみテーブルを冪等作成する（本番のプロビジョニングは IaC の責務）
    if config.endpoint_url.is_some() {
        dynamodb::ensure_records_table(&client, &config.table_name).await?;
    }

    let store = Arc::new(DynamoDbRecordStore::new(client, config.table_name));
    let usecase = RecordUseCase::new(store, Arc::new(SystemClock));

    run(service_fn(|event| function_handler(&usecase, event))).await
}
