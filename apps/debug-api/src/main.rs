//! # Debug API Lambda
//!
//! 疎通確認用の固定レスポンスを返す Lambda 関数。
//! Record API とは独立しており、状態もストレージも持たない。

mod handler;

use handler::function_handler;
use lambda_http::{Error, run, service_fn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Debug API Lambda のエントリーポイント
#[tokio::main]
async fn main() -> Result<(), Error> {
    // トレーシング初期化（CloudWatch Logs 向けに ANSI 無効・ターゲット省略）
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_target(false),
        )
        .init();

    run(service_fn(function_handler)).await
}
