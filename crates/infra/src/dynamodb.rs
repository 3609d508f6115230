//! # DynamoDB 接続管理
//!
//! Amazon DynamoDB への接続管理を行う。
//!
//! ## 設計方針
//!
//! - **ローカル開発**: LocalStack / DynamoDB Local のエンドポイントを
//!   `DYNAMODB_ENDPOINT_URL` で指定（認証情報はダミー値）
//! - **本番環境**: エンドポイント未指定なら SDK
//!   のデフォルトプロバイダチェーン（Lambda 実行ロール）で認証
//! - **テーブル自動作成**: ローカル開発時にテーブルが存在しなければ作成（冪等）。
//!   本番のテーブルプロビジョニングは IaC の責務であり、このモジュールでは扱わない
//!
//! ## 使用例
//!
//! ```rust,ignore
//! use daicho_infra::dynamodb;
//!
//! async fn setup() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = dynamodb::create_client(Some("http://localhost:4566")).await;
//!     dynamodb::ensure_records_table(&client, "records").await?;
//!     Ok(())
//! }
//! ```

use aws_sdk_dynamodb::{
    Client,
    types::{
        AttributeDefinition,
        BillingMode,
        KeySchemaElement,
        KeyType,
        ScalarAttributeType,
    },
};

use crate::InfraError;

/// DynamoDB クライアントを作成する
///
/// `endpoint` が指定された場合はローカル開発用のクライアントを作成する。
/// ローカルのエミュレータは認証情報を検証しないが、SDK はプロバイダを
/// 要求するためダミー値を設定する。
///
/// `endpoint` が `None` の場合はデフォルトプロバイダチェーンを使用する
/// （Lambda 実行環境では実行ロールの認証情報が使われる）。
///
/// # 引数
///
/// * `endpoint` - DynamoDB エンドポイント URL（例: `http://localhost:4566`）
pub async fn create_client(endpoint: Option<&str>) -> Client {
    let config = match endpoint {
        Some(url) => {
            aws_config::defaults(aws_config::BehaviorVersion::latest())
                .endpoint_url(url)
                .region(aws_config::Region::new("us-east-1"))
                // ローカルエミュレータはクレデンシャルを検証しないが、SDK はプロバイダが必要
                .credentials_provider(aws_sdk_dynamodb::config::Credentials::new(
                    "local", "local", None, None, "local",
                ))
                .load()
                .await
        }
        None => aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await,
    };

    Client::new(&config)
}

/// レコードテーブルが存在しなければ作成する（冪等）
///
/// テーブルスキーマ:
/// - PK: `id` (String) — レコード ID
///
/// # 引数
///
/// * `client` - DynamoDB クライアント
/// * `table_name` - テーブル名
pub async fn ensure_records_table(client: &Client, table_name: &str) -> Result<(), InfraError> {
    // テーブルの存在確認
    match client.describe_table().table_name(table_name).send().await {
        Ok(_) => {
            tracing::debug!("テーブル '{}' は既に存在します", table_name);
            return Ok(());
        }
        Err(err) => {
            // ResourceNotFoundException の場合のみテーブル作成に進む
            let service_err = err.as_service_error();
            if !service_err
                .map(|e| e.is_resource_not_found_exception())
                .unwrap_or(false)
            {
                return Err(InfraError::dynamo_db(format!(
                    "テーブル '{}' の確認に失敗: {}",
                    table_name, err
                )));
            }
        }
    }

    // テーブル作成
    tracing::info!("テーブル '{}' を作成します", table_name);

    let create_result = client
        .create_table()
        .table_name(table_name)
        .key_schema(
            KeySchemaElement::builder()
                .attribute_name("id")
                .key_type(KeyType::Hash)
                .build()
                .map_err(|e| InfraError::dynamo_db(format!("KeySchema 構築エラー: {}", e)))?,
        )
        .attribute_definitions(
            AttributeDefinition::builder()
                .attribute_name("id")
                .attribute_type(ScalarAttributeType::S)
                .build()
                .map_err(|e| {
                    InfraError::dynamo_db(format!("AttributeDefinition 構築エラー: {}", e))
                })?,
        )
        .billing_mode(BillingMode::PayPerRequest)
        .send()
        .await;

    if let Err(err) = create_result {
        // ResourceInUseException は並行呼び出し時に発生しうる（テーブルが作成中）
        // この場合は冪等として成功扱いにする
        let is_resource_in_use = err
            .as_service_error()
            .map(|e| e.is_resource_in_use_exception())
            .unwrap_or(false);
        if !is_resource_in_use {
            return Err(InfraError::dynamo_db(format!(
                "テーブル '{}' の作成に失敗: {}",
                table_name, err
            )));
        }
        tracing::debug!(
            "テーブル '{}' は既に作成中または存在します（ResourceInUseException）",
            table_name
        );
        return Ok(());
    }

    tracing::info!("テーブル '{}' を作成しました", table_name);

    Ok(())
}
