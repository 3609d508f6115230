//! # RecordStore
//!
//! レコードの永続化を担当するストアのポートと DynamoDB 実装。
//!
//! ## 設計方針
//!
//! - **狭いポート**: 消費側が使う 3 操作（put / get / delete）のみを公開し、
//!   インメモリ実装（テスト）と DynamoDB 実装（本番）を差し替え可能にする
//! - **upsert**: put は無条件上書き（同一 `id` の既存レコードは全置換）
//! - **冪等削除**: delete は存在確認を行わず、存在しない `id` の削除も成功とする
//! - **属性は全て文字列**: `id` / `name` / `createdAt`（ISO-8601）

use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::{Client, types::AttributeValue};
use chrono::{DateTime, SecondsFormat, Utc};
use daicho_domain::record::{Record, RecordId, RecordName};

use crate::InfraError;

/// レコードストアトレイト
///
/// このシステムが外部キーバリューストアに要求する唯一の契約。
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// レコードを書き込む（同一 ID の既存レコードは無条件上書き）
    async fn put(&self, record: &Record) -> Result<(), InfraError>;

    /// レコードを ID で検索する
    async fn get(&self, id: &RecordId) -> Result<Option<Record>, InfraError>;

    /// レコードを ID で削除する（存在しなくても成功）
    async fn delete(&self, id: &RecordId) -> Result<(), InfraError>;
}

/// DynamoDB 実装の RecordStore
pub struct DynamoDbRecordStore {
    client:     Client,
    table_name: String,
}

impl DynamoDbRecordStore {
    pub fn new(client: Client, table_name: String) -> Self {
        Self { client, table_name }
    }
}

#[async_trait]
impl RecordStore for DynamoDbRecordStore {
    #[tracing::instrument(skip_all, level = "debug", fields(record_id = %record.id()))]
    async fn put(&self, record: &Record) -> Result<(), InfraError> {
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(to_item(record)))
            .send()
            .await
            .map_err(|e| InfraError::dynamo_db(format!("レコードの書き込みに失敗: {e}")))?;

        Ok(())
    }

    #[tracing::instrument(skip_all, level = "debug", fields(record_id = %id))]
    async fn get(&self, id: &RecordId) -> Result<Option<Record>, InfraError> {
        let output = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key("id", AttributeValue::S(id.as_str().to_string()))
            .send()
            .await
            .map_err(|e| InfraError::dynamo_db(format!("レコードの取得に失敗: {e}")))?;

        output.item().map(from_item).transpose()
    }

    #[tracing::instrument(skip_all, level = "debug", fields(record_id = %id))]
    async fn delete(&self, id: &RecordId) -> Result<(), InfraError> {
        self.client
            .delete_item()
            .table_name(&self.table_name)
            .key("id", AttributeValue::S(id.as_str().to_string()))
            .send()
            .await
            .map_err(|e| InfraError::dynamo_db(format!("レコードの削除に失敗: {e}")))?;

        Ok(())
    }
}

// ===== 属性マーシャリング =====
//
// クライアントを介さず単体テストできるよう、自由関数として切り出す。

/// レコードを DynamoDB アイテムに変換する
///
/// `createdAt` は ISO-8601（ミリ秒精度、`Z` サフィックス）で格納する。
pub(crate) fn to_item(record: &Record) -> HashMap<String, AttributeValue> {
    let mut item = HashMap::new();
    item.insert(
        "id".to_string(),
        AttributeValue::S(record.id().as_str().to_string()),
    );
    item.insert(
        "name".to_string(),
        AttributeValue::S(record.name().as_str().to_string()),
    );
    item.insert(
        "createdAt".to_string(),
        AttributeValue::S(
            record
                .created_at()
                .to_rfc3339_opts(SecondsFormat::Millis, true),
        ),
    );
    item
}

/// DynamoDB アイテムをレコードに変換する
///
/// 期待する属性を欠くアイテムは `InfraError::CorruptItem` になる。
/// このシステムのライターは完全なレコードのみ書き込むため、
/// 通常の運用では到達しない。
pub(crate) fn from_item(item: &HashMap<String, AttributeValue>) -> Result<Record, InfraError> {
    let id = string_attr(item, "id")?;
    let name = string_attr(item, "name")?;
    let created_at = string_attr(item, "createdAt")?;

    let id = RecordId::new(id).map_err(|e| InfraError::corrupt_item(format!("id: {e}")))?;
    let name =
        RecordName::new(name).map_err(|e| InfraError::corrupt_item(format!("name: {e}")))?;
    let created_at = created_at
        .parse::<DateTime<Utc>>()
        .map_err(|e| InfraError::corrupt_item(format!("createdAt: {e}")))?;

    Ok(Record::new(id, name, created_at))
}

/// アイテムから文字列属性を取り出す
fn string_attr<'a>(
    item: &'a HashMap<String, AttributeValue>,
    key: &str,
) -> Result<&'a str, InfraError> {
    item.get(key)
        .and_then(|v| v.as_s().ok())
        .map(String::as_str)
        .ok_or_else(|| InfraError::corrupt_item(format!("属性 '{key}' がありません")))
}
