//! # レコード
//!
//! 台帳のレコードエンティティとそれに関連する値オブジェクトを定義する。
//!
//! ## 設計方針
//!
//! - **Newtype パターン**: [`RecordId`] と [`RecordName`]
//!   は文字列をラップし、型安全性を確保
//! - **バリデーション**: 値オブジェクトの生成時に検証ロジックを実行
//! - **不変性**: `created_at` は作成時にサーバー側で採時し、以後変更しない
//!
//! ## ワイヤ形式
//!
//! レコードは `{"id": "...", "name": "...", "createdAt": "..."}` として
//! シリアライズされる（`createdAt` は ISO-8601 / RFC 3339 文字列）。

use chrono::{DateTime, Utc};
use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::DomainError;

/// レコード ID（一意識別子）
///
/// クライアントが指定する任意の非空文字列。UUID の採番は行わない
/// （呼び出し側が識別子を管理する契約のため）。
/// Newtype パターンで型安全性を確保。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[display("{_0}")]
pub struct RecordId(String);

impl RecordId {
    /// レコード ID を作成する
    ///
    /// # バリデーション
    ///
    /// - 空文字列ではない
    ///
    /// # エラー
    ///
    /// バリデーションに失敗した場合は `DomainError::Validation` を返す。
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();
        if value.is_empty() {
            return Err(DomainError::Validation(
                "レコード ID は必須です".to_string(),
            ));
        }
        Ok(Self(value))
    }

    /// 内部の文字列参照を取得する
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// レコード名（値オブジェクト）
///
/// 作成時に必須。空文字列は「未指定」とみなし拒否する。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Display)]
#[display("{_0}")]
pub struct RecordName(String);

impl RecordName {
    /// レコード名を作成する
    ///
    /// # エラー
    ///
    /// 空文字列の場合は `DomainError::Validation` を返す。
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();
        if value.is_empty() {
            return Err(DomainError::Validation(
                "レコード名は必須です".to_string(),
            ));
        }
        Ok(Self(value))
    }

    /// 内部の文字列参照を取得する
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// レコードエンティティ
///
/// 台帳が管理する唯一のエンティティ。`id` で一意に識別される。
///
/// ## ライフサイクル
///
/// - 作成: `Record::new` でサーバー採時の `created_at` を付与
/// - 上書き: 同一 `id` での再作成は全置換（upsert、last-write-wins）
/// - 削除: `id` 指定の無条件削除
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    id:         RecordId,
    name:       RecordName,
    created_at: DateTime<Utc>,
}

impl Record {
    /// 新しいレコードを作成する
    ///
    /// `created_at` は呼び出し側から渡された現在時刻をそのまま保持する
    /// （テストで固定時刻を注入可能にするため、内部で採時しない）。
    pub fn new(id: RecordId, name: RecordName, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name,
            created_at,
        }
    }

    /// レコード ID を取得する
    pub fn id(&self) -> &RecordId {
        &self.id
    }

    /// レコード名を取得する
    pub fn name(&self) -> &RecordName {
        &self.name
    }

    /// 作成日時を取得する
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
