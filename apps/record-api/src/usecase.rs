//! # レコード CRUD ユースケース
//!
//! ハンドラから呼ばれるアプリケーションロジック。1 呼び出しにつき
//! ストア操作は必ず 1 回だけ行い、リトライは行わない。

use std::sync::Arc;

use daicho_domain::{
    clock::Clock,
    record::{Record, RecordId, RecordName},
};
use daicho_infra::RecordStore;

use crate::error::RecordApiError;

/// レコード作成の入力
///
/// 値オブジェクトの生成（バリデーション）はハンドラ側で済ませてあるため、
/// ここに到達した入力は常に妥当。
pub struct CreateRecordInput {
    pub id:   RecordId,
    pub name: RecordName,
}

/// レコード CRUD ユースケース
pub struct RecordUseCase {
    store: Arc<dyn RecordStore>,
    clock: Arc<dyn Clock>,
}

impl RecordUseCase {
    pub fn new(store: Arc<dyn RecordStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    /// レコードを作成する
    ///
    /// `created_at` をサーバー側で採時し、同一 `id` の既存レコードは
    /// 無条件に上書きする（upsert、存在チェックなし）。
    pub async fn create(&self, input: CreateRecordInput) -> Result<Record, RecordApiError> {
        let record = Record::new(input.id, input.name, self.clock.now());
        self.store.put(&record).await?;
        Ok(record)
    }

    /// レコードを ID で取得する
    pub async fn get(&self, id: &RecordId) -> Result<Record, RecordApiError> {
        self.store
            .get(id)
            .await?
            .ok_or(RecordApiError::NotFound)
    }

    /// レコードを ID で削除する
    ///
    /// 存在確認は行わない。存在しない `id` の削除も成功として扱う（冪等）。
    pub async fn delete(&self, id: &RecordId) -> Result<(), RecordApiError> {
        self.store.delete(id).await?;
        Ok(())
    }
}
