//! # テスト用モックストア
//!
//! ハンドラ・ユースケーステストで使用するインメモリのレコードストア。
//! `test-utils` feature を有効にすることで、他クレートからも利用可能。
//!
//! ```toml
//! [dev-dependencies]
//! daicho-infra = { workspace = true, features = ["test-utils"] }
//! ```

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use async_trait::async_trait;
use daicho_domain::record::{Record, RecordId};

use crate::{InfraError, RecordStore};

/// インメモリ実装の RecordStore
///
/// `Clone` してもストレージは共有される（`Arc` 内包）。
/// テストで「put したストアを別のユースケースから get する」構成に使う。
#[derive(Clone, Default)]
pub struct MockRecordStore {
    records: Arc<Mutex<HashMap<String, Record>>>,
}

impl MockRecordStore {
    pub fn new() -> Self {
        Self {
            records: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// 格納されているレコード数を返す
    pub fn len(&self) -> usize {
        self.records.lock().unwrap().len()
    }

    /// ストアが空かどうかを返す
    pub fn is_empty(&self) -> bool {
        self.records.lock().unwrap().is_empty()
    }
}

#[async_trait]
impl RecordStore for MockRecordStore {
    async fn put(&self, record: &Record) -> Result<(), InfraError> {
        self.records
            .lock()
            .unwrap()
            .insert(record.id().as_str().to_string(), record.clone());
        Ok(())
    }

    async fn get(&self, id: &RecordId) -> Result<Option<Record>, InfraError> {
        Ok(self.records.lock().unwrap().get(id.as_str()).cloned())
    }

    async fn delete(&self, id: &RecordId) -> Result<(), InfraError> {
        self.records.lock().unwrap().remove(id.as_str());
        Ok(())
    }
}

/// 常に失敗する RecordStore
///
/// ストレージ障害時のエラーマッピング（汎用 500）を検証するためのスタブ。
#[derive(Clone, Default)]
pub struct FailingRecordStore;

#[async_trait]
impl RecordStore for FailingRecordStore {
    async fn put(&self, _record: &Record) -> Result<(), InfraError> {
        Err(InfraError::dynamo_db("simulated put failure"))
    }

    async fn get(&self, _id: &RecordId) -> Result<Option<Record>, InfraError> {
        Err(InfraError::dynamo_db("simulated get failure"))
    }

    async fn delete(&self, _id: &RecordId) -> Result<(), InfraError> {
        Err(InfraError::dynamo_db("simulated delete failure"))
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use daicho_domain::record::RecordName;

    use super::*;

    fn record(id: &str, name: &str) -> Record {
        Record::new(
            RecordId::new(id).unwrap(),
            RecordName::new(name).unwrap(),
            Utc::now(),
        )
    }

    #[tokio::test]
    async fn test_putしたレコードをgetで取得できる() {
        let store = MockRecordStore::new();
        let rec = record("u1", "Alice");

        store.put(&rec).await.unwrap();
        let found = store.get(rec.id()).await.unwrap();

        assert_eq!(found, Some(rec));
    }

    #[tokio::test]
    async fn test_同一idのputは上書きする() {
        let store = MockRecordStore::new();
        store.put(&record("u1", "Alice")).await.unwrap();
        store.put(&record("u1", "Bob")).await.unwrap();

        let found = store
            .get(&RecordId::new("u1").unwrap())
            .await
            .unwrap()
            .unwrap();

        assert_eq!(found.name().as_str(), "Bob");
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_存在しないidのdeleteは成功する() {
        let store = MockRecordStore::new();

        let result = store.delete(&RecordId::new("nonexistent").unwrap()).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_cloneはストレージを共有する() {
        let store = MockRecordStore::new();
        let shared = store.clone();

        store.put(&record("u1", "Alice")).await.unwrap();

        assert!(!shared.is_empty());
    }
}
