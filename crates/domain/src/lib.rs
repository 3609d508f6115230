//! # Daicho ドメイン層
//!
//! レコード台帳のドメインモデルを定義する。
//!
//! ## 設計方針
//!
//! - **エンティティ**: 一意の識別子を持つオブジェクト（[`record::Record`]）
//! - **値オブジェクト**: 生成時にバリデーションを実行する不変オブジェクト
//!   （[`record::RecordId`], [`record::RecordName`]）
//! - **ドメインエラー**: ビジネスルール違反を表現するエラー型
//!
//! ## 依存関係の方向
//!
//! ```text
//! apps → infra → domain
//! ```
//!
//! ドメイン層はインフラ層（DynamoDB、Lambda ランタイム）に一切依存しない。
//!
//! ## モジュール構成
//!
//! - [`record`] - レコードエンティティと値オブジェクト
//! - [`clock`] - 時刻プロバイダの抽象化
//! - [`error`] - ドメイン層エラー定義
//!
//! ## 使用例
//!
//! ```rust
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use daicho_domain::record::{Record, RecordId, RecordName};
//!
//! let record = Record::new(
//!     RecordId::new("u1")?,
//!     RecordName::new("Alice")?,
//!     chrono::Utc::now(),
//! );
//! assert_eq!(record.id().as_str(), "u1");
//! # Ok(())
//! # }
//! ```

pub mod clock;
pub mod error;
pub mod record;

pub use error::DomainError;
