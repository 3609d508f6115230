//! # Daicho 共有ユーティリティ
//!
//! 両 Lambda（record-api / debug-api）で使用される共通のワイヤ型を提供する。
//!
//! ## 設計方針
//!
//! - 純粋なデータ構造（`Serialize` / `Deserialize` のみ）に限定する
//! - HTTP レスポンスへの変換は各アプリの責務
//!   （shared に Lambda ランタイム依存を入れない）

pub mod body;

pub use body::{ErrorBody, MessageBody};
