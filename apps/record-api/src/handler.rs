//! # レコードハンドラ
//!
//! API Gateway プロキシイベントの HTTP メソッドでディスパッチする単一の
//! エントリポイント。メソッドの判定 → 入力検証 → ストア操作 1 回 →
//! ステータスコードへのマッピング、の直列フローのみで構成される。
//!
//! ## ルーティング
//!
//! | メソッド | 操作 | 成功レスポンス |
//! |---------|------|---------------|
//! | `POST` | 作成（upsert） | 201 + 確認メッセージと格納レコード |
//! | `GET` | `id` で取得 | 200 + レコード本体 |
//! | `DELETE` | `id` で削除（冪等） | 200 + 確認メッセージ |
//! | その他 | — | 405、ストアへはアクセスしない |
//!
//! エラーマッピングの一覧は [`crate::error::RecordApiError`] を参照。

use daicho_domain::record::{Record, RecordId, RecordName};
use daicho_shared::MessageBody;
use lambda_http::{
    Body,
    Error,
    Request,
    RequestExt,
    Response,
    http::{Method, StatusCode, header},
};
use serde::{Deserialize, Serialize};

use crate::{
    error::RecordApiError,
    usecase::{CreateRecordInput, RecordUseCase},
};

/// 作成リクエストのボディ
///
/// パース不能・空のボディは「空オブジェクト」として扱うため、
/// 全フィールドを `Option` で受けてから存在検証を行う
/// （パース失敗を例外経路にしない）。
#[derive(Debug, Default, Deserialize)]
struct CreateRecordBody {
    #[serde(default)]
    id:   Option<String>,
    #[serde(default)]
    name: Option<String>,
}

/// 作成成功レスポンスのボディ
#[derive(Debug, Serialize)]
struct CreatedBody {
    message: String,
    record:  Record,
}

/// レコード CRUD のエントリポイント
///
/// Lambda ランタイムから渡される API Gateway プロキシイベントを処理する。
/// エラーは全て HTTP レスポンスに変換するため、戻り値が `Err` になることはない。
#[tracing::instrument(skip_all, fields(method = %event.method(), path = %event.uri().path()))]
pub async fn function_handler(
    usecase: &RecordUseCase,
    event: Request,
) -> Result<Response<Body>, Error> {
    let outcome = match event.method() {
        &Method::POST => handle_create(usecase, &event).await,
        &Method::GET => handle_get(usecase, &event).await,
        &Method::DELETE => handle_delete(usecase, &event).await,
        method => Err(RecordApiError::MethodNotAllowed(method.to_string())),
    };

    match outcome {
        Ok(response) => Ok(response),
        Err(err) => Ok(err.into_response()),
    }
}

/// `POST` — レコードを作成する
async fn handle_create(
    usecase: &RecordUseCase,
    event: &Request,
) -> Result<Response<Body>, RecordApiError> {
    let body = parse_create_body(event.body());

    // 欠落と空文字列はいずれも「未指定」として扱う（値オブジェクトは空文字列を拒否する）
    let id = body.id.and_then(|v| RecordId::new(v).ok());
    let name = body.name.and_then(|v| RecordName::new(v).ok());
    let (Some(id), Some(name)) = (id, name) else {
        return Err(RecordApiError::MissingFields);
    };

    let input = CreateRecordInput { id, name };

    let record = usecase.create(input).await?;
    tracing::info!(record_id = %record.id(), "レコードを作成しました");

    json_response(
        StatusCode::CREATED,
        &CreatedBody {
            message: "Record created".to_string(),
            record,
        },
    )
}

/// `GET` — レコードを取得する
async fn handle_get(
    usecase: &RecordUseCase,
    event: &Request,
) -> Result<Response<Body>, RecordApiError> {
    let id = path_record_id(event)?;
    let record = usecase.get(&id).await?;

    json_response(StatusCode::OK, &record)
}

/// `DELETE` — レコードを削除する
async fn handle_delete(
    usecase: &RecordUseCase,
    event: &Request,
) -> Result<Response<Body>, RecordApiError> {
    let id = path_record_id(event)?;
    usecase.delete(&id).await?;
    tracing::info!(record_id = %id, "レコードを削除しました");

    json_response(
        StatusCode::OK,
        &MessageBody::new(format!("Record {id} deleted")),
    )
}

/// リクエストボディを作成入力としてパースする
///
/// パース不能・空のボディは空オブジェクト相当（全フィールド欠落）に
/// フォールバックする。
fn parse_create_body(body: &Body) -> CreateRecordBody {
    serde_json::from_slice(body.as_ref()).unwrap_or_default()
}

/// パスパラメータから `id` を取り出す
///
/// 欠落・空文字列はいずれも `MissingPathId` になる。
fn path_record_id(event: &Request) -> Result<RecordId, RecordApiError> {
    let params = event.path_parameters();
    let id = params.first("id").ok_or(RecordApiError::MissingPathId)?;
    RecordId::new(id).map_err(|_| RecordApiError::MissingPathId)
}

/// JSON レスポンスを構築する
///
/// 全レスポンスに `Content-Type: application/json` を明示的に付与する。
fn json_response<T: Serialize>(
    status: StatusCode,
    body: &T,
) -> Result<Response<Body>, RecordApiError> {
    let json = serde_json::to_string(body).map_err(|e| RecordApiError::Internal(e.to_string()))?;
    Response::builder()
        .status(status)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::Text(json))
        .map_err(|e| RecordApiError::Internal(e.to_string()))
}
