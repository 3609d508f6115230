//! # デバッグハンドラ
//!
//! 疎通確認用の固定レスポンスを返すエンドポイント。
//!
//! ## 契約
//!
//! 入力の内容は一切参照せず、常に
//! `200` + `{"message": "Debug endpoint OK"}` を返す。
//! 副作用なし、失敗モードなし。

use daicho_shared::MessageBody;
use lambda_http::{
    Body,
    Error,
    Request,
    Response,
    http::{StatusCode, header},
};

/// デバッグエンドポイント
///
/// API Gateway の配線と Lambda の起動を確認するためのエンドポイント。
/// リクエスト内容は無視する。
pub async fn function_handler(_event: Request) -> Result<Response<Body>, Error> {
    let body = serde_json::to_string(&MessageBody::new("Debug endpoint OK"))?;

    Ok(Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::Text(body))?)
}
