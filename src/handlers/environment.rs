//! 환경 설정 HTTP 핸들러
//!
//! 클라이언트(SPA)가 부팅 시점에 읽어가는 환경 설정 문서를 제공합니다.
//! API 서버 주소와 Auth0 인증 파라미터가 포함되며,
//! 응답 JSON의 키 이름은 클라이언트와 합의된 계약을 따릅니다.

use actix_web::{get, HttpResponse};

use crate::config::environment::get_environment;
use crate::errors::errors::AppError;

/// 클라이언트 환경 설정 조회
///
/// # Examples
///
/// ```bash
/// curl http://127.0.0.1:5000/environment
/// ```
///
/// Response:
/// ```json
/// {
///   "production": false,
///   "apiServerUrl": "http://127.0.0.1:5000",
///   "auth0": {
///     "url": "https://gharibo.us.auth0.com/",
///     "audience": "coffee",
///     "clientId": "VYsTng1AB2ETzdcIpkesrf7fwjLUmDWy",
///     "callbackURL": "http://localhost:8080"
///   }
/// }
/// ```
#[get("/environment")]
pub async fn get_client_environment() -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(get_environment()))
}
