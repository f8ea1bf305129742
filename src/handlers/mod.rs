//! HTTP 핸들러 모듈
//!
//! RESTful API 엔드포인트의 요청/응답 처리를 담당합니다.
//! Spring Boot의 `@RestController`에 해당하는 계층으로,
//! 비즈니스 로직은 서비스 계층에 위임합니다.

pub mod drinks;
pub mod environment;
