//! 커피숍 백엔드 서비스
//!
//! Rust 기반의 음료 메뉴 관리 서비스입니다.
//! Auth0 RS256 토큰 기반 RBAC 인증, 클라이언트 환경 설정 제공,
//! 그리고 싱글톤 매크로를 활용한 의존성 주입을 제공합니다.
//!
//! # Features
//!
//! - **음료 메뉴 관리**: 메뉴 조회, 등록, 수정, 삭제
//! - **이중 표현**: 공개용 요약(short) / 권한 보유자용 상세(long) 표현
//! - **Auth0 인증**: RS256 서명 검증과 permissions 클레임 기반 RBAC
//! - **환경 설정 제공**: SPA 클라이언트가 읽어가는 `/environment` 문서
//! - **싱글톤 DI**: 매크로 기반 자동 의존성 주입
//! - **MongoDB**: 음료 데이터 영구 저장
//! - **Redis**: 메뉴/JWKS 캐싱
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트 + 권한 미들웨어
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 로직 / 토큰 검증
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 데이터 액세스
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MongoDB + Redis │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use coffee_shop_backend::services::drinks::DrinkService;
//! use coffee_shop_backend::config::environment::get_environment;
//!
//! // 싱글톤 서비스 인스턴스 가져오기
//! let drink_service = DrinkService::instance();
//! let menu = drink_service.list_drinks().await?;
//!
//! // 클라이언트 환경 설정
//! let env = get_environment();
//! assert_eq!(env.auth0.audience, "coffee");
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod caching;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod errors;
pub mod middlewares;
