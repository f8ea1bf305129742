//! # Configuration Module
//!
//! 커피숍 백엔드의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리하며,
//! 클라이언트와 공유하는 환경 설정 레코드를 제공합니다.
//!
//! ## 모듈 구성
//!
//! - [`environment`] - 클라이언트 환경 설정 레코드 (`getEnvironment` 계약)
//! - [`auth_config`] - Auth0 토큰 검증 관련 설정
//! - [`data_config`] - 서버 바인딩 및 실행 프로파일 설정
//!
//! ## 설계 원칙
//!
//! ### 1. 환경 분리 (Environment Separation)
//!
//! 개발, 테스트, 스테이징, 프로덕션 환경별로 다른 설정값을 제공합니다.
//! `PROFILE` 환경 변수에 따라 `.env.dev` / `.env.prod` 파일이 로드됩니다.
//!
//! ### 2. 단일 출처 (Single Source of Truth)
//!
//! Auth0 테넌트 도메인과 audience 는 클라이언트 환경 설정에만 존재하며,
//! 서버 측 토큰 검증 파라미터는 전부 그 값에서 유도됩니다.
//! 클라이언트와 서버의 설정이 어긋날 수 없는 구조입니다.
//!
//! ### 3. 불변성 (Immutability)
//!
//! 환경 설정 레코드는 기동 시 한 번 구성된 후 읽기 전용입니다.
//! 값 교체는 배포 시 환경 변수 교체로만 이루어집니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{get_environment, Auth0ApiConfig, ServerConfig};
//!
//! // 클라이언트 환경 설정
//! let env = get_environment();
//! println!("API server: {}", env.api_server_url);
//!
//! // 서버 바인딩
//! let bind = format!("{}:{}", ServerConfig::host(), ServerConfig::port());
//!
//! // 토큰 검증 파라미터
//! let jwks = Auth0ApiConfig::jwks_url();
//! ```

pub mod auth_config;
pub mod data_config;
pub mod environment;

pub use auth_config::*;
pub use data_config::*;
pub use environment::*;
