//! # Domain Layer Module
//!
//! 도메인 계층을 구성하는 모듈로, 비즈니스 객체와 API 계약을 정의합니다.
//! Spring Framework의 Domain Layer와 동일한 역할을 수행합니다.
//!
//! ## 아키텍처 개요
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Entities      - 핵심 비즈니스 객체 (MongoDB 문서)
//! ├── DTOs         - 데이터 전송 객체 (Request/Response)
//! └── Models       - 인증 컨텍스트 모델 (Auth0 토큰 기반)
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, DB)
//! ```
//!
//! ## Spring Framework와의 비교
//!
//! | Spring | 이 시스템 | 역할 |
//! |--------|-----------|------|
//! | `@Entity` | `entities` 모듈 | 비즈니스 핵심 객체 |
//! | `@RequestBody` / `@ResponseBody` | `dto` 모듈 | API 계약 정의 |
//! | `SecurityContext` | `models::auth` | 인증된 사용자 표현 |
//! | `@Valid` | `validator` 검증 | 데이터 유효성 검사 |

pub mod dto;
pub mod entities;
pub mod models;

pub use dto::*;
pub use entities::*;
pub use models::*;
