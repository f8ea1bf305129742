//! 서비스 계층 모듈
//!
//! 비즈니스 로직을 담당하는 서비스들을 정의합니다.
//! 각 서비스는 `#[service]` 매크로를 통해 싱글톤으로 등록되며,
//! `Arc<T>` 필드로 선언된 의존성이 자동 주입됩니다.
//!
//! | Spring | 이 시스템 |
//! |--------|-----------|
//! | `@Service` | `#[service]` 매크로 |
//! | `@Autowired` | `Arc<T>` 필드 자동 주입 |
//! | `JwtDecoder` | `auth::TokenService` |

pub mod auth;
pub mod drinks;

pub use auth::*;
pub use drinks::*;
