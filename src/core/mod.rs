//! 핵심 인프라 모듈
//!
//! 싱글톤 기반 의존성 주입 레지스트리를 제공합니다.

pub mod registry;
