//! 음료 요청 DTO 모듈

pub mod create_drink_request;
pub mod update_drink_request;

pub use create_drink_request::*;
pub use update_drink_request::*;
