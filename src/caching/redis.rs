//! Redis 캐시 클라이언트 모듈
//!
//! 값을 JSON 으로 직렬화하여 저장하는 얇은 Redis 래퍼입니다.
//! 음료 목록/개별 음료 캐시(10분 TTL)와 Auth0 JWKS 문서 캐시(1시간 TTL)가
//! 이 클라이언트를 통해 관리됩니다.
//!
//! # 환경 변수 설정
//!
//! ```bash
//! export REDIS_URL="redis://localhost:6379"
//! ```
//!
//! # 기본 사용법
//!
//! ```rust,ignore
//! let redis = RedisClient::new().await?;
//!
//! // 캐시 저장 (TTL 10분)
//! redis.set_with_expiry("drink:all", &drinks, 600).await?;
//!
//! // 캐시 조회
//! let cached: Option<Vec<Drink>> = redis.get("drink:all").await?;
//! ```

use log::info;
use redis::{AsyncCommands, Client};
use serde::{de::DeserializeOwned, Serialize};
use std::env;

/// JSON 직렬화 기반 Redis 캐시 클라이언트
pub struct RedisClient {
    client: Client,
}

impl RedisClient {
    /// 새 Redis 연결을 생성합니다.
    ///
    /// `REDIS_URL` 환경 변수에서 연결 정보를 읽고,
    /// PING 으로 서버 가용성을 확인합니다.
    pub async fn new() -> Result<Self, Box<dyn std::error::Error>> {
        let redis_url = env::var("REDIS_URL")
            .unwrap_or_else(|_| "redis://localhost:6379".to_string());

        let client = Client::open(redis_url)?;

        // 연결 테스트
        let mut conn = client.get_multiplexed_async_connection().await?;
        redis::cmd("PING").query_async::<()>(&mut conn).await?;

        info!("✅ Redis 연결 성공");

        Ok(Self { client })
    }

    /// 지정된 키의 값을 조회하여 역직렬화합니다.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(T))` - 키가 존재하고 역직렬화 성공
    /// * `Ok(None)` - 키가 존재하지 않음
    /// * `Err(RedisError)` - Redis 오류 또는 역직렬화 실패
    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, redis::RedisError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let value: Option<String> = conn.get(key).await?;

        match value {
            Some(json) => {
                let deserialized = serde_json::from_str(&json)
                    .map_err(|e| redis::RedisError::from((redis::ErrorKind::TypeError, "Deserialization failed", e.to_string())))?;
                Ok(Some(deserialized))
            }
            None => Ok(None),
        }
    }

    /// 값을 JSON 으로 직렬화하여 저장합니다. (만료 없음)
    pub async fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), redis::RedisError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let json = serde_json::to_string(value)
            .map_err(|e| redis::RedisError::from((redis::ErrorKind::TypeError, "Serialization failed", e.to_string())))?;
        conn.set(key, json).await
    }

    /// 값을 JSON 으로 직렬화하여 TTL 과 함께 저장합니다.
    ///
    /// # Arguments
    ///
    /// * `seconds` - 키 만료 시간 (초)
    pub async fn set_with_expiry<T: Serialize>(&self, key: &str, value: &T, seconds: usize) -> Result<(), redis::RedisError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let json = serde_json::to_string(value)
            .map_err(|e| redis::RedisError::from((redis::ErrorKind::TypeError, "Serialization failed", e.to_string())))?;
        conn.set_ex(key, json, seconds as u64).await
    }

    /// 지정된 키를 삭제합니다.
    pub async fn del(&self, key: &str) -> Result<(), redis::RedisError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        conn.del(key).await
    }

    /// 여러 키를 한 번에 삭제합니다.
    pub async fn del_multiple(&self, keys: &[String]) -> Result<(), redis::RedisError> {
        if keys.is_empty() {
            return Ok(());
        }

        let mut conn = self.client.get_multiplexed_async_connection().await?;
        conn.del(keys).await
    }

    /// 패턴과 일치하는 키 목록을 조회합니다.
    ///
    /// 캐시 무효화 시 `drink:*` 같은 패턴으로 관련 키를 수집하는 데 사용됩니다.
    pub async fn keys(&self, pattern: &str) -> Result<Vec<String>, redis::RedisError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        conn.keys(pattern).await
    }
}
