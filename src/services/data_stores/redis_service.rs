use redis::aio::MultiplexedConnection;
use redis::{AsyncCommands, Client, SetExpiry, SetOptions};
use std::error::Error;
use std::fmt;
use std::future::Future;
use std::time::Duration;

use crate::utils::consts::STORE_OP_TIMEOUT;

// Small helper to shorten CRUD error mapping
fn crud<E: ToString>(e: E) -> RedisServiceErr {
    RedisServiceErr::CRUDErr(e.to_string())
}

#[derive(Debug)]
pub enum RedisServiceErr {
    ConnectionErr(String),
    CRUDErr(String),
    TimeoutErr,
}

impl fmt::Display for RedisServiceErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RedisServiceErr::ConnectionErr(str) => {
                write!(f, "error while connecting to instance: {str}")
            }
            RedisServiceErr::CRUDErr(str) => write!(f, "error while performing CRUD action: {str}"),
            RedisServiceErr::TimeoutErr => {
                write!(f, "operation exceeded its deadline")
            }
        }
    }
}

impl Error for RedisServiceErr {}

pub struct RedisService {
    client: Client,
    op_timeout: Duration,
}

impl RedisService {
    pub fn new(host_url: &str) -> Self {
        let formatted_url = format!("redis://{}/", host_url);
        let client = Client::open(formatted_url).expect("failed to connect to redis instance");
        Self {
            client,
            op_timeout: STORE_OP_TIMEOUT,
        }
    }

    // Every call is bounded: a hung instance surfaces as TimeoutErr, never
    // as an indefinitely blocked request.
    async fn bounded<T, F>(&self, fut: F) -> Result<T, RedisServiceErr>
    where
        F: Future<Output = redis::RedisResult<T>>,
    {
        match tokio::time::timeout(self.op_timeout, fut).await {
            Ok(res) => res.map_err(crud),
            Err(_) => Err(RedisServiceErr::TimeoutErr),
        }
    }

    async fn get_connection(&self) -> Result<MultiplexedConnection, RedisServiceErr> {
        match tokio::time::timeout(
            self.op_timeout,
            self.client.get_multiplexed_async_connection(),
        )
        .await
        {
            Ok(res) => res.map_err(|e| RedisServiceErr::ConnectionErr(e.to_string())),
            Err(_) => Err(RedisServiceErr::TimeoutErr),
        }
    }

    /// SET key value EX ttl. Plain upsert: any existing value is replaced.
    pub async fn set_key_value(
        &self,
        key: &str,
        value: &str,
        ttl: u64,
    ) -> Result<(), RedisServiceErr> {
        // Clamp TTL to at least 1 second to avoid immediate expiration
        let ttl = if ttl == 0 { 1 } else { ttl };
        let mut conn = self.get_connection().await?;
        let opts = SetOptions::default().with_expiration(SetExpiry::EX(ttl));
        self.bounded(conn.set_options::<_, _, ()>(key, value, opts))
            .await
    }

    pub async fn get(&self, key: &str) -> Result<Option<String>, RedisServiceErr> {
        let mut conn = self.get_connection().await?;
        self.bounded(conn.get(key)).await
    }

    pub async fn delete_key(&self, key: &str) -> Result<bool, RedisServiceErr> {
        let mut conn = self.get_connection().await?;
        let deleted: i32 = self.bounded(conn.del(key)).await?;
        Ok(deleted > 0)
    }
}
