use std::fmt;

use fred::prelude::*;

use crate::server::error::store::StoreError;

/// Redis/Valkey backend storing each key as a plain string value.
#[derive(Clone)]
pub struct RedisBackend {
    pool: Pool,
}

impl fmt::Debug for RedisBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RedisBackend").finish_non_exhaustive()
    }
}

impl RedisBackend {
    /// Wraps an already connected pool.
    pub fn new(pool: Pool) -> Self {
        Self { pool }
    }

    /// Connects a small pool to `url` and waits for it to become ready.
    pub async fn connect(url: &str) -> Result<Self, StoreError> {
        let config = Config::from_url(url)?;
        let pool = Pool::new(config, None, None, None, 4)?;

        pool.connect();
        pool.wait_for_connect().await?;

        Ok(Self { pool })
    }

    pub async fn get_raw(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.pool.get::<Option<String>, _>(key).await?)
    }

    pub async fn set_raw(&self, key: &str, value: String) -> Result<(), StoreError> {
        self.pool
            .set::<(), _, _>(key, value, None, None, false)
            .await?;

        Ok(())
    }
}
