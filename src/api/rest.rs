//! REST-backed [`UserStore`] implementation using reqwest.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::api::{StoreError, UserStore};
use crate::constants::USERS_PATH;
use crate::models::{User, UserId, UserPayload};

/// HTTP client for the user collection and item resources.
pub struct RestStore {
    client: Client,
    base_url: String,
}

impl RestStore {
    /// Build a store for the given backend base URL.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, StoreError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| StoreError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn collection_url(&self) -> String {
        format!("{}{}", self.base_url, USERS_PATH)
    }

    fn item_url(&self, id: UserId) -> String {
        format!("{}{}/{}", self.base_url, USERS_PATH, id)
    }
}

#[async_trait]
impl UserStore for RestStore {
    async fn list(&self) -> Result<Vec<User>, StoreError> {
        let response = self
            .client
            .get(self.collection_url())
            .send()
            .await
            .map_err(|e| StoreError::Transport(e.to_string()))?;

        // The body is decoded without a prior status check; an error page
        // that is not a JSON array surfaces as a decode failure.
        response
            .json::<Vec<User>>()
            .await
            .map_err(|e| StoreError::Decode(e.to_string()))
    }

    async fn create(&self, payload: &UserPayload) -> Result<(), StoreError> {
        let response = self
            .client
            .post(self.collection_url())
            .json(payload)
            .send()
            .await
            .map_err(|e| StoreError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(StoreError::Status {
                status: response.status().as_u16(),
            });
        }

        Ok(())
    }

    async fn update(&self, id: UserId, payload: &UserPayload) -> Result<(), StoreError> {
        let response = self
            .client
            .put(self.item_url(id))
            .json(payload)
            .send()
            .await
            .map_err(|e| StoreError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(StoreError::Status {
                status: response.status().as_u16(),
            });
        }

        Ok(())
    }

    async fn delete(&self, id: UserId) -> Result<u16, StoreError> {
        let response = self
            .client
            .delete(self.item_url(id))
            .send()
            .await
            .map_err(|e| StoreError::Transport(e.to_string()))?;

        Ok(response.status().as_u16())
    }
}
