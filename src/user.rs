//! Account and subscription information.

use crate::transport::{HttpTransport, RequestSpec};
use crate::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subscription {
    pub tier: String,
    pub character_count: u64,
    pub character_limit: u64,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub next_character_count_reset_unix: Option<i64>,
    #[serde(default)]
    pub voice_limit: Option<u32>,
    #[serde(default)]
    pub can_use_instant_voice_cloning: bool,
}

impl Subscription {
    pub fn remaining_characters(&self) -> u64 {
        self.character_limit.saturating_sub(self.character_count)
    }
}

/// `/v1/user`.
pub struct User<'a> {
    transport: &'a HttpTransport,
}

impl<'a> User<'a> {
    pub(crate) fn new(transport: &'a HttpTransport) -> Self {
        Self { transport }
    }

    pub async fn get(&self) -> Result<Value> {
        self.transport
            .execute(RequestSpec::get(&["v1", "user"]))
            .await?
            .into_json()
    }

    pub async fn subscription(&self) -> Result<Subscription> {
        self.transport
            .execute_json(RequestSpec::get(&["v1", "user", "subscription"]))
            .await
    }
}
