//! Offset pagination for list endpoints.

use serde::{Deserialize, Deserializer, Serialize};

/// Largest page a caller may request.
pub const MAX_LIMIT: u64 = 100;

/// Largest offset a store can bind as a signed 64-bit integer.
pub const MAX_OFFSET: u64 = i64::MAX as u64;

/// Offset/limit window shared by list endpoints.
///
/// - `limit`: clamped to 1–100, default 5; any integer is accepted
/// - `offset`: ≥ 0, default 0; capped at [`MAX_OFFSET`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    #[serde(default = "default_limit", deserialize_with = "signed_limit")]
    pub limit: u64,
    #[serde(default)]
    pub offset: u64,
}

fn default_limit() -> u64 {
    5
}

// Negative limits fall below the range and clamp like zero.
fn signed_limit<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    let raw = i64::deserialize(deserializer)?;
    Ok(u64::try_from(raw).unwrap_or(0))
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            limit: default_limit(),
            offset: 0,
        }
    }
}

impl PageRequest {
    /// Clamp `limit` to 1–100 and cap `offset` at [`MAX_OFFSET`].
    ///
    /// Call after deserializing from query params to enforce bounds.
    pub fn clamped(self) -> Self {
        Self {
            limit: self.limit.clamp(1, MAX_LIMIT),
            offset: self.offset.min(MAX_OFFSET),
        }
    }
}
