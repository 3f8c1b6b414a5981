/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-at-]dwightjbrowne[-dot-]com
 *
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

//! OAuth2 authorization responses

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Tokens issued when exchanging an authorization code or refreshing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenGrant {
  pub access_token: String,
  #[serde(default)]
  pub expires_at: Option<i64>,
  #[serde(default)]
  pub refresh_token: Option<String>,
  #[serde(default)]
  pub user_id: Option<i64>,
  /// Any other keys of the grant
  #[serde(flatten)]
  pub extra: Map<String, Value>,
}

impl TokenGrant {
  /// Expiry of the access token, when the server sent one
  pub fn expires_at_utc(&self) -> Option<DateTime<Utc>> {
    self.expires_at.and_then(|secs| DateTime::from_timestamp(secs, 0))
  }

  pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
    self.expires_at_utc().is_some_and(|expiry| expiry <= now)
  }
}

/// Result of checking an access token
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenStatus {
  pub valid: bool,
  pub user_id: Option<i64>,
  #[serde(flatten)]
  pub extra: Map<String, Value>,
}

/// Result of revoking a token
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenRevocation {
  pub valid: Option<bool>,
  pub user_id: Option<i64>,
  #[serde(flatten)]
  pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn test_grant_parses_and_keeps_extra_keys() {
    let grant: TokenGrant = serde_json::from_value(json!({
      "access_token": "abc",
      "expires_at": 1_700_000_000,
      "refresh_token": "def",
      "user_id": 42,
      "scope": "vr"
    }))
    .unwrap();

    assert_eq!(grant.access_token, "abc");
    assert_eq!(grant.user_id, Some(42));
    assert_eq!(grant.extra.get("scope"), Some(&json!("vr")));
    assert_eq!(grant.expires_at_utc().unwrap().timestamp(), 1_700_000_000);
  }

  #[test]
  fn test_grant_expiry() {
    let grant: TokenGrant = serde_json::from_value(json!({ "access_token": "abc", "expires_at": 100 })).unwrap();
    let now = DateTime::from_timestamp(200, 0).unwrap();
    assert!(grant.is_expired_at(now));

    let open: TokenGrant = serde_json::from_value(json!({ "access_token": "abc" })).unwrap();
    assert!(!open.is_expired_at(now));
  }

  #[test]
  fn test_status_defaults_to_invalid() {
    let status: TokenStatus = serde_json::from_value(json!({})).unwrap();
    assert!(!status.valid);
  }
}
