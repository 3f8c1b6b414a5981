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

//! OAuth2 authorization endpoints.
//!
//! These calls authenticate with the application credentials only; the
//! user token travels in the path or body instead of the OAuth header.
//! Responses are requested unwrapped, so grants arrive as the whole body.

use super::{impl_endpoint_base, decode_from, EndpointBase};
use crate::transport::{Query, Transport, OAUTH_AUTHORIZATIONS_PATH};
use bnb_core::Result;
use bnb_models::{TokenGrant, TokenRevocation, TokenStatus};
use serde_json::json;
use std::sync::Arc;
use tracing::{info, instrument};

const ENDPOINT: &str = OAUTH_AUTHORIZATIONS_PATH;

fn unwrapped() -> Query {
  vec![("_unwrapped".to_string(), "1".to_string())]
}

/// Authorization code exchange and token lifecycle
pub struct AuthEndpoints {
  transport: Arc<Transport>,
}

impl AuthEndpoints {
  /// Create a new auth endpoints instance
  pub fn new(transport: Arc<Transport>) -> Self {
    Self { transport }
  }

  /// Exchange the code from the OAuth redirect for access and refresh tokens
  #[instrument(skip_all)]
  pub async fn exchange_code_for_tokens(&self, code: &str) -> Result<TokenGrant> {
    let body = self.transport().post(ENDPOINT, None, &unwrapped(), &json!({ "code": code })).await?;
    let grant: TokenGrant = serde_json::from_value(body)?;
    info!(user_id = grant.user_id, "authorization code exchanged");
    Ok(grant)
  }

  /// Check whether an access token is still valid
  #[instrument(skip_all)]
  pub async fn check_token_status(&self, access_token: &str) -> Result<TokenStatus> {
    let path = format!("{}{}", ENDPOINT, access_token);
    let body = self.transport().get(&path, None, &unwrapped()).await?;
    decode_from(body, "oauth2_authorization")
  }

  /// Get a new access token from a refresh token
  ///
  /// # Arguments
  ///
  /// * `reset_refresh_token` - Also issue a new refresh token, invalidating the old one
  #[instrument(skip(self, refresh_token))]
  pub async fn refresh_token(&self, refresh_token: &str, reset_refresh_token: bool) -> Result<TokenGrant> {
    let request = json!({
      "refresh_token": refresh_token,
      "reset_refresh_token": u8::from(reset_refresh_token),
    });
    let body = self.transport().post(ENDPOINT, None, &unwrapped(), &request).await?;
    Ok(serde_json::from_value(body)?)
  }

  /// Revoke a token
  #[instrument(skip_all)]
  pub async fn revoke_token(&self, token: &str) -> Result<TokenRevocation> {
    let path = format!("{}{}", ENDPOINT, token);
    let body = self.transport().delete(&path, None, &unwrapped()).await?;
    if body.is_null() {
      return Ok(TokenRevocation::default());
    }
    Ok(serde_json::from_value(body)?)
  }
}

impl_endpoint_base!(AuthEndpoints);
