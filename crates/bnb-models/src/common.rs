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

//! Paging metadata returned by list endpoints

use serde::{Deserialize, Serialize};

/// Cursor and offset information of a list response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Paging {
  pub total_count: Option<i64>,
  pub limit: Option<i64>,
  pub prev_offset: Option<i64>,
  pub next_offset: Option<i64>,
  pub next_cursor: Option<String>,
}

impl Paging {
  /// Whether the server reported another page after this one
  pub fn has_next(&self) -> bool {
    self.next_cursor.as_deref().is_some_and(|cursor| !cursor.is_empty()) || self.next_offset.is_some()
  }
}

/// One page of entities plus its paging metadata
#[derive(Debug, Clone)]
pub struct Page<T> {
  pub items: Vec<T>,
  pub paging: Paging,
}

pub type ListingPage = Page<crate::Listing>;
pub type ReservationPage = Page<crate::Reservation>;

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn test_paging_tolerates_missing_keys() {
    let paging: Paging = serde_json::from_value(json!({ "total_count": 3, "limit": 20 })).unwrap();
    assert_eq!(paging.total_count, Some(3));
    assert_eq!(paging.next_cursor, None);
    assert!(!paging.has_next());
  }

  #[test]
  fn test_paging_next_cursor() {
    let paging: Paging = serde_json::from_value(json!({
      "total_count": 45,
      "limit": 20,
      "prev_offset": null,
      "next_offset": 20,
      "next_cursor": "eyJvZmZzZXQiOjIwfQ"
    }))
    .unwrap();
    assert!(paging.has_next());
    assert_eq!(paging.prev_offset, None);
  }
}
