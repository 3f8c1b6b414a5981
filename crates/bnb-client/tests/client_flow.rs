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


//! End-to-end flows through the public client API against a mock server

use bnb_client::{
  AcceptOrDenyPendingReservationRequestParameters, BnbClient, Config, Entity, Error, Listing, Message,
  RetrieveAllReservationsParameters,
};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TOKEN: &str = "host-token";

async fn client_for(server: &MockServer) -> BnbClient {
  let config = Config::with_credentials("app-id", "app-secret").with_base_url(format!("{}/v2", server.uri()));
  BnbClient::new(config).expect("valid test config")
}

#[tokio::test]
async fn listing_round_trip() {
  let server = MockServer::start().await;
  Mock::given(method("POST"))
    .and(path("/v2/listings/"))
    .and(header("X-Airbnb-API-Key", "app-id"))
    .and(header("X-Airbnb-Oauth-Token", TOKEN))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({
      "listing": { "id": 501, "name": "Loft", "city": "Lisbon", "synchronization_category": "sync_all" }
    })))
    .expect(1)
    .mount(&server)
    .await;
  Mock::given(method("DELETE"))
    .and(path("/v2/listings/501"))
    .respond_with(ResponseTemplate::new(204))
    .expect(1)
    .mount(&server)
    .await;

  let client = client_for(&server).await;
  let mut listing = Listing::new("Loft", Some("PT".to_string()), Some("Lisbon".to_string()), None, None, Some(95));
  client.listings().create_listing(&mut listing, TOKEN).await.unwrap();

  assert_eq!(listing.id(), Some(501));
  assert_eq!(listing.synchronization_category(), Some("sync_all"));
  assert!(!listing.export_payload(true).contains_key("id"));

  client.listings().delete_listing(501, TOKEN).await.unwrap();
}

#[tokio::test]
async fn pending_reservation_is_accepted() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path("/v2/reservations/"))
    .and(query_param("host_id", "77"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({
      "reservations": [{ "confirmation_code": "HMABC", "status_type": "pending" }],
      "paging": { "total_count": 1, "limit": 20 }
    })))
    .mount(&server)
    .await;
  Mock::given(method("PUT"))
    .and(path("/v2/reservations/HMABC"))
    .and(body_json(json!({ "attempt_action": "accept" })))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({
      "reservation": { "confirmation_code": "HMABC", "status_type": "accept" }
    })))
    .expect(1)
    .mount(&server)
    .await;

  let client = client_for(&server).await;
  let page = client.reservations().retrieve_all(&RetrieveAllReservationsParameters::new(77), TOKEN).await.unwrap();
  assert!(!page.paging.has_next());

  let code = page.items[0].confirmation_code().unwrap().to_string();
  let accepted = client
    .reservations()
    .accept_or_deny_pending_request(&code, &AcceptOrDenyPendingReservationRequestParameters::accept(), TOKEN)
    .await
    .unwrap();
  assert_eq!(accepted.status_type(), Some("accept"));
}

#[tokio::test]
async fn reply_in_thread() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path("/v2/threads/"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({
      "threads": [{ "id": 9001, "messages": [{ "id_str": "1", "message": "Is parking free?", "user_id": 34 }] }]
    })))
    .mount(&server)
    .await;
  Mock::given(method("POST"))
    .and(path("/v2/messages/"))
    .and(body_json(json!({ "thread_id": "9001", "message": "Yes, in the garage." })))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({
      "message": { "id_str": "2", "message": "Yes, in the garage.", "user_id": 12 }
    })))
    .expect(1)
    .mount(&server)
    .await;

  let client = client_for(&server).await;
  let threads = client.threads().get_all_threads(TOKEN).await.unwrap();
  let thread = &threads[0];
  assert_eq!(thread.messages().count(), 1);

  let mut reply = Message::new(thread.id_str().unwrap());
  reply.set_message("Yes, in the garage.");
  let sent = client.messages().send_message(&reply, TOKEN).await.unwrap();
  assert_eq!(sent.id_str(), Some("2"));
}

#[tokio::test]
async fn api_errors_surface_status_and_message() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path("/v2/listings/404"))
    .respond_with(ResponseTemplate::new(404).set_body_json(json!({ "error_message": "Listing not found" })))
    .mount(&server)
    .await;

  let client = client_for(&server).await;
  match client.listings().get_listing(404, TOKEN).await {
    Err(Error::Api { status, message }) => {
      assert_eq!(status, 404);
      assert_eq!(message, "Listing not found");
    }
    other => panic!("unexpected result: {other:?}"),
  }
}
