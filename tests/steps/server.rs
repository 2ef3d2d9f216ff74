//! Step definitions for the mock authentication API

use crate::common::world::{AuthPanelWorld, SIGN_IN_PATH, SIGN_UP_PATH};
use cucumber::{given, then};

#[given("the auth server is running")]
async fn given_server_running(world: &mut AuthPanelWorld) {
    world.start_server().await;
}

#[given("the auth server is unreachable")]
async fn given_server_unreachable(world: &mut AuthPanelWorld) {
    world
        .use_unreachable_server()
        .expect("Failed to reserve an unused port");
}

#[given(regex = r"^the server answers (sign-in|sign-up) with status (\d+) and body '(.*)'$")]
async fn given_server_answers(world: &mut AuthPanelWorld, endpoint: String, status: u16, body: String) {
    let request_path = match endpoint.as_str() {
        "sign-in" => SIGN_IN_PATH,
        _ => SIGN_UP_PATH,
    };
    world
        .answer(request_path, status, &body)
        .await
        .expect("Failed to mount mock response");
}

#[then("no request reached the server")]
async fn then_no_request(world: &mut AuthPanelWorld) {
    assert_eq!(world.received_request_count().await, 0);
}

#[then(regex = r"^the server received (\d+) requests?$")]
async fn then_request_count(world: &mut AuthPanelWorld, count: usize) {
    assert_eq!(world.received_request_count().await, count);
}
