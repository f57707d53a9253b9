//! Steps that arrange the fake activities service and inspect what it received

use activity_board::Activity;
use cucumber::{given, then};

use crate::world::BoardWorld;

#[given(expr = "the service offers {string} on {string} with room for {int}")]
fn service_offers(world: &mut BoardWorld, name: String, schedule: String, max: u32) {
    let activity = Activity {
        description: format!("{} for Mergington students", name),
        schedule,
        max_participants: max,
        participants: Vec::new(),
        current_participants: None,
        available_spots: None,
    };
    world
        .service_state
        .lock()
        .unwrap()
        .activities
        .push((name, activity));
}

#[given(expr = "{string} is signed up for {string}")]
fn already_signed_up(world: &mut BoardWorld, email: String, name: String) {
    let mut state = world.service_state.lock().unwrap();
    let activity = state
        .activity_mut(&name)
        .unwrap_or_else(|| panic!("unknown activity {:?}", name));
    activity.participants.push(email);
}

#[given(expr = "the service reports {int} current participants for {string}")]
fn reports_current(world: &mut BoardWorld, count: u32, name: String) {
    let mut state = world.service_state.lock().unwrap();
    let activity = state
        .activity_mut(&name)
        .unwrap_or_else(|| panic!("unknown activity {:?}", name));
    activity.current_participants = Some(count);
}

#[given("the activity listing returns an HTML page")]
fn listing_returns_html(world: &mut BoardWorld) {
    world.service_state.lock().unwrap().html_listing = true;
}

#[given("the service is unreachable")]
fn service_unreachable(world: &mut BoardWorld) {
    world.unreachable = true;
}

#[then(expr = "the service received {int} sign-up request(s)")]
fn signup_request_count(world: &mut BoardWorld, expected: usize) {
    let requests = world.service_state.lock().unwrap().requests_for("POST");
    assert_eq!(requests.len(), expected, "sign-up requests: {:?}", requests);
}

#[then(expr = "the service received {int} unregister request(s)")]
fn unregister_request_count(world: &mut BoardWorld, expected: usize) {
    let requests = world.service_state.lock().unwrap().requests_for("DELETE");
    assert_eq!(requests.len(), expected, "unregister requests: {:?}", requests);
}

#[then(expr = "the activity list was fetched {int} time(s)")]
fn listing_fetch_count(world: &mut BoardWorld, expected: usize) {
    let requests = world.service_state.lock().unwrap().requests_for("GET");
    assert_eq!(requests.len(), expected, "listing requests: {:?}", requests);
}

#[then(expr = "the last sign-up request went to {string}")]
fn last_signup_uri(world: &mut BoardWorld, expected: String) {
    let requests = world.service_state.lock().unwrap().requests_for("POST");
    let last = requests.last().expect("no sign-up request received");
    assert_eq!(last.uri, expected);
}

#[then(expr = "the last unregister request went to {string}")]
fn last_unregister_uri(world: &mut BoardWorld, expected: String) {
    let requests = world.service_state.lock().unwrap().requests_for("DELETE");
    let last = requests.last().expect("no unregister request received");
    assert_eq!(last.uri, expected);
}
