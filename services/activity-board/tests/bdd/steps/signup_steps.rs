//! BDD step definitions for signing up and unregistering

use activity_board::{BoardError, NoticeKind};
use cucumber::{then, when};

use crate::world::BoardWorld;

#[when(expr = "the student signs up for {string} as {string}")]
async fn sign_up(world: &mut BoardWorld, name: String, email: String) {
    let board = world.board().await;
    world.surface.type_email(&email);
    world.last_result = Some(board.sign_up(&name).await);
}

#[when(expr = "the student unregisters {string} from {string}")]
async fn unregister(world: &mut BoardWorld, email: String, name: String) {
    let board = world.board().await;
    world.last_result = Some(board.unregister(&name, &email).await);
}

#[then(expr = "the student sees a confirmation {string}")]
fn sees_confirmation(world: &mut BoardWorld, message: String) {
    let notice = world.surface.last_notice().expect("no notice shown");
    assert_eq!(notice.kind, NoticeKind::Success);
    assert_eq!(notice.message, message);
    assert!(matches!(world.last_result, Some(Ok(_))));
}

#[then(expr = "the student sees an error {string}")]
fn sees_error(world: &mut BoardWorld, message: String) {
    let notice = world.surface.last_notice().expect("no notice shown");
    assert_eq!(notice.kind, NoticeKind::Error);
    assert_eq!(notice.message, message);
    assert!(matches!(world.last_result, Some(Err(_))));
}

#[then("the email was refused before sending")]
fn refused_locally(world: &mut BoardWorld) {
    assert!(
        matches!(world.last_result, Some(Err(BoardError::InvalidEmail(_)))),
        "{:?}",
        world.last_result
    );
}

#[then(expr = "the student was notified {int} time(s)")]
fn notice_count(world: &mut BoardWorld, expected: usize) {
    assert_eq!(world.surface.notice_count(), expected);
}
