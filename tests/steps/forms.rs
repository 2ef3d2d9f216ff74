//! Step definitions for driving the forms and checking what is shown

use crate::common::world::AuthPanelWorld;
use authpanel::cmd_args::ScreenKind;
use authpanel::models::{FieldId, FormMode, ToggleState};
use authpanel::InputEvent;
use cucumber::{given, then, when};

fn field_id(name: &str) -> FieldId {
    match name {
        "username" => FieldId::Username,
        "password" => FieldId::Password,
        "confirm password" => FieldId::ConfirmPassword,
        other => panic!("unknown field '{other}'"),
    }
}

fn form_mode(name: &str) -> FormMode {
    match name {
        "sign-in" => FormMode::SignIn,
        "sign-up" => FormMode::SignUp,
        other => panic!("unknown form '{other}'"),
    }
}

// === SETUP ===

#[given(regex = r"^the (panel|registration) screen is open$")]
async fn given_screen_open(world: &mut AuthPanelWorld, screen: String) {
    let kind = match screen.as_str() {
        "registration" => ScreenKind::Registration,
        _ => ScreenKind::Panel,
    };
    world.open(kind).expect("Failed to open screen");
}

#[given("the sign-up form is active")]
async fn given_sign_up_active(world: &mut AuthPanelWorld) {
    world.send(InputEvent::Toggle).expect("Failed to toggle");
    world.settle().await.expect("Slide did not finish");
}

// === INPUT ===

#[when(regex = r#"^I type "(.*)" into the (username|password|confirm password) field$"#)]
async fn when_type_into(world: &mut AuthPanelWorld, text: String, field: String) {
    world
        .type_into(field_id(&field), &text)
        .expect("Failed to type");
}

#[when("I press submit")]
async fn when_press_submit(world: &mut AuthPanelWorld) {
    world.send(InputEvent::Submit).expect("Failed to submit");
}

#[when("I press the panel button")]
async fn when_press_toggle(world: &mut AuthPanelWorld) {
    world.send(InputEvent::Toggle).expect("Failed to toggle");
}

#[when("I press escape")]
async fn when_press_escape(world: &mut AuthPanelWorld) {
    world.send(InputEvent::Cancel).expect("Failed to cancel");
}

#[when("the screen settles")]
async fn when_screen_settles(world: &mut AuthPanelWorld) {
    world.settle().await.expect("Screen did not settle");
}

// === CHECKS ===

#[then(regex = r#"^the message "(.*)" is shown$"#)]
async fn then_message_shown(world: &mut AuthPanelWorld, expected: String) {
    assert_eq!(world.shown_message().as_deref(), Some(expected.as_str()));
    assert!(
        world.app().surface().frame_contains(&expected),
        "message not drawn: {:?}",
        world.app().surface().frame_texts()
    );
}

#[then("no message is shown")]
async fn then_no_message(world: &mut AuthPanelWorld) {
    assert_eq!(world.shown_message(), None);
}

#[then(regex = r"^the (sign-in|sign-up) form is active$")]
async fn then_form_active(world: &mut AuthPanelWorld, form: String) {
    let panel = world.app().screen().panel().expect("panel screen not open");
    let expected = match form_mode(&form) {
        FormMode::SignIn => ToggleState::SignInActive,
        FormMode::SignUp => ToggleState::SignUpActive,
    };
    assert_eq!(panel.state().toggle(), expected);
}

#[then(regex = r#"^the (sign-in|sign-up) (username|password|confirm password) field holds "(.*)"$"#)]
async fn then_field_holds(world: &mut AuthPanelWorld, form: String, field: String, expected: String) {
    assert_eq!(
        world.field_value(form_mode(&form), field_id(&field)).as_deref(),
        Some(expected.as_str())
    );
}

#[then(regex = r"^the (sign-in|sign-up) fields are empty$")]
async fn then_fields_empty(world: &mut AuthPanelWorld, form: String) {
    let mode = form_mode(&form);
    let panel = world.app().screen().panel().expect("panel screen not open");
    assert!(panel.state().fields(mode).is_empty());
}

#[then("the registration fields are empty")]
async fn then_registration_empty(world: &mut AuthPanelWorld) {
    let registration = world
        .app()
        .screen()
        .registration()
        .expect("registration screen not open");
    assert!(registration.state().fields().is_empty());
}

#[then(regex = r#"^"(.*)" is not drawn on screen$"#)]
async fn then_not_drawn(world: &mut AuthPanelWorld, text: String) {
    assert!(!world.app().surface().frame_contains(&text));
}
