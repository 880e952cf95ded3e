use super::*;
use pretty_assertions::assert_eq;

#[test]
fn open_then_close_round_trips() {
    let mut state = state();
    assert_eq!(state.interaction.overlay, DashOverlay::None);

    let effects = reduce(&mut state, DashAction::User(UserAction::OpenAgentModal));
    assert!(matches!(effects.as_slice(), [DashEffect::RequestFrame]));
    assert_eq!(state.interaction.overlay, DashOverlay::AgentModal);

    let effects = reduce(&mut state, DashAction::User(UserAction::CloseModal));
    assert!(matches!(effects.as_slice(), [DashEffect::RequestFrame]));
    assert_eq!(state.interaction.overlay, DashOverlay::None);
}

#[test]
fn cancel_dismisses_like_close() {
    let mut state = state();
    reduce(&mut state, DashAction::User(UserAction::OpenAgentModal));
    reduce(&mut state, DashAction::User(UserAction::CancelModal));
    assert_eq!(state.interaction.overlay, DashOverlay::None);
}

#[test]
fn clicks_inside_the_dialog_keep_it_open() {
    let mut state = state();
    reduce(&mut state, DashAction::User(UserAction::OpenAgentModal));

    let effects = reduce(&mut state, DashAction::User(UserAction::ModalBodyClick));
    assert!(effects.is_empty());
    assert_eq!(state.interaction.overlay, DashOverlay::AgentModal);
}

#[test]
fn backdrop_clicks_dismiss_only_an_open_dialog() {
    let mut state = state();
    let effects = reduce(&mut state, DashAction::User(UserAction::ModalBackdropClick));
    assert!(effects.is_empty());

    reduce(&mut state, DashAction::User(UserAction::OpenAgentModal));
    let effects = reduce(&mut state, DashAction::User(UserAction::ModalBackdropClick));
    assert!(matches!(effects.as_slice(), [DashEffect::RequestFrame]));
    assert_eq!(state.interaction.overlay, DashOverlay::None);
}

#[test]
fn close_without_an_open_dialog_is_a_no_op() {
    let mut state = state();
    let effects = reduce(&mut state, DashAction::User(UserAction::CloseModal));
    assert!(effects.is_empty());
}

#[test]
fn opening_the_dialog_is_logged() {
    let mut state = state();
    reduce(&mut state, DashAction::User(UserAction::OpenAgentModal));

    let last = state.logs.iter().last().unwrap();
    assert_eq!(last.level, LogLevel::Info);
    assert_eq!(last.message, "add agent dialog opened");
}
