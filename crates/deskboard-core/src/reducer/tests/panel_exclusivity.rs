use super::*;
use pretty_assertions::assert_eq;

#[test]
fn selecting_a_tab_hides_the_previous_one() {
    let mut state = state();
    assert_eq!(state.active_tab(), DashTab::Overview);

    let effects = reduce(
        &mut state,
        DashAction::User(UserAction::SelectTab(DashTab::Tickets)),
    );
    assert!(matches!(effects.as_slice(), [DashEffect::RequestFrame]));

    assert_eq!(state.active_tab(), DashTab::Tickets);
    assert!(state.panels.tabs.is_active(DashTab::Tickets.mount_id()));
    assert!(!state.panels.tabs.is_active(DashTab::Overview.mount_id()));
    assert_group_invariants(&state);
}

#[test]
fn reselecting_the_active_tab_is_idempotent() {
    let mut state = state();
    reduce(
        &mut state,
        DashAction::User(UserAction::SelectTab(DashTab::Reports)),
    );
    let logs_before = state.logs.len();

    let effects = reduce(
        &mut state,
        DashAction::User(UserAction::SelectTab(DashTab::Reports)),
    );
    assert!(matches!(effects.as_slice(), [DashEffect::RequestFrame]));
    assert_eq!(state.active_tab(), DashTab::Reports);
    assert_eq!(state.logs.len(), logs_before);
}

#[test]
fn logout_entry_passes_through_without_switching() {
    let mut state = state();
    reduce(
        &mut state,
        DashAction::User(UserAction::SelectTab(DashTab::Agents)),
    );

    let effects = reduce(
        &mut state,
        DashAction::User(UserAction::ActivateTabEntry {
            target: SIDEBAR_LOGOUT_ID.to_string(),
        }),
    );

    match effects.as_slice() {
        [DashEffect::OpenExternal(url), DashEffect::RequestFrame] => {
            assert_eq!(url.as_ref(), SIDEBAR_LOGOUT_URL);
        }
        other => panic!("unexpected effects: {other:?}"),
    }
    assert_eq!(state.active_tab(), DashTab::Agents);
}

#[test]
fn unknown_tab_target_is_ignored() {
    let mut state = state();
    let effects = reduce(
        &mut state,
        DashAction::User(UserAction::ActivateTabEntry {
            target: "tab-unknown".to_string(),
        }),
    );
    assert!(effects.is_empty());
    assert_eq!(state.active_tab(), DashTab::Overview);
}

#[test]
fn sub_tab_selection_is_scoped_to_its_parent() {
    let mut state = state();
    reduce(
        &mut state,
        DashAction::User(UserAction::SelectSubTab {
            parent: DashTab::Tickets,
            target: "tickets-breakdown".to_string(),
        }),
    );

    let tickets = state.panels.sub_group(DashTab::Tickets).unwrap();
    assert!(tickets.is_active("tickets-breakdown"));
    let reports = state.panels.sub_group(DashTab::Reports).unwrap();
    assert!(reports.is_active("reports-trends"));
    assert_group_invariants(&state);
}

#[test]
fn sub_tab_target_from_another_parent_is_ignored() {
    let mut state = state();
    let effects = reduce(
        &mut state,
        DashAction::User(UserAction::SelectSubTab {
            parent: DashTab::Reports,
            target: "tickets-breakdown".to_string(),
        }),
    );
    assert!(effects.is_empty());
    let reports = state.panels.sub_group(DashTab::Reports).unwrap();
    assert!(reports.is_active("reports-trends"));
}

#[test]
fn tabs_without_sub_tabs_ignore_sub_tab_selection() {
    let mut state = state();
    let effects = reduce(
        &mut state,
        DashAction::User(UserAction::SelectSubTab {
            parent: DashTab::Overview,
            target: "tickets-volume".to_string(),
        }),
    );
    assert!(effects.is_empty());
}

#[test]
fn next_and_prev_cycle_through_every_tab() {
    let mut state = state();
    let mut seen = vec![state.active_tab()];
    for _ in 0..4 {
        reduce(&mut state, DashAction::User(UserAction::NextTab));
        seen.push(state.active_tab());
    }
    assert_eq!(
        seen,
        vec![
            DashTab::Overview,
            DashTab::Tickets,
            DashTab::Agents,
            DashTab::Reports,
            DashTab::Help,
        ]
    );

    reduce(&mut state, DashAction::User(UserAction::NextTab));
    assert_eq!(state.active_tab(), DashTab::Overview);
    reduce(&mut state, DashAction::User(UserAction::PrevTab));
    assert_eq!(state.active_tab(), DashTab::Help);
}
