use super::*;
use pretty_assertions::assert_eq;

#[test]
fn mixed_interaction_storms_preserve_group_invariants() {
    let mut state = state();
    let script = vec![
        DashAction::User(UserAction::OpenNavMenu {
            menu: "menu-workspace".to_string(),
        }),
        DashAction::User(UserAction::SelectTab(DashTab::Tickets)),
        DashAction::User(UserAction::SelectSubTab {
            parent: DashTab::Tickets,
            target: "tickets-breakdown".to_string(),
        }),
        DashAction::Runtime(RuntimeAction::Resize { cols: 80 }),
        DashAction::User(UserAction::NextTab),
        DashAction::User(UserAction::OpenNavMenu {
            menu: "menu-reports".to_string(),
        }),
        DashAction::User(UserAction::OutsideClick),
        DashAction::User(UserAction::ToggleTheme),
        DashAction::User(UserAction::OpenAgentModal),
        DashAction::User(UserAction::ModalBackdropClick),
        DashAction::User(UserAction::ActivateTabEntry {
            target: SIDEBAR_LOGOUT_ID.to_string(),
        }),
        DashAction::User(UserAction::PrevTab),
        DashAction::User(UserAction::ToggleFaqEntry {
            target: "faq-sla".to_string(),
        }),
        DashAction::User(UserAction::SelectTab(DashTab::Reports)),
        DashAction::User(UserAction::SelectSubTab {
            parent: DashTab::Reports,
            target: "reports-quality".to_string(),
        }),
        DashAction::Runtime(RuntimeAction::Frame { now_ms: 1_000 }),
        DashAction::User(UserAction::OutsideClick),
    ];

    for action in script {
        reduce(&mut state, action);
        assert_group_invariants(&state);
    }
}

#[test]
fn empty_groups_ignore_every_request() {
    let mut group = PanelGroup::new(PanelKind::ZeroAllowed, Vec::new(), None);
    assert_eq!(group.activate("menu-workspace"), Activation::Ignored);
    assert_eq!(group.toggle("menu-workspace"), Activation::Ignored);
    assert!(!group.deactivate_all());
    assert_eq!(group.active_count(), 0);
}

#[test]
fn tab_group_never_drops_to_zero_active() {
    let mut state = state();
    for _ in 0..12 {
        reduce(&mut state, DashAction::User(UserAction::NextTab));
        assert_eq!(state.panels.tabs.active_count(), 1);
    }
    reduce(&mut state, DashAction::User(UserAction::OutsideClick));
    assert_eq!(state.panels.tabs.active_count(), 1);
}

#[test]
fn structured_log_appends_do_not_disturb_routing() {
    let mut state = state();
    reduce(
        &mut state,
        DashAction::User(UserAction::SelectTab(DashTab::Agents)),
    );
    run_runtime(
        &mut state,
        RuntimeAction::AppendStructuredLog(LogEntry {
            seq: 0,
            level: LogLevel::Warn,
            ts_ms: Some(1_724_000_000_000),
            source: LogSource::Storage,
            message: "settings write failed".to_string(),
        }),
    );

    assert_eq!(state.active_tab(), DashTab::Agents);
    let last = state.logs.iter().last().unwrap();
    assert!(last.seq > 0);
    assert_eq!(last.source, LogSource::Storage);
}
