use super::*;
use pretty_assertions::assert_eq;

#[test]
fn opening_a_menu_closes_the_others() {
    let mut state = state();
    reduce(
        &mut state,
        DashAction::User(UserAction::OpenNavMenu {
            menu: "menu-workspace".to_string(),
        }),
    );
    assert!(state.panels.nav_menus.is_active("menu-workspace"));

    reduce(
        &mut state,
        DashAction::User(UserAction::OpenNavMenu {
            menu: "menu-reports".to_string(),
        }),
    );
    assert!(state.panels.nav_menus.is_active("menu-reports"));
    assert!(!state.panels.nav_menus.is_active("menu-workspace"));
    assert_eq!(state.panels.nav_menus.active_count(), 1);
}

#[test]
fn reopening_the_open_menu_keeps_it_open() {
    let mut state = state();
    reduce(
        &mut state,
        DashAction::User(UserAction::OpenNavMenu {
            menu: "menu-resources".to_string(),
        }),
    );

    let effects = reduce(
        &mut state,
        DashAction::User(UserAction::OpenNavMenu {
            menu: "menu-resources".to_string(),
        }),
    );
    assert!(matches!(effects.as_slice(), [DashEffect::RequestFrame]));
    assert!(state.panels.nav_menus.is_active("menu-resources"));
}

#[test]
fn outside_clicks_close_every_menu() {
    let mut state = state();
    reduce(
        &mut state,
        DashAction::User(UserAction::OpenNavMenu {
            menu: "menu-workspace".to_string(),
        }),
    );

    let effects = reduce(&mut state, DashAction::User(UserAction::OutsideClick));
    assert!(matches!(effects.as_slice(), [DashEffect::RequestFrame]));
    assert_eq!(state.panels.nav_menus.active_count(), 0);

    let effects = reduce(&mut state, DashAction::User(UserAction::OutsideClick));
    assert!(effects.is_empty());
}

#[test]
fn menu_items_navigate_and_close_the_menu() {
    let mut state = state();
    reduce(
        &mut state,
        DashAction::User(UserAction::OpenNavMenu {
            menu: "menu-workspace".to_string(),
        }),
    );

    let effects = reduce(
        &mut state,
        DashAction::User(UserAction::ActivateNavItem {
            menu: "menu-workspace".to_string(),
            index: 1,
        }),
    );
    assert!(matches!(effects.as_slice(), [DashEffect::RequestFrame]));
    assert_eq!(state.active_tab(), DashTab::Tickets);
    assert_eq!(state.panels.nav_menus.active_count(), 0);
}

#[test]
fn external_menu_items_pass_through() {
    let mut state = state();
    reduce(
        &mut state,
        DashAction::User(UserAction::OpenNavMenu {
            menu: "menu-resources".to_string(),
        }),
    );

    let effects = reduce(
        &mut state,
        DashAction::User(UserAction::ActivateNavItem {
            menu: "menu-resources".to_string(),
            index: 0,
        }),
    );
    match effects.as_slice() {
        [DashEffect::OpenExternal(url), DashEffect::RequestFrame] => {
            assert_eq!(url.as_ref(), "https://docs.deskboard.app");
        }
        other => panic!("unexpected effects: {other:?}"),
    }
    assert_eq!(state.active_tab(), DashTab::Overview);
    assert_eq!(state.panels.nav_menus.active_count(), 0);
}

#[test]
fn out_of_range_menu_items_are_ignored() {
    let mut state = state();
    let effects = reduce(
        &mut state,
        DashAction::User(UserAction::ActivateNavItem {
            menu: "menu-workspace".to_string(),
            index: 9,
        }),
    );
    assert!(effects.is_empty());
}

#[test]
fn narrow_viewports_collapse_the_sidebar_on_tab_choice() {
    let mut state = state();
    run_runtime(&mut state, RuntimeAction::Resize { cols: 80 });
    assert!(state.runtime_flags.narrow_viewport);
    assert!(state.interaction.sidebar_open);

    reduce(
        &mut state,
        DashAction::User(UserAction::SelectTab(DashTab::Help)),
    );
    assert!(!state.interaction.sidebar_open);
}

#[test]
fn wide_viewports_keep_the_sidebar_open() {
    let mut state = state();
    run_runtime(&mut state, RuntimeAction::Resize { cols: 120 });
    reduce(
        &mut state,
        DashAction::User(UserAction::SelectTab(DashTab::Help)),
    );
    assert!(state.interaction.sidebar_open);
}

#[test]
fn reclicking_the_active_tab_still_collapses_a_narrow_sidebar() {
    let mut state = state();
    run_runtime(&mut state, RuntimeAction::Resize { cols: 96 });
    assert!(state.runtime_flags.narrow_viewport);

    reduce(
        &mut state,
        DashAction::User(UserAction::SelectTab(DashTab::Overview)),
    );
    assert!(!state.interaction.sidebar_open);
}

#[test]
fn sidebar_toggle_round_trips() {
    let mut state = state();
    reduce(&mut state, DashAction::User(UserAction::ToggleSidebar));
    assert!(!state.interaction.sidebar_open);
    reduce(&mut state, DashAction::User(UserAction::ToggleSidebar));
    assert!(state.interaction.sidebar_open);

    reduce(&mut state, DashAction::User(UserAction::CloseSidebar));
    assert!(!state.interaction.sidebar_open);
    let effects = reduce(&mut state, DashAction::User(UserAction::CloseSidebar));
    assert!(effects.is_empty());
}

#[test]
fn faq_entries_behave_as_an_accordion() {
    let mut state = state();
    let first = FAQ_ENTRIES[0].id;
    let second = FAQ_ENTRIES[1].id;

    reduce(
        &mut state,
        DashAction::User(UserAction::ToggleFaqEntry {
            target: first.to_string(),
        }),
    );
    assert!(state.panels.faq.is_active(first));

    reduce(
        &mut state,
        DashAction::User(UserAction::ToggleFaqEntry {
            target: second.to_string(),
        }),
    );
    assert!(state.panels.faq.is_active(second));
    assert_eq!(state.panels.faq.active_count(), 1);

    reduce(
        &mut state,
        DashAction::User(UserAction::ToggleFaqEntry {
            target: second.to_string(),
        }),
    );
    assert_eq!(state.panels.faq.active_count(), 0);
}
