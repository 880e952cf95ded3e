use pretty_assertions::assert_eq;

pub(super) use super::reduce;
pub(super) use crate::actions::DashAction;
pub(super) use crate::actions::RuntimeAction;
pub(super) use crate::actions::UserAction;
pub(super) use crate::reducer::DashEffect;
pub(super) use crate::state::Activation;
pub(super) use crate::state::CounterDef;
pub(super) use crate::state::CounterPhase;
pub(super) use crate::state::CounterState;
pub(super) use crate::state::DashOverlay;
pub(super) use crate::state::DashState;
pub(super) use crate::state::DashTab;
pub(super) use crate::state::DashTuning;
pub(super) use crate::state::LogEntry;
pub(super) use crate::state::LogLevel;
pub(super) use crate::state::LogSource;
pub(super) use crate::state::PanelGroup;
pub(super) use crate::state::PanelKind;
pub(super) use crate::state::ThemePref;
pub(super) use crate::state::FAQ_ENTRIES;
pub(super) use crate::state::SIDEBAR_LOGOUT_ID;
pub(super) use crate::state::SIDEBAR_LOGOUT_URL;

mod counter_flow;
mod invariants;
mod modal_overlay;
mod nav_dropdowns;
mod panel_exclusivity;

fn state() -> DashState {
    DashState::new(DashTuning::default())
}

fn run_runtime(state: &mut DashState, action: RuntimeAction) {
    let effects = reduce(state, DashAction::Runtime(action));
    assert!(effects.is_empty());
}

fn assert_group_invariants(state: &DashState) {
    assert_eq!(state.panels.tabs.active_count(), 1);
    assert!(state.panels.nav_menus.active_count() <= 1);
    assert!(state.panels.faq.active_count() <= 1);
    for (_, group) in &state.panels.sub_tabs {
        assert_eq!(group.active_count(), 1);
    }
}
