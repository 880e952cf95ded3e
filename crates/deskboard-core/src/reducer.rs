#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashEffect {
    RequestFrame,
    PersistTheme(ThemePref),
    RethemeCharts(ThemePref),
    OpenExternal(Arc<str>),
}

use std::sync::Arc;

use super::actions::DashAction;
use super::actions::RuntimeAction;
use super::actions::UserAction;
use super::counter::animated_text;
use super::counter::final_text;
use super::counter::progress;
use super::state::nav_menu;
use super::state::Activation;
use super::state::CounterPhase;
use super::state::DashOverlay;
use super::state::DashState;
use super::state::LogEntry;
use super::state::LogLevel;
use super::state::LogSource;
use super::state::NavTarget;
use super::state::ThemePref;
use super::state::COUNTER_VISIBILITY_THRESHOLD;

pub fn reduce(state: &mut DashState, action: DashAction) -> Vec<DashEffect> {
    match action {
        DashAction::User(user) => reduce_user(state, user),
        DashAction::Runtime(runtime) => {
            reduce_runtime(state, runtime);
            Vec::new()
        }
    }
}

fn reduce_user(state: &mut DashState, action: UserAction) -> Vec<DashEffect> {
    match action {
        UserAction::SetTheme(theme) => set_theme(state, theme),
        UserAction::ToggleTheme => {
            let next = state.theme.next();
            set_theme(state, next)
        }
        UserAction::SelectTab(tab) => activate_tab_target(state, tab.mount_id()),
        UserAction::NextTab => {
            let next = state.active_tab().next();
            activate_tab_target(state, next.mount_id())
        }
        UserAction::PrevTab => {
            let prev = state.active_tab().prev();
            activate_tab_target(state, prev.mount_id())
        }
        UserAction::ActivateTabEntry { target } => activate_tab_target(state, &target),
        UserAction::SelectSubTab { parent, target } => {
            let Some(group) = state.panels.sub_group_mut(parent) else {
                return Vec::new();
            };
            match group.activate(&target) {
                Activation::Applied | Activation::Reconfirmed => {
                    vec![DashEffect::RequestFrame]
                }
                Activation::Passthrough(url) => {
                    let message = format!("opening {url}");
                    push_ui_log(state, LogLevel::Info, message);
                    vec![DashEffect::OpenExternal(url), DashEffect::RequestFrame]
                }
                Activation::Ignored => Vec::new(),
            }
        }
        UserAction::OpenNavMenu { menu } => {
            match state.panels.nav_menus.activate(&menu) {
                Activation::Applied | Activation::Reconfirmed => {
                    vec![DashEffect::RequestFrame]
                }
                Activation::Passthrough(_) | Activation::Ignored => Vec::new(),
            }
        }
        UserAction::ActivateNavItem { menu, index } => {
            let Some(item) = nav_menu(&menu).and_then(|def| def.items.get(index)) else {
                return Vec::new();
            };
            let target = item.target;
            state.panels.nav_menus.deactivate_all();
            match target {
                NavTarget::Tab(tab) => activate_tab_target(state, tab.mount_id()),
                NavTarget::External(url) => {
                    push_ui_log(state, LogLevel::Info, format!("opening {url}"));
                    vec![
                        DashEffect::OpenExternal(Arc::from(url)),
                        DashEffect::RequestFrame,
                    ]
                }
            }
        }
        UserAction::OutsideClick => {
            if state.panels.nav_menus.deactivate_all() {
                return vec![DashEffect::RequestFrame];
            }
            Vec::new()
        }
        UserAction::ToggleSidebar => {
            state.interaction.sidebar_open = !state.interaction.sidebar_open;
            vec![DashEffect::RequestFrame]
        }
        UserAction::CloseSidebar => {
            if state.interaction.sidebar_open {
                state.interaction.sidebar_open = false;
                return vec![DashEffect::RequestFrame];
            }
            Vec::new()
        }
        UserAction::ToggleFaqEntry { target } => match state.panels.faq.toggle(&target) {
            Activation::Applied => vec![DashEffect::RequestFrame],
            _ => Vec::new(),
        },
        UserAction::OpenAgentModal => {
            state.interaction.overlay = DashOverlay::AgentModal;
            push_ui_log(state, LogLevel::Info, "add agent dialog opened".to_string());
            vec![DashEffect::RequestFrame]
        }
        UserAction::CloseModal | UserAction::CancelModal => {
            if state.interaction.overlay == DashOverlay::AgentModal {
                state.interaction.overlay = DashOverlay::None;
                return vec![DashEffect::RequestFrame];
            }
            Vec::new()
        }
        UserAction::ModalBackdropClick => {
            if state.interaction.overlay == DashOverlay::AgentModal {
                state.interaction.overlay = DashOverlay::None;
                return vec![DashEffect::RequestFrame];
            }
            Vec::new()
        }
        UserAction::ModalBodyClick => Vec::new(),
    }
}

fn reduce_runtime(state: &mut DashState, action: RuntimeAction) {
    match action {
        RuntimeAction::SetTheme(theme) => {
            state.theme = theme;
        }
        RuntimeAction::Resize { cols } => {
            state.runtime_flags.viewport_cols = cols;
            state.runtime_flags.narrow_viewport = cols <= state.tuning.narrow_width_cols;
        }
        RuntimeAction::CounterVisible { id, ratio, now_ms } => {
            if let Some(counter) = state.counter_mut(&id) {
                if counter.phase == CounterPhase::Pending
                    && counter.target.is_some()
                    && ratio >= COUNTER_VISIBILITY_THRESHOLD
                {
                    counter.phase = CounterPhase::Running { started_ms: now_ms };
                }
            }
        }
        RuntimeAction::Frame { now_ms } => {
            let duration = state.tuning.counter_duration_ms;
            for counter in &mut state.counters {
                let CounterPhase::Running { started_ms } = counter.phase else {
                    continue;
                };
                let Some(target) = &counter.target else {
                    continue;
                };
                let p = progress(started_ms, now_ms, duration);
                if p >= 1.0 {
                    counter.rendered = final_text(target);
                    counter.phase = CounterPhase::Done;
                } else {
                    counter.rendered = animated_text(target, p);
                }
            }
        }
        RuntimeAction::AppendStructuredLog(entry) => {
            state.logs.append(entry);
        }
    }
}

/// Apply a theme and fan the change out: persist it, restyle every mounted
/// chart, redraw. Series data is untouched by a retheme.
fn set_theme(state: &mut DashState, theme: ThemePref) -> Vec<DashEffect> {
    state.theme = theme;
    let message = format!("theme set to {}", theme.label());
    push_ui_log(state, LogLevel::Info, message);
    vec![
        DashEffect::PersistTheme(theme),
        DashEffect::RethemeCharts(theme),
        DashEffect::RequestFrame,
    ]
}

fn activate_tab_target(state: &mut DashState, target: &str) -> Vec<DashEffect> {
    match state.panels.tabs.activate(target) {
        Activation::Applied => {
            close_sidebar_if_narrow(state);
            let label = state.active_tab().label();
            push_ui_log(state, LogLevel::Info, format!("switched to {label}"));
            vec![DashEffect::RequestFrame]
        }
        Activation::Reconfirmed => {
            close_sidebar_if_narrow(state);
            vec![DashEffect::RequestFrame]
        }
        Activation::Passthrough(url) => {
            let message = format!("opening {url}");
            push_ui_log(state, LogLevel::Info, message);
            vec![DashEffect::OpenExternal(url), DashEffect::RequestFrame]
        }
        Activation::Ignored => Vec::new(),
    }
}

/// Narrow viewports collapse the sidebar whenever a tab entry is chosen,
/// including a re-click of the active one.
fn close_sidebar_if_narrow(state: &mut DashState) {
    if state.runtime_flags.narrow_viewport && state.interaction.sidebar_open {
        state.interaction.sidebar_open = false;
    }
}

fn push_ui_log(state: &mut DashState, level: LogLevel, message: String) {
    state.logs.append(LogEntry {
        seq: 0,
        level,
        ts_ms: None,
        source: LogSource::Ui,
        message,
    });
}

#[cfg(test)]
mod tests;
