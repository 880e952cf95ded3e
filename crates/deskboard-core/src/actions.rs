#![allow(dead_code)]

use super::state::DashTab;
use super::state::LogEntry;
use super::state::ThemePref;

#[derive(Debug, Clone)]
pub enum DashAction {
    User(UserAction),
    Runtime(RuntimeAction),
}

/// Intent originating from a person at the controls.
#[derive(Debug, Clone)]
pub enum UserAction {
    SetTheme(ThemePref),
    ToggleTheme,
    SelectTab(DashTab),
    NextTab,
    PrevTab,
    ActivateTabEntry {
        target: String,
    },
    SelectSubTab {
        parent: DashTab,
        target: String,
    },
    OpenNavMenu {
        menu: String,
    },
    ActivateNavItem {
        menu: String,
        index: usize,
    },
    OutsideClick,
    ToggleSidebar,
    CloseSidebar,
    ToggleFaqEntry {
        target: String,
    },
    OpenAgentModal,
    CloseModal,
    CancelModal,
    ModalBackdropClick,
    ModalBodyClick,
}

/// Facts reported by the surrounding runtime: restored preferences,
/// terminal geometry, clock ticks and visibility measurements.
#[derive(Debug, Clone)]
pub enum RuntimeAction {
    SetTheme(ThemePref),
    Resize {
        cols: u16,
    },
    CounterVisible {
        id: String,
        ratio: f64,
        now_ms: u64,
    },
    Frame {
        now_ms: u64,
    },
    AppendStructuredLog(LogEntry),
}
