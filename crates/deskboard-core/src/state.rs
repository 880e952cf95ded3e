#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Arc;

use crate::charts::ChartId;
use crate::counter::parse_target;
use crate::counter::CounterTarget;

/// Storage key for the persisted preference.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Column width at or below which the console counts as a narrow viewport.
/// Mirrors the original 768-logical-px breakpoint at 8 px per column.
pub const NARROW_VIEWPORT_COLS: u16 = 96;

/// Fraction of a counter that must be visible before its animation starts.
pub const COUNTER_VISIBILITY_THRESHOLD: f64 = 0.5;

/// Duration of a counter animation.
pub const COUNTER_DURATION_MS: u64 = 2_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemePref {
    Light,
    Dark,
}

impl ThemePref {
    pub fn label(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn from_label(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn next(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Self::Light => "☀",
            Self::Dark => "☾",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashTab {
    Overview,
    Tickets,
    Agents,
    Reports,
    Help,
}

impl DashTab {
    pub fn next(self) -> Self {
        match self {
            Self::Overview => Self::Tickets,
            Self::Tickets => Self::Agents,
            Self::Agents => Self::Reports,
            Self::Reports => Self::Help,
            Self::Help => Self::Overview,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Overview => Self::Help,
            Self::Tickets => Self::Overview,
            Self::Agents => Self::Tickets,
            Self::Reports => Self::Agents,
            Self::Help => Self::Reports,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Tickets => "Tickets",
            Self::Agents => "Agents",
            Self::Reports => "Reports",
            Self::Help => "Help",
        }
    }

    pub fn mount_id(self) -> &'static str {
        match self {
            Self::Overview => "tab-overview",
            Self::Tickets => "tab-tickets",
            Self::Agents => "tab-agents",
            Self::Reports => "tab-reports",
            Self::Help => "tab-help",
        }
    }

    pub fn from_mount_id(id: &str) -> Option<Self> {
        TAB_ORDER.iter().copied().find(|tab| tab.mount_id() == id)
    }
}

pub const TAB_ORDER: &[DashTab] = &[
    DashTab::Overview,
    DashTab::Tickets,
    DashTab::Agents,
    DashTab::Reports,
    DashTab::Help,
];

/// Whether a panel group may sit with no active member.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelKind {
    OneRequired,
    ZeroAllowed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelLink {
    Anchor,
    External(Arc<str>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelMember {
    pub id: Arc<str>,
    pub label: Arc<str>,
    pub link: PanelLink,
}

impl PanelMember {
    pub fn anchor(id: impl Into<Arc<str>>, label: impl Into<Arc<str>>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            link: PanelLink::Anchor,
        }
    }

    pub fn external(
        id: impl Into<Arc<str>>,
        label: impl Into<Arc<str>>,
        url: impl Into<Arc<str>>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            link: PanelLink::External(url.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activation {
    Applied,
    Reconfirmed,
    Passthrough(Arc<str>),
    Ignored,
}

/// Ordered trigger/content pairs sharing one active slot. At most one member
/// is active at a time; `OneRequired` groups never drop to zero once seeded.
#[derive(Debug, Clone)]
pub struct PanelGroup {
    kind: PanelKind,
    members: Vec<PanelMember>,
    active: Option<usize>,
}

impl PanelGroup {
    pub fn new(kind: PanelKind, members: Vec<PanelMember>, initial: Option<&str>) -> Self {
        let active = initial.and_then(|id| {
            members
                .iter()
                .position(|m| m.id.as_ref() == id && m.link == PanelLink::Anchor)
        });
        Self {
            kind,
            members,
            active,
        }
    }

    pub fn kind(&self) -> PanelKind {
        self.kind
    }

    pub fn members(&self) -> &[PanelMember] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn active_id(&self) -> Option<&str> {
        self.active.map(|idx| self.members[idx].id.as_ref())
    }

    pub fn active_count(&self) -> usize {
        usize::from(self.active.is_some())
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active_id() == Some(id)
    }

    /// Activate `id`, deactivating every other member. External members pass
    /// through untouched; unknown ids are ignored.
    pub fn activate(&mut self, id: &str) -> Activation {
        let Some(idx) = self.members.iter().position(|m| m.id.as_ref() == id) else {
            return Activation::Ignored;
        };
        if let PanelLink::External(url) = &self.members[idx].link {
            return Activation::Passthrough(Arc::clone(url));
        }
        if self.active == Some(idx) {
            return Activation::Reconfirmed;
        }
        self.active = Some(idx);
        Activation::Applied
    }

    /// Accordion semantics: activating the active member closes it again.
    /// `OneRequired` groups re-confirm instead of closing.
    pub fn toggle(&mut self, id: &str) -> Activation {
        let Some(idx) = self.members.iter().position(|m| m.id.as_ref() == id) else {
            return Activation::Ignored;
        };
        if let PanelLink::External(url) = &self.members[idx].link {
            return Activation::Passthrough(Arc::clone(url));
        }
        if self.active == Some(idx) {
            if self.kind == PanelKind::OneRequired {
                return Activation::Reconfirmed;
            }
            self.active = None;
            return Activation::Applied;
        }
        self.active = Some(idx);
        Activation::Applied
    }

    /// Close the group. Only meaningful for `ZeroAllowed` groups; a
    /// `OneRequired` group keeps its active member.
    pub fn deactivate_all(&mut self) -> bool {
        if self.kind == PanelKind::ZeroAllowed && self.active.is_some() {
            self.active = None;
            return true;
        }
        false
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaneDef {
    pub id: &'static str,
    pub label: &'static str,
    pub charts: &'static [ChartId],
}

pub const TICKETS_PANES: &[PaneDef] = &[
    PaneDef {
        id: "tickets-volume",
        label: "Volume",
        charts: &[ChartId::UserVolume, ChartId::WeeklyResolution],
    },
    PaneDef {
        id: "tickets-breakdown",
        label: "Breakdown",
        charts: &[ChartId::TicketDistribution, ChartId::RequestTypes],
    },
];

pub const REPORTS_PANES: &[PaneDef] = &[
    PaneDef {
        id: "reports-trends",
        label: "Trends",
        charts: &[ChartId::UserGrowth, ChartId::ResolutionTrend],
    },
    PaneDef {
        id: "reports-quality",
        label: "Quality",
        charts: &[ChartId::SupportChannels, ChartId::Satisfaction],
    },
];

pub fn panes_for(tab: DashTab) -> &'static [PaneDef] {
    match tab {
        DashTab::Tickets => TICKETS_PANES,
        DashTab::Reports => REPORTS_PANES,
        _ => &[],
    }
}

pub const OVERVIEW_CHARTS: &[ChartId] = &[
    ChartId::IncomingVolume,
    ChartId::SlaCompliance,
    ChartId::DeptDistribution,
    ChartId::AgentStatus,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTarget {
    Tab(DashTab),
    External(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItemDef {
    pub label: &'static str,
    pub target: NavTarget,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavMenuDef {
    pub id: &'static str,
    pub label: &'static str,
    pub items: &'static [NavItemDef],
}

pub const NAV_MENUS: &[NavMenuDef] = &[
    NavMenuDef {
        id: "menu-workspace",
        label: "Workspace",
        items: &[
            NavItemDef {
                label: "Overview",
                target: NavTarget::Tab(DashTab::Overview),
            },
            NavItemDef {
                label: "Ticket queue",
                target: NavTarget::Tab(DashTab::Tickets),
            },
            NavItemDef {
                label: "Agent roster",
                target: NavTarget::Tab(DashTab::Agents),
            },
        ],
    },
    NavMenuDef {
        id: "menu-reports",
        label: "Reports",
        items: &[
            NavItemDef {
                label: "Trend reports",
                target: NavTarget::Tab(DashTab::Reports),
            },
            NavItemDef {
                label: "Live intake",
                target: NavTarget::Tab(DashTab::Overview),
            },
        ],
    },
    NavMenuDef {
        id: "menu-resources",
        label: "Resources",
        items: &[
            NavItemDef {
                label: "Documentation",
                target: NavTarget::External("https://docs.deskboard.app"),
            },
            NavItemDef {
                label: "Service status",
                target: NavTarget::External("https://status.deskboard.app"),
            },
            NavItemDef {
                label: "Help center",
                target: NavTarget::Tab(DashTab::Help),
            },
        ],
    },
];

pub fn nav_menu(id: &str) -> Option<&'static NavMenuDef> {
    NAV_MENUS.iter().find(|menu| menu.id == id)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaqDef {
    pub id: &'static str,
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQ_ENTRIES: &[FaqDef] = &[
    FaqDef {
        id: "faq-create-ticket",
        question: "How do I raise a new ticket?",
        answer: "Open the Tickets view and choose a queue; every channel (email, chat, phone) also files tickets automatically.",
    },
    FaqDef {
        id: "faq-sla",
        question: "What do the SLA tiers mean?",
        answer: "Gold, Silver and Bronze map to 1h, 4h and 8h first-response targets. The Overview gauge tracks compliance per tier.",
    },
    FaqDef {
        id: "faq-add-agent",
        question: "How do I add an agent?",
        answer: "From the Agents view choose Add agent, fill in the name, email and role, then confirm.",
    },
    FaqDef {
        id: "faq-theme",
        question: "Can I switch to a dark theme?",
        answer: "Yes. Toggle the theme from the header; the choice is saved and restored on the next session.",
    },
];

/// Sidebar entry for a trigger that is a real hyperlink rather than an
/// in-page tab. The switcher passes it through without changing state.
pub const SIDEBAR_LOGOUT_ID: &str = "sidebar-logout";
pub const SIDEBAR_LOGOUT_URL: &str = "https://deskboard.app/logout";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterDef {
    pub id: &'static str,
    pub label: &'static str,
    pub target: &'static str,
    pub initial_text: &'static str,
}

pub const COUNTER_DEFS: &[CounterDef] = &[
    CounterDef {
        id: "stat-open-tickets",
        label: "Open tickets",
        target: "247",
        initial_text: "0",
    },
    CounterDef {
        id: "stat-resolved-week",
        label: "Resolved this week",
        target: "1284",
        initial_text: "0",
    },
    CounterDef {
        id: "stat-satisfaction",
        label: "Satisfaction",
        target: "88",
        initial_text: "0%",
    },
    CounterDef {
        id: "stat-response-hours",
        label: "Avg response",
        target: "4.5",
        initial_text: "0.0h",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterPhase {
    Pending,
    Running { started_ms: u64 },
    Done,
    Invalid,
}

#[derive(Debug, Clone)]
pub struct CounterState {
    pub id: Arc<str>,
    pub label: Arc<str>,
    pub target: Option<CounterTarget>,
    pub phase: CounterPhase,
    pub rendered: String,
}

impl CounterState {
    pub fn from_def(def: &CounterDef) -> Self {
        match parse_target(def.target, def.initial_text) {
            Ok(target) => Self {
                id: def.id.into(),
                label: def.label.into(),
                target: Some(target),
                phase: CounterPhase::Pending,
                rendered: def.initial_text.to_string(),
            },
            Err(_) => Self {
                id: def.id.into(),
                label: def.label.into(),
                target: None,
                phase: CounterPhase::Invalid,
                rendered: def.initial_text.to_string(),
            },
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self.phase, CounterPhase::Running { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn label(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogSource {
    Ui,
    Runtime,
    Storage,
}

#[derive(Debug, Clone)]
pub struct LogEntry {
    pub seq: u64,
    pub level: LogLevel,
    pub ts_ms: Option<u64>,
    pub source: LogSource,
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct LogBuffer {
    cap: usize,
    next_seq: u64,
    buf: VecDeque<LogEntry>,
}

impl LogBuffer {
    pub fn new(cap: usize) -> Self {
        Self {
            cap,
            next_seq: 1,
            buf: VecDeque::with_capacity(cap),
        }
    }

    pub fn append(&mut self, mut entry: LogEntry) {
        entry.seq = self.next_seq;
        self.next_seq += 1;

        if self.buf.len() == self.cap {
            self.buf.pop_front();
        }
        self.buf.push_back(entry);
    }

    pub fn iter(&self) -> impl Iterator<Item = &LogEntry> {
        self.buf.iter()
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashOverlay {
    None,
    AgentModal,
}

#[derive(Debug, Clone)]
pub struct DashInteraction {
    pub overlay: DashOverlay,
    pub sidebar_open: bool,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RuntimeFlags {
    pub narrow_viewport: bool,
    pub viewport_cols: u16,
}

/// Reducer-facing knobs, seeded from config and fixed for the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashTuning {
    pub counter_duration_ms: u64,
    pub narrow_width_cols: u16,
}

impl Default for DashTuning {
    fn default() -> Self {
        Self {
            counter_duration_ms: COUNTER_DURATION_MS,
            narrow_width_cols: NARROW_VIEWPORT_COLS,
        }
    }
}

#[derive(Debug, Clone)]
pub struct DashHeader {
    pub title: Arc<str>,
    pub subtitle: Arc<str>,
}

#[derive(Debug, Clone)]
pub struct PanelState {
    pub tabs: PanelGroup,
    pub sub_tabs: Vec<(DashTab, PanelGroup)>,
    pub nav_menus: PanelGroup,
    pub faq: PanelGroup,
}

impl PanelState {
    pub fn sub_group(&self, tab: DashTab) -> Option<&PanelGroup> {
        self.sub_tabs
            .iter()
            .find(|(parent, _)| *parent == tab)
            .map(|(_, group)| group)
    }

    pub fn sub_group_mut(&mut self, tab: DashTab) -> Option<&mut PanelGroup> {
        self.sub_tabs
            .iter_mut()
            .find(|(parent, _)| *parent == tab)
            .map(|(_, group)| group)
    }
}

#[derive(Debug, Clone)]
pub struct DashState {
    pub header: DashHeader,
    pub theme: ThemePref,
    pub panels: PanelState,
    pub counters: Vec<CounterState>,
    pub interaction: DashInteraction,
    pub runtime_flags: RuntimeFlags,
    pub tuning: DashTuning,
    pub logs: LogBuffer,
}

impl DashState {
    pub fn new(tuning: DashTuning) -> Self {
        let mut tab_members: Vec<PanelMember> = TAB_ORDER
            .iter()
            .map(|tab| PanelMember::anchor(tab.mount_id(), tab.label()))
            .collect();
        tab_members.push(PanelMember::external(
            SIDEBAR_LOGOUT_ID,
            "Log out",
            SIDEBAR_LOGOUT_URL,
        ));
        let tabs = PanelGroup::new(
            PanelKind::OneRequired,
            tab_members,
            Some(DashTab::Overview.mount_id()),
        );

        let sub_tabs = TAB_ORDER
            .iter()
            .filter(|tab| !panes_for(**tab).is_empty())
            .map(|tab| {
                let panes = panes_for(*tab);
                let members = panes
                    .iter()
                    .map(|pane| PanelMember::anchor(pane.id, pane.label))
                    .collect();
                let group =
                    PanelGroup::new(PanelKind::OneRequired, members, Some(panes[0].id));
                (*tab, group)
            })
            .collect();

        let nav_members = NAV_MENUS
            .iter()
            .map(|menu| PanelMember::anchor(menu.id, menu.label))
            .collect();
        let nav_menus = PanelGroup::new(PanelKind::ZeroAllowed, nav_members, None);

        let faq_members = FAQ_ENTRIES
            .iter()
            .map(|entry| PanelMember::anchor(entry.id, entry.question))
            .collect();
        let faq = PanelGroup::new(PanelKind::ZeroAllowed, faq_members, None);

        let mut logs = LogBuffer::new(200);
        let counters = COUNTER_DEFS
            .iter()
            .map(|def| {
                let counter = CounterState::from_def(def);
                if counter.phase == CounterPhase::Invalid {
                    logs.append(LogEntry {
                        seq: 0,
                        level: LogLevel::Warn,
                        ts_ms: None,
                        source: LogSource::Runtime,
                        message: format!("counter {} has a malformed target", def.id),
                    });
                }
                counter
            })
            .collect();

        Self {
            header: DashHeader {
                title: "Deskboard".into(),
                subtitle: "Support operations console".into(),
            },
            theme: ThemePref::Light,
            panels: PanelState {
                tabs,
                sub_tabs,
                nav_menus,
                faq,
            },
            counters,
            interaction: DashInteraction {
                overlay: DashOverlay::None,
                sidebar_open: true,
            },
            runtime_flags: RuntimeFlags::default(),
            tuning,
            logs,
        }
    }

    pub fn active_tab(&self) -> DashTab {
        self.panels
            .tabs
            .active_id()
            .and_then(DashTab::from_mount_id)
            .unwrap_or(DashTab::Overview)
    }

    pub fn counter(&self, id: &str) -> Option<&CounterState> {
        self.counters.iter().find(|c| c.id.as_ref() == id)
    }

    pub fn counter_mut(&mut self, id: &str) -> Option<&mut CounterState> {
        self.counters.iter_mut().find(|c| c.id.as_ref() == id)
    }

    pub fn any_counter_running(&self) -> bool {
        self.counters.iter().any(CounterState::is_running)
    }

    pub fn any_counter_pending(&self) -> bool {
        self.counters
            .iter()
            .any(|c| c.phase == CounterPhase::Pending)
    }
}
