use std::io;
use std::rc::Rc;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use chrono::{Local, TimeZone};
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers, MouseButton,
    MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    BarChart, Block, Borders, Clear, Gauge, List, ListItem, Paragraph, Sparkline, Wrap,
};
use ratatui::Terminal;

use deskboard_charts::contracts::ChartHandle;
use deskboard_charts::registry::ChartRegistry;
use deskboard_core::actions::{DashAction, RuntimeAction, UserAction};
use deskboard_core::charts::{ChartId, ChartSpec, CHART_COLORS};
use deskboard_core::persistence::PreferenceStore;
use deskboard_core::reducer::{reduce, DashEffect};
use deskboard_core::state::{
    nav_menu, panes_for, CounterPhase, DashOverlay, DashState, DashTab, LogEntry, LogLevel,
    LogSource, NavMenuDef, ThemePref, FAQ_ENTRIES, NAV_MENUS, TAB_ORDER,
};

const SIDEBAR_WIDTH: u16 = 24;
const STATS_ROW_HEIGHT: u16 = 4;
const ACTIVITY_HEIGHT: u16 = 8;
const FAQ_ANSWER_HEIGHT: u16 = 3;
const MODAL_CONFIRM_LABEL: &str = "[ Add agent ]";
const MODAL_CANCEL_LABEL: &str = "[ Cancel ]";

struct TuiGuard;

impl Drop for TuiGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(
            io::stdout(),
            LeaveAlternateScreen,
            DisableMouseCapture,
            crossterm::cursor::Show
        );
    }
}

pub fn run(
    mut state: DashState,
    store: &PreferenceStore,
    registry: &mut ChartRegistry,
    tick_interval: Duration,
) -> Result<(), Box<dyn std::error::Error>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        crossterm::cursor::Hide
    )?;
    let _guard = TuiGuard; // Ensures terminal is restored on exit or panic

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    run_app(&mut terminal, &mut state, store, registry, tick_interval).map_err(|e| e.into())
}

fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    state: &mut DashState,
    store: &PreferenceStore,
    registry: &mut ChartRegistry,
    tick_interval: Duration,
) -> io::Result<()> {
    let mut last_tick = Instant::now();

    if let Ok(size) = terminal.size() {
        reduce(
            state,
            DashAction::Runtime(RuntimeAction::Resize { cols: size.width }),
        );
    }

    loop {
        if last_tick.elapsed() >= tick_interval {
            registry.tick();
            last_tick = Instant::now();
        }

        observe_counters(state, terminal)?;
        if state.any_counter_running() {
            reduce(
                state,
                DashAction::Runtime(RuntimeAction::Frame { now_ms: now_ms() }),
            );
        }

        terminal.draw(|f| ui(f, state, registry))?;

        if event::poll(Duration::from_millis(16))? {
            let mut effects = Vec::new();
            match event::read()? {
                Event::Key(key) => match handle_key_event(key, state) {
                    KeyHandlerResult::Continue(e) => effects.extend(e),
                    KeyHandlerResult::Exit => return Ok(()),
                },
                Event::Mouse(mouse) => effects.extend(handle_mouse_event(mouse, state, terminal)?),
                Event::Resize(cols, _) => {
                    reduce(state, DashAction::Runtime(RuntimeAction::Resize { cols }));
                }
                _ => {}
            }

            for effect in effects {
                match effect {
                    DashEffect::PersistTheme(theme) => {
                        if let Err(err) = store.save_theme(theme) {
                            reduce(
                                state,
                                DashAction::Runtime(RuntimeAction::AppendStructuredLog(LogEntry {
                                    seq: 0,
                                    level: LogLevel::Warn,
                                    ts_ms: Some(now_ms()),
                                    source: LogSource::Storage,
                                    message: format!("theme save failed: {err}"),
                                })),
                            );
                        }
                    }
                    DashEffect::RethemeCharts(theme) => registry.retheme(theme),
                    DashEffect::OpenExternal(url) => {
                        reduce(
                            state,
                            DashAction::Runtime(RuntimeAction::AppendStructuredLog(LogEntry {
                                seq: 0,
                                level: LogLevel::Info,
                                ts_ms: Some(now_ms()),
                                source: LogSource::Runtime,
                                message: format!("open {url} in your browser"),
                            })),
                        );
                    }
                    // Every pass through the loop redraws; nothing to schedule.
                    DashEffect::RequestFrame => {}
                }
            }
        }
    }
}

/// Plays the intersection-observer role: pending counters arm once the
/// overview stats row is actually on screen.
fn observe_counters<B: Backend>(state: &mut DashState, terminal: &Terminal<B>) -> io::Result<()> {
    if state.active_tab() != DashTab::Overview || !state.any_counter_pending() {
        return Ok(());
    }
    let size = terminal.size()?;
    let root = Rect::new(0, 0, size.width, size.height);
    let chunks = root_chunks(root);
    let content = content_rect(chunks[1], state);
    let stats = overview_chunks(content)[0];
    let ratio = (f64::from(stats.height) / f64::from(STATS_ROW_HEIGHT)).min(1.0);

    let ids: Vec<String> = state
        .counters
        .iter()
        .filter(|counter| counter.phase == CounterPhase::Pending)
        .map(|counter| counter.id.to_string())
        .collect();
    for id in ids {
        reduce(
            state,
            DashAction::Runtime(RuntimeAction::CounterVisible {
                id,
                ratio,
                now_ms: now_ms(),
            }),
        );
    }
    Ok(())
}

enum KeyHandlerResult {
    Continue(Vec<DashEffect>),
    Exit,
}

fn handle_key_event(key: event::KeyEvent, state: &mut DashState) -> KeyHandlerResult {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return KeyHandlerResult::Exit;
    }

    if state.interaction.overlay == DashOverlay::AgentModal {
        return handle_modal_keys(key, state);
    }

    let effects = match key.code {
        KeyCode::Char('q') => return KeyHandlerResult::Exit,
        KeyCode::Char('t') => reduce(state, DashAction::User(UserAction::ToggleTheme)),
        KeyCode::Char('s') => reduce(state, DashAction::User(UserAction::ToggleSidebar)),
        KeyCode::Char('a') if state.active_tab() == DashTab::Agents => {
            reduce(state, DashAction::User(UserAction::OpenAgentModal))
        }
        KeyCode::Tab => reduce(state, DashAction::User(UserAction::NextTab)),
        KeyCode::BackTab => reduce(state, DashAction::User(UserAction::PrevTab)),
        KeyCode::Char(digit @ '1'..='5') => {
            let idx = digit as usize - '1' as usize;
            match TAB_ORDER.get(idx) {
                Some(tab) => reduce(state, DashAction::User(UserAction::SelectTab(*tab))),
                None => Vec::new(),
            }
        }
        KeyCode::Left => select_adjacent_pane(state, false),
        KeyCode::Right => select_adjacent_pane(state, true),
        KeyCode::Esc => reduce(state, DashAction::User(UserAction::OutsideClick)),
        _ => Vec::new(),
    };
    KeyHandlerResult::Continue(effects)
}

fn handle_modal_keys(key: event::KeyEvent, state: &mut DashState) -> KeyHandlerResult {
    let effects = match key.code {
        KeyCode::Enter => reduce(state, DashAction::User(UserAction::CloseModal)),
        KeyCode::Esc => reduce(state, DashAction::User(UserAction::CancelModal)),
        _ => Vec::new(),
    };
    KeyHandlerResult::Continue(effects)
}

fn select_adjacent_pane(state: &mut DashState, forward: bool) -> Vec<DashEffect> {
    let tab = state.active_tab();
    let Some(group) = state.panels.sub_group(tab) else {
        return Vec::new();
    };
    let members = group.members();
    if members.is_empty() {
        return Vec::new();
    }
    let current = members
        .iter()
        .position(|member| group.is_active(&member.id))
        .unwrap_or(0);
    let next = if forward {
        (current + 1) % members.len()
    } else {
        (current + members.len() - 1) % members.len()
    };
    let target = members[next].id.to_string();
    reduce(
        state,
        DashAction::User(UserAction::SelectSubTab {
            parent: tab,
            target,
        }),
    )
}

fn handle_mouse_event<B: Backend>(
    mouse: event::MouseEvent,
    state: &mut DashState,
    terminal: &Terminal<B>,
) -> io::Result<Vec<DashEffect>> {
    if !matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left)) {
        return Ok(Vec::new());
    }
    let size = terminal.size()?;
    let root = Rect::new(0, 0, size.width, size.height);

    // The dialog captures every click while it is open.
    if state.interaction.overlay == DashOverlay::AgentModal {
        return Ok(modal_click(mouse, state, root));
    }

    let chunks = root_chunks(root);
    let header = chunks[0];
    let body = chunks[1];

    // An open dropdown sits on top of whatever is under it.
    if let Some(menu_id) = state.panels.nav_menus.active_id().map(str::to_string) {
        if let Some(menu) = nav_menu(&menu_id) {
            if let Some(trigger_x) = menu_trigger_x(state, &menu_id, header) {
                let popup = dropdown_rect(menu, trigger_x, header, root);
                if hit(popup, mouse.column, mouse.row) {
                    let idx = mouse.row.saturating_sub(popup.y + 1) as usize;
                    if mouse.row > popup.y && idx < menu.items.len() {
                        return Ok(reduce(
                            state,
                            DashAction::User(UserAction::ActivateNavItem {
                                menu: menu_id,
                                index: idx,
                            }),
                        ));
                    }
                    return Ok(Vec::new());
                }
            }
        }
    }

    // Header content row: brand, menu triggers, theme switch, clock.
    if mouse.row == header.y + 1 {
        let mut current_x = header.x + 1 + state.header.title.len() as u16 + 3;
        for menu in NAV_MENUS {
            let width = menu.label.len() as u16;
            if mouse.column >= current_x && mouse.column < current_x + width {
                return Ok(reduce(
                    state,
                    DashAction::User(UserAction::OpenNavMenu {
                        menu: menu.id.to_string(),
                    }),
                ));
            }
            current_x += width + 3;
        }
        let theme_width = theme_zone_width(state);
        if mouse.column >= current_x && mouse.column < current_x + theme_width {
            return Ok(reduce(state, DashAction::User(UserAction::ToggleTheme)));
        }
    }

    // Anything else lands outside an open dropdown and closes it first.
    let mut effects = reduce(state, DashAction::User(UserAction::OutsideClick));

    let body_split = body_chunks(body, state.interaction.sidebar_open);
    if state.interaction.sidebar_open {
        let sidebar = body_split[0];
        if hit(sidebar, mouse.column, mouse.row) {
            if mouse.row > sidebar.y {
                let idx = (mouse.row - sidebar.y - 1) as usize;
                let target = state
                    .panels
                    .tabs
                    .members()
                    .get(idx)
                    .map(|member| member.id.to_string());
                if let Some(target) = target {
                    effects.extend(reduce(
                        state,
                        DashAction::User(UserAction::ActivateTabEntry { target }),
                    ));
                }
            }
            return Ok(effects);
        }
    }

    let content = content_rect(body, state);
    match state.active_tab() {
        DashTab::Tickets | DashTab::Reports => effects.extend(pane_click(mouse, state, content)),
        DashTab::Agents => effects.extend(agents_click(mouse, state, content)),
        DashTab::Help => effects.extend(help_click(mouse, state, content)),
        _ => {}
    }
    Ok(effects)
}

fn modal_click(mouse: event::MouseEvent, state: &mut DashState, root: Rect) -> Vec<DashEffect> {
    let dialog = centered_rect(50, 40, root);
    if !hit(dialog, mouse.column, mouse.row) {
        // Only a direct press on the backdrop dismisses the dialog.
        return reduce(state, DashAction::User(UserAction::ModalBackdropClick));
    }
    let buttons_row = dialog.bottom().saturating_sub(2);
    if mouse.row == buttons_row {
        let mut current_x = dialog.x + 2;
        let confirm_width = MODAL_CONFIRM_LABEL.len() as u16;
        if mouse.column >= current_x && mouse.column < current_x + confirm_width {
            return reduce(state, DashAction::User(UserAction::CloseModal));
        }
        current_x += confirm_width + 3;
        let cancel_width = MODAL_CANCEL_LABEL.len() as u16;
        if mouse.column >= current_x && mouse.column < current_x + cancel_width {
            return reduce(state, DashAction::User(UserAction::CancelModal));
        }
    }
    reduce(state, DashAction::User(UserAction::ModalBodyClick))
}

fn pane_click(mouse: event::MouseEvent, state: &mut DashState, content: Rect) -> Vec<DashEffect> {
    let tab = state.active_tab();
    let triggers = pane_chunks(content)[0];
    if mouse.row != triggers.y {
        return Vec::new();
    }
    let mut current_x = triggers.x;
    for pane in panes_for(tab) {
        let width = pane.label.len() as u16;
        if mouse.column >= current_x && mouse.column < current_x + width {
            return reduce(
                state,
                DashAction::User(UserAction::SelectSubTab {
                    parent: tab,
                    target: pane.id.to_string(),
                }),
            );
        }
        current_x += width + 3;
    }
    Vec::new()
}

fn agents_click(mouse: event::MouseEvent, state: &mut DashState, content: Rect) -> Vec<DashEffect> {
    let button = agents_chunks(content)[1];
    if hit(button, mouse.column, mouse.row) {
        return reduce(state, DashAction::User(UserAction::OpenAgentModal));
    }
    Vec::new()
}

fn help_click(mouse: event::MouseEvent, state: &mut DashState, content: Rect) -> Vec<DashEffect> {
    let mut row = content.y;
    for entry in FAQ_ENTRIES {
        if row >= content.bottom() {
            break;
        }
        if mouse.row == row && mouse.column >= content.x && mouse.column < content.right() {
            return reduce(
                state,
                DashAction::User(UserAction::ToggleFaqEntry {
                    target: entry.id.to_string(),
                }),
            );
        }
        row += 1;
        if state.panels.faq.is_active(entry.id) {
            row += FAQ_ANSWER_HEIGHT;
        }
    }
    Vec::new()
}

fn hit(area: Rect, column: u16, row: u16) -> bool {
    row >= area.y && row < area.y + area.height && column >= area.x && column < area.x + area.width
}

fn root_chunks(area: Rect) -> Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Body
            Constraint::Length(1), // Footer
        ])
        .split(area)
}

fn body_chunks(area: Rect, sidebar_open: bool) -> Rc<[Rect]> {
    let constraints = if sidebar_open {
        vec![Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)]
    } else {
        vec![Constraint::Min(0)]
    };
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area)
}

fn content_rect(body: Rect, state: &DashState) -> Rect {
    let chunks = body_chunks(body, state.interaction.sidebar_open);
    if state.interaction.sidebar_open {
        chunks[1]
    } else {
        chunks[0]
    }
}

fn overview_chunks(content: Rect) -> Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(STATS_ROW_HEIGHT), // Stat counters
            Constraint::Min(8),                   // Charts
            Constraint::Length(ACTIVITY_HEIGHT),  // Activity feed
        ])
        .split(content)
}

fn pane_chunks(content: Rect) -> Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Sub-tab triggers
            Constraint::Min(0),    // Active pane
        ])
        .split(content)
}

fn agents_chunks(content: Rect) -> Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Roster
            Constraint::Length(3), // Add agent button
        ])
        .split(content)
}

/// Column where a menu trigger starts on the header content row. The walk
/// must stay in step with the spans `render_header` produces.
fn menu_trigger_x(state: &DashState, menu_id: &str, header: Rect) -> Option<u16> {
    let mut x = header.x + 1 + state.header.title.len() as u16 + 3;
    for menu in NAV_MENUS {
        if menu.id == menu_id {
            return Some(x);
        }
        x += menu.label.len() as u16 + 3;
    }
    None
}

fn theme_zone_width(state: &DashState) -> u16 {
    // Glyph, space, label.
    2 + state.theme.label().len() as u16
}

fn dropdown_rect(menu: &NavMenuDef, trigger_x: u16, header: Rect, root: Rect) -> Rect {
    let width = menu
        .items
        .iter()
        .map(|item| item.label.len())
        .max()
        .unwrap_or(0) as u16
        + 4;
    let width = width.min(root.width);
    let x = trigger_x
        .saturating_sub(1)
        .min(root.right().saturating_sub(width));
    let y = header.y + header.height;
    let height = (menu.items.len() as u16 + 2).min(root.bottom().saturating_sub(y));
    Rect::new(x, y, width, height)
}

#[derive(Clone, Copy)]
struct UiPalette {
    accent: Color,
    accent_alt: Color,
    success: Color,
    warning: Color,
    danger: Color,
    muted: Color,
    border: Color,
    panel_bg: Color,
    selected_bg: Color,
}

fn palette_for(theme: ThemePref) -> UiPalette {
    match theme {
        ThemePref::Light => UiPalette {
            accent: Color::Blue,
            accent_alt: Color::Magenta,
            success: Color::Green,
            warning: Color::Rgb(176, 112, 0),
            danger: Color::Red,
            muted: Color::DarkGray,
            border: Color::Gray,
            panel_bg: Color::Rgb(238, 240, 245),
            selected_bg: Color::Rgb(210, 220, 238),
        },
        ThemePref::Dark => UiPalette {
            accent: Color::Cyan,
            accent_alt: Color::LightMagenta,
            success: Color::LightGreen,
            warning: Color::Yellow,
            danger: Color::LightRed,
            muted: Color::Gray,
            border: Color::DarkGray,
            panel_bg: Color::Rgb(16, 18, 28),
            selected_bg: Color::Rgb(36, 42, 60),
        },
    }
}

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

fn format_clock(ts_ms: u64) -> String {
    Local
        .timestamp_millis_opt(ts_ms as i64)
        .single()
        .map(|dt| dt.format("%H:%M:%S").to_string())
        .unwrap_or_else(|| "--:--:--".to_string())
}

fn ui(f: &mut ratatui::Frame, state: &DashState, registry: &ChartRegistry) {
    let palette = palette_for(state.theme);
    f.render_widget(
        Block::default().style(Style::default().bg(palette.panel_bg)),
        f.area(),
    );

    let chunks = root_chunks(f.area());
    render_header(f, chunks[0], state, palette);

    let body = body_chunks(chunks[1], state.interaction.sidebar_open);
    let content = if state.interaction.sidebar_open {
        render_sidebar(f, body[0], state, palette);
        body[1]
    } else {
        body[0]
    };

    match state.active_tab() {
        DashTab::Overview => render_overview(f, content, state, registry, palette),
        DashTab::Tickets => render_panes(f, content, state, registry, palette, DashTab::Tickets),
        DashTab::Agents => render_agents(f, content, palette),
        DashTab::Reports => render_panes(f, content, state, registry, palette, DashTab::Reports),
        DashTab::Help => render_help(f, content, state, palette),
    }

    render_footer(f, chunks[2], state, palette);
    render_dropdown(f, state, chunks[0], palette);

    if state.interaction.overlay == DashOverlay::AgentModal {
        render_modal(f, palette);
    }
}

fn render_header(f: &mut ratatui::Frame, area: Rect, state: &DashState, palette: UiPalette) {
    let mut spans = vec![Span::styled(
        state.header.title.to_string(),
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD),
    )];
    for menu in NAV_MENUS {
        spans.push(Span::styled(" | ", Style::default().fg(palette.muted)));
        let style = if state.panels.nav_menus.is_active(menu.id) {
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::UNDERLINED)
        } else {
            Style::default().fg(palette.accent_alt)
        };
        spans.push(Span::styled(menu.label, style));
    }
    spans.push(Span::styled(" | ", Style::default().fg(palette.muted)));
    spans.push(Span::styled(
        format!("{} {}", state.theme.glyph(), state.theme.label()),
        Style::default().fg(palette.warning),
    ));
    spans.push(Span::styled(" | ", Style::default().fg(palette.muted)));
    spans.push(Span::styled(
        Local::now().format("%H:%M:%S").to_string(),
        Style::default().fg(palette.muted),
    ));

    let header = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.border))
            .title(state.header.subtitle.to_string()),
    );
    f.render_widget(header, area);
}

fn render_dropdown(f: &mut ratatui::Frame, state: &DashState, header: Rect, palette: UiPalette) {
    let Some(menu_id) = state.panels.nav_menus.active_id() else {
        return;
    };
    let Some(menu) = nav_menu(menu_id) else {
        return;
    };
    let Some(trigger_x) = menu_trigger_x(state, menu_id, header) else {
        return;
    };
    let popup = dropdown_rect(menu, trigger_x, header, f.area());

    let items: Vec<ListItem> = menu
        .items
        .iter()
        .map(|item| ListItem::new(Line::from(item.label)))
        .collect();
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(menu.label)
            .style(Style::default().bg(palette.panel_bg))
            .border_style(Style::default().fg(palette.accent)),
    );
    f.render_widget(Clear, popup);
    f.render_widget(list, popup);
}

fn render_sidebar(f: &mut ratatui::Frame, area: Rect, state: &DashState, palette: UiPalette) {
    let items: Vec<ListItem> = state
        .panels
        .tabs
        .members()
        .iter()
        .map(|member| {
            let active = state.panels.tabs.is_active(&member.id);
            let style = if active {
                Style::default()
                    .fg(palette.accent)
                    .bg(palette.selected_bg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(palette.muted)
            };
            let marker = if active { "> " } else { "  " };
            ListItem::new(Line::from(format!("{marker}{}", member.label))).style(style)
        })
        .collect();
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Views")
            .border_style(Style::default().fg(palette.border)),
    );
    f.render_widget(list, area);
}

fn render_overview(
    f: &mut ratatui::Frame,
    area: Rect,
    state: &DashState,
    registry: &ChartRegistry,
    palette: UiPalette,
) {
    let chunks = overview_chunks(area);

    let stat_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(chunks[0]);
    for (counter, rect) in state.counters.iter().zip(stat_chunks.iter()) {
        let value_style = match counter.phase {
            CounterPhase::Invalid => Style::default().fg(palette.danger),
            CounterPhase::Done => Style::default()
                .fg(palette.success)
                .add_modifier(Modifier::BOLD),
            _ => Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        };
        let stat = Paragraph::new(Line::from(Span::styled(
            counter.rendered.clone(),
            value_style,
        )))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(counter.label.to_string())
                .border_style(Style::default().fg(palette.border)),
        );
        f.render_widget(stat, *rect);
    }

    let chart_cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);
    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(chart_cols[0]);
    render_chart(f, left[0], registry, ChartId::IncomingVolume, palette);
    render_chart(f, left[1], registry, ChartId::SlaCompliance, palette);
    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chart_cols[1]);
    render_chart(f, right[0], registry, ChartId::DeptDistribution, palette);
    render_chart(f, right[1], registry, ChartId::AgentStatus, palette);

    render_activity(f, chunks[2], state, palette);
}

fn render_activity(f: &mut ratatui::Frame, area: Rect, state: &DashState, palette: UiPalette) {
    let capacity = area.height.saturating_sub(2) as usize;
    let entries: Vec<&LogEntry> = state.logs.iter().collect();
    let skip = entries.len().saturating_sub(capacity);
    let items: Vec<ListItem> = entries
        .iter()
        .skip(skip)
        .map(|entry| {
            let level_style = match entry.level {
                LogLevel::Error => Style::default().fg(palette.danger),
                LogLevel::Warn => Style::default().fg(palette.warning),
                LogLevel::Info => Style::default().fg(palette.success),
                LogLevel::Debug | LogLevel::Trace => Style::default().fg(palette.muted),
            };
            let stamp = entry
                .ts_ms
                .map(format_clock)
                .unwrap_or_else(|| "--:--:--".to_string());
            ListItem::new(Line::from(vec![
                Span::styled(format!("{stamp} "), Style::default().fg(palette.muted)),
                Span::styled(format!("{:<5} ", entry.level.label()), level_style),
                Span::raw(entry.message.clone()),
            ]))
        })
        .collect();
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Activity")
            .border_style(Style::default().fg(palette.border)),
    );
    f.render_widget(list, area);
}

fn render_chart(
    f: &mut ratatui::Frame,
    area: Rect,
    registry: &ChartRegistry,
    id: ChartId,
    palette: UiPalette,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(id.label())
        .border_style(Style::default().fg(palette.border));
    let Some(handle) = registry.handle(id) else {
        let empty = Paragraph::new("not mounted")
            .style(Style::default().fg(palette.muted))
            .block(block);
        f.render_widget(empty, area);
        return;
    };

    match handle.spec() {
        ChartSpec::Area { .. } => {
            let data: Vec<u64> = handle
                .series()
                .first()
                .map(|series| series.data.iter().map(|value| value.round() as u64).collect())
                .unwrap_or_default();
            let spark = Sparkline::default()
                .block(block)
                .data(&data)
                .style(Style::default().fg(palette.accent));
            f.render_widget(spark, area);
        }
        ChartSpec::Bar { categories, .. } => {
            let values: Vec<u64> = handle
                .series()
                .first()
                .map(|series| series.data.iter().map(|value| value.round() as u64).collect())
                .unwrap_or_default();
            let data: Vec<(&str, u64)> = categories
                .iter()
                .map(String::as_str)
                .zip(values)
                .collect();
            let bars = BarChart::default()
                .block(block)
                .data(data.as_slice())
                .bar_width(4)
                .bar_gap(1)
                .bar_style(Style::default().fg(palette.accent_alt))
                .value_style(Style::default().fg(palette.panel_bg).bg(palette.accent_alt));
            f.render_widget(bars, area);
        }
        ChartSpec::Donut { labels, .. } | ChartSpec::Pie { labels, .. } => {
            let values = handle
                .series()
                .first()
                .map(|series| series.data.clone())
                .unwrap_or_default();
            render_slice_legend(f, area, block, labels, &values, palette);
        }
        ChartSpec::RadialBar {
            total_label,
            value_suffix,
            ..
        } => {
            let values = handle
                .series()
                .first()
                .map(|series| series.data.clone())
                .unwrap_or_default();
            let average = if values.is_empty() {
                0.0
            } else {
                values.iter().sum::<f64>() / values.len() as f64
            };
            let label = match total_label {
                Some((name, text)) => format!("{name} {text}"),
                None => format!("{average:.0}{value_suffix}"),
            };
            let gauge = Gauge::default()
                .block(block)
                .gauge_style(Style::default().fg(palette.success))
                .percent((average.round() as u16).min(100))
                .label(label);
            f.render_widget(gauge, area);
        }
    }
}

fn render_slice_legend(
    f: &mut ratatui::Frame,
    area: Rect,
    block: Block,
    labels: &[String],
    values: &[f64],
    palette: UiPalette,
) {
    let total: f64 = values.iter().sum();
    let items: Vec<ListItem> = labels
        .iter()
        .zip(values)
        .enumerate()
        .map(|(idx, (label, value))| {
            let share = if total > 0.0 {
                value / total * 100.0
            } else {
                0.0
            };
            ListItem::new(Line::from(vec![
                Span::styled("■ ", Style::default().fg(slice_color(idx))),
                Span::styled(
                    format!("{label:<14}"),
                    Style::default().fg(palette.accent_alt),
                ),
                Span::styled(
                    format!("{value:>6.0}  {share:>5.1}%"),
                    Style::default().fg(palette.muted),
                ),
            ]))
        })
        .collect();
    let list = List::new(items).block(block);
    f.render_widget(list, area);
}

fn slice_color(idx: usize) -> Color {
    hex_color(CHART_COLORS[idx % CHART_COLORS.len()])
}

fn hex_color(hex: &str) -> Color {
    let hex = hex.trim_start_matches('#');
    if hex.len() != 6 {
        return Color::White;
    }
    u32::from_str_radix(hex, 16)
        .map(|rgb| Color::Rgb((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8))
        .unwrap_or(Color::White)
}

fn render_panes(
    f: &mut ratatui::Frame,
    area: Rect,
    state: &DashState,
    registry: &ChartRegistry,
    palette: UiPalette,
    tab: DashTab,
) {
    let chunks = pane_chunks(area);
    let Some(group) = state.panels.sub_group(tab) else {
        return;
    };

    let mut spans = Vec::new();
    for (idx, pane) in panes_for(tab).iter().enumerate() {
        if idx > 0 {
            spans.push(Span::styled(" | ", Style::default().fg(palette.muted)));
        }
        let style = if group.is_active(pane.id) {
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(palette.muted)
        };
        spans.push(Span::styled(pane.label, style));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), chunks[0]);

    let Some(pane) = panes_for(tab).iter().find(|pane| group.is_active(pane.id)) else {
        return;
    };
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);
    for (chart, rect) in pane.charts.iter().zip(halves.iter()) {
        render_chart(f, *rect, registry, *chart, palette);
    }
}

const AGENT_ROSTER: &[(&str, &str, &str)] = &[
    ("Priya Nair", "Team lead", "online"),
    ("Marcus Webb", "Support agent", "online"),
    ("Sofia Reyes", "Support agent", "away"),
    ("Dan Kowalski", "Field technician", "busy"),
    ("Amira Haddad", "Support agent", "offline"),
];

fn render_agents(f: &mut ratatui::Frame, area: Rect, palette: UiPalette) {
    let chunks = agents_chunks(area);
    let items: Vec<ListItem> = AGENT_ROSTER
        .iter()
        .map(|(name, role, status)| {
            let status_style = match *status {
                "online" => Style::default().fg(palette.success),
                "away" => Style::default().fg(palette.warning),
                "busy" => Style::default().fg(palette.danger),
                _ => Style::default().fg(palette.muted),
            };
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{name:<16}"),
                    Style::default().fg(palette.accent_alt),
                ),
                Span::styled(format!("{role:<18}"), Style::default().fg(palette.muted)),
                Span::styled(*status, status_style),
            ]))
        })
        .collect();
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Agents on shift")
            .border_style(Style::default().fg(palette.border)),
    );
    f.render_widget(list, chunks[0]);

    let button = Paragraph::new(Line::from(Span::styled(
        "[ a ] Add agent",
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.accent)),
    );
    f.render_widget(button, chunks[1]);
}

fn render_help(f: &mut ratatui::Frame, area: Rect, state: &DashState, palette: UiPalette) {
    let mut row = area.y;
    for entry in FAQ_ENTRIES {
        if row >= area.bottom() {
            break;
        }
        let open = state.panels.faq.is_active(entry.id);
        let marker = if open { "▾" } else { "▸" };
        let style = if open {
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.accent_alt)
        };
        let question = Paragraph::new(Line::from(vec![
            Span::styled(format!("{marker} "), style),
            Span::styled(entry.question, style),
        ]));
        f.render_widget(question, Rect::new(area.x, row, area.width, 1));
        row += 1;
        if open {
            let remaining = area.bottom().saturating_sub(row);
            let height = FAQ_ANSWER_HEIGHT.min(remaining);
            if height > 0 {
                let answer = Paragraph::new(entry.answer)
                    .style(Style::default().fg(palette.muted))
                    .wrap(Wrap { trim: true });
                f.render_widget(
                    answer,
                    Rect::new(area.x + 2, row, area.width.saturating_sub(2), height),
                );
            }
            row += FAQ_ANSWER_HEIGHT;
        }
    }
}

fn render_footer(f: &mut ratatui::Frame, area: Rect, state: &DashState, palette: UiPalette) {
    let footer_text = if state.interaction.overlay == DashOverlay::AgentModal {
        "Enter confirm | Esc cancel | click outside the dialog to dismiss"
    } else {
        "Shortcuts: 1..5 views | Tab cycle | arrows sub-tabs | t theme | s sidebar | a add agent | q quit"
    };
    let footer = Paragraph::new(footer_text).style(Style::default().fg(palette.muted));
    f.render_widget(footer, area);
}

fn render_modal(f: &mut ratatui::Frame, palette: UiPalette) {
    let dialog = centered_rect(50, 40, f.area());
    f.render_widget(Clear, dialog);
    let block = Block::default()
        .title("Add agent")
        .borders(Borders::ALL)
        .style(Style::default().bg(palette.panel_bg))
        .border_style(Style::default().fg(palette.accent));
    let body = Paragraph::new(vec![
        Line::from(""),
        Line::from("  Name:   ________________"),
        Line::from("  Email:  ________________"),
        Line::from("  Role:   Support agent"),
        Line::from(""),
        Line::from("  The roster service picks the record up once confirmed."),
    ])
    .wrap(Wrap { trim: false })
    .block(block);
    f.render_widget(body, dialog);

    if dialog.width > 6 && dialog.height > 3 {
        let buttons = Line::from(vec![
            Span::styled(
                MODAL_CONFIRM_LABEL,
                Style::default()
                    .fg(palette.success)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("   "),
            Span::styled(MODAL_CANCEL_LABEL, Style::default().fg(palette.muted)),
        ]);
        let buttons_rect = Rect::new(
            dialog.x + 2,
            dialog.bottom().saturating_sub(2),
            dialog.width.saturating_sub(4),
            1,
        );
        f.render_widget(Paragraph::new(buttons), buttons_rect);
    }
}

fn centered_rect(
    percent_x: u16,
    percent_y: u16,
    r: ratatui::layout::Rect,
) -> ratatui::layout::Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
