//! App — event loop and action dispatcher.
//!
//! Architecture:
//! - `App` owns the page controller and one `ShelfFocus` per shelf.
//! - A `tokio::mpsc` channel carries `AppMessage` events in from background
//!   tasks (terminal input, the one-shot shelf fetch).
//! - Controllers return `Vec<Action>`; the dispatcher queues and applies
//!   them until the queue drains. Controllers never see each other.

use std::collections::VecDeque;
use std::io;
use std::time::Duration;

use ratatui::crossterm::{
    event::{
        self, DisableFocusChange, EnableFocusChange, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::Block,
    Terminal,
};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use cinema_proto::catalog::Shelf;
use cinema_proto::config::UiConfig;
use cinema_proto::jwplayer::PlaylistClient;

use crate::{
    action::{Action, FocusArea, NavKey},
    components::{header, hero, keys_bar, menu, shelf_row},
    page::PageNav,
    shelf::ShelfFocus,
    theme::C_BG,
};

// ── Internal event bus ────────────────────────────────────────────────────────

enum AppMessage {
    Event(Event),
    ShelvesLoaded(Vec<Shelf>),
}

/// How long the input thread waits before re-checking the channel.
const INPUT_POLL: Duration = Duration::from_millis(100);

/// Upper bound on actions applied for one input; guards against a focus loop.
const MAX_DISPATCH: usize = 64;

const HEADER_HEIGHT: u16 = 3;
const HERO_HEIGHT: u16 = 6;
const MENU_WIDTH: u16 = 24;

pub struct App {
    ui: UiConfig,
    page: PageNav,
    shelves: Vec<ShelfFocus>,
    /// Shelf that last received a focus command.
    focused_shelf: Option<usize>,
    should_quit: bool,
}

impl App {
    pub fn new(ui: UiConfig) -> Self {
        Self {
            ui,
            page: PageNav::new(),
            shelves: Vec::new(),
            focused_shelf: None,
            should_quit: false,
        }
    }

    pub async fn run(mut self, client: PlaylistClient) -> anyhow::Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableFocusChange)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        debug!("run(): terminal created, size={:?}", terminal.size());

        let (tx, rx) = mpsc::channel::<AppMessage>(256);

        // ── Background task: terminal events ──────────────────────────────────
        let event_tx = tx.clone();
        tokio::task::spawn_blocking(move || forward_input(event_tx, event::poll, event::read));

        // ── Background task: the one shelf fetch ──────────────────────────────
        let fetch_tx = tx;
        tokio::spawn(async move {
            let shelves = client.fetch_shelves(None).await;
            info!("Loaded {} shelves", shelves.len());
            let _ = fetch_tx.send(AppMessage::ShelvesLoaded(shelves)).await;
        });

        let result = self.event_loop(&mut terminal, rx).await;

        // ── Teardown ──────────────────────────────────────────────────────────
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableFocusChange)?;
        terminal.show_cursor()?;

        result
    }

    async fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        mut rx: mpsc::Receiver<AppMessage>,
    ) -> anyhow::Result<()> {
        loop {
            terminal.draw(|f| self.draw(f))?;

            if self.should_quit {
                return Ok(());
            }

            match rx.recv().await {
                Some(msg) => self.handle_message(msg),
                None => return Ok(()),
            }
        }
    }

    fn handle_message(&mut self, msg: AppMessage) {
        match msg {
            AppMessage::Event(Event::Key(key)) if key.kind != KeyEventKind::Release => {
                self.dispatch(map_key(key));
            }
            AppMessage::Event(Event::FocusGained) => self.dispatch(Action::PageFocused),
            AppMessage::Event(_) => {}
            AppMessage::ShelvesLoaded(shelves) => self.dispatch(Action::ShelvesLoaded(shelves)),
        }
    }

    /// Apply `action` and every action it causes, breadth first.
    pub fn dispatch(&mut self, action: Action) {
        let mut queue = VecDeque::from([action]);
        let mut applied = 0usize;
        while let Some(action) = queue.pop_front() {
            applied += 1;
            if applied > MAX_DISPATCH {
                warn!("dispatch: dropping {} queued actions", queue.len() + 1);
                break;
            }
            queue.extend(self.apply_action(action));
        }
    }

    fn apply_action(&mut self, action: Action) -> Vec<Action> {
        match &action {
            Action::Noop => {}
            Action::ShelvesLoaded(shelves) => debug!("apply_action: ShelvesLoaded({})", shelves.len()),
            other => debug!("apply_action: {:?}", other),
        }
        match action {
            Action::Nav(key) => self.route_nav(key),
            Action::ShelvesLoaded(shelves) => {
                self.page.on_shelves_loaded(&shelves);
                self.shelves = shelves
                    .into_iter()
                    .enumerate()
                    .map(|(i, shelf)| ShelfFocus::new(i, shelf))
                    .collect();
                self.focused_shelf = None;
                vec![Action::PageFocused]
            }
            Action::PageFocused => {
                if self.shelves.is_empty() {
                    return Vec::new();
                }
                self.page.on_focus()
            }
            Action::FocusShelf(index) => self.focus_shelf(index),
            Action::Shelf(event) => self.page.on_shelf_event(&event),
            Action::Quit => {
                self.should_quit = true;
                Vec::new()
            }
            Action::Noop => Vec::new(),
        }
    }

    /// Input goes to the focused shelf first; keys it does not take, and all
    /// keys while the menu is active, go to the page.
    fn route_nav(&mut self, key: NavKey) -> Vec<Action> {
        if self.page.focus_area() == FocusArea::Shelves {
            if let Some(row) = self.focused_shelf.and_then(|i| self.shelves.get_mut(i)) {
                if let Some(events) = row.handle_nav(key) {
                    return events.into_iter().map(Action::from).collect();
                }
            }
        }
        self.page.handle_nav(key)
    }

    fn focus_shelf(&mut self, index: usize) -> Vec<Action> {
        if index >= self.shelves.len() {
            return Vec::new();
        }
        if let Some(prev) = self.focused_shelf.filter(|&p| p != index) {
            if let Some(row) = self.shelves.get_mut(prev) {
                row.unfocus();
            }
        }
        self.focused_shelf = Some(index);
        let row = &mut self.shelves[index];
        debug!("focus shelf {} ({})", row.index(), row.title());
        row.focus()
            .into_iter()
            .map(Action::from)
            .collect()
    }

    fn draw(&mut self, frame: &mut ratatui::Frame) {
        let area = frame.area();
        frame.render_widget(Block::default().style(Style::default().bg(C_BG)), area);

        let outer = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(HERO_HEIGHT),
                Constraint::Length(1),
            ])
            .split(area);

        header::draw(frame, pad(outer[0]), &self.ui.brand, &self.ui.tagline);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(MENU_WIDTH), Constraint::Min(0)])
            .split(outer[1]);

        menu::draw(frame, pad(body[0]), &self.page);
        self.draw_shelves(frame, body[1]);

        hero::draw(frame, outer[2], &self.page);
        keys_bar::draw(frame, outer[3]);
    }

    fn draw_shelves(&self, frame: &mut ratatui::Frame, area: Rect) {
        let show_focus = self.page.focus_area() == FocusArea::Shelves;
        let mut y = area.y;
        for row in self.shelves.iter().skip(self.page.shelf_offset()) {
            if y + shelf_row::ROW_HEIGHT > area.y + area.height {
                break;
            }
            let row_area = Rect::new(area.x, y, area.width, shelf_row::ROW_HEIGHT);
            shelf_row::draw(frame, row_area, row, self.ui.card_width, show_focus);
            y += shelf_row::ROW_HEIGHT + 1;
        }
    }
}

fn pad(area: Rect) -> Rect {
    Rect::new(
        area.x.saturating_add(1),
        area.y,
        area.width.saturating_sub(2),
        area.height,
    )
}

/// Forward terminal events until the app drops its receiver.
///
/// Polls rather than blocking in `read`: runtime shutdown waits for this
/// thread, so it has to notice the closed channel without another keypress.
fn forward_input<P, R>(tx: mpsc::Sender<AppMessage>, mut poll: P, mut read: R)
where
    P: FnMut(Duration) -> io::Result<bool>,
    R: FnMut() -> io::Result<Event>,
{
    while !tx.is_closed() {
        match poll(INPUT_POLL) {
            Ok(true) => match read() {
                Ok(ev) => {
                    if tx.blocking_send(AppMessage::Event(ev)).is_err() {
                        break;
                    }
                }
                Err(_) => break,
            },
            Ok(false) => {}
            Err(_) => break,
        }
    }
    debug!("input thread exiting");
}

/// Remote-control mapping: arrows or vim keys for directions, `q`/Esc quits.
pub fn map_key(key: KeyEvent) -> Action {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Action::Quit;
    }
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Action::Nav(NavKey::Up),
        KeyCode::Down | KeyCode::Char('j') => Action::Nav(NavKey::Down),
        KeyCode::Left | KeyCode::Char('h') => Action::Nav(NavKey::Left),
        KeyCode::Right | KeyCode::Char('l') => Action::Nav(NavKey::Right),
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        _ => Action::Noop,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cinema_proto::catalog::default_resolved_shelves;

    fn loaded_app() -> App {
        let mut app = App::new(UiConfig::default());
        app.dispatch(Action::ShelvesLoaded(default_resolved_shelves()));
        app
    }

    fn hero_id(app: &App) -> Option<&str> {
        app.page.hero().map(|h| h.id.as_str())
    }

    fn press(app: &mut App, key: NavKey) {
        app.dispatch(Action::Nav(key));
    }

    #[test]
    fn loading_focuses_first_shelf_and_sets_hero() {
        let app = loaded_app();
        assert_eq!(app.focused_shelf, Some(0));
        assert!(app.shelves[0].has_focus());
        assert_eq!(hero_id(&app), Some("demo-1"));
        assert_eq!(app.page.focus_area(), FocusArea::Shelves);
    }

    #[test]
    fn right_moves_item_and_updates_hero() {
        let mut app = loaded_app();
        press(&mut app, NavKey::Right);
        press(&mut app, NavKey::Right);
        press(&mut app, NavKey::Right);
        assert_eq!(app.shelves[0].focused(), 2);
        assert_eq!(hero_id(&app), Some("demo-3"));
    }

    #[test]
    fn down_moves_focus_between_shelves() {
        let mut app = loaded_app();
        press(&mut app, NavKey::Down);
        assert_eq!(app.page.active_shelf(), 1);
        assert_eq!(app.focused_shelf, Some(1));
        assert!(!app.shelves[0].has_focus());
        assert!(app.shelves[1].has_focus());
        assert_eq!(hero_id(&app), Some("demo-4"));
    }

    #[test]
    fn left_edge_exits_to_menu_and_right_returns() {
        let mut app = loaded_app();
        press(&mut app, NavKey::Left);
        assert_eq!(app.page.focus_area(), FocusArea::Menu);
        assert_eq!(app.shelves[0].focused(), 0);

        // right is handled by the page while the menu is active
        press(&mut app, NavKey::Right);
        assert_eq!(app.page.focus_area(), FocusArea::Shelves);
        assert_eq!(app.shelves[0].focused(), 0);

        press(&mut app, NavKey::Right);
        assert_eq!(app.shelves[0].focused(), 1);
    }

    #[test]
    fn menu_down_selects_next_shelf() {
        let mut app = loaded_app();
        press(&mut app, NavKey::Up);
        assert_eq!(app.page.focus_area(), FocusArea::Menu);

        press(&mut app, NavKey::Down);
        assert_eq!(app.page.focus_area(), FocusArea::Shelves);
        assert_eq!(app.focused_shelf, Some(1));
    }

    #[test]
    fn shelf_keeps_its_item_when_revisited() {
        let mut app = loaded_app();
        press(&mut app, NavKey::Right);
        press(&mut app, NavKey::Down);
        press(&mut app, NavKey::Up);
        assert_eq!(app.page.active_shelf(), 0);
        assert_eq!(hero_id(&app), Some("demo-2"));
    }

    #[test]
    fn focus_gained_restores_shelf_input() {
        let mut app = loaded_app();
        press(&mut app, NavKey::Down);
        press(&mut app, NavKey::Left);
        assert_eq!(app.page.focus_area(), FocusArea::Menu);

        app.dispatch(Action::PageFocused);
        assert_eq!(app.page.focus_area(), FocusArea::Shelves);
        assert_eq!(app.focused_shelf, Some(1));
    }

    #[test]
    fn input_before_load_is_harmless() {
        let mut app = App::new(UiConfig::default());
        press(&mut app, NavKey::Down);
        press(&mut app, NavKey::Right);
        app.dispatch(Action::PageFocused);
        assert!(app.page.hero().is_none());
        assert_eq!(app.focused_shelf, None);
    }

    #[test]
    fn key_mapping() {
        let key = |code| KeyEvent::new(code, KeyModifiers::NONE);
        assert!(matches!(map_key(key(KeyCode::Up)), Action::Nav(NavKey::Up)));
        assert!(matches!(map_key(key(KeyCode::Char('l'))), Action::Nav(NavKey::Right)));
        assert!(matches!(map_key(key(KeyCode::Esc)), Action::Quit));
        assert!(matches!(
            map_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Action::Quit
        ));
        assert!(matches!(map_key(key(KeyCode::Enter)), Action::Noop));
    }

    #[test]
    fn input_thread_stops_when_receiver_is_dropped() {
        let (tx, rx) = mpsc::channel::<AppMessage>(4);
        drop(rx);
        let mut polls = 0;
        forward_input(
            tx,
            |_| {
                polls += 1;
                Ok(false)
            },
            || Ok(Event::FocusGained),
        );
        assert_eq!(polls, 0);
    }

    #[test]
    fn idle_input_thread_exits_after_quit() {
        let (tx, mut rx) = mpsc::channel::<AppMessage>(4);
        let reader = std::thread::spawn(move || {
            let mut first = true;
            forward_input(
                tx,
                move |_| Ok(std::mem::replace(&mut first, false)),
                || Ok(Event::FocusGained),
            );
        });

        assert!(matches!(
            rx.blocking_recv(),
            Some(AppMessage::Event(Event::FocusGained))
        ));
        drop(rx);
        reader.join().unwrap();
    }
}
