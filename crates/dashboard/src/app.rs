//! Main application structure

use crate::{
    config::DashboardConfig,
    ui::{UiState, render_ui},
};

use anyhow::Result;
use crossbeam_channel::Receiver;
use crossterm::{
    event::{self, DisableMouseCapture, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use opti_transit_access::{AccessController, Section, View, ViewChange};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
};
use std::{
    io,
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::Duration,
};
use tracing::{debug, info};

/// Result of handling a key event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEventResult {
    /// Continue normal operation
    Continue,

    /// Quit requested
    Quit,
}

/// Main application state
pub struct App {
    /// Whether the app should quit
    should_quit: bool,

    /// Owner of the section-access state
    controller: AccessController,

    /// View changes published by the controller
    changes: Receiver<ViewChange>,

    /// UI state
    ui_state: UiState,

    /// Event poll timeout
    tick_rate: Duration,

    /// Shutdown flag set by signal handler
    shutdown_flag: Option<Arc<AtomicBool>>,
}

impl App {
    /// Create a new application with the configured start section selected
    #[must_use]
    pub fn new(config: &DashboardConfig) -> Self {
        let mut controller = AccessController::new();
        controller.select_section(config.start_section);

        let changes = controller.subscribe();
        let ui_state = UiState::new(
            controller.resolve_view(),
            controller.state().clone(),
            !config.collapsed_sidebar,
        );

        info!(
            start_section = %config.start_section,
            view = %controller.resolve_view(),
            "dashboard created"
        );

        Self {
            should_quit: false,
            controller,
            changes,
            ui_state,
            tick_rate: Duration::from_millis(config.tick_rate_ms),
            shutdown_flag: None,
        }
    }

    /// Set the shutdown flag for signal handling
    pub fn set_shutdown_flag(&mut self, shutdown_flag: Arc<AtomicBool>) {
        self.shutdown_flag = Some(shutdown_flag);
    }

    /// Whether the app has been asked to quit
    #[must_use]
    pub const fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// The access controller
    #[must_use]
    pub const fn controller(&self) -> &AccessController {
        &self.controller
    }

    /// What the renderer currently draws
    #[must_use]
    pub const fn ui_state(&self) -> &UiState {
        &self.ui_state
    }

    /// Run the application with synchronous event handling
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be initialized or if there's an error
    /// during the main application loop.
    pub fn run(&mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.run_loop(&mut terminal);

        Self::cleanup_terminal(&mut terminal)?;

        result
    }

    /// Cleanup terminal state
    fn cleanup_terminal<B: Backend + io::Write>(terminal: &mut Terminal<B>) -> Result<()> {
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
        Ok(())
    }

    /// Main application loop
    fn run_loop<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        info!("Starting dashboard");

        while !self.should_quit {
            if let Some(shutdown_flag) = &self.shutdown_flag {
                if shutdown_flag.load(Ordering::SeqCst) {
                    info!("Signal-triggered shutdown");
                    self.should_quit = true;
                    break;
                }
            }

            terminal.draw(|frame| render_ui(frame, &self.ui_state))?;

            if event::poll(self.tick_rate)? {
                if let crossterm::event::Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        info!("Dashboard shutting down");
        Ok(())
    }

    /// Pull pending notifications from the controller into the UI state
    pub fn sync_view(&mut self) {
        for change in self.changes.try_iter() {
            debug!(view = %change.view, "view changed");
            self.ui_state.apply_change(change);
        }
    }

    /// Handle keyboard input
    pub fn handle_key_event(&mut self, key: KeyEvent) -> KeyEventResult {
        let result = self.dispatch_key_event(key);

        if result == KeyEventResult::Quit {
            self.should_quit = true;
        }

        self.sync_view();
        result
    }

    fn dispatch_key_event(&mut self, key: KeyEvent) -> KeyEventResult {
        // Ctrl+C quits from anywhere, including the form
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            info!("Quit requested");
            return KeyEventResult::Quit;
        }

        // Any key closes help
        if self.ui_state.show_help {
            self.ui_state.show_help = false;
            return KeyEventResult::Continue;
        }

        match self.ui_state.view {
            View::Gate => {
                self.handle_gate_keys(key);
                KeyEventResult::Continue
            }
            View::Locked | View::Content(_) => self.handle_dashboard_keys(key),
        }
    }

    /// Handle keys while sections are shown
    fn handle_dashboard_keys(&mut self, key: KeyEvent) -> KeyEventResult {
        let active = self.controller.active_section();

        match key.code {
            KeyCode::Char('q') => {
                info!("Quit requested");
                return KeyEventResult::Quit;
            }

            KeyCode::Char('?') => self.ui_state.toggle_help(),

            KeyCode::Char('b') => self.ui_state.toggle_sidebar(),

            KeyCode::Up | KeyCode::Char('k') => {
                self.controller.select_section(active.previous());
            }

            KeyCode::Down | KeyCode::Char('j') => {
                self.controller.select_section(active.next());
            }

            // Number keys 1-6 jump straight to a section
            KeyCode::Char(c) if c.is_ascii_digit() && c != '0' => {
                let section = c
                    .to_digit(10)
                    .and_then(|n| Section::from_index(n as usize - 1));
                if let Some(section) = section {
                    self.controller.select_section(section);
                }
            }

            KeyCode::Enter | KeyCode::Char('l') if self.ui_state.view == View::Locked => {
                self.controller.request_access();
            }

            KeyCode::Char('o') if self.controller.can_logout() => {
                self.controller.logout();
            }

            _ => {}
        }

        KeyEventResult::Continue
    }

    /// Handle keys while the authentication form is shown
    fn handle_gate_keys(&mut self, key: KeyEvent) {
        let form = &mut self.ui_state.gate_form;

        match key.code {
            KeyCode::Esc => self.controller.close_access_request(),

            KeyCode::Enter => {
                let mode = form.mode();
                self.controller.authenticate(mode);
            }

            KeyCode::Tab | KeyCode::BackTab => form.switch_mode(),

            KeyCode::Up => form.focus_previous(),

            KeyCode::Down => form.focus_next(),

            KeyCode::Backspace => form.backspace(),

            // The sidebar stays usable; the gate stays open
            KeyCode::PageUp => {
                let previous = self.controller.active_section().previous();
                self.controller.select_section(previous);
            }

            KeyCode::PageDown => {
                let next = self.controller.active_section().next();
                self.controller.select_section(next);
            }

            KeyCode::Char('o')
                if key.modifiers.contains(KeyModifiers::CONTROL)
                    && self.controller.can_logout() =>
            {
                self.controller.logout();
            }

            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                form.push_char(c);
            }

            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(app: &mut App, code: KeyCode) -> KeyEventResult {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_start_section_is_applied() {
        let config = DashboardConfig {
            start_section: Section::Logistics,
            ..DashboardConfig::default()
        };
        let app = App::new(&config);

        assert_eq!(app.ui_state().view, View::Locked);
        assert_eq!(app.ui_state().access.active_section(), Section::Logistics);
    }

    #[test]
    fn test_collapsed_sidebar_config() {
        let config = DashboardConfig {
            collapsed_sidebar: true,
            ..DashboardConfig::default()
        };
        let mut app = App::new(&config);
        assert!(!app.ui_state().sidebar_expanded);

        press(&mut app, KeyCode::Char('b'));
        assert!(app.ui_state().sidebar_expanded);
    }

    #[test]
    fn test_q_is_typed_into_form() {
        let mut app = App::new(&DashboardConfig::default());
        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Enter);

        let result = press(&mut app, KeyCode::Char('q'));

        assert_eq!(result, KeyEventResult::Continue);
        assert!(!app.should_quit());
        assert_eq!(app.ui_state().gate_form.fields()[0].value, "q");
    }

    #[test]
    fn test_ctrl_c_quits_from_form() {
        let mut app = App::new(&DashboardConfig::default());
        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Enter);

        let result = app.handle_key_event(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
        ));

        assert_eq!(result, KeyEventResult::Quit);
        assert!(app.should_quit());
    }

    #[test]
    fn test_ctrl_o_logs_out_from_form() {
        let mut app = App::new(&DashboardConfig::default());
        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('3'));
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('o'));
        assert!(app.controller().can_logout());
        assert_eq!(app.ui_state().gate_form.fields()[0].value, "o");

        app.handle_key_event(KeyEvent::new(KeyCode::Char('o'), KeyModifiers::CONTROL));

        assert!(!app.controller().can_logout());
        assert_eq!(app.controller().active_section(), Section::Home);
        assert_eq!(app.ui_state().view, View::Gate);
    }

    #[test]
    fn test_help_swallows_next_key() {
        let mut app = App::new(&DashboardConfig::default());
        press(&mut app, KeyCode::Char('?'));
        assert!(app.ui_state().show_help);

        press(&mut app, KeyCode::Char('3'));

        assert!(!app.ui_state().show_help);
        assert_eq!(app.controller().active_section(), Section::Home);
    }

    #[test]
    fn test_enter_on_home_does_not_open_gate() {
        let mut app = App::new(&DashboardConfig::default());
        press(&mut app, KeyCode::Enter);

        assert!(!app.controller().is_gate_open());
    }
}
