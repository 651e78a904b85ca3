//! Dashboard rendering
//!
//! The renderer only draws what the access controller has reported. It never
//! decides by itself whether a section is locked.

use crate::catalog::{Card, SectionCatalog};
use crate::gate_form::GateForm;

use opti_transit_access::{AccessState, AuthMode, Section, View, ViewChange};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Padding, Paragraph, Wrap},
};

/// Sidebar width when expanded
pub const SIDEBAR_EXPANDED_WIDTH: u16 = 30;

/// Sidebar width when collapsed to icons
pub const SIDEBAR_COLLAPSED_WIDTH: u16 = 9;

/// UI state management
#[derive(Debug, Clone)]
pub struct UiState {
    /// Latest view reported by the controller
    pub view: View,
    /// Access state the view was resolved from
    pub access: AccessState,
    /// Whether the sidebar shows labels
    pub sidebar_expanded: bool,
    /// Whether to show help overlay
    pub show_help: bool,
    /// Authentication form shown while the gate is open
    pub gate_form: GateForm,
}

impl UiState {
    /// Create a new UI state from the controller's current output
    #[must_use]
    pub fn new(view: View, access: AccessState, sidebar_expanded: bool) -> Self {
        Self {
            view,
            access,
            sidebar_expanded,
            show_help: false,
            gate_form: GateForm::new(),
        }
    }

    /// Apply a notification from the controller
    pub fn apply_change(&mut self, change: ViewChange) {
        // Fresh form every time the gate opens
        if change.view == View::Gate && self.view != View::Gate {
            self.gate_form.reset();
        }

        self.view = change.view;
        self.access = change.state;
    }

    /// Toggle between labelled and icon-only sidebar
    pub const fn toggle_sidebar(&mut self) {
        self.sidebar_expanded = !self.sidebar_expanded;
    }

    /// Toggle help overlay
    pub const fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }
}

/// Section identifier with its first letter capitalised, e.g. `ThirdPartyLogistics`
#[must_use]
pub fn section_title(section: Section) -> String {
    let name = section.as_str();
    let mut chars = name.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

/// Main UI rendering function
pub fn render_ui(frame: &mut Frame, ui_state: &UiState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Sidebar and content
            Constraint::Length(1), // Footer
        ])
        .split(frame.area());

    render_header(frame, chunks[0], ui_state);

    let sidebar_width = if ui_state.sidebar_expanded {
        SIDEBAR_EXPANDED_WIDTH
    } else {
        SIDEBAR_COLLAPSED_WIDTH
    };

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(sidebar_width), Constraint::Min(0)])
        .split(chunks[1]);

    render_sidebar(frame, body[0], ui_state);

    match ui_state.view {
        View::Gate => render_gate(frame, body[1], ui_state),
        View::Locked => render_locked(frame, body[1], ui_state.access.active_section()),
        View::Content(section) => render_section(frame, body[1], section),
    }

    render_footer(frame, chunks[2], ui_state);

    if ui_state.show_help {
        render_help_overlay(frame, frame.area());
    }
}

/// Render the header with title
fn render_header(frame: &mut Frame, area: Rect, ui_state: &UiState) {
    let mut spans = vec![Span::styled(
        "Opti-Transit Overview",
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )];

    if ui_state.access.can_logout() {
        // Plain `o` is typed into the form while the gate is open
        let hint = if ui_state.view == View::Gate {
            "[Ctrl+O] Log out"
        } else {
            "[o] Log out"
        };
        spans.push(Span::raw("   "));
        spans.push(Span::styled(hint, Style::default().fg(Color::Red)));
    }

    let paragraph = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::BOTTOM))
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

fn render_sidebar(frame: &mut Frame, area: Rect, ui_state: &UiState) {
    let active = ui_state.access.active_section();

    let items: Vec<ListItem> = SectionCatalog::entries()
        .map(|entry| {
            let is_active = entry.section == active;
            let is_locked = !ui_state.access.is_unlocked(entry.section);

            let style = if is_active {
                Style::default()
                    .fg(Color::White)
                    .bg(Color::Blue)
                    .add_modifier(Modifier::BOLD)
            } else if is_locked {
                Style::default().fg(Color::DarkGray)
            } else {
                Style::default().fg(Color::LightBlue)
            };

            let lock = if is_locked { "*" } else { " " };
            let text = if ui_state.sidebar_expanded {
                format!(
                    " {} {} {}{lock}",
                    entry.section.index() + 1,
                    entry.icon,
                    entry.label
                )
            } else {
                format!(" {} {}{lock}", entry.section.index() + 1, entry.icon)
            };

            ListItem::new(Line::from(Span::styled(text, style)))
        })
        .collect();

    let title = if ui_state.sidebar_expanded {
        " Sections "
    } else {
        " ≡ "
    };

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .padding(Padding::vertical(1)),
    );

    frame.render_widget(list, area);
}

fn render_section(frame: &mut Frame, area: Rect, section: Section) {
    let cards_area = if section.is_home() {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(6), Constraint::Min(0)])
            .split(area);
        render_home_banner(frame, chunks[0]);
        chunks[1]
    } else {
        area
    };

    let entry = SectionCatalog::entry(section);
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(cards_area);

    for (card, column) in entry.cards.iter().zip(columns.iter()) {
        render_card(frame, *column, card);
    }
}

fn render_home_banner(frame: &mut Frame, area: Rect) {
    let banner = SectionCatalog::home_banner();

    let text = vec![
        Line::from(Span::styled(
            banner.title,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            banner.subtitle,
            Style::default().fg(Color::LightBlue),
        )),
        Line::from(banner.body),
    ];

    let paragraph = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .style(Style::default().bg(Color::Blue)),
        )
        .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, area);
}

fn render_card(frame: &mut Frame, area: Rect, card: &Card) {
    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("▨ {}", card.illustration),
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )),
        Line::from(""),
        Line::from(card.description),
    ];

    let paragraph = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", card.title))
                .title_style(Style::default().add_modifier(Modifier::BOLD))
                .padding(Padding::horizontal(1)),
        )
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, area);
}

/// Placeholder for a section the session has not unlocked
fn render_locked(frame: &mut Frame, area: Rect, section: Section) {
    let text = vec![
        Line::from(""),
        Line::from(format!("Please log in to access {section} features.")),
        Line::from(""),
        Line::from(Span::styled(
            "[ Log In / Sign Up ]",
            Style::default()
                .fg(Color::Black)
                .bg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press Enter to continue",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let card_area = centered_rect(70, 60, area);
    let paragraph = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} Dashboard ", section_title(section)))
                .title_style(
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
        )
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, card_area);
}

/// Authentication form
fn render_gate(frame: &mut Frame, area: Rect, ui_state: &UiState) {
    let section = ui_state.access.active_section();
    let form = &ui_state.gate_form;

    let tab_style = |mode: AuthMode| {
        if form.mode() == mode {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        }
    };

    let mut text = vec![
        Line::from(Span::styled(
            format!("Sign up or log in to access {section} features"),
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("   Login   ", tab_style(AuthMode::Login)),
            Span::raw(" "),
            Span::styled("  Sign Up  ", tab_style(AuthMode::Signup)),
        ]),
        Line::from(""),
    ];

    for (i, field) in form.fields().iter().enumerate() {
        let is_focused = i == form.focused();
        let label_style = if is_focused {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };

        text.push(Line::from(Span::styled(field.label, label_style)));

        let prefix = if is_focused { "> " } else { "  " };
        let value = if field.value.is_empty() {
            Span::styled(field.placeholder, Style::default().fg(Color::DarkGray))
        } else {
            Span::raw(field.display_value())
        };
        let cursor = if is_focused { "_" } else { "" };

        text.push(Line::from(vec![Span::raw(prefix), value, Span::raw(cursor)]));
        text.push(Line::from(""));
    }

    let submit = match form.mode() {
        AuthMode::Login => "[ Log in ]",
        AuthMode::Signup => "[ Sign up ]",
    };

    text.push(Line::from(Span::styled(
        submit,
        Style::default()
            .fg(Color::Black)
            .bg(Color::White)
            .add_modifier(Modifier::BOLD),
    )));
    text.push(Line::from(""));
    text.push(Line::from(Span::styled(
        "Esc: Back to Dashboard",
        Style::default().fg(Color::DarkGray),
    )));

    let card_area = centered_rect(70, 90, area);
    frame.render_widget(Clear, card_area);

    let paragraph = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} Access ", section_title(section)))
                .title_style(
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )
                .padding(Padding::horizontal(2)),
        )
        .alignment(Alignment::Left);

    frame.render_widget(paragraph, card_area);
}

/// Render footer with context-aware key hints
fn render_footer(frame: &mut Frame, area: Rect, ui_state: &UiState) {
    let key = |k: &'static str, color: Color| Span::styled(k, Style::default().fg(color));

    let mut spans = vec![Span::styled(
        "Keys: ",
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )];

    if ui_state.view == View::Gate {
        spans.extend(vec![
            key("Tab", Color::Yellow),
            Span::raw(":login/sign up "),
            key("↑/↓", Color::Yellow),
            Span::raw(":field "),
            key("Enter", Color::Green),
            Span::raw(":submit "),
            key("Esc", Color::Red),
            Span::raw(":back "),
            key("PgUp/PgDn", Color::Blue),
            Span::raw(":section"),
        ]);
    } else {
        spans.extend(vec![
            key("q", Color::Red),
            Span::raw(":quit "),
            key("↑/↓", Color::Blue),
            Span::raw(":section "),
            key("1-6", Color::Blue),
            Span::raw(":jump "),
        ]);

        if ui_state.view == View::Locked {
            spans.push(key("Enter", Color::Green));
            spans.push(Span::raw(":log in "));
        }

        if ui_state.access.can_logout() {
            spans.push(key("o", Color::Red));
            spans.push(Span::raw(":log out "));
        }

        spans.extend(vec![
            key("b", Color::Yellow),
            Span::raw(":sidebar "),
            key("?", Color::White),
            Span::raw(":help"),
        ]);
    }

    let paragraph = Paragraph::new(Line::from(spans))
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

/// Render help overlay
fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let underlined = Style::default().add_modifier(Modifier::UNDERLINED);

    let help_text = vec![
        Line::from(Span::styled(
            "Keyboard Shortcuts",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled("Navigation:", underlined)),
        Line::from("  ↑/↓       Previous / next section"),
        Line::from("  [1-6]     Jump to section by number"),
        Line::from("  b         Collapse / expand sidebar"),
        Line::from(""),
        Line::from(Span::styled("Access:", underlined)),
        Line::from("  Enter     Open login on a locked section"),
        Line::from("  Tab       Switch between Login and Sign Up"),
        Line::from("  Esc       Back to dashboard"),
        Line::from("  o         Log out of all sections"),
        Line::from("  Ctrl+O    Log out while the access form is open"),
        Line::from(""),
        Line::from(Span::styled("Other:", underlined)),
        Line::from("  ?         Toggle this help"),
        Line::from("  q         Quit application"),
        Line::from(""),
        Line::from("Press any key to close this help"),
    ];

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .style(Style::default().bg(Color::Black));

    let help_area = centered_rect(60, 70, area);
    frame.render_widget(Clear, help_area);

    let paragraph = Paragraph::new(help_text)
        .block(block)
        .alignment(Alignment::Left);

    frame.render_widget(paragraph, help_area);
}

/// Helper to create centered rect
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
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
