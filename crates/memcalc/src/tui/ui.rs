//! TUI rendering
//!
//! Draws the display, the memory indicator, the keypad and a help sidebar
//! from the app's [`TuiView`](super::app::TuiView).

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget},
    Frame,
};

use super::app::CalculatorApp;
use super::keypad::KeypadWidget;
use crate::config::TuiConfig;
use crate::core::{MemoryIndicator, ERROR_TEXT};

/// Width of the keypad column
pub const KEYPAD_WIDTH: u16 = 30;
/// Width of the help column
pub const HELP_WIDTH: u16 = 24;

/// Title drawn on the outer border
pub const TITLE: &str = " Memory Calculator ";

/// Key help shown in the sidebar
pub const HELP_SHORTCUTS: &[(&str, &str)] = &[
    ("Enter", "Evaluate"),
    ("Bksp", "Delete last"),
    ("Esc", "Clear"),
    ("s", "Square root"),
    ("%", "Percent"),
    ("F2", "MC"),
    ("F3", "MR"),
    ("F4", "M+"),
    ("F5", "M-"),
    ("F6", "Square"),
    ("Ctrl+C", "Quit"),
];

/// Operators help
pub const HELP_OPERATORS: &str = "Ops: + - * / ( ) .";

/// Screen regions for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiLayout {
    /// Display box
    pub display: Rect,
    /// Memory indicator box
    pub memory: Rect,
    /// Keypad, when shown
    pub keypad: Option<Rect>,
    /// Help sidebar, when shown
    pub help: Option<Rect>,
}

impl UiLayout {
    /// Splits `area` according to `config`
    #[must_use]
    pub fn new(area: Rect, config: &TuiConfig) -> Self {
        let mut constraints = vec![Constraint::Min(20)];
        if config.show_keypad {
            constraints.push(Constraint::Length(KEYPAD_WIDTH));
        }
        if config.show_help {
            constraints.push(Constraint::Length(HELP_WIDTH));
        }

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .margin(1)
            .constraints(constraints)
            .split(area);

        let main = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Display
                Constraint::Length(3), // Memory
                Constraint::Min(0),
            ])
            .split(columns[0]);

        let mut rest = columns.iter().skip(1).copied();
        let keypad = config.show_keypad.then(|| rest.next()).flatten();
        let help = config.show_help.then(|| rest.next()).flatten();

        Self {
            display: main[0],
            memory: main[1],
            keypad,
            help,
        }
    }
}

/// Renders the calculator UI to the frame
pub fn render(app: &CalculatorApp, frame: &mut Frame) {
    let area = frame.area();
    frame.render_widget(CalculatorUI::new(app), area);
}

/// Style of the memory indicator for its emphasis
#[must_use]
pub fn memory_style(indicator: &MemoryIndicator) -> Style {
    if indicator.is_active() {
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::DIM)
    }
}

/// Calculator UI widget
#[derive(Debug)]
pub struct CalculatorUI<'a> {
    app: &'a CalculatorApp,
}

impl<'a> CalculatorUI<'a> {
    #[must_use]
    pub fn new(app: &'a CalculatorApp) -> Self {
        Self { app }
    }

    fn render_display(&self, area: Rect, buf: &mut Buffer) {
        let text = &self.app.view().display;
        let style = if text == ERROR_TEXT {
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };

        Paragraph::new(Span::styled(text.as_str(), style))
            .alignment(Alignment::Right)
            .block(
                Block::default()
                    .title(" Display ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .render(area, buf);
    }

    fn render_memory(&self, area: Rect, buf: &mut Buffer) {
        let indicator = &self.app.view().memory;
        Paragraph::new(Span::styled(
            indicator.label.as_str(),
            memory_style(indicator),
        ))
        .block(
            Block::default()
                .title(" Memory ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Magenta)),
        )
        .render(area, buf);
    }

    fn render_help(area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(5), Constraint::Length(2)])
            .split(area);

        let shortcuts: Vec<ListItem> = HELP_SHORTCUTS
            .iter()
            .map(|(key, desc)| {
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{key:>7}"), Style::default().fg(Color::Yellow)),
                    Span::raw(" "),
                    Span::styled(*desc, Style::default().fg(Color::Gray)),
                ]))
            })
            .collect();

        List::new(shortcuts)
            .block(
                Block::default()
                    .title(" Help ")
                    .borders(Borders::LEFT | Borders::RIGHT | Borders::TOP)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .render(chunks[0], buf);

        Paragraph::new(Span::styled(
            HELP_OPERATORS,
            Style::default().fg(Color::Cyan),
        ))
        .block(
            Block::default()
                .borders(Borders::LEFT | Borders::RIGHT | Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .render(chunks[1], buf);
    }
}

impl Widget for CalculatorUI<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(TITLE)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .render(area, buf);

        let layout = UiLayout::new(area, self.app.config());
        self.render_display(layout.display, buf);
        self.render_memory(layout.memory, buf);
        if let Some(keypad_area) = layout.keypad {
            KeypadWidget::new(self.app.keypad()).render(keypad_area, buf);
        }
        if let Some(help_area) = layout.help {
            Self::render_help(help_area, buf);
        }
    }
}
