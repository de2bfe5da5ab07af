//! Keypad widget for the TUI calculator
//!
//! Laid out from the shared [`KEYPAD_ROWS`] grid. Buttons can be clicked with
//! the mouse and light up when their key is pressed.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Widget},
};

use crate::keymap::{Action, KEYPAD_ROWS};

/// A single keypad button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButton {
    /// The action this button performs
    pub action: Action,
    /// Grid row
    pub row: usize,
    /// Grid column
    pub col: usize,
    /// Whether the button is currently highlighted
    pub pressed: bool,
}

impl KeypadButton {
    /// Text drawn on the button
    #[must_use]
    pub fn label(&self) -> String {
        self.action.label()
    }

    fn style(&self) -> Style {
        if self.pressed {
            return Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD);
        }
        match self.action {
            Action::Append(c) if c.is_ascii_digit() || c == '.' => {
                Style::default().fg(Color::White)
            }
            Action::Append(_) => Style::default().fg(Color::Yellow),
            Action::Evaluate => Style::default().fg(Color::Green),
            Action::Clear | Action::DeleteLast => Style::default().fg(Color::Red),
            Action::MemoryClear
            | Action::MemoryRecall
            | Action::MemoryAdd
            | Action::MemorySubtract => Style::default().fg(Color::Magenta),
            Action::SquareRoot | Action::Percentage | Action::Square => {
                Style::default().fg(Color::Cyan)
            }
        }
    }
}

/// The keypad grid
#[derive(Debug, Clone)]
pub struct Keypad {
    buttons: Vec<KeypadButton>,
    cols: usize,
    rows: usize,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard memory calculator keypad
    #[must_use]
    pub fn new() -> Self {
        let buttons: Vec<KeypadButton> = KEYPAD_ROWS
            .iter()
            .enumerate()
            .flat_map(|(row, actions)| {
                actions.iter().enumerate().map(move |(col, action)| KeypadButton {
                    action: *action,
                    row,
                    col,
                    pressed: false,
                })
            })
            .collect();

        Self {
            buttons,
            cols: KEYPAD_ROWS.iter().map(|r| r.len()).max().unwrap_or(0),
            rows: KEYPAD_ROWS.len(),
        }
    }

    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Returns the grid dimensions (rows, cols)
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        self.buttons.iter().find(|b| b.row == row && b.col == col)
    }

    pub fn buttons(&self) -> impl Iterator<Item = &KeypadButton> {
        self.buttons.iter()
    }

    /// Button currently highlighted, if any
    #[must_use]
    pub fn pressed(&self) -> Option<&KeypadButton> {
        self.buttons.iter().find(|b| b.pressed)
    }

    pub fn release_all(&mut self) {
        for btn in &mut self.buttons {
            btn.pressed = false;
        }
    }

    /// Highlights the button for `action`, releasing any other
    pub fn highlight(&mut self, action: Action) {
        for btn in &mut self.buttons {
            btn.pressed = btn.action == action;
        }
    }

    /// Converts a click position inside `area` to the action under it
    #[must_use]
    pub fn hit_test(&self, area: Rect, x: u16, y: u16) -> Option<Action> {
        if x < area.x || y < area.y || x >= area.x + area.width || y >= area.y + area.height {
            return None;
        }

        let rel_x = x - area.x;
        let rel_y = y - area.y;

        // Account for border (1 char on each side)
        if rel_x == 0 || rel_y == 0 || rel_x >= area.width - 1 || rel_y >= area.height - 1 {
            return None;
        }

        let btn_width = (area.width - 2) / self.cols as u16;
        let btn_height = (area.height - 2) / self.rows as u16;
        if btn_width == 0 || btn_height == 0 {
            return None;
        }

        let col = ((rel_x - 1) / btn_width) as usize;
        let row = ((rel_y - 1) / btn_height) as usize;
        self.get_button_at(row, col).map(|b| b.action)
    }
}

/// Keypad widget for rendering
#[derive(Debug)]
pub struct KeypadWidget<'a> {
    keypad: &'a Keypad,
}

impl<'a> KeypadWidget<'a> {
    #[must_use]
    pub fn new(keypad: &'a Keypad) -> Self {
        Self { keypad }
    }
}

impl Widget for KeypadWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(" Keypad ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .render(area, buf);

        let inner = Rect {
            x: area.x + 1,
            y: area.y + 1,
            width: area.width.saturating_sub(2),
            height: area.height.saturating_sub(2),
        };

        let (rows, cols) = self.keypad.dimensions();
        if inner.width < cols as u16 * 4 || inner.height < rows as u16 {
            return; // Too small to render
        }

        let btn_width = inner.width / cols as u16;
        let btn_height = inner.height / rows as u16;

        for btn in self.keypad.buttons() {
            let x = inner.x + (btn.col as u16 * btn_width);
            let y = inner.y + (btn.row as u16 * btn_height);

            let label = format!("[{}]", btn.label());
            let label_width = label.chars().count() as u16;
            let label_x = x + btn_width.saturating_sub(label_width) / 2;
            let label_y = y + btn_height / 2;

            buf.set_span(
                label_x,
                label_y,
                &Span::styled(label, btn.style()),
                btn_width,
            );
        }
    }
}
