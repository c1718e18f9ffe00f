//! Terminal UI example using crossterm and ratatui.
//!
//! This example demonstrates how to drive an amount editor from a terminal
//! keyboard and render the filler digits dimmed.
//! Run with: cargo run --example tui_keypad

use amount_keypad::{
    AmountEditor, AmountView, InputEvent, KeyCode, KeyEvent, Modifiers, Mode, PlaceholderRange,
};
use crossterm::{
    event::{self, Event, KeyCode as CKeyCode, KeyEvent as CKeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use std::io;

/// Styled copy of the last frame the editor presented
#[derive(Default)]
struct AmountLine {
    spans: Vec<Span<'static>>,
}

impl AmountView for AmountLine {
    fn render(&mut self, formatted: &str, placeholder: Option<PlaceholderRange>) {
        let real = Style::default().add_modifier(Modifier::BOLD);
        let filler = Style::default().fg(Color::DarkGray);

        self.spans = match placeholder {
            Some(range) => {
                let (before, fill, after) = range.split(formatted);
                vec![
                    Span::styled(before.to_string(), real),
                    Span::styled(fill.to_string(), filler),
                    Span::styled(after.to_string(), real),
                ]
            }
            None => vec![Span::styled(formatted.to_string(), real)],
        };
    }
}

struct App {
    editor: AmountEditor,
    line: AmountLine,
    should_quit: bool,
}

impl App {
    fn new() -> Self {
        let editor = AmountEditor::new();
        let mut line = AmountLine::default();
        editor.present(&mut line);
        Self {
            editor,
            line,
            should_quit: false,
        }
    }

    fn handle_crossterm_event(&mut self, event: CKeyEvent) {
        if event.code == CKeyCode::Char('q') {
            self.should_quit = true;
            return;
        }

        let Some(input) = convert_crossterm_event(event) else {
            return;
        };
        if self.editor.handle_event(input).is_changed() {
            self.editor.present(&mut self.line);
        }
    }

    fn status(&self) -> String {
        let mode = match self.editor.mode() {
            Mode::Whole => "whole dollars",
            Mode::FractionNoDigits => "cents: none typed",
            Mode::FractionOneDigit => "cents: one digit",
            Mode::FractionOneDigitTenths | Mode::FractionTwoDigits => "cents: complete",
        };
        format!("{mode} | {} cents", self.editor.amount().cents())
    }
}

fn convert_crossterm_event(event: CKeyEvent) -> Option<InputEvent> {
    let mut mods = Modifiers::empty();
    if event.modifiers.contains(KeyModifiers::SHIFT) {
        mods |= Modifiers::SHIFT;
    }
    if event.modifiers.contains(KeyModifiers::CONTROL) {
        mods |= Modifiers::CTRL;
    }
    if event.modifiers.contains(KeyModifiers::ALT) {
        mods |= Modifiers::ALT;
    }

    let code = match event.code {
        CKeyCode::Char(c) => KeyCode::Char(c),
        CKeyCode::Backspace | CKeyCode::Delete => KeyCode::Backspace,
        CKeyCode::Esc => KeyCode::Esc,
        CKeyCode::Enter => KeyCode::Enter,
        _ => return None,
    };
    Some(InputEvent::Key(KeyEvent { code, mods }))
}

fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([Constraint::Min(3), Constraint::Length(3)].as_ref())
        .split(f.size());

    let amount = Paragraph::new(Line::from(app.line.spans.clone()))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("amount_keypad demo"),
        );
    f.render_widget(amount, chunks[0]);

    let help = format!(
        "{} | 0-9 . type, Backspace delete, Esc clear, q quit",
        app.status()
    );
    let status = Paragraph::new(help).block(Block::default().borders(Borders::ALL));
    f.render_widget(status, chunks[1]);
}

fn main() -> Result<(), io::Error> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new();

    loop {
        terminal.draw(|f| ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if key.code == CKeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                break;
            }

            app.handle_crossterm_event(key);

            if app.should_quit {
                break;
            }
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}
