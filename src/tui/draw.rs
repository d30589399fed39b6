use ratatui::{
    backend::TestBackend,
    buffer::Buffer,
    layout::Margin,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame, Terminal,
};
use crate::tui::state::App;

pub const TITLE: &str = "CC-Flux Controller";
pub const HELP: &str = "Press q to quit.";

fn title_style() -> Style {
    Style::default()
        .fg(Color::Rgb(0xFF, 0xFD, 0xF5))
        .bg(Color::Rgb(0x25, 0xA0, 0x65))
}

fn item_style() -> Style {
    Style::default()
}

fn selected_item_style() -> Style {
    Style::default()
        .fg(Color::Indexed(170))
        .add_modifier(Modifier::BOLD)
}

fn status_style() -> Style {
    Style::default().fg(Color::Indexed(241))
}

fn error_style() -> Style {
    Style::default().fg(Color::Indexed(9))
}

// ── Drawing ───────────────────────────────────────────────────────────────────

/// Everything on screen, as styled lines. No I/O, so it can be asserted on directly.
pub fn view(app: &App) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(format!(" {TITLE} "), title_style())),
        Line::from(""),
    ];

    for (i, provider) in app.providers.iter().enumerate() {
        let (marker, style) = if i == app.cursor {
            (">", selected_item_style())
        } else {
            (" ", item_style())
        };
        lines.push(Line::from(Span::styled(
            format!("  {marker} {}", provider.display_name),
            style,
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(app.status.clone(), status_style())));
    if let Some(err) = &app.last_error {
        lines.push(Line::from(Span::styled(err.to_string(), error_style())));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(HELP));
    lines
}

pub fn draw(f: &mut Frame, app: &App) {
    let area = f.area().inner(Margin {
        vertical: 1,
        horizontal: 2,
    });
    f.render_widget(Paragraph::new(view(app)), area);
}

/// Render one frame off-screen.
pub fn render_to_buffer(app: &App, width: u16, height: u16) -> Buffer {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).expect("TestBackend terminal");
    terminal.draw(|f| draw(f, app)).expect("draw");
    terminal.backend().buffer().clone()
}
