use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui_mode::app::App;

pub fn render_help(frame: &mut Frame, app: &mut App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(Color::Yellow))
        .title(" exprcalc Help ")
        .title_alignment(Alignment::Center)
        .style(Style::default().bg(Color::Black));

    let section = |title: &'static str| {
        Line::from(Span::styled(
            title,
            Style::default().fg(Color::Cyan).add_modifier(Modifier::UNDERLINED),
        ))
    };

    let help_text = vec![
        Line::from(Span::styled(
            "exprcalc - Arithmetic Expression Calculator",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        section("Operators:"),
        Line::from("  + : Addition        (e.g., 5 + 3 = 8)"),
        Line::from("  - : Subtraction     (e.g., 10 - 4 = 6)"),
        Line::from("  * : Multiplication  (e.g., 6 * 7 = 42)"),
        Line::from("  / : Division        (e.g., 15 / 3 = 5.0)"),
        Line::from(""),
        section("Numbers:"),
        Line::from("  Integers stay integers: 2 + 2 = 4"),
        Line::from("  Decimals force decimal results: 2 + 2.0 = 4.0"),
        Line::from("  Division always gives a decimal: 4 / 2 = 2.0"),
        Line::from("  A leading dot is fine: .5 = 0.5"),
        Line::from("  Division by zero gives NaN, not an error: 1 / 0 = NaN"),
        Line::from(""),
        section("Grouping and negation:"),
        Line::from("  Parentheses nest freely: (1 - (2 - 3)) * 4 = 8"),
        Line::from("  Unary minus repeats: --5 = 5, ---5 = -5"),
        Line::from(""),
        section("Commands:"),
        Line::from("  clear : Clear calculation history"),
        Line::from("  help  : Show this help screen"),
        Line::from("  quit  : Exit the calculator"),
        Line::from(""),
        section("Navigation:"),
        Line::from("  ← → : Move cursor left/right"),
        Line::from("  Ctrl+←/→ : Move cursor by words"),
        Line::from("  Home/End : Move to start/end of line"),
        Line::from("  Ctrl+U : Clear current input"),
        Line::from("  ↑ ↓ : Navigate calculation history"),
        Line::from("  PgUp/PgDn : Page through history"),
        Line::from("  Mouse wheel : Scroll through history"),
        Line::from(""),
        section("Examples:"),
        Line::from("  1 + 2 * 3"),
        Line::from("  (1 + 2) * 3"),
        Line::from("  27 / 3 / 3 / 3"),
        Line::from("  ------------10"),
        Line::from("  .1 + .1"),
    ];

    let paragraph = Paragraph::new(help_text)
        .block(block)
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: true })
        .scroll((app.help_scroll as u16, 0));

    frame.render_widget(Clear, frame.size());
    frame.render_widget(paragraph, frame.size());
}
