use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
    Frame,
};

use crate::app::{App, Feedback, Target};
use crate::interpreter::{CommandTable, BUILTINS};
use crate::sections::{render_lines, SectionView};
use crate::widgets::{push_edit_cursor, UiColors};

const PROMPT: &str = "portfolio@terminal:~$ ";
const PLACEHOLDER: &str = "Type a command... (try 'help')";
/// Commands shown in the history echo.
const HISTORY_ECHO: usize = 4;

/// Main render function called from the event loop.
///
/// Takes `&mut App` because each draw records the clickable regions and the
/// content height used for scrolling.
pub fn render(frame: &mut Frame, app: &mut App) {
    let colors = UiColors::from_palette(&app.palette());
    app.click_regions.clear();

    let help_lines = if app.interpreter.help_visible() {
        help_panel_lines(app.interpreter.table(), app.shortcut_modifier(), &colors)
    } else {
        Vec::new()
    };
    let help_height = if help_lines.is_empty() {
        0
    } else {
        u16::try_from(help_lines.len() + 2).unwrap_or(u16::MAX)
    };

    // Top-level vertical layout:
    //   [title bar]
    //   [navigation bar]
    //   [shortcut hints]
    //   [content]
    //   [help panel, when shown]
    //   [feedback, or the history echo]
    //   [prompt]
    //   [status bar]
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(help_height),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(frame.area());

    render_title_bar(frame, app, outer[0], &colors);
    render_nav_bar(frame, app, outer[1], &colors);
    render_hints(frame, app, outer[2], &colors);
    render_content(frame, app, outer[3], &colors);
    if !help_lines.is_empty() {
        render_help_panel(frame, help_lines, outer[4], &colors);
    }
    render_feedback(frame, app, outer[5], &colors);
    render_prompt(frame, app, outer[6], &colors);
    render_status_bar(frame, app, outer[7], &colors);
}

fn render_title_bar(frame: &mut Frame, app: &App, area: Rect, colors: &UiColors) {
    let line = Line::from(vec![
        Span::styled(" ● ", Style::default().fg(colors.error)),
        Span::styled("● ", Style::default().fg(colors.warning)),
        Span::styled("● ", Style::default().fg(colors.success)),
        Span::styled(
            format!(" portfolio@terminal: ~/{}", app.section),
            Style::default().fg(colors.muted),
        ),
    ]);
    let paragraph = Paragraph::new(line).style(Style::default().bg(colors.bar_bg));
    frame.render_widget(paragraph, area);
}

/// Clickable list of canonical section names.
fn render_nav_bar(frame: &mut Frame, app: &mut App, area: Rect, colors: &UiColors) {
    let label = " Quick navigation: ";
    let mut spans = vec![Span::styled(label, Style::default().fg(colors.muted))];
    let mut x = area.x.saturating_add(width_of(label));

    let canonical = app.interpreter.table().canonical().to_vec();
    for (i, section) in canonical.into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ", Style::default().fg(colors.border)));
            x = x.saturating_add(3);
        }
        let name = section.name();
        let style = if section == app.section {
            Style::default()
                .fg(colors.prompt)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(colors.link)
        };
        spans.push(Span::styled(name, style));

        let width = width_of(name);
        let region = Rect::new(x, area.y, width, 1).intersection(area);
        if !region.is_empty() {
            app.click_regions.register(region, Target::Section(section));
        }
        x = x.saturating_add(width);
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_hints(frame: &mut Frame, app: &App, area: Rect, colors: &UiColors) {
    let count = app.interpreter.table().canonical().len();
    let modifier = app.shortcut_modifier();
    let shortcut = if count > 1 {
        format!("{modifier}+1-{count}")
    } else {
        format!("{modifier}+1")
    };
    let hints = format!(
        " {shortcut}: sections  Tab: complete  ↑↓: history  Esc: scroll mode  Ctrl+T: theme"
    );
    let paragraph = Paragraph::new(Line::from(Span::styled(
        hints,
        Style::default().fg(colors.muted).italic(),
    )));
    frame.render_widget(paragraph, area);
}

fn render_content(frame: &mut Frame, app: &mut App, area: Rect, colors: &UiColors) {
    let lines = {
        let view = SectionView {
            profile: &app.profile,
            catalog: app.catalog.as_ref(),
            colors,
            typed: app.typewriter.visible(),
        };
        render_lines(app.section, &view)
    };

    let border_color = if app.interpreter.is_focused() {
        colors.border
    } else {
        colors.accent
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .padding(Padding::horizontal(1));
    let inner = block.inner(area);

    app.viewport
        .set_bounds(wrapped_rows(&lines, inner.width), inner.height);

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((app.viewport.offset(), 0));
    frame.render_widget(paragraph, area);
}

fn help_panel_lines(
    table: &CommandTable,
    modifier: &str,
    colors: &UiColors,
) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (i, section) in table.canonical().iter().enumerate() {
        let mut spans = vec![
            Span::styled(
                format!("{:<14}", section.name()),
                Style::default().fg(colors.prompt),
            ),
            Span::styled(section.description(), Style::default().fg(colors.text)),
        ];
        let aliases = table.aliases(*section);
        if !aliases.is_empty() {
            spans.push(Span::styled(
                format!("  (aliases: {})", aliases.join(", ")),
                Style::default().fg(colors.muted),
            ));
        }
        spans.push(Span::styled(
            format!("  {modifier}+{}", i + 1),
            Style::default().fg(colors.subheading),
        ));
        lines.push(Line::from(spans));
    }
    for builtin in BUILTINS {
        lines.push(Line::from(vec![
            Span::styled(format!("{builtin:<14}"), Style::default().fg(colors.prompt)),
            Span::styled(builtin_description(builtin), Style::default().fg(colors.text)),
        ]));
    }
    lines
}

fn builtin_description(builtin: &str) -> &'static str {
    match builtin {
        "clear" => "Clear command history",
        "help" => "Toggle this help",
        "exit" => "Leave the portfolio",
        _ => "",
    }
}

fn render_help_panel(frame: &mut Frame, lines: Vec<Line<'static>>, area: Rect, colors: &UiColors) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.subheading))
        .title(" Available Commands ")
        .title_style(Style::default().fg(colors.subheading).bold())
        .padding(Padding::horizontal(1));
    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().bg(colors.panel_bg));
    frame.render_widget(paragraph, area);
}

fn render_feedback(frame: &mut Frame, app: &App, area: Rect, colors: &UiColors) {
    let Some(feedback) = &app.feedback else {
        render_history_echo(frame, app, area, colors);
        return;
    };
    let color = match feedback {
        Feedback::NotFound { .. } => colors.error,
        Feedback::HistoryCleared => colors.muted,
    };
    let paragraph = Paragraph::new(Line::from(Span::styled(
        format!(" {feedback}"),
        Style::default().fg(color),
    )));
    frame.render_widget(paragraph, area);
}

/// Most recent commands, newest last, in the spare feedback row.
fn render_history_echo(frame: &mut Frame, app: &App, area: Rect, colors: &UiColors) {
    let history = app.interpreter.history();
    if history.is_empty() {
        return;
    }
    let recent = &history[history.len().saturating_sub(HISTORY_ECHO)..];
    let paragraph = Paragraph::new(Line::from(vec![
        Span::styled(" history: ", Style::default().fg(colors.muted)),
        Span::styled(recent.join("  "), Style::default().fg(colors.muted).italic()),
    ]));
    frame.render_widget(paragraph, area);
}

fn render_prompt(frame: &mut Frame, app: &mut App, area: Rect, colors: &UiColors) {
    let mut spans = vec![Span::styled(
        format!(" {PROMPT}"),
        Style::default()
            .fg(colors.prompt)
            .add_modifier(Modifier::BOLD),
    )];

    let input = app.interpreter.input_state();
    let focused = app.interpreter.is_focused();
    if focused {
        push_edit_cursor(&mut spans, input.text(), input.cursor_pos, colors);
    } else {
        spans.push(Span::styled(input.text().to_string(), Style::default().fg(colors.text)));
    }
    if input.text().is_empty() {
        spans.push(Span::styled(PLACEHOLDER, Style::default().fg(colors.muted).italic()));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
    app.click_regions.register(area, Target::Prompt);
}

fn render_status_bar(frame: &mut Frame, app: &mut App, area: Rect, colors: &UiColors) {
    let current = format!(" Current: {} ", app.section);
    let toggle = if app.interpreter.help_visible() {
        "[Hide Help]"
    } else {
        "[Show Help]"
    };
    let tip = "  Tip: use Tab for auto-completion, ↑↓ for command history";

    let toggle_x = area.x.saturating_add(width_of(&current));
    let region = Rect::new(toggle_x, area.y, width_of(toggle), 1).intersection(area);
    if !region.is_empty() {
        app.click_regions.register(region, Target::HelpToggle);
    }

    let line = Line::from(vec![
        Span::styled(current, Style::default().fg(colors.prompt)),
        Span::styled(
            toggle,
            Style::default()
                .fg(colors.link)
                .add_modifier(Modifier::UNDERLINED),
        ),
        Span::styled(tip, Style::default().fg(colors.muted)),
    ]);
    let paragraph = Paragraph::new(line).style(Style::default().bg(colors.bar_bg));
    frame.render_widget(paragraph, area);
}

fn width_of(text: &str) -> u16 {
    u16::try_from(Span::raw(text).width()).unwrap_or(u16::MAX)
}

/// Rows `lines` take once wrapped to `width` columns.
fn wrapped_rows(lines: &[Line], width: u16) -> usize {
    let width = usize::from(width.max(1));
    lines
        .iter()
        .map(|line| line.width().div_ceil(width).max(1))
        .sum()
}
