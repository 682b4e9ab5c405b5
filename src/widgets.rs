//! Shared styling helpers for the terminal look.
//!
//! Section renderers and the frame layout build their lines from these so
//! prompts, headings, and badges look the same everywhere.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};
use ratatui_themes::ThemePalette;

/// Semantic color palette derived from the active theme.
/// Maps abstract UI roles to concrete `Color` values.
pub struct UiColors {
    pub prompt: Color,
    pub heading: Color,
    pub subheading: Color,
    pub link: Color,
    pub text: Color,
    pub muted: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub accent: Color,
    pub border: Color,
    pub bg: Color,
    pub bar_bg: Color,
    pub panel_bg: Color,
}

impl UiColors {
    pub fn from_palette(p: &ThemePalette) -> Self {
        let bar_bg = match p.bg {
            Color::Rgb(r, g, b) => Color::Rgb(
                r.saturating_add(10),
                g.saturating_add(10),
                b.saturating_add(15),
            ),
            _ => Color::Rgb(30, 30, 40),
        };

        let panel_bg = match p.selection {
            Color::Rgb(r, g, b) => Color::Rgb(r, g, b),
            _ => Color::Rgb(40, 40, 60),
        };

        Self {
            prompt: p.success,
            heading: p.info,
            subheading: p.warning,
            link: p.info,
            text: p.fg,
            muted: p.muted,
            success: p.success,
            warning: p.warning,
            error: p.error,
            accent: p.accent,
            border: p.muted,
            bg: p.bg,
            bar_bg,
            panel_bg,
        }
    }
}

/// `$ <command>` line that opens every section.
pub fn shell_line(command: &str, colors: &UiColors) -> Line<'static> {
    Line::from(Span::styled(
        format!("$ {command}"),
        Style::default().fg(colors.prompt),
    ))
}

/// Markdown-style `# Heading`.
pub fn heading(text: &str, colors: &UiColors) -> Line<'static> {
    Line::from(Span::styled(
        format!("# {text}"),
        Style::default()
            .fg(colors.heading)
            .add_modifier(Modifier::BOLD),
    ))
}

/// Markdown-style `## Subheading`.
pub fn subheading(text: &str, colors: &UiColors) -> Line<'static> {
    Line::from(Span::styled(
        format!("## {text}"),
        Style::default().fg(colors.subheading),
    ))
}

/// `> text` bullet.
pub fn bullet(text: &str, colors: &UiColors) -> Line<'static> {
    Line::from(vec![
        Span::styled("> ", Style::default().fg(colors.prompt)),
        Span::styled(text.to_string(), Style::default().fg(colors.text)),
    ])
}

/// `label: value` with the label highlighted.
pub fn label_value(label: &str, value: &str, colors: &UiColors) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label}: "), Style::default().fg(colors.link)),
        Span::styled(value.to_string(), Style::default().fg(colors.text)),
    ])
}

/// `[label]` badge in the given color.
pub fn badge(label: &str, color: Color) -> Span<'static> {
    Span::styled(
        format!("[{label}]"),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )
}

/// Horizontal bar for a 0-100 level, `width` cells wide.
pub fn level_bar(level: u8, width: usize) -> String {
    let level = usize::from(level.min(100));
    let filled = (level * width + 50) / 100;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

pub fn blank() -> Line<'static> {
    Line::default()
}

/// Push inline edit cursor spans (before_cursor + ▎ + after_cursor).
/// `cursor` is a char index into `text`.
pub fn push_edit_cursor(spans: &mut Vec<Span<'static>>, text: &str, cursor: usize, colors: &UiColors) {
    let split = text
        .char_indices()
        .nth(cursor)
        .map_or(text.len(), |(idx, _)| idx);
    let (before_cursor, after_cursor) = text.split_at(split);
    spans.push(Span::styled(
        before_cursor.to_string(),
        Style::default().fg(colors.text),
    ));
    spans.push(Span::styled(
        "▎",
        Style::default()
            .fg(colors.accent)
            .add_modifier(Modifier::SLOW_BLINK),
    ));
    spans.push(Span::styled(
        after_cursor.to_string(),
        Style::default().fg(colors.text),
    ));
}
