use std::fmt;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui_interact::traits::ClickRegionRegistry;
use ratatui_themes::{ThemeName, ThemePalette};

use crate::catalog::Catalog;
use crate::interpreter::{CommandTable, Interpreter, Outcome, Section};
use crate::profile::Profile;
use crate::typing::Typewriter;

/// Rows moved per mouse wheel notch.
const WHEEL_STEP: i32 = 3;

/// Actions that the event loop should take after handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    None,
    Quit,
}

/// What a registered screen region does when clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Section(Section),
    HelpToggle,
    Prompt,
}

/// One-line message shown above the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feedback {
    NotFound {
        command: String,
        suggestion: Option<String>,
    },
    HistoryCleared,
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Feedback::NotFound {
                command,
                suggestion: Some(suggestion),
            } => write!(f, "command not found: {command}. Did you mean '{suggestion}'?"),
            Feedback::NotFound {
                command,
                suggestion: None,
            } => write!(
                f,
                "command not found: {command}. Type 'help' for available commands."
            ),
            Feedback::HistoryCleared => f.write_str("history cleared"),
        }
    }
}

/// Vertical scroll state of the content pane.
///
/// `offset` is what is drawn; `target` is where it is heading. Manual
/// scrolling jumps straight there, `scroll_to_top` glides over a few ticks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Viewport {
    offset: u16,
    target: u16,
    max: u16,
    page: u16,
}

impl Viewport {
    pub fn offset(&self) -> u16 {
        self.offset
    }

    #[cfg(test)]
    pub fn target(&self) -> u16 {
        self.target
    }

    pub fn is_settled(&self) -> bool {
        self.offset == self.target
    }

    /// Record the content height and the visible height. Called on every draw.
    pub fn set_bounds(&mut self, content_rows: usize, visible_rows: u16) {
        let content = u16::try_from(content_rows).unwrap_or(u16::MAX);
        self.max = content.saturating_sub(visible_rows);
        self.page = visible_rows.max(1);
        self.offset = self.offset.min(self.max);
        self.target = self.target.min(self.max);
    }

    pub fn scroll_by(&mut self, delta: i32) {
        let next = (i32::from(self.target) + delta).clamp(0, i32::from(self.max));
        self.target = u16::try_from(next).unwrap_or(0);
        self.offset = self.target;
    }

    pub fn page_up(&mut self) {
        self.scroll_by(-i32::from(self.page));
    }

    pub fn page_down(&mut self) {
        self.scroll_by(i32::from(self.page));
    }

    pub fn scroll_to_end(&mut self) {
        self.target = self.max;
        self.offset = self.max;
    }

    /// Start a smooth scroll back to the first row.
    pub fn scroll_to_top(&mut self) {
        self.target = 0;
    }

    /// Move half the remaining distance toward the target. Returns whether
    /// the offset changed.
    pub fn tick(&mut self) -> bool {
        if self.is_settled() {
            return false;
        }
        let gap = self.offset.abs_diff(self.target);
        let step = gap.div_ceil(2);
        if self.offset > self.target {
            self.offset -= step;
        } else {
            self.offset += step;
        }
        true
    }
}

/// Main application state.
pub struct App {
    /// Section shown in the content pane.
    pub section: Section,
    pub interpreter: Interpreter,
    pub catalog: Box<dyn Catalog>,
    pub profile: Profile,

    /// Current color theme.
    pub theme_name: ThemeName,

    pub viewport: Viewport,
    /// Welcome line on the home section.
    pub typewriter: Typewriter,
    pub feedback: Option<Feedback>,
    /// Ctrl+digit reaches us intact. Off on legacy terminals, where the
    /// hints advertise Alt instead.
    pub ctrl_digits: bool,

    /// Click regions registered during the last render.
    pub click_regions: ClickRegionRegistry<Target>,
}

impl App {
    pub fn new(table: CommandTable, catalog: Box<dyn Catalog>) -> Self {
        Self::with_theme(table, catalog, ThemeName::default())
    }

    pub fn with_theme(table: CommandTable, catalog: Box<dyn Catalog>, theme_name: ThemeName) -> Self {
        let profile = Profile::default();
        let typewriter = Typewriter::new(profile.welcome);
        Self {
            section: Section::Home,
            interpreter: Interpreter::new(table),
            catalog,
            profile,
            theme_name,
            viewport: Viewport::default(),
            typewriter,
            feedback: None,
            ctrl_digits: true,
            click_regions: ClickRegionRegistry::new(),
        }
    }

    /// Modifier the section shortcuts are advertised with.
    pub fn shortcut_modifier(&self) -> &'static str {
        if self.ctrl_digits {
            "Ctrl"
        } else {
            "Alt"
        }
    }

    /// Get the current theme palette.
    pub fn palette(&self) -> ThemePalette {
        self.theme_name.palette()
    }

    /// Cycle to the next theme.
    pub fn next_theme(&mut self) {
        self.theme_name = self.theme_name.next();
        tracing::debug!(theme = ?self.theme_name, "theme changed");
    }

    /// Cycle to the previous theme.
    pub fn prev_theme(&mut self) {
        self.theme_name = self.theme_name.prev();
        tracing::debug!(theme = ?self.theme_name, "theme changed");
    }

    /// Show `section` and glide the content back to its first row.
    pub fn set_section(&mut self, section: Section) {
        if self.section != section {
            tracing::info!(from = %self.section, to = %section, "section changed");
        }
        self.section = section;
        self.viewport.scroll_to_top();
        if section == Section::Home {
            self.typewriter.restart();
        }
    }

    /// Apply an interpreter outcome to the rest of the app.
    pub fn apply(&mut self, outcome: Outcome) -> Action {
        match outcome {
            Outcome::None => Action::None,
            Outcome::Navigate(section) => {
                self.feedback = None;
                self.set_section(section);
                Action::None
            }
            Outcome::Help { .. } => {
                self.feedback = None;
                Action::None
            }
            Outcome::Cleared => {
                self.feedback = Some(Feedback::HistoryCleared);
                Action::None
            }
            Outcome::Exit => Action::Quit,
            Outcome::Unknown {
                command,
                suggestion,
            } => {
                self.feedback = Some(Feedback::NotFound {
                    command,
                    suggestion,
                });
                Action::None
            }
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        // Ctrl+T / Ctrl+Shift+T cycle themes from anywhere
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('t') if !key.modifiers.contains(KeyModifiers::SHIFT) => {
                    self.next_theme();
                    return Action::None;
                }
                KeyCode::Char('t') | KeyCode::Char('T') => {
                    self.prev_theme();
                    return Action::None;
                }
                _ => {}
            }
        }

        if let Some(outcome) = self.interpreter.on_global_key(key) {
            return self.apply(outcome);
        }

        if self.interpreter.is_focused() {
            let outcome = self.interpreter.on_prompt_key(key);
            return self.apply(outcome);
        }

        self.handle_content_key(key);
        Action::None
    }

    /// Keys that reach the content pane while the prompt is blurred.
    fn handle_content_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up => self.viewport.scroll_by(-1),
            KeyCode::Down => self.viewport.scroll_by(1),
            KeyCode::PageUp => self.viewport.page_up(),
            KeyCode::PageDown => self.viewport.page_down(),
            KeyCode::Home => self.viewport.scroll_by(-i32::from(u16::MAX)),
            KeyCode::End => self.viewport.scroll_to_end(),
            KeyCode::Enter | KeyCode::Tab => self.interpreter.set_focused(true),
            _ => {}
        }
    }

    /// Handle a mouse event and return the resulting Action.
    pub fn handle_mouse(&mut self, event: MouseEvent) -> Action {
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let Some(&target) = self.click_regions.handle_click(event.column, event.row) else {
                    return Action::None;
                };
                match target {
                    Target::Section(section) => {
                        self.feedback = None;
                        self.set_section(section);
                    }
                    Target::HelpToggle => {
                        self.interpreter.toggle_help();
                    }
                    Target::Prompt => self.interpreter.set_focused(true),
                }
                Action::None
            }
            MouseEventKind::ScrollUp => {
                self.viewport.scroll_by(-WHEEL_STEP);
                Action::None
            }
            MouseEventKind::ScrollDown => {
                self.viewport.scroll_by(WHEEL_STEP);
                Action::None
            }
            _ => Action::None,
        }
    }

    /// Advance animations by one tick. Returns whether anything moved.
    pub fn tick(&mut self) -> bool {
        let typed = self.section == Section::Home && self.typewriter.tick();
        let scrolled = self.viewport.tick();
        typed || scrolled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::MemCatalog;
    use pretty_assertions::assert_eq;
    use ratatui::layout::Rect;

    fn app() -> App {
        App::new(CommandTable::standard().unwrap(), Box::new(MemCatalog::sample()))
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn type_line(app: &mut App, text: &str) -> Action {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
        app.handle_key(key(KeyCode::Enter))
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_app_creation() {
        let app = app();
        assert_eq!(app.section, Section::Home);
        assert!(app.interpreter.is_focused());
        assert!(app.feedback.is_none());
        assert_eq!(app.viewport, Viewport::default());
    }

    #[test]
    fn test_typed_command_navigates() {
        let mut app = app();
        assert_eq!(type_line(&mut app, "Projects"), Action::None);
        assert_eq!(app.section, Section::Projects);
        assert_eq!(app.interpreter.history(), ["Projects"]);
        assert_eq!(app.interpreter.input(), "");
    }

    #[test]
    fn test_alias_navigates() {
        let mut app = app();
        type_line(&mut app, "papers");
        assert_eq!(app.section, Section::Publications);
        type_line(&mut app, "  LS ");
        assert_eq!(app.section, Section::Home);
    }

    #[test]
    fn test_unknown_command_sets_feedback() {
        let mut app = app();
        type_line(&mut app, "projcts");
        assert_eq!(app.section, Section::Home);
        assert_eq!(
            app.feedback,
            Some(Feedback::NotFound {
                command: "projcts".to_string(),
                suggestion: Some("projects".to_string()),
            })
        );
        insta::assert_snapshot!(
            app.feedback.unwrap().to_string(),
            @"command not found: projcts. Did you mean 'projects'?"
        );
    }

    #[test]
    fn test_feedback_without_suggestion() {
        let feedback = Feedback::NotFound {
            command: "zzz".to_string(),
            suggestion: None,
        };
        assert_eq!(
            feedback.to_string(),
            "command not found: zzz. Type 'help' for available commands."
        );
    }

    #[test]
    fn test_navigation_clears_feedback() {
        let mut app = app();
        type_line(&mut app, "nope");
        assert!(app.feedback.is_some());
        type_line(&mut app, "about");
        assert!(app.feedback.is_none());
    }

    #[test]
    fn test_clear_reports_and_empties_history() {
        let mut app = app();
        type_line(&mut app, "about");
        type_line(&mut app, "skills");
        type_line(&mut app, "clear");
        assert!(app.interpreter.history().is_empty());
        assert_eq!(app.section, Section::Skills);
        assert_eq!(app.feedback, Some(Feedback::HistoryCleared));
    }

    #[test]
    fn test_help_toggles_panel() {
        let mut app = app();
        type_line(&mut app, "help");
        assert!(app.interpreter.help_visible());
        type_line(&mut app, "help");
        assert!(!app.interpreter.help_visible());
    }

    #[test]
    fn test_exit_quits() {
        let mut app = app();
        assert_eq!(type_line(&mut app, "exit"), Action::Quit);
    }

    #[test]
    fn test_ctrl_digit_navigates_with_pending_input() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('x')));
        app.handle_key(ctrl('2'));
        assert_eq!(app.section, Section::About);
        assert_eq!(app.interpreter.input(), "x");
        assert!(app.interpreter.history().is_empty());
    }

    #[test]
    fn test_alt_and_super_digits_navigate() {
        let mut app = app();
        app.handle_key(KeyEvent::new(KeyCode::Char('6'), KeyModifiers::ALT));
        assert_eq!(app.section, Section::Contact);
        app.handle_key(KeyEvent::new(KeyCode::Char('3'), KeyModifiers::SUPER));
        assert_eq!(app.section, Section::Projects);
    }

    #[test]
    fn test_ctrl_digit_out_of_range_ignored() {
        let mut app = app();
        app.handle_key(ctrl('7'));
        assert_eq!(app.section, Section::Home);
        assert_eq!(app.interpreter.input(), "");
    }

    #[test]
    fn test_blur_then_type_refocuses() {
        let mut app = app();
        app.handle_key(key(KeyCode::Esc));
        assert!(!app.interpreter.is_focused());
        app.handle_key(key(KeyCode::Char('a')));
        assert!(app.interpreter.is_focused());
        assert_eq!(app.interpreter.input(), "a");
    }

    #[test]
    fn test_blurred_arrows_scroll_content() {
        let mut app = app();
        app.viewport.set_bounds(100, 20);
        app.handle_key(key(KeyCode::Esc));
        app.handle_key(key(KeyCode::Down));
        app.handle_key(key(KeyCode::Down));
        assert_eq!(app.viewport.offset(), 2);
        app.handle_key(key(KeyCode::PageDown));
        assert_eq!(app.viewport.offset(), 22);
        app.handle_key(key(KeyCode::End));
        assert_eq!(app.viewport.offset(), 80);
        app.handle_key(key(KeyCode::Home));
        assert_eq!(app.viewport.offset(), 0);
        // History is untouched while blurred
        assert_eq!(app.interpreter.history_cursor(), None);
        app.handle_key(key(KeyCode::Enter));
        assert!(app.interpreter.is_focused());
    }

    #[test]
    fn test_focused_arrows_browse_history() {
        let mut app = app();
        app.viewport.set_bounds(100, 20);
        type_line(&mut app, "about");
        app.handle_key(key(KeyCode::Up));
        assert_eq!(app.interpreter.input(), "about");
        assert_eq!(app.viewport.offset(), 0);
    }

    #[test]
    fn test_theme_cycling() {
        let mut app = app();
        let initial = app.theme_name;
        app.handle_key(ctrl('t'));
        assert_ne!(app.theme_name, initial);
        app.handle_key(KeyEvent::new(
            KeyCode::Char('T'),
            KeyModifiers::CONTROL | KeyModifiers::SHIFT,
        ));
        assert_eq!(app.theme_name, initial);
        // Not typed into the prompt
        assert_eq!(app.interpreter.input(), "");
    }

    #[test]
    fn test_navigation_scrolls_smoothly_to_top() {
        let mut app = app();
        app.viewport.set_bounds(100, 20);
        app.viewport.scroll_by(40);
        type_line(&mut app, "skills");
        assert_eq!(app.viewport.target(), 0);
        assert_eq!(app.viewport.offset(), 40);

        let mut offsets = Vec::new();
        while app.tick() && !app.viewport.is_settled() {
            offsets.push(app.viewport.offset());
        }
        offsets.push(app.viewport.offset());
        assert_eq!(offsets, vec![20, 10, 5, 2, 1, 0]);
    }

    #[test]
    fn test_viewport_clamps_to_bounds() {
        let mut viewport = Viewport::default();
        viewport.set_bounds(10, 20);
        viewport.scroll_by(5);
        assert_eq!(viewport.offset(), 0);

        viewport.set_bounds(30, 20);
        viewport.scroll_by(50);
        assert_eq!(viewport.offset(), 10);
        viewport.set_bounds(25, 20);
        assert_eq!(viewport.offset(), 5);
        viewport.scroll_by(-100);
        assert_eq!(viewport.offset(), 0);
    }

    #[test]
    fn test_home_restarts_typing() {
        let mut app = app();
        for _ in 0..5 {
            app.tick();
        }
        assert_eq!(app.typewriter.visible(), "Welco");
        app.set_section(Section::About);
        app.tick();
        assert_eq!(app.typewriter.visible(), "Welco");
        app.set_section(Section::Home);
        assert_eq!(app.typewriter.visible(), "");
    }

    #[test]
    fn test_click_regions() {
        let mut app = app();
        app.click_regions
            .register(Rect::new(0, 1, 6, 1), Target::Section(Section::Contact));
        app.click_regions.register(Rect::new(10, 5, 11, 1), Target::HelpToggle);
        app.click_regions.register(Rect::new(0, 4, 40, 1), Target::Prompt);

        app.handle_mouse(click(2, 1));
        assert_eq!(app.section, Section::Contact);

        app.handle_mouse(click(12, 5));
        assert!(app.interpreter.help_visible());

        app.handle_key(key(KeyCode::Esc));
        app.handle_mouse(click(30, 4));
        assert!(app.interpreter.is_focused());

        assert_eq!(app.handle_mouse(click(70, 20)), Action::None);
        assert_eq!(app.section, Section::Contact);
    }

    #[test]
    fn test_mouse_wheel_scrolls() {
        let mut app = app();
        app.viewport.set_bounds(50, 10);
        let wheel = |kind| MouseEvent {
            kind,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        };
        app.handle_mouse(wheel(MouseEventKind::ScrollDown));
        app.handle_mouse(wheel(MouseEventKind::ScrollDown));
        assert_eq!(app.viewport.offset(), 6);
        app.handle_mouse(wheel(MouseEventKind::ScrollUp));
        assert_eq!(app.viewport.offset(), 3);
    }
}
