//! The prompt's command interpreter.
//!
//! Turns keystrokes into one of: a navigation outcome, a history-recall
//! mutation, a completion mutation, or a recorded command that goes nowhere.
//! Every key and every submitted string produces a defined transition; there
//! is no error path.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use nucleo_matcher::pattern::{CaseMatching, Normalization, Pattern};
use nucleo_matcher::{Config, Matcher, Utf32Str};
use ratatui_interact::components::InputState;

/// A content panel the portfolio can display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Section {
    Home,
    About,
    Projects,
    Skills,
    Publications,
    Contact,
}

impl Section {
    /// Every section in canonical order. Numbered shortcuts follow this order.
    pub const ALL: [Section; 6] = [
        Section::Home,
        Section::About,
        Section::Projects,
        Section::Skills,
        Section::Publications,
        Section::Contact,
    ];

    /// The canonical command token for this section.
    pub fn name(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Projects => "projects",
            Section::Skills => "skills",
            Section::Publications => "publications",
            Section::Contact => "contact",
        }
    }

    /// One-line description shown in the help panel.
    pub fn description(self) -> &'static str {
        match self {
            Section::Home => "Navigate to home section",
            Section::About => "View about information",
            Section::Projects => "List projects",
            Section::Skills => "Show skills and certifications",
            Section::Publications => "Browse papers and articles",
            Section::Contact => "Contact information",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Section {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Section::ALL
            .into_iter()
            .find(|section| section.name() == wanted)
            .ok_or(TableError::UnknownSection(wanted))
    }
}

/// Words handled by the interpreter itself, before any table lookup.
pub const BUILTINS: [&str; 3] = ["clear", "help", "exit"];

/// Aliases in the standard table, Unix-command flavoured.
const STANDARD_ALIASES: [(&str, Section); 8] = [
    ("ls", Section::Home),
    ("cd", Section::Home),
    ("cat", Section::About),
    ("vim", Section::Projects),
    ("top", Section::Skills),
    ("papers", Section::Publications),
    ("research", Section::Publications),
    ("mail", Section::Contact),
];

/// Reasons a command table cannot be built.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    #[error("a command table needs at least one section")]
    NoSections,
    #[error("command names cannot be empty")]
    EmptyName,
    #[error("command '{0}' must be a single word")]
    NotAWord(String),
    #[error("'{0}' is a builtin command and cannot be remapped")]
    Reserved(String),
    #[error("command '{0}' is defined more than once")]
    Duplicate(String),
    #[error("alias '{alias}' points at '{section}', which is not in the table")]
    NotCanonical { alias: String, section: Section },
    #[error("unknown section '{0}'")]
    UnknownSection(String),
}

/// Immutable mapping from lower-cased command tokens to sections.
///
/// Built once through [`CommandTableBuilder`] and handed to the interpreter.
/// Keys are unique and case-insensitive, and every value is one of the
/// table's canonical sections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandTable {
    entries: BTreeMap<String, Section>,
    canonical: Vec<Section>,
}

impl CommandTable {
    pub fn builder() -> CommandTableBuilder {
        CommandTableBuilder::default()
    }

    /// All six sections plus the standard aliases, checked like any other table.
    pub fn standard() -> Result<Self, TableError> {
        STANDARD_ALIASES
            .iter()
            .fold(Self::builder().sections(Section::ALL), |builder, (alias, section)| {
                builder.alias(*alias, *section)
            })
            .build()
    }

    /// Resolve a token, ignoring case and surrounding whitespace.
    pub fn lookup(&self, token: &str) -> Option<Section> {
        self.entries.get(&token.trim().to_lowercase()).copied()
    }

    /// Every key, sorted.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Canonical sections in shortcut order.
    pub fn canonical(&self) -> &[Section] {
        &self.canonical
    }

    /// The section bound to the 1-based numbered shortcut `n`.
    pub fn shortcut(&self, n: usize) -> Option<Section> {
        n.checked_sub(1)
            .and_then(|idx| self.canonical.get(idx))
            .copied()
    }

    /// Aliases of `section`, not counting its canonical name.
    pub fn aliases(&self, section: Section) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|(key, target)| **target == section && key.as_str() != section.name())
            .map(|(key, _)| key.as_str())
            .collect()
    }

    /// Keys starting with `prefix`, compared case-insensitively.
    pub fn completions(&self, prefix: &str) -> Vec<&str> {
        let prefix = prefix.to_lowercase();
        self.keys().filter(|key| key.starts_with(&prefix)).collect()
    }

    /// Best fuzzy match for a mistyped command, if anything matches at all.
    pub fn suggest(&self, input: &str) -> Option<&str> {
        let pattern = Pattern::parse(input, CaseMatching::Ignore, Normalization::Smart);
        let mut matcher = Matcher::new(Config::DEFAULT);
        let mut haystack_buf = Vec::new();

        let mut best: Option<(u32, &str)> = None;
        for key in self.keys() {
            let haystack = Utf32Str::new(key, &mut haystack_buf);
            if let Some(score) = pattern.score(haystack, &mut matcher) {
                if best.is_none_or(|(top, _)| score > top) {
                    best = Some((score, key));
                }
            }
        }
        best.map(|(_, key)| key)
    }
}

/// Builder for [`CommandTable`]. Validation happens in [`build`](Self::build).
#[derive(Debug, Default, Clone)]
pub struct CommandTableBuilder {
    sections: Vec<Section>,
    aliases: Vec<(String, Section)>,
}

impl CommandTableBuilder {
    /// Add a canonical section. Order of calls is shortcut order.
    #[allow(dead_code)]
    pub fn section(mut self, section: Section) -> Self {
        self.sections.push(section);
        self
    }

    pub fn sections(mut self, sections: impl IntoIterator<Item = Section>) -> Self {
        self.sections.extend(sections);
        self
    }

    pub fn alias(mut self, name: impl Into<String>, section: Section) -> Self {
        self.aliases.push((name.into(), section));
        self
    }

    pub fn build(self) -> Result<CommandTable, TableError> {
        if self.sections.is_empty() {
            return Err(TableError::NoSections);
        }

        let mut entries = BTreeMap::new();
        for section in &self.sections {
            insert_entry(&mut entries, section.name(), *section)?;
        }
        for (alias, section) in &self.aliases {
            if !self.sections.contains(section) {
                return Err(TableError::NotCanonical {
                    alias: alias.clone(),
                    section: *section,
                });
            }
            insert_entry(&mut entries, alias, *section)?;
        }

        Ok(CommandTable {
            entries,
            canonical: self.sections,
        })
    }
}

fn insert_entry(
    entries: &mut BTreeMap<String, Section>,
    raw: &str,
    section: Section,
) -> Result<(), TableError> {
    let key = raw.trim().to_lowercase();
    if key.is_empty() {
        return Err(TableError::EmptyName);
    }
    if key.chars().any(char::is_whitespace) {
        return Err(TableError::NotAWord(key));
    }
    if BUILTINS.contains(&key.as_str()) {
        return Err(TableError::Reserved(key));
    }
    match entries.entry(key) {
        Entry::Occupied(entry) => Err(TableError::Duplicate(entry.key().clone())),
        Entry::Vacant(entry) => {
            entry.insert(section);
            Ok(())
        }
    }
}

/// What a key or submission asks the rest of the app to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing for the app to do (the interpreter may still have changed
    /// its own input, history cursor, or focus).
    None,
    /// Switch to this section.
    Navigate(Section),
    /// `help` was entered; the panel is now shown or hidden.
    Help { visible: bool },
    /// `clear` was entered; history is empty.
    Cleared,
    /// `exit` was entered.
    Exit,
    /// A non-empty command that matched nothing. It is still in history.
    Unknown {
        command: String,
        suggestion: Option<String>,
    },
}

/// Interpreter state for one session: input line, history, focus.
pub struct Interpreter {
    table: CommandTable,
    input: InputState,
    history: Vec<String>,
    /// Depth into history while browsing, newest first. `None` when not browsing.
    cursor: Option<usize>,
    focused: bool,
    help_visible: bool,
}

impl Interpreter {
    pub fn new(table: CommandTable) -> Self {
        Self {
            table,
            input: InputState::empty(),
            history: Vec::new(),
            cursor: None,
            focused: true,
            help_visible: false,
        }
    }

    pub fn table(&self) -> &CommandTable {
        &self.table
    }

    /// Current contents of the input line.
    #[cfg(test)]
    pub fn input(&self) -> &str {
        self.input.text()
    }

    /// Input line state, including the caret position.
    pub fn input_state(&self) -> &InputState {
        &self.input
    }

    #[cfg(test)]
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input.set_text(text.into());
    }

    /// Submitted commands, oldest first.
    pub fn history(&self) -> &[String] {
        &self.history
    }

    #[cfg(test)]
    pub fn history_cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    pub fn help_visible(&self) -> bool {
        self.help_visible
    }

    pub fn toggle_help(&mut self) -> bool {
        self.help_visible = !self.help_visible;
        self.help_visible
    }

    /// Interpret a full command line.
    pub fn submit(&mut self, raw: &str) -> Outcome {
        let token = raw.trim().to_lowercase();
        if token.is_empty() {
            return Outcome::None;
        }

        match token.as_str() {
            "clear" => {
                self.history.clear();
                self.reset_line();
                tracing::debug!("history cleared");
                return Outcome::Cleared;
            }
            "help" => {
                let visible = self.toggle_help();
                self.record(raw);
                return Outcome::Help { visible };
            }
            "exit" => {
                self.record(raw);
                return Outcome::Exit;
            }
            _ => {}
        }

        self.record(raw);
        match self.table.lookup(&token) {
            Some(section) => {
                tracing::debug!(command = %token, %section, "command resolved");
                Outcome::Navigate(section)
            }
            None => {
                let suggestion = self.table.suggest(&token).map(str::to_string);
                tracing::info!(command = %token, ?suggestion, "unknown command");
                Outcome::Unknown {
                    command: raw.trim().to_string(),
                    suggestion,
                }
            }
        }
    }

    /// Recall the next older history entry. Stops at the oldest.
    pub fn history_up(&mut self) {
        let depth = self.cursor.map_or(0, |d| d + 1);
        if depth < self.history.len() {
            self.cursor = Some(depth);
            self.load_history(depth);
        }
    }

    /// Recall the next newer entry; past the newest, leave history and clear
    /// the line.
    pub fn history_down(&mut self) {
        match self.cursor {
            None => {}
            Some(0) => {
                self.cursor = None;
                self.input.clear();
            }
            Some(depth) => {
                self.cursor = Some(depth - 1);
                self.load_history(depth - 1);
            }
        }
    }

    /// Complete the input to the single table key it prefixes. Ambiguous or
    /// empty matches leave the input alone. Returns whether the input changed.
    pub fn complete(&mut self) -> bool {
        let matches = self.table.completions(self.input.text());
        let [only] = matches.as_slice() else {
            return false;
        };
        let completed = only.to_string();
        if completed == self.input.text() {
            return false;
        }
        self.input.set_text(completed);
        true
    }

    /// Handle a key while the prompt is focused.
    pub fn on_prompt_key(&mut self, key: KeyEvent) -> Outcome {
        match key.code {
            KeyCode::Enter => {
                let line = self.input.text().to_string();
                self.submit(&line)
            }
            KeyCode::Up => {
                self.history_up();
                Outcome::None
            }
            KeyCode::Down => {
                self.history_down();
                Outcome::None
            }
            KeyCode::Tab => {
                self.complete();
                Outcome::None
            }
            KeyCode::Esc => {
                self.focused = false;
                Outcome::None
            }
            KeyCode::Backspace => {
                self.input.delete_char_backward();
                Outcome::None
            }
            KeyCode::Delete => {
                self.input.delete_char_forward();
                Outcome::None
            }
            KeyCode::Left => {
                self.input.move_left();
                Outcome::None
            }
            KeyCode::Right => {
                self.input.move_right();
                Outcome::None
            }
            KeyCode::Home => {
                self.input.move_home();
                Outcome::None
            }
            KeyCode::End => {
                self.input.move_end();
                Outcome::None
            }
            KeyCode::Char(c) if is_plain(key.modifiers) => {
                self.input.insert_char(c);
                Outcome::None
            }
            _ => Outcome::None,
        }
    }

    /// Handle a key before focus routing.
    ///
    /// Returns `Some` when the key was consumed as a navigation chord. A
    /// printable key typed while the prompt is unfocused moves focus to the
    /// prompt and is *not* consumed, so the caller should pass it on.
    pub fn on_global_key(&mut self, key: KeyEvent) -> Option<Outcome> {
        if is_chord(key.modifiers) {
            let KeyCode::Char(c) = key.code else {
                return None;
            };
            let section = c
                .to_digit(10)
                .and_then(|n| self.table.shortcut(n as usize))?;
            tracing::debug!(%section, "shortcut");
            return Some(Outcome::Navigate(section));
        }

        if !self.focused && is_printable(&key) {
            self.focused = true;
        }
        None
    }

    fn record(&mut self, raw: &str) {
        self.history.push(raw.to_string());
        self.reset_line();
    }

    fn reset_line(&mut self) {
        self.input.clear();
        self.cursor = None;
    }

    fn load_history(&mut self, depth: usize) {
        if let Some(entry) = self.history.iter().rev().nth(depth) {
            self.input.set_text(entry.clone());
        }
    }
}

/// Ctrl, Alt (the terminal's Meta), Super, or Meta held.
fn is_chord(modifiers: KeyModifiers) -> bool {
    modifiers.intersects(
        KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER | KeyModifiers::META,
    )
}

/// No modifier other than Shift.
fn is_plain(modifiers: KeyModifiers) -> bool {
    modifiers.difference(KeyModifiers::SHIFT).is_empty()
}

fn is_printable(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char(c) if !c.is_control()) && is_plain(key.modifiers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(interp: &mut Interpreter, text: &str) {
        for c in text.chars() {
            interp.on_prompt_key(key(KeyCode::Char(c)));
        }
    }

    fn interpreter() -> Interpreter {
        Interpreter::new(CommandTable::standard().unwrap())
    }

    #[test]
    fn test_standard_table_matches_builder() {
        let mut builder = CommandTable::builder().sections(Section::ALL);
        for (alias, section) in STANDARD_ALIASES {
            builder = builder.alias(alias, section);
        }
        assert_eq!(builder.build().unwrap(), CommandTable::standard().unwrap());
        assert_eq!(CommandTable::standard().unwrap().len(), 14);
    }

    #[test]
    fn test_every_known_token_navigates_in_any_case() {
        let table = CommandTable::standard().unwrap();
        let tokens: Vec<(String, Section)> = table
            .keys()
            .map(|k| (k.to_string(), table.lookup(k).unwrap()))
            .collect();

        for (token, section) in tokens {
            for raw in [
                token.clone(),
                token.to_uppercase(),
                format!("  {token}\t"),
            ] {
                let mut interp = interpreter();
                assert_eq!(interp.submit(&raw), Outcome::Navigate(section), "{raw:?}");
                assert_eq!(interp.history(), [raw.clone()]);
                assert_eq!(interp.input(), "");
                assert_eq!(interp.history_cursor(), None);
            }
        }
    }

    #[test]
    fn test_aliases_resolve() {
        let table = CommandTable::standard().unwrap();
        assert_eq!(table.lookup("ls"), Some(Section::Home));
        assert_eq!(table.lookup("CD"), Some(Section::Home));
        assert_eq!(table.lookup("cat"), Some(Section::About));
        assert_eq!(table.lookup("vim"), Some(Section::Projects));
        assert_eq!(table.lookup("top"), Some(Section::Skills));
        assert_eq!(table.lookup("papers"), Some(Section::Publications));
        assert_eq!(table.lookup("Research"), Some(Section::Publications));
        assert_eq!(table.lookup("mail"), Some(Section::Contact));
        assert_eq!(table.aliases(Section::Home), vec!["cd", "ls"]);
        assert!(table.aliases(Section::Contact).contains(&"mail"));
    }

    #[test]
    fn test_unknown_command_is_recorded_without_navigation() {
        let mut interp = interpreter();
        interp.set_input("sudo rm -rf /");
        let outcome = interp.submit("sudo rm -rf /");
        assert!(matches!(outcome, Outcome::Unknown { ref command, .. } if command == "sudo rm -rf /"));
        assert_eq!(interp.history(), ["sudo rm -rf /"]);
        assert_eq!(interp.input(), "");
    }

    #[test]
    fn test_unknown_command_suggests_close_match() {
        let mut interp = interpreter();
        assert_eq!(
            interp.submit("hme"),
            Outcome::Unknown {
                command: "hme".to_string(),
                suggestion: Some("home".to_string()),
            }
        );
        assert_eq!(
            interp.submit("zzz"),
            Outcome::Unknown {
                command: "zzz".to_string(),
                suggestion: None,
            }
        );
    }

    #[test]
    fn test_blank_submit_is_noop() {
        let mut interp = interpreter();
        interp.submit("about");
        interp.set_input("   ");
        assert_eq!(interp.submit(""), Outcome::None);
        assert_eq!(interp.submit("   "), Outcome::None);
        assert_eq!(interp.history(), ["about"]);
        // Blank submits leave the line as it was
        assert_eq!(interp.input(), "   ");
    }

    #[test]
    fn test_clear_empties_history() {
        let mut interp = interpreter();
        interp.submit("home");
        interp.submit("bogus");
        interp.history_up();
        assert_eq!(interp.submit("  CLEAR "), Outcome::Cleared);
        assert!(interp.history().is_empty());
        assert_eq!(interp.history_cursor(), None);
        assert_eq!(interp.input(), "");

        // Still fine on an empty buffer
        assert_eq!(interp.submit("clear"), Outcome::Cleared);
        assert!(interp.history().is_empty());
    }

    #[test]
    fn test_help_toggles_and_is_recorded() {
        let mut interp = interpreter();
        assert!(!interp.help_visible());
        assert_eq!(interp.submit("help"), Outcome::Help { visible: true });
        assert_eq!(interp.submit("Help"), Outcome::Help { visible: false });
        assert_eq!(interp.history(), ["help", "Help"]);
    }

    #[test]
    fn test_exit_is_recorded() {
        let mut interp = interpreter();
        assert_eq!(interp.submit("exit"), Outcome::Exit);
        assert_eq!(interp.history(), ["exit"]);
    }

    #[test]
    fn test_history_recall_newest_first_then_stops() {
        let mut interp = interpreter();
        let submitted = ["home", "nope", "skills", "papers"];
        for cmd in submitted {
            interp.submit(cmd);
        }

        let mut recalled = Vec::new();
        for _ in 0..submitted.len() {
            interp.on_prompt_key(key(KeyCode::Up));
            recalled.push(interp.input().to_string());
        }
        assert_eq!(recalled, vec!["papers", "skills", "nope", "home"]);
        assert_eq!(interp.history_cursor(), Some(3));

        interp.on_prompt_key(key(KeyCode::Up));
        interp.on_prompt_key(key(KeyCode::Up));
        assert_eq!(interp.input(), "home");
        assert_eq!(interp.history_cursor(), Some(3));
    }

    #[test]
    fn test_history_up_on_empty_history_is_noop() {
        let mut interp = interpreter();
        interp.on_prompt_key(key(KeyCode::Up));
        assert_eq!(interp.history_cursor(), None);
        assert_eq!(interp.input(), "");
    }

    #[test]
    fn test_history_down_walks_back_and_exits() {
        let mut interp = interpreter();
        interp.submit("about");
        interp.submit("contact");

        // Not browsing: no-op
        type_text(&mut interp, "dra");
        interp.on_prompt_key(key(KeyCode::Down));
        assert_eq!(interp.input(), "dra");
        assert_eq!(interp.history_cursor(), None);

        interp.on_prompt_key(key(KeyCode::Up));
        interp.on_prompt_key(key(KeyCode::Up));
        assert_eq!(interp.input(), "about");

        interp.on_prompt_key(key(KeyCode::Down));
        assert_eq!(interp.input(), "contact");
        assert_eq!(interp.history_cursor(), Some(0));

        interp.on_prompt_key(key(KeyCode::Down));
        assert_eq!(interp.input(), "");
        assert_eq!(interp.history_cursor(), None);

        interp.on_prompt_key(key(KeyCode::Down));
        interp.on_prompt_key(key(KeyCode::Down));
        assert_eq!(interp.input(), "");
        assert_eq!(interp.history_cursor(), None);
    }

    #[test]
    fn test_submit_leaves_browsing() {
        let mut interp = interpreter();
        interp.submit("about");
        interp.submit("projects");
        interp.on_prompt_key(key(KeyCode::Up));
        interp.on_prompt_key(key(KeyCode::Up));
        assert_eq!(
            interp.on_prompt_key(key(KeyCode::Enter)),
            Outcome::Navigate(Section::About)
        );
        assert_eq!(interp.history_cursor(), None);
        assert_eq!(interp.history(), ["about", "projects", "about"]);
    }

    #[test]
    fn test_tab_completes_unique_prefix() {
        let mut interp = interpreter();
        type_text(&mut interp, "ho");
        interp.on_prompt_key(key(KeyCode::Tab));
        assert_eq!(interp.input(), "home");

        let mut interp = interpreter();
        type_text(&mut interp, "PUB");
        assert!(interp.complete());
        assert_eq!(interp.input(), "publications");
    }

    #[test]
    fn test_tab_leaves_ambiguous_or_missing_prefix() {
        let mut interp = interpreter();
        type_text(&mut interp, "c");
        interp.on_prompt_key(key(KeyCode::Tab));
        assert_eq!(interp.input(), "c");

        let mut interp = interpreter();
        type_text(&mut interp, "xyz");
        assert!(!interp.complete());
        assert_eq!(interp.input(), "xyz");

        let mut interp = interpreter();
        assert!(!interp.complete());
        assert_eq!(interp.input(), "");
    }

    #[test]
    fn test_tab_uses_injected_table() {
        let table = CommandTable::builder()
            .sections([Section::Home, Section::Contact])
            .alias("cat", Section::Home)
            .build()
            .unwrap();
        let mut interp = Interpreter::new(table);
        type_text(&mut interp, "ca");
        interp.on_prompt_key(key(KeyCode::Tab));
        assert_eq!(interp.input(), "cat");
        assert_eq!(interp.submit("cat"), Outcome::Navigate(Section::Home));
        assert!(matches!(interp.submit("about"), Outcome::Unknown { .. }));
    }

    #[test]
    fn test_ctrl_digit_navigates_without_touching_history() {
        let mut interp = interpreter();
        interp.submit("skills");
        type_text(&mut interp, "half typed");

        for modifiers in [
            KeyModifiers::CONTROL,
            KeyModifiers::SUPER,
            KeyModifiers::ALT,
        ] {
            let chord = KeyEvent::new(KeyCode::Char('2'), modifiers);
            assert_eq!(
                interp.on_global_key(chord),
                Some(Outcome::Navigate(Section::About))
            );
        }
        assert_eq!(interp.history(), ["skills"]);
        assert_eq!(interp.input(), "half typed");
    }

    #[test]
    fn test_numbered_shortcuts_follow_canonical_order() {
        let mut interp = interpreter();
        for (i, section) in Section::ALL.iter().enumerate() {
            let digit = char::from_digit(i as u32 + 1, 10).unwrap();
            let chord = KeyEvent::new(KeyCode::Char(digit), KeyModifiers::CONTROL);
            assert_eq!(interp.on_global_key(chord), Some(Outcome::Navigate(*section)));
        }
        for digit in ['0', '7', '9'] {
            let chord = KeyEvent::new(KeyCode::Char(digit), KeyModifiers::CONTROL);
            assert_eq!(interp.on_global_key(chord), None);
        }
    }

    #[test]
    fn test_shortcut_count_tracks_table() {
        let table = CommandTable::builder()
            .sections([
                Section::Home,
                Section::About,
                Section::Projects,
                Section::Skills,
                Section::Contact,
            ])
            .build()
            .unwrap();
        let mut interp = Interpreter::new(table);
        let fifth = KeyEvent::new(KeyCode::Char('5'), KeyModifiers::CONTROL);
        let sixth = KeyEvent::new(KeyCode::Char('6'), KeyModifiers::CONTROL);
        assert_eq!(
            interp.on_global_key(fifth),
            Some(Outcome::Navigate(Section::Contact))
        );
        assert_eq!(interp.on_global_key(sixth), None);
    }

    #[test]
    fn test_printable_key_refocuses_prompt_without_consuming() {
        let mut interp = interpreter();
        interp.on_prompt_key(key(KeyCode::Esc));
        assert!(!interp.is_focused());

        // Non-printable keys do not steal focus
        assert_eq!(interp.on_global_key(key(KeyCode::Down)), None);
        assert!(!interp.is_focused());

        let ctrl_a = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL);
        assert_eq!(interp.on_global_key(ctrl_a), None);
        assert!(!interp.is_focused());

        let upper = KeyEvent::new(KeyCode::Char('H'), KeyModifiers::SHIFT);
        assert_eq!(interp.on_global_key(upper), None);
        assert!(interp.is_focused());
        interp.on_prompt_key(upper);
        assert_eq!(interp.input(), "H");
    }

    #[test]
    fn test_modified_chars_are_not_typed() {
        let mut interp = interpreter();
        interp.on_prompt_key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::CONTROL));
        assert_eq!(interp.input(), "");
    }

    #[test]
    fn test_editing_keys() {
        let mut interp = interpreter();
        type_text(&mut interp, "abuot");
        for _ in 0..3 {
            interp.on_prompt_key(key(KeyCode::Backspace));
        }
        type_text(&mut interp, "out");
        assert_eq!(interp.input(), "about");
        interp.on_prompt_key(key(KeyCode::Home));
        interp.on_prompt_key(key(KeyCode::Delete));
        assert_eq!(interp.input(), "bout");
        interp.on_prompt_key(key(KeyCode::Char('a')));
        interp.on_prompt_key(key(KeyCode::End));
        assert_eq!(interp.input_state().cursor_pos, 5);
        assert_eq!(interp.on_prompt_key(key(KeyCode::Enter)), Outcome::Navigate(Section::About));
    }

    #[test]
    fn test_builder_rejects_bad_tables() {
        assert_eq!(
            CommandTable::builder().build().unwrap_err(),
            TableError::NoSections
        );
        assert_eq!(
            CommandTable::builder()
                .section(Section::Home)
                .alias("HOME", Section::Home)
                .build()
                .unwrap_err(),
            TableError::Duplicate("home".to_string())
        );
        assert_eq!(
            CommandTable::builder()
                .section(Section::Home)
                .alias("help", Section::Home)
                .build()
                .unwrap_err(),
            TableError::Reserved("help".to_string())
        );
        assert_eq!(
            CommandTable::builder()
                .section(Section::Home)
                .alias("go home", Section::Home)
                .build()
                .unwrap_err(),
            TableError::NotAWord("go home".to_string())
        );
        assert_eq!(
            CommandTable::builder()
                .section(Section::Home)
                .alias("  ", Section::Home)
                .build()
                .unwrap_err(),
            TableError::EmptyName
        );
        assert_eq!(
            CommandTable::builder()
                .section(Section::Home)
                .alias("mail", Section::Contact)
                .build()
                .unwrap_err(),
            TableError::NotCanonical {
                alias: "mail".to_string(),
                section: Section::Contact,
            }
        );
    }

    #[test]
    fn test_section_from_str() {
        assert_eq!("Publications".parse::<Section>(), Ok(Section::Publications));
        assert_eq!(
            "ls".parse::<Section>(),
            Err(TableError::UnknownSection("ls".to_string()))
        );
    }

    #[test]
    fn test_table_error_messages() {
        insta::assert_snapshot!(
            TableError::Reserved("clear".to_string()).to_string(),
            @"'clear' is a builtin command and cannot be remapped"
        );
    }
}
