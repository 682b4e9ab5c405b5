//! Scoped ownership of the terminal.
//!
//! While a [`TerminalSession`] is alive the terminal is in raw mode on the
//! alternate screen with mouse capture on, and every key reaches the app.
//! Dropping it puts the terminal back, on every exit path.

use std::io::stdout;

use crossterm::event::{
    DisableMouseCapture, EnableMouseCapture, KeyboardEnhancementFlags,
    PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;
use crossterm::terminal::supports_keyboard_enhancement;
use ratatui::DefaultTerminal;

pub struct TerminalSession {
    terminal: DefaultTerminal,
    /// Whether keyboard enhancement flags were pushed and must be popped.
    keyboard_enhanced: bool,
}

impl TerminalSession {
    pub fn enter() -> color_eyre::Result<Self> {
        let terminal = ratatui::try_init()?;
        if let Err(err) = execute!(stdout(), EnableMouseCapture) {
            ratatui::restore();
            return Err(err.into());
        }
        let keyboard_enhanced = push_keyboard_enhancement();
        install_panic_hook(keyboard_enhanced);
        tracing::info!(keyboard_enhanced, "terminal session entered");
        Ok(Self {
            terminal,
            keyboard_enhanced,
        })
    }

    pub fn terminal(&mut self) -> &mut DefaultTerminal {
        &mut self.terminal
    }

    /// Ctrl+digit chords arrive intact only with enhancement on; legacy
    /// terminals send them as plain digits, NUL, or Esc.
    pub fn keyboard_enhanced(&self) -> bool {
        self.keyboard_enhanced
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if self.keyboard_enhanced {
            warn_on_failure(
                "pop keyboard enhancement flags",
                execute!(stdout(), PopKeyboardEnhancementFlags),
            );
        }
        warn_on_failure("disable mouse capture", execute!(stdout(), DisableMouseCapture));
        ratatui::restore();
        tracing::info!("terminal session left");
    }
}

/// Restoring is best effort; a failed step is logged and the rest still run.
fn warn_on_failure(step: &str, result: std::io::Result<()>) {
    if let Err(err) = result {
        tracing::warn!("Failed to {}: {}", step, err);
    }
}

/// Ask the terminal to report modified keys unambiguously. Needs raw mode.
fn push_keyboard_enhancement() -> bool {
    match supports_keyboard_enhancement() {
        Ok(true) => {
            let flags = KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES;
            if let Err(err) = execute!(stdout(), PushKeyboardEnhancementFlags(flags)) {
                tracing::warn!("Failed to enable keyboard enhancement: {}", err);
                false
            } else {
                tracing::debug!("Enabled keyboard enhancement flags: {:?}", flags);
                true
            }
        }
        Ok(false) => {
            tracing::info!("Keyboard enhancement not supported by terminal");
            false
        }
        Err(err) => {
            tracing::warn!("Failed to query keyboard enhancement support: {}", err);
            false
        }
    }
}

/// Chain a hook that also releases mouse capture and keyboard enhancement;
/// `ratatui` already restores raw mode and the main screen on panic.
fn install_panic_hook(keyboard_enhanced: bool) {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        if keyboard_enhanced {
            let _ = execute!(stdout(), PopKeyboardEnhancementFlags);
        }
        let _ = execute!(stdout(), DisableMouseCapture);
        hook(info);
    }));
}
