use colored::Colorize;
use std::fmt;
use std::sync::{OnceLock, RwLock};

/// Message categories used by the CLI output helpers.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MessageKind {
    Info,
    Success,
    Warning,
    /// Validation message printed under a field.
    FieldError,
    Section,
    Detail,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OutputPreferences {
    pub plain_mode: bool,
    pub high_contrast_mode: bool,
}

static PREFERENCES: OnceLock<RwLock<OutputPreferences>> = OnceLock::new();

pub fn set_preferences(prefs: OutputPreferences) {
    let lock = PREFERENCES.get_or_init(|| RwLock::new(OutputPreferences::default()));
    if let Ok(mut guard) = lock.write() {
        *guard = prefs;
    }
}

pub fn current_preferences() -> OutputPreferences {
    PREFERENCES
        .get_or_init(|| RwLock::new(OutputPreferences::default()))
        .read()
        .map(|guard| *guard)
        .unwrap_or_default()
}

fn label(kind: MessageKind, plain: bool) -> &'static str {
    match (kind, plain) {
        (MessageKind::Success, false) => "✔ ",
        (MessageKind::Success, true) => "OK: ",
        (MessageKind::Warning, false) => "⚠ ",
        (MessageKind::Warning, true) => "WARNING: ",
        (MessageKind::FieldError, _) => "  ! ",
        _ => "",
    }
}

/// Applies the decoration and colour for `kind` under `prefs`.
pub fn style(kind: MessageKind, message: impl fmt::Display, prefs: &OutputPreferences) -> String {
    let text = message.to_string();
    let base = match kind {
        MessageKind::Section => format!("=== {} ===", text.trim()),
        MessageKind::Detail => format!("  {text}"),
        _ => format!("{}{}", label(kind, prefs.plain_mode), text),
    };

    if prefs.plain_mode {
        return base;
    }

    if prefs.high_contrast_mode {
        return match kind {
            MessageKind::Info | MessageKind::Detail => base,
            _ => base.bold().to_string(),
        };
    }

    match kind {
        MessageKind::Success => base.bright_green().to_string(),
        MessageKind::Warning => base.bright_yellow().to_string(),
        MessageKind::FieldError => base.bright_red().to_string(),
        MessageKind::Section => base.bold().to_string(),
        MessageKind::Detail => base.dimmed().to_string(),
        MessageKind::Info => base,
    }
}

pub fn print(kind: MessageKind, message: impl fmt::Display) {
    let prefs = current_preferences();
    println!("{}", style(kind, message, &prefs));
}

pub fn warning(message: impl fmt::Display) {
    print(MessageKind::Warning, message);
}

pub fn field_error(message: impl fmt::Display) {
    print(MessageKind::FieldError, message);
}

pub fn detail(message: impl fmt::Display) {
    print(MessageKind::Detail, message);
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLAIN: OutputPreferences = OutputPreferences {
        plain_mode: true,
        high_contrast_mode: false,
    };

    #[test]
    fn plain_mode_uses_text_labels() {
        assert_eq!(style(MessageKind::Success, "Booked", &PLAIN), "OK: Booked");
        assert_eq!(
            style(MessageKind::FieldError, "CVV is required", &PLAIN),
            "  ! CVV is required"
        );
        assert_eq!(style(MessageKind::Section, " Payment ", &PLAIN), "=== Payment ===");
        assert_eq!(style(MessageKind::Info, "hello", &PLAIN), "hello");
    }

    #[test]
    fn preferences_can_be_replaced() {
        set_preferences(PLAIN);
        assert!(current_preferences().plain_mode);
        set_preferences(OutputPreferences::default());
        assert!(!current_preferences().plain_mode);
    }
}
