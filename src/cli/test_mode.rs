//! Scripted prompt answers for non-interactive runs.
//!
//! When `SPA_BOOKING_TEST_INPUTS` is set, prompts read their answers from it
//! instead of the terminal. Answers are separated by `|`; `<KEEP>` keeps the
//! current value, `<BLANK>` submits an empty value and `<CANCEL>` aborts.

use once_cell::sync::Lazy;
use std::{collections::VecDeque, env, sync::Mutex};

pub const INPUTS_ENV: &str = "SPA_BOOKING_TEST_INPUTS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptedInput {
    Value(String),
    Keep,
    Cancel,
}

struct InputQueue {
    enabled: bool,
    inputs: VecDeque<ScriptedInput>,
}

impl InputQueue {
    fn from_env() -> Self {
        match env::var(INPUTS_ENV) {
            Ok(raw) => Self {
                enabled: true,
                inputs: parse_inputs(&raw),
            },
            Err(_) => Self {
                enabled: false,
                inputs: VecDeque::new(),
            },
        }
    }
}

static INPUTS: Lazy<Mutex<InputQueue>> = Lazy::new(|| Mutex::new(InputQueue::from_env()));

pub fn is_enabled() -> bool {
    INPUTS.lock().map(|queue| queue.enabled).unwrap_or(false)
}

/// Next scripted answer; `None` once the script is exhausted.
pub fn next_input() -> Option<ScriptedInput> {
    INPUTS.lock().ok()?.inputs.pop_front()
}

pub fn parse_inputs(raw: &str) -> VecDeque<ScriptedInput> {
    raw.split('|')
        .map(|token| match token.trim() {
            "<KEEP>" => ScriptedInput::Keep,
            "<CANCEL>" => ScriptedInput::Cancel,
            "<BLANK>" => ScriptedInput::Value(String::new()),
            _ => ScriptedInput::Value(token.to_string()),
        })
        .collect()
}
