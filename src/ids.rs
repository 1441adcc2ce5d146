//! Uniqueness tokens for gradient and saved-palette identifiers.

/// Source of identifier tokens. Each call returns a token distinct from every
/// earlier one from the same source.
pub trait IdSource {
    fn next_token(&mut self) -> u64;
}

/// Milliseconds since the Unix epoch, bumped when two calls land in the same
/// millisecond.
#[derive(Debug, Default)]
pub struct ClockIds {
    last: u64,
}

impl ClockIds {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(target_arch = "wasm32")]
fn now_millis() -> u64 {
    js_sys::Date::now() as u64
}

#[cfg(not(target_arch = "wasm32"))]
fn now_millis() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

impl IdSource for ClockIds {
    fn next_token(&mut self) -> u64 {
        self.last = now_millis().max(self.last + 1);
        self.last
    }
}

/// Counter starting at a fixed value, for reproducible output.
#[derive(Debug, Clone)]
pub struct SequentialIds {
    next: u64,
}

impl SequentialIds {
    pub fn starting_at(start: u64) -> Self {
        Self { next: start }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::starting_at(1)
    }
}

impl IdSource for SequentialIds {
    fn next_token(&mut self) -> u64 {
        let token = self.next;
        self.next += 1;
        token
    }
}
