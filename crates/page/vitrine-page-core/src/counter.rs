//! Progressive counters.
//!
//! Each counter runs `Idle -> Animating -> Done` at most once per engine
//! lifetime. Activation happens on the scroll dispatch (viewport test with
//! offset 0); value stepping happens once per frame tick. The phase enum is
//! the sole guard against a scroll tick and a frame tick racing to start the
//! same element twice: the phase is written before any stepping can observe
//! the counter.

use log::debug;

use crate::viewport::ElementRect;

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum CounterPhase {
    Idle,
    Animating { started_ms: f64 },
    Done,
}

#[derive(Clone, Debug)]
pub struct Counter {
    pub key: String,
    pub rect: ElementRect,
    /// Parsed once at registration from the raw markup attribute.
    pub target: u32,
    pub phase: CounterPhase,
    /// Last emitted value; clamps the displayed sequence to be monotone even
    /// if floor truncation wobbles across ticks.
    pub last_value: u32,
}

impl Counter {
    pub fn new(key: impl Into<String>, rect: ElementRect, raw_target: &str) -> Self {
        Self {
            key: key.into(),
            rect,
            target: parse_counter_target(raw_target),
            phase: CounterPhase::Idle,
            last_value: 0,
        }
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        matches!(self.phase, CounterPhase::Animating { .. })
    }
}

/// Parse a counter target from its raw markup attribute.
///
/// Leading-integer-prefix semantics, mirroring the numeric coercion of the
/// markup this was extracted from: an optional sign followed by ASCII digits,
/// trailing garbage ignored ("120px" is 120). Anything unparsable is 0;
/// negatives clamp to 0; overflow saturates.
pub fn parse_counter_target(raw: &str) -> u32 {
    let s = raw.trim();
    let (negative, digits) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };
    let prefix: &str = {
        let end = digits
            .char_indices()
            .find(|(_, c)| !c.is_ascii_digit())
            .map(|(i, _)| i)
            .unwrap_or(digits.len());
        &digits[..end]
    };
    if prefix.is_empty() {
        if !s.is_empty() {
            debug!("counter target {raw:?} is not numeric, defaulting to 0");
        }
        return 0;
    }
    if negative {
        debug!("counter target {raw:?} is negative, clamping to 0");
        return 0;
    }
    match prefix.parse::<u32>() {
        Ok(n) => n,
        Err(_) => {
            debug!("counter target {raw:?} overflows, saturating");
            u32::MAX
        }
    }
}
