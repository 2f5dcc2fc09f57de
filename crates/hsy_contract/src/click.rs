//! Click gating: suppression while inactive and leading-edge throttling.
//!
//! Timestamps are monotonic milliseconds supplied by the caller, so the gate never reads a clock
//! or blocks.

/// Result of offering one click to a [`ClickGate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Notify the click handler.
    Fire,
    /// Dropped because the button is disabled or loading.
    Suppressed,
    /// Dropped because it landed inside the throttle window.
    Throttled,
}

impl ClickOutcome {
    /// Whether the click handler should run.
    pub fn fires(self) -> bool {
        matches!(self, Self::Fire)
    }
}

/// Leading-edge throttle: the first click fires, clicks inside the window are dropped, and the
/// window restarts at each accepted click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Throttle {
    window_ms: u64,
    last_accepted_ms: Option<u64>,
}

impl Throttle {
    /// Creates a throttle with the given window.
    pub fn new(window_ms: u64) -> Self {
        Self {
            window_ms,
            last_accepted_ms: None,
        }
    }

    /// Accepts the click at `now_ms` unless it falls inside the current window.
    pub fn try_accept(&mut self, now_ms: u64) -> bool {
        if let Some(last) = self.last_accepted_ms {
            if now_ms.saturating_sub(last) < self.window_ms {
                return false;
            }
        }
        self.last_accepted_ms = Some(now_ms);
        true
    }
}

/// Per-button click gate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClickGate {
    throttle: Option<Throttle>,
}

impl ClickGate {
    /// Creates a gate, throttled when `throttle_ms` is set.
    pub fn new(throttle_ms: Option<u64>) -> Self {
        Self {
            throttle: throttle_ms.map(Throttle::new),
        }
    }

    /// Decides whether a click at `now_ms` notifies.
    ///
    /// Suppressed clicks leave the throttle window untouched.
    pub fn on_click(&mut self, inactive: bool, now_ms: u64) -> ClickOutcome {
        if inactive {
            return ClickOutcome::Suppressed;
        }
        match self.throttle.as_mut() {
            Some(throttle) => {
                if throttle.try_accept(now_ms) {
                    ClickOutcome::Fire
                } else {
                    ClickOutcome::Throttled
                }
            }
            None => ClickOutcome::Fire,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::ButtonConfig;

    fn count_fired(gate: &mut ClickGate, inactive: bool, clicks: &[u64]) -> usize {
        clicks
            .iter()
            .filter(|now| gate.on_click(inactive, **now).fires())
            .count()
    }

    #[test]
    fn unthrottled_gate_fires_every_click() {
        let mut gate = ClickGate::new(None);
        assert_eq!(count_fired(&mut gate, false, &[0, 1, 2]), 3);
    }

    #[test]
    fn disabled_button_never_notifies() {
        let resolved = ButtonConfig {
            disabled: true,
            ..ButtonConfig::default()
        }
        .resolve(None);
        let mut gate = ClickGate::new(resolved.throttle_ms);
        assert_eq!(gate.on_click(resolved.is_inactive(), 10), ClickOutcome::Suppressed);
        assert_eq!(count_fired(&mut gate, resolved.is_inactive(), &[0, 1000]), 0);
    }

    #[test]
    fn loading_button_never_notifies() {
        let resolved = ButtonConfig {
            loading: true,
            use_throttle: true,
            ..ButtonConfig::default()
        }
        .resolve(None);
        let mut gate = ClickGate::new(resolved.throttle_ms);
        assert_eq!(count_fired(&mut gate, resolved.is_inactive(), &[0, 600, 1200]), 0);
    }

    #[test]
    fn clicks_inside_window_are_dropped() {
        let mut gate = ClickGate::new(Some(400));
        assert_eq!(gate.on_click(false, 1_000), ClickOutcome::Fire);
        assert_eq!(gate.on_click(false, 1_399), ClickOutcome::Throttled);
    }

    #[test]
    fn clicks_at_or_after_window_fire() {
        let mut gate = ClickGate::new(Some(400));
        assert_eq!(count_fired(&mut gate, false, &[1_000, 1_400]), 2);
    }

    #[test]
    fn window_restarts_at_accepted_click_only() {
        let mut gate = ClickGate::new(Some(400));
        // 1_300 is dropped, so the window still runs from 1_000.
        assert_eq!(count_fired(&mut gate, false, &[1_000, 1_300, 1_450, 1_800]), 2);
    }

    #[test]
    fn suppressed_clicks_do_not_consume_window() {
        let mut gate = ClickGate::new(Some(400));
        assert_eq!(gate.on_click(true, 1_000), ClickOutcome::Suppressed);
        assert_eq!(gate.on_click(false, 1_100), ClickOutcome::Fire);
    }

    #[test]
    fn throttled_gate_alternates_fire_and_drop() {
        let mut gate = ClickGate::new(Some(400));
        let outcomes: Vec<ClickOutcome> = [0, 100, 400, 799, 800]
            .into_iter()
            .map(|now| gate.on_click(false, now))
            .collect();
        assert_eq!(
            outcomes,
            vec![
                ClickOutcome::Fire,
                ClickOutcome::Throttled,
                ClickOutcome::Fire,
                ClickOutcome::Throttled,
                ClickOutcome::Fire,
            ]
        );
    }

    #[test]
    fn clock_moving_backwards_stays_throttled() {
        let mut gate = ClickGate::new(Some(400));
        assert!(gate.on_click(false, 500).fires());
        assert_eq!(gate.on_click(false, 100), ClickOutcome::Throttled);
    }
}
