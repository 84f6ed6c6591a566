//! Time-driven block behaviors: counters, countdowns and flip cards.
//!
//! All state machines here take time (or input events) as plain values so
//! tests can drive them without a clock.

use pagecraft_core::blocks::{CountdownData, CounterData, ExpiryPolicy, FlipTrigger};

/// Visibility fraction at which a counter starts animating.
pub const COUNTER_VISIBILITY_THRESHOLD: f64 = 0.3;

/// Cubic ease-out over `t` in `[0, 1]`.
pub fn ease_out_cubic(t: f64) -> f64 {
    let inv = 1.0 - t.clamp(0.0, 1.0);
    1.0 - inv * inv * inv
}

/// Single-shot visibility trigger. Fires once when the observed fraction
/// crosses the threshold, then stays detached.
#[derive(Debug, Default)]
pub struct VisibilityTrigger {
    fired: bool,
}

impl VisibilityTrigger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reports a new visible fraction; returns `true` exactly once.
    pub fn observe(&mut self, visible_fraction: f64) -> bool {
        if self.fired || visible_fraction < COUNTER_VISIBILITY_THRESHOLD {
            return false;
        }
        self.fired = true;
        true
    }

    pub fn is_detached(&self) -> bool {
        self.fired
    }
}

/// Eased count-up animation toward the configured target.
#[derive(Debug, Clone)]
pub struct CounterAnimation {
    target: u64,
    duration_ms: u32,
}

impl CounterAnimation {
    pub fn new(data: &CounterData) -> Self {
        Self {
            target: data.target,
            duration_ms: data.duration_ms,
        }
    }

    /// Value shown `elapsed_ms` after the animation started. Reaches the
    /// exact target at the end of the duration and holds it after.
    pub fn value_at(&self, elapsed_ms: u32) -> u64 {
        if self.duration_ms == 0 || elapsed_ms >= self.duration_ms {
            return self.target;
        }
        let t = f64::from(elapsed_ms) / f64::from(self.duration_ms);
        (self.target as f64 * ease_out_cubic(t)).round() as u64
    }

    pub fn is_done(&self, elapsed_ms: u32) -> bool {
        elapsed_ms >= self.duration_ms
    }
}

/// Remaining time split into display units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimeLeft {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl TimeLeft {
    fn from_millis(remaining_ms: i64) -> Self {
        let total_seconds = (remaining_ms.max(0) as u64) / 1000;
        Self {
            days: total_seconds / 86_400,
            hours: (total_seconds % 86_400) / 3_600,
            minutes: (total_seconds % 3_600) / 60,
            seconds: total_seconds % 60,
        }
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }
}

/// What the countdown does once it expires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpiryAction {
    ShowMessage(String),
    Hide,
    Redirect(String),
}

/// Result of one countdown tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CountdownTick {
    /// Still running; show the remaining time.
    Running(TimeLeft),
    /// Just expired; apply the action. Emitted exactly once.
    Expired(ExpiryAction),
    /// Already expired on an earlier tick; nothing to do.
    Finished,
}

/// Countdown state machine. The caller ticks it with the current time;
/// the expiry action is surfaced on exactly one tick, even when the
/// target was already in the past at construction.
#[derive(Debug, Clone)]
pub struct Countdown {
    target_epoch_ms: i64,
    policy: ExpiryPolicy,
    expired_message: String,
    redirect_url: String,
    expired: bool,
}

impl Countdown {
    pub fn new(data: &CountdownData) -> Self {
        Self {
            target_epoch_ms: data.target_epoch_ms,
            policy: data.policy.clone(),
            expired_message: data.expired_message.clone(),
            redirect_url: data.redirect_url.clone(),
            expired: false,
        }
    }

    /// Remaining time at `now_epoch_ms`, floored at zero.
    pub fn remaining(&self, now_epoch_ms: i64) -> TimeLeft {
        TimeLeft::from_millis(self.target_epoch_ms - now_epoch_ms)
    }

    pub fn tick(&mut self, now_epoch_ms: i64) -> CountdownTick {
        if self.expired {
            return CountdownTick::Finished;
        }
        if now_epoch_ms >= self.target_epoch_ms {
            self.expired = true;
            return CountdownTick::Expired(self.expiry_action());
        }
        CountdownTick::Running(self.remaining(now_epoch_ms))
    }

    fn expiry_action(&self) -> ExpiryAction {
        match self.policy {
            ExpiryPolicy::Message => ExpiryAction::ShowMessage(self.expired_message.clone()),
            ExpiryPolicy::Hide => ExpiryAction::Hide,
            ExpiryPolicy::Redirect => ExpiryAction::Redirect(self.redirect_url.clone()),
        }
    }
}

/// Pointer inputs a flip card reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlipInput {
    /// Mouse click.
    Click,
    /// Touch tap. In hover mode, where touch devices have no hover, a tap
    /// toggles the card like a click would.
    Tap,
}

/// Next flipped state for a card given its trigger mode and an input.
/// Hover-mode mouse hovering is presentational and never reaches here;
/// hover-mode clicks are likewise ignored.
pub fn flip_after(trigger: FlipTrigger, flipped: bool, input: FlipInput) -> bool {
    match (trigger, input) {
        (FlipTrigger::Click, _) => !flipped,
        (FlipTrigger::Hover, FlipInput::Tap) => !flipped,
        (FlipTrigger::Hover, FlipInput::Click) => flipped,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter_hits_exact_target() {
        let anim = CounterAnimation::new(&CounterData {
            target: 997,
            duration_ms: 2000,
            ..CounterData::default()
        });
        assert_eq!(anim.value_at(2000), 997);
        assert_eq!(anim.value_at(5000), 997);
    }

    #[test]
    fn test_counter_eases_out() {
        let anim = CounterAnimation::new(&CounterData {
            target: 1000,
            duration_ms: 1000,
            ..CounterData::default()
        });
        let halfway = anim.value_at(500);
        // Ease-out covers most of the distance in the first half.
        assert!(halfway > 500, "halfway value was {halfway}");
        assert!(anim.value_at(250) < halfway);
    }

    #[test]
    fn test_counter_zero_duration_jumps_to_target() {
        let anim = CounterAnimation::new(&CounterData {
            target: 42,
            duration_ms: 0,
            ..CounterData::default()
        });
        assert_eq!(anim.value_at(0), 42);
    }

    #[test]
    fn test_visibility_trigger_fires_once() {
        let mut trigger = VisibilityTrigger::new();
        assert!(!trigger.observe(0.1));
        assert!(trigger.observe(0.3));
        assert!(trigger.is_detached());
        assert!(!trigger.observe(1.0));
    }

    #[test]
    fn test_countdown_running_splits_units() {
        let mut countdown = Countdown::new(&CountdownData {
            target_epoch_ms: 90_061_000, // 1d 1h 1m 1s after epoch
            ..CountdownData::default()
        });
        let tick = countdown.tick(0);
        assert_eq!(
            tick,
            CountdownTick::Running(TimeLeft {
                days: 1,
                hours: 1,
                minutes: 1,
                seconds: 1,
            })
        );
    }

    #[test]
    fn test_past_target_expires_exactly_once() {
        let mut countdown = Countdown::new(&CountdownData {
            target_epoch_ms: 1_000,
            ..CountdownData::default()
        });
        assert!(countdown.remaining(5_000).is_zero());
        assert_eq!(
            countdown.tick(5_000),
            CountdownTick::Expired(ExpiryAction::ShowMessage(
                "This offer has ended.".to_string()
            ))
        );
        assert_eq!(countdown.tick(6_000), CountdownTick::Finished);
        assert_eq!(countdown.tick(7_000), CountdownTick::Finished);
    }

    #[test]
    fn test_redirect_policy_carries_url() {
        let mut countdown = Countdown::new(&CountdownData {
            target_epoch_ms: 0,
            policy: ExpiryPolicy::Redirect,
            redirect_url: "/expired".to_string(),
            ..CountdownData::default()
        });
        assert_eq!(
            countdown.tick(1),
            CountdownTick::Expired(ExpiryAction::Redirect("/expired".to_string()))
        );
    }

    #[test]
    fn test_flip_click_mode_toggles() {
        assert!(flip_after(FlipTrigger::Click, false, FlipInput::Click));
        assert!(!flip_after(FlipTrigger::Click, true, FlipInput::Click));
    }

    #[test]
    fn test_flip_hover_mode_tap_toggles_click_ignored() {
        assert!(flip_after(FlipTrigger::Hover, false, FlipInput::Tap));
        assert!(!flip_after(FlipTrigger::Hover, false, FlipInput::Click));
    }
}
