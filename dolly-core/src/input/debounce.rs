//! Press-and-release debouncer
//!
//! A click is reported only after a key reading holds for the settle
//! time, reads the same on the next check, and the pad then returns to
//! "no key". Any disagreement before confirmation starts over.

use super::ButtonId;

/// Debouncer states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DebounceState {
    /// Waiting for any key
    Idle,
    /// A key appeared at `since_ms`; waiting for it to hold for the settle time
    Candidate { button: ButtonId, since_ms: u32 },
    /// Held for the settle time; needs one more matching check
    Confirmed { button: ButtonId },
    /// Confirmed press; waiting for release
    AwaitRelease { button: ButtonId },
}

/// Debounce state machine
#[derive(Debug, Clone)]
pub struct Debouncer {
    state: DebounceState,
    settle_ms: u32,
}

impl Debouncer {
    /// Create a debouncer with the given settle time
    pub fn new(settle_ms: u32) -> Self {
        Self {
            state: DebounceState::Idle,
            settle_ms,
        }
    }

    /// Current state
    pub fn state(&self) -> DebounceState {
        self.state
    }

    /// Drop any partial press
    pub fn reset(&mut self) {
        self.state = DebounceState::Idle;
    }

    /// Feed one raw reading taken at `now_ms`
    ///
    /// Returns the key once a full click has been seen.
    pub fn update(&mut self, raw: ButtonId, now_ms: u32) -> Option<ButtonId> {
        use DebounceState::*;

        let (next, click) = match self.state {
            Idle if raw.is_pressed() => (
                Candidate {
                    button: raw,
                    since_ms: now_ms,
                },
                None,
            ),
            Idle => (Idle, None),

            Candidate { button, .. } if raw != button => (Idle, None),
            Candidate { button, since_ms } => {
                if now_ms.wrapping_sub(since_ms) >= self.settle_ms {
                    (Confirmed { button }, None)
                } else {
                    (self.state, None)
                }
            }

            Confirmed { button } if raw == button => (AwaitRelease { button }, None),
            Confirmed { .. } => (Idle, None),

            AwaitRelease { button } if raw == ButtonId::None => (Idle, Some(button)),
            AwaitRelease { .. } => (self.state, None),
        };

        self.state = next;
        click
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed(debouncer: &mut Debouncer, samples: &[(ButtonId, u32)]) -> Option<ButtonId> {
        let mut click = None;
        for &(raw, t) in samples {
            if let Some(b) = debouncer.update(raw, t) {
                click = Some(b);
            }
        }
        click
    }

    #[test]
    fn test_clean_click() {
        let mut d = Debouncer::new(50);
        let click = feed(
            &mut d,
            &[
                (ButtonId::Up, 0),
                (ButtonId::Up, 25),
                (ButtonId::Up, 50),
                (ButtonId::Up, 55),
                (ButtonId::Up, 200),
                (ButtonId::None, 210),
            ],
        );
        assert_eq!(click, Some(ButtonId::Up));
        assert_eq!(d.state(), DebounceState::Idle);
    }

    #[test]
    fn test_bounce_during_settle_restarts() {
        let mut d = Debouncer::new(50);
        d.update(ButtonId::Left, 0);
        d.update(ButtonId::Down, 20);
        assert_eq!(d.state(), DebounceState::Idle);

        // A new press has to settle from scratch
        d.update(ButtonId::Left, 30);
        d.update(ButtonId::Left, 60);
        assert!(matches!(d.state(), DebounceState::Candidate { .. }));
    }

    #[test]
    fn test_unconfirmed_press_is_dropped() {
        let mut d = Debouncer::new(50);
        let click = feed(
            &mut d,
            &[
                (ButtonId::Select, 0),
                (ButtonId::Select, 60),
                (ButtonId::None, 65),
                (ButtonId::None, 70),
            ],
        );
        assert_eq!(click, None);
        assert_eq!(d.state(), DebounceState::Idle);
    }

    #[test]
    fn test_no_click_until_release() {
        let mut d = Debouncer::new(10);
        let click = feed(
            &mut d,
            &[
                (ButtonId::Right, 0),
                (ButtonId::Right, 10),
                (ButtonId::Right, 15),
                (ButtonId::Right, 500),
                (ButtonId::Up, 510),
            ],
        );
        assert_eq!(click, None);
        assert_eq!(d.state(), DebounceState::AwaitRelease { button: ButtonId::Right });
    }

    #[test]
    fn test_settle_survives_timer_wrap() {
        let mut d = Debouncer::new(50);
        d.update(ButtonId::Up, u32::MAX - 10);
        d.update(ButtonId::Up, 40);
        assert_eq!(d.state(), DebounceState::Confirmed { button: ButtonId::Up });
    }
}
