//! Progress stages reported while an evaluation is in flight.

use std::fmt;

/// Coarse progress through a single evaluation request.
///
/// The evaluator reports each stage at most once, in declaration order.
/// Fractions are monotonic so callers can drive a progress bar directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Resolving the backend and opening a chat session.
    Initializing,
    /// The request message is being sent.
    Sending,
    /// Blocked on the model's reply.
    Waiting,
    /// The reply has arrived.
    Complete,
}

impl Stage {
    /// All stages, in the order the evaluator reports them.
    pub const ALL: [Stage; 4] = [
        Stage::Initializing,
        Stage::Sending,
        Stage::Waiting,
        Stage::Complete,
    ];

    /// Human-readable description for progress display.
    pub fn description(&self) -> &'static str {
        match self {
            Stage::Initializing => "initializing model client...",
            Stage::Sending => "sending your idea...",
            Stage::Waiting => "waiting for the evaluation...",
            Stage::Complete => "complete",
        }
    }

    /// Completion fraction in `[0.0, 1.0]`.
    pub fn fraction(&self) -> f32 {
        match self {
            Stage::Initializing => 0.1,
            Stage::Sending => 0.3,
            Stage::Waiting => 0.6,
            Stage::Complete => 1.0,
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_distinct_stages() {
        assert_eq!(Stage::ALL.len(), 4);
        for (i, a) in Stage::ALL.iter().enumerate() {
            for b in &Stage::ALL[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn fractions_are_monotonic() {
        let mut last = 0.0;
        for stage in Stage::ALL {
            assert!(stage.fraction() > last, "{stage:?} fraction not increasing");
            last = stage.fraction();
        }
        assert_eq!(Stage::Complete.fraction(), 1.0);
    }

    #[test]
    fn descriptions_are_nonempty() {
        for stage in Stage::ALL {
            assert!(!stage.description().is_empty());
        }
    }

    #[test]
    fn display_matches_description() {
        assert_eq!(Stage::Waiting.to_string(), Stage::Waiting.description());
    }
}
