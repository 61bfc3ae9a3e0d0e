use crate::domain::ports::ApprovalSource;
use crate::error::{Result, ShopError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;
use std::sync::Mutex;

/// Approval probability used when none is configured.
pub const DEFAULT_APPROVAL_RATE: f64 = 0.8;

/// Approves a payment when a uniform draw in `[0, 1)` falls below `rate`.
pub struct RandomApproval {
    rng: Mutex<StdRng>,
    rate: f64,
}

impl RandomApproval {
    /// A reproducible source. Two sources with the same seed and rate decide alike.
    pub fn seeded(seed: u64, rate: f64) -> Result<Self> {
        Self::with_rng(StdRng::seed_from_u64(seed), rate)
    }

    pub fn from_entropy(rate: f64) -> Result<Self> {
        Self::with_rng(StdRng::from_entropy(), rate)
    }

    fn with_rng(rng: StdRng, rate: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&rate) {
            return Err(ShopError::Config(format!(
                "approval rate must be within [0, 1], got {rate}"
            )));
        }
        Ok(Self {
            rng: Mutex::new(rng),
            rate,
        })
    }
}

impl ApprovalSource for RandomApproval {
    fn approve(&self) -> bool {
        // A poisoned lock still holds a usable RNG.
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        rng.r#gen::<f64>() < self.rate
    }
}

/// Always gives the same answer.
pub struct FixedApproval(bool);

impl FixedApproval {
    pub fn always() -> Self {
        Self(true)
    }

    pub fn never() -> Self {
        Self(false)
    }
}

impl ApprovalSource for FixedApproval {
    fn approve(&self) -> bool {
        self.0
    }
}

/// Replays a queue of outcomes, then falls back to a fixed answer.
pub struct ScriptedApproval {
    outcomes: Mutex<VecDeque<bool>>,
    fallback: bool,
}

impl ScriptedApproval {
    pub fn new(outcomes: impl IntoIterator<Item = bool>, fallback: bool) -> Self {
        Self {
            outcomes: Mutex::new(outcomes.into_iter().collect()),
            fallback,
        }
    }
}

impl ApprovalSource for ScriptedApproval {
    fn approve(&self) -> bool {
        let mut outcomes = self.outcomes.lock().unwrap_or_else(|e| e.into_inner());
        outcomes.pop_front().unwrap_or(self.fallback)
    }
}
