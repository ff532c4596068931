//! Simulated Source - seeded random stage results for demos and benchmarks.
//!
//! Every value comes from a single `StdRng`, so a given seed and call order
//! always reproduce the same admission round.

use crate::types::StageInputSource;
use anyhow::Result;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use roster::{Candidate, CandidateId, RosterEntry};
use tracing::debug;

const GIVEN_NAMES: [&str; 10] = [
    "Ayesha", "Bilal", "Fatima", "Hamza", "Iqra", "Omar", "Sana", "Usman", "Zainab", "Zara",
];

fn one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Generate `count` applicants with random academic records.
pub fn random_roster(count: usize, seed: u64) -> Vec<RosterEntry> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|i| {
            let name = format!("{} {}", GIVEN_NAMES[i % GIVEN_NAMES.len()], i + 1);
            RosterEntry::new(
                name,
                one_decimal(rng.random_range(40.0..=100.0)),
                one_decimal(rng.random_range(40.0..=100.0)),
            )
        })
        .collect()
}

const DEFAULT_FEE_RATE: f64 = 0.8;
const DEFAULT_TEST_FLOOR: f64 = 60.0;

/// Makes up fee, test and interview results.
pub struct SimulatedSource {
    rng: StdRng,
    /// Probability that a candidate pays the fee
    fee_rate: f64,
    /// Lowest possible test score (the highest is always 100)
    test_floor: f64,
}

impl SimulatedSource {
    /// Create a simulated source from a seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            fee_rate: DEFAULT_FEE_RATE,
            test_floor: DEFAULT_TEST_FLOOR,
        }
    }

    /// Configure the fee payment probability (default: 0.8, also used for NaN)
    pub fn with_fee_rate(mut self, rate: f64) -> Self {
        self.fee_rate = if rate.is_nan() {
            DEFAULT_FEE_RATE
        } else {
            rate.clamp(0.0, 1.0)
        };
        self
    }

    /// Configure the lowest test score drawn (default: 60.0, also used for NaN)
    pub fn with_test_floor(mut self, floor: f64) -> Self {
        self.test_floor = if floor.is_nan() {
            DEFAULT_TEST_FLOOR
        } else {
            floor.clamp(0.0, 100.0)
        };
        self
    }
}

impl StageInputSource for SimulatedSource {
    fn fee_paid(&mut self, _id: CandidateId, candidate: &Candidate) -> Result<bool> {
        let paid = self.rng.random_bool(self.fee_rate);
        debug!(candidate = %candidate.name, paid, "simulated fee submission");
        Ok(paid)
    }

    fn test_score(&mut self, _id: CandidateId, candidate: &Candidate) -> Result<f64> {
        let score = one_decimal(self.rng.random_range(self.test_floor..=100.0));
        debug!(candidate = %candidate.name, score, "simulated test score");
        Ok(score)
    }

    fn interview_score(&mut self, _id: CandidateId, candidate: &Candidate) -> Result<f64> {
        let score = one_decimal(self.rng.random_range(50.0..=100.0));
        debug!(candidate = %candidate.name, score, "simulated interview score");
        Ok(score)
    }
}
