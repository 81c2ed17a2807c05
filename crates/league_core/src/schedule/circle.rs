//! Circle (polygon) method for single round-robin pairings.
//!
//! Index `n - 1` is the pivot; the other `n - 1` indices rotate one slot per
//! round. Orientation follows the Berger tables:
//! - the pivot hosts on even rounds and travels on odd rounds
//! - every other pairing `(round + k, round - k)` is hosted by `round + k`
//!
//! Each rotating index hosts exactly `n/2 - 1` of its rotating pairings and
//! visits for the other `n/2 - 1`, so the only imbalance a team can carry is
//! its single game against the pivot.

/// Rounds of `(home, away)` index pairs. `n` must be even and at least 2.
pub fn circle_rounds(n: usize) -> Vec<Vec<(usize, usize)>> {
    debug_assert!(n >= 2 && n % 2 == 0);

    let pivot = n - 1;
    let rotating = n - 1;

    (0..rotating)
        .map(|round| {
            let mut pairs = Vec::with_capacity(n / 2);
            if round % 2 == 0 {
                pairs.push((pivot, round));
            } else {
                pairs.push((round, pivot));
            }
            for offset in 1..n / 2 {
                let host = (round + offset) % rotating;
                let visitor = (round + rotating - offset) % rotating;
                pairs.push((host, visitor));
            }
            pairs
        })
        .collect()
}

/// Running home/away tally per team index.
#[derive(Debug, Clone)]
pub struct HomeAwayLedger {
    home: Vec<u32>,
    away: Vec<u32>,
}

impl HomeAwayLedger {
    pub fn new(n: usize) -> Self {
        Self { home: vec![0; n], away: vec![0; n] }
    }

    pub fn record(&mut self, home: usize, away: usize) {
        self.home[home] += 1;
        self.away[away] += 1;
    }

    /// `home - away` for one index. Positive means the team has hosted more.
    pub fn surplus(&self, index: usize) -> i64 {
        self.home[index] as i64 - self.away[index] as i64
    }

    pub fn max_imbalance(&self) -> u64 {
        (0..self.home.len()).map(|i| self.surplus(i).unsigned_abs()).max().unwrap_or(0)
    }
}
