//! Effective strength and expected goals.
//!
//! All functions are pure apart from the jitter draw, which takes the
//! caller's RNG.

use crate::config::SimulationConfig;
use crate::models::Team;
use rand::Rng;

/// One linear piece of the expected-goals curve: applies from `from_ratio`
/// upward, `base + (ratio - from_ratio) * slope`.
#[derive(Debug, Clone, Copy)]
struct CurveSegment {
    from_ratio: f64,
    base: f64,
    slope: f64,
}

/// Ordered from the highest ratio down. Continuous at every breakpoint:
/// ratio 1.0 maps to 1.5 goals and ratio 1.6 to 3.0.
const EXPECTED_GOALS_CURVE: [CurveSegment; 7] = [
    CurveSegment { from_ratio: 1.6, base: 3.0, slope: 0.8 },
    CurveSegment { from_ratio: 1.4, base: 2.5, slope: 2.5 },
    CurveSegment { from_ratio: 1.2, base: 2.0, slope: 2.5 },
    CurveSegment { from_ratio: 1.0, base: 1.5, slope: 2.5 },
    CurveSegment { from_ratio: 0.8, base: 1.0, slope: 2.5 },
    CurveSegment { from_ratio: 0.6, base: 0.6, slope: 2.0 },
    CurveSegment { from_ratio: 0.0, base: 0.3, slope: 0.5 },
];

/// Weighted sub-ratings before any bonus.
pub fn base_strength(team: &Team, config: &SimulationConfig) -> f64 {
    team.attack() as f64 * config.attack_weight
        + team.midfield() as f64 * config.midfield_weight
        + team.defense() as f64 * config.defense_weight
        + team.goalkeeper() as f64 * config.goalkeeper_weight
}

pub fn quality_bonus(overall_rating: u8, config: &SimulationConfig) -> f64 {
    if overall_rating >= config.elite_threshold {
        config.elite_bonus
    } else if overall_rating >= config.excellent_threshold {
        config.excellent_bonus
    } else {
        0.0
    }
}

/// Strength before jitter and clamping. Exposed for calibration.
pub fn raw_strength(team: &Team, is_home: bool, config: &SimulationConfig) -> f64 {
    let home_advantage = if is_home { config.home_advantage } else { 0.0 };
    base_strength(team, config) + home_advantage + quality_bonus(team.overall_rating(), config)
}

/// Strength used for one match: bonuses, uniform jitter in
/// `[-jitter, jitter)`, clamped into `[min_strength, max_strength]`.
pub fn effective_strength<R: Rng + ?Sized>(
    team: &Team,
    is_home: bool,
    config: &SimulationConfig,
    rng: &mut R,
) -> f64 {
    let jitter = if config.jitter > 0.0 { rng.gen_range(-config.jitter..config.jitter) } else { 0.0 };
    (raw_strength(team, is_home, config) + jitter).clamp(config.min_strength, config.max_strength)
}

/// Maps attacking strength against the opponent's defense rating to λ.
pub fn expected_goals(strength: f64, opposing_defense: u8, config: &SimulationConfig) -> f64 {
    let defense = opposing_defense.max(config.defense_floor) as f64;
    let ratio = strength / defense;
    (curve(ratio) * config.expected_goals_scale)
        .clamp(config.min_expected_goals, config.max_expected_goals)
}

fn curve(ratio: f64) -> f64 {
    EXPECTED_GOALS_CURVE
        .iter()
        .find(|segment| ratio >= segment.from_ratio)
        .map(|segment| segment.base + (ratio - segment.from_ratio) * segment.slope)
        .unwrap_or(EXPECTED_GOALS_CURVE[EXPECTED_GOALS_CURVE.len() - 1].base)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{TeamId, TeamRatings};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn team(ratings: TeamRatings) -> Team {
        Team::new(TeamId(1), "Test FC", "TST", ratings).unwrap()
    }

    #[test]
    fn test_base_strength_weights() {
        let cfg = SimulationConfig::default();
        let t = team(TeamRatings::new(92, 88, 90, 90));
        // 36.8 + 26.4 + 18.0 + 9.0
        assert!((base_strength(&t, &cfg) - 90.2).abs() < 1e-9);
    }

    #[test]
    fn test_quality_bonus_tiers() {
        let cfg = SimulationConfig::default();
        assert_eq!(quality_bonus(90, &cfg), 2.0);
        assert_eq!(quality_bonus(85, &cfg), 2.0);
        assert_eq!(quality_bonus(80, &cfg), 1.0);
        assert_eq!(quality_bonus(74, &cfg), 0.0);
    }

    #[test]
    fn test_home_side_gets_flat_bonus() {
        let cfg = SimulationConfig::deterministic();
        let t = team(TeamRatings::uniform(60));
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let home = effective_strength(&t, true, &cfg, &mut rng);
        let away = effective_strength(&t, false, &cfg, &mut rng);
        assert!((home - away - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_jitter_stays_in_range() {
        let cfg = SimulationConfig::default();
        let t = team(TeamRatings::uniform(60));
        let raw = raw_strength(&t, false, &cfg);
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for _ in 0..1000 {
            let s = effective_strength(&t, false, &cfg, &mut rng);
            assert!((s - raw).abs() <= 1.0);
        }
    }

    #[test]
    fn test_strength_is_clamped() {
        let cfg = SimulationConfig::deterministic();
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let weak = team(TeamRatings::uniform(5));
        let elite = team(TeamRatings::uniform(100));
        assert_eq!(effective_strength(&weak, false, &cfg, &mut rng), 30.0);
        assert_eq!(effective_strength(&elite, true, &cfg, &mut rng), 100.0);
    }

    #[test]
    fn test_curve_anchor_points() {
        let cfg = SimulationConfig::default();
        assert!((expected_goals(60.0, 60, &cfg) - 1.5).abs() < 1e-9);
        assert!((expected_goals(96.0, 60, &cfg) - 3.0).abs() < 1e-9);
        assert!(expected_goals(100.0, 30, &cfg) >= 3.0);
    }

    #[test]
    fn test_curve_is_continuous_and_monotone() {
        let cfg = SimulationConfig::default();
        let mut previous = 0.0;
        for step in 0..=300 {
            let ratio = step as f64 / 100.0;
            let xg = curve(ratio);
            assert!(xg >= previous - 1e-9, "curve dropped at ratio {}", ratio);
            assert!(xg - previous < 0.05 || step == 0, "curve jumped at ratio {}", ratio);
            previous = xg;
        }
        assert!(expected_goals(30.0, 100, &cfg) >= cfg.min_expected_goals);
        assert!(expected_goals(100.0, 1, &cfg) <= cfg.max_expected_goals);
    }

    #[test]
    fn test_defense_floor_prevents_blow_up() {
        let cfg = SimulationConfig::default();
        assert_eq!(expected_goals(60.0, 0, &cfg), expected_goals(60.0, 30, &cfg));
    }

    #[test]
    fn test_scale_raises_expected_goals() {
        let realistic = SimulationConfig::realistic();
        let open = SimulationConfig::high_scoring();
        assert!(expected_goals(60.0, 60, &open) > expected_goals(60.0, 60, &realistic));
    }
}
