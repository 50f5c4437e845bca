//! Sort-order metrics.
//!
//! Both functions are pure and only read the vote counts and timestamp of
//! a candidate.

use listing::Candidate;

/// Reference moment (seconds since the Unix epoch) where heat's time term is zero.
pub const HEAT_EPOCH: i64 = 1_134_028_003;

/// Seconds of age worth one order of magnitude of score.
pub const HEAT_DECAY_SECONDS: f64 = 45_000.0;

/// Time-weighted popularity.
///
/// ## Algorithm
/// `round(sign(score) * log10(max(score, 1)) + (created_at - HEAT_EPOCH) / 45000)`
///
/// Every 12.5 hours of recency is worth a tenfold score, so fresh posts with
/// modest scores overtake old ones with large scores.
pub fn heat(candidate: &Candidate) -> f64 {
    let score = candidate.score;
    let sign = score.signum() as f64;
    let order = (score.max(1) as f64).log10();
    let seconds = (candidate.created_at - HEAT_EPOCH) as f64;

    // Halves round up, also for posts older than the epoch.
    (sign * order + seconds / HEAT_DECAY_SECONDS + 0.5).floor()
}

/// Reward for large, evenly split vote counts.
///
/// ## Algorithm
/// - Unknown counts (negative) or no votes at all: 0
/// - `balance` is the smaller count over the larger, in `[0, 1]`
/// - Result is `(ups + downs) ^ balance`
pub fn controversy(candidate: &Candidate) -> f64 {
    let (ups, downs) = (candidate.upvotes, candidate.downvotes);
    if ups < 0 || downs < 0 || (ups == 0 && downs == 0) {
        return 0.0;
    }

    let magnitude = (ups + downs) as f64;
    let balance = if ups > downs {
        downs as f64 / ups as f64
    } else {
        ups as f64 / downs as f64
    };

    magnitude.powf(balance)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn posted(score: i64, created_at: i64) -> Candidate {
        Candidate::new("https://i.redd.it/a.jpg", "w")
            .with_score(score)
            .with_created_at(created_at)
    }

    fn voted(ups: i64, downs: i64) -> Candidate {
        Candidate::new("https://i.redd.it/a.jpg", "w").with_votes(ups, downs)
    }

    #[test]
    fn test_heat_at_epoch() {
        assert_eq!(heat(&posted(1, HEAT_EPOCH)), 0.0);
        assert_eq!(heat(&posted(1000, HEAT_EPOCH)), 3.0);
        assert_eq!(heat(&posted(-1000, HEAT_EPOCH)), 0.0);
    }

    #[test]
    fn test_heat_rounds_halves_up_before_epoch() {
        // -0.5 rounds to 0, not -1
        assert_eq!(heat(&posted(0, HEAT_EPOCH - 22_500)), 0.0);
        assert_eq!(heat(&posted(0, HEAT_EPOCH - 67_500)), -1.0);
    }

    #[test]
    fn test_heat_is_monotonic_in_time() {
        let day = 86_400;
        for score in [-50, 0, 1, 120, 90_000] {
            let mut previous = heat(&posted(score, 1_600_000_000));
            for step in 1..10 {
                let current = heat(&posted(score, 1_600_000_000 + step * day));
                assert!(current > previous, "score {score}, step {step}");
                previous = current;
            }
        }
    }

    #[test]
    fn test_recent_beats_old_and_popular() {
        let old = posted(50_000, 1_700_000_000);
        let recent = posted(10, 1_700_000_000 + 3 * 86_400);
        assert!(heat(&recent) > heat(&old));
    }

    #[test]
    fn test_controversy_edge_cases() {
        assert_eq!(controversy(&voted(0, 0)), 0.0);
        assert_eq!(controversy(&voted(-1, 5)), 0.0);
        assert_eq!(controversy(&voted(5, -1)), 0.0);
    }

    #[test]
    fn test_controversy_even_split() {
        assert_eq!(controversy(&voted(10, 10)), 20.0);
    }

    #[test]
    fn test_controversy_prefers_balanced_votes() {
        let lopsided = controversy(&voted(1000, 10));
        let balanced = controversy(&voted(500, 450));
        assert!(balanced > lopsided);

        // One-sided: balance is zero, so the result is magnitude^0
        assert_eq!(controversy(&voted(0, 7)), 1.0);
        assert_eq!(controversy(&voted(7, 0)), 1.0);
    }
}
