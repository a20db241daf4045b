use crate::result::EngineResult;

/// The number of rank slots handed out per pattern. The fastest engine gets
/// this many points, the next fastest one point less, and so on.
pub const RANKS: u32 = 5;

/// Award rank points to the results for a single pattern.
///
/// In each round, starting at [`RANKS`] points and counting down to `1`, the
/// smallest mean time among the results that have a positive time and no
/// score yet is found. Every such result with exactly that time gets the
/// round's points, so ties share a rank. Results with a time of zero (i.e.,
/// failed engines) are never scored, and anything not ranked in the first
/// `RANKS` rounds keeps a score of zero.
///
/// Ties are decided by exact floating point equality.
pub fn score(results: &mut [EngineResult]) {
    for points in (1..=RANKS).rev() {
        let mut best: Option<f64> = None;
        for res in results.iter() {
            if res.time > 0.0
                && res.score == 0
                && best.map_or(true, |best| res.time < best)
            {
                best = Some(res.time);
            }
        }
        let Some(best) = best else { break };
        for res in results.iter_mut() {
            if res.time > 0.0 && res.time == best {
                res.score = points;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timed(times: &[f64]) -> Vec<EngineResult> {
        times
            .iter()
            .map(|&time| EngineResult { time, ..EngineResult::default() })
            .collect()
    }

    fn scores(results: &[EngineResult]) -> Vec<u32> {
        results.iter().map(|r| r.score).collect()
    }

    #[test]
    fn ties_share_a_rank() {
        let mut results = timed(&[10.0, 10.0, 20.0, 30.0, 40.0, 50.0]);
        score(&mut results);
        assert_eq!(vec![5, 5, 4, 3, 2, 1], scores(&results));
    }

    #[test]
    fn order_does_not_matter() {
        let mut results = timed(&[50.0, 20.0, 10.0, 40.0, 30.0, 10.0]);
        score(&mut results);
        assert_eq!(vec![1, 4, 5, 2, 3, 5], scores(&results));
    }

    #[test]
    fn failed_engines_are_never_scored() {
        let mut results = timed(&[0.0, 3.0, 0.0, 1.0]);
        score(&mut results);
        assert_eq!(vec![0, 4, 0, 5], scores(&results));
    }

    #[test]
    fn more_slots_than_engines() {
        let mut results = timed(&[2.0, 1.0]);
        score(&mut results);
        assert_eq!(vec![4, 5], scores(&results));
    }

    #[test]
    fn near_ties_are_not_ties() {
        let mut results = timed(&[1.0, 1.0 + f64::EPSILON]);
        score(&mut results);
        assert_eq!(vec![5, 4], scores(&results));
    }

    #[test]
    fn ranks_count_distinct_times() {
        // Ties use up one round, not one round per engine.
        let mut results = timed(&[10.0, 10.0, 10.0, 20.0, 30.0, 40.0, 50.0]);
        score(&mut results);
        assert_eq!(vec![5, 5, 5, 4, 3, 2, 1], scores(&results));
    }

    #[test]
    fn seven_engines() {
        let mut results = timed(&[7.0, 6.0, 5.0, 4.0, 3.0, 2.0, 1.0]);
        score(&mut results);
        assert_eq!(vec![0, 0, 1, 2, 3, 4, 5], scores(&results));
    }

    #[test]
    fn nothing_to_score() {
        let mut results = timed(&[0.0, 0.0]);
        score(&mut results);
        assert_eq!(vec![0, 0], scores(&results));
        score(&mut []);
    }
}
