use crate::types::{ExerciseRecord, SetEntry, SetState};

pub fn completed_sets(sets: &[SetEntry]) -> usize {
    sets.iter()
        .filter(|s| s.state == SetState::Complete)
        .count()
}

/// Volume is work performed: weight × reps summed over completed sets.
pub fn completed_volume(sets: &[SetEntry]) -> f64 {
    sets.iter()
        .filter(|s| s.state == SetState::Complete)
        .map(|s| s.weight * s.reps as f64)
        .sum()
}

pub fn all_sets_complete(sets: &[SetEntry]) -> bool {
    sets.iter().all(|s| s.state == SetState::Complete)
}

/// Recomputes both derived fields from scratch. Never patched
/// incrementally, so the summary cannot drift from the set list.
pub fn refresh_summary(record: &mut ExerciseRecord) {
    record.stats.completed_sets = completed_sets(&record.sets);
    record.stats.current_volume = completed_volume(&record.sets);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ExerciseParams, StatsSummary};

    fn record_with_sets(sets: Vec<SetEntry>) -> ExerciseRecord {
        ExerciseRecord {
            name: "Squat".into(),
            category: "Jambes".into(),
            gif_url: "assets/squat.gif".into(),
            params: ExerciseParams {
                weight_default: 100.0,
                sets_total: sets.len() as u32,
                reps_per_set: 10,
                tempo: "3-1-1".into(),
                rest_seconds: 120,
            },
            sets,
            stats: StatsSummary {
                completed_sets: 0,
                current_volume: 0.0,
                volume_target: 3000.0,
            },
        }
    }

    #[test]
    fn summary_matches_set_states_after_every_transition() {
        let mut record = record_with_sets(vec![
            SetEntry::standard(1, 100.0, 10),
            SetEntry::standard(2, 90.0, 8),
        ]);

        // walk set 1 through a full cycle and check the invariant each step
        for (expected_count, expected_volume) in [(0, 0.0), (1, 1000.0), (0, 0.0)] {
            record.sets[0].state = record.sets[0].state.advanced();
            refresh_summary(&mut record);
            assert_eq!(record.stats.completed_sets, expected_count);
            assert_eq!(record.stats.current_volume, expected_volume);
        }

        record.sets[0].state = SetState::Complete;
        record.sets[1].state = SetState::Complete;
        refresh_summary(&mut record);
        assert_eq!(record.stats.completed_sets, 2);
        assert_eq!(record.stats.current_volume, 1000.0 + 720.0);
        // target is never touched by the recomputation
        assert_eq!(record.stats.volume_target, 3000.0);
    }

    #[test]
    fn three_clicks_complete_one_set() {
        let mut record = record_with_sets(vec![SetEntry::standard(1, 50.0, 10)]);

        for _ in 0..3 {
            record.sets[0].state = record.sets[0].state.advanced();
            refresh_summary(&mut record);
        }

        assert_eq!(record.sets[0].state, SetState::Complete);
        assert_eq!(record.stats.completed_sets, 1);
        assert_eq!(record.stats.current_volume, 500.0);
    }

    #[test]
    fn completion_check_requires_every_set() {
        let mut sets = vec![
            SetEntry::standard(1, 60.0, 10),
            SetEntry::standard(2, 60.0, 10),
            SetEntry::standard(3, 60.0, 10),
        ];
        assert!(!all_sets_complete(&sets));

        sets[0].state = SetState::Complete;
        sets[1].state = SetState::Complete;
        assert!(!all_sets_complete(&sets));

        sets[2].state = SetState::Active;
        assert!(!all_sets_complete(&sets));

        sets[2].state = SetState::Complete;
        assert!(all_sets_complete(&sets));
    }

    #[test]
    fn empty_set_list_counts_as_complete() {
        // vacuous truth, same as the host-side `every`; unreachable from the
        // UI since the completion check only runs on a row click
        assert!(all_sets_complete(&[]));
    }
}
