use serde::{Deserialize, Serialize};

/// The record shape shared with whatever supplies the data. Field names are
/// camelCase on the wire so a JS host object round-trips untouched.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseRecord {
    pub name: String,
    pub category: String,
    pub gif_url: String,
    pub params: ExerciseParams,
    pub sets: Vec<SetEntry>,
    pub stats: StatsSummary,
}

/// Static targets for the exercise, read-only during rendering.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseParams {
    pub weight_default: f64,
    pub sets_total: u32,
    pub reps_per_set: u32,
    pub tempo: String,
    pub rest_seconds: u32,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SetEntry {
    pub id: u32,
    pub weight: f64,
    pub reps: u32,
    pub state: SetState,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub techniques: Option<SetTechniques>,
}

impl SetEntry {
    pub fn standard(id: u32, weight: f64, reps: u32) -> Self {
        Self {
            id,
            weight,
            reps,
            state: SetState::Pending,
            techniques: None,
        }
    }

    /// What the middle of the row shows. Drop set wins over rest-pause,
    /// which wins over the plain weight value.
    pub fn center_label(&self) -> SetLabel {
        match &self.techniques {
            Some(t) if t.drop_set => SetLabel::DropSet,
            Some(t) if t.rest_pause => SetLabel::RestPause,
            _ => SetLabel::Weight(self.weight),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SetTechniques {
    #[serde(default)]
    pub drop_set: bool,
    #[serde(default)]
    pub rest_pause: bool,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SetState {
    Pending,
    Active,
    Complete,
}

impl SetState {
    /// One tap forward in the cycle. Total over the three states, so a set
    /// can always be tapped back around to pending.
    pub fn advanced(self) -> Self {
        match self {
            SetState::Pending => SetState::Active,
            SetState::Active => SetState::Complete,
            SetState::Complete => SetState::Pending,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SetState::Pending => "pending",
            SetState::Active => "active",
            SetState::Complete => "complete",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SetLabel {
    DropSet,
    RestPause,
    Weight(f64),
}

/// Derived counters plus the externally supplied volume target. The derived
/// fields are overwritten wholesale by `stats::refresh_summary`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StatsSummary {
    pub completed_sets: usize,
    pub current_volume: f64,
    pub volume_target: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_cycle_is_total_and_periodic() {
        assert_eq!(SetState::Pending.advanced(), SetState::Active);
        assert_eq!(SetState::Active.advanced(), SetState::Complete);
        assert_eq!(SetState::Complete.advanced(), SetState::Pending);

        // 3n taps land back on the starting state, for any start
        for start in [SetState::Pending, SetState::Active, SetState::Complete] {
            let mut state = start;
            for n in 1..=4 {
                for _ in 0..3 {
                    state = state.advanced();
                }
                assert_eq!(state, start, "after {} full cycles", n);
            }
        }
    }

    #[test]
    fn drop_set_badge_wins_over_rest_pause() {
        let mut set = SetEntry::standard(1, 60.0, 8);
        assert_eq!(set.center_label(), SetLabel::Weight(60.0));

        set.techniques = Some(SetTechniques {
            drop_set: false,
            rest_pause: true,
        });
        assert_eq!(set.center_label(), SetLabel::RestPause);

        set.techniques = Some(SetTechniques {
            drop_set: true,
            rest_pause: true,
        });
        assert_eq!(set.center_label(), SetLabel::DropSet);

        set.techniques = Some(SetTechniques::default());
        assert_eq!(set.center_label(), SetLabel::Weight(60.0));
    }

    #[test]
    fn record_parses_host_shape() {
        let json = r#"{
            "name": "Développé couché",
            "category": "Pectoraux",
            "gifUrl": "assets/bench.gif",
            "params": {
                "weightDefault": 80.0,
                "setsTotal": 4,
                "repsPerSet": 10,
                "tempo": "2-0-2",
                "restSeconds": 90
            },
            "sets": [
                { "id": 1, "weight": 80.0, "reps": 10, "state": "pending" },
                { "id": 2, "weight": 75.0, "reps": 10, "state": "active",
                  "techniques": { "dropSet": true } }
            ],
            "stats": { "completedSets": 0, "currentVolume": 0.0, "volumeTarget": 3100.0 }
        }"#;

        let record: ExerciseRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.params.weight_default, 80.0);
        assert_eq!(record.sets.len(), 2);
        assert_eq!(record.sets[0].state, SetState::Pending);
        assert_eq!(record.sets[0].techniques, None);
        let t = record.sets[1].techniques.unwrap();
        assert!(t.drop_set);
        assert!(!t.rest_pause);
        assert_eq!(record.stats.volume_target, 3100.0);
    }

    #[test]
    fn states_serialize_lowercase() {
        assert_eq!(
            serde_json::to_string(&SetState::Complete).unwrap(),
            r#""complete""#
        );
        let state: SetState = serde_json::from_str(r#""active""#).unwrap();
        assert_eq!(state, SetState::Active);
    }
}
