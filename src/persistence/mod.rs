//! Mid-game snapshots
//!
//! Features:
//! - Versioned JSON envelope around the full `GameState`
//! - Restoring and resuming reproduces the uninterrupted trajectory exactly

use serde::{Deserialize, Serialize};

use crate::error::{GameError, Result};
use crate::sim::GameState;

/// Current envelope version
pub const SNAPSHOT_VERSION: u32 = 1;

/// A saved game state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub version: u32,
    pub state: GameState,
}

impl Snapshot {
    pub fn capture(state: &GameState) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            state: state.clone(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let snapshot: Snapshot = serde_json::from_str(json)?;
        if snapshot.version != SNAPSHOT_VERSION {
            return Err(GameError::Save(format!(
                "unsupported snapshot version {} (expected {})",
                snapshot.version, SNAPSHOT_VERSION
            )));
        }
        Ok(snapshot)
    }

    /// Hand back the state to resume from
    pub fn restore(self) -> GameState {
        log::info!(
            "Restored {:?} state at tick {}",
            self.state.mode,
            self.state.time_ticks
        );
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{TickInput, tick};

    #[test]
    fn test_resume_is_bit_identical() {
        let inputs = [
            TickInput {
                start_pressed: true,
                ..Default::default()
            },
            TickInput {
                left_held: true,
                ..Default::default()
            },
            TickInput {
                right_held: true,
                ..Default::default()
            },
            TickInput::default(),
        ];
        let mut state = GameState::new();
        for i in 0..500 {
            tick(&mut state, &inputs[i % 4]);
        }

        let json = Snapshot::capture(&state).to_json().unwrap();
        let mut restored = Snapshot::from_json(&json).unwrap().restore();
        assert_eq!(restored, state);

        for i in 500..2000 {
            let input = inputs[i % 4];
            assert_eq!(tick(&mut state, &input), tick(&mut restored, &input));
        }
        assert_eq!(restored, state);
    }

    #[test]
    fn test_rejects_unknown_version() {
        let mut snapshot = Snapshot::capture(&GameState::new());
        snapshot.version = 99;
        let json = snapshot.to_json().unwrap();
        assert!(matches!(
            Snapshot::from_json(&json),
            Err(GameError::Save(_))
        ));
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(matches!(
            Snapshot::from_json(r#"{"version":1}"#),
            Err(GameError::Json(_))
        ));
    }
}
