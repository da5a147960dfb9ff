use super::IoError;
use super::traits::RecordFile;
use crate::core::models::trajectory::TrajectoryStep;
use serde::{Deserialize, Serialize};
use std::io::{BufRead, Write};

/// Everything needed to replay and inspect a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunLog {
    pub sequence: String,
    pub seed: u64,
    pub run_id: Option<u64>,
    pub trajectory: Vec<TrajectoryStep>,
}

/// Pretty-printed JSON run log.
pub struct RunLogJson;

impl RecordFile for RunLogJson {
    type Record = RunLog;
    type Error = IoError;

    fn read_from(reader: &mut impl BufRead) -> Result<RunLog, IoError> {
        Ok(serde_json::from_reader(reader)?)
    }

    fn write_to(log: &RunLog, writer: &mut impl Write) -> Result<(), IoError> {
        serde_json::to_writer_pretty(&mut *writer, log)?;
        writer.write_all(b"\n")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::trajectory::PositionRecord;
    use crate::core::moves::MoveKind;
    use crate::core::utils::geometry::Site;
    use tempfile::tempdir;

    fn log() -> RunLog {
        RunLog {
            sequence: "HPH".to_string(),
            seed: 42,
            run_id: Some(3),
            trajectory: vec![
                TrajectoryStep {
                    step: 0,
                    temperature: 2.0,
                    delta_e: -0.5,
                    accepted: true,
                    move_type: Some(MoveKind::Corner),
                    total_energy: 1.5,
                    local_energies: vec![0.75, 0.0, 0.75],
                    candidate_moves: 13,
                    positions: vec![
                        PositionRecord::new(0, Site::new(0, 0, 0)),
                        PositionRecord::new(1, Site::new(1, 0, 0)),
                        PositionRecord::new(2, Site::new(1, 1, 0)),
                    ],
                },
                TrajectoryStep {
                    step: 1,
                    temperature: 1.25,
                    delta_e: 0.0,
                    accepted: false,
                    move_type: None,
                    total_energy: 1.5,
                    local_energies: vec![0.75, 0.0, 0.75],
                    candidate_moves: 0,
                    positions: Vec::new(),
                },
            ],
        }
    }

    #[test]
    fn move_less_steps_serialize_move_type_as_null() {
        let mut out = Vec::new();
        RunLogJson::write_to(&log(), &mut out).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["trajectory"][0]["move_type"], "corner");
        assert!(value["trajectory"][1]["move_type"].is_null());
        assert_eq!(value["run_id"], 3);
    }

    #[test]
    fn file_round_trip_preserves_log() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("run.json");
        RunLogJson::write_to_path(&log(), &path).unwrap();
        assert_eq!(RunLogJson::read_from_path(&path).unwrap(), log());
    }
}
