//src/store.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use uuid::Uuid;

use crate::models::{Location, PlannedExercise, Workout, WorkoutExercise};

/// Version written into every workout store envelope. Bump together with a
/// new entry in `UPGRADES`.
pub const SCHEMA_VERSION: u32 = 2;

const WORKOUTS_FILE_NAME: &str = "workouts.json";
const LOCATIONS_FILE_NAME: &str = "locations.json";
const APP_DATA_DIR: &str = "gymlog";
const DATA_ENV_VAR: &str = "GYMLOG_DATA_DIR"; // Environment variable name

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Could not determine application data directory.")]
    CannotDetermineDataDir,
    #[error("I/O error accessing store file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Stored data is neither a current envelope nor a legacy workout list: {0}")]
    Decode(serde_json::Error),
    #[error("Failed to serialize store contents: {0}")]
    Encode(serde_json::Error),
}

/// Envelope shape of the workout store on disk.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredWorkouts {
    schema_version: u32,
    workouts: Vec<Workout>,
}

/// Result of decoding a workout store. When `migrated` is true the caller
/// must re-encode and persist immediately so the on-disk format is upgraded
/// exactly once per legacy file.
#[derive(Debug)]
pub struct DecodedWorkouts {
    pub workouts: Vec<Workout>,
    pub migrated: bool,
}

/// Serializes the workout collection under the current schema version.
/// # Errors
/// Returns `StoreError::Encode` if serialization fails.
pub fn encode_workouts(workouts: &[Workout]) -> Result<Vec<u8>, StoreError> {
    let store = StoredWorkouts {
        schema_version: SCHEMA_VERSION,
        workouts: workouts.to_vec(),
    };
    serde_json::to_vec(&store).map_err(StoreError::Encode)
}

/// Decodes a workout store, accepting either the current envelope shape or
/// the legacy flat list (pre-envelope, plan-shaped exercises, no set data).
/// # Errors
/// Returns `StoreError::Decode` if the bytes match neither shape.
pub fn decode_workouts(bytes: &[u8]) -> Result<DecodedWorkouts, StoreError> {
    if let Ok(store) = serde_json::from_slice::<StoredWorkouts>(bytes) {
        let migrated = store.schema_version < SCHEMA_VERSION;
        let workouts = run_upgrades(store.schema_version, store.workouts);
        return Ok(DecodedWorkouts { workouts, migrated });
    }

    let legacy: Vec<LegacyWorkout> = serde_json::from_slice(bytes).map_err(StoreError::Decode)?;
    let workouts = legacy.into_iter().map(LegacyWorkout::into_workout).collect();
    Ok(DecodedWorkouts {
        workouts,
        migrated: true,
    })
}

type UpgradeFn = fn(Vec<Workout>) -> Vec<Workout>;

/// Per-version upgrade steps: `UPGRADES[n]` migrates version `n + 1` to
/// `n + 2`. Every schema bump must add its step here, even an identity one,
/// so an old envelope can never be silently under-migrated.
const UPGRADES: &[UpgradeFn] = &[upgrade_v1_to_v2];

// v1 and v2 are structurally compatible; the bump only changed the set
// completion representation, which the field-level decoder already handles.
fn upgrade_v1_to_v2(workouts: Vec<Workout>) -> Vec<Workout> {
    workouts
}

fn run_upgrades(from_version: u32, mut workouts: Vec<Workout>) -> Vec<Workout> {
    let first_step = (from_version as usize).saturating_sub(1);
    for upgrade in UPGRADES.iter().skip(first_step) {
        workouts = upgrade(workouts);
    }
    workouts
}

// --- Legacy schema ---

/// Pre-envelope workout record: a plan-shaped exercise list instead of
/// per-set logs, and differently named timestamps.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct LegacyWorkout {
    id: Uuid,
    name: String,
    exercises: Vec<PlannedExercise>,
    #[serde(default)]
    start_time: Option<DateTime<Utc>>,
    #[serde(default)]
    end_time: Option<DateTime<Utc>>,
    #[serde(default)]
    location: Option<Location>,
    #[serde(default)]
    notes: Option<String>,
}

impl LegacyWorkout {
    /// One log entry per planned exercise, in original order, targets copied,
    /// empty set list (the legacy format carried no set-level data).
    fn into_workout(self) -> Workout {
        let exercise_logs = self
            .exercises
            .iter()
            .enumerate()
            .map(|(index, planned)| WorkoutExercise::from_planned(self.id, planned, index))
            .collect();

        Workout {
            id: self.id,
            name: self.name,
            started_at: self.start_time,
            ended_at: self.end_time,
            location: self.location,
            notes: self.notes,
            exercise_logs,
        }
    }
}

// --- File helpers ---

/// Resolves the application data directory, creating it if needed.
/// Honors the `GYMLOG_DATA_DIR` environment variable override.
/// # Errors
/// Returns `StoreError` if the directory cannot be determined or created.
pub fn get_data_dir() -> Result<PathBuf, StoreError> {
    let dir = match std::env::var(DATA_ENV_VAR).ok() {
        Some(path_str) => PathBuf::from(path_str),
        None => dirs::data_dir()
            .ok_or(StoreError::CannotDetermineDataDir)?
            .join(APP_DATA_DIR),
    };
    if !dir.exists() {
        fs::create_dir_all(&dir)?;
    }
    Ok(dir)
}

/// Path of the workout store inside the data directory.
pub fn get_workouts_path() -> Result<PathBuf, StoreError> {
    Ok(get_data_dir()?.join(WORKOUTS_FILE_NAME))
}

/// Path of the location store inside the data directory.
pub fn get_locations_path() -> Result<PathBuf, StoreError> {
    Ok(get_data_dir()?.join(LOCATIONS_FILE_NAME))
}

/// Reads and decodes the workout store at `path`.
/// # Errors
/// Returns `StoreError` on read or decode failure.
pub fn load_workouts(path: &Path) -> Result<DecodedWorkouts, StoreError> {
    let bytes = fs::read(path)?;
    decode_workouts(&bytes)
}

/// Encodes and writes the workout store to `path`.
/// # Errors
/// Returns `StoreError` on encode or write failure.
pub fn save_workouts(path: &Path, workouts: &[Workout]) -> Result<(), StoreError> {
    let bytes = encode_workouts(workouts)?;
    fs::write(path, bytes)?;
    Ok(())
}

/// Reads the location store at `path`. The location store is a bare JSON
/// array, unversioned.
/// # Errors
/// Returns `StoreError` on read or decode failure.
pub fn load_locations(path: &Path) -> Result<Vec<Location>, StoreError> {
    let bytes = fs::read(path)?;
    serde_json::from_slice(&bytes).map_err(StoreError::Decode)
}

/// Writes the location store to `path`.
/// # Errors
/// Returns `StoreError` on encode or write failure.
pub fn save_locations(path: &Path, locations: &[Location]) -> Result<(), StoreError> {
    let bytes = serde_json::to_vec(locations).map_err(StoreError::Encode)?;
    fs::write(path, bytes)?;
    Ok(())
}
