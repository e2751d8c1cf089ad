//src/models.rs
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::EnumIter;
use uuid::Uuid;

/// Default rest between sets when a planned exercise does not specify one.
pub const DEFAULT_REST_SECS: i64 = 60;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
#[serde(rename_all = "camelCase")]
pub enum MuscleGroup {
    Chest,
    Back,
    Legs,
    Shoulders,
    Arms,
    Core,
    FullBody,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
#[serde(rename_all = "camelCase")]
pub enum Equipment {
    None,
    Dumbbells,
    Barbell,
    Kettlebell,
    ResistanceBands,
    Machine,
    Bodyweight,
    Cable,
    Other,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
#[serde(rename_all = "camelCase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl MuscleGroup {
    /// All muscle groups, in display order. Handy for filter UIs.
    pub fn all() -> Vec<Self> {
        Self::iter().collect()
    }
}

impl Equipment {
    pub fn all() -> Vec<Self> {
        Self::iter().collect()
    }
}

impl Difficulty {
    pub fn all() -> Vec<Self> {
        Self::iter().collect()
    }
}

/// A catalog exercise. Immutable after creation; identity is the id.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    pub id: Uuid,
    pub name: String,
    pub muscle_group: MuscleGroup,
    pub equipment: Equipment,
    pub difficulty: Difficulty,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variations: Option<Vec<String>>,
}

impl Exercise {
    pub fn new(
        name: &str,
        muscle_group: MuscleGroup,
        equipment: Equipment,
        difficulty: Difficulty,
        description: &str,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            muscle_group,
            equipment,
            difficulty,
            description: description.to_string(),
            image_url: None,
            variations: None,
        }
    }

    pub fn with_image(mut self, url: &str) -> Self {
        self.image_url = Some(url.to_string());
        self
    }

    pub fn with_variations(mut self, variations: &[&str]) -> Self {
        self.variations = Some(variations.iter().map(ToString::to_string).collect());
        self
    }
}

/// One logged set inside a `WorkoutExercise`.
///
/// Completion state is held as a single timestamp; the redundant legacy
/// `completed` boolean exists only in the serialized form. A decoded record
/// where flag and timestamp disagree is normalized to not-completed, and the
/// corrected form is what gets written back on the next save.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(from = "SetRecord", into = "SetRecord")]
pub struct ExerciseSet {
    pub id: Uuid,
    pub set_index: Option<usize>,
    pub reps: u32,
    pub weight: Option<f64>,
    pub rpe: Option<f64>,
    completed_at: Option<DateTime<Utc>>,
}

impl ExerciseSet {
    pub fn new(set_index: Option<usize>, reps: u32, weight: Option<f64>, rpe: Option<f64>) -> Self {
        Self {
            id: Uuid::new_v4(),
            set_index,
            reps,
            weight,
            rpe,
            completed_at: None,
        }
    }

    pub const fn is_completed(&self) -> bool {
        self.completed_at.is_some()
    }

    pub const fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    pub fn mark_completed(&mut self, at: DateTime<Utc>) {
        self.completed_at = Some(at);
    }

    pub fn clear_completion(&mut self) {
        self.completed_at = None;
    }
}

/// Wire shape of `ExerciseSet`: carries both the timestamp and the legacy
/// boolean so older readers keep working during the transition period.
#[derive(Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
struct SetRecord {
    id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    set_index: Option<usize>,
    reps: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    rpe: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    completed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    completed: bool,
}

impl From<SetRecord> for ExerciseSet {
    fn from(record: SetRecord) -> Self {
        // Flag and timestamp must agree; any disagreement reads as not completed.
        let completed_at = if record.completed {
            record.completed_at
        } else {
            None
        };
        Self {
            id: record.id,
            set_index: record.set_index,
            reps: record.reps,
            weight: record.weight,
            rpe: record.rpe,
            completed_at,
        }
    }
}

impl From<ExerciseSet> for SetRecord {
    fn from(set: ExerciseSet) -> Self {
        Self {
            id: set.id,
            set_index: set.set_index,
            reps: set.reps,
            weight: set.weight,
            rpe: set.rpe,
            completed: set.completed_at.is_some(),
            completed_at: set.completed_at,
        }
    }
}

/// Template entry inside a `WorkoutPlan`; also used to start workouts.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlannedExercise {
    pub id: Uuid,
    pub exercise: Exercise,
    pub target_sets: u32,
    pub target_reps: u32,
    #[serde(rename = "restDuration")]
    pub rest_secs: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl PlannedExercise {
    pub fn new(exercise: Exercise, target_sets: u32, target_reps: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            exercise,
            target_sets,
            target_reps,
            rest_secs: DEFAULT_REST_SECS,
            notes: None,
        }
    }

    pub fn with_rest(mut self, rest_secs: i64) -> Self {
        self.rest_secs = rest_secs;
        self
    }
}

/// One exercise inside a logged workout, with its ordered sets.
/// Owned exclusively by one `Workout`; `order` is dense and zero-based.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutExercise {
    pub id: Uuid,
    pub workout_id: Uuid,
    pub exercise_id: Uuid,
    pub exercise: Exercise,
    pub order: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_sets: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_reps: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_rest: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub sets: Vec<ExerciseSet>,
}

impl WorkoutExercise {
    /// Builds a log entry from a plan template, with an empty set list.
    pub fn from_planned(workout_id: Uuid, planned: &PlannedExercise, order: usize) -> Self {
        Self {
            id: Uuid::new_v4(),
            workout_id,
            exercise_id: planned.exercise.id,
            exercise: planned.exercise.clone(),
            order,
            target_sets: Some(planned.target_sets),
            target_reps: Some(planned.target_reps),
            target_weight: None,
            target_rest: Some(planned.rest_secs),
            notes: planned.notes.clone(),
            sets: Vec::new(),
        }
    }
}

/// Geographic point; stands in for the platform location type.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

/// A saved gym/training location, persisted independently of workouts.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Location {
    pub id: Uuid,
    pub name: String,
    pub coordinate: Coordinate,
}

impl Location {
    pub fn new(name: &str, coordinate: Coordinate) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            coordinate,
        }
    }
}

/// A workout: either an in-progress session's working copy or immutable
/// history once appended to the catalog.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Workout {
    pub id: Uuid,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub started_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ended_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub exercise_logs: Vec<WorkoutExercise>,
}

impl Workout {
    pub fn new(name: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            started_at: None,
            ended_at: None,
            location: None,
            notes: None,
            exercise_logs: Vec::new(),
        }
    }

    /// Elapsed time, available only once both ends are stamped.
    pub fn duration(&self) -> Option<Duration> {
        match (self.started_at, self.ended_at) {
            (Some(start), Some(end)) => Some(end - start),
            _ => None,
        }
    }
}

/// Catalog workout plan. Identity (and equality) is the id.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutPlan {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub duration: String,
    pub difficulty: Difficulty,
    pub exercises: Vec<PlannedExercise>,
}

impl PartialEq for WorkoutPlan {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for WorkoutPlan {}

impl std::hash::Hash for WorkoutPlan {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl WorkoutPlan {
    pub fn new(
        name: &str,
        description: &str,
        duration: &str,
        difficulty: Difficulty,
        exercises: Vec<PlannedExercise>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            description: description.to_string(),
            duration: duration.to_string(),
            difficulty,
            exercises,
        }
    }
}
