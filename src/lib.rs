// src/lib.rs
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use log::{debug, error, warn};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use uuid::Uuid;

// --- Declare modules ---
mod config;
pub mod external;
pub mod models;
pub mod seed;
pub mod session;
pub mod store;

// --- Expose public types ---
pub use config::{
    get_config_path as get_config_path_util,
    load as load_config_util,
    save as save_config_util,
    Config,
    ConfigError,
    Units,
};
pub use external::{
    event_title, CalendarError, CalendarEvent, CalendarSync, LocationAccess, NoopCalendar,
    NoopLocation, NoopScheduler, RestNotificationScheduling,
};
pub use models::{
    Coordinate, Difficulty, Equipment, Exercise, ExerciseSet, Location, MuscleGroup,
    PlannedExercise, Workout, WorkoutExercise, WorkoutPlan, DEFAULT_REST_SECS,
};
pub use session::{ActiveWorkoutSession, RestTimer};
pub use store::{DecodedWorkouts, StoreError, SCHEMA_VERSION};

/// Duration label applied to plans created through `create_workout_plan`.
const DEFAULT_PLAN_DURATION: &str = "60 minutes";

/// The catalog: single shared source of truth for workouts, plans, the
/// exercise library, and saved locations. Owns the persistence lifecycle and
/// serializes the best-effort calendar/location/notification side effects
/// around session events.
///
/// All mutations are expected to happen on one sequential timeline; the
/// service holds no internal locking because there is no concurrent writer.
pub struct AppService {
    pub config: Config,
    pub config_path: PathBuf,
    pub workouts_path: PathBuf,
    pub locations_path: PathBuf,
    pub workouts: Vec<Workout>,
    pub workout_plans: Vec<WorkoutPlan>,
    pub exercises: Vec<Exercise>,
    pub locations: Vec<Location>,
    pub active_workout: Option<Workout>,
    calendar: Arc<dyn CalendarSync>,
    location_access: Arc<dyn LocationAccess>,
    scheduler: Arc<dyn RestNotificationScheduling>,
}

impl AppService {
    /// Initializes the service with platform paths and inert collaborators,
    /// then loads persisted state.
    /// # Errors
    /// Returns `anyhow::Error` if path determination or config loading fails.
    /// Store read/decode failures are non-fatal: they are logged and the
    /// collections start empty.
    pub fn initialize() -> Result<Self> {
        let config_path =
            config::get_config_path().context("Failed to determine configuration file path")?;
        let config = config::load(&config_path)
            .context(format!("Failed to load config from {config_path:?}"))?;

        let workouts_path =
            store::get_workouts_path().context("Failed to determine workout store path")?;
        let locations_path =
            store::get_locations_path().context("Failed to determine location store path")?;

        let mut service = Self::with_collaborators(
            config,
            config_path,
            workouts_path,
            locations_path,
            Arc::new(NoopCalendar),
            Arc::new(NoopLocation),
            Arc::new(NoopScheduler),
        );
        service.load();
        service.request_initial_access();
        Ok(service)
    }

    /// Builds a service over explicit paths and collaborators without loading
    /// anything. Used by platform wiring and tests.
    #[allow(clippy::too_many_arguments)]
    pub fn with_collaborators(
        config: Config,
        config_path: PathBuf,
        workouts_path: PathBuf,
        locations_path: PathBuf,
        calendar: Arc<dyn CalendarSync>,
        location_access: Arc<dyn LocationAccess>,
        scheduler: Arc<dyn RestNotificationScheduling>,
    ) -> Self {
        Self {
            config,
            config_path,
            workouts_path,
            locations_path,
            workouts: Vec::new(),
            workout_plans: Vec::new(),
            exercises: Vec::new(),
            locations: Vec::new(),
            active_workout: None,
            calendar,
            location_access,
            scheduler,
        }
    }

    pub fn get_config_path(&self) -> &Path {
        &self.config_path
    }

    /// Saves the current configuration state.
    /// # Errors
    /// Returns `ConfigError` if saving fails.
    pub fn save_config(&self) -> Result<(), ConfigError> {
        config::save(&self.config_path, &self.config)
    }

    // --- Load / save lifecycle ---

    /// Loads persisted workouts and locations, seeds built-in content when
    /// the respective collection is empty, and re-persists once if the
    /// workout store reported a migration. Read and decode failures are
    /// logged and leave the collection empty; they never fail the launch.
    pub fn load(&mut self) {
        let mut requires_migration_save = false;

        if self.workouts_path.exists() {
            match store::load_workouts(&self.workouts_path) {
                Ok(decoded) => {
                    self.workouts = decoded.workouts;
                    requires_migration_save = decoded.migrated;
                }
                Err(err) => error!("Error loading workout store: {err}"),
            }
        }

        if self.locations_path.exists() {
            match store::load_locations(&self.locations_path) {
                Ok(locations) => self.locations = locations,
                Err(err) => error!("Error loading location store: {err}"),
            }
        }

        if self.exercises.is_empty() {
            self.exercises = seed::default_exercises();
        }
        if self.workout_plans.is_empty() {
            self.workout_plans = seed::default_plans(&self.exercises);
        }

        if requires_migration_save {
            debug!("Workout store was migrated; persisting upgraded format");
            self.persist_or_log();
        }
    }

    /// Writes both stores.
    /// # Errors
    /// Returns `StoreError` on encode or write failure.
    pub fn save(&self) -> Result<(), StoreError> {
        store::save_workouts(&self.workouts_path, &self.workouts)?;
        store::save_locations(&self.locations_path, &self.locations)?;
        Ok(())
    }

    // Persist failures are logged; in-memory state stays the source of truth
    // until the next successful save.
    fn persist_or_log(&self) {
        if let Err(err) = self.save() {
            error!("Error saving data: {err}");
        }
    }

    fn request_initial_access(&self) {
        if self.config.calendar_sync_enabled {
            if let Err(err) = self.calendar.request_access() {
                warn!("Failed to get calendar access: {err}");
            }
        }
        self.location_access.request_access();
    }

    // --- Workout management ---

    /// Builds a new active workout from a list of planned exercises. Only one
    /// workout may be active at a time; any unfinished prior active workout
    /// is discarded.
    pub fn start_new_workout(&mut self, name: &str, planned: &[PlannedExercise]) {
        let mut workout = Workout::new(name);
        workout.started_at = Some(Utc::now());
        workout.exercise_logs = planned
            .iter()
            .enumerate()
            .map(|(order, entry)| WorkoutExercise::from_planned(workout.id, entry, order))
            .collect();
        self.active_workout = Some(workout);
    }

    /// Starts a new workout from a plan's exercise list, or an empty one when
    /// no plan is given.
    pub fn start_new_workout_from_plan(&mut self, name: &str, plan: Option<&WorkoutPlan>) {
        match plan {
            Some(plan) => self.start_new_workout(name, &plan.exercises),
            None => self.start_new_workout(name, &[]),
        }
    }

    /// Appends one more exercise to the active workout, with order equal to
    /// the current log count. No-op when no workout is active.
    pub fn add_exercise_to_workout(&mut self, planned: &PlannedExercise) {
        let Some(workout) = self.active_workout.as_mut() else {
            return;
        };
        let order = workout.exercise_logs.len();
        let log = WorkoutExercise::from_planned(workout.id, planned, order);
        workout.exercise_logs.push(log);
    }

    /// Constructs a session over a copy of the active workout, wiring the
    /// configured notification scheduler (inert when rest notifications are
    /// disabled). Returns `None` when no workout is active.
    pub fn begin_session(&self) -> Option<ActiveWorkoutSession> {
        let workout = self.active_workout.clone()?;
        let scheduler: Arc<dyn RestNotificationScheduling> =
            if self.config.rest_notifications_enabled {
                Arc::clone(&self.scheduler)
            } else {
                Arc::new(NoopScheduler)
            };
        Some(ActiveWorkoutSession::new(workout, scheduler))
    }

    /// Finishes a workout: overwrites the history entry with the same id in
    /// place, or appends as new, stamping whichever timestamps are missing.
    /// Always clears the active workout, persists, and requests a best-effort
    /// calendar sync that never fails the local save.
    pub fn end_workout(&mut self, workout: Workout) {
        if let Some(index) = self.workouts.iter().position(|w| w.id == workout.id) {
            let mut updated = workout;
            if updated.ended_at.is_none() {
                updated.ended_at = Some(Utc::now());
            }
            if updated.started_at.is_none() {
                updated.started_at = updated.ended_at;
            }
            self.update_workout_in_calendar(&updated);
            self.workouts[index] = updated;
        } else {
            let mut new_workout = workout;
            if new_workout.started_at.is_none() {
                new_workout.started_at = Some(Utc::now());
            }
            if new_workout.ended_at.is_none() {
                new_workout.ended_at = new_workout.started_at;
            }
            self.add_workout_to_calendar(&new_workout);
            self.workouts.push(new_workout);
        }
        self.active_workout = None;
        self.persist_or_log();
    }

    /// Records a fully-formed historical workout directly, bypassing the
    /// active-session flow. Exercise order and set indices are re-normalized
    /// to be dense and zero-based regardless of the input.
    pub fn log_past_workout(
        &mut self,
        name: &str,
        date: DateTime<Utc>,
        location: Option<Location>,
        exercises: Vec<WorkoutExercise>,
        notes: Option<String>,
    ) {
        let workout_id = Uuid::new_v4();
        let exercise_logs = exercises
            .into_iter()
            .enumerate()
            .map(|(order, mut log)| {
                for (set_index, set) in log.sets.iter_mut().enumerate() {
                    set.set_index = Some(set_index);
                }
                log.workout_id = workout_id;
                log.order = order;
                log
            })
            .collect();

        let workout = Workout {
            id: workout_id,
            name: name.to_string(),
            started_at: Some(date),
            ended_at: Some(date),
            location,
            notes,
            exercise_logs,
        };
        self.add_workout_to_calendar(&workout);
        self.workouts.push(workout);
        self.persist_or_log();
    }

    // --- Exercise history ---

    /// "N sets × M reps" summaries of every past log of this exercise, or
    /// `None` when there is no usable history.
    pub fn exercise_history(&self, exercise: &Exercise) -> Option<Vec<String>> {
        let summaries: Vec<String> = self
            .workouts
            .iter()
            .flat_map(|w| w.exercise_logs.iter())
            .filter(|log| log.exercise_id == exercise.id)
            .filter_map(|log| {
                let sets = log.target_sets?;
                let reps = log.target_reps?;
                Some(format!("{sets} sets × {reps} reps"))
            })
            .collect();

        if summaries.is_empty() {
            None
        } else {
            Some(summaries)
        }
    }

    pub fn find_exercise(&self, name: &str) -> Option<&Exercise> {
        self.exercises.iter().find(|e| e.name == name)
    }

    /// Builds a plan entry for an exercise, applying the configured default
    /// rest duration. Callers with an explicit rest use `with_rest` on top.
    pub fn plan_exercise(
        &self,
        exercise: Exercise,
        target_sets: u32,
        target_reps: u32,
    ) -> PlannedExercise {
        PlannedExercise::new(exercise, target_sets, target_reps)
            .with_rest(self.config.default_rest_secs)
    }

    // --- Workout plan management ---

    /// Appends an empty plan with the default duration label and persists.
    pub fn create_workout_plan(&mut self, name: &str, description: &str, difficulty: Difficulty) {
        let plan = WorkoutPlan::new(
            name,
            description,
            DEFAULT_PLAN_DURATION,
            difficulty,
            Vec::new(),
        );
        self.workout_plans.push(plan);
        self.persist_or_log();
    }

    // --- Location management ---

    pub fn add_location(&mut self, location: Location) {
        self.locations.push(location);
        self.persist_or_log();
    }

    pub fn delete_location(&mut self, id: Uuid) {
        self.locations.retain(|l| l.id != id);
        self.persist_or_log();
    }

    pub fn get_locations(&self) -> &[Location] {
        &self.locations
    }

    /// Current device coordinate from the location collaborator, if any.
    pub fn current_coordinate(&self) -> Option<Coordinate> {
        self.location_access.current_coordinate()
    }

    // --- Calendar integration ---

    /// Events in the device calendar over the coming year, for calendar
    /// screens. Empty when sync is disabled.
    pub fn upcoming_calendar_events(&self) -> Vec<CalendarEvent> {
        if !self.config.calendar_sync_enabled {
            return Vec::new();
        }
        let start = Utc::now();
        self.calendar
            .list_events(start - chrono::Duration::days(1), start + chrono::Duration::days(365))
    }

    // Best-effort: failures are logged and never roll back the local
    // mutation that triggered the sync.
    fn add_workout_to_calendar(&self, workout: &Workout) {
        if !self.config.calendar_sync_enabled {
            return;
        }
        if let Err(err) = self.calendar.add_event(workout) {
            error!("Error adding workout to calendar: {err}");
        }
    }

    fn update_workout_in_calendar(&self, workout: &Workout) {
        if !self.config.calendar_sync_enabled {
            return;
        }
        self.calendar.remove_event(workout);
        if let Err(err) = self.calendar.add_event(workout) {
            error!("Error updating workout in calendar: {err}");
        }
    }
}
