//src/session.rs
//! The active workout session: a cursor over one in-progress workout, set
//! mutation commands, and the rest-timer lifecycle.
//!
//! Every mutation on an invalid cursor or index is a deliberate silent no-op
//! rather than an error: the UI layer only issues valid commands, and the
//! session does not defend against programmer error with failures.

use chrono::{DateTime, Duration, Utc};
use std::sync::Arc;

use crate::external::RestNotificationScheduling;
use crate::models::{ExerciseSet, Workout, WorkoutExercise};

pub const REST_NOTIFICATION_TITLE: &str = "Rest finished";
pub const REST_NOTIFICATION_BODY: &str = "Time to start your next set";

/// A running rest countdown. Holds only the two timestamps; remaining time
/// is computed lazily, so "ticking" is just re-reading `remaining`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RestTimer {
    pub duration_secs: i64,
    pub started_at: DateTime<Utc>,
}

impl RestTimer {
    pub fn new(duration_secs: i64, started_at: DateTime<Utc>) -> Self {
        Self {
            duration_secs,
            started_at,
        }
    }

    pub fn ends_at(&self) -> DateTime<Utc> {
        self.started_at + Duration::seconds(self.duration_secs)
    }

    /// Seconds left at `now`, clamped to zero.
    pub fn remaining(&self, now: DateTime<Utc>) -> i64 {
        (self.ends_at() - now).num_seconds().max(0)
    }

    pub fn is_finished(&self, now: DateTime<Utc>) -> bool {
        self.remaining(now) == 0
    }
}

/// Wraps exactly one in-progress workout. Constructed over a working copy;
/// `finalize` produces the completed `Workout` for the catalog to append.
pub struct ActiveWorkoutSession {
    workout: Workout,
    current_exercise_index: usize,
    rest_timer: Option<RestTimer>,
    scheduler: Arc<dyn RestNotificationScheduling>,
}

impl ActiveWorkoutSession {
    pub fn new(workout: Workout, scheduler: Arc<dyn RestNotificationScheduling>) -> Self {
        Self {
            workout,
            current_exercise_index: 0,
            rest_timer: None,
            scheduler,
        }
    }

    pub fn workout(&self) -> &Workout {
        &self.workout
    }

    pub const fn current_exercise_index(&self) -> usize {
        self.current_exercise_index
    }

    pub const fn rest_timer(&self) -> Option<RestTimer> {
        self.rest_timer
    }

    /// The exercise under the cursor, or `None` for an empty workout.
    pub fn current_exercise(&self) -> Option<&WorkoutExercise> {
        self.workout.exercise_logs.get(self.current_exercise_index)
    }

    /// Moves the cursor forward; no-op at the last exercise.
    pub fn next_exercise(&mut self) {
        if self.current_exercise_index + 1 < self.workout.exercise_logs.len() {
            self.current_exercise_index += 1;
        }
    }

    /// Moves the cursor back; no-op at the first exercise.
    pub fn previous_exercise(&mut self) {
        if self.current_exercise_index > 0 {
            self.current_exercise_index -= 1;
        }
    }

    /// Appends a new, not-yet-completed set to the current exercise, with
    /// `set_index` equal to the current set count. No-op without a current
    /// exercise.
    pub fn add_set(&mut self, reps: u32, weight: Option<f64>, rpe: Option<f64>) {
        let index = self.current_exercise_index;
        if let Some(exercise) = self.workout.exercise_logs.get_mut(index) {
            let set_index = exercise.sets.len();
            exercise
                .sets
                .push(ExerciseSet::new(Some(set_index), reps, weight, rpe));
        }
    }

    /// Overwrites reps/weight/rpe of the set at `index`; out-of-range is a
    /// no-op.
    pub fn update_set(&mut self, index: usize, reps: u32, weight: Option<f64>, rpe: Option<f64>) {
        let exercise_index = self.current_exercise_index;
        if let Some(set) = self
            .workout
            .exercise_logs
            .get_mut(exercise_index)
            .and_then(|ex| ex.sets.get_mut(index))
        {
            set.reps = reps;
            set.weight = weight;
            set.rpe = rpe;
        }
    }

    /// Marks the set at `index` completed, stamping the completion time.
    /// When the current exercise declares a positive target rest, the rest
    /// timer starts immediately: completion implies rest by design, mirroring
    /// gym usage. Out-of-range is a no-op.
    pub fn complete_set(&mut self, index: usize) {
        let exercise_index = self.current_exercise_index;
        let Some(exercise) = self.workout.exercise_logs.get_mut(exercise_index) else {
            return;
        };
        let Some(set) = exercise.sets.get_mut(index) else {
            return;
        };
        set.mark_completed(Utc::now());

        if let Some(rest) = exercise.target_rest {
            if rest > 0 {
                self.start_rest_timer(rest);
            }
        }
    }

    /// Starts (or replaces) the rest timer and fires the notification
    /// requests. Only one timer runs at a time; there is no queuing.
    pub fn start_rest_timer(&mut self, duration_secs: i64) {
        let timer = RestTimer::new(duration_secs, Utc::now());
        self.rest_timer = Some(timer);
        self.scheduler.request_authorization_if_needed();
        self.scheduler.schedule_rest_notification(
            timer.ends_at(),
            REST_NOTIFICATION_TITLE,
            REST_NOTIFICATION_BODY,
        );
    }

    /// Clears the timer state immediately. An already-scheduled notification
    /// is not retracted and may still fire.
    pub fn cancel_rest_timer(&mut self) {
        self.rest_timer = None;
    }

    /// Returns the completed workout: `started_at` defaulted to now if
    /// unset, `ended_at` stamped to now unconditionally. Calling again
    /// simply re-stamps `ended_at`.
    pub fn finalize(&self) -> Workout {
        let now = Utc::now();
        let mut workout = self.workout.clone();
        if workout.started_at.is_none() {
            workout.started_at = Some(now);
        }
        workout.ended_at = Some(now);
        workout
    }
}
