//src/external.rs
//! Seams for the platform services the core delegates to: rest notifications,
//! the device calendar, and location. All of them are best-effort; failures
//! are logged by the caller and never roll back local state.

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::models::{Coordinate, Workout};

#[derive(Error, Debug)]
pub enum CalendarError {
    #[error("Calendar access denied")]
    AccessDenied,
    #[error("Failed to save calendar event: {0}")]
    SaveFailed(String),
}

/// Event title under which a workout appears in the calendar. Together with
/// the start time this is the (fragile but accepted) event identity.
pub fn event_title(workout: &Workout) -> String {
    format!("Workout: {}", workout.name)
}

#[derive(Debug, Clone, PartialEq)]
pub struct CalendarEvent {
    pub title: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub location: Option<String>,
    pub notes: Option<String>,
}

impl CalendarEvent {
    /// Builds the event for a workout; requires both timestamps.
    pub fn for_workout(workout: &Workout) -> Option<Self> {
        let start = workout.started_at?;
        let end = workout.ended_at?;
        Some(Self {
            title: event_title(workout),
            start,
            end,
            location: workout.location.as_ref().map(|l| l.name.clone()),
            notes: workout.notes.clone(),
        })
    }

    /// Whether this event corresponds to `workout` under the title + start
    /// time matching scheme.
    pub fn matches(&self, workout: &Workout) -> bool {
        self.title == event_title(workout) && Some(self.start) == workout.started_at
    }
}

/// Schedules the "rest finished" notification. Both calls are
/// fire-and-forget: the session never observes an outcome.
pub trait RestNotificationScheduling: Send + Sync {
    fn request_authorization_if_needed(&self);
    fn schedule_rest_notification(&self, ends_at: DateTime<Utc>, title: &str, body: &str);
}

/// Device calendar integration.
pub trait CalendarSync: Send + Sync {
    /// # Errors
    /// Returns `CalendarError::AccessDenied` when the user declines.
    fn request_access(&self) -> Result<(), CalendarError>;
    fn list_events(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> Vec<CalendarEvent>;
    /// # Errors
    /// Returns `CalendarError` when the underlying save fails.
    fn add_event(&self, workout: &Workout) -> Result<(), CalendarError>;
    fn remove_event(&self, workout: &Workout);
}

/// Device location integration.
pub trait LocationAccess: Send + Sync {
    fn request_access(&self);
    fn current_coordinate(&self) -> Option<Coordinate>;
}

/// Inert scheduler, used when rest notifications are disabled or no platform
/// integration is wired.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopScheduler;

impl RestNotificationScheduling for NoopScheduler {
    fn request_authorization_if_needed(&self) {}
    fn schedule_rest_notification(&self, _ends_at: DateTime<Utc>, _title: &str, _body: &str) {}
}

/// Inert calendar: access always granted, events go nowhere.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopCalendar;

impl CalendarSync for NoopCalendar {
    fn request_access(&self) -> Result<(), CalendarError> {
        Ok(())
    }

    fn list_events(&self, _start: DateTime<Utc>, _end: DateTime<Utc>) -> Vec<CalendarEvent> {
        Vec::new()
    }

    fn add_event(&self, _workout: &Workout) -> Result<(), CalendarError> {
        Ok(())
    }

    fn remove_event(&self, _workout: &Workout) {}
}

/// Inert location provider: never yields a coordinate.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopLocation;

impl LocationAccess for NoopLocation {
    fn request_access(&self) {}

    fn current_coordinate(&self) -> Option<Coordinate> {
        None
    }
}
