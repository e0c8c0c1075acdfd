//! Portal Data Model
//!
//! Read-only projections of the backend's JSON responses, plus the one
//! record the client builds itself: [`LearningEvent`].
//!
//! Optional fields tolerate both a missing key and an explicit `null`.
//! Unknown fields are ignored so that backend additions don't break the client.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// A student as returned by the identity lookup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// Roll number
    pub id: String,
    pub name: String,
}

impl Student {
    /// First character of the display name, used for the avatar
    pub fn initial(&self) -> Option<char> {
        self.name.chars().next()
    }
}

/// Streak information computed by the backend
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakInfo {
    #[serde(default)]
    pub current_streak: u32,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub last_activity_date: Option<NaiveDate>,
}

/// One day of progress in the dashboard time series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyProgress {
    pub date: NaiveDate,
    pub progress_score: f64,
    #[serde(default)]
    pub total_time: Option<u32>,
    #[serde(default)]
    pub avg_score: Option<f64>,
    #[serde(default)]
    pub is_valid_day: Option<bool>,
}

/// Count of events for one activity type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityCount {
    pub activity_type: String,
    pub count: u32,
}

/// Reward progress
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardInfo {
    #[serde(default)]
    pub puzzle_pieces: u32,
    #[serde(default)]
    pub badges_unlocked: Vec<String>,
}

/// Aggregate dashboard statistics for one student
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    #[serde(default)]
    pub student: Option<Student>,
    #[serde(default)]
    pub streak: Option<StreakInfo>,
    #[serde(default)]
    pub confidence_level: Option<String>,
    #[serde(default)]
    pub confidence_reason: Option<String>,
    #[serde(default)]
    pub daily_progress: Option<Vec<DailyProgress>>,
    #[serde(default)]
    pub activity_distribution: Option<Vec<ActivityCount>>,
    #[serde(default)]
    pub reward: Option<RewardInfo>,
}

/// Strong and weak topics reported by the analysis engine
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Analysis {
    #[serde(default)]
    pub strong_topics: Vec<String>,
    #[serde(default)]
    pub weak_topics: Vec<String>,
}

/// Extra details attached to a course content item
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentDetails {
    #[serde(default)]
    pub due_date: Option<String>,
}

/// A single item of course content (lesson, quiz, assignment...)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseContent {
    pub id: i64,
    pub title: String,
    pub content_type: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub details: ContentDetails,
}

impl CourseContent {
    pub fn is_quiz(&self) -> bool {
        self.content_type.eq_ignore_ascii_case("quiz")
    }

    pub fn due_date(&self) -> Option<&str> {
        self.details.due_date.as_deref().filter(|d| !d.is_empty())
    }
}

/// A course the student is enrolled in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub faculty_name: String,
    /// Day -> time slot
    #[serde(default, deserialize_with = "null_as_default")]
    pub schedule: BTreeMap<String, String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: Vec<CourseContent>,
}

/// The daily quiz question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyQuiz {
    #[serde(default)]
    pub id: Option<i64>,
    pub question: String,
    pub options: Vec<String>,
    pub correct_option: usize,
}

/// Kind of learning activity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityType {
    Quiz,
    Practice,
    Revision,
    Test,
}

impl std::str::FromStr for ActivityType {
    type Err = EventError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "quiz" => Ok(ActivityType::Quiz),
            "practice" => Ok(ActivityType::Practice),
            "revision" => Ok(ActivityType::Revision),
            "test" => Ok(ActivityType::Test),
            other => Err(EventError::UnknownActivity(other.to_string())),
        }
    }
}

impl std::fmt::Display for ActivityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ActivityType::Quiz => "quiz",
            ActivityType::Practice => "practice",
            ActivityType::Revision => "revision",
            ActivityType::Test => "test",
        };
        f.write_str(name)
    }
}

/// Topic recorded for daily quiz submissions
pub const DAILY_QUIZ_TOPIC: &str = "Daily Quiz";

/// Minutes credited for a daily quiz
pub const DAILY_QUIZ_TIME_SPENT: u32 = 5;

/// A learning event posted to the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearningEvent {
    pub student_id: String,
    pub date: NaiveDate,
    pub activity_type: ActivityType,
    pub topic: String,
    /// 0-100
    pub score: u8,
    /// Minutes
    pub time_spent: u32,
    pub attempt_number: u32,
}

impl LearningEvent {
    /// Result record for a graded daily quiz
    pub fn daily_quiz(student_id: &str, date: NaiveDate, correct: bool) -> Self {
        Self {
            student_id: student_id.to_string(),
            date,
            activity_type: ActivityType::Test,
            topic: DAILY_QUIZ_TOPIC.to_string(),
            score: if correct { 100 } else { 0 },
            time_spent: DAILY_QUIZ_TIME_SPENT,
            attempt_number: 1,
        }
    }

    /// Check the constraints the backend enforces on ingest
    pub fn validate(&self) -> Result<(), EventError> {
        if self.student_id.trim().is_empty() {
            return Err(EventError::MissingStudent);
        }
        if self.topic.trim().is_empty() {
            return Err(EventError::MissingTopic);
        }
        if self.score > 100 {
            return Err(EventError::ScoreOutOfRange(self.score));
        }
        if self.time_spent < 1 {
            return Err(EventError::NoTimeSpent);
        }
        if self.attempt_number < 1 {
            return Err(EventError::InvalidAttempt);
        }
        Ok(())
    }
}

/// Learning event validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EventError {
    #[error("Student id is required")]
    MissingStudent,

    #[error("Topic must not be empty")]
    MissingTopic,

    #[error("Score {0} is outside 0-100")]
    ScoreOutOfRange(u8),

    #[error("Time spent must be at least 1 minute")]
    NoTimeSpent,

    #[error("Attempt number must be at least 1")]
    InvalidAttempt,

    #[error("Unknown activity type: {0}")]
    UnknownActivity(String),
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
