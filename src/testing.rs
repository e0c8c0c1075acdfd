//! Scripted gateway for view tests

use async_trait::async_trait;
use chrono::NaiveDate;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::Notify;

use crate::api::{ApiError, ApiResult, PortalApi};
use crate::models::*;

/// In-memory [`PortalApi`] returning canned results and recording posts
pub struct ScriptedApi {
    pub student: ApiResult<Student>,
    pub stats: ApiResult<DashboardStats>,
    pub analysis: ApiResult<Analysis>,
    pub courses: ApiResult<Vec<Course>>,
    pub quiz: ApiResult<DailyQuiz>,
    pub submit: ApiResult<()>,
    /// When set, `analysis` waits for a notification before answering
    pub analysis_gate: Option<Arc<Notify>>,
    pub calls: RefCell<Vec<String>>,
    pub submitted: RefCell<Vec<LearningEvent>>,
    pub ingested: RefCell<Vec<serde_json::Value>>,
}

impl Default for ScriptedApi {
    fn default() -> Self {
        Self {
            student: Ok(student()),
            stats: Ok(stats()),
            analysis: Ok(analysis()),
            courses: Ok(courses()),
            quiz: Ok(quiz()),
            submit: Ok(()),
            analysis_gate: None,
            calls: RefCell::new(Vec::new()),
            submitted: RefCell::new(Vec::new()),
            ingested: RefCell::new(Vec::new()),
        }
    }
}

impl ScriptedApi {
    pub fn call_count(&self, name: &str) -> usize {
        self.calls.borrow().iter().filter(|c| *c == name).count()
    }

    fn record(&self, name: &str) {
        self.calls.borrow_mut().push(name.to_string());
    }
}

pub fn offline() -> ApiError {
    ApiError::Network("connection refused".to_string())
}

pub fn student() -> Student {
    Student {
        id: "123".to_string(),
        name: "Asha Verma".to_string(),
    }
}

pub fn stats() -> DashboardStats {
    DashboardStats {
        student: Some(student()),
        streak: Some(StreakInfo {
            current_streak: 6,
            is_active: true,
            last_activity_date: NaiveDate::from_ymd_opt(2026, 10, 18),
        }),
        confidence_level: Some("High".to_string()),
        confidence_reason: Some("Scores stable over the last week".to_string()),
        daily_progress: Some(vec![
            DailyProgress {
                date: NaiveDate::from_ymd_opt(2026, 10, 17).unwrap(),
                progress_score: 55.0,
                total_time: Some(20),
                avg_score: Some(70.0),
                is_valid_day: Some(true),
            },
            DailyProgress {
                date: NaiveDate::from_ymd_opt(2026, 10, 18).unwrap(),
                progress_score: 80.0,
                total_time: Some(35),
                avg_score: Some(85.0),
                is_valid_day: Some(true),
            },
        ]),
        activity_distribution: Some(vec![
            ActivityCount {
                activity_type: "quiz".to_string(),
                count: 3,
            },
            ActivityCount {
                activity_type: "practice".to_string(),
                count: 1,
            },
        ]),
        reward: Some(RewardInfo {
            puzzle_pieces: 12,
            badges_unlocked: vec!["Week Warrior".to_string()],
        }),
    }
}

pub fn analysis() -> Analysis {
    Analysis {
        strong_topics: vec!["Geometry".to_string()],
        weak_topics: vec!["Algebra".to_string(), "Probability".to_string()],
    }
}

pub fn course(id: i64, title: &str) -> Course {
    let mut schedule = BTreeMap::new();
    schedule.insert("Monday".to_string(), "10:00 AM".to_string());
    schedule.insert("Thursday".to_string(), "2:00 PM".to_string());

    Course {
        id,
        title: title.to_string(),
        description: format!("Introduction to {}", title),
        faculty_name: "Dr. Rao".to_string(),
        schedule,
        content: vec![
            CourseContent {
                id: id * 10 + 1,
                title: "Lecture notes".to_string(),
                content_type: "pdf".to_string(),
                details: ContentDetails::default(),
            },
            CourseContent {
                id: id * 10 + 2,
                title: "Unit quiz".to_string(),
                content_type: "quiz".to_string(),
                details: ContentDetails {
                    due_date: Some("2026-11-01".to_string()),
                },
            },
        ],
    }
}

pub fn courses() -> Vec<Course> {
    vec![course(1, "Calculus"), course(2, "Physics")]
}

pub fn quiz() -> DailyQuiz {
    DailyQuiz {
        id: Some(1),
        question: "What is the derivative of x^2?".to_string(),
        options: vec![
            "x".to_string(),
            "x^2".to_string(),
            "2x".to_string(),
            "2".to_string(),
        ],
        correct_option: 2,
    }
}

#[async_trait(?Send)]
impl PortalApi for ScriptedApi {
    async fn login_student(&self, _roll_no: &str) -> ApiResult<Student> {
        self.record("login_student");
        self.student.clone()
    }

    async fn dashboard_stats(&self, _student_id: &str) -> ApiResult<DashboardStats> {
        self.record("dashboard_stats");
        self.stats.clone()
    }

    async fn analysis(&self, _student_id: &str) -> ApiResult<Analysis> {
        self.record("analysis");
        if let Some(gate) = &self.analysis_gate {
            gate.notified().await;
        }
        self.analysis.clone()
    }

    async fn courses(&self, _student_id: &str) -> ApiResult<Vec<Course>> {
        self.record("courses");
        self.courses.clone()
    }

    async fn daily_test(&self) -> ApiResult<DailyQuiz> {
        self.record("daily_test");
        self.quiz.clone()
    }

    async fn submit_test(&self, event: &LearningEvent) -> ApiResult<()> {
        self.record("submit_test");
        self.submitted.borrow_mut().push(event.clone());
        self.submit.clone()
    }

    async fn ingest_event(&self, event: &serde_json::Value) -> ApiResult<()> {
        self.record("ingest_event");
        self.ingested.borrow_mut().push(event.clone());
        self.submit.clone()
    }
}
