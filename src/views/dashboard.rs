//! Dashboard View
//!
//! Fetches statistics and analysis concurrently and derives the dashboard
//! snapshot. Both requests must succeed: a failure of either one puts the
//! view in the generic error state, never a partial render.

use chrono::NaiveDate;
use futures_util::future::try_join;
use serde::Serialize;

use super::{LoadState, MountScope};
use crate::api::PortalApi;
use crate::models::{Analysis, DailyProgress, DashboardStats, StreakInfo};

/// Message shown when either dashboard request fails
pub const DASHBOARD_ERROR: &str = "Failed to load dashboard data. Ensure backend is running.";

/// Confidence shown when the backend reports none
pub const DEFAULT_CONFIDENCE: &str = "Low";

/// Greeting name used when the stats carry no student
pub const DEFAULT_GREETING_NAME: &str = "Student";

pub const NO_STRONG_TOPICS: &str = "Keep practicing!";
pub const NO_WEAK_TOPICS: &str = "Doing great!";

/// One bar of the daily progress chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub date: NaiveDate,
    pub score: f64,
}

/// One slice of the activity mix
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivityShare {
    pub activity_type: String,
    pub count: u32,
    /// Share of all activities, 0-100
    pub percent: f64,
}

/// Everything the dashboard renders, derived from one stats + analysis pair
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSnapshot {
    pub student_name: String,
    pub streak: StreakInfo,
    pub confidence: String,
    pub confidence_reason: Option<String>,
    pub strong_topics: Vec<String>,
    pub weak_topics: Vec<String>,
    pub chart: Vec<ChartPoint>,
    pub activity_mix: Vec<ActivityShare>,
    pub daily_progress: Vec<DailyProgress>,
}

impl DashboardSnapshot {
    pub fn new(stats: DashboardStats, analysis: Analysis) -> Self {
        let student_name = stats
            .student
            .map(|s| s.name)
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| DEFAULT_GREETING_NAME.to_string());

        let streak = stats.streak.unwrap_or_default();

        let confidence = stats
            .confidence_level
            .filter(|level| !level.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_CONFIDENCE.to_string());

        let daily_progress = stats.daily_progress.unwrap_or_default();
        let chart = daily_progress
            .iter()
            .map(|day| ChartPoint {
                date: day.date,
                score: day.progress_score,
            })
            .collect();

        let distribution = stats.activity_distribution.unwrap_or_default();
        let total: u64 = distribution.iter().map(|a| u64::from(a.count)).sum();
        let activity_mix = distribution
            .into_iter()
            .map(|a| ActivityShare {
                percent: if total == 0 {
                    0.0
                } else {
                    a.count as f64 * 100.0 / total as f64
                },
                activity_type: a.activity_type,
                count: a.count,
            })
            .collect();

        Self {
            student_name,
            streak,
            confidence,
            confidence_reason: stats.confidence_reason.filter(|r| !r.is_empty()),
            strong_topics: analysis.strong_topics,
            weak_topics: analysis.weak_topics,
            chart,
            activity_mix,
            daily_progress,
        }
    }

    pub fn streak_status(&self) -> &'static str {
        if self.streak.is_active {
            "Active Today"
        } else {
            "Inactive Today"
        }
    }

    /// Highest score on the chart, for scaling bars
    pub fn chart_max(&self) -> f64 {
        self.chart.iter().map(|p| p.score).fold(0.0, f64::max)
    }
}

/// Fetch stats and analysis concurrently and join them
pub async fn fetch_dashboard<A: PortalApi + ?Sized>(
    api: &A,
    student_id: &str,
) -> LoadState<DashboardSnapshot> {
    match try_join(api.dashboard_stats(student_id), api.analysis(student_id)).await {
        Ok((stats, analysis)) => LoadState::Ready(DashboardSnapshot::new(stats, analysis)),
        Err(e) => {
            tracing::warn!(student_id, error = %e, "Dashboard fetch failed");
            LoadState::Failed(DASHBOARD_ERROR.to_string())
        }
    }
}

/// Dashboard page state
#[derive(Debug, Clone)]
pub struct DashboardView {
    student_id: String,
    state: LoadState<DashboardSnapshot>,
}

impl DashboardView {
    pub fn new(student_id: &str) -> Self {
        Self {
            student_id: student_id.to_string(),
            state: LoadState::Loading,
        }
    }

    pub fn student_id(&self) -> &str {
        &self.student_id
    }

    pub fn state(&self) -> &LoadState<DashboardSnapshot> {
        &self.state
    }

    /// Switch to another student. Returns true when a reload is needed.
    pub fn set_student(&mut self, student_id: &str) -> bool {
        if self.student_id == student_id {
            return false;
        }
        self.student_id = student_id.to_string();
        self.state = LoadState::Loading;
        true
    }

    /// (Re)load both requests within the mount scope
    pub async fn load<A: PortalApi + ?Sized>(
        &mut self,
        api: &A,
        scope: &MountScope,
    ) -> &LoadState<DashboardSnapshot> {
        self.state = LoadState::Loading;

        let outcome = scope.run(fetch_dashboard(api, &self.student_id)).await;
        match outcome {
            Ok(state) => self.state = state,
            Err(_) => tracing::debug!("Discarding dashboard response for unmounted view"),
        }

        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ActivityCount;
    use crate::testing::{self, ScriptedApi};
    use std::sync::Arc;
    use tokio::sync::Notify;

    #[tokio::test]
    async fn test_load_success() {
        let api = ScriptedApi::default();
        let mut view = DashboardView::new("123");
        assert!(view.state().is_loading());

        let snapshot = view.load(&api, &MountScope::new()).await.ready().cloned().unwrap();
        assert_eq!(snapshot.student_name, "Asha Verma");
        assert_eq!(snapshot.streak.current_streak, 6);
        assert_eq!(snapshot.streak_status(), "Active Today");
        assert_eq!(snapshot.confidence, "High");
        assert_eq!(snapshot.weak_topics, vec!["Algebra", "Probability"]);
        assert_eq!(snapshot.chart.len(), 2);
        assert_eq!(snapshot.chart[1].score, 80.0);
        assert_eq!(snapshot.chart_max(), 80.0);
        assert_eq!(snapshot.activity_mix[0].percent, 75.0);

        assert_eq!(api.call_count("dashboard_stats"), 1);
        assert_eq!(api.call_count("analysis"), 1);
    }

    #[test]
    fn test_missing_streak_and_confidence_defaults() {
        let snapshot = DashboardSnapshot::new(DashboardStats::default(), Analysis::default());
        assert_eq!(snapshot.streak.current_streak, 0);
        assert!(!snapshot.streak.is_active);
        assert_eq!(snapshot.confidence, "Low");
        assert_eq!(snapshot.student_name, "Student");
        assert!(snapshot.chart.is_empty());
        assert!(snapshot.activity_mix.is_empty());
    }

    #[test]
    fn test_activity_mix_with_huge_counts() {
        let stats = DashboardStats {
            activity_distribution: Some(vec![
                ActivityCount {
                    activity_type: "quiz".to_string(),
                    count: u32::MAX,
                },
                ActivityCount {
                    activity_type: "practice".to_string(),
                    count: 1,
                },
            ]),
            ..Default::default()
        };
        let snapshot = DashboardSnapshot::new(stats, Analysis::default());

        let total: f64 = snapshot.activity_mix.iter().map(|a| a.percent).sum();
        assert!((total - 100.0).abs() < 1e-9);
        assert!(snapshot.activity_mix[0].percent > 99.9);
        assert!(snapshot.activity_mix[1].percent < 0.1);
    }

    #[test]
    fn test_snapshot_json_keeps_daily_details() {
        let snapshot = DashboardSnapshot::new(testing::stats(), testing::analysis());
        let json = serde_json::to_value(LoadState::Ready(snapshot)).unwrap();

        let day = &json["data"]["daily_progress"][1];
        assert_eq!(day["date"], "2026-10-18");
        assert_eq!(day["total_time"], 35);
        assert_eq!(day["avg_score"], 85.0);
        assert_eq!(day["is_valid_day"], true);
    }

    #[test]
    fn test_empty_confidence_counts_as_absent() {
        let stats = DashboardStats {
            confidence_level: Some(String::new()),
            ..Default::default()
        };
        let snapshot = DashboardSnapshot::new(stats, Analysis::default());
        assert_eq!(snapshot.confidence, DEFAULT_CONFIDENCE);
    }

    #[tokio::test]
    async fn test_analysis_failure_shows_generic_error() {
        let api = ScriptedApi {
            analysis: Err(testing::offline()),
            ..Default::default()
        };
        let mut view = DashboardView::new("123");

        let state = view.load(&api, &MountScope::new()).await;
        assert_eq!(state.error(), Some(DASHBOARD_ERROR));
        assert!(state.ready().is_none());
    }

    #[tokio::test]
    async fn test_stats_failure_shows_generic_error() {
        let api = ScriptedApi {
            stats: Err(testing::offline()),
            ..Default::default()
        };
        let state = fetch_dashboard(&api, "123").await;
        assert_eq!(state, LoadState::Failed(DASHBOARD_ERROR.to_string()));
    }

    #[tokio::test]
    async fn test_nothing_resolves_until_both_requests_do() {
        let gate = Arc::new(Notify::new());
        let api = ScriptedApi {
            analysis_gate: Some(gate.clone()),
            ..Default::default()
        };

        let fetch = fetch_dashboard(&api, "123");
        tokio::pin!(fetch);

        // Stats has answered, analysis is held back
        assert!(futures_util::poll!(&mut fetch).is_pending());
        assert_eq!(api.call_count("dashboard_stats"), 1);

        gate.notify_one();
        assert!(matches!(fetch.await, LoadState::Ready(_)));
    }

    #[tokio::test]
    async fn test_unmounted_view_ignores_response() {
        let api = ScriptedApi::default();
        let scope = MountScope::new();
        scope.unmount();

        let mut view = DashboardView::new("123");
        assert!(view.load(&api, &scope).await.is_loading());
    }

    #[tokio::test]
    async fn test_student_change_requires_reload() {
        let api = ScriptedApi::default();
        let mut view = DashboardView::new("123");
        view.load(&api, &MountScope::new()).await;

        assert!(!view.set_student("123"));
        assert!(view.state().ready().is_some());

        assert!(view.set_student("456"));
        assert!(view.state().is_loading());
        assert_eq!(view.student_id(), "456");
    }
}
