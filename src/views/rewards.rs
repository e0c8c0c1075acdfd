//! Rewards View
//!
//! Puzzle progress and badges, rendered from dashboard statistics fetched by
//! the enclosing [`RewardsPage`].

use serde::Serialize;

use super::{LoadState, MountScope};
use crate::api::PortalApi;
use crate::models::{DashboardStats, RewardInfo};

/// Pieces needed to complete the puzzle
pub const PUZZLE_TOTAL: u32 = 30;

pub const COMPLETION_BANNER: &str = "🎉 Puzzle Complete! Reward Unlocked!";
pub const NO_BADGES: &str = "No badges yet. Keep studying!";

/// One cell of the puzzle grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PuzzleCell {
    pub index: u32,
    pub filled: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RewardsView {
    pub pieces: u32,
    pub badges: Vec<String>,
}

impl RewardsView {
    pub fn new(reward: RewardInfo) -> Self {
        Self {
            pieces: reward.puzzle_pieces,
            badges: reward.badges_unlocked,
        }
    }

    /// Absent reward data counts as zero pieces and no badges
    pub fn from_stats(stats: &DashboardStats) -> Self {
        Self::new(stats.reward.clone().unwrap_or_default())
    }

    /// Exactly [`PUZZLE_TOTAL`] cells, filled below the piece count
    pub fn cells(&self) -> Vec<PuzzleCell> {
        (0..PUZZLE_TOTAL)
            .map(|index| PuzzleCell {
                index,
                filled: index < self.pieces,
            })
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.pieces >= PUZZLE_TOTAL
    }

    pub fn completion_banner(&self) -> Option<&'static str> {
        self.is_complete().then_some(COMPLETION_BANNER)
    }

    /// Completion percentage, capped at 100
    pub fn percent(&self) -> f64 {
        (self.pieces.min(PUZZLE_TOTAL) as f64 * 100.0) / PUZZLE_TOTAL as f64
    }

    pub fn progress_label(&self) -> String {
        format!("Collected: {} / {} pieces", self.pieces, PUZZLE_TOTAL)
    }

    pub fn has_badges(&self) -> bool {
        !self.badges.is_empty()
    }
}

/// Fetch dashboard statistics and derive the rewards view
pub async fn fetch_rewards<A: PortalApi + ?Sized>(api: &A, student_id: &str) -> LoadState<RewardsView> {
    match api.dashboard_stats(student_id).await {
        Ok(stats) => LoadState::Ready(RewardsView::from_stats(&stats)),
        Err(e) => {
            tracing::warn!(student_id, error = %e, "Rewards fetch failed");
            LoadState::Failed(e.to_string())
        }
    }
}

/// Rewards page: owns the stats fetch for [`RewardsView`]
#[derive(Debug, Clone)]
pub struct RewardsPage {
    student_id: String,
    state: LoadState<RewardsView>,
}

impl RewardsPage {
    pub fn new(student_id: &str) -> Self {
        Self {
            student_id: student_id.to_string(),
            state: LoadState::Loading,
        }
    }

    pub fn state(&self) -> &LoadState<RewardsView> {
        &self.state
    }

    pub async fn load<A: PortalApi + ?Sized>(&mut self, api: &A, scope: &MountScope) -> &LoadState<RewardsView> {
        let outcome = scope.run(fetch_rewards(api, &self.student_id)).await;
        match outcome {
            Ok(state) => self.state = state,
            Err(_) => tracing::debug!("Discarding rewards for unmounted view"),
        }
        &self.state
    }
}
