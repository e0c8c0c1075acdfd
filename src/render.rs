//! Text rendering of the page view-models for the terminal

use serde::Serialize;
use std::fmt::Write;

use crate::views::courses::{NO_CONTENT, NO_SELECTION};
use crate::views::daily_test::GradedFeedback;
use crate::views::dashboard::{NO_STRONG_TOPICS, NO_WEAK_TOPICS};
use crate::views::rewards::NO_BADGES;
use crate::views::{
    CourseListing, CoursesView, DailyTestView, DashboardSnapshot, LoadState, NavigationShell,
    QuizPhase, RewardsView,
};

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// Width of the longest bar in the progress chart
const CHART_WIDTH: usize = 40;

pub fn to_json<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(value)
}

pub fn render_nav(shell: &NavigationShell) -> String {
    let mut out = String::new();
    let initial = shell.avatar_initial().unwrap_or('?');
    let _ = writeln!(out, "Build2Break · EdTech Portal   [{}] {}", initial, shell.student_name());

    let items: Vec<String> = shell
        .items()
        .into_iter()
        .map(|item| {
            if item.active {
                format!("[{}]", item.label)
            } else {
                item.label.to_string()
            }
        })
        .collect();
    let _ = writeln!(out, "{}", items.join("  "));
    out
}

pub fn render_dashboard(state: &LoadState<DashboardSnapshot>) -> String {
    let snapshot = match state {
        LoadState::Loading => return "Loading analytics...\n".to_string(),
        LoadState::Failed(message) => return format!("{}\n", message),
        LoadState::Ready(snapshot) => snapshot,
    };

    let mut out = String::new();
    let _ = writeln!(out, "Performance Overview");
    let _ = writeln!(out, "Good Afternoon, {}", snapshot.student_name);
    let _ = writeln!(out);

    let _ = writeln!(
        out,
        "Current Streak: {} days ({})",
        snapshot.streak.current_streak,
        snapshot.streak_status()
    );
    let _ = writeln!(out, "Confidence:     {}", snapshot.confidence);
    if let Some(reason) = &snapshot.confidence_reason {
        let _ = writeln!(out, "                {}", reason);
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "Strong Areas:   {}", topic_list(&snapshot.strong_topics, NO_STRONG_TOPICS));
    let _ = writeln!(out, "Focus Needed:   {}", topic_list(&snapshot.weak_topics, NO_WEAK_TOPICS));
    let _ = writeln!(out);

    let _ = writeln!(out, "Daily Progress");
    if snapshot.chart.is_empty() {
        let _ = writeln!(out, "  No progress recorded yet");
    }
    let max = snapshot.chart_max();
    for point in &snapshot.chart {
        let len = if max > 0.0 {
            ((point.score / max) * CHART_WIDTH as f64).round() as usize
        } else {
            0
        };
        let _ = writeln!(out, "  {} | {:<width$} {:.1}", point.date, "█".repeat(len), point.score, width = CHART_WIDTH);
    }

    if !snapshot.activity_mix.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Activity Mix");
        for share in &snapshot.activity_mix {
            let _ = writeln!(out, "  {:<10} {:>4} ({:.0}%)", share.activity_type, share.count, share.percent);
        }
    }

    out
}

fn topic_list(topics: &[String], empty: &str) -> String {
    if topics.is_empty() {
        empty.to_string()
    } else {
        topics.join(", ")
    }
}

pub fn render_courses(view: &CoursesView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "My Courses");

    match view.listing() {
        CourseListing::Loading => {
            let _ = writeln!(out, "Loading courses...");
        }
        CourseListing::Failed(message) => {
            let _ = writeln!(out, "Could not load courses: {}", message);
        }
        CourseListing::Empty => {
            let _ = writeln!(out, "You are not enrolled in any courses.");
        }
        CourseListing::Loaded(courses) => {
            let _ = writeln!(out, "{:<6} {:<30} {}", "ID", "Title", "Faculty");
            let _ = writeln!(out, "{}", "-".repeat(60));
            for course in courses {
                let marker = if view.is_selected(course.id) { ">" } else { " " };
                let _ = writeln!(out, "{}{:<5} {:<30} {}", marker, course.id, course.title, course.faculty_name);
            }
        }
    }
    let _ = writeln!(out);

    let detail = match view.detail() {
        Some(detail) => detail,
        None => {
            let _ = writeln!(out, "{}", NO_SELECTION);
            return out;
        }
    };

    let _ = writeln!(out, "{}", detail.title);
    if !detail.description.is_empty() {
        let _ = writeln!(out, "{}", detail.description);
    }
    let _ = writeln!(out, "Faculty:  {}", detail.faculty_name);
    let _ = writeln!(out, "Schedule:");
    for slot in &detail.schedule {
        let _ = writeln!(out, "  {:<10} {}", slot.day, slot.time);
    }
    let _ = writeln!(out, "Course Content:");
    if detail.content.is_empty() {
        let _ = writeln!(out, "  {}", NO_CONTENT);
    }
    for item in &detail.content {
        match &item.due_date {
            Some(due) => {
                let _ = writeln!(out, "  [{}] {} (due {})", item.kind.label(), item.title, due);
            }
            None => {
                let _ = writeln!(out, "  [{}] {}", item.kind.label(), item.title);
            }
        }
    }

    out
}

pub fn render_quiz(view: &DailyTestView) -> String {
    let mut out = String::new();

    let (quiz, phase) = match (view.quiz(), view.phase()) {
        (Some(quiz), phase) if *phase != QuizPhase::Loading => (quiz, phase),
        _ => {
            let _ = writeln!(out, "Loading Test...");
            return out;
        }
    };

    let _ = writeln!(out, "Daily Knowledge Check");
    let _ = writeln!(out, "Q: {}", quiz.question);

    let selected = match phase {
        QuizPhase::Ready { selected } => *selected,
        QuizPhase::Graded { selected, .. } => Some(*selected),
        QuizPhase::Loading => None,
    };
    for (idx, option) in quiz.options.iter().enumerate() {
        let marker = if selected == Some(idx) { "*" } else { " " };
        let _ = writeln!(out, " {} {}. {}", marker, idx + 1, option);
    }

    if let Some(feedback) = view.feedback() {
        let _ = writeln!(out);
        let _ = write!(out, "{}", render_feedback(&feedback));
    }

    out
}

pub fn render_feedback(feedback: &GradedFeedback) -> String {
    format!("{} {}\n{}\n", feedback.icon, feedback.headline, feedback.message)
}

pub fn render_rewards(state: &LoadState<RewardsView>) -> String {
    let view = match state {
        LoadState::Loading => return "Loading...\n".to_string(),
        LoadState::Failed(message) => return format!("Could not load rewards: {}\n", message),
        LoadState::Ready(view) => view,
    };

    let mut out = String::new();
    let _ = writeln!(out, "Rewards & Achievements");
    let _ = writeln!(out);
    let _ = writeln!(out, "Mystery Puzzle");

    for row in view.cells().chunks(10) {
        let line: String = row
            .iter()
            .map(|cell| if cell.filled { '■' } else { '□' })
            .collect();
        let _ = writeln!(out, "  {}", line);
    }
    let _ = writeln!(out, "{}", view.progress_label());
    if let Some(banner) = view.completion_banner() {
        let _ = writeln!(out, "{}", banner);
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Your Collection");
    if view.has_badges() {
        for badge in &view.badges {
            let _ = writeln!(out, "  🏅 {}", badge);
        }
    } else {
        let _ = writeln!(out, "  {}", NO_BADGES);
    }

    out
}
