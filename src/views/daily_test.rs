//! Daily Test View
//!
//! Two independent state machines:
//!
//! - [`QuizPhase`]: `Loading -> Ready -> Graded`, driven by the user. Grading
//!   is local and happens immediately on submit.
//! - [`Delivery`]: `Idle -> Pending -> Acked | Failed`, tracking the
//!   best-effort post of the result. A failed delivery never reverts grading.

use chrono::{NaiveDate, Utc};
use serde::Serialize;
use thiserror::Error;

use super::MountScope;
use crate::api::{ApiResult, PortalApi};
use crate::models::{DailyQuiz, LearningEvent};

/// Local grading state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum QuizPhase {
    #[default]
    Loading,
    Ready { selected: Option<usize> },
    Graded { selected: usize, correct: bool },
}

/// Delivery of the graded result to the backend
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "delivery", content = "error", rename_all = "snake_case")]
pub enum Delivery {
    #[default]
    Idle,
    Pending,
    Acked,
    Failed(String),
}

/// Rejected quiz interactions
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QuizError {
    #[error("The quiz has not loaded yet")]
    NotReady,

    #[error("Select an option before submitting")]
    NoSelection,

    #[error("Option {index} does not exist (quiz has {len} options)")]
    OptionOutOfRange { index: usize, len: usize },

    #[error("This quiz has already been graded")]
    AlreadyGraded,
}

/// Feedback copy for a graded quiz
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GradedFeedback {
    pub correct: bool,
    pub icon: &'static str,
    pub headline: &'static str,
    pub message: &'static str,
}

impl GradedFeedback {
    pub fn for_result(correct: bool) -> Self {
        if correct {
            Self {
                correct,
                icon: "🎉",
                headline: "Excellent Work!",
                message: "Your streak has been updated.",
            }
        } else {
            Self {
                correct,
                icon: "📚",
                headline: "Keep Learning!",
                message: "Good attempt. Review the topic and try again tomorrow.",
            }
        }
    }
}

/// Calendar day stamped on submissions (UTC)
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Post a graded result, reporting how the delivery ended
pub async fn deliver<A: PortalApi + ?Sized>(api: &A, event: &LearningEvent) -> Delivery {
    match api.submit_test(event).await {
        Ok(()) => {
            tracing::info!(student_id = %event.student_id, score = event.score, "Quiz result delivered");
            Delivery::Acked
        }
        Err(e) => {
            tracing::warn!(student_id = %event.student_id, error = %e, "Failed to submit quiz result");
            Delivery::Failed(e.to_string())
        }
    }
}

/// Daily test page state
#[derive(Debug, Clone)]
pub struct DailyTestView {
    student_id: String,
    quiz: Option<DailyQuiz>,
    phase: QuizPhase,
    delivery: Delivery,
    load_error: Option<String>,
}

impl DailyTestView {
    pub fn new(student_id: &str) -> Self {
        Self {
            student_id: student_id.to_string(),
            quiz: None,
            phase: QuizPhase::Loading,
            delivery: Delivery::Idle,
            load_error: None,
        }
    }

    pub fn quiz(&self) -> Option<&DailyQuiz> {
        self.quiz.as_ref()
    }

    pub fn phase(&self) -> &QuizPhase {
        &self.phase
    }

    pub fn delivery(&self) -> &Delivery {
        &self.delivery
    }

    /// Why the quiz is still loading, if its fetch failed
    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    /// Apply the quiz fetch result
    ///
    /// A failure is logged and the view stays in `Loading`.
    pub fn apply_quiz(&mut self, result: ApiResult<DailyQuiz>) {
        if self.phase != QuizPhase::Loading {
            return;
        }
        match result {
            Ok(quiz) => {
                self.quiz = Some(quiz);
                self.phase = QuizPhase::Ready { selected: None };
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to load daily test");
                self.load_error = Some(e.to_string());
            }
        }
    }

    pub async fn load<A: PortalApi + ?Sized>(&mut self, api: &A, scope: &MountScope) -> &QuizPhase {
        match scope.run(api.daily_test()).await {
            Ok(result) => self.apply_quiz(result),
            Err(_) => tracing::debug!("Discarding daily test for unmounted view"),
        }
        &self.phase
    }

    /// Option buttons accept input only while the quiz is ready
    pub fn options_enabled(&self) -> bool {
        matches!(self.phase, QuizPhase::Ready { .. })
    }

    pub fn can_submit(&self) -> bool {
        matches!(self.phase, QuizPhase::Ready { selected: Some(_) })
    }

    /// Select an option; reselection overwrites
    pub fn select(&mut self, index: usize) -> Result<(), QuizError> {
        let len = match (&self.phase, &self.quiz) {
            (QuizPhase::Ready { .. }, Some(quiz)) => quiz.options.len(),
            (QuizPhase::Graded { .. }, _) => return Err(QuizError::AlreadyGraded),
            _ => return Err(QuizError::NotReady),
        };
        if index >= len {
            return Err(QuizError::OptionOutOfRange { index, len });
        }

        self.phase = QuizPhase::Ready {
            selected: Some(index),
        };
        Ok(())
    }

    /// Grade the selected answer and build the result record to deliver
    ///
    /// Moves to `Graded` and marks delivery pending; the caller posts the
    /// returned event (see [`deliver`]) and feeds the outcome back through
    /// [`record_delivery`](Self::record_delivery).
    pub fn submit(&mut self, date: NaiveDate) -> Result<LearningEvent, QuizError> {
        let selected = match &self.phase {
            QuizPhase::Ready {
                selected: Some(selected),
            } => *selected,
            QuizPhase::Ready { selected: None } => return Err(QuizError::NoSelection),
            QuizPhase::Graded { .. } => return Err(QuizError::AlreadyGraded),
            QuizPhase::Loading => return Err(QuizError::NotReady),
        };
        let quiz = self.quiz.as_ref().ok_or(QuizError::NotReady)?;

        let correct = selected == quiz.correct_option;
        self.phase = QuizPhase::Graded { selected, correct };
        self.delivery = Delivery::Pending;

        Ok(LearningEvent::daily_quiz(&self.student_id, date, correct))
    }

    /// Record how the result delivery ended. Grading is left untouched.
    pub fn record_delivery(&mut self, delivery: Delivery) {
        if self.delivery == Delivery::Pending {
            self.delivery = delivery;
        }
    }

    /// Grade, then deliver the result
    pub async fn submit_and_deliver<A: PortalApi + ?Sized>(
        &mut self,
        api: &A,
        date: NaiveDate,
    ) -> Result<GradedFeedback, QuizError> {
        let event = self.submit(date)?;
        let feedback = self.feedback().ok_or(QuizError::NotReady)?;

        let outcome = deliver(api, &event).await;
        self.record_delivery(outcome);

        Ok(feedback)
    }

    pub fn feedback(&self) -> Option<GradedFeedback> {
        match self.phase {
            QuizPhase::Graded { correct, .. } => Some(GradedFeedback::for_result(correct)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{self, ScriptedApi};

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    async fn ready_view(api: &ScriptedApi) -> DailyTestView {
        let mut view = DailyTestView::new("123");
        view.load(api, &MountScope::new()).await;
        view
    }

    #[tokio::test]
    async fn test_load_moves_to_ready() {
        let view = ready_view(&ScriptedApi::default()).await;
        assert_eq!(view.phase(), &QuizPhase::Ready { selected: None });
        assert!(view.options_enabled());
        assert!(!view.can_submit());
    }

    #[tokio::test]
    async fn test_failed_fetch_stays_loading() {
        let view = ready_view(&ScriptedApi {
            quiz: Err(testing::offline()),
            ..Default::default()
        })
        .await;
        assert_eq!(view.phase(), &QuizPhase::Loading);
        assert!(view.load_error().is_some());
        assert!(!view.options_enabled());
    }

    #[tokio::test]
    async fn test_correct_answer_scores_100() {
        let api = ScriptedApi::default();
        let mut view = ready_view(&api).await;

        view.select(2).unwrap();
        let feedback = view.submit_and_deliver(&api, date()).await.unwrap();
        assert!(feedback.correct);
        assert_eq!(feedback.headline, "Excellent Work!");

        let submitted = api.submitted.borrow();
        assert_eq!(submitted.len(), 1);
        assert_eq!(submitted[0].score, 100);
        assert_eq!(submitted[0].time_spent, 5);
        assert_eq!(submitted[0].attempt_number, 1);
        assert_eq!(submitted[0].date, date());
        assert_eq!(view.delivery(), &Delivery::Acked);
    }

    #[tokio::test]
    async fn test_other_answers_score_zero() {
        for choice in [0, 1, 3] {
            let mut view = ready_view(&ScriptedApi::default()).await;
            view.select(choice).unwrap();
            let event = view.submit(date()).unwrap();
            assert_eq!(event.score, 0);
            assert_eq!(
                view.phase(),
                &QuizPhase::Graded {
                    selected: choice,
                    correct: false
                }
            );
        }
    }

    #[tokio::test]
    async fn test_reselection_overwrites() {
        let mut view = ready_view(&ScriptedApi::default()).await;
        view.select(0).unwrap();
        view.select(2).unwrap();
        assert_eq!(view.phase(), &QuizPhase::Ready { selected: Some(2) });

        assert_eq!(
            view.select(4),
            Err(QuizError::OptionOutOfRange { index: 4, len: 4 })
        );
        assert_eq!(view.phase(), &QuizPhase::Ready { selected: Some(2) });
    }

    #[tokio::test]
    async fn test_rejected_selection_reads_as_warning() {
        let mut view = ready_view(&ScriptedApi::default()).await;
        let error = view.select(7).unwrap_err();
        assert_eq!(error.to_string(), "Option 7 does not exist (quiz has 4 options)");

        view.select(0).unwrap();
        view.submit(date()).unwrap();
        let error = view.select(1).unwrap_err();
        assert_eq!(error.to_string(), "This quiz has already been graded");
    }

    #[tokio::test]
    async fn test_submit_requires_selection() {
        let mut view = ready_view(&ScriptedApi::default()).await;
        assert_eq!(view.submit(date()), Err(QuizError::NoSelection));

        let mut loading = DailyTestView::new("123");
        assert_eq!(loading.submit(date()), Err(QuizError::NotReady));
    }

    #[tokio::test]
    async fn test_graded_exactly_once() {
        let api = ScriptedApi::default();
        let mut view = ready_view(&api).await;
        view.select(1).unwrap();
        view.submit_and_deliver(&api, date()).await.unwrap();

        assert_eq!(view.submit(date()), Err(QuizError::AlreadyGraded));
        assert_eq!(view.select(2), Err(QuizError::AlreadyGraded));
        assert!(!view.options_enabled());
        assert_eq!(api.call_count("submit_test"), 1);
    }

    #[tokio::test]
    async fn test_failed_delivery_keeps_grading() {
        let api = ScriptedApi {
            submit: Err(testing::offline()),
            ..Default::default()
        };
        let mut view = ready_view(&api).await;
        view.select(2).unwrap();

        let feedback = view.submit_and_deliver(&api, date()).await.unwrap();
        assert!(feedback.correct);
        assert_eq!(
            view.phase(),
            &QuizPhase::Graded {
                selected: 2,
                correct: true
            }
        );
        assert!(matches!(view.delivery(), Delivery::Failed(_)));
    }

    #[tokio::test]
    async fn test_grading_precedes_delivery() {
        let mut view = ready_view(&ScriptedApi::default()).await;
        view.select(2).unwrap();
        view.submit(date()).unwrap();

        assert!(view.feedback().unwrap().correct);
        assert_eq!(view.delivery(), &Delivery::Pending);

        view.record_delivery(Delivery::Acked);
        assert_eq!(view.delivery(), &Delivery::Acked);

        // Late duplicate outcomes are ignored
        view.record_delivery(Delivery::Failed("late".to_string()));
        assert_eq!(view.delivery(), &Delivery::Acked);
    }

    #[tokio::test]
    async fn test_unmounted_view_ignores_quiz() {
        let scope = MountScope::new();
        scope.unmount();

        let mut view = DailyTestView::new("123");
        view.load(&ScriptedApi::default(), &scope).await;
        assert_eq!(view.phase(), &QuizPhase::Loading);
        assert!(view.quiz().is_none());
    }
}
