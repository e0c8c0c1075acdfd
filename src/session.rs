//! Session Bootstrap
//!
//! Holds the identity of the signed-in student. The context is created in
//! the `Resolving` phase, resolves its identity at most once, and is torn
//! down by [`Session::sign_out`], after which it must be bootstrapped again.

use crate::api::{PortalApi, DEMO_ROLL_NO};
use crate::models::Student;

/// Lifecycle of the session identity
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SessionPhase {
    /// Identity not known yet; nothing but the loading screen renders
    #[default]
    Resolving,
    /// Identity resolved; fixed for the rest of the session
    Active(Student),
}

/// Explicit session context passed down to the views
#[derive(Debug, Clone)]
pub struct Session {
    roll_no: String,
    phase: SessionPhase,
    attempted: bool,
    last_error: Option<String>,
}

impl Session {
    pub fn new(roll_no: &str) -> Self {
        Self {
            roll_no: roll_no.to_string(),
            phase: SessionPhase::Resolving,
            attempted: false,
            last_error: None,
        }
    }

    /// Session for the built-in demo student
    pub fn demo() -> Self {
        Self::new(DEMO_ROLL_NO)
    }

    pub fn roll_no(&self) -> &str {
        &self.roll_no
    }

    pub fn phase(&self) -> &SessionPhase {
        &self.phase
    }

    pub fn student(&self) -> Option<&Student> {
        match &self.phase {
            SessionPhase::Active(student) => Some(student),
            SessionPhase::Resolving => None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        self.student().is_some()
    }

    /// Error from the lookup, if it failed. The phase stays `Resolving`.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Resolve the student identity
    ///
    /// Issues a single lookup per lifecycle. A failure is logged and leaves
    /// the session resolving with no retry; an already-resolved identity is
    /// never replaced.
    pub async fn bootstrap<A: PortalApi + ?Sized>(&mut self, api: &A) -> Option<&Student> {
        if self.attempted {
            return self.student();
        }
        self.attempted = true;

        match api.login_student(&self.roll_no).await {
            Ok(student) => {
                tracing::info!(student_id = %student.id, "Student identity resolved");
                self.last_error = None;
                self.phase = SessionPhase::Active(student);
            }
            Err(e) => {
                tracing::error!(roll_no = %self.roll_no, error = %e, "Failed to resolve student identity");
                self.last_error = Some(e.to_string());
            }
        }

        self.student()
    }

    /// Discard all session state
    ///
    /// No backend call is made; the caller must bootstrap again.
    pub fn sign_out(&mut self) {
        if let SessionPhase::Active(student) = &self.phase {
            tracing::info!(student_id = %student.id, "Signing out");
        }
        *self = Self::new(&self.roll_no);
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::demo()
    }
}
