/// A destructive action waiting on the user's answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Confirmation<A> {
    Idle,
    Pending { prompt: String, action: A },
}

impl<A> Default for Confirmation<A> {
    fn default() -> Self {
        Confirmation::Idle
    }
}

impl<A> Confirmation<A> {
    /// Queues `action` behind `prompt`, replacing any unanswered request.
    pub fn request(&mut self, prompt: impl Into<String>, action: A) {
        *self = Confirmation::Pending {
            prompt: prompt.into(),
            action,
        };
    }

    /// Returns the queued action when accepted. Always ends idle.
    pub fn resolve(&mut self, accepted: bool) -> Option<A> {
        match std::mem::take(self) {
            Confirmation::Pending { action, .. } if accepted => Some(action),
            _ => None,
        }
    }

    pub fn prompt(&self) -> Option<&str> {
        match self {
            Confirmation::Idle => None,
            Confirmation::Pending { prompt, .. } => Some(prompt.as_str()),
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Confirmation::Pending { .. })
    }
}

/// Admin operations that go through a confirmation first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdminAction {
    ApproveRequest(String),
    RejectRequest(String),
    DeleteUser(String),
    DeleteFeedback(String),
    DeleteReport(String),
    DeleteForm(String),
}
