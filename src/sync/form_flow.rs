use thiserror::Error;

use crate::errors::internal::FieldError;

/// Where a screen's form currently is
#[derive(Clone, Debug, PartialEq)]
pub enum FormState<D> {
    /// No draft; the list is the whole screen
    Idle,
    /// A draft is being edited, possibly with validation messages
    Editing { draft: D, errors: Vec<FieldError> },
    /// The draft has been handed to the repository; input is disabled
    Submitting { draft: D },
}

#[derive(Error, Debug, PartialEq)]
pub enum FlowError {
    #[error("no draft is being edited")]
    NotEditing,

    /// The duplicate-submission guard: one in-flight write per screen
    #[error("a submission is already in flight")]
    SubmissionInFlight,
}

/// The screen state machine every CRUD view runs
///
/// `Idle -> Editing -> Submitting -> Idle` on success, back to `Editing`
/// with the draft preserved on failure. Cancel from `Editing` discards the
/// draft without writing anything; while `Submitting` the form cannot be
/// re-entered or re-submitted.
#[derive(Clone, Debug)]
pub struct FormFlow<D> {
    state: FormState<D>,
}

impl<D: Clone> FormFlow<D> {
    pub fn new() -> Self {
        Self {
            state: FormState::Idle,
        }
    }

    pub fn state(&self) -> &FormState<D> {
        &self.state
    }

    pub fn draft(&self) -> Option<&D> {
        match &self.state {
            FormState::Idle => None,
            FormState::Editing { draft, .. } | FormState::Submitting { draft } => Some(draft),
        }
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.state, FormState::Submitting { .. })
    }

    /// Open the form with a fresh or entity-prefilled draft
    ///
    /// Ignored while a submission is in flight.
    pub fn begin(&mut self, draft: D) -> Result<(), FlowError> {
        if self.is_submitting() {
            return Err(FlowError::SubmissionInFlight);
        }
        self.state = FormState::Editing {
            draft,
            errors: Vec::new(),
        };
        Ok(())
    }

    /// Discard the draft and return to the list
    ///
    /// A cancel while submitting is refused; the in-flight write cannot be
    /// recalled.
    pub fn cancel(&mut self) -> Result<(), FlowError> {
        match self.state {
            FormState::Editing { .. } => {
                self.state = FormState::Idle;
                Ok(())
            }
            FormState::Submitting { .. } => Err(FlowError::SubmissionInFlight),
            FormState::Idle => Ok(()),
        }
    }

    /// Keep editing with validation messages attached
    pub fn reject(&mut self, errors: Vec<FieldError>) -> Result<(), FlowError> {
        match &self.state {
            FormState::Editing { draft, .. } => {
                self.state = FormState::Editing {
                    draft: draft.clone(),
                    errors,
                };
                Ok(())
            }
            _ => Err(FlowError::NotEditing),
        }
    }

    /// Hand the draft to the repository, disabling the form
    ///
    /// Returns the draft for the asynchronous call. Refused while another
    /// submission is outstanding.
    pub fn start_submit(&mut self) -> Result<D, FlowError> {
        match &self.state {
            FormState::Editing { draft, .. } => {
                let draft = draft.clone();
                self.state = FormState::Submitting {
                    draft: draft.clone(),
                };
                Ok(draft)
            }
            FormState::Submitting { .. } => Err(FlowError::SubmissionInFlight),
            FormState::Idle => Err(FlowError::NotEditing),
        }
    }

    /// The repository confirmed the write; back to the list
    pub fn submit_succeeded(&mut self) {
        self.state = FormState::Idle;
    }

    /// The repository failed; re-open the form with the draft preserved
    pub fn submit_failed(&mut self, errors: Vec<FieldError>) {
        if let FormState::Submitting { draft } = &self.state {
            self.state = FormState::Editing {
                draft: draft.clone(),
                errors,
            };
        }
    }
}

impl<D: Clone> Default for FormFlow<D> {
    fn default() -> Self {
        Self::new()
    }
}

/// Two-stage destructive-action confirmation
///
/// Deleting first arms the confirmation for one record id; only a confirm
/// for that same id goes through, and any other interaction disarms it.
#[derive(Clone, Debug, Default)]
pub struct DeleteConfirmation {
    armed: Option<String>,
}

impl DeleteConfirmation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn arm(&mut self, id: &str) {
        self.armed = Some(id.to_string());
    }

    pub fn disarm(&mut self) {
        self.armed = None;
    }

    pub fn is_armed_for(&self, id: &str) -> bool {
        self.armed.as_deref() == Some(id)
    }

    /// True exactly when the confirmation was armed for this id; always
    /// disarms, so a second confirm needs a fresh arm.
    pub fn confirm(&mut self, id: &str) -> bool {
        let armed = self.is_armed_for(id);
        self.armed = None;
        armed
    }
}
