//! Contact-form validation and the submission flow state machine.
//!
//! The backend is simulated: the UI contract is only
//! `{ success, message, error? }` from an async call that may also reject.
//! The pure decision lives here so the retry cap and validation rules are
//! testable without a browser; the web crate supplies the delay and the
//! fault roll.

use crate::constants::{MAX_SUBMIT_ATTEMPTS, SERVER_FAULT_PROBABILITY};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFormData {
    pub nom: String,
    pub email: String,
    pub message: String,
}

/// Trim all fields and lowercase the email before validation/submission.
pub fn sanitize(data: &ContactFormData) -> ContactFormData {
    ContactFormData {
        nom: data.nom.trim().to_string(),
        email: data.email.trim().to_lowercase(),
        message: data.message.trim().to_string(),
    }
}

#[derive(Clone, Debug, Default)]
pub struct FieldErrors {
    pub nom: Option<&'static str>,
    pub email: Option<&'static str>,
    pub message: Option<&'static str>,
}

impl FieldErrors {
    pub fn is_valid(&self) -> bool {
        self.nom.is_none() && self.email.is_none() && self.message.is_none()
    }

    pub fn first(&self) -> Option<&'static str> {
        self.nom.or(self.email).or(self.message)
    }
}

/// Client-side validation with the site's original rules and messages.
pub fn validate(data: &ContactFormData) -> FieldErrors {
    let mut errors = FieldErrors::default();

    let nom = data.nom.trim();
    if nom.is_empty() {
        errors.nom = Some("Le nom est requis");
    } else if nom.chars().count() < 2 {
        errors.nom = Some("Le nom doit contenir au moins 2 caractères");
    } else if nom.chars().count() > 50 {
        errors.nom = Some("Le nom ne peut pas dépasser 50 caractères");
    } else if !nom
        .chars()
        .all(|c| c.is_alphabetic() || c.is_whitespace() || c == '\'' || c == '-')
    {
        errors.nom = Some("Le nom ne peut contenir que des lettres, espaces, apostrophes et tirets");
    }

    let email = data.email.trim();
    if email.is_empty() {
        errors.email = Some("L'email est requis");
    } else if !email_looks_valid(email) {
        errors.email = Some("Veuillez entrer une adresse email valide");
    } else if email.chars().count() > 100 {
        errors.email = Some("L'email ne peut pas dépasser 100 caractères");
    }

    let message = data.message.trim();
    if message.is_empty() {
        errors.message = Some("Le message est requis");
    } else if message.chars().count() < 10 {
        errors.message = Some("Le message doit contenir au moins 10 caractères");
    } else if message.chars().count() > 1000 {
        errors.message = Some("Le message ne peut pas dépasser 1000 caractères");
    }

    errors
}

/// `local@domain.tld` shape: non-empty parts around a single `@`, a dot in
/// the domain, no whitespace anywhere.
pub fn email_looks_valid(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = email.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        _ => false,
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmissionOutcome {
    pub success: bool,
    pub message: String,
    pub error: Option<String>,
}

impl SubmissionOutcome {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            error: None,
        }
    }

    pub fn failure(message: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            error: Some(error.into()),
        }
    }
}

/// Server-side decision of the simulated backend. `server_fault_roll` is a
/// uniform draw in `[0, 1)`; the caller injects it so tests are
/// deterministic.
pub fn simulated_response(data: &ContactFormData, server_fault_roll: f64) -> SubmissionOutcome {
    let failure_message = "Une erreur est survenue lors de l'envoi de votre message.";
    if data.nom.trim().is_empty() || data.email.trim().is_empty() || data.message.trim().is_empty()
    {
        return SubmissionOutcome::failure(failure_message, "Tous les champs sont requis");
    }
    if !email_looks_valid(data.email.trim()) {
        return SubmissionOutcome::failure(failure_message, "Format d'email invalide");
    }
    if server_fault_roll < SERVER_FAULT_PROBABILITY {
        return SubmissionOutcome::failure(failure_message, "Erreur serveur temporaire");
    }
    SubmissionOutcome::success(
        "Votre message a été envoyé avec succès. Nous vous répondrons dans les plus brefs délais.",
    )
}

#[derive(Debug, thiserror::Error)]
pub enum ContactError {
    #[error("a submission is already in flight")]
    AlreadySubmitting,
    #[error("submissions are no longer accepted; show the direct contact affordance")]
    Unavailable,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmissionPhase {
    Idle,
    Submitting,
    Succeeded,
    Failed { attempts: u32 },
    /// Three consecutive failures: retry is withdrawn and the UI shows a
    /// static "contact us directly" message instead.
    Unavailable,
}

/// Submission lifecycle for the contact form. At most one request is in
/// flight; the submit control stays disabled while `is_pending`. The
/// consecutive-failure count outlives the Failed -> Submitting transition.
pub struct SubmissionFlow {
    phase: SubmissionPhase,
    failures: u32,
}

impl Default for SubmissionFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl SubmissionFlow {
    pub fn new() -> Self {
        Self {
            phase: SubmissionPhase::Idle,
            failures: 0,
        }
    }

    #[inline]
    pub fn phase(&self) -> SubmissionPhase {
        self.phase
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.phase == SubmissionPhase::Submitting
    }

    /// Whether the UI should still offer a retry control after a failure.
    pub fn can_retry(&self) -> bool {
        matches!(self.phase, SubmissionPhase::Failed { .. }) && self.failures < MAX_SUBMIT_ATTEMPTS
    }

    /// Enter the pending state. Refused while a submission is in flight or
    /// after the retry cap has been exhausted.
    pub fn begin(&mut self) -> Result<(), ContactError> {
        match self.phase {
            SubmissionPhase::Submitting => Err(ContactError::AlreadySubmitting),
            SubmissionPhase::Unavailable => Err(ContactError::Unavailable),
            _ => {
                self.phase = SubmissionPhase::Submitting;
                Ok(())
            }
        }
    }

    /// Record the outcome of the in-flight submission. A success resets the
    /// failure count; the third consecutive failure switches the flow to
    /// `Unavailable`.
    pub fn complete(&mut self, outcome: &SubmissionOutcome) {
        if outcome.success {
            self.failures = 0;
            self.phase = SubmissionPhase::Succeeded;
        } else {
            self.failures += 1;
            self.phase = if self.failures >= MAX_SUBMIT_ATTEMPTS {
                SubmissionPhase::Unavailable
            } else {
                SubmissionPhase::Failed {
                    attempts: self.failures,
                }
            };
        }
    }

    /// Dismiss a success or failure notice and return to idle. No-op once
    /// unavailable.
    pub fn reset_notice(&mut self) {
        if matches!(
            self.phase,
            SubmissionPhase::Succeeded | SubmissionPhase::Failed { .. }
        ) {
            self.phase = SubmissionPhase::Idle;
        }
    }
}
