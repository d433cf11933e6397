//! Wizard session state machine.
//!
//! A [`WizardSession`] lives from the moment the wizard opens until it is
//! cancelled or submitted. It owns the only [`FormState`] of that session
//! and authorizes every transition and field update.
//!
//! ```text
//!            advance            advance            advance
//!  Location ─────────► Dimensions ─────────► SlabConfig ─────────► Submitted
//!     │      ◄─────────            ◄─────────
//!     │        retreat               retreat
//!     └── retreat / cancel (any step) ──────────────────────────► Cancelled
//! ```

use thiserror::Error;
use tracing::{debug, info, warn};

use super::gate::{AdvanceGate, OpenGate};
use super::visible_fields_for;
use crate::labels::{Button, LabelCatalog, LabelKey};
use crate::models::{FieldError, FieldKey, FieldValue, FormState, Locale, SlabOption, Step};

/// Errors returned by session operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SessionError {
    /// The session was already cancelled or submitted.
    #[error("wizard session is closed")]
    SessionClosed,

    /// The advance gate refused to leave the given step.
    #[error("step '{0}' is not ready to advance")]
    AdvanceRefused(Step),

    #[error(transparent)]
    Field(#[from] FieldError),
}

/// Where a session currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    Active(Step),
    Cancelled,
    Submitted,
}

impl SessionStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Active(_))
    }
}

/// Outcome of a successful navigation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// The session moved to another step.
    Moved(Step),
    /// The session closed with this finalized form.
    Submitted(FormState),
    /// The session closed and its form was discarded.
    Cancelled,
}

#[derive(Debug)]
enum Phase {
    Active { step: Step, form: FormState },
    Cancelled,
    Submitted(FormState),
}

/// One open-to-closed lifetime of the project wizard.
#[derive(Debug)]
pub struct WizardSession<G = OpenGate> {
    phase: Phase,
    locale: Locale,
    gate: G,
}

impl WizardSession<OpenGate> {
    /// Opens a wizard on the first step with a blank form.
    pub fn open(locale: Locale) -> Self {
        Self::with_gate(locale, OpenGate)
    }
}

impl<G: AdvanceGate> WizardSession<G> {
    /// Opens a wizard whose forward moves are checked by `gate`.
    pub fn with_gate(
        locale: Locale,
        gate: G,
    ) -> Self {
        debug!(%locale, "opening wizard session");
        Self {
            phase: Phase::Active {
                step: Step::first(),
                form: FormState::new(),
            },
            locale,
            gate,
        }
    }

    pub fn status(&self) -> SessionStatus {
        match &self.phase {
            Phase::Active { step, .. } => SessionStatus::Active(*step),
            Phase::Cancelled => SessionStatus::Cancelled,
            Phase::Submitted(_) => SessionStatus::Submitted,
        }
    }

    /// The displayed step, or `None` once the session is closed.
    pub fn current_step(&self) -> Option<Step> {
        match &self.phase {
            Phase::Active { step, .. } => Some(*step),
            _ => None,
        }
    }

    pub fn is_closed(&self) -> bool {
        self.status().is_terminal()
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Borrows the live form. `None` once the session is closed.
    pub fn form(&self) -> Option<&FormState> {
        match &self.phase {
            Phase::Active { form, .. } => Some(form),
            _ => None,
        }
    }

    /// Read-only copy of the form.
    ///
    /// Available while the session is active and after submission. A
    /// cancelled session has discarded its form and returns `None`.
    pub fn snapshot(&self) -> Option<FormState> {
        match &self.phase {
            Phase::Active { form, .. } | Phase::Submitted(form) => Some(form.clone()),
            Phase::Cancelled => None,
        }
    }

    /// Fields shown on the current step, in display order.
    pub fn visible_fields(&self) -> Vec<FieldKey> {
        match &self.phase {
            Phase::Active { step, form } => visible_fields_for(*step, form),
            _ => Vec::new(),
        }
    }

    // ─── field updates ───────────────────────────────────────────────────

    /// Stores a typed value. Works from any step; storage is not step-scoped.
    pub fn set_field(
        &mut self,
        key: FieldKey,
        value: FieldValue,
    ) -> Result<(), SessionError> {
        let (_, form) = self.active_mut()?;
        form.set(key, value)?;
        debug!(field = %key, "field updated");
        Ok(())
    }

    /// Stores raw user input for the field named `name`.
    pub fn set_field_raw(
        &mut self,
        name: &str,
        raw: &str,
    ) -> Result<(), SessionError> {
        let (_, form) = self.active_mut()?;
        let key: FieldKey = name.parse()?;
        form.set_raw(key, raw)?;
        debug!(field = %key, "field updated");
        Ok(())
    }

    /// Selects the slab option. The other option becomes inactive; no other
    /// field is changed, so room 2 values survive a round trip through
    /// single-side.
    pub fn set_slab_option(
        &mut self,
        option: SlabOption,
    ) -> Result<(), SessionError> {
        let (_, form) = self.active_mut()?;
        let previous = form.slab_option;
        form.set(FieldKey::SlabOption, FieldValue::Slab(option))?;
        debug!(from = previous.as_str(), to = option.as_str(), "slab option selected");
        Ok(())
    }

    /// Switches the display language. Form values are not touched.
    pub fn set_locale(
        &mut self,
        locale: Locale,
    ) -> Result<(), SessionError> {
        self.active_mut()?;
        debug!(from = %self.locale, to = %locale, "locale changed");
        self.locale = locale;
        Ok(())
    }

    // ─── navigation ──────────────────────────────────────────────────────

    /// Moves to the next step, or submits from the last one.
    ///
    /// # Errors
    ///
    /// * [`SessionError::SessionClosed`] if the session is closed.
    /// * [`SessionError::AdvanceRefused`] if the gate refuses the current step.
    pub fn advance(&mut self) -> Result<Transition, SessionError> {
        let step = self.require_gate_for_current()?;

        match step.next() {
            Some(next) => {
                self.move_to(next);
                Ok(Transition::Moved(next))
            }
            None => self.submit(),
        }
    }

    /// Moves to the previous step. On the first step this closes the wizard,
    /// exactly like [`WizardSession::cancel`].
    pub fn retreat(&mut self) -> Result<Transition, SessionError> {
        let (step, _) = self.active_mut()?;

        match step.previous() {
            Some(previous) => {
                self.move_to(previous);
                Ok(Transition::Moved(previous))
            }
            None => self.cancel(),
        }
    }

    /// Closes the wizard and discards the form.
    pub fn cancel(&mut self) -> Result<Transition, SessionError> {
        let (step, _) = self.active_mut()?;
        info!(%step, "wizard cancelled");
        self.phase = Phase::Cancelled;
        Ok(Transition::Cancelled)
    }

    /// Closes the wizard with the current form as the finalized project.
    ///
    /// Every step must pass the gate, since fields of any step can be edited
    /// from any other.
    pub fn submit(&mut self) -> Result<Transition, SessionError> {
        let (_, form) = self.active()?;
        if let Some(step) = Step::ALL
            .into_iter()
            .find(|step| !self.gate.can_advance(*step, form))
        {
            warn!(%step, "submission refused by gate");
            return Err(SessionError::AdvanceRefused(step));
        }

        let Phase::Active { form, .. } = std::mem::replace(&mut self.phase, Phase::Cancelled)
        else {
            return Err(SessionError::SessionClosed);
        };
        info!(title = %form.title, slab = form.slab_option.as_str(), "wizard submitted");
        self.phase = Phase::Submitted(form.clone());
        Ok(Transition::Submitted(form))
    }

    // ─── presentation helpers ────────────────────────────────────────────

    /// Resolves a label in the session's current locale.
    pub fn label(
        &self,
        key: LabelKey,
    ) -> &'static str {
        LabelCatalog::resolve(self.locale, key)
    }

    pub fn field_label(
        &self,
        key: FieldKey,
    ) -> String {
        LabelCatalog::field_label_with_unit(self.locale, key)
    }

    /// Caption of the backward footer button: "Close" on the first step.
    pub fn back_button(&self) -> Option<Button> {
        self.current_step().map(|step| {
            if step.is_first() {
                Button::Close
            } else {
                Button::Previous
            }
        })
    }

    /// Caption of the forward footer button: "Finish" on the last step.
    pub fn forward_button(&self) -> Option<Button> {
        self.current_step().map(|step| {
            if step.is_last() {
                Button::Finish
            } else {
                Button::Next
            }
        })
    }

    /// Secondary action shown inside the current step, if any.
    pub fn extra_button(&self) -> Option<Button> {
        match self.current_step() {
            Some(Step::Dimensions) => Some(Button::Technician),
            _ => None,
        }
    }

    // ─── internals ───────────────────────────────────────────────────────

    fn active(&self) -> Result<(Step, &FormState), SessionError> {
        match &self.phase {
            Phase::Active { step, form } => Ok((*step, form)),
            _ => Err(SessionError::SessionClosed),
        }
    }

    fn active_mut(&mut self) -> Result<(Step, &mut FormState), SessionError> {
        match &mut self.phase {
            Phase::Active { step, form } => Ok((*step, form)),
            _ => Err(SessionError::SessionClosed),
        }
    }

    fn require_gate_for_current(&self) -> Result<Step, SessionError> {
        let (step, form) = self.active()?;
        if self.gate.can_advance(step, form) {
            Ok(step)
        } else {
            warn!(%step, "advance refused by gate");
            Err(SessionError::AdvanceRefused(step))
        }
    }

    fn move_to(
        &mut self,
        target: Step,
    ) {
        if let Phase::Active { step, .. } = &mut self.phase {
            debug!(from = %step, to = %target, "step changed");
            *step = target;
        }
    }
}
