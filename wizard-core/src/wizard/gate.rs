use crate::models::{FormState, Step};

/// Decides whether the wizard may leave `step` going forward.
///
/// The wizard consults its gate before every forward move and before
/// submitting. A refusal leaves the session where it was.
pub trait AdvanceGate {
    fn can_advance(
        &self,
        step: Step,
        form: &FormState,
    ) -> bool;
}

/// Gate that never refuses. Forms are accepted as entered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OpenGate;

impl AdvanceGate for OpenGate {
    fn can_advance(
        &self,
        _step: Step,
        _form: &FormState,
    ) -> bool {
        true
    }
}

impl<F> AdvanceGate for F
where
    F: Fn(Step, &FormState) -> bool,
{
    fn can_advance(
        &self,
        step: Step,
        form: &FormState,
    ) -> bool {
        self(step, form)
    }
}
