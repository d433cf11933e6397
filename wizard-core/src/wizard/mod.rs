//! The project wizard: step table, advance gate and session state machine.

mod gate;
mod session;

pub use gate::{AdvanceGate, OpenGate};
pub use session::{SessionError, SessionStatus, Transition, WizardSession};

use crate::models::{FieldKey, FormState, Step};

/// Fields shown on `step` for the given form, in display order.
///
/// A field is shown when it belongs to the step and its branch condition
/// (if any) matches the form's slab option.
pub fn visible_fields_for(
    step: Step,
    form: &FormState,
) -> Vec<FieldKey> {
    FieldKey::ALL
        .into_iter()
        .filter(|key| key.step() == step && form.is_relevant(*key))
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::models::SlabOption;

    #[test]
    fn location_step_fields() {
        let fields = visible_fields_for(Step::Location, &FormState::new());

        assert_eq!(
            fields,
            vec![
                FieldKey::Title,
                FieldKey::Region,
                FieldKey::Department,
                FieldKey::Address,
                FieldKey::Floor,
                FieldKey::FloorsAbove,
            ]
        );
    }

    #[test]
    fn dimensions_step_fields() {
        let fields = visible_fields_for(Step::Dimensions, &FormState::new());

        assert_eq!(
            fields,
            vec![
                FieldKey::Height,
                FieldKey::Width,
                FieldKey::Clearance,
                FieldKey::WallWidth,
                FieldKey::HeightUnderSlab,
                FieldKey::WallThickness,
                FieldKey::ThicknessPh,
                FieldKey::ThicknessPb,
                FieldKey::WallType,
                FieldKey::PhType,
                FieldKey::PbType,
                FieldKey::LocalType,
            ]
        );
    }

    #[test]
    fn slab_step_fields_for_single_side() {
        let fields = visible_fields_for(Step::SlabConfig, &FormState::new());

        assert_eq!(
            fields,
            vec![
                FieldKey::SlabOption,
                FieldKey::Room1Width,
                FieldKey::Room1SlabThickness,
                FieldKey::Room1Space,
                FieldKey::SlabEqualsWallThickness,
            ]
        );
    }

    #[test]
    fn slab_step_fields_for_double_side() {
        let form = FormState {
            slab_option: SlabOption::Double,
            ..FormState::new()
        };

        let fields = visible_fields_for(Step::SlabConfig, &form);

        assert_eq!(
            fields,
            vec![
                FieldKey::SlabOption,
                FieldKey::Room1Width,
                FieldKey::Room1SlabThickness,
                FieldKey::Room1Space,
                FieldKey::Room2Width,
                FieldKey::Room2SlabThickness,
                FieldKey::Room2Space,
                FieldKey::SlabEqualsWallThickness,
            ]
        );
    }

    #[test]
    fn every_field_is_shown_on_exactly_one_step_for_double_side() {
        let form = FormState {
            slab_option: SlabOption::Double,
            ..FormState::new()
        };

        let total: usize = Step::ALL
            .into_iter()
            .map(|step| visible_fields_for(step, &form).len())
            .sum();

        assert_eq!(total, FieldKey::ALL.len());
    }
}
