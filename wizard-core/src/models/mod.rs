mod field;
mod form_state;
mod locale;
mod reference;
mod step;

pub use field::{Classification, FieldError, FieldKey, FieldKind, FieldValue, SlabOption};
pub use form_state::FormState;
pub use locale::Locale;
pub use reference::{Department, ReferenceEntry, Region, departments, regions};
pub use step::Step;
