pub mod labels;
pub mod models;
pub mod sink;
pub mod wizard;

pub use labels::{LabelCatalog, LabelKey};
pub use models::*;
pub use sink::{MemorySink, ProjectSink, SinkError};
pub use wizard::{
    AdvanceGate, OpenGate, SessionError, SessionStatus, Transition, WizardSession,
    visible_fields_for,
};
