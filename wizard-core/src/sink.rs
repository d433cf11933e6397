use thiserror::Error;

use crate::models::FormState;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SinkError {
    #[error("project rejected: {0}")]
    Rejected(String),
}

/// Receives projects finalized by a wizard session.
///
/// The wizard hands over the submitted [`FormState`] and forgets it; what
/// happens next (a backend call, a local store, a log line) belongs to the
/// implementation.
pub trait ProjectSink {
    fn accept(
        &mut self,
        project: FormState,
    ) -> Result<(), SinkError>;
}

/// Keeps accepted projects in memory, newest last.
#[derive(Debug, Default)]
pub struct MemorySink {
    projects: Vec<FormState>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn projects(&self) -> &[FormState] {
        &self.projects
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

impl ProjectSink for MemorySink {
    fn accept(
        &mut self,
        project: FormState,
    ) -> Result<(), SinkError> {
        self.projects.push(project);
        Ok(())
    }
}

impl<S: ProjectSink + ?Sized> ProjectSink for Box<S> {
    fn accept(
        &mut self,
        project: FormState,
    ) -> Result<(), SinkError> {
        (**self).accept(project)
    }
}
