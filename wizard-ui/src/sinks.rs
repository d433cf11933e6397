use tracing::{debug, info};
use wizard_core::{FormState, ProjectSink, SinkError};

/// Sink used by the terminal front end: records each submitted project in
/// the log and keeps a running count.
#[derive(Debug, Default)]
pub struct LogSink {
    accepted: usize,
}

impl LogSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn accepted(&self) -> usize {
        self.accepted
    }
}

impl ProjectSink for LogSink {
    fn accept(
        &mut self,
        project: FormState,
    ) -> Result<(), SinkError> {
        self.accepted += 1;
        info!(
            title = %project.title,
            slab = project.slab_option.as_str(),
            fields = project.relevant_values().len(),
            "project created"
        );
        debug!("\n{project}");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn counts_accepted_projects() {
        let mut sink = LogSink::new();

        sink.accept(FormState::new()).unwrap();
        sink.accept(FormState::new()).unwrap();

        assert_eq!(sink.accepted(), 2);
    }
}
