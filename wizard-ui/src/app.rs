//! Dashboard controller: owns the display language, the optional open
//! wizard and the sink that receives finished projects.

use std::fmt::Write;

use thiserror::Error;
use tracing::{debug, info, warn};
use wizard_core::{
    FieldValue, LabelCatalog, LabelKey, Locale, ProjectSink, SessionError, SessionStatus,
    SinkError, Transition, WizardSession, labels::Button,
};

use crate::{
    command::{Command, CommandError, HELP},
    render::{render_choices, render_dashboard, render_step},
};

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Command(#[from] CommandError),

    #[error(transparent)]
    Session(#[from] SessionError),

    /// The sink refused a submitted project. The project is kept until
    /// `finish` delivers it or `cancel` drops it.
    #[error("{0}; project kept ('finish' retries, 'cancel' discards)")]
    Delivery(SinkError),

    #[error("no wizard is open (type 'new')")]
    NoWizard,

    #[error("a wizard is already open")]
    WizardAlreadyOpen,

    #[error("'{0}' is not available on this step")]
    Unavailable(&'static str),
}

/// What the front end should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Show(String),
    Quit,
}

pub struct App<S> {
    locale: Locale,
    session: Option<WizardSession>,
    sink: S,
    projects: Vec<String>,
}

impl<S: ProjectSink> App<S> {
    pub fn new(
        locale: Locale,
        sink: S,
    ) -> Self {
        Self {
            locale,
            session: None,
            sink,
            projects: Vec::new(),
        }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn session(&self) -> Option<&WizardSession> {
        self.session.as_ref()
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Titles of the projects created so far, oldest first.
    pub fn projects(&self) -> &[String] {
        &self.projects
    }

    /// The wizard step while one is open, the dashboard otherwise.
    pub fn screen(&self) -> String {
        match &self.session {
            Some(session) if !session.is_closed() => render_step(session),
            _ => render_dashboard(self.locale, &self.projects),
        }
    }

    pub fn handle_line(
        &mut self,
        line: &str,
    ) -> Result<Outcome, AppError> {
        let command = Command::parse(line)?;
        self.handle(command)
    }

    pub fn handle(
        &mut self,
        command: Command,
    ) -> Result<Outcome, AppError> {
        debug!(?command, "handling command");
        match command {
            Command::New => {
                if self.session.is_some() {
                    return Err(AppError::WizardAlreadyOpen);
                }
                info!(locale = %self.locale, "wizard opened");
                self.session = Some(WizardSession::open(self.locale));
            }
            Command::ToggleLang => self.switch_locale(self.locale.toggled())?,
            Command::Lang(locale) => self.switch_locale(locale)?,
            Command::Set { field, value } => {
                self.session_mut()?.set_field_raw(&field, &value)?;
            }
            Command::Slab(option) => self.session_mut()?.set_slab_option(option)?,
            Command::Next => {
                let transition = self.session_mut()?.advance()?;
                self.apply(transition)?;
            }
            Command::Back => {
                let transition = self.session_mut()?.retreat()?;
                self.apply(transition)?;
            }
            Command::Cancel => {
                let session = self.session_mut()?;
                if session.status() == SessionStatus::Submitted {
                    warn!("undelivered project discarded");
                    self.session = None;
                } else {
                    let transition = session.cancel()?;
                    self.apply(transition)?;
                }
            }
            Command::Finish => {
                let session = self.session_mut()?;
                let transition = if session.status() == SessionStatus::Submitted {
                    // Delivery failed earlier; the session still holds the form.
                    session
                        .snapshot()
                        .map(Transition::Submitted)
                        .ok_or(SessionError::SessionClosed)?
                } else {
                    if session.forward_button() != Some(Button::Finish) {
                        return Err(AppError::Unavailable("finish"));
                    }
                    session.submit()?
                };
                self.apply(transition)?;
            }
            Command::Technician => {
                let session = self.session_mut()?;
                if session.extra_button() != Some(Button::Technician) {
                    return Err(AppError::Unavailable("technician"));
                }
                info!("technician requested");
                let label = LabelCatalog::resolve(self.locale, LabelKey::Button(Button::Technician));
                return Ok(Outcome::Show(format!("{label}: OK\n\n{}", self.screen())));
            }
            Command::Fields => return Ok(Outcome::Show(self.choices()?)),
            Command::Show => {
                let session = self.session.as_ref().ok_or(AppError::NoWizard)?;
                let text = session.snapshot().map(|form| form.to_string()).unwrap_or_default();
                return Ok(Outcome::Show(text));
            }
            Command::Help => return Ok(Outcome::Show(HELP.to_string())),
            Command::Quit => return Ok(Outcome::Quit),
        }
        Ok(Outcome::Show(self.screen()))
    }

    fn session_mut(&mut self) -> Result<&mut WizardSession, AppError> {
        self.session.as_mut().ok_or(AppError::NoWizard)
    }

    fn switch_locale(
        &mut self,
        locale: Locale,
    ) -> Result<(), AppError> {
        if let Some(session) = self.session.as_mut().filter(|s| !s.is_closed()) {
            session.set_locale(locale)?;
        }
        debug!(from = %self.locale, to = %locale, "display language changed");
        self.locale = locale;
        Ok(())
    }

    /// Closes the wizard on a terminal transition and hands a submitted
    /// form to the sink. A submitted session stays open until the sink
    /// accepts its form.
    fn apply(
        &mut self,
        transition: Transition,
    ) -> Result<(), AppError> {
        match transition {
            Transition::Moved(step) => debug!(%step, "step changed"),
            Transition::Cancelled => self.session = None,
            Transition::Submitted(form) => {
                let title = if form.title.trim().is_empty() {
                    FieldValue::UNSET_TEXT.to_string()
                } else {
                    form.title.clone()
                };
                if let Err(e) = self.sink.accept(form) {
                    warn!(error = %e, "project delivery failed");
                    return Err(AppError::Delivery(e));
                }
                self.session = None;
                self.projects.push(title);
            }
        }
        Ok(())
    }

    fn choices(&self) -> Result<String, AppError> {
        let session = self.session.as_ref().ok_or(AppError::NoWizard)?;
        let mut out = String::new();
        for key in session.visible_fields() {
            let _ = writeln!(out, "{} ({key})", session.field_label(key));
            if let Some(choices) = render_choices(self.locale, key) {
                for line in choices.lines() {
                    let _ = writeln!(out, "    {line}");
                }
            }
        }
        Ok(out.trim_end().to_string())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use wizard_core::{FormState, MemorySink, Step};

    use super::*;

    fn app() -> App<MemorySink> {
        App::new(Locale::Fr, MemorySink::new())
    }

    // =========================================================================
    // dashboard
    // =========================================================================

    #[test]
    fn starts_on_the_dashboard_in_french() {
        let app = app();

        assert!(app.session().is_none());
        assert!(app.screen().starts_with("Tableau de bord"));
    }

    #[test]
    fn toggle_switches_the_dashboard_language() {
        let mut app = app();

        app.handle(Command::ToggleLang).unwrap();

        assert_eq!(app.locale(), Locale::En);
        assert!(app.screen().starts_with("Dashboard"));
    }

    #[test]
    fn wizard_commands_need_an_open_wizard() {
        let mut app = app();

        assert!(matches!(app.handle(Command::Next), Err(AppError::NoWizard)));
        assert!(matches!(
            app.handle_line("set title X"),
            Err(AppError::NoWizard)
        ));
    }

    #[test]
    fn second_new_is_refused() {
        let mut app = app();
        app.handle(Command::New).unwrap();

        assert!(matches!(
            app.handle(Command::New),
            Err(AppError::WizardAlreadyOpen)
        ));
    }

    // =========================================================================
    // wizard
    // =========================================================================

    #[test]
    fn wizard_inherits_and_follows_the_language() {
        let mut app = app();
        app.handle(Command::New).unwrap();

        app.handle(Command::Lang(Locale::En)).unwrap();

        assert_eq!(app.session().unwrap().locale(), Locale::En);
        assert!(app.screen().starts_with("Project Creation"));
    }

    #[test]
    fn back_on_first_step_returns_to_dashboard() {
        let mut app = app();
        app.handle(Command::New).unwrap();
        app.handle_line("set title Brouillon").unwrap();

        app.handle(Command::Back).unwrap();

        assert!(app.session().is_none());
        assert!(app.projects().is_empty());
        assert!(app.sink().is_empty());
    }

    #[test]
    fn finish_is_only_offered_on_the_last_step() {
        let mut app = app();
        app.handle(Command::New).unwrap();

        let result = app.handle(Command::Finish);

        assert!(matches!(result, Err(AppError::Unavailable("finish"))));
        assert_eq!(
            app.session().unwrap().status(),
            SessionStatus::Active(Step::Location)
        );
    }

    #[test]
    fn technician_is_only_offered_on_dimensions() {
        let mut app = app();
        app.handle(Command::New).unwrap();

        assert!(matches!(
            app.handle(Command::Technician),
            Err(AppError::Unavailable("technician"))
        ));

        app.handle(Command::Next).unwrap();
        let Outcome::Show(text) = app.handle(Command::Technician).unwrap() else {
            panic!("expected text");
        };
        assert!(text.starts_with("Technicien: OK"));
    }

    #[test]
    fn submission_reaches_the_sink_and_the_dashboard() {
        let mut app = app();
        app.handle(Command::New).unwrap();
        app.handle_line("set title Tour A").unwrap();
        app.handle(Command::Next).unwrap();
        app.handle(Command::Next).unwrap();

        let outcome = app.handle(Command::Finish).unwrap();

        assert!(app.session().is_none());
        assert_eq!(app.projects(), ["Tour A".to_string()]);
        assert_eq!(app.sink().projects()[0].title, "Tour A");
        assert!(matches!(outcome, Outcome::Show(text) if text.contains("1. Tour A")));
    }

    #[test]
    fn rejected_value_keeps_the_wizard_open() {
        let mut app = app();
        app.handle(Command::New).unwrap();
        app.handle(Command::Next).unwrap();

        let result = app.handle_line("set height abc");

        assert!(matches!(result, Err(AppError::Session(_))));
        assert_eq!(app.session().unwrap().form().unwrap().height, None);
    }

    #[test]
    fn fields_lists_choices_for_visible_fields() {
        let mut app = app();
        app.handle(Command::New).unwrap();

        let Outcome::Show(text) = app.handle(Command::Fields).unwrap() else {
            panic!("expected text");
        };

        assert!(text.contains("Région (region)"));
        assert!(text.contains("    75    Paris (75)"));
    }

    // =========================================================================
    // delivery
    // =========================================================================

    /// Refuses the first `failures` projects, then collects.
    struct FlakySink {
        failures: usize,
        accepted: Vec<FormState>,
    }

    impl ProjectSink for FlakySink {
        fn accept(
            &mut self,
            project: FormState,
        ) -> Result<(), SinkError> {
            if self.failures > 0 {
                self.failures -= 1;
                return Err(SinkError::Rejected("backend down".to_string()));
            }
            self.accepted.push(project);
            Ok(())
        }
    }

    fn flaky_app(failures: usize) -> App<FlakySink> {
        let mut app = App::new(
            Locale::En,
            FlakySink {
                failures,
                accepted: Vec::new(),
            },
        );
        app.handle(Command::New).unwrap();
        app.handle_line("set title Tour A").unwrap();
        app.handle(Command::Next).unwrap();
        app.handle(Command::Next).unwrap();
        app
    }

    #[test]
    fn refused_delivery_keeps_the_project() {
        let mut app = flaky_app(usize::MAX);

        let result = app.handle(Command::Finish);

        assert!(matches!(
            result,
            Err(AppError::Delivery(SinkError::Rejected(_)))
        ));
        let session = app.session().expect("session kept for retry");
        assert_eq!(session.status(), SessionStatus::Submitted);
        assert_eq!(session.snapshot().unwrap().title, "Tour A");
        assert!(app.projects().is_empty());
        assert!(app.screen().starts_with("Dashboard"));

        app.handle(Command::ToggleLang).unwrap();
        assert!(app.screen().starts_with("Tableau de bord"));
    }

    #[test]
    fn finish_retries_a_refused_delivery() {
        let mut app = flaky_app(1);
        assert!(app.handle(Command::Finish).is_err());

        app.handle(Command::Finish).unwrap();

        assert!(app.session().is_none());
        assert_eq!(app.projects(), ["Tour A".to_string()]);
        assert_eq!(app.sink().accepted.len(), 1);
        assert_eq!(app.sink().accepted[0].title, "Tour A");
    }

    #[test]
    fn cancel_discards_a_refused_delivery() {
        let mut app = flaky_app(1);
        assert!(app.handle(Command::Finish).is_err());

        app.handle(Command::Cancel).unwrap();

        assert!(app.session().is_none());
        assert!(app.projects().is_empty());
        assert!(app.sink().accepted.is_empty());
        app.handle(Command::New).unwrap();
    }

    #[test]
    fn untitled_projects_use_the_unset_placeholder() {
        let mut app = app();
        app.handle(Command::New).unwrap();
        app.handle(Command::Next).unwrap();
        app.handle(Command::Next).unwrap();

        app.handle(Command::Finish).unwrap();

        assert_eq!(app.projects(), [FieldValue::UNSET_TEXT.to_string()]);
    }

    #[test]
    fn quit_is_reported() {
        assert_eq!(app().handle(Command::Quit).unwrap(), Outcome::Quit);
    }
}
