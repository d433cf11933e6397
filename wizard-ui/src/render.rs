//! Plain-text rendering of the dashboard and the wizard steps.
//!
//! Rendering only reads state. Which fields appear comes from the session's
//! visible field table; this module never decides visibility itself.

use std::fmt::Write;

use wizard_core::{
    AdvanceGate, FieldKey, FieldKind, FieldValue, LabelCatalog, LabelKey, Locale, SlabOption,
    WizardSession,
    labels::{Button, Text},
    models::{Classification, departments, regions},
};

/// Text shown for one value, in the given locale.
pub fn display_value(
    locale: Locale,
    kind: FieldKind,
    value: &FieldValue,
) -> String {
    match value {
        FieldValue::Unset => match kind {
            FieldKind::Region | FieldKind::Department | FieldKind::Classification => {
                LabelCatalog::resolve(locale, LabelKey::Text(Text::SelectPlaceholder)).to_string()
            }
            _ => String::new(),
        },
        FieldValue::Flag(b) => LabelCatalog::flag(locale, *b).to_string(),
        FieldValue::Slab(s) => LabelCatalog::resolve(locale, LabelKey::Slab(*s)).to_string(),
        FieldValue::Classification(c) => {
            LabelCatalog::resolve(locale, LabelKey::Classification(*c)).to_string()
        }
        other => other.to_string(),
    }
}

fn button(
    locale: Locale,
    b: Button,
) -> String {
    format!("[{}]", LabelCatalog::resolve(locale, LabelKey::Button(b)))
}

pub fn render_dashboard(
    locale: Locale,
    projects: &[String],
) -> String {
    let mut out = String::new();
    let title = LabelCatalog::resolve(locale, LabelKey::Text(Text::DashboardTitle));
    let create = LabelCatalog::resolve(locale, LabelKey::Text(Text::CreateProject));
    let toggle = locale.toggled().as_str().to_ascii_uppercase();

    let _ = writeln!(out, "{title}    [{toggle}]  [+ {create}]");
    let _ = writeln!(out);
    if projects.is_empty() {
        let _ = write!(
            out,
            "{}",
            LabelCatalog::resolve(locale, LabelKey::Text(Text::NoProjects))
        );
    } else {
        for (i, project) in projects.iter().enumerate() {
            if i > 0 {
                let _ = writeln!(out);
            }
            let _ = write!(out, "  {}. {project}", i + 1);
        }
    }
    out
}

/// Renders the current step with its visible fields and footer buttons.
/// A closed session renders as an empty string.
pub fn render_step<G: AdvanceGate>(session: &WizardSession<G>) -> String {
    let (Some(step), Some(form)) = (session.current_step(), session.form()) else {
        return String::new();
    };
    let locale = session.locale();
    let mut out = String::new();

    let _ = writeln!(out, "{}", session.label(LabelKey::Text(Text::WizardTitle)));
    let _ = writeln!(
        out,
        "[{}/{}] {}",
        step.number(),
        wizard_core::Step::COUNT,
        session.label(LabelKey::StepTitle(step))
    );

    let rows: Vec<(String, String)> = session
        .visible_fields()
        .into_iter()
        .map(|key| {
            (
                session.field_label(key),
                display_value(locale, key.kind(), &form.get(key)),
            )
        })
        .collect();
    let width = rows
        .iter()
        .map(|(label, _)| label.chars().count())
        .max()
        .unwrap_or(0);
    for (label, value) in rows {
        let pad = width - label.chars().count();
        let _ = writeln!(out, "  {label}{:pad$}  {value}", "");
    }

    if let Some(extra) = session.extra_button() {
        let _ = writeln!(out, "  {}", button(locale, extra));
    }

    let back = session.back_button().map(|b| button(locale, b));
    let forward = session.forward_button().map(|b| button(locale, b));
    let _ = write!(
        out,
        "{}  {}",
        back.unwrap_or_default(),
        forward.unwrap_or_default()
    );
    out
}

/// Accepted choices for an enumerated field, one `code  name` per line.
pub fn render_choices(
    locale: Locale,
    key: FieldKey,
) -> Option<String> {
    let lines: Vec<String> = match key.kind() {
        FieldKind::Region => regions()
            .into_iter()
            .map(|e| format!("{:<24}  {}", e.code, e.name))
            .collect(),
        FieldKind::Department => departments()
            .into_iter()
            .map(|e| format!("{:<4}  {}", e.code, e.name))
            .collect(),
        FieldKind::Classification => Classification::ALL
            .into_iter()
            .map(|c| {
                format!(
                    "{:<6}  {}",
                    c.as_str(),
                    LabelCatalog::resolve(locale, LabelKey::Classification(c))
                )
            })
            .collect(),
        FieldKind::Slab => SlabOption::ALL
            .into_iter()
            .map(|s| format!("{:<6}  {}", s.as_str(), LabelCatalog::resolve(locale, LabelKey::Slab(s))))
            .collect(),
        FieldKind::Flag => vec![format!(
            "yes/no  {}/{}",
            LabelCatalog::flag(locale, true),
            LabelCatalog::flag(locale, false)
        )],
        _ => return None,
    };
    Some(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn dashboard_shows_empty_state_in_french() {
        let text = render_dashboard(Locale::Fr, &[]);

        assert!(text.starts_with("Tableau de bord"));
        assert!(text.contains("[EN]"));
        assert!(text.contains("Créer un projet"));
        assert!(text.ends_with("Créez votre premier projet!"));
    }

    #[test]
    fn dashboard_lists_created_projects() {
        let text = render_dashboard(Locale::En, &["Tour A".to_string()]);

        assert!(text.contains("[FR]"));
        assert!(text.contains("1. Tour A"));
        assert!(!text.contains("No projects yet"));
    }

    #[test]
    fn first_step_shows_close_and_next() {
        let session = WizardSession::open(Locale::En);

        let text = render_step(&session);

        assert!(text.starts_with("Project Creation\n[1/3] Location"));
        assert!(text.contains("Project Title"));
        assert!(text.contains("Region"));
        assert!(text.ends_with("[Close]  [Next]"));
    }

    #[test]
    fn second_step_shows_units_and_technician() {
        let mut session = WizardSession::open(Locale::Fr);
        session.advance().unwrap();
        session.set_field_raw("height", "210").unwrap();

        let text = render_step(&session);

        assert!(text.contains("Hauteur de l'ouverture (cm)"));
        assert!(text.contains("210"));
        assert!(text.contains("[Technicien]"));
        assert!(text.ends_with("[Précédent]  [Suivant]"));
    }

    #[test]
    fn last_step_hides_room2_for_single_slab() {
        let mut session = WizardSession::open(Locale::En);
        session.advance().unwrap();
        session.advance().unwrap();

        let single = render_step(&session);
        session.set_slab_option(SlabOption::Double).unwrap();
        let double = render_step(&session);

        assert!(!single.contains("Room 2 Width"));
        assert!(double.contains("Room 2 Width"));
        assert!(double.ends_with("[Previous]  [Finish]"));
    }

    #[test]
    fn closed_session_renders_nothing() {
        let mut session = WizardSession::open(Locale::En);
        session.cancel().unwrap();

        assert_eq!(render_step(&session), "");
    }

    #[test]
    fn display_value_uses_locale_for_enumerations() {
        assert_eq!(
            display_value(Locale::Fr, FieldKind::Flag, &FieldValue::Flag(true)),
            "Oui"
        );
        assert_eq!(
            display_value(Locale::Fr, FieldKind::Region, &FieldValue::Unset),
            "Sélectionner..."
        );
        assert_eq!(
            display_value(Locale::En, FieldKind::Centimeters, &FieldValue::Unset),
            ""
        );
    }

    #[test]
    fn choices_are_listed_for_enumerations_only() {
        let regions = render_choices(Locale::En, FieldKey::Region).unwrap();

        assert_eq!(regions.lines().count(), 13);
        assert!(regions.contains("ile-de-france"));
        assert!(render_choices(Locale::En, FieldKey::Title).is_none());
    }
}
