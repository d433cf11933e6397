//! Bilingual display text for the wizard.
//!
//! Every label is addressed by a [`LabelKey`]. English is the reference
//! locale and is complete; French entries fall back to English where the
//! text is the same in both languages.
//!
//! # Example
//!
//! ```
//! use wizard_core::labels::{Button, LabelCatalog, LabelKey};
//! use wizard_core::{FieldKey, Locale};
//!
//! assert_eq!(
//!     LabelCatalog::resolve(Locale::Fr, LabelKey::Field(FieldKey::Title)),
//!     "Titre du projet"
//! );
//! assert_eq!(LabelCatalog::resolve(Locale::En, LabelKey::Button(Button::Next)), "Next");
//! assert_eq!(LabelCatalog::resolve_name(Locale::En, "no.such.label"), "no.such.label");
//! ```

use std::fmt;

use crate::models::{Classification, FieldKey, Locale, SlabOption, Step};

/// Footer and secondary action captions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    Next,
    Previous,
    Close,
    Finish,
    Cancel,
    Technician,
}

impl Button {
    pub const ALL: [Button; 6] = [
        Button::Next,
        Button::Previous,
        Button::Close,
        Button::Finish,
        Button::Cancel,
        Button::Technician,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Next => "next",
            Self::Previous => "previous",
            Self::Close => "close",
            Self::Finish => "finish",
            Self::Cancel => "cancel",
            Self::Technician => "technician",
        }
    }
}

/// Texts that are not tied to a field, step or button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Text {
    Yes,
    No,
    WizardTitle,
    SelectPlaceholder,
    CentimeterUnit,
    DashboardTitle,
    CreateProject,
    NoProjects,
}

impl Text {
    pub const ALL: [Text; 8] = [
        Text::Yes,
        Text::No,
        Text::WizardTitle,
        Text::SelectPlaceholder,
        Text::CentimeterUnit,
        Text::DashboardTitle,
        Text::CreateProject,
        Text::NoProjects,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Yes => "yes",
            Self::No => "no",
            Self::WizardTitle => "wizard_title",
            Self::SelectPlaceholder => "select_placeholder",
            Self::CentimeterUnit => "cm",
            Self::DashboardTitle => "dashboard_title",
            Self::CreateProject => "create_project",
            Self::NoProjects => "no_projects",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LabelKey {
    Field(FieldKey),
    StepTitle(Step),
    Button(Button),
    Slab(SlabOption),
    Classification(Classification),
    Text(Text),
}

impl LabelKey {
    /// Every key the catalog knows about.
    pub fn all() -> Vec<LabelKey> {
        let fields = FieldKey::ALL.into_iter().map(Self::Field);
        let steps = Step::ALL.into_iter().map(Self::StepTitle);
        let buttons = Button::ALL.into_iter().map(Self::Button);
        let slabs = SlabOption::ALL.into_iter().map(Self::Slab);
        let classes = Classification::ALL.into_iter().map(Self::Classification);
        let texts = Text::ALL.into_iter().map(Self::Text);

        fields
            .chain(steps)
            .chain(buttons)
            .chain(slabs)
            .chain(classes)
            .chain(texts)
            .collect()
    }

    /// Parses a dotted label id such as `field.title` or `button.next`.
    pub fn parse(id: &str) -> Option<Self> {
        let (group, name) = id.trim().split_once('.')?;
        match group {
            "field" => FieldKey::parse(name).map(Self::Field),
            "step" => Step::ALL
                .into_iter()
                .find(|s| s.as_str() == name)
                .map(Self::StepTitle),
            "button" => Button::ALL
                .into_iter()
                .find(|b| b.as_str() == name)
                .map(Self::Button),
            "slab" => SlabOption::parse(name).map(Self::Slab),
            "class" => Classification::parse(name).map(Self::Classification),
            "text" => Text::ALL
                .into_iter()
                .find(|t| t.as_str() == name)
                .map(Self::Text),
            _ => None,
        }
    }
}

impl fmt::Display for LabelKey {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Self::Field(k) => write!(f, "field.{}", k.as_str()),
            Self::StepTitle(s) => write!(f, "step.{}", s.as_str()),
            Self::Button(b) => write!(f, "button.{}", b.as_str()),
            Self::Slab(s) => write!(f, "slab.{}", s.as_str()),
            Self::Classification(c) => write!(f, "class.{}", c.as_str()),
            Self::Text(t) => write!(f, "text.{}", t.as_str()),
        }
    }
}

/// Static label lookup. Resolution is pure and never fails.
pub struct LabelCatalog;

impl LabelCatalog {
    pub fn resolve(
        locale: Locale,
        key: LabelKey,
    ) -> &'static str {
        match locale {
            Locale::En => english(key),
            Locale::Fr => french(key).unwrap_or_else(|| english(key)),
        }
    }

    /// Resolves a dotted label id. Unknown ids resolve to the id itself.
    pub fn resolve_name<'a>(
        locale: Locale,
        id: &'a str,
    ) -> &'a str {
        match LabelKey::parse(id) {
            Some(key) => Self::resolve(locale, key),
            None => id,
        }
    }

    /// Field label with the unit suffix for lengths, e.g. `Opening Height (cm)`.
    pub fn field_label_with_unit(
        locale: Locale,
        key: FieldKey,
    ) -> String {
        let label = Self::resolve(locale, LabelKey::Field(key));
        if key.is_centimeters() {
            let unit = Self::resolve(locale, LabelKey::Text(Text::CentimeterUnit));
            format!("{label} ({unit})")
        } else {
            label.to_string()
        }
    }

    /// Yes/no affirmation for boolean fields.
    pub fn flag(
        locale: Locale,
        value: bool,
    ) -> &'static str {
        let text = if value { Text::Yes } else { Text::No };
        Self::resolve(locale, LabelKey::Text(text))
    }
}

fn english(key: LabelKey) -> &'static str {
    match key {
        LabelKey::Field(field) => match field {
            FieldKey::Title => "Project Title",
            FieldKey::Region => "Region",
            FieldKey::Department => "Department",
            FieldKey::Address => "Project Address",
            FieldKey::Floor => "Project Floor",
            FieldKey::FloorsAbove => "Number of Floors Above",
            FieldKey::Height => "Opening Height",
            FieldKey::Width => "Opening Width",
            FieldKey::Clearance => "Clearance",
            FieldKey::WallWidth => "Wall Width",
            FieldKey::HeightUnderSlab => "Height Under Slab",
            FieldKey::WallThickness => "Wall Thickness",
            FieldKey::ThicknessPh => "Upper Slab Thickness (PH)",
            FieldKey::ThicknessPb => "Lower Slab Thickness (PB)",
            FieldKey::WallType => "Wall Type",
            FieldKey::PhType => "Upper Slab Type (PH)",
            FieldKey::PbType => "Lower Slab Type (PB)",
            FieldKey::LocalType => "Room Type",
            FieldKey::SlabOption => "Slab Configuration",
            FieldKey::Room1Width => "Room 1 Width",
            FieldKey::Room1SlabThickness => "Room 1 Slab Thickness",
            FieldKey::Room1Space => "Room 1 Space Type",
            FieldKey::Room2Width => "Room 2 Width",
            FieldKey::Room2SlabThickness => "Room 2 Slab Thickness",
            FieldKey::Room2Space => "Room 2 Space Type",
            FieldKey::SlabEqualsWallThickness => "Slab Thickness Equals Wall Thickness",
        },
        LabelKey::StepTitle(step) => match step {
            Step::Location => "Location",
            Step::Dimensions => "Opening Dimensions",
            Step::SlabConfig => "Slab Configuration",
        },
        LabelKey::Button(button) => match button {
            Button::Next => "Next",
            Button::Previous => "Previous",
            Button::Close => "Close",
            Button::Finish => "Finish",
            Button::Cancel => "Cancel",
            Button::Technician => "Technician",
        },
        LabelKey::Slab(slab) => match slab {
            SlabOption::Single => "Single side",
            SlabOption::Double => "Double side",
        },
        LabelKey::Classification(class) => match class {
            Classification::Type1 => "Type 1",
            Classification::Type2 => "Type 2",
            Classification::Type3 => "Type 3",
        },
        LabelKey::Text(text) => match text {
            Text::Yes => "Yes",
            Text::No => "No",
            Text::WizardTitle => "Project Creation",
            Text::SelectPlaceholder => "Select...",
            Text::CentimeterUnit => "cm",
            Text::DashboardTitle => "Dashboard",
            Text::CreateProject => "Create Project",
            Text::NoProjects => "No projects yet. Create your first project!",
        },
    }
}

fn french(key: LabelKey) -> Option<&'static str> {
    let text = match key {
        LabelKey::Field(field) => match field {
            FieldKey::Title => "Titre du projet",
            FieldKey::Region => "Région",
            FieldKey::Department => "Département",
            FieldKey::Address => "Adresse du projet",
            FieldKey::Floor => "Etage du projet",
            FieldKey::FloorsAbove => "Nbr d'étages au dessus",
            FieldKey::Height => "Hauteur de l'ouverture",
            FieldKey::Width => "Largeur de l'ouverture",
            FieldKey::Clearance => "Dégagement",
            FieldKey::WallWidth => "Largeur du mur",
            FieldKey::HeightUnderSlab => "Hauteur sous dalle",
            FieldKey::WallThickness => "Epaisseur du mur",
            FieldKey::ThicknessPh => "Epaisseur PH",
            FieldKey::ThicknessPb => "Epaisseur PB",
            FieldKey::WallType => "Type de mur",
            FieldKey::PhType => "Type de PH",
            FieldKey::PbType => "Type de PB",
            FieldKey::LocalType => "Type de local",
            FieldKey::SlabOption => "Configuration de la dalle",
            FieldKey::Room1Width => "Largeur local 1",
            FieldKey::Room1SlabThickness => "Epaisseur dalle local 1",
            FieldKey::Room1Space => "Type d'espace local 1",
            FieldKey::Room2Width => "Largeur local 2",
            FieldKey::Room2SlabThickness => "Epaisseur dalle local 2",
            FieldKey::Room2Space => "Type d'espace local 2",
            FieldKey::SlabEqualsWallThickness => "Epaisseur dalle = épaisseur mur",
        },
        LabelKey::StepTitle(step) => match step {
            Step::Location => "Localisation",
            Step::Dimensions => "Dimensions de l'ouverture",
            Step::SlabConfig => "Configuration de la dalle",
        },
        LabelKey::Button(button) => match button {
            Button::Next => "Suivant",
            Button::Previous => "Précédent",
            Button::Close => "Fermer",
            Button::Finish => "Terminer",
            Button::Cancel => "Annuler",
            Button::Technician => "Technicien",
        },
        LabelKey::Slab(slab) => match slab {
            SlabOption::Single => "Simple face",
            SlabOption::Double => "Double face",
        },
        // Same text in both languages.
        LabelKey::Classification(_) => return None,
        LabelKey::Text(text) => match text {
            Text::Yes => "Oui",
            Text::No => "Non",
            Text::WizardTitle => "Création de projet",
            Text::SelectPlaceholder => "Sélectionner...",
            Text::DashboardTitle => "Tableau de bord",
            Text::CreateProject => "Créer un projet",
            Text::NoProjects => "Aucun projet pour le moment. Créez votre premier projet!",
            Text::CentimeterUnit => return None,
        },
    };
    Some(text)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn every_key_resolves_to_non_empty_text_in_both_locales() {
        for key in LabelKey::all() {
            for locale in Locale::ALL {
                assert!(!LabelCatalog::resolve(locale, key).is_empty(), "{key} / {locale}");
            }
        }
    }

    #[test]
    fn french_falls_back_to_english_when_missing() {
        let key = LabelKey::Classification(Classification::Type2);

        assert_eq!(LabelCatalog::resolve(Locale::Fr, key), "Type 2");
    }

    #[test]
    fn label_ids_round_trip_through_parse() {
        for key in LabelKey::all() {
            assert_eq!(LabelKey::parse(&key.to_string()), Some(key));
        }
    }

    #[test]
    fn resolve_name_returns_the_id_for_unknown_labels() {
        assert_eq!(LabelCatalog::resolve_name(Locale::Fr, "field.colour"), "field.colour");
        assert_eq!(LabelCatalog::resolve_name(Locale::Fr, "nonsense"), "nonsense");
        assert_eq!(LabelCatalog::resolve_name(Locale::Fr, "button.finish"), "Terminer");
    }

    #[test]
    fn length_labels_carry_the_unit() {
        assert_eq!(
            LabelCatalog::field_label_with_unit(Locale::En, FieldKey::Height),
            "Opening Height (cm)"
        );
        assert_eq!(
            LabelCatalog::field_label_with_unit(Locale::Fr, FieldKey::Title),
            "Titre du projet"
        );
    }

    #[test]
    fn flag_uses_yes_no_affirmations() {
        assert_eq!(LabelCatalog::flag(Locale::Fr, true), "Oui");
        assert_eq!(LabelCatalog::flag(Locale::En, false), "No");
    }

    #[test]
    fn captions_keep_their_exact_wording() {
        assert_eq!(
            LabelCatalog::resolve(Locale::Fr, LabelKey::Field(FieldKey::FloorsAbove)),
            "Nbr d'étages au dessus"
        );
        assert_eq!(
            LabelCatalog::resolve(Locale::En, LabelKey::Text(Text::WizardTitle)),
            "Project Creation"
        );
        assert_eq!(
            LabelCatalog::resolve(Locale::Fr, LabelKey::Button(Button::Previous)),
            "Précédent"
        );
    }
}
