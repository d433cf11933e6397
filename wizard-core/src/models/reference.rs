//! Static reference lists offered by the location step.
//!
//! Membership in these lists is the only validity rule for the `region` and
//! `department` fields. Order is display order.

use serde::{Deserialize, Serialize};

/// One selectable entry: the stored code and its display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferenceEntry {
    pub code: &'static str,
    pub name: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Region {
    AuvergneRhoneAlpes,
    BourgogneFrancheComte,
    Bretagne,
    CentreValDeLoire,
    Corse,
    GrandEst,
    HautsDeFrance,
    IleDeFrance,
    Normandie,
    NouvelleAquitaine,
    Occitanie,
    PaysDeLaLoire,
    Provence,
}

impl Region {
    pub const ALL: [Region; 13] = [
        Region::AuvergneRhoneAlpes,
        Region::BourgogneFrancheComte,
        Region::Bretagne,
        Region::CentreValDeLoire,
        Region::Corse,
        Region::GrandEst,
        Region::HautsDeFrance,
        Region::IleDeFrance,
        Region::Normandie,
        Region::NouvelleAquitaine,
        Region::Occitanie,
        Region::PaysDeLaLoire,
        Region::Provence,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Self::AuvergneRhoneAlpes => "auvergne-rhone-alpes",
            Self::BourgogneFrancheComte => "bourgogne-franche-comte",
            Self::Bretagne => "bretagne",
            Self::CentreValDeLoire => "centre-val-de-loire",
            Self::Corse => "corse",
            Self::GrandEst => "grand-est",
            Self::HautsDeFrance => "hauts-de-france",
            Self::IleDeFrance => "ile-de-france",
            Self::Normandie => "normandie",
            Self::NouvelleAquitaine => "nouvelle-aquitaine",
            Self::Occitanie => "occitanie",
            Self::PaysDeLaLoire => "pays-de-la-loire",
            Self::Provence => "provence",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::AuvergneRhoneAlpes => "Auvergne-Rhône-Alpes",
            Self::BourgogneFrancheComte => "Bourgogne-Franche-Comté",
            Self::Bretagne => "Bretagne",
            Self::CentreValDeLoire => "Centre-Val de Loire",
            Self::Corse => "Corse",
            Self::GrandEst => "Grand Est",
            Self::HautsDeFrance => "Hauts-de-France",
            Self::IleDeFrance => "Île-de-France",
            Self::Normandie => "Normandie",
            Self::NouvelleAquitaine => "Nouvelle-Aquitaine",
            Self::Occitanie => "Occitanie",
            Self::PaysDeLaLoire => "Pays de la Loire",
            Self::Provence => "Provence-Alpes-Côte d'Azur",
        }
    }

    pub fn parse(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.code() == code)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Department {
    #[serde(rename = "75")]
    Paris,
    #[serde(rename = "77")]
    SeineEtMarne,
    #[serde(rename = "78")]
    Yvelines,
    #[serde(rename = "91")]
    Essonne,
    #[serde(rename = "92")]
    HautsDeSeine,
    #[serde(rename = "93")]
    SeineSaintDenis,
    #[serde(rename = "94")]
    ValDeMarne,
    #[serde(rename = "95")]
    ValDOise,
}

impl Department {
    pub const ALL: [Department; 8] = [
        Department::Paris,
        Department::SeineEtMarne,
        Department::Yvelines,
        Department::Essonne,
        Department::HautsDeSeine,
        Department::SeineSaintDenis,
        Department::ValDeMarne,
        Department::ValDOise,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Self::Paris => "75",
            Self::SeineEtMarne => "77",
            Self::Yvelines => "78",
            Self::Essonne => "91",
            Self::HautsDeSeine => "92",
            Self::SeineSaintDenis => "93",
            Self::ValDeMarne => "94",
            Self::ValDOise => "95",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Paris => "Paris (75)",
            Self::SeineEtMarne => "Seine-et-Marne (77)",
            Self::Yvelines => "Yvelines (78)",
            Self::Essonne => "Essonne (91)",
            Self::HautsDeSeine => "Hauts-de-Seine (92)",
            Self::SeineSaintDenis => "Seine-Saint-Denis (93)",
            Self::ValDeMarne => "Val-de-Marne (94)",
            Self::ValDOise => "Val-d'Oise (95)",
        }
    }

    pub fn parse(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.code() == code)
    }
}

impl From<Region> for ReferenceEntry {
    fn from(region: Region) -> Self {
        Self {
            code: region.code(),
            name: region.display_name(),
        }
    }
}

impl From<Department> for ReferenceEntry {
    fn from(department: Department) -> Self {
        Self {
            code: department.code(),
            name: department.display_name(),
        }
    }
}

/// Region choices in display order.
pub fn regions() -> Vec<ReferenceEntry> {
    Region::ALL.into_iter().map(ReferenceEntry::from).collect()
}

/// Department choices in display order.
pub fn departments() -> Vec<ReferenceEntry> {
    Department::ALL.into_iter().map(ReferenceEntry::from).collect()
}
