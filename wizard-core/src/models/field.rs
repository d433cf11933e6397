//! Field schema of the project wizard.
//!
//! Every collected value is addressed by a [`FieldKey`]. A key knows its wire
//! name, the kind of value it accepts, the step that displays it and, for
//! branch fields, the slab option under which it is visible. The visible
//! field table of each step is derived from this metadata alone.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::reference::{Department, Region};
use super::step::Step;

/// Errors raised when a field update is rejected.
///
/// A rejected update never changes the stored value.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FieldError {
    /// The value does not match the field's type or range.
    #[error("invalid value '{input}' for field '{field}': {reason}")]
    InvalidFieldValue {
        field: FieldKey,
        input: String,
        reason: &'static str,
    },

    /// The name does not belong to the field schema.
    #[error("unknown field '{0}'")]
    UnknownField(String),
}

/// Construction category shared by wall, floor and room classifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    Type1,
    Type2,
    Type3,
}

impl Classification {
    pub const ALL: [Classification; 3] = [
        Classification::Type1,
        Classification::Type2,
        Classification::Type3,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Type1 => "type1",
            Self::Type2 => "type2",
            Self::Type3 => "type3",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "type1" => Some(Self::Type1),
            "type2" => Some(Self::Type2),
            "type3" => Some(Self::Type3),
            _ => None,
        }
    }
}

/// Whether the opening crosses a slab on one side or on both sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlabOption {
    #[default]
    Single,
    Double,
}

impl SlabOption {
    pub const ALL: [SlabOption; 2] = [SlabOption::Single, SlabOption::Double];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Double => "double",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "single" => Some(Self::Single),
            "double" => Some(Self::Double),
            _ => None,
        }
    }
}

/// The type of value a field stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// Free text.
    Text,
    /// A code from [`Region::ALL`].
    Region,
    /// A code from [`Department::ALL`].
    Department,
    /// A floor number; negative values are basement levels.
    Floor,
    /// A non-negative count.
    Count,
    /// A non-negative length in centimeters.
    Centimeters,
    Classification,
    Slab,
    Flag,
}

impl FieldKind {
    /// Kinds that may be cleared back to [`FieldValue::Unset`].
    pub fn is_optional(&self) -> bool {
        !matches!(self, Self::Text | Self::Slab | Self::Flag)
    }
}

/// Closed set of every field the wizard collects, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldKey {
    // Location
    Title,
    Region,
    Department,
    Address,
    Floor,
    FloorsAbove,

    // Opening geometry
    Height,
    Width,
    Clearance,
    WallWidth,
    HeightUnderSlab,
    WallThickness,
    ThicknessPh,
    ThicknessPb,

    // Classification
    WallType,
    PhType,
    PbType,
    LocalType,

    // Slab configuration
    SlabOption,
    Room1Width,
    Room1SlabThickness,
    Room1Space,
    Room2Width,
    Room2SlabThickness,
    Room2Space,
    SlabEqualsWallThickness,
}

impl FieldKey {
    pub const ALL: [FieldKey; 26] = [
        FieldKey::Title,
        FieldKey::Region,
        FieldKey::Department,
        FieldKey::Address,
        FieldKey::Floor,
        FieldKey::FloorsAbove,
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
        FieldKey::SlabOption,
        FieldKey::Room1Width,
        FieldKey::Room1SlabThickness,
        FieldKey::Room1Space,
        FieldKey::Room2Width,
        FieldKey::Room2SlabThickness,
        FieldKey::Room2Space,
        FieldKey::SlabEqualsWallThickness,
    ];

    /// Wire name, as used by the form and in serialized snapshots.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Region => "region",
            Self::Department => "department",
            Self::Address => "address",
            Self::Floor => "floor",
            Self::FloorsAbove => "floorsAbove",
            Self::Height => "height",
            Self::Width => "width",
            Self::Clearance => "clearance",
            Self::WallWidth => "wallWidth",
            Self::HeightUnderSlab => "heightUnderSlab",
            Self::WallThickness => "wallThickness",
            Self::ThicknessPh => "thicknessPH",
            Self::ThicknessPb => "thicknessPB",
            Self::WallType => "wallType",
            Self::PhType => "phType",
            Self::PbType => "pbType",
            Self::LocalType => "localType",
            Self::SlabOption => "slabOption",
            Self::Room1Width => "room1Width",
            Self::Room1SlabThickness => "room1SlabThickness",
            Self::Room1Space => "room1Space",
            Self::Room2Width => "room2Width",
            Self::Room2SlabThickness => "room2SlabThickness",
            Self::Room2Space => "room2Space",
            Self::SlabEqualsWallThickness => "slabEqualsWallThickness",
        }
    }

    /// Looks up a key by wire name. Matching ignores ASCII case.
    pub fn parse(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|key| key.as_str().eq_ignore_ascii_case(name))
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            Self::Title | Self::Address => FieldKind::Text,
            Self::Region => FieldKind::Region,
            Self::Department => FieldKind::Department,
            Self::Floor => FieldKind::Floor,
            Self::FloorsAbove => FieldKind::Count,
            Self::Height
            | Self::Width
            | Self::Clearance
            | Self::WallWidth
            | Self::HeightUnderSlab
            | Self::WallThickness
            | Self::ThicknessPh
            | Self::ThicknessPb
            | Self::Room1Width
            | Self::Room1SlabThickness
            | Self::Room2Width
            | Self::Room2SlabThickness => FieldKind::Centimeters,
            Self::WallType
            | Self::PhType
            | Self::PbType
            | Self::LocalType
            | Self::Room1Space
            | Self::Room2Space => FieldKind::Classification,
            Self::SlabOption => FieldKind::Slab,
            Self::SlabEqualsWallThickness => FieldKind::Flag,
        }
    }

    /// The step that displays this field.
    pub fn step(&self) -> Step {
        match self {
            Self::Title
            | Self::Region
            | Self::Department
            | Self::Address
            | Self::Floor
            | Self::FloorsAbove => Step::Location,
            Self::Height
            | Self::Width
            | Self::Clearance
            | Self::WallWidth
            | Self::HeightUnderSlab
            | Self::WallThickness
            | Self::ThicknessPh
            | Self::ThicknessPb
            | Self::WallType
            | Self::PhType
            | Self::PbType
            | Self::LocalType => Step::Dimensions,
            Self::SlabOption
            | Self::Room1Width
            | Self::Room1SlabThickness
            | Self::Room1Space
            | Self::Room2Width
            | Self::Room2SlabThickness
            | Self::Room2Space
            | Self::SlabEqualsWallThickness => Step::SlabConfig,
        }
    }

    /// Branch condition: the slab option under which this field is shown.
    /// `None` means the field is always shown on its step.
    pub fn shown_when(&self) -> Option<SlabOption> {
        match self {
            Self::Room2Width | Self::Room2SlabThickness | Self::Room2Space => {
                Some(SlabOption::Double)
            }
            _ => None,
        }
    }

    /// Whether this field is active for the given slab option.
    pub fn is_active_for(
        &self,
        slab: SlabOption,
    ) -> bool {
        self.shown_when().is_none_or(|required| required == slab)
    }

    pub fn is_centimeters(&self) -> bool {
        self.kind() == FieldKind::Centimeters
    }
}

impl fmt::Display for FieldKey {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldKey {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| FieldError::UnknownField(s.to_string()))
    }
}

/// A typed value for one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Region(Region),
    Department(Department),
    Floor(i32),
    Count(u32),
    Centimeters(Decimal),
    Classification(Classification),
    Slab(SlabOption),
    Flag(bool),
    /// No value selected or entered.
    Unset,
}

impl FieldValue {
    /// How an unset value, or an empty title in a list, is shown.
    pub const UNSET_TEXT: &'static str = "—";

    /// Whether this value may be stored in a field of the given kind.
    pub fn fits(
        &self,
        kind: FieldKind,
    ) -> bool {
        match self {
            Self::Text(_) => kind == FieldKind::Text,
            Self::Region(_) => kind == FieldKind::Region,
            Self::Department(_) => kind == FieldKind::Department,
            Self::Floor(_) => kind == FieldKind::Floor,
            Self::Count(_) => kind == FieldKind::Count,
            Self::Centimeters(_) => kind == FieldKind::Centimeters,
            Self::Classification(_) => kind == FieldKind::Classification,
            Self::Slab(_) => kind == FieldKind::Slab,
            Self::Flag(_) => kind == FieldKind::Flag,
            Self::Unset => kind.is_optional(),
        }
    }

    pub fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }

    /// Parses raw user input for a field of the given kind.
    ///
    /// Free text is stored exactly as typed. Every other kind is trimmed
    /// first, and empty input clears optional kinds. Lengths accept a comma
    /// as decimal separator and spaces as digit grouping.
    pub fn parse(
        kind: FieldKind,
        raw: &str,
    ) -> Result<Self, &'static str> {
        let input = raw.trim();

        if input.is_empty() {
            return match kind {
                FieldKind::Text => Ok(Self::Text(raw.to_string())),
                FieldKind::Slab => Err("a slab option is required"),
                FieldKind::Flag => Err("expected yes or no"),
                _ => Ok(Self::Unset),
            };
        }

        match kind {
            FieldKind::Text => Ok(Self::Text(raw.to_string())),
            FieldKind::Region => Region::parse(input)
                .map(Self::Region)
                .ok_or("not a known region code"),
            FieldKind::Department => Department::parse(input)
                .map(Self::Department)
                .ok_or("not a known department code"),
            FieldKind::Floor => input
                .parse::<i32>()
                .map(Self::Floor)
                .map_err(|_| "expected a whole number"),
            FieldKind::Count => input
                .parse::<u32>()
                .map(Self::Count)
                .map_err(|_| "expected a non-negative whole number"),
            FieldKind::Centimeters => parse_centimeters(input).map(Self::Centimeters),
            FieldKind::Classification => Classification::parse(input)
                .map(Self::Classification)
                .ok_or("expected type1, type2 or type3"),
            FieldKind::Slab => SlabOption::parse(input)
                .map(Self::Slab)
                .ok_or("expected single or double"),
            FieldKind::Flag => parse_flag(input).map(Self::Flag),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Region(r) => f.write_str(r.display_name()),
            Self::Department(d) => f.write_str(d.display_name()),
            Self::Floor(n) => write!(f, "{n}"),
            Self::Count(n) => write!(f, "{n}"),
            Self::Centimeters(d) => write!(f, "{d}"),
            Self::Classification(c) => f.write_str(c.as_str()),
            Self::Slab(s) => f.write_str(s.as_str()),
            Self::Flag(b) => write!(f, "{b}"),
            Self::Unset => f.write_str(Self::UNSET_TEXT),
        }
    }
}

/// Normalizes a length for decimal parsing: drops digit-grouping spaces and
/// reads a comma as the decimal separator.
fn normalize_length_input(s: &str) -> String {
    s.chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| if c == ',' { '.' } else { c })
        .collect()
}

fn parse_centimeters(s: &str) -> Result<Decimal, &'static str> {
    let value: Decimal = normalize_length_input(s)
        .parse()
        .map_err(|_| "expected a number of centimeters")?;

    if value.is_sign_negative() && !value.is_zero() {
        return Err("length must not be negative");
    }
    Ok(value)
}

fn parse_flag(s: &str) -> Result<bool, &'static str> {
    match s.to_ascii_lowercase().as_str() {
        "true" | "yes" | "oui" | "y" | "o" | "1" => Ok(true),
        "false" | "no" | "non" | "n" | "0" => Ok(false),
        _ => Err("expected yes or no"),
    }
}
