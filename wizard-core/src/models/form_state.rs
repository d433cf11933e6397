use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::field::{Classification, FieldError, FieldKey, FieldValue, SlabOption};
use super::reference::{Department, Region};

/// Every value collected by one wizard session.
///
/// Fields are stored flat, independent of the step that displays them.
/// Updates go through [`FormState::set`], which validates the value against
/// the field's kind and touches nothing else.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormState {
    // Location
    pub title: String,
    pub region: Option<Region>,
    pub department: Option<Department>,
    pub address: String,
    pub floor: Option<i32>,
    pub floors_above: Option<u32>,

    // Opening geometry, in centimeters
    pub height: Option<Decimal>,
    pub width: Option<Decimal>,
    pub clearance: Option<Decimal>,
    pub wall_width: Option<Decimal>,
    pub height_under_slab: Option<Decimal>,
    pub wall_thickness: Option<Decimal>,
    #[serde(rename = "thicknessPH")]
    pub thickness_ph: Option<Decimal>,
    #[serde(rename = "thicknessPB")]
    pub thickness_pb: Option<Decimal>,

    // Classification
    pub wall_type: Option<Classification>,
    pub ph_type: Option<Classification>,
    pub pb_type: Option<Classification>,
    pub local_type: Option<Classification>,

    // Slab configuration
    pub slab_option: SlabOption,
    pub room1_width: Option<Decimal>,
    pub room1_slab_thickness: Option<Decimal>,
    pub room1_space: Option<Classification>,
    pub room2_width: Option<Decimal>,
    pub room2_slab_thickness: Option<Decimal>,
    pub room2_space: Option<Classification>,
    pub slab_equals_wall_thickness: bool,
}

fn opt<T>(
    value: Option<T>,
    wrap: impl FnOnce(T) -> FieldValue,
) -> FieldValue {
    value.map_or(FieldValue::Unset, wrap)
}

impl FormState {
    /// A blank form: empty text, nothing selected, single-side slab.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads the current value of a field.
    pub fn get(
        &self,
        key: FieldKey,
    ) -> FieldValue {
        match key {
            FieldKey::Title => FieldValue::Text(self.title.clone()),
            FieldKey::Region => opt(self.region, FieldValue::Region),
            FieldKey::Department => opt(self.department, FieldValue::Department),
            FieldKey::Address => FieldValue::Text(self.address.clone()),
            FieldKey::Floor => opt(self.floor, FieldValue::Floor),
            FieldKey::FloorsAbove => opt(self.floors_above, FieldValue::Count),
            FieldKey::Height => opt(self.height, FieldValue::Centimeters),
            FieldKey::Width => opt(self.width, FieldValue::Centimeters),
            FieldKey::Clearance => opt(self.clearance, FieldValue::Centimeters),
            FieldKey::WallWidth => opt(self.wall_width, FieldValue::Centimeters),
            FieldKey::HeightUnderSlab => opt(self.height_under_slab, FieldValue::Centimeters),
            FieldKey::WallThickness => opt(self.wall_thickness, FieldValue::Centimeters),
            FieldKey::ThicknessPh => opt(self.thickness_ph, FieldValue::Centimeters),
            FieldKey::ThicknessPb => opt(self.thickness_pb, FieldValue::Centimeters),
            FieldKey::WallType => opt(self.wall_type, FieldValue::Classification),
            FieldKey::PhType => opt(self.ph_type, FieldValue::Classification),
            FieldKey::PbType => opt(self.pb_type, FieldValue::Classification),
            FieldKey::LocalType => opt(self.local_type, FieldValue::Classification),
            FieldKey::SlabOption => FieldValue::Slab(self.slab_option),
            FieldKey::Room1Width => opt(self.room1_width, FieldValue::Centimeters),
            FieldKey::Room1SlabThickness => {
                opt(self.room1_slab_thickness, FieldValue::Centimeters)
            }
            FieldKey::Room1Space => opt(self.room1_space, FieldValue::Classification),
            FieldKey::Room2Width => opt(self.room2_width, FieldValue::Centimeters),
            FieldKey::Room2SlabThickness => {
                opt(self.room2_slab_thickness, FieldValue::Centimeters)
            }
            FieldKey::Room2Space => opt(self.room2_space, FieldValue::Classification),
            FieldKey::SlabEqualsWallThickness => FieldValue::Flag(self.slab_equals_wall_thickness),
        }
    }

    /// Stores `value` in `key`, leaving every other field untouched.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::InvalidFieldValue`] when the value's kind does not
    /// match the field, or a length is negative. The stored value is kept.
    pub fn set(
        &mut self,
        key: FieldKey,
        value: FieldValue,
    ) -> Result<(), FieldError> {
        if !value.fits(key.kind()) {
            return Err(reject(key, &value, "value does not match the field type"));
        }
        if let FieldValue::Centimeters(cm) = &value {
            if cm.is_sign_negative() && !cm.is_zero() {
                return Err(reject(key, &value, "length must not be negative"));
            }
        }

        self.store(key, value);
        Ok(())
    }

    /// Parses raw user input for `key` and stores it.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::InvalidFieldValue`] when the text cannot be read
    /// as the field's kind. The stored value is kept.
    pub fn set_raw(
        &mut self,
        key: FieldKey,
        raw: &str,
    ) -> Result<(), FieldError> {
        let value = FieldValue::parse(key.kind(), raw).map_err(|reason| {
            warn!(field = %key, input = %raw, "rejected field input: {}", reason);
            FieldError::InvalidFieldValue {
                field: key,
                input: raw.to_string(),
                reason,
            }
        })?;
        self.set(key, value)
    }

    /// Pure-update form of [`FormState::set`]: returns a copy with one field
    /// changed.
    pub fn with(
        &self,
        key: FieldKey,
        value: FieldValue,
    ) -> Result<Self, FieldError> {
        let mut next = self.clone();
        next.set(key, value)?;
        Ok(next)
    }

    /// Whether the field takes part in the project under the current slab
    /// option. Room 2 fields are inert for a single-side slab.
    pub fn is_relevant(
        &self,
        key: FieldKey,
    ) -> bool {
        key.is_active_for(self.slab_option)
    }

    /// Every relevant field with its value, in display order.
    pub fn relevant_values(&self) -> Vec<(FieldKey, FieldValue)> {
        FieldKey::ALL
            .into_iter()
            .filter(|key| self.is_relevant(*key))
            .map(|key| (key, self.get(key)))
            .collect()
    }

    // Caller has already checked that `value` fits `key`.
    fn store(
        &mut self,
        key: FieldKey,
        value: FieldValue,
    ) {
        match (key, value) {
            (FieldKey::Title, FieldValue::Text(s)) => self.title = s,
            (FieldKey::Address, FieldValue::Text(s)) => self.address = s,
            (FieldKey::Region, FieldValue::Region(r)) => self.region = Some(r),
            (FieldKey::Region, FieldValue::Unset) => self.region = None,
            (FieldKey::Department, FieldValue::Department(d)) => self.department = Some(d),
            (FieldKey::Department, FieldValue::Unset) => self.department = None,
            (FieldKey::Floor, FieldValue::Floor(n)) => self.floor = Some(n),
            (FieldKey::Floor, FieldValue::Unset) => self.floor = None,
            (FieldKey::FloorsAbove, FieldValue::Count(n)) => self.floors_above = Some(n),
            (FieldKey::FloorsAbove, FieldValue::Unset) => self.floors_above = None,
            (FieldKey::SlabOption, FieldValue::Slab(s)) => self.slab_option = s,
            (FieldKey::SlabEqualsWallThickness, FieldValue::Flag(b)) => {
                self.slab_equals_wall_thickness = b
            }
            (key, FieldValue::Centimeters(cm)) => *self.length_mut(key) = Some(cm),
            (key, FieldValue::Classification(c)) => *self.classification_mut(key) = Some(c),
            (key, FieldValue::Unset) if key.is_centimeters() => *self.length_mut(key) = None,
            (key, FieldValue::Unset) => *self.classification_mut(key) = None,
            (key, value) => unreachable!("{value:?} does not fit field '{key}'"),
        }
    }

    fn length_mut(
        &mut self,
        key: FieldKey,
    ) -> &mut Option<Decimal> {
        match key {
            FieldKey::Height => &mut self.height,
            FieldKey::Width => &mut self.width,
            FieldKey::Clearance => &mut self.clearance,
            FieldKey::WallWidth => &mut self.wall_width,
            FieldKey::HeightUnderSlab => &mut self.height_under_slab,
            FieldKey::WallThickness => &mut self.wall_thickness,
            FieldKey::ThicknessPh => &mut self.thickness_ph,
            FieldKey::ThicknessPb => &mut self.thickness_pb,
            FieldKey::Room1Width => &mut self.room1_width,
            FieldKey::Room1SlabThickness => &mut self.room1_slab_thickness,
            FieldKey::Room2Width => &mut self.room2_width,
            FieldKey::Room2SlabThickness => &mut self.room2_slab_thickness,
            other => unreachable!("'{other}' is not a length field"),
        }
    }

    fn classification_mut(
        &mut self,
        key: FieldKey,
    ) -> &mut Option<Classification> {
        match key {
            FieldKey::WallType => &mut self.wall_type,
            FieldKey::PhType => &mut self.ph_type,
            FieldKey::PbType => &mut self.pb_type,
            FieldKey::LocalType => &mut self.local_type,
            FieldKey::Room1Space => &mut self.room1_space,
            FieldKey::Room2Space => &mut self.room2_space,
            other => unreachable!("'{other}' is not a classification field"),
        }
    }
}

fn reject(
    key: FieldKey,
    value: &FieldValue,
    reason: &'static str,
) -> FieldError {
    warn!(field = %key, ?value, "rejected field value: {}", reason);
    FieldError::InvalidFieldValue {
        field: key,
        input: value.to_string(),
        reason,
    }
}

impl fmt::Display for FormState {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let values = self.relevant_values();
        let width = values
            .iter()
            .map(|(key, _)| key.as_str().len())
            .max()
            .unwrap_or(0);

        for (i, (key, value)) in values.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{:<width$}  {}", format!("{key}:"), value, width = width + 1)?;
        }
        Ok(())
    }
}
