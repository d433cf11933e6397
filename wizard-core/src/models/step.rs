use std::fmt;

use serde::{Deserialize, Serialize};

/// One screen of the project wizard, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    /// Project identity and location.
    Location,
    /// Opening geometry and wall/floor classification.
    Dimensions,
    /// Single- or double-side slab configuration.
    SlabConfig,
}

impl Step {
    pub const ALL: [Step; 3] = [Step::Location, Step::Dimensions, Step::SlabConfig];
    pub const COUNT: usize = Self::ALL.len();

    pub fn first() -> Self {
        Self::Location
    }

    /// 1-based position, as shown in a "step n of 3" indicator.
    pub fn number(&self) -> usize {
        match self {
            Self::Location => 1,
            Self::Dimensions => 2,
            Self::SlabConfig => 3,
        }
    }

    pub fn next(&self) -> Option<Self> {
        match self {
            Self::Location => Some(Self::Dimensions),
            Self::Dimensions => Some(Self::SlabConfig),
            Self::SlabConfig => None,
        }
    }

    pub fn previous(&self) -> Option<Self> {
        match self {
            Self::Location => None,
            Self::Dimensions => Some(Self::Location),
            Self::SlabConfig => Some(Self::Dimensions),
        }
    }

    pub fn is_first(&self) -> bool {
        self.previous().is_none()
    }

    pub fn is_last(&self) -> bool {
        self.next().is_none()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Location => "location",
            Self::Dimensions => "dimensions",
            Self::SlabConfig => "slab_config",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn next_walks_forward_until_the_last_step() {
        assert_eq!(Step::Location.next(), Some(Step::Dimensions));
        assert_eq!(Step::Dimensions.next(), Some(Step::SlabConfig));
        assert_eq!(Step::SlabConfig.next(), None);
    }

    #[test]
    fn previous_walks_back_until_the_first_step() {
        assert_eq!(Step::SlabConfig.previous(), Some(Step::Dimensions));
        assert_eq!(Step::Dimensions.previous(), Some(Step::Location));
        assert_eq!(Step::Location.previous(), None);
    }

    #[test]
    fn numbers_follow_declaration_order() {
        let numbers: Vec<_> = Step::ALL.iter().map(Step::number).collect();

        assert_eq!(numbers, vec![1, 2, 3]);
        assert_eq!(Step::COUNT, 3);
    }

    #[test]
    fn first_and_last_flags() {
        assert!(Step::first().is_first());
        assert!(!Step::Dimensions.is_first());
        assert!(!Step::Dimensions.is_last());
        assert!(Step::SlabConfig.is_last());
    }
}
