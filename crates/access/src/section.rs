//! The fixed set of dashboard sections.

use crate::error::Error;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A navigable area of the dashboard.
///
/// The set is closed: sections are never created or destroyed at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Section {
    /// Landing section. Never gated.
    Home,

    /// Vehicle maintenance.
    Maintenance,

    /// Fleet logistics.
    Logistics,

    /// Data analysis and reporting.
    Analysis,

    /// Third-party logistics bookings.
    ThirdPartyLogistics,

    /// Dispatch scheduling.
    Dispatch,
}

impl Section {
    /// All sections, in sidebar order.
    pub const ALL: [Self; 6] = [
        Self::Home,
        Self::Maintenance,
        Self::Logistics,
        Self::Analysis,
        Self::ThirdPartyLogistics,
        Self::Dispatch,
    ];

    /// Stable identifier of the section.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Maintenance => "maintenance",
            Self::Logistics => "logistics",
            Self::Analysis => "analysis",
            Self::ThirdPartyLogistics => "thirdPartyLogistics",
            Self::Dispatch => "dispatch",
        }
    }

    /// Position of the section in [`Section::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Home => 0,
            Self::Maintenance => 1,
            Self::Logistics => 2,
            Self::Analysis => 3,
            Self::ThirdPartyLogistics => 4,
            Self::Dispatch => 5,
        }
    }

    /// Section at the given sidebar position, if any.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Next section in sidebar order, wrapping around.
    #[must_use]
    pub const fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous section in sidebar order, wrapping around.
    #[must_use]
    pub const fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Whether the section is always accessible without the gate.
    #[must_use]
    pub const fn is_home(self) -> bool {
        matches!(self, Self::Home)
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Section {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        Self::ALL
            .into_iter()
            .find(|section| section.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| Error::UnknownSection(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_in_index_order() {
        for (i, section) in Section::ALL.iter().enumerate() {
            assert_eq!(section.index(), i);
            assert_eq!(Section::from_index(i), Some(*section));
        }
        assert_eq!(Section::from_index(Section::ALL.len()), None);
    }

    #[test]
    fn test_next_and_previous_wrap() {
        assert_eq!(Section::Home.next(), Section::Maintenance);
        assert_eq!(Section::Dispatch.next(), Section::Home);
        assert_eq!(Section::Home.previous(), Section::Dispatch);
        assert_eq!(Section::Logistics.previous(), Section::Maintenance);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(
            "thirdPartyLogistics".parse::<Section>(),
            Ok(Section::ThirdPartyLogistics)
        );
        assert_eq!(
            "THIRDPARTYLOGISTICS".parse::<Section>(),
            Ok(Section::ThirdPartyLogistics)
        );
        assert_eq!(" dispatch ".parse::<Section>(), Ok(Section::Dispatch));
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            "billing".parse::<Section>(),
            Err(Error::UnknownSection("billing".to_string()))
        );
    }

    #[test]
    fn test_display_matches_serde() {
        for section in Section::ALL {
            let json = serde_json::to_string(&section).unwrap();
            assert_eq!(json, format!("\"{section}\""));
        }
    }
}
