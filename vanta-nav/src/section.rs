use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Identifier of one of the eight dashboard panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum SectionId {
    #[default]
    Home,
    Verify,
    Education,
    Community,
    Protection,
    Analytics,
    Authority,
    Settings,
}

/// Returned by the strict [`FromStr`] parser for fragments that do not name
/// a section.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown section `{0}`")]
pub struct UnknownSection(pub String);

impl SectionId {
    /// Every section in navigation menu order.
    pub const ALL: [SectionId; 8] = [
        SectionId::Home,
        SectionId::Verify,
        SectionId::Education,
        SectionId::Community,
        SectionId::Protection,
        SectionId::Analytics,
        SectionId::Authority,
        SectionId::Settings,
    ];

    /// Address fragment naming this section, without the leading `#`.
    pub fn fragment(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::Verify => "verify",
            SectionId::Education => "education",
            SectionId::Community => "community",
            SectionId::Protection => "protection",
            SectionId::Analytics => "analytics",
            SectionId::Authority => "authority",
            SectionId::Settings => "settings",
        }
    }

    /// Human readable panel title.
    pub fn title(self) -> &'static str {
        match self {
            SectionId::Home => "Home",
            SectionId::Verify => "Verify Information",
            SectionId::Education => "Education",
            SectionId::Community => "Community",
            SectionId::Protection => "Protection",
            SectionId::Analytics => "Analytics",
            SectionId::Authority => "Authority",
            SectionId::Settings => "Settings",
        }
    }

    /// Zero-based position in [`SectionId::ALL`].
    pub fn ordinal(self) -> usize {
        self as usize
    }

    /// Decode a raw ordinal. Out-of-range values yield `None`.
    pub fn from_ordinal(raw: usize) -> Option<SectionId> {
        Self::ALL.get(raw).copied()
    }

    /// Resolve a raw address fragment. Total: anything that is not exactly
    /// one of the eight fragment names (after an optional leading `#`)
    /// resolves to [`SectionId::Home`].
    pub fn from_fragment(raw: &str) -> SectionId {
        match raw.parse::<SectionId>() {
            Ok(section) => section,
            Err(UnknownSection(value)) => {
                if !value.is_empty() {
                    log::debug!(
                        "unknown section fragment `{value}`, falling back to home"
                    );
                }
                SectionId::Home
            },
        }
    }
}

impl FromStr for SectionId {
    type Err = UnknownSection;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let value = raw.strip_prefix('#').unwrap_or(raw);
        Self::ALL
            .into_iter()
            .find(|section| section.fragment() == value)
            .ok_or_else(|| UnknownSection(value.to_string()))
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.fragment())
    }
}

#[cfg(test)]
mod tests {
    use super::{SectionId, UnknownSection};

    #[test]
    fn given_each_fragment_when_parsed_then_round_trips_to_same_section() {
        for section in SectionId::ALL {
            assert_eq!(SectionId::from_fragment(section.fragment()), section);
            assert_eq!(
                SectionId::from_fragment(&format!("#{section}")),
                section
            );
        }
    }

    #[test]
    fn given_unknown_fragments_when_resolved_then_falls_back_to_home() {
        for raw in ["", "#", "HOME", "Verify", "reports", " home", "##home"] {
            assert_eq!(SectionId::from_fragment(raw), SectionId::Home, "{raw}");
        }
    }

    #[test]
    fn given_unknown_fragment_when_strictly_parsed_then_reports_value() {
        let err = "reports".parse::<SectionId>().unwrap_err();
        assert_eq!(err, UnknownSection(String::from("reports")));
        assert_eq!(err.to_string(), "unknown section `reports`");
    }

    #[test]
    fn given_ordinals_when_decoded_then_match_menu_order() {
        for (index, section) in SectionId::ALL.into_iter().enumerate() {
            assert_eq!(section.ordinal(), index);
            assert_eq!(SectionId::from_ordinal(index), Some(section));
        }
        assert_eq!(SectionId::from_ordinal(8), None);
        assert_eq!(SectionId::from_ordinal(usize::MAX), None);
    }
}
