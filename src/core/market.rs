//! Market analysis request submitted from the landing page hero

use std::fmt;

/// Target market offered in the hero's location picker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    UnitedStates,
    UnitedKingdom,
    Canada,
    Australia,
    EuropeanUnion,
    AsiaPacific,
}

impl Region {
    /// Picker order
    pub const ALL: [Region; 6] = [
        Region::UnitedStates,
        Region::UnitedKingdom,
        Region::Canada,
        Region::Australia,
        Region::EuropeanUnion,
        Region::AsiaPacific,
    ];

    /// Value of the `<option>` element
    pub fn code(self) -> &'static str {
        match self {
            Region::UnitedStates => "us",
            Region::UnitedKingdom => "uk",
            Region::Canada => "ca",
            Region::Australia => "au",
            Region::EuropeanUnion => "eu",
            Region::AsiaPacific => "apac",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Region::UnitedStates => "United States",
            Region::UnitedKingdom => "United Kingdom",
            Region::Canada => "Canada",
            Region::Australia => "Australia",
            Region::EuropeanUnion => "European Union",
            Region::AsiaPacific => "Asia Pacific",
        }
    }

    /// `None` for the empty "Select location" option or an unknown value
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|region| region.code() == code)
    }
}

/// What the hero form hands over when "Analyze market" is pressed.
///
/// Neither field is required; the request is only logged.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MarketQuery {
    pub idea: String,
    pub region: Option<Region>,
}

impl MarketQuery {
    pub fn new(idea: &str, region_code: &str) -> Self {
        Self {
            idea: idea.trim().to_owned(),
            region: Region::from_code(region_code),
        }
    }
}

impl fmt::Display for MarketQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let location = self.region.map(Region::code).unwrap_or("any");
        write!(f, "idea={:?}, location={}", self.idea, location)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code_matches_every_option() {
        for region in Region::ALL {
            assert_eq!(Region::from_code(region.code()), Some(region));
        }
    }

    #[test]
    fn test_from_code_unselected() {
        assert_eq!(Region::from_code(""), None);
        assert_eq!(Region::from_code("mars"), None);
        // Codes are matched exactly
        assert_eq!(Region::from_code("US"), None);
    }

    #[test]
    fn test_query_trims_idea() {
        let query = MarketQuery::new("  Vegan bakery in Leeds \n", "uk");
        assert_eq!(query.idea, "Vegan bakery in Leeds");
        assert_eq!(query.region, Some(Region::UnitedKingdom));
    }

    #[test]
    fn test_query_display() {
        let query = MarketQuery::new("Dog walking app", "apac");
        assert_eq!(query.to_string(), r#"idea="Dog walking app", location=apac"#);

        let empty = MarketQuery::new("", "");
        assert_eq!(empty, MarketQuery::default());
        assert_eq!(empty.to_string(), r#"idea="", location=any"#);
    }
}
