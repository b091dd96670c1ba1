//! Tabs of the dashboard. Only the pipeline tab is backed by the lead board.

use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Dashboard,
    Pipeline,
    Billing,
    Calendar,
    Lists,
    Settings,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Dashboard,
        Section::Pipeline,
        Section::Billing,
        Section::Calendar,
        Section::Lists,
        Section::Settings,
    ];

    /// Heading used when the tab is shown
    pub fn title(&self) -> &'static str {
        match self {
            Section::Dashboard => "Dashboard",
            Section::Pipeline => "Pipeline",
            Section::Billing => "Billing",
            Section::Calendar => "Calendar",
            Section::Lists => "Lists & Clients",
            Section::Settings => "Settings",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Section::Dashboard => "dashboard",
            Section::Pipeline => "pipeline",
            Section::Billing => "billing",
            Section::Calendar => "calendar",
            Section::Lists => "lists",
            Section::Settings => "settings",
        };
        f.write_str(name)
    }
}

impl FromStr for Section {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Section::ALL
            .into_iter()
            .find(|section| section.to_string() == wanted)
            .ok_or_else(|| ModelError::UnknownSection(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_parse() {
        assert_eq!("Pipeline".parse::<Section>().unwrap(), Section::Pipeline);
        assert_eq!("lists".parse::<Section>().unwrap(), Section::Lists);
        assert!("reports".parse::<Section>().is_err());
    }

    #[test]
    fn test_section_titles() {
        assert_eq!(Section::Lists.title(), "Lists & Clients");
        assert_eq!(Section::Dashboard.title(), "Dashboard");
    }
}
