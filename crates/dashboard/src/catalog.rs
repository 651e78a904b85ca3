//! Static display data for each section

use opti_transit_access::Section;

/// A placeholder card shown in a section panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Card {
    /// Card heading
    pub title: &'static str,
    /// Caption of the illustration shown on the card
    pub illustration: &'static str,
    /// One-line description
    pub description: &'static str,
}

/// Welcome banner shown above the home cards
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Banner {
    /// Banner heading
    pub title: &'static str,
    /// Line under the heading
    pub subtitle: &'static str,
    /// Body text
    pub body: &'static str,
}

/// Display data for one section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionEntry {
    /// The section described
    pub section: Section,
    /// Sidebar label
    pub label: &'static str,
    /// Single-width glyph shown in the sidebar
    pub icon: &'static str,
    /// Cards of the section panel
    pub cards: [Card; 3],
}

/// Read-only catalog of all sections
#[derive(Debug, Clone, Copy, Default)]
pub struct SectionCatalog;

static HOME_BANNER: Banner = Banner {
    title: "Welcome to Opti-Transit",
    subtitle: "Your comprehensive transit management solution",
    body: "Select a section from the sidebar to get started with our powerful features.",
};

// Indexed by `Section::index`
static ENTRIES: [SectionEntry; 6] = [
    SectionEntry {
        section: Section::Home,
        label: "Home",
        icon: "⌂",
        cards: [
            Card {
                title: "Quick Stats",
                illustration: "Quick Stats",
                description: "View key performance indicators at a glance.",
            },
            Card {
                title: "Recent Activities",
                illustration: "Recent Activities",
                description: "Stay updated with the latest events and actions.",
            },
            Card {
                title: "System Status",
                illustration: "System Status",
                description: "Monitor the health and performance of your transit system.",
            },
        ],
    },
    SectionEntry {
        section: Section::Maintenance,
        label: "Maintenance",
        icon: "⚒",
        cards: [
            Card {
                title: "Maintenance Dashboard",
                illustration: "Maintenance Dashboard",
                description: "View and manage vehicle maintenance schedules and status.",
            },
            Card {
                title: "Predictive Maintenance Alerts",
                illustration: "Predictive Maintenance",
                description: "Stay ahead of potential issues with AI-driven predictions.",
            },
            Card {
                title: "Vehicle Status Monitoring",
                illustration: "Vehicle Status",
                description: "Real-time updates on vehicle conditions and performance.",
            },
        ],
    },
    SectionEntry {
        section: Section::Logistics,
        label: "Logistics",
        icon: "⇄",
        cards: [
            Card {
                title: "Logistics Dashboard",
                illustration: "Logistics Dashboard",
                description: "Overview of current logistics operations and key metrics.",
            },
            Card {
                title: "Real-Time GPS Tracking",
                illustration: "GPS Tracking",
                description: "Track your fleet's location and status in real-time.",
            },
            Card {
                title: "Load Management",
                illustration: "Load Management",
                description: "Monitor and optimize load distribution across your fleet.",
            },
        ],
    },
    SectionEntry {
        section: Section::Analysis,
        label: "Data Analysis",
        icon: "◔",
        cards: [
            Card {
                title: "Performance Analysis",
                illustration: "Performance Analysis",
                description: "In-depth analysis of fleet and driver performance metrics.",
            },
            Card {
                title: "MIS Reporting",
                illustration: "MIS Reporting",
                description: "Generate comprehensive reports for management insights.",
            },
            Card {
                title: "Optimization Insights",
                illustration: "Optimization Insights",
                description: "AI-driven recommendations for improving operations.",
            },
        ],
    },
    SectionEntry {
        section: Section::ThirdPartyLogistics,
        label: "Third Party Logistics",
        icon: "▦",
        cards: [
            Card {
                title: "Book Available Transit",
                illustration: "Book Transit",
                description: "Reserve capacity for your shipments with ease.",
            },
            Card {
                title: "Real-Time Tracking",
                illustration: "Real-Time Tracking",
                description: "Monitor your booked transits in real-time.",
            },
            Card {
                title: "Notifications",
                illustration: "Notifications",
                description: "Receive instant updates on your shipments.",
            },
        ],
    },
    SectionEntry {
        section: Section::Dispatch,
        label: "Dispatch",
        icon: "⌖",
        cards: [
            Card {
                title: "Scheduling System",
                illustration: "Scheduling System",
                description: "Manage and optimize your dispatch schedules.",
            },
            Card {
                title: "Route Optimization",
                illustration: "Route Optimization",
                description: "Find the most efficient routes for your fleet.",
            },
            Card {
                title: "Load Distribution",
                illustration: "Load Distribution",
                description: "Optimize load assignments across your fleet.",
            },
        ],
    },
];

impl SectionCatalog {
    /// Display data for a section
    #[must_use]
    pub fn entry(section: Section) -> &'static SectionEntry {
        &ENTRIES[section.index()]
    }

    /// All entries in sidebar order
    pub fn entries() -> impl Iterator<Item = &'static SectionEntry> {
        ENTRIES.iter()
    }

    /// Banner shown on the home panel
    #[must_use]
    pub fn home_banner() -> &'static Banner {
        &HOME_BANNER
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entries_line_up_with_sections() {
        for section in Section::ALL {
            assert_eq!(SectionCatalog::entry(section).section, section);
        }
        assert_eq!(SectionCatalog::entries().count(), Section::ALL.len());
    }

    #[test]
    fn test_labels() {
        assert_eq!(SectionCatalog::entry(Section::Analysis).label, "Data Analysis");
        assert_eq!(
            SectionCatalog::entry(Section::ThirdPartyLogistics).label,
            "Third Party Logistics"
        );
    }
}
