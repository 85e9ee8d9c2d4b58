//! Organization overview figures shown above the timeline

use big_five_reveal::Icon;

/// A headline figure in the organization overview
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverviewStat {
    pub icon: Icon,
    pub label: &'static str,
    pub value: &'static str,
    pub description: &'static str,
}

/// The four overview cards, left to right
pub fn organization_overview() -> Vec<OverviewStat> {
    vec![
        OverviewStat {
            icon: Icon::DollarSign,
            label: "Organisation Wide Case",
            value: "₹500 Cr",
            description: "Plan & Estimation",
        },
        OverviewStat {
            icon: Icon::TrendingUp,
            label: "Growth Rate",
            value: "15.2%",
            description: "Year over Year",
        },
        OverviewStat {
            icon: Icon::Users,
            label: "Team Size",
            value: "20K+",
            description: "Human Capital",
        },
        OverviewStat {
            icon: Icon::BarChart,
            label: "Target EBITDA",
            value: "50%",
            description: "Margin Goal",
        },
    ]
}
