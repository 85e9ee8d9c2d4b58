//! Strategic target items shown on the timeline

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Accent color of a target's icon badge and timeline marker
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum ColorToken {
    #[default]
    Blue,
    Green,
    Purple,
    Orange,
    Indigo,
    Gray,
}

/// Icon reference for a target
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Icon {
    #[default]
    DollarSign,
    CreditCard,
    Briefcase,
    Users,
    TrendingUp,
    Target,
    BarChart,
}

impl Icon {
    /// Terminal glyph for the icon
    pub fn glyph(self) -> &'static str {
        match self {
            Self::DollarSign => "₹",
            Self::CreditCard => "▭",
            Self::Briefcase => "◧",
            Self::Users => "☺",
            Self::TrendingUp => "↗",
            Self::Target => "◎",
            Self::BarChart => "▇",
        }
    }
}

/// A single strategic target
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetItem {
    pub title: String,
    /// Value shown in large type
    pub value: String,
    /// Value shown as "Target: ..."
    pub target: String,
    #[serde(default)]
    pub color: ColorToken,
    #[serde(default)]
    pub icon: Icon,
}

impl TargetItem {
    pub fn new(
        title: impl Into<String>,
        value: impl Into<String>,
        target: impl Into<String>,
        color: ColorToken,
        icon: Icon,
    ) -> Self {
        Self {
            title: title.into(),
            value: value.into(),
            target: target.into(),
            color,
            icon,
        }
    }
}

/// The Big Five strategic targets, in reveal order
pub fn big_five_targets() -> Vec<TargetItem> {
    vec![
        TargetItem::new("Revenue", "₹400 Cr", "₹400 Cr", ColorToken::Blue, Icon::DollarSign),
        TargetItem::new(
            "Collection",
            "₹400 Cr",
            "₹400 Cr",
            ColorToken::Green,
            Icon::CreditCard,
        ),
        TargetItem::new(
            "New Business",
            "₹400 Cr",
            "₹400 Cr",
            ColorToken::Purple,
            Icon::Briefcase,
        ),
        TargetItem::new(
            "Human Capital",
            "20K nos",
            "20K nos",
            ColorToken::Orange,
            Icon::Users,
        ),
        TargetItem::new("EBITDA", "50%", "50%", ColorToken::Indigo, Icon::TrendingUp),
    ]
}
