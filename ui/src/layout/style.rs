//! Named style presets for layout nodes.
//!
//! Visual rules (colours, borders, padding) live in the theme stylesheet
//! under the preset's class; proportional sizing is emitted inline from
//! [`StylePreset::flex`] so the column ratio is owned by the layout code.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StylePreset {
    /// Full-viewport page container.
    Root,
    Title,
    /// Row holding the two main columns.
    Split,
    LeftColumn,
    RightColumn,
    /// Row of input controls above the main chart.
    ControlsRow,
    ControlCell,
    MainChartFrame,
    Caption,
    SmallChartFrame,
}

/// CSS `flex` shorthand: grow, shrink and an optional percentage basis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Flex {
    pub grow: u8,
    pub shrink: u8,
    pub basis_percent: Option<u8>,
}

impl Flex {
    pub const fn fixed_percent(percent: u8) -> Self {
        Self {
            grow: 0,
            shrink: 0,
            basis_percent: Some(percent),
        }
    }

    pub const fn fill() -> Self {
        Self {
            grow: 1,
            shrink: 1,
            basis_percent: None,
        }
    }
}

impl fmt::Display for Flex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.basis_percent {
            Some(pct) => write!(f, "{} {} {pct}%", self.grow, self.shrink),
            None => write!(f, "{} {} 0%", self.grow, self.shrink),
        }
    }
}

impl StylePreset {
    pub fn class(self) -> &'static str {
        match self {
            Self::Root => "dashboard",
            Self::Title => "dashboard__title",
            Self::Split => "dashboard__split",
            Self::LeftColumn => "dashboard__column dashboard__column--left",
            Self::RightColumn => "dashboard__column dashboard__column--right",
            Self::ControlsRow => "dashboard__controls",
            Self::ControlCell => "dashboard__control",
            Self::MainChartFrame => "dashboard__main-chart",
            Self::Caption => "dashboard__caption",
            Self::SmallChartFrame => "dashboard__small-chart",
        }
    }

    pub fn flex(self) -> Option<Flex> {
        match self {
            Self::LeftColumn => Some(Flex::fixed_percent(65)),
            Self::RightColumn => Some(Flex::fixed_percent(35)),
            Self::ControlCell => Some(Flex::fixed_percent(48)),
            Self::MainChartFrame => Some(Flex::fill()),
            _ => None,
        }
    }

    /// Inline `style` attribute value (empty when the preset has no flex hint).
    pub fn inline_style(self) -> String {
        self.flex()
            .map(|flex| format!("flex: {flex}"))
            .unwrap_or_default()
    }
}
