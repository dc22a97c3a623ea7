//! The fixed panel tree of the dashboard.

use crate::layout::style::StylePreset;

/// What a leaf of the layout displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Title,
    DataPathDropdown,
    DiagnosisInput,
    MainChart,
    SamplingCaption,
    /// Auxiliary chart by position in the right-hand column.
    SmallChart(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutNode {
    Row {
        preset: StylePreset,
        children: Vec<LayoutNode>,
    },
    Column {
        preset: StylePreset,
        children: Vec<LayoutNode>,
    },
    Leaf {
        preset: StylePreset,
        slot: Slot,
    },
}

/// Number of auxiliary charts in the right-hand column.
pub const SMALL_CHART_COUNT: usize = 4;

impl LayoutNode {
    pub fn preset(&self) -> StylePreset {
        match self {
            Self::Row { preset, .. } | Self::Column { preset, .. } | Self::Leaf { preset, .. } => {
                *preset
            }
        }
    }

    pub fn children(&self) -> &[LayoutNode] {
        match self {
            Self::Row { children, .. } | Self::Column { children, .. } => children,
            Self::Leaf { .. } => &[],
        }
    }

    /// Leaf slots in document order.
    pub fn slots(&self) -> Vec<Slot> {
        let mut out = Vec::new();
        self.collect_slots(&mut out);
        out
    }

    fn collect_slots(&self, out: &mut Vec<Slot>) {
        match self {
            Self::Leaf { slot, .. } => out.push(*slot),
            Self::Row { children, .. } | Self::Column { children, .. } => {
                for child in children {
                    child.collect_slots(out);
                }
            }
        }
    }

    /// First node (depth-first) carrying `preset`.
    pub fn find(&self, preset: StylePreset) -> Option<&LayoutNode> {
        if self.preset() == preset {
            return Some(self);
        }
        self.children().iter().find_map(|child| child.find(preset))
    }
}

fn leaf(preset: StylePreset, slot: Slot) -> LayoutNode {
    LayoutNode::Leaf { preset, slot }
}

/// Build the dashboard tree:
///
/// ```text
/// Root(Column)
/// ├── Title
/// └── Split(Row)
///     ├── LeftColumn 65%: Controls(Row)[dropdown, diagnosis], main chart, caption
///     └── RightColumn 35%: small chart × 4
/// ```
pub fn describe() -> LayoutNode {
    let controls = LayoutNode::Row {
        preset: StylePreset::ControlsRow,
        children: vec![
            leaf(StylePreset::ControlCell, Slot::DataPathDropdown),
            leaf(StylePreset::ControlCell, Slot::DiagnosisInput),
        ],
    };

    let left = LayoutNode::Column {
        preset: StylePreset::LeftColumn,
        children: vec![
            controls,
            leaf(StylePreset::MainChartFrame, Slot::MainChart),
            leaf(StylePreset::Caption, Slot::SamplingCaption),
        ],
    };

    let right = LayoutNode::Column {
        preset: StylePreset::RightColumn,
        children: (0..SMALL_CHART_COUNT)
            .map(|idx| leaf(StylePreset::SmallChartFrame, Slot::SmallChart(idx)))
            .collect(),
    };

    LayoutNode::Column {
        preset: StylePreset::Root,
        children: vec![
            leaf(StylePreset::Title, Slot::Title),
            LayoutNode::Row {
                preset: StylePreset::Split,
                children: vec![left, right],
            },
        ],
    }
}
