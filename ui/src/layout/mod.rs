//! Static page structure: which panel sits where and how it is sized.

pub mod style;
pub mod tree;

pub use style::{Flex, StylePreset};
pub use tree::{describe, LayoutNode, Slot, SMALL_CHART_COUNT};
