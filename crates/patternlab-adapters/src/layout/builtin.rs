//! The compiled-in demo lot.
//!
//! One spot of each kind, one entrance, one exit and one display board:
//!
//! | Spot | Kind        |
//! |------|-------------|
//! | 1    | handicapped |
//! | 2    | compact     |
//! | 3    | large       |
//! | 4    | motorcycle  |

use patternlab_core::{
    application::ports::LayoutSource,
    domain::{LotLayout, SpotKind},
    error::LabResult,
};

/// The demo layout described in the module docs.
pub fn demo_layout() -> LotLayout {
    LotLayout::default()
        .with_entrance(1)
        .with_exit(1)
        .with_board(1)
        .with_spot(1, SpotKind::Handicapped)
        .with_spot(2, SpotKind::Compact)
        .with_spot(3, SpotKind::Large)
        .with_spot(4, SpotKind::Motorcycle)
}

/// Layout source serving [`demo_layout`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinLayout;

impl LayoutSource for BuiltinLayout {
    fn load(&self) -> LabResult<LotLayout> {
        Ok(demo_layout())
    }

    fn describe(&self) -> String {
        "built-in layout".into()
    }
}
