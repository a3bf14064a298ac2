use drift_core::{CompositeMode, Surface};
use glam::Vec2;

/// One recorded drawing command.
#[derive(Clone, Debug, PartialEq)]
pub enum Op {
    Clear,
    SetComposite(CompositeMode),
    FillCircle {
        center: Vec2,
        radius: f32,
        color: String,
    },
}

/// Surface test double that records the frame's command stream.
#[derive(Default)]
pub struct RecordingSurface {
    pub ops: Vec<Op>,
}

impl RecordingSurface {
    #[allow(dead_code)] // not every test binary counts draws
    pub fn draw_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, Op::FillCircle { .. }))
            .count()
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self) {
        self.ops.push(Op::Clear);
    }

    fn set_composite(&mut self, mode: CompositeMode) {
        self.ops.push(Op::SetComposite(mode));
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: &str) {
        self.ops.push(Op::FillCircle {
            center,
            radius,
            color: color.to_owned(),
        });
    }
}
