use glam::Vec2;

/// Compositing mode applied before a frame's draws.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CompositeMode {
    /// Default painting; later draws occlude earlier ones.
    SourceOver,
    /// Additive blending; overlapping circles brighten instead of occlude.
    Lighter,
}

/// Drawing capability consumed by the core.
///
/// Per frame the field issues one `clear`, one `set_composite`, then a
/// `fill_circle` per live particle. Implementations are treated as
/// infallible; hosts whose draw calls can fail swallow the error.
pub trait Surface {
    /// Clear the whole surface.
    fn clear(&mut self);
    fn set_composite(&mut self, mode: CompositeMode);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: &str);
}
