use ratatui::Frame;
use ratatui::layout::Rect;

/// A reusable UI component.
///
/// Components follow the props pattern:
/// - They receive data via props (struct fields borrowed from core state).
/// - They may hold presentation state (via `&mut State` fields).
/// - They render to a `Frame` within a given `Rect`.
///
/// `render` takes `&mut self` so a component can update presentation state
/// (selection clamping, scroll offsets) during the render pass. This aligns
/// with Ratatui's `StatefulWidget` pattern.
pub trait Component {
    /// Render the component into the given area.
    fn render(&mut self, frame: &mut Frame, area: Rect);
}
