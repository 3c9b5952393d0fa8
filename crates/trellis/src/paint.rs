//! The draw surface the editor renders rows into.
//!
//! Trellis itself does not rasterize anything. When the view asks an editor
//! to draw a row, the editor forwards the row's data and rectangle to a
//! [`Painter`] supplied by the front-end. A GUI front-end implements
//! `Painter` over its own renderer; [`CommandPainter`] is the built-in
//! headless backend that records the draw calls instead, which is also what
//! the test suite asserts against.

use crate::geometry::Rect;

/// A minimal draw surface for rendering collection rows.
///
/// Drawing is a side effect only: no `Painter` call may mutate the
/// collection being edited.
pub trait Painter {
    /// Fill a rectangle (row background, selection highlight).
    fn fill_rect(&mut self, rect: Rect);

    /// Draw a run of text inside the given rectangle.
    fn draw_text(&mut self, rect: Rect, text: &str);
}

/// A single recorded draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum PaintCommand {
    FillRect(Rect),
    Text { rect: Rect, text: String },
}

/// A headless painter that records commands instead of rasterizing.
///
/// # Example
///
/// ```
/// use trellis::paint::{CommandPainter, PaintCommand, Painter};
/// use trellis::geometry::Rect;
///
/// let mut painter = CommandPainter::new();
/// painter.draw_text(Rect::new(0.0, 0.0, 120.0, 20.0), "hello");
///
/// assert_eq!(painter.commands().len(), 1);
/// assert!(matches!(&painter.commands()[0], PaintCommand::Text { text, .. } if text == "hello"));
/// ```
#[derive(Debug, Default)]
pub struct CommandPainter {
    commands: Vec<PaintCommand>,
}

impl CommandPainter {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// The commands recorded so far, in draw order.
    pub fn commands(&self) -> &[PaintCommand] {
        &self.commands
    }

    /// Drop all recorded commands.
    pub fn reset(&mut self) {
        self.commands.clear();
    }

    /// The text runs recorded so far, in draw order.
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|cmd| match cmd {
                PaintCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Painter for CommandPainter {
    fn fill_rect(&mut self, rect: Rect) {
        self.commands.push(PaintCommand::FillRect(rect));
    }

    fn draw_text(&mut self, rect: Rect, text: &str) {
        self.commands.push(PaintCommand::Text {
            rect,
            text: text.to_string(),
        });
    }
}
