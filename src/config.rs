//! Rendering configuration shared by the library and the command-line tool.

use crate::colors::{Color, BLACK, WHITE};

pub const DEFAULT_WIDTH: u32 = 1000;
pub const DEFAULT_HEIGHT: u32 = 1000;
pub const DEFAULT_FOREGROUND: Color = WHITE;
pub const DEFAULT_BACKGROUND: Color = BLACK;

/// How the wireframe renderer treats an edge with an endpoint off the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutOfBounds {
    /// Stop and return the boundary violation.
    #[default]
    Fail,
    /// Leave the edge out and keep going.
    Skip,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    pub foreground: Color,
    pub background: Color,
    pub flip_y: bool,
    pub out_of_bounds: OutOfBounds,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            foreground: DEFAULT_FOREGROUND,
            background: DEFAULT_BACKGROUND,
            flip_y: false,
            out_of_bounds: OutOfBounds::default(),
        }
    }
}
