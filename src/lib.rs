//! Wireframe rasterization of Wavefront OBJ meshes.
//!
//! The pipeline has four stages:
//!
//! 1. [`obj::ObjParser`] turns OBJ text into a [`Mesh`]
//! 2. [`ScreenMapping`] projects vertex `x`/`y` onto pixel coordinates
//! 3. [`render::draw_line`] traces each face edge into a [`FrameBuffer`]
//! 4. [`output::save_ppm`] writes the buffer as binary PPM
//!
//! [`Renderer`] runs stages 2 and 3 over a whole mesh.
//!
//! # Quick Start
//!
//! ```no_run
//! use objwire::prelude::*;
//!
//! let mesh = Mesh::load_obj("monkey.obj")?;
//! let (buffer, _stats) = Renderer::new(RenderConfig::default()).render(&mesh)?;
//! save_ppm(&buffer, "monkey.ppm")?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod colors;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod math;
pub mod mesh;
pub mod obj;
pub mod output;
pub mod projection;
pub mod render;

// Re-export commonly needed types at crate root for convenience
pub use colors::Color;
pub use config::{OutOfBounds, RenderConfig};
pub use error::{BufferError, ExportError, ParseError, RenderError};
pub use mesh::{Face, Mesh, Vertex};
pub use projection::ScreenMapping;
pub use render::{FrameBuffer, RenderStats, Renderer};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::colors::Color;
    pub use crate::config::{OutOfBounds, RenderConfig};
    pub use crate::diagnostics::{Diagnostic, DiagnosticSink, TracingSink};
    pub use crate::math::vec2::IVec2;
    pub use crate::mesh::{Face, Mesh, Vertex};
    pub use crate::obj::{BadReferencePolicy, CommentEnd, ObjParser, ParserConfig, TrailingLine};
    pub use crate::output::{save_image, save_ppm};
    pub use crate::projection::ScreenMapping;
    pub use crate::render::{draw_line, FrameBuffer, Renderer};
}
