use std::path::PathBuf;

use clap::Parser;
use objwire::colors::Color;
use objwire::config::{self, OutOfBounds, RenderConfig};
use objwire::obj::{BadReferencePolicy, CommentEnd, ParserConfig, TrailingLine};

/// Rasterize the edges of an OBJ mesh into an image.
///
/// Vertex x/y in [-1, 1] are mapped onto the image; z is ignored.
#[derive(Parser, Debug)]
#[command(name = "objwire", version, about, long_about = None)]
pub struct Args {
    /// OBJ file to read
    pub input: PathBuf,

    /// Output image (.ppm is written directly, other extensions via the image crate)
    #[arg(short, long, default_value = "out.ppm")]
    pub output: PathBuf,

    #[arg(long, default_value_t = config::DEFAULT_WIDTH)]
    pub width: u32,

    #[arg(long, default_value_t = config::DEFAULT_HEIGHT)]
    pub height: u32,

    /// Edge color as RRGGBB hex
    #[arg(long, default_value_t = config::DEFAULT_FOREGROUND)]
    pub color: Color,

    /// Background color as RRGGBB hex
    #[arg(long, default_value_t = config::DEFAULT_BACKGROUND)]
    pub background: Color,

    /// Put +y at the top of the image
    #[arg(long)]
    pub flip_y: bool,

    /// Fail on edges that leave the image instead of skipping them
    #[arg(long)]
    pub strict: bool,

    /// Parse a final line even when it has no trailing newline
    #[arg(long)]
    pub trailing_line: bool,

    /// Drop faces with out-of-range vertex references instead of using vertex 1
    #[arg(long)]
    pub skip_bad_faces: bool,

    /// End the line at a comment's newline instead of joining it with the next line
    #[arg(long)]
    pub comment_ends_line: bool,

    /// Log debug output (overridden by RUST_LOG)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn render_config(&self) -> RenderConfig {
        RenderConfig {
            width: self.width,
            height: self.height,
            foreground: self.color,
            background: self.background,
            flip_y: self.flip_y,
            out_of_bounds: if self.strict {
                OutOfBounds::Fail
            } else {
                OutOfBounds::Skip
            },
        }
    }

    pub fn parser_config(&self) -> ParserConfig {
        ParserConfig {
            trailing_line: if self.trailing_line {
                TrailingLine::Parse
            } else {
                TrailingLine::Drop
            },
            bad_reference: if self.skip_bad_faces {
                BadReferencePolicy::SkipFace
            } else {
                BadReferencePolicy::FallbackToFirst
            },
            comment_end: if self.comment_ends_line {
                CommentEnd::EndLine
            } else {
                CommentEnd::JoinLine
            },
        }
    }
}
