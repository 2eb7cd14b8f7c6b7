//! Error types for parsing, rasterizing and exporting.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a mesh parse call.
///
/// Recoverable conditions (malformed numbers, bad face references) are not
/// errors; they are reported through a [`DiagnosticSink`](crate::diagnostics::DiagnosticSink).
#[derive(Debug, Error)]
pub enum ParseError {
    /// A record needed more whitespace-separated fields than the line has.
    #[error("line {line}: missing token at index {index}")]
    MissingToken {
        /// 1-based line number.
        line: usize,
        /// 0-based token index that was requested.
        index: usize,
    },

    /// A face fell back to the first vertex but no vertex has been parsed yet.
    #[error("line {line}: face references a vertex but none are defined")]
    NoVertices {
        /// 1-based line number.
        line: usize,
    },

    /// The input file could not be read.
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A pixel coordinate outside the addressed extent of a frame buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BufferError {
    #[error("pixel ({x}, {y}) is outside the {width}x{height} frame buffer")]
    OutOfBounds {
        x: i32,
        y: i32,
        width: u32,
        height: u32,
    },
}

/// Errors raised while drawing a mesh.
#[derive(Debug, Error)]
pub enum RenderError {
    /// An edge endpoint fell outside the frame buffer.
    #[error("face {face}: {source}")]
    Boundary {
        /// 0-based index of the face whose edge failed.
        face: usize,
        #[source]
        source: BufferError,
    },
}

/// Errors raised while writing a frame buffer to disk.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("image encoding error: {0}")]
    Image(#[from] image::ImageError),

    /// The output path has no extension the exporter knows how to encode.
    #[error("unsupported output format: {path}")]
    UnsupportedFormat { path: PathBuf },
}

/// A color string that is not `RRGGBB` hex.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid color {input:?}: expected RRGGBB hex")]
pub struct ColorParseError {
    pub input: String,
}
