//! Wavefront OBJ text parser.
//!
//! Only two record kinds are understood:
//!
//! - `v x y z` appends a vertex
//! - `f a b c` appends a triangle; each reference may be compound
//!   (`a/vt/vn`), only the part before the first `/` is used
//!
//! Every other record is skipped. `#` starts a comment that runs up to and
//! including the next newline. That newline is swallowed with the comment,
//! so by default text before a mid-line `#` continues onto the next line
//! (see [`CommentEnd`]).
//!
//! Input is consumed byte by byte so a file and an in-memory buffer take the
//! same path. Recoverable problems (a number that does not parse, a face
//! pointing at a vertex that does not exist) are reported to a
//! [`DiagnosticSink`] and replaced with a fallback; only a record that is
//! missing fields aborts the parse.

mod tokenizer;

pub use tokenizer::{split_token, tokens};

use std::path::Path;
use std::str::FromStr;

use crate::diagnostics::{Diagnostic, DiagnosticSink, TracingSink};
use crate::error::ParseError;
use crate::mesh::{Face, Mesh, Vertex};

use tokenizer::vertex_index_part;

/// What to do with a last line that has no terminating newline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrailingLine {
    /// Discard it. Records must end with `\n` to be seen.
    #[default]
    Drop,
    /// Parse it as if a newline followed.
    Parse,
}

/// What to do when a face references a vertex that does not exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BadReferencePolicy {
    /// Substitute the first vertex for the bad reference and keep the face.
    #[default]
    FallbackToFirst,
    /// Drop the whole face.
    SkipFace,
}

/// What the newline that closes a comment does to the line before the `#`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CommentEnd {
    /// The newline belongs to the comment and is discarded; the pending text
    /// joins the next line (`v 1 2 3 # c\nv 4 5 6\n` is one record).
    #[default]
    JoinLine,
    /// The newline also ends the line, so the text before `#` is a record of
    /// its own.
    EndLine,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParserConfig {
    pub trailing_line: TrailingLine,
    pub bad_reference: BadReferencePolicy,
    pub comment_end: CommentEnd,
}

/// OBJ parser owning a diagnostic sink.
///
/// ```
/// use objwire::obj::ObjParser;
///
/// let mut diagnostics: Vec<objwire::diagnostics::Diagnostic> = Vec::new();
/// let mesh = ObjParser::with_sink(Default::default(), &mut diagnostics)
///     .parse_bytes(b"v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n")
///     .unwrap();
/// assert_eq!(mesh.face_count(), 1);
/// assert!(diagnostics.is_empty());
/// ```
pub struct ObjParser<S = TracingSink> {
    config: ParserConfig,
    sink: S,
}

impl ObjParser {
    /// Parser with the default configuration that reports through `tracing`.
    pub fn new() -> Self {
        Self::with_sink(ParserConfig::default(), TracingSink)
    }
}

impl Default for ObjParser {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: DiagnosticSink> ObjParser<S> {
    pub fn with_sink(config: ParserConfig, sink: S) -> Self {
        Self { config, sink }
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Read `path` fully and parse its contents.
    pub fn parse_file<P: AsRef<Path>>(&mut self, path: P) -> Result<Mesh, ParseError> {
        let path = path.as_ref();
        let data = std::fs::read(path).map_err(|source| ParseError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), bytes = data.len(), "read OBJ file");
        self.parse_bytes(&data)
    }

    /// Parse an in-memory OBJ buffer.
    pub fn parse_bytes(&mut self, bytes: &[u8]) -> Result<Mesh, ParseError> {
        let mut mesh = Mesh::default();
        let mut line = Vec::with_capacity(64);
        let mut line_number = 1;
        let mut inside_comment = false;

        for &byte in bytes {
            if byte == b'\n' {
                let closes_comment = std::mem::take(&mut inside_comment);
                if !closes_comment || self.config.comment_end == CommentEnd::EndLine {
                    self.parse_line(&mut mesh, &line, line_number)?;
                    line.clear();
                }
                line_number += 1;
            } else if byte == b'#' {
                inside_comment = true;
            } else if !inside_comment {
                line.push(byte);
            }
        }

        if self.config.trailing_line == TrailingLine::Parse && !line.is_empty() {
            self.parse_line(&mut mesh, &line, line_number)?;
        }

        tracing::info!(
            vertices = mesh.vertex_count(),
            faces = mesh.face_count(),
            "parsed OBJ data"
        );
        Ok(mesh)
    }

    fn parse_line(&mut self, mesh: &mut Mesh, line: &[u8], line_number: usize) -> Result<(), ParseError> {
        // Blank and comment-only lines carry no record kind.
        let Some(kind) = tokens(line).next() else {
            return Ok(());
        };

        match kind {
            b"v" => {
                let x = self.number::<f64>(split_token(line, 1, line_number)?, line_number);
                let y = self.number::<f64>(split_token(line, 2, line_number)?, line_number);
                let z = self.number::<f64>(split_token(line, 3, line_number)?, line_number);
                mesh.push_vertex(Vertex::new(x, y, z));
            }
            b"f" => {
                let mut positions = [None; 3];
                for (slot, position) in positions.iter_mut().enumerate() {
                    let token = split_token(line, slot + 1, line_number)?;
                    *position = self.vertex_position(mesh, token, line_number);
                }
                if let Some(face) = self.build_face(mesh, positions, line_number)? {
                    mesh.push_face(face);
                }
            }
            _ => {}
        }

        Ok(())
    }

    /// Resolve a face token to a 0-based vertex position, or `None` (after
    /// reporting) when it is out of range of the vertices parsed so far.
    fn vertex_position(&mut self, mesh: &Mesh, token: &[u8], line_number: usize) -> Option<usize> {
        let reference = self.number::<i64>(vertex_index_part(token), line_number);
        let vertex_count = mesh.vertex_count();

        // OBJ references are 1-based.
        match usize::try_from(reference) {
            Ok(r) if (1..=vertex_count).contains(&r) => Some(r - 1),
            _ => {
                self.sink.record(Diagnostic::ReferenceOutOfRange {
                    line: line_number,
                    reference,
                    vertex_count,
                });
                None
            }
        }
    }

    fn build_face(
        &mut self,
        mesh: &Mesh,
        positions: [Option<usize>; 3],
        line_number: usize,
    ) -> Result<Option<Face>, ParseError> {
        if positions.contains(&None) && self.config.bad_reference == BadReferencePolicy::SkipFace {
            self.sink.record(Diagnostic::FaceSkipped { line: line_number });
            return Ok(None);
        }

        let mut corners = [Vertex::default(); 3];
        for (corner, position) in corners.iter_mut().zip(positions) {
            *corner = *mesh
                .vertex(position.unwrap_or(0))
                .ok_or(ParseError::NoVertices { line: line_number })?;
        }

        Ok(Some(Face { vertices: corners }))
    }

    /// Parse a numeric token, reporting and returning the default on failure.
    fn number<T: FromStr + Default>(&mut self, token: &[u8], line_number: usize) -> T {
        match std::str::from_utf8(token).ok().and_then(|s| s.parse().ok()) {
            Some(value) => value,
            None => {
                self.sink.record(Diagnostic::MalformedNumber {
                    line: line_number,
                    token: String::from_utf8_lossy(token).into_owned(),
                });
                T::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const TRIANGLE: &[u8] = b"v 0 0 0\nv 1 0 0\nv 0 1 0\n";

    fn parse(input: &[u8]) -> (Mesh, Vec<Diagnostic>) {
        parse_with(ParserConfig::default(), input)
    }

    fn parse_with(config: ParserConfig, input: &[u8]) -> (Mesh, Vec<Diagnostic>) {
        let mut parser = ObjParser::with_sink(config, Vec::new());
        let mesh = parser.parse_bytes(input).unwrap();
        (mesh, parser.into_sink())
    }

    fn with_triangle(face_line: &str) -> Vec<u8> {
        let mut input = TRIANGLE.to_vec();
        input.extend_from_slice(face_line.as_bytes());
        input
    }

    #[test]
    fn single_vertex() {
        let (mesh, diagnostics) = parse(b"v 1.0 2.0 3.0\n");
        assert_eq!(mesh.vertex_count(), 1);
        let v = mesh.vertex(0).unwrap();
        assert_relative_eq!(v.x, 1.0);
        assert_relative_eq!(v.y, 2.0);
        assert_relative_eq!(v.z, 3.0);
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn comment_line_is_ignored() {
        let (mesh, diagnostics) = parse(b"# comment\nv 1 2 3\n");
        assert_eq!(mesh.vertices(), &[Vertex::new(1.0, 2.0, 3.0)]);
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn comment_newline_joins_pending_text_with_next_line() {
        let (mesh, diagnostics) = parse(b"v 1 2 3 # c\nv 4 5 6\n");
        assert_eq!(mesh.vertices(), &[Vertex::new(1.0, 2.0, 3.0)]);
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn joined_line_keeps_counting_lines() {
        let (mesh, diagnostics) = parse(b"v 1 # c\n2 3\nv x 0 0\n");
        assert_eq!(mesh.vertex_count(), 2);
        assert_eq!(mesh.vertex(0), Some(&Vertex::new(1.0, 2.0, 3.0)));
        assert_eq!(diagnostics[0].line(), 3);
    }

    #[test]
    fn comment_contents_never_reach_a_record() {
        let config = ParserConfig {
            comment_end: CommentEnd::EndLine,
            ..Default::default()
        };
        let (mesh, _) = parse_with(config, b"# v 9 9 9\nv 1 2 3 # v 7 7 7\nv 4 5 6\n");
        assert_eq!(
            mesh.vertices(),
            &[Vertex::new(1.0, 2.0, 3.0), Vertex::new(4.0, 5.0, 6.0)]
        );
    }

    #[test]
    fn face_copies_vertices_in_order() {
        let (mesh, _) = parse(&with_triangle("f 1 2 3\n"));
        assert_eq!(mesh.face_count(), 1);
        let face = mesh.face(0).unwrap();
        assert_eq!(face.vertices[0], Vertex::new(0.0, 0.0, 0.0));
        assert_eq!(face.vertices[1], Vertex::new(1.0, 0.0, 0.0));
        assert_eq!(face.vertices[2], Vertex::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn compound_references_match_plain() {
        let (plain, _) = parse(&with_triangle("f 1 2 3\n"));
        let (compound, _) = parse(&with_triangle("f 1/1/1 2/2/2 3/3/3\n"));
        let (no_texture, _) = parse(&with_triangle("f 1//1 2//2 3//3\n"));
        assert_eq!(plain.face(0), compound.face(0));
        assert_eq!(plain.face(0), no_texture.face(0));
    }

    #[test]
    fn out_of_range_reference_falls_back_to_first_vertex() {
        let (mesh, diagnostics) = parse(&with_triangle("f 1 2 9\n"));
        let face = mesh.face(0).unwrap();
        assert_eq!(face.vertices[2], *mesh.vertex(0).unwrap());
        assert_eq!(
            diagnostics,
            vec![Diagnostic::ReferenceOutOfRange {
                line: 4,
                reference: 9,
                vertex_count: 3,
            }]
        );
    }

    #[test]
    fn zero_and_negative_references_are_out_of_range() {
        let (mesh, diagnostics) = parse(&with_triangle("f 0 -1 2\n"));
        let face = mesh.face(0).unwrap();
        assert_eq!(face.vertices[0], *mesh.vertex(0).unwrap());
        assert_eq!(face.vertices[1], *mesh.vertex(0).unwrap());
        assert_eq!(face.vertices[2], *mesh.vertex(1).unwrap());
        assert_eq!(diagnostics.len(), 2);
    }

    #[test]
    fn reference_to_later_vertex_is_out_of_range() {
        let (mesh, diagnostics) = parse(b"v 0 0 0\nv 1 0 0\nf 1 2 3\nv 0 1 0\n");
        assert_eq!(mesh.face(0).unwrap().vertices[2], Vertex::new(0.0, 0.0, 0.0));
        assert_eq!(diagnostics.len(), 1);
    }

    #[test]
    fn skip_face_policy_drops_face() {
        let config = ParserConfig {
            bad_reference: BadReferencePolicy::SkipFace,
            ..Default::default()
        };
        let (mesh, diagnostics) = parse_with(config, &with_triangle("f 1 2 9\nf 3 2 1\n"));
        assert_eq!(mesh.face_count(), 1);
        assert_eq!(mesh.face(0).unwrap().vertices[0], Vertex::new(0.0, 1.0, 0.0));
        assert!(diagnostics.contains(&Diagnostic::FaceSkipped { line: 4 }));
    }

    #[test]
    fn malformed_number_defaults_to_zero() {
        let (mesh, diagnostics) = parse(b"v 1.5 abc 2\n");
        assert_eq!(mesh.vertices(), &[Vertex::new(1.5, 0.0, 2.0)]);
        assert_eq!(
            diagnostics,
            vec![Diagnostic::MalformedNumber {
                line: 1,
                token: "abc".into(),
            }]
        );
    }

    #[test]
    fn numeric_prefix_is_not_accepted() {
        let (mesh, diagnostics) = parse(b"v 1.5abc +2 3\n");
        assert_eq!(mesh.vertices(), &[Vertex::new(0.0, 2.0, 3.0)]);
        assert_eq!(
            diagnostics,
            vec![Diagnostic::MalformedNumber {
                line: 1,
                token: "1.5abc".into(),
            }]
        );
    }

    #[test]
    fn malformed_face_index_becomes_out_of_range() {
        let (mesh, diagnostics) = parse(&with_triangle("f 2 x 3\n"));
        assert_eq!(mesh.face(0).unwrap().vertices[1], *mesh.vertex(0).unwrap());
        assert_eq!(diagnostics.len(), 2);
        assert!(matches!(diagnostics[0], Diagnostic::MalformedNumber { .. }));
        assert!(matches!(
            diagnostics[1],
            Diagnostic::ReferenceOutOfRange { reference: 0, .. }
        ));
    }

    #[test]
    fn polygon_uses_first_three_references() {
        let (mesh, _) = parse(b"v 0 0 0\nv 1 0 0\nv 1 1 0\nv 0 1 0\nf 1 2 3 4\n");
        assert_eq!(mesh.face_count(), 1);
        assert_eq!(mesh.face(0).unwrap().vertices[2], Vertex::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn unknown_records_are_skipped() {
        let (mesh, diagnostics) =
            parse(b"o cube\nvn 0 0 1\nvt 0 0\ns off\nusemtl x\nv 1 1 1\n");
        assert_eq!(mesh.vertex_count(), 1);
        assert_eq!(mesh.face_count(), 0);
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn irregular_whitespace() {
        let (mesh, _) = parse(b"  v\t 1   2 \t3  \r\n\n\n");
        assert_eq!(mesh.vertices(), &[Vertex::new(1.0, 2.0, 3.0)]);
    }

    #[test]
    fn short_record_is_an_error() {
        let mut parser = ObjParser::with_sink(ParserConfig::default(), Vec::<Diagnostic>::new());
        let err = parser.parse_bytes(b"v 1 2 3\nv 1 2\n").unwrap_err();
        assert!(matches!(err, ParseError::MissingToken { line: 2, index: 3 }));

        let err = parser.parse_bytes(&with_triangle("f 1 2\n")).unwrap_err();
        assert!(matches!(err, ParseError::MissingToken { line: 4, index: 3 }));
    }

    #[test]
    fn face_before_any_vertex_is_an_error() {
        let mut parser = ObjParser::with_sink(ParserConfig::default(), Vec::<Diagnostic>::new());
        let err = parser.parse_bytes(b"f 1 2 3\n").unwrap_err();
        assert!(matches!(err, ParseError::NoVertices { line: 1 }));
    }

    #[test]
    fn face_before_any_vertex_is_skipped_under_skip_policy() {
        let config = ParserConfig {
            bad_reference: BadReferencePolicy::SkipFace,
            ..Default::default()
        };
        let (mesh, diagnostics) = parse_with(config, b"f 1 2 3\n");
        assert_eq!(mesh.face_count(), 0);
        assert_eq!(diagnostics.last(), Some(&Diagnostic::FaceSkipped { line: 1 }));
    }

    #[test]
    fn unterminated_last_line_is_dropped_by_default() {
        let (mesh, _) = parse(b"v 1 2 3\nv 4 5 6");
        assert_eq!(mesh.vertex_count(), 1);
    }

    #[test]
    fn unterminated_last_line_parsed_when_configured() {
        let config = ParserConfig {
            trailing_line: TrailingLine::Parse,
            ..Default::default()
        };
        let (mesh, _) = parse_with(config, b"v 1 2 3\nv 4 5 6");
        assert_eq!(mesh.vertex_count(), 2);
        assert_eq!(mesh.vertex(1), Some(&Vertex::new(4.0, 5.0, 6.0)));
    }

    #[test]
    fn empty_input() {
        let (mesh, diagnostics) = parse(b"");
        assert!(mesh.is_empty());
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn line_numbers_count_comment_lines() {
        let (_, diagnostics) = parse(b"# header\n\nv 1 oops 3\n");
        assert_eq!(diagnostics[0].line(), 3);
    }
}
