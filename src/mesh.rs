//! In-memory mesh model produced by the OBJ parser.
//!
//! A [`Mesh`] keeps its vertices in file order and its faces as
//! self-contained triangles: each [`Face`] holds copies of its three corner
//! vertices rather than indices, so faces stay valid no matter what happens
//! to the vertex list afterwards.

use std::path::Path;

use crate::error::ParseError;
use crate::obj::ObjParser;

/// A vertex position as read from the file.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vertex {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vertex {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// A triangle, stored by value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Face {
    pub vertices: [Vertex; 3],
}

impl Face {
    pub const fn new(v0: Vertex, v1: Vertex, v2: Vertex) -> Self {
        Self {
            vertices: [v0, v1, v2],
        }
    }

    /// The three edges in drawing order: v0→v1, v1→v2, v2→v0.
    pub fn edges(&self) -> [(Vertex, Vertex); 3] {
        let [a, b, c] = self.vertices;
        [(a, b), (b, c), (c, a)]
    }
}

/// Vertices and triangular faces of a parsed OBJ file.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Mesh {
    vertices: Vec<Vertex>,
    faces: Vec<Face>,
}

impl Mesh {
    pub fn new(vertices: Vec<Vertex>, faces: Vec<Face>) -> Self {
        Self { vertices, faces }
    }

    /// Parse OBJ text with the default parser, reporting through `tracing`.
    pub fn from_obj_bytes(bytes: &[u8]) -> Result<Self, ParseError> {
        ObjParser::new().parse_bytes(bytes)
    }

    /// Load and parse an OBJ file with the default parser.
    pub fn load_obj<P: AsRef<Path>>(path: P) -> Result<Self, ParseError> {
        ObjParser::new().parse_file(path)
    }

    // ============ Faces ============

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Get a face by 0-based index.
    pub fn face(&self, index: usize) -> Option<&Face> {
        self.faces.get(index)
    }

    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    // ============ Vertices ============

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get a vertex by 0-based index (OBJ numbering starts at 1).
    pub fn vertex(&self, index: usize) -> Option<&Vertex> {
        self.vertices.get(index)
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() && self.faces.is_empty()
    }

    // Builder hooks for the parser; the public API stays read-only.

    pub(crate) fn push_vertex(&mut self, vertex: Vertex) {
        self.vertices.push(vertex);
    }

    pub(crate) fn push_face(&mut self, face: Face) {
        self.faces.push(face);
    }
}
