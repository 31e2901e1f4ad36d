//! World file parsing. A world description holds one polygon per line,
//! vertices separated by `;`, each vertex `x,y` with integer coordinates.
//! The loop closes implicitly from the last vertex back to the first.
//! Worlds conventionally come as two files: one of enclosure polygons and
//! one of turf polygons.

use std::fs;
use std::path::Path;

use grid_util::point::Point;
use thiserror::Error;

use crate::geometry::Polygon;

/// Errors produced while reading a world description. The search core
/// assumes well-formed polygon sets; this module is where malformed input
/// is rejected.
#[derive(Debug, Error)]
pub enum WorldError {
    #[error("could not read world file: {0}")]
    Io(#[from] std::io::Error),
    #[error("line {line}: malformed vertex {vertex:?}, expected \"x,y\"")]
    MalformedVertex { line: usize, vertex: String },
    #[error("line {line}: polygon has {count} vertices, need at least 3")]
    TooFewVertices { line: usize, count: usize },
}

fn malformed(line: usize, vertex: &str) -> WorldError {
    WorldError::MalformedVertex {
        line,
        vertex: vertex.to_owned(),
    }
}

/// Parses a world description from text. Blank lines are skipped.
pub fn parse_polygons(text: &str) -> Result<Vec<Polygon>, WorldError> {
    let mut polygons = Vec::new();
    for (ix, raw) in text.lines().enumerate() {
        let line = ix + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            continue;
        }
        let mut vertices = Vec::new();
        for vertex in trimmed.split(';') {
            let (x, y) = vertex
                .split_once(',')
                .ok_or_else(|| malformed(line, vertex))?;
            let x: i32 = x.trim().parse().map_err(|_| malformed(line, vertex))?;
            let y: i32 = y.trim().parse().map_err(|_| malformed(line, vertex))?;
            vertices.push(Point::new(x, y));
        }
        if vertices.len() < 3 {
            return Err(WorldError::TooFewVertices {
                line,
                count: vertices.len(),
            });
        }
        polygons.push(Polygon::new(vertices));
    }
    Ok(polygons)
}

/// Reads and parses a world file.
pub fn load_polygons<P: AsRef<Path>>(path: P) -> Result<Vec<Polygon>, WorldError> {
    parse_polygons(&fs::read_to_string(path)?)
}
