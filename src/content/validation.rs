//! Validation for level data before geometry is built.

use std::collections::HashSet;

use super::data::{EMPTY_TILE, LevelDef};

/// A validation problem found in a level definition.
#[derive(Debug, Clone, PartialEq)]
pub enum LevelValidationError {
    /// A grid cell references a tile id with no shape.
    UnknownTile { row: usize, column: usize, id: u32 },
    /// A row is shorter or longer than the widest row.
    RaggedRow {
        row: usize,
        length: usize,
        expected: usize,
    },
    /// Two shapes share an id; only the first is used.
    DuplicateShape { id: u32 },
    /// A shape has no outline vertex to anchor its rectangle.
    EmptyOutline { id: u32 },
}

impl std::fmt::Display for LevelValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownTile { row, column, id } => {
                write!(f, "cell ({}, {}) references unknown tile id {}", row, column, id)
            }
            Self::RaggedRow {
                row,
                length,
                expected,
            } => write!(
                f,
                "row {} has {} cells, expected {}",
                row, length, expected
            ),
            Self::DuplicateShape { id } => write!(f, "tile shape {} is defined twice", id),
            Self::EmptyOutline { id } => write!(f, "tile shape {} has an empty outline", id),
        }
    }
}

/// Validate the grid against the shape table.
/// Returns a list of problems, empty if the level is consistent.
pub fn validate_level(level: &LevelDef) -> Vec<LevelValidationError> {
    let mut errors = Vec::new();

    let mut seen = HashSet::new();
    for shape in &level.shapes {
        if !seen.insert(shape.id) {
            errors.push(LevelValidationError::DuplicateShape { id: shape.id });
        }
        if shape.outline.is_empty() {
            errors.push(LevelValidationError::EmptyOutline { id: shape.id });
        }
    }

    let expected = level.columns();
    for (row, cells) in level.grid.iter().enumerate() {
        if cells.len() != expected {
            errors.push(LevelValidationError::RaggedRow {
                row,
                length: cells.len(),
                expected,
            });
        }

        for (column, &id) in cells.iter().enumerate() {
            if id != EMPTY_TILE && !seen.contains(&id) {
                errors.push(LevelValidationError::UnknownTile { row, column, id });
            }
        }
    }

    errors
}
