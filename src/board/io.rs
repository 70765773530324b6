//! File I/O for fixed minefields
//!
//! Format: one line per row, '0' for a safe cell and '1' for a mine.

use super::{Cell, Minefield};
use anyhow::{Context, Result};
use std::path::Path;

/// Load a minefield from a text file
pub fn load_minefield_from_file<P: AsRef<Path>>(path: P) -> Result<Minefield> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read minefield file: {}", path.as_ref().display()))?;

    parse_minefield_from_string(&content)
        .with_context(|| format!("Failed to parse minefield from file: {}", path.as_ref().display()))
}

/// Parse a minefield from its string representation
pub fn parse_minefield_from_string(content: &str) -> Result<Minefield> {
    let lines: Vec<&str> = content
        .lines()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .collect();

    if lines.is_empty() {
        anyhow::bail!("Minefield file is empty or contains no valid rows");
    }

    let width = lines[0].len();
    let mut cells = Vec::with_capacity(lines.len());

    for (row_idx, line) in lines.iter().enumerate() {
        if line.len() != width {
            anyhow::bail!(
                "Row {} has length {}, expected {} (all rows must have the same length)",
                row_idx,
                line.len(),
                width
            );
        }

        let mut row = Vec::with_capacity(width);
        for (col_idx, ch) in line.chars().enumerate() {
            match ch {
                '0' => row.push(false),
                '1' => row.push(true),
                _ => anyhow::bail!(
                    "Invalid character '{}' at position ({}, {}). Only '0' and '1' are allowed",
                    ch,
                    row_idx,
                    col_idx
                ),
            }
        }
        cells.push(row);
    }

    Ok(Minefield::from_cells(cells)?)
}

/// Save a minefield to a text file
pub fn save_minefield_to_file<P: AsRef<Path>>(field: &Minefield, path: P) -> Result<()> {
    let content = minefield_to_string(field);

    if let Some(parent) = path.as_ref().parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    std::fs::write(&path, content)
        .with_context(|| format!("Failed to write minefield to file: {}", path.as_ref().display()))?;

    Ok(())
}

/// Convert a minefield to its string representation
pub fn minefield_to_string(field: &Minefield) -> String {
    let mut result = String::with_capacity(field.height * (field.width + 1));

    for row in 0..field.height {
        for col in 0..field.width {
            let is_mine = field.mines().contains(&Cell::new(row, col));
            result.push(if is_mine { '1' } else { '0' });
        }
        result.push('\n');
    }

    result
}

/// Create example minefield files used by the `setup` command
pub fn create_example_minefields<P: AsRef<Path>>(dir: P) -> Result<()> {
    let dir = dir.as_ref();
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

    // A 4x4 board with a single corner mine: the agent can always clear it
    let corner = "\
        0000\n\
        0000\n\
        0000\n\
        0001\n";
    std::fs::write(dir.join("corner.txt"), corner)?;

    // The classic beginner shape: 8x8 with a diagonal band of mines
    let diagonal = "\
        10000000\n\
        01000000\n\
        00100000\n\
        00010000\n\
        00001000\n\
        00000100\n\
        00000010\n\
        00000001\n";
    std::fs::write(dir.join("diagonal.txt"), diagonal)?;

    // A denser 5x5 board where guessing is usually required
    let cluster = "\
        00000\n\
        01100\n\
        01100\n\
        00000\n\
        00011\n";
    std::fs::write(dir.join("cluster.txt"), cluster)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Cell;
    use tempfile::tempdir;

    #[test]
    fn test_parse_minefield() {
        let field = parse_minefield_from_string("010\n000\n101\n").unwrap();
        assert_eq!(field.height, 3);
        assert_eq!(field.width, 3);
        assert_eq!(field.mine_count(), 3);
        assert!(field.mines().contains(&Cell::new(0, 1)));
        assert!(field.mines().contains(&Cell::new(2, 0)));
        assert!(field.mines().contains(&Cell::new(2, 2)));
    }

    #[test]
    fn test_parse_rejects_invalid_character() {
        let result = parse_minefield_from_string("01\n0x\n");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Invalid character"));
    }

    #[test]
    fn test_parse_rejects_ragged_rows() {
        assert!(parse_minefield_from_string("010\n01\n").is_err());
    }

    #[test]
    fn test_parse_rejects_empty_input() {
        assert!(parse_minefield_from_string("\n  \n").is_err());
    }

    #[test]
    fn test_round_trip_through_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("field.txt");

        let field = parse_minefield_from_string("0110\n0000\n1001\n").unwrap();
        save_minefield_to_file(&field, &path).unwrap();

        let loaded = load_minefield_from_file(&path).unwrap();
        assert_eq!(loaded.height, field.height);
        assert_eq!(loaded.width, field.width);
        assert_eq!(loaded.mines(), field.mines());
    }

    #[test]
    fn test_create_example_minefields() {
        let dir = tempdir().unwrap();
        create_example_minefields(dir.path()).unwrap();

        let corner = load_minefield_from_file(dir.path().join("corner.txt")).unwrap();
        assert_eq!(corner.mine_count(), 1);
        assert!(corner.mines().contains(&Cell::new(3, 3)));

        let diagonal = load_minefield_from_file(dir.path().join("diagonal.txt")).unwrap();
        assert_eq!(diagonal.mine_count(), 8);
    }
}
