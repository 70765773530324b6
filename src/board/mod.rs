//! Board collaborator: cells, the ground-truth minefield, and minefield I/O

pub mod cell;
pub mod io;
pub mod minefield;

pub use cell::Cell;
pub use io::{
    create_example_minefields, load_minefield_from_file, minefield_to_string,
    parse_minefield_from_string, save_minefield_to_file,
};
pub use minefield::{BoardError, Minefield};
