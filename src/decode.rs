use std::fmt::Display;

use crate::error::Error;
use crate::model::IntVar;
use crate::solver::Solution;
use crate::topology::GridModel;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Black,
    Letter(char),
}

/// A decoded grid. Rendered with '.' for black squares, one row per line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolvedGrid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl SolvedGrid {
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn cell(&self, r: usize, c: usize) -> Cell {
        self.cells[r * self.cols + c]
    }
}

impl Display for SolvedGrid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for r in 0..self.rows {
            for c in 0..self.cols {
                match self.cell(r, c) {
                    Cell::Black => write!(f, ".")?,
                    Cell::Letter(ch) => write!(f, "{}", ch)?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

fn decode_cell(var: IntVar, solution: &Solution) -> Result<Cell, Error> {
    match solution.value(var) {
        0 => Ok(Cell::Black),
        v @ 1..=26 => Ok(Cell::Letter((b'A' + (v - 1) as u8) as char)),
        v => Err(Error::new(format!("letter value {} out of range", v))),
    }
}

/// Reads the letter variables of a solved model back into a grid.
pub fn decode_grid(grid: &GridModel, solution: &Solution) -> Result<SolvedGrid, Error> {
    let mut cells = Vec::with_capacity(grid.rows() * grid.cols());
    for r in 0..grid.rows() {
        for c in 0..grid.cols() {
            cells.push(decode_cell(grid.letter(r, c), solution)?);
        }
    }
    Ok(SolvedGrid { rows: grid.rows(), cols: grid.cols(), cells })
}
