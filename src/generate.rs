use std::fmt::Display;

use crate::decode::{decode_grid, SolvedGrid};
use crate::error::Error;
use crate::model::CpModel;
use crate::solver::{CpSolver, SolveOptions, SolveStatus};
use crate::topology::build_grid_model;
use crate::words::WordIndex;

/// What can go wrong when generating a grid, separated by whose fault it is:
/// bad inputs, a proven-empty solution space, exhausted limits, or a solver
/// misbehavior.
#[derive(Debug)]
pub enum GenerateError {
    Configuration(Error),
    Infeasible,
    Inconclusive,
    Collaborator(String),
}

impl Display for GenerateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenerateError::Configuration(e) => write!(f, "invalid configuration: {}", e),
            GenerateError::Infeasible => {
                write!(f, "no grid satisfies the wordlist and dimensions")
            }
            GenerateError::Inconclusive => {
                write!(f, "search limits exhausted before an answer was found")
            }
            GenerateError::Collaborator(msg) => write!(f, "solver failure: {}", msg),
        }
    }
}

impl std::error::Error for GenerateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GenerateError::Configuration(e) => Some(e),
            _ => None,
        }
    }
}

/// Builds the grid model once, runs one solve, and decodes the result.
pub fn generate(
    index: &WordIndex,
    rows: usize,
    cols: usize,
    options: SolveOptions,
) -> Result<SolvedGrid, GenerateError> {
    let mut model = CpModel::new();
    let grid = build_grid_model(&mut model, index, rows, cols)
        .map_err(GenerateError::Configuration)?;
    let outcome = CpSolver::with_options(options).solve(&model);
    match outcome.status {
        SolveStatus::Optimal | SolveStatus::Feasible => {
            let solution = outcome.solution.ok_or_else(|| {
                GenerateError::Collaborator("success status without a solution".to_string())
            })?;
            decode_grid(&grid, &solution).map_err(|e| GenerateError::Collaborator(e.to_string()))
        }
        SolveStatus::Infeasible => Err(GenerateError::Infeasible),
        SolveStatus::Unknown => Err(GenerateError::Inconclusive),
        SolveStatus::Error => Err(GenerateError::Collaborator("internal solver error".to_string())),
    }
}
