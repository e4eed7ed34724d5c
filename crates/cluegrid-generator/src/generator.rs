use cluegrid_core::{CandidateStore, Dimension, Grid, Position};
use cluegrid_solver::{
    ExactCoverSolver, Grading, LogicOutcome, LogicReport, LogicSolver, SolutionCount, SolveError,
    SolverError,
};
use derive_more::{Display, Error, From};
use rand::{
    SeedableRng as _,
    seq::{IndexedRandom as _, SliceRandom as _},
};
use rand_pcg::Pcg64;

use crate::{PuzzleSeed, Symmetry};

/// Tunables of a [`PuzzleGenerator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Attempts made before giving up with [`GeneratorError::Exhausted`].
    pub max_iterations: usize,
    /// Symmetric removals made before the first uniqueness check.
    ///
    /// The batch is verified once afterwards and a failed check abandons the
    /// attempt.
    pub unchecked_removals: usize,
    /// Clue groups added back at most while adjusting to the target grading.
    /// `None` means one per cell of the grid.
    pub max_grading_iterations: Option<usize>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_iterations: 100,
            unchecked_removals: 4,
            max_grading_iterations: None,
        }
    }
}

/// A generated puzzle together with how it was made.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    /// The puzzle, with `0` in every cell left for the solver.
    pub puzzle: Grid,
    /// The unique completion of the puzzle.
    pub solution: Grid,
    /// Seed that reproduces this puzzle with the same solver and config.
    pub seed: PuzzleSeed,
    /// Symmetry of the given cells.
    pub symmetry: Symmetry,
    /// Grading of the logic solve, equal to the requested target.
    pub grading: Grading,
    /// Score of the logic solve.
    pub score: u32,
}

/// Errors returned by [`PuzzleGenerator`].
#[derive(Debug, Clone, PartialEq, Eq, Display, Error, From)]
pub enum GeneratorError {
    /// Every attempt was abandoned.
    #[display("no puzzle with the requested grading after {attempts} attempts")]
    #[from(ignore)]
    Exhausted {
        /// Number of attempts made.
        attempts: usize,
    },
    /// The exact-cover solver rejected a grid.
    #[display("exact-cover solver failed: {_0}")]
    Solve(SolveError),
    /// The logic solver found a contradiction.
    #[display("logic solver failed: {_0}")]
    Logic(SolverError),
}

/// Why a single attempt was abandoned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
enum Rejection {
    #[display("fill ran out of candidates")]
    FillExhausted,
    #[display("unchecked removals lost uniqueness")]
    UncheckedBatch,
    #[display("puzzle graded easier than the target")]
    TooEasy,
    #[display("puzzle stayed harder than the target")]
    TooHard,
}

#[derive(Debug, From)]
enum AttemptError {
    Rejected(Rejection),
    Failed(GeneratorError),
}

impl From<SolveError> for AttemptError {
    fn from(err: SolveError) -> Self {
        Self::Failed(err.into())
    }
}

impl From<SolverError> for AttemptError {
    fn from(err: SolverError) -> Self {
        Self::Failed(err.into())
    }
}

/// Generates puzzles with a unique solution and a requested grading.
///
/// Each attempt runs three phases:
///
/// 1. **Fill**: place random values until the exact-cover solver reports a
///    unique completion, which becomes the solution.
/// 2. **Reduce**: clear symmetric groups of cells in random order, keeping
///    each removal only while the solution stays unique.
/// 3. **Grade**: rate the puzzle with the logic solver capped at the target,
///    adding symmetric groups of clues back until the grading matches.
///
/// The generator owns an exact-cover solver sized for its dimension; use one
/// generator per thread.
///
/// # Examples
///
/// ```
/// use cluegrid_core::Dimension;
/// use cluegrid_generator::{PuzzleGenerator, PuzzleSeed, Symmetry};
/// use cluegrid_solver::{Grading, LogicSolver};
///
/// let solver = LogicSolver::with_all_strategies();
/// let mut generator = PuzzleGenerator::new(&solver, Dimension::STANDARD);
///
/// let seed = PuzzleSeed::from_phrase("example");
/// let generated = generator.generate_with_seed(Grading::Easy, Symmetry::Rotational180, seed)?;
/// assert_eq!(generated.grading, Grading::Easy);
/// assert_eq!(generated.seed, seed);
/// # Ok::<(), cluegrid_generator::GeneratorError>(())
/// ```
#[derive(Debug)]
pub struct PuzzleGenerator<'a> {
    solver: &'a LogicSolver,
    exact: ExactCoverSolver,
    config: GeneratorConfig,
}

impl<'a> PuzzleGenerator<'a> {
    /// Creates a generator for grids of `dim` graded by `solver`.
    #[must_use]
    pub fn new(solver: &'a LogicSolver, dim: Dimension) -> Self {
        Self {
            solver,
            exact: ExactCoverSolver::new(dim),
            config: GeneratorConfig::default(),
        }
    }

    /// Replaces the configuration.
    #[must_use]
    pub fn with_config(mut self, config: GeneratorConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Returns the grid dimension.
    #[must_use]
    pub fn dimension(&self) -> Dimension {
        self.exact.dimension()
    }

    /// Generates a puzzle from a fresh random seed.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::Exhausted`] if no attempt reached the target.
    pub fn generate(
        &mut self,
        grading: Grading,
        symmetry: Symmetry,
    ) -> Result<GeneratedPuzzle, GeneratorError> {
        self.generate_with_seed(grading, symmetry, PuzzleSeed::random())
    }

    /// Generates a puzzle deterministically from `seed`.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::Exhausted`] if no attempt reached the target.
    pub fn generate_with_seed(
        &mut self,
        grading: Grading,
        symmetry: Symmetry,
        seed: PuzzleSeed,
    ) -> Result<GeneratedPuzzle, GeneratorError> {
        let mut rng = Pcg64::from_seed(*seed.as_bytes());
        let attempts = self.config.max_iterations;

        for attempt in 1..=attempts {
            match self.attempt(&mut rng, grading, symmetry) {
                Ok((puzzle, solution, report)) => {
                    log::debug!(
                        "attempt {attempt}: generated {grading} puzzle with {} givens, score {}",
                        puzzle.given_count(),
                        report.score()
                    );
                    return Ok(GeneratedPuzzle {
                        puzzle,
                        solution,
                        seed,
                        symmetry,
                        grading: report.grading(),
                        score: report.score(),
                    });
                }
                Err(AttemptError::Rejected(reason)) => {
                    log::debug!("attempt {attempt}: {reason}");
                }
                Err(AttemptError::Failed(err)) => return Err(err),
            }
        }
        Err(GeneratorError::Exhausted { attempts })
    }

    fn attempt(
        &mut self,
        rng: &mut Pcg64,
        grading: Grading,
        symmetry: Symmetry,
    ) -> Result<(Grid, Grid, LogicReport), AttemptError> {
        let solution = self.fill(rng)?;
        let reduced = self.reduce(&solution, symmetry, rng)?;
        log::debug!("reduced to {} givens", reduced.given_count());
        let (puzzle, report) = self.grade(&reduced, &solution, grading, symmetry, rng)?;
        Ok((puzzle, solution, report))
    }

    /// Builds a random complete grid.
    fn fill(&mut self, rng: &mut Pcg64) -> Result<Grid, AttemptError> {
        let dim = self.dimension();
        let mut grid = Grid::new(dim);
        let mut candidates = CandidateStore::new(dim);
        let mut order: Vec<Position> = dim.positions().collect();
        order.shuffle(rng);

        for pos in order {
            let mut values: Vec<u8> = candidates.candidates(pos).iter().collect();
            values.shuffle(rng);
            let mut placed = false;
            for value in values {
                grid.set(pos, value);
                let mut completed = grid.clone();
                match self.exact.solve_grid(&mut completed)? {
                    SolutionCount::NoSolution => {
                        grid.clear(pos);
                        candidates.remove(value, pos);
                    }
                    SolutionCount::MultipleSolutions => {
                        candidates.place(value, pos);
                        placed = true;
                        break;
                    }
                    SolutionCount::UniqueSolution => return Ok(completed),
                }
            }
            if !placed {
                return Err(Rejection::FillExhausted.into());
            }
        }
        Err(Rejection::FillExhausted.into())
    }

    /// Removes as many symmetric clue groups from `solution` as uniqueness
    /// allows.
    fn reduce(
        &mut self,
        solution: &Grid,
        symmetry: Symmetry,
        rng: &mut Pcg64,
    ) -> Result<Grid, AttemptError> {
        let dim = self.dimension();
        let mut puzzle = solution.clone();
        let mut order: Vec<Position> = dim.positions().collect();
        order.shuffle(rng);
        let mut order = order.into_iter();

        for pos in order.by_ref().take(self.config.unchecked_removals) {
            clear_group(&mut puzzle, symmetry, pos);
        }
        if !self.is_unique(&puzzle)? {
            return Err(Rejection::UncheckedBatch.into());
        }

        for pos in order {
            if puzzle.is_empty_at(pos) {
                continue;
            }
            let removed = clear_group(&mut puzzle, symmetry, pos);
            if !self.is_unique(&puzzle)? {
                for (pos, value) in removed {
                    puzzle.set(pos, value);
                }
            }
        }
        Ok(puzzle)
    }

    /// Adds clue groups back until the logic grading matches `target`.
    ///
    /// While the capped solve gets stuck, each clue goes to a cell the solver
    /// could not fill. Once it solves but grades too hard, any empty cell is
    /// used.
    fn grade(
        &self,
        reduced: &Grid,
        solution: &Grid,
        target: Grading,
        symmetry: Symmetry,
        rng: &mut Pcg64,
    ) -> Result<(Grid, LogicReport), AttemptError> {
        let dim = self.dimension();
        let limit = self
            .config
            .max_grading_iterations
            .unwrap_or(dim.cell_count());
        let mut puzzle = reduced.clone();

        for iteration in 0..=limit {
            let (report, stopped) = self.rate(&puzzle, target)?;
            if let Some(done) = judge(&report, target) {
                return done.map(|()| (puzzle, report));
            }
            if iteration == limit {
                break;
            }
            let mut open: Vec<Position> = stopped.empty_positions().collect();
            if open.is_empty() {
                open = puzzle.empty_positions().collect();
            }
            let Some(&pos) = open.choose(rng) else {
                break;
            };
            for pos in symmetry.group(dim, pos) {
                if puzzle.is_empty_at(pos) {
                    puzzle.set(pos, solution[pos]);
                }
            }
        }
        Err(Rejection::TooHard.into())
    }

    /// Runs the capped logic solve and returns its report with the grid as
    /// the solver left it.
    fn rate(&self, puzzle: &Grid, cap: Grading) -> Result<(LogicReport, Grid), AttemptError> {
        let mut scratch = puzzle.clone();
        let report = self.solver.solve_capped(&mut scratch, cap)?;
        Ok((report, scratch))
    }

    fn is_unique(&mut self, puzzle: &Grid) -> Result<bool, AttemptError> {
        Ok(self.exact.count_solutions(puzzle.cells(), 2)? == 1)
    }
}

/// Decides whether grading can stop: `Some(Ok)` on the target, `Some(Err)`
/// when the puzzle is solved below it, `None` while it is still too hard.
fn judge(report: &LogicReport, target: Grading) -> Option<Result<(), AttemptError>> {
    if report.outcome() != LogicOutcome::UniqueSolution || report.grading() > target {
        return None;
    }
    if report.grading() == target {
        Some(Ok(()))
    } else {
        Some(Err(Rejection::TooEasy.into()))
    }
}

fn clear_group(puzzle: &mut Grid, symmetry: Symmetry, pos: Position) -> Vec<(Position, u8)> {
    symmetry
        .group(puzzle.dimension(), pos)
        .filter_map(|pos| puzzle.clear(pos).map(|value| (pos, value)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seed(phrase: &str) -> PuzzleSeed {
        PuzzleSeed::from_phrase(phrase)
    }

    #[track_caller]
    fn assert_valid(generated: &GeneratedPuzzle, solver: &LogicSolver) {
        let dim = generated.puzzle.dimension();
        let mut exact = ExactCoverSolver::new(dim);
        let mut completed = generated.puzzle.clone();
        assert_eq!(
            exact.solve_grid(&mut completed).unwrap(),
            SolutionCount::UniqueSolution
        );
        assert_eq!(completed, generated.solution);
        assert!(generated.solution.is_complete());
        for pos in generated.puzzle.given_positions() {
            assert_eq!(generated.puzzle[pos], generated.solution[pos]);
        }

        let mut grid = generated.puzzle.clone();
        let report = solver.solve_capped(&mut grid, generated.grading).unwrap();
        assert!(report.outcome().is_unique_solution());
        assert_eq!(report.grading(), generated.grading);
        assert_eq!(report.score(), generated.score);
    }

    #[test]
    fn test_generate_easy_standard() {
        let solver = LogicSolver::with_all_strategies();
        let mut generator = PuzzleGenerator::new(&solver, Dimension::STANDARD);
        let generated = generator
            .generate_with_seed(Grading::Easy, Symmetry::None, seed("easy"))
            .unwrap();
        assert_eq!(generated.grading, Grading::Easy);
        assert!(generated.puzzle.given_count() < 81);
        assert_valid(&generated, &solver);
    }

    #[test]
    fn test_generates_every_grading() {
        let solver = LogicSolver::with_all_strategies();
        let mut generator = PuzzleGenerator::new(&solver, Dimension::STANDARD).with_config(
            GeneratorConfig {
                max_iterations: 500,
                ..GeneratorConfig::default()
            },
        );
        for grading in Grading::ALL {
            let generated = generator
                .generate_with_seed(grading, Symmetry::None, seed(&format!("grading {grading}")))
                .unwrap_or_else(|err| panic!("{grading}: {err}"));
            assert_eq!(generated.grading, grading);
            assert_valid(&generated, &solver);
        }
    }

    #[test]
    fn test_grade_builds_up_an_empty_grid_from_the_solution() {
        let solver = LogicSolver::with_all_strategies();
        let generator = PuzzleGenerator::new(&solver, Dimension::STANDARD);
        let solution: Grid =
            "534678912672195348198342567859761423426853791713924856961537284287419635345286179"
                .parse()
                .unwrap();
        let empty = Grid::new(Dimension::STANDARD);
        let mut rng = Pcg64::from_seed([3; 32]);

        let Ok((puzzle, report)) =
            generator.grade(&empty, &solution, Grading::Easy, Symmetry::None, &mut rng)
        else {
            panic!("grading an empty grid toward Easy failed");
        };
        assert!(report.outcome().is_unique_solution());
        assert_eq!(report.grading(), Grading::Easy);
        for pos in puzzle.given_positions() {
            assert_eq!(puzzle[pos], solution[pos]);
        }
    }

    #[test]
    fn test_generate_small_grid() {
        let solver = LogicSolver::with_all_strategies();
        let mut generator = PuzzleGenerator::new(&solver, Dimension::new(2).unwrap());
        let generated = generator
            .generate_with_seed(Grading::Easy, Symmetry::Rotational180, seed("small"))
            .unwrap();
        assert_eq!(generated.puzzle.dimension().side(), 4);
        assert_valid(&generated, &solver);
    }

    #[test]
    fn test_givens_respect_symmetry() {
        let solver = LogicSolver::with_all_strategies();
        let dim = Dimension::STANDARD;
        let mut generator = PuzzleGenerator::new(&solver, dim);
        for (i, symmetry) in Symmetry::ALL.into_iter().enumerate() {
            let generated = generator
                .generate_with_seed(Grading::Easy, symmetry, seed(&format!("symmetry {i}")))
                .unwrap();
            for pos in generated.puzzle.given_positions() {
                let partner = symmetry.partner(dim, pos);
                assert!(
                    !generated.puzzle.is_empty_at(partner),
                    "{symmetry}: {pos} is given but {partner} is not"
                );
            }
        }
    }

    #[test]
    fn test_same_seed_same_puzzle() {
        let solver = LogicSolver::with_all_strategies();
        let mut generator = PuzzleGenerator::new(&solver, Dimension::STANDARD);
        let a = generator
            .generate_with_seed(Grading::Easy, Symmetry::Diagonal, seed("repeat"))
            .unwrap();
        let b = generator
            .generate_with_seed(Grading::Easy, Symmetry::Diagonal, seed("repeat"))
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_fill_produces_valid_solution() {
        let solver = LogicSolver::with_all_strategies();
        let mut generator = PuzzleGenerator::new(&solver, Dimension::STANDARD);
        let mut rng = Pcg64::from_seed([7; 32]);
        let Ok(solution) = generator.fill(&mut rng) else {
            panic!("fill failed");
        };
        assert!(solution.is_complete());
        assert!(solution.is_consistent());
    }

    #[test]
    fn test_unreachable_grading_exhausts() {
        let solver = LogicSolver::new(cluegrid_solver::strategy::singles_strategies());
        let mut generator = PuzzleGenerator::new(&solver, Dimension::new(2).unwrap())
            .with_config(GeneratorConfig {
                max_iterations: 3,
                ..GeneratorConfig::default()
            });
        assert_eq!(
            generator.generate_with_seed(Grading::Diabolic, Symmetry::None, seed("never")),
            Err(GeneratorError::Exhausted { attempts: 3 })
        );
    }

    #[test]
    fn test_zero_iterations_exhausts_immediately() {
        let solver = LogicSolver::with_all_strategies();
        let mut generator = PuzzleGenerator::new(&solver, Dimension::STANDARD).with_config(
            GeneratorConfig {
                max_iterations: 0,
                ..GeneratorConfig::default()
            },
        );
        assert_eq!(
            generator.generate(Grading::Easy, Symmetry::None),
            Err(GeneratorError::Exhausted { attempts: 0 })
        );
    }
}
