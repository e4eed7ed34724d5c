//! Deduction strategies.
//!
//! Each strategy implements the [`Strategy`] trait and is applied to a
//! [`Grid`](cluegrid_core::Grid) together with its
//! [`CandidateStore`](cluegrid_core::CandidateStore). The default chain,
//! ordered from weakest to strongest, is:
//!
//! | Strategy             | Weight | Level    |
//! |----------------------|-------:|----------|
//! | Simple Single        |      1 | Easy     |
//! | Slicing and Slotting |      2 | Easy     |
//! | Naked Single         |      3 | Easy     |
//! | Hidden Single        |      4 | Easy     |
//! | Locked Candidates    |     25 | Moderate |
//! | Naked Pair           |     40 | Hard     |
//! | Hidden Pair          |     50 | Hard     |
//! | Naked Triple         |     70 | Expert   |
//! | Hidden Triple        |     80 | Expert   |
//! | Naked Quad           |    110 | Expert   |
//! | Hidden Quad          |    120 | Expert   |
//! | X-Wing               |    150 | Diabolic |
//! | Swordfish            |    200 | Diabolic |
//! | Jellyfish            |    260 | Diabolic |
//!
//! The order matters: the logic solver always applies the first strategy
//! that succeeds, so it is both the solving order and the grading order. A
//! solve is graded at least at the highest level it needed.

pub use self::{
    fish::Fish, hidden_single::HiddenSingle, hidden_subset::HiddenSubset,
    locked_candidates::LockedCandidates, naked_single::NakedSingle, naked_subset::NakedSubset,
    simple_single::SimpleSingle, slicing_and_slotting::SlicingAndSlotting, traits::*,
};

mod combinations;
mod fish;
mod hidden_single;
mod hidden_subset;
mod locked_candidates;
mod naked_single;
mod naked_subset;
mod simple_single;
mod slicing_and_slotting;
mod traits;

/// Returns the default strategy chain, ordered from weakest to strongest.
///
/// # Examples
///
/// ```
/// use cluegrid_solver::{Grading, Strategy as _, strategy};
///
/// let chain = strategy::all_strategies();
/// assert_eq!(chain.len(), 14);
/// assert_eq!(chain[0].name(), "Simple Single");
/// assert!(chain.windows(2).all(|w| w[0].level() <= w[1].level()));
/// assert_eq!(chain.last().map(|s| s.level()), Some(Grading::Diabolic));
/// ```
#[must_use]
pub fn all_strategies() -> Vec<BoxedStrategy> {
    let advanced: [BoxedStrategy; 10] = [
        Box::new(LockedCandidates::new()),
        Box::new(NakedSubset::pair()),
        Box::new(HiddenSubset::pair()),
        Box::new(NakedSubset::triple()),
        Box::new(HiddenSubset::triple()),
        Box::new(NakedSubset::quad()),
        Box::new(HiddenSubset::quad()),
        Box::new(Fish::x_wing()),
        Box::new(Fish::swordfish()),
        Box::new(Fish::jellyfish()),
    ];
    let mut strategies = singles_strategies();
    strategies.extend(advanced);
    strategies
}

/// Returns the four single strategies.
///
/// These solve every puzzle graded `Easy` and form a stable baseline for
/// benchmarks.
#[must_use]
pub fn singles_strategies() -> Vec<BoxedStrategy> {
    vec![
        Box::new(SimpleSingle::new()),
        Box::new(SlicingAndSlotting::new()),
        Box::new(NakedSingle::new()),
        Box::new(HiddenSingle::new()),
    ]
}
