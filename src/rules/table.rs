//! The dominance relation between moves.
//!
//! A `RuleTable` stores, for every move, the set of moves it defeats. It is
//! built once through `RuleTableBuilder`, validated as a complete tournament,
//! and never mutated afterwards. Share it by reference.
//!
//! ## Invariant
//!
//! For any two distinct moves A and B exactly one of "A beats B" and
//! "B beats A" holds, and no move beats itself. `build()` refuses any table
//! that breaks this, so `resolve_round` never meets an undecidable pair.
//!
//! ```
//! use rpsls::core::Move;
//! use rpsls::rules::RuleTable;
//!
//! let table = RuleTable::canonical().unwrap();
//! assert!(table.beats(Move::Spock, Move::Rock));
//! assert!(!table.beats(Move::Rock, Move::Spock));
//! assert!(!table.beats(Move::Lizard, Move::Lizard));
//! ```

use rustc_hash::FxHashSet;
use tracing::debug;

use crate::core::{Move, Weapon};
use crate::error::{GameError, Result};

/// Immutable "beats" relation over a move set.
#[derive(Clone, Debug)]
pub struct RuleTable<M: Weapon> {
    /// Defeats-set per move, indexed by `Weapon::index`.
    defeats: Vec<FxHashSet<M>>,
}

impl<M: Weapon> RuleTable<M> {
    /// Start declaring a table for `M`.
    pub fn builder() -> RuleTableBuilder<M> {
        RuleTableBuilder::new()
    }

    /// True iff `x` defeats `y`. `beats(x, x)` is always false.
    #[must_use]
    pub fn beats(&self, x: M, y: M) -> bool {
        self.defeats
            .get(x.index())
            .map_or(false, |set| set.contains(&y))
    }

    /// Moves defeated by `x`, in menu order.
    pub fn defeats(&self, x: M) -> impl Iterator<Item = M> + '_ {
        M::ALL.iter().copied().filter(move |&y| self.beats(x, y))
    }

    /// Number of moves `x` defeats.
    #[must_use]
    pub fn out_degree(&self, x: M) -> usize {
        self.defeats.get(x.index()).map_or(0, |set| set.len())
    }

    /// True if every move beats exactly as many moves as it loses to.
    #[must_use]
    pub fn is_balanced(&self) -> bool {
        let n = M::count();
        n % 2 == 1 && M::ALL.iter().all(|&m| self.out_degree(m) == (n - 1) / 2)
    }
}

impl RuleTable<Move> {
    /// Rock, Paper, Scissors, Lizard, Spock.
    pub fn canonical() -> Result<Self> {
        use Move::*;

        Self::builder()
            .rule(Rock, &[Scissors, Lizard])
            .rule(Paper, &[Rock, Spock])
            .rule(Scissors, &[Paper, Lizard])
            .rule(Lizard, &[Spock, Paper])
            .rule(Spock, &[Rock, Scissors])
            .build()
    }
}

/// Declares defeats-sets and validates them into a `RuleTable`.
#[derive(Clone, Debug)]
pub struct RuleTableBuilder<M: Weapon> {
    rules: Vec<Option<FxHashSet<M>>>,
}

impl<M: Weapon> Default for RuleTableBuilder<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: Weapon> RuleTableBuilder<M> {
    pub fn new() -> Self {
        Self {
            rules: vec![None; M::count()],
        }
    }

    /// Declare that `winner` defeats every move in `losers`.
    ///
    /// Declaring the same winner twice extends its set.
    #[must_use]
    pub fn rule(mut self, winner: M, losers: &[M]) -> Self {
        if let Some(slot) = self.rules.get_mut(winner.index()) {
            slot.get_or_insert_with(FxHashSet::default)
                .extend(losers.iter().copied());
        }
        self
    }

    /// Validate the relation and freeze it.
    pub fn build(self) -> Result<RuleTable<M>> {
        let mut defeats = Vec::with_capacity(self.rules.len());
        for (index, rule) in self.rules.into_iter().enumerate() {
            match rule {
                Some(set) => defeats.push(set),
                None => {
                    let name = M::from_index(index)
                        .map_or_else(|| index.to_string(), |m| m.to_string());
                    return Err(GameError::invariant(format!("no rule declared for {name}")));
                }
            }
        }

        let table = RuleTable { defeats };
        validate_tournament(&table)?;

        debug!(moves = M::count(), balanced = table.is_balanced(), "rule table built");
        Ok(table)
    }
}

/// Checks that `table` is a complete tournament.
fn validate_tournament<M: Weapon>(table: &RuleTable<M>) -> Result<()> {
    for &m in M::ALL {
        if table.beats(m, m) {
            return Err(GameError::invariant(format!("{m} beats itself")));
        }
    }

    for (i, &a) in M::ALL.iter().enumerate() {
        for &b in &M::ALL[i + 1..] {
            match (table.beats(a, b), table.beats(b, a)) {
                (true, false) | (false, true) => {}
                (true, true) => {
                    return Err(GameError::invariant(format!("{a} and {b} beat each other")));
                }
                (false, false) => {
                    return Err(GameError::invariant(format!(
                        "neither {a} nor {b} beats the other"
                    )));
                }
            }
        }
    }

    let n = M::count();
    let total: usize = M::ALL.iter().map(|&m| table.out_degree(m)).sum();
    if total != n * (n - 1) / 2 {
        return Err(GameError::invariant(format!(
            "expected {} winning pairs, found {total}",
            n * (n - 1) / 2
        )));
    }

    Ok(())
}
