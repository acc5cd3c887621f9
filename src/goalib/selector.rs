use std::cmp::Reverse;

use clap::ValueEnum;
use itertools::Itertools;

use crate::bag::Bag;
use crate::error::SelectError;
use crate::input::Problem;
use crate::triplet::{Field, Quotas, Triplet, Value};

/// Added to the total for an iteration in which no ordering has quota left.
pub const SENTINEL: Value = i32::MIN as Value;

#[derive(ValueEnum, Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum Mode {
    /// Each ordering offers its own field at its own cursor; one pick per
    /// iteration, ties going to the earliest ordering.
    #[default]
    OwnField,
    /// The original loop: b and c are read out of the a-ordering at the
    /// other orderings' cursors, every tying ordering fires at once, and a
    /// value fired on twice is left with a negative count.
    Literal,
}

#[derive(ValueEnum, Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum ExhaustionPolicy {
    #[default]
    Accumulate,
    Fail,
}

/// One descending sort of the triplets plus its cursor.
#[derive(Debug)]
struct Order {
    field: Field,
    items: Vec<Triplet>,
    cursor: usize,
}

impl Order {
    fn new(field: Field, triplets: &[Triplet]) -> Self {
        let items = triplets
            .iter()
            .copied()
            .sorted_by_key(|t| Reverse(t.get(field)))
            .collect();
        Self {
            field,
            items,
            cursor: 0,
        }
    }

    fn at(&self, index: usize) -> Result<Triplet, SelectError> {
        self.items
            .get(index)
            .copied()
            .ok_or(SelectError::IndexOutOfRange {
                ordering: self.field,
                index,
                len: self.items.len(),
            })
    }

    /// Move past values whose count is exactly zero and return the triplet now
    /// under the cursor. Negative counts are not skipped.
    fn settle(&mut self, bag: &Bag) -> Result<Triplet, SelectError> {
        let start = self.cursor;
        loop {
            let item = self.at(self.cursor)?;
            if bag.count(&item) != 0 {
                if self.cursor != start {
                    log::debug!(
                        "ordering {} skipped {} consumed entries",
                        self.field,
                        self.cursor - start
                    );
                }
                return Ok(item);
            }
            self.cursor += 1;
        }
    }
}

/// What a single iteration did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub iteration: usize,
    pub candidates: [Option<Value>; 3],
    pub value: Value,
    pub fired: Vec<Field>,
}

#[derive(Debug)]
pub struct GreedyTripleSelector {
    orders: [Order; 3],
    bag: Bag,
    quotas: Quotas,
    mode: Mode,
    policy: ExhaustionPolicy,
    iterations: usize,
    iteration: usize,
    total: Value,
}

impl GreedyTripleSelector {
    pub fn new(problem: Problem, mode: Mode, policy: ExhaustionPolicy) -> Self {
        let Problem { quotas, triplets } = problem;
        let orders = Field::ALL.map(|field| Order::new(field, &triplets));
        let bag = triplets.iter().copied().collect::<Bag>();
        log::debug!(
            "{} triplets ({} distinct), quotas {:?}, mode {:?}",
            triplets.len(),
            bag.distinct(),
            quotas,
            mode
        );
        Self {
            orders,
            bag,
            quotas,
            mode,
            policy,
            iterations: triplets.len(),
            iteration: 0,
            total: 0,
        }
    }

    pub fn total(&self) -> Value {
        self.total
    }

    pub fn quotas(&self) -> Quotas {
        self.quotas
    }

    pub fn bag(&self) -> &Bag {
        &self.bag
    }

    pub fn is_done(&self) -> bool {
        self.iteration >= self.iterations
    }

    /// Run one iteration. Returns `Ok(None)` once all `n` iterations are done.
    pub fn step(&mut self) -> Result<Option<Step>, SelectError> {
        if self.is_done() {
            return Ok(None);
        }
        let iteration = self.iteration;

        let mut heads = [Triplet::default(); 3];
        for (head, order) in heads.iter_mut().zip(self.orders.iter_mut()) {
            *head = order.settle(&self.bag)?;
        }

        let mut candidates = [None; 3];
        for field in Field::ALL {
            if !self.quotas.available(field) {
                continue;
            }
            let source = match self.mode {
                Mode::OwnField => heads[field.index()],
                Mode::Literal => self.orders[0].at(self.orders[field.index()].cursor)?,
            };
            candidates[field.index()] = Some(source.get(field));
        }

        let (value, fired) = match candidates.iter().flatten().max().copied() {
            Some(best) => {
                let fired = match self.mode {
                    Mode::OwnField => Field::ALL
                        .into_iter()
                        .find(|f| candidates[f.index()] == Some(best))
                        .into_iter()
                        .collect::<Vec<_>>(),
                    Mode::Literal => Field::ALL
                        .into_iter()
                        .filter(|f| {
                            candidates[f.index()].is_some() && heads[f.index()].get(*f) == best
                        })
                        .collect::<Vec<_>>(),
                };
                (best, fired)
            }
            None => match self.policy {
                ExhaustionPolicy::Accumulate => (SENTINEL, Vec::new()),
                ExhaustionPolicy::Fail => {
                    return Err(SelectError::QuotasExhausted { iteration });
                }
            },
        };

        self.total = self
            .total
            .checked_add(value)
            .ok_or(SelectError::Overflow { iteration })?;

        for field in fired.iter().copied() {
            let head = heads[field.index()];
            let left = self.bag.take(&head);
            if left < 0 {
                log::debug!("{} over-consumed by ordering {} (count {})", head, field, left);
            }
            self.orders[field.index()].cursor += 1;
            self.quotas.spend(field);
        }

        log::debug!(
            "iteration {}: candidates {:?} -> {} via {:?}, total {}",
            iteration,
            candidates,
            value,
            fired,
            self.total
        );
        self.iteration += 1;

        Ok(Some(Step {
            iteration,
            candidates,
            value,
            fired,
        }))
    }

    pub fn run(&mut self) -> Result<Value, SelectError> {
        while self.step()?.is_some() {}
        Ok(self.total)
    }
}

pub fn solve(input: &str, mode: Mode, policy: ExhaustionPolicy) -> Result<Value, SelectError> {
    let problem = Problem::parse(input)?;
    GreedyTripleSelector::new(problem, mode, policy).run()
}
