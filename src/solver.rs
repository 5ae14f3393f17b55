use std::collections::VecDeque;
use std::time::{Duration, Instant};

use bit_set::BitSet;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use strum_macros::Display;

use crate::model::{BoolVar, CmpOp, Constr, CpModel, IntVar, LinearExpr, Literal};

/// Outcome classification of a solve attempt. There is no objective, so a
/// found solution is proven optimal and reported as `Optimal`; `Feasible`
/// exists for interface parity with engines that can stop early with an
/// improving solution in hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum SolveStatus {
    Optimal,
    Feasible,
    Infeasible,
    Unknown,
    Error,
}

/// Resource limits and search configuration, passed through from the caller.
/// `shuffle_seed` randomizes branch value order, deterministically per seed.
#[derive(Debug, Clone, Copy, Default)]
pub struct SolveOptions {
    pub max_decisions: Option<u64>,
    pub time_limit: Option<Duration>,
    pub shuffle_seed: Option<u64>,
}

/// A complete assignment, readable only after a successful solve.
#[derive(Debug, Clone)]
pub struct Solution {
    values: Vec<i64>,
}

impl Solution {
    pub fn value(&self, var: IntVar) -> i64 {
        self.values[var.0]
    }

    pub fn bool_value(&self, var: BoolVar) -> bool {
        self.values[var.0] == 1
    }
}

#[derive(Debug)]
pub struct SolveOutcome {
    pub status: SolveStatus,
    pub solution: Option<Solution>,
}

impl SolveOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self.status, SolveStatus::Optimal | SolveStatus::Feasible)
    }
}

/// Depth-first search with constraint propagation over bitset domains.
/// One synchronous solve per call; the model is never mutated.
pub struct CpSolver {
    options: SolveOptions,
}

impl CpSolver {
    pub fn new() -> Self {
        CpSolver { options: SolveOptions::default() }
    }

    pub fn with_options(options: SolveOptions) -> Self {
        CpSolver { options }
    }

    pub fn solve(&self, model: &CpModel) -> SolveOutcome {
        Search::new(model, self.options).run()
    }
}

impl Default for CpSolver {
    fn default() -> Self {
        CpSolver::new()
    }
}

/// Set of not-yet-ruled-out values for one variable, as a bitset offset from
/// the lower bound of its initial domain.
#[derive(Debug, Clone)]
struct Domain {
    base: i64,
    bits: BitSet,
}

impl Domain {
    fn new(lo: i64, hi: i64) -> Self {
        let n = (hi - lo + 1) as usize;
        let mut bits = BitSet::with_capacity(n);
        for i in 0..n {
            bits.insert(i);
        }
        Domain { base: lo, bits }
    }

    fn len(&self) -> usize {
        self.bits.len()
    }

    fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    fn contains(&self, v: i64) -> bool {
        v >= self.base && self.bits.contains((v - self.base) as usize)
    }

    // min/max assume a non-empty domain; emptied domains are conflicts and
    // get rolled back before anything else looks at them.
    fn min(&self) -> i64 {
        self.base + self.bits.iter().next().unwrap() as i64
    }

    fn max(&self) -> i64 {
        self.base + self.bits.iter().last().unwrap() as i64
    }

    fn fixed_value(&self) -> Option<i64> {
        if self.bits.len() == 1 {
            Some(self.min())
        } else {
            None
        }
    }

    fn remove(&mut self, v: i64) -> bool {
        v >= self.base && self.bits.remove((v - self.base) as usize)
    }

    fn remove_below(&mut self, lo: i64) {
        let doomed: Vec<usize> = self
            .bits
            .iter()
            .take_while(|&o| (self.base + o as i64) < lo)
            .collect();
        for o in doomed {
            self.bits.remove(o);
        }
    }

    fn remove_above(&mut self, hi: i64) {
        let doomed: Vec<usize> = self
            .bits
            .iter()
            .filter(|&o| (self.base + o as i64) > hi)
            .collect();
        for o in doomed {
            self.bits.remove(o);
        }
    }

    fn fix(&mut self, v: i64) {
        debug_assert!(self.contains(v));
        let off = (v - self.base) as usize;
        let doomed: Vec<usize> = self.bits.iter().filter(|&o| o != off).collect();
        for o in doomed {
            self.bits.remove(o);
        }
    }

    fn values(&self) -> Vec<i64> {
        self.bits.iter().map(|o| self.base + o as i64).collect()
    }
}

/// Propagation reached an empty domain or a violated constraint.
struct Conflict;

/// A decision point: the chosen variable, the values not yet tried, and the
/// index of the value currently applied.
struct BranchPoint {
    var: usize,
    values: Vec<i64>,
    idx: usize,
}

struct Search<'a> {
    model: &'a CpModel,
    options: SolveOptions,
    domains: Vec<Domain>,
    watchers: Vec<Vec<u32>>,
    queue: VecDeque<u32>,
    in_queue: BitSet,
    trail: Vec<(usize, Domain)>,
    trail_marks: Vec<usize>,
    stack: Vec<BranchPoint>,
    decisions: u64,
    rng: Option<ChaCha20Rng>,
    deadline: Option<Instant>,
}

impl<'a> Search<'a> {
    fn new(model: &'a CpModel, options: SolveOptions) -> Self {
        let domains = model
            .lower
            .iter()
            .zip(model.upper.iter())
            .map(|(&lo, &hi)| Domain::new(lo, hi))
            .collect();
        let mut watchers = vec![Vec::new(); model.num_vars()];
        for (ci, constr) in model.constraints.iter().enumerate() {
            let ci = ci as u32;
            let mut watch = |var: usize| {
                let w: &mut Vec<u32> = &mut watchers[var];
                if w.last() != Some(&ci) {
                    w.push(ci);
                }
            };
            match constr {
                Constr::Linear { expr, only_if, .. } => {
                    for &(_, var) in &expr.terms {
                        watch(var);
                    }
                    if let Some(l) = only_if {
                        watch(l.var);
                    }
                }
                Constr::BoolAnd { lits, only_if } => {
                    for l in lits {
                        watch(l.var);
                    }
                    watch(only_if.var);
                }
                Constr::AllDifferent { vars } => {
                    for &var in vars {
                        watch(var);
                    }
                }
            }
        }
        Search {
            model,
            options,
            domains,
            watchers,
            queue: VecDeque::new(),
            in_queue: BitSet::with_capacity(model.num_constraints()),
            trail: Vec::new(),
            trail_marks: Vec::new(),
            stack: Vec::new(),
            decisions: 0,
            rng: options.shuffle_seed.map(ChaCha20Rng::seed_from_u64),
            deadline: options.time_limit.map(|limit| Instant::now() + limit),
        }
    }

    fn run(mut self) -> SolveOutcome {
        for ci in 0..self.model.num_constraints() {
            self.queue.push_back(ci as u32);
            self.in_queue.insert(ci);
        }
        if self.propagate().is_err() {
            return SolveOutcome { status: SolveStatus::Infeasible, solution: None };
        }
        loop {
            let Some(var) = self.pick_branch_var() else {
                let values = self.domains.iter().map(|d| d.min()).collect();
                return SolveOutcome {
                    status: SolveStatus::Optimal,
                    solution: Some(Solution { values }),
                };
            };
            if self.over_limits() {
                return SolveOutcome { status: SolveStatus::Unknown, solution: None };
            }
            self.decisions += 1;
            let mut values = self.domains[var].values();
            if let Some(rng) = &mut self.rng {
                values.shuffle(rng);
            }
            let first = values[0];
            self.stack.push(BranchPoint { var, values, idx: 0 });
            self.push_level();
            let mut res = self.assign(var, first).and_then(|_| self.propagate());
            while res.is_err() {
                if self.over_limits() {
                    return SolveOutcome { status: SolveStatus::Unknown, solution: None };
                }
                if !self.retreat() {
                    return SolveOutcome { status: SolveStatus::Infeasible, solution: None };
                }
                res = self.propagate();
            }
        }
    }

    fn over_limits(&self) -> bool {
        if let Some(max) = self.options.max_decisions {
            if self.decisions >= max {
                return true;
            }
        }
        if let Some(deadline) = self.deadline {
            if Instant::now() > deadline {
                return true;
            }
        }
        false
    }

    /// Undoes the most recent decision and applies the next untried value,
    /// popping exhausted branch points along the way. Returns false once the
    /// whole tree is exhausted.
    fn retreat(&mut self) -> bool {
        // Each live branch point owns exactly one trail level, so the level
        // pop must pair with an existing branch point; an empty stack means
        // the tree is exhausted and there is nothing left to undo.
        while let Some(bp) = self.stack.last_mut() {
            bp.idx += 1;
            let var = bp.var;
            let next = bp.values.get(bp.idx).copied();
            self.pop_level();
            match next {
                Some(v) => {
                    self.push_level();
                    if self.assign(var, v).is_ok() {
                        return true;
                    }
                }
                None => {
                    self.stack.pop();
                }
            }
        }
        false
    }

    /// Unfixed variable with the smallest remaining domain, if any.
    fn pick_branch_var(&self) -> Option<usize> {
        let mut best: Option<(usize, usize)> = None;
        for (i, d) in self.domains.iter().enumerate() {
            let s = d.len();
            if s == 2 {
                return Some(i);
            }
            if s > 1 && best.map_or(true, |(_, bs)| s < bs) {
                best = Some((i, s));
            }
        }
        best.map(|(i, _)| i)
    }

    fn push_level(&mut self) {
        self.trail_marks.push(self.trail.len());
    }

    fn pop_level(&mut self) {
        let mark = self.trail_marks.pop().expect("pop_level without push_level");
        while self.trail.len() > mark {
            let (var, dom) = self.trail.pop().unwrap();
            self.domains[var] = dom;
        }
        self.queue.clear();
        self.in_queue.clear();
    }

    // Changes below the first decision level are permanent; there is nothing
    // to restore them to.
    fn save(&mut self, var: usize) {
        if !self.trail_marks.is_empty() {
            self.trail.push((var, self.domains[var].clone()));
        }
    }

    fn on_change(&mut self, var: usize) {
        for i in 0..self.watchers[var].len() {
            let ci = self.watchers[var][i];
            if !self.in_queue.contains(ci as usize) {
                self.in_queue.insert(ci as usize);
                self.queue.push_back(ci);
            }
        }
    }

    fn assign(&mut self, var: usize, v: i64) -> Result<(), Conflict> {
        if !self.domains[var].contains(v) {
            return Err(Conflict);
        }
        self.save(var);
        self.domains[var].fix(v);
        self.on_change(var);
        Ok(())
    }

    fn prune_remove(&mut self, var: usize, v: i64) -> Result<(), Conflict> {
        if !self.domains[var].contains(v) {
            return Ok(());
        }
        self.save(var);
        self.domains[var].remove(v);
        if self.domains[var].is_empty() {
            return Err(Conflict);
        }
        self.on_change(var);
        Ok(())
    }

    fn prune_below(&mut self, var: usize, lo: i64) -> Result<(), Conflict> {
        if self.domains[var].min() >= lo {
            return Ok(());
        }
        self.save(var);
        self.domains[var].remove_below(lo);
        if self.domains[var].is_empty() {
            return Err(Conflict);
        }
        self.on_change(var);
        Ok(())
    }

    fn prune_above(&mut self, var: usize, hi: i64) -> Result<(), Conflict> {
        if self.domains[var].max() <= hi {
            return Ok(());
        }
        self.save(var);
        self.domains[var].remove_above(hi);
        if self.domains[var].is_empty() {
            return Err(Conflict);
        }
        self.on_change(var);
        Ok(())
    }

    fn lit_value(&self, l: Literal) -> Option<bool> {
        self.domains[l.var].fixed_value().map(|v| (v == 1) != l.negated)
    }

    fn fix_lit(&mut self, l: Literal, value: bool) -> Result<(), Conflict> {
        let v = (value != l.negated) as i64;
        if self.domains[l.var].fixed_value() == Some(v) {
            return Ok(());
        }
        self.assign(l.var, v)
    }

    fn propagate(&mut self) -> Result<(), Conflict> {
        let model = self.model;
        while let Some(ci) = self.queue.pop_front() {
            self.in_queue.remove(ci as usize);
            match &model.constraints[ci as usize] {
                Constr::Linear { expr, op, rhs, only_if } => {
                    self.filter_linear(expr, *op, *rhs, *only_if)?;
                }
                Constr::BoolAnd { lits, only_if } => {
                    self.filter_bool_and(lits, *only_if)?;
                }
                Constr::AllDifferent { vars } => {
                    self.filter_all_different(vars)?;
                }
            }
        }
        Ok(())
    }

    fn filter_linear(
        &mut self,
        expr: &LinearExpr,
        op: CmpOp,
        rhs: i64,
        only_if: Option<Literal>,
    ) -> Result<(), Conflict> {
        let enforced = match only_if {
            None => Some(true),
            Some(l) => self.lit_value(l),
        };
        if enforced == Some(false) {
            return Ok(());
        }
        let mut lo = 0i64;
        let mut hi = 0i64;
        for &(coef, var) in &expr.terms {
            let d = &self.domains[var];
            if coef >= 0 {
                lo += coef * d.min();
                hi += coef * d.max();
            } else {
                lo += coef * d.max();
                hi += coef * d.min();
            }
        }
        let violated = match op {
            CmpOp::Eq => rhs < lo || rhs > hi,
            CmpOp::Ne => lo == hi && lo == rhs,
            CmpOp::Le => lo > rhs,
            CmpOp::Ge => hi < rhs,
        };
        if enforced.is_none() {
            // Half-reification: an impossible conditional constraint forces
            // its enforcement literal false.
            if violated {
                self.fix_lit(only_if.unwrap(), false)?;
            }
            return Ok(());
        }
        if violated {
            return Err(Conflict);
        }
        match op {
            CmpOp::Eq => {
                self.tighten_upper(expr, rhs, lo)?;
                self.tighten_lower(expr, rhs, hi)?;
            }
            CmpOp::Le => self.tighten_upper(expr, rhs, lo)?,
            CmpOp::Ge => self.tighten_lower(expr, rhs, hi)?,
            CmpOp::Ne => self.filter_not_equal(expr, rhs)?,
        }
        Ok(())
    }

    /// Bounds propagation for `expr <= rhs`, given the current minimum `lo`
    /// of the whole sum.
    fn tighten_upper(&mut self, expr: &LinearExpr, rhs: i64, lo: i64) -> Result<(), Conflict> {
        for &(coef, var) in &expr.terms {
            if coef == 0 {
                continue;
            }
            let d = &self.domains[var];
            let contrib_lo = if coef >= 0 { coef * d.min() } else { coef * d.max() };
            // coef * x <= rhs - (lo - contrib_lo)
            let bound = rhs - (lo - contrib_lo);
            if coef > 0 {
                self.prune_above(var, div_floor(bound, coef))?;
            } else {
                self.prune_below(var, div_ceil(bound, coef))?;
            }
        }
        Ok(())
    }

    /// Bounds propagation for `expr >= rhs`, given the current maximum `hi`
    /// of the whole sum.
    fn tighten_lower(&mut self, expr: &LinearExpr, rhs: i64, hi: i64) -> Result<(), Conflict> {
        for &(coef, var) in &expr.terms {
            if coef == 0 {
                continue;
            }
            let d = &self.domains[var];
            let contrib_hi = if coef >= 0 { coef * d.max() } else { coef * d.min() };
            // coef * x >= rhs - (hi - contrib_hi)
            let bound = rhs - (hi - contrib_hi);
            if coef > 0 {
                self.prune_below(var, div_ceil(bound, coef))?;
            } else {
                self.prune_above(var, div_floor(bound, coef))?;
            }
        }
        Ok(())
    }

    /// Value elimination for `expr != rhs` once at most one variable is
    /// unfixed.
    fn filter_not_equal(&mut self, expr: &LinearExpr, rhs: i64) -> Result<(), Conflict> {
        let mut unfixed = None;
        let mut fixed_sum = 0i64;
        for &(coef, var) in &expr.terms {
            match self.domains[var].fixed_value() {
                Some(v) => fixed_sum += coef * v,
                None => {
                    if unfixed.is_some() {
                        return Ok(());
                    }
                    unfixed = Some((coef, var));
                }
            }
        }
        match unfixed {
            None => {
                if fixed_sum == rhs {
                    Err(Conflict)
                } else {
                    Ok(())
                }
            }
            Some((coef, var)) => {
                let rest = rhs - fixed_sum;
                if coef != 0 && rest % coef == 0 {
                    self.prune_remove(var, rest / coef)?;
                }
                Ok(())
            }
        }
    }

    fn filter_bool_and(&mut self, lits: &[Literal], only_if: Literal) -> Result<(), Conflict> {
        match self.lit_value(only_if) {
            Some(false) => Ok(()),
            Some(true) => {
                for &l in lits {
                    self.fix_lit(l, true)?;
                }
                Ok(())
            }
            None => {
                if lits.iter().any(|&l| self.lit_value(l) == Some(false)) {
                    self.fix_lit(only_if, false)?;
                }
                Ok(())
            }
        }
    }

    fn filter_all_different(&mut self, vars: &[usize]) -> Result<(), Conflict> {
        for i in 0..vars.len() {
            let Some(v) = self.domains[vars[i]].fixed_value() else {
                continue;
            };
            for j in 0..vars.len() {
                if i == j {
                    continue;
                }
                if self.domains[vars[j]].fixed_value() == Some(v) {
                    return Err(Conflict);
                }
                self.prune_remove(vars[j], v)?;
            }
        }
        Ok(())
    }
}

fn div_floor(a: i64, b: i64) -> i64 {
    let q = a / b;
    if a % b != 0 && (a < 0) != (b < 0) {
        q - 1
    } else {
        q
    }
}

fn div_ceil(a: i64, b: i64) -> i64 {
    let q = a / b;
    if a % b != 0 && (a < 0) == (b < 0) {
        q + 1
    } else {
        q
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn solve(model: &CpModel) -> SolveOutcome {
        CpSolver::new().solve(model)
    }

    #[test]
    fn test_div_helpers() {
        assert_eq!(div_floor(7, 2), 3);
        assert_eq!(div_floor(-7, 2), -4);
        assert_eq!(div_floor(7, -2), -4);
        assert_eq!(div_ceil(7, 2), 4);
        assert_eq!(div_ceil(-7, 2), -3);
        assert_eq!(div_ceil(-7, -2), 4);
    }

    #[test]
    fn test_sum_equality() {
        let mut model = CpModel::new();
        let x = model.new_int_var(0, 5);
        let y = model.new_int_var(0, 5);
        model.add(LinearExpr::sum([x, y]), CmpOp::Eq, 9);
        model.add(LinearExpr::from(x), CmpOp::Le, 4);
        let outcome = solve(&model);
        assert_eq!(outcome.status, SolveStatus::Optimal);
        assert!(outcome.is_success());
        let s = outcome.solution.unwrap();
        assert_eq!(s.value(x) + s.value(y), 9);
        assert!(s.value(x) <= 4);
    }

    #[test]
    fn test_infeasible_sum() {
        let mut model = CpModel::new();
        let x = model.new_int_var(0, 4);
        let y = model.new_int_var(0, 4);
        model.add(LinearExpr::sum([x, y]), CmpOp::Eq, 10);
        assert_eq!(solve(&model).status, SolveStatus::Infeasible);
    }

    #[test]
    fn test_enforcement_literal_forced_false() {
        let mut model = CpModel::new();
        let b = model.new_bool_var();
        let x = model.new_int_var(0, 5);
        model.add_only_if(LinearExpr::from(x), CmpOp::Eq, 3, b);
        model.add(LinearExpr::from(x), CmpOp::Eq, 4);
        let outcome = solve(&model);
        assert_eq!(outcome.status, SolveStatus::Optimal);
        let s = outcome.solution.unwrap();
        assert_eq!(s.value(x), 4);
        assert!(!s.bool_value(b));
    }

    #[test]
    fn test_negated_enforcement() {
        let mut model = CpModel::new();
        let b = model.new_bool_var();
        let x = model.new_int_var(0, 5);
        // x == 0 when b, x != 0 when !b. Forcing x = 0 must set b.
        model.add_only_if(LinearExpr::from(x), CmpOp::Eq, 0, b);
        model.add_only_if(LinearExpr::from(x), CmpOp::Ne, 0, !b);
        model.add(LinearExpr::from(x), CmpOp::Le, 0);
        let outcome = solve(&model);
        assert_eq!(outcome.status, SolveStatus::Optimal);
        let s = outcome.solution.unwrap();
        assert_eq!(s.value(x), 0);
        assert!(s.bool_value(b));
    }

    #[test]
    fn test_empty_sum_forces_literal() {
        let mut model = CpModel::new();
        let b = model.new_bool_var();
        // A sum over nothing can never be <= -1, so b must come out false.
        model.add_only_if(LinearExpr::new(), CmpOp::Le, -1, b);
        let outcome = solve(&model);
        assert_eq!(outcome.status, SolveStatus::Optimal);
        assert!(!outcome.solution.unwrap().bool_value(b));
    }

    #[test]
    fn test_bool_and_forward() {
        let mut model = CpModel::new();
        let b = model.new_bool_var();
        let p = model.new_bool_var();
        let q = model.new_bool_var();
        model.add_bool_and_only_if(vec![p.into(), !q], b);
        model.add(LinearExpr::from(b), CmpOp::Eq, 1);
        let outcome = solve(&model);
        assert_eq!(outcome.status, SolveStatus::Optimal);
        let s = outcome.solution.unwrap();
        assert!(s.bool_value(p));
        assert!(!s.bool_value(q));
    }

    #[test]
    fn test_bool_and_backward() {
        let mut model = CpModel::new();
        let b = model.new_bool_var();
        let p = model.new_bool_var();
        model.add_bool_and_only_if(vec![p.into()], b);
        model.add(LinearExpr::from(p), CmpOp::Eq, 0);
        // b implies p, and p is pinned false, so b must come out false.
        let outcome = solve(&model);
        assert_eq!(outcome.status, SolveStatus::Optimal);
        assert!(!outcome.solution.unwrap().bool_value(b));
    }

    #[test]
    fn test_all_different() {
        let mut model = CpModel::new();
        let vars: Vec<_> = (0..3).map(|_| model.new_int_var(0, 2)).collect();
        model.add_all_different(vars.clone());
        model.add(LinearExpr::from(vars[0]), CmpOp::Eq, 2);
        let outcome = solve(&model);
        assert_eq!(outcome.status, SolveStatus::Optimal);
        let s = outcome.solution.unwrap();
        let mut vals: Vec<i64> = vars.iter().map(|&v| s.value(v)).collect();
        assert_eq!(vals[0], 2);
        vals.sort();
        assert_eq!(vals, vec![0, 1, 2]);
    }

    #[test]
    fn test_all_different_infeasible() {
        let mut model = CpModel::new();
        let vars: Vec<_> = (0..3).map(|_| model.new_int_var(0, 1)).collect();
        model.add_all_different(vars);
        assert_eq!(solve(&model).status, SolveStatus::Infeasible);
    }

    #[test]
    fn test_decision_limit() {
        let mut model = CpModel::new();
        let _x = model.new_int_var(0, 1);
        let _y = model.new_int_var(0, 1);
        let solver = CpSolver::with_options(SolveOptions {
            max_decisions: Some(0),
            ..SolveOptions::default()
        });
        assert_eq!(solver.solve(&model).status, SolveStatus::Unknown);
    }

    #[test]
    fn test_root_propagation_solves_without_decisions() {
        let mut model = CpModel::new();
        let x = model.new_int_var(3, 3);
        let solver = CpSolver::with_options(SolveOptions {
            max_decisions: Some(0),
            ..SolveOptions::default()
        });
        let outcome = solver.solve(&model);
        assert_eq!(outcome.status, SolveStatus::Optimal);
        assert_eq!(outcome.solution.unwrap().value(x), 3);
    }

    #[test]
    fn test_shuffle_seed_is_deterministic() {
        let build = || {
            let mut model = CpModel::new();
            let vars: Vec<_> = (0..6).map(|_| model.new_int_var(0, 5)).collect();
            model.add_all_different(vars.clone());
            (model, vars)
        };
        let solver = CpSolver::with_options(SolveOptions {
            shuffle_seed: Some(17),
            ..SolveOptions::default()
        });
        let (m1, v1) = build();
        let (m2, v2) = build();
        let s1 = solver.solve(&m1).solution.unwrap();
        let s2 = solver.solve(&m2).solution.unwrap();
        let a: Vec<i64> = v1.iter().map(|&v| s1.value(v)).collect();
        let b: Vec<i64> = v2.iter().map(|&v| s2.value(v)).collect();
        assert_eq!(a, b);
    }
}
