use std::ops::Not;

/// Handle for an integer decision variable with an inclusive domain [lo, hi].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IntVar(pub(crate) usize);

/// Handle for a boolean decision variable. Booleans live in the same variable
/// arena as integers, with domain [0, 1]; `1` means true.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoolVar(pub(crate) usize);

impl From<BoolVar> for IntVar {
    fn from(b: BoolVar) -> IntVar {
        IntVar(b.0)
    }
}

/// A boolean variable or its negation. Used both inside conjunctions and as
/// the "only enforce if" condition on conditional constraints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Literal {
    pub(crate) var: usize,
    pub(crate) negated: bool,
}

impl Literal {
    pub fn var(self) -> BoolVar {
        BoolVar(self.var)
    }

    pub fn is_negated(self) -> bool {
        self.negated
    }
}

impl From<BoolVar> for Literal {
    fn from(b: BoolVar) -> Literal {
        Literal { var: b.0, negated: false }
    }
}

impl Not for BoolVar {
    type Output = Literal;
    fn not(self) -> Literal {
        Literal { var: self.0, negated: true }
    }
}

impl Not for Literal {
    type Output = Literal;
    fn not(self) -> Literal {
        Literal { var: self.var, negated: !self.negated }
    }
}

/// Comparison between a linear expression and a constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CmpOp {
    Eq,
    Ne,
    Le,
    Ge,
}

/// A weighted sum of variables. An empty expression evaluates to zero.
#[derive(Debug, Clone, Default)]
pub struct LinearExpr {
    pub(crate) terms: Vec<(i64, usize)>,
}

impl LinearExpr {
    pub fn new() -> Self {
        LinearExpr { terms: Vec::new() }
    }

    pub fn sum<I: IntoIterator<Item = IntVar>>(vars: I) -> Self {
        LinearExpr { terms: vars.into_iter().map(|v| (1, v.0)).collect() }
    }

    pub fn sum_bools<I: IntoIterator<Item = BoolVar>>(vars: I) -> Self {
        Self::sum(vars.into_iter().map(IntVar::from))
    }

    pub fn add_term(&mut self, var: IntVar, coefficient: i64) {
        self.terms.push((coefficient, var.0));
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

impl From<IntVar> for LinearExpr {
    fn from(v: IntVar) -> LinearExpr {
        LinearExpr { terms: vec![(1, v.0)] }
    }
}

impl From<BoolVar> for LinearExpr {
    fn from(b: BoolVar) -> LinearExpr {
        LinearExpr { terms: vec![(1, b.0)] }
    }
}

#[derive(Debug, Clone)]
pub(crate) enum Constr {
    Linear {
        expr: LinearExpr,
        op: CmpOp,
        rhs: i64,
        only_if: Option<Literal>,
    },
    BoolAnd {
        lits: Vec<Literal>,
        only_if: Literal,
    },
    AllDifferent {
        vars: Vec<usize>,
    },
}

/// The in-progress constraint network. All variables are created up front via
/// `new_int_var`/`new_bool_var`; constraints are only ever added, never
/// retracted. The model is inert data until handed to a solver.
#[derive(Debug, Default)]
pub struct CpModel {
    pub(crate) lower: Vec<i64>,
    pub(crate) upper: Vec<i64>,
    pub(crate) constraints: Vec<Constr>,
}

impl CpModel {
    pub fn new() -> Self {
        CpModel::default()
    }

    /// Creates an integer variable with the inclusive domain [lo, hi].
    pub fn new_int_var(&mut self, lo: i64, hi: i64) -> IntVar {
        assert!(lo <= hi, "empty domain [{}, {}]", lo, hi);
        self.lower.push(lo);
        self.upper.push(hi);
        IntVar(self.lower.len() - 1)
    }

    pub fn new_bool_var(&mut self) -> BoolVar {
        let v = self.new_int_var(0, 1);
        BoolVar(v.0)
    }

    /// Posts `expr op rhs`.
    pub fn add(&mut self, expr: LinearExpr, op: CmpOp, rhs: i64) {
        self.constraints.push(Constr::Linear { expr, op, rhs, only_if: None });
    }

    /// Posts `expr op rhs`, enforced only when `only_if` is true. When the
    /// literal is false the constraint imposes nothing.
    pub fn add_only_if<L: Into<Literal>>(&mut self, expr: LinearExpr, op: CmpOp, rhs: i64, only_if: L) {
        self.constraints.push(Constr::Linear { expr, op, rhs, only_if: Some(only_if.into()) });
    }

    /// Posts "all of `lits` hold", enforced only when `only_if` is true.
    pub fn add_bool_and_only_if<L: Into<Literal>>(&mut self, lits: Vec<Literal>, only_if: L) {
        self.constraints.push(Constr::BoolAnd { lits, only_if: only_if.into() });
    }

    /// Posts that all of `vars` take pairwise distinct values.
    pub fn add_all_different<I: IntoIterator<Item = IntVar>>(&mut self, vars: I) {
        let vars = vars.into_iter().map(|v| v.0).collect();
        self.constraints.push(Constr::AllDifferent { vars });
    }

    pub fn num_vars(&self) -> usize {
        self.lower.len()
    }

    pub fn num_constraints(&self) -> usize {
        self.constraints.len()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_literal_negation() {
        let mut model = CpModel::new();
        let b = model.new_bool_var();
        let l: Literal = b.into();
        assert!(!l.is_negated());
        assert!((!b).is_negated());
        assert_eq!(!!l, l);
        assert_eq!((!l).var(), b);
    }

    #[test]
    fn test_var_arena() {
        let mut model = CpModel::new();
        let x = model.new_int_var(-3, 7);
        let b = model.new_bool_var();
        assert_eq!(model.num_vars(), 2);
        assert_eq!(model.lower[x.0], -3);
        assert_eq!(model.upper[x.0], 7);
        assert_eq!(model.lower[b.0], 0);
        assert_eq!(model.upper[b.0], 1);
    }

    #[test]
    #[should_panic]
    fn test_empty_domain_panics() {
        let mut model = CpModel::new();
        model.new_int_var(4, 3);
    }

    #[test]
    fn test_expr_building() {
        let mut model = CpModel::new();
        let x = model.new_int_var(0, 9);
        let y = model.new_int_var(0, 9);
        let mut e = LinearExpr::sum([x, y]);
        e.add_term(x, 2);
        assert_eq!(e.terms, vec![(1, x.0), (1, y.0), (2, x.0)]);
        assert!(LinearExpr::new().is_empty());
        assert_eq!(model.num_constraints(), 0);
    }
}
