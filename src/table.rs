use std::collections::{BTreeMap, BTreeSet};

use crate::error::Error;
use crate::model::{BoolVar, CmpOp, CpModel, IntVar, LinearExpr, Literal};

/// Posts a conditional table constraint: when `only_if` is true, `vars` must
/// jointly take the values of exactly one of `tuples`. When `only_if` is
/// false nothing is imposed.
///
/// Built from reification primitives since the underlying engine has no
/// native conditional table: one selection boolean per tuple, plus one
/// indicator boolean per (position, candidate value) pair linked in both
/// directions to the variable's value. Indicator pairs that appear in no
/// tuple are forced off under the guard, each position picks exactly one
/// candidate under the guard, each tuple's selection boolean implies its
/// indicators, and exactly one selection boolean is on under the guard.
///
/// Returns the tuple-selection booleans in tuple order.
pub fn add_allowed_assignments_only_if<L: Into<Literal>>(
    model: &mut CpModel,
    vars: &[IntVar],
    tuples: &[Vec<i64>],
    only_if: L,
) -> Result<Vec<BoolVar>, Error> {
    let only_if = only_if.into();
    if tuples.is_empty() {
        return Err(Error::new_const("table constraint with no tuples"));
    }
    let arity = vars.len();
    for t in tuples {
        if t.len() != arity {
            return Err(Error::new(format!(
                "table tuple arity {} does not match {} variables",
                t.len(),
                arity
            )));
        }
    }

    let mut candidates: BTreeSet<i64> = BTreeSet::new();
    let mut per_pos: Vec<BTreeSet<i64>> = vec![BTreeSet::new(); arity];
    for t in tuples {
        for (pos, &v) in t.iter().enumerate() {
            candidates.insert(v);
            per_pos[pos].insert(v);
        }
    }

    let mut indicators: Vec<BTreeMap<i64, BoolVar>> = Vec::with_capacity(arity);
    for pos in 0..arity {
        let mut row = BTreeMap::new();
        for &v in &candidates {
            let b = model.new_bool_var();
            if !per_pos[pos].contains(&v) {
                model.add_only_if(LinearExpr::from(b), CmpOp::Eq, 0, only_if);
            }
            model.add_only_if(LinearExpr::from(vars[pos]), CmpOp::Eq, v, b);
            model.add_only_if(LinearExpr::from(vars[pos]), CmpOp::Ne, v, !b);
            row.insert(v, b);
        }
        model.add_only_if(
            LinearExpr::sum_bools(row.values().copied()),
            CmpOp::Eq,
            1,
            only_if,
        );
        indicators.push(row);
    }

    let selected: Vec<BoolVar> = tuples.iter().map(|_| model.new_bool_var()).collect();
    for (t, &sel) in tuples.iter().zip(&selected) {
        let lits: Vec<Literal> = t
            .iter()
            .enumerate()
            .map(|(pos, v)| indicators[pos][v].into())
            .collect();
        model.add_bool_and_only_if(lits, sel);
    }
    model.add_only_if(
        LinearExpr::sum_bools(selected.iter().copied()),
        CmpOp::Eq,
        1,
        only_if,
    );
    Ok(selected)
}
