use crate::error::Error;
use crate::model::{BoolVar, CmpOp, CpModel, IntVar, LinearExpr};
use crate::spans::{border_window, coverage_pairs};
use crate::table::add_allowed_assignments_only_if;
use crate::words::WordIndex;

/// Per-orientation variables. An axis sees the grid as `lines` parallel lines
/// of `extent` cells: across has one line per row, down one line per column.
/// `starts` is indexed by (length, line, position along the line); `ids`,
/// `lone` and `lone_or_black` are indexed by grid cell, row-major.
struct AxisVars {
    lines: usize,
    extent: usize,
    starts: Vec<BoolVar>,
    ids: Vec<IntVar>,
    lone: Vec<BoolVar>,
    lone_or_black: Vec<BoolVar>,
}

impl AxisVars {
    fn new(model: &mut CpModel, lines: usize, extent: usize, id_hi: i64) -> Self {
        let cells = lines * extent;
        AxisVars {
            lines,
            extent,
            starts: (0..(extent + 1) * cells).map(|_| model.new_bool_var()).collect(),
            ids: (0..cells).map(|_| model.new_int_var(0, id_hi)).collect(),
            lone: (0..cells).map(|_| model.new_bool_var()).collect(),
            lone_or_black: (0..cells).map(|_| model.new_bool_var()).collect(),
        }
    }

    fn start(&self, len: usize, line: usize, pos: usize) -> BoolVar {
        self.starts[(len * self.lines + line) * self.extent + pos]
    }
}

/// The grid-shaped half of the constraint network: letter and black-square
/// variables plus both orientations' placement machinery, with handles back
/// into the model for decoding and inspection.
pub struct GridModel {
    rows: usize,
    cols: usize,
    letters: Vec<IntVar>,
    blacks: Vec<BoolVar>,
    across: AxisVars,
    down: AxisVars,
}

impl GridModel {
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn letter(&self, r: usize, c: usize) -> IntVar {
        self.letters[r * self.cols + c]
    }

    pub fn black(&self, r: usize, c: usize) -> BoolVar {
        self.blacks[r * self.cols + c]
    }

    /// Indicator that an across word of the given length starts at (r, c).
    pub fn across_start(&self, len: usize, r: usize, c: usize) -> BoolVar {
        self.across.start(len, r, c)
    }

    /// Indicator that a down word of the given length starts at (r, c).
    pub fn down_start(&self, len: usize, r: usize, c: usize) -> BoolVar {
        self.down.start(len, c, r)
    }

    pub fn across_id(&self, r: usize, c: usize) -> IntVar {
        self.across.ids[r * self.cols + c]
    }

    pub fn down_id(&self, r: usize, c: usize) -> IntVar {
        self.down.ids[r * self.cols + c]
    }

    pub fn lone_across(&self, r: usize, c: usize) -> BoolVar {
        self.across.lone[r * self.cols + c]
    }

    pub fn lone_down(&self, r: usize, c: usize) -> BoolVar {
        self.down.lone[r * self.cols + c]
    }
}

/// Builds the whole grid network into `model`: letter/black linkage, word
/// placement along both axes, distinct word identifiers, lone-letter rules,
/// and the black-square density bounds.
pub fn build_grid_model(
    model: &mut CpModel,
    index: &WordIndex,
    rows: usize,
    cols: usize,
) -> Result<GridModel, Error> {
    if rows == 0 || cols == 0 {
        return Err(Error::new(format!("degenerate grid {}x{}", rows, cols)));
    }
    let max_extent = rows.max(cols);
    if max_extent >= 2 && !index.lengths().any(|l| l <= max_extent) {
        return Err(Error::new(format!(
            "wordlist has no words of length 2..={}",
            max_extent
        )));
    }

    let cells = rows * cols;
    // Identifiers of unstarted cells must not collide with real word ids or
    // with each other, so the domain leaves one spare value per id variable.
    let id_hi = (index.word_count() + 2 * cells) as i64;

    let letters: Vec<IntVar> = (0..cells).map(|_| model.new_int_var(0, 26)).collect();
    let blacks: Vec<BoolVar> = (0..cells).map(|_| model.new_bool_var()).collect();
    let across = AxisVars::new(model, rows, cols, id_hi);
    let down = AxisVars::new(model, cols, rows, id_hi);

    for i in 0..cells {
        model.add_only_if(LinearExpr::from(letters[i]), CmpOp::Eq, 0, blacks[i]);
        model.add_only_if(LinearExpr::from(letters[i]), CmpOp::Ne, 0, !blacks[i]);
    }

    post_axis(model, index, &across, &letters, &blacks, &|line, pos| {
        line * cols + pos
    })?;
    post_axis(model, index, &down, &letters, &blacks, &|line, pos| {
        pos * cols + line
    })?;

    model.add_all_different(across.ids.iter().chain(down.ids.iter()).copied());

    for i in 0..cells {
        let mut both = LinearExpr::from(across.lone[i]);
        both.add_term(down.lone[i].into(), 1);
        model.add(both, CmpOp::Le, 1);
    }

    if rows >= 3 && cols >= 3 {
        for r in 0..rows - 2 {
            for c in 0..cols - 2 {
                let mut window = LinearExpr::new();
                for dr in 0..3 {
                    for dc in 0..3 {
                        window.add_term(blacks[(r + dr) * cols + c + dc].into(), 1);
                    }
                }
                model.add(window, CmpOp::Le, 2);
            }
        }
    }

    model.add(
        LinearExpr::sum_bools(blacks.iter().copied()),
        CmpOp::Le,
        (cells / 5) as i64,
    );

    Ok(GridModel { rows, cols, letters, blacks, across, down })
}

fn post_axis(
    model: &mut CpModel,
    index: &WordIndex,
    axis: &AxisVars,
    letters: &[IntVar],
    blacks: &[BoolVar],
    cell: &dyn Fn(usize, usize) -> usize,
) -> Result<(), Error> {
    let (lines, extent) = (axis.lines, axis.extent);

    for len in 0..=extent {
        let tuples = index.tuples(len);
        for line in 0..lines {
            for pos in 0..extent {
                let start = axis.start(len, line, pos);
                let Some(tuples) = tuples.filter(|_| len <= extent - pos) else {
                    // No words of this length, or the run would overflow the
                    // line.
                    model.add(LinearExpr::from(start), CmpOp::Eq, 0);
                    continue;
                };

                // A start here claims its whole border window: exactly one
                // start of any length inside it, itself.
                let (w_lo, w_hi) = border_window(pos, len, extent);
                let mut window = LinearExpr::new();
                for l in 0..=extent {
                    for q in w_lo..=w_hi {
                        window.add_term(axis.start(l, line, q).into(), 1);
                    }
                }
                model.add_only_if(window, CmpOp::Eq, 1, start);

                let mut vars: Vec<IntVar> =
                    (0..len).map(|k| letters[cell(line, pos + k)]).collect();
                vars.push(axis.ids[cell(line, pos)]);
                add_allowed_assignments_only_if(model, &vars, tuples, start)?;
            }
        }
    }

    for line in 0..lines {
        for pos in 0..extent {
            let ci = cell(line, pos);

            // Lone letter iff every in-line neighbor is black. A cell with no
            // neighbors (extent 1) is lone outright.
            let lone = axis.lone[ci];
            let mut neighbors = LinearExpr::new();
            let mut n = 0i64;
            if pos > 0 {
                neighbors.add_term(blacks[cell(line, pos - 1)].into(), 1);
                n += 1;
            }
            if pos + 1 < extent {
                neighbors.add_term(blacks[cell(line, pos + 1)].into(), 1);
                n += 1;
            }
            model.add_only_if(neighbors.clone(), CmpOp::Eq, n, lone);
            model.add_only_if(neighbors, CmpOp::Le, n - 1, !lone);

            let lob = axis.lone_or_black[ci];
            let mut either = LinearExpr::from(lone);
            either.add_term(blacks[ci].into(), 1);
            model.add_only_if(either.clone(), CmpOp::Ge, 1, lob);
            model.add_only_if(either, CmpOp::Eq, 0, !lob);

            // Any other letter must sit under exactly one word of this
            // orientation.
            let mut cover = LinearExpr::new();
            for (l, s) in coverage_pairs(pos, extent) {
                cover.add_term(axis.start(l, line, s).into(), 1);
            }
            model.add_only_if(cover, CmpOp::Eq, 1, !lob);
        }
    }
    Ok(())
}
