//! Equation-system emission.
//!
//! One encoding pass simulates the S-box truth table row by row against a
//! parametric circuit skeleton:
//! 1. Seed the available-signal list `Z` with fresh input wires.
//! 2. For each layer, form `2 * width` operands as selections (or affine
//!    combinations) over `Z`, instantiate `width` gates from the model's
//!    template, and append their outputs to `Z`.
//! 3. Define each output bit as a selection over the final `Z`.
//! 4. Pin the row's input/output wires to the truth-table values.
//!
//! Constraints that involve only the shared selector variables (at-most-one
//! wiring restrictions, gate-family exclusions, depth anti-degeneracy) hold
//! identically for every row, so they are emitted while processing the first
//! row only.

use core::ops::Range;

use itertools::Itertools;

use crate::{
    model::CostModel,
    poly::{Line, Poly, Term},
    sbox::Sbox,
    vars::{ShapeAlloc, Var, WireAlloc},
};

/// Generates the circuit-synthesis feasibility system for one
/// `(model, bound, width)` choice.
#[derive(Debug)]
pub struct Encoder {
    model: CostModel,
    bound: usize,
    width: usize,
    wires: WireAlloc,
    lines: Vec<Line>,
}

impl Encoder {
    /// Creates an encoder testing for a circuit of `bound` gates (or, in
    /// depth mode, `bound` layers of `width` gates each).
    ///
    /// `width` is only meaningful for [`CostModel::Depth`]; other models
    /// place one gate per layer. Range validation of `bound` and `width` is
    /// the caller's responsibility.
    pub fn new(model: CostModel, bound: usize, width: usize) -> Self {
        Self {
            model,
            bound,
            width,
            wires: WireAlloc::default(),
            lines: Vec::new(),
        }
    }

    /// Emits the full constraint system for `sbox`.
    ///
    /// The output is a pure, order-preserving function of the encoder
    /// parameters and the S-box: identical inputs reproduce the identical
    /// line sequence and variable numbering. The external solver toolchain's
    /// variable-numbering map depends on this.
    #[tracing::instrument(skip_all, fields(model = self.model.name(), bound = self.bound))]
    pub fn encode(mut self, sbox: &Sbox) -> Vec<Line> {
        let n = sbox.word_bits();
        let mut shape = ShapeAlloc::default();
        for (row, &value) in sbox.table().iter().enumerate() {
            shape.reset();
            self.encode_row(n, row, usize::from(value), row == 0, &mut shape);
        }
        tracing::debug!(lines = self.lines.len(), "encoded constraint system");
        self.lines
    }

    fn encode_row(
        &mut self,
        n: usize,
        row: usize,
        value: usize,
        first_row: bool,
        shape: &mut ShapeAlloc,
    ) {
        let width = self.model.layer_width(self.width);
        let mut z = self.wires.row_inputs(n);
        for layer in 0..self.bound {
            for slot in 0..2 * width {
                self.form_operand(&z, slot, layer, width, first_row, shape);
            }
            for _ in 0..width {
                self.form_gate(&mut z, first_row, shape);
            }
        }
        self.form_outputs(&z, n, first_row, shape);
        self.pin_row(n, row, value);
    }

    /// Defines operand wire `slot` of the current layer over the available
    /// signals.
    fn form_operand(
        &mut self,
        z: &[Var],
        slot: usize,
        layer: usize,
        width: usize,
        first_row: bool,
        shape: &mut ShapeAlloc,
    ) {
        let lhs = self.wires.operand(slot);
        if self.model.free_linear_layer() {
            // Unrestricted affine combination: a constant selector plus one
            // coefficient per available signal.
            let mut rhs = Poly::new();
            rhs.push(Term::single(shape.select()));
            for &signal in z {
                rhs.push(Term::product(shape.select(), signal));
            }
            self.lines.push(Line::Definition { lhs, rhs });
        } else {
            let block = shape.select_block(z.len());
            let rhs = block
                .clone()
                .zip(z.iter())
                .map(|(a, &signal)| Term::product(Var::Select(a), signal))
                .collect();
            self.lines.push(Line::Definition { lhs, rhs });
            if first_row {
                self.at_most_one(block.clone());
                if self.model == CostModel::Depth && slot % 2 == 1 && layer > 0 {
                    self.depth_exclusion(block, z.len(), width);
                }
            }
        }
    }

    /// Instantiates one gate over the next operand pair and appends its
    /// output to the available signals.
    fn form_gate(&mut self, z: &mut Vec<Var>, first_row: bool, shape: &mut ShapeAlloc) {
        let q0 = self.wires.operand(0);
        let q1 = self.wires.operand(1);
        let lhs = self.wires.gate();
        match self.model {
            CostModel::MultiplicativeComplexity => {
                self.lines.push(Line::Definition {
                    lhs,
                    rhs: Term::product(q0, q1).into(),
                });
            },
            CostModel::BitsliceGateCount => {
                let [b0, b1, b2] = shape.gate_types();
                let rhs = [
                    Term::triple(b0, q0, q1),
                    Term::product(b1, q0),
                    Term::product(b1, q1),
                    Term::single(b2),
                    Term::product(b2, q0),
                ]
                .into_iter()
                .collect();
                self.lines.push(Line::Definition { lhs, rhs });
                if first_row {
                    // Disallow NAND/NOR/XNOR so each realizable gate type has
                    // exactly one selector assignment.
                    self.lines.push(Line::Exclusion { lhs: b0, rhs: b2 });
                    self.lines.push(Line::Exclusion { lhs: b1, rhs: b2 });
                }
            },
            CostModel::GateCount | CostModel::Depth => {
                let [b0, b1, b2] = shape.gate_types();
                let rhs = [
                    Term::triple(b0, q0, q1),
                    Term::product(b1, q0),
                    Term::product(b1, q1),
                    Term::single(b2),
                ]
                .into_iter()
                .collect();
                self.lines.push(Line::Definition { lhs, rhs });
            },
        }
        z.push(lhs);
        self.wires.bind_operand_pair();
    }

    /// Defines each output bit as a selection over the final signal list.
    fn form_outputs(&mut self, z: &[Var], m: usize, first_row: bool, shape: &mut ShapeAlloc) {
        for j in 0..m {
            let lhs = self.wires.output(j);
            let block = shape.select_block(z.len());
            let rhs = block
                .clone()
                .zip(z.iter())
                .map(|(a, &signal)| Term::product(Var::Select(a), signal))
                .collect();
            self.lines.push(Line::Definition { lhs, rhs });
            if !self.model.free_linear_layer() && first_row {
                self.at_most_one(block);
            }
        }
    }

    /// Pins the row's input and output wires to the MSB-first binary
    /// expansions of the row index and the S-box entry.
    fn pin_row(&mut self, n: usize, row: usize, value: usize) {
        for j in (0..n).rev() {
            let wire = self.wires.pin_input();
            self.lines.push(Line::Pin { wire, value: (row >> j) & 1 == 1 });
        }
        for j in (0..n).rev() {
            let wire = self.wires.pin_output();
            self.lines.push(Line::Pin { wire, value: (value >> j) & 1 == 1 });
        }
    }

    /// Emits pairwise exclusions restricting a selector block to at most one
    /// set bit.
    fn at_most_one(&mut self, block: Range<usize>) {
        for (i, j) in block.tuple_combinations() {
            self.lines.push(Line::Exclusion {
                lhs: Var::Select(i),
                rhs: Var::Select(j),
            });
        }
    }

    /// Depth-mode anti-degeneracy: the two operands of a gate past the first
    /// layer may not both select signals that predate the previous layer's
    /// gates, otherwise the claimed depth would be achievable one layer
    /// shallower (e.g. two original inputs fed to a gate at depth 2).
    ///
    /// `block` is the second operand's selector range; the first operand's
    /// block of equal size immediately precedes it. The last `width`
    /// selectors of each block select the previous layer's outputs and are
    /// exempt.
    fn depth_exclusion(&mut self, block: Range<usize>, len_z: usize, width: usize) {
        let prior = block.start - len_z..block.start - width;
        let current = block.start..block.start + len_z - width;
        for i in prior {
            for j in current.clone() {
                self.lines.push(Line::Exclusion {
                    lhs: Var::Select(i),
                    rhs: Var::Select(j),
                });
            }
        }
    }
}

/// Convenience wrapper: encode `sbox` under `model` with the given bound
/// and layer width.
pub fn encode_system(model: CostModel, sbox: &Sbox, bound: usize, width: usize) -> Vec<Line> {
    Encoder::new(model, bound, width).encode(sbox)
}
