//! The shared ANF variable namespace and its two-phase allocation.
//!
//! Every symbol in an emitted system belongs to one of six families. Wire
//! families (`x`, `y`, `q`, `t`) take row-specific values and are numbered
//! by an allocator that never resets, so each truth-table row simulates the
//! circuit on fresh wires. Selector families (`a`, `b`) describe the circuit
//! shape itself and are numbered by an allocator that restarts at zero for
//! every row: all rows reference the same selector variables, which forces
//! the solver to find one circuit valid for the whole truth table.

use core::{fmt, ops::Range};

/// A variable in the shared ANF namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Var {
    /// `x_j`: value of one input bit of the row being simulated.
    Input(usize),
    /// `y_j`: value required of one output bit of the row being simulated.
    Output(usize),
    /// `a_j`: selector/coefficient bit wiring a gate operand or output.
    Select(usize),
    /// `b_j`: selector bit choosing a gate's logical type.
    GateType(usize),
    /// `q_j`: value of one gate operand.
    Operand(usize),
    /// `t_j`: value produced by one instantiated gate.
    Gate(usize),
}

impl fmt::Display for Var {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (prefix, index) = match self {
            Self::Input(i) => ("x", i),
            Self::Output(i) => ("y", i),
            Self::Select(i) => ("a", i),
            Self::GateType(i) => ("b", i),
            Self::Operand(i) => ("q", i),
            Self::Gate(i) => ("t", i),
        };
        write!(f, "{prefix}_{index}")
    }
}

/// Allocator for per-row wire variables (`x`, `y`, `q`, `t`).
///
/// Counters advance monotonically for the lifetime of an encoding and are
/// never reset. Input and output wires are referenced ahead of time while a
/// row is simulated and consumed when the row's truth-table values are
/// pinned; operand wires are consumed in pairs as gates bind them.
#[derive(Debug, Default)]
pub(crate) struct WireAlloc {
    x: usize,
    y: usize,
    q: usize,
    t: usize,
}

impl WireAlloc {
    /// Fresh input wires seeding the available-signal list for the next row.
    pub fn row_inputs(&self, n: usize) -> Vec<Var> {
        (self.x..self.x + n).map(Var::Input).collect()
    }

    /// Output wire `j` of the current row, not yet consumed.
    pub fn output(&self, j: usize) -> Var {
        Var::Output(self.y + j)
    }

    /// Operand wire `slot` positions past the last gate-bound pair.
    pub fn operand(&self, slot: usize) -> Var {
        Var::Operand(self.q + slot)
    }

    /// Marks the next operand pair as bound to a gate.
    pub fn bind_operand_pair(&mut self) {
        self.q += 2;
    }

    /// Allocates the output wire of a new gate.
    pub fn gate(&mut self) -> Var {
        let var = Var::Gate(self.t);
        self.t += 1;
        var
    }

    /// Consumes the next input wire for row pinning.
    pub fn pin_input(&mut self) -> Var {
        let var = Var::Input(self.x);
        self.x += 1;
        var
    }

    /// Consumes the next output wire for row pinning.
    pub fn pin_output(&mut self) -> Var {
        let var = Var::Output(self.y);
        self.y += 1;
        var
    }
}

/// Allocator for structural selector variables (`a`, `b`).
///
/// Reset at the start of every row. The reset is what shares one circuit
/// shape across all rows: row 7's operand wiring references the very same
/// `a_j` bits as row 0's.
#[derive(Debug, Default)]
pub(crate) struct ShapeAlloc {
    a: usize,
    b: usize,
}

impl ShapeAlloc {
    /// Restarts structural numbering for the next row.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Consumes a single selector bit.
    pub fn select(&mut self) -> Var {
        let var = Var::Select(self.a);
        self.a += 1;
        var
    }

    /// Consumes a block of selector bits, returning their index range.
    pub fn select_block(&mut self, count: usize) -> Range<usize> {
        let start = self.a;
        self.a += count;
        start..start + count
    }

    /// Consumes the three gate-type bits of one parametrized gate.
    pub fn gate_types(&mut self) -> [Var; 3] {
        let start = self.b;
        self.b += 3;
        [
            Var::GateType(start),
            Var::GateType(start + 1),
            Var::GateType(start + 2),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn var_rendering_uses_family_prefixes() {
        assert_eq!(Var::Input(0).to_string(), "x_0");
        assert_eq!(Var::Output(12).to_string(), "y_12");
        assert_eq!(Var::Select(3).to_string(), "a_3");
        assert_eq!(Var::GateType(7).to_string(), "b_7");
        assert_eq!(Var::Operand(1).to_string(), "q_1");
        assert_eq!(Var::Gate(40).to_string(), "t_40");
    }

    #[test]
    fn wire_counters_never_reset() {
        let mut wires = WireAlloc::default();
        assert_eq!(wires.row_inputs(3), vec![Var::Input(0), Var::Input(1), Var::Input(2)]);
        for _ in 0..3 {
            wires.pin_input();
        }
        // The next row starts where pinning left off.
        assert_eq!(wires.row_inputs(3), vec![Var::Input(3), Var::Input(4), Var::Input(5)]);
    }

    #[test]
    fn shape_counters_reset_per_row() {
        let mut shape = ShapeAlloc::default();
        assert_eq!(shape.select_block(4), 0..4);
        assert_eq!(shape.gate_types()[0], Var::GateType(0));
        shape.reset();
        assert_eq!(shape.select(), Var::Select(0));
    }

    #[test]
    fn operand_pairs_advance_by_two() {
        let mut wires = WireAlloc::default();
        assert_eq!(wires.operand(0), Var::Operand(0));
        assert_eq!(wires.operand(1), Var::Operand(1));
        wires.bind_operand_pair();
        assert_eq!(wires.operand(0), Var::Operand(2));
    }
}
