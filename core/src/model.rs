//! Circuit cost models.

/// The cost model a feasibility system is generated for.
///
/// The model decides three things: how many gates a layer holds, whether
/// operand wiring is a free affine combination or a one-hot selection, and
/// which gate template each gate instantiates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CostModel {
    /// `mc`: bound the number of AND gates; XOR/affine pre- and
    /// post-processing is free.
    MultiplicativeComplexity,
    /// `bgc`: bound the number of 2-input gates from the bitslice primitive
    /// set; the NAND/NOR/XNOR duals are excluded so each realizable gate has
    /// one canonical selector assignment.
    BitsliceGateCount,
    /// `gc`: bound the number of 2-input gates from the full universal set.
    GateCount,
    /// `depth`: bound the number of gate layers, with up to `width` gates
    /// per layer.
    Depth,
}

impl CostModel {
    /// All models, in command-line listing order.
    pub const ALL: [CostModel; 4] = [
        CostModel::MultiplicativeComplexity,
        CostModel::BitsliceGateCount,
        CostModel::GateCount,
        CostModel::Depth,
    ];

    /// Short mode name as used on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Self::MultiplicativeComplexity => "mc",
            Self::BitsliceGateCount => "bgc",
            Self::GateCount => "gc",
            Self::Depth => "depth",
        }
    }

    /// Number of gates instantiated per layer.
    pub(crate) fn layer_width(&self, width: usize) -> usize {
        match self {
            Self::Depth => width,
            _ => 1,
        }
    }

    /// Whether linear circuitry is free under this model.
    ///
    /// When true, operands are unrestricted affine combinations of the
    /// available signals and no at-most-one constraints are emitted; only
    /// nonlinear gates count toward the bound. When false, every gate is
    /// charged, so operand and output wiring must be a plain selection.
    pub(crate) fn free_linear_layer(&self) -> bool {
        matches!(self, Self::MultiplicativeComplexity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_depth_mode_widens_layers() {
        assert_eq!(CostModel::Depth.layer_width(3), 3);
        for model in [
            CostModel::MultiplicativeComplexity,
            CostModel::BitsliceGateCount,
            CostModel::GateCount,
        ] {
            assert_eq!(model.layer_width(3), 1);
        }
    }

    #[test]
    fn names_match_cli_modes() {
        let names: Vec<_> = CostModel::ALL.iter().map(|m| m.name()).collect();
        assert_eq!(names, ["mc", "bgc", "gc", "depth"]);
    }
}
