use super::prim::{compute_mst_keyed, compute_mst_lazy};
use super::types::{Edge, MstResult, NodeId};

pub trait TreeComputeEngine {
    type Input;
    type Output;

    fn compute(&self, input: &Self::Input) -> Self::Output;
}

#[derive(Debug, Clone)]
pub struct MstComputeInput {
    pub start: NodeId,
    pub edges: Vec<Edge>,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct LazyPrimEngine;

#[derive(Debug, Default, Clone, Copy)]
pub struct KeyedPrimEngine;

impl TreeComputeEngine for LazyPrimEngine {
    type Input = MstComputeInput;
    type Output = MstResult;

    fn compute(&self, input: &Self::Input) -> Self::Output {
        compute_mst_lazy(input.start, &input.edges)
    }
}

impl TreeComputeEngine for KeyedPrimEngine {
    type Input = MstComputeInput;
    type Output = MstResult;

    fn compute(&self, input: &Self::Input) -> Self::Output {
        compute_mst_keyed(input.start, &input.edges)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn engines_delegate_to_variants() {
        let input = MstComputeInput {
            start: 1,
            edges: vec![Edge::new(1.0, 1, 2), Edge::new(2.0, 2, 3)],
        };

        let lazy = LazyPrimEngine.compute(&input);
        let keyed = KeyedPrimEngine.compute(&input);

        assert_eq!(lazy.total_weight, 3.0);
        assert_eq!(keyed.total_weight, 3.0);
        assert_eq!(lazy.edges.len(), 2);
        assert_eq!(keyed.edges.len(), 2);
    }
}
