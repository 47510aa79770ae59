use super::prim::{compute_mst_keyed, compute_mst_lazy};
use super::types::{Edge, MstResult, NodeId};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MstAlgorithm {
    /// Candidate edges in the heap, stale ones dropped at pop time.
    #[default]
    Lazy,
    /// Per-node best keys, decrease-key simulated by re-insertion.
    Keyed,
}

impl MstAlgorithm {
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "lazy" => Some(Self::Lazy),
            "keyed" => Some(Self::Keyed),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lazy => "lazy",
            Self::Keyed => "keyed",
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MstStrategyConfig {
    pub algorithm: MstAlgorithm,
}

pub fn compute_mst(start: NodeId, edges: &[Edge], config: &MstStrategyConfig) -> MstResult {
    match config.algorithm {
        MstAlgorithm::Lazy => compute_mst_lazy(start, edges),
        MstAlgorithm::Keyed => compute_mst_keyed(start, edges),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Vec<Edge> {
        vec![
            Edge::new(1.0, 1, 2),
            Edge::new(2.0, 2, 3),
            Edge::new(3.0, 1, 3),
        ]
    }

    #[test]
    fn dispatch_matches_direct_calls() {
        let edges = triangle();

        let lazy = compute_mst(
            1,
            &edges,
            &MstStrategyConfig {
                algorithm: MstAlgorithm::Lazy,
            },
        );
        assert_eq!(lazy.total_weight, compute_mst_lazy(1, &edges).total_weight);

        let keyed = compute_mst(
            1,
            &edges,
            &MstStrategyConfig {
                algorithm: MstAlgorithm::Keyed,
            },
        );
        assert_eq!(keyed.total_weight, compute_mst_keyed(1, &edges).total_weight);
    }

    #[test]
    fn algorithm_names_round_trip() {
        assert_eq!(MstAlgorithm::parse("lazy"), Some(MstAlgorithm::Lazy));
        assert_eq!(MstAlgorithm::parse("KEYED"), Some(MstAlgorithm::Keyed));
        assert_eq!(MstAlgorithm::parse("kruskal"), None);
        assert_eq!(MstAlgorithm::Keyed.as_str(), "keyed");
    }

    #[test]
    fn default_config_uses_lazy() {
        let config = MstStrategyConfig::default();
        assert_eq!(config.algorithm, MstAlgorithm::Lazy);
    }
}
