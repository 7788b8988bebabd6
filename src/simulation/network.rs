use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::BTreeSet;
use std::ops::RangeInclusive;

pub const NODE_RANGE: RangeInclusive<usize> = 6..=40;
pub const STEP_RANGE: RangeInclusive<usize> = 3..=12;
pub const EDGE_PROBABILITY: f64 = 0.2;
/// Fixed so the same node count always draws the same topology.
pub const GRAPH_SEED: u64 = 42;

#[derive(Debug, Clone)]
pub struct NetworkParams {
    pub nodes: usize,
    pub seed_node: usize,
    pub spread_probability: f64,
    pub steps: usize,
}

impl Default for NetworkParams {
    fn default() -> Self {
        Self {
            nodes: 12,
            seed_node: 0,
            spread_probability: 0.35,
            steps: 6,
        }
    }
}

impl NetworkParams {
    pub fn validate(&self) -> anyhow::Result<()> {
        if !NODE_RANGE.contains(&self.nodes) {
            anyhow::bail!(
                "node count {} outside {}..={}",
                self.nodes,
                NODE_RANGE.start(),
                NODE_RANGE.end()
            );
        }
        if self.seed_node >= self.nodes {
            anyhow::bail!(
                "start node {} must be below the node count {}",
                self.seed_node,
                self.nodes
            );
        }
        if !(0.0..=1.0).contains(&self.spread_probability) {
            anyhow::bail!(
                "spread probability {} outside 0.0..=1.0",
                self.spread_probability
            );
        }
        if !STEP_RANGE.contains(&self.steps) {
            anyhow::bail!(
                "step count {} outside {}..={}",
                self.steps,
                STEP_RANGE.start(),
                STEP_RANGE.end()
            );
        }
        Ok(())
    }
}

/// Undirected graph stored as sorted adjacency lists.
#[derive(Debug, Clone)]
pub struct Network {
    adjacency: Vec<Vec<usize>>,
}

impl Network {
    /// G(n, p) random graph: each pair is connected independently with probability `p`.
    pub fn erdos_renyi<R: Rng>(nodes: usize, p: f64, rng: &mut R) -> Self {
        let mut adjacency = vec![Vec::new(); nodes];
        for a in 0..nodes {
            for b in (a + 1)..nodes {
                if rng.gen::<f64>() < p {
                    adjacency[a].push(b);
                    adjacency[b].push(a);
                }
            }
        }
        for neighbors in adjacency.iter_mut() {
            neighbors.sort_unstable();
        }
        Self { adjacency }
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn neighbors(&self, node: usize) -> &[usize] {
        self.adjacency.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn edges(&self) -> Vec<(usize, usize)> {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(|(a, ns)| ns.iter().filter(move |&&b| a < b).map(move |&b| (a, b)))
            .collect()
    }
}

#[derive(Debug, Clone)]
pub struct NetworkStep {
    pub step: usize,
    pub infected: BTreeSet<usize>,
}

#[derive(Debug, Clone)]
pub struct NetworkSimulation {
    pub network: Network,
    pub steps: Vec<NetworkStep>,
}

/// Run the spread demo. Each step snapshots the infected set, then every
/// node infected at the start of the step reaches each neighbor with the
/// spread probability.
pub fn simulate<R: Rng>(params: &NetworkParams, rng: &mut R) -> anyhow::Result<NetworkSimulation> {
    params.validate()?;

    let mut graph_rng = StdRng::seed_from_u64(GRAPH_SEED);
    let network = Network::erdos_renyi(params.nodes, EDGE_PROBABILITY, &mut graph_rng);

    let mut infected = BTreeSet::from([params.seed_node]);
    let mut steps = Vec::with_capacity(params.steps);

    for step in 1..=params.steps {
        steps.push(NetworkStep {
            step,
            infected: infected.clone(),
        });

        let mut newly_infected = BTreeSet::new();
        for &node in &infected {
            for &neighbor in network.neighbors(node) {
                if rng.gen::<f64>() < params.spread_probability {
                    newly_infected.insert(neighbor);
                }
            }
        }
        infected.extend(newly_infected);
    }

    log::debug!(
        "Network demo: {} nodes, {} edges, {} infected after {} steps",
        network.node_count(),
        network.edges().len(),
        infected.len(),
        params.steps
    );

    Ok(NetworkSimulation { network, steps })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation() {
        assert!(NetworkParams::default().validate().is_ok());

        let too_small = NetworkParams {
            nodes: 3,
            ..Default::default()
        };
        assert!(too_small.validate().is_err());

        let bad_seed = NetworkParams {
            seed_node: 12,
            ..Default::default()
        };
        assert!(bad_seed.validate().is_err());

        let bad_probability = NetworkParams {
            spread_probability: 1.5,
            ..Default::default()
        };
        assert!(bad_probability.validate().is_err());

        let too_many_steps = NetworkParams {
            steps: 20,
            ..Default::default()
        };
        assert!(too_many_steps.validate().is_err());
    }

    #[test]
    fn test_graph_is_symmetric() {
        let network = Network::erdos_renyi(20, 0.3, &mut StdRng::seed_from_u64(9));
        for a in 0..network.node_count() {
            assert!(!network.neighbors(a).contains(&a));
            for &b in network.neighbors(a) {
                assert!(network.neighbors(b).contains(&a));
            }
        }
    }

    #[test]
    fn test_infection_never_shrinks() {
        let params = NetworkParams {
            nodes: 30,
            spread_probability: 0.5,
            steps: 10,
            ..Default::default()
        };
        let sim = simulate(&params, &mut StdRng::seed_from_u64(5)).unwrap();
        assert_eq!(sim.steps.len(), 10);
        assert_eq!(sim.steps[0].infected, BTreeSet::from([0]));
        for pair in sim.steps.windows(2) {
            assert!(pair[0].infected.is_subset(&pair[1].infected));
        }
    }

    #[test]
    fn test_zero_probability_stays_at_seed() {
        let params = NetworkParams {
            seed_node: 4,
            spread_probability: 0.0,
            ..Default::default()
        };
        let sim = simulate(&params, &mut StdRng::seed_from_u64(1)).unwrap();
        assert!(sim
            .steps
            .iter()
            .all(|s| s.infected == BTreeSet::from([4])));
    }

    #[test]
    fn test_full_probability_follows_edges() {
        let params = NetworkParams {
            spread_probability: 1.0,
            steps: 3,
            ..Default::default()
        };
        let sim = simulate(&params, &mut StdRng::seed_from_u64(1)).unwrap();
        let expected: BTreeSet<usize> = std::iter::once(0)
            .chain(sim.network.neighbors(0).iter().copied())
            .collect();
        assert_eq!(sim.steps[1].infected, expected);
    }

    #[test]
    fn test_seeded_runs_repeat() {
        let params = NetworkParams::default();
        let a = simulate(&params, &mut StdRng::seed_from_u64(11)).unwrap();
        let b = simulate(&params, &mut StdRng::seed_from_u64(11)).unwrap();
        let a_sets: Vec<_> = a.steps.iter().map(|s| s.infected.clone()).collect();
        let b_sets: Vec<_> = b.steps.iter().map(|s| s.infected.clone()).collect();
        assert_eq!(a_sets, b_sets);
    }
}
