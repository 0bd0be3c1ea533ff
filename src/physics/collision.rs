//! Collision detection and merge clustering.
//!
//! Detection tests every unordered pair once (O(n²)). Which pairs count as
//! colliding and how colliding pairs are grouped into merges are both
//! configurable; the defaults reproduce the historical behavior of the
//! engine (first body's radius only, and a single merge per step).

use std::collections::{BTreeMap, BTreeSet};

use crate::body::Body;

/// When two bodies count as colliding.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CollisionRule {
    /// `d < radius(i)` for the pair `(i, j)` with `i < j`.
    ///
    /// Asymmetric: only the lower-index body's radius is checked, so a small
    /// body listed first can sit inside a large one without colliding.
    #[default]
    FirstBodyRadius,
    /// `d < radius(i) + radius(j)`: the spheres overlap.
    SumOfRadii,
}

impl CollisionRule {
    /// Whether `first` (lower index) and `second` collide.
    pub fn is_colliding(&self, first: &Body, second: &Body) -> bool {
        let d = first.position().distance(second.position());
        match self {
            CollisionRule::FirstBodyRadius => d < first.radius(),
            CollisionRule::SumOfRadii => d < first.radius() + second.radius(),
        }
    }
}

/// How colliding pairs are turned into merges.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum MergeGrouping {
    /// Every body in any colliding pair goes into one merge, even when the
    /// pairs are unrelated.
    #[default]
    SingleCluster,
    /// One merge per connected group of colliding bodies.
    ConnectedClusters,
}

/// Colliding pairs `(i, j)` with `i < j`, in scan order.
pub fn detect_collisions(bodies: &[Body], rule: CollisionRule) -> Vec<(usize, usize)> {
    let mut pairs = Vec::new();
    for (i, a) in bodies.iter().enumerate() {
        for (j, b) in bodies.iter().enumerate().skip(i + 1) {
            if rule.is_colliding(a, b) {
                pairs.push((i, j));
            }
        }
    }
    pairs
}

/// Group colliding pairs into clusters of body indices.
///
/// Each cluster is sorted ascending and has at least two members; clusters
/// are ordered by their lowest index.
pub fn group_clusters(
    body_count: usize,
    pairs: &[(usize, usize)],
    grouping: MergeGrouping,
) -> Vec<Vec<usize>> {
    if pairs.is_empty() {
        return Vec::new();
    }

    match grouping {
        MergeGrouping::SingleCluster => {
            let members: BTreeSet<usize> = pairs.iter().flat_map(|&(i, j)| [i, j]).collect();
            vec![members.into_iter().collect()]
        }
        MergeGrouping::ConnectedClusters => {
            let mut sets = DisjointSets::new(body_count);
            for &(i, j) in pairs {
                sets.union(i, j);
            }

            let mut by_root: BTreeMap<usize, Vec<usize>> = BTreeMap::new();
            for index in pairs.iter().flat_map(|&(i, j)| [i, j]).collect::<BTreeSet<_>>() {
                by_root.entry(sets.find(index)).or_default().push(index);
            }

            let mut clusters: Vec<Vec<usize>> = by_root.into_values().collect();
            clusters.sort_by_key(|c| c[0]);
            clusters
        }
    }
}

/// Union-find over body indices.
struct DisjointSets {
    parent: Vec<usize>,
}

impl DisjointSets {
    fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
        }
    }

    fn find(&mut self, mut x: usize) -> usize {
        while self.parent[x] != x {
            self.parent[x] = self.parent[self.parent[x]];
            x = self.parent[x];
        }
        x
    }

    fn union(&mut self, a: usize, b: usize) {
        let (ra, rb) = (self.find(a), self.find(b));
        if ra != rb {
            // Lower index becomes the root
            let (lo, hi) = if ra < rb { (ra, rb) } else { (rb, ra) };
            self.parent[hi] = lo;
        }
    }
}
