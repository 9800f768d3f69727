//! Rank-based layered layout for small directed acyclic graphs.
//!
//! 1. Rank assignment: longest path from the sources.
//! 2. Ordering within ranks: barycenter of predecessor positions.
//! 3. Coordinates: ranks along one axis; within a rank each node is centred on
//!    its predecessors, then pushed apart so nodes never overlap.

use crate::models::Position;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Axis along which ranks advance.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub enum Direction {
    /// Ranks are columns, increasing x.
    #[default]
    #[serde(rename = "lr")]
    LeftToRight,
    /// Ranks are rows, increasing y.
    #[serde(rename = "tb")]
    TopToBottom,
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lr" | "left-to-right" => Ok(Direction::LeftToRight),
            "tb" | "top-to-bottom" => Ok(Direction::TopToBottom),
            other => Err(format!("unknown layout direction '{}'", other)),
        }
    }
}

/// Node size and spacing, in widget pixels.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutOptions {
    pub node_width: f64,
    pub node_height: f64,
    /// Gap between consecutive ranks.
    pub rank_gap: f64,
    /// Minimum gap between nodes of the same rank.
    pub node_gap: f64,
    pub direction: Direction,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            node_width: 240.0,
            node_height: 100.0,
            rank_gap: 150.0,
            node_gap: 40.0,
            direction: Direction::LeftToRight,
        }
    }
}

impl LayoutOptions {
    /// Node size along the rank axis.
    fn rank_extent(&self) -> f64 {
        match self.direction {
            Direction::LeftToRight => self.node_width,
            Direction::TopToBottom => self.node_height,
        }
    }

    /// Node size across the rank axis.
    fn cross_extent(&self) -> f64 {
        match self.direction {
            Direction::LeftToRight => self.node_height,
            Direction::TopToBottom => self.node_width,
        }
    }
}

/// Adjacency lists over nodes `0..n`, in insertion order.
#[derive(Debug, Default)]
pub struct LayeredGraph {
    /// adj[u] = nodes v with u → v.
    adj: Vec<Vec<usize>>,
    /// rev[v] = nodes u with u → v.
    rev: Vec<Vec<usize>>,
}

impl LayeredGraph {
    pub fn new(n: usize) -> Self {
        Self {
            adj: vec![Vec::new(); n],
            rev: vec![Vec::new(); n],
        }
    }

    pub fn len(&self) -> usize {
        self.adj.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adj.is_empty()
    }

    /// Add `from → to`. Out-of-range endpoints, self loops and duplicates are ignored.
    pub fn add_edge(&mut self, from: usize, to: usize) {
        let n = self.len();
        if from >= n || to >= n || from == to || self.adj[from].contains(&to) {
            return;
        }
        self.adj[from].push(to);
        self.rev[to].push(from);
    }

    /// Longest-path rank of every node (Kahn's algorithm). Nodes left over by a
    /// cycle are put one rank past the deepest node.
    pub fn assign_ranks(&self) -> Vec<usize> {
        let n = self.len();
        let mut in_degree: Vec<usize> = self.rev.iter().map(Vec::len).collect();
        let mut queue: Vec<usize> = (0..n).filter(|&v| in_degree[v] == 0).collect();
        let mut ranks = vec![0usize; n];
        let mut visited = vec![false; n];

        let mut head = 0;
        while head < queue.len() {
            let u = queue[head];
            head += 1;
            visited[u] = true;
            for &v in &self.adj[u] {
                ranks[v] = ranks[v].max(ranks[u] + 1);
                in_degree[v] -= 1;
                if in_degree[v] == 0 {
                    queue.push(v);
                }
            }
        }

        if queue.len() < n {
            let max_rank = ranks.iter().copied().max().unwrap_or(0);
            for (v, rank) in ranks.iter_mut().enumerate() {
                if !visited[v] {
                    *rank = max_rank + 1;
                }
            }
        }
        ranks
    }

    /// Nodes of each rank, in drawing order.
    pub fn order_ranks(&self, ranks: &[usize]) -> Vec<Vec<usize>> {
        let Some(max_rank) = ranks.iter().copied().max() else {
            return Vec::new();
        };
        let mut buckets = vec![Vec::new(); max_rank + 1];
        for (v, &r) in ranks.iter().enumerate() {
            buckets[r].push(v);
        }

        let mut position = vec![0usize; self.len()];
        for r in 0..buckets.len() {
            if r > 0 {
                let mut scored: Vec<(usize, f64)> = buckets[r]
                    .iter()
                    .map(|&v| (v, barycenter(&position, &self.rev[v])))
                    .collect();
                // Stable: equal barycenters keep insertion order.
                scored.sort_by(|a, b| a.1.total_cmp(&b.1));
                buckets[r] = scored.into_iter().map(|(v, _)| v).collect();
            }
            for (pos, &v) in buckets[r].iter().enumerate() {
                position[v] = pos;
            }
        }
        buckets
    }

    /// Top-left corner of every node.
    pub fn layout(&self, options: &LayoutOptions) -> Vec<Position> {
        let n = self.len();
        if n == 0 {
            return Vec::new();
        }
        let ranks = self.assign_ranks();
        let order = self.order_ranks(&ranks);

        let cross = options.cross_extent();
        let step = cross + options.node_gap;
        let rank_step = options.rank_extent() + options.rank_gap;

        let mut center = vec![0.0f64; n];
        for rank_nodes in &order {
            let mut last: Option<f64> = None;
            for &v in rank_nodes {
                let preds = &self.rev[v];
                let desired = if preds.is_empty() {
                    last.map_or(cross / 2.0, |l| l + step)
                } else {
                    preds.iter().map(|&p| center[p]).sum::<f64>() / preds.len() as f64
                };
                let placed = match last {
                    Some(l) => desired.max(l + step),
                    None => desired,
                };
                center[v] = placed;
                last = Some(placed);
            }
        }

        let min_edge = center.iter().copied().fold(f64::INFINITY, f64::min) - cross / 2.0;
        (0..n)
            .map(|v| {
                let along = ranks[v] as f64 * rank_step;
                let across = center[v] - cross / 2.0 - min_edge;
                match options.direction {
                    Direction::LeftToRight => Position { x: along, y: across },
                    Direction::TopToBottom => Position { x: across, y: along },
                }
            })
            .collect()
    }
}

fn barycenter(position: &[usize], neighbors: &[usize]) -> f64 {
    if neighbors.is_empty() {
        return f64::MAX;
    }
    neighbors.iter().map(|&u| position[u] as f64).sum::<f64>() / neighbors.len() as f64
}
