//! Turn a bracket into a positioned node/edge graph for the diagram widget.

use crate::logic::layered::{LayeredGraph, LayoutOptions};
use crate::models::{
    BracketLayout, Edge, Node, NodeData, Slot, TournamentData, MATCH_NODE_TYPE,
};

/// One node per match and one edge per "winner advances to" link.
///
/// Match `2k` of a round feeds slot `team-0` of match `k` in the next round,
/// match `2k + 1` feeds `team-1`. Positions come from the layered layout, so
/// rounds read along `options.direction`. An empty bracket gives an empty layout.
pub fn generate_layout(tournament: &TournamentData, options: &LayoutOptions) -> BracketLayout {
    if tournament.is_empty() {
        return BracketLayout::default();
    }

    // Index of the first node of each round in the flattened node list.
    let mut offsets = Vec::with_capacity(tournament.rounds.len());
    let mut total = 0;
    for round in &tournament.rounds {
        offsets.push(total);
        total += round.matches.len();
    }

    let mut graph = LayeredGraph::new(total);
    let mut edges = Vec::new();
    for (r, round) in tournament.rounds.iter().enumerate().skip(1) {
        let previous = &tournament.rounds[r - 1].matches;
        for (k, target) in round.matches.iter().enumerate() {
            for slot in [Slot::First, Slot::Second] {
                let upstream = 2 * k + slot.index();
                let Some(source) = previous.get(upstream) else {
                    continue;
                };
                graph.add_edge(offsets[r - 1] + upstream, offsets[r] + k);
                edges.push(Edge::winner_to(&source.id, &target.id, slot));
            }
        }
    }

    let positions = graph.layout(options);
    let nodes: Vec<Node> = tournament
        .rounds
        .iter()
        .flat_map(|round| round.matches.iter().map(move |m| (round, m)))
        .zip(positions)
        .map(|((round, m), position)| Node {
            id: m.id.clone(),
            node_type: MATCH_NODE_TYPE.to_string(),
            position,
            data: NodeData {
                teams: m.teams.clone(),
                round: round.name.clone(),
                status: m.status,
            },
            draggable: false,
        })
        .collect();

    log::debug!(
        "Laid out {} bracket: {} nodes, {} edges",
        tournament.sport,
        nodes.len(),
        edges.len()
    );
    BracketLayout { nodes, edges }
}
