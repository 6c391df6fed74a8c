use super::node::Node;

impl Node {
    /// Score of `child` when selecting from this expanded node.
    pub fn upper_confidence_bound(&self, child: &Node, c_puct: f32) -> f32 {
        // The first visit of a node expands it, the rest went to its children.
        let sibling_visits = self.visits.saturating_sub(1) as f32;
        // U(s, a) = Q(s, a) + C * P(s, a) * sqrt(N(s)) / (1 + N(s, a))
        // Q is negated because the child is scored for its mover.
        -child.expected_reward() + c_puct * child.policy * sibling_visits.sqrt() / (1.0 + child.visits as f32)
    }
}
