use omok::GameState;

/// One visited position of the search tree.
#[derive(Clone, Debug)]
pub struct Node {
    pub state: GameState,
    /// Prior probability of the move leading here.
    pub policy: f32,
    pub visits: u32,
    /// Sum of all backed up values, from the perspective of this node's mover.
    pub value_sum: f32,
    pub children: Vec<(usize, Node)>,
}

impl Node {
    pub fn new(state: GameState, policy: f32) -> Self {
        Node {
            state,
            policy,
            visits: 0,
            value_sum: 0.0,
            children: Vec::new(),
        }
    }

    pub fn is_expanded(&self) -> bool {
        !self.children.is_empty()
    }

    /// Mean value for this node's mover.
    pub fn expected_reward(&self) -> f32 {
        if self.visits == 0 {
            0.0
        } else {
            self.value_sum / self.visits as f32
        }
    }

    /// Visits of every child, in the order of `children`.
    pub fn child_visits(&self) -> Vec<u32> {
        self.children.iter().map(|(_, child)| child.visits).collect()
    }

    pub fn child(&self, action: usize) -> Option<&Node> {
        self.children
            .iter()
            .find(|(a, _)| *a == action)
            .map(|(_, child)| child)
    }

    pub(crate) fn update(&mut self, value: f32) {
        self.visits += 1;
        self.value_sum += value;
    }
}
