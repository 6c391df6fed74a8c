mod mcts;
mod node;
mod noise;
mod play;
mod ucb;

pub use node::Node;
pub use noise::add_dirichlet;
pub use play::{policy_from_visits, sample_index};
