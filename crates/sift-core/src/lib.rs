pub mod events;
pub mod node;
pub mod query;

pub use events::*;
pub use node::*;
pub use query::*;
