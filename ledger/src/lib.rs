mod block;
mod configuration;
mod node_status;
mod note;
mod round;
mod transaction;

pub use block::{
    Block,
    BlockTransactions,
};
pub use configuration::{
    Configuration,
    Header,
    API_KEY_HEADER,
    DEFAULT_ADDRESS,
};
pub use node_status::NodeStatus;
pub use note::Note;
pub use round::Round;
pub use transaction::Transaction;
