pub mod config; pub use config::*;
pub mod error; pub use error::{IndexError, ScriptError};
pub mod node; pub use node::*;
pub mod leaf_node; pub use leaf_node::*; // leaf entries and the leaf chain link
pub mod internal_node; pub use internal_node::*; // separator keys and child ids
pub mod node_id_allocator; pub use node_id_allocator::*;
pub mod node_store; pub use node_store::*; // id -> node table the tree reads and writes through
pub mod bplus_tree; pub use bplus_tree::*;
pub mod record_index; pub use record_index::*; // key -> byte offset of a CSV data file
pub mod script; pub use script::*; // FLH/INC/BUS= command scripts
