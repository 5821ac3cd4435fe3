pub mod names;
pub mod graph;
pub mod search;
pub mod letters;
pub mod config;

pub use names::{NameRecord, NamesError, clean_names, load_names, parse_names, save_names};
pub use graph::{GraphStats, NameGraph, NodeId, build_graph};
pub use search::{
    LengthOutcome, SearchError, SearchMode, canonical_rotation, search, search_from,
    search_lengths,
};
pub use config::Config;
