pub use config::*;
pub use coordinator::*;
pub use entry::*;
pub use raffle::*;
pub use treasury::*;

pub mod config;
pub mod coordinator;
pub mod entry;
pub mod raffle;
pub mod treasury;
