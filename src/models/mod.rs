pub mod depth;
pub mod entry;
pub mod lithology;

pub use depth::DepthValue;
pub use entry::{LogEntry, Section};
pub use lithology::{LITHOLOGIES, Lithology, UNKNOWN};
