//! Board-level types for the N-Queens problem

pub mod io;
pub mod placement;
pub mod prefill;

pub use io::{load_prefill_from_file, parse_prefill_from_string};
pub use placement::Placement;
pub use prefill::{Prefill, PrefillError};
