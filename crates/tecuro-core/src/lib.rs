// URL state layer: the page query string is the only place filter state
// outlives a recomputation. Decoding is total (bad input degrades to
// defaults) and writes go through History::replace_state only.

pub mod history;
pub mod query;

pub use history::{History, Location, MemoryHistory};
pub use query::{CONCERNS_KEY, SORT_KEY, TRAITS_KEY, decode, encode, replace_url};
