//! Station resolution and normalization.
//!
//! Every endpoint funnels through here: raw upstream records go in with a
//! [`Selection`], and a short list of [`ResolvedStation`]s comes out with
//! friendly names and parsed counts. An empty result is a normal outcome
//! that callers render as "no stations found".

mod names;
mod resolve;
mod selection;
mod timestamp;


pub use names::{NAME_PREFIX, TRAILING_DESIGNATOR, normalize_name, parse_count};
pub use resolve::{ResolvedStation, fetch_and_resolve, resolve, resolve_target};
pub use selection::{FetchTarget, Selection, SelectionKind};
pub use timestamp::{format_timestamp, latest_timestamp};
