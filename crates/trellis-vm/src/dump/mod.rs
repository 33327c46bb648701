//! Human-readable views of a finished or in-progress parse.

mod forest;
mod gss;


pub use forest::ForestPrinter;
pub use gss::GssPrinter;
