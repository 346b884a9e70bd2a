mod book;
mod facets;
mod filters;

pub use book::*;
pub use facets::*;
pub use filters::*;
