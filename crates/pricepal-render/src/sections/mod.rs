//! Section renderers for the storefront page.

mod how_it_works;
mod results;
mod search_box;
mod suggestions;

pub use how_it_works::*;
pub use results::*;
pub use search_box::*;
pub use suggestions::*;
