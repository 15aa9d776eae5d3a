pub mod errors;
pub mod page;

pub use page::render_index;
