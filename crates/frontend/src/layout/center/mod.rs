pub mod center;

pub use center::{render_page, Center};
