pub mod pipeline;
pub mod post;
pub mod transcript;

pub use pipeline::*;
pub use post::*;
pub use transcript::*;
