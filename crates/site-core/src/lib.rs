pub mod carousel;
pub mod circuit;
pub mod constants;
pub mod contact;
pub mod graph;
pub mod motion;

pub use carousel::*;
pub use circuit::*;
pub use constants::*;
pub use contact::*;
pub use graph::*;
pub use motion::*;
