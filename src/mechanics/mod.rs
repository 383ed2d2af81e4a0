pub mod control;
pub mod decompose;
pub mod scoring;
pub mod stoch;

pub use control::*;
pub use decompose::*;
pub use scoring::*;
pub use stoch::*;
