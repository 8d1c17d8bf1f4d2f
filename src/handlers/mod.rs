pub mod assets;
pub mod payments;
pub mod states;
