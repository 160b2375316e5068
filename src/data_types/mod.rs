pub mod config;
pub mod domain;
pub mod hint;
pub mod key;

pub use config::*;
pub use domain::*;
pub use hint::*;
pub use key::*;
