pub mod checkout;
pub mod delete;
pub mod merge;
pub mod navigate;

pub use checkout::*;
pub use delete::*;
pub use merge::*;
pub use navigate::*;
