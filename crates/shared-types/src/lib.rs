pub mod accounts;
pub mod access;
pub mod auction;
pub mod error;
pub mod models;
pub mod requests;

pub use access::*;
pub use accounts::*;
pub use auction::*;
pub use error::*;
pub use models::*;
pub use requests::*;
