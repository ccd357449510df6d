mod header;
mod status;

pub use header::Header;
pub use status::status_badge;
