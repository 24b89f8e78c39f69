pub mod casadns;
pub mod traits;

pub use traits::DnsUpdater;
