pub mod constants;
pub mod functions;
pub mod impls;
pub mod types;
