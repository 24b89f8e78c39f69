pub mod http;
pub mod ip_detector;
