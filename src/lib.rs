pub mod headers;
pub mod http_client;
pub mod output;
pub mod scope;
pub mod targets;
