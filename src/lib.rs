pub mod api_client;
pub mod cli;
pub mod logging;
pub mod output;
pub mod request;
