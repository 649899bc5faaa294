pub mod echo_client;
pub mod echo_server;
