pub mod correlation_id;
pub mod correlator;
pub mod correlator_config;
pub mod message;
pub mod reply_callback;
pub mod request_timeout_error;
pub(crate) mod callback_scheduler;
pub(crate) mod expired_entry_sweeper;
pub(crate) mod timeout_record;
