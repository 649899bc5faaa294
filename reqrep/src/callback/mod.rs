pub mod async_reply_callback;
pub mod reply_completion_handle;
