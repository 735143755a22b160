pub mod api_error;
pub mod handler_404;
