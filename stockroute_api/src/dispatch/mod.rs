pub mod get_dispatches;
pub mod post_dispatch;
