pub mod post_optimize;
