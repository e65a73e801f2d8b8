//! HTTP protocol layer module
//!
//! Response builders shared by the demo handlers, config-declared routes
//! and the connection layer.

pub mod response;

pub use response::{
    apply_server_header, build_404_response, build_direct_response, build_text_response,
};
