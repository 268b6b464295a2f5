pub mod api_utils;
pub mod remote;
