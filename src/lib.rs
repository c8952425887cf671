pub mod api;
pub mod chrono_util;
pub mod parser;
pub mod schema;
