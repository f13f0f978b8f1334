//! Edge-list provider loading whitespace-separated `V E (u v w)*` graphs.

mod errors;
mod source;
mod tokens;

pub use crate::{
    errors::{EdgeListError, EdgeListErrorCode},
    source::EdgeListSource,
};
