//! Model → Entity mappers

mod comment;
mod post;
mod tag;
