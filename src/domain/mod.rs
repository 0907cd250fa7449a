//! Domain types for the todo resource.

pub mod todo;
