//! Terminal implementations of the answer view

pub mod console;
