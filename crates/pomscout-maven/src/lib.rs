//! Maven module descriptors: POM parsing and the [`reader::PomReader`]
//! implementation of the descriptor reader.

pub mod pom;
pub mod reader;
