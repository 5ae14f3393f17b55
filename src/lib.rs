pub mod error;
pub mod model;
pub mod solver;
pub mod table;
pub mod words;
pub mod spans;
pub mod topology;
pub mod decode;
pub mod generate;
