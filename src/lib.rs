//! A hash-backed multiset (bag) that tracks how many copies of each value it
//! holds, plus a small script driver used by the `bag` binary.

pub mod bag_error;
pub mod bag_lang;
pub mod bag_multiset;
pub mod bag_parser;
pub mod bag_runner;

pub use bag_error::BagError;
pub use bag_lang::Element;
pub use bag_multiset::Multiset;
