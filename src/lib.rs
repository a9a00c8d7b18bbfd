pub mod core;
pub mod items;
pub mod patrons;
pub mod catalog;
pub mod circulation;
pub mod gateway;
pub mod utils;
