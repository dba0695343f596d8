pub mod numerics;
pub mod search;
pub mod statistics;
