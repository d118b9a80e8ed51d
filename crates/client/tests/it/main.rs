mod contract;
pub mod utils;
