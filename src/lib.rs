pub mod analysis;
pub mod cli;
pub mod commands;
pub mod msa;
pub mod utils;
pub mod viz;
