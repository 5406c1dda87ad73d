// Pokédex catalog client

pub mod core;
pub mod runtime;
