//! Persona registry implementations.

mod memory;

#[cfg(feature = "postgres")]
mod postgres;

pub use memory::MemoryRegistry;

#[cfg(feature = "postgres")]
pub use postgres::PostgresRegistry;
