//! Usuario infrastructure - Repositories and service

mod in_memory;
mod postgres_repository;
mod service;
mod statements;

pub use in_memory::InMemoryUsuarioRepository;
pub use postgres_repository::PostgresUsuarioRepository;
pub use service::{UsuarioService, NOT_FOUND_MESSAGE};
