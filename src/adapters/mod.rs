// Adapters layer: concrete implementations of the domain ports.

pub mod json_store;
pub mod open_library;

pub use json_store::JsonFileRepository;
pub use open_library::OpenLibraryClient;
