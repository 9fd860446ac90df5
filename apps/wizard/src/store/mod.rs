pub mod draft;

pub use draft::{DraftEnvelope, DraftStore, JsonFileStore, MemoryStore};
