//! Storage Adapters
//!
//! Implementations of the DocumentStore port.
//!
//! ## Available Adapters
//!
//! - **FileDocumentStore** - Stores the document as one JSON file on disk
//! - **InMemoryDocumentStore** - Keeps the document in memory (testing/development)
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::{FileDocumentStore, InMemoryDocumentStore};
//!
//! // Production: one JSON file
//! let store = FileDocumentStore::new("./data/campus_life_data.json");
//!
//! // Testing: in-memory storage
//! let store = InMemoryDocumentStore::new();
//! ```

mod file_document_store;
mod in_memory_document_store;

pub use file_document_store::FileDocumentStore;
pub use in_memory_document_store::InMemoryDocumentStore;
