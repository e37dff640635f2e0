//! # Adapters
//!
//! Implementations of the ports:
//! - `memory` / `file` - `BlobStore` storage media
//! - `host` - JSON request dispatch onto `Nip07Api`

pub mod file;
pub mod host;
pub mod memory;

pub use file::FileBlobStore;
pub use host::{dispatch, dispatch_line, HostError, HostRequest, HostResponse};
pub use memory::{InMemoryBlobStore, UnavailableBlobStore};
