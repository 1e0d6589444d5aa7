// Service exports
pub mod appwrite;
pub mod cache;
pub mod directory;

pub use appwrite::{AppwriteClient, AppwriteCollections, AppwriteError};
pub use cache::{CacheManager, CacheKey, CacheError, CacheStats};
pub use directory::UserDirectory;
