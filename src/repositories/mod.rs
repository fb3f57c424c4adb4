mod file_directory_repository;
pub mod snapshot;
mod traits;

pub use file_directory_repository::FileDirectoryRepository;
pub use traits::DirectoryRepository;
