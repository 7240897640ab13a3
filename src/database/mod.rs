pub mod activity_directory_repo;
pub mod catalog_repo;

pub use activity_directory_repo::{ActivityDirectory, DirectorySnapshot};
