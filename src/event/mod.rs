pub mod model;
pub mod repo;
pub mod source;

pub use model::Event;
pub use repo::EventRepo;
pub use source::DataDirResolver;
