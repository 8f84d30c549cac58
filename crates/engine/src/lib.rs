pub mod error;
pub mod keyset;
pub mod offset;
pub mod provider;
pub mod registry;
pub mod strategy;

pub use error::PaginationError;
pub use keyset::KeysetPaginator;
pub use offset::OffsetPaginator;
pub use provider::{DatasetProvider, ProviderError, memory::MemoryProvider};
pub use registry::{CapabilityRegistry, CapabilityRegistryBuilder, DatasetType};
pub use strategy::{Paginated, PaginationParams, Strategy, StrategySelector};
