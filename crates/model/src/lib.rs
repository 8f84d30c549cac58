pub mod core;
pub mod error;
pub mod order;
pub mod pagination;
pub mod records;

pub use crate::core::data_type::DataType;
pub use crate::core::value::Value;
pub use crate::error::{CursorError, OrderError};
pub use crate::order::definition::{OrderDefinition, OrderDirection};
pub use crate::order::spec::OrderSpec;
pub use crate::pagination::codec::CursorCodec;
pub use crate::pagination::cursor::Cursor;
pub use crate::pagination::page::{MIN_LIMIT, OffsetPage, OffsetRequest, Page, PageRequest};
pub use crate::records::row::{FieldValue, Row};
