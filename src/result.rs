//! Output-side decoding of fetched rows.
//!
//! This module provides abstractions for reading query results:
//!
//! - **ResultField**: one decoded column value with row-validity tracking
//! - **ColumnSlot / ResultBinder**: the seam through which a driver buffer
//!   writes column values directly into bound fields
//! - **ResultRow**: a set of fields bound to consecutive column indexes
//! - **Cursor**: drives fetches and keeps the row's validity in step
//! - **MemoryRowBuffer**: an in-memory row source over raw column bytes
//!
//! Slots are shared through `Arc<Mutex<_>>`, so a bound cursor can be built
//! on one thread and moved to another. Use one cursor per thread.

pub mod bind;
pub mod buffer;
pub mod cursor;
pub mod field;
pub mod row;

pub use bind::{ColumnSlot, ResultBinder, RowSource, SlotState};
pub use buffer::MemoryRowBuffer;
pub use cursor::Cursor;
pub use field::ResultField;
pub use row::ResultRow;
