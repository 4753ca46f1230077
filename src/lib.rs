mod dynamic_array_list;
mod error;
mod list;
mod sort;

pub use dynamic_array_list::{DynamicArrayList, Iter, DEFAULT_CAPACITY};
pub use error::{ListError, Result};
pub use list::List;
pub use sort::quick_sort;
