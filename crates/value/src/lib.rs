pub mod value;
pub use value::Value;

pub mod error;
pub use error::NoElement;

pub mod iter;
pub use iter::{IntoIter, Iter};

// Nullable-by-convention adaptation
pub mod sentinel;
pub use sentinel::Sentinel;
