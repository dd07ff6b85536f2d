use thiserror::Error;

/// Extraction failed because the container was absent.
///
/// Only [`Value::get`](crate::Value::get) produces this; caller-supplied
/// errors surface through their own `E` and are never converted into it.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[error("value is empty")]
pub struct NoElement;
