//! Mutable side-context carried alongside the machine state.
//!
//! The context is the only channel through which the transition function and
//! lifecycle hooks communicate derived data. Each machine instance owns its
//! context exclusively; the engine snapshots it with `Clone` before every
//! transition attempt so that a rejected step can be discarded wholesale.

use std::fmt::Debug;

/// Trait for context values.
///
/// `Clone` doubles as the snapshot mechanism of the transition protocol, so
/// it must produce a fully independent deep copy: a context type whose clone
/// shares interior mutable state would let a rejected transition leak writes
/// into the committed context. Owned value types (maps, vectors, plain
/// structs) satisfy this naturally.
///
/// `Default` supplies the empty context used when a blueprint declares none.
pub trait Context: Clone + Debug + Default + Send + Sync {}

impl<T> Context for T where T: Clone + Debug + Default + Send + Sync {}

/// Default dict-shaped context: string keys mapping to arbitrary JSON values.
///
/// # Example
///
/// ```rust
/// use lockstep::ContextMap;
/// use serde_json::json;
///
/// let mut context = ContextMap::new();
/// context.insert("value".to_string(), json!(6));
///
/// assert_eq!(context["value"], json!(6));
/// ```
pub type ContextMap = serde_json::Map<String, serde_json::Value>;
