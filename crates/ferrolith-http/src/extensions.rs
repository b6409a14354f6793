//! Type-safe extensions for Request
//!
//! A simple type-keyed storage mechanism for arbitrary data attached to a
//! request while it travels through the middleware chain.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Type-safe extension storage
///
/// Cloning an `Extensions` yields a handle to the same underlying map.
#[derive(Clone, Default)]
pub struct Extensions {
	map: Arc<Mutex<HashMap<TypeId, Box<dyn Any + Send + Sync>>>>,
}

impl Extensions {
	/// Create an empty Extensions instance
	///
	/// # Examples
	///
	/// ```
	/// use ferrolith_http::Extensions;
	///
	/// let extensions = Extensions::new();
	/// assert!(!extensions.contains::<String>());
	/// ```
	pub fn new() -> Self {
		Self {
			map: Arc::new(Mutex::new(HashMap::new())),
		}
	}
	/// Insert a value, replacing any existing value of the same type
	///
	/// # Examples
	///
	/// ```
	/// use ferrolith_http::Extensions;
	///
	/// let extensions = Extensions::new();
	/// extensions.insert(42u32);
	/// assert!(extensions.contains::<u32>());
	/// ```
	pub fn insert<T: Send + Sync + 'static>(&self, value: T) {
		let mut map = self.map.lock().unwrap_or_else(|e| e.into_inner());
		map.insert(TypeId::of::<T>(), Box::new(value));
	}
	/// Get a cloned value by type
	///
	/// # Examples
	///
	/// ```
	/// use ferrolith_http::Extensions;
	///
	/// let extensions = Extensions::new();
	/// extensions.insert("tag".to_string());
	/// assert_eq!(extensions.get::<String>(), Some("tag".to_string()));
	/// assert_eq!(extensions.get::<u64>(), None);
	/// ```
	pub fn get<T: Clone + Send + Sync + 'static>(&self) -> Option<T> {
		let map = self.map.lock().unwrap_or_else(|e| e.into_inner());
		map.get(&TypeId::of::<T>())
			.and_then(|value| value.downcast_ref::<T>())
			.cloned()
	}
	/// Whether a value of the given type is present
	pub fn contains<T: Send + Sync + 'static>(&self) -> bool {
		let map = self.map.lock().unwrap_or_else(|e| e.into_inner());
		map.contains_key(&TypeId::of::<T>())
	}
	/// Remove a value by type, returning it if present
	pub fn remove<T: Clone + Send + Sync + 'static>(&self) -> Option<T> {
		let mut map = self.map.lock().unwrap_or_else(|e| e.into_inner());
		map.remove(&TypeId::of::<T>())
			.and_then(|value| value.downcast_ref::<T>().cloned())
	}
}
