//! Named, ordered, validated registries.

use std::any;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::discovery;
use crate::entry::RegistryEntry;
use crate::error::RegistryError;
use crate::store::OrderedMap;

/// Policy for a key that is already present at registration time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DuplicatePolicy {
	/// Overwrite with the newly registered value. The entry keeps its
	/// original insertion position.
	#[default]
	LastWins,
	/// Keep the existing value; the new registration is a no-op.
	FirstWins,
	/// Fail the registration with [`RegistryError::Duplicate`].
	Reject,
}

fn accept_all<T: ?Sized>(_value: &T) -> bool {
	true
}

fn keep<T: ?Sized>(value: Arc<T>) -> Arc<T> {
	value
}

/// An ordered name-to-value registry.
///
/// Values are held by shared reference ([`Arc`]); the registering component
/// keeps its own handle and the returned one stays usable exactly as
/// registered. Iteration order is registration order.
///
/// Registries are usually module-level singletons:
///
/// ```
/// use std::sync::{Arc, LazyLock};
/// use rollcall_registry::Registry;
///
/// static TOOLS: LazyLock<Arc<Registry<&'static str>>> =
/// 	LazyLock::new(|| Arc::new(Registry::new("tools")));
/// ```
pub struct Registry<T: ?Sized> {
	name: &'static str,
	look_into: &'static str,
	validate: fn(&T) -> bool,
	prepare: fn(Arc<T>) -> Arc<T>,
	prepare_name: Option<fn(&T, Option<&str>) -> Option<String>>,
	post_register: Option<fn(&Arc<T>, &str) -> Result<(), RegistryError>>,
	duplicates: DuplicatePolicy,
	store: RwLock<OrderedMap<Arc<T>>>,
}

impl<T: ?Sized> Registry<T> {
	/// Creates a registry that discovers `"registry"` modules, accepts every
	/// value, and silently overwrites duplicates.
	pub fn new(name: &'static str) -> Self {
		Self {
			name,
			look_into: "registry",
			validate: accept_all::<T>,
			prepare: keep::<T>,
			prepare_name: None,
			post_register: None,
			duplicates: DuplicatePolicy::default(),
			store: RwLock::new(OrderedMap::new()),
		}
	}

	/// Sets the discovery module name searched by [`autodiscover`](Self::autodiscover).
	pub fn with_look_into(mut self, module: &'static str) -> Self {
		self.look_into = module;
		self
	}

	/// Sets the validation predicate consulted before every registration.
	pub fn with_validator(mut self, validate: fn(&T) -> bool) -> Self {
		self.validate = validate;
		self
	}

	/// Sets a transform applied to a value after validation, before it is
	/// stored. Lookups return the transformed value; the handle returned by
	/// a `register` call is still the untransformed one.
	pub fn with_prepare(mut self, prepare: fn(Arc<T>) -> Arc<T>) -> Self {
		self.prepare = prepare;
		self
	}

	/// Sets a hook that computes the registration key. It receives the value
	/// and the candidate name (the explicit name, or the derived one if any)
	/// and fully controls the final key; returning `None` fails the
	/// registration with [`RegistryError::NameResolution`].
	pub fn with_prepare_name(
		mut self,
		prepare_name: fn(&T, Option<&str>) -> Option<String>,
	) -> Self {
		self.prepare_name = Some(prepare_name);
		self
	}

	/// Sets a hook that runs after a value has been stored, with the original
	/// value and its final key. An error propagates to the `register` caller;
	/// the entry stays registered.
	pub fn with_post_register(
		mut self,
		post_register: fn(&Arc<T>, &str) -> Result<(), RegistryError>,
	) -> Self {
		self.post_register = Some(post_register);
		self
	}

	/// Sets the duplicate-key policy.
	pub fn with_duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
		self.duplicates = policy;
		self
	}

	/// This registry's name (its key inside a meta registry).
	#[inline]
	pub fn name(&self) -> &'static str {
		self.name
	}

	/// The discovery module name this registry searches for.
	#[inline]
	pub fn look_into(&self) -> &'static str {
		self.look_into
	}

	/// Registers a value under its derived name.
	///
	/// The validator runs first; a rejected value leaves the registry
	/// unchanged. A value whose [`entry_name`](RegistryEntry::entry_name) is
	/// `None` fails with [`RegistryError::NameResolution`] unless a
	/// prepare-name hook supplies a key. On success the returned handle is
	/// the value exactly as registered.
	pub fn register(&self, value: impl Into<Arc<T>>) -> Result<Arc<T>, RegistryError>
	where
		T: RegistryEntry,
	{
		let value = value.into();
		self.check(&value)?;
		let candidate = value.entry_name().map(str::to_owned);
		let name = self.resolve_name(&value, candidate)?;
		self.insert(name, value)
	}

	/// Registers a value under an explicit name, for values with no
	/// derivable name of their own.
	pub fn register_as(
		&self,
		name: impl Into<String>,
		value: impl Into<Arc<T>>,
	) -> Result<Arc<T>, RegistryError> {
		let value = value.into();
		self.check(&value)?;
		let name = self.resolve_name(&value, Some(name.into()))?;
		self.insert(name, value)
	}

	/// Runs discovery for each package in `apps`, in input order.
	///
	/// For every package the discovery modules named [`look_into`](Self::look_into)
	/// are run; a package without one is silently skipped. Each module runs at
	/// most once per process unless `force_reload` re-triggers it. An error
	/// from a module body propagates unmodified; registrations it made before
	/// failing are kept.
	pub fn autodiscover(&self, apps: &[&str], force_reload: bool) -> Result<(), RegistryError> {
		for app in apps {
			discovery::load(app, self.look_into, force_reload)?;
		}
		Ok(())
	}

	/// Looks up a value by name.
	pub fn get(&self, name: &str) -> Option<Arc<T>> {
		self.store.read().get(name).cloned()
	}

	/// Returns true if `name` is registered.
	pub fn contains(&self, name: &str) -> bool {
		self.store.read().contains_key(name)
	}

	/// Number of registered values.
	pub fn len(&self) -> usize {
		self.store.read().len()
	}

	/// Returns true if nothing is registered.
	pub fn is_empty(&self) -> bool {
		self.store.read().is_empty()
	}

	/// Registered names, in registration order.
	pub fn keys(&self) -> Vec<String> {
		self.store.read().keys().map(str::to_owned).collect()
	}

	/// Registered values, in registration order.
	pub fn values(&self) -> Vec<Arc<T>> {
		self.store.read().values().cloned().collect()
	}

	/// `(name, value)` snapshot in registration order. Registrations after
	/// this call are not reflected.
	pub fn entries(&self) -> Vec<(String, Arc<T>)> {
		self.store
			.read()
			.iter()
			.map(|(k, v)| (k.to_owned(), v.clone()))
			.collect()
	}

	/// Removes every registration.
	pub fn clear(&self) {
		self.store.write().clear();
	}

	fn check(&self, value: &Arc<T>) -> Result<(), RegistryError> {
		if (self.validate)(value.as_ref()) {
			Ok(())
		} else {
			Err(RegistryError::Validation {
				registry: self.name,
				type_name: any::type_name::<T>(),
			})
		}
	}

	fn resolve_name(
		&self,
		value: &Arc<T>,
		candidate: Option<String>,
	) -> Result<String, RegistryError> {
		let resolved = match self.prepare_name {
			Some(prepare_name) => prepare_name(value.as_ref(), candidate.as_deref()),
			None => candidate,
		};
		resolved.ok_or(RegistryError::NameResolution {
			type_name: any::type_name::<T>(),
		})
	}

	fn insert(&self, name: String, value: Arc<T>) -> Result<Arc<T>, RegistryError> {
		let stored = (self.prepare)(value.clone());
		let mut store = self.store.write();
		if store.contains_key(&name) {
			match self.duplicates {
				DuplicatePolicy::LastWins => {
					tracing::debug!(registry = self.name, name = %name, "overwriting existing entry");
					store.insert(name.clone(), stored);
				}
				DuplicatePolicy::FirstWins => {
					tracing::debug!(registry = self.name, name = %name, "keeping existing entry");
				}
				DuplicatePolicy::Reject => {
					return Err(RegistryError::Duplicate {
						registry: self.name,
						name,
					});
				}
			}
		} else {
			tracing::trace!(registry = self.name, name = %name, "registered");
			store.insert(name.clone(), stored);
		}
		// Hooks run outside the store lock.
		drop(store);
		if let Some(post_register) = self.post_register {
			post_register(&value, &name)?;
		}
		Ok(value)
	}
}

impl<T: ?Sized> core::fmt::Debug for Registry<T> {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.debug_struct("Registry")
			.field("name", &self.name)
			.field("look_into", &self.look_into)
			.field("len", &self.len())
			.finish()
	}
}
