//! Registry of registries.
//!
//! A [`MetaRegistry`] coordinates discovery across many registries: phase one
//! runs the `"registries"` discovery modules, which register [`Registry`]
//! handles into the meta; phase two walks every held registry in insertion
//! order and lets each one discover its own contents across the same package
//! list. [`META`] is the process-wide coordinator singleton.

use std::ops::Deref;
use std::sync::{Arc, LazyLock};

use crate::entry::RegistryEntry;
use crate::error::RegistryError;
use crate::registry::Registry;

/// Object-safe surface a [`MetaRegistry`] needs from its values.
///
/// Implemented by every [`Registry`], so any registry handle can be held and
/// cascaded by a meta registry.
pub trait Discover: Send + Sync {
	/// The registry's name; used as its key inside a meta registry.
	fn registry_name(&self) -> &'static str;

	/// The discovery module name this registry searches for.
	fn discovery_module(&self) -> &'static str;

	/// Runs discovery across `apps`. See [`Registry::autodiscover`].
	fn autodiscover(&self, apps: &[&str], force_reload: bool) -> Result<(), RegistryError>;
}

impl<T: ?Sized + Send + Sync> Discover for Registry<T> {
	fn registry_name(&self) -> &'static str {
		self.name()
	}

	fn discovery_module(&self) -> &'static str {
		self.look_into()
	}

	fn autodiscover(&self, apps: &[&str], force_reload: bool) -> Result<(), RegistryError> {
		Registry::autodiscover(self, apps, force_reload)
	}
}

impl RegistryEntry for dyn Discover {
	fn entry_name(&self) -> Option<&str> {
		Some(self.registry_name())
	}
}

/// A registry whose values are themselves registries.
///
/// Values can only be registry handles (`Arc<dyn Discover>`), so no runtime
/// validation is needed. Read-side access goes through
/// `Deref<Target = Registry<dyn Discover>>`.
pub struct MetaRegistry {
	registries: Registry<dyn Discover>,
}

impl MetaRegistry {
	/// Creates a meta registry that discovers `"registries"` modules.
	pub fn new(name: &'static str) -> Self {
		Self {
			registries: Registry::new(name).with_look_into("registries"),
		}
	}

	/// Registers a registry handle under its own name.
	pub fn register<R>(&self, registry: Arc<R>) -> Result<Arc<dyn Discover>, RegistryError>
	where
		R: Discover + 'static,
	{
		let registry: Arc<dyn Discover> = registry;
		self.registries.register(registry)
	}

	/// Registers a registry handle under an explicit name.
	pub fn register_as<R>(
		&self,
		name: impl Into<String>,
		registry: Arc<R>,
	) -> Result<Arc<dyn Discover>, RegistryError>
	where
		R: Discover + 'static,
	{
		let registry: Arc<dyn Discover> = registry;
		self.registries.register_as(name, registry)
	}

	/// Two-phase discovery: populate the meta from `"registries"` modules,
	/// then cascade [`autodiscover`](Registry::autodiscover) over every held
	/// registry, in insertion order, with the same package list.
	pub fn autodiscover(&self, apps: &[&str], force_reload: bool) -> Result<(), RegistryError> {
		self.registries.autodiscover(apps, force_reload)?;
		self.autodiscover_registries(apps, force_reload)
	}

	/// The cascade phase alone: runs discovery on every held registry without
	/// re-running the meta's own discovery modules.
	pub fn autodiscover_registries(
		&self,
		apps: &[&str],
		force_reload: bool,
	) -> Result<(), RegistryError> {
		for (name, registry) in self.registries.entries() {
			tracing::debug!(
				registry = %name,
				module = registry.discovery_module(),
				"cascading autodiscover"
			);
			registry.autodiscover(apps, force_reload)?;
		}
		Ok(())
	}
}

impl Deref for MetaRegistry {
	type Target = Registry<dyn Discover>;

	fn deref(&self) -> &Self::Target {
		&self.registries
	}
}

impl core::fmt::Debug for MetaRegistry {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.debug_struct("MetaRegistry")
			.field("name", &self.registries.name())
			.field("len", &self.registries.len())
			.finish()
	}
}

/// Process-wide coordinator holding every registry that opts in.
pub static META: LazyLock<MetaRegistry> = LazyLock::new(|| MetaRegistry::new("meta"));
