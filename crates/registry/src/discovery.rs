//! Link-time component discovery.
//!
//! A component declares one or more discovery modules — named init functions
//! collected through [`inventory`] — instead of relying on import side
//! effects. [`Registry::autodiscover`](crate::Registry::autodiscover) walks a
//! caller-supplied package list and runs every module whose name matches the
//! registry's `look_into` value. Module bodies perform ordinary registrations
//! against module-level registry singletons.
//!
//! Each `(package, module)` pair runs at most once per process; the run cache
//! plays the role a module-import cache plays in dynamic languages. Passing
//! `force_reload` re-runs the init functions and re-triggers their
//! registration side effects.

use std::sync::LazyLock;

use parking_lot::Mutex;
use rustc_hash::FxHashSet;

use crate::error::RegistryError;

/// A discovery module contributed by a component.
///
/// Declare with [`discovery_module!`](crate::discovery_module) or submit
/// directly:
///
/// ```ignore
/// inventory::submit! {
/// 	ModuleDef::new("my_component", "registry", init_registrations)
/// }
/// ```
pub struct ModuleDef {
	/// Package (component) this module belongs to.
	pub package: &'static str,
	/// Module name matched against a registry's `look_into` value.
	pub module: &'static str,
	/// Init function run when the module is discovered. Registrations happen
	/// here, in textual order.
	pub init: fn() -> Result<(), RegistryError>,
}

inventory::collect!(ModuleDef);

impl ModuleDef {
	/// Creates a new discovery module definition.
	pub const fn new(
		package: &'static str,
		module: &'static str,
		init: fn() -> Result<(), RegistryError>,
	) -> Self {
		Self { package, module, init }
	}
}

/// Process-wide set of `(package, module)` pairs that already ran.
static RAN: LazyLock<Mutex<FxHashSet<(&'static str, &'static str)>>> =
	LazyLock::new(|| Mutex::new(FxHashSet::default()));

/// Runs the discovery modules registered for `(package, module)`.
///
/// Absence of a matching module is not an error; the package simply has
/// nothing to register. A failing init propagates its error and is not
/// recorded as run, so a later call retries it. The lock on the run cache is
/// never held while init functions execute.
pub(crate) fn load(
	package: &str,
	module: &str,
	force_reload: bool,
) -> Result<(), RegistryError> {
	let mut matches = Vec::new();
	for def in inventory::iter::<ModuleDef> {
		if def.package == package && def.module == module {
			matches.push(def);
		}
	}

	let Some(first) = matches.first() else {
		tracing::debug!(package, module, "no discovery module, skipping");
		return Ok(());
	};
	let key = (first.package, first.module);

	if !force_reload && RAN.lock().contains(&key) {
		tracing::debug!(package, module, "discovery module already loaded");
		return Ok(());
	}

	tracing::debug!(package, module, count = matches.len(), "running discovery module");
	for def in &matches {
		(def.init)()?;
	}
	RAN.lock().insert(key);
	Ok(())
}
