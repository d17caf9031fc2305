//! Discovery semantics: ordering, caching, skipping, error propagation.
//!
//! Every test uses its own package names so the process-wide run cache never
//! couples tests together.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, LazyLock};

use pretty_assertions::assert_eq;
use rollcall_registry::{
	discovery_module, MetaRegistry, Registry, RegistryError,
};

// ---------------------------------------------------------------------------
// Ordering across packages
// ---------------------------------------------------------------------------

static ZOO: LazyLock<Arc<Registry<&'static str>>> =
	LazyLock::new(|| Arc::new(Registry::new("zoo")));

discovery_module!("zoo_app1", "registry", || {
	ZOO.register_as("dog", "woof")?;
	Ok(())
});

discovery_module!("zoo_app2", "registry", || {
	ZOO.register_as("cat", "meow")?;
	Ok(())
});

#[test]
fn packages_discover_in_input_order() {
	ZOO.autodiscover(&["zoo_app1", "zoo_app2"], false).unwrap();
	assert_eq!(ZOO.keys(), ["dog", "cat"]);
	assert_eq!(*ZOO.get("dog").unwrap(), "woof");
}

// ---------------------------------------------------------------------------
// Run-once caching and force_reload
// ---------------------------------------------------------------------------

static IDEM: LazyLock<Arc<Registry<u32>>> =
	LazyLock::new(|| Arc::new(Registry::new("idem")));
static IDEM_RUNS: AtomicUsize = AtomicUsize::new(0);

discovery_module!("idem_app", "registry", || {
	IDEM_RUNS.fetch_add(1, Ordering::SeqCst);
	IDEM.register_as("tick", 1u32)?;
	Ok(())
});

#[test]
fn autodiscover_is_idempotent_without_force_reload() {
	IDEM.autodiscover(&["idem_app"], false).unwrap();
	let snapshot = IDEM.keys();
	IDEM.autodiscover(&["idem_app"], false).unwrap();
	assert_eq!(IDEM_RUNS.load(Ordering::SeqCst), 1);
	assert_eq!(IDEM.keys(), snapshot);
}

static RELOAD: LazyLock<Arc<Registry<u32>>> =
	LazyLock::new(|| Arc::new(Registry::new("reload")));
static RELOAD_RUNS: AtomicUsize = AtomicUsize::new(0);

discovery_module!("reload_app", "registry", || {
	let run = RELOAD_RUNS.fetch_add(1, Ordering::SeqCst) as u32;
	RELOAD.register_as("tick", run)?;
	Ok(())
});

#[test]
fn force_reload_reruns_registration_side_effects() {
	RELOAD.autodiscover(&["reload_app"], true).unwrap();
	RELOAD.autodiscover(&["reload_app"], true).unwrap();
	assert_eq!(RELOAD_RUNS.load(Ordering::SeqCst), 2);
	// Overwrite kept the single key; the value reflects the latest run.
	assert_eq!(RELOAD.keys(), ["tick"]);
	assert_eq!(*RELOAD.get("tick").unwrap(), 1);
}

// ---------------------------------------------------------------------------
// Missing modules are skipped silently
// ---------------------------------------------------------------------------

#[test]
fn missing_discovery_module_is_not_an_error() {
	let lonely: Registry<u32> = Registry::new("lonely");
	lonely.autodiscover(&["package_without_modules"], false).unwrap();
	assert!(lonely.is_empty());
}

static PICKY: LazyLock<Arc<Registry<&'static str>>> =
	LazyLock::new(|| Arc::new(Registry::new("picky").with_look_into("widgets")));

discovery_module!("picky_app", "registry", || {
	PICKY.register_as("wrong", "should not appear")?;
	Ok(())
});

discovery_module!("picky_app", "widgets", || {
	PICKY.register_as("right", "widget")?;
	Ok(())
});

#[test]
fn only_matching_module_names_are_loaded() {
	PICKY.autodiscover(&["picky_app"], false).unwrap();
	assert_eq!(PICKY.keys(), ["right"]);
}

// ---------------------------------------------------------------------------
// Error propagation, no rollback, no caching of failed modules
// ---------------------------------------------------------------------------

static BROKEN: LazyLock<Arc<Registry<u32>>> =
	LazyLock::new(|| Arc::new(Registry::new("broken")));
static BROKEN_RUNS: AtomicUsize = AtomicUsize::new(0);

discovery_module!("broken_app", "registry", || {
	BROKEN_RUNS.fetch_add(1, Ordering::SeqCst);
	BROKEN.register_as("a", 1u32)?;
	BROKEN.register_as("b", 2u32)?;
	Err(RegistryError::discovery("broken_app", "registry", "boom"))
});

#[test]
fn failing_module_propagates_and_keeps_partial_registrations() {
	let err = BROKEN.autodiscover(&["broken_app"], false).unwrap_err();
	assert!(matches!(err, RegistryError::Discovery { .. }));
	assert_eq!(err.to_string(), "discovery module `broken_app::registry` failed: boom");
	assert_eq!(BROKEN.keys(), ["a", "b"]);

	// A failed module is not marked as run; the next call retries it.
	BROKEN.autodiscover(&["broken_app"], false).unwrap_err();
	assert_eq!(BROKEN_RUNS.load(Ordering::SeqCst), 2);
}

// ---------------------------------------------------------------------------
// Meta registry: two-phase discovery
// ---------------------------------------------------------------------------

static ORCH_META: LazyLock<MetaRegistry> = LazyLock::new(|| MetaRegistry::new("orch"));
static ANIMALS: LazyLock<Arc<Registry<&'static str>>> =
	LazyLock::new(|| Arc::new(Registry::new("animals")));
static PLANTS: LazyLock<Arc<Registry<&'static str>>> =
	LazyLock::new(|| Arc::new(Registry::new("plants").with_look_into("flora")));

discovery_module!("orch_app1", "registries", || {
	ORCH_META.register(ANIMALS.clone())?;
	Ok(())
});

discovery_module!("orch_app2", "registries", || {
	ORCH_META.register(PLANTS.clone())?;
	Ok(())
});

discovery_module!("orch_app1", "registry", || {
	ANIMALS.register_as("dog", "woof")?;
	Ok(())
});

discovery_module!("orch_app2", "registry", || {
	ANIMALS.register_as("cat", "meow")?;
	Ok(())
});

discovery_module!("orch_app1", "flora", || {
	PLANTS.register_as("fern", "green")?;
	Ok(())
});

#[test]
fn meta_autodiscover_populates_then_cascades() {
	ORCH_META.autodiscover(&["orch_app1", "orch_app2"], false).unwrap();

	// Phase 1: registries collected in package order.
	assert_eq!(ORCH_META.keys(), ["animals", "plants"]);

	// Phase 2: every held registry discovered its own modules across the
	// same package list, each under its own look_into name.
	assert_eq!(ANIMALS.keys(), ["dog", "cat"]);
	assert_eq!(PLANTS.keys(), ["fern"]);
}
