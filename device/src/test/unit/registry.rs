use crate::enumerator::{StaticEnumerator, StaticPlatform};
use crate::registry::Registry;

fn two_platform_table() -> StaticEnumerator {
    StaticEnumerator::new(vec![
        StaticPlatform::new("NVIDIA CUDA").with_device("NVIDIA GeForce GTX 1650", 14),
        StaticPlatform::new("AMD Accelerated Parallel Processing")
            .with_device("gfx902", 11)
            .with_device("gfx1030", 36),
    ])
}

#[test]
fn empty_table_discovers_nothing() {
    let registry = Registry::discover(StaticEnumerator::default());
    assert!(registry.is_empty());
    assert_eq!(registry.device_count(), 0);
    assert!(registry.resolve("anything").is_none());
}

#[test]
fn resolve_by_substring() {
    let registry = Registry::discover(two_platform_table());
    let device = registry.resolve("GTX").expect("GTX device should resolve");
    assert_eq!(device.name, "NVIDIA GeForce GTX 1650");
}

#[test]
fn resolve_full_name_round_trips() {
    let registry = Registry::discover(two_platform_table());
    for name in ["NVIDIA GeForce GTX 1650", "gfx902", "gfx1030"] {
        let device = registry.resolve(name).expect("full name should resolve");
        assert_eq!(device.name, name);
    }
}

#[test]
fn resolve_is_case_sensitive() {
    let registry = Registry::discover(two_platform_table());
    assert!(registry.resolve("nvidia").is_none());
    assert!(registry.resolve("NVIDIA").is_some());
}

#[test]
fn resolve_miss_is_none() {
    let registry = Registry::discover(two_platform_table());
    assert!(registry.resolve("Intel Iris").is_none());
}

#[test]
fn first_match_in_discovery_order_wins() {
    // Both gfx devices contain "gfx"; the one discovered first must win.
    let registry = Registry::discover(two_platform_table());
    assert_eq!(registry.resolve("gfx").unwrap().name, "gfx902");
}

#[test]
fn platform_order_breaks_ties_before_name_specificity() {
    let enumerator = StaticEnumerator::new(vec![
        StaticPlatform::new("first").with_device("Accelerator Mark II", 4),
        StaticPlatform::new("second").with_device("Mark", 4),
    ]);
    let registry = Registry::discover(enumerator);
    // "Mark" is an exact name for the second device, but the first platform's
    // device already contains the substring.
    assert_eq!(registry.resolve("Mark").unwrap().name, "Accelerator Mark II");
}

#[test]
fn failing_platform_degrades_to_zero_devices() {
    let enumerator = StaticEnumerator::new(vec![
        StaticPlatform::failing("broken runtime"),
        StaticPlatform::new("working runtime").with_device("gfx902", 11),
    ]);
    let registry = Registry::discover(enumerator);
    assert_eq!(registry.device_count(), 1);
    assert_eq!(registry.resolve("gfx902").unwrap().name, "gfx902");
}

#[test]
fn platform_without_devices_is_tolerated() {
    let enumerator = StaticEnumerator::new(vec![
        StaticPlatform::new("empty runtime"),
        StaticPlatform::new("working runtime").with_device("gfx902", 11),
    ]);
    let registry = Registry::discover(enumerator);
    assert_eq!(registry.device_count(), 1);
}

#[test]
fn snapshot_preserves_platform_grouping() {
    let registry = Registry::discover(two_platform_table());
    let platforms: Vec<_> = registry.platforms().collect();
    assert_eq!(platforms.len(), 2);
    assert_eq!(platforms[0].1.len(), 1);
    assert_eq!(platforms[1].1.len(), 2);

    let names: Vec<_> = registry.devices().map(|device| device.name.as_str()).collect();
    assert_eq!(names, ["NVIDIA GeForce GTX 1650", "gfx902", "gfx1030"]);
}
