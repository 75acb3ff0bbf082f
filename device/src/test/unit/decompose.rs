use crate::decompose::{DEFAULT_LOCAL_SIZE, NARROW_LOCAL_SIZE, decompose, decompose_for};
use crate::enumerator::{StaticEnumerator, StaticPlatform};
use crate::registry::Registry;

#[test]
fn large_problem_keeps_default_local_size() {
    // ceil(100_000 / 128) = 782 groups, plenty for 8 compute units.
    let decomposition = decompose(100_000, Some(8));
    assert_eq!(decomposition.local, DEFAULT_LOCAL_SIZE);
    assert_eq!(decomposition.global, 100_096);
}

#[test]
fn small_problem_shrinks_local_size() {
    // ceil(1000 / 128) = 8 groups < 16 compute units, so shrink to 64.
    let decomposition = decompose(1000, Some(16));
    assert_eq!(decomposition.local, NARROW_LOCAL_SIZE);
    assert_eq!(decomposition.global, 1024);
}

#[test]
fn exact_multiple_is_not_rounded() {
    let decomposition = decompose(1024, None);
    assert_eq!(decomposition.local, DEFAULT_LOCAL_SIZE);
    assert_eq!(decomposition.global, 1024);
}

#[test]
fn failed_capability_query_keeps_default() {
    // Without the unit count the underutilisation check is skipped even
    // though the problem is tiny.
    let decomposition = decompose(10, None);
    assert_eq!(decomposition.local, DEFAULT_LOCAL_SIZE);
    assert_eq!(decomposition.global, DEFAULT_LOCAL_SIZE);
}

#[test]
fn tiny_problem_gets_one_narrow_group() {
    let decomposition = decompose(5, Some(100));
    assert_eq!(decomposition.local, NARROW_LOCAL_SIZE);
    assert_eq!(decomposition.global, NARROW_LOCAL_SIZE);
}

#[test]
fn group_count_equal_to_units_is_not_shrunk() {
    // ceil(256 / 128) = 2 groups for 2 units: no underutilisation.
    let decomposition = decompose(256, Some(2));
    assert_eq!(decomposition.local, DEFAULT_LOCAL_SIZE);
}

#[test]
fn decompose_for_queries_the_device() {
    let enumerator =
        StaticEnumerator::single(StaticPlatform::new("runtime").with_device("small gpu", 16));
    let registry = Registry::discover(enumerator);
    let device = registry.resolve("small gpu").unwrap();

    let decomposition = decompose_for(registry.enumerator(), device, 1000);
    assert_eq!(decomposition.local, NARROW_LOCAL_SIZE);
}

#[test]
fn decompose_for_degrades_when_query_fails() {
    let enumerator =
        StaticEnumerator::single(StaticPlatform::new("runtime").with_unqueryable_device("opaque gpu"));
    let registry = Registry::discover(enumerator);
    let device = registry.resolve("opaque gpu").unwrap();

    let decomposition = decompose_for(registry.enumerator(), device, 1000);
    assert_eq!(decomposition.local, DEFAULT_LOCAL_SIZE);
    assert_eq!(decomposition.global, 1024);
}
