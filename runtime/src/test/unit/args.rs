use crate::args::{ArgValue, KernelArgs};

#[test]
fn scalar_sizes_match_their_kernel_slots() {
    assert_eq!(ArgValue::Int(0).size(), 4);
    assert_eq!(ArgValue::UInt(0).size(), 4);
    assert_eq!(ArgValue::Float(0.0).size(), 4);
    assert_eq!(ArgValue::Long(0).size(), 8);
    assert_eq!(ArgValue::ULong(0).size(), 8);
    assert_eq!(ArgValue::Double(0.0).size(), 8);
}

#[test]
fn conversions_pick_the_matching_variant() {
    assert_eq!(ArgValue::from(-3i32), ArgValue::Int(-3));
    assert_eq!(ArgValue::from(3u32), ArgValue::UInt(3));
    assert_eq!(ArgValue::from(-9i64), ArgValue::Long(-9));
    assert_eq!(ArgValue::from(9u64), ArgValue::ULong(9));
    assert_eq!(ArgValue::from(1.5f32), ArgValue::Float(1.5));
    assert_eq!(ArgValue::from(2.5f64), ArgValue::Double(2.5));
}

#[test]
fn builder_preserves_argument_order() {
    let args = KernelArgs::new().arg(8i64).arg(2.0f32).arg(1i64).arg(16u32);
    assert_eq!(
        args.values(),
        [ArgValue::Long(8), ArgValue::Float(2.0), ArgValue::Long(1), ArgValue::UInt(16)]
    );
}

#[test]
fn push_appends_after_builder_args() {
    let mut args = KernelArgs::new().arg(1i32);
    args.push(2i32);
    assert_eq!(args.len(), 2);
    assert_eq!(args.values()[1], ArgValue::Int(2));
}

#[test]
fn empty_list() {
    let args = KernelArgs::new();
    assert!(args.is_empty());
    assert_eq!(args.len(), 0);
}
