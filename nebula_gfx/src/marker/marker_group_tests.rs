//! Unit tests for MarkerGroup
//!
//! Verifies delegate registration/removal, fan-out of set operations, and
//! metadata propagation onto late-joining delegates.

use std::sync::Arc;

use crate::marker::mock_device::{MarkerCall, MockMarkerDevice};
use crate::marker::{DebugMarkable, MarkerDevice, MarkerGroup, ObjectType};

fn mock_device(markers_supported: bool) -> (Arc<MockMarkerDevice>, Arc<dyn MarkerDevice>) {
    let mock = Arc::new(MockMarkerDevice::new(markers_supported));
    let device: Arc<dyn MarkerDevice> = mock.clone();
    (mock, device)
}

// ============================================================================
// DELEGATE REGISTRATION
// ============================================================================

#[test]
fn test_add_delegate_tracks_handles_in_order() {
    let (_mock, device) = mock_device(true);
    let mut group = MarkerGroup::new(&device, ObjectType::Image);

    group.add_delegate(0x1);
    group.add_delegate(0x2);
    group.add_delegate(0x3);

    assert_eq!(group.delegate_count(), 3);
    assert_eq!(group.workers[0].handle(), Some(0x1));
    assert_eq!(group.workers[1].handle(), Some(0x2));
    assert_eq!(group.workers[2].handle(), Some(0x3));
}

#[test]
#[should_panic(expected = "must not be null")]
fn test_add_delegate_null_handle_panics() {
    let (_mock, device) = mock_device(true);
    let mut group = MarkerGroup::new(&device, ObjectType::Image);

    group.add_delegate(0);
}

#[test]
#[should_panic(expected = "already registered")]
fn test_add_delegate_duplicate_handle_panics() {
    let (_mock, device) = mock_device(true);
    let mut group = MarkerGroup::new(&device, ObjectType::Image);

    group.add_delegate(0x1);
    group.add_delegate(0x1);
}

#[test]
#[should_panic(expected = "marker device was dropped")]
fn test_add_delegate_after_device_dropped_panics() {
    let (mock, device) = mock_device(true);
    let mut group = MarkerGroup::new(&device, ObjectType::Image);

    drop(device);
    drop(mock);

    group.add_delegate(0x1);
}

// ============================================================================
// METADATA PROPAGATION
// ============================================================================

#[test]
fn test_late_delegate_inherits_name_and_tag() {
    let (mock, device) = mock_device(true);
    let mut group = MarkerGroup::new(&device, ObjectType::Image);

    group.add_delegate(0xA);
    group.set_name("foo");
    group.set_tag(1, &[0xAA]);
    mock.clear_calls();

    group.add_delegate(0xB);

    // The new delegate's worker carries the group identity...
    assert_eq!(group.workers[1].name(), "foo");
    assert_eq!(group.workers[1].tag(), (1, &[0xAA][..]));

    // ...and it was pushed to the driver for the new handle only
    assert_eq!(
        mock.calls(),
        vec![
            MarkerCall::Name {
                object_type: ObjectType::Image,
                handle: 0xB,
                name: "foo".to_string(),
            },
            MarkerCall::Tag {
                object_type: ObjectType::Image,
                handle: 0xB,
                tag_id: 1,
                data: vec![0xAA],
            },
        ]
    );
}

#[test]
fn test_late_delegate_without_tag_inherits_name_only() {
    let (mock, device) = mock_device(true);
    let mut group = MarkerGroup::new(&device, ObjectType::Buffer);

    group.add_delegate(0xA);
    group.set_name("untagged");
    mock.clear_calls();

    group.add_delegate(0xB);

    assert_eq!(group.workers[1].name(), "untagged");
    assert_eq!(group.workers[1].tag(), (0, &[][..]));
    assert_eq!(mock.call_count(), 1);
}

#[test]
fn test_late_delegate_with_unset_metadata_issues_no_calls() {
    let (mock, device) = mock_device(true);
    let mut group = MarkerGroup::new(&device, ObjectType::Buffer);

    group.add_delegate(0xA);
    group.add_delegate(0xB);

    // Neither name nor tag was ever assigned: nothing to propagate
    assert_eq!(mock.call_count(), 0);
}

// ============================================================================
// FAN-OUT
// ============================================================================

#[test]
fn test_set_name_fans_out_to_every_delegate() {
    let (mock, device) = mock_device(true);
    let mut group = MarkerGroup::new(&device, ObjectType::Image);

    group.add_delegate(0x1);
    group.add_delegate(0x2);

    group.set_name("shared");

    assert_eq!(
        mock.calls(),
        vec![
            MarkerCall::Name {
                object_type: ObjectType::Image,
                handle: 0x1,
                name: "shared".to_string(),
            },
            MarkerCall::Name {
                object_type: ObjectType::Image,
                handle: 0x2,
                name: "shared".to_string(),
            },
        ]
    );
    assert_eq!(group.name(), "shared");
}

#[test]
fn test_set_tag_fans_out_to_every_delegate() {
    let (mock, device) = mock_device(true);
    let mut group = MarkerGroup::new(&device, ObjectType::Image);

    group.add_delegate(0x1);
    group.add_delegate(0x2);

    group.set_tag(9, &[1, 2]);

    assert_eq!(mock.call_count(), 2);
    assert_eq!(group.tag(), (9, &[1, 2][..]));
    for worker in &group.workers {
        assert_eq!(worker.tag(), (9, &[1, 2][..]));
    }
}

#[test]
fn test_set_name_formatted_fans_out() {
    let (mock, device) = mock_device(true);
    let mut group = MarkerGroup::new(&device, ObjectType::Image);

    group.add_delegate(0x1);
    group.add_delegate(0x2);

    group.set_name_formatted(format_args!("frame {}", 7));

    assert_eq!(group.name(), "frame 7");
    assert_eq!(mock.call_count(), 2);
}

#[test]
fn test_without_extension_support_only_caches() {
    let (mock, device) = mock_device(false);
    let mut group = MarkerGroup::new(&device, ObjectType::Image);

    group.add_delegate(0x1);
    group.add_delegate(0x2);
    group.set_name("invisible");
    group.set_tag(1, &[0xCC]);

    assert_eq!(group.name(), "invisible");
    assert_eq!(mock.call_count(), 0);
}

// ============================================================================
// DELEGATE REMOVAL
// ============================================================================

#[test]
fn test_remove_delegate_removes_exactly_one() {
    let (mock, device) = mock_device(true);
    let mut group = MarkerGroup::new(&device, ObjectType::Image);

    group.add_delegate(0x1);
    group.add_delegate(0x2);
    group.add_delegate(0x3);

    group.remove_delegate(0x2);

    assert_eq!(group.delegate_count(), 2);
    assert_eq!(group.workers[0].handle(), Some(0x1));
    assert_eq!(group.workers[1].handle(), Some(0x3));

    // Subsequent fan-out no longer reaches the removed handle
    mock.clear_calls();
    group.set_name("survivors");
    assert_eq!(
        mock.calls(),
        vec![
            MarkerCall::Name {
                object_type: ObjectType::Image,
                handle: 0x1,
                name: "survivors".to_string(),
            },
            MarkerCall::Name {
                object_type: ObjectType::Image,
                handle: 0x3,
                name: "survivors".to_string(),
            },
        ]
    );
}

#[test]
fn test_removed_handle_can_be_registered_again() {
    let (_mock, device) = mock_device(true);
    let mut group = MarkerGroup::new(&device, ObjectType::Image);

    group.add_delegate(0x1);
    group.remove_delegate(0x1);
    group.add_delegate(0x1);

    assert_eq!(group.delegate_count(), 1);
}

#[test]
#[should_panic(expected = "is not registered")]
fn test_remove_unknown_delegate_panics() {
    let (_mock, device) = mock_device(true);
    let mut group = MarkerGroup::new(&device, ObjectType::Image);

    group.add_delegate(0x1);
    group.remove_delegate(0x2);
}

// ============================================================================
// ACCESSORS
// ============================================================================

#[test]
fn test_empty_group_reports_default_metadata() {
    let (_mock, device) = mock_device(true);
    let group = MarkerGroup::new(&device, ObjectType::Image);

    assert_eq!(group.delegate_count(), 0);
    assert_eq!(group.name(), "");
    assert_eq!(group.tag(), (0, &[][..]));
}
