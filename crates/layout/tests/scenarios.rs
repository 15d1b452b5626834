//! End-to-end layout scenarios for one and two box modules.

use std::f64::consts::{FRAC_PI_4, FRAC_PI_6, PI};
use std::path::PathBuf;

use glam::DVec3;
use modlayout_core::{Axis, LayoutMode, LayoutParams, FLOOR_HEIGHT};
use modlayout_geom::Transform;
use modlayout_layout::{layout, normalize_all, pack};
use modlayout_scene::{Group, Module};
use modlayout_testkit::{assert_close, assert_json_snapshot, box_module, pivoted_box_geometry};

fn snapshot_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/snapshots")
        .join(name)
}

fn pair() -> Group {
    let mut group = Group::new();
    group.push(box_module("models/xl", DVec3::new(2.0, 1.0, 2.0), DVec3::new(5.0, 5.0, 5.0)));
    group.push(box_module("models/xxl", DVec3::new(3.0, 1.0, 3.0), DVec3::ZERO));
    group
}

#[test]
fn single_module_is_centered_and_floored() {
    let mut group = Group::new();
    group.push(box_module("models/xl", DVec3::new(2.0, 1.0, 2.0), DVec3::new(5.0, 5.0, 5.0)));

    let offsets = normalize_all(&mut group).unwrap();
    assert_eq!(offsets[0].size, DVec3::new(2.0, 1.0, 2.0));

    let world = group.module_bounds_world(0).unwrap();
    assert_close(world.center().x, 0.0);
    assert_close(world.center().z, 0.0);
    assert_close(world.min.y, FLOOR_HEIGHT);
}

#[test]
fn pair_along_x_touches_and_recenters() {
    let mut group = pair();
    let mode = LayoutMode::Packed(LayoutParams::along(Axis::X, 0.0));
    let report = layout(&mut group, &mode).unwrap();

    let a = group.module_bounds_world(0).unwrap();
    let b = group.module_bounds_world(1).unwrap();
    assert_close(b.min.x, a.max.x);

    let union = group.union_bounds_world().unwrap();
    assert_close(union.size().x, 5.0);
    assert_close(union.center().x, 0.0);
    assert_close(union.center().z, 0.0);
    assert_close(union.min.y, 0.0);

    assert_json_snapshot(snapshot_path("scenario_b_pair_along_x.json"), &report).unwrap();
}

#[test]
fn negative_gap_overlaps_by_exactly_the_gap() {
    let mut group = pair();
    layout(&mut group, &LayoutMode::Packed(LayoutParams::along(Axis::X, -0.01))).unwrap();

    let a = group.module_bounds_world(0).unwrap();
    let b = group.module_bounds_world(1).unwrap();
    assert_close(a.max.x - b.min.x, 0.01);
    assert_close(group.union_bounds_world().unwrap().size().x, 4.99);
}

#[test]
fn positive_gap_along_z_opens_a_seam() {
    let mut group = pair();
    layout(&mut group, &LayoutMode::Packed(LayoutParams::along(Axis::Z, 0.5))).unwrap();

    let a = group.module_bounds_local(0).unwrap();
    let b = group.module_bounds_local(1).unwrap();
    assert_close(b.min.z - a.max.z, 0.5);
    for module in group.modules() {
        assert_eq!(module.transform.translation.x, 0.0);
    }
    let union = group.union_bounds_world().unwrap();
    assert_close(union.center().x, 0.0);
    assert_close(union.center().z, 0.0);
}

#[test]
fn face_camera_sets_a_half_turn() {
    let mut group = pair();
    let params = LayoutParams {
        face_camera: true,
        ..LayoutParams::along(Axis::X, 0.0)
    };
    layout(&mut group, &LayoutMode::Packed(params)).unwrap();
    assert_eq!(group.transform.yaw(), PI);

    // Still centered and floored after the turn.
    let union = group.union_bounds_world().unwrap();
    assert_close(union.center().x, 0.0);
    assert_close(union.center().z, 0.0);
    assert_close(union.min.y, 0.0);
    assert_close(union.size().x, 5.0);
}

#[test]
fn face_camera_off_leaves_yaw_alone() {
    let mut group = pair();
    layout(&mut group, &LayoutMode::Packed(LayoutParams::along(Axis::X, 0.0))).unwrap();
    assert_eq!(group.transform.yaw(), 0.0);

    let mut turned = pair();
    turned.transform.set_yaw(0.25);
    layout(&mut turned, &LayoutMode::Packed(LayoutParams::along(Axis::X, 0.0))).unwrap();
    assert_eq!(turned.transform.yaw(), 0.25);
}

#[test]
fn packing_twice_does_not_drift() {
    let mut group = pair();
    normalize_all(&mut group).unwrap();
    let params = LayoutParams {
        face_camera: true,
        ..LayoutParams::along(Axis::X, -0.01)
    };

    pack(&mut group, &params).unwrap();
    let group_first = group.transform;
    let modules_first: Vec<_> = group.modules().map(|m| m.transform).collect();

    let outcome = pack(&mut group, &params).unwrap();
    assert_eq!(group.transform, group_first);
    let modules_second: Vec<_> = group.modules().map(|m| m.transform).collect();
    assert_eq!(modules_first, modules_second);
    assert_eq!(outcome.contacts[0].shift, 0.0);
}

#[test]
fn switching_axis_relayouts_from_current_state() {
    let mut group = pair();
    layout(&mut group, &LayoutMode::Packed(LayoutParams::along(Axis::X, 0.0))).unwrap();
    let along_z = LayoutMode::Packed(LayoutParams::along(Axis::Z, 0.0));
    let z = layout(&mut group, &along_z).unwrap();

    let mut fresh = pair();
    let expected = layout(&mut fresh, &along_z).unwrap();
    assert_eq!(z.digest(), expected.digest());
}

#[test]
fn oblique_host_yaw_still_centers_the_pair() {
    let mut group = pair();
    group.transform.set_yaw(FRAC_PI_4);
    layout(&mut group, &LayoutMode::Packed(LayoutParams::along(Axis::X, 0.0))).unwrap();

    assert_eq!(group.transform.yaw(), FRAC_PI_4);
    let union = group.union_bounds_world().unwrap();
    assert_close(union.center().x, 0.0);
    assert_close(union.center().z, 0.0);
    assert_close(union.min.y, 0.0);
}

#[test]
fn modules_turned_about_their_pivots_are_centered() {
    let mut group = Group::new();
    group.transform.set_yaw(FRAC_PI_4);
    let tall = pivoted_box_geometry(
        "models/tall",
        DVec3::new(2.0, 3.0, 1.0),
        DVec3::new(0.5, 0.0, 0.2),
    );
    let wide = pivoted_box_geometry(
        "models/wide",
        DVec3::new(4.0, 1.0, 2.5),
        DVec3::new(3.0, 0.5, 0.0),
    );
    group.push(Module::new(
        tall,
        Transform::IDENTITY.with_rotation(DVec3::new(0.0, FRAC_PI_6, 0.0)),
    ));
    group.push(Module::new(
        wide,
        Transform::from_translation(DVec3::new(7.0, -2.0, 1.0))
            .with_rotation(DVec3::new(0.0, -FRAC_PI_4, 0.0))
            .with_scale(1.2),
    ));
    layout(&mut group, &LayoutMode::Packed(LayoutParams::along(Axis::Z, 0.25))).unwrap();

    let a = group.module_bounds_local(0).unwrap();
    let b = group.module_bounds_local(1).unwrap();
    assert_close(b.min.z - a.max.z, 0.25);

    let union = group.union_bounds_world().unwrap();
    assert_close(union.center().x, 0.0);
    assert_close(union.center().z, 0.0);
    assert_close(union.min.y, 0.0);
}
