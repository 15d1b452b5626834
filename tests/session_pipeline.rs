use std::f64::consts::PI;
use std::path::Path;

use modlayout::{LayoutConfig, LayoutSession};
use modlayout_assets::{catalog_from_file, AssetCatalog, DeferredProvider, XL_TOWER, XXL_TOWER};
use modlayout_core::{AssetKey, Axis, Direction, LayoutMode, LayoutParams};
use modlayout_testkit::{assert_close, RecordingSink};

fn key(raw: &str) -> AssetKey {
    AssetKey::parse(raw).expect("valid key")
}

fn towers(mode: LayoutMode) -> LayoutSession<AssetCatalog> {
    let mut session = LayoutSession::new(AssetCatalog::builtin().expect("builtin assets"), mode);
    session.append(&key(XL_TOWER)).expect("append XL");
    session.append(&key(XXL_TOWER)).expect("append XXL");
    session
}

#[test]
fn default_towers_stand_together_facing_the_camera() {
    let session = towers(LayoutMode::default());
    let group = session.group();

    assert_eq!(group.transform.yaw(), PI);
    let a = group.module_bounds_local(0).unwrap();
    let b = group.module_bounds_local(1).unwrap();
    assert_close(b.min.z, a.max.z);

    let union = group.union_bounds_world().unwrap();
    assert_close(union.center().x, 0.0);
    assert_close(union.center().z, 0.0);
    assert_close(union.min.y, 0.0);
}

#[test]
fn parameter_change_relayouts_the_same_set() {
    let mut session = towers(LayoutMode::default());
    let report = session
        .set_params(LayoutParams::along(Axis::X, -0.01))
        .unwrap()
        .unwrap();
    assert_eq!(report.mode, "packed");

    let group = session.group();
    let a = group.module_bounds_local(0).unwrap();
    let b = group.module_bounds_local(1).unwrap();
    assert_close(a.max.x - b.min.x, 0.01);
    for module in group.modules() {
        assert_eq!(module.transform.translation.z, 0.0);
    }
    // Yaw kept from the earlier pass; this run does not face the camera.
    assert_eq!(group.transform.yaw(), PI);
}

#[test]
fn append_mode_spaces_origins_evenly() {
    let mut session = towers(LayoutMode::append_default());
    session.append(&key(XL_TOWER)).unwrap();

    let group = session.group();
    let first = group.module(0).unwrap().transform.translation;
    for (i, module) in group.modules().enumerate() {
        let expected = first.x + 3.0 * i as f64;
        assert_close(module.transform.translation.x, expected);
        assert_eq!(module.transform.translation.z, first.z);
    }
}

#[test]
fn switching_modes_reruns_the_full_pipeline() {
    let mut session = towers(LayoutMode::append_default());
    let packed = session.set_mode(LayoutMode::default()).unwrap().unwrap();

    let fresh = towers(LayoutMode::default());
    assert_eq!(packed.digest(), fresh.last_report().unwrap().digest());
}

#[test]
fn append_mode_ignores_an_earlier_packed_pass() {
    let mut session = towers(LayoutMode::Packed(LayoutParams::along(Axis::X, 0.0)));
    let appended = session
        .set_mode(LayoutMode::append_default())
        .unwrap()
        .unwrap();

    let fresh = towers(LayoutMode::append_default());
    assert_eq!(appended, *fresh.last_report().unwrap());
    assert_eq!(appended.digest(), fresh.last_report().unwrap().digest());
    assert_eq!(appended.group.translation, [0.0, 0.0, 0.0]);
}

#[test]
fn pending_module_holds_every_transform() {
    let mut provider = DeferredProvider::new(AssetCatalog::builtin().unwrap());
    provider.hold(key(XXL_TOWER));
    let mut session = LayoutSession::new(provider, LayoutMode::default());
    session.append(&key(XL_TOWER)).unwrap();

    let mut sink = RecordingSink::default();
    session.sync(&mut sink);
    let before = sink.last().unwrap().clone();

    assert!(session.append(&key(XXL_TOWER)).unwrap().is_none());
    assert!(session
        .set_params(LayoutParams::along(Axis::X, 0.5))
        .unwrap()
        .is_none());
    session.sync(&mut sink);
    let held = sink.last().unwrap();
    assert_eq!(held.group, before.group);
    assert_eq!(held.modules, before.modules);

    session.provider_mut().release(&key(XXL_TOWER));
    let report = session.resolve_pending().unwrap().unwrap();
    assert_eq!(report.modules.len(), 2);

    session.sync(&mut sink);
    assert_eq!(sink.frames.len(), 3);
    assert_eq!(sink.last().unwrap().modules.len(), 2);
}

#[test]
fn decreasing_direction_places_modules_on_the_negative_side() {
    let params = LayoutParams {
        direction: Direction::Decreasing,
        face_camera: false,
        ..LayoutParams::along(Axis::X, 0.0)
    };
    let session = towers(LayoutMode::Packed(params));
    let group = session.group();
    let a = group.module_bounds_local(0).unwrap();
    let b = group.module_bounds_local(1).unwrap();
    assert_close(b.max.x, a.min.x);
}

#[test]
fn shipped_config_and_manifest_load() {
    let root = Path::new(env!("CARGO_MANIFEST_DIR"));
    let cfg = LayoutConfig::load_from_path(&root.join("config/layout.toml"));
    assert_eq!(cfg, LayoutConfig::default());

    let catalog = catalog_from_file(&root.join("config/assets.json")).expect("manifest loads");
    for key in cfg.module_keys().unwrap() {
        assert!(catalog.get(&key).is_some(), "{key} missing from manifest");
    }

    let mut session = LayoutSession::new(catalog, cfg.layout_mode());
    session.append(&key("models/Wall_Segment")).unwrap();
    let union = session.group().union_bounds_world().unwrap();
    assert_close(union.min.y, 0.0);
    assert_close(union.center().x, 0.0);
    assert_close(union.center().z, 0.0);
}
