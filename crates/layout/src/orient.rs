use glam::DVec3;
use modlayout_geom::Transform;
use modlayout_scene::Group;
use tracing::debug;

/// Yaw applied when the assembly should face the canonical camera.
///
/// The canonical camera looks down -Z at the origin; a half turn brings the
/// side the source assets treat as their front toward it. This is a fixed
/// convention, not camera tracking.
pub const FACE_CAMERA_YAW: f64 = std::f64::consts::PI;

/// Set the group's yaw to [`FACE_CAMERA_YAW`] when `face_camera` is set.
///
/// With the flag off the yaw keeps whatever value the host gave it.
pub fn orient(group: &mut Group, face_camera: bool) {
    if face_camera {
        group.transform.set_yaw(FACE_CAMERA_YAW);
    }
}

/// Move the group horizontally so the union of its modules is centered over
/// the parent origin. Returns the new horizontal translation, or `None` when
/// there is nothing to center.
///
/// The union is measured with the group's rotation and scale applied but no
/// translation, so the box is the world box up to the offset being solved
/// for. Assigning `-center` then lands it on the origin whatever the yaw, and
/// repeated calls settle on the same value. The vertical component is left
/// alone to keep floor contact.
pub fn recenter(group: &mut Group) -> Option<DVec3> {
    let frame = Transform {
        translation: DVec3::ZERO,
        ..group.transform
    }
    .to_affine();
    let center = group.union_bounds_in(&frame)?.center();

    let translation = &mut group.transform.translation;
    translation.x = -center.x;
    translation.z = -center.z;

    debug!(center = ?center, translation = ?*translation, "recentered group");
    Some(DVec3::new(translation.x, 0.0, translation.z))
}

#[cfg(test)]
mod tests {
    use super::*;
    use modlayout_testkit::{assert_close, box_module};

    #[test]
    fn recenter_keeps_vertical_translation() {
        let mut group = Group::new();
        group.transform.translation.y = 0.75;
        group.push(box_module("models/a", DVec3::new(2.0, 1.0, 4.0), DVec3::new(3.0, 0.0, 1.0)));

        recenter(&mut group);
        let world = group.union_bounds_world().unwrap();
        assert_close(world.center().x, 0.0);
        assert_close(world.center().z, 0.0);
        assert_eq!(group.transform.translation.y, 0.75);
    }

    #[test]
    fn recenter_accounts_for_yaw() {
        let mut group = Group::new();
        group.push(box_module("models/a", DVec3::new(2.0, 1.0, 2.0), DVec3::new(4.0, 0.0, -3.0)));
        orient(&mut group, true);
        recenter(&mut group);
        let world = group.union_bounds_world().unwrap();
        assert_close(world.center().x, 0.0);
        assert_close(world.center().z, 0.0);
    }

    #[test]
    fn recenter_centers_the_box_under_an_oblique_yaw() {
        let mut group = Group::new();
        group.transform.set_yaw(std::f64::consts::FRAC_PI_4);
        group.push(box_module("models/a", DVec3::new(2.0, 1.0, 2.0), DVec3::new(-1.0, 0.0, 0.0)));
        group.push(box_module("models/b", DVec3::new(3.0, 1.0, 3.0), DVec3::new(1.0, 0.0, 0.0)));

        recenter(&mut group);
        let world = group.union_bounds_world().unwrap();
        assert_close(world.center().x, 0.0);
        assert_close(world.center().z, 0.0);
    }

    #[test]
    fn recenter_twice_is_stable() {
        let mut group = Group::new();
        group.push(box_module("models/a", DVec3::new(1.0, 1.0, 1.0), DVec3::new(-6.0, 0.0, 2.5)));
        let first = recenter(&mut group);
        let second = recenter(&mut group);
        assert_eq!(first, second);
    }

    #[test]
    fn orient_off_keeps_host_yaw() {
        let mut group = Group::new();
        group.transform.set_yaw(0.3);
        orient(&mut group, false);
        assert_eq!(group.transform.yaw(), 0.3);
        orient(&mut group, true);
        assert_eq!(group.transform.yaw(), FACE_CAMERA_YAW);
    }

    #[test]
    fn empty_group_has_nothing_to_center() {
        let mut group = Group::new();
        assert!(recenter(&mut group).is_none());
        assert_eq!(group.transform.translation, DVec3::ZERO);
    }
}
