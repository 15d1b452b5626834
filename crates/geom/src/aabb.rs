use glam::{DAffine3, DVec3};

/// Axis-aligned bounding box in some coordinate space (local, group or world).
///
/// Boxes are derived data: recompute them after every transform change rather
/// than caching across a mutation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner (x, y, z).
    pub min: DVec3,
    /// Maximum corner (x, y, z).
    pub max: DVec3,
}

impl Aabb {
    /// Create a new AABB ensuring min <= max per axis.
    pub fn new(min: DVec3, max: DVec3) -> Self {
        debug_assert!(min.cmple(max).all(), "invalid AABB: min > max");
        Self { min, max }
    }

    /// Inverted box that absorbs the first point or box it is expanded by.
    pub fn empty() -> Self {
        Self {
            min: DVec3::splat(f64::INFINITY),
            max: DVec3::splat(f64::NEG_INFINITY),
        }
    }

    /// True when nothing has been added to an [`Aabb::empty`] box.
    pub fn is_empty(&self) -> bool {
        self.min.cmpgt(self.max).any()
    }

    /// Box centered at `center` with half extents `half`.
    pub fn from_center_half_extents(center: DVec3, half: DVec3) -> Self {
        Self::new(center - half, center + half)
    }

    /// Smallest box containing all `points`, or `None` when there are none.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = DVec3>,
    {
        let mut bounds = Self::empty();
        for p in points {
            bounds.expand_to_include(p);
        }
        (!bounds.is_empty()).then_some(bounds)
    }

    /// Grow the box to contain `point`.
    pub fn expand_to_include(&mut self, point: DVec3) {
        self.min = self.min.min(point);
        self.max = self.max.max(point);
    }

    /// Union of two boxes. Empty boxes are ignored.
    pub fn union(&self, other: &Self) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Midpoint of the box.
    pub fn center(&self) -> DVec3 {
        (self.min + self.max) * 0.5
    }

    /// Extent along each axis. Zero on collapsed axes.
    pub fn size(&self) -> DVec3 {
        self.max - self.min
    }

    /// The eight corners, min corner first.
    pub fn corners(&self) -> [DVec3; 8] {
        let (a, b) = (self.min, self.max);
        [
            DVec3::new(a.x, a.y, a.z),
            DVec3::new(a.x, a.y, b.z),
            DVec3::new(a.x, b.y, a.z),
            DVec3::new(a.x, b.y, b.z),
            DVec3::new(b.x, a.y, a.z),
            DVec3::new(b.x, a.y, b.z),
            DVec3::new(b.x, b.y, a.z),
            DVec3::new(b.x, b.y, b.z),
        ]
    }

    /// Box bounding this one after `affine` is applied to its corners.
    ///
    /// Looser than re-bounding the original vertices when `affine` rotates.
    pub fn transformed(&self, affine: &DAffine3) -> Self {
        let mut out = Self::empty();
        for corner in self.corners() {
            out.expand_to_include(affine.transform_point3(corner));
        }
        out
    }

    /// Tests intersection with another AABB (touching faces intersect).
    pub fn intersects(&self, other: &Self) -> bool {
        self.min.cmple(other.max).all() && self.max.cmpge(other.min).all()
    }
}
