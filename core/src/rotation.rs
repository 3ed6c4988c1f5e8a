use crate::config::RotationType;
use crate::utils::F2;

// Improved3D: r = (x + y + z) * 2/3, each axis reflected through r
const R3: f64 = 2.0 / 3.0;

// Plane-preserving rotations keep one plane's axes as the first two
// simplex axes, the remaining axis becomes the main diagonal
const PLANE_SKEW: f64 = -0.211_324_865_405_187;
const PLANE_DIAG: f64 = 0.577_350_269_189_626;

// Coordinate transform applied to 2D input after frequency scaling.
//
// The OpenSimplex2 family samples a skewed lattice and expects its input
// skewed up front; every other sampler takes plain coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transform2D {
    None,
    Skew,
}

impl Transform2D {
    pub fn resolve(skewed_lattice: bool) -> Self {
        if skewed_lattice {
            Transform2D::Skew
        } else {
            Transform2D::None
        }
    }

    #[inline(always)]
    pub fn apply(self, x: f64, y: f64) -> (f64, f64) {
        match self {
            Transform2D::None => (x, y),
            Transform2D::Skew => {
                let t = (x + y) * F2;
                (x + t, y + t)
            }
        }
    }
}

// Coordinate transform applied to 3D input after frequency scaling, to
// hide the axis-aligned structure of cube lattices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transform3D {
    None,
    Improved3D,
    XYPlanes,
    XZPlanes,
}

impl Transform3D {
    // Picks the transform for a configured rotation. Samplers on rotated
    // lattices (`rotated_lattice`) fall back to `Improved3D` when no
    // rotation is configured, their cube lattice is meant to be viewed
    // along its main diagonal.
    pub fn resolve(rotation: RotationType, rotated_lattice: bool) -> Self {
        match rotation {
            RotationType::Improved3D => Transform3D::Improved3D,
            RotationType::XYPlanes => Transform3D::XYPlanes,
            RotationType::XZPlanes => Transform3D::XZPlanes,
            RotationType::None if rotated_lattice => Transform3D::Improved3D,
            RotationType::None => Transform3D::None,
        }
    }

    #[inline(always)]
    pub fn apply(self, x: f64, y: f64, z: f64) -> (f64, f64, f64) {
        match self {
            Transform3D::None => (x, y, z),
            Transform3D::Improved3D => {
                let r = (x + y + z) * R3;
                (r - x, r - y, r - z)
            }
            Transform3D::XYPlanes => {
                let xy = x + y;
                let s2 = xy * PLANE_SKEW;
                let z = z * PLANE_DIAG;
                (x + s2 - z, y + s2 - z, z + xy * PLANE_DIAG)
            }
            Transform3D::XZPlanes => {
                let xz = x + z;
                let s2 = xz * PLANE_SKEW;
                let y = y * PLANE_DIAG;
                (x + s2 - y, y + xz * PLANE_DIAG, z + s2 - y)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn length(v: (f64, f64, f64)) -> f64 {
        (v.0 * v.0 + v.1 * v.1 + v.2 * v.2).sqrt()
    }

    #[test]
    fn rotations_preserve_length() {
        let p = (0.3, -1.7, 2.25);
        for t in [
            Transform3D::Improved3D,
            Transform3D::XYPlanes,
            Transform3D::XZPlanes,
        ] {
            assert!((length(t.apply(p.0, p.1, p.2)) - length(p)).abs() < 1e-9, "{t:?}");
        }
    }

    #[test]
    fn none_is_identity() {
        assert_eq!(Transform3D::None.apply(1.0, 2.0, 3.0), (1.0, 2.0, 3.0));
        assert_eq!(Transform2D::None.apply(1.0, 2.0), (1.0, 2.0));
    }

    #[test]
    fn rotated_lattice_defaults_to_improved() {
        assert_eq!(
            Transform3D::resolve(RotationType::None, true),
            Transform3D::Improved3D
        );
        assert_eq!(
            Transform3D::resolve(RotationType::None, false),
            Transform3D::None
        );
        assert_eq!(
            Transform3D::resolve(RotationType::XZPlanes, true),
            Transform3D::XZPlanes
        );
    }

    #[test]
    fn xy_planes_diagonal_follows_x_plus_y() {
        // the main diagonal component depends on x + y and z only
        let a = Transform3D::XYPlanes.apply(1.0, 0.0, 5.0);
        let b = Transform3D::XYPlanes.apply(0.0, 1.0, 5.0);
        let c = Transform3D::XYPlanes.apply(-2.0, 3.0, 5.0);
        let diag = |v: (f64, f64, f64)| v.0 + v.1 + v.2;
        assert!((diag(a) - diag(b)).abs() < 1e-9);
        assert!((diag(a) - diag(c)).abs() < 1e-9);
    }
}
