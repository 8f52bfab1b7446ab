use serde::Serialize;

/// Primitive solids the host viewport knows how to tessellate.
///
/// Dimensions are in scene units. Cylinders and cones are Y-aligned and
/// centred on their origin; tori lie in the XY plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Shape {
    /// UV sphere.
    Sphere {
        /// Radius.
        radius: f32,
    },
    /// Ring; a low side count yields a polygonal ring (6 → hexagon).
    Torus {
        /// Distance from the centre to the middle of the tube.
        radius: f32,
        /// Tube radius.
        tube: f32,
        /// Number of segments around the ring.
        sides: u32,
    },
    /// Straight rod.
    Cylinder {
        /// Rod radius.
        radius: f32,
        /// Rod length along Y.
        height: f32,
        /// Radial segments.
        sides: u32,
    },
    /// Cone with its apex at +Y.
    Cone {
        /// Base radius.
        radius: f32,
        /// Height along Y.
        height: f32,
        /// Radial segments (4 → square pyramid).
        sides: u32,
    },
    /// Regular tetrahedron inscribed in a sphere of `radius`.
    Tetrahedron {
        /// Circumscribed radius.
        radius: f32,
    },
}

impl Shape {
    /// Stable numeric tag used in flattened GPU instances.
    #[must_use]
    pub fn kind_index(&self) -> u32 {
        match self {
            Self::Sphere { .. } => 0,
            Self::Torus { .. } => 1,
            Self::Cylinder { .. } => 2,
            Self::Cone { .. } => 3,
            Self::Tetrahedron { .. } => 4,
        }
    }

    /// Shape parameters packed as `[a, b, c, 0]` for GPU upload.
    #[must_use]
    pub fn params(&self) -> [f32; 4] {
        match *self {
            Self::Sphere { radius } | Self::Tetrahedron { radius } => {
                [radius, 0.0, 0.0, 0.0]
            }
            Self::Torus {
                radius,
                tube,
                sides,
            } => [radius, tube, sides as f32, 0.0],
            Self::Cylinder {
                radius,
                height,
                sides,
            }
            | Self::Cone {
                radius,
                height,
                sides,
            } => [radius, height, sides as f32, 0.0],
        }
    }

    /// Radius of a sphere around the local origin that encloses the shape.
    #[must_use]
    pub fn bounding_radius(&self) -> f32 {
        match *self {
            Self::Sphere { radius } | Self::Tetrahedron { radius } => radius,
            Self::Torus { radius, tube, .. } => radius + tube,
            Self::Cylinder { radius, height, .. }
            | Self::Cone { radius, height, .. } => {
                radius.hypot(height * 0.5)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounding_radius_encloses_torus_tube() {
        let ring = Shape::Torus {
            radius: 0.7,
            tube: 0.15,
            sides: 6,
        };
        assert!((ring.bounding_radius() - 0.85).abs() < 1e-6);
    }

    #[test]
    fn params_pack_side_count() {
        let cone = Shape::Cone {
            radius: 0.1,
            height: 0.3,
            sides: 8,
        };
        assert_eq!(cone.params(), [0.1, 0.3, 8.0, 0.0]);
        assert_eq!(cone.kind_index(), 3);
    }
}
