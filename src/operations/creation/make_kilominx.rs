use tracing::{debug, instrument};

use crate::error::{GeometryError, Result};
use crate::geometry::{Face, Ring, SolidGeometry};
use crate::math::pentagon::{pentagon_vertices, PENTAGON_STEP};
use crate::math::{Point3, Vector3};
use crate::operations::adjacency::InferAdjacency;

use super::anchors::{major_face_anchors, Anchor, ANCHOR_COUNT};
use super::{ModelVariant, SubdivisionParams};

/// Builds the subdivided dodecahedron face graph.
///
/// For each major face, in anchor order, emits the center cell, then the
/// five inner-ring cells, then (on non-corner faces) the five outer-ring
/// cells. Ids follow emission order. Neighbors are inferred once every
/// cell exists.
pub struct MakeKilominx {
    ring_count: u8,
    params: SubdivisionParams,
}

impl MakeKilominx {
    /// Creates a new `MakeKilominx` operation for the given variant.
    #[must_use]
    pub fn new(variant: ModelVariant) -> Self {
        Self {
            ring_count: variant.ring_count(),
            params: SubdivisionParams::default(),
        }
    }

    /// Overrides the number of rings (0, 1 or 2).
    #[must_use]
    pub fn with_ring_count(mut self, ring_count: u8) -> Self {
        self.ring_count = ring_count;
        self
    }

    /// Sets custom sizes and thresholds.
    #[must_use]
    pub fn with_params(mut self, params: SubdivisionParams) -> Self {
        self.params = params;
        self
    }

    /// Executes the operation, returning the finished geometry.
    ///
    /// # Errors
    ///
    /// Returns an error if the ring count exceeds 2, a length is not
    /// strictly positive, or more than twelve corner faces are requested.
    #[instrument(skip_all, fields(ring_count = self.ring_count))]
    pub fn execute(&self) -> Result<SolidGeometry> {
        self.check_params()?;
        Ok(self.generate())
    }

    fn check_params(&self) -> Result<()> {
        if self.ring_count > 2 {
            return Err(GeometryError::ParameterOutOfRange {
                parameter: "ring_count",
                value: f64::from(self.ring_count),
                min: 0.0,
                max: 2.0,
            }
            .into());
        }

        let p = &self.params;
        let lengths = [
            ("radius", p.radius),
            ("scale", p.scale),
            ("face_radius", p.face_radius),
            ("center_radius", p.center_radius),
            ("inner_offset", p.inner_offset),
            ("inner_radius", p.inner_radius),
            ("outer_offset", p.outer_offset),
            ("outer_radius", p.outer_radius),
        ];
        for (parameter, value) in lengths {
            if !(value.is_finite() && value > 0.0) {
                return Err(GeometryError::ParameterOutOfRange {
                    parameter,
                    value,
                    min: 0.0,
                    max: f64::INFINITY,
                }
                .into());
            }
        }

        if p.corner_faces > ANCHOR_COUNT {
            return Err(GeometryError::Degenerate(format!(
                "{} corner faces requested, only {ANCHOR_COUNT} major faces exist",
                p.corner_faces
            ))
            .into());
        }
        Ok(())
    }

    /// Runs construction without parameter checks.
    pub(crate) fn generate(&self) -> SolidGeometry {
        let p = &self.params;
        let anchors = major_face_anchors(p.radius * p.scale);
        debug!(count = anchors.len(), "generated major-face anchors");

        let mut faces = Vec::new();
        for (major, anchor) in anchors.iter().enumerate() {
            let before = faces.len();
            self.subdivide(major, anchor, &mut faces);
            debug!(major, cells = faces.len() - before, "subdivided major face");
        }

        let mut geometry = SolidGeometry::from_parts(faces, p.radius * p.scale, p.scale);
        let pairs = InferAdjacency::new(p.adjacency).execute(&mut geometry);
        debug!(faces = geometry.len(), pairs, "construction complete");
        geometry
    }

    fn subdivide(&self, major: usize, anchor: &Anchor, faces: &mut Vec<Face>) {
        let p = &self.params;
        let unit = p.face_radius * p.scale;

        if self.ring_count == 0 {
            push_cell(faces, major, Ring::Center, 0, anchor.center, anchor.normal, unit);
            return;
        }

        push_cell(
            faces,
            major,
            Ring::Center,
            0,
            anchor.center,
            anchor.normal,
            unit * p.center_radius,
        );

        for pos in 0..5 {
            let center = ring_center(&anchor.center, pos, unit * p.inner_offset);
            push_cell(
                faces,
                major,
                Ring::Inner,
                pos,
                center,
                anchor.normal,
                unit * p.inner_radius,
            );
        }

        if self.ring_count >= 2 && major >= p.corner_faces {
            for pos in 0..5 {
                let center = ring_center(&anchor.center, pos, unit * p.outer_offset);
                push_cell(
                    faces,
                    major,
                    Ring::Outer,
                    pos,
                    center,
                    anchor.normal,
                    unit * p.outer_radius,
                );
            }
        }
    }
}

/// Center of ring slot `pos`, offset in the model XY plane.
///
/// The offset is not projected into the major face's tangent plane.
fn ring_center(major_center: &Point3, pos: usize, offset: f64) -> Point3 {
    #[allow(clippy::cast_precision_loss)]
    let angle = PENTAGON_STEP * pos as f64;
    major_center + Vector3::new(angle.cos(), angle.sin(), 0.0) * offset
}

fn push_cell(
    faces: &mut Vec<Face>,
    major: usize,
    ring: Ring,
    ring_position: usize,
    center: Point3,
    normal: Vector3,
    radius: f64,
) {
    let vertices = pentagon_vertices(&center, &normal, radius);
    let id = faces.len();
    faces.push(Face::new(id, major, ring, ring_position, center, normal, vertices));
}

impl Default for MakeKilominx {
    fn default() -> Self {
        Self::new(ModelVariant::Full)
    }
}
