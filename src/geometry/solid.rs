use crate::error::{LookupError, Result};

use super::{solved_state_colors, Face, FaceColor};

/// The complete face graph of a generated puzzle.
///
/// Construction is the only place geometry is written. Afterwards the only
/// mutation is per-face color, which needs `&mut self`; sharing one instance
/// across threads requires the caller's own synchronization.
#[derive(Debug, Clone, PartialEq)]
pub struct SolidGeometry {
    faces: Vec<Face>,
    radius: f64,
    scale: f64,
}

impl SolidGeometry {
    /// Assembles a geometry from already-built faces.
    #[must_use]
    pub fn from_parts(faces: Vec<Face>, radius: f64, scale: f64) -> Self {
        Self {
            faces,
            radius,
            scale,
        }
    }

    /// All faces in id order.
    #[must_use]
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    pub(crate) fn faces_mut(&mut self) -> &mut [Face] {
        &mut self.faces
    }

    /// Number of faces.
    #[must_use]
    pub fn len(&self) -> usize {
        self.faces.len()
    }

    /// Returns `true` if the geometry holds no faces.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// Distance of the major-face centers from the origin, scale applied.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Overall scale factor.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    fn index_of(&self, id: usize) -> Result<usize> {
        if self.faces.get(id).is_some_and(|f| f.id == id) {
            return Ok(id);
        }
        self.faces
            .iter()
            .position(|f| f.id == id)
            .ok_or_else(|| LookupError::FaceNotFound(id).into())
    }

    /// Returns the face with the given id.
    ///
    /// # Errors
    ///
    /// Returns an error if no face has that id.
    pub fn face(&self, id: usize) -> Result<&Face> {
        let idx = self.index_of(id)?;
        Ok(&self.faces[idx])
    }

    /// Returns the face with the given id, mutably.
    ///
    /// # Errors
    ///
    /// Returns an error if no face has that id.
    pub fn face_mut(&mut self, id: usize) -> Result<&mut Face> {
        let idx = self.index_of(id)?;
        Ok(&mut self.faces[idx])
    }

    /// Ids recorded as neighbors of `id`.
    ///
    /// # Errors
    ///
    /// Returns an error if no face has that id.
    pub fn neighbors_of(&self, id: usize) -> Result<&[usize]> {
        Ok(&self.face(id)?.neighbors)
    }

    /// Iterates over the cells belonging to major face `major`.
    pub fn faces_of_major(&self, major: usize) -> impl Iterator<Item = &Face> {
        self.faces.iter().filter(move |f| f.major_face == major)
    }

    /// Sets the color of one face.
    ///
    /// # Errors
    ///
    /// Returns an error if no face has that id.
    pub fn paint(&mut self, id: usize, color: FaceColor) -> Result<()> {
        self.face_mut(id)?.color = color;
        Ok(())
    }

    /// Colors every cell with its major face's solved-state color.
    pub fn apply_solved_colors(&mut self) {
        let palette = solved_state_colors();
        for face in &mut self.faces {
            face.color = face.solved_color(&palette);
        }
    }
}
