//! Accessor traits the engine consumes: images, ordering images, and an
//! optional progress observer.
//!
//! These decouple the thinning algorithm from any concrete image
//! storage: image I/O, readers, writers, and CLI wiring belong to the
//! host. A host need only wrap its own buffer to implement [`Image`];
//! the engine never allocates or owns image storage itself.

use crate::id::Coord;

/// Read/write access to an n-dimensional binary-ish image.
///
/// `P` is the scalar pixel type; the engine only ever compares it
/// against the configured foreground/background sentinels, so no
/// numeric bound is required.
pub trait Image<P> {
    /// Number of dimensions of the image domain.
    fn ndim(&self) -> usize;

    /// Whether `coord` lies within the image domain.
    fn in_bounds(&self, coord: &Coord) -> bool;

    /// Read the pixel value at `coord`.
    ///
    /// # Panics
    ///
    /// Implementations may panic if `coord` is out of bounds; callers
    /// should check [`in_bounds`](Self::in_bounds) first.
    fn get(&self, coord: &Coord) -> P;

    /// Write the pixel value at `coord`.
    ///
    /// # Panics
    ///
    /// Implementations may panic if `coord` is out of bounds.
    fn set(&mut self, coord: &Coord, value: P);

    /// The lower corner of the axis-aligned domain box (inclusive).
    fn origin(&self) -> Coord;

    /// The upper corner of the axis-aligned domain box (inclusive).
    fn extent(&self) -> Coord;
}

/// Read-only access to the scalar ordering image.
///
/// `K` is the priority key type; it must be at least orderable, since it
/// is fed straight into the hierarchical queue as a priority. The engine
/// reads this only at seed time and never mutates it.
pub trait OrderingImage<K> {
    /// Read the ordering/priority value at `coord`.
    fn get(&self, coord: &Coord) -> K;

    /// The lower corner of this image's domain, for the domain-match
    /// precondition against the input image.
    fn origin(&self) -> Coord;

    /// The upper corner of this image's domain (inclusive).
    fn extent(&self) -> Coord;
}

/// Optional progress observer, notified at most once per fixed batch of
/// processed voxels.
///
/// A no-op implementation is provided for `()` so callers that do not
/// care about progress can pass it without writing an adapter.
pub trait ProgressObserver {
    /// Called with the fraction of seeded candidates processed so far,
    /// in `[0.0, 1.0]`.
    fn on_progress(&mut self, fraction_complete: f64);
}

impl ProgressObserver for () {
    fn on_progress(&mut self, _fraction_complete: f64) {}
}
