use crate::error::Result;

/// Positional collection operations shared by list implementations.
///
/// Index arguments outside the valid range produce
/// [`ListError::IndexOutOfRange`](crate::ListError::IndexOutOfRange).
pub trait List<E> {
    /// Appends `element`. Always succeeds.
    fn add(&mut self, element: E) -> bool;

    /// Inserts `element` at `index`, shifting later elements right.
    /// `index == size()` appends.
    fn add_at(&mut self, index: usize, element: E) -> Result<()>;

    fn get(&self, index: usize) -> Result<&E>;

    /// Removes the first element equal to `element`. Returns whether one was found.
    fn remove(&mut self, element: &E) -> bool
    where
        E: PartialEq;

    fn remove_by_index(&mut self, index: usize) -> Result<E>;

    fn clear(&mut self);

    fn size(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.size() == 0
    }
}
