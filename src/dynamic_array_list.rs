use log::debug;

use crate::error::{ListError, Result};
use crate::list::List;
use crate::sort;

pub const DEFAULT_CAPACITY: usize = 10;

/// Growable list backed by a boxed slice of slots.
///
/// Live elements occupy `storage[..count]`; every slot past `count` is `None`.
/// The buffer grows by roughly half its size plus one whenever a write finds it
/// full, and never shrinks except through [`clear`](Self::clear), which swaps
/// in a fresh buffer of [`DEFAULT_CAPACITY`] slots.
pub struct DynamicArrayList<E> {
    storage: Box<[Option<E>]>,
    count: usize,
}

impl<E> DynamicArrayList<E> {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: empty_slots(capacity),
            count: 0,
        }
    }

    pub fn add(&mut self, element: E) -> bool {
        self.ensure_capacity();
        self.storage[self.count] = Some(element);
        self.count += 1;
        true
    }

    pub fn add_at(&mut self, index: usize, element: E) -> Result<()> {
        if index > self.count {
            return Err(self.out_of_range(index));
        }
        self.ensure_capacity();
        // Write into the free slot at `count`, then rotate it down to `index`.
        self.storage[self.count] = Some(element);
        self.storage[index..=self.count].rotate_right(1);
        self.count += 1;
        Ok(())
    }

    pub fn get(&self, index: usize) -> Result<&E> {
        if index >= self.count {
            return Err(self.out_of_range(index));
        }
        self.storage[index]
            .as_ref()
            .ok_or_else(|| self.out_of_range(index))
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut E> {
        let err = self.out_of_range(index);
        if index >= self.count {
            return Err(err);
        }
        self.storage[index].as_mut().ok_or(err)
    }

    pub fn remove(&mut self, element: &E) -> bool
    where
        E: PartialEq,
    {
        let found = self.iter().position(|candidate| element == candidate);
        match found {
            Some(index) => {
                self.remove_at(index);
                true
            }
            None => false,
        }
    }

    pub fn remove_by_index(&mut self, index: usize) -> Result<E> {
        let err = self.out_of_range(index);
        if index >= self.count {
            return Err(err);
        }
        self.remove_at(index).ok_or(err)
    }

    pub fn clear(&mut self) {
        debug!(
            "clearing {} elements, resetting capacity {} to {}",
            self.count,
            self.storage.len(),
            DEFAULT_CAPACITY
        );
        self.storage = empty_slots(DEFAULT_CAPACITY);
        self.count = 0;
    }

    pub fn size(&self) -> usize {
        self.count
    }

    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn iter(&self) -> Iter<'_, E> {
        Iter {
            slots: self.storage[..self.count].iter(),
        }
    }

    pub fn quick_sort(&mut self)
    where
        E: Ord,
    {
        // Live slots are all `Some`, so ordering the options orders the elements.
        sort::quick_sort(&mut self.storage[..self.count]);
    }

    /// Takes the element at `index` and closes the gap. Caller checks bounds.
    fn remove_at(&mut self, index: usize) -> Option<E> {
        let removed = self.storage[index].take();
        self.storage[index..self.count].rotate_left(1);
        self.count -= 1;
        removed
    }

    fn ensure_capacity(&mut self) {
        if self.count < self.storage.len() {
            return;
        }
        let old_cap = self.storage.len();
        let new_cap = old_cap + (old_cap >> 1) + 1;
        debug!("growing buffer from {} to {} slots", old_cap, new_cap);
        let mut grown = empty_slots(new_cap);
        for (dst, src) in grown.iter_mut().zip(self.storage.iter_mut()) {
            *dst = src.take();
        }
        self.storage = grown;
    }

    fn out_of_range(&self, index: usize) -> ListError {
        ListError::IndexOutOfRange {
            index,
            size: self.count,
        }
    }
}

fn empty_slots<E>(capacity: usize) -> Box<[Option<E>]> {
    std::iter::repeat_with(|| None).take(capacity).collect()
}

impl<E> List<E> for DynamicArrayList<E> {
    fn add(&mut self, element: E) -> bool {
        DynamicArrayList::add(self, element)
    }

    fn add_at(&mut self, index: usize, element: E) -> Result<()> {
        DynamicArrayList::add_at(self, index, element)
    }

    fn get(&self, index: usize) -> Result<&E> {
        DynamicArrayList::get(self, index)
    }

    fn remove(&mut self, element: &E) -> bool
    where
        E: PartialEq,
    {
        DynamicArrayList::remove(self, element)
    }

    fn remove_by_index(&mut self, index: usize) -> Result<E> {
        DynamicArrayList::remove_by_index(self, index)
    }

    fn clear(&mut self) {
        DynamicArrayList::clear(self)
    }

    fn size(&self) -> usize {
        self.count
    }

    fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// Forward iterator over the live elements of a [`DynamicArrayList`].
pub struct Iter<'a, E> {
    slots: core::slice::Iter<'a, Option<E>>,
}

impl<'a, E> Iterator for Iter<'a, E> {
    type Item = &'a E;

    fn next(&mut self) -> Option<Self::Item> {
        self.slots.next()?.as_ref()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.slots.size_hint()
    }
}

impl<E> ExactSizeIterator for Iter<'_, E> {}

impl<'a, E> IntoIterator for &'a DynamicArrayList<E> {
    type Item = &'a E;
    type IntoIter = Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<E> Default for DynamicArrayList<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Clone> Clone for DynamicArrayList<E> {
    fn clone(&self) -> Self {
        let mut new_list = Self::with_capacity(self.capacity());
        for value in self.iter() {
            new_list.add(value.clone());
        }
        new_list
    }
}

impl<E: core::fmt::Debug> core::fmt::Debug for DynamicArrayList<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<E: PartialEq> PartialEq for DynamicArrayList<E> {
    fn eq(&self, other: &Self) -> bool {
        self.count == other.count && self.iter().eq(other.iter())
    }
}

impl<E: Eq> Eq for DynamicArrayList<E> {}

impl<E> core::ops::Index<usize> for DynamicArrayList<E> {
    type Output = E;
    fn index(&self, index: usize) -> &E {
        self.get(index).unwrap_or_else(|err| panic!("{}", err))
    }
}

impl<E> core::ops::IndexMut<usize> for DynamicArrayList<E> {
    fn index_mut(&mut self, index: usize) -> &mut E {
        self.get_mut(index).unwrap_or_else(|err| panic!("{}", err))
    }
}

impl<E> FromIterator<E> for DynamicArrayList<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<E> Extend<E> for DynamicArrayList<E> {
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        for item in iter {
            self.add(item);
        }
    }
}
