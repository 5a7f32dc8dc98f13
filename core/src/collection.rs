//! The capability interface an external list-like object must offer to be
//! adapted with [`List::adapter`](crate::List::adapter).

use std::collections::VecDeque;

use crate::error::{ListError, Restriction, Result, check_index, check_target};
use crate::list::List;

/// Minimal operation set of an indexable collection.
///
/// Reads take `&self`, writes `&mut self`. Implementations report failures
/// through [`ListError`] instead of panicking.
pub trait Collection<T> {
    fn count(&self) -> Result<usize>;

    fn get(&self, index: usize) -> Result<T>;

    fn set(&mut self, index: usize, value: T) -> Result<()>;

    /// Appends `value`, returning its index.
    fn add(&mut self, value: T) -> Result<usize>;

    fn insert(&mut self, index: usize, value: T) -> Result<()>;

    fn remove_at(&mut self, index: usize) -> Result<()>;

    fn contains(&self, value: &T) -> Result<bool>;

    /// Copies every element into `target`, starting at `offset`.
    fn copy_into(&self, target: &mut [T], offset: usize) -> Result<()>;

    fn enumerate(&self) -> Box<dyn Iterator<Item = Result<T>> + '_>;

    fn is_fixed_size(&self) -> bool {
        false
    }

    fn is_read_only(&self) -> bool {
        false
    }

    /// The collection as a [`List`], if it is one.
    fn as_list(&self) -> Option<&List<T>> {
        None
    }
}

impl<T: Clone + PartialEq> Collection<T> for Vec<T> {
    fn count(&self) -> Result<usize> {
        Ok(self.len())
    }

    fn get(&self, index: usize) -> Result<T> {
        self.as_slice()
            .get(index)
            .cloned()
            .ok_or(ListError::OutOfRange {
                index,
                len: self.len(),
            })
    }

    fn set(&mut self, index: usize, value: T) -> Result<()> {
        check_index(index, self.len())?;
        self[index] = value;
        Ok(())
    }

    fn add(&mut self, value: T) -> Result<usize> {
        self.push(value);
        Ok(self.len() - 1)
    }

    fn insert(&mut self, index: usize, value: T) -> Result<()> {
        if index > self.len() {
            return Err(ListError::OutOfRange {
                index,
                len: self.len(),
            });
        }
        Vec::insert(self, index, value);
        Ok(())
    }

    fn remove_at(&mut self, index: usize) -> Result<()> {
        check_index(index, self.len())?;
        self.remove(index);
        Ok(())
    }

    fn contains(&self, value: &T) -> Result<bool> {
        Ok(self.as_slice().contains(value))
    }

    fn copy_into(&self, target: &mut [T], offset: usize) -> Result<()> {
        check_target(target, offset, self.len())?;
        target[offset..offset + self.len()].clone_from_slice(self);
        Ok(())
    }

    fn enumerate(&self) -> Box<dyn Iterator<Item = Result<T>> + '_> {
        Box::new(self.iter().cloned().map(Ok))
    }
}

impl<T: Clone + PartialEq> Collection<T> for VecDeque<T> {
    fn count(&self) -> Result<usize> {
        Ok(self.len())
    }

    fn get(&self, index: usize) -> Result<T> {
        VecDeque::get(self, index)
            .cloned()
            .ok_or(ListError::OutOfRange {
                index,
                len: self.len(),
            })
    }

    fn set(&mut self, index: usize, value: T) -> Result<()> {
        check_index(index, self.len())?;
        self[index] = value;
        Ok(())
    }

    fn add(&mut self, value: T) -> Result<usize> {
        self.push_back(value);
        Ok(self.len() - 1)
    }

    fn insert(&mut self, index: usize, value: T) -> Result<()> {
        if index > self.len() {
            return Err(ListError::OutOfRange {
                index,
                len: self.len(),
            });
        }
        VecDeque::insert(self, index, value);
        Ok(())
    }

    fn remove_at(&mut self, index: usize) -> Result<()> {
        check_index(index, self.len())?;
        self.remove(index);
        Ok(())
    }

    fn contains(&self, value: &T) -> Result<bool> {
        Ok(VecDeque::contains(self, value))
    }

    fn copy_into(&self, target: &mut [T], offset: usize) -> Result<()> {
        check_target(target, offset, self.len())?;
        for (dst, src) in target[offset..].iter_mut().zip(self.iter()) {
            *dst = src.clone();
        }
        Ok(())
    }

    fn enumerate(&self) -> Box<dyn Iterator<Item = Result<T>> + '_> {
        Box::new(self.iter().cloned().map(Ok))
    }
}

/// Boxed slices can be rewritten in place but never resized.
impl<T: Clone + PartialEq> Collection<T> for Box<[T]> {
    fn count(&self) -> Result<usize> {
        Ok(self.len())
    }

    fn get(&self, index: usize) -> Result<T> {
        <[T]>::get(self, index)
            .cloned()
            .ok_or(ListError::OutOfRange {
                index,
                len: self.len(),
            })
    }

    fn set(&mut self, index: usize, value: T) -> Result<()> {
        check_index(index, self.len())?;
        self[index] = value;
        Ok(())
    }

    fn add(&mut self, _value: T) -> Result<usize> {
        Err(ListError::unsupported("add", Restriction::FixedSize))
    }

    fn insert(&mut self, _index: usize, _value: T) -> Result<()> {
        Err(ListError::unsupported("insert", Restriction::FixedSize))
    }

    fn remove_at(&mut self, _index: usize) -> Result<()> {
        Err(ListError::unsupported("remove_at", Restriction::FixedSize))
    }

    fn contains(&self, value: &T) -> Result<bool> {
        Ok(<[T]>::contains(self, value))
    }

    fn copy_into(&self, target: &mut [T], offset: usize) -> Result<()> {
        check_target(target, offset, self.len())?;
        target[offset..offset + self.len()].clone_from_slice(self);
        Ok(())
    }

    fn enumerate(&self) -> Box<dyn Iterator<Item = Result<T>> + '_> {
        Box::new(self.iter().cloned().map(Ok))
    }

    fn is_fixed_size(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_vec_collection() {
        let mut items = vec![1, 2, 3];
        assert_eq!(Collection::add(&mut items, 4), Ok(3));
        Collection::insert(&mut items, 0, 0).unwrap();
        Collection::remove_at(&mut items, 2).unwrap();
        assert_eq!(items, vec![0, 1, 3, 4]);
        assert_eq!(Collection::get(&items, 4), Err(ListError::OutOfRange { index: 4, len: 4 }));
        assert_eq!(Collection::contains(&items, &3), Ok(true));
        assert_eq!(
            items.enumerate().collect::<Result<Vec<_>>>(),
            Ok(vec![0, 1, 3, 4])
        );
    }

    #[test]
    fn test_copy_into_checks_target() {
        let items = VecDeque::from(vec![1, 2]);
        let mut target = [0; 3];
        items.copy_into(&mut target, 1).unwrap();
        assert_eq!(target, [0, 1, 2]);
        assert!(matches!(
            items.copy_into(&mut target, 2),
            Err(ListError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_boxed_slice_is_fixed_size() {
        let mut items: Box<[i32]> = vec![1, 2].into_boxed_slice();
        assert!(items.is_fixed_size());
        assert_eq!(
            Collection::add(&mut items, 3),
            Err(ListError::unsupported("add", Restriction::FixedSize))
        );
        Collection::set(&mut items, 0, 10).unwrap();
        assert_eq!(&*items, &[10, 2]);
    }
}
