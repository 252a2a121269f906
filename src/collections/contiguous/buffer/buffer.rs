use std::alloc::{self, Layout};
use std::borrow::{Borrow, BorrowMut};
use std::fmt::{self, Debug, Formatter};
use std::marker::PhantomData;
use std::mem::MaybeUninit;
use std::ops::{Deref, DerefMut};
use std::ptr::NonNull;
use std::slice;

use crate::diag::{self, Severity};
use crate::util::result::ResultExtension;
#[doc(inline)]
pub use crate::util::error::{AllocationFailed, EmptyBuffer, IndexOutOfBounds};

// The capacity is multiplied by this when pushing onto a full Buffer. The
// first growth from zero capacity is a single slot.
const GROWTH_FACTOR: usize = 2;

/// A variable size contiguous collection of owned value slots.
///
/// Unlike [`Vec`], the capacity is exact: it is precisely what was last
/// requested, either directly through [`with_cap`](Buffer::with_cap) /
/// [`resize`](Buffer::resize) or by the doubling growth of
/// [`push`](Buffer::push). Slots below [`len`](Buffer::len) hold values the
/// Buffer owns; the remaining capacity is uninitialized.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the Buffer.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `cap` | `O(1)` |
/// | `push` | `O(1)`*, `O(n)` |
/// | `pop` | `O(1)` |
/// | `at` | `O(1)` |
/// | `set` | `O(1)` |
/// | `resize` | `O(n)` |
///
/// \* Amortized; a push that lands on a full Buffer reallocates.
pub struct Buffer<T> {
    pub(crate) ptr: NonNull<MaybeUninit<T>>,
    pub(crate) cap: usize,
    pub(crate) len: usize,
    pub(crate) _phantom: PhantomData<T>,
}

impl<T> Buffer<T> {
    /// Returns the number of occupied slots.
    ///
    /// # Examples
    /// ```
    /// # use linear_collections::collections::contiguous::Buffer;
    /// let buf = Buffer::from_iter(1_u8..=3);
    /// assert_eq!(buf.len(), 3);
    /// ```
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns the number of allocated slots. Guaranteed to be exactly the
    /// value most recently requested.
    ///
    /// # Examples
    /// ```
    /// # use linear_collections::collections::contiguous::Buffer;
    /// let buf: Buffer<u8> = Buffer::with_cap(5);
    /// assert_eq!(buf.cap(), 5);
    /// ```
    pub const fn cap(&self) -> usize {
        self.cap
    }

    /// Returns true if the Buffer contains no values.
    ///
    /// # Examples
    /// ```
    /// # use linear_collections::collections::contiguous::Buffer;
    /// let mut buf: Buffer<u8> = Buffer::new();
    /// assert!(buf.is_empty());
    /// buf.push(1);
    /// assert!(!buf.is_empty());
    /// ```
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Creates a new Buffer with length and capacity 0. Nothing is allocated
    /// until the capacity changes.
    ///
    /// # Examples
    /// ```
    /// # use linear_collections::collections::contiguous::Buffer;
    /// let buf: Buffer<u8> = Buffer::new();
    /// assert_eq!(buf.len(), 0);
    /// assert_eq!(buf.cap(), 0);
    /// ```
    pub const fn new() -> Buffer<T> {
        Buffer {
            ptr: NonNull::dangling(),
            cap: 0,
            len: 0,
            _phantom: PhantomData,
        }
    }

    /// Creates a new Buffer with capacity exactly equal to the provided value.
    /// Zero is legal and allocates nothing.
    ///
    /// # Panics
    /// Panics if the storage cannot be allocated. See
    /// [`try_with_cap`](Buffer::try_with_cap) for the non-panicking form.
    ///
    /// # Examples
    /// ```
    /// # use linear_collections::collections::contiguous::Buffer;
    /// let mut buf: Buffer<u8> = Buffer::with_cap(5);
    /// assert_eq!(buf.cap(), 5);
    /// buf.extend([1_u8, 2, 3, 4, 5]);
    /// assert_eq!(buf.cap(), 5);
    /// ```
    pub fn with_cap(cap: usize) -> Buffer<T> {
        Self::try_with_cap(cap).throw()
    }

    /// Non-panicking form of [`with_cap`](Buffer::with_cap).
    pub fn try_with_cap(cap: usize) -> Result<Buffer<T>, AllocationFailed> {
        Ok(Buffer {
            ptr: Self::alloc_slots(cap)?,
            cap,
            len: 0,
            _phantom: PhantomData,
        })
    }

    /// Pushes the provided value onto the end of the Buffer, doubling the
    /// capacity first if it is exhausted (a zero-capacity Buffer grows to a
    /// single slot).
    ///
    /// # Panics
    /// Panics if growth is needed and the reallocation fails. See
    /// [`try_push`](Buffer::try_push) for the non-panicking form.
    ///
    /// # Examples
    /// ```
    /// # use linear_collections::collections::contiguous::Buffer;
    /// let mut buf = Buffer::<u8>::new();
    /// for i in 0..=5 {
    ///     buf.push(i);
    /// }
    /// assert_eq!(&*buf, &[0, 1, 2, 3, 4, 5]);
    /// ```
    pub fn push(&mut self, value: T) {
        if self.len == self.cap {
            self.grow().throw();
        }
        // SAFETY: The capacity has just been adjusted to hold the new value.
        unsafe { self.push_unchecked(value) }
    }

    /// Non-panicking form of [`push`](Buffer::push). On growth failure the
    /// Buffer is unchanged and the rejected value is handed back.
    pub fn try_push(&mut self, value: T) -> Result<(), T> {
        if self.len == self.cap && self.grow().is_err() {
            return Err(value);
        }
        // SAFETY: The capacity has just been adjusted to hold the new value.
        unsafe { self.push_unchecked(value) }
        Ok(())
    }

    /// Pushes the provided value, assuming there is capacity for it.
    ///
    /// # Safety
    /// It is up to the caller to ensure that `len < cap`, using methods like
    /// [`resize`](Buffer::resize) or [`with_cap`](Buffer::with_cap) to arrange
    /// that beforehand. Pushing onto a full Buffer this way is undefined
    /// behavior.
    pub unsafe fn push_unchecked(&mut self, value: T) {
        // SAFETY: The caller guarantees that slot len is within the
        // allocation.
        unsafe {
            self.ptr.add(self.len).write(MaybeUninit::new(value));
        }
        self.len += 1;
    }

    /// Pops the last value off the end of the Buffer, transferring ownership
    /// to the caller.
    ///
    /// # Panics
    /// Panics if the Buffer is empty; emptiness can be checked beforehand with
    /// [`is_empty`](Buffer::is_empty), or use [`try_pop`](Buffer::try_pop) for
    /// the non-panicking form.
    ///
    /// # Examples
    /// ```
    /// # use linear_collections::collections::contiguous::Buffer;
    /// let mut buf = Buffer::from_iter(0..5);
    /// for i in (0..5).rev() {
    ///     assert_eq!(buf.pop(), i);
    /// }
    /// ```
    pub fn pop(&mut self) -> T {
        self.try_pop().ok_or(EmptyBuffer).throw()
    }

    /// Non-panicking form of [`pop`](Buffer::pop).
    pub fn try_pop(&mut self) -> Option<T> {
        if self.len == 0 {
            None
        } else {
            // Decrement len before reading.
            self.len -= 1;

            // SAFETY: len has just been decremented, so the slot is both
            // within the allocation and initialized. The heap copy is
            // logically forgotten by the length change, making this a move.
            Some(unsafe { self.ptr.add(self.len).read().assume_init() })
        }
    }

    /// Returns a reference to the value at `index` without removing it.
    ///
    /// # Panics
    /// Panics if `index >= len`. See [`try_at`](Buffer::try_at) for the
    /// non-panicking form.
    ///
    /// # Examples
    /// ```
    /// # use linear_collections::collections::contiguous::Buffer;
    /// let buf = Buffer::from_iter([10_u8, 20, 30]);
    /// assert_eq!(*buf.at(1), 20);
    /// ```
    pub fn at(&self, index: usize) -> &T {
        self.check_index(index).throw();
        // SAFETY: index < len, so the slot is initialized.
        unsafe { self.ptr.add(index).as_ref().assume_init_ref() }
    }

    /// Non-panicking form of [`at`](Buffer::at).
    pub fn try_at(&self, index: usize) -> Option<&T> {
        self.check_index(index).ok()?;
        // SAFETY: index < len, so the slot is initialized.
        Some(unsafe { self.ptr.add(index).as_ref().assume_init_ref() })
    }

    /// Mutable counterpart of [`at`](Buffer::at).
    ///
    /// # Panics
    /// Panics if `index >= len`.
    pub fn at_mut(&mut self, index: usize) -> &mut T {
        self.check_index(index).throw();
        // SAFETY: index < len, so the slot is initialized.
        unsafe { self.ptr.add(index).as_mut().assume_init_mut() }
    }

    /// Non-panicking form of [`at_mut`](Buffer::at_mut).
    pub fn try_at_mut(&mut self, index: usize) -> Option<&mut T> {
        self.check_index(index).ok()?;
        // SAFETY: index < len, so the slot is initialized.
        Some(unsafe { self.ptr.add(index).as_mut().assume_init_mut() })
    }

    /// Overwrites the slot at `index`, returning the previous occupant.
    ///
    /// # Panics
    /// Panics if `index >= len`. See [`try_set`](Buffer::try_set) for the
    /// non-panicking form.
    ///
    /// # Examples
    /// ```
    /// # use linear_collections::collections::contiguous::Buffer;
    /// let mut buf = Buffer::from_iter([1_u8, 2, 3]);
    /// assert_eq!(buf.set(2, 30), 3);
    /// assert_eq!(&*buf, &[1, 2, 30]);
    /// ```
    pub fn set(&mut self, index: usize, value: T) -> T {
        self.try_set(index, value).throw()
    }

    /// Non-panicking form of [`set`](Buffer::set). The offered value is
    /// dropped if the index is out of bounds.
    pub fn try_set(&mut self, index: usize, value: T) -> Result<T, IndexOutOfBounds> {
        self.check_index(index)?;
        // SAFETY: index < len, so the slot is initialized and the replaced
        // value can be assumed init.
        Ok(unsafe {
            std::mem::replace(self.ptr.add(index).as_mut(), MaybeUninit::new(value)).assume_init()
        })
    }

    /// Reallocates the storage to exactly `new_cap` slots, preserving the
    /// values in `[0, min(cap, new_cap))`. On failure the Buffer is unchanged.
    ///
    /// Shrinking below the current length is permitted but loud: the now
    /// out-of-range values are dropped, the length is clamped to `new_cap` and
    /// a [`Warning`](Severity::Warning) is reported, rather than leaving
    /// allocated-but-inaccessible occupants behind.
    ///
    /// Resizing may move the storage; any previously obtained reference into
    /// it is invalidated (the borrow checker enforces this).
    ///
    /// # Examples
    /// ```
    /// # use linear_collections::collections::contiguous::Buffer;
    /// let mut buf = Buffer::from_iter(0_u8..4);
    /// buf.resize(8).unwrap();
    /// assert_eq!(buf.cap(), 8);
    /// assert_eq!(&*buf, &[0, 1, 2, 3]);
    ///
    /// buf.resize(2).unwrap();
    /// assert_eq!((buf.len(), buf.cap()), (2, 2));
    /// assert_eq!(&*buf, &[0, 1]);
    /// ```
    pub fn resize(&mut self, new_cap: usize) -> Result<(), AllocationFailed> {
        if new_cap < self.len {
            diag::report(
                Severity::Warning,
                format_args!(
                    "resize to {new_cap} slots truncates a buffer of length {}",
                    self.len
                ),
            );
            for i in new_cap..self.len {
                // SAFETY: Slots below len are initialized and about to become
                // unreachable.
                unsafe {
                    self.ptr.add(i).as_mut().assume_init_drop();
                }
            }
            self.len = new_cap;
        }

        self.realloc_slots(new_cap)
    }
}

impl<T> Buffer<T> {
    pub(crate) fn slot_layout(cap: usize) -> Result<Layout, AllocationFailed> {
        Layout::array::<MaybeUninit<T>>(cap).map_err(|_| AllocationFailed { cap })
    }

    /// Allocates a fresh block of `cap` slots, or a dangling pointer for
    /// zero-sized layouts. Allocation failure is surfaced rather than passed
    /// to [`alloc::handle_alloc_error`], keeping it recoverable.
    pub(crate) fn alloc_slots(cap: usize) -> Result<NonNull<MaybeUninit<T>>, AllocationFailed> {
        let layout = Self::slot_layout(cap)?;
        if layout.size() == 0 {
            return Ok(NonNull::dangling());
        }
        // SAFETY: Zero-sized layouts have been guarded against.
        NonNull::new(unsafe { alloc::alloc(layout) }.cast()).ok_or(AllocationFailed { cap })
    }

    /// Moves the block to a new capacity without touching `len`. Several
    /// checks are performed first to ensure an allocation is actually
    /// required.
    pub(crate) fn realloc_slots(&mut self, new_cap: usize) -> Result<(), AllocationFailed> {
        let new_ptr = match (self.cap, new_cap) {
            // Zero-sized types never allocate; only the bookkeeping changes.
            (_, _) if size_of::<T>() == 0 => self.ptr,
            (old, new) if old == new => return Ok(()),
            (0, _) => Self::alloc_slots(new_cap)?,
            (_, 0) => {
                // SAFETY: cap > 0 and T is not zero sized, so a real
                // allocation exists to free.
                unsafe { self.dealloc_slots() };
                NonNull::dangling()
            },
            (_, _) => {
                // UNWRAP: This layout was valid when the block was allocated.
                #[allow(clippy::unwrap_used)]
                let old_layout = Self::slot_layout(self.cap).unwrap();
                let new_layout = Self::slot_layout(new_cap)?;

                // SAFETY: The same allocator and layout are used as for the
                // original allocation, and the new size is non-zero and fits
                // in isize.
                let raw = unsafe {
                    alloc::realloc(self.ptr.as_ptr().cast(), old_layout, new_layout.size())
                };

                // A failed realloc leaves the old block (and so the Buffer)
                // untouched.
                NonNull::new(raw.cast()).ok_or(AllocationFailed { cap: new_cap })?
            },
        };

        self.ptr = new_ptr;
        self.cap = new_cap;
        Ok(())
    }

    pub(crate) fn grow(&mut self) -> Result<(), AllocationFailed> {
        let new_cap = match self.cap {
            0 => 1,
            // The multiply can only overflow for zero-sized types, whose
            // capacity doubles without ever allocating; fail recoverably
            // like the rest of the allocation path.
            cap => cap
                .checked_mul(GROWTH_FACTOR)
                .ok_or(AllocationFailed { cap: usize::MAX })?,
        };
        self.resize(new_cap)
    }

    pub(crate) const fn check_index(&self, index: usize) -> Result<(), IndexOutOfBounds> {
        if index < self.len {
            Ok(())
        } else {
            Err(IndexOutOfBounds {
                index,
                len: self.len,
            })
        }
    }

    /// # Safety
    /// Only callable while `cap > 0` and `T` is not zero sized, i.e. while a
    /// real allocation exists. The pointer is dangling afterwards.
    pub(crate) unsafe fn dealloc_slots(&mut self) {
        // UNWRAP: This layout was valid when the block was allocated.
        #[allow(clippy::unwrap_used)]
        let layout = Self::slot_layout(self.cap).unwrap();
        // SAFETY: Passed on to the caller.
        unsafe { alloc::dealloc(self.ptr.as_ptr().cast(), layout) }
    }
}

impl<T> Default for Buffer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Buffer<T> {
    fn drop(&mut self) {
        // Release the values still held, then the block itself.
        for i in 0..self.len {
            // SAFETY: Slots below len are initialized.
            unsafe {
                self.ptr.add(i).as_mut().assume_init_drop();
            }
        }

        if size_of::<T>() != 0 && self.cap != 0 {
            // SAFETY: A real allocation exists and is not referenced again.
            unsafe { self.dealloc_slots() }
        }
    }
}

impl<T> Extend<T> for Buffer<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T> FromIterator<T> for Buffer<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut buf = Buffer::with_cap(iter.size_hint().0);

        for item in iter {
            buf.push(item);
        }

        buf
    }
}

impl<T> Deref for Buffer<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        // SAFETY: Slots below len are initialized, contiguous and no larger
        // than isize::MAX bytes; MaybeUninit<T> has the same layout as T.
        unsafe { slice::from_raw_parts(self.ptr.as_ptr().cast(), self.len) }
    }
}

impl<T> DerefMut for Buffer<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: Slots below len are initialized, contiguous and no larger
        // than isize::MAX bytes; MaybeUninit<T> has the same layout as T.
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr().cast(), self.len) }
    }
}

impl<T> AsRef<[T]> for Buffer<T> {
    fn as_ref(&self) -> &[T] {
        self.deref()
    }
}

impl<T> AsMut<[T]> for Buffer<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.deref_mut()
    }
}

impl<T> Borrow<[T]> for Buffer<T> {
    fn borrow(&self) -> &[T] {
        self.as_ref()
    }
}

impl<T> BorrowMut<[T]> for Buffer<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut()
    }
}

// SAFETY: A Buffer holds a unique pointer to its allocation, so sending it is
// sending its values.
unsafe impl<T: Send> Send for Buffer<T> {}
// SAFETY: The safe API has no interior mutability, so shared references only
// permit shared access to the values.
unsafe impl<T: Sync> Sync for Buffer<T> {}

impl<T: Clone> Clone for Buffer<T> {
    fn clone(&self) -> Self {
        let mut buf = Self::with_cap(self.cap);

        for value in self.iter() {
            buf.push(value.clone());
        }

        buf
    }
}

impl<T: PartialEq> PartialEq for Buffer<T> {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl<T: Eq> Eq for Buffer<T> {}

impl<T: Debug> Debug for Buffer<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Buffer")
            .field("contents", &&**self)
            .field("len", &self.len)
            .field("cap", &self.cap)
            .finish()
    }
}
