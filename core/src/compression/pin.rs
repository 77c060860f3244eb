//! compression/pin.rs
//! Scoped pinning of a destination buffer across one native call.
//!
//! `SpareTail` exclusively borrows a `Vec<u8>` and exposes only the region past
//! its logical length to the codec. While the view is alive the vector cannot
//! be moved, grown, or freed, so the pointer handed to the native call stays
//! valid for the whole call. Data before the original length is never exposed.
#![allow(unsafe_code)]

use zstd_safe::WriteBuf;

pub struct SpareTail<'a> {
    buf: &'a mut Vec<u8>,
    start: usize,
}

impl<'a> SpareTail<'a> {
    pub fn new(buf: &'a mut Vec<u8>) -> Self {
        let start = buf.len();
        Self { buf, start }
    }

    /// Logical length of the buffer when the view was taken.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Bytes written through this view so far.
    pub fn written(&self) -> usize {
        self.buf.len() - self.start
    }
}

// SAFETY: `as_mut_ptr` points `start` bytes into the vector's allocation and
// `capacity` covers exactly the remaining allocation. `filled_until(n)` is
// only called by the codec after it initialized `n` bytes from that pointer,
// so `start + n` never exceeds the capacity and every byte below the new
// length is initialized.
unsafe impl WriteBuf for SpareTail<'_> {
    fn as_slice(&self) -> &[u8] {
        &self.buf[self.start..]
    }

    fn capacity(&self) -> usize {
        self.buf.capacity() - self.start
    }

    fn as_mut_ptr(&mut self) -> *mut u8 {
        // `start <= len <= capacity`, so the offset stays in the allocation.
        unsafe { self.buf.as_mut_ptr().add(self.start) }
    }

    unsafe fn filled_until(&mut self, n: usize) {
        debug_assert!(self.start + n <= self.buf.capacity());
        self.buf.set_len(self.start + n);
    }
}
