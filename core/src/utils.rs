use std::fmt;
use num_enum::TryFromPrimitive;

use crate::types::CodecError;

pub fn enum_name_or_hex<T>(raw: T::Primitive) -> String
where
    T: TryFromPrimitive + fmt::Debug,
    T::Primitive: fmt::LowerHex,
{
    match T::try_from_primitive(raw) {
        Ok(variant) => format!("{:?}", variant),
        Err(_) => format!("0x{:x}", raw),
    }
}

/// Unused tail of `buf` beyond its logical length.
#[inline]
pub fn spare_capacity(buf: &Vec<u8>) -> usize {
    buf.capacity() - buf.len()
}

/// Ensure at least `additional` bytes of spare capacity with amortized growth.
/// Capacity never shrinks.
#[inline]
pub fn grow_spare(buf: &mut Vec<u8>, additional: usize) {
    if spare_capacity(buf) < additional {
        buf.reserve(additional);
    }
}

/// Ensure exactly enough spare capacity for `additional` bytes, reporting
/// allocation failure instead of aborting.
pub fn try_grow_spare_exact(buf: &mut Vec<u8>, additional: usize) -> Result<(), CodecError> {
    if spare_capacity(buf) >= additional {
        return Ok(());
    }
    buf.try_reserve_exact(additional)
        .map_err(|_| CodecError::Allocation { requested: additional as u64 })
}

/// Re-allocate `buf` tightly when its slack exceeds `threshold`.
/// Returns true when the buffer was shrunk.
pub fn defragment(buf: &mut Vec<u8>, threshold: usize) -> bool {
    if spare_capacity(buf) > threshold {
        buf.shrink_to_fit();
        true
    } else {
        false
    }
}
