/// Fixed-width unsigned integer that can be split bit by bit.
///
/// Only unsigned primitives implement this trait, so keys are never negative and every shift
/// used for bit extraction is a logical shift.
pub trait RadixKey: Copy + Ord + 'static {
    /// Number of bits in the representation.
    const BITS: u32;

    /// Returns bit `index` (0 = least significant) of the key.
    fn bit(&self, index: u32) -> bool;

    /// Index of the highest set bit, `None` for zero.
    fn highest_set_bit(&self) -> Option<u32>;
}

impl RadixKey for u8 {
    const BITS: u32 = u8::BITS;

    #[inline(always)]
    fn bit(&self, index: u32) -> bool {
        (*self >> index) & 1 == 1
    }

    #[inline(always)]
    fn highest_set_bit(&self) -> Option<u32> {
        self.checked_ilog2()
    }
}

impl RadixKey for u16 {
    const BITS: u32 = u16::BITS;

    #[inline(always)]
    fn bit(&self, index: u32) -> bool {
        (*self >> index) & 1 == 1
    }

    #[inline(always)]
    fn highest_set_bit(&self) -> Option<u32> {
        self.checked_ilog2()
    }
}

impl RadixKey for u32 {
    const BITS: u32 = u32::BITS;

    #[inline(always)]
    fn bit(&self, index: u32) -> bool {
        (*self >> index) & 1 == 1
    }

    #[inline(always)]
    fn highest_set_bit(&self) -> Option<u32> {
        self.checked_ilog2()
    }
}

impl RadixKey for u64 {
    const BITS: u32 = u64::BITS;

    #[inline(always)]
    fn bit(&self, index: u32) -> bool {
        (*self >> index) & 1 == 1
    }

    #[inline(always)]
    fn highest_set_bit(&self) -> Option<u32> {
        self.checked_ilog2()
    }
}

impl RadixKey for u128 {
    const BITS: u32 = u128::BITS;

    #[inline(always)]
    fn bit(&self, index: u32) -> bool {
        (*self >> index) & 1 == 1
    }

    #[inline(always)]
    fn highest_set_bit(&self) -> Option<u32> {
        self.checked_ilog2()
    }
}

impl RadixKey for usize {
    const BITS: u32 = usize::BITS;

    #[inline(always)]
    fn bit(&self, index: u32) -> bool {
        (*self >> index) & 1 == 1
    }

    #[inline(always)]
    fn highest_set_bit(&self) -> Option<u32> {
        self.checked_ilog2()
    }
}
