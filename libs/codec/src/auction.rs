//! The Dutch-auction schedule packed into a Fusion order's salt word.
//!
//! One 256-bit scalar carries both a collision-resistant nonce and the
//! auction schedule. Field layout, high bits first:
//!
//! ```text
//! bits 224..256  start_time         32 bits, unix seconds
//! bits 200..224  duration           24 bits, seconds
//! bits 176..200  initial_rate_bump  24 bits, parts per ten million
//! bits   0..176  entropy / fee data, ignored by the canonical view
//! ```
//!
//! The shifts and masks live here and nowhere else; decoders only see
//! the unpacked struct.

use types::errors::DecodeError;
use types::{LivenessWindow, U256, U512};

const START_TIME_SHIFT: usize = 224;
const DURATION_SHIFT: usize = 200;
const RATE_BUMP_SHIFT: usize = 176;

const START_TIME_MASK: u64 = 0xFFFF_FFFF;
const DURATION_MASK: u64 = 0xFF_FFFF;
const RATE_BUMP_MASK: u64 = 0xFF_FFFF;

/// Denominator of the rate bump: parts per ten million, ~0.00001%
/// resolution. A bump above the scale itself is legal and means the
/// premium exceeds 100% of the base amount.
pub const RATE_BUMP_SCALE: u64 = 10_000_000;

/// The auction schedule a salt word encodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuctionSchedule {
    /// Auction start, unix seconds (32-bit field).
    pub start_time: u64,
    /// Auction length in seconds (24-bit field).
    pub duration: u64,
    /// Opening premium over the base taking amount, in parts per ten
    /// million (24-bit field).
    pub initial_rate_bump: u64,
}

impl AuctionSchedule {
    /// Extracts the schedule from a salt word. The low 176 bits are an
    /// unrelated random nonce and are ignored.
    pub fn unpack(salt: U256) -> Self {
        Self {
            start_time: (salt >> START_TIME_SHIFT).low_u64() & START_TIME_MASK,
            duration: (salt >> DURATION_SHIFT).low_u64() & DURATION_MASK,
            initial_rate_bump: (salt >> RATE_BUMP_SHIFT).low_u64() & RATE_BUMP_MASK,
        }
    }

    /// Packs the schedule back into a salt word, filling the low 176
    /// bits from `entropy`. Inverse of [`AuctionSchedule::unpack`] for
    /// in-range fields; out-of-range fields are masked to width.
    pub fn pack(&self, entropy: U256) -> U256 {
        let low_mask = (U256::one() << RATE_BUMP_SHIFT) - U256::one();
        (entropy & low_mask)
            | (U256::from(self.start_time & START_TIME_MASK) << START_TIME_SHIFT)
            | (U256::from(self.duration & DURATION_MASK) << DURATION_SHIFT)
            | (U256::from(self.initial_rate_bump & RATE_BUMP_MASK) << RATE_BUMP_SHIFT)
    }

    /// The liveness window the schedule spans. Summed in 64-bit space, so
    /// a 32-bit start plus a 24-bit duration can never wrap and
    /// `to - from == duration` holds exactly.
    pub fn window(&self) -> LivenessWindow {
        LivenessWindow::new(
            U256::from(self.start_time),
            U256::from(self.start_time + self.duration),
        )
    }

    /// Upper bound of the taker leg:
    /// `taking_amount * (SCALE + initial_rate_bump) / SCALE`, truncating
    /// toward zero. Multiplied in 512-bit space; a quotient past 256 bits
    /// fails with [`DecodeError::ValueOverflow`] rather than saturating.
    pub fn max_taking_amount(&self, taking_amount: U256) -> Result<U256, DecodeError> {
        let premium = U256::from(RATE_BUMP_SCALE + self.initial_rate_bump);
        let wide = taking_amount.full_mul(premium) / U512::from(RATE_BUMP_SCALE);

        let mut buf = [0u8; 64];
        wide.to_big_endian(&mut buf);
        if buf[..32].iter().any(|b| *b != 0) {
            return Err(DecodeError::ValueOverflow {
                context: format!(
                    "taking amount {taking_amount} bumped by {} exceeds 256 bits",
                    self.initial_rate_bump
                ),
            });
        }
        Ok(U256::from_big_endian(&buf[32..]))
    }
}
