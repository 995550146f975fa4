//! # Pricing Deriver
//!
//! The one pricing rule in the system: shelf price from cost price and the
//! configured profit margin.
//!
//! ## Call Sites
//! ```text
//! Product registration ──┐
//!                        ├──► derive_selling_price(cost, margin)
//! Invoice line entry  ───┘
//! ```
//! Both call sites pass the configured global margin at call time. The
//! margin is a snapshot: it is not stored per item beyond its effect on the
//! computed price, so changing the setting later never rewrites history.

use crate::money::Money;
use crate::types::MarginRate;

/// Derives a selling price from a cost price and a profit margin.
///
/// Pure, total function: `cost × (1 + margin/100)`. There are no error
/// conditions; a negative margin is permitted and simply reduces the price
/// (validating that it makes sense is the caller's responsibility).
///
/// ## Example
/// ```rust
/// use souk_core::money::Money;
/// use souk_core::pricing::derive_selling_price;
/// use souk_core::types::MarginRate;
///
/// let cost = Money::from_piasters(2000);   // E£20.00
/// let margin = MarginRate::from_bps(1500); // 15%
///
/// assert_eq!(derive_selling_price(cost, margin).piasters(), 2300);
/// ```
#[inline]
pub fn derive_selling_price(cost: Money, margin: MarginRate) -> Money {
    cost.with_margin(margin)
}
