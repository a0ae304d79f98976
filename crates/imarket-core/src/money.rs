//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Decimal Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In binary floating point:                                              │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  Rounding every intermediate value to cents compounds error:           │
//! │    tax($80.00 @ 9.13%) = $7.304  → stored as $7.30                     │
//! │    then total = $87.30 + ... drift grows with every line               │
//! │                                                                         │
//! │  OUR SOLUTION: Exact base-10 Decimal                                   │
//! │    All arithmetic is exact at full precision                           │
//! │    Rounding to 2 places happens ONLY when a value is displayed         │
//! │    Out-of-range results saturate at Decimal::MAX instead of panicking  │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use imarket_core::money::Money;
//!
//! let price = Money::from_cents(1099); // $10.99
//!
//! let doubled = price * 2;                        // $21.98
//! let total = price + Money::from_cents(500);     // $15.99
//! assert_eq!(total.to_string(), "$15.99");
//! ```

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

use crate::types::TaxRate;

/// Number of fractional digits shown for a currency amount.
pub const DISPLAY_DECIMALS: u32 = 2;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary amount in major currency units (dollars), held as an exact
/// decimal.
///
/// ## Design Decisions
/// - **Decimal, not f64**: the feed sends `9.99`; it stays exactly `9.99`
/// - **Full precision**: derived values such as `7.304` are kept as-is;
///   [`Money::rounded`] and `Display` are the only places rounding occurs
/// - **Serde**: deserializes from a JSON number or string, serializes as a
///   string so no precision is lost on the way out
///
/// ## Where Money is Used
/// ```text
/// Product.price ──┬──► CartLine.unit_price ──► line discounted price
///                 │
///                 └──► Displayed as "$10.99"
///
/// subtotal ──► tax (9.13%) ──► grand total
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(#[ts(type = "string")] Decimal);

impl Money {
    /// Creates a Money value from an exact decimal amount of dollars.
    #[inline]
    pub const fn new(amount: Decimal) -> Self {
        Money(amount)
    }

    /// Creates a Money value from cents.
    ///
    /// ## Example
    /// ```rust
    /// use imarket_core::money::Money;
    ///
    /// let price = Money::from_cents(1099);
    /// assert_eq!(price.to_string(), "$10.99");
    /// ```
    #[inline]
    pub fn from_cents(cents: i64) -> Self {
        Money(Decimal::new(cents, 2))
    }

    /// Returns the exact, unrounded amount.
    #[inline]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(Decimal::ZERO)
    }

    /// Checks if the value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// Rounds to display precision (2 places), half away from zero.
    ///
    /// ## Example
    /// ```rust
    /// use imarket_core::money::Money;
    /// use rust_decimal::Decimal;
    ///
    /// let tax = Money::new(Decimal::new(7304, 3)); // 7.304
    /// assert_eq!(tax.rounded(), Money::from_cents(730));
    ///
    /// let half = Money::new(Decimal::new(1005, 3)); // 1.005
    /// assert_eq!(half.rounded(), Money::from_cents(101));
    /// ```
    pub fn rounded(&self) -> Money {
        let mut value = self
            .0
            .round_dp_with_strategy(DISPLAY_DECIMALS, RoundingStrategy::MidpointAwayFromZero);
        value.rescale(DISPLAY_DECIMALS);
        Money(value)
    }

    /// Calculates tax at the given rate, at full precision.
    ///
    /// ## Example
    /// ```rust
    /// use imarket_core::money::Money;
    /// use imarket_core::types::TaxRate;
    /// use rust_decimal::Decimal;
    ///
    /// let subtotal = Money::from_cents(8000); // $80.00
    /// let tax = subtotal.calculate_tax(TaxRate::from_bps(913));
    ///
    /// // $80.00 × 9.13% = $7.304, kept exactly
    /// assert_eq!(tax.amount(), Decimal::new(7304, 3));
    /// ```
    pub fn calculate_tax(&self, rate: TaxRate) -> Money {
        Money(self.0.saturating_mul(rate.fraction()))
    }

    /// Multiplies money by a quantity.
    #[inline]
    pub fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0.saturating_mul(Decimal::from(qty)))
    }

    /// Returns the portion of this amount taken off by a percentage
    /// discount (`20` means 20%).
    ///
    /// ## Example
    /// ```rust
    /// use imarket_core::money::Money;
    /// use rust_decimal::Decimal;
    ///
    /// let price = Money::from_cents(10000);
    /// assert_eq!(price.percentage_of(Decimal::from(20)), Money::from_cents(2000));
    /// ```
    pub fn percentage_of(&self, percent: Decimal) -> Money {
        Money(self.0.saturating_mul(percent / Decimal::ONE_HUNDRED))
    }

    /// Applies a percentage discount and returns the discounted amount.
    ///
    /// ## Example
    /// ```rust
    /// use imarket_core::money::Money;
    /// use rust_decimal::Decimal;
    ///
    /// let price = Money::from_cents(10000); // $100.00
    /// let discounted = price.apply_percentage_discount(Decimal::from(20));
    /// assert_eq!(discounted, Money::from_cents(8000)); // $80.00
    /// ```
    pub fn apply_percentage_discount(&self, percent: Decimal) -> Money {
        Money(
            self.0
                .saturating_mul(Decimal::ONE - percent / Decimal::ONE_HUNDRED),
        )
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows the amount rounded to cents, e.g. `$87.30` or `-$5.50`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = self.rounded().0;
        let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
            "-"
        } else {
            ""
        };
        write!(f, "{}${}", sign, rounded.abs())
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Money(amount)
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0.saturating_sub(other.0))
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_sub(other.0);
    }
}

/// Multiplication by integer (for quantity calculations).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        self.multiply_quantity(qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
