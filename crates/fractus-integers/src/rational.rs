//! Exact rational numbers.
//!
//! A [`Rational`] is always stored in lowest terms with a strictly positive
//! denominator, so structural equality is value equality. Every operation
//! returns a fresh value; nothing mutates in place.

use dashu::base::UnsignedAbs;
use dashu::rational::RBig;
use num_traits::{One, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul, Neg, Sub};
use std::str::FromStr;

use crate::{Integer, RationalError};

/// An exact fraction `numerator / denominator`.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Rational {
    numerator: Integer,
    denominator: Integer,
}

impl Rational {
    /// Creates a new rational from numerator and denominator, reduced to
    /// lowest terms with the sign carried by the numerator.
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::DivisionByZero`] if the denominator is zero.
    pub fn new(numerator: Integer, denominator: Integer) -> Result<Self, RationalError> {
        if denominator.is_zero() {
            return Err(RationalError::DivisionByZero);
        }
        Ok(Self::reduce(numerator, denominator))
    }

    /// Creates a rational from i64 numerator and denominator.
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::DivisionByZero`] if the denominator is zero.
    pub fn from_i64(numerator: i64, denominator: i64) -> Result<Self, RationalError> {
        Self::new(Integer::new(numerator), Integer::new(denominator))
    }

    /// Creates a rational from an integer (denominator = 1).
    #[must_use]
    pub fn from_integer(n: Integer) -> Self {
        Self {
            numerator: n,
            denominator: Integer::one(),
        }
    }

    // Callers guarantee a non-zero denominator.
    fn reduce(numerator: Integer, denominator: Integer) -> Self {
        let g = numerator.gcd(&denominator);
        let mut numerator = numerator / &g;
        let mut denominator = denominator / &g;
        if denominator.is_negative() {
            numerator = -numerator;
            denominator = -denominator;
        }
        Self {
            numerator,
            denominator,
        }
    }

    /// Returns the numerator.
    #[must_use]
    pub fn numerator(&self) -> &Integer {
        &self.numerator
    }

    /// Returns the denominator, which is always positive.
    #[must_use]
    pub fn denominator(&self) -> &Integer {
        &self.denominator
    }

    /// Returns true if this rational is an integer.
    #[must_use]
    pub fn is_integer(&self) -> bool {
        self.denominator.is_one()
    }

    /// Converts to an integer if the denominator is 1.
    #[must_use]
    pub fn to_integer(&self) -> Option<Integer> {
        if self.is_integer() {
            Some(self.numerator.clone())
        } else {
            None
        }
    }

    /// Returns the integer part, truncating toward zero.
    #[must_use]
    pub fn trunc(&self) -> Integer {
        &self.numerator / &self.denominator
    }

    /// Converts to the nearest `f64`.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        RBig::from_parts(
            self.numerator.as_inner().clone(),
            self.denominator.as_inner().clone().unsigned_abs(),
        )
        .to_f64()
        .value()
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self {
            numerator: self.numerator.abs(),
            denominator: self.denominator.clone(),
        }
    }

    /// Returns the sign: -1, 0, or 1.
    #[must_use]
    pub fn signum(&self) -> i8 {
        self.numerator.signum()
    }

    /// Returns true if negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.numerator.is_negative()
    }

    /// Returns the reciprocal (1/x).
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::DivisionByZero`] if the rational is zero.
    pub fn recip(&self) -> Result<Self, RationalError> {
        Self::new(self.denominator.clone(), self.numerator.clone())
    }

    /// Divides by another rational.
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::DivisionByZero`] if `rhs` is zero.
    pub fn checked_div(&self, rhs: &Self) -> Result<Self, RationalError> {
        if rhs.is_zero() {
            return Err(RationalError::DivisionByZero);
        }
        Ok(Self::reduce(
            &self.numerator * &rhs.denominator,
            &self.denominator * &rhs.numerator,
        ))
    }

    /// Divides by a plain integer.
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::DivisionByZero`] if `rhs` is zero.
    pub fn checked_div_int(&self, rhs: i64) -> Result<Self, RationalError> {
        self.checked_div(&Self::from(rhs))
    }

    /// Computes `self^exp`.
    ///
    /// A negative exponent inverts first, then raises to `|exp|`.
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::DivisionByZero`] for a zero base with a
    /// negative exponent.
    pub fn pow(&self, exp: i32) -> Result<Self, RationalError> {
        if exp == 0 {
            return Ok(Self::one());
        }
        let base = if exp < 0 { self.recip()? } else { self.clone() };
        let exp = exp.unsigned_abs();

        // Powers of coprime integers stay coprime, and the denominator stays positive.
        Ok(Self {
            numerator: base.numerator.pow(exp),
            denominator: base.denominator.pow(exp),
        })
    }

    /// Computes `self^exp` for a rational exponent that must be a whole number.
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::InvalidExponent`] if `exp` is not an integer
    /// or does not fit in an `i32`, and the errors of [`Rational::pow`].
    pub fn pow_rational(&self, exp: &Self) -> Result<Self, RationalError> {
        let exp = exp
            .to_integer()
            .and_then(|n| n.to_i64())
            .and_then(|n| i32::try_from(n).ok())
            .ok_or_else(|| RationalError::InvalidExponent(exp.to_string()))?;
        self.pow(exp)
    }

    fn add_ref(&self, rhs: &Self) -> Self {
        Self::reduce(
            &self.numerator * &rhs.denominator + &rhs.numerator * &self.denominator,
            &self.denominator * &rhs.denominator,
        )
    }

    fn sub_ref(&self, rhs: &Self) -> Self {
        Self::reduce(
            &self.numerator * &rhs.denominator - &rhs.numerator * &self.denominator,
            &self.denominator * &rhs.denominator,
        )
    }

    fn mul_ref(&self, rhs: &Self) -> Self {
        Self::reduce(
            &self.numerator * &rhs.numerator,
            &self.denominator * &rhs.denominator,
        )
    }
}

impl Default for Rational {
    fn default() -> Self {
        Self::zero()
    }
}

impl Zero for Rational {
    fn zero() -> Self {
        Self::from_integer(Integer::zero())
    }

    fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }
}

impl One for Rational {
    fn one() -> Self {
        Self::from_integer(Integer::one())
    }

    fn is_one(&self) -> bool {
        self.numerator.is_one() && self.denominator.is_one()
    }
}

impl Ord for Rational {
    fn cmp(&self, other: &Self) -> Ordering {
        // Both denominators are positive, so cross-multiplying keeps the order.
        (&self.numerator * &other.denominator).cmp(&(&other.numerator * &self.denominator))
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl FromStr for Rational {
    type Err = RationalError;

    /// Parses `"<int>"` or `"<int>/<int>"`, ignoring surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let format_error = || RationalError::Format(s.to_string());
        let parse_int = |token: &str| {
            Integer::from_str_radix(token.trim(), 10).map_err(|_| format_error())
        };

        let tokens: Vec<&str> = s.trim().split('/').collect();
        match tokens.as_slice() {
            [n] => Ok(Self::from_integer(parse_int(n)?)),
            [n, d] => Self::new(parse_int(n)?, parse_int(d)?),
            _ => Err(format_error()),
        }
    }
}

impl fmt::Debug for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rational({}/{})", self.numerator, self.denominator)
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}

// Arithmetic operations
impl Add for Rational {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.add_ref(&rhs)
    }
}

impl Add<&Rational> for Rational {
    type Output = Self;

    fn add(self, rhs: &Rational) -> Self::Output {
        self.add_ref(rhs)
    }
}

impl Add for &Rational {
    type Output = Rational;

    fn add(self, rhs: Self) -> Self::Output {
        self.add_ref(rhs)
    }
}

impl Add<i64> for Rational {
    type Output = Self;

    fn add(self, rhs: i64) -> Self::Output {
        self.add_ref(&Self::from(rhs))
    }
}

impl Add<i64> for &Rational {
    type Output = Rational;

    fn add(self, rhs: i64) -> Self::Output {
        self.add_ref(&Rational::from(rhs))
    }
}

impl Sub for Rational {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self.sub_ref(&rhs)
    }
}

impl Sub<&Rational> for Rational {
    type Output = Self;

    fn sub(self, rhs: &Rational) -> Self::Output {
        self.sub_ref(rhs)
    }
}

impl Sub for &Rational {
    type Output = Rational;

    fn sub(self, rhs: Self) -> Self::Output {
        self.sub_ref(rhs)
    }
}

impl Sub<i64> for Rational {
    type Output = Self;

    fn sub(self, rhs: i64) -> Self::Output {
        self.sub_ref(&Self::from(rhs))
    }
}

impl Sub<i64> for &Rational {
    type Output = Rational;

    fn sub(self, rhs: i64) -> Self::Output {
        self.sub_ref(&Rational::from(rhs))
    }
}

impl Mul for Rational {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self.mul_ref(&rhs)
    }
}

impl Mul<&Rational> for Rational {
    type Output = Self;

    fn mul(self, rhs: &Rational) -> Self::Output {
        self.mul_ref(rhs)
    }
}

impl Mul for &Rational {
    type Output = Rational;

    fn mul(self, rhs: Self) -> Self::Output {
        self.mul_ref(rhs)
    }
}

impl Mul<i64> for Rational {
    type Output = Self;

    fn mul(self, rhs: i64) -> Self::Output {
        self.mul_ref(&Self::from(rhs))
    }
}

impl Mul<i64> for &Rational {
    type Output = Rational;

    fn mul(self, rhs: i64) -> Self::Output {
        self.mul_ref(&Rational::from(rhs))
    }
}

impl Neg for Rational {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            numerator: -self.numerator,
            denominator: self.denominator,
        }
    }
}

impl Neg for &Rational {
    type Output = Rational;

    fn neg(self) -> Self::Output {
        Rational {
            numerator: -&self.numerator,
            denominator: self.denominator.clone(),
        }
    }
}

impl Sum for Rational {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, x| acc.add_ref(&x))
    }
}

impl<'a> Sum<&'a Rational> for Rational {
    fn sum<I: Iterator<Item = &'a Rational>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, x| acc.add_ref(x))
    }
}

impl From<Integer> for Rational {
    fn from(n: Integer) -> Self {
        Self::from_integer(n)
    }
}

impl From<i64> for Rational {
    fn from(n: i64) -> Self {
        Self::from_integer(Integer::new(n))
    }
}

impl From<i32> for Rational {
    fn from(n: i32) -> Self {
        Self::from_integer(Integer::from(n))
    }
}
