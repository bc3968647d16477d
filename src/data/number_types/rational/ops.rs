//! # Arithmetic and conversions
//!
//! Addition with other rationals and with plain integers, in both orders and for all reference
//! combinations. Every result is reduced again.
mod field {
    mod add {
        use std::iter::Sum;
        use std::ops::{Add, AddAssign};

        use num_bigint::BigInt;
        use num_traits::Zero;

        use crate::data::number_types::rational::Rational;

        impl Rational {
            fn add_rational(&self, rhs: &Self) -> Self {
                // a / b + c / d = (a * d + c * b) / (b * d)
                let numerator = &self.numerator * &rhs.denominator + &rhs.numerator * &self.denominator;
                let denominator = &self.denominator * &rhs.denominator;

                Self::reduce(numerator, denominator)
            }

            fn add_integer(&self, rhs: &BigInt) -> Self {
                // n / d + k = (n + k * d) / d
                let numerator = &self.numerator + rhs * &self.denominator;

                Self::reduce(numerator, self.denominator.clone())
            }
        }

        impl Add for Rational {
            type Output = Self;

            fn add(self, rhs: Self) -> Self::Output {
                self.add_rational(&rhs)
            }
        }

        impl Add<&Rational> for Rational {
            type Output = Self;

            fn add(self, rhs: &Self) -> Self::Output {
                self.add_rational(rhs)
            }
        }

        impl Add<Rational> for &Rational {
            type Output = Rational;

            fn add(self, rhs: Rational) -> Self::Output {
                self.add_rational(&rhs)
            }
        }

        impl Add for &Rational {
            type Output = Rational;

            fn add(self, rhs: Self) -> Self::Output {
                self.add_rational(rhs)
            }
        }

        impl Add<i64> for Rational {
            type Output = Self;

            fn add(self, rhs: i64) -> Self::Output {
                self.add_integer(&BigInt::from(rhs))
            }
        }

        impl Add<i64> for &Rational {
            type Output = Rational;

            fn add(self, rhs: i64) -> Self::Output {
                self.add_integer(&BigInt::from(rhs))
            }
        }

        impl Add<Rational> for i64 {
            type Output = Rational;

            fn add(self, rhs: Rational) -> Self::Output {
                rhs.add_integer(&BigInt::from(self))
            }
        }

        impl Add<&Rational> for i64 {
            type Output = Rational;

            fn add(self, rhs: &Rational) -> Self::Output {
                rhs.add_integer(&BigInt::from(self))
            }
        }

        impl Add<&BigInt> for Rational {
            type Output = Self;

            fn add(self, rhs: &BigInt) -> Self::Output {
                self.add_integer(rhs)
            }
        }

        impl Add<&BigInt> for &Rational {
            type Output = Rational;

            fn add(self, rhs: &BigInt) -> Self::Output {
                self.add_integer(rhs)
            }
        }

        impl AddAssign for Rational {
            fn add_assign(&mut self, rhs: Self) {
                *self = self.add_rational(&rhs);
            }
        }

        impl AddAssign<&Rational> for Rational {
            fn add_assign(&mut self, rhs: &Self) {
                *self = self.add_rational(rhs);
            }
        }

        impl AddAssign<i64> for Rational {
            fn add_assign(&mut self, rhs: i64) {
                *self = self.add_integer(&BigInt::from(rhs));
            }
        }

        impl Sum for Rational {
            fn sum<I: Iterator<Item=Self>>(iter: I) -> Self {
                iter.fold(Self::zero(), Add::add)
            }
        }

        impl<'a> Sum<&'a Rational> for Rational {
            fn sum<I: Iterator<Item=&'a Rational>>(iter: I) -> Self {
                iter.fold(Self::zero(), Add::add)
            }
        }
    }

    mod identities {
        use num_bigint::BigInt;
        use num_traits::Zero;

        use crate::data::number_types::rational::Rational;

        impl Zero for Rational {
            fn zero() -> Self {
                Self { numerator: BigInt::zero(), denominator: BigInt::from(1) }
            }

            fn is_zero(&self) -> bool {
                self.numerator.is_zero()
            }
        }
    }
}

mod conversion {
    use num_traits::ToPrimitive;

    use crate::data::number_types::rational::Rational;

    /// Integer conversions truncate towards zero.
    impl ToPrimitive for Rational {
        fn to_i64(&self) -> Option<i64> {
            (&self.numerator / &self.denominator).to_i64()
        }

        fn to_u64(&self) -> Option<u64> {
            (&self.numerator / &self.denominator).to_u64()
        }

        fn to_f64(&self) -> Option<f64> {
            Some(Rational::to_f64(self))
        }
    }
}
