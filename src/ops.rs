// Copyright 2021 CoD Technologies Corp.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Ops implementation.
//!
//! Only the integral operations get operators. Multiplication and division by a real factor
//! need a rounding method, see [`Money::multiply`] and [`Money::divide`].

use crate::money::Money;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

impl Neg for Money {
    type Output = Money;

    #[inline]
    fn neg(mut self) -> Self::Output {
        self.amount = -self.amount;
        self
    }
}

impl Neg for &'_ Money {
    type Output = Money;

    #[inline]
    fn neg(self) -> Self::Output {
        self.derive(-self.amount)
    }
}

impl Add<&'_ Money> for &'_ Money {
    type Output = Money;

    #[inline(always)]
    fn add(self, other: &Money) -> Self::Output {
        match self.checked_add(other) {
            Some(sum) => sum,
            None => panic!("Addition overflowed"),
        }
    }
}

impl Sub<&'_ Money> for &'_ Money {
    type Output = Money;

    #[inline(always)]
    fn sub(self, other: &Money) -> Self::Output {
        match self.checked_sub(other) {
            Some(diff) => diff,
            None => panic!("Subtraction overflowed"),
        }
    }
}

macro_rules! impl_arith {
    ($op: ident { $method: ident }) => {
        impl $op for Money {
            type Output = Money;

            #[inline(always)]
            fn $method(self, other: Self) -> Self::Output {
                (&self).$method(&other)
            }
        }

        impl $op<&'_ Money> for Money {
            type Output = Money;

            #[inline(always)]
            fn $method(self, other: &Money) -> Self::Output {
                (&self).$method(other)
            }
        }

        impl $op<Money> for &'_ Money {
            type Output = Money;

            #[inline(always)]
            fn $method(self, other: Money) -> Self::Output {
                self.$method(&other)
            }
        }
    };
}

impl_arith!(Add { add });
impl_arith!(Sub { sub });

macro_rules! impl_arith_assign {
    ($op: ident { $method: ident } $base: ident { $base_method: ident }) => {
        impl $op for Money {
            #[inline(always)]
            fn $method(&mut self, other: Money) {
                let result = $base::$base_method(&*self, &other);
                *self = result;
            }
        }

        impl $op<&'_ Money> for Money {
            #[inline(always)]
            fn $method(&mut self, other: &Money) {
                let result = $base::$base_method(&*self, other);
                *self = result;
            }
        }
    };
}

impl_arith_assign!(AddAssign { add_assign } Add { add });
impl_arith_assign!(SubAssign { sub_assign } Sub { sub });

impl Sum for Money {
    /// Sums from the left; the result takes the currency of the first value.
    #[inline]
    fn sum<I: Iterator<Item = Self>>(mut iter: I) -> Self {
        match iter.next() {
            Some(first) => iter.fold(first, Add::add),
            None => Money::default(),
        }
    }
}

impl<'a> Sum<&'a Money> for Money {
    #[inline]
    fn sum<I: Iterator<Item = &'a Money>>(mut iter: I) -> Self {
        match iter.next() {
            Some(first) => iter.fold(first.clone(), Add::add),
            None => Money::default(),
        }
    }
}
