// Copyright 2019-2021 Parity Technologies (UK) Ltd.
// This file is part of decall.
//
// decall is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// decall is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with decall.  If not, see <http://www.gnu.org/licenses/>.

//! Render raw integer amounts with a chain's decimals and currency unit.
//!
//! The arithmetic is done on the decimal digit string, not on the integer,
//! so amounts of any magnitude format without overflow.

use std::fmt;

/// A raw amount split into its display parts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrettyBalance {
	pub number: String,
	pub unit: String,
}

impl fmt::Display for PrettyBalance {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{} {}", self.number, self.unit)
	}
}

/// Unsigned integers that can be rendered as a currency amount.
pub trait AsBalance {
	fn pretty_balance(self, decimals: u8, unit: &str) -> PrettyBalance;
}

macro_rules! impl_as_balance {
	($($ty:ty),*) => {
		$(
			impl AsBalance for $ty {
				fn pretty_balance(self, decimals: u8, unit: &str) -> PrettyBalance {
					PrettyBalance {
						number: with_decimal_point(&self.to_string(), decimals),
						unit: unit.to_string(),
					}
				}
			}
		)*
	};
}

impl_as_balance!(u8, u16, u32, u64, u128);

/// Insert a decimal point `decimals` digits from the right of a decimal
/// digit string, left-padding with zeros when the string is shorter. The
/// trailing fractional zero-run is stripped; a fraction that empties takes
/// the point with it.
///
/// `digits` must be the plain base-10 rendering of an unsigned integer.
pub fn with_decimal_point(digits: &str, decimals: u8) -> String {
	let decimals = decimals as usize;
	if decimals == 0 {
		return digits.to_string();
	}
	let padded = if digits.len() <= decimals {
		format!("{}{}", "0".repeat(decimals + 1 - digits.len()), digits)
	} else {
		digits.to_string()
	};
	let (integer, fraction) = padded.split_at(padded.len() - decimals);
	let fraction = fraction.trim_end_matches('0');
	if fraction.is_empty() {
		integer.to_string()
	} else {
		format!("{}.{}", integer, fraction)
	}
}
