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

//! Decoded argument values and their display rules.

use crate::{address, balance::AsBalance, ChainUnits};
use sp_core::crypto::{AccountId32, Ss58Codec};
use sp_core::H256;
use std::fmt;

/// A single argument value decoded from call data.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CallValue {
	Bool(bool),
	U8(u8),
	U16(u16),
	U32(u32),
	U64(u64),
	U128(u128),
	/// A currency amount, displayed with the session units when available.
	Balance(u128),
	/// An account id, displayed as an SS58 address.
	Address(AccountId32),
	Hash(H256),
	Bytes(Vec<u8>),
}

/// A display rule that could not be applied under the current session
/// configuration. Not a decode failure: the caller degrades that one value
/// to its canonical [`fmt::Display`] form and carries on.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DisplayError {
	#[error("no units configured for balance display")]
	UnitsNotSet,
}

impl CallValue {
	/// Display-ready form of the value under the session configuration:
	/// balances with decimals and unit, addresses under the given SS58
	/// prefix, everything else its canonical form.
	pub fn render(&self, prefix: u16, units: Option<&ChainUnits>) -> Result<String, DisplayError> {
		match self {
			CallValue::Balance(v) => {
				let units = units.ok_or(DisplayError::UnitsNotSet)?;
				Ok(v.pretty_balance(units.decimals, &units.unit).to_string())
			}
			CallValue::Address(account) => Ok(address::encode_with_prefix(account, prefix)),
			other => Ok(other.to_string()),
		}
	}
}

impl fmt::Display for CallValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			CallValue::Bool(v) => write!(f, "{}", v),
			CallValue::U8(v) => write!(f, "{}", v),
			CallValue::U16(v) => write!(f, "{}", v),
			CallValue::U32(v) => write!(f, "{}", v),
			CallValue::U64(v) => write!(f, "{}", v),
			CallValue::U128(v) => write!(f, "{}", v),
			CallValue::Balance(v) => write!(f, "{}", v),
			CallValue::Address(account) => write!(f, "{}", account.to_ss58check()),
			CallValue::Hash(h) => write!(f, "0x{}", hex::encode(h.as_bytes())),
			CallValue::Bytes(b) => write!(f, "0x{}", hex::encode(b)),
		}
	}
}
