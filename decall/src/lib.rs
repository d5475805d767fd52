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

//! Decode chain calls into a human-readable form using chain metadata.
//!
//! A call arrives as an opaque SCALE-encoded byte string: one byte of module
//! index, one byte of call index, then the tightly packed argument values.
//! The [`Decoder`](decoder::Decoder) resolves the indices against registered
//! [`Metadata`](decoder::Metadata) and walks the argument descriptors,
//! consuming one value per declared type tag. Balances are rendered with the
//! chain's decimals and currency unit, account ids are re-encoded to SS58
//! text under a caller-chosen network prefix, and everything else gets its
//! canonical string form.
//!
//! Decoding is all-or-nothing: any structural mismatch between the bytes and
//! the metadata surfaces as a single [`Error`] and no partial result escapes.
//! Callers are expected to treat every error as non-fatal and fall back to
//! displaying the raw bytes, typically with a warning that signing content
//! that cannot be read is unsafe.
//!
//! Metadata enters as plain descriptor structs (see
//! [`ModuleDescriptor`](decoder::ModuleDescriptor)); how a schema is chosen
//! for a chain is the caller's concern. The `call-view` binary in this
//! workspace shows the intended shape: a JSON registry keyed by chain name,
//! loaded at startup, one `Decoder` per chain session.

#![forbid(unsafe_code)]

pub mod address;
pub mod balance;
pub mod call_types;
pub mod decoder;
mod error;

pub use error::Error;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Spec Version type defined in the runtime of a chain.
pub type SpecVersion = u32;

/// Chain-wide balance display configuration: the decimal scale and currency
/// unit raw amounts are rendered with. Set once per chain session on the
/// [`Decoder`](decoder::Decoder), never through process-wide defaults.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainUnits {
	pub decimals: u8,
	pub unit: String,
}

impl ChainUnits {
	pub fn new(decimals: u8, unit: &str) -> Self {
		Self { decimals, unit: unit.to_string() }
	}
}

/// Declared type of a call argument, parsed from the tag string carried in
/// the metadata.
///
/// Parsing never fails; a tag the decoder has no encoding rules for is kept
/// as [`TypeTag::Other`] and only reported if a call actually uses it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TypeTag {
	Bool,
	U8,
	U16,
	U32,
	U64,
	U128,
	/// Compact (variable-length) encoding of the inner tag.
	Compact(Box<TypeTag>),
	/// A currency amount, `u128` on the wire.
	Balance,
	/// A 32-byte account id, rendered as an SS58 address.
	Address,
	/// A 256-bit hash.
	Hash,
	/// SCALE `Vec<u8>`, rendered as hex.
	Bytes,
	/// A tag with no known encoding. Decoding a value of this type fails.
	Other(String),
}

impl From<&str> for TypeTag {
	fn from(s: &str) -> TypeTag {
		let s = s.trim();
		if let Some(inner) = s.strip_prefix("Compact<").and_then(|rest| rest.strip_suffix('>')) {
			return TypeTag::Compact(Box::new(inner.into()));
		}
		match s {
			"bool" => TypeTag::Bool,
			"u8" => TypeTag::U8,
			"u16" => TypeTag::U16,
			"u32" => TypeTag::U32,
			"u64" => TypeTag::U64,
			"u128" => TypeTag::U128,
			"Balance" | "T::Balance" | "BalanceOf<T>" | "BalanceOf<T, I>" => TypeTag::Balance,
			"Address" | "AccountId" | "AccountId32" | "T::AccountId" => TypeTag::Address,
			"Hash" | "T::Hash" | "H256" => TypeTag::Hash,
			"Bytes" | "Vec<u8>" => TypeTag::Bytes,
			_ => TypeTag::Other(s.to_string()),
		}
	}
}

impl fmt::Display for TypeTag {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			TypeTag::Bool => write!(f, "bool"),
			TypeTag::U8 => write!(f, "u8"),
			TypeTag::U16 => write!(f, "u16"),
			TypeTag::U32 => write!(f, "u32"),
			TypeTag::U64 => write!(f, "u64"),
			TypeTag::U128 => write!(f, "u128"),
			TypeTag::Compact(inner) => write!(f, "Compact<{}>", inner),
			TypeTag::Balance => write!(f, "Balance"),
			TypeTag::Address => write!(f, "Address"),
			TypeTag::Hash => write!(f, "Hash"),
			TypeTag::Bytes => write!(f, "Bytes"),
			TypeTag::Other(s) => write!(f, "{}", s),
		}
	}
}
