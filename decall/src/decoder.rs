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

//! A Decoder turning SCALE-encoded call bytes into display-ready calls
//! with the metadata registered for the runtime version in use.

mod call;
pub mod metadata;

pub use self::call::{CallArgument, DecodedCall};
pub use self::metadata::{
	ArgDescriptor, CallArgMetadata, CallDescriptor, CallMetadata, Error as MetadataError,
	Metadata, ModuleDescriptor, ModuleMetadata,
};

use crate::call_types::CallValue;
use crate::{ChainUnits, Error, SpecVersion, TypeTag};
use codec::{Compact, Decode};
use sp_core::crypto::AccountId32;
use sp_core::H256;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Chain {
	Polkadot,
	Kusama,
	Westend,
	Rococo,
	Custom(String),
}

impl Chain {
	/// The network's conventional SS58 address prefix, used when the caller
	/// does not pick one explicitly.
	pub fn ss58_prefix(&self) -> u16 {
		match self {
			Chain::Polkadot => 0,
			Chain::Kusama => 2,
			// generic substrate prefix
			Chain::Westend | Chain::Rococo | Chain::Custom(_) => 42,
		}
	}
}

impl fmt::Display for Chain {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Chain::Polkadot => write!(f, "polkadot"),
			Chain::Kusama => write!(f, "kusama"),
			Chain::Westend => write!(f, "westend"),
			Chain::Rococo => write!(f, "rococo"),
			Chain::Custom(s) => write!(f, "{}", s),
		}
	}
}

impl FromStr for Chain {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.to_lowercase().as_str() {
			"polkadot" | "dot" => Ok(Chain::Polkadot),
			"kusama" | "ksm" => Ok(Chain::Kusama),
			"westend" | "wnd" => Ok(Chain::Westend),
			"rococo" => Ok(Chain::Rococo),
			_ => Ok(Chain::Custom(s.to_string())),
		}
	}
}

/// Decoder for chain calls.
///
/// Holds the metadata registered per runtime spec version and the chain's
/// session-wide display configuration. Decoding borrows `self` immutably,
/// so one decoder can serve concurrent decodes without coordination.
#[derive(Debug, Clone)]
pub struct Decoder {
	versions: HashMap<SpecVersion, Metadata>,
	chain: Chain,
	units: Option<ChainUnits>,
}

/// Byte cursor over one encoded call. Each decode owns its own.
struct DecodeState<'a> {
	data: &'a [u8],
	cursor: usize,
}

impl<'a> DecodeState<'a> {
	fn new(data: &'a [u8]) -> Self {
		Self { data, cursor: 0 }
	}

	fn remaining(&self) -> usize {
		self.data.len() - self.cursor
	}

	/// Current value at cursor (data\[cursor\]).
	/// Increment the cursor by 1.
	fn byte(&mut self) -> Result<u8, Error> {
		let slice = self.take(1)?;
		Ok(slice[0])
	}

	fn take(&mut self, len: usize) -> Result<&'a [u8], Error> {
		if self.remaining() < len {
			return Err(Error::Truncated { offset: self.cursor, needed: len - self.remaining() });
		}
		let slice = &self.data[self.cursor..self.cursor + len];
		self.cursor += len;
		Ok(slice)
	}

	/// Decode a value, automatically incrementing `cursor`
	/// the correct number of bytes.
	fn decode<T: Decode>(&mut self) -> Result<T, Error> {
		let input = &mut &self.data[self.cursor..];
		let before = input.len();
		let ty = T::decode(input).map_err(|source| Error::Codec { offset: self.cursor, source })?;
		self.cursor += before - input.len();
		Ok(ty)
	}
}

impl Decoder {
	/// Create a new Decoder for the given chain.
	pub fn new(chain: Chain) -> Self {
		Self { versions: HashMap::default(), chain, units: None }
	}

	/// Set the session-wide balance display configuration. Without it,
	/// balance arguments fall back to plain numeric form.
	pub fn with_units(mut self, units: ChainUnits) -> Self {
		self.units = Some(units);
		self
	}

	pub fn chain(&self) -> &Chain {
		&self.chain
	}

	/// Check if a metadata version has already been registered
	pub fn has_version(&self, version: &SpecVersion) -> bool {
		self.versions.contains_key(version)
	}

	/// Insert a Metadata with Version attached
	/// If version exists, its corresponding metadata will be updated
	pub fn register_version(&mut self, version: SpecVersion, metadata: Metadata) {
		self.versions.insert(version, metadata);
	}

	/// internal api to get metadata from runtime version.
	pub fn get_version_metadata(&self, version: SpecVersion) -> Option<&Metadata> {
		self.versions.get(&version)
	}

	/// Decode one encoded call against the metadata registered for `spec`.
	///
	/// `prefix` selects the SS58 network any address arguments are encoded
	/// under. All-or-nothing: either every declared argument decodes and the
	/// bytes are fully consumed, or an [`Error`] describes the first
	/// mismatch and nothing is returned.
	pub fn decode_call(
		&self,
		spec: SpecVersion,
		data: &[u8],
		prefix: u16,
	) -> Result<DecodedCall, Error> {
		let meta = self.versions.get(&spec).ok_or(Error::MissingSpec(spec))?;
		let mut state = DecodeState::new(data);

		let module_index = state.byte()?;
		let call_index = state.byte()?;
		let module = meta.module_by_index(module_index)?;
		let call = module.call(call_index)?;
		log::trace!("Decoding {}.{} for chain {}, spec {}", module.name(), call.name(), self.chain, spec);

		let mut args = Vec::with_capacity(call.arguments().len());
		for arg in call.arguments() {
			log::trace!("Decoding {} at byte {}", arg, state.cursor);
			let value = self.decode_value(&mut state, &arg.ty)?;
			let rendered = match value.render(prefix, self.units.as_ref()) {
				Ok(rendered) => rendered,
				Err(e) => {
					log::debug!("{} for `{}`, falling back to canonical form", e, arg.name);
					value.to_string()
				}
			};
			args.push(CallArgument { name: arg.name.clone(), value: rendered });
		}

		if state.remaining() > 0 {
			return Err(Error::UnusedData(state.remaining()));
		}
		Ok(DecodedCall::new(module.name(), call.name(), args))
	}

	/// Decode the next value from the byte cursor per its declared type.
	fn decode_value(&self, state: &mut DecodeState, ty: &TypeTag) -> Result<CallValue, Error> {
		let value = match ty {
			TypeTag::Bool => CallValue::Bool(state.decode()?),
			TypeTag::U8 => CallValue::U8(state.decode()?),
			TypeTag::U16 => CallValue::U16(state.decode()?),
			TypeTag::U32 => CallValue::U32(state.decode()?),
			TypeTag::U64 => CallValue::U64(state.decode()?),
			TypeTag::U128 => CallValue::U128(state.decode()?),
			TypeTag::Compact(inner) => match inner.as_ref() {
				TypeTag::U8 => CallValue::U8(state.decode::<Compact<u8>>()?.0),
				TypeTag::U16 => CallValue::U16(state.decode::<Compact<u16>>()?.0),
				TypeTag::U32 => CallValue::U32(state.decode::<Compact<u32>>()?.0),
				TypeTag::U64 => CallValue::U64(state.decode::<Compact<u64>>()?.0),
				TypeTag::U128 => CallValue::U128(state.decode::<Compact<u128>>()?.0),
				TypeTag::Balance => CallValue::Balance(state.decode::<Compact<u128>>()?.0),
				other => return Err(Error::UnsupportedType(format!("Compact<{}>", other))),
			},
			TypeTag::Balance => CallValue::Balance(state.decode()?),
			TypeTag::Address => {
				let raw: [u8; 32] =
					state.take(32)?.try_into().expect("take returned 32 bytes; qed");
				CallValue::Address(AccountId32::from(raw))
			}
			TypeTag::Hash => CallValue::Hash(H256::from_slice(state.take(32)?)),
			TypeTag::Bytes => CallValue::Bytes(state.decode()?),
			TypeTag::Other(name) => return Err(Error::UnsupportedType(name.clone())),
		};
		Ok(value)
	}
}
