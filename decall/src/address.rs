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

//! SS58 address re-encoding.
//!
//! The same 32 public-key bytes produce a different address string under
//! every network prefix. Re-encoding lets one decoded call be displayed
//! correctly for whichever network it targets.

use crate::Error;
use sp_core::crypto::{AccountId32, Ss58Codec};

/// SS58-encode an account id under the given network prefix.
pub fn encode_with_prefix(account: &AccountId32, prefix: u16) -> String {
	account.to_ss58check_with_version(prefix.into())
}

/// Re-encode an SS58 address string under a different network prefix.
///
/// The embedded checksum of the source address is verified while decoding;
/// a mismatch is [`Error::InvalidAddress`]. Re-encoding under the address's
/// own prefix returns the input unchanged.
pub fn reencode(address: &str, prefix: u16) -> Result<String, Error> {
	let (account, _) =
		AccountId32::from_ss58check_with_version(address).map_err(Error::InvalidAddress)?;
	Ok(encode_with_prefix(&account, prefix))
}
