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

use crate::decoder::MetadataError;
use crate::SpecVersion;
use codec::Error as CodecError;
use sp_core::crypto::PublicError;
use thiserror::Error;

/// Why a call could not be decoded.
///
/// Every variant is a value returned to the caller; none of them are fatal
/// to the hosting process. A caller with nothing better to do displays the
/// raw bytes instead.
#[derive(Error, Debug)]
pub enum Error {
	#[error("no metadata registered for spec version {0}")]
	MissingSpec(SpecVersion),
	#[error("unknown method: {0}")]
	UnknownMethod(#[from] MetadataError),
	#[error("call data ends at byte {offset}, {needed} more byte(s) expected")]
	Truncated { offset: usize, needed: usize },
	#[error("malformed value at byte {offset}: {source}")]
	Codec { offset: usize, source: CodecError },
	#[error("{0} byte(s) left over after the last argument")]
	UnusedData(usize),
	#[error("cannot decode values of type `{0}`")]
	UnsupportedType(String),
	#[error("invalid address encoding: {0:?}")]
	InvalidAddress(PublicError),
}
