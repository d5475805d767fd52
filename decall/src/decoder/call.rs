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

//! The decoded call handed back to the rendering layer.

use serde::Serialize;
use std::fmt;

/// One decoded argument, display-ready.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CallArgument {
	pub name: String,
	pub value: String,
}

impl fmt::Display for CallArgument {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}: {}", self.name, self.value)
	}
}

/// A fully decoded call: the qualified method plus its arguments, in the
/// order the metadata declares them. Immutable once produced; the argument
/// list always has exactly one entry per declared argument.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DecodedCall {
	module: String,
	call: String,
	args: Vec<CallArgument>,
}

impl DecodedCall {
	pub fn new(module: &str, call: &str, args: Vec<CallArgument>) -> Self {
		Self { module: module.to_string(), call: call.to_string(), args }
	}

	/// The qualified `module.call` identifier, e.g. `balances.transfer`.
	pub fn method(&self) -> String {
		format!("{}.{}", self.module, self.call)
	}

	pub fn module(&self) -> &str {
		&self.module
	}

	pub fn call(&self) -> &str {
		&self.call
	}

	pub fn args(&self) -> &[CallArgument] {
		&self.args
	}
}

impl fmt::Display for DecodedCall {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.method())?;
		for arg in &self.args {
			write!(f, "\n  {}", arg)?;
		}
		Ok(())
	}
}
