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

//! Generalized call metadata for one chain runtime.
//!
//! Schemas enter as plain [`ModuleDescriptor`] values, already parsed from
//! whatever carrier format the caller uses (the `call-view` binary reads
//! them from JSON). [`Metadata::from_modules`] checks them once and builds
//! the index the decoder looks methods up in. After construction nothing
//! here is ever mutated, so one `Metadata` can serve any number of
//! concurrent decodes.

#[cfg(test)]
pub mod test_suite;

use crate::TypeTag;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
	#[error("module {0} not found")]
	ModuleNotFound(String),
	#[error("module index {0} not found")]
	ModuleIndexNotFound(u8),
	#[error("call index {1} not found in module {0}")]
	CallIndexNotFound(String, u8),
	#[error("module index {0} declared more than once")]
	DuplicateModuleIndex(u8),
	#[error("module {0} declared more than once")]
	DuplicateModuleName(String),
	#[error("malformed schema: {0}")]
	Schema(String),
}

/// One module of a chain schema, as supplied by the caller.
///
/// `index` is the module's position in the runtime call enum and need not
/// be contiguous with its neighbours. Call indices are implicit: a call's
/// index is its position in `calls`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleDescriptor {
	pub name: String,
	pub index: u8,
	pub calls: Vec<CallDescriptor>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallDescriptor {
	pub name: String,
	pub args: Vec<ArgDescriptor>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArgDescriptor {
	pub name: String,
	pub ty: String,
}

/// Metadata struct holding the callable modules of one runtime version,
/// indexed for constant-time lookup by wire index.
#[derive(Clone, Debug, PartialEq)]
pub struct Metadata {
	/// Hashmap of Modules (name -> module-specific metadata)
	modules: HashMap<String, Arc<ModuleMetadata>>,
	/// modules by their index in the call enum
	modules_by_call_index: HashMap<u8, String>,
}

impl TryFrom<Vec<ModuleDescriptor>> for Metadata {
	type Error = Error;
	fn try_from(descriptors: Vec<ModuleDescriptor>) -> Result<Metadata, Self::Error> {
		Metadata::from_modules(descriptors)
	}
}

impl Metadata {
	/// Build the metadata index from caller-supplied descriptors.
	///
	/// Argument type tags are parsed here, once; unrecognized tags are kept
	/// verbatim and only surface if a decoded call uses them.
	pub fn from_modules(descriptors: Vec<ModuleDescriptor>) -> Result<Self, Error> {
		let mut modules = HashMap::new();
		let mut modules_by_call_index = HashMap::new();

		for descriptor in descriptors {
			if modules_by_call_index.insert(descriptor.index, descriptor.name.clone()).is_some() {
				return Err(Error::DuplicateModuleIndex(descriptor.index));
			}
			let calls = descriptor
				.calls
				.into_iter()
				.enumerate()
				.map(|(index, call)| CallMetadata {
					name: call.name,
					index: index as u8,
					arguments: call
						.args
						.into_iter()
						.map(|arg| CallArgMetadata { name: arg.name, ty: arg.ty.as_str().into() })
						.collect(),
				})
				.collect();
			let module = ModuleMetadata { index: descriptor.index, name: descriptor.name, calls };
			let name = module.name.clone();
			if modules.insert(name.clone(), Arc::new(module)).is_some() {
				return Err(Error::DuplicateModuleName(name));
			}
		}

		Ok(Self { modules, modules_by_call_index })
	}

	/// Parse a JSON array of module descriptors and build the index.
	pub fn from_json(json: &str) -> Result<Self, Error> {
		let descriptors: Vec<ModuleDescriptor> =
			serde_json::from_str(json).map_err(|e| Error::Schema(e.to_string()))?;
		Self::from_modules(descriptors)
	}

	/// returns an iterator over all Modules
	pub fn modules(&self) -> impl Iterator<Item = &ModuleMetadata> {
		self.modules.values().map(|v| v.as_ref())
	}

	/// returns a module from its name
	pub fn module<S>(&self, name: S) -> Result<Arc<ModuleMetadata>, Error>
	where
		S: ToString,
	{
		let name = name.to_string();
		self.modules.get(&name).cloned().ok_or(Error::ModuleNotFound(name))
	}

	/// Check if a module exists
	pub fn module_exists<S>(&self, name: S) -> bool
	where
		S: ToString,
	{
		self.modules.contains_key(&name.to_string())
	}

	/// get a module by its index in the call enum
	pub fn module_by_index(&self, module_index: u8) -> Result<&ModuleMetadata, Error> {
		let name = self
			.modules_by_call_index
			.get(&module_index)
			.ok_or(Error::ModuleIndexNotFound(module_index))?;
		self.modules
			.get(name)
			.map(|m| m.as_ref())
			.ok_or_else(|| Error::ModuleNotFound(name.to_string()))
	}

	/// print out a human readable description of the metadata
	pub fn pretty(&self) -> String {
		let mut modules: Vec<&ModuleMetadata> = self.modules().collect();
		modules.sort_by_key(|m| m.index);
		let mut string = String::new();
		for module in modules {
			string.push_str(&format!("{} ({})\n", module.name, module.index));
			for call in module.calls() {
				string.push_str(&format!("  c  {}\n", call));
			}
		}
		string
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct ModuleMetadata {
	/// index of the module within the runtime call enum
	index: u8,
	/// name of the module
	name: String,
	/// calls in the module, ordered by call index
	calls: Vec<CallMetadata>,
}

impl ModuleMetadata {
	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn index(&self) -> u8 {
		self.index
	}

	/// iterator over all possible calls in this module
	pub fn calls(&self) -> impl Iterator<Item = &CallMetadata> {
		self.calls.iter()
	}

	/// get a call by its index in the module
	pub fn call(&self, index: u8) -> Result<&CallMetadata, Error> {
		self.calls
			.get(index as usize)
			.ok_or_else(|| Error::CallIndexNotFound(self.name.clone(), index))
	}
}

/// Metadata for one callable method.
#[derive(Clone, Debug, PartialEq)]
pub struct CallMetadata {
	/// Name of the function of the call
	name: String,
	/// encoded byte index of call
	index: u8,
	/// Arguments that the function accepts
	arguments: Vec<CallArgMetadata>,
}

impl CallMetadata {
	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn index(&self) -> u8 {
		self.index
	}

	/// The ordered argument descriptors for this call.
	pub fn arguments(&self) -> &[CallArgMetadata] {
		&self.arguments
	}
}

impl fmt::Display for CallMetadata {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let args: Vec<String> = self.arguments.iter().map(|a| a.to_string()).collect();
		write!(f, "fn {}({})", self.name, args.join(", "))
	}
}

/// Metadata for Function Arguments to a Call
#[derive(Clone, Debug, PartialEq)]
pub struct CallArgMetadata {
	/// name of argument
	pub name: String,
	/// declared type of the argument
	pub ty: TypeTag,
}

impl fmt::Display for CallArgMetadata {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}: {}", self.name, self.ty)
	}
}
