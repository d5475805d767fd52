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

//! Functions creating data to mock the `Metadata` struct

use super::*;

fn arg(name: &str, ty: &str) -> ArgDescriptor {
	ArgDescriptor { name: name.to_string(), ty: ty.to_string() }
}

fn call(name: &str, args: Vec<ArgDescriptor>) -> CallDescriptor {
	CallDescriptor { name: name.to_string(), args }
}

pub fn test_modules() -> Vec<ModuleDescriptor> {
	vec![
		ModuleDescriptor {
			name: "system".to_string(),
			index: 0,
			calls: vec![call("remark", vec![arg("remark", "Bytes")])],
		},
		ModuleDescriptor {
			name: "timestamp".to_string(),
			index: 2,
			calls: vec![call("set", vec![arg("now", "Compact<u64>")])],
		},
		ModuleDescriptor {
			name: "balances".to_string(),
			index: 5,
			calls: vec![
				call("transfer", vec![arg("dest", "Address"), arg("value", "Compact<Balance>")]),
				call(
					"set_balance",
					vec![
						arg("who", "Address"),
						arg("new_free", "Balance"),
						arg("new_reserved", "Balance"),
					],
				),
			],
		},
		ModuleDescriptor {
			name: "sudo".to_string(),
			index: 7,
			calls: vec![call("sudo", vec![arg("proposal", "Proposal")])],
		},
	]
}

pub fn test_metadata() -> Metadata {
	Metadata::from_modules(test_modules()).expect("mock modules are well formed; qed")
}
