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

//! Decode a hex call against a chain registry and print it.
//!
//! The registry file decouples schema selection from the decoder: one JSON
//! object per chain, carrying its SS58 prefix, balance units, spec version
//! and module descriptors. When decoding fails the raw payload is printed
//! instead, with a warning; an unreadable call is the caller's problem to
//! present, never a crash.

use anyhow::{anyhow, Context, Error};
use argh::FromArgs;
use decall::decoder::{Chain, Decoder, Metadata, ModuleDescriptor};
use decall::{ChainUnits, SpecVersion};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::PathBuf;

#[derive(FromArgs, PartialEq, Debug)]
/// Decode chain calls into human-readable form.
struct App {
	#[argh(option, short = 'r')]
	/// path to the chain registry JSON file.
	registry: PathBuf,
	#[argh(option, short = 'c', default = "String::from(\"kusama\")")]
	/// chain whose metadata the call is decoded against.
	chain: String,
	#[argh(option, short = 'p')]
	/// override the SS58 address prefix used for display.
	prefix: Option<u16>,
	#[argh(switch, short = 'j')]
	/// print the decoded call as JSON.
	json: bool,
	#[argh(switch, short = 'l')]
	/// list the registered methods for the chain and exit.
	list: bool,
	#[argh(positional)]
	/// hex-encoded call data, with or without 0x prefix.
	call: Option<String>,
}

/// One chain's entry in the registry file.
#[derive(Deserialize, Debug)]
struct RegistryEntry {
	/// Defaults to the chain's conventional prefix when omitted.
	ss58_prefix: Option<u16>,
	decimals: u8,
	unit: String,
	spec_version: SpecVersion,
	modules: Vec<ModuleDescriptor>,
}

type Registry = HashMap<String, RegistryEntry>;

fn main() -> Result<(), Error> {
	pretty_env_logger::init();
	let app: App = argh::from_env();

	let registry: Registry = serde_json::from_str(
		&std::fs::read_to_string(&app.registry)
			.with_context(|| format!("could not read registry {}", app.registry.display()))?,
	)
	.context("malformed chain registry")?;
	let entry = registry
		.get(&app.chain)
		.ok_or_else(|| anyhow!("chain `{}` not present in the registry", app.chain))?;

	let chain: Chain = app.chain.parse()?;
	let metadata = Metadata::from_modules(entry.modules.clone())
		.with_context(|| format!("bad metadata for chain `{}`", app.chain))?;
	let mut decoder =
		Decoder::new(chain).with_units(ChainUnits::new(entry.decimals, &entry.unit));
	decoder.register_version(entry.spec_version, metadata);

	if app.list {
		let meta = decoder
			.get_version_metadata(entry.spec_version)
			.expect("metadata was just registered; qed");
		print!("{}", meta.pretty());
		return Ok(());
	}

	let call = app.call.ok_or_else(|| anyhow!("no call data given; pass hex or use --list"))?;
	let data = hex::decode(call.trim_start_matches("0x")).context("call data is not valid hex")?;
	let prefix = app
		.prefix
		.or(entry.ss58_prefix)
		.unwrap_or_else(|| decoder.chain().ss58_prefix());

	match decoder.decode_call(entry.spec_version, &data, prefix) {
		Ok(decoded) => {
			if app.json {
				println!("{}", serde_json::to_string_pretty(&decoded)?);
			} else {
				println!("{}", decoded);
			}
		}
		Err(e) => {
			log::warn!("could not decode the call with the registered metadata: {}", e);
			log::warn!(
				"signing content you cannot read is inherently unsafe; showing raw bytes instead"
			);
			println!("0x{}", hex::encode(&data));
		}
	}
	Ok(())
}
