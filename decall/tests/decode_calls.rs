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

use codec::{Compact, Encode};
use decall::address;
use decall::decoder::{
	ArgDescriptor, CallDescriptor, Chain, Decoder, Metadata, ModuleDescriptor,
};
use decall::{ChainUnits, Error};
use sp_core::crypto::AccountId32;

const SPEC: u32 = 1030;
const KUSAMA_PREFIX: u16 = 2;

// Alice's well-known development key.
const ALICE_RAW: [u8; 32] = [
	0xd4, 0x35, 0x93, 0xc7, 0x15, 0xfd, 0xd3, 0x1c, 0x61, 0x14, 0x1a, 0xbd, 0x04, 0xa9, 0x9f,
	0xd6, 0x82, 0x2c, 0x85, 0x58, 0x85, 0x4c, 0xcd, 0xe3, 0x9a, 0x56, 0x84, 0xe7, 0xa5, 0x6d,
	0xa2, 0x7d,
];

fn arg(name: &str, ty: &str) -> ArgDescriptor {
	ArgDescriptor { name: name.to_string(), ty: ty.to_string() }
}

fn call(name: &str, args: Vec<ArgDescriptor>) -> CallDescriptor {
	CallDescriptor { name: name.to_string(), args }
}

fn metadata() -> Metadata {
	Metadata::from_modules(vec![
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
	])
	.expect("test modules are well formed")
}

fn decoder() -> Decoder {
	let mut decoder = Decoder::new(Chain::Kusama).with_units(ChainUnits::new(12, "KSM"));
	decoder.register_version(SPEC, metadata());
	decoder
}

fn transfer_call(value: u128) -> Vec<u8> {
	let mut data = vec![5u8, 0u8];
	data.extend(ALICE_RAW);
	data.extend(Compact(value).encode());
	data
}

#[test]
fn balance_transfer_decodes_to_display_form() {
	let data = transfer_call(5_000_000_000_000);
	let decoded = decoder().decode_call(SPEC, &data, KUSAMA_PREFIX).unwrap();

	assert_eq!(decoded.method(), "balances.transfer");
	assert_eq!(decoded.args().len(), 2);
	assert_eq!(decoded.args()[0].name, "dest");
	assert_eq!(
		decoded.args()[0].value,
		address::encode_with_prefix(&AccountId32::from(ALICE_RAW), KUSAMA_PREFIX)
	);
	assert_eq!(decoded.args()[1].name, "value");
	assert_eq!(decoded.args()[1].value, "5 KSM");
}

#[test]
fn address_display_follows_the_requested_prefix() {
	let data = transfer_call(5_000_000_000_000);
	let decoder = decoder();
	let on_kusama = decoder.decode_call(SPEC, &data, KUSAMA_PREFIX).unwrap();
	let on_polkadot = decoder.decode_call(SPEC, &data, 0).unwrap();

	// same payload bytes, different textual address
	assert_ne!(on_kusama.args()[0].value, on_polkadot.args()[0].value);
	assert_eq!(on_kusama.args()[1].value, on_polkadot.args()[1].value);
	assert_eq!(
		address::reencode(&on_kusama.args()[0].value, 0).unwrap(),
		on_polkadot.args()[0].value
	);
}

#[test]
fn decoding_is_deterministic() {
	let data = transfer_call(1_500_000_000_000);
	let decoder = decoder();
	let first = decoder.decode_call(SPEC, &data, KUSAMA_PREFIX).unwrap();
	let second = decoder.decode_call(SPEC, &data, KUSAMA_PREFIX).unwrap();
	assert_eq!(first, second);
	assert_eq!(first.args()[1].value, "1.5 KSM");
}

#[test]
fn fixed_width_balances_use_the_session_units() {
	let mut data = vec![5u8, 1u8];
	data.extend(ALICE_RAW);
	data.extend(1_500_000_000_000u128.encode());
	data.extend(0u128.encode());
	let decoded = decoder().decode_call(SPEC, &data, KUSAMA_PREFIX).unwrap();

	assert_eq!(decoded.method(), "balances.set_balance");
	assert_eq!(decoded.args()[1].value, "1.5 KSM");
	assert_eq!(decoded.args()[2].value, "0 KSM");
}

#[test]
fn balances_degrade_to_plain_numbers_without_units() {
	let mut decoder = Decoder::new(Chain::Kusama);
	decoder.register_version(SPEC, metadata());
	let data = transfer_call(5_000_000_000_000);
	let decoded = decoder.decode_call(SPEC, &data, KUSAMA_PREFIX).unwrap();
	assert_eq!(decoded.args()[1].value, "5000000000000");
}

#[test]
fn remark_bytes_render_as_hex() {
	let mut data = vec![0u8, 0u8];
	data.extend(vec![0xde_u8, 0xad, 0xbe, 0xef].encode());
	let decoded = decoder().decode_call(SPEC, &data, KUSAMA_PREFIX).unwrap();
	assert_eq!(decoded.method(), "system.remark");
	assert_eq!(decoded.args()[0].value, "0xdeadbeef");
}

#[test]
fn unknown_module_index_fails() {
	let err = decoder().decode_call(SPEC, &[255u8, 255u8], KUSAMA_PREFIX).unwrap_err();
	assert!(matches!(err, Error::UnknownMethod(_)));
}

#[test]
fn unknown_call_index_fails() {
	let err = decoder().decode_call(SPEC, &[5u8, 9u8], KUSAMA_PREFIX).unwrap_err();
	assert!(matches!(err, Error::UnknownMethod(_)));
}

#[test]
fn truncation_fails_at_every_boundary() {
	let decoder = decoder();
	let full = transfer_call(5_000_000_000_000);

	// nothing, module index only, cut inside the address, cut inside the compact
	for len in [0, 1, 2, 2 + 20, full.len() - 1] {
		let err = decoder.decode_call(SPEC, &full[..len], KUSAMA_PREFIX).unwrap_err();
		assert!(
			matches!(err, Error::Truncated { .. } | Error::Codec { .. }),
			"unexpected error for length {}: {}",
			len,
			err
		);
	}
}

#[test]
fn leftover_bytes_fail() {
	let mut data = transfer_call(5_000_000_000_000);
	data.push(0);
	let err = decoder().decode_call(SPEC, &data, KUSAMA_PREFIX).unwrap_err();
	assert!(matches!(err, Error::UnusedData(1)));
}

#[test]
fn unsupported_argument_type_fails() {
	let err = decoder().decode_call(SPEC, &[7u8, 0u8, 1, 2, 3], KUSAMA_PREFIX).unwrap_err();
	assert!(matches!(err, Error::UnsupportedType(ty) if ty == "Proposal"));
}
