/// ACM Engine: Canonical Case Fingerprint
///
/// Deterministic canonical serialization + SHA-256 hashing of a case.
///
/// Rules:
///   - engine_version first
///   - Case fields in fixed order
///   - Machines sorted by (available_day, price, resell_value, daily_profit)
///   - Compact UTF-8 JSON, integers only
///
/// The maximum profit does not depend on offer order, so two cases listing
/// the same offers differently share a fingerprint.

use serde_json::{Map, Value};
use sha2::{Digest, Sha256};

use crate::domain::{Case, MachineOffer};
use crate::ENGINE_VERSION;

/// Canonical serialization of a case to UTF-8 JSON bytes.
pub fn canonical_serialize(case: &Case, machines: &[MachineOffer]) -> Vec<u8> {
    build_canonical_value(case, machines).to_string().into_bytes()
}

/// SHA-256 of the canonical serialization. Lowercase hex string.
pub fn canonical_hash(case: &Case, machines: &[MachineOffer]) -> String {
    let bytes = canonical_serialize(case, machines);
    Sha256::digest(&bytes)
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect::<String>()
}

/// Field order: engine_version, starting_cash, horizon_days, machines.
fn build_canonical_value(case: &Case, machines: &[MachineOffer]) -> Value {
    let mut sorted = machines.to_vec();
    sorted.sort();

    let machine_list: Vec<Value> = sorted
        .iter()
        .map(|m| {
            let mut map = Map::new();
            map.insert("available_day".to_string(), Value::Number(m.available_day.into()));
            map.insert("price".to_string(), Value::Number(m.price.into()));
            map.insert("resell_value".to_string(), Value::Number(m.resell_value.into()));
            map.insert("daily_profit".to_string(), Value::Number(m.daily_profit.into()));
            Value::Object(map)
        })
        .collect();

    let mut root = Map::new();
    root.insert(
        "engine_version".to_string(),
        Value::Number(i64::from(ENGINE_VERSION).into()),
    );
    root.insert("starting_cash".to_string(), Value::Number(case.starting_cash.into()));
    root.insert("horizon_days".to_string(), Value::Number(case.horizon_days.into()));
    root.insert("machines".to_string(), Value::Array(machine_list));

    Value::Object(root)
}
