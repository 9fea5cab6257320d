//! UUID value generators.

use rand::Rng;
use sync_core::Value;
use uuid::{Builder, Uuid};

/// Generate a random UUID v4 using the provided RNG.
pub fn generate_uuid_v4<R: Rng>(rng: &mut R) -> Value {
    let bytes: [u8; 16] = rng.random();
    Value::Uuid(Builder::from_random_bytes(bytes).into_uuid())
}

/// Generate a time-based UUID v1 for the current instant.
///
/// Only the clock varies between calls; the node id is supplied by the
/// caller and the clock sequence comes from the uuid crate's shared context.
pub fn generate_time_uuid(node_id: &[u8; 6]) -> Value {
    Value::Uuid(Uuid::now_v1(node_id))
}

/// Pick a random node id for [`generate_time_uuid`].
///
/// The multicast bit is set, marking the id as not derived from a MAC address.
pub fn random_node_id<R: Rng>(rng: &mut R) -> [u8; 6] {
    let mut node_id: [u8; 6] = rng.random();
    node_id[0] |= 0x01;
    node_id
}
