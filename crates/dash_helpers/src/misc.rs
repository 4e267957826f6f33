//! Miscellaneous helpers.

use std::fmt::Write as _;

use dash_foundation::{Result, Value};
use rand::RngCore;

use crate::module::HelperModule;

/// Generates a random version 4 UUID from the thread-local generator.
#[must_use]
pub fn uuid() -> String {
    uuid_from_rng(&mut rand::thread_rng())
}

/// Generates a version 4 UUID from the given generator.
pub fn uuid_from_rng<R: RngCore + ?Sized>(rng: &mut R) -> String {
    let mut bytes = [0u8; 16];
    rng.fill_bytes(&mut bytes);
    bytes[6] = (bytes[6] & 0x0f) | 0x40;
    bytes[8] = (bytes[8] & 0x3f) | 0x80;

    let mut out = String::with_capacity(36);
    for (i, b) in bytes.iter().enumerate() {
        if matches!(i, 4 | 6 | 8 | 10) {
            out.push('-');
        }
        let _ = write!(out, "{b:02x}");
    }
    out
}

/// Returns the `Misc` helper module.
#[must_use]
pub fn module() -> HelperModule {
    HelperModule::new("Misc").with_function("uuid", native_uuid)
}

/// Misc: uuid (arguments are ignored)
fn native_uuid(_args: &[Value]) -> Result<Value> {
    Ok(uuid().into())
}
