//! City id generation.
//!
//! Ids are ULIDs from one process-wide monotonic generator: ids created
//! later always sort after ids created earlier, even within the same
//! millisecond. Cursor pagination relies on that ordering.

use once_cell::sync::Lazy;
use parking_lot::Mutex;
use ulid::Generator;

static GENERATOR: Lazy<Mutex<Generator>> = Lazy::new(|| Mutex::new(Generator::new()));

/// Generate the next city id.
pub fn next_city_id() -> String {
    let mut generator = GENERATOR.lock();
    loop {
        match generator.generate() {
            Ok(id) => return id.to_string(),
            // Random component overflowed within this millisecond; wait for the next one.
            Err(_) => std::thread::yield_now(),
        }
    }
}
