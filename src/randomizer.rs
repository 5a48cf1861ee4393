use rand::rngs::{OsRng, StdRng};
use rand::{RngCore, SeedableRng};

#[cfg(feature = "use_parking_lot")]
use parking_lot::Mutex;
#[cfg(not(feature = "use_parking_lot"))]
use std::sync::Mutex;

/// Randomness capability used for identifier generation.
///
/// Implementations are assumed infallible. Safety for concurrent use is a
/// precondition on whoever injects the capability, not something this crate
/// can guarantee.
pub trait Randomizer {
    /// Fill `buf` entirely with random bytes.
    fn fill(&self, buf: &mut [u8]);
}

/// Generate a new 8-byte span id from the given randomness capability.
///
/// No validation is performed; all-zero output is legal at generation time
/// (all-zero rejection is a decode-side rule of the traceparent codec).
pub fn new_span_id<R: Randomizer + ?Sized>(rand: &R) -> [u8; 8] {
    let mut sid = [0u8; 8];
    rand.fill(&mut sid);
    sid
}

/// Generate a new 16-byte trace id from the given randomness capability.
pub fn new_trace_id<R: Randomizer + ?Sized>(rand: &R) -> [u8; 16] {
    let mut tid = [0u8; 16];
    rand.fill(&mut tid);
    tid
}

/// Generate a new 8-byte span id directly from OS entropy.
///
/// For callers with no injected randomness and no configuration step. Fails
/// only if the entropy source cannot supply bytes.
pub fn generate_span_id() -> Result<[u8; 8], rand::Error> {
    let mut sid = [0u8; 8];
    OsRng.try_fill_bytes(&mut sid)?;
    Ok(sid)
}

/// Generate a new 16-byte trace id directly from OS entropy.
///
/// See [`generate_span_id`].
pub fn generate_trace_id() -> Result<[u8; 16], rand::Error> {
    let mut tid = [0u8; 16];
    OsRng.try_fill_bytes(&mut tid)?;
    Ok(tid)
}

/// Default [`Randomizer`]: a CSPRNG seeded from the OS entropy source.
///
/// Each instance owns its own rng; there is no process-global state.
#[derive(Debug)]
pub struct EntropyRandomizer {
    // filling requires &mut on the rng so just mutex-wrap it
    rng: Mutex<StdRng>,
}

impl EntropyRandomizer {
    /// Seed a new randomizer from OS entropy.
    pub fn new() -> Result<Self, rand::Error> {
        let rng = StdRng::from_rng(OsRng)?;
        Ok(EntropyRandomizer {
            rng: Mutex::new(rng),
        })
    }
}

impl Randomizer for EntropyRandomizer {
    fn fill(&self, buf: &mut [u8]) {
        // succeed or die. failure is unrecoverable (mutex poisoned)
        #[cfg(not(feature = "use_parking_lot"))]
        let mut rng = self.rng.lock().unwrap();
        #[cfg(feature = "use_parking_lot")]
        let mut rng = self.rng.lock();

        rng.fill_bytes(buf);
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::sync::atomic::{AtomicU8, Ordering};

    struct StepRandomizer(AtomicU8);

    impl Randomizer for StepRandomizer {
        fn fill(&self, buf: &mut [u8]) {
            for b in buf.iter_mut() {
                *b = self.0.fetch_add(1, Ordering::SeqCst);
            }
        }
    }

    #[test]
    fn ids_fill_from_capability() {
        let rand = StepRandomizer(AtomicU8::new(0));
        assert_eq!(new_span_id(&rand), [0, 1, 2, 3, 4, 5, 6, 7]);
        let tid = new_trace_id(&rand);
        assert_eq!(tid[0], 8);
        assert_eq!(tid[15], 23);
    }

    #[test]
    fn all_zero_ids_are_legal_at_generation() {
        struct ZeroRandomizer;
        impl Randomizer for ZeroRandomizer {
            fn fill(&self, _: &mut [u8]) {}
        }
        assert_eq!(new_span_id(&ZeroRandomizer), [0u8; 8]);
        assert_eq!(new_trace_id(&ZeroRandomizer), [0u8; 16]);
    }

    #[test]
    fn entropy_randomizer_yields_distinct_ids() {
        let rand = EntropyRandomizer::new().unwrap();
        assert_ne!(new_trace_id(&rand), new_trace_id(&rand));
    }

    #[test]
    fn standalone_generation_uses_os_entropy() {
        let a = generate_trace_id().unwrap();
        let b = generate_trace_id().unwrap();
        assert_ne!(a, b);
        generate_span_id().unwrap();
    }
}
