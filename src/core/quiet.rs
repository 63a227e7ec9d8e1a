// src/core/quiet.rs
//
// Runs a closure with the panic hook pointed at the log file instead of
// stderr. Wraps the places that recover from panics themselves (scraper
// calls, model calls) so a recovered panic doesn't print a report per item.

use std::{
    panic::{self, AssertUnwindSafe, PanicHookInfo},
    sync::Mutex,
};

// One swap at a time, so the hook put back is always the one found.
static HOOK_SWAP: Mutex<()> = Mutex::new(());

fn log_panic(info: &PanicHookInfo<'_>) {
    logd!("Recovered panic: {}", info);
}

/// Run `f` with panic reports going to the log. Panics escaping `f` still
/// propagate, after the previous hook is back in place.
pub fn quietly<R>(f: impl FnOnce() -> R) -> R {
    let _guard = HOOK_SWAP.lock().unwrap_or_else(|e| e.into_inner());
    let prev = panic::take_hook();
    panic::set_hook(Box::new(log_panic));

    let out = panic::catch_unwind(AssertUnwindSafe(f));

    panic::set_hook(prev);
    match out {
        Ok(v) => v,
        Err(payload) => panic::resume_unwind(payload),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::consts::LOG_FILE;

    #[test]
    fn recovered_panic_goes_to_the_log() {
        let caught = quietly(|| panic::catch_unwind(|| -> u8 { panic!("lexicon exploded 7f3a") }));
        assert!(caught.is_err());

        let log = std::fs::read_to_string(LOG_FILE).unwrap();
        assert!(log.contains("Recovered panic") && log.contains("lexicon exploded 7f3a"));
    }

    #[test]
    fn escaping_panic_still_propagates() {
        let r = panic::catch_unwind(|| quietly(|| -> u8 { panic!("not caught inside") }));
        assert!(r.is_err());
        // hook lock is usable again afterwards
        assert_eq!(quietly(|| 3), 3);
    }
}
