//! Formatter warnings with colored terminal output.
//!
//! The parser is deliberately lenient: malformed markup never fails the
//! pipeline, it only degrades to a partial tree. The conditions it tolerates
//! (unterminated comments, unclosed elements, stray characters inside tags)
//! are still worth surfacing to whoever is driving the tool, so they are
//! reported here — on stderr, outside the public contract.
//!
//! Warnings are deduplicated so that re-running the pipeline on every
//! keystroke does not spam the same message.

use std::collections::HashSet;
use std::sync::Mutex;

/// ANSI color codes for terminal output
const YELLOW: &str = "\x1b[33m";
const RESET: &str = "\x1b[0m";

/// Global set of warnings we've already printed (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

/// Warn about a tolerated markup defect (prints once per unique message)
///
/// # Example
/// ```ignore
/// warn_once("Parser", "unterminated comment at position 12");
/// ```
///
/// # Panics
/// Panics if the global warning set mutex is poisoned.
pub fn warn_once(component: &str, message: &str) {
    let key = format!("[{component}] {message}");
    let should_print = WARNED
        .lock()
        .unwrap()
        .get_or_insert_with(HashSet::new)
        .insert(key);

    if should_print {
        eprintln!("{YELLOW}[prettymark {component}] ⚠ {message}{RESET}");
    }
}

/// Clear all recorded warnings (call before formatting a new input)
///
/// # Panics
/// Panics if the global warning set mutex is poisoned.
pub fn clear_warnings() {
    let mut guard = WARNED.lock().unwrap();
    if let Some(set) = guard.as_mut() {
        set.clear();
    }
}
