//! Scoped escalation of PDF library warnings.
//!
//! lopdf reports recoverable oddities (broken xref entries, unparsable objects, ...) through the `log`
//! facade and carries on. While a [`capture`] is active on the current thread every such warning is
//! collected so the caller can refuse the document instead of writing a silently damaged copy.
//! Outside a capture the records pass through untouched.

use std::cell::RefCell;

use log::{Level, Metadata, Record};

const LIBRARY_TARGET: &str = "lopdf";

thread_local! {
    static CAPTURED: RefCell<Option<Vec<String>>> = const { RefCell::new(None) };
}

/// Whether a record of this level and target counts as a PDF library warning.
pub fn is_library_warning(metadata: &Metadata) -> bool {
    metadata.level() <= Level::Warn && metadata.target().starts_with(LIBRARY_TARGET)
}

/// Hands a log record to the active capture, if any.
pub fn record(record: &Record) {
    if !is_library_warning(record.metadata()) {
        return;
    }
    CAPTURED.with(|captured| {
        if let Some(warnings) = captured.borrow_mut().as_mut() {
            warnings.push(record.args().to_string());
        }
    });
}

/// Restores the enclosing capture slot, also when the closure unwinds.
struct Scope {
    outer: Option<Option<Vec<String>>>,
}

impl Scope {
    fn enter() -> Self {
        let outer = CAPTURED.with(|captured| captured.replace(Some(Vec::new())));
        Scope { outer: Some(outer) }
    }

    fn leave(mut self) -> Vec<String> {
        let outer = self.outer.take().flatten();
        CAPTURED
            .with(|captured| captured.replace(outer))
            .unwrap_or_default()
    }
}

impl Drop for Scope {
    fn drop(&mut self) {
        if let Some(outer) = self.outer.take() {
            CAPTURED.with(|captured| captured.replace(outer));
        }
    }
}

/// Runs `f` and returns its value together with the library warnings logged meanwhile.
pub fn capture<T>(f: impl FnOnce() -> T) -> (T, Vec<String>) {
    let scope = Scope::enter();
    let value = f();
    (value, scope.leave())
}
