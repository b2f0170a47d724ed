//! Shared fixtures for unit tests.

use std::cell::{Cell, RefCell};
use std::io::Write;
use std::rc::Rc;

/// In-memory writer that can be told to reject its next writes.
///
/// Clones share the same buffer, so a test can keep one handle while the
/// code under test owns another.
#[derive(Clone, Default)]
pub struct FlakyWriter {
    bytes: Rc<RefCell<Vec<u8>>>,
    failures: Rc<Cell<u32>>,
}

impl FlakyWriter {
    /// Make the next `n` write calls fail with a disk-full style error.
    pub fn fail_next(&self, n: u32) {
        self.failures.set(n);
    }

    pub fn contents(&self) -> String {
        String::from_utf8(self.bytes.borrow().clone()).unwrap()
    }
}

impl Write for FlakyWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let remaining = self.failures.get();
        if remaining > 0 {
            self.failures.set(remaining - 1);
            return Err(std::io::Error::other("no space left on device"));
        }
        self.bytes.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
