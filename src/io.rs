use std::cell::RefCell;
use std::io::{Result as IoResult, Write};
use std::rc::Rc;

/// Bytes collected by a [`MemWriter`], readable while the writer is owned elsewhere.
pub type SharedBuffer = Rc<RefCell<Vec<u8>>>;

/// Memory-backed output sink.
///
/// Hand the writer to [`Cli::set_output`](crate::Cli::set_output) and keep the
/// handle from [`MemWriter::with_handle`] to read what was written.
#[derive(Debug, Default)]
pub struct MemWriter {
    buf: SharedBuffer,
}

impl MemWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return inner buffer so caller can read collected bytes.
    pub fn into_inner(self) -> SharedBuffer {
        self.buf
    }

    /// Convenience: create writer and return (writer, handle).
    pub fn with_handle() -> (Self, SharedBuffer) {
        let mw = MemWriter::new();
        let rc = mw.buf.clone();
        (mw, rc)
    }

    /// Everything written so far, lossily decoded.
    pub fn contents(buf: &SharedBuffer) -> String {
        String::from_utf8_lossy(&buf.borrow()).into_owned()
    }
}

impl Write for MemWriter {
    fn write(&mut self, data: &[u8]) -> IoResult<usize> {
        self.buf.borrow_mut().extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> IoResult<()> {
        Ok(())
    }
}
