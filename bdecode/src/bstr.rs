use bytes::{Bytes, BytesMut};

/// Owned byte string types that a borrowed value tree can be converted into.
pub trait OwnedBStr: AsRef<[u8]> + Ord + Sized {
    fn from_bytes(bytes: &[u8]) -> Self;

    /// Converts a sub-slice of `buffer` without copying when the type supports it.
    fn from_shared(buffer: &Bytes, bytes: &[u8]) -> Self {
        let _ = buffer;
        Self::from_bytes(bytes)
    }
}

impl OwnedBStr for Bytes {
    fn from_bytes(bytes: &[u8]) -> Self {
        Bytes::copy_from_slice(bytes)
    }

    // `bytes` must be a sub-slice of `buffer`.
    fn from_shared(buffer: &Bytes, bytes: &[u8]) -> Self {
        buffer.slice_ref(bytes)
    }
}

impl OwnedBStr for BytesMut {
    fn from_bytes(bytes: &[u8]) -> Self {
        bytes.into()
    }
}

impl OwnedBStr for Vec<u8> {
    fn from_bytes(bytes: &[u8]) -> Self {
        bytes.into()
    }
}
