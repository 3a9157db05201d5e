pub type Result<T> = std::result::Result<T, crate::error::Error>;

#[macro_export]
macro_rules! verify_arg {
    ($name:expr, $expr:expr) => {{
        let result = $expr;
        $crate::result::verify_arg(result, stringify!($name), stringify!($expr))?;
    }};
}

#[macro_export]
macro_rules! verify_data {
    ($name:expr, $expr:expr) => {{
        let result = $expr;
        $crate::result::verify_data(result, stringify!($name), stringify!($expr))?;
    }};
}

#[inline]
pub fn verify_arg(predicate: bool, name: &str, condition: &str) -> Result<()> {
    if predicate {
        Ok(())
    } else {
        invalid_arg(name, condition)
    }
}

#[inline]
pub fn verify_data(predicate: bool, name: &str, condition: &str) -> Result<()> {
    if predicate {
        Ok(())
    } else {
        invalid_format(name, condition)
    }
}

#[cold]
pub fn invalid_arg(name: &str, condition: &str) -> Result<()> {
    Err(crate::error::ErrorKind::InvalidArgument {
        name: name.to_string(),
        message: condition.to_string(),
    }
    .into())
}

#[cold]
pub fn invalid_format(name: &str, condition: &str) -> Result<()> {
    Err(crate::error::ErrorKind::InvalidFormat {
        element: name.to_string(),
        message: condition.to_string(),
    }
    .into())
}

/// Allocates a zero-filled byte vector of exactly `len` bytes, reporting allocation
/// failure as [`ErrorKind::OutOfMemory`](crate::error::ErrorKind::OutOfMemory) instead
/// of aborting.
pub fn try_alloc_zeroed(len: usize, context: &str) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(len)
        .map_err(|_| crate::error::Error::out_of_memory(context, len))?;
    buf.resize(len, 0);
    Ok(buf)
}

/// Copies `src` into a newly allocated vector, reporting allocation failure
/// as [`ErrorKind::OutOfMemory`](crate::error::ErrorKind::OutOfMemory).
pub fn try_copy_bytes(src: &[u8], context: &str) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(src.len())
        .map_err(|_| crate::error::Error::out_of_memory(context, src.len()))?;
    buf.extend_from_slice(src);
    Ok(buf)
}
