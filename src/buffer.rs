use crate::error::ShellError;

/// Grows `buffer` in fixed `increment` steps until it can hold `needed` items.
///
/// Reservation is fallible so that exhaustion surfaces as [`ShellError::Allocation`]
/// instead of an abort inside the allocator.
pub fn grow<T>(buffer: &mut Vec<T>, needed: usize, increment: usize) -> Result<(), ShellError> {
    while buffer.capacity() < needed {
        let additional = buffer.capacity() + increment - buffer.len();
        buffer
            .try_reserve_exact(additional)
            .map_err(|_| return ShellError::Allocation)?;

        log::trace!("buffer grown to {} slots", buffer.capacity());
    }

    return Ok(());
}
