use crate::Error;

/// Source of the random bytes used for serial numbers, fingerprints and placeholder public keys.
/// Drawing may fail, in which case generation of the certificate is abandoned.
pub trait RandomSource {
    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error>;
}

/// Draws from the operating system's cryptographically secure random number generator.
#[derive(Clone, Copy, Debug, Default)]
pub struct OsRandomSource;

impl RandomSource for OsRandomSource {
    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        use rand::RngCore;
        rand::rngs::OsRng.try_fill_bytes(dest)?;
        Ok(())
    }
}

/// Draws a fresh buffer of N random bytes.
pub fn random_bytes<const N: usize>(random_source: &mut dyn RandomSource) -> Result<[u8; N], Error> {
    let mut buffer = [0u8; N];
    random_source.fill_bytes(&mut buffer)?;
    Ok(buffer)
}
