//! Seal blob codec and the RISC Zero verification backend.
//!
//! A seal is the transportable proof artifact submitted to the team
//! assembly orchestrator. Encoded as `magic(4 bytes) || bincode(v2 serde
//! payload)` around a receipt.

use anyhow::{anyhow, Context, Result};
use bincode::{
    config::standard,
    serde::{decode_from_slice, encode_to_vec},
};
use risc0_zkvm::sha::{Digest, Impl as Sha256Impl, Sha256};
use risc0_zkvm::Receipt;
use team_assets_core::{ProgramId, SealVerifier};
use team_assets_types::error::Error;

/// Magic bytes used by seal blob encoders.
pub const SEAL_MAGIC: [u8; 4] = *b"TASL";

/// Encodes a receipt as a seal blob.
pub fn encode_seal_blob(receipt: &Receipt) -> Result<Vec<u8>> {
    let payload = encode_to_vec(receipt, standard()).context("failed to encode receipt")?;
    let mut blob = Vec::with_capacity(SEAL_MAGIC.len() + payload.len());
    blob.extend_from_slice(&SEAL_MAGIC);
    blob.extend_from_slice(&payload);
    Ok(blob)
}

/// Decodes a seal blob produced by [`encode_seal_blob`].
pub fn decode_seal_blob(blob: &[u8]) -> Result<Receipt> {
    if blob.len() < SEAL_MAGIC.len() {
        return Err(anyhow!("seal blob too short"));
    }
    if blob[..SEAL_MAGIC.len()] != SEAL_MAGIC {
        return Err(anyhow!("invalid seal blob magic"));
    }

    let payload = &blob[SEAL_MAGIC.len()..];
    let (receipt, read_bytes): (Receipt, usize) =
        decode_from_slice(payload, standard()).context("failed to decode seal payload")?;
    if read_bytes != payload.len() {
        return Err(anyhow!(
            "seal payload has trailing bytes: decoded {read_bytes}, payload {}",
            payload.len()
        ));
    }
    Ok(receipt)
}

/// Seal verifier backed by RISC Zero receipt verification.
///
/// Accepts a seal iff it decodes to a receipt that verifies against the
/// given program id and whose journal hashes to the submitted digest. Every
/// failure maps to `ProofRejected`; the caller cannot distinguish a
/// malformed blob from a sound proof of the wrong journal, and does not need
/// to.
#[derive(Debug, Clone, Copy, Default)]
pub struct Risc0SealVerifier;

impl SealVerifier for Risc0SealVerifier {
    fn verify(
        &self,
        seal: &[u8],
        program_id: &ProgramId,
        digest: &[u8; 32],
    ) -> core::result::Result<(), Error> {
        let receipt =
            decode_seal_blob(seal).map_err(|err| Error::ProofRejected(format!("{err:#}")))?;

        receipt
            .verify(Digest::from(*program_id))
            .map_err(|err| Error::ProofRejected(format!("receipt verification failed: {err}")))?;

        let journal_digest: [u8; 32] = Sha256Impl::hash_bytes(&receipt.journal.bytes)
            .as_bytes()
            .try_into()
            .unwrap();
        log::debug!("seal journal digest: {}", hex::encode(journal_digest));

        if journal_digest != *digest {
            return Err(Error::ProofRejected(format!(
                "journal digest mismatch: proven {}, submitted {}",
                hex::encode(journal_digest),
                hex::encode(digest)
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use risc0_zkvm::{FakeReceipt, InnerReceipt, ReceiptClaim};

    fn sample_receipt() -> Receipt {
        let journal = vec![7u8; 16];
        let claim = ReceiptClaim::ok(Digest::from([1u8; 32]), journal.clone());
        Receipt::new(InnerReceipt::Fake(FakeReceipt::new(claim)), journal)
    }

    #[test]
    fn seal_blob_round_trip() -> Result<()> {
        let receipt = sample_receipt();
        let blob = encode_seal_blob(&receipt)?;
        let decoded = decode_seal_blob(&blob)?;
        assert_eq!(decoded.journal, receipt.journal);
        Ok(())
    }

    #[test]
    fn rejects_short_blob() {
        assert!(decode_seal_blob(b"TA").is_err());
    }

    #[test]
    fn rejects_bad_magic() {
        let receipt = sample_receipt();
        let mut blob = encode_seal_blob(&receipt).unwrap();
        blob[0] ^= 0xff;
        assert!(decode_seal_blob(&blob).is_err());
    }

    #[test]
    fn rejects_trailing_bytes() {
        let receipt = sample_receipt();
        let mut blob = encode_seal_blob(&receipt).unwrap();
        blob.push(0);
        assert!(decode_seal_blob(&blob).is_err());
    }

    #[test]
    fn undecodable_seal_is_proof_rejected() {
        let verifier = Risc0SealVerifier;
        let result = verifier.verify(b"not a seal", &[0u8; 32], &[0u8; 32]);
        assert!(matches!(result, Err(Error::ProofRejected(_))));
    }
}
