//! Client for the Pwned Passwords range API.
//!
//! Answers "how many breaches has this secret appeared in?" without the
//! secret, or even its full digest, ever leaving the process. Each check is
//! one linear pass through three stages:
//!
//! 1. **Digest** — SHA-1 the secret into a 40-character uppercase hex
//!    [`Fingerprint`].
//! 2. **Range query** — send only the first 5 characters of the fingerprint
//!    to the range endpoint, which answers with every known suffix sharing
//!    that prefix.
//! 3. **Match** — scan the returned [`CandidateBatch`] locally for the
//!    retained 35-character suffix and read off its breach count.
//!
//! Because a 5-character prefix is shared by hundreds of fingerprints, the
//! service can never tell which one was actually checked (k-anonymity).
//! Checks are stateless and idempotent; nothing is cached or persisted, and
//! no request is ever retried by this crate.
//!
//! # Example
//!
//! ```no_run
//! use pwncheck_client::RangeClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), pwncheck_client::Error> {
//!     let client = RangeClient::default();
//!     match client.check("password123").await? {
//!         0 => println!("not in any known breach"),
//!         n => println!("seen in {n} breaches, pick something else"),
//!     }
//!     Ok(())
//! }
//! ```

pub mod batch;
pub mod digest;
pub mod error;
pub mod range;

pub use batch::{CandidateBatch, MalformedRecord, Record};
pub use digest::{FINGERPRINT_LEN, Fingerprint, InvalidFingerprint, PREFIX_LEN, SUFFIX_LEN};
pub use error::Error;
pub use range::{DEFAULT_BASE_URL, RangeClient};
