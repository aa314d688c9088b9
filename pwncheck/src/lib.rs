//! Batch driving and reporting for the `pwncheck` binary.

use futures::stream::{self, StreamExt};
use pwncheck_client::{Error, RangeClient};

/// The per-secret verdict line.
pub fn finding_line(secret: &str, count: u64) -> String {
    if count > 0 {
        format!("{secret} was found {count} times...you should probably change your password.")
    } else {
        format!("{secret} was NOT found, carry on!")
    }
}

/// The per-secret failure line. Names the secret so a long run stays
/// attributable.
pub fn failure_line(secret: &str, error: &Error) -> String {
    format!("could not check {secret}: {error}")
}

/// Checks every secret, printing verdicts in input order, and returns how
/// many checks failed.
///
/// Each secret's pipeline is independent, so a failed check is reported on
/// stderr and the run moves on to the next secret. At most `concurrency`
/// lookups are in flight at once; 1 gives the strictly sequential behavior
/// of the original tool.
pub async fn check_all(client: &RangeClient, secrets: &[String], concurrency: usize) -> usize {
    let mut failures = 0;
    let mut verdicts = stream::iter(secrets)
        .map(|secret| async move { (secret, client.check(secret).await) })
        .buffered(concurrency.max(1));

    while let Some((secret, verdict)) = verdicts.next().await {
        match verdict {
            Ok(count) => println!("{}", finding_line(secret, count)),
            Err(error) => {
                eprintln!("{}", failure_line(secret, &error));
                failures += 1;
            }
        }
    }

    failures
}
