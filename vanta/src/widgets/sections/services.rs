use std::time::Duration;

use rand::Rng;

use super::model::{Verdict, VerificationReport};

pub(crate) const VERIFICATION_DELAY: Duration = Duration::from_millis(2000);
pub(crate) const SCAN_DELAY: Duration = Duration::from_millis(3000);
pub(crate) const REFRESH_DELAY: Duration = Duration::from_millis(1500);

const CONFIDENCE_FLOOR: f64 = 85.0;
const CONFIDENCE_SPAN: f64 = 15.0;
const MIN_SOURCES: u32 = 3;
const MAX_SOURCES: u32 = 7;

/// Simulated credibility analysis.
pub(crate) async fn run_verification() -> VerificationReport {
    tokio::time::sleep(VERIFICATION_DELAY).await;
    let mut rng = rand::rng();
    mock_report(&mut rng)
}

/// Simulated protection scan.
pub(crate) async fn run_scan() {
    tokio::time::sleep(SCAN_DELAY).await;
}

/// Simulated analytics refresh.
pub(crate) async fn run_refresh() {
    tokio::time::sleep(REFRESH_DELAY).await;
}

pub(crate) fn mock_report<R: Rng + ?Sized>(rng: &mut R) -> VerificationReport {
    VerificationReport {
        score: rng.random::<f64>(),
        confidence: CONFIDENCE_FLOOR + rng.random::<f64>() * CONFIDENCE_SPAN,
        sources: rng.random_range(MIN_SOURCES..=MAX_SOURCES),
    }
}

/// Map a credibility score to its verdict. Both thresholds are exclusive.
pub(crate) fn verdict(score: f64) -> Verdict {
    if score > 0.8 {
        Verdict::HighlyCredible
    } else if score > 0.5 {
        Verdict::NeedsVerification
    } else {
        Verdict::PotentiallyFalse
    }
}
